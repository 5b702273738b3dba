// ABOUTME: Integration tests for food portions and meal totals
// ABOUTME: Builds meals from per-100g foods eaten in mass and volume portions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrivec::vector::{FoodNutrientValue, FoodNutrientVector};
use nutrivec::{meal_nutrients, FoodPortion, Nutrient, Quantity, Unit};

const EPS: f64 = 1e-9;

fn per_100g(protein: f64, fat: f64, density: Option<f64>) -> FoodNutrientVector {
    FoodNutrientVector::from_values(
        [
            FoodNutrientValue::quantity(Quantity::grams(100.0)),
            FoodNutrientValue::new(Nutrient::Protein, protein, Unit::Grams).unwrap(),
            FoodNutrientValue::new(Nutrient::Fat, fat, Unit::Grams).unwrap(),
        ],
        density,
    )
}

fn amount(vector: &FoodNutrientVector, nutrient: Nutrient) -> f64 {
    vector.amount_of(nutrient, None).unwrap().unwrap()
}

#[test]
fn test_portion_nutrient_data() {
    let portion = FoodPortion::new(per_100g(20.0, 4.0, None), Quantity::grams(150.0));
    let data = portion.nutrient_data().unwrap();
    assert!((amount(&data, Nutrient::Protein) - 30.0).abs() < EPS);
    assert_eq!(data.quantity(), Some(Quantity::grams(150.0)));
}

#[test]
fn test_meal_sums_portions() {
    let chicken = FoodPortion::new(per_100g(31.0, 3.6, None), Quantity::grams(200.0));
    let milk = FoodPortion::new(
        per_100g(3.4, 1.0, Some(1.03)),
        Quantity::new(1.0, Unit::Cups).unwrap(),
    );

    let meal = meal_nutrients(&[chicken, milk]).unwrap();

    // 1 cup = 240 ml = 247.2 g of milk
    let milk_grams = 240.0 * 1.03;
    assert!((amount(&meal, Nutrient::Quantity) - (200.0 + milk_grams)).abs() < 1e-6);
    assert!((amount(&meal, Nutrient::Protein) - (62.0 + 3.4 * milk_grams / 100.0)).abs() < 1e-6);
    assert!(meal.has_complete_data(Nutrient::Quantity));
    assert!(meal.has_complete_data(Nutrient::Protein));
}

#[test]
fn test_volume_portion_without_density_is_incomplete() {
    let soup = FoodPortion::new(per_100g(2.0, 1.0, None), Quantity::millilitres(300.0));
    let meal = meal_nutrients(&[soup]).unwrap();

    assert!((amount(&meal, Nutrient::Quantity) - 300.0).abs() < EPS);
    assert!((amount(&meal, Nutrient::Protein) - 6.0).abs() < EPS);
    assert!(!meal.has_complete_data(Nutrient::Quantity));
}

#[test]
fn test_empty_meal() {
    let meal = meal_nutrients(&[]).unwrap();
    assert_eq!(meal.len(), 1);
    assert_eq!(meal.quantity(), Some(Quantity::grams(0.0)));
}
