// ABOUTME: Integration tests for macronutrient energy prediction and proportions
// ABOUTME: Validates subtype clamping, unit scaling, memoized proportions and config factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrivec::config::{EngineConfig, EnergyConfig};
use nutrivec::vector::{FoodNutrientValue, FoodNutrientVector, MutableFoodNutrientVector};
use nutrivec::{
    energy_components, energy_proportions, predicted_energy, EnergyCalculator, Nutrient,
    NutrientError, Unit,
};

const EPS: f64 = 1e-9;

fn grams(nutrient: Nutrient, amount: f64) -> FoodNutrientValue {
    FoodNutrientValue::new(nutrient, amount, Unit::Grams).unwrap()
}

fn macro_food() -> FoodNutrientVector {
    FoodNutrientVector::from_values(
        [
            grams(Nutrient::Carbohydrate, 100.0),
            grams(Nutrient::Fat, 30.0),
            grams(Nutrient::Protein, 40.0),
        ],
        None,
    )
}

#[test]
fn test_macro_scenario_components() {
    let components = energy_components(&*macro_food(), Unit::Kilojoules).unwrap();

    assert!((components[&Nutrient::Protein] - 680.0).abs() < EPS);
    assert!((components[&Nutrient::Fat] - 1110.0).abs() < EPS);
    assert!((components[&Nutrient::Carbohydrate] - 1700.0).abs() < EPS);
    for nutrient in [
        Nutrient::SaturatedFat,
        Nutrient::MonounsaturatedFat,
        Nutrient::PolyunsaturatedFat,
        Nutrient::Sugar,
        Nutrient::Starch,
        Nutrient::Fibre,
        Nutrient::Alcohol,
    ] {
        assert!(components[&nutrient].abs() < EPS, "{nutrient} should be zero");
    }
    assert_eq!(components.len(), 10);
}

#[test]
fn test_macro_scenario_total_and_proportion() {
    let food = macro_food();
    let total = predicted_energy(&*food, Unit::Kilojoules).unwrap();
    assert!((total - 3490.0).abs() < EPS);

    assert!((food.energy_proportion(Nutrient::Protein) - 0.1948).abs() < 1e-4);
    assert!((food.energy_proportion(Nutrient::Protein) - 680.0 / 3490.0).abs() < EPS);
}

#[test]
fn test_recorded_energy_is_ignored() {
    let food = FoodNutrientVector::from_values(
        [
            grams(Nutrient::Protein, 10.0),
            FoodNutrientValue::new(Nutrient::Energy, 9999.0, Unit::Kilojoules).unwrap(),
        ],
        None,
    );
    let total = predicted_energy(&*food, Unit::Kilojoules).unwrap();
    assert!((total - 170.0).abs() < EPS);
}

#[test]
fn test_fat_clamped_to_subtype_sum() {
    let food = FoodNutrientVector::from_values(
        [
            grams(Nutrient::Fat, 10.0),
            grams(Nutrient::SaturatedFat, 4.0),
            grams(Nutrient::MonounsaturatedFat, 4.0),
            grams(Nutrient::PolyunsaturatedFat, 4.0),
        ],
        None,
    );
    let components = energy_components(&*food, Unit::Kilojoules).unwrap();
    assert!((components[&Nutrient::Fat] - 12.0 * 37.0).abs() < EPS);
    assert!((components[&Nutrient::SaturatedFat] - 4.0 * 37.0).abs() < EPS);
}

#[test]
fn test_carbohydrate_clamped_to_sugar_and_starch() {
    let food = FoodNutrientVector::from_values(
        [
            grams(Nutrient::Sugar, 6.0),
            grams(Nutrient::Starch, 5.0),
        ],
        None,
    );
    let components = energy_components(&*food, Unit::Kilojoules).unwrap();
    assert!((components[&Nutrient::Carbohydrate] - 11.0 * 17.0).abs() < EPS);

    let larger = FoodNutrientVector::from_values(
        [
            grams(Nutrient::Carbohydrate, 20.0),
            grams(Nutrient::Sugar, 6.0),
        ],
        None,
    );
    let components = energy_components(&*larger, Unit::Kilojoules).unwrap();
    assert!((components[&Nutrient::Carbohydrate] - 20.0 * 17.0).abs() < EPS);
}

#[test]
fn test_components_convert_milligrams() {
    let food = FoodNutrientVector::from_values(
        [FoodNutrientValue::new(Nutrient::Protein, 2500.0, Unit::Milligrams).unwrap()],
        None,
    );
    let components = energy_components(&*food, Unit::Kilojoules).unwrap();
    assert!((components[&Nutrient::Protein] - 2.5 * 17.0).abs() < EPS);
}

#[test]
fn test_kilocalorie_output() {
    let kcal = predicted_energy(&*macro_food(), Unit::Kilocalories).unwrap();
    assert!((kcal - 3490.0 / 4.184).abs() < 1e-6);
}

#[test]
fn test_non_energy_unit_rejected() {
    let err = energy_proportions(&*macro_food(), Unit::Cups).unwrap_err();
    assert_eq!(err, NutrientError::incompatible(Nutrient::Energy, Unit::Cups));
}

#[test]
fn test_proportions_sum_to_one() {
    let food = FoodNutrientVector::from_values(
        [
            grams(Nutrient::Protein, 7.0),
            grams(Nutrient::Fat, 3.0),
            grams(Nutrient::Carbohydrate, 50.0),
            grams(Nutrient::Fibre, 4.0),
            grams(Nutrient::Alcohol, 2.0),
        ],
        None,
    );
    let proportions = energy_proportions(&*food, Unit::Kilocalories).unwrap();
    let sum: f64 = [
        Nutrient::Protein,
        Nutrient::Fat,
        Nutrient::Carbohydrate,
        Nutrient::Fibre,
    ]
    .iter()
    .map(|n| proportions[n])
    .sum();
    assert!((sum - 1.0).abs() < EPS);
    assert!(proportions[&Nutrient::Alcohol] > 0.0);
}

#[test]
fn test_proportions_zero_without_energy() {
    let food = FoodNutrientVector::from_values(
        [FoodNutrientValue::new(Nutrient::Sodium, 300.0, Unit::Milligrams).unwrap()],
        None,
    );
    let proportions = energy_proportions(&*food, Unit::Kilojoules).unwrap();
    assert!(proportions.values().all(|p| p.abs() < f64::EPSILON));
    assert!(food.energy_proportion(Nutrient::Protein).abs() < f64::EPSILON);
}

#[test]
fn test_energy_proportion_outside_component_set() {
    let food = macro_food();
    assert!(food.energy_proportion(Nutrient::Sodium).abs() < f64::EPSILON);
    assert!(food.energy_proportion(Nutrient::Energy).abs() < f64::EPSILON);
    assert!(food.energy_proportion(Nutrient::Omega3Fat).abs() < f64::EPSILON);
}

#[test]
fn test_memoized_proportions_match_pure_function() {
    let food = macro_food();
    let first = food.energy_proportions().clone();
    let second = food.energy_proportions();
    assert_eq!(&first, second);

    let pure = energy_proportions(&*food, Unit::Kilojoules).unwrap();
    for (nutrient, share) in &pure {
        assert!((share - first[nutrient]).abs() < EPS);
    }
}

#[test]
fn test_mutable_vectors_recompute() {
    let mut builder = MutableFoodNutrientVector::new();
    builder.insert(grams(Nutrient::Protein, 10.0));
    let before = predicted_energy(&*builder, Unit::Kilojoules).unwrap();

    builder.insert(grams(Nutrient::Fat, 10.0));
    let after = predicted_energy(&*builder, Unit::Kilojoules).unwrap();

    assert!((before - 170.0).abs() < EPS);
    assert!((after - 540.0).abs() < EPS);
}

#[test]
fn test_calculator_uses_validated_config() {
    let mut draft = EngineConfig::<false>::default();
    draft.energy_mut().protein_kj_per_g = 16.7;
    let config = draft.validate().unwrap();

    let calculator = EnergyCalculator::new(&config);
    assert!((calculator.factors().protein_kj_per_g - 16.7).abs() < EPS);

    let food = FoodNutrientVector::from_values([grams(Nutrient::Protein, 10.0)], None);
    let total = calculator.predicted_energy(&*food, Unit::Kilojoules).unwrap();
    assert!((total - 167.0).abs() < EPS);

    assert_eq!(*EnergyCalculator::default().factors(), EnergyConfig::default());
}
