// ABOUTME: Food portions and meal totals built from them
// ABOUTME: A portion is a food's nutrient vector plus the quantity actually eaten
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrivec_core::{NutrientResult, Quantity};
use tracing::debug;

use crate::aggregate::sum;
use crate::vector::FoodNutrientVector;

/// A quantity of a particular food
#[derive(Debug, Clone, PartialEq)]
pub struct FoodPortion {
    /// Nutrient data of the food, usually per 100 g
    pub food: FoodNutrientVector,
    /// Amount eaten
    pub quantity: Quantity,
}

impl FoodPortion {
    /// Portion of `food` of the given size
    #[must_use]
    pub const fn new(food: FoodNutrientVector, quantity: Quantity) -> Self {
        Self { food, quantity }
    }

    /// Nutrient data of the food rescaled to this portion
    ///
    /// # Errors
    ///
    /// Propagates rescale errors.
    pub fn nutrient_data(&self) -> NutrientResult<FoodNutrientVector> {
        self.food.rescale_to(self.quantity)
    }
}

/// Total nutrient data of a meal made of `portions`
///
/// # Errors
///
/// Returns the first rescale error among the portions.
pub fn meal_nutrients(portions: &[FoodPortion]) -> NutrientResult<FoodNutrientVector> {
    let scaled = portions
        .iter()
        .map(FoodPortion::nutrient_data)
        .collect::<NutrientResult<Vec<_>>>()?;
    debug!(portions = scaled.len(), "Computing meal nutrients");
    Ok(sum(&scaled))
}
