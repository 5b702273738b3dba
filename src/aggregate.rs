// ABOUTME: Sums food nutrient vectors into a single meal or recipe vector
// ABOUTME: Converts to legacy units, tracks completeness, and guesses missing densities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Aggregation
//!
//! [`sum`] never fails. Every input is converted into the legacy unit table
//! before adding, so the result is expressed in grams for QUANTITY and the
//! legacy unit for every other nutrient. A nutrient is complete in the result
//! only if it is complete in every input.

use nutrivec_core::{Nutrient, ResolvedDensity, Unit, UnitTable};
use tracing::{debug, warn};

use crate::vector::{
    FoodNutrientValue, FoodNutrientVector, MeasurementValue, MutableFoodNutrientVector,
};

/// Sum a sequence of food vectors
///
/// Volume quantities are converted to grams with the input's own density,
/// falling back to 1 g/ml; a guessed density, or an input without any
/// quantity, leaves the summed QUANTITY incomplete. QUANTITY is always
/// present, at 0 g when no input records one. The result has no density.
#[must_use]
pub fn sum<const FROZEN: bool>(vectors: &[FoodNutrientVector<FROZEN>]) -> FoodNutrientVector {
    let table = UnitTable::legacy();
    let mut result = MutableFoodNutrientVector::new();

    let (grams, quantity_complete) = sum_quantity(vectors);
    result.insert(FoodNutrientValue::trusted(
        Nutrient::Quantity,
        grams,
        Unit::Grams,
    ));
    result.set_complete(Nutrient::Quantity, quantity_complete);

    for nutrient in Nutrient::measured() {
        let unit = table.unit_for(nutrient);
        let mut total: Option<f64> = None;
        let mut complete = true;

        for vector in vectors {
            complete &= vector.has_complete_data(nutrient);
            let Some(value) = vector.get(nutrient) else {
                continue;
            };
            match value.amount_in(unit, None) {
                Ok(amount) => *total.get_or_insert(0.0) += amount,
                Err(e) => {
                    warn!(nutrient = %nutrient, error = %e, "Skipping unconvertible value in sum");
                    complete = false;
                }
            }
        }

        if let Some(total) = total {
            result.insert(FoodNutrientValue::trusted(nutrient, total, unit));
            result.set_complete(nutrient, complete);
        }
    }

    debug!(
        inputs = vectors.len(),
        populated = result.len(),
        incomplete = result.incomplete_data_nutrients().len(),
        "Summed nutrient vectors"
    );

    result.freeze()
}

/// Total quantity in grams and whether it is trustworthy
fn sum_quantity<const FROZEN: bool>(vectors: &[FoodNutrientVector<FROZEN>]) -> (f64, bool) {
    let mut total = 0.0;
    let mut complete = true;

    for vector in vectors {
        let Some(quantity) = vector.quantity() else {
            complete = false;
            continue;
        };

        let density = if quantity.unit().is_volume() {
            let resolved = ResolvedDensity::recorded_or_guess(vector.density());
            if resolved.guessed {
                debug!(
                    amount = quantity.amount(),
                    unit = %quantity.unit(),
                    "Guessing density for volume quantity"
                );
                complete = false;
            }
            Some(resolved.grams_per_ml)
        } else {
            None
        };

        match quantity.convert_amount_to(Unit::Grams, density) {
            Ok(grams) => total += grams,
            Err(e) => {
                warn!(error = %e, "Skipping unconvertible quantity in sum");
                complete = false;
            }
        }
    }

    (total, complete)
}
