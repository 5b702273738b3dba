// ABOUTME: Macronutrient energy prediction and per-nutrient energy proportions
// ABOUTME: Clamps fat and carbohydrate totals to at least the sum of their subtypes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Energy Calculator
//!
//! Predicts the energy of a nutrient vector from its macronutrient masses
//! rather than trusting the recorded ENERGY value. Each component is
//! `grams * factor`; missing nutrients contribute zero.
//!
//! Two clamps keep totals consistent with their parts:
//! - `fat >= saturated + monounsaturated + polyunsaturated`
//! - `carbohydrate >= sugar + starch`
//!
//! The predicted total is `protein + fat + carbohydrate + fibre`. Subtype
//! components are reported for display but are already counted inside their
//! parent, and alcohol is reported but left out of the total.

use std::collections::BTreeMap;

use nutrivec_core::{Nutrient, NutrientError, NutrientResult, Unit, UnitType};
use tracing::warn;

use crate::config::{EnergyConfig, EngineConfig};
use crate::vector::{MeasurementValue, NutrientVector};

/// Energy (or energy share) per contributing nutrient
pub type EnergyMap = BTreeMap<Nutrient, f64>;

/// Nutrients that carry an energy component
pub const ENERGY_COMPONENTS: [Nutrient; 10] = [
    Nutrient::Protein,
    Nutrient::Fat,
    Nutrient::SaturatedFat,
    Nutrient::MonounsaturatedFat,
    Nutrient::PolyunsaturatedFat,
    Nutrient::Carbohydrate,
    Nutrient::Sugar,
    Nutrient::Starch,
    Nutrient::Fibre,
    Nutrient::Alcohol,
];

/// Components summed into the predicted total
pub const TOTAL_ENERGY_COMPONENTS: [Nutrient; 4] = [
    Nutrient::Protein,
    Nutrient::Fat,
    Nutrient::Carbohydrate,
    Nutrient::Fibre,
];

/// Energy calculator parameterised by validated energy factors
#[derive(Debug, Clone, Copy, Default)]
pub struct EnergyCalculator {
    factors: EnergyConfig,
}

impl EnergyCalculator {
    /// Calculator using the factors of a validated configuration
    #[must_use]
    pub const fn new(config: &EngineConfig<true>) -> Self {
        Self {
            factors: *config.energy(),
        }
    }

    /// Calculator using the process-wide configuration
    ///
    /// The first call loads [`EngineConfig::global`], so `NUTRIVEC_ENERGY_*`
    /// overrides present at that point apply for the life of the process.
    #[must_use]
    pub fn global() -> Self {
        Self::new(EngineConfig::<true>::global())
    }

    /// Factors in use
    #[must_use]
    pub const fn factors(&self) -> &EnergyConfig {
        &self.factors
    }

    /// Energy contributed by each component nutrient, expressed in `unit`
    ///
    /// # Errors
    ///
    /// Returns `NutrientError::IncompatibleUnit` if `unit` is not an energy unit.
    pub fn components<V: MeasurementValue, const FROZEN: bool>(
        &self,
        vector: &NutrientVector<V, FROZEN>,
        unit: Unit,
    ) -> NutrientResult<EnergyMap> {
        if unit.unit_type() != UnitType::Energy {
            return Err(NutrientError::incompatible(Nutrient::Energy, unit));
        }
        let scale = unit.metric_equivalent();
        Ok(self
            .components_kj(vector)
            .into_iter()
            .map(|(nutrient, kj)| (nutrient, kj / scale))
            .collect())
    }

    /// Share of the predicted total contributed by each component
    ///
    /// Every share is 0.0 when the predicted total is not positive.
    ///
    /// # Errors
    ///
    /// Returns `NutrientError::IncompatibleUnit` if `unit` is not an energy unit.
    pub fn proportions<V: MeasurementValue, const FROZEN: bool>(
        &self,
        vector: &NutrientVector<V, FROZEN>,
        unit: Unit,
    ) -> NutrientResult<EnergyMap> {
        Ok(Self::shares(self.components(vector, unit)?))
    }

    /// Predicted energy from protein, fat, carbohydrate and fibre
    ///
    /// # Errors
    ///
    /// Returns `NutrientError::IncompatibleUnit` if `unit` is not an energy unit.
    pub fn predicted_energy<V: MeasurementValue, const FROZEN: bool>(
        &self,
        vector: &NutrientVector<V, FROZEN>,
        unit: Unit,
    ) -> NutrientResult<f64> {
        Ok(Self::total(&self.components(vector, unit)?))
    }

    /// Proportions computed in kJ; the unit cancels out of every share
    pub(crate) fn proportions_of<V: MeasurementValue, const FROZEN: bool>(
        &self,
        vector: &NutrientVector<V, FROZEN>,
    ) -> EnergyMap {
        Self::shares(self.components_kj(vector))
    }

    fn components_kj<V: MeasurementValue, const FROZEN: bool>(
        &self,
        vector: &NutrientVector<V, FROZEN>,
    ) -> EnergyMap {
        let mut map: EnergyMap = ENERGY_COMPONENTS
            .into_iter()
            .map(|nutrient| (nutrient, grams_of(vector, nutrient) * self.factor(nutrient)))
            .collect();

        let fat_parts = sum_of(
            &map,
            &[
                Nutrient::SaturatedFat,
                Nutrient::MonounsaturatedFat,
                Nutrient::PolyunsaturatedFat,
            ],
        );
        let carb_parts = sum_of(&map, &[Nutrient::Sugar, Nutrient::Starch]);
        clamp_to_parts(&mut map, Nutrient::Fat, fat_parts);
        clamp_to_parts(&mut map, Nutrient::Carbohydrate, carb_parts);

        map
    }

    fn factor(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Protein => self.factors.protein_kj_per_g,
            Nutrient::Fat
            | Nutrient::SaturatedFat
            | Nutrient::MonounsaturatedFat
            | Nutrient::PolyunsaturatedFat => self.factors.fat_kj_per_g,
            Nutrient::Carbohydrate | Nutrient::Sugar | Nutrient::Starch => {
                self.factors.carbohydrate_kj_per_g
            }
            Nutrient::Fibre => self.factors.fibre_kj_per_g,
            Nutrient::Alcohol => self.factors.alcohol_kj_per_g,
            _ => 0.0,
        }
    }

    fn total(components: &EnergyMap) -> f64 {
        sum_of(components, &TOTAL_ENERGY_COMPONENTS)
    }

    fn shares(components: EnergyMap) -> EnergyMap {
        let total = Self::total(&components);
        components
            .into_iter()
            .map(|(nutrient, energy)| {
                let share = if total > 0.0 { energy / total } else { 0.0 };
                (nutrient, share)
            })
            .collect()
    }
}

/// Grams of `nutrient`, 0.0 when absent
///
/// Component nutrients are mass-only (or alcohol with a fixed density), so a
/// conversion failure means a corrupt value; it is logged and counted as zero.
fn grams_of<V: MeasurementValue, const FROZEN: bool>(
    vector: &NutrientVector<V, FROZEN>,
    nutrient: Nutrient,
) -> f64 {
    vector
        .amount_of_or(nutrient, Some(Unit::Grams), 0.0)
        .unwrap_or_else(|e| {
            warn!(nutrient = %nutrient, error = %e, "Ignoring unconvertible energy component");
            0.0
        })
}

fn sum_of(map: &EnergyMap, nutrients: &[Nutrient]) -> f64 {
    nutrients
        .iter()
        .filter_map(|nutrient| map.get(nutrient))
        .sum()
}

fn clamp_to_parts(map: &mut EnergyMap, nutrient: Nutrient, parts: f64) {
    if let Some(total) = map.get_mut(&nutrient) {
        *total = total.max(parts);
    }
}

/// Energy components using the process-wide configuration
///
/// # Errors
///
/// Returns `NutrientError::IncompatibleUnit` if `unit` is not an energy unit.
pub fn energy_components<V: MeasurementValue, const FROZEN: bool>(
    vector: &NutrientVector<V, FROZEN>,
    unit: Unit,
) -> NutrientResult<EnergyMap> {
    EnergyCalculator::global().components(vector, unit)
}

/// Energy proportions using the process-wide configuration
///
/// # Errors
///
/// Returns `NutrientError::IncompatibleUnit` if `unit` is not an energy unit.
pub fn energy_proportions<V: MeasurementValue, const FROZEN: bool>(
    vector: &NutrientVector<V, FROZEN>,
    unit: Unit,
) -> NutrientResult<EnergyMap> {
    EnergyCalculator::global().proportions(vector, unit)
}

/// Predicted energy using the process-wide configuration
///
/// # Errors
///
/// Returns `NutrientError::IncompatibleUnit` if `unit` is not an energy unit.
pub fn predicted_energy<V: MeasurementValue, const FROZEN: bool>(
    vector: &NutrientVector<V, FROZEN>,
    unit: Unit,
) -> NutrientResult<f64> {
    EnergyCalculator::global().predicted_energy(vector, unit)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]
    use super::*;
    use crate::vector::{FoodNutrientValue, MutableNutrientVector};

    fn value(nutrient: Nutrient, grams: f64) -> FoodNutrientValue {
        FoodNutrientValue::new(nutrient, grams, Unit::Grams).unwrap()
    }

    #[test]
    fn test_factor_covers_subtypes() {
        let calc = EnergyCalculator::default();
        assert!((calc.factor(Nutrient::Omega3Fat)).abs() < f64::EPSILON);
        assert!((calc.factor(Nutrient::Starch) - 17.0).abs() < f64::EPSILON);
        assert!((calc.factor(Nutrient::MonounsaturatedFat) - 37.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_components_rejects_mass_unit() {
        let vector = MutableNutrientVector::<FoodNutrientValue>::new().freeze();
        let err = energy_components(&vector, Unit::Grams).unwrap_err();
        assert_eq!(err, NutrientError::incompatible(Nutrient::Energy, Unit::Grams));
    }

    #[test]
    fn test_kcal_scaling() {
        let mut builder = MutableNutrientVector::new();
        builder.insert(value(Nutrient::Protein, 10.0));
        let kj = predicted_energy(&builder, Unit::Kilojoules).unwrap();
        let kcal = predicted_energy(&builder, Unit::Kilocalories).unwrap();
        assert!((kj - 170.0).abs() < 1e-9);
        assert!((kcal - 170.0 / 4.184).abs() < 1e-9);
    }
}
