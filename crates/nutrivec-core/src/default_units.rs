// ABOUTME: Per-nutrient default unit tables used for display fallbacks and aggregation
// ABOUTME: Provides the legacy table that summed vectors are normalized into
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::errors::NutrientError;
use crate::nutrients::Nutrient;
use crate::units::Unit;

/// Total map from nutrient to a unit that nutrient accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitTable {
    units: [Unit; Nutrient::COUNT],
}

impl UnitTable {
    /// The legacy default units: grams for masses, milligrams for minerals
    /// and caffeine, kilojoules for energy
    #[must_use]
    pub fn legacy() -> Self {
        let mut units = [Unit::Grams; Nutrient::COUNT];
        units[Nutrient::Energy.ordinal()] = Unit::Kilojoules;
        for nutrient in [
            Nutrient::Sodium,
            Nutrient::Potassium,
            Nutrient::Calcium,
            Nutrient::Iron,
            Nutrient::Caffeine,
        ] {
            units[nutrient.ordinal()] = Unit::Milligrams;
        }
        Self { units }
    }

    /// Default unit for `nutrient`
    #[must_use]
    pub const fn unit_for(&self, nutrient: Nutrient) -> Unit {
        self.units[nutrient.ordinal()]
    }

    /// Copy of this table with `nutrient` mapped to `unit`
    ///
    /// # Errors
    ///
    /// Returns `NutrientError::IncompatibleUnit` if `nutrient` does not accept `unit`.
    pub fn with(mut self, nutrient: Nutrient, unit: Unit) -> Result<Self, NutrientError> {
        if !nutrient.accepts(unit) {
            return Err(NutrientError::incompatible(nutrient, unit));
        }
        self.units[nutrient.ordinal()] = unit;
        Ok(self)
    }
}

impl Default for UnitTable {
    fn default() -> Self {
        Self::legacy()
    }
}
