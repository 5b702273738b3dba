// ABOUTME: Energy factor configuration (kJ per gram of each macronutrient)
// ABOUTME: Defaults are the standard Atwater-style factors used for food labelling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrivec_core::constants::energy::{
    ALCOHOL_KJ_PER_G, CARBOHYDRATE_KJ_PER_G, FAT_KJ_PER_G, FIBRE_KJ_PER_G, PROTEIN_KJ_PER_G,
};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Energy released per gram of each energy-bearing nutrient, in kJ/g
///
/// Fat subtypes share the fat factor; sugar and starch share the
/// carbohydrate factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyConfig {
    /// Protein factor
    pub protein_kj_per_g: f64,
    /// Fat factor
    pub fat_kj_per_g: f64,
    /// Carbohydrate factor
    pub carbohydrate_kj_per_g: f64,
    /// Dietary fibre factor
    pub fibre_kj_per_g: f64,
    /// Ethanol factor
    pub alcohol_kj_per_g: f64,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            protein_kj_per_g: PROTEIN_KJ_PER_G,
            fat_kj_per_g: FAT_KJ_PER_G,
            carbohydrate_kj_per_g: CARBOHYDRATE_KJ_PER_G,
            fibre_kj_per_g: FIBRE_KJ_PER_G,
            alcohol_kj_per_g: ALCOHOL_KJ_PER_G,
        }
    }
}

impl EnergyConfig {
    /// Check every factor is usable and fat remains the densest macronutrient
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for a non-finite or non-positive
    /// factor, and `ConfigError::InvalidRange` when fat is below protein or
    /// carbohydrate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = [
            self.protein_kj_per_g,
            self.fat_kj_per_g,
            self.carbohydrate_kj_per_g,
            self.fibre_kj_per_g,
            self.alcohol_kj_per_g,
        ];
        if factors.iter().any(|f| !f.is_finite() || *f <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Energy factors must be finite and positive",
            ));
        }

        if self.fat_kj_per_g < self.protein_kj_per_g {
            return Err(ConfigError::InvalidRange(
                "fat_kj_per_g must be >= protein_kj_per_g",
            ));
        }
        if self.fat_kj_per_g < self.carbohydrate_kj_per_g {
            return Err(ConfigError::InvalidRange(
                "fat_kj_per_g must be >= carbohydrate_kj_per_g",
            ));
        }

        Ok(())
    }
}
