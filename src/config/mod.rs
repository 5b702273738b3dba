// ABOUTME: Engine configuration with compile-time tracking of validation state
// ABOUTME: Loads defaults, applies environment overrides, and validates energy factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration
//!
//! [`EngineConfig<false>`] is a draft that may be edited freely.
//! [`EngineConfig::validate`] turns it into [`EngineConfig<true>`], the only
//! form an [`EnergyCalculator`](crate::energy::EnergyCalculator) accepts.
//!
//! Environment overrides:
//! - `NUTRIVEC_ENERGY_PROTEIN_KJ_PER_G`
//! - `NUTRIVEC_ENERGY_FAT_KJ_PER_G`
//! - `NUTRIVEC_ENERGY_CARBOHYDRATE_KJ_PER_G`
//! - `NUTRIVEC_ENERGY_FIBRE_KJ_PER_G`
//! - `NUTRIVEC_ENERGY_ALCOHOL_KJ_PER_G`

pub mod energy;
pub mod error;

pub use energy::EnergyConfig;
pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::env;
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Process-wide validated configuration
static ENGINE_CONFIG: OnceLock<EngineConfig<true>> = OnceLock::new();

/// Top-level engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig<const VALIDATED: bool = false> {
    energy: EnergyConfig,
    #[serde(skip)]
    _phantom: PhantomData<()>,
}

impl EngineConfig<false> {
    /// Draft configuration from explicit energy factors
    #[must_use]
    pub const fn new(energy: EnergyConfig) -> Self {
        Self {
            energy,
            _phantom: PhantomData,
        }
    }

    /// Mutable access to the energy factors
    pub fn energy_mut(&mut self) -> &mut EnergyConfig {
        &mut self.energy
    }

    /// Apply `NUTRIVEC_ENERGY_*` environment overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` when a variable is set but not a number, or
    /// `ConfigError::EnvVar` when it is not valid unicode.
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "NUTRIVEC_ENERGY_PROTEIN_KJ_PER_G",
            &mut self.energy.protein_kj_per_g,
        )?;
        Self::apply_env_var(
            "NUTRIVEC_ENERGY_FAT_KJ_PER_G",
            &mut self.energy.fat_kj_per_g,
        )?;
        Self::apply_env_var(
            "NUTRIVEC_ENERGY_CARBOHYDRATE_KJ_PER_G",
            &mut self.energy.carbohydrate_kj_per_g,
        )?;
        Self::apply_env_var(
            "NUTRIVEC_ENERGY_FIBRE_KJ_PER_G",
            &mut self.energy.fibre_kj_per_g,
        )?;
        Self::apply_env_var(
            "NUTRIVEC_ENERGY_ALCOHOL_KJ_PER_G",
            &mut self.energy.alcohol_kj_per_g,
        )?;

        Ok(self)
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                debug!(variable = env_var_name, "Applied configuration override");
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(e) => Err(ConfigError::EnvVar(e)),
        }
    }

    /// Validate the draft
    ///
    /// # Errors
    ///
    /// Returns the first energy factor violation found.
    pub fn validate(self) -> Result<EngineConfig<true>, ConfigError> {
        self.energy.validate()?;
        Ok(EngineConfig {
            energy: self.energy,
            _phantom: PhantomData,
        })
    }
}

impl Default for EngineConfig<false> {
    fn default() -> Self {
        Self::new(EnergyConfig::default())
    }
}

impl EngineConfig<true> {
    /// Get the process-wide configuration, loading it on first use
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        EngineConfig::<false>::default()
            .apply_env_overrides()?
            .validate()
    }

    /// Reopen as an editable draft
    #[must_use]
    pub fn into_draft(self) -> EngineConfig<false> {
        EngineConfig::<false>::new(self.energy)
    }
}

impl Default for EngineConfig<true> {
    fn default() -> Self {
        Self {
            energy: EnergyConfig::default(),
            _phantom: PhantomData,
        }
    }
}

impl<const VALIDATED: bool> EngineConfig<VALIDATED> {
    /// Energy factors
    #[must_use]
    pub const fn energy(&self) -> &EnergyConfig {
        &self.energy
    }

    /// Whether this configuration has passed validation
    #[must_use]
    pub const fn is_validated(&self) -> bool {
        VALIDATED
    }
}
