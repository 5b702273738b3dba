// ABOUTME: Error types for nutrient measurement and unit conversion
// ABOUTME: Covers unit incompatibility, missing density, and unknown catalog ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrient Error Types
//!
//! Missing data is never an error in this crate; it is carried as absence or
//! as an incompleteness flag. The variants here are the conditions a caller
//! must act on.

use thiserror::Error;

use crate::nutrients::Nutrient;
use crate::units::Unit;

/// Errors raised by measurement construction and unit conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NutrientError {
    /// The unit's type is not among the nutrient's accepted unit types
    #[error("unit {unit} ({unit:?}) is not compatible with nutrient {nutrient}")]
    IncompatibleUnit {
        /// Nutrient being measured
        nutrient: Nutrient,
        /// Rejected unit
        unit: Unit,
    },

    /// A mass/volume conversion needs a density and none was available
    #[error("density is required to convert {nutrient} between mass and volume")]
    DensityRequired {
        /// Nutrient being converted
        nutrient: Nutrient,
    },

    /// A value was offered to the slot of a different nutrient
    #[error("value for {value} cannot be stored in the {slot} slot")]
    SlotMismatch {
        /// Slot being written
        slot: Nutrient,
        /// Nutrient the value measures
        value: Nutrient,
    },

    /// Raw nutrient id does not exist in the catalog
    #[error("unknown nutrient id: {0}")]
    UnknownNutrient(i64),

    /// Raw unit id does not exist in the catalog
    #[error("unknown unit id: {0}")]
    UnknownUnit(i64),
}

impl NutrientError {
    /// Create an "incompatible unit" error
    #[must_use]
    pub const fn incompatible(nutrient: Nutrient, unit: Unit) -> Self {
        Self::IncompatibleUnit { nutrient, unit }
    }

    /// Create a "slot mismatch" error
    #[must_use]
    pub const fn slot_mismatch(slot: Nutrient, value: Nutrient) -> Self {
        Self::SlotMismatch { slot, value }
    }

    /// Create a "density required" error
    #[must_use]
    pub const fn density_required(nutrient: Nutrient) -> Self {
        Self::DensityRequired { nutrient }
    }
}

/// Result alias for nutrient operations
pub type NutrientResult<T> = Result<T, NutrientError>;
