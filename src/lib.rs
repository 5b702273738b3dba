// ABOUTME: Main library entry point for the nutrivec nutrient vector engine
// ABOUTME: Provides sparse nutrient vectors, aggregation, rescaling and energy prediction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrivec
//!
//! A typed engine for food nutrient data. Every food, meal or recipe is a
//! sparse, fixed-shape vector indexed by the nutrient catalog, with a
//! completeness flag per nutrient and an optional density for moving the
//! food's quantity between mass and volume.
//!
//! ## Architecture
//!
//! - **`nutrivec_core`**: nutrient and unit catalogs, errors, conversion
//! - **vector**: `NutrientVector`, its values, and `FoodNutrientVector`
//! - **aggregate**: summing foods into meals and recipes
//! - **rescale**: rescaling, quantity-unit changes and gap filling
//! - **energy**: energy components and proportions from macronutrients
//! - **portions**: food portions and meal totals
//! - **config**: validated energy factors with environment overrides
//! - **logging**: `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust
//! use nutrivec::vector::{FoodNutrientValue, FoodNutrientVector};
//! use nutrivec::{Nutrient, Quantity, Unit};
//!
//! let oats = FoodNutrientVector::from_values(
//!     [
//!         FoodNutrientValue::quantity(Quantity::grams(100.0)),
//!         FoodNutrientValue::new(Nutrient::Protein, 13.0, Unit::Grams).unwrap(),
//!         FoodNutrientValue::new(Nutrient::Fibre, 10.0, Unit::Grams).unwrap(),
//!     ],
//!     None,
//! );
//!
//! let serving = oats.rescale(40.0, Unit::Grams).unwrap();
//! let protein = serving.amount_of(Nutrient::Protein, None).unwrap().unwrap();
//! assert!((protein - 5.2).abs() < 1e-9);
//! ```

/// Summing nutrient vectors
pub mod aggregate;

/// Engine configuration
pub mod config;

/// Energy prediction from macronutrients
pub mod energy;

/// Tracing subscriber setup
pub mod logging;

/// Food portions and meals
pub mod portions;

/// Rescaling and gap filling
pub mod rescale;

/// Nutrient vectors and their values
pub mod vector;

pub use aggregate::sum;
pub use energy::{energy_components, energy_proportions, predicted_energy, EnergyCalculator, EnergyMap};
pub use nutrivec_core::{
    convert, DensityPolicy, Nutrient, NutrientError, NutrientResult, Quantity, Unit, UnitTable,
    UnitType, UnitTypes,
};
pub use portions::{meal_nutrients, FoodPortion};
pub use rescale::{fill_missing_data, rescale};
pub use vector::{
    FoodNutrientValue, FoodNutrientVector, MutableFoodNutrientVector, MutableNutrientVector,
    NutrientVector,
};
