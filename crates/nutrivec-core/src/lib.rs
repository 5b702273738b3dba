// ABOUTME: Core catalog types and unit conversion for the nutrivec engine
// ABOUTME: Foundation crate with nutrient/unit catalogs, error types, and conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrivec Core
//!
//! Foundation crate for the nutrivec engine. It holds the read-only catalogs
//! every nutrient vector is built on and the pure conversion functions that
//! operate on them. This crate is designed to change infrequently.
//!
//! ## Modules
//!
//! - **units**: `Unit`, `UnitType` and the `UnitTypes` set
//! - **nutrients**: the ordered `Nutrient` catalog
//! - **default_units**: per-nutrient default unit tables
//! - **conversion**: `convert`, `Quantity` and `DensityPolicy`
//! - **errors**: `NutrientError`
//! - **constants**: unit factors, densities and energy factors

/// Physical constants organized by domain
pub mod constants;

/// Unit conversion engine
pub mod conversion;

/// Per-nutrient default unit tables
pub mod default_units;

/// Error types for measurement and conversion
pub mod errors;

/// Nutrient catalog
pub mod nutrients;

/// Unit catalog
pub mod units;

pub use conversion::{convert, DensityPolicy, Quantity, ResolvedDensity};
pub use default_units::UnitTable;
pub use errors::{NutrientError, NutrientResult};
pub use nutrients::Nutrient;
pub use units::{Unit, UnitType, UnitTypes};
