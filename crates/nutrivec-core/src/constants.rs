// ABOUTME: Physical constants for unit conversion and energy prediction
// ABOUTME: Pure data constants organized by domain (units, densities, energy)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than a single list.

/// Unit scale factors relative to the canonical unit of each type
pub mod units {
    /// Grams per milligram
    pub const GRAMS_PER_MG: f64 = 0.001;
    /// Grams per microgram
    pub const GRAMS_PER_UG: f64 = 0.000_001;
    /// Grams per kilogram
    pub const GRAMS_PER_KG: f64 = 1000.0;
    /// Grams per avoirdupois ounce
    pub const GRAMS_PER_OZ: f64 = 28.35;
    /// Grams per pound
    pub const GRAMS_PER_LB: f64 = 453.6;

    /// Millilitres per litre
    pub const ML_PER_L: f64 = 1000.0;
    /// Millilitres per US cup
    pub const ML_PER_CUP: f64 = 240.0;
    /// Millilitres per tablespoon
    pub const ML_PER_TBSP: f64 = 15.0;
    /// Millilitres per teaspoon
    pub const ML_PER_TSP: f64 = 5.0;
    /// Millilitres per US fluid ounce
    pub const ML_PER_FL_OZ: f64 = 29.5735;

    /// Kilojoules per kilocalorie
    pub const KJ_PER_KCAL: f64 = 4.184;
}

/// Densities (g/ml) used when crossing the mass/volume boundary
pub mod densities {
    /// Water
    pub const WATER_G_PER_ML: f64 = 1.0;
    /// Ethanol
    pub const ALCOHOL_G_PER_ML: f64 = 0.789;
    /// Fallback for nutrients without a known density, and the guessed
    /// density for foods that do not record one
    pub const DEFAULT_G_PER_ML: f64 = 1.0;
}

/// Metabolisable energy per gram of each macronutrient (kJ/g)
pub mod energy {
    /// Protein
    pub const PROTEIN_KJ_PER_G: f64 = 17.0;
    /// Fat, including each fatty-acid subtype
    pub const FAT_KJ_PER_G: f64 = 37.0;
    /// Carbohydrate, including sugar and starch
    pub const CARBOHYDRATE_KJ_PER_G: f64 = 17.0;
    /// Dietary fibre
    pub const FIBRE_KJ_PER_G: f64 = 8.27;
    /// Ethanol
    pub const ALCOHOL_KJ_PER_G: f64 = 29.0;
}

/// Reference quantity assumed for foods that carry no quantity
pub mod reference {
    /// Amount in grams (nutrition panels are per 100 g)
    pub const DEFAULT_QUANTITY_GRAMS: f64 = 100.0;
}
