// ABOUTME: Unit catalog with unit types and metric-equivalent scale factors
// ABOUTME: Defines Unit, UnitType, and the UnitTypes set used for compatibility checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unit Catalog
//!
//! Every unit has a [`UnitType`] and a metric-equivalent factor relative to the
//! canonical unit of that type: grams for mass, millilitres for volume,
//! kilojoules for energy and grams per millilitre for density.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::constants::units::{
    GRAMS_PER_KG, GRAMS_PER_LB, GRAMS_PER_MG, GRAMS_PER_OZ, GRAMS_PER_UG, KJ_PER_KCAL,
    ML_PER_CUP, ML_PER_FL_OZ, ML_PER_L, ML_PER_TBSP, ML_PER_TSP,
};
use crate::errors::NutrientError;

/// Physical dimension of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitType {
    /// Weight (canonical: grams)
    Mass,
    /// Volume (canonical: millilitres)
    Volume,
    /// Energy (canonical: kilojoules)
    Energy,
    /// Mass per volume (canonical: grams per millilitre)
    Density,
    /// Dimensionless
    None,
}

impl UnitType {
    /// The single-member set containing this type
    #[must_use]
    pub const fn as_set(self) -> UnitTypes {
        match self {
            Self::Mass => UnitTypes::MASS,
            Self::Volume => UnitTypes::VOLUME,
            Self::Energy => UnitTypes::ENERGY,
            Self::Density => UnitTypes::DENSITY,
            Self::None => UnitTypes::NONE,
        }
    }
}

bitflags! {
    /// Set of unit types a nutrient accepts
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct UnitTypes: u8 {
        /// Mass units
        const MASS = 0b0000_0001;
        /// Volume units
        const VOLUME = 0b0000_0010;
        /// Energy units
        const ENERGY = 0b0000_0100;
        /// Density units
        const DENSITY = 0b0000_1000;
        /// Dimensionless units
        const NONE = 0b0001_0000;
        /// Either mass or volume (quantities, water, alcohol)
        const MASS_OR_VOLUME = Self::MASS.bits() | Self::VOLUME.bits();
    }
}

impl UnitTypes {
    /// Whether the given unit type is a member of this set
    #[must_use]
    pub const fn accepts(self, unit_type: UnitType) -> bool {
        self.contains(unit_type.as_set())
    }
}

/// Measurement unit
///
/// The declaration order is the stable unit id used by persistence callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Grams
    Grams,
    /// Milligrams
    Milligrams,
    /// Micrograms
    Micrograms,
    /// Kilograms
    Kilograms,
    /// Avoirdupois ounces
    Ounces,
    /// Pounds
    Pounds,
    /// Millilitres
    Millilitres,
    /// Litres
    Litres,
    /// Teaspoons (5 ml)
    Teaspoons,
    /// Tablespoons (15 ml)
    Tablespoons,
    /// US cups (240 ml)
    Cups,
    /// US fluid ounces
    FluidOunces,
    /// Kilojoules
    Kilojoules,
    /// Kilocalories
    Kilocalories,
    /// Grams per millilitre
    GramsPerMillilitre,
    /// No unit
    Unitless,
}

impl Unit {
    /// Every catalog unit in id order
    pub const ALL: [Self; 16] = [
        Self::Grams,
        Self::Milligrams,
        Self::Micrograms,
        Self::Kilograms,
        Self::Ounces,
        Self::Pounds,
        Self::Millilitres,
        Self::Litres,
        Self::Teaspoons,
        Self::Tablespoons,
        Self::Cups,
        Self::FluidOunces,
        Self::Kilojoules,
        Self::Kilocalories,
        Self::GramsPerMillilitre,
        Self::Unitless,
    ];

    /// Physical dimension of this unit
    #[must_use]
    pub const fn unit_type(self) -> UnitType {
        match self {
            Self::Grams
            | Self::Milligrams
            | Self::Micrograms
            | Self::Kilograms
            | Self::Ounces
            | Self::Pounds => UnitType::Mass,
            Self::Millilitres
            | Self::Litres
            | Self::Teaspoons
            | Self::Tablespoons
            | Self::Cups
            | Self::FluidOunces => UnitType::Volume,
            Self::Kilojoules | Self::Kilocalories => UnitType::Energy,
            Self::GramsPerMillilitre => UnitType::Density,
            Self::Unitless => UnitType::None,
        }
    }

    /// Scale factor relative to the canonical unit of this unit's type
    #[must_use]
    pub const fn metric_equivalent(self) -> f64 {
        match self {
            Self::Grams | Self::Millilitres | Self::Kilojoules | Self::GramsPerMillilitre => 1.0,
            Self::Milligrams => GRAMS_PER_MG,
            Self::Micrograms => GRAMS_PER_UG,
            Self::Kilograms => GRAMS_PER_KG,
            Self::Ounces => GRAMS_PER_OZ,
            Self::Pounds => GRAMS_PER_LB,
            Self::Litres => ML_PER_L,
            Self::Teaspoons => ML_PER_TSP,
            Self::Tablespoons => ML_PER_TBSP,
            Self::Cups => ML_PER_CUP,
            Self::FluidOunces => ML_PER_FL_OZ,
            Self::Kilocalories => KJ_PER_KCAL,
            Self::Unitless => 1.0,
        }
    }

    /// Display abbreviation
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Grams => "g",
            Self::Milligrams => "mg",
            Self::Micrograms => "ug",
            Self::Kilograms => "kg",
            Self::Ounces => "oz",
            Self::Pounds => "lb",
            Self::Millilitres => "ml",
            Self::Litres => "L",
            Self::Teaspoons => "tsp",
            Self::Tablespoons => "tbsp",
            Self::Cups => "cup",
            Self::FluidOunces => "fl oz",
            Self::Kilojoules => "kJ",
            Self::Kilocalories => "kcal",
            Self::GramsPerMillilitre => "g/ml",
            Self::Unitless => "",
        }
    }

    /// Stable numeric id
    #[must_use]
    pub const fn id(self) -> i64 {
        self as i64
    }

    /// Look up a unit by its numeric id
    ///
    /// # Errors
    ///
    /// Returns `NutrientError::UnknownUnit` if no unit has this id.
    pub fn from_id(id: i64) -> Result<Self, NutrientError> {
        usize::try_from(id)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or(NutrientError::UnknownUnit(id))
    }

    /// Whether this is a mass unit
    #[must_use]
    pub const fn is_mass(self) -> bool {
        matches!(self.unit_type(), UnitType::Mass)
    }

    /// Whether this is a volume unit
    #[must_use]
    pub const fn is_volume(self) -> bool {
        matches!(self.unit_type(), UnitType::Volume)
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|unit| unit.abbreviation().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("unknown unit abbreviation: {s}"))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]

    use super::*;

    #[test]
    fn ids_follow_declaration_order() {
        for (index, unit) in Unit::ALL.iter().enumerate() {
            assert_eq!(unit.id(), index as i64);
            assert_eq!(Unit::from_id(unit.id()).unwrap(), *unit);
        }
        assert!(matches!(
            Unit::from_id(99),
            Err(NutrientError::UnknownUnit(99))
        ));
        assert!(Unit::from_id(-1).is_err());
    }

    #[test]
    fn metric_equivalents_are_positive() {
        assert!(Unit::ALL.iter().all(|u| u.metric_equivalent() > 0.0));
        assert_eq!(Unit::Kilograms.metric_equivalent(), 1000.0);
        assert_eq!(Unit::Cups.metric_equivalent(), 240.0);
    }

    #[test]
    fn parses_abbreviations() {
        assert_eq!("kcal".parse::<Unit>().unwrap(), Unit::Kilocalories);
        assert_eq!(" ML ".parse::<Unit>().unwrap(), Unit::Millilitres);
        assert_eq!("fl oz".parse::<Unit>().unwrap(), Unit::FluidOunces);
        assert!("furlong".parse::<Unit>().is_err());
    }

    #[test]
    fn unit_type_sets() {
        assert!(UnitTypes::MASS_OR_VOLUME.accepts(UnitType::Volume));
        assert!(!UnitTypes::MASS.accepts(UnitType::Energy));
        assert!(Unit::Tablespoons.is_volume());
        assert!(Unit::Pounds.is_mass());
    }
}
