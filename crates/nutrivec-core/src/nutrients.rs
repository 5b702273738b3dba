// ABOUTME: Nutrient catalog with stable ordinals and accepted unit types
// ABOUTME: Defines the fixed ordered list of nutrients that index every nutrient vector
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrient Catalog
//!
//! The catalog is an enum, so the nutrient count is a compile-time constant
//! and ordinals are assigned once by declaration order. Nutrient vectors are
//! arrays of length [`Nutrient::COUNT`] indexed by [`Nutrient::ordinal`].

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::NutrientError;
use crate::units::{Unit, UnitTypes};

/// A measurable food component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Amount of the food itself (mass or volume)
    Quantity,
    /// Recorded energy
    Energy,
    /// Protein
    Protein,
    /// Total fat
    Fat,
    /// Saturated fatty acids
    SaturatedFat,
    /// Monounsaturated fatty acids
    MonounsaturatedFat,
    /// Polyunsaturated fatty acids
    PolyunsaturatedFat,
    /// Omega-3 polyunsaturated fatty acids
    #[serde(rename = "omega_3_fat")]
    Omega3Fat,
    /// Omega-6 polyunsaturated fatty acids
    #[serde(rename = "omega_6_fat")]
    Omega6Fat,
    /// Trans fatty acids
    TransFat,
    /// Total carbohydrate
    Carbohydrate,
    /// Sugars
    Sugar,
    /// Starch
    Starch,
    /// Total dietary fibre
    Fibre,
    /// Soluble fibre
    SolubleFibre,
    /// Insoluble fibre
    InsolubleFibre,
    /// Sodium
    Sodium,
    /// Potassium
    Potassium,
    /// Calcium
    Calcium,
    /// Iron
    Iron,
    /// Water
    Water,
    /// Ethanol
    Alcohol,
    /// Caffeine
    Caffeine,
}

impl Nutrient {
    /// Number of catalog nutrients
    pub const COUNT: usize = 23;

    /// Every nutrient in ordinal order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Quantity,
        Self::Energy,
        Self::Protein,
        Self::Fat,
        Self::SaturatedFat,
        Self::MonounsaturatedFat,
        Self::PolyunsaturatedFat,
        Self::Omega3Fat,
        Self::Omega6Fat,
        Self::TransFat,
        Self::Carbohydrate,
        Self::Sugar,
        Self::Starch,
        Self::Fibre,
        Self::SolubleFibre,
        Self::InsolubleFibre,
        Self::Sodium,
        Self::Potassium,
        Self::Calcium,
        Self::Iron,
        Self::Water,
        Self::Alcohol,
        Self::Caffeine,
    ];

    /// Stable index into nutrient vectors
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Look up a nutrient by its ordinal
    ///
    /// # Errors
    ///
    /// Returns `NutrientError::UnknownNutrient` if the ordinal is out of range.
    pub fn from_ordinal(ordinal: i64) -> Result<Self, NutrientError> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or(NutrientError::UnknownNutrient(ordinal))
    }

    /// Unit types this nutrient may be measured in
    #[must_use]
    pub const fn accepted_unit_types(self) -> UnitTypes {
        match self {
            Self::Quantity | Self::Water | Self::Alcohol => UnitTypes::MASS_OR_VOLUME,
            Self::Energy => UnitTypes::ENERGY,
            _ => UnitTypes::MASS,
        }
    }

    /// Whether `unit` can measure this nutrient
    #[must_use]
    pub const fn accepts(self, unit: Unit) -> bool {
        self.accepted_unit_types().accepts(unit.unit_type())
    }

    /// Snake-case identifier, matching the serde representation
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Quantity => "quantity",
            Self::Energy => "energy",
            Self::Protein => "protein",
            Self::Fat => "fat",
            Self::SaturatedFat => "saturated_fat",
            Self::MonounsaturatedFat => "monounsaturated_fat",
            Self::PolyunsaturatedFat => "polyunsaturated_fat",
            Self::Omega3Fat => "omega_3_fat",
            Self::Omega6Fat => "omega_6_fat",
            Self::TransFat => "trans_fat",
            Self::Carbohydrate => "carbohydrate",
            Self::Sugar => "sugar",
            Self::Starch => "starch",
            Self::Fibre => "fibre",
            Self::SolubleFibre => "soluble_fibre",
            Self::InsolubleFibre => "insoluble_fibre",
            Self::Sodium => "sodium",
            Self::Potassium => "potassium",
            Self::Calcium => "calcium",
            Self::Iron => "iron",
            Self::Water => "water",
            Self::Alcohol => "alcohol",
            Self::Caffeine => "caffeine",
        }
    }

    /// Every nutrient except [`Nutrient::Quantity`], in ordinal order
    pub fn measured() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(|n| *n != Self::Quantity)
    }
}

impl Display for Nutrient {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Nutrient {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|n| n.id() == normalized)
            .ok_or_else(|| format!("unknown nutrient: {s}"))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn ordinals_are_dense_and_stable() {
        assert_eq!(Nutrient::ALL.len(), Nutrient::COUNT);
        for (index, nutrient) in Nutrient::ALL.iter().enumerate() {
            assert_eq!(nutrient.ordinal(), index);
            assert_eq!(
                Nutrient::from_ordinal(index as i64).unwrap(),
                *nutrient,
                "round trip for {nutrient}"
            );
        }
        assert!(Nutrient::from_ordinal(Nutrient::COUNT as i64).is_err());
    }

    #[test]
    fn accepted_unit_types() {
        assert!(Nutrient::Quantity.accepts(Unit::Cups));
        assert!(Nutrient::Quantity.accepts(Unit::Grams));
        assert!(Nutrient::Energy.accepts(Unit::Kilocalories));
        assert!(!Nutrient::Energy.accepts(Unit::Grams));
        assert!(!Nutrient::Protein.accepts(Unit::Millilitres));
        assert!(Nutrient::Alcohol.accepts(Unit::Millilitres));
    }

    #[test]
    fn ids_match_serde_names() {
        for nutrient in Nutrient::ALL {
            let json = serde_json::to_string(&nutrient).unwrap();
            assert_eq!(json, format!("\"{}\"", nutrient.id()));
            assert_eq!(nutrient.id().parse::<Nutrient>().unwrap(), nutrient);
        }
    }

    #[test]
    fn measured_skips_quantity() {
        assert_eq!(Nutrient::measured().count(), Nutrient::COUNT - 1);
        assert_eq!(Nutrient::measured().next(), Some(Nutrient::Energy));
    }
}
