// ABOUTME: Unit conversion engine for nutrient amounts
// ABOUTME: Same-type scaling plus density-aware mass/volume conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Conversion Engine
//!
//! Conversions within one unit type scale by the ratio of metric equivalents.
//! Crossing the mass/volume boundary additionally needs a density: callers
//! supply one for [`Nutrient::Quantity`], while water and alcohol use fixed
//! physical densities.

use serde::{Deserialize, Serialize};

use crate::constants::densities::{ALCOHOL_G_PER_ML, DEFAULT_G_PER_ML, WATER_G_PER_ML};
use crate::errors::{NutrientError, NutrientResult};
use crate::nutrients::Nutrient;
use crate::units::{Unit, UnitType};

/// Convert `amount` of `nutrient` from one unit to another
///
/// `density` (g/ml) is only consulted when converting [`Nutrient::Quantity`]
/// across the mass/volume boundary.
///
/// # Errors
///
/// Returns `NutrientError::IncompatibleUnit` if `nutrient` does not accept
/// `from` or `to` (the first rejected unit is reported).
/// Returns `NutrientError::DensityRequired` if a quantity must cross the
/// mass/volume boundary and `density` is `None`.
///
/// # Panics
///
/// Panics if the catalog marks a cross-type conversion as legal that is not a
/// mass/volume conversion. The built-in catalog never does.
///
/// # Examples
///
/// ```rust
/// use nutrivec_core::{convert, Nutrient, Unit};
///
/// let mg = convert(Nutrient::Sodium, 1.5, Unit::Grams, Unit::Milligrams, None);
/// assert!((mg.unwrap() - 1500.0).abs() < 1e-9);
///
/// // 250 ml of milk at 1.03 g/ml
/// let grams = convert(Nutrient::Quantity, 250.0, Unit::Millilitres, Unit::Grams, Some(1.03));
/// assert!((grams.unwrap() - 257.5).abs() < 1e-9);
/// ```
pub fn convert(
    nutrient: Nutrient,
    amount: f64,
    from: Unit,
    to: Unit,
    density: Option<f64>,
) -> NutrientResult<f64> {
    if from == to {
        return Ok(amount);
    }
    if let Some(unit) = [from, to].into_iter().find(|unit| !nutrient.accepts(*unit)) {
        return Err(NutrientError::incompatible(nutrient, unit));
    }

    let ratio = from.metric_equivalent() / to.metric_equivalent();
    let (from_type, to_type) = (from.unit_type(), to.unit_type());
    if from_type == to_type {
        return Ok(amount * ratio);
    }

    let density = effective_density(nutrient, density)?;
    match (from_type, to_type) {
        // solid -> liquid
        (UnitType::Mass, UnitType::Volume) => Ok(amount * ratio / density),
        // liquid -> solid
        (UnitType::Volume, UnitType::Mass) => Ok(amount * ratio * density),
        (from_type, to_type) => unreachable!(
            "catalog allows {nutrient} in {from_type:?} and {to_type:?} but neither is volume"
        ),
    }
}

/// Density used for a mass/volume conversion of `nutrient`
fn effective_density(nutrient: Nutrient, density: Option<f64>) -> NutrientResult<f64> {
    match nutrient {
        Nutrient::Quantity => density.ok_or(NutrientError::density_required(nutrient)),
        Nutrient::Water => Ok(WATER_G_PER_ML),
        Nutrient::Alcohol => Ok(ALCOHOL_G_PER_ML),
        _ => Ok(DEFAULT_G_PER_ML),
    }
}

/// How to obtain a density when a quantity crosses the mass/volume boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DensityPolicy {
    /// Use the food's own density; fail if it has none
    #[default]
    RequireDensity,
    /// Use this density (g/ml), overriding any recorded density
    UseDensity(f64),
    /// Use the food's own density, else guess 1 g/ml and flag the result
    DefaultToOne,
}

/// Outcome of applying a [`DensityPolicy`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedDensity {
    /// Density in g/ml
    pub grams_per_ml: f64,
    /// True when the density is the 1 g/ml guess rather than known data
    pub guessed: bool,
}

impl DensityPolicy {
    /// Pick a density given the food's recorded density
    ///
    /// # Errors
    ///
    /// Returns `NutrientError::DensityRequired` under `RequireDensity` when
    /// `recorded` is `None`.
    pub fn resolve(self, recorded: Option<f64>) -> NutrientResult<ResolvedDensity> {
        let known = |grams_per_ml| ResolvedDensity {
            grams_per_ml,
            guessed: false,
        };
        match (self, recorded) {
            (Self::UseDensity(explicit), _) => Ok(known(explicit)),
            (_, Some(recorded)) => Ok(known(recorded)),
            (Self::RequireDensity, None) => {
                Err(NutrientError::density_required(Nutrient::Quantity))
            }
            (Self::DefaultToOne, None) => Ok(ResolvedDensity::recorded_or_guess(None)),
        }
    }
}

impl ResolvedDensity {
    /// The recorded density if there is one, else the flagged 1 g/ml guess
    #[must_use]
    pub const fn recorded_or_guess(recorded: Option<f64>) -> Self {
        match recorded {
            Some(grams_per_ml) => Self {
                grams_per_ml,
                guessed: false,
            },
            None => Self {
                grams_per_ml: DEFAULT_G_PER_ML,
                guessed: true,
            },
        }
    }
}

/// Amount of a food, in mass or volume
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    amount: f64,
    unit: Unit,
}

impl Quantity {
    /// Create a quantity
    ///
    /// # Errors
    ///
    /// Returns `NutrientError::IncompatibleUnit` unless `unit` is a mass or volume unit.
    pub fn new(amount: f64, unit: Unit) -> NutrientResult<Self> {
        if !Nutrient::Quantity.accepts(unit) {
            return Err(NutrientError::incompatible(Nutrient::Quantity, unit));
        }
        Ok(Self { amount, unit })
    }

    /// Quantity in grams
    #[must_use]
    pub const fn grams(amount: f64) -> Self {
        Self {
            amount,
            unit: Unit::Grams,
        }
    }

    /// Quantity in millilitres
    #[must_use]
    pub const fn millilitres(amount: f64) -> Self {
        Self {
            amount,
            unit: Unit::Millilitres,
        }
    }

    /// Numeric amount
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.amount
    }

    /// Unit of the amount
    #[must_use]
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// This quantity's amount expressed in `new_unit`
    ///
    /// # Errors
    ///
    /// See [`convert`].
    pub fn convert_amount_to(&self, new_unit: Unit, density: Option<f64>) -> NutrientResult<f64> {
        convert(Nutrient::Quantity, self.amount, self.unit, new_unit, density)
    }

    /// This quantity re-expressed in `new_unit`
    ///
    /// # Errors
    ///
    /// See [`convert`].
    pub fn converted_to(&self, new_unit: Unit, density: Option<f64>) -> NutrientResult<Self> {
        Ok(Self {
            amount: self.convert_amount_to(new_unit, density)?,
            unit: new_unit,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]

    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn identity_is_exact() {
        for unit in [Unit::Grams, Unit::Cups, Unit::Kilocalories, Unit::FluidOunces] {
            let value = 0.1 + 0.2;
            assert_eq!(
                convert(Nutrient::Protein, value, unit, unit, None).unwrap(),
                value
            );
        }
    }

    #[test]
    fn same_type_scaling() {
        let kg = convert(Nutrient::Protein, 2500.0, Unit::Grams, Unit::Kilograms, None).unwrap();
        assert!((kg - 2.5).abs() < EPSILON);

        let kj = convert(
            Nutrient::Energy,
            100.0,
            Unit::Kilocalories,
            Unit::Kilojoules,
            None,
        )
        .unwrap();
        assert!((kj - 418.4).abs() < EPSILON);

        let tsp = convert(
            Nutrient::Quantity,
            1.0,
            Unit::Tablespoons,
            Unit::Teaspoons,
            None,
        )
        .unwrap();
        assert!((tsp - 3.0).abs() < EPSILON);
    }

    #[test]
    fn rejects_incompatible_target() {
        assert_eq!(
            convert(Nutrient::Energy, 5.0, Unit::Kilojoules, Unit::Grams, None),
            Err(NutrientError::incompatible(Nutrient::Energy, Unit::Grams))
        );
        assert!(convert(Nutrient::Fat, 5.0, Unit::Grams, Unit::Millilitres, None).is_err());
    }

    #[test]
    fn rejects_incompatible_source() {
        assert_eq!(
            convert(Nutrient::Protein, 1.0, Unit::Kilojoules, Unit::Grams, None),
            Err(NutrientError::incompatible(Nutrient::Protein, Unit::Kilojoules))
        );
        assert_eq!(
            convert(Nutrient::Energy, 1.0, Unit::Cups, Unit::Kilocalories, None),
            Err(NutrientError::incompatible(Nutrient::Energy, Unit::Cups))
        );
    }

    #[test]
    fn quantity_needs_density() {
        assert_eq!(
            convert(
                Nutrient::Quantity,
                100.0,
                Unit::Grams,
                Unit::Millilitres,
                None
            ),
            Err(NutrientError::density_required(Nutrient::Quantity))
        );

        // 100 g of oil at 0.92 g/ml
        let ml = convert(
            Nutrient::Quantity,
            92.0,
            Unit::Grams,
            Unit::Millilitres,
            Some(0.92),
        )
        .unwrap();
        assert!((ml - 100.0).abs() < EPSILON);
    }

    #[test]
    fn water_and_alcohol_use_fixed_densities() {
        let water = convert(Nutrient::Water, 1.0, Unit::Litres, Unit::Grams, None).unwrap();
        assert!((water - 1000.0).abs() < EPSILON);

        let ethanol = convert(Nutrient::Alcohol, 10.0, Unit::Millilitres, Unit::Grams, None).unwrap();
        assert!((ethanol - 7.89).abs() < EPSILON);

        // an explicit density is ignored for non-quantity nutrients
        let ethanol = convert(
            Nutrient::Alcohol,
            10.0,
            Unit::Millilitres,
            Unit::Grams,
            Some(5.0),
        )
        .unwrap();
        assert!((ethanol - 7.89).abs() < EPSILON);
    }

    #[test]
    fn round_trips() {
        let cases = [
            (Nutrient::Quantity, Unit::Cups, Unit::Ounces, Some(0.77)),
            (Nutrient::Quantity, Unit::Pounds, Unit::Litres, Some(1.42)),
            (Nutrient::Sodium, Unit::Micrograms, Unit::Grams, None),
            (Nutrient::Alcohol, Unit::FluidOunces, Unit::Milligrams, None),
        ];
        for (nutrient, u1, u2, density) in cases {
            let x = 123.456;
            let there = convert(nutrient, x, u1, u2, density).unwrap();
            let back = convert(nutrient, there, u2, u1, density).unwrap();
            assert!((back - x).abs() < 1e-6, "{nutrient} {u1} -> {u2}");
        }
    }

    #[test]
    fn density_policy_resolution() {
        assert_eq!(
            DensityPolicy::UseDensity(0.5).resolve(Some(2.0)).unwrap(),
            ResolvedDensity {
                grams_per_ml: 0.5,
                guessed: false
            }
        );
        assert_eq!(
            DensityPolicy::RequireDensity.resolve(Some(2.0)).unwrap().grams_per_ml,
            2.0
        );
        assert!(DensityPolicy::RequireDensity.resolve(None).is_err());
        let guessed = DensityPolicy::DefaultToOne.resolve(None).unwrap();
        assert!(guessed.guessed);
        assert_eq!(guessed.grams_per_ml, 1.0);
        assert!(!DensityPolicy::DefaultToOne.resolve(Some(0.8)).unwrap().guessed);
    }

    #[test]
    fn quantity_conversion() {
        assert!(Quantity::new(1.0, Unit::Kilojoules).is_err());
        let cup = Quantity::new(1.0, Unit::Cups).unwrap();
        let grams = cup.converted_to(Unit::Grams, Some(0.5)).unwrap();
        assert_eq!(grams.unit(), Unit::Grams);
        assert!((grams.amount() - 120.0).abs() < EPSILON);
        assert!(cup.convert_amount_to(Unit::Grams, None).is_err());
    }
}
