// ABOUTME: Fixed-shape sparse nutrient vector with completeness tracking
// ABOUTME: Const-generic typestate separates the mutable builder from the frozen vector
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrient Vectors
//!
//! A [`NutrientVector`] holds at most one measurement per catalog nutrient,
//! indexed by [`Nutrient::ordinal`], plus a parallel completeness flag per
//! slot. A slot may hold a value yet be incomplete, which is how sums with
//! missing contributors are represented.
//!
//! Mutation is only possible on [`MutableNutrientVector`]. Calling
//! [`MutableNutrientVector::freeze`] consumes the builder and produces the
//! frozen type, which has no mutating methods at all.
//!
//! ```rust
//! use nutrivec::vector::{FoodNutrientValue, MutableNutrientVector};
//! use nutrivec::{Nutrient, Unit};
//!
//! let mut builder = MutableNutrientVector::new();
//! builder.insert(FoodNutrientValue::new(Nutrient::Sodium, 0.4, Unit::Grams).unwrap());
//! let vector = builder.freeze();
//!
//! let sodium_mg = vector.amount_of(Nutrient::Sodium, Some(Unit::Milligrams)).unwrap();
//! assert!((sodium_mg.unwrap() - 400.0).abs() < 1e-9);
//! assert!(vector.has_complete_data(Nutrient::Sodium));
//! assert!(!vector.has_complete_data(Nutrient::Protein));
//! ```

/// Density-aware vectors for foods and meals
pub mod food;
/// Measurement value types
pub mod values;

use std::array;
use std::collections::BTreeSet;
use std::sync::OnceLock;

use nutrivec_core::{Nutrient, NutrientError, NutrientResult, Unit, UnitTable};

use crate::energy::{EnergyCalculator, EnergyMap};

pub use food::{FoodNutrientVector, MutableFoodNutrientVector};
pub use values::{ConstraintSpec, FoodNutrientValue, MeasurementValue, RecordMeta, TargetValue};

/// Sparse vector of measurements, one optional slot per catalog nutrient
///
/// `FROZEN = false` is the mutable builder; the default `FROZEN = true` is
/// the immutable value type.
#[derive(Debug, Clone)]
pub struct NutrientVector<V, const FROZEN: bool = true> {
    slots: [Option<V>; Nutrient::COUNT],
    complete: [bool; Nutrient::COUNT],
    complete_by_default: bool,
    energy_proportions: OnceLock<EnergyMap>,
}

/// Nutrient vector that still accepts mutation
pub type MutableNutrientVector<V> = NutrientVector<V, false>;

/// Goal vector: target amounts with constraint tags
pub type NutrientTargets = NutrientVector<TargetValue>;

impl<V: MeasurementValue> NutrientVector<V, false> {
    /// Empty vector where completeness follows slot occupancy
    #[must_use]
    pub fn new() -> Self {
        Self::with_default_completeness(true)
    }

    /// Empty vector with explicit control over default completeness
    ///
    /// When `complete_by_default` is false, completeness flags change only
    /// through [`MutableNutrientVector::set_complete`].
    #[must_use]
    pub fn with_default_completeness(complete_by_default: bool) -> Self {
        Self {
            slots: array::from_fn(|_| None),
            complete: [false; Nutrient::COUNT],
            complete_by_default,
            energy_proportions: OnceLock::new(),
        }
    }

    /// Store or clear the value for `nutrient`
    ///
    /// # Errors
    ///
    /// Returns `NutrientError::SlotMismatch` if `value` measures a different
    /// nutrient; the vector is left unchanged.
    pub fn set(&mut self, nutrient: Nutrient, value: Option<V>) -> NutrientResult<()> {
        if let Some(stored) = value.as_ref().map(MeasurementValue::nutrient) {
            if stored != nutrient {
                return Err(NutrientError::slot_mismatch(nutrient, stored));
            }
        }
        self.store(nutrient, value);
        Ok(())
    }

    /// Store `value` in its own nutrient's slot
    pub fn insert(&mut self, value: V) {
        self.store(value.nutrient(), Some(value));
    }

    fn store(&mut self, nutrient: Nutrient, value: Option<V>) {
        let index = nutrient.ordinal();
        if self.complete_by_default {
            self.complete[index] = value.is_some();
        }
        self.slots[index] = value;
    }

    /// Explicitly mark whether `nutrient` has complete data
    pub fn set_complete(&mut self, nutrient: Nutrient, complete: bool) {
        self.complete[nutrient.ordinal()] = complete;
    }

    /// Finish building; the returned vector can no longer be mutated
    ///
    /// ```rust
    /// use nutrivec::vector::{FoodNutrientValue, MutableNutrientVector};
    /// use nutrivec::{Nutrient, Unit};
    ///
    /// let mut builder = MutableNutrientVector::new();
    /// builder.insert(FoodNutrientValue::new(Nutrient::Fat, 3.0, Unit::Grams).unwrap());
    /// let vector = builder.freeze();
    /// assert!(vector.is_frozen());
    /// ```
    ///
    /// A frozen vector has no `set`:
    ///
    /// ```compile_fail
    /// use nutrivec::vector::{FoodNutrientValue, MutableNutrientVector};
    /// use nutrivec::Nutrient;
    ///
    /// let mut vector = MutableNutrientVector::<FoodNutrientValue>::new().freeze();
    /// let _ = vector.set(Nutrient::Fat, None);
    /// ```
    ///
    /// no `insert`:
    ///
    /// ```compile_fail
    /// use nutrivec::vector::{FoodNutrientValue, MutableNutrientVector};
    /// use nutrivec::{Nutrient, Unit};
    ///
    /// let mut vector = MutableNutrientVector::<FoodNutrientValue>::new().freeze();
    /// vector.insert(FoodNutrientValue::new(Nutrient::Fat, 3.0, Unit::Grams).unwrap());
    /// ```
    ///
    /// and no `set_complete`:
    ///
    /// ```compile_fail
    /// use nutrivec::vector::{FoodNutrientValue, MutableNutrientVector};
    /// use nutrivec::Nutrient;
    ///
    /// let mut vector = MutableNutrientVector::<FoodNutrientValue>::new().freeze();
    /// vector.set_complete(Nutrient::Fat, true);
    /// ```
    #[must_use]
    pub fn freeze(self) -> NutrientVector<V, true> {
        NutrientVector {
            slots: self.slots,
            complete: self.complete,
            complete_by_default: self.complete_by_default,
            energy_proportions: OnceLock::new(),
        }
    }
}

impl<V: MeasurementValue> Default for NutrientVector<V, false> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: MeasurementValue, const FROZEN: bool> NutrientVector<V, FROZEN> {
    /// Value stored for `nutrient`
    #[must_use]
    pub fn get(&self, nutrient: Nutrient) -> Option<&V> {
        self.slots[nutrient.ordinal()].as_ref()
    }

    /// Amount of `nutrient`, optionally converted into `unit`
    ///
    /// Without a unit the raw stored amount is returned. No density is used,
    /// so a quantity cannot cross the mass/volume boundary here; see
    /// [`FoodNutrientVector::quantity_in`] for that.
    ///
    /// # Errors
    ///
    /// Returns `NutrientError::IncompatibleUnit` if `unit` is given and `nutrient`
    /// does not accept it (even when no value is stored), or
    /// `NutrientError::DensityRequired` for a quantity crossing mass/volume.
    pub fn amount_of(&self, nutrient: Nutrient, unit: Option<Unit>) -> NutrientResult<Option<f64>> {
        match (self.get(nutrient), unit) {
            (Some(value), Some(unit)) => value.amount_in(unit, None).map(Some),
            (Some(value), None) => Ok(Some(value.amount())),
            (None, Some(unit)) if !nutrient.accepts(unit) => {
                Err(NutrientError::incompatible(nutrient, unit))
            }
            (None, _) => Ok(None),
        }
    }

    /// Like [`NutrientVector::amount_of`], substituting `default` for missing data
    ///
    /// # Errors
    ///
    /// Same as [`NutrientVector::amount_of`].
    pub fn amount_of_or(
        &self,
        nutrient: Nutrient,
        unit: Option<Unit>,
        default: f64,
    ) -> NutrientResult<f64> {
        Ok(self.amount_of(nutrient, unit)?.unwrap_or(default))
    }

    /// Whether a value is stored for `nutrient`
    #[must_use]
    pub fn has_nutrient(&self, nutrient: Nutrient) -> bool {
        self.slots[nutrient.ordinal()].is_some()
    }

    /// Whether `nutrient` is flagged as complete
    #[must_use]
    pub const fn has_complete_data(&self, nutrient: Nutrient) -> bool {
        self.complete[nutrient.ordinal()]
    }

    /// Whether every nutrient in `nutrients` is flagged as complete
    pub fn has_complete_data_for<I>(&self, nutrients: I) -> bool
    where
        I: IntoIterator<Item = Nutrient>,
    {
        nutrients.into_iter().all(|n| self.has_complete_data(n))
    }

    /// Nutrients whose completeness flag is false
    #[must_use]
    pub fn incomplete_data_nutrients(&self) -> BTreeSet<Nutrient> {
        Nutrient::ALL
            .into_iter()
            .filter(|n| !self.has_complete_data(*n))
            .collect()
    }

    /// Unit of the stored value, or the table's default unit for `nutrient`
    #[must_use]
    pub fn unit_of(&self, nutrient: Nutrient, fallback: &UnitTable) -> Unit {
        self.get(nutrient)
            .map_or_else(|| fallback.unit_for(nutrient), MeasurementValue::unit)
    }

    /// Stored values in ordinal order
    pub fn nutrient_values(&self) -> impl Iterator<Item = &V> {
        self.slots.iter().flatten()
    }

    /// Number of populated slots
    #[must_use]
    pub fn len(&self) -> usize {
        self.nutrient_values().count()
    }

    /// Whether no slot is populated
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Whether completeness follows slot occupancy
    #[must_use]
    pub const fn completes_by_default(&self) -> bool {
        self.complete_by_default
    }

    /// Whether this vector rejects mutation
    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        FROZEN
    }

    /// Independent mutable copy of this vector
    #[must_use]
    pub fn to_mutable(&self) -> MutableNutrientVector<V> {
        NutrientVector {
            slots: self.slots.clone(),
            complete: self.complete,
            complete_by_default: self.complete_by_default,
            energy_proportions: OnceLock::new(),
        }
    }
}

impl<V: MeasurementValue> NutrientVector<V, true> {
    /// Proportion of macronutrient-predicted energy contributed by each
    /// energy component, computed once with the process-wide energy factors
    #[must_use]
    pub fn energy_proportions(&self) -> &EnergyMap {
        self.energy_proportions
            .get_or_init(|| EnergyCalculator::global().proportions_of(self))
    }

    /// Share of predicted energy from `nutrient`; 0.0 for nutrients that
    /// contribute no energy
    #[must_use]
    pub fn energy_proportion(&self, nutrient: Nutrient) -> f64 {
        self.energy_proportions()
            .get(&nutrient)
            .copied()
            .unwrap_or(0.0)
    }
}

impl<V: PartialEq, const A: bool, const B: bool> PartialEq<NutrientVector<V, B>>
    for NutrientVector<V, A>
{
    fn eq(&self, other: &NutrientVector<V, B>) -> bool {
        self.slots == other.slots
            && self.complete == other.complete
            && self.complete_by_default == other.complete_by_default
    }
}
