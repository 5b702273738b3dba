// ABOUTME: Food and meal nutrient vectors with an optional density
// ABOUTME: Adds quantity handling and construction from raw persisted triples
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::ops::{Deref, DerefMut};

use nutrivec_core::constants::reference::DEFAULT_QUANTITY_GRAMS;
use nutrivec_core::{DensityPolicy, Nutrient, NutrientError, NutrientResult, Quantity, Unit};

use super::values::{FoodNutrientValue, MeasurementValue};
use super::NutrientVector;

/// Nutrient vector of a food or meal
///
/// Dereferences to the underlying [`NutrientVector`]. The density (g/ml) is
/// only used to move the quantity across the mass/volume boundary; every
/// other nutrient is independent of the display quantity unit.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodNutrientVector<const FROZEN: bool = true> {
    data: NutrientVector<FoodNutrientValue, FROZEN>,
    density: Option<f64>,
}

/// Food nutrient vector that still accepts mutation
pub type MutableFoodNutrientVector = FoodNutrientVector<false>;

impl FoodNutrientVector<false> {
    /// Empty vector without density
    #[must_use]
    pub fn new() -> Self {
        Self::with_density(None)
    }

    /// Empty vector with the given density
    #[must_use]
    pub fn with_density(density: Option<f64>) -> Self {
        Self {
            data: NutrientVector::new(),
            density,
        }
    }

    /// Replace the recorded density
    pub fn set_density(&mut self, density: Option<f64>) {
        self.density = density;
    }

    /// Finish building; the returned vector can no longer be mutated
    ///
    /// Mutation through the dereferenced [`NutrientVector`] is ruled out too:
    ///
    /// ```compile_fail
    /// use nutrivec::vector::MutableFoodNutrientVector;
    /// use nutrivec::Nutrient;
    ///
    /// let mut food = MutableFoodNutrientVector::new().freeze();
    /// let _ = food.set(Nutrient::Protein, None);
    /// ```
    ///
    /// ```compile_fail
    /// use nutrivec::vector::{FoodNutrientValue, MutableFoodNutrientVector};
    /// use nutrivec::{Nutrient, Unit};
    ///
    /// let mut food = MutableFoodNutrientVector::new().freeze();
    /// food.insert(FoodNutrientValue::new(Nutrient::Protein, 1.0, Unit::Grams).unwrap());
    /// ```
    ///
    /// ```compile_fail
    /// use nutrivec::vector::MutableFoodNutrientVector;
    /// use nutrivec::Nutrient;
    ///
    /// let mut food = MutableFoodNutrientVector::new().freeze();
    /// food.set_complete(Nutrient::Protein, false);
    /// ```
    ///
    /// ```compile_fail
    /// use nutrivec::vector::MutableFoodNutrientVector;
    ///
    /// let mut food = MutableFoodNutrientVector::new().freeze();
    /// food.set_density(Some(1.0));
    /// ```
    #[must_use]
    pub fn freeze(self) -> FoodNutrientVector {
        FoodNutrientVector {
            data: self.data.freeze(),
            density: self.density,
        }
    }
}

impl Default for FoodNutrientVector<false> {
    fn default() -> Self {
        Self::new()
    }
}

impl FoodNutrientVector {
    /// Build a frozen vector from persisted `(nutrient ordinal, amount, unit id)` triples
    ///
    /// # Errors
    ///
    /// Returns `NutrientError::UnknownNutrient` or `NutrientError::UnknownUnit` for ids
    /// missing from the catalog, and `NutrientError::IncompatibleUnit` when a
    /// unit cannot measure its nutrient.
    pub fn from_raw_values<I>(values: I, density: Option<f64>) -> NutrientResult<Self>
    where
        I: IntoIterator<Item = (i64, f64, i64)>,
    {
        let mut vector = MutableFoodNutrientVector::with_density(density);
        for (nutrient_id, amount, unit_id) in values {
            let nutrient = Nutrient::from_ordinal(nutrient_id)?;
            let unit = Unit::from_id(unit_id)?;
            vector.insert(FoodNutrientValue::new(nutrient, amount, unit)?);
        }
        Ok(vector.freeze())
    }

    pub(crate) const fn from_parts(
        data: NutrientVector<FoodNutrientValue>,
        density: Option<f64>,
    ) -> Self {
        Self { data, density }
    }

    /// Build a frozen vector from values, one per nutrient (later values win)
    #[must_use]
    pub fn from_values<I>(values: I, density: Option<f64>) -> Self
    where
        I: IntoIterator<Item = FoodNutrientValue>,
    {
        let mut vector = MutableFoodNutrientVector::with_density(density);
        for value in values {
            vector.insert(value);
        }
        vector.freeze()
    }
}

impl<const FROZEN: bool> FoodNutrientVector<FROZEN> {
    /// Recorded density in g/ml
    #[must_use]
    pub const fn density(&self) -> Option<f64> {
        self.density
    }

    /// Stored quantity, if any
    #[must_use]
    pub fn quantity(&self) -> Option<Quantity> {
        self.get(Nutrient::Quantity)
            .and_then(|value| Quantity::new(value.amount(), value.unit()).ok())
    }

    /// Stored quantity, or 100 g when the vector records none
    #[must_use]
    pub fn reference_quantity(&self) -> Quantity {
        self.quantity()
            .unwrap_or_else(|| Quantity::grams(DEFAULT_QUANTITY_GRAMS))
    }

    /// Unit of the reference quantity
    #[must_use]
    pub fn quantity_unit(&self) -> Unit {
        self.reference_quantity().unit()
    }

    /// Stored quantity expressed in `unit`, resolving density per `policy`
    ///
    /// # Errors
    ///
    /// Returns `NutrientError::IncompatibleUnit` if `unit` is not a mass or volume
    /// unit, or `NutrientError::DensityRequired` when the policy cannot supply a density.
    pub fn quantity_in(&self, unit: Unit, policy: DensityPolicy) -> NutrientResult<Option<Quantity>> {
        if !Nutrient::Quantity.accepts(unit) {
            return Err(NutrientError::incompatible(Nutrient::Quantity, unit));
        }
        let Some(quantity) = self.quantity() else {
            return Ok(None);
        };
        let density = if quantity.unit().unit_type() == unit.unit_type() {
            None
        } else {
            Some(policy.resolve(self.density)?.grams_per_ml)
        };
        quantity.converted_to(unit, density).map(Some)
    }

    /// Independent mutable copy of this vector
    #[must_use]
    pub fn to_mutable(&self) -> MutableFoodNutrientVector {
        FoodNutrientVector {
            data: self.data.to_mutable(),
            density: self.density,
        }
    }

    /// Frozen copy of this vector
    #[must_use]
    pub fn to_frozen(&self) -> FoodNutrientVector {
        self.to_mutable().freeze()
    }
}

impl<const FROZEN: bool> Deref for FoodNutrientVector<FROZEN> {
    type Target = NutrientVector<FoodNutrientValue, FROZEN>;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl DerefMut for FoodNutrientVector<false> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}
