// ABOUTME: Rescaling, quantity-unit changes and gap filling for nutrient vectors
// ABOUTME: Every operation returns a new frozen vector and leaves its input untouched
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrivec_core::{
    DensityPolicy, Nutrient, NutrientError, NutrientResult, Quantity, Unit, UnitTable,
};
use tracing::{debug, warn};

use crate::vector::{
    FoodNutrientValue, FoodNutrientVector, MeasurementValue, MutableNutrientVector,
    NutrientVector,
};

impl<V: MeasurementValue, const FROZEN: bool> NutrientVector<V, FROZEN> {
    /// Fill empty slots from `other`
    ///
    /// Populated slots keep this vector's value and completeness. Empty slots
    /// take `other`'s value without its identity metadata, along with
    /// `other`'s completeness flag.
    #[must_use]
    pub fn fill_missing_data<const OTHER: bool>(
        &self,
        other: &NutrientVector<V, OTHER>,
    ) -> NutrientVector<V> {
        let mut filled =
            MutableNutrientVector::with_default_completeness(self.completes_by_default());
        for nutrient in Nutrient::ALL {
            let (value, complete) = match self.get(nutrient) {
                Some(value) => (Some(value.clone()), self.has_complete_data(nutrient)),
                None => (
                    other.get(nutrient).map(MeasurementValue::detached),
                    other.has_complete_data(nutrient),
                ),
            };
            if let Some(value) = value {
                filled.insert(value);
            }
            filled.set_complete(nutrient, complete);
        }
        filled.freeze()
    }
}

impl<const FROZEN: bool> FoodNutrientVector<FROZEN> {
    /// Re-express QUANTITY in `new_unit`, leaving every other nutrient as is
    ///
    /// A vector without QUANTITY is treated as 100 g. QUANTITY stays complete
    /// only if it was complete and the density was not guessed.
    ///
    /// # Errors
    ///
    /// Returns `NutrientError::IncompatibleUnit` if `new_unit` is not a mass or
    /// volume unit, or `NutrientError::DensityRequired` when crossing
    /// mass/volume under `DensityPolicy::RequireDensity` without a density.
    pub fn with_quantity_unit(
        &self,
        new_unit: Unit,
        policy: DensityPolicy,
    ) -> NutrientResult<FoodNutrientVector> {
        if !Nutrient::Quantity.accepts(new_unit) {
            return Err(NutrientError::incompatible(Nutrient::Quantity, new_unit));
        }
        let current = self.reference_quantity();
        if current.unit() == new_unit {
            return Ok(self.to_frozen());
        }

        let (density, guessed) = if current.unit().unit_type() == new_unit.unit_type() {
            (None, false)
        } else {
            let resolved = policy.resolve(self.density())?;
            (Some(resolved.grams_per_ml), resolved.guessed)
        };
        let converted = current.converted_to(new_unit, density)?;
        if guessed {
            debug!(
                from = %current.unit(),
                to = %new_unit,
                "Guessed 1 g/ml density for quantity conversion"
            );
        }

        let complete = self.has_complete_data(Nutrient::Quantity) && !guessed;
        let mut vector = self.to_mutable();
        vector.insert(FoodNutrientValue::quantity(converted));
        vector.set_complete(Nutrient::Quantity, complete);
        Ok(vector.freeze())
    }

    /// Scale every nutrient so the vector describes `amount` of `unit`
    ///
    /// When `unit` differs from the current quantity unit, the quantity is
    /// first converted with [`DensityPolicy::DefaultToOne`]. A vector without
    /// QUANTITY is treated as 100 g. Rescaling from a zero quantity yields
    /// non-finite amounts, which are kept as is.
    ///
    /// # Errors
    ///
    /// Returns `NutrientError::IncompatibleUnit` if `unit` is not a mass or volume unit.
    pub fn rescale(&self, amount: f64, unit: Unit) -> NutrientResult<FoodNutrientVector> {
        let base = if unit == self.quantity_unit() {
            self.to_frozen()
        } else {
            self.with_quantity_unit(unit, DensityPolicy::DefaultToOne)?
        };

        let current = base.reference_quantity().amount();
        let ratio = amount / current;
        if !ratio.is_finite() {
            warn!(
                current,
                requested = amount,
                unit = %unit,
                "Rescaling produced a non-finite ratio"
            );
        }

        let mut scaled = base.to_mutable();
        for value in base.nutrient_values() {
            let nutrient = value.nutrient();
            if nutrient == Nutrient::Quantity {
                continue;
            }
            scaled.insert(value.scaled(ratio));
            scaled.set_complete(nutrient, base.has_complete_data(nutrient));
        }
        scaled.insert(FoodNutrientValue::quantity(Quantity::new(amount, unit)?));
        scaled.set_complete(Nutrient::Quantity, base.has_complete_data(Nutrient::Quantity));

        debug!(ratio, amount, unit = %unit, "Rescaled nutrient vector");
        Ok(scaled.freeze())
    }

    /// Rescale to the given quantity
    ///
    /// # Errors
    ///
    /// Same as [`FoodNutrientVector::rescale`].
    pub fn rescale_to(&self, quantity: Quantity) -> NutrientResult<FoodNutrientVector> {
        self.rescale(quantity.amount(), quantity.unit())
    }

    /// Fill empty slots from `other`; density is this vector's, else `other`'s
    #[must_use]
    pub fn fill_missing_data<const OTHER: bool>(
        &self,
        other: &FoodNutrientVector<OTHER>,
    ) -> FoodNutrientVector {
        let data = (**self).fill_missing_data(&**other);
        FoodNutrientVector::<true>::from_parts(data, self.density().or_else(|| other.density()))
    }

    /// Convert every nutrient except QUANTITY into the table's unit
    ///
    /// # Errors
    ///
    /// Returns `NutrientError::IncompatibleUnit` if the table assigns a unit
    /// the nutrient cannot be measured in.
    pub fn with_default_units(&self, table: &UnitTable) -> NutrientResult<FoodNutrientVector> {
        let mut converted = self.to_mutable();
        for value in self.nutrient_values() {
            let nutrient = value.nutrient();
            if nutrient == Nutrient::Quantity {
                continue;
            }
            converted.insert(value.converted_to(table.unit_for(nutrient), None)?);
            converted.set_complete(nutrient, self.has_complete_data(nutrient));
        }
        Ok(converted.freeze())
    }
}

/// Scale `vector` to describe `amount` of `unit`
///
/// # Errors
///
/// Same as [`FoodNutrientVector::rescale`].
pub fn rescale<const FROZEN: bool>(
    vector: &FoodNutrientVector<FROZEN>,
    amount: f64,
    unit: Unit,
) -> NutrientResult<FoodNutrientVector> {
    vector.rescale(amount, unit)
}

/// Fill `primary`'s empty slots from `other`
#[must_use]
pub fn fill_missing_data<const A: bool, const B: bool>(
    primary: &FoodNutrientVector<A>,
    other: &FoodNutrientVector<B>,
) -> FoodNutrientVector {
    primary.fill_missing_data(other)
}
