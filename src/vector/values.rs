// ABOUTME: Measurement value types stored in nutrient vectors
// ABOUTME: Defines the MeasurementValue trait with food and target (goal) variants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Debug;

use chrono::{DateTime, Utc};
use nutrivec_core::{convert, Nutrient, NutrientError, NutrientResult, Quantity, Unit};
use serde::{Deserialize, Serialize};

/// A single (nutrient, amount, unit) measurement
///
/// Implementations uphold `nutrient().accepts(unit())`: constructors reject
/// incompatible units, and [`MeasurementValue::with_amount`] is only called
/// with units produced by a successful conversion or the value's own unit.
pub trait MeasurementValue: Clone + Debug {
    /// Nutrient being measured
    fn nutrient(&self) -> Nutrient;

    /// Numeric amount in [`MeasurementValue::unit`]
    fn amount(&self) -> f64;

    /// Unit of the amount
    fn unit(&self) -> Unit;

    /// Copy of this value carrying a different amount and unit
    #[must_use]
    fn with_amount(&self, amount: f64, unit: Unit) -> Self;

    /// Copy of this value without identity or provenance metadata
    #[must_use]
    fn detached(&self) -> Self {
        self.clone()
    }

    /// Amount converted into `unit`
    ///
    /// # Errors
    ///
    /// Returns `NutrientError::IncompatibleUnit` if the nutrient does not accept `unit`,
    /// or `NutrientError::DensityRequired` for a quantity crossing mass/volume without density.
    fn amount_in(&self, unit: Unit, density: Option<f64>) -> NutrientResult<f64> {
        convert(self.nutrient(), self.amount(), self.unit(), unit, density)
    }

    /// Copy of this value re-expressed in `unit`
    ///
    /// # Errors
    ///
    /// Same as [`MeasurementValue::amount_in`].
    fn converted_to(&self, unit: Unit, density: Option<f64>) -> NutrientResult<Self> {
        Ok(self.with_amount(self.amount_in(unit, density)?, unit))
    }

    /// Copy of this value with its amount multiplied by `ratio`
    #[must_use]
    fn scaled(&self, ratio: f64) -> Self {
        self.with_amount(self.amount() * ratio, self.unit())
    }
}

fn check_compatible(nutrient: Nutrient, unit: Unit) -> NutrientResult<()> {
    if nutrient.accepts(unit) {
        Ok(())
    } else {
        Err(NutrientError::incompatible(nutrient, unit))
    }
}

/// Persistence metadata carried opaquely alongside a stored value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMeta {
    /// Database id of the value row
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Database id of the owning food or meal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last modification timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

impl RecordMeta {
    /// Whether no metadata is present
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.parent_id.is_none()
            && self.created_at.is_none()
            && self.modified_at.is_none()
    }
}

/// Nutrient amount recorded for a food or meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodNutrientValue {
    nutrient: Nutrient,
    amount: f64,
    unit: Unit,
    #[serde(default, skip_serializing_if = "RecordMeta::is_empty")]
    meta: RecordMeta,
}

impl FoodNutrientValue {
    /// Create a value without metadata
    ///
    /// # Errors
    ///
    /// Returns `NutrientError::IncompatibleUnit` if `nutrient` does not accept `unit`.
    pub fn new(nutrient: Nutrient, amount: f64, unit: Unit) -> NutrientResult<Self> {
        check_compatible(nutrient, unit)?;
        Ok(Self::trusted(nutrient, amount, unit))
    }

    /// Create a quantity value
    #[must_use]
    pub const fn quantity(quantity: Quantity) -> Self {
        Self::trusted(Nutrient::Quantity, quantity.amount(), quantity.unit())
    }

    /// Construct from parts already known to be compatible
    pub(crate) const fn trusted(nutrient: Nutrient, amount: f64, unit: Unit) -> Self {
        Self {
            nutrient,
            amount,
            unit,
            meta: RecordMeta {
                id: None,
                parent_id: None,
                created_at: None,
                modified_at: None,
            },
        }
    }

    /// Attach persistence metadata
    #[must_use]
    pub fn with_meta(mut self, meta: RecordMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Persistence metadata
    #[must_use]
    pub const fn meta(&self) -> &RecordMeta {
        &self.meta
    }
}

impl MeasurementValue for FoodNutrientValue {
    fn nutrient(&self) -> Nutrient {
        self.nutrient
    }

    fn amount(&self) -> f64 {
        self.amount
    }

    fn unit(&self) -> Unit {
        self.unit
    }

    fn with_amount(&self, amount: f64, unit: Unit) -> Self {
        debug_assert!(self.nutrient.accepts(unit));
        Self {
            amount,
            unit,
            ..self.clone()
        }
    }

    fn detached(&self) -> Self {
        Self {
            meta: RecordMeta::default(),
            ..self.clone()
        }
    }
}

/// How a goal amount constrains intake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintSpec {
    /// Not constrained
    #[default]
    Ignore,
    /// Intake should be at least the amount
    Minimum,
    /// Intake should be at most the amount
    Maximum,
    /// Intake should be close to the amount
    Target,
}

impl ConstraintSpec {
    /// Integer tag used in storage
    #[must_use]
    pub const fn as_raw(self) -> i64 {
        match self {
            Self::Ignore => 0,
            Self::Minimum => 1,
            Self::Maximum => 2,
            Self::Target => 3,
        }
    }

    /// Parse the storage tag
    #[must_use]
    pub const fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(Self::Ignore),
            1 => Some(Self::Minimum),
            2 => Some(Self::Maximum),
            3 => Some(Self::Target),
            _ => None,
        }
    }
}

/// Goal amount for a nutrient, tagged with a constraint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetValue {
    nutrient: Nutrient,
    amount: f64,
    unit: Unit,
    constraint: ConstraintSpec,
}

impl TargetValue {
    /// Create a goal value
    ///
    /// # Errors
    ///
    /// Returns `NutrientError::IncompatibleUnit` if `nutrient` does not accept `unit`.
    pub fn new(
        nutrient: Nutrient,
        amount: f64,
        unit: Unit,
        constraint: ConstraintSpec,
    ) -> NutrientResult<Self> {
        check_compatible(nutrient, unit)?;
        Ok(Self {
            nutrient,
            amount,
            unit,
            constraint,
        })
    }

    /// Constraint tag
    #[must_use]
    pub const fn constraint(&self) -> ConstraintSpec {
        self.constraint
    }
}

impl MeasurementValue for TargetValue {
    fn nutrient(&self) -> Nutrient {
        self.nutrient
    }

    fn amount(&self) -> f64 {
        self.amount
    }

    fn unit(&self) -> Unit {
        self.unit
    }

    fn with_amount(&self, amount: f64, unit: Unit) -> Self {
        debug_assert!(self.nutrient.accepts(unit));
        Self {
            amount,
            unit,
            ..self.clone()
        }
    }
}
