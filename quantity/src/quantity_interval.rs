/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};

use crate::error::QuantityError;
use crate::interval::Interval;
use crate::number::Number;
use crate::quantity::Quantity;
use crate::unit::DimensionalUnit;

/// An interval annotated with the unit its endpoints are expressed
/// in. Incoming quantities in any commensurable unit are converted
/// before the containment test.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct QuantityInterval {
    interval: Interval,
    unit: DimensionalUnit,
}

impl QuantityInterval {
    pub fn new(interval: Interval, unit: DimensionalUnit) -> Self {
        QuantityInterval { interval, unit }
    }

    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    pub fn unit(&self) -> &DimensionalUnit {
        &self.unit
    }

    pub fn contains(&self, input: &str) -> Result<bool, QuantityError> {
        let quantity = Quantity::parse(input)?;
        let scaled = self.scale(&quantity)?;
        Ok(self.interval.contains(&Number::from_scaled(scaled)))
    }

    /// The incoming quantity expressed in the target unit, in
    /// canonical numeric form.
    pub fn normalize(&self, input: &str) -> Result<Number, QuantityError> {
        let quantity = Quantity::parse(input)?;
        Ok(Number::from_scaled(self.scale(&quantity)?))
    }

    pub(crate) fn scale(
        &self,
        quantity: &Quantity,
    ) -> Result<f64, QuantityError> {
        let ratio = quantity.1.to(&self.unit).map_err(|_| {
            QuantityError::IncompatibleUnit(
                quantity.1.to_string(),
                self.unit.to_string(),
            )
        })?;
        Ok(quantity.0 * ratio)
    }
}

/* Equality and hashing go through the canonical string form. */

impl Display for QuantityInterval {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.interval, self.unit)
    }
}

impl PartialEq for QuantityInterval {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for QuantityInterval {}

impl Hash for QuantityInterval {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}
