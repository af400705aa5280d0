/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::QuantityError;
use crate::number::Number;
use crate::parser::parse_quantity;
use crate::unit::DimensionalUnit;

/// A numeric value with its unit of measurement.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Quantity(pub f64, pub DimensionalUnit);

impl Quantity {
    pub fn new(value: f64, unit: DimensionalUnit) -> Self {
        Quantity(value, unit)
    }

    pub fn parse(input: &str) -> Result<Self, QuantityError> {
        parse_quantity(input)
    }

    /// Express this quantity in another unit.
    pub fn convert(
        &self,
        unit: &DimensionalUnit,
    ) -> Result<Self, QuantityError> {
        Ok(Quantity(self.0 * self.1.to(unit)?, unit.clone()))
    }

    /// The canonical number: integer channel when exact.
    pub fn number(&self) -> Number {
        Number::from_scaled(self.0)
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self.1.is_dimensionless() {
            true => write!(f, "{}", self.number()),
            false => write!(f, "{} {}", self.number(), self.1),
        }
    }
}

impl FromStr for Quantity {
    type Err = QuantityError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
