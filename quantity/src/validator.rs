/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};

use crate::error::QuantityError;
use crate::interval::Interval;
use crate::number::Number;
use crate::parser::parse_intervals;
use crate::quantity::Quantity;
use crate::quantity_interval::QuantityInterval;
use crate::unit::{DimensionalUnit, DIMENSIONLESS_UNIT};

/// An ordered, non-overlapping sequence of intervals sharing a
/// target unit. Quantities are converted into the target unit, then
/// matched against the intervals in insertion order.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct IntervalsValidator {
    unit: DimensionalUnit,
    intervals: Vec<QuantityInterval>,
}

impl IntervalsValidator {
    pub fn parse(input: &str) -> Result<Self, QuantityError> {
        parse_intervals(input)
    }

    /// Check duplicates and endpoint ordering, then take ownership of
    /// the interval list.
    ///
    /// Ordering is checked in two channels at once. Each endpoint
    /// must be at least the running maximum of the channel it parsed
    /// in; both maxima then advance, the other channel by saturating
    /// conversion. Endpoints that collide in one channel can still be
    /// ordered by the other.
    pub(crate) fn new(
        unit: DimensionalUnit,
        intervals: Vec<Interval>,
    ) -> Result<Self, QuantityError> {
        let mut seen = HashSet::new();
        let mut greatest_long = i64::MIN;
        let mut greatest_double = -f64::MAX;
        let mut checked = Vec::new();
        for interval in intervals {
            let quantity_interval =
                QuantityInterval::new(interval, unit.clone());
            if !seen.insert(quantity_interval.to_string()) {
                return Err(QuantityError::DuplicateInterval(
                    quantity_interval.to_string(),
                ));
            }
            match interval.left() {
                Some(endpoint) => advance(
                    endpoint,
                    &mut greatest_long,
                    &mut greatest_double,
                )?,
                None => {
                    // An unbounded left end counts LONG_MIN / -MAX
                    // and can therefore only come first.
                    if greatest_long > i64::MIN
                        || greatest_double > -f64::MAX
                    {
                        return Err(QuantityError::NotInOrder(
                            "-\u{221e}".to_string(),
                        ));
                    }
                }
            }
            match interval.right() {
                Some(endpoint) => advance(
                    endpoint,
                    &mut greatest_long,
                    &mut greatest_double,
                )?,
                None => {
                    greatest_long = i64::MAX;
                    greatest_double = f64::MAX;
                }
            }
            checked.push(quantity_interval);
        }
        Ok(IntervalsValidator {
            unit,
            intervals: checked,
        })
    }

    pub fn unit(&self) -> &DimensionalUnit {
        &self.unit
    }

    pub fn intervals(&self) -> &[QuantityInterval] {
        &self.intervals
    }

    /// Whether the quantity falls in any interval. All failures
    /// (unparseable input, incompatible unit, no match) downgrade to
    /// `false`.
    pub fn is_valid(&self, input: &str) -> bool {
        self.normalize(input).is_ok()
    }

    pub fn is_valid_value(&self, value: f64) -> bool {
        self.normalize_value(value).is_ok()
    }

    /// The quantity expressed in the target unit, provided it falls
    /// in one of the intervals.
    pub fn normalize(&self, input: &str) -> Result<String, QuantityError> {
        self.normalize_quantity(&Quantity::parse(input)?)
    }

    pub fn normalize_value(
        &self,
        value: f64,
    ) -> Result<String, QuantityError> {
        self.normalize_quantity(&Quantity(value, DIMENSIONLESS_UNIT))
    }

    fn normalize_quantity(
        &self,
        quantity: &Quantity,
    ) -> Result<String, QuantityError> {
        let interval = match self.intervals.first() {
            Some(interval) => interval,
            None => {
                return Err(QuantityError::NotWithin(quantity.to_string()))
            }
        };
        let scaled = Number::from_scaled(interval.scale(quantity)?);
        match self
            .intervals
            .iter()
            .any(|interval| interval.interval().contains(&scaled))
        {
            true => Ok(match self.unit.is_dimensionless() {
                true => scaled.to_string(),
                false => format!("{} {}", scaled, self.unit),
            }),
            false => Err(QuantityError::NotWithin(quantity.to_string())),
        }
    }
}

fn advance(
    endpoint: Number,
    greatest_long: &mut i64,
    greatest_double: &mut f64,
) -> Result<(), QuantityError> {
    match endpoint {
        Number::Long(n) => {
            if n < *greatest_long {
                return Err(QuantityError::NotInOrder(n.to_string()));
            }
            *greatest_long = n;
            *greatest_double = greatest_double.max(n as f64);
        }
        Number::Double(d) => {
            if d < *greatest_double {
                return Err(QuantityError::NotInOrder(d.to_string()));
            }
            *greatest_double = d;
            *greatest_long = (*greatest_long).max(endpoint.ceil_long());
        }
    }
    Ok(())
}

impl Display for IntervalsValidator {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        if !self.unit.is_dimensionless() {
            write!(f, "{}: ", self.unit)?;
        }
        write!(
            f,
            "{}",
            self.intervals
                .iter()
                .map(|interval| interval.interval().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        )
    }
}
