/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use crate::error::QuantityError;

/// A number tagged with the channel it parsed in. Integers and
/// doubles compare differently near the precision limits, so the
/// channel is kept until a comparison decides which one applies.
#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum Number {
    Long(i64),
    Double(f64),
}

impl Number {
    /// Parse a decimal, preferring the 64-bit integer channel.
    pub fn parse(input: &str) -> Result<Self, QuantityError> {
        let text = input.trim();
        if let Ok(n) = text.parse::<i64>() {
            return Ok(Number::Long(n));
        }
        match text.parse::<f64>() {
            Ok(d) if !d.is_nan() => Ok(Number::Double(d)),
            _ => Err(QuantityError::NotANumber(input.to_string())),
        }
    }

    /// The canonical number for a scaled value: the integer channel
    /// when the value is an exact in-range integer.
    pub fn from_scaled(v: f64) -> Self {
        if v.is_finite()
            && v.fract() == 0.0
            && v >= i64::MIN as f64
            && v < i64::MAX as f64
        {
            Number::Long(v as i64)
        } else {
            Number::Double(v)
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Long(n) => *n as f64,
            Number::Double(d) => *d,
        }
    }

    /// The integer-channel view, saturating at the i64 range ends and
    /// rounding fractions up so that a derived maximum never drops
    /// below the double it came from.
    pub(crate) fn ceil_long(&self) -> i64 {
        match self {
            Number::Long(n) => *n,
            Number::Double(d) if *d >= i64::MAX as f64 => i64::MAX,
            Number::Double(d) if *d <= i64::MIN as f64 => i64::MIN,
            Number::Double(d) => d.ceil() as i64,
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            Number::Long(n) => write!(f, "{}", n),
            Number::Double(d) => write!(f, "{}", d),
        }
    }
}
