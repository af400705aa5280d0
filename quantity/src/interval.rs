/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use crate::error::QuantityError;
use crate::number::Number;
use crate::parser::parse_interval;

/// A numeric interval with per-endpoint openness. A missing endpoint
/// is unbounded (−∞ on the left, +∞ on the right) and is always open;
/// a closed infinite endpoint is rejected at parse time.
#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Interval {
    left_open: bool,
    left: Option<Number>,
    right_open: bool,
    right: Option<Number>,
}

impl Interval {
    pub fn parse(input: &str) -> Result<Self, QuantityError> {
        parse_interval(input)
    }

    pub(crate) fn new(
        left_open: bool,
        left: Option<Number>,
        right_open: bool,
        right: Option<Number>,
    ) -> Result<Self, QuantityError> {
        if (left.is_none() && !left_open) || (right.is_none() && !right_open)
        {
            return Err(QuantityError::AmbiguousInfinite);
        }
        Ok(Interval {
            left_open,
            left,
            right_open,
            right,
        })
    }

    pub fn left(&self) -> Option<Number> {
        self.left
    }

    pub fn right(&self) -> Option<Number> {
        self.right
    }

    /// Containment on the double channel, strict or not per endpoint
    /// openness.
    pub fn contains(&self, x: &Number) -> bool {
        let v = x.as_f64();
        let left_ok = match &self.left {
            None => true,
            Some(l) => match self.left_open {
                true => v > l.as_f64(),
                false => v >= l.as_f64(),
            },
        };
        let right_ok = match &self.right {
            None => true,
            Some(r) => match self.right_open {
                true => v < r.as_f64(),
                false => v <= r.as_f64(),
            },
        };
        left_ok && right_ok
    }
}

/* The canonical form uses parenthesis notation for open endpoints. */

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self.left_open {
            true => write!(f, "(")?,
            false => write!(f, "[")?,
        }
        match &self.left {
            None => write!(f, "-\u{221e}")?,
            Some(l) => write!(f, "{}", l)?,
        }
        write!(f, ", ")?;
        match &self.right {
            None => write!(f, "+\u{221e}")?,
            Some(r) => write!(f, "{}", r)?,
        }
        match self.right_open {
            true => write!(f, ")"),
            false => write!(f, "]"),
        }
    }
}
