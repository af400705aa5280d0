/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use crate::error::QuantityError;
use crate::prefix::{PrefixFamily, UnitPrefix};

/// One multiplicative term of a unit expression:
/// `value · (prefix symbol)^exponent`.
///
/// The value is a scalar multiplier not absorbed into the prefix;
/// terms produced by parsing always carry 1. An exponent of 0 means
/// the term cancels out and is removed by simplification.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Factor {
    value: f64,
    prefix: UnitPrefix,
    symbol: String,
    exponent: i32,
}

impl Factor {
    pub fn new(
        value: f64,
        prefix: UnitPrefix,
        symbol: impl Into<String>,
        exponent: i32,
    ) -> Self {
        Factor {
            value,
            prefix,
            symbol: symbol.into(),
            exponent,
        }
    }

    pub fn prefixed(
        prefix: UnitPrefix,
        symbol: impl Into<String>,
        exponent: i32,
    ) -> Self {
        Self::new(1.0, prefix, symbol, exponent)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn prefix(&self) -> UnitPrefix {
        self.prefix
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// The scalar contribution of this term.
    pub fn effective(&self) -> f64 {
        self.value * self.prefix.multiplier().powi(self.exponent)
    }

    pub fn symbol_eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }

    pub fn dimension_eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol && self.exponent == other.exponent
    }

    /// Merge two like terms: exponents add, both effective
    /// contributions move into the value and the prefix is reset.
    /// The caller re-assigns a best-fit prefix afterwards.
    pub fn combine(&self, other: &Self) -> Result<Self, QuantityError> {
        if self.symbol != other.symbol {
            return Err(QuantityError::DifferentSymbols(
                self.symbol.clone(),
                other.symbol.clone(),
            ));
        }
        Ok(Factor {
            value: self.effective() * other.effective(),
            prefix: UnitPrefix::IDENTITY,
            symbol: self.symbol.clone(),
            exponent: self.exponent + other.exponent,
        })
    }

    /// Drop the prefix into the scalar channel.
    pub fn normalized(&self) -> Self {
        Factor {
            value: 1.0,
            prefix: UnitPrefix::IDENTITY,
            symbol: self.symbol.clone(),
            exponent: self.exponent,
        }
    }

    /// Re-assign the best-fitting prefix from the family's table for
    /// this term's effective value.
    pub fn simplified(&self, family: PrefixFamily) -> Self {
        Factor {
            value: 1.0,
            prefix: family.for_value(self.effective(), self.exponent),
            symbol: self.symbol.clone(),
            exponent: self.exponent,
        }
    }

    /// Multiply the exponent, typically by ±1.
    pub fn raise(&self, n: i32) -> Self {
        Factor {
            value: self.value,
            prefix: self.prefix,
            symbol: self.symbol.clone(),
            exponent: self.exponent * n,
        }
    }
}

impl Display for Factor {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        if self.value != 1.0 {
            write!(f, "{} ", self.value)?;
        }
        write!(
            f,
            "{}{}{}",
            self.prefix,
            self.symbol,
            superscript(self.exponent)
        )
    }
}

/// Superscript digits 0..9, shared between rendering and parsing.
pub(crate) static SUPERSCRIPTS: [char; 10] = [
    '\u{2070}', '\u{00b9}', '\u{00b2}', '\u{00b3}', '\u{2074}', '\u{2075}',
    '\u{2076}', '\u{2077}', '\u{2078}', '\u{2079}',
];

/// Superscript rendering of an exponent; 1 is elided.
pub(crate) fn superscript(exponent: i32) -> String {
    match exponent {
        1 => String::new(),
        n => n
            .to_string()
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(d) => SUPERSCRIPTS[d as usize],
                None => '\u{207b}',
            })
            .collect(),
    }
}
