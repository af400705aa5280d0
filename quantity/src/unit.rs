/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::hash_map::DefaultHasher;
use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::QuantityError;
use crate::factor::Factor;
use crate::parser::{parse_unit, parse_unit_with};
use crate::prefix::PrefixFamily;

/// A product of factors representing a unit of measurement.
///
/// This is an open symbolic system: any symbol participates in the
/// algebra, and conversion succeeds exactly when the factors of both
/// sides cancel. Invariants after construction: no two factors share
/// a symbol, no factor has exponent 0, and factors with positive
/// exponent precede those with negative exponent, each group in
/// first-occurrence order of the input expression.
#[derive(Clone, Debug)]
#[cfg_attr(
    not(feature = "serialize_as_string"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(
    feature = "serialize_as_string",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
#[cfg_attr(
    all(feature = "schemars", not(feature = "serialize_as_string")),
    derive(schemars::JsonSchema)
)]
pub struct DimensionalUnit {
    value: f64,
    factors: Vec<Factor>,
}

/// The dimensionless unit 1.
pub const DIMENSIONLESS_UNIT: DimensionalUnit = DimensionalUnit {
    value: 1.0,
    factors: Vec::new(),
};

impl DimensionalUnit {
    pub fn parse(input: &str) -> Result<Self, QuantityError> {
        parse_unit(input)
    }

    pub fn parse_with(
        input: &str,
        family: PrefixFamily,
    ) -> Result<Self, QuantityError> {
        parse_unit_with(input, family)
    }

    /// Build a unit from raw terms: combine like symbols, drop
    /// cancelled terms, re-prefix the survivors against the family's
    /// table and partition positive before negative exponents. The
    /// family is detected from the terms when not given.
    pub(crate) fn from_factors(
        factors: Vec<Factor>,
        family: Option<PrefixFamily>,
    ) -> Result<Self, QuantityError> {
        let family = family.unwrap_or_else(|| detect_family(&factors));
        let mut value = 1.0;
        let mut simplified = Vec::new();
        for factor in combine_like_terms(factors)? {
            if factor.exponent() == 0 {
                value *= factor.effective();
                continue;
            }
            let best = factor.simplified(family);
            value *= factor.effective() / best.effective();
            simplified.push(best);
        }
        let (positive, negative): (Vec<_>, Vec<_>) = simplified
            .into_iter()
            .partition(|factor| factor.exponent() > 0);
        Ok(DimensionalUnit {
            value,
            factors: positive.into_iter().chain(negative).collect(),
        })
    }

    pub fn scalar(&self) -> f64 {
        self.value
    }

    pub fn factors(&self) -> &[Factor] {
        &self.factors
    }

    pub fn is_dimensionless(&self) -> bool {
        self.factors.is_empty()
    }

    /// The scalar conversion ratio into `other`. All prefixes move to
    /// the scalar channel; if any factor survives cancellation the
    /// units are not commensurable.
    pub fn to(&self, other: &Self) -> Result<f64, QuantityError> {
        let mut ratio = self.value / other.value;
        let combined = self
            .factors
            .iter()
            .cloned()
            .chain(other.factors.iter().map(|factor| factor.raise(-1)))
            .collect();
        let mut residual = Vec::new();
        for factor in combine_like_terms(combined)? {
            if factor.exponent() == 0 {
                ratio *= factor.effective();
            } else {
                residual.push(factor.normalized());
            }
        }
        match residual.is_empty() {
            true => Ok(ratio),
            false => Err(QuantityError::NonScalarDimension(
                residual
                    .iter()
                    .map(|factor| factor.to_string())
                    .collect::<Vec<_>>()
                    .join("\u{00b7}"),
            )),
        }
    }
}

fn detect_family(factors: &[Factor]) -> PrefixFamily {
    match factors
        .iter()
        .any(|factor| factor.prefix().family() == PrefixFamily::Binary)
    {
        true => PrefixFamily::Binary,
        false => PrefixFamily::Metric,
    }
}

/// Combine factors sharing a symbol, preserving first-occurrence
/// order.
fn combine_like_terms(
    factors: Vec<Factor>,
) -> Result<Vec<Factor>, QuantityError> {
    let mut combined: Vec<Factor> = Vec::new();
    for factor in factors {
        match combined.iter_mut().find(|c| c.symbol_eq(&factor)) {
            Some(c) => *c = c.combine(&factor)?,
            None => combined.push(factor),
        }
    }
    Ok(combined)
}

/* Display. */

impl Display for DimensionalUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        if self.value != 1.0 {
            write!(f, "{} ", self.value)?;
        }
        write!(
            f,
            "{}",
            self.factors
                .iter()
                .filter(|factor| factor.exponent() > 0)
                .map(|factor| factor.to_string())
                .collect::<Vec<_>>()
                .join("\u{00b7}")
        )?;
        let negative = self
            .factors
            .iter()
            .filter(|factor| factor.exponent() < 0)
            .map(|factor| factor.raise(-1).to_string())
            .collect::<Vec<_>>();
        if !negative.is_empty() {
            write!(f, "/{}", negative.join("\u{00b7}"))?;
        }
        Ok(())
    }
}

impl FromStr for DimensionalUnit {
    type Err = QuantityError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<DimensionalUnit> for String {
    fn from(val: DimensionalUnit) -> Self {
        format!("{}", val)
    }
}

impl TryFrom<String> for DimensionalUnit {
    type Error = QuantityError;
    fn try_from(val: String) -> Result<Self, Self::Error> {
        Self::parse(&val)
    }
}

/* Units are equal when they convert to each other with ratio 1. */

impl PartialEq for DimensionalUnit {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.to(other), Ok(ratio) if ratio == 1.0)
    }
}

/* The hash is order-independent over the factors so that it agrees
 * with the conversion-based equality. */

impl Hash for DimensionalUnit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.to_bits().hash(state);
        let mut acc: u64 = 0;
        for factor in &self.factors {
            let mut hasher = DefaultHasher::new();
            factor.effective().to_bits().hash(&mut hasher);
            factor.symbol().hash(&mut hasher);
            factor.exponent().hash(&mut hasher);
            acc ^= hasher.finish();
        }
        acc.hash(state);
    }
}

#[cfg(all(feature = "schemars", feature = "serialize_as_string"))]
impl schemars::JsonSchema for DimensionalUnit {
    fn schema_name() -> String {
        String::from("DimensionalUnit")
    }

    fn json_schema(
        gen: &mut schemars::gen::SchemaGenerator,
    ) -> schemars::schema::Schema {
        String::json_schema(gen)
    }
}
