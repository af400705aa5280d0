/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use super::binary::BinaryPrefix;
use super::metric::MetricPrefix;
use super::prefix_trait::Prefix;
use crate::error::QuantityError;

/// The two prefix tables. A unit expression is simplified against
/// one table; mixing families within an expression is resolved in
/// favour of the binary table.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum PrefixFamily {
    Metric,
    Binary,
}

impl PrefixFamily {
    /// Best-fitting prefix from this family's table for an effective
    /// factor `v` at exponent `exp`.
    pub fn for_value(&self, v: f64, exp: i32) -> UnitPrefix {
        match self {
            PrefixFamily::Metric => {
                UnitPrefix::Metric(MetricPrefix::for_value(v, exp))
            }
            PrefixFamily::Binary => {
                UnitPrefix::Binary(BinaryPrefix::for_value(v, exp))
            }
        }
    }
}

/// A prefix from either family, as carried by a factor.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum UnitPrefix {
    Metric(MetricPrefix),
    Binary(BinaryPrefix),
}

impl UnitPrefix {
    pub const IDENTITY: Self = UnitPrefix::Metric(MetricPrefix::Unit);

    pub fn family(&self) -> PrefixFamily {
        match self {
            UnitPrefix::Metric(_) => PrefixFamily::Metric,
            UnitPrefix::Binary(_) => PrefixFamily::Binary,
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            UnitPrefix::Metric(p) => p.multiplier(),
            UnitPrefix::Binary(p) => p.multiplier(),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            UnitPrefix::Metric(p) => p.symbol(),
            UnitPrefix::Binary(p) => p.symbol(),
        }
    }

    /// Look up a prefix by short or long label. The empty label is
    /// the identity prefix.
    pub fn from_label(label: &str) -> Result<Self, QuantityError> {
        if label.is_empty() {
            return Ok(Self::IDENTITY);
        }
        PREFIX_LABELS
            .iter()
            .find(|(text, _)| *text == label)
            .map(|(_, prefix)| *prefix)
            .ok_or_else(|| QuantityError::UnknownPrefix(label.to_string()))
    }
}

impl Display for UnitPrefix {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol())
    }
}

/// All non-identity prefix labels of both families, longest first so
/// that label resolution never shadows `deca` with `deci` plus a
/// leftover. The micro prefix is listed under both the micro sign
/// (U+00B5) and the Greek small mu (U+03BC).
pub(crate) static PREFIX_LABELS: [(&str, UnitPrefix); 57] = [
    ("yocto", UnitPrefix::Metric(MetricPrefix::Yocto)),
    ("zepto", UnitPrefix::Metric(MetricPrefix::Zepto)),
    ("femto", UnitPrefix::Metric(MetricPrefix::Femto)),
    ("micro", UnitPrefix::Metric(MetricPrefix::Micro)),
    ("milli", UnitPrefix::Metric(MetricPrefix::Milli)),
    ("centi", UnitPrefix::Metric(MetricPrefix::Centi)),
    ("hecto", UnitPrefix::Metric(MetricPrefix::Hecto)),
    ("zetta", UnitPrefix::Metric(MetricPrefix::Zetta)),
    ("yotta", UnitPrefix::Metric(MetricPrefix::Yotta)),
    ("atto", UnitPrefix::Metric(MetricPrefix::Atto)),
    ("pico", UnitPrefix::Metric(MetricPrefix::Pico)),
    ("nano", UnitPrefix::Metric(MetricPrefix::Nano)),
    ("deci", UnitPrefix::Metric(MetricPrefix::Deci)),
    ("deca", UnitPrefix::Metric(MetricPrefix::Deca)),
    ("kilo", UnitPrefix::Metric(MetricPrefix::Kilo)),
    ("mega", UnitPrefix::Metric(MetricPrefix::Mega)),
    ("giga", UnitPrefix::Metric(MetricPrefix::Giga)),
    ("tera", UnitPrefix::Metric(MetricPrefix::Tera)),
    ("peta", UnitPrefix::Metric(MetricPrefix::Peta)),
    ("kibi", UnitPrefix::Binary(BinaryPrefix::Kibi)),
    ("mebi", UnitPrefix::Binary(BinaryPrefix::Mebi)),
    ("gibi", UnitPrefix::Binary(BinaryPrefix::Gibi)),
    ("tebi", UnitPrefix::Binary(BinaryPrefix::Tebi)),
    ("pebi", UnitPrefix::Binary(BinaryPrefix::Pebi)),
    ("exbi", UnitPrefix::Binary(BinaryPrefix::Exbi)),
    ("zebi", UnitPrefix::Binary(BinaryPrefix::Zebi)),
    ("yobi", UnitPrefix::Binary(BinaryPrefix::Yobi)),
    ("exa", UnitPrefix::Metric(MetricPrefix::Exa)),
    ("da", UnitPrefix::Metric(MetricPrefix::Deca)),
    ("Ki", UnitPrefix::Binary(BinaryPrefix::Kibi)),
    ("Mi", UnitPrefix::Binary(BinaryPrefix::Mebi)),
    ("Gi", UnitPrefix::Binary(BinaryPrefix::Gibi)),
    ("Ti", UnitPrefix::Binary(BinaryPrefix::Tebi)),
    ("Pi", UnitPrefix::Binary(BinaryPrefix::Pebi)),
    ("Ei", UnitPrefix::Binary(BinaryPrefix::Exbi)),
    ("Zi", UnitPrefix::Binary(BinaryPrefix::Zebi)),
    ("Yi", UnitPrefix::Binary(BinaryPrefix::Yobi)),
    ("y", UnitPrefix::Metric(MetricPrefix::Yocto)),
    ("z", UnitPrefix::Metric(MetricPrefix::Zepto)),
    ("a", UnitPrefix::Metric(MetricPrefix::Atto)),
    ("f", UnitPrefix::Metric(MetricPrefix::Femto)),
    ("p", UnitPrefix::Metric(MetricPrefix::Pico)),
    ("n", UnitPrefix::Metric(MetricPrefix::Nano)),
    ("µ", UnitPrefix::Metric(MetricPrefix::Micro)),
    ("μ", UnitPrefix::Metric(MetricPrefix::Micro)),
    ("m", UnitPrefix::Metric(MetricPrefix::Milli)),
    ("c", UnitPrefix::Metric(MetricPrefix::Centi)),
    ("d", UnitPrefix::Metric(MetricPrefix::Deci)),
    ("h", UnitPrefix::Metric(MetricPrefix::Hecto)),
    ("k", UnitPrefix::Metric(MetricPrefix::Kilo)),
    ("M", UnitPrefix::Metric(MetricPrefix::Mega)),
    ("G", UnitPrefix::Metric(MetricPrefix::Giga)),
    ("T", UnitPrefix::Metric(MetricPrefix::Tera)),
    ("P", UnitPrefix::Metric(MetricPrefix::Peta)),
    ("E", UnitPrefix::Metric(MetricPrefix::Exa)),
    ("Z", UnitPrefix::Metric(MetricPrefix::Zetta)),
    ("Y", UnitPrefix::Metric(MetricPrefix::Yotta)),
];
