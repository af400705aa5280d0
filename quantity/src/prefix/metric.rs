/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use super::prefix_trait::Prefix;

/// Metric (base 10) prefixes.
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
pub enum MetricPrefix {
    Yocto,
    Zepto,
    Atto,
    Femto,
    Pico,
    Nano,
    Micro,
    Milli,
    Centi,
    Deci,
    Unit,
    Deca,
    Hecto,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
    Zetta,
    Yotta,
}

static METRIC_PREFIXES: [MetricPrefix; 21] = [
    MetricPrefix::Yocto,
    MetricPrefix::Zepto,
    MetricPrefix::Atto,
    MetricPrefix::Femto,
    MetricPrefix::Pico,
    MetricPrefix::Nano,
    MetricPrefix::Micro,
    MetricPrefix::Milli,
    MetricPrefix::Centi,
    MetricPrefix::Deci,
    MetricPrefix::Unit,
    MetricPrefix::Deca,
    MetricPrefix::Hecto,
    MetricPrefix::Kilo,
    MetricPrefix::Mega,
    MetricPrefix::Giga,
    MetricPrefix::Tera,
    MetricPrefix::Peta,
    MetricPrefix::Exa,
    MetricPrefix::Zetta,
    MetricPrefix::Yotta,
];

impl Prefix for MetricPrefix {
    const BASE: u64 = 10;
    const SCALE: &'static [Self] = &METRIC_PREFIXES;

    fn power(&self) -> i32 {
        match self {
            MetricPrefix::Yocto => -24,
            MetricPrefix::Zepto => -21,
            MetricPrefix::Atto => -18,
            MetricPrefix::Femto => -15,
            MetricPrefix::Pico => -12,
            MetricPrefix::Nano => -9,
            MetricPrefix::Micro => -6,
            MetricPrefix::Milli => -3,
            MetricPrefix::Centi => -2,
            MetricPrefix::Deci => -1,
            MetricPrefix::Unit => 0,
            MetricPrefix::Deca => 1,
            MetricPrefix::Hecto => 2,
            MetricPrefix::Kilo => 3,
            MetricPrefix::Mega => 6,
            MetricPrefix::Giga => 9,
            MetricPrefix::Tera => 12,
            MetricPrefix::Peta => 15,
            MetricPrefix::Exa => 18,
            MetricPrefix::Zetta => 21,
            MetricPrefix::Yotta => 24,
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            MetricPrefix::Yocto => "y",
            MetricPrefix::Zepto => "z",
            MetricPrefix::Atto => "a",
            MetricPrefix::Femto => "f",
            MetricPrefix::Pico => "p",
            MetricPrefix::Nano => "n",
            MetricPrefix::Micro => "µ",
            MetricPrefix::Milli => "m",
            MetricPrefix::Centi => "c",
            MetricPrefix::Deci => "d",
            MetricPrefix::Unit => "",
            MetricPrefix::Deca => "da",
            MetricPrefix::Hecto => "h",
            MetricPrefix::Kilo => "k",
            MetricPrefix::Mega => "M",
            MetricPrefix::Giga => "G",
            MetricPrefix::Tera => "T",
            MetricPrefix::Peta => "P",
            MetricPrefix::Exa => "E",
            MetricPrefix::Zetta => "Z",
            MetricPrefix::Yotta => "Y",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            MetricPrefix::Yocto => "yocto",
            MetricPrefix::Zepto => "zepto",
            MetricPrefix::Atto => "atto",
            MetricPrefix::Femto => "femto",
            MetricPrefix::Pico => "pico",
            MetricPrefix::Nano => "nano",
            MetricPrefix::Micro => "micro",
            MetricPrefix::Milli => "milli",
            MetricPrefix::Centi => "centi",
            MetricPrefix::Deci => "deci",
            MetricPrefix::Unit => "",
            MetricPrefix::Deca => "deca",
            MetricPrefix::Hecto => "hecto",
            MetricPrefix::Kilo => "kilo",
            MetricPrefix::Mega => "mega",
            MetricPrefix::Giga => "giga",
            MetricPrefix::Tera => "tera",
            MetricPrefix::Peta => "peta",
            MetricPrefix::Exa => "exa",
            MetricPrefix::Zetta => "zetta",
            MetricPrefix::Yotta => "yotta",
        }
    }
}

impl Display for MetricPrefix {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol())
    }
}
