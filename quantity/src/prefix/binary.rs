/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use super::prefix_trait::Prefix;

/// Binary (base 1024) prefixes per IEC 80000-13.
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
pub enum BinaryPrefix {
    Unit,
    Kibi,
    Mebi,
    Gibi,
    Tebi,
    Pebi,
    Exbi,
    Zebi,
    Yobi,
}

static BINARY_PREFIXES: [BinaryPrefix; 9] = [
    BinaryPrefix::Unit,
    BinaryPrefix::Kibi,
    BinaryPrefix::Mebi,
    BinaryPrefix::Gibi,
    BinaryPrefix::Tebi,
    BinaryPrefix::Pebi,
    BinaryPrefix::Exbi,
    BinaryPrefix::Zebi,
    BinaryPrefix::Yobi,
];

impl Prefix for BinaryPrefix {
    const BASE: u64 = 1024;
    const SCALE: &'static [Self] = &BINARY_PREFIXES;

    fn power(&self) -> i32 {
        match self {
            BinaryPrefix::Unit => 0,
            BinaryPrefix::Kibi => 1,
            BinaryPrefix::Mebi => 2,
            BinaryPrefix::Gibi => 3,
            BinaryPrefix::Tebi => 4,
            BinaryPrefix::Pebi => 5,
            BinaryPrefix::Exbi => 6,
            BinaryPrefix::Zebi => 7,
            BinaryPrefix::Yobi => 8,
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            BinaryPrefix::Unit => "",
            BinaryPrefix::Kibi => "Ki",
            BinaryPrefix::Mebi => "Mi",
            BinaryPrefix::Gibi => "Gi",
            BinaryPrefix::Tebi => "Ti",
            BinaryPrefix::Pebi => "Pi",
            BinaryPrefix::Exbi => "Ei",
            BinaryPrefix::Zebi => "Zi",
            BinaryPrefix::Yobi => "Yi",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            BinaryPrefix::Unit => "",
            BinaryPrefix::Kibi => "kibi",
            BinaryPrefix::Mebi => "mebi",
            BinaryPrefix::Gibi => "gibi",
            BinaryPrefix::Tebi => "tebi",
            BinaryPrefix::Pebi => "pebi",
            BinaryPrefix::Exbi => "exbi",
            BinaryPrefix::Zebi => "zebi",
            BinaryPrefix::Yobi => "yobi",
        }
    }
}

impl Display for BinaryPrefix {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol())
    }
}
