/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

mod binary;
mod family;
mod metric;
mod prefix_trait;

pub use binary::BinaryPrefix;
pub use family::{PrefixFamily, UnitPrefix};
pub use metric::MetricPrefix;
pub use prefix_trait::Prefix;

pub(crate) use family::PREFIX_LABELS;
