/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize, Error, PartialEq, Eq, Clone, Debug)]
pub enum QuantityError {
    #[error("invalid expression: {0}")]
    InvalidExpression(String),
    #[error("unknown prefix: {0}")]
    UnknownPrefix(String),
    #[error("cannot combine factors with different symbols: {0} and {1}")]
    DifferentSymbols(String, String),
    #[error("units do not cancel; residual factors: {0}")]
    NonScalarDimension(String),
    #[error("an infinite endpoint cannot be closed")]
    AmbiguousInfinite,
    #[error("not a number: {0}")]
    NotANumber(String),
    #[error("duplicate interval: {0}")]
    DuplicateInterval(String),
    #[error("interval endpoints not in order at {0}")]
    NotInOrder(String),
    #[error("incompatible unit: cannot convert {0} to {1}")]
    IncompatibleUnit(String, String),
    #[error("value not within any interval: {0}")]
    NotWithin(String),
}
