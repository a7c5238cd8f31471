use crate::numbers::Value;
use thiserror::Error;

// Error type for connectivity checks and path queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// The bound is not a positive integer.
    #[error("Bound must be a positive integer, got {0}")]
    InvalidBound(Value),

    /// A query endpoint lies outside `[1, max_n]`.
    #[error("Number {value} is outside the range [1, {max_n}]")]
    OutOfRange { value: Value, max_n: Value },

    /// Some integer does not share the class of 1.
    #[error("Number {value} belongs to a different class than 1. The hypothesis fails for N = {max_n}.")]
    Disconnected { value: Value, max_n: Value },
}
