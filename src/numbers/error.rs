use std::fmt;

use thiserror::Error;

use super::step::{Step, Value};

/// Which endpoint of a query a step list belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "a"),
            Side::B => write!(f, "b"),
        }
    }
}

// Error type for witness chains that do not prove what they claim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathViolation {
    /// An endpoint lies outside `[1, max_n]`.
    #[error("Endpoint {side}={value} is outside [1, {max_n}]")]
    EndpointOutOfBounds { side: Side, value: Value, max_n: Value },

    /// A step does not start from the value reached so far.
    #[error("Step {index} on side {side} sums to {found}, expected {expected}")]
    StepMismatch {
        side: Side,
        index: usize,
        expected: Value,
        found: Value,
    },

    /// A step uses a term smaller than the domain allows.
    #[error("Step {index} on side {side} uses {step}, below the minimum term {min_term}")]
    TermBelowDomain {
        side: Side,
        index: usize,
        step: Step,
        min_term: Value,
    },

    /// A step leads outside `[1, max_n]`.
    #[error("Step {index} on side {side} reaches {value}, outside [1, {max_n}]")]
    OutOfBounds {
        side: Side,
        index: usize,
        value: Value,
        max_n: Value,
    },

    /// Both chains are individually sound but end on different values.
    #[error("Chains end on different values: a reaches {end_a}, b reaches {end_b}")]
    Diverged { end_a: Value, end_b: Value },
}
