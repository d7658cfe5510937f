//! Error types for u-numkit

use thiserror::Error;

/// Result type alias using [`MathError`].
pub type Result<T> = std::result::Result<T, MathError>;

/// Invalid-domain inputs rejected by the numeric utilities.
///
/// Degenerate outputs (division by zero in the equation solvers, malformed
/// hexadecimal input) are not errors; they surface as NaN or infinity.
///
/// Callers that only need a human-readable message use `to_string()`:
/// every variant formats a complete description of the rejected input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// A root of degree zero would need an exponent of `1/0`.
    #[error("root degree cannot be zero: the exponent 1/root divides by zero")]
    ZeroRootDegree,

    /// Even roots of negative values have no real result.
    #[error("cannot take the even root {root} of the negative value {value}")]
    EvenRootOfNegative {
        /// The radicand
        value: f64,
        /// The root degree
        root: f64,
    },

    /// Logarithm base is non-positive or equal to one.
    #[error("invalid logarithm base {base}: {reason}")]
    InvalidLogBase {
        /// The rejected base
        base: f64,
        /// Why the base was rejected
        reason: &'static str,
    },

    /// Logarithm of zero or a negative value.
    #[error("logarithm argument {value} is negative or zero")]
    NonPositiveLogArgument {
        /// The rejected argument
        value: f64,
    },

    /// An argument that must be a number was NaN.
    #[error("argument '{arg}' is not a number")]
    NotANumber {
        /// The argument name
        arg: &'static str,
    },

    /// Negative, fractional, or infinite input to the factorial.
    #[error("{value} has no factorial: expected a non-negative integer")]
    NoFactorial {
        /// The rejected input
        value: f64,
    },

    /// Lower bound of a random range above its upper bound.
    #[error("Unexpected error occured in the passed argument values: min > max (min={min}, max={max})")]
    InvalidRange {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },
}

impl MathError {
    /// Create a logarithm base error, picking the reason from the base value.
    pub fn invalid_log_base(base: f64) -> Self {
        let reason = if base <= 0.0 {
            "base is negative or zero"
        } else {
            "base of one divides by ln(1) = 0"
        };
        Self::InvalidLogBase { base, reason }
    }
}
