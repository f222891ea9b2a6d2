//! Log-space error types.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum LogSpaceError {
    #[error("expected a finite real number, got {0}")]
    NotFinite(f64),

    #[error("negative value {0} has no real logarithm")]
    NegativeValue(f64),

    #[error("log-space difference would be negative (x = {x} < y = {y})")]
    NegativeDifference { x: f64, y: f64 },

    #[error("negative base raised to non-integer exponent {0}")]
    NegativeBase(f64),

    #[error("zero raised to negative exponent {0}")]
    ZeroToNegativePower(f64),
}
