//! Signed log-domain real numbers.
//!
//! Stores a value as (sign, ln |value|) so that long chains of products and
//! sums over extreme magnitudes (probability products, likelihoods,
//! partition functions) neither overflow nor underflow f64.

pub mod error;
pub mod logspace;
pub mod logvalue;

pub use error::LogSpaceError;
pub use logspace::{linear_from_ln, ln_from_linear, log_add, log_sub};
pub use logvalue::LogValue;
