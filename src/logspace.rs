//! Unsigned log-space kernels: conversion between linear values and ln
//! magnitudes, plus the numerically stable add/sub combinators.
//!
//! A magnitude is an f64 holding ln(v) for v > 0, or `NEG_INFINITY` for
//! v == 0. Everything here is unsigned; sign handling lives in
//! [`crate::logvalue`].

use crate::error::LogSpaceError;

/// Convert a non-negative linear value to its ln magnitude.
///
/// Returns `NEG_INFINITY` for zero. NaN and ±inf are rejected because no
/// finite-or-`-inf` magnitude can represent them; negative values are
/// rejected because this entry point is unsigned (the signed wrapper
/// converts `|v|` and tracks the sign separately).
pub fn ln_from_linear(v: f64) -> Result<f64, LogSpaceError> {
    if !v.is_finite() {
        return Err(LogSpaceError::NotFinite(v));
    }
    if v < 0.0 {
        return Err(LogSpaceError::NegativeValue(v));
    }
    if v == 0.0 {
        return Ok(f64::NEG_INFINITY);
    }
    Ok(libm::log(v))
}

/// Convert a ln magnitude back to linear space.
///
/// Overflows to `inf` for magnitudes above ~709.78 and rounds tiny ones to
/// subnormals or zero; leaving log space is the one lossy step.
pub fn linear_from_ln(ln: f64) -> f64 {
    if ln == f64::NEG_INFINITY {
        return 0.0;
    }
    libm::exp(ln)
}

/// Stable `ln(e^x + e^y)` (log-sum-exp).
///
/// Factoring out the larger magnitude keeps the exp argument in (-inf, 0],
/// so the sum never overflows even when x and y are far outside the linear
/// f64 range.
pub fn log_add(x: f64, y: f64) -> f64 {
    if x == f64::NEG_INFINITY {
        return y;
    }
    if y == f64::NEG_INFINITY {
        return x;
    }
    x.max(y) + libm::log1p(libm::exp(-(x - y).abs()))
}

/// Stable `ln(e^x - e^y)`, requiring `x >= y`.
///
/// `log1p(-exp(y - x))` keeps precision when x and y are close, where a
/// naive `ln(exp(x) - exp(y))` would lose most significant digits to
/// cancellation. An exact tie returns `NEG_INFINITY` (the difference is
/// zero).
pub fn log_sub(x: f64, y: f64) -> Result<f64, LogSpaceError> {
    if x < y {
        return Err(LogSpaceError::NegativeDifference { x, y });
    }
    if x == y {
        return Ok(f64::NEG_INFINITY);
    }
    if y == f64::NEG_INFINITY {
        return Ok(x);
    }
    Ok(x + libm::log1p(-libm::exp(y - x)))
}
