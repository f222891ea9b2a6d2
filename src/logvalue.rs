//! Signed log-domain value type.
//!
//! A [`LogValue`] is a plain signed number stored as (sign, ln |value|).
//! Multiplication, division, and exponentiation are cheap magnitude shifts;
//! addition and subtraction dispatch on the operand signs and run through
//! the stable combinators in [`crate::logspace`].

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::error::LogSpaceError;
use crate::logspace::{linear_from_ln, ln_from_linear, log_add, log_sub};

/// Signed number stored as (sign, ln |value|).
///
/// `ln_magnitude` is finite or exactly `NEG_INFINITY` (zero); never NaN or
/// `+inf`. Zero always carries `positive == true`. Those invariants are
/// what make the `Ord` impl total.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogValue {
    ln_magnitude: f64,
    positive: bool,
}

impl LogValue {
    /// Zero constant (`-inf` magnitude, positive by convention).
    pub const ZERO: Self = Self {
        ln_magnitude: f64::NEG_INFINITY,
        positive: true,
    };

    /// One constant (`ln 1 == 0`).
    pub const ONE: Self = Self {
        ln_magnitude: 0.0,
        positive: true,
    };

    /// Create from a plain signed value.
    ///
    /// The sign comes from `v >= 0.0` (zero counts as positive), the
    /// magnitude from `ln |v|`. NaN and ±inf have no representation and
    /// fail with [`LogSpaceError::NotFinite`].
    pub fn from_f64(v: f64) -> Result<Self, LogSpaceError> {
        if !v.is_finite() {
            return Err(LogSpaceError::NotFinite(v));
        }
        let ln_magnitude = ln_from_linear(v.abs())?;
        Ok(Self::assemble(ln_magnitude, v >= 0.0))
    }

    /// Create directly from a ln magnitude and sign, skipping the exp/log
    /// round-trip when chaining log-domain results.
    ///
    /// `NEG_INFINITY` is zero (the sign flag is then ignored and normalized
    /// to positive); NaN and `+inf` fail with
    /// [`LogSpaceError::NotFinite`].
    pub fn from_ln(ln_magnitude: f64, positive: bool) -> Result<Self, LogSpaceError> {
        if ln_magnitude.is_nan() || ln_magnitude == f64::INFINITY {
            return Err(LogSpaceError::NotFinite(ln_magnitude));
        }
        Ok(Self::assemble(ln_magnitude, positive))
    }

    /// Build a value while enforcing the representation invariants: zero is
    /// always positive, and a `-0.0` magnitude collapses to `0.0` so that
    /// `total_cmp` ordering agrees with `==`.
    fn assemble(ln_magnitude: f64, positive: bool) -> Self {
        debug_assert!(!ln_magnitude.is_nan());
        if ln_magnitude == f64::NEG_INFINITY {
            return Self::ZERO;
        }
        let ln_magnitude = if ln_magnitude == 0.0 { 0.0 } else { ln_magnitude };
        Self {
            ln_magnitude,
            positive,
        }
    }

    /// ln of the absolute value; `NEG_INFINITY` for zero.
    #[inline]
    pub fn ln_magnitude(&self) -> f64 {
        self.ln_magnitude
    }

    /// Sign flag; zero is positive by convention.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.positive
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.ln_magnitude == f64::NEG_INFINITY
    }

    /// De-log back to a plain f64.
    ///
    /// Overflows to ±inf for magnitudes above ~709.78 and loses precision
    /// near the subnormal range; that is the accepted cost of leaving log
    /// space, not a defect in the stored value.
    pub fn to_f64(&self) -> f64 {
        let magnitude = linear_from_ln(self.ln_magnitude);
        if self.positive {
            magnitude
        } else {
            -magnitude
        }
    }

    /// Sign-aware sum, dispatching on the operand sign pair.
    pub fn add(&self, other: &Self) -> Self {
        if self.positive == other.positive {
            return Self::assemble(log_add(self.ln_magnitude, other.ln_magnitude), self.positive);
        }
        // Opposite signs: subtract the smaller magnitude from the larger;
        // the larger operand's sign wins. Ordering the magnitudes first
        // satisfies log_sub's x >= y precondition, so the error branch is
        // unreachable. An exact tie cancels to zero.
        let (larger, smaller) = if self.ln_magnitude >= other.ln_magnitude {
            (self, other)
        } else {
            (other, self)
        };
        let ln = log_sub(larger.ln_magnitude, smaller.ln_magnitude)
            .expect("magnitudes ordered before log_sub");
        Self::assemble(ln, larger.positive)
    }

    /// Sign-aware difference: addition of the negated right operand, which
    /// reproduces the full four-way sign table.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&-*other)
    }

    /// Log-space product: magnitudes add; the result is positive exactly
    /// when the operand signs agree.
    pub fn mul(&self, other: &Self) -> Self {
        Self::assemble(
            self.ln_magnitude + other.ln_magnitude,
            self.positive == other.positive,
        )
    }

    /// Log-space quotient: magnitudes subtract; sign as in [`Self::mul`].
    /// Returns `None` for a zero divisor, which has no representable
    /// result.
    pub fn checked_div(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        Some(Self::assemble(
            self.ln_magnitude - other.ln_magnitude,
            self.positive == other.positive,
        ))
    }

    /// Raise to a real exponent: the result magnitude is
    /// `exponent * ln |self|`. The exponent may be a plain f64 or another
    /// `LogValue` (de-logged via `From<LogValue> for f64`).
    ///
    /// A negative base is defined only for integer exponents, where the
    /// sign follows the exponent's parity; non-integer exponents fail with
    /// [`LogSpaceError::NegativeBase`]. Zero to a negative power would need
    /// a `+inf` magnitude and fails with
    /// [`LogSpaceError::ZeroToNegativePower`].
    pub fn pow(&self, exponent: impl Into<f64>) -> Result<Self, LogSpaceError> {
        let e: f64 = exponent.into();
        if !e.is_finite() {
            return Err(LogSpaceError::NotFinite(e));
        }
        if self.is_zero() {
            return if e > 0.0 {
                Ok(Self::ZERO)
            } else if e == 0.0 {
                Ok(Self::ONE)
            } else {
                Err(LogSpaceError::ZeroToNegativePower(e))
            };
        }
        let positive = if self.positive {
            true
        } else if e.fract() == 0.0 {
            // Integer exponent: sign follows parity. Every f64 with
            // |e| >= 2^53 is an even integer, so the modulo is exact.
            (e % 2.0).abs() != 1.0
        } else {
            return Err(LogSpaceError::NegativeBase(e));
        };
        let ln = e * self.ln_magnitude;
        if ln == f64::INFINITY {
            return Err(LogSpaceError::NotFinite(ln));
        }
        Ok(Self::assemble(ln, positive))
    }
}

impl Default for LogValue {
    fn default() -> Self {
        Self::ZERO
    }
}

/// De-logging conversion; same lossiness caveats as [`LogValue::to_f64`].
impl From<LogValue> for f64 {
    fn from(v: LogValue) -> f64 {
        v.to_f64()
    }
}

impl Neg for LogValue {
    type Output = Self;

    fn neg(self) -> Self {
        Self::assemble(self.ln_magnitude, !self.positive)
    }
}

impl Add for LogValue {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        LogValue::add(&self, &rhs)
    }
}

impl Sub for LogValue {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        LogValue::sub(&self, &rhs)
    }
}

impl Mul for LogValue {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        LogValue::mul(&self, &rhs)
    }
}

/// Panics on a zero divisor, like integer division; use
/// [`LogValue::checked_div`] for the fallible form.
impl Div for LogValue {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        match self.checked_div(&rhs) {
            Some(q) => q,
            None => panic!("attempt to divide by zero"),
        }
    }
}

impl AddAssign for LogValue {
    fn add_assign(&mut self, rhs: Self) {
        *self = LogValue::add(self, &rhs);
    }
}

impl SubAssign for LogValue {
    fn sub_assign(&mut self, rhs: Self) {
        *self = LogValue::sub(self, &rhs);
    }
}

impl MulAssign for LogValue {
    fn mul_assign(&mut self, rhs: Self) {
        *self = LogValue::mul(self, &rhs);
    }
}

impl DivAssign for LogValue {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

// Total order is sound because NaN and -0.0 magnitudes are unrepresentable.
impl Eq for LogValue {}

impl Ord for LogValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.positive, other.positive) {
            // Larger magnitude means larger positive, smaller negative.
            (true, true) => self.ln_magnitude.total_cmp(&other.ln_magnitude),
            (false, false) => other.ln_magnitude.total_cmp(&self.ln_magnitude),
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
        }
    }
}

impl PartialOrd for LogValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Display-only rendering: `0`, `exp(m)`, or `-exp(m)`. Never used for
/// equality.
impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        if self.positive {
            write!(f, "exp({})", self.ln_magnitude)
        } else {
            write!(f, "-exp({})", self.ln_magnitude)
        }
    }
}
