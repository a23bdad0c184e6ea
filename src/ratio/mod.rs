//! Implementation of the normalized rational number
//!
//! A [Rational] is a pair of fixed-width signed integers kept in a canonical form
//! after every construction or mutation:
//! 1. numerator and denominator share no common factor,
//! 2. the sign lives on the numerator, so the denominator is never negative,
//! 3. a zero denominator is the infinity sentinel, canonically `1/0` (or `-1/0`).
//!
//! Overflow of the underlying integer type is not detected. Pick an integer type
//! wide enough for the magnitudes involved.

mod float;
mod funcs;
mod ops;

pub use float::DEFAULT_ITERATIONS;
pub use funcs::{checked_factorial, factorial, DomainGuard};

use crate::traits::{RatioBase, RatioError};
use core::cmp::Ordering;
use core::convert::TryFrom;
use core::str::FromStr;
use num_rational::Ratio;
use num_traits::{FromPrimitive, One, ToPrimitive, Zero};
use std::fmt;

/// A rational number represented as `numer / denom`.
///
/// Two equal values always have the same fields, so [Eq] and [Hash] work on the
/// representation directly.
#[derive(Hash, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rational<T> {
    numer: T,
    denom: T, // non-negative, zero only for the infinity sentinel
}

impl<T> Rational<T> {
    #[inline]
    pub(crate) const fn new_raw(numer: T, denom: T) -> Self {
        Rational { numer, denom }
    }

    #[inline]
    pub const fn numer(&self) -> &T {
        &self.numer
    }

    #[inline]
    pub const fn denom(&self) -> &T {
        &self.denom
    }

    /// Consume the value and return `(numer, denom)`
    #[inline]
    pub fn into_parts(self) -> (T, T) {
        (self.numer, self.denom)
    }
}

impl<T: RatioBase> Rational<T> {
    /// Create a rational `numer / denom` in canonical form.
    ///
    /// A zero denominator is accepted and produces the infinity sentinel.
    #[inline]
    pub fn new(numer: T, denom: T) -> Self {
        let mut ret = Rational::new_raw(numer, denom);
        ret.reduce();
        ret.sign_normalize();
        ret
    }

    /// Divide both fields by their greatest common divisor.
    ///
    /// With a zero denominator only the sign of the numerator is kept,
    /// so `n/0` becomes `±1/0` and `0/0` stays as is.
    pub fn reduce(&mut self) {
        if self.denom.is_zero() {
            self.numer = self.numer.signum();
            return;
        }

        let g = self.numer.gcd(&self.denom);
        self.numer = self.numer / g;
        self.denom = self.denom / g;
    }

    /// Move a negative sign from the denominator to the numerator
    pub fn sign_normalize(&mut self) {
        if self.denom < T::zero() {
            self.numer = -self.numer;
            self.denom = -self.denom;
        }
    }

    /// Replace the numerator and restore the canonical form
    pub fn set_numer(&mut self, numer: T) {
        self.numer = numer;
        self.reduce();
        self.sign_normalize();
    }

    /// Replace the denominator and restore the canonical form
    pub fn set_denom(&mut self, denom: T) {
        self.denom = denom;
        self.reduce();
        self.sign_normalize();
    }

    /// `0/1`
    #[inline]
    pub fn zero() -> Self {
        Rational::new_raw(T::zero(), T::one())
    }

    /// `1/1`
    #[inline]
    pub fn one() -> Self {
        Rational::new_raw(T::one(), T::one())
    }

    /// `1/0`, the infinity sentinel
    #[inline]
    pub fn inf() -> Self {
        Rational::new_raw(T::one(), T::zero())
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numer.is_zero() && !self.denom.is_zero()
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.numer.is_one() && self.denom.is_one()
    }

    /// Determine if the value is the `n/0` sentinel
    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.denom.is_zero()
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numer < T::zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.numer > T::zero()
    }

    /// Absolute value. The denominator is already non-negative.
    #[inline]
    pub fn abs(&self) -> Self {
        Rational::new_raw(self.numer.abs(), self.denom)
    }

    /// Swap numerator and denominator.
    ///
    /// # Errors
    /// [RatioError::ZeroDivisor] for zero and [RatioError::Infinite] for the infinity sentinel.
    pub fn inverse(&self) -> Result<Self, RatioError> {
        if self.denom.is_zero() {
            return Err(RatioError::Infinite);
        }
        if self.numer.is_zero() {
            return Err(RatioError::ZeroDivisor);
        }
        Ok(Rational::new(self.denom, self.numer))
    }
}

impl<T: RatioBase> Default for Rational<T> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: RatioBase> From<T> for Rational<T> {
    /// Create a `Rational` representation of an integer.
    #[inline]
    fn from(t: T) -> Self {
        Rational::new_raw(t, T::one())
    }
}

impl<T: RatioBase> From<(T, T)> for Rational<T> {
    #[inline]
    fn from((numer, denom): (T, T)) -> Self {
        Rational::new(numer, denom)
    }
}

impl<T: RatioBase> From<Ratio<T>> for Rational<T> {
    #[inline]
    fn from(r: Ratio<T>) -> Self {
        let (numer, denom) = r.into();
        Rational::new(numer, denom)
    }
}

impl<T: RatioBase> TryFrom<Rational<T>> for Ratio<T> {
    type Error = RatioError;

    fn try_from(r: Rational<T>) -> Result<Self, RatioError> {
        if r.denom.is_zero() {
            return Err(RatioError::Infinite);
        }
        Ok(Ratio::new_raw(r.numer, r.denom))
    }
}

impl<T: RatioBase> PartialOrd for Rational<T> {
    /// Order by the sign of `self - other`.
    ///
    /// Two opposite infinities have an undefined difference (`0/0`) and are not comparable.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let diff = *self - *other;
        if diff.numer.is_zero() && diff.denom.is_zero() {
            return if self == other {
                Some(Ordering::Equal)
            } else {
                None
            };
        }
        Some(diff.numer.cmp(&T::zero()))
    }
}

impl<T: RatioBase> Zero for Rational<T> {
    #[inline]
    fn zero() -> Self {
        Rational::new_raw(T::zero(), T::one())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Rational::is_zero(self)
    }
}

impl<T: RatioBase> One for Rational<T> {
    #[inline]
    fn one() -> Self {
        Rational::new_raw(T::one(), T::one())
    }
}

impl<T: RatioBase> ToPrimitive for Rational<T> {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        if self.is_integer() {
            self.numer.to_i64()
        } else {
            None
        }
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        if self.is_integer() {
            self.numer.to_u64()
        } else {
            None
        }
    }

    #[inline]
    fn to_f64(&self) -> Option<f64> {
        Some(self.to_float())
    }
}

impl<T: RatioBase> FromPrimitive for Rational<T> {
    #[inline]
    fn from_i64(n: i64) -> Option<Self> {
        T::from_i64(n).map(Self::from)
    }

    #[inline]
    fn from_u64(n: u64) -> Option<Self> {
        T::from_u64(n).map(Self::from)
    }

    /// This method depends on [Rational::from_float] with [DEFAULT_ITERATIONS]
    #[inline]
    fn from_f64(f: f64) -> Option<Self> {
        if !f.is_finite() {
            return None;
        }
        Some(Self::from_float(f, DEFAULT_ITERATIONS))
    }
}

impl<T: fmt::Display + Zero> fmt::Display for Rational<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom.is_zero() {
            write!(f, "inf")
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

/// Error of parsing a [Rational] from a string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseRatioError {
    /// The input has no content
    Empty,

    /// One of the parts is not an integer
    Invalid,
}

impl fmt::Display for ParseRatioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseRatioError::Empty => write!(f, "cannot parse rational from empty string"),
            ParseRatioError::Invalid => write!(f, "invalid rational literal"),
        }
    }
}

impl std::error::Error for ParseRatioError {}

impl<T: RatioBase> FromStr for Rational<T> {
    type Err = ParseRatioError;

    /// Parse from `"n/d"`, `"n"` or `"inf"`. The result is normalized.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseRatioError::Empty);
        }
        if s == "inf" {
            return Ok(Self::inf());
        }

        let parse = |part: &str| {
            T::from_str_radix(part.trim(), 10).map_err(|_| ParseRatioError::Invalid)
        };
        match s.split_once('/') {
            Some((n, d)) => Ok(Rational::new(parse(n)?, parse(d)?)),
            None => Ok(Rational::from(parse(s)?)),
        }
    }
}
