//! Power, root and transcendental functions on [Rational]
//!
//! Only [Rational::pow] stays in the rational domain. Other functions evaluate in
//! floating point and return an `f64`.

use super::Rational;
use crate::traits::{RatioBase, RatioError};

/// Number of terms of the series used by [Rational::taylor_cos]
const TAYLOR_COS_TERMS: u32 = 16;

/// Precondition checked by [Rational::ln], [Rational::sqrt] and [Rational::nth_root].
///
/// The default is [DomainGuard::Strict], or [DomainGuard::Legacy] when the
/// `legacy-guard` feature is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainGuard {
    /// Require `numer > 0 && denom > 0`, i.e. a positive finite value
    Strict,

    /// Require `numer > 0 || denom > 0`. As the denominator is never negative, this
    /// lets zero and negative values through and they evaluate to `NaN` or `-inf`.
    Legacy,
}

impl Default for DomainGuard {
    #[cfg(not(feature = "legacy-guard"))]
    #[inline]
    fn default() -> Self {
        DomainGuard::Strict
    }

    #[cfg(feature = "legacy-guard")]
    #[inline]
    fn default() -> Self {
        DomainGuard::Legacy
    }
}

impl DomainGuard {
    fn check<T: RatioBase>(self, r: &Rational<T>) -> Result<(), RatioError> {
        let zero = T::zero();
        match self {
            DomainGuard::Strict => {
                if r.denom.is_zero() {
                    Err(RatioError::Infinite)
                } else if r.numer <= zero {
                    Err(RatioError::NonPositive)
                } else {
                    Ok(())
                }
            }
            DomainGuard::Legacy => {
                if r.numer > zero || r.denom > zero {
                    Ok(())
                } else {
                    Err(RatioError::NonPositive)
                }
            }
        }
    }
}

/// `n!`, with `0! = 1! = 1`.
///
/// # Panics
/// If the result overflows `u128`, i.e. for `n > 34`. See [checked_factorial].
pub fn factorial(n: u32) -> u128 {
    match checked_factorial(n) {
        Some(v) => v,
        None => panic!("{}! overflows u128", n),
    }
}

/// `n!`, or `None` if it doesn't fit in `u128`
pub fn checked_factorial(n: u32) -> Option<u128> {
    if n <= 1 {
        Some(1)
    } else {
        checked_factorial(n - 1)?.checked_mul(n as u128)
    }
}

impl<T: RatioBase> Rational<T> {
    /// Raise to an integer power, `(numer^n) / (denom^n)`.
    ///
    /// A negative exponent raises the inverse, so `0^-n` is the infinity sentinel.
    /// `x^0` is one for any `x`. Overflow is not checked.
    pub fn pow(&self, n: i32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let e = n.unsigned_abs() as usize;
        let numer = num_traits::pow(self.numer, e);
        let denom = num_traits::pow(self.denom, e);
        if n > 0 {
            Rational::new(numer, denom)
        } else {
            Rational::new(denom, numer)
        }
    }

    /// Checked [Rational::pow], returns `None` if `numer^|n|` or `denom^|n|` overflows
    pub fn checked_pow(&self, n: i32) -> Option<Self> {
        if n == 0 {
            return Some(Self::one());
        }

        let e = n.unsigned_abs() as usize;
        let numer = num_traits::checked_pow(self.numer, e)?;
        let denom = num_traits::checked_pow(self.denom, e)?;
        if n > 0 {
            Some(Rational::new(numer, denom))
        } else {
            Some(Rational::new(denom, numer))
        }
    }

    /// `e^(numer/denom)`, evaluated as `exp(numer)^(1/denom)`.
    ///
    /// `exp(numer)` overflows to infinity for numerators above ~709 even when the
    /// value of the rational is small.
    pub fn exp(&self) -> f64 {
        let numer: f64 = self.numer.as_();
        let denom: f64 = self.denom.as_();
        numer.exp().powf(1. / denom)
    }

    /// Natural logarithm, `ln(numer) - ln(denom)`, checked with the default [DomainGuard]
    #[inline]
    pub fn ln(&self) -> Result<f64, RatioError> {
        self.ln_with(DomainGuard::default())
    }

    pub fn ln_with(&self, guard: DomainGuard) -> Result<f64, RatioError> {
        guard.check(self)?;
        let numer: f64 = self.numer.as_();
        let denom: f64 = self.denom.as_();
        Ok(numer.ln() - denom.ln())
    }

    /// Square root of the value, checked with the default [DomainGuard]
    #[inline]
    pub fn sqrt(&self) -> Result<f64, RatioError> {
        self.sqrt_with(DomainGuard::default())
    }

    pub fn sqrt_with(&self, guard: DomainGuard) -> Result<f64, RatioError> {
        guard.check(self)?;
        Ok(self.to_float().powf(0.5))
    }

    /// The `n`-th root of the value, checked with the default [DomainGuard].
    /// A negative `n` gives the root of the inverse.
    #[inline]
    pub fn nth_root(&self, n: i32) -> Result<f64, RatioError> {
        self.nth_root_with(n, DomainGuard::default())
    }

    pub fn nth_root_with(&self, n: i32, guard: DomainGuard) -> Result<f64, RatioError> {
        if n == 0 {
            return Err(RatioError::ZeroRootDegree);
        }
        guard.check(self)?;
        Ok(self.to_float().powf(1. / n as f64))
    }

    #[inline]
    pub fn cos(&self) -> f64 {
        self.to_float().cos()
    }

    /// Cosine from the first 16 terms of its Taylor series, `Σ (-1)^i x^(2i) / (2i)!`.
    ///
    /// Each power is computed exactly by [Rational::checked_pow], and evaluated with
    /// [f64::powi] instead when it overflows `T`. The truncation error grows quickly
    /// once `|x|` exceeds a few units.
    pub fn taylor_cos(&self) -> f64 {
        (0..TAYLOR_COS_TERMS)
            .map(|i| {
                let power = match self.checked_pow(2 * i as i32) {
                    Some(p) => p.to_float(),
                    None => self.to_float().powi(2 * i as i32),
                };
                let term = power / factorial(2 * i) as f64;
                if i % 2 == 0 {
                    term
                } else {
                    -term
                }
            })
            .sum()
    }
}
