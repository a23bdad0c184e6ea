use core::fmt;
use num_integer::Integer;
use num_traits::{AsPrimitive, CheckedAdd, CheckedMul, FromPrimitive, Signed, ToPrimitive};

/// A helper trait to define valid integer types that can back a [Rational][crate::Rational]
pub trait RatioBase:
    Integer + Signed + Copy + ToPrimitive + FromPrimitive + CheckedAdd + CheckedMul + AsPrimitive<f64>
{
    /// Convert a float to the integer type, truncating towards zero
    /// and saturating at the bounds of the type (NaN maps to zero)
    fn truncate_f64(f: f64) -> Self;
}

impl<T> RatioBase for T
where
    T: Integer + Signed + Copy + ToPrimitive + FromPrimitive + CheckedAdd + CheckedMul + AsPrimitive<f64>,
    f64: AsPrimitive<T>,
{
    #[inline]
    fn truncate_f64(f: f64) -> Self {
        f.as_()
    }
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Approximation<T> {
    Approximated(T),
    Exact(T),
}

impl<T> Approximation<T> {
    /// Get the value regardless of whether it's exact
    #[inline]
    pub fn value(self) -> T {
        match self {
            Approximation::Approximated(v) => v,
            Approximation::Exact(v) => v,
        }
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(self, Approximation::Exact(_))
    }
}

/// Errors of the fallible rational operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatioError {
    /// The divisor (or the value to be inverted) is zero
    ZeroDivisor,

    /// The operand is the `n/0` sentinel where a finite value is required
    Infinite,

    /// The argument is outside the domain accepted by the active [DomainGuard][crate::DomainGuard]
    NonPositive,

    /// Root of degree zero was requested
    ZeroRootDegree,
}

impl fmt::Display for RatioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            RatioError::ZeroDivisor => "division by a zero rational",
            RatioError::Infinite => "operand is infinite (zero denominator)",
            RatioError::NonPositive => "argument is not positive",
            RatioError::ZeroRootDegree => "root degree is zero",
        };
        f.write_str(repr)
    }
}

impl std::error::Error for RatioError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_test() {
        assert_eq!(i32::truncate_f64(2.9), 2);
        assert_eq!(i32::truncate_f64(-2.9), -2);
        assert_eq!(i8::truncate_f64(1e10), i8::MAX);
        assert_eq!(i64::truncate_f64(f64::NAN), 0);
    }

    #[test]
    fn approximation_test() {
        assert_eq!(Approximation::Exact(3).value(), 3);
        assert_eq!(Approximation::Approximated(4).value(), 4);
        assert!(Approximation::Exact(1).is_exact());
        assert!(!Approximation::Approximated(1).is_exact());
    }

    #[test]
    fn error_fmt_test() {
        assert_eq!(format!("{}", RatioError::ZeroDivisor), "division by a zero rational");
        assert_eq!(format!("{}", RatioError::ZeroRootDegree), "root degree is zero");
    }
}
