//! Implementation of finite simple continued fractions

use super::block::Block;
use crate::ratio::Rational;
use crate::traits::{Approximation, RatioBase, RatioError};
use core::convert::TryFrom;
use std::fmt;

/// This struct represents a simple continued fraction `a0 + 1/(a1 + 1/(a2 + ...))`
/// of a finite rational number, where a0 is a non-negative integer and a1, a2, .. are
/// positive integers. The sign of the number is stored separately.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContinuedFraction<T> {
    /// Coefficients of the absolute value
    coeffs: Vec<T>,

    /// Sign of the fraction
    negative: bool,
}

impl<T> ContinuedFraction<T> {
    #[inline]
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs[..]
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.coeffs.len() == 1
    }
}

impl<T: RatioBase> ContinuedFraction<T> {
    /// Create a continued fraction from its coefficients.
    ///
    /// # Panics
    /// If `coeffs` is empty, the first coefficient is negative or any other is not positive.
    pub fn new(coeffs: Vec<T>, negative: bool) -> Self {
        if coeffs.is_empty() {
            panic!("at least one coefficient is required!");
        }
        if coeffs[0] < T::zero() || coeffs[1..].iter().any(|a| *a <= T::zero()) {
            panic!("coefficients must be positive except the first one!");
        }

        // zero has no sign
        let negative = negative && !(coeffs.len() == 1 && coeffs[0].is_zero());
        ContinuedFraction { coeffs, negative }
    }

    /// Returns an iterator of the convergents, with the sign applied. The iterator will stop
    /// if all coefficients are consumed, or numeric overflow happened.
    pub fn convergents(&self) -> Convergents<'_, T> {
        Convergents {
            coeffs: &self.coeffs[..],
            pos: 0,
            block: Block::identity(),
            neg: self.negative,
        }
    }

    /// Evaluate the fraction, returns None if the intermediate convergents overflow
    pub fn to_rational(&self) -> Option<Rational<T>> {
        let mut convergents = self.convergents();
        let mut last = None;
        for _ in 0..self.coeffs.len() {
            last = Some(convergents.next()?);
        }
        last
    }
}

/// Iterator of convergents of a [ContinuedFraction]
#[derive(Debug, Clone)]
pub struct Convergents<'a, T> {
    coeffs: &'a [T],
    pos: usize,
    block: Block<T>,
    neg: bool, // store the sign
}

impl<'a, T: RatioBase> Iterator for Convergents<'a, T> {
    type Item = Rational<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let a = self.coeffs.get(self.pos)?;
        let (p, q) = match self.block.checked_rmove(a) {
            Some(v) => v,
            None => {
                self.pos = self.coeffs.len(); // stop after overflow
                return None;
            }
        };
        self.block.update(p, q);
        self.pos += 1;

        let r = Rational::new(p, q);
        if self.neg {
            Some(-r)
        } else {
            Some(r)
        }
    }
}

impl<T: RatioBase> TryFrom<Rational<T>> for ContinuedFraction<T> {
    type Error = RatioError;

    /// Expand a finite rational with the Euclidean algorithm
    fn try_from(r: Rational<T>) -> Result<Self, RatioError> {
        if r.is_infinite() {
            return Err(RatioError::Infinite);
        }

        let (n, mut d) = r.into_parts();
        let negative = n < T::zero();
        let mut n = n.abs();

        let mut coeffs = Vec::new();
        while !d.is_zero() {
            let (quo, rem) = n.div_rem(&d);
            coeffs.push(quo);
            n = d;
            d = rem;
        }

        Ok(ContinuedFraction { coeffs, negative })
    }
}

impl<T: RatioBase> Rational<T> {
    /// Returns the closest convergent whose denominator is below `limit`.
    ///
    /// The result is [Approximation::Exact] when the number itself fits. The integer part
    /// is returned even if `limit` is not greater than one.
    pub fn approximated(&self, limit: &T) -> Result<Approximation<Self>, RatioError> {
        let cf = ContinuedFraction::try_from(*self)?;
        let total = cf.coeffs.len();

        let mut last = None;
        for (k, conv) in cf.convergents().enumerate() {
            if k > 0 && conv.denom() >= limit {
                break;
            }
            if k + 1 == total {
                return Ok(Approximation::Exact(conv));
            }
            last = Some(conv);
        }
        Ok(Approximation::Approximated(last.unwrap_or(*self)))
    }
}

impl<T: fmt::Display> fmt::Display for ContinuedFraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }

        let mut iter = self.coeffs.iter();
        if let Some(a0) = iter.next() {
            write!(f, "[{}", a0)?;
        }
        if let Some(a1) = iter.next() {
            write!(f, "; {}", a1)?;
        }
        for a in iter {
            write!(f, ", {}", a)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn creation_test() {
        let cf = ContinuedFraction::new(vec![3, 7, 16], false);
        assert_eq!(cf.coeffs(), &[3, 7, 16]);
        assert!(!cf.is_negative());
        assert!(!cf.is_integer());

        // negative zero
        assert!(!ContinuedFraction::new(vec![0], true).is_negative());
        assert!(ContinuedFraction::new(vec![2], true).is_integer());
    }

    #[test]
    #[should_panic]
    fn empty_creation_test() {
        let _ = ContinuedFraction::<i32>::new(vec![], false);
    }

    #[test]
    #[should_panic]
    fn negative_creation_test() {
        let _ = ContinuedFraction::new(vec![1, -2], false);
    }

    #[test]
    fn conversion_test() {
        let cf = |n: i32, d: i32| ContinuedFraction::try_from(Rational::new(n, d)).unwrap();
        assert_eq!(cf(3, 1), ContinuedFraction::new(vec![3], false));
        assert_eq!(cf(22, 7), ContinuedFraction::new(vec![3, 7], false));
        assert_eq!(cf(-22, 7), ContinuedFraction::new(vec![3, 7], true));
        assert_eq!(cf(7, 22), ContinuedFraction::new(vec![0, 3, 7], false));
        assert_eq!(cf(-7, 22), ContinuedFraction::new(vec![0, 3, 7], true));
        assert_eq!(cf(355, 113), ContinuedFraction::new(vec![3, 7, 16], false));
        assert_eq!(cf(0, 5), ContinuedFraction::new(vec![0], false));

        assert_eq!(
            ContinuedFraction::try_from(Rational::<i32>::inf()),
            Err(RatioError::Infinite)
        );
    }

    #[test]
    fn convergents_test() {
        let cf = ContinuedFraction::new(vec![3, 7, 16], false);
        assert_eq!(
            cf.convergents().collect::<Vec<_>>(),
            vec![Rational::from(3), Rational::new(22, 7), Rational::new(355, 113)]
        );

        let n_cf = ContinuedFraction::new(vec![3, 7, 16], true);
        assert_eq!(
            n_cf.convergents().collect::<Vec<_>>(),
            vec![Rational::from(-3), Rational::new(-22, 7), Rational::new(-355, 113)]
        );

        // stops at overflow
        let big = ContinuedFraction::<i8>::new(vec![100, 100, 1], false);
        assert_eq!(big.convergents().collect::<Vec<_>>(), vec![Rational::from(100)]);
        assert_eq!(big.to_rational(), None);
    }

    #[test]
    fn round_trip_test() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let r = Rational::<i64>::new(rng.gen_range(-1000..=1000), rng.gen_range(1..=1000));
            let cf = ContinuedFraction::try_from(r).unwrap();
            assert_eq!(cf.to_rational(), Some(r));
        }
    }

    #[test]
    fn approximated_test() {
        let pi = Rational::<i64>::new(314159265, 100000000);
        assert_eq!(pi.approximated(&10), Ok(Approximation::Approximated(Rational::new(22, 7))));
        assert_eq!(pi.approximated(&1000), Ok(Approximation::Approximated(Rational::new(355, 113))));
        assert_eq!(
            (-pi).approximated(&1000),
            Ok(Approximation::Approximated(Rational::new(-355, 113)))
        );

        let r = Rational::<i64>::new(355, 113);
        assert_eq!(r.approximated(&1000), Ok(Approximation::Exact(r)));
        assert_eq!(r.approximated(&1), Ok(Approximation::Approximated(Rational::from(3))));
        assert_eq!(Rational::<i64>::from(5).approximated(&1), Ok(Approximation::Exact(Rational::from(5))));
        assert_eq!(Rational::<i64>::inf().approximated(&10), Err(RatioError::Infinite));
    }

    #[test]
    fn fmt_test() {
        assert_eq!(format!("{}", ContinuedFraction::new(vec![1], false)), "[1]");
        assert_eq!(format!("{}", ContinuedFraction::new(vec![1, 2, 3], false)), "[1; 2, 3]");
        assert_eq!(format!("{}", ContinuedFraction::new(vec![3, 7], true)), "-[3; 7]");
        let cf = ContinuedFraction::try_from(Rational::new(355, 113)).unwrap();
        assert_eq!(format!("{}", cf), "[3; 7, 16]");
    }
}
