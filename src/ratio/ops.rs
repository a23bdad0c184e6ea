//! Arithmetic operators of [Rational]
//!
//! Every result is rebuilt through [Rational::new], so it's reduced and sign-normalized.
//! Operations on the infinity sentinel follow the same cross-multiplication formulas,
//! hence `inf + x` stays `inf`.

use super::Rational;
use crate::traits::{RatioBase, RatioError};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl<T: RatioBase> Rational<T> {
    /// Checked `self / rhs`.
    ///
    /// # Errors
    /// [RatioError::Infinite] if `self` is infinite, [RatioError::ZeroDivisor] if `rhs` is zero.
    pub fn checked_div(self, rhs: Rational<T>) -> Result<Self, RatioError> {
        if self.denom.is_zero() {
            return Err(RatioError::Infinite);
        }
        if rhs.numer.is_zero() {
            return Err(RatioError::ZeroDivisor);
        }
        Ok(Rational::new(self.numer * rhs.denom, self.denom * rhs.numer))
    }

    /// Checked `self / rhs` with an integer divisor
    pub fn checked_div_scalar(self, rhs: T) -> Result<Self, RatioError> {
        if self.denom.is_zero() {
            return Err(RatioError::Infinite);
        }
        if rhs.is_zero() {
            return Err(RatioError::ZeroDivisor);
        }
        Ok(Rational::new(self.numer, self.denom * rhs))
    }

    /// Checked `lhs / rhs` with an integer dividend
    pub fn checked_scalar_div(lhs: T, rhs: Rational<T>) -> Result<Self, RatioError> {
        if rhs.numer.is_zero() {
            return Err(RatioError::ZeroDivisor);
        }
        Ok(Rational::new(lhs * rhs.denom, rhs.numer))
    }
}

#[inline]
fn unwrap_op<T>(result: Result<T, RatioError>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    }
}

macro_rules! arith_impl {
    (impl $imp:ident, $method:ident) => {
        // Abstracts a/b `op` c/d = (a*d `op` c*b) / (b*d)
        impl<T: RatioBase> $imp<Rational<T>> for Rational<T> {
            type Output = Rational<T>;
            #[inline]
            fn $method(self, rhs: Rational<T>) -> Rational<T> {
                Rational::new(
                    (self.numer * rhs.denom).$method(rhs.numer * self.denom),
                    self.denom * rhs.denom,
                )
            }
        }

        // Abstracts the a/b `op` c/1 = (a `op` b*c) / b pattern
        impl<T: RatioBase> $imp<T> for Rational<T> {
            type Output = Rational<T>;
            #[inline]
            fn $method(self, rhs: T) -> Rational<T> {
                Rational::new(self.numer.$method(self.denom * rhs), self.denom)
            }
        }
    };
}

arith_impl!(impl Add, add);
arith_impl!(impl Sub, sub);

impl<T: RatioBase> Mul<Rational<T>> for Rational<T> {
    type Output = Rational<T>;
    #[inline]
    fn mul(self, rhs: Rational<T>) -> Rational<T> {
        Rational::new(self.numer * rhs.numer, self.denom * rhs.denom)
    }
}

impl<T: RatioBase> Mul<T> for Rational<T> {
    type Output = Rational<T>;
    #[inline]
    fn mul(self, rhs: T) -> Rational<T> {
        Rational::new(self.numer * rhs, self.denom)
    }
}

impl<T: RatioBase> Div<Rational<T>> for Rational<T> {
    type Output = Rational<T>;

    /// # Panics
    /// If `self` is infinite or `rhs` is zero, see [Rational::checked_div]
    #[inline]
    fn div(self, rhs: Rational<T>) -> Rational<T> {
        unwrap_op(self.checked_div(rhs))
    }
}

impl<T: RatioBase> Div<T> for Rational<T> {
    type Output = Rational<T>;

    /// # Panics
    /// If `self` is infinite or `rhs` is zero, see [Rational::checked_div_scalar]
    #[inline]
    fn div(self, rhs: T) -> Rational<T> {
        unwrap_op(self.checked_div_scalar(rhs))
    }
}

impl<T: RatioBase> Neg for Rational<T> {
    type Output = Rational<T>;
    #[inline]
    fn neg(self) -> Rational<T> {
        Rational::new_raw(-self.numer, self.denom)
    }
}

macro_rules! assign_impl {
    (impl $imp:ident, $method:ident, $op:tt) => {
        impl<T: RatioBase> $imp<Rational<T>> for Rational<T> {
            #[inline]
            fn $method(&mut self, rhs: Rational<T>) {
                *self = *self $op rhs;
            }
        }

        impl<T: RatioBase> $imp<T> for Rational<T> {
            #[inline]
            fn $method(&mut self, rhs: T) {
                *self = *self $op rhs;
            }
        }
    };
}

assign_impl!(impl AddAssign, add_assign, +);
assign_impl!(impl SubAssign, sub_assign, -);
assign_impl!(impl MulAssign, mul_assign, *);
assign_impl!(impl DivAssign, div_assign, /);

// an integer on the left hand side, which cannot be done generically
macro_rules! scalar_lhs_impl {
    ($($t:ty),*) => {$(
        impl Mul<Rational<$t>> for $t {
            type Output = Rational<$t>;
            #[inline]
            fn mul(self, rhs: Rational<$t>) -> Rational<$t> {
                rhs * self
            }
        }

        impl Div<Rational<$t>> for $t {
            type Output = Rational<$t>;

            /// # Panics
            /// If `rhs` is zero, see [Rational::checked_scalar_div]
            #[inline]
            fn div(self, rhs: Rational<$t>) -> Rational<$t> {
                unwrap_op(Rational::checked_scalar_div(self, rhs))
            }
        }
    )*};
}

scalar_lhs_impl!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;
    use num_integer::Integer;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    // the canonical form computed by hand
    fn normalized(num: i64, den: i64) -> (i64, i64) {
        let g = num.gcd(&den);
        let (mut num, mut den) = (num / g, den / g);
        if den < 0 {
            num = -num;
            den = -den;
        }
        (num, den)
    }

    fn nonzero(rng: &mut StdRng) -> i64 {
        loop {
            let v = rng.gen_range(-1000..=1000);
            if v != 0 {
                return v;
            }
        }
    }

    #[test]
    fn arithmetic_test() {
        let third = Rational::new(1, 3);
        let three_quarter = Rational::new(3, 4);

        assert_eq!((third + three_quarter).into_parts(), (13, 12));
        assert_eq!((third - three_quarter).into_parts(), (-5, 12));
        assert_eq!((third * three_quarter).into_parts(), (1, 4));
        assert_eq!((third / three_quarter).into_parts(), (4, 9));
        assert_eq!((-third).into_parts(), (-1, 3));
        assert_eq!(-(-third), third);
        assert_eq!((third - third).into_parts(), (0, 1));
    }

    #[test]
    fn randomized_arithmetic_test() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let (a, b) = (rng.gen_range(-1000..=1000), nonzero(&mut rng));
            let (c, d) = (rng.gen_range(-1000..=1000), nonzero(&mut rng));
            let (r1, r2) = (Rational::new(a, b), Rational::new(c, d));

            assert_eq!((r1 + r2).into_parts(), normalized(a * d + c * b, b * d));
            assert_eq!((r1 - r2).into_parts(), normalized(a * d - c * b, b * d));
            assert_eq!((r1 * r2).into_parts(), normalized(a * c, b * d));
            if c != 0 {
                assert_eq!((r1 / r2).into_parts(), normalized(a * d, b * c));
            }
        }
    }

    #[test]
    fn scalar_test() {
        let r = Rational::<i32>::new(3, 4);
        assert_eq!((r * 2).into_parts(), (3, 2));
        assert_eq!((r * -4).into_parts(), (-3, 1));
        assert_eq!((r / 3).into_parts(), (1, 4));
        assert_eq!((r / -6).into_parts(), (-1, 8));
        assert_eq!((r + 1).into_parts(), (7, 4));
        assert_eq!((r - 1).into_parts(), (-1, 4));

        assert_eq!((2 * r).into_parts(), (3, 2));
        assert_eq!((3 / r).into_parts(), (4, 1));
        assert_eq!((-1i64 / Rational::new(-2i64, 5)).into_parts(), (5, 2));
        assert_eq!((1i8 * Rational::new(1i8, 2)).into_parts(), (1, 2));
    }

    #[test]
    fn assign_test() {
        let mut r = Rational::<i64>::new(1, 2);
        r += Rational::new(1, 3);
        assert_eq!(r, Rational::new(5, 6));
        r -= 1;
        assert_eq!(r, Rational::new(-1, 6));
        r *= Rational::new(-3, 1);
        assert_eq!(r, Rational::new(1, 2));
        r /= Rational::new(1, 4);
        assert_eq!(r, Rational::from(2));
        r /= 4;
        assert_eq!(r, Rational::new(1, 2));
        r *= 6;
        assert_eq!(r, Rational::from(3));
    }

    #[test]
    fn infinity_test() {
        let inf = Rational::<i32>::inf();
        assert_eq!(inf + Rational::new(1, 2), inf);
        assert_eq!(inf - Rational::new(7, 3), inf);
        assert_eq!(inf * Rational::new(2, 3), inf);
        assert_eq!(inf * -2, -inf);
        assert_eq!(Rational::new(1, 2) / inf, Rational::zero());
        assert_eq!(3 / inf, Rational::zero());
    }

    #[test]
    fn checked_div_test() {
        let r = Rational::new(3, 4);
        assert_eq!(r.checked_div(Rational::new(1, 2)), Ok(Rational::new(3, 2)));
        assert_eq!(r.checked_div(Rational::zero()), Err(RatioError::ZeroDivisor));
        assert_eq!(Rational::inf().checked_div(r), Err(RatioError::Infinite));

        assert_eq!(r.checked_div_scalar(3), Ok(Rational::new(1, 4)));
        assert_eq!(r.checked_div_scalar(0), Err(RatioError::ZeroDivisor));
        assert_eq!(Rational::inf().checked_div_scalar(2), Err(RatioError::Infinite));

        assert_eq!(Rational::checked_scalar_div(3, r), Ok(Rational::from(4)));
        assert_eq!(Rational::checked_scalar_div(3, Rational::zero()), Err(RatioError::ZeroDivisor));
    }

    #[test]
    #[should_panic(expected = "division by a zero rational")]
    fn div_by_zero_test() {
        let _ = Rational::new(1, 2) / Rational::zero();
    }

    #[test]
    #[should_panic(expected = "operand is infinite")]
    fn div_infinite_test() {
        let _ = Rational::<i32>::inf() / Rational::new(1, 2);
    }

    #[test]
    #[should_panic]
    fn div_scalar_by_zero_test() {
        let _ = Rational::new(1, 2) / 0;
    }

    #[test]
    #[should_panic]
    fn scalar_div_by_zero_test() {
        let _ = 1 / Rational::<i32>::zero();
    }
}
