//! Conversion between [Rational] and floating point numbers

use super::Rational;
use crate::traits::RatioBase;

/// Expansion depth used when a rational is created from [FromPrimitive::from_f64][num_traits::FromPrimitive::from_f64]
pub const DEFAULT_ITERATIONS: u32 = 25;

// One level of the expansion, recorded from the outside in
enum Step<T> {
    Integer(T), // q + (rest)
    Reciprocal, // 1 / trunc(rest)
}

impl<T: RatioBase> Rational<T> {
    /// Evaluate `numer / denom` as a float.
    ///
    /// The infinity sentinel follows float semantics, e.g. `1/0` gives `inf` and `0/0` gives `NaN`.
    #[inline]
    pub fn to_float(&self) -> f64 {
        let numer: f64 = self.numer.as_();
        let denom: f64 = self.denom.as_();
        numer / denom
    }

    /// Approximate a float with a rational by expanding it into nested integer parts
    /// and reciprocals, similar to a continued fraction:
    /// - `x < 0` expands `-x` and negates,
    /// - `0 < x < 1` becomes `1 / trunc(expand(1/x))`, where the inner expansion is
    ///   evaluated back to a float and truncated to an integer denominator,
    /// - `x >= 1` becomes `trunc(x) + expand(x - trunc(x))` and consumes one iteration.
    ///
    /// The expansion stops at zero or when `max_iterations` integer parts are taken.
    /// Each reciprocal level round trips through floating point, so the result is lossy
    /// for most inputs that are not dyadic. The truncated denominator is `q` or `q + 1`
    /// for `q = trunc(1/x)`, hence the result stays within `[1/(q+1), 1/q]` for `x < 1`,
    /// within `[trunc(x), trunc(x) + 1]` for `x >= 1`, and at most `1/2` away from `x`.
    /// For instance `0.7` becomes `1` and `2.7` becomes `3`.
    pub fn from_float(x: f64, max_iterations: u32) -> Self {
        if x == 0. || max_iterations == 0 {
            return Self::zero();
        }
        if x < 0. {
            return -Self::from_float(-x, max_iterations);
        }

        // a reciprocal level is always followed by an integer level, so the
        // hard cap is never reached, but it bounds the loop for any input
        let max_steps = 2 * max_iterations as usize + 2;
        let mut steps = Vec::new();
        let mut iterations = max_iterations;
        let mut x = x;
        while x != 0. && iterations > 0 && steps.len() < max_steps {
            if x < 1. {
                steps.push(Step::Reciprocal);
                x = 1. / x;
            } else {
                let q = x.trunc();
                steps.push(Step::Integer(T::truncate_f64(q)));
                x -= q;
                iterations -= 1;
            }
        }

        steps.into_iter().rev().fold(Self::zero(), |acc, step| match step {
            Step::Integer(q) => Rational::from(q) + acc,
            Step::Reciprocal => Rational::new(T::one(), T::truncate_f64(acc.to_float())),
        })
    }
}
