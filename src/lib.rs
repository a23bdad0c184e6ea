//! Exact rational numbers over a generic signed integer type.
//!
//! [Rational] keeps a reduced fraction with a non-negative denominator, where a zero
//! denominator stands for infinity. On top of the field arithmetic it provides float
//! conversions, powers and a few analytic functions evaluated through `f64`.
//!
//! ```
//! use num_ratio::Rational;
//!
//! let r = Rational::new(6, -8);
//! assert_eq!(r.to_string(), "-3/4");
//! assert_eq!(r + Rational::new(1, 4), Rational::new(-1, 2));
//! assert_eq!(Rational::new(1, 2).pow(-2), Rational::from(4));
//! ```

mod cont_frac;
mod ratio;
pub mod traits;

pub use cont_frac::{ContinuedFraction, Convergents};
pub use ratio::{
    checked_factorial, factorial, DomainGuard, ParseRatioError, Rational, DEFAULT_ITERATIONS,
};
pub use traits::{Approximation, RatioBase, RatioError};

/// Rational over 32-bit integers
pub type Rational32 = Rational<i32>;
/// Rational over 64-bit integers
pub type Rational64 = Rational<i64>;
