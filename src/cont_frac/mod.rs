//! Finite simple continued fractions of [Rational][crate::Rational] numbers,
//! and best rational approximations built on their convergents.
//!
//! # References:
//! - <https://pi.math.cornell.edu/~gautam/ContinuedFractions.pdf>
//! - <https://crypto.stanford.edu/pbc/notes/contfrac/>

mod block;
mod simple;

pub use simple::*;
