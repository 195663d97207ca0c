//! # mtmath-core
//!
//! Arbitrary-precision arithmetic: little-endian byte arrays, signed big
//! integers with a NaN state, and exact rationals with signed infinities.

pub mod big_int;
pub mod byte_array;
pub mod constants;
pub mod error;
pub(crate) mod magnitude;
pub mod options;
pub mod rational;

// Re-exports
pub use big_int::BigInt;
pub use byte_array::ByteArray;
pub use constants::{exit_codes, flags, DEFAULT_PARALLEL_THRESHOLD, DEFAULT_RADIX};
pub use error::MathError;
pub use options::Options;
pub use rational::{Rational, RationalBase, RationalInteger};
