//! # mtmath-ffi
//!
//! C ABI for `mtmath-core`, built as `libmtmath_c`. The declarations live in
//! `include/mtmath_c.h`.
//!
//! ## Safety contract
//!
//! Every exported function accepts raw pointers. A non-null pointer must
//! reference a properly aligned struct that was zeroed with one of the
//! `init_*` functions (or written by this library) and not freed since.
//! Null output pointers turn the call into a no-op, and null inputs read as
//! zero. Inputs and outputs may alias.
//!
//! Writing a value into an output struct releases the digit buffer it
//! previously owned. Release a struct with the matching `free_*` function
//! once it is no longer needed. Strings from the `_alloc` readers live on
//! the C heap (`malloc`), so either `free_big_int_str` or C `free` releases
//! them.

#![allow(unsafe_code)]
#![allow(non_camel_case_types)]
#![warn(unsafe_op_in_unsafe_fn)]

mod convert;
pub mod integer;
pub mod lifecycle;
pub mod rational;
pub mod types;

pub use integer::*;
pub use lifecycle::*;
pub use rational::*;
pub use types::{MtMath_BigInt, MtMath_ByteArray, MtMath_Rational};
