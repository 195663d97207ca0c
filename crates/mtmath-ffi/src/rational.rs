//! Exported rational functions.
//!
//! A freshly initialised `MtMath_Rational` is `0/0`, which reads as NaN.

use mtmath_core::Rational;

use crate::convert::{read_big_int, read_rational, write_rational};
use crate::types::{MtMath_BigInt, MtMath_Rational};

unsafe fn binary(
    left: *const MtMath_Rational,
    right: *const MtMath_Rational,
    out: *mut MtMath_Rational,
    function: &'static str,
    op: impl FnOnce(Rational, Rational) -> Rational,
) {
    // SAFETY: forwarded contract; inputs are copied before `out` is borrowed.
    unsafe {
        let value = op(read_rational(left), read_rational(right));
        match out.as_mut() {
            Some(out) => write_rational(value, out),
            None => tracing::warn!(function, "null output pointer"),
        }
    }
}

/// Store `numerator / denominator` in canonical form.
///
/// # Safety
///
/// Non-null pointers must reference initialised structs.
#[no_mangle]
pub unsafe extern "C" fn set_rational(
    ra: *mut MtMath_Rational,
    numerator: *const MtMath_BigInt,
    denominator: *const MtMath_BigInt,
) {
    // SAFETY: forwarded contract.
    unsafe {
        let value = Rational::new(read_big_int(numerator), read_big_int(denominator));
        match ra.as_mut() {
            Some(ra) => write_rational(value, ra),
            None => tracing::warn!(function = "set_rational", "null output pointer"),
        }
    }
}

/// # Safety
///
/// Non-null pointers must reference initialised structs.
#[no_mangle]
pub unsafe extern "C" fn add_rational(
    left: *const MtMath_Rational,
    right: *const MtMath_Rational,
    out: *mut MtMath_Rational,
) {
    unsafe { binary(left, right, out, "add_rational", |l, r| l + r) };
}

/// # Safety
///
/// Non-null pointers must reference initialised structs.
#[no_mangle]
pub unsafe extern "C" fn sub_rational(
    left: *const MtMath_Rational,
    right: *const MtMath_Rational,
    out: *mut MtMath_Rational,
) {
    unsafe { binary(left, right, out, "sub_rational", |l, r| l - r) };
}

/// # Safety
///
/// Non-null pointers must reference initialised structs.
#[no_mangle]
pub unsafe extern "C" fn mul_rational(
    left: *const MtMath_Rational,
    right: *const MtMath_Rational,
    out: *mut MtMath_Rational,
) {
    unsafe { binary(left, right, out, "mul_rational", |l, r| l * r) };
}

/// Division by zero stores a signed infinity (`±1/0`), or NaN for `0/0`.
///
/// # Safety
///
/// Non-null pointers must reference initialised structs.
#[no_mangle]
pub unsafe extern "C" fn div_rational(
    left: *const MtMath_Rational,
    right: *const MtMath_Rational,
    out: *mut MtMath_Rational,
) {
    unsafe { binary(left, right, out, "div_rational", |l, r| l / r) };
}
