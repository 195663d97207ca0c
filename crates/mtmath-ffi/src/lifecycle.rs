//! Initialisation, release and the liveness probe.

use std::os::raw::{c_char, c_int};

use crate::types::{MtMath_BigInt, MtMath_ByteArray, MtMath_Rational};

/// Liveness probe. Always returns 43.
#[no_mangle]
pub extern "C" fn foo() -> c_int {
    43
}

/// Zero a byte array without freeing anything.
///
/// # Safety
///
/// `ba` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn init_byte_array(ba: *mut MtMath_ByteArray) {
    if !ba.is_null() {
        // SAFETY: writable per the contract; the old contents are not read.
        unsafe { ba.write(MtMath_ByteArray::EMPTY) };
    }
}

/// Zero a big integer (flags and digits) without freeing anything.
///
/// # Safety
///
/// `bi` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn init_big_int(bi: *mut MtMath_BigInt) {
    if !bi.is_null() {
        // SAFETY: writable per the contract; the old contents are not read.
        unsafe { bi.write(MtMath_BigInt::ZERO) };
    }
}

/// Zero both halves of a rational without freeing anything.
///
/// # Safety
///
/// `ra` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn init_rational(ra: *mut MtMath_Rational) {
    if !ra.is_null() {
        // SAFETY: writable per the contract; the old contents are not read.
        unsafe { ra.write(MtMath_Rational::ZEROED) };
    }
}

/// # Safety
///
/// `ba` must be null or initialised.
#[no_mangle]
pub unsafe extern "C" fn free_byte_array(ba: *mut MtMath_ByteArray) {
    // SAFETY: initialised per the contract.
    if let Some(ba) = unsafe { ba.as_mut() } {
        unsafe { ba.release() };
    }
}

/// Release the digits and reset the value to zero.
///
/// # Safety
///
/// `bi` must be null or initialised.
#[no_mangle]
pub unsafe extern "C" fn free_big_int(bi: *mut MtMath_BigInt) {
    // SAFETY: initialised per the contract.
    if let Some(bi) = unsafe { bi.as_mut() } {
        unsafe { bi.digits.release() };
        bi.flags = 0;
    }
}

/// # Safety
///
/// `ra` must be null or initialised.
#[no_mangle]
pub unsafe extern "C" fn free_rational(ra: *mut MtMath_Rational) {
    // SAFETY: initialised per the contract.
    if let Some(ra) = unsafe { ra.as_mut() } {
        unsafe {
            free_big_int(&mut ra.numerator);
            free_big_int(&mut ra.denominator);
        }
    }
}

/// Release a string from `big_int_str_alloc` or `big_int_str_alloc_rdx`.
/// Equivalent to C `free`.
///
/// # Safety
///
/// `s` must be null or a string returned by this library and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn free_big_int_str(s: *mut c_char) {
    if !s.is_null() {
        // SAFETY: allocated with `libc::malloc` by the `_alloc` readers.
        unsafe { libc::free(s.cast()) };
    }
}
