//! Conversion between the C structs and `mtmath-core` values.

use std::os::raw::{c_char, c_ulonglong};

use mtmath_core::{BigInt, Rational};

use crate::types::{MtMath_BigInt, MtMath_ByteArray, MtMath_Rational};

/// # Safety
///
/// `ptr` must be null or point to an initialised `MtMath_BigInt`.
pub(crate) unsafe fn read_big_int(ptr: *const MtMath_BigInt) -> BigInt {
    // SAFETY: null or valid per the contract.
    match unsafe { ptr.as_ref() } {
        None => BigInt::zero(),
        Some(raw) => {
            // SAFETY: digits were written by this library or zeroed.
            let bytes = unsafe { raw.digits.as_slice() };
            BigInt::from_flags_and_bytes(raw.flags, bytes)
        }
    }
}

/// Store `value` in `out`, freeing the digits `out` previously owned.
///
/// # Safety
///
/// `out` must be initialised.
pub(crate) unsafe fn write_big_int(value: &BigInt, out: &mut MtMath_BigInt) {
    // SAFETY: `out` is initialised, so its buffer is null or ours.
    unsafe { out.digits.release() };
    out.flags = value.flags();
    out.digits = MtMath_ByteArray::from_bytes(value.magnitude().as_bytes().to_vec());
}

/// # Safety
///
/// `ptr` must be null or point to an initialised `MtMath_Rational`.
pub(crate) unsafe fn read_rational(ptr: *const MtMath_Rational) -> Rational {
    // SAFETY: null or valid per the contract.
    match unsafe { ptr.as_ref() } {
        None => Rational::zero(),
        Some(raw) => {
            // SAFETY: both halves are initialised big ints.
            let (n, d) = unsafe { (read_big_int(&raw.numerator), read_big_int(&raw.denominator)) };
            Rational::new(n, d)
        }
    }
}

/// # Safety
///
/// `out` must be initialised.
pub(crate) unsafe fn write_rational(value: Rational, out: &mut MtMath_Rational) {
    let (n, d) = value.into_parts();
    // SAFETY: forwarded contract.
    unsafe {
        write_big_int(&n, &mut out.numerator);
        write_big_int(&d, &mut out.denominator);
    }
}

/// Copy `text` into a caller buffer of `size` bytes, truncating to
/// `size - 1` characters and NUL-terminating. Returns false when there is
/// no room for even the terminator.
///
/// # Safety
///
/// `buffer` must be null or valid for writes of `size` bytes.
#[allow(clippy::cast_possible_truncation)]
pub(crate) unsafe fn copy_to_buffer(text: &str, buffer: *mut c_char, size: c_ulonglong) -> bool {
    if buffer.is_null() || size == 0 {
        return false;
    }
    let count = text.len().min(size as usize - 1);
    // SAFETY: `count + 1 <= size` bytes are writable.
    unsafe {
        std::ptr::copy_nonoverlapping(text.as_ptr().cast::<c_char>(), buffer, count);
        *buffer.add(count) = 0;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_reads_as_zero() {
        assert!(unsafe { read_big_int(std::ptr::null()) }.is_zero());
        assert_eq!(unsafe { read_rational(std::ptr::null()) }, Rational::zero());
    }

    #[test]
    fn write_then_read() {
        let mut raw = MtMath_BigInt::ZERO;
        let value = BigInt::from(-70_000);
        unsafe { write_big_int(&value, &mut raw) };
        assert_eq!(raw.flags, 1);
        assert_eq!(raw.digits.len, 3);
        assert_eq!(unsafe { read_big_int(&raw) }, value);
        unsafe { write_big_int(&BigInt::zero(), &mut raw) };
        assert!(raw.digits.bytes.is_null());
    }

    #[test]
    fn buffer_truncates() {
        let mut buf = [0x7f as c_char; 4];
        assert!(unsafe { copy_to_buffer("12345", buf.as_mut_ptr(), 4) });
        let text = unsafe { std::ffi::CStr::from_ptr(buf.as_ptr()) };
        assert_eq!(text.to_str().unwrap(), "123");
        assert!(!unsafe { copy_to_buffer("1", buf.as_mut_ptr(), 0) });
    }
}
