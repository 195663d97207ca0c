//! `#[repr(C)]` mirrors of the structs in `mtmath_c.h`.

use std::os::raw::{c_uchar, c_ulonglong};
use std::ptr;

/// Little-endian magnitude buffer. `bytes` is null when `len` is zero.
#[repr(C)]
#[derive(Debug)]
pub struct MtMath_ByteArray {
    pub len: c_ulonglong,
    pub bytes: *mut u8,
}

/// Big integer: flag byte plus magnitude digits.
#[repr(C)]
#[derive(Debug)]
pub struct MtMath_BigInt {
    pub flags: c_uchar,
    pub digits: MtMath_ByteArray,
}

#[repr(C)]
#[derive(Debug)]
pub struct MtMath_Rational {
    pub numerator: MtMath_BigInt,
    pub denominator: MtMath_BigInt,
}

impl MtMath_ByteArray {
    pub const EMPTY: Self = Self {
        len: 0,
        bytes: ptr::null_mut(),
    };

    /// Move `bytes` onto the heap and hand ownership to the struct.
    pub(crate) fn from_bytes(bytes: Vec<u8>) -> Self {
        if bytes.is_empty() {
            return Self::EMPTY;
        }
        let boxed = bytes.into_boxed_slice();
        let len = boxed.len() as c_ulonglong;
        Self {
            len,
            bytes: Box::into_raw(boxed).cast::<u8>(),
        }
    }

    /// # Safety
    ///
    /// `bytes` must be null or valid for reads of `len` bytes.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) unsafe fn as_slice(&self) -> &[u8] {
        if self.bytes.is_null() || self.len == 0 {
            return &[];
        }
        // SAFETY: non-null and valid for `len` bytes per the contract.
        unsafe { std::slice::from_raw_parts(self.bytes, self.len as usize) }
    }

    /// Free the buffer and reset to empty.
    ///
    /// # Safety
    ///
    /// `bytes` must be null or a buffer of exactly `len` bytes allocated by
    /// this library.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) unsafe fn release(&mut self) {
        if !self.bytes.is_null() && self.len != 0 {
            let slice = ptr::slice_from_raw_parts_mut(self.bytes, self.len as usize);
            // SAFETY: produced by `from_bytes` via `Box::into_raw`.
            drop(unsafe { Box::from_raw(slice) });
        }
        *self = Self::EMPTY;
    }
}

impl MtMath_BigInt {
    pub const ZERO: Self = Self {
        flags: 0,
        digits: MtMath_ByteArray::EMPTY,
    };
}

impl MtMath_Rational {
    pub const ZEROED: Self = Self {
        numerator: MtMath_BigInt::ZERO,
        denominator: MtMath_BigInt::ZERO,
    };
}
