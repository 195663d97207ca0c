//! Exported big-integer functions.

use std::cmp::Ordering;
use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int, c_long, c_longlong, c_uint, c_ulong, c_ulonglong};

use mtmath_core::BigInt;

use crate::convert::{copy_to_buffer, read_big_int, write_big_int};
use crate::types::MtMath_BigInt;

/// Write `value` into `out`, or log and skip when `out` is null.
unsafe fn store(value: &BigInt, out: *mut MtMath_BigInt, function: &'static str) {
    // SAFETY: null or initialised per the crate contract.
    match unsafe { out.as_mut() } {
        Some(out) => unsafe { write_big_int(value, out) },
        None => tracing::warn!(function, "null output pointer"),
    }
}

unsafe fn binary(
    left: *const MtMath_BigInt,
    right: *const MtMath_BigInt,
    out: *mut MtMath_BigInt,
    function: &'static str,
    op: impl FnOnce(BigInt, BigInt) -> BigInt,
) {
    if out.is_null() {
        tracing::warn!(function, "null output pointer");
        return;
    }
    // SAFETY: forwarded contract; inputs are copied before `out` is touched.
    unsafe {
        let value = op(read_big_int(left), read_big_int(right));
        store(&value, out, function);
    }
}

/// Parse the first `strlen` bytes of `str`: an optional sign, then decimal
/// digits up to the first non-digit.
///
/// # Safety
///
/// `str` must be null or valid for reads of `strlen` bytes.
#[no_mangle]
#[allow(clippy::cast_possible_truncation)]
pub unsafe extern "C" fn set_big_int_to_str_safe(
    str: *const c_char,
    strlen: c_ulonglong,
    out: *mut MtMath_BigInt,
) {
    let value = if str.is_null() {
        BigInt::zero()
    } else {
        // SAFETY: valid for `strlen` bytes per the contract.
        let bytes = unsafe { std::slice::from_raw_parts(str.cast::<u8>(), strlen as usize) };
        BigInt::parse_leading_digits(bytes)
    };
    unsafe { store(&value, out, "set_big_int_to_str_safe") };
}

/// Like [`set_big_int_to_str_safe`] for a NUL-terminated string.
///
/// # Safety
///
/// `str` must be null or NUL-terminated.
#[no_mangle]
pub unsafe extern "C" fn set_big_int_to_str(str: *const c_char, out: *mut MtMath_BigInt) {
    let value = if str.is_null() {
        BigInt::zero()
    } else {
        // SAFETY: NUL-terminated per the contract.
        BigInt::parse_leading_digits(unsafe { CStr::from_ptr(str) }.to_bytes())
    };
    unsafe { store(&value, out, "set_big_int_to_str") };
}

macro_rules! primitive_setter {
    ($($name:ident($t:ty)),* $(,)?) => {$(
        /// # Safety
        ///
        /// `out` must be null or initialised.
        #[no_mangle]
        pub unsafe extern "C" fn $name(val: $t, out: *mut MtMath_BigInt) {
            unsafe { store(&BigInt::from(val), out, stringify!($name)) };
        }
    )*};
}

primitive_setter!(
    set_big_int_to_int(c_int),
    set_big_int_to_long(c_long),
    set_big_int_to_long_long(c_longlong),
    set_big_int_to_uint(c_uint),
    set_big_int_to_ulong(c_ulong),
    set_big_int_to_ulong_long(c_ulonglong),
);

/// # Safety
///
/// Non-null pointers must reference initialised structs.
#[no_mangle]
pub unsafe extern "C" fn add_big_int(
    left: *const MtMath_BigInt,
    right: *const MtMath_BigInt,
    out: *mut MtMath_BigInt,
) {
    unsafe { binary(left, right, out, "add_big_int", |l, r| l + r) };
}

/// # Safety
///
/// Non-null pointers must reference initialised structs.
#[no_mangle]
pub unsafe extern "C" fn sub_big_int(
    left: *const MtMath_BigInt,
    right: *const MtMath_BigInt,
    out: *mut MtMath_BigInt,
) {
    unsafe { binary(left, right, out, "sub_big_int", |l, r| l - r) };
}

/// # Safety
///
/// Non-null pointers must reference initialised structs.
#[no_mangle]
pub unsafe extern "C" fn mul_big_int(
    left: *const MtMath_BigInt,
    right: *const MtMath_BigInt,
    out: *mut MtMath_BigInt,
) {
    unsafe { binary(left, right, out, "mul_big_int", |l, r| l * r) };
}

/// Truncated quotient. Division by zero stores NaN.
///
/// # Safety
///
/// Non-null pointers must reference initialised structs.
#[no_mangle]
pub unsafe extern "C" fn div_big_int(
    left: *const MtMath_BigInt,
    right: *const MtMath_BigInt,
    out: *mut MtMath_BigInt,
) {
    unsafe { binary(left, right, out, "div_big_int", |l, r| l / r) };
}

/// Remainder with the sign of `left`. Division by zero stores NaN.
///
/// # Safety
///
/// Non-null pointers must reference initialised structs.
#[no_mangle]
pub unsafe extern "C" fn rem_big_int(
    left: *const MtMath_BigInt,
    right: *const MtMath_BigInt,
    out: *mut MtMath_BigInt,
) {
    unsafe { binary(left, right, out, "rem_big_int", |l, r| l % r) };
}

/// Store the quotient in `quotient` and the remainder in `remainder`.
/// Either output may be null.
///
/// # Safety
///
/// Non-null pointers must reference initialised structs.
#[no_mangle]
pub unsafe extern "C" fn div_rem_big_int(
    left: *const MtMath_BigInt,
    right: *const MtMath_BigInt,
    quotient: *mut MtMath_BigInt,
    remainder: *mut MtMath_BigInt,
) {
    if quotient.is_null() && remainder.is_null() {
        tracing::warn!(function = "div_rem_big_int", "null output pointers");
        return;
    }
    // SAFETY: forwarded contract.
    unsafe {
        let (q, r) = read_big_int(left).div_rem(&read_big_int(right));
        if !quotient.is_null() {
            store(&q, quotient, "div_rem_big_int");
        }
        if !remainder.is_null() {
            store(&r, remainder, "div_rem_big_int");
        }
    }
}

/// Three-way comparison: -1, 0 or 1. NaN sorts below every number.
///
/// # Safety
///
/// Non-null pointers must reference initialised structs.
#[no_mangle]
pub unsafe extern "C" fn cmp_big_int(
    left: *const MtMath_BigInt,
    right: *const MtMath_BigInt,
) -> c_int {
    // SAFETY: forwarded contract.
    let ordering = unsafe { read_big_int(left).cmp(&read_big_int(right)) };
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Low 64 bits in two's complement. NaN reads as 0.
///
/// # Safety
///
/// `val` must be null or initialised.
#[no_mangle]
pub unsafe extern "C" fn big_int_ll(val: *const MtMath_BigInt) -> c_longlong {
    unsafe { read_big_int(val) }.wrapping_to_i64()
}

/// Copy `text` into a NUL-terminated `malloc` block and store it in `*out`.
unsafe fn alloc_string(text: String, out: *mut *mut c_char, function: &'static str) -> bool {
    if out.is_null() {
        tracing::warn!(function, "null output pointer");
        return false;
    }
    let Ok(text) = CString::new(text) else {
        return false;
    };
    let bytes = text.as_bytes_with_nul();
    // SAFETY: malloc has no preconditions; the result is checked for null.
    let block = unsafe { libc::malloc(bytes.len()) }.cast::<c_char>();
    if block.is_null() {
        tracing::warn!(function, len = bytes.len(), "allocation failed");
        return false;
    }
    // SAFETY: `block` holds `bytes.len()` bytes and `out` is non-null and writable.
    unsafe {
        std::ptr::copy_nonoverlapping(bytes.as_ptr().cast::<c_char>(), block, bytes.len());
        *out = block;
    }
    true
}

/// Allocate the decimal rendering of `val` into `*out`. Release it with
/// [`free_big_int_str`](crate::free_big_int_str) or C `free`.
///
/// # Safety
///
/// `val` must be null or initialised; `out` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn big_int_str_alloc(val: *const MtMath_BigInt, out: *mut *mut c_char) {
    let text = unsafe { read_big_int(val) }.to_string();
    unsafe { alloc_string(text, out, "big_int_str_alloc") };
}

/// Write the decimal rendering into `buffer`, truncated to `size - 1`
/// characters.
///
/// # Safety
///
/// `buffer` must be null or valid for writes of `size` bytes.
#[no_mangle]
pub unsafe extern "C" fn big_int_str(
    val: *const MtMath_BigInt,
    buffer: *mut c_char,
    size: c_ulonglong,
) {
    let text = unsafe { read_big_int(val) }.to_string();
    unsafe { copy_to_buffer(&text, buffer, size) };
}

fn render_radix(value: &BigInt, radix: c_int, function: &'static str) -> Option<String> {
    let rendered = u32::try_from(radix)
        .ok()
        .and_then(|radix| value.to_str_radix(radix).ok());
    if rendered.is_none() {
        tracing::debug!(function, radix, "unsupported radix");
    }
    rendered
}

/// Allocate the rendering of `val` in `radix` (2..=36). Returns false, and
/// leaves `*out` untouched, for other radixes.
///
/// # Safety
///
/// `val` must be null or initialised; `out` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn big_int_str_alloc_rdx(
    val: *const MtMath_BigInt,
    out: *mut *mut c_char,
    radix: c_int,
) -> bool {
    let value = unsafe { read_big_int(val) };
    match render_radix(&value, radix, "big_int_str_alloc_rdx") {
        Some(text) => unsafe { alloc_string(text, out, "big_int_str_alloc_rdx") },
        None => false,
    }
}

/// Write the rendering of `val` in `radix` into `buffer`.
///
/// # Safety
///
/// `buffer` must be null or valid for writes of `size` bytes.
#[no_mangle]
pub unsafe extern "C" fn big_int_str_rdx(
    val: *const MtMath_BigInt,
    buffer: *mut c_char,
    size: c_ulonglong,
    radix: c_int,
) -> bool {
    if buffer.is_null() || size == 0 {
        return false;
    }
    let value = unsafe { read_big_int(val) };
    match render_radix(&value, radix, "big_int_str_rdx") {
        Some(text) => unsafe { copy_to_buffer(&text, buffer, size) },
        None => false,
    }
}
