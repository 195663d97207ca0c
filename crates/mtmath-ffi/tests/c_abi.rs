//! Exercises the exported C functions the way a C caller would.

#![allow(unsafe_code)]

use std::ffi::CStr;
use std::mem::MaybeUninit;
use std::os::raw::c_char;
use std::ptr;

use proptest::prelude::*;

use mtmath_c::*;

fn new_big_int() -> MtMath_BigInt {
    let mut bi = MaybeUninit::<MtMath_BigInt>::uninit();
    unsafe {
        init_big_int(bi.as_mut_ptr());
        bi.assume_init()
    }
}

fn new_rational() -> MtMath_Rational {
    let mut ra = MaybeUninit::<MtMath_Rational>::uninit();
    unsafe {
        init_rational(ra.as_mut_ptr());
        ra.assume_init()
    }
}

fn int(value: i32) -> MtMath_BigInt {
    let mut bi = new_big_int();
    unsafe { set_big_int_to_int(value, &mut bi) };
    bi
}

fn to_string(bi: &MtMath_BigInt) -> String {
    let mut buffer = [0 as c_char; 128];
    unsafe {
        big_int_str(bi, buffer.as_mut_ptr(), 128);
        CStr::from_ptr(buffer.as_ptr()).to_string_lossy().into_owned()
    }
}

fn alloc_string(bi: &MtMath_BigInt) -> String {
    let mut out: *mut c_char = ptr::null_mut();
    unsafe {
        big_int_str_alloc(bi, &mut out);
        let text = CStr::from_ptr(out).to_string_lossy().into_owned();
        free_big_int_str(out);
        text
    }
}

fn rational_string(ra: &MtMath_Rational) -> String {
    format!("{}/{}", to_string(&ra.numerator), to_string(&ra.denominator))
}

#[test]
fn can_initialize() {
    let bi = new_big_int();
    assert_eq!(bi.flags, 0);
    assert_eq!(bi.digits.len, 0);
    assert!(bi.digits.bytes.is_null());
}

#[test]
fn can_add() {
    let (left, right) = (int(25), int(32));
    let mut out = new_big_int();
    unsafe {
        add_big_int(&left, &right, &mut out);
        assert_eq!(big_int_ll(&left), 25);
        assert_eq!(big_int_ll(&right), 32);
        assert_eq!(big_int_ll(&out), 57);
    }
}

#[test]
fn can_subtract() {
    let (left, right) = (int(25), int(32));
    let mut out = new_big_int();
    unsafe { sub_big_int(&left, &right, &mut out) };
    assert_eq!(to_string(&out), "-7");
    assert_eq!(to_string(&left), "25");
    assert_eq!(to_string(&right), "32");
}

#[test]
fn can_multiply() {
    let (left, right) = (int(25), int(32));
    let mut out = new_big_int();
    unsafe { mul_big_int(&left, &right, &mut out) };
    assert_eq!(alloc_string(&out), "800");
    assert_eq!(alloc_string(&right), "32");

    let mut text: *mut c_char = ptr::null_mut();
    unsafe {
        assert!(big_int_str_alloc_rdx(&left, &mut text, 10));
        assert_eq!(CStr::from_ptr(text).to_str().unwrap(), "25");
        free_big_int_str(text);
    }
}

#[test]
fn allocated_strings_release_with_c_free() {
    let value = int(-802);
    let mut decimal: *mut c_char = ptr::null_mut();
    let mut hex: *mut c_char = ptr::null_mut();
    unsafe {
        big_int_str_alloc(&value, &mut decimal);
        assert!(big_int_str_alloc_rdx(&value, &mut hex, 16));
        assert_eq!(CStr::from_ptr(decimal).to_str().unwrap(), "-802");
        assert_eq!(CStr::from_ptr(hex).to_str().unwrap(), "-322");
        libc::free(decimal.cast());
        libc::free(hex.cast());
    }
}

#[test]
fn can_divide() {
    let (left, right) = (int(802), int(32));
    let mut quotient = new_big_int();
    let mut remainder = new_big_int();
    let mut buffer = [0 as c_char; 128];
    unsafe {
        div_rem_big_int(&left, &right, &mut quotient, &mut remainder);
        assert!(big_int_str_rdx(&quotient, buffer.as_mut_ptr(), 128, 10));
        assert_eq!(CStr::from_ptr(buffer.as_ptr()).to_str().unwrap(), "25");
        assert_eq!(big_int_ll(&remainder), 2);
        assert_eq!(big_int_ll(&left), 802);
        assert_eq!(big_int_ll(&right), 32);
    }
}

#[test]
fn div_and_rem_agree_with_div_rem() {
    let (left, right) = (int(-802), int(32));
    let (mut q, mut r) = (new_big_int(), new_big_int());
    unsafe {
        div_big_int(&left, &right, &mut q);
        rem_big_int(&left, &right, &mut r);
        assert_eq!(big_int_ll(&q), -25);
        assert_eq!(big_int_ll(&r), -2);
    }
}

#[test]
fn divide_by_zero_sets_invalid_flag() {
    let (left, zero) = (int(5), int(0));
    let mut out = new_big_int();
    unsafe { div_big_int(&left, &zero, &mut out) };
    assert_eq!(out.flags, mtmath_core::flags::INVALID);
    assert_eq!(to_string(&out), "NaN");
    assert_eq!(unsafe { big_int_ll(&out) }, 0);
}

#[test]
fn from_string_safe() {
    let text = b"12345";
    let mut bi = new_big_int();
    unsafe {
        set_big_int_to_str_safe(text.as_ptr().cast(), 5, &mut bi);
        assert_eq!(big_int_ll(&bi), 12345);
        set_big_int_to_str_safe(text.as_ptr().cast(), 3, &mut bi);
        assert_eq!(big_int_ll(&bi), 123);
        free_big_int(&mut bi);
    }
}

#[test]
fn from_string() {
    let mut bi = new_big_int();
    unsafe {
        set_big_int_to_str(c"123456".as_ptr(), &mut bi);
        assert_eq!(big_int_ll(&bi), 123_456);
        set_big_int_to_str(c"-98765432109876543210".as_ptr(), &mut bi);
    }
    assert_eq!(to_string(&bi), "-98765432109876543210");
}

#[test]
fn from_primitives() {
    let mut bi = new_big_int();
    unsafe {
        set_big_int_to_long(43, &mut bi);
        assert_eq!(big_int_ll(&bi), 43);
        set_big_int_to_long_long(-43, &mut bi);
        assert_eq!(big_int_ll(&bi), -43);
        set_big_int_to_uint(43, &mut bi);
        assert_eq!(big_int_ll(&bi), 43);
        set_big_int_to_ulong(43, &mut bi);
        assert_eq!(big_int_ll(&bi), 43);
        set_big_int_to_ulong_long(u64::MAX, &mut bi);
        assert_eq!(big_int_ll(&bi), -1);
    }
    assert_eq!(to_string(&bi), "18446744073709551615");
}

#[test]
fn compare() {
    let (a, b) = (int(-3), int(7));
    unsafe {
        assert_eq!(cmp_big_int(&a, &b), -1);
        assert_eq!(cmp_big_int(&b, &a), 1);
        assert_eq!(cmp_big_int(&a, &a), 0);
        assert_eq!(cmp_big_int(ptr::null(), &int(0)), 0);
    }
}

#[test]
fn output_may_alias_input() {
    let mut acc = int(10);
    let step = int(5);
    unsafe {
        let acc_ptr: *mut MtMath_BigInt = &mut acc;
        add_big_int(acc_ptr, &step, acc_ptr);
        mul_big_int(acc_ptr, acc_ptr, acc_ptr);
    }
    assert_eq!(to_string(&acc), "225");
}

#[test]
fn small_buffers_truncate() {
    let bi = int(123_456);
    let mut buffer = [0x55 as c_char; 4];
    unsafe {
        big_int_str(&bi, buffer.as_mut_ptr(), 4);
        assert_eq!(CStr::from_ptr(buffer.as_ptr()).to_str().unwrap(), "123");
    }
}

#[test]
fn bad_radix_is_rejected() {
    let bi = int(255);
    let mut buffer = [0 as c_char; 16];
    let mut text: *mut c_char = ptr::null_mut();
    unsafe {
        assert!(!big_int_str_rdx(&bi, buffer.as_mut_ptr(), 16, 1));
        assert!(!big_int_str_rdx(&bi, buffer.as_mut_ptr(), 16, 37));
        assert!(!big_int_str_alloc_rdx(&bi, &mut text, -16));
        assert!(text.is_null());
        assert!(big_int_str_rdx(&bi, buffer.as_mut_ptr(), 16, 16));
        assert_eq!(CStr::from_ptr(buffer.as_ptr()).to_str().unwrap(), "ff");
    }
}

#[test]
fn null_output_is_a_no_op() {
    let (left, right) = (int(1), int(2));
    unsafe {
        add_big_int(&left, &right, ptr::null_mut());
        div_rem_big_int(&left, &right, ptr::null_mut(), ptr::null_mut());
        set_big_int_to_int(3, ptr::null_mut());
        big_int_str_alloc(&left, ptr::null_mut());
        big_int_str(&left, ptr::null_mut(), 10);
        assert!(!big_int_str_rdx(&left, ptr::null_mut(), 10, 10));
        set_rational(ptr::null_mut(), &left, &right);
    }
}

#[test]
fn rational_arithmetic() {
    let (mut a, mut b, mut out) = (new_rational(), new_rational(), new_rational());
    unsafe {
        set_rational(&mut a, &int(2), &int(3));
        set_rational(&mut b, &int(5), &int(6));
        add_rational(&a, &b, &mut out);
        assert_eq!(rational_string(&out), "3/2");
        let out_ptr: *mut MtMath_Rational = &mut out;
        sub_rational(out_ptr, &b, out_ptr);
        assert_eq!(rational_string(&out), "2/3");
        mul_rational(&a, &b, &mut out);
        assert_eq!(rational_string(&out), "5/9");
        div_rational(&a, &b, &mut out);
        assert_eq!(rational_string(&out), "4/5");
        free_rational(&mut a);
        free_rational(&mut b);
        free_rational(&mut out);
    }
}

#[test]
fn rational_normalises_on_set() {
    let mut ra = new_rational();
    unsafe {
        set_rational(&mut ra, &int(4), &int(-6));
        assert_eq!(rational_string(&ra), "-2/3");
        set_rational(&mut ra, &int(-9), &int(0));
        assert_eq!(rational_string(&ra), "-1/0");
    }
}

#[test]
fn uninitialised_rational_reads_as_nan() {
    let (zeroed, other) = (new_rational(), new_rational());
    let mut out = new_rational();
    unsafe { add_rational(&zeroed, &other, &mut out) };
    assert_eq!(rational_string(&out), "0/0");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn string_round_trip(s in "-?[1-9][0-9]{0,60}") {
        let mut bi = new_big_int();
        unsafe { set_big_int_to_str_safe(s.as_ptr().cast(), s.len() as u64, &mut bi) };
        prop_assert_eq!(alloc_string(&bi), s);
        unsafe { free_big_int(&mut bi) };
    }
}
