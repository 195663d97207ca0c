//! Arbitrary-precision signed integer with a NaN state.
//!
//! A `BigInt` is a flag byte plus a canonical little-endian magnitude. The
//! operator forms never panic: dividing by zero, or operating on NaN,
//! produces NaN. Use the `checked_*` methods to get an error instead.

use std::cmp::Ordering;
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};
use std::str::FromStr;

use num_traits::{Num, One, Signed, ToPrimitive, Zero};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::byte_array::ByteArray;
use crate::constants::{flags, MAX_RADIX, MIN_RADIX};
use crate::error::MathError;
use crate::magnitude;
use crate::options::Options;

/// Arbitrary-precision signed integer.
///
/// Invariants: zero is never negative, NaN carries only the `INVALID` flag
/// and an empty magnitude, and the magnitude has no high zero bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
    flags: u8,
    magnitude: ByteArray,
}

impl BigInt {
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn one() -> Self {
        Self::from(1u8)
    }

    /// The "not a number" value.
    #[must_use]
    pub fn nan() -> Self {
        Self {
            flags: flags::INVALID,
            magnitude: ByteArray::default(),
        }
    }

    /// Build a value from a sign and a magnitude. A zero magnitude is never negative.
    #[must_use]
    pub fn from_parts(negative: bool, magnitude: ByteArray) -> Self {
        let flags = if negative && !magnitude.is_empty() {
            flags::NEGATIVE
        } else {
            0
        };
        Self { flags, magnitude }
    }

    /// Build a value from raw flags and little-endian magnitude bytes, as
    /// stored in the C representation. Unknown flag bits are ignored.
    #[must_use]
    pub fn from_flags_and_bytes(raw_flags: u8, bytes: &[u8]) -> Self {
        if raw_flags & flags::INVALID != 0 {
            return Self::nan();
        }
        Self::from_parts(raw_flags & flags::NEGATIVE != 0, ByteArray::from(bytes))
    }

    /// The flag byte (`NEGATIVE`, `INVALID`).
    #[must_use]
    pub fn flags(&self) -> u8 {
        self.flags
    }

    /// The magnitude |self|. Empty for zero and NaN.
    #[must_use]
    pub fn magnitude(&self) -> &ByteArray {
        &self.magnitude
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.flags == 0 && self.magnitude.is_empty()
    }

    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.flags & flags::INVALID != 0
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.is_nan()
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.flags & flags::NEGATIVE != 0
    }

    /// Number of significant bits in the magnitude.
    #[must_use]
    pub fn bits(&self) -> u64 {
        self.magnitude.bits()
    }

    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            flags: self.flags & !flags::NEGATIVE,
            magnitude: self.magnitude.clone(),
        }
    }

    /// -1, 0 or 1 according to the sign; NaN stays NaN.
    #[must_use]
    pub fn signum(&self) -> Self {
        if self.is_nan() {
            Self::nan()
        } else if self.is_zero() {
            Self::zero()
        } else {
            Self::from_parts(self.is_negative(), ByteArray::from(1u8))
        }
    }

    fn add_signed(&self, other: &Self, negate_other: bool) -> Self {
        if self.is_nan() || other.is_nan() {
            return Self::nan();
        }
        let (a, b) = (self.magnitude.as_bytes(), other.magnitude.as_bytes());
        let other_negative = other.is_negative() != negate_other;

        if self.is_negative() == other_negative {
            return Self::from_parts(self.is_negative(), ByteArray::new(magnitude::add(a, b)));
        }
        match magnitude::cmp(a, b) {
            Ordering::Equal => Self::zero(),
            Ordering::Greater => {
                Self::from_parts(self.is_negative(), ByteArray::new(magnitude::sub(a, b)))
            }
            Ordering::Less => Self::from_parts(other_negative, ByteArray::new(magnitude::sub(b, a))),
        }
    }

    fn add_ref(&self, other: &Self) -> Self {
        self.add_signed(other, false)
    }

    fn sub_ref(&self, other: &Self) -> Self {
        self.add_signed(other, true)
    }

    fn mul_ref(&self, other: &Self) -> Self {
        self.mul_with_options(other, &Options::default())
    }

    fn div_ref(&self, other: &Self) -> Self {
        self.div_rem(other).0
    }

    fn rem_ref(&self, other: &Self) -> Self {
        self.div_rem(other).1
    }

    /// Multiply, fanning out on the rayon pool when both operands exceed
    /// `opts.parallel_threshold` bytes.
    #[must_use]
    pub fn mul_with_options(&self, other: &Self, opts: &Options) -> Self {
        if self.is_nan() || other.is_nan() {
            return Self::nan();
        }
        let product = magnitude::mul_auto(
            self.magnitude.as_bytes(),
            other.magnitude.as_bytes(),
            opts.parallel_threshold,
        );
        Self::from_parts(
            self.is_negative() != other.is_negative(),
            ByteArray::new(product),
        )
    }

    /// Truncated division: the quotient rounds toward zero and the remainder
    /// takes the sign of the dividend. Division by zero, or a NaN operand,
    /// yields `(NaN, NaN)`.
    #[must_use]
    pub fn div_rem(&self, other: &Self) -> (Self, Self) {
        if self.is_nan() || other.is_nan() || other.is_zero() {
            return (Self::nan(), Self::nan());
        }
        let (q, r) = magnitude::div_rem(self.magnitude.as_bytes(), other.magnitude.as_bytes());
        (
            Self::from_parts(self.is_negative() != other.is_negative(), ByteArray::new(q)),
            Self::from_parts(self.is_negative(), ByteArray::new(r)),
        )
    }

    /// Like [`BigInt::div_rem`], but reports division by zero and NaN operands.
    pub fn checked_div_rem(&self, other: &Self) -> Result<(Self, Self), MathError> {
        if self.is_nan() || other.is_nan() {
            return Err(MathError::NotANumber);
        }
        if other.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        Ok(self.div_rem(other))
    }

    /// Raise to a power by repeated squaring. `0^0` is 1.
    #[must_use]
    pub fn pow(&self, mut exp: u32) -> Self {
        if self.is_nan() {
            return Self::nan();
        }
        let mut base = self.clone();
        let mut acc = Self::one();
        while exp > 0 {
            if exp & 1 == 1 {
                acc = &acc * &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }
        acc
    }

    /// Parse an optionally signed string of digits in `radix` (2..=36).
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, MathError> {
        check_radix(radix)?;
        let (negative, digits, offset) = split_sign(s);
        if digits.is_empty() {
            return Err(MathError::Empty);
        }
        if let Some((position, digit)) = digits.char_indices().find(|&(_, c)| !c.is_digit(radix))
        {
            return Err(MathError::InvalidDigit {
                digit,
                position: position + offset,
                radix,
            });
        }
        let mag = magnitude::from_radix_digits(digits.as_bytes(), radix);
        Ok(Self::from_parts(negative, ByteArray::new(mag)))
    }

    /// Lenient decimal parse: an optional sign followed by digits, stopping
    /// at the first non-digit byte. No digits at all parses as zero.
    #[must_use]
    pub fn parse_leading_digits(bytes: &[u8]) -> Self {
        let (negative, rest) = match bytes.split_first() {
            Some((b'-', rest)) => (true, rest),
            Some((b'+', rest)) => (false, rest),
            _ => (false, bytes),
        };
        let end = rest
            .iter()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(rest.len());
        let mag = magnitude::from_radix_digits(&rest[..end], 10);
        Self::from_parts(negative, ByteArray::new(mag))
    }

    /// Render in `radix` (2..=36) with a leading `-` for negative values and
    /// no prefix. NaN renders as `NaN`.
    pub fn to_str_radix(&self, radix: u32) -> Result<String, MathError> {
        check_radix(radix)?;
        if self.is_nan() {
            return Ok("NaN".to_string());
        }
        let digits = magnitude::to_radix_digits(self.magnitude.as_bytes(), radix);
        Ok(if self.is_negative() {
            format!("-{digits}")
        } else {
            digits
        })
    }

    /// Low 64 bits in two's complement. NaN reads as 0.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn wrapping_to_i64(&self) -> i64 {
        if self.is_nan() {
            return 0;
        }
        let low = self.magnitude.as_uint::<u64>() as i64;
        if self.is_negative() {
            low.wrapping_neg()
        } else {
            low
        }
    }

    fn fmt_radix(
        &self,
        f: &mut fmt::Formatter<'_>,
        radix: u32,
        prefix: &str,
        upper: bool,
    ) -> fmt::Result {
        if self.is_nan() {
            return f.pad("NaN");
        }
        let mut digits = magnitude::to_radix_digits(self.magnitude.as_bytes(), radix);
        if upper {
            digits.make_ascii_uppercase();
        }
        f.pad_integral(!self.is_negative(), prefix, &digits)
    }
}

fn check_radix(radix: u32) -> Result<(), MathError> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(MathError::UnsupportedRadix(radix))
    }
}

/// Split a leading sign off, returning (negative, rest, offset of rest).
fn split_sign(s: &str) -> (bool, &str, usize) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest, 1)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest, 1)
    } else {
        (false, s, 0)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                Self::from_parts(value < 0, ByteArray::from(value.unsigned_abs()))
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                Self::from_parts(false, ByteArray::from(value))
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl From<ByteArray> for BigInt {
    fn from(magnitude: ByteArray) -> Self {
        Self::from_parts(false, magnitude)
    }
}

macro_rules! impl_try_into_primitive {
    ($($t:ty => $method:ident),*) => {$(
        impl TryFrom<&BigInt> for $t {
            type Error = MathError;
            fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
                if value.is_nan() {
                    return Err(MathError::NotANumber);
                }
                value.$method().ok_or(MathError::Overflow(stringify!($t)))
            }
        }
    )*};
}

impl_try_into_primitive!(i64 => to_i64, u64 => to_u64, i128 => to_i128, u128 => to_u128, u32 => to_u32);

impl ToPrimitive for BigInt {
    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|v| i64::try_from(v).ok())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|v| u64::try_from(v).ok())
    }

    #[allow(clippy::cast_possible_wrap)]
    fn to_i128(&self) -> Option<i128> {
        if self.is_nan() || self.magnitude.len() > 16 {
            return None;
        }
        let mag = self.magnitude.as_uint::<u128>();
        if self.is_negative() {
            (mag <= i128::MAX as u128 + 1).then(|| (mag as i128).wrapping_neg())
        } else {
            i128::try_from(mag).ok()
        }
    }

    fn to_u128(&self) -> Option<u128> {
        if self.is_nan() || self.is_negative() || self.magnitude.len() > 16 {
            return None;
        }
        Some(self.magnitude.as_uint::<u128>())
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Total order: NaN sorts below every valid value and equals itself.
impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_nan(), other.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => match (self.is_negative(), other.is_negative()) {
                (false, true) => Ordering::Greater,
                (true, false) => Ordering::Less,
                (false, false) => self.magnitude.compare(&other.magnitude),
                (true, true) => other.magnitude.compare(&self.magnitude),
            },
        }
    }
}

impl Neg for BigInt {
    type Output = BigInt;
    fn neg(mut self) -> BigInt {
        if !self.is_nan() && !self.is_zero() {
            self.flags ^= flags::NEGATIVE;
        }
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        -self.clone()
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $imp:ident) => {
        impl $trait<&BigInt> for &BigInt {
            type Output = BigInt;
            fn $method(self, rhs: &BigInt) -> BigInt {
                BigInt::$imp(self, rhs)
            }
        }

        impl $trait<BigInt> for BigInt {
            type Output = BigInt;
            fn $method(self, rhs: BigInt) -> BigInt {
                BigInt::$imp(&self, &rhs)
            }
        }

        impl $trait<&BigInt> for BigInt {
            type Output = BigInt;
            fn $method(self, rhs: &BigInt) -> BigInt {
                BigInt::$imp(&self, rhs)
            }
        }

        impl $trait<BigInt> for &BigInt {
            type Output = BigInt;
            fn $method(self, rhs: BigInt) -> BigInt {
                BigInt::$imp(self, &rhs)
            }
        }

        impl $assign_trait<&BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: &BigInt) {
                *self = BigInt::$imp(self, rhs);
            }
        }

        impl $assign_trait<BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: BigInt) {
                *self = BigInt::$imp(self, &rhs);
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign, add_ref);
forward_binop!(Sub, sub, SubAssign, sub_assign, sub_ref);
forward_binop!(Mul, mul, MulAssign, mul_assign, mul_ref);
forward_binop!(Div, div, DivAssign, div_assign, div_ref);
forward_binop!(Rem, rem, RemAssign, rem_assign, rem_ref);

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

impl Zero for BigInt {
    fn zero() -> Self {
        BigInt::zero()
    }

    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }
}

impl One for BigInt {
    fn one() -> Self {
        BigInt::one()
    }
}

impl Num for BigInt {
    type FromStrRadixErr = MathError;

    fn from_str_radix(s: &str, radix: u32) -> Result<Self, MathError> {
        BigInt::from_str_radix(s, radix)
    }
}

impl Signed for BigInt {
    fn abs(&self) -> Self {
        BigInt::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            Self::zero()
        } else {
            self - other
        }
    }

    fn signum(&self) -> Self {
        BigInt::signum(self)
    }

    fn is_positive(&self) -> bool {
        self.is_valid() && !self.is_zero() && !self.is_negative()
    }

    fn is_negative(&self) -> bool {
        BigInt::is_negative(self)
    }
}

impl FromStr for BigInt {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 10, "", false)
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 16, "0x", false)
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 16, "0x", true)
    }
}

impl fmt::Octal for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 8, "0o", false)
    }
}

impl fmt::Binary for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 2, "0b", false)
    }
}

impl Serialize for BigInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct BigIntVisitor;

impl Visitor<'_> for BigIntVisitor {
    type Value = BigInt;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal integer string or an integer")
    }

    // Accepts the `NaN` that `Serialize` writes for invalid values.
    fn visit_str<E: de::Error>(self, v: &str) -> Result<BigInt, E> {
        if v == "NaN" {
            return Ok(BigInt::nan());
        }
        v.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<BigInt, E> {
        Ok(BigInt::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<BigInt, E> {
        Ok(BigInt::from(v))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<BigInt, E> {
        Ok(BigInt::from(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<BigInt, E> {
        Ok(BigInt::from(v))
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BigIntVisitor)
    }
}
