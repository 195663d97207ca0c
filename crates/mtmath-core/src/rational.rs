//! Exact rationals over any signed integer type, with signed infinities and NaN.
//!
//! Values are always canonical: the denominator is non-negative, finite
//! values are in lowest terms, `+inf` is `1/0`, `-inf` is `-1/0` and NaN is
//! `0/0`.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use num_traits::{Bounded, Signed};
use serde::{Deserialize, Serialize};

use crate::big_int::BigInt;
use crate::error::MathError;

/// Integer types a [`RationalBase`] can be built on.
pub trait RationalInteger: Signed + Clone + Ord {
    /// True for values that poison arithmetic (a NaN `BigInt`).
    fn is_invalid(&self) -> bool {
        false
    }
}

macro_rules! impl_rational_integer {
    ($($t:ty),*) => {$(
        impl RationalInteger for $t {}
    )*};
}

impl_rational_integer!(i8, i16, i32, i64, i128, isize);

impl RationalInteger for BigInt {
    fn is_invalid(&self) -> bool {
        self.is_nan()
    }
}

/// A fraction `numerator / denominator` kept in canonical form.
///
/// Comparison is float-like: NaN is unordered and unequal to itself, so
/// only `PartialEq` and `PartialOrd` are implemented.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    from = "RationalParts<T>",
    bound(deserialize = "T: RationalInteger + Deserialize<'de>")
)]
pub struct RationalBase<T> {
    numerator: T,
    denominator: T,
}

/// Big-integer rational.
pub type Rational = RationalBase<BigInt>;

#[derive(Deserialize)]
struct RationalParts<T> {
    numerator: T,
    denominator: T,
}

impl<T: RationalInteger> From<RationalParts<T>> for RationalBase<T> {
    fn from(parts: RationalParts<T>) -> Self {
        Self::new(parts.numerator, parts.denominator)
    }
}

/// Euclid on signed values; the sign of the result is unspecified.
fn gcd<T: RationalInteger>(mut a: T, mut b: T) -> T {
    while !b.is_zero() {
        let r = a % b.clone();
        a = b;
        b = r;
    }
    a
}

impl<T: RationalInteger> RationalBase<T> {
    /// Build `numerator / denominator` and bring it to canonical form.
    ///
    /// A zero denominator gives a signed infinity, or NaN for `0/0`.
    pub fn new(numerator: T, denominator: T) -> Self {
        if numerator.is_invalid() || denominator.is_invalid() {
            return Self::nan();
        }
        if denominator.is_zero() {
            return Self {
                numerator: numerator.signum(),
                denominator,
            };
        }
        // `g` takes the denominator's sign, so neither input is negated.
        let mut g = gcd(numerator.clone(), denominator.clone());
        if g.is_negative() != denominator.is_negative() {
            g = -g;
        }
        if g.is_one() {
            return Self {
                numerator,
                denominator,
            };
        }
        Self {
            numerator: numerator / g.clone(),
            denominator: denominator / g,
        }
    }

    pub fn from_integer(value: T) -> Self {
        Self::new(value, T::one())
    }

    pub fn zero() -> Self {
        Self {
            numerator: T::zero(),
            denominator: T::one(),
        }
    }

    pub fn one() -> Self {
        Self {
            numerator: T::one(),
            denominator: T::one(),
        }
    }

    pub fn nan() -> Self {
        Self {
            numerator: T::zero(),
            denominator: T::zero(),
        }
    }

    pub fn infinity() -> Self {
        Self {
            numerator: T::one(),
            denominator: T::zero(),
        }
    }

    pub fn neg_infinity() -> Self {
        Self {
            numerator: -T::one(),
            denominator: T::zero(),
        }
    }

    pub fn numer(&self) -> &T {
        &self.numerator
    }

    pub fn denom(&self) -> &T {
        &self.denominator
    }

    pub fn into_parts(self) -> (T, T) {
        (self.numerator, self.denominator)
    }

    pub fn is_nan(&self) -> bool {
        self.denominator.is_zero() && self.numerator.is_zero()
    }

    pub fn is_infinite(&self) -> bool {
        self.denominator.is_zero() && !self.numerator.is_zero()
    }

    pub fn is_pos_infinity(&self) -> bool {
        self.denominator.is_zero() && self.numerator.is_positive()
    }

    pub fn is_neg_infinity(&self) -> bool {
        self.denominator.is_zero() && self.numerator.is_negative()
    }

    pub fn is_finite(&self) -> bool {
        !self.denominator.is_zero()
    }

    /// `1 / self`.
    pub fn recip(&self) -> Self {
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    fn add_ref(&self, other: &Self) -> Self {
        if self.is_nan() || other.is_nan() {
            return Self::nan();
        }
        match (self.is_infinite(), other.is_infinite()) {
            (false, false) => Self::new(
                self.numerator.clone() * other.denominator.clone()
                    + other.numerator.clone() * self.denominator.clone(),
                self.denominator.clone() * other.denominator.clone(),
            ),
            (true, false) => self.clone(),
            (false, true) => other.clone(),
            (true, true) if self.numerator == other.numerator => self.clone(),
            (true, true) => Self::nan(),
        }
    }

    fn sub_ref(&self, other: &Self) -> Self {
        self.add_ref(&-other)
    }

    // Canonical forms make the plain product correct for infinities too:
    // `inf * 0` reduces to `0/0` and `inf * x` to `sign(x)/0`.
    fn mul_ref(&self, other: &Self) -> Self {
        Self::new(
            self.numerator.clone() * other.numerator.clone(),
            self.denominator.clone() * other.denominator.clone(),
        )
    }

    fn div_ref(&self, other: &Self) -> Self {
        self.mul_ref(&other.recip())
    }

    fn rank(&self) -> i8 {
        if self.is_neg_infinity() {
            -1
        } else if self.is_pos_infinity() {
            1
        } else {
            0
        }
    }
}

/// Limits for rationals over bounded integers.
impl<T: RationalInteger + Bounded> RationalBase<T> {
    /// Smallest positive value, `1/T::MAX`.
    pub fn min_positive_value() -> Self {
        Self::new(T::one(), T::max_value())
    }

    /// Resolution of the representation. Integers have none, so this is
    /// the smallest positive value.
    pub fn epsilon() -> Self {
        Self::min_positive_value()
    }

    /// Largest error of rounding to an integer, `1/2`.
    pub fn round_error() -> Self {
        Self::new(T::one(), T::one() + T::one())
    }
}

/// Largest and lowest finite values, `T::MAX/1` and `T::MIN/1`.
impl<T: RationalInteger + Bounded> Bounded for RationalBase<T> {
    fn min_value() -> Self {
        Self::from_integer(T::min_value())
    }

    fn max_value() -> Self {
        Self::from_integer(T::max_value())
    }
}

impl<T: RationalInteger> PartialEq for RationalBase<T> {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl<T: RationalInteger> PartialOrd for RationalBase<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            return None;
        }
        match self.rank().cmp(&other.rank()) {
            Ordering::Equal if self.is_infinite() => Some(Ordering::Equal),
            Ordering::Equal => {
                let left = self.numerator.clone() * other.denominator.clone();
                let right = other.numerator.clone() * self.denominator.clone();
                Some(left.cmp(&right))
            }
            unequal => Some(unequal),
        }
    }
}

impl<T: RationalInteger> Neg for RationalBase<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl<T: RationalInteger> Neg for &RationalBase<T> {
    type Output = RationalBase<T>;
    fn neg(self) -> RationalBase<T> {
        -self.clone()
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $imp:ident) => {
        impl<T: RationalInteger> $trait<&RationalBase<T>> for &RationalBase<T> {
            type Output = RationalBase<T>;
            fn $method(self, rhs: &RationalBase<T>) -> RationalBase<T> {
                self.$imp(rhs)
            }
        }

        impl<T: RationalInteger> $trait<RationalBase<T>> for RationalBase<T> {
            type Output = RationalBase<T>;
            fn $method(self, rhs: RationalBase<T>) -> RationalBase<T> {
                self.$imp(&rhs)
            }
        }

        impl<T: RationalInteger> $trait<&RationalBase<T>> for RationalBase<T> {
            type Output = RationalBase<T>;
            fn $method(self, rhs: &RationalBase<T>) -> RationalBase<T> {
                self.$imp(rhs)
            }
        }

        impl<T: RationalInteger> $trait<RationalBase<T>> for &RationalBase<T> {
            type Output = RationalBase<T>;
            fn $method(self, rhs: RationalBase<T>) -> RationalBase<T> {
                self.$imp(&rhs)
            }
        }

        impl<T: RationalInteger> $assign_trait<&RationalBase<T>> for RationalBase<T> {
            fn $assign_method(&mut self, rhs: &RationalBase<T>) {
                *self = self.$imp(rhs);
            }
        }

        impl<T: RationalInteger> $assign_trait<RationalBase<T>> for RationalBase<T> {
            fn $assign_method(&mut self, rhs: RationalBase<T>) {
                *self = self.$imp(&rhs);
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign, add_ref);
forward_binop!(Sub, sub, SubAssign, sub_assign, sub_ref);
forward_binop!(Mul, mul, MulAssign, mul_assign, mul_ref);
forward_binop!(Div, div, DivAssign, div_assign, div_ref);

impl<T: fmt::Display> fmt::Display for RationalBase<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for Rational {
    type Err = MathError;

    /// Parse `n` or `n/d`, with decimal integer parts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');
        let (Some(numerator), denominator, None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(MathError::InvalidRational(s.to_string()));
        };
        if numerator.is_empty() || denominator.is_some_and(str::is_empty) {
            return Err(MathError::InvalidRational(s.to_string()));
        }
        let numerator: BigInt = numerator.trim().parse()?;
        match denominator {
            Some(d) => Ok(Self::new(numerator, d.trim().parse()?)),
            None => Ok(Self::from_integer(numerator)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64, d: i64) -> RationalBase<i64> {
        RationalBase::new(n, d)
    }

    fn big(s: &str) -> Rational {
        s.parse().unwrap()
    }

    #[test]
    fn canonical_form() {
        let x = r(4, -6);
        assert_eq!((*x.numer(), *x.denom()), (-2, 3));
        assert_eq!(r(0, -5).into_parts(), (0, 1));
        assert_eq!(r(7, 0).into_parts(), (1, 0));
        assert_eq!(r(-7, 0).into_parts(), (-1, 0));
        assert_eq!(r(0, 0).into_parts(), (0, 0));
    }

    #[test]
    fn extreme_primitive_values() {
        assert_eq!(RationalBase::from_integer(i64::MIN).into_parts(), (i64::MIN, 1));
        assert_eq!(r(i64::MIN, 1).into_parts(), (i64::MIN, 1));
        assert_eq!(r(i64::MIN, 2).into_parts(), (-(1 << 62), 1));
        assert_eq!(r(2, i64::MIN).into_parts(), (-1, 1 << 62));
        assert_eq!(r(i64::MIN, i64::MIN).into_parts(), (1, 1));
        assert_eq!(r(i64::MAX, -i64::MAX).into_parts(), (-1, 1));
        assert_eq!(RationalBase::new(i8::MIN, 6).into_parts(), (-64, 3));
    }

    #[test]
    fn bounded_limits() {
        type R8 = RationalBase<i8>;
        assert_eq!(R8::max_value().into_parts(), (127, 1));
        assert_eq!(R8::min_value().into_parts(), (-128, 1));
        assert_eq!(R8::min_positive_value().into_parts(), (1, 127));
        assert_eq!(R8::epsilon(), R8::min_positive_value());
        assert_eq!(R8::round_error().into_parts(), (1, 2));
        assert!(R8::min_positive_value() > R8::zero());
        assert!(R8::min_positive_value() < R8::round_error());
        assert!(R8::min_value() < R8::max_value());
        assert!(R8::max_value() < R8::infinity());
        assert_eq!(RationalBase::<i64>::max_value().into_parts(), (i64::MAX, 1));
    }

    #[test]
    fn add() {
        assert_eq!(r(1, 3) + r(1, 3), r(2, 3));
        assert_eq!(r(2, 3) + r(5, 6), r(3, 2));
        assert_eq!(r(1, 2) + r(-1, 2), RationalBase::zero());
    }

    #[test]
    fn subtract() {
        assert_eq!(r(3, 2) - r(5, 6), r(2, 3));
        assert_eq!(r(1, 3) - r(1, 3), RationalBase::zero());
    }

    #[test]
    fn multiply() {
        assert_eq!(r(2, 7) * r(3, 5), r(6, 35));
        assert_eq!(r(-2, 7) * r(7, 2), r(-1, 1));
    }

    #[test]
    fn divide() {
        assert_eq!(r(2, 7) / r(5, 3), r(6, 35));
        assert_eq!(r(1, 2) / r(-1, 4), r(-2, 1));
    }

    #[test]
    fn equality_ignores_representation() {
        assert_eq!(r(1, 2), r(2, 4));
        assert_ne!(r(1, 2), r(1, 3));
        assert!(r(1, 3) < r(1, 2));
        assert!(r(-1, 2) < r(-1, 3));
    }

    #[test]
    fn infinity_addition() {
        let inf = RationalBase::<i64>::infinity();
        let ninf = RationalBase::<i64>::neg_infinity();
        assert!((inf.clone() + r(5, 3)).is_pos_infinity());
        assert!((r(5, 3) + inf.clone()).is_pos_infinity());
        assert!((r(5, 3) + ninf.clone()).is_neg_infinity());
        assert!((inf.clone() + inf.clone()).is_pos_infinity());
        assert!((inf.clone() - inf.clone()).is_nan());
        assert!((inf + ninf).is_nan());
    }

    #[test]
    fn infinity_multiplication() {
        let inf = RationalBase::<i64>::infinity();
        assert!((inf.clone() * RationalBase::zero()).is_nan());
        assert!((inf.clone() * r(-2, 3)).is_neg_infinity());
        assert!((inf.clone() * RationalBase::neg_infinity()).is_neg_infinity());
    }

    #[test]
    fn infinity_division() {
        let inf = RationalBase::<i64>::infinity();
        assert!((inf.clone() / r(3, 1)).is_pos_infinity());
        assert!((inf.clone() / r(-3, 1)).is_neg_infinity());
        assert!((inf.clone() / inf.clone()).is_nan());
        assert_eq!(r(3, 4) / inf, RationalBase::zero());
        assert!((r(3, 4) / RationalBase::zero()).is_pos_infinity());
        assert!((r(-3, 4) / RationalBase::zero()).is_neg_infinity());
        assert!((RationalBase::<i64>::zero() / RationalBase::zero()).is_nan());
    }

    #[test]
    fn nan_is_unordered() {
        let nan = RationalBase::<i64>::nan();
        assert_ne!(nan, nan.clone());
        assert_eq!(nan.partial_cmp(&r(1, 1)), None);
        assert!((nan.clone() + r(1, 1)).is_nan());
        assert!((r(1, 1) * nan).is_nan());
    }

    #[test]
    fn infinities_order_around_finite_values() {
        let inf = RationalBase::<i64>::infinity();
        let ninf = RationalBase::<i64>::neg_infinity();
        assert!(ninf < r(-1000, 1));
        assert!(r(1000, 1) < inf);
        assert_eq!(inf, RationalBase::infinity());
        assert!(ninf < inf);
    }

    #[test]
    fn big_rational_parse_and_display() {
        assert_eq!(big("2/4").to_string(), "1/2");
        assert_eq!(big("-6").to_string(), "-6/1");
        assert_eq!(big("3/-9").to_string(), "-1/3");
        assert!(big("1/0").is_pos_infinity());
        assert!(big("0/0").is_nan());
        assert!("NaN".parse::<Rational>().is_err());
        assert_eq!(
            "1/2/3".parse::<Rational>(),
            Err(MathError::InvalidRational("1/2/3".to_string()))
        );
        assert_eq!(
            "/2".parse::<Rational>(),
            Err(MathError::InvalidRational("/2".to_string()))
        );
        assert!("1/x".parse::<Rational>().is_err());
    }

    #[test]
    fn big_rational_arithmetic() {
        let third = big("1/3");
        assert_eq!(&third + &third, big("2/3"));
        let huge = big("123456789012345678901234567890/987654321098765432109876543210");
        assert_eq!(huge.to_string(), "13717421/109739369");
        assert_eq!(&huge / &huge, Rational::one());
    }

    #[test]
    fn nan_big_int_part_is_nan() {
        let x = Rational::new(BigInt::nan(), BigInt::one());
        assert!(x.is_nan());
    }

    #[test]
    fn serde_round_trip_normalises() {
        let json = serde_json::to_string(&big("-2/3")).unwrap();
        assert_eq!(json, r#"{"numerator":"-2","denominator":"3"}"#);
        let parsed: Rational =
            serde_json::from_str(r#"{"numerator":"4","denominator":"-6"}"#).unwrap();
        assert_eq!(parsed.to_string(), "-2/3");
        let small: RationalBase<i64> =
            serde_json::from_str(r#"{"numerator":10,"denominator":4}"#).unwrap();
        assert_eq!(small.into_parts(), (5, 2));
    }
}
