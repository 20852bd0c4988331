// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Arbitrary-precision decimal numbers.
//!
//! A [`BigDecimal`] is an unscaled big integer together with a scale: the value
//! is `unscaled × 10^-scale`. Values are immutable; every operation returns a
//! new instance.
//!
//! # Equality
//!
//! Equality and hashing are *structural*: `1.0` (unscaled 10, scale 1) and
//! `1.00` (unscaled 100, scale 2) are different values. Use
//! [`BigDecimal::value_eq`]/[`BigDecimal::value_cmp`] for numeric comparison,
//! or normalize both sides with [`BigDecimal::trim`] first. `Ord` orders by
//! numeric value and breaks ties by scale, so it agrees with `Eq`.
//!
//! # Division
//!
//! Division is not exact. The quotient is truncated toward zero after
//! [`ArithmeticContext::precision`] fractional digits (50 by default) and the
//! trailing zeros that truncation leaves behind are removed.

use crate::context::ArithmeticContext;
use exacta_core::{
    num::digits::{pow10, strip_trailing_zeros},
    Error, Result,
};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::{
    cmp::Ordering,
    ops::{Add, Div, Mul, Rem, Sub},
    str::FromStr,
};

/// An immutable decimal number of unbounded magnitude.
///
/// # Examples
///
/// ```rust
/// # use exacta_bignum::BigDecimal;
/// let price = BigDecimal::new(12345, 2);
/// assert_eq!(price.to_string(), "123.45");
///
/// let total = &price + &BigDecimal::new(55, 2);
/// assert_eq!(total.to_string(), "124.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BigDecimal {
    unscaled: BigInt,
    scale: u32,
}

impl BigDecimal {
    /// Creates `unscaled × 10^-scale`.
    #[inline]
    pub fn new(unscaled: impl Into<BigInt>, scale: u32) -> Self {
        Self {
            unscaled: unscaled.into(),
            scale,
        }
    }

    /// The unscaled integer.
    #[inline]
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// Number of digits after the decimal point.
    #[inline]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.unscaled.is_negative()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.unscaled.is_positive()
    }

    /// Returns the absolute value, keeping the scale.
    #[inline]
    pub fn abs(&self) -> Self {
        Self::new(self.unscaled.abs(), self.scale)
    }

    /// `-1`, `0` or `1` at scale zero.
    #[inline]
    pub fn signum(&self) -> Self {
        Self::new(self.unscaled.signum(), 0)
    }

    /// Returns the same value at a different scale. Reducing the scale drops
    /// digits, truncating toward zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_bignum::BigDecimal;
    /// let d = BigDecimal::new(-12345, 2);
    /// assert_eq!(d.with_scale(4).to_string(), "-123.4500");
    /// assert_eq!(d.with_scale(1).to_string(), "-123.4");
    /// ```
    pub fn with_scale(&self, scale: u32) -> Self {
        match scale.cmp(&self.scale) {
            Ordering::Equal => self.clone(),
            Ordering::Greater => Self::new(&self.unscaled * pow10(scale - self.scale), scale),
            Ordering::Less => Self::new(&self.unscaled / pow10(self.scale - scale), scale),
        }
    }

    /// Removes trailing fractional zeros, yielding the smallest scale that
    /// represents the same value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_bignum::BigDecimal;
    /// let d = BigDecimal::new(1500, 3);
    /// assert_eq!(d.trim(), BigDecimal::new(15, 1));
    /// ```
    pub fn trim(&self) -> Self {
        let (unscaled, removed) = strip_trailing_zeros(self.unscaled.clone(), self.scale);
        Self::new(unscaled, self.scale - removed)
    }

    /// The integer part, truncated toward zero.
    pub fn trunc(&self) -> BigInt {
        if self.scale == 0 {
            return self.unscaled.clone();
        }
        &self.unscaled / pow10(self.scale)
    }

    /// Compares numeric values, ignoring the scale.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_bignum::BigDecimal;
    /// # use std::cmp::Ordering;
    /// let a = BigDecimal::new(10, 1);
    /// let b = BigDecimal::new(100, 2);
    /// assert_ne!(a, b);
    /// assert_eq!(a.value_cmp(&b), Ordering::Equal);
    /// ```
    pub fn value_cmp(&self, other: &Self) -> Ordering {
        let (a, b, _) = align(self, other);
        a.cmp(&b)
    }

    /// Returns `true` if both sides denote the same number.
    #[inline]
    pub fn value_eq(&self, other: &Self) -> bool {
        self.value_cmp(other) == Ordering::Equal
    }

    /// Exact product, at the sum of the two scales.
    ///
    /// # Errors
    ///
    /// [`Error::Overflow`] if the resulting scale does not fit in `u32`.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self> {
        let scale = self
            .scale
            .checked_add(rhs.scale)
            .ok_or(Error::overflow("BigDecimal scale"))?;
        Ok(Self::new(&self.unscaled * &rhs.unscaled, scale))
    }

    /// Divides with the precision and digit ceiling of `ctx`.
    ///
    /// # Errors
    ///
    /// [`Error::Domain`] on division by zero, [`Error::Overflow`] if the
    /// quotient exceeds the context's digit ceiling.
    pub fn div_with(&self, rhs: &Self, ctx: &ArithmeticContext) -> Result<Self> {
        if rhs.is_zero() {
            return Err(Error::Domain("division by zero"));
        }
        let (a, b, _) = align(self, rhs);
        let precision = ctx.precision();
        let quotient = (a * pow10(precision)) / b;
        let (unscaled, removed) = strip_trailing_zeros(quotient, precision);
        ctx.check_digits(&unscaled)?;
        Ok(Self::new(unscaled, precision - removed))
    }

    /// Divides with the default context.
    #[inline]
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        self.div_with(rhs, &ArithmeticContext::default())
    }

    /// Computes `self - rhs × floor(self / rhs)` exactly, at the larger of the
    /// two scales.
    ///
    /// # Errors
    ///
    /// [`Error::Domain`] if `rhs` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_bignum::BigDecimal;
    /// let r = BigDecimal::from(-7).checked_rem(&BigDecimal::from(3)).unwrap();
    /// assert_eq!(r, BigDecimal::from(2));
    /// ```
    pub fn checked_rem(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(Error::Domain("remainder by zero"));
        }
        let (a, b, scale) = align(self, rhs);
        Ok(Self::new(a.mod_floor(&b), scale))
    }

    /// Raises to a non-negative integer power.
    ///
    /// # Errors
    ///
    /// [`Error::Overflow`] if the resulting scale does not fit in `u32` or the
    /// result exceeds the context's digit ceiling.
    pub fn pow_with(&self, exp: u32, ctx: &ArithmeticContext) -> Result<Self> {
        let scale = self
            .scale
            .checked_mul(exp)
            .ok_or(Error::overflow("BigDecimal scale"))?;
        let unscaled = self.unscaled.pow(exp);
        ctx.check_digits(&unscaled)?;
        Ok(Self::new(unscaled, scale))
    }

    /// Raises to a non-negative integer power with the default context.
    #[inline]
    pub fn pow(&self, exp: u32) -> Result<Self> {
        self.pow_with(exp, &ArithmeticContext::default())
    }
}

/// Brings both operands to their common (larger) scale.
fn align(a: &BigDecimal, b: &BigDecimal) -> (BigInt, BigInt, u32) {
    match a.scale.cmp(&b.scale) {
        Ordering::Equal => (a.unscaled.clone(), b.unscaled.clone(), a.scale),
        Ordering::Less => (
            &a.unscaled * pow10(b.scale - a.scale),
            b.unscaled.clone(),
            b.scale,
        ),
        Ordering::Greater => (
            a.unscaled.clone(),
            &b.unscaled * pow10(a.scale - b.scale),
            a.scale,
        ),
    }
}

impl Add<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    fn add(self, rhs: &BigDecimal) -> BigDecimal {
        let (a, b, scale) = align(self, rhs);
        BigDecimal::new(a + b, scale)
    }
}

impl Sub<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    fn sub(self, rhs: &BigDecimal) -> BigDecimal {
        let (a, b, scale) = align(self, rhs);
        BigDecimal::new(a - b, scale)
    }
}

impl Mul<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    /// # Panics
    ///
    /// Panics if the sum of the scales does not fit in `u32`. Use
    /// [`BigDecimal::checked_mul`] to handle that case.
    fn mul(self, rhs: &BigDecimal) -> BigDecimal {
        self.checked_mul(rhs).expect("BigDecimal scale overflow")
    }
}

impl Div<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    /// # Panics
    ///
    /// Panics if `rhs` is zero. Use [`BigDecimal::checked_div`] to handle that
    /// case.
    fn div(self, rhs: &BigDecimal) -> BigDecimal {
        self.checked_div(rhs)
            .expect("attempt to divide a BigDecimal by zero")
    }
}

impl Rem<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn rem(self, rhs: &BigDecimal) -> BigDecimal {
        self.checked_rem(rhs)
            .expect("attempt to calculate a BigDecimal remainder with a divisor of zero")
    }
}

impl std::ops::Neg for &BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn neg(self) -> BigDecimal {
        BigDecimal::new(-&self.unscaled, self.scale)
    }
}

forward_binop!(impl Add, add for BigDecimal);
forward_binop!(impl Sub, sub for BigDecimal);
forward_binop!(impl Mul, mul for BigDecimal);
forward_binop!(impl Div, div for BigDecimal);
forward_binop!(impl Rem, rem for BigDecimal);
forward_neg!(BigDecimal);

impl PartialOrd for BigDecimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value_cmp(other)
            .then_with(|| self.scale.cmp(&other.scale))
    }
}

impl Zero for BigDecimal {
    #[inline]
    fn zero() -> Self {
        Self::default()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }
}

impl One for BigDecimal {
    #[inline]
    fn one() -> Self {
        Self::new(1, 0)
    }
}

impl std::fmt::Display for BigDecimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.unscaled.magnitude().to_string();
        let scale = self.scale as usize;
        let rendered = if scale == 0 {
            digits
        } else if digits.len() > scale {
            let (int_part, frac_part) = digits.split_at(digits.len() - scale);
            format!("{int_part}.{frac_part}")
        } else {
            format!("0.{}{digits}", "0".repeat(scale - digits.len()))
        };
        f.pad_integral(!self.unscaled.is_negative(), "", &rendered)
    }
}

/// Largest power of ten a parsed exponent may shift the digits by.
const MAX_PARSED_SHIFT: u32 = 1_000_000;

impl FromStr for BigDecimal {
    type Err = Error;

    /// Parses `[+-]digits[.digits][(e|E)[+-]digits]`.
    fn from_str(s: &str) -> Result<Self> {
        let fail = |reason| Error::format("decimal", s, reason);

        let (mantissa, exponent) = match s.find(|c: char| c == 'e' || c == 'E') {
            Some(i) => {
                let exponent = s[i + 1..]
                    .parse::<i64>()
                    .map_err(|_| fail("invalid exponent"))?;
                (&s[..i], exponent)
            }
            None => (s, 0),
        };

        let (negative, digits) = match mantissa.as_bytes().first() {
            Some(b'-') => (true, &mantissa[1..]),
            Some(b'+') => (false, &mantissa[1..]),
            _ => (false, mantissa),
        };
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(fail("missing digits"));
        }
        if !int_part
            .bytes()
            .chain(frac_part.bytes())
            .all(|b| b.is_ascii_digit())
        {
            return Err(fail("unexpected character"));
        }

        let all_digits = format!("{int_part}{frac_part}");
        let mut unscaled =
            BigInt::parse_bytes(all_digits.as_bytes(), 10).ok_or_else(|| fail("missing digits"))?;
        if negative {
            unscaled = -unscaled;
        }

        // Either direction eventually materializes 10^shift, so both are capped.
        let scale = (frac_part.len() as i64)
            .checked_sub(exponent)
            .filter(|scale| scale.unsigned_abs() <= u64::from(MAX_PARSED_SHIFT))
            .ok_or(Error::overflow("BigDecimal scale"))?;
        let shift = scale.unsigned_abs() as u32;
        if scale < 0 {
            Ok(Self::new(unscaled * pow10(shift), 0))
        } else {
            Ok(Self::new(unscaled, shift))
        }
    }
}

impl From<BigInt> for BigDecimal {
    #[inline]
    fn from(value: BigInt) -> Self {
        Self::new(value, 0)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigDecimal {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::new(BigInt::from(value), 0)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Floats go through their shortest round-trip decimal rendering, so `0.1`
// becomes exactly `0.1` rather than the binary expansion of the double.
macro_rules! impl_try_from_float {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for BigDecimal {
                type Error = Error;

                fn try_from(value: $t) -> Result<Self> {
                    if !value.is_finite() {
                        return Err(Error::Domain("non-finite float has no decimal value"));
                    }
                    value.to_string().parse()
                }
            }
        )*
    };
}

impl_try_from_float!(f32, f64);

impl ToPrimitive for BigDecimal {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        self.trunc().to_i64()
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.trunc().to_u64()
    }

    #[inline]
    fn to_i128(&self) -> Option<i128> {
        self.trunc().to_i128()
    }

    #[inline]
    fn to_u128(&self) -> Option<u128> {
        self.trunc().to_u128()
    }

    /// Never fails: magnitudes beyond `f64` saturate to infinity.
    fn to_f64(&self) -> Option<f64> {
        self.to_string().parse::<f64>().ok()
    }
}

// Narrowing to fixed-width integers truncates the fraction toward zero and
// fails if the integer part does not fit.
macro_rules! impl_try_into_integer {
    ($($t:ident => $method:ident),*) => {
        $(
            impl TryFrom<&BigDecimal> for $t {
                type Error = Error;

                #[inline]
                fn try_from(value: &BigDecimal) -> Result<$t> {
                    value.trunc().$method().ok_or(Error::overflow(stringify!($t)))
                }
            }
        )*
    };
}

impl_try_into_integer!(
    i8 => to_i8, i16 => to_i16, i32 => to_i32, i64 => to_i64, i128 => to_i128, isize => to_isize,
    u8 => to_u8, u16 => to_u16, u32 => to_u32, u64 => to_u64, u128 => to_u128, usize => to_usize
);

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_display_inserts_point() {
        assert_eq!(BigDecimal::new(12345, 2).to_string(), "123.45");
        assert_eq!(BigDecimal::new(-12345, 2).to_string(), "-123.45");
        assert_eq!(BigDecimal::new(5, 3).to_string(), "0.005");
        assert_eq!(BigDecimal::new(-5, 3).to_string(), "-0.005");
        assert_eq!(BigDecimal::new(0, 2).to_string(), "0.00");
        assert_eq!(BigDecimal::new(42, 0).to_string(), "42");
        assert_eq!(BigDecimal::new(100, 2).to_string(), "1.00");
    }

    #[test]
    fn test_display_honors_width() {
        assert_eq!(format!("{:>8}", BigDecimal::new(-15, 1)), "    -1.5");
    }

    #[test]
    fn test_parse() {
        assert_eq!(dec("1.50"), BigDecimal::new(150, 2));
        assert_eq!(dec("-0.5"), BigDecimal::new(-5, 1));
        assert_eq!(dec("+7"), BigDecimal::new(7, 0));
        assert_eq!(dec(".25"), BigDecimal::new(25, 2));
        assert_eq!(dec("3."), BigDecimal::new(3, 0));
        assert_eq!(dec("1e3"), BigDecimal::new(1000, 0));
        assert_eq!(dec("1.5e-2"), BigDecimal::new(15, 3));
        assert_eq!(dec("12.5E1"), BigDecimal::new(125, 0));
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["", ".", "-", "abc", "1.2.3", "1e", "1x", "--1", "1e2.5"] {
            assert!(
                matches!(bad.parse::<BigDecimal>(), Err(Error::Format { .. })),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_parse_rejects_huge_exponent() {
        let overflow = Err(Error::overflow("BigDecimal scale"));
        assert_eq!("1e4000000000".parse::<BigDecimal>(), overflow);
        assert_eq!("1e-4000000000".parse::<BigDecimal>(), overflow);
        assert_eq!("1e-9223372036854775808".parse::<BigDecimal>(), overflow);
        assert_eq!("1e1000001".parse::<BigDecimal>(), overflow);
        assert_eq!("2.5e3".parse::<BigDecimal>().unwrap(), BigDecimal::new(2500, 0));
        assert_eq!("1.5e-999999".parse::<BigDecimal>().unwrap().scale(), 1_000_000);
    }

    #[test]
    fn test_structural_equality() {
        assert_ne!(BigDecimal::new(10, 1), BigDecimal::new(100, 2));
        assert!(BigDecimal::new(10, 1).value_eq(&BigDecimal::new(100, 2)));
        assert_eq!(BigDecimal::new(100, 2).trim(), BigDecimal::new(1, 0));
    }

    #[test]
    fn test_ordering_consistent_with_eq() {
        let a = BigDecimal::new(10, 1);
        let b = BigDecimal::new(100, 2);
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert!(dec("-2") < dec("1.5"));
        assert!(dec("0.10") > dec("0.09"));
        assert_eq!(dec("3.14").cmp(&dec("3.14")), Ordering::Equal);
    }

    #[test]
    fn test_add_sub_align_scales() {
        assert_eq!(dec("1.5") + dec("0.25"), BigDecimal::new(175, 2));
        assert_eq!(dec("1") - dec("0.001"), BigDecimal::new(999, 3));
        assert_eq!(-dec("2.50"), BigDecimal::new(-250, 2));
    }

    #[test]
    fn test_mul_adds_scales() {
        assert_eq!(dec("1.5") * dec("0.25"), BigDecimal::new(375, 3));
        assert_eq!(dec("-2") * dec("3.0"), BigDecimal::new(-60, 1));
    }

    #[test]
    fn test_checked_mul_scale_overflow() {
        let tiny = BigDecimal::new(1, 3_000_000_000);
        assert_eq!(tiny.checked_mul(&tiny), Err(Error::overflow("BigDecimal scale")));
        assert_eq!(
            dec("1.5").checked_mul(&dec("0.25")),
            Ok(BigDecimal::new(375, 3))
        );
    }

    #[test]
    #[should_panic(expected = "BigDecimal scale overflow")]
    fn test_mul_operator_panics_on_scale_overflow() {
        let tiny = BigDecimal::new(1, 3_000_000_000);
        let _ = &tiny * &tiny;
    }

    #[test]
    fn test_div_truncates_at_precision() {
        let third = dec("1") / dec("3");
        assert_eq!(third.scale(), 50);
        assert_eq!(third.to_string(), format!("0.{}", "3".repeat(50)));

        let two_thirds = dec("-2") / dec("3");
        assert_eq!(two_thirds.to_string(), format!("-0.{}", "6".repeat(50)));
    }

    #[test]
    fn test_div_trims_terminating_quotients() {
        assert_eq!(dec("1") / dec("2"), BigDecimal::new(5, 1));
        assert_eq!(dec("10") / dec("4"), BigDecimal::new(25, 1));
        assert_eq!(dec("6") / dec("3"), BigDecimal::new(2, 0));
        assert_eq!(dec("0.75") / dec("0.5"), BigDecimal::new(15, 1));
    }

    #[test]
    fn test_div_with_custom_precision() {
        let ctx = ArithmeticContext::builder().precision(4).build();
        let q = dec("2").div_with(&dec("3"), &ctx).unwrap();
        assert_eq!(q, BigDecimal::new(6666, 4));
    }

    #[test]
    fn test_div_by_zero() {
        assert_eq!(
            dec("1").checked_div(&dec("0.00")),
            Err(Error::Domain("division by zero"))
        );
    }

    #[test]
    #[should_panic(expected = "attempt to divide a BigDecimal by zero")]
    fn test_div_operator_panics_on_zero() {
        let _ = dec("1") / dec("0");
    }

    #[test]
    fn test_rem_is_floored() {
        assert_eq!(dec("7") % dec("3"), dec("1"));
        assert_eq!(dec("-7") % dec("3"), dec("2"));
        assert_eq!(dec("7") % dec("-3"), dec("-2"));
        assert_eq!(dec("5.5") % dec("2"), dec("1.5"));
        assert!(dec("1").checked_rem(&dec("0")).is_err());
    }

    #[test]
    fn test_pow() {
        assert_eq!(dec("1.5").pow(2).unwrap(), BigDecimal::new(225, 2));
        assert_eq!(dec("-2").pow(3).unwrap(), dec("-8"));
        assert_eq!(dec("9.9").pow(0).unwrap(), dec("1"));
        let ctx = ArithmeticContext::builder().max_digits(Some(5)).build();
        assert!(dec("10").pow_with(6, &ctx).is_err());
    }

    #[test]
    fn test_with_scale() {
        assert_eq!(dec("1.5").with_scale(3), BigDecimal::new(1500, 3));
        assert_eq!(dec("1.59").with_scale(1), BigDecimal::new(15, 1));
        assert_eq!(dec("-1.59").with_scale(0), BigDecimal::new(-1, 0));
    }

    #[test]
    fn test_from_floats() {
        assert_eq!(BigDecimal::try_from(0.1f64).unwrap(), BigDecimal::new(1, 1));
        assert_eq!(BigDecimal::try_from(-2.5f32).unwrap(), BigDecimal::new(-25, 1));
        assert_eq!(BigDecimal::try_from(100.0f64).unwrap(), BigDecimal::new(100, 0));
        assert!(BigDecimal::try_from(f64::NAN).is_err());
        assert!(BigDecimal::try_from(f64::INFINITY).is_err());
    }

    #[test]
    fn test_narrowing_conversions() {
        assert_eq!(i32::try_from(&dec("123.99")), Ok(123));
        assert_eq!(i32::try_from(&dec("-123.99")), Ok(-123));
        assert_eq!(u8::try_from(&dec("255.5")), Ok(255));
        assert_eq!(u8::try_from(&dec("256")), Err(Error::overflow("u8")));
        assert_eq!(u32::try_from(&dec("-1")), Err(Error::overflow("u32")));
        assert_eq!(dec("2.75").to_f64(), Some(2.75));
        assert_eq!(dec("1e400").to_f64(), Some(f64::INFINITY));
    }

    #[test]
    fn test_zero_one() {
        assert!(BigDecimal::new(0, 5).is_zero());
        assert_eq!(BigDecimal::one(), dec("1"));
        assert!(dec("-0.1").is_negative());
        assert_eq!(dec("-0.1").abs(), dec("0.1"));
        assert_eq!(dec("-0.1").signum(), BigDecimal::from(-1));
        assert_eq!(dec("0.00").signum(), BigDecimal::zero());
    }
}
