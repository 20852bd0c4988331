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

//! Conversions between [`BigRational`] and primitives or [`BigDecimal`].
//!
//! Widening conversions are total. Floats are taken at their shortest
//! round-trip decimal rendering, so the result is exact for every value with
//! a terminating decimal expansion at the float's own precision; NaN and the
//! infinities map onto the matching sentinels.
//!
//! Narrowing to integers truncates toward zero and fails with
//! [`Error::Overflow`] when the integer part does not fit or the value is a
//! sentinel. Narrowing to floats never fails: huge magnitudes saturate to
//! infinity, tiny ones flush to zero.

use super::{BigRational, RationalKind};
use crate::{context::ArithmeticContext, BigDecimal};
use exacta_core::{num::digits::pow10, Error, Result};
use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, ToPrimitive, Zero};

impl BigRational {
    /// The integer part truncated toward zero, or `None` for sentinels.
    pub(crate) fn integer_part(&self) -> Option<BigInt> {
        self.is_finite().then(|| &self.numer / &self.denom)
    }

    /// Expands into a decimal with the precision of `ctx`.
    ///
    /// # Errors
    ///
    /// [`Error::Domain`] for sentinels, [`Error::Overflow`] if the expansion
    /// exceeds the digit ceiling of `ctx`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_bignum::{ArithmeticContext, BigRational};
    /// let ctx = ArithmeticContext::builder().precision(5).build();
    /// let d = BigRational::new(2, 3).to_decimal_with(&ctx).unwrap();
    /// assert_eq!(d.to_string(), "0.66666");
    /// ```
    pub fn to_decimal_with(&self, ctx: &ArithmeticContext) -> Result<BigDecimal> {
        if !self.is_finite() {
            return Err(Error::Domain("non-finite rational has no decimal value"));
        }
        BigDecimal::from(self.numer.clone()).div_with(&BigDecimal::from(self.denom.clone()), ctx)
    }

    fn to_f64_lossy(&self) -> f64 {
        match self.kind() {
            RationalKind::NaN => f64::NAN,
            RationalKind::PositiveInfinity => f64::INFINITY,
            RationalKind::NegativeInfinity => f64::NEG_INFINITY,
            RationalKind::Finite if self.numer.is_zero() => 0.0,
            RationalKind::Finite => {
                let magnitude = ratio_to_f64(self.numer.magnitude(), self.denom.magnitude());
                if self.numer.is_negative() {
                    -magnitude
                } else {
                    magnitude
                }
            }
        }
    }
}

// Scales the quotient to roughly 64 significant bits, divides as integers and
// re-applies the binary exponent in two halves so intermediate powers of two
// stay representable.
fn ratio_to_f64(numer: &BigUint, denom: &BigUint) -> f64 {
    let shift = numer.bits() as i64 - denom.bits() as i64;
    let k = 64 - shift;
    let quotient = if k >= 0 {
        (numer << (k as usize)) / denom
    } else {
        numer / (denom << ((-k) as usize))
    };
    let mantissa = quotient.to_f64().unwrap_or(f64::INFINITY);
    let exp = (-k).clamp(-2200, 2200) as i32;
    let half = exp / 2;
    mantissa * 2f64.powi(half) * 2f64.powi(exp - half)
}

impl From<BigInt> for BigRational {
    #[inline]
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<&BigDecimal> for BigRational {
    /// Exact: `unscaled / 10^scale` in lowest terms.
    #[inline]
    fn from(value: &BigDecimal) -> Self {
        Self::new(value.unscaled().clone(), pow10(value.scale()))
    }
}

impl From<BigDecimal> for BigRational {
    #[inline]
    fn from(value: BigDecimal) -> Self {
        Self::from(&value)
    }
}

impl TryFrom<&BigRational> for BigDecimal {
    type Error = Error;

    /// Expands with the default context.
    #[inline]
    fn try_from(value: &BigRational) -> Result<Self> {
        value.to_decimal_with(&ArithmeticContext::default())
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigRational {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::from_integer(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_from_float {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigRational {
                fn from(value: $t) -> Self {
                    if value.is_nan() {
                        return Self::nan();
                    }
                    if value.is_infinite() {
                        return if value > 0.0 { Self::infinity() } else { Self::neg_infinity() };
                    }
                    BigDecimal::try_from(value)
                        .map(|d| Self::from(&d))
                        .unwrap_or_else(|_| Self::nan())
                }
            }
        )*
    };
}

impl_from_float!(f32, f64);

impl ToPrimitive for BigRational {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        self.integer_part()?.to_i64()
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.integer_part()?.to_u64()
    }

    #[inline]
    fn to_i128(&self) -> Option<i128> {
        self.integer_part()?.to_i128()
    }

    #[inline]
    fn to_u128(&self) -> Option<u128> {
        self.integer_part()?.to_u128()
    }

    /// Never `None`; sentinels map to NaN and the infinities.
    #[inline]
    fn to_f64(&self) -> Option<f64> {
        Some(self.to_f64_lossy())
    }

    #[inline]
    fn to_f32(&self) -> Option<f32> {
        Some(self.to_f64_lossy() as f32)
    }
}

macro_rules! impl_try_into_integer {
    ($($t:ident => $method:ident),*) => {
        $(
            impl TryFrom<&BigRational> for $t {
                type Error = Error;

                #[inline]
                fn try_from(value: &BigRational) -> Result<$t> {
                    value
                        .integer_part()
                        .and_then(|i| i.$method())
                        .ok_or(Error::overflow(stringify!($t)))
                }
            }
        )*
    };
}

impl_try_into_integer!(
    i8 => to_i8, i16 => to_i16, i32 => to_i32, i64 => to_i64, i128 => to_i128, isize => to_isize,
    u8 => to_u8, u16 => to_u16, u32 => to_u32, u64 => to_u64, u128 => to_u128, usize => to_usize
);
