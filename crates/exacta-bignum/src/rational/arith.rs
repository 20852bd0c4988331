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

use super::{BigRational, RationalKind};
use crate::context::ArithmeticContext;
use exacta_core::{Error, Result};
use num_traits::{One, Zero};
use std::ops::{Add, Div, Mul, Sub};

impl Add<&BigRational> for &BigRational {
    type Output = BigRational;

    fn add(self, rhs: &BigRational) -> BigRational {
        use RationalKind::*;
        match (self.kind(), rhs.kind()) {
            (NaN, _) | (_, NaN) => BigRational::nan(),
            (PositiveInfinity, NegativeInfinity) | (NegativeInfinity, PositiveInfinity) => {
                BigRational::nan()
            }
            (PositiveInfinity, _) | (_, PositiveInfinity) => BigRational::infinity(),
            (NegativeInfinity, _) | (_, NegativeInfinity) => BigRational::neg_infinity(),
            (Finite, Finite) => BigRational::new(
                &self.numer * &rhs.denom + &rhs.numer * &self.denom,
                &self.denom * &rhs.denom,
            ),
        }
    }
}

impl Sub<&BigRational> for &BigRational {
    type Output = BigRational;

    #[inline]
    fn sub(self, rhs: &BigRational) -> BigRational {
        self + &(-rhs)
    }
}

// The zero-denominator collapse in `BigRational::new` already yields the
// right sentinel for every non-finite product: ±∞ × non-zero is ±∞ with the
// product's sign, ∞ × 0 and anything involving NaN become 0/0.
impl Mul<&BigRational> for &BigRational {
    type Output = BigRational;

    #[inline]
    fn mul(self, rhs: &BigRational) -> BigRational {
        BigRational::new(&self.numer * &rhs.numer, &self.denom * &rhs.denom)
    }
}

/// Division is multiplication by the reciprocal: `x / 0` is ±∞ following the
/// sign of `x`, `0 / 0` and `∞ / ∞` are NaN.
impl Div<&BigRational> for &BigRational {
    type Output = BigRational;

    #[inline]
    fn div(self, rhs: &BigRational) -> BigRational {
        self * &rhs.recip()
    }
}

impl std::ops::Neg for &BigRational {
    type Output = BigRational;

    #[inline]
    fn neg(self) -> BigRational {
        BigRational {
            numer: -&self.numer,
            denom: self.denom.clone(),
        }
    }
}

forward_binop!(impl Add, add for BigRational);
forward_binop!(impl Sub, sub for BigRational);
forward_binop!(impl Mul, mul for BigRational);
forward_binop!(impl Div, div for BigRational);
forward_neg!(BigRational);

impl BigRational {
    /// Raises to an integer power. A zero exponent yields one for every
    /// value, including zero and NaN; negative exponents invert first.
    ///
    /// # Errors
    ///
    /// [`Error::Domain`] for zero raised to a negative power,
    /// [`Error::Overflow`] if the result exceeds the digit ceiling of `ctx`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_bignum::{ArithmeticContext, BigRational};
    /// let ctx = ArithmeticContext::default();
    /// let r = BigRational::new(-2, 3);
    /// assert_eq!(r.pow_with(3, &ctx).unwrap(), BigRational::new(-8, 27));
    /// assert_eq!(r.pow_with(-2, &ctx).unwrap(), BigRational::new(9, 4));
    /// ```
    pub fn pow_with(&self, exp: i32, ctx: &ArithmeticContext) -> Result<Self> {
        if exp == 0 {
            return Ok(Self::one());
        }
        if exp < 0 && self.is_zero() {
            return Err(Error::Domain("zero raised to a negative power"));
        }
        let base = if exp < 0 { self.recip() } else { self.clone() };
        let exp = exp.unsigned_abs();
        if !base.is_finite() {
            // 0^e = 0 for the sentinel denominator, so ±1/0 and 0/0 keep their
            // meaning (with (-1)^e deciding the sign of an infinity).
            return Ok(Self::new(base.numer.pow(exp), base.denom.pow(exp)));
        }
        let numer = base.numer.pow(exp);
        let denom = base.denom.pow(exp);
        ctx.check_digits(&numer)?;
        ctx.check_digits(&denom)?;
        Ok(Self::from_reduced(numer, denom))
    }

    /// Raises to an integer power with the default context.
    #[inline]
    pub fn pow(&self, exp: i32) -> Result<Self> {
        self.pow_with(exp, &ArithmeticContext::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64, d: i64) -> BigRational {
        BigRational::new(n, d)
    }

    #[test]
    fn test_add_reduces() {
        assert_eq!(r(1, 3) + r(1, 6), r(1, 2));
        assert_eq!(r(1, 2) + r(-1, 2), BigRational::zero());
        assert_eq!(&r(3, 4) + &r(1, 4), BigRational::one());
    }

    #[test]
    fn test_sub_mul_div() {
        assert_eq!(r(1, 2) - r(1, 3), r(1, 6));
        assert_eq!(r(2, 3) * r(9, 4), r(3, 2));
        assert_eq!(r(2, 3) / r(4, 9), r(3, 2));
        assert_eq!(-r(5, 7), r(-5, 7));
    }

    #[test]
    fn test_nan_is_absorbing() {
        let nan = BigRational::nan();
        assert!((&nan + &r(1, 2)).is_nan());
        assert!((&r(1, 2) - &nan).is_nan());
        assert!((&nan * &BigRational::zero()).is_nan());
        assert!((&nan / &r(3, 1)).is_nan());
    }

    #[test]
    fn test_infinity_addition() {
        let inf = BigRational::infinity();
        let ninf = BigRational::neg_infinity();
        assert_eq!(&inf + &r(-100, 1), inf);
        assert_eq!(&r(5, 1) + &ninf, ninf);
        assert_eq!(&inf + &inf, inf);
        assert!((&inf + &ninf).is_nan());
        assert!((&inf - &inf).is_nan());
        assert_eq!(&ninf - &inf, ninf);
    }

    #[test]
    fn test_infinity_multiplication() {
        let inf = BigRational::infinity();
        let ninf = BigRational::neg_infinity();
        assert_eq!(&inf * &r(-2, 3), ninf);
        assert_eq!(&ninf * &ninf, inf);
        assert!((&inf * &BigRational::zero()).is_nan());
    }

    #[test]
    fn test_division_by_zero() {
        let zero = BigRational::zero();
        assert_eq!(&r(3, 4) / &zero, BigRational::infinity());
        assert_eq!(&r(-3, 4) / &zero, BigRational::neg_infinity());
        assert!((&zero / &zero).is_nan());
    }

    #[test]
    fn test_division_with_infinities() {
        let inf = BigRational::infinity();
        assert!((&inf / &inf).is_nan());
        assert_eq!(&r(7, 1) / &inf, BigRational::zero());
        assert_eq!(&inf / &r(-2, 1), BigRational::neg_infinity());
    }

    #[test]
    fn test_pow() {
        assert_eq!(r(2, 3).pow(2).unwrap(), r(4, 9));
        assert_eq!(r(2, 3).pow(-1).unwrap(), r(3, 2));
        assert_eq!(r(-1, 2).pow(-3).unwrap(), r(-8, 1));
        assert_eq!(BigRational::zero().pow(0).unwrap(), BigRational::one());
        assert_eq!(BigRational::nan().pow(0).unwrap(), BigRational::one());
        assert_eq!(BigRational::zero().pow(5).unwrap(), BigRational::zero());
    }

    #[test]
    fn test_pow_zero_negative_exponent_is_domain_error() {
        assert_eq!(
            BigRational::zero().pow(-1),
            Err(Error::Domain("zero raised to a negative power"))
        );
    }

    #[test]
    fn test_pow_sentinels() {
        assert_eq!(
            BigRational::neg_infinity().pow(3).unwrap(),
            BigRational::neg_infinity()
        );
        assert_eq!(
            BigRational::neg_infinity().pow(2).unwrap(),
            BigRational::infinity()
        );
        assert_eq!(BigRational::infinity().pow(-2).unwrap(), BigRational::zero());
        assert!(BigRational::nan().pow(4).unwrap().is_nan());
    }

    #[test]
    fn test_pow_respects_digit_ceiling() {
        let ctx = ArithmeticContext::builder().max_digits(Some(10)).build();
        assert!(r(10, 1).pow_with(9, &ctx).is_ok());
        assert!(matches!(
            r(10, 1).pow_with(10, &ctx),
            Err(Error::Overflow { .. })
        ));
    }
}
