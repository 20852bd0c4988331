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

//! Roots, rounding, truncation and logarithms.

use super::{BigRational, RationalKind};
use crate::context::ArithmeticContext;
use exacta_core::{num::digits::pow10, Error, Result};
use num_bigint::BigInt;
use num_integer::{Integer, Roots};
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::f64::consts::{LN_10, LN_2};

/// Returns the `n`th root of `value`, truncated toward zero.
///
/// # Errors
///
/// [`Error::Domain`] for `n == 0` or an even root of a negative value.
///
/// # Examples
///
/// ```rust
/// # use exacta_bignum::integer_root;
/// # use num_bigint::BigInt;
/// assert_eq!(integer_root(&BigInt::from(80), 2).unwrap(), BigInt::from(8));
/// assert_eq!(integer_root(&BigInt::from(-27), 3).unwrap(), BigInt::from(-3));
/// assert!(integer_root(&BigInt::from(-4), 2).is_err());
/// ```
pub fn integer_root(value: &BigInt, n: u32) -> Result<BigInt> {
    if n == 0 {
        return Err(Error::Domain("zeroth root"));
    }
    if value.is_negative() && n.is_even() {
        return Err(Error::Domain("even root of a negative number"));
    }
    Ok(value.nth_root(n))
}

/// Returns the exact `n`th root of `value` if it is a perfect power.
fn exact_root(value: &BigInt, n: u32) -> Option<BigInt> {
    let root = value.nth_root(n);
    (root.pow(n) == *value).then_some(root)
}

impl BigRational {
    /// Largest integer not above the value. Sentinels are returned unchanged.
    pub fn floor(&self) -> Self {
        if !self.is_finite() {
            return self.clone();
        }
        Self::from_integer(self.numer.div_floor(&self.denom))
    }

    /// Smallest integer not below the value. Sentinels are returned unchanged.
    pub fn ceil(&self) -> Self {
        if !self.is_finite() {
            return self.clone();
        }
        Self::from_integer(self.numer.div_ceil(&self.denom))
    }

    /// Integer part, truncated toward zero. Sentinels are returned unchanged.
    pub fn trunc(&self) -> Self {
        match self.integer_part() {
            Some(integer) => Self::from_integer(integer),
            None => self.clone(),
        }
    }

    /// Drops every decimal digit after the first `precision` fractional
    /// digits, truncating toward zero. The result is kept in lowest terms, so
    /// its denominator divides `10^precision`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_bignum::BigRational;
    /// let r = BigRational::new(2, 3).truncate(3);
    /// assert_eq!(r, BigRational::new(666, 1000));
    ///
    /// let r = BigRational::new(-1, 8).truncate(2);
    /// assert_eq!(r, BigRational::new(-12, 100));
    /// ```
    pub fn truncate(&self, precision: u32) -> Self {
        if !self.is_finite() {
            return self.clone();
        }
        let scale = pow10(precision);
        Self::new((&self.numer * &scale) / &self.denom, scale)
    }

    /// Approximates the `n`th root with Newton's method.
    ///
    /// Exact when numerator and denominator are perfect `n`th powers.
    /// Otherwise iteration starts from the root truncated to
    /// `ctx.precision()` digits and stops once successive iterates differ by
    /// less than `10^-precision`, or after `ctx.max_iterations()` steps, in
    /// which case the last iterate is returned as the best estimate.
    ///
    /// # Errors
    ///
    /// [`Error::Domain`] for `n == 0` or an even root of a negative value,
    /// [`Error::Overflow`] if the result exceeds the digit ceiling of `ctx`.
    pub fn root_with(&self, n: u32, ctx: &ArithmeticContext) -> Result<Self> {
        if n == 0 {
            return Err(Error::Domain("zeroth root"));
        }
        if self.is_nan() || n == 1 {
            return Ok(self.clone());
        }
        if self.is_negative() {
            if n.is_even() {
                return Err(Error::Domain("even root of a negative number"));
            }
            return Ok(-(-self).root_with(n, ctx)?);
        }
        if self.kind() == RationalKind::PositiveInfinity || self.is_zero() {
            return Ok(self.clone());
        }

        if let (Some(numer), Some(denom)) = (exact_root(&self.numer, n), exact_root(&self.denom, n))
        {
            return Ok(Self::new(numer, denom));
        }

        let precision = ctx.precision();
        let scale = pow10(precision);
        let epsilon = Self::new(BigInt::one(), scale.clone());
        let working_precision = precision.saturating_mul(2);

        // floor(root(v) * 10^p) = floor(root(v * 10^(n*p))), which is never
        // more than one unit in the last place below the true root.
        let scaled = (&self.numer * pow10(precision.saturating_mul(n))) / &self.denom;
        let mut x = Self::new(scaled.nth_root(n).max(BigInt::one()), scale);

        let degree = Self::from(n);
        let lower = Self::from(n - 1);
        let mut converged = false;
        for _ in 0..ctx.max_iterations() {
            // x' = ((n - 1) x + v / x^(n - 1)) / n
            // Iterates are positive and finite, and the digit ceiling only
            // applies to the returned root.
            let power = Self::from_reduced(x.numer.pow(n - 1), x.denom.pow(n - 1));
            let next = ((&lower * &x + self / &power) / &degree).truncate(working_precision);
            let delta = (&next - &x).abs();
            x = next;
            if delta < epsilon {
                converged = true;
                break;
            }
        }
        if !converged {
            tracing::debug!(
                degree = n,
                iterations = ctx.max_iterations(),
                "root did not converge, returning best estimate"
            );
        }

        let result = x.truncate(precision);
        ctx.check_digits(&result.numer)?;
        ctx.check_digits(&result.denom)?;
        Ok(result)
    }

    /// Approximates the `n`th root with the default context.
    #[inline]
    pub fn root(&self, n: u32) -> Result<Self> {
        self.root_with(n, &ArithmeticContext::default())
    }

    /// Square root with the default context.
    #[inline]
    pub fn sqrt(&self) -> Result<Self> {
        self.root(2)
    }

    /// Natural logarithm as an `f64`.
    ///
    /// NaN and negative values give NaN, zero gives -∞ and +∞ gives +∞.
    /// Magnitudes far beyond the `f64` range are handled through their bit
    /// length.
    pub fn ln(&self) -> f64 {
        match self.kind() {
            RationalKind::NaN | RationalKind::NegativeInfinity => f64::NAN,
            RationalKind::PositiveInfinity => f64::INFINITY,
            RationalKind::Finite if self.numer.is_negative() => f64::NAN,
            RationalKind::Finite if self.numer.is_zero() => f64::NEG_INFINITY,
            RationalKind::Finite => ln_big(&self.numer) - ln_big(&self.denom),
        }
    }

    /// Base-10 logarithm as an `f64`.
    #[inline]
    pub fn log10(&self) -> f64 {
        self.ln() / LN_10
    }

    /// Logarithm in an arbitrary base as an `f64`.
    #[inline]
    pub fn log(&self, base: f64) -> f64 {
        self.ln() / base.ln()
    }
}

/// `ln(value)` for a positive integer of any size.
fn ln_big(value: &BigInt) -> f64 {
    let bits = value.bits();
    if bits <= 1000 {
        return value.to_f64().map_or(f64::NAN, f64::ln);
    }
    let shift = bits - 64;
    let head = (value >> shift).to_f64().map_or(f64::NAN, f64::ln);
    head + shift as f64 * LN_2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64, d: i64) -> BigRational {
        BigRational::new(n, d)
    }

    #[test]
    fn test_floor_ceil_trunc() {
        assert_eq!(r(7, 2).floor(), r(3, 1));
        assert_eq!(r(-7, 2).floor(), r(-4, 1));
        assert_eq!(r(7, 2).ceil(), r(4, 1));
        assert_eq!(r(-7, 2).ceil(), r(-3, 1));
        assert_eq!(r(-7, 2).trunc(), r(-3, 1));
        assert_eq!(r(6, 3).floor(), r(2, 1));
        assert_eq!(BigRational::infinity().floor(), BigRational::infinity());
    }

    #[test]
    fn test_truncate() {
        assert_eq!(r(1, 3).truncate(0), BigRational::zero());
        assert_eq!(r(5, 4).truncate(1), r(12, 10));
        assert_eq!(r(1, 2).truncate(5), r(1, 2));
        assert!(BigRational::nan().truncate(3).is_nan());
    }

    #[test]
    fn test_exact_roots() {
        assert_eq!(r(9, 4).sqrt().unwrap(), r(3, 2));
        assert_eq!(r(-8, 27).root(3).unwrap(), r(-2, 3));
        assert_eq!(r(1, 1).root(7).unwrap(), r(1, 1));
        assert_eq!(BigRational::zero().sqrt().unwrap(), BigRational::zero());
    }

    #[test]
    fn test_irrational_root_within_epsilon() {
        let two = r(2, 1);
        let root = two.sqrt().unwrap();
        let error = (&(&root * &root) - &two).abs();
        let epsilon = BigRational::new(BigInt::one(), pow10(49));
        assert!(error < epsilon);
        assert!(root.denom() <= &pow10(50));
    }

    #[test]
    fn test_cube_root_of_small_fraction() {
        let value = r(1, 1000);
        assert_eq!(value.root(3).unwrap(), r(1, 10));

        let value = r(2, 1000);
        let root = value.root(3).unwrap();
        let cube = root.pow(3).unwrap();
        let error = (&cube - &value).abs();
        assert!(error < BigRational::new(BigInt::one(), pow10(45)));
    }

    #[test]
    fn test_root_errors() {
        assert_eq!(r(4, 1).root(0), Err(Error::Domain("zeroth root")));
        assert_eq!(
            r(-4, 1).sqrt(),
            Err(Error::Domain("even root of a negative number"))
        );
        assert_eq!(
            BigRational::neg_infinity().sqrt(),
            Err(Error::Domain("even root of a negative number"))
        );
    }

    #[test]
    fn test_root_sentinels() {
        assert!(BigRational::nan().sqrt().unwrap().is_nan());
        assert_eq!(BigRational::infinity().sqrt().unwrap(), BigRational::infinity());
        assert_eq!(
            BigRational::neg_infinity().root(3).unwrap(),
            BigRational::neg_infinity()
        );
    }

    #[test]
    fn test_digit_ceiling_applies_to_result_only() {
        let ctx = ArithmeticContext::builder().max_digits(Some(60)).build();
        let root = r(2, 1).root_with(3, &ctx).unwrap();
        assert_eq!(root, r(2, 1).root(3).unwrap());
        assert!(root.denom() <= &pow10(50));

        let tight = ArithmeticContext::builder().max_digits(Some(10)).build();
        assert_eq!(
            r(2, 1).root_with(3, &tight),
            Err(Error::overflow("configured digit ceiling"))
        );
    }

    #[test]
    fn test_root_iteration_cap_returns_estimate() {
        let ctx = ArithmeticContext::builder()
            .precision(30)
            .max_iterations(1)
            .build();
        let root = r(3, 1).root_with(2, &ctx).unwrap();
        let error = (&(&root * &root) - &r(3, 1)).abs();
        assert!(error < r(1, 1_000_000_000));
    }

    #[test]
    fn test_logarithms() {
        assert!((r(1, 1).ln()).abs() < 1e-15);
        assert!((r(1000, 1).log10() - 3.0).abs() < 1e-12);
        assert!((r(1, 8).log(2.0) + 3.0).abs() < 1e-12);
        assert!(r(-1, 2).ln().is_nan());
        assert_eq!(BigRational::zero().ln(), f64::NEG_INFINITY);
        assert_eq!(BigRational::infinity().ln(), f64::INFINITY);
    }

    #[test]
    fn test_logarithm_of_huge_values() {
        let huge = BigRational::from_integer(pow10(1000));
        assert!((huge.log10() - 1000.0).abs() < 1e-9);
        let tiny = BigRational::new(BigInt::one(), pow10(1000));
        assert!((tiny.log10() + 1000.0).abs() < 1e-9);
    }
}
