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

//! Arbitrary-precision rational numbers with NaN and signed infinities.
//!
//! A [`BigRational`] is always stored in lowest terms with the sign on the
//! numerator and a non-negative denominator. A zero denominator encodes the
//! sentinel states:
//!
//! | numerator | denominator | value |
//! |-----------|-------------|-------|
//! | 0         | 1           | zero  |
//! | 0         | 0           | NaN   |
//! | 1         | 0           | +∞    |
//! | -1        | 0           | -∞    |
//!
//! Because the representation is canonical, the derived equality is value
//! equality. NaN compares equal to itself structurally, but is unordered
//! against every other value.

mod arith;
mod cmp;
mod convert;
mod roots;

pub use roots::integer_root;

use crate::BigDecimal;
use exacta_core::Error;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::str::FromStr;

/// An immutable rational number of unbounded magnitude.
///
/// # Examples
///
/// ```rust
/// # use exacta_bignum::BigRational;
/// let a = BigRational::new(1, 3);
/// let b = BigRational::new(1, 6);
/// assert_eq!(a + b, BigRational::new(1, 2));
///
/// assert_eq!(BigRational::new(6, -4).to_string(), "-3/2");
/// assert!(BigRational::new(0, 0).is_nan());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigRational {
    numer: BigInt,
    denom: BigInt,
}

/// The state a [`BigRational`] is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RationalKind {
    NaN,
    NegativeInfinity,
    Finite,
    PositiveInfinity,
}

impl BigRational {
    /// Creates `numer / denom` in lowest terms.
    ///
    /// A zero denominator collapses the numerator to its sign, producing NaN,
    /// +∞ or -∞.
    pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Self {
        let numer = numer.into();
        let denom = denom.into();
        if denom.is_zero() {
            return Self {
                numer: numer.signum(),
                denom,
            };
        }
        let gcd = numer.gcd(&denom);
        let (mut numer, mut denom) = (numer / &gcd, denom / &gcd);
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }
        Self { numer, denom }
    }

    /// Creates a rational from parts already in lowest terms with a positive
    /// denominator.
    #[inline]
    pub(crate) fn from_reduced(numer: BigInt, denom: BigInt) -> Self {
        debug_assert!(denom.is_positive() && numer.gcd(&denom).is_one());
        Self { numer, denom }
    }

    /// Creates the integer `value`.
    #[inline]
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self {
            numer: value.into(),
            denom: BigInt::one(),
        }
    }

    #[inline]
    pub fn nan() -> Self {
        Self {
            numer: BigInt::zero(),
            denom: BigInt::zero(),
        }
    }

    #[inline]
    pub fn infinity() -> Self {
        Self {
            numer: BigInt::one(),
            denom: BigInt::zero(),
        }
    }

    #[inline]
    pub fn neg_infinity() -> Self {
        Self {
            numer: -BigInt::one(),
            denom: BigInt::zero(),
        }
    }

    #[inline]
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    #[inline]
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// Classifies the value into its sentinel or finite state.
    pub fn kind(&self) -> RationalKind {
        if !self.denom.is_zero() {
            RationalKind::Finite
        } else if self.numer.is_positive() {
            RationalKind::PositiveInfinity
        } else if self.numer.is_negative() {
            RationalKind::NegativeInfinity
        } else {
            RationalKind::NaN
        }
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        self.kind() == RationalKind::NaN
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.denom.is_zero() && !self.numer.is_zero()
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        !self.denom.is_zero()
    }

    /// Returns `true` for finite integers.
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Returns `true` for negative values, including -∞.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }

    /// Returns `true` for positive values, including +∞.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.numer.is_positive()
    }

    /// `-1`, `0` or `1`; NaN maps to NaN.
    pub fn signum(&self) -> Self {
        if self.is_nan() {
            return Self::nan();
        }
        Self::from_integer(self.numer.signum())
    }

    pub fn abs(&self) -> Self {
        Self {
            numer: self.numer.abs(),
            denom: self.denom.clone(),
        }
    }

    /// Returns `1 / self`. The reciprocal of zero is +∞, of an infinity zero.
    pub fn recip(&self) -> Self {
        Self::new(self.denom.clone(), self.numer.clone())
    }
}

impl Zero for BigRational {
    #[inline]
    fn zero() -> Self {
        Self::from_integer(0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.numer.is_zero() && self.denom.is_one()
    }
}

impl One for BigRational {
    #[inline]
    fn one() -> Self {
        Self::from_integer(1)
    }
}

impl Default for BigRational {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for BigRational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind() {
            RationalKind::NaN => f.pad("NaN"),
            RationalKind::PositiveInfinity => f.pad("∞"),
            RationalKind::NegativeInfinity => f.pad("-∞"),
            RationalKind::Finite if self.denom.is_one() => write!(f, "{}", self.numer),
            RationalKind::Finite => write!(f, "{}/{}", self.numer, self.denom),
        }
    }
}

impl FromStr for BigRational {
    type Err = Error;

    /// Parses `n`, `n/d`, a decimal literal, `NaN`, `∞`, `+∞` or `-∞`.
    fn from_str(s: &str) -> Result<Self, Error> {
        let s = s.trim();
        match s {
            "NaN" => return Ok(Self::nan()),
            "∞" | "+∞" => return Ok(Self::infinity()),
            "-∞" => return Ok(Self::neg_infinity()),
            _ => {}
        }
        match s.split_once('/') {
            Some((numer, denom)) => {
                let parse = |part: &str| {
                    part.trim()
                        .parse::<BigInt>()
                        .map_err(|_| Error::format("rational", s, "invalid integer part"))
                };
                Ok(Self::new(parse(numer)?, parse(denom)?))
            }
            None => s
                .parse::<BigDecimal>()
                .map(|d| Self::from(&d))
                .map_err(|_| Error::format("rational", s, "not a fraction or decimal")),
        }
    }
}
