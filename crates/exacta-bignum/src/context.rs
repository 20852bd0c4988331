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

//! Arithmetic configuration.
//!
//! Inexact operations (decimal division, rational roots) and potentially
//! explosive ones (powers) read their limits from an [`ArithmeticContext`].
//! Plain operators use [`ArithmeticContext::default`]; the `*_with` methods on
//! [`BigDecimal`](crate::BigDecimal) and [`BigRational`](crate::BigRational)
//! accept an explicit one.

use exacta_core::{num::digits::digit_count, Error, Result};
use num_bigint::BigInt;

/// Decimal digits kept by division and used as the root epsilon exponent.
pub const DEFAULT_PRECISION: u32 = 50;

/// Newton iteration cap for roots.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Limits applied to inexact or unbounded arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArithmeticContext {
    precision: u32,
    max_iterations: u32,
    max_digits: Option<u64>,
}

impl Default for ArithmeticContext {
    #[inline]
    fn default() -> Self {
        ArithmeticContextBuilder::new().build()
    }
}

impl ArithmeticContext {
    /// Returns a builder starting from the default limits.
    #[inline]
    pub fn builder() -> ArithmeticContextBuilder {
        ArithmeticContextBuilder::new()
    }

    /// Decimal digits kept after the point by division; roots converge once
    /// successive iterates differ by less than `10^-precision`.
    #[inline]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// Maximum number of Newton iterations spent on a root.
    #[inline]
    pub const fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Optional ceiling on the number of decimal digits of a result.
    #[inline]
    pub const fn max_digits(&self) -> Option<u64> {
        self.max_digits
    }

    /// Fails with [`Error::Overflow`] if `value` has more digits than the
    /// configured ceiling.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_bignum::ArithmeticContext;
    /// # use num_bigint::BigInt;
    /// let ctx = ArithmeticContext::builder().max_digits(Some(3)).build();
    /// assert!(ctx.check_digits(&BigInt::from(999)).is_ok());
    /// assert!(ctx.check_digits(&BigInt::from(1000)).is_err());
    /// ```
    pub fn check_digits(&self, value: &BigInt) -> Result<()> {
        match self.max_digits {
            Some(limit) if digit_count(value) > limit => {
                Err(Error::overflow("configured digit ceiling"))
            }
            _ => Ok(()),
        }
    }
}

/// Builder for [`ArithmeticContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArithmeticContextBuilder {
    precision: u32,
    max_iterations: u32,
    max_digits: Option<u64>,
}

impl Default for ArithmeticContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ArithmeticContextBuilder {
    /// Creates a builder holding the default limits.
    #[inline]
    pub const fn new() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_digits: None,
        }
    }

    /// Sets the division precision and root epsilon exponent.
    #[inline]
    pub fn precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the Newton iteration cap. A cap of zero is raised to one.
    #[inline]
    pub fn max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }

    /// Sets the digit ceiling; `None` leaves results unbounded.
    #[inline]
    pub fn max_digits(mut self, max_digits: Option<u64>) -> Self {
        self.max_digits = max_digits;
        self
    }

    /// Builds the context.
    #[inline]
    pub fn build(self) -> ArithmeticContext {
        ArithmeticContext {
            precision: self.precision,
            max_iterations: self.max_iterations,
            max_digits: self.max_digits,
        }
    }
}
