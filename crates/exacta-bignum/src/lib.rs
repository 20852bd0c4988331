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

//! # Exacta Bignum
//!
//! Exact arbitrary-precision numbers built on `num-bigint`.
//!
//! ## Modules
//!
//! - `decimal`: `BigDecimal`, an unscaled `BigInt` with a base-ten scale.
//!   Addition, subtraction and multiplication are exact; division and roots
//!   are carried to a configurable number of fractional digits.
//! - `rational`: `BigRational`, a fraction kept in lowest terms with a
//!   positive denominator, plus the `NaN`, `+∞` and `-∞` sentinels encoded as
//!   zero-denominator fractions. Includes powers, Newton roots, rounding and
//!   `f64` logarithms.
//! - `context`: `ArithmeticContext`, the precision, iteration cap and optional
//!   digit ceiling consulted by the inexact operations.
//!
//! Operators (`+`, `-`, `*`, `/`, `%`, unary `-`) are implemented for owned
//! values and references alike. Fallible variants (`checked_div`, `pow`,
//! `root`) return [`exacta_core::Result`].

#[macro_use]
mod macros;

pub mod context;
pub mod decimal;
pub mod rational;

pub use context::{ArithmeticContext, ArithmeticContextBuilder};
pub use decimal::BigDecimal;
pub use rational::{integer_root, BigRational, RationalKind};
