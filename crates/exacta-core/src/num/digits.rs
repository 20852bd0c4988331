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

//! Decimal digit helpers over `BigInt`.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// Returns `10^exp`.
///
/// # Examples
///
/// ```rust
/// # use exacta_core::num::digits::pow10;
/// # use num_bigint::BigInt;
/// assert_eq!(pow10(3), BigInt::from(1000));
/// assert_eq!(pow10(0), BigInt::from(1));
/// ```
#[inline]
pub fn pow10(exp: u32) -> BigInt {
    num_traits::pow(BigInt::from(10u8), exp as usize)
}

/// Returns the number of decimal digits in the magnitude of `value`.
/// Zero has one digit.
///
/// # Examples
///
/// ```rust
/// # use exacta_core::num::digits::digit_count;
/// # use num_bigint::BigInt;
/// assert_eq!(digit_count(&BigInt::from(0)), 1);
/// assert_eq!(digit_count(&BigInt::from(-12345)), 5);
/// ```
pub fn digit_count(value: &BigInt) -> u64 {
    if value.is_zero() {
        return 1;
    }
    value.abs().to_str_radix(10).len() as u64
}

/// Removes up to `max` trailing decimal zeros from `value`, returning the
/// shortened value and the number of zeros removed.
///
/// # Examples
///
/// ```rust
/// # use exacta_core::num::digits::strip_trailing_zeros;
/// # use num_bigint::BigInt;
/// assert_eq!(strip_trailing_zeros(BigInt::from(12000), 5), (BigInt::from(12), 3));
/// assert_eq!(strip_trailing_zeros(BigInt::from(12000), 2), (BigInt::from(120), 2));
/// ```
pub fn strip_trailing_zeros(mut value: BigInt, max: u32) -> (BigInt, u32) {
    if value.is_zero() {
        return (value, 0);
    }
    let ten = BigInt::from(10u8);
    let mut removed = 0;
    while removed < max {
        let (quotient, remainder) = num_integer::Integer::div_rem(&value, &ten);
        if !remainder.is_zero() {
            break;
        }
        value = quotient;
        removed += 1;
    }
    (value, removed)
}
