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

use num_bigint::BigInt;

/// A trait for discrete types that can be moved a signed number of unit steps
/// by value, reporting overflow instead of wrapping.
///
/// # Examples
///
/// ```rust
/// # use exacta_core::num::step::CheckedStep;
/// assert_eq!(5i32.checked_step(3), Some(8));
/// assert_eq!(5u8.checked_step(-5), Some(0));
/// assert_eq!(0u8.checked_step(-1), None); // Underflow
/// assert_eq!(i8::MAX.checked_step(1), None); // Overflow
/// ```
pub trait CheckedStep: Sized {
    /// Returns `self` moved by `steps` units, or `None` if the result is not
    /// representable.
    fn checked_step(&self, steps: i64) -> Option<Self>;

    /// Returns `true` if `next` is exactly one step above `self`.
    #[inline]
    fn is_succeeded_by(&self, next: &Self) -> bool
    where
        Self: PartialEq,
    {
        self.checked_step(1).as_ref() == Some(next)
    }
}

// Types narrower than i128 take the detour through i128, which holds every
// value of theirs plus any i64 offset.
macro_rules! checked_step_via_i128 {
    ($($t:ty),*) => {
        $(
            impl CheckedStep for $t {
                #[inline]
                fn checked_step(&self, steps: i64) -> Option<$t> {
                    let wide = i128::from(*self).checked_add(i128::from(steps))?;
                    <$t>::try_from(wide).ok()
                }
            }
        )*
    };
}

checked_step_via_i128!(i8, i16, i32, i64, u8, u16, u32, u64);

impl CheckedStep for isize {
    #[inline]
    fn checked_step(&self, steps: i64) -> Option<isize> {
        let offset = isize::try_from(steps).ok()?;
        self.checked_add(offset)
    }
}

impl CheckedStep for usize {
    #[inline]
    fn checked_step(&self, steps: i64) -> Option<usize> {
        let offset = usize::try_from(steps.unsigned_abs()).ok()?;
        if steps >= 0 {
            self.checked_add(offset)
        } else {
            self.checked_sub(offset)
        }
    }
}

impl CheckedStep for i128 {
    #[inline]
    fn checked_step(&self, steps: i64) -> Option<i128> {
        self.checked_add(i128::from(steps))
    }
}

impl CheckedStep for u128 {
    #[inline]
    fn checked_step(&self, steps: i64) -> Option<u128> {
        let offset = u128::from(steps.unsigned_abs());
        if steps >= 0 {
            self.checked_add(offset)
        } else {
            self.checked_sub(offset)
        }
    }
}

impl CheckedStep for BigInt {
    #[inline]
    fn checked_step(&self, steps: i64) -> Option<BigInt> {
        Some(self + steps)
    }
}
