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

//! Per-domain behavior for ordinal values.
//!
//! Every type that can sit inside an [`Ordinal`](super::Ordinal) implements
//! [`OrdinalValue`]. Discrete domains fold adjacency levels into the value
//! itself, continuous ones keep the level symbolic.

use exacta_bignum::{BigDecimal, BigRational, RationalKind};
use exacta_core::num::step::CheckedStep;
use num_bigint::BigInt;
use std::{cmp::Ordering, fmt::Debug};

/// What a raw value denotes once lifted into an ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrdinalState {
    NaN,
    NegativeInfinity,
    Real,
    PositiveInfinity,
}

/// A totally ordered domain usable as ordinal and interval bounds.
///
/// Implementations are resolved at compile time; there is no runtime
/// registry of helpers.
pub trait OrdinalValue: Clone + Debug {
    /// `true` when every value has a well-defined successor, so that an
    /// adjacency level can be folded into the value.
    const DISCRETE: bool;

    /// Glyph naming the whole domain in interval notation (`ℤ`, `ℝ`, ...).
    const SET_GLYPH: &'static str;

    /// The point separating positive from negative values.
    fn origin() -> Self;

    /// Compares two values whose state is [`OrdinalState::Real`].
    fn cmp_ordinal(&self, other: &Self) -> Ordering;

    /// Classifies the raw value. Domains without sentinels are always real.
    #[inline]
    fn ordinal_state(&self) -> OrdinalState {
        OrdinalState::Real
    }

    /// Normalizes a `(value, level)` pair.
    ///
    /// The default keeps the level symbolic, which is what continuous domains
    /// want.
    #[inline]
    fn compute_level(self, level: i64) -> (Self, i64) {
        (self, level)
    }

    /// Returns `true` if `next` is the immediate successor of `self`.
    /// Always `false` for continuous domains.
    #[inline]
    fn is_adjacent_to(&self, next: &Self) -> bool {
        let _ = next;
        false
    }
}

/// Marker for domains whose elements can be enumerated one step at a time.
pub trait Discrete: OrdinalValue + CheckedStep + PartialEq {}

fn fold_level<T: CheckedStep>(value: T, level: i64) -> (T, i64) {
    if level == 0 {
        return (value, 0);
    }
    match value.checked_step(level) {
        Some(folded) => (folded, 0),
        None => (value, level),
    }
}

macro_rules! impl_discrete_ordinal {
    ($($t:ty => $zero:expr),* $(,)?) => {
        $(
            impl OrdinalValue for $t {
                const DISCRETE: bool = true;
                const SET_GLYPH: &'static str = "ℤ";

                #[inline]
                fn origin() -> Self {
                    $zero
                }

                #[inline]
                fn cmp_ordinal(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                #[inline]
                fn compute_level(self, level: i64) -> (Self, i64) {
                    fold_level(self, level)
                }

                #[inline]
                fn is_adjacent_to(&self, next: &Self) -> bool {
                    CheckedStep::is_succeeded_by(self, next)
                }
            }

            impl Discrete for $t {}
        )*
    };
}

impl_discrete_ordinal! {
    i8 => 0, i16 => 0, i32 => 0, i64 => 0, i128 => 0, isize => 0,
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, u128 => 0, usize => 0,
    BigInt => BigInt::from(0),
}

macro_rules! impl_float_ordinal {
    ($($t:ty),*) => {
        $(
            impl OrdinalValue for $t {
                const DISCRETE: bool = false;
                const SET_GLYPH: &'static str = "ℝ";

                #[inline]
                fn origin() -> Self {
                    0.0
                }

                #[inline]
                fn cmp_ordinal(&self, other: &Self) -> Ordering {
                    self.partial_cmp(other).unwrap_or(Ordering::Equal)
                }

                #[inline]
                fn ordinal_state(&self) -> OrdinalState {
                    if self.is_nan() {
                        OrdinalState::NaN
                    } else if *self == <$t>::INFINITY {
                        OrdinalState::PositiveInfinity
                    } else if *self == <$t>::NEG_INFINITY {
                        OrdinalState::NegativeInfinity
                    } else {
                        OrdinalState::Real
                    }
                }
            }
        )*
    };
}

impl_float_ordinal!(f32, f64);

impl OrdinalValue for BigRational {
    const DISCRETE: bool = false;
    const SET_GLYPH: &'static str = "ℚ";

    #[inline]
    fn origin() -> Self {
        BigRational::from_integer(0)
    }

    #[inline]
    fn cmp_ordinal(&self, other: &Self) -> Ordering {
        self.compare(other).unwrap_or(Ordering::Equal)
    }

    #[inline]
    fn ordinal_state(&self) -> OrdinalState {
        match self.kind() {
            RationalKind::NaN => OrdinalState::NaN,
            RationalKind::NegativeInfinity => OrdinalState::NegativeInfinity,
            RationalKind::Finite => OrdinalState::Real,
            RationalKind::PositiveInfinity => OrdinalState::PositiveInfinity,
        }
    }
}

impl OrdinalValue for BigDecimal {
    const DISCRETE: bool = false;
    const SET_GLYPH: &'static str = "𝔻";

    #[inline]
    fn origin() -> Self {
        BigDecimal::default()
    }

    /// Numeric comparison, so `1.0` and `1.00` denote the same point.
    #[inline]
    fn cmp_ordinal(&self, other: &Self) -> Ordering {
        self.value_cmp(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discrete_folding() {
        assert_eq!(5i32.compute_level(1), (6, 0));
        assert_eq!(5i32.compute_level(-7), (-2, 0));
        assert_eq!(i32::MAX.compute_level(1), (i32::MAX, 1));
        assert_eq!(0u8.compute_level(-1), (0, -1));
        assert_eq!(BigInt::from(9).compute_level(3), (BigInt::from(12), 0));
    }

    #[test]
    fn test_continuous_keeps_level() {
        assert_eq!(2.5f64.compute_level(1), (2.5, 1));
        let half = BigRational::new(1, 2);
        assert_eq!(half.clone().compute_level(-1), (half, -1));
    }

    #[test]
    fn test_adjacency() {
        assert!(3i64.is_adjacent_to(&4));
        assert!(!3i64.is_adjacent_to(&5));
        assert!(!u8::MAX.is_adjacent_to(&0));
        assert!(!1.0f64.is_adjacent_to(&2.0));
    }

    #[test]
    fn test_states() {
        assert_eq!(f64::NAN.ordinal_state(), OrdinalState::NaN);
        assert_eq!(f32::INFINITY.ordinal_state(), OrdinalState::PositiveInfinity);
        assert_eq!(f64::NEG_INFINITY.ordinal_state(), OrdinalState::NegativeInfinity);
        assert_eq!(1.5f64.ordinal_state(), OrdinalState::Real);
        assert_eq!(BigRational::nan().ordinal_state(), OrdinalState::NaN);
        assert_eq!(
            BigRational::neg_infinity().ordinal_state(),
            OrdinalState::NegativeInfinity
        );
        assert_eq!(7u16.ordinal_state(), OrdinalState::Real);
    }

    #[test]
    fn test_decimal_compares_by_value() {
        let a = BigDecimal::new(10, 1);
        let b = BigDecimal::new(100, 2);
        assert_eq!(a.cmp_ordinal(&b), Ordering::Equal);
        assert_eq!(BigDecimal::origin(), BigDecimal::new(0, 0));
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(<i32 as OrdinalValue>::SET_GLYPH, "ℤ");
        assert_eq!(<f64 as OrdinalValue>::SET_GLYPH, "ℝ");
        assert_eq!(<BigRational as OrdinalValue>::SET_GLYPH, "ℚ");
        assert!(<BigInt as OrdinalValue>::DISCRETE);
        assert!(!<BigDecimal as OrdinalValue>::DISCRETE);
    }
}
