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

//! Points on an ordered domain with adjacency levels and sentinels.
//!
//! An [`Ordinal`] is either `NaN`, `-∞`, `+∞`, or a real value shifted by an
//! integer *adjacency level*. On discrete domains the level is folded into
//! the value (`5` advanced by one step is `6`). On continuous domains it stays
//! symbolic: `(3.0, +1)` is the position just after `3.0`, which is how an
//! open lower bound is stored without an epsilon.

mod value;

pub use value::{Discrete, OrdinalState, OrdinalValue};

use std::cmp::Ordering;

/// Result of comparing two ordinals.
///
/// `Below`/`Above` mean the two ordinals are adjacent: the same value at
/// levels one apart, or consecutive values of a discrete domain. `FarBelow`/
/// `FarAbove` mean there is room between them. `Incomparable` is returned
/// whenever a `NaN` is involved; it carries the numeric code `0` but is
/// never treated as equal or adjacent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Proximity {
    FarBelow,
    Below,
    Equal,
    Above,
    FarAbove,
    Incomparable,
}

impl Proximity {
    /// Signed code in `-2..=2`.
    #[inline]
    pub const fn code(self) -> i8 {
        match self {
            Proximity::FarBelow => -2,
            Proximity::Below => -1,
            Proximity::Equal | Proximity::Incomparable => 0,
            Proximity::Above => 1,
            Proximity::FarAbove => 2,
        }
    }

    /// Equal or adjacent.
    #[inline]
    pub const fn is_around(self) -> bool {
        matches!(self, Proximity::Below | Proximity::Equal | Proximity::Above)
    }

    #[inline]
    pub const fn is_incomparable(self) -> bool {
        matches!(self, Proximity::Incomparable)
    }

    /// Collapses the proximity into an ordering; `None` for `Incomparable`.
    #[inline]
    pub const fn ordering(self) -> Option<Ordering> {
        match self {
            Proximity::FarBelow | Proximity::Below => Some(Ordering::Less),
            Proximity::Equal => Some(Ordering::Equal),
            Proximity::Above | Proximity::FarAbove => Some(Ordering::Greater),
            Proximity::Incomparable => None,
        }
    }

    /// The proximity seen from the other side.
    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            Proximity::FarBelow => Proximity::FarAbove,
            Proximity::Below => Proximity::Above,
            Proximity::Equal => Proximity::Equal,
            Proximity::Above => Proximity::Below,
            Proximity::FarAbove => Proximity::FarBelow,
            Proximity::Incomparable => Proximity::Incomparable,
        }
    }

    /// Equal values two or more levels apart are `Far*`: one excluded
    /// point separates them, so the bounds must not fuse.
    fn from_level_difference(diff: i128) -> Self {
        match diff {
            0 => Proximity::Equal,
            1 => Proximity::Above,
            -1 => Proximity::Below,
            d if d > 1 => Proximity::FarAbove,
            _ => Proximity::FarBelow,
        }
    }
}

/// A point on the domain `T`, possibly shifted by adjacency steps.
///
/// Real ordinals are always stored normalized through
/// [`OrdinalValue::compute_level`]; build them with [`Ordinal::new`] or
/// [`Ordinal::from_value`].
///
/// # Examples
///
/// ```rust
/// # use exacta_interval::Ordinal;
/// let five = Ordinal::from_value(5i32);
/// assert_eq!(five.next(), Ordinal::from_value(6));
///
/// let x = Ordinal::from_value(2.5f64);
/// assert_eq!(x.next().level(), 1);
/// assert!(x < x.next());
/// ```
#[derive(Debug, Clone)]
pub enum Ordinal<T> {
    NaN,
    NegativeInfinity,
    Real { value: T, level: i64 },
    PositiveInfinity,
}

impl<T> Ordinal<T>
where
    T: OrdinalValue,
{
    /// Lifts `value` shifted by `level` adjacency steps.
    ///
    /// Sentinel raw values (a float NaN, an infinite `BigRational`, ...)
    /// become the matching sentinel state and the level is dropped.
    pub fn new(value: T, level: i64) -> Self {
        match value.ordinal_state() {
            OrdinalState::NaN => Ordinal::NaN,
            OrdinalState::NegativeInfinity => Ordinal::NegativeInfinity,
            OrdinalState::PositiveInfinity => Ordinal::PositiveInfinity,
            OrdinalState::Real => {
                let (value, level) = value.compute_level(level);
                Ordinal::Real { value, level }
            }
        }
    }

    #[inline]
    pub fn from_value(value: T) -> Self {
        Self::new(value, 0)
    }

    /// The ordinal one adjacency step above. Sentinels are returned as is.
    pub fn next(&self) -> Self {
        match self {
            Ordinal::Real { value, level } => Self::new(value.clone(), level.saturating_add(1)),
            other => other.clone(),
        }
    }

    /// The ordinal one adjacency step below. Sentinels are returned as is.
    pub fn antecedent(&self) -> Self {
        match self {
            Ordinal::Real { value, level } => Self::new(value.clone(), level.saturating_sub(1)),
            other => other.clone(),
        }
    }

    /// Compares two ordinals, distinguishing adjacency from a real gap.
    ///
    /// `-∞` and `+∞` are equal to themselves and respectively below and
    /// above every real ordinal; any `NaN` yields
    /// [`Proximity::Incomparable`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_interval::{Ordinal, Proximity};
    /// let three = Ordinal::from_value(3i32);
    /// assert_eq!(three.proximity(&Ordinal::from_value(4)), Proximity::Below);
    /// assert_eq!(three.proximity(&Ordinal::from_value(5)), Proximity::FarBelow);
    /// assert_eq!(three.proximity(&Ordinal::PositiveInfinity), Proximity::FarBelow);
    /// assert_eq!(three.proximity(&Ordinal::NaN), Proximity::Incomparable);
    /// ```
    pub fn proximity(&self, other: &Self) -> Proximity {
        match (self, other) {
            (Ordinal::NaN, _) | (_, Ordinal::NaN) => Proximity::Incomparable,
            (Ordinal::NegativeInfinity, Ordinal::NegativeInfinity)
            | (Ordinal::PositiveInfinity, Ordinal::PositiveInfinity) => Proximity::Equal,
            (Ordinal::NegativeInfinity, _) | (_, Ordinal::PositiveInfinity) => {
                Proximity::FarBelow
            }
            (Ordinal::PositiveInfinity, _) | (_, Ordinal::NegativeInfinity) => {
                Proximity::FarAbove
            }
            (
                Ordinal::Real { value: a, level: la },
                Ordinal::Real { value: b, level: lb },
            ) => match a.cmp_ordinal(b) {
                Ordering::Equal => {
                    Proximity::from_level_difference(i128::from(*la) - i128::from(*lb))
                }
                Ordering::Less if T::DISCRETE && la == lb && a.is_adjacent_to(b) => {
                    Proximity::Below
                }
                Ordering::Greater if T::DISCRETE && la == lb && b.is_adjacent_to(a) => {
                    Proximity::Above
                }
                Ordering::Less => Proximity::FarBelow,
                Ordering::Greater => Proximity::FarAbove,
            },
        }
    }

    /// `self <= other`, with `NaN` never satisfying it.
    #[inline]
    pub fn is_at_most(&self, other: &Self) -> bool {
        matches!(
            self.proximity(other),
            Proximity::FarBelow | Proximity::Below | Proximity::Equal
        )
    }

    /// Total order used for sorting bounds; `NaN` sorts as equal to
    /// everything and must be filtered out beforehand.
    #[inline]
    pub(crate) fn cmp_bound(&self, other: &Self) -> Ordering {
        self.proximity(other).ordering().unwrap_or(Ordering::Equal)
    }

    /// The larger of two ordinals, `self` on ties.
    pub(crate) fn max_of<'a>(&'a self, other: &'a Self) -> &'a Self {
        match self.proximity(other) {
            Proximity::FarBelow | Proximity::Below => other,
            _ => self,
        }
    }

    /// The smaller of two ordinals, `self` on ties.
    pub(crate) fn min_of<'a>(&'a self, other: &'a Self) -> &'a Self {
        match self.proximity(other) {
            Proximity::Above | Proximity::FarAbove => other,
            _ => self,
        }
    }
}

impl<T> Ordinal<T> {
    #[inline]
    pub fn state(&self) -> OrdinalState {
        match self {
            Ordinal::NaN => OrdinalState::NaN,
            Ordinal::NegativeInfinity => OrdinalState::NegativeInfinity,
            Ordinal::Real { .. } => OrdinalState::Real,
            Ordinal::PositiveInfinity => OrdinalState::PositiveInfinity,
        }
    }

    /// The underlying value of a real ordinal.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Ordinal::Real { value, .. } => Some(value),
            _ => None,
        }
    }

    /// The adjacency level; `0` for sentinels.
    #[inline]
    pub fn level(&self) -> i64 {
        match self {
            Ordinal::Real { level, .. } => *level,
            _ => 0,
        }
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        matches!(self, Ordinal::NaN)
    }

    #[inline]
    pub fn is_real(&self) -> bool {
        matches!(self, Ordinal::Real { .. })
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        matches!(self, Ordinal::NegativeInfinity | Ordinal::PositiveInfinity)
    }
}

impl<T> From<T> for Ordinal<T>
where
    T: OrdinalValue,
{
    #[inline]
    fn from(value: T) -> Self {
        Self::from_value(value)
    }
}

/// Ordinals are equal when [`Ordinal::proximity`] reports
/// [`Proximity::Equal`]; like a float NaN, `NaN` is not equal to itself.
impl<T> PartialEq for Ordinal<T>
where
    T: OrdinalValue,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.proximity(other) == Proximity::Equal
    }
}

impl<T> PartialOrd for Ordinal<T>
where
    T: OrdinalValue,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.proximity(other).ordering()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exacta_bignum::{BigDecimal, BigRational};
    use num_bigint::BigInt;

    fn real<T: OrdinalValue>(value: T, level: i64) -> Ordinal<T> {
        Ordinal::new(value, level)
    }

    #[test]
    fn test_integer_next_folds_immediately() {
        let five = Ordinal::from_value(5i32);
        assert_eq!(five.next(), Ordinal::from_value(6));
        assert_eq!(five.next().level(), 0);
        assert_eq!(five.antecedent().value(), Some(&4));
        assert_eq!(real(5i32, 3).value(), Some(&8));
    }

    #[test]
    fn test_integer_overflow_stays_unfolded() {
        let top = Ordinal::from_value(i8::MAX).next();
        assert_eq!(top.value(), Some(&i8::MAX));
        assert_eq!(top.level(), 1);
        assert_eq!(
            Ordinal::from_value(i8::MAX).proximity(&top),
            Proximity::Below
        );
        assert_eq!(top.antecedent(), Ordinal::from_value(i8::MAX));
    }

    #[test]
    fn test_continuous_levels_are_symbolic() {
        let x = Ordinal::from_value(1.5f64);
        assert_eq!(x.next().value(), Some(&1.5));
        assert_eq!(x.next().level(), 1);
        assert_eq!(x.proximity(&x.next()), Proximity::Below);
        assert_eq!(x.next().proximity(&x.antecedent()), Proximity::FarAbove);
        assert_eq!(x.next().antecedent(), x);
    }

    #[test]
    fn test_discrete_adjacency_and_gaps() {
        let a = Ordinal::from_value(BigInt::from(10));
        let b = Ordinal::from_value(BigInt::from(11));
        let c = Ordinal::from_value(BigInt::from(13));
        assert_eq!(a.proximity(&b), Proximity::Below);
        assert_eq!(b.proximity(&a), Proximity::Above);
        assert_eq!(a.proximity(&c), Proximity::FarBelow);
        assert!(a.proximity(&b).is_around());
        assert!(!a.proximity(&c).is_around());
    }

    #[test]
    fn test_continuous_values_are_never_adjacent() {
        let a = Ordinal::from_value(1.0f64);
        let b = Ordinal::from_value(2.0f64);
        assert_eq!(a.proximity(&b), Proximity::FarBelow);
    }

    #[test]
    fn test_infinity_truth_table() {
        let x = Ordinal::from_value(0i64);
        let pos = Ordinal::<i64>::PositiveInfinity;
        let neg = Ordinal::<i64>::NegativeInfinity;
        assert_eq!(pos.proximity(&pos), Proximity::Equal);
        assert_eq!(neg.proximity(&neg), Proximity::Equal);
        assert_eq!(x.proximity(&pos), Proximity::FarBelow);
        assert_eq!(neg.proximity(&x), Proximity::FarBelow);
        assert_eq!(neg.proximity(&pos), Proximity::FarBelow);
        assert_eq!(pos.proximity(&neg), Proximity::FarAbove);
    }

    #[test]
    fn test_nan_is_incomparable() {
        let nan = Ordinal::<f64>::NaN;
        let one = Ordinal::from_value(1.0);
        assert_eq!(nan.proximity(&one), Proximity::Incomparable);
        assert_eq!(nan.proximity(&nan), Proximity::Incomparable);
        assert_eq!(Proximity::Incomparable.code(), 0);
        assert!(!Proximity::Incomparable.is_around());
        assert_ne!(nan, nan.clone());
        assert_eq!(nan.partial_cmp(&one), None);
    }

    #[test]
    fn test_sentinel_values_lift_to_states() {
        assert!(Ordinal::from_value(f64::NAN).is_nan());
        assert_eq!(
            Ordinal::from_value(f64::INFINITY).state(),
            OrdinalState::PositiveInfinity
        );
        assert_eq!(
            Ordinal::from_value(BigRational::neg_infinity()).state(),
            OrdinalState::NegativeInfinity
        );
        assert_eq!(Ordinal::<i32>::PositiveInfinity.next().state(), OrdinalState::PositiveInfinity);
        assert_eq!(Ordinal::<i32>::NaN.level(), 0);
    }

    #[test]
    fn test_level_gap_codes() {
        let x = 7.0f32;
        assert_eq!(real(x, 0).proximity(&real(x, 2)), Proximity::FarBelow);
        assert_eq!(real(x, 1).proximity(&real(x, -1)).code(), 2);
        assert_eq!(real(x, i64::MAX).proximity(&real(x, i64::MIN)), Proximity::FarAbove);
    }

    #[test]
    fn test_bounds_around_excluded_point_are_far() {
        // End of [0, 1) against start of (1, 2].
        let end = real(1.0f64, -1);
        let start = real(1.0f64, 1);
        assert_eq!(end.proximity(&start), Proximity::FarBelow);
        assert!(!end.proximity(&start).is_around());
        assert_eq!(end.proximity(&real(1.0f64, 0)), Proximity::Below);
    }

    #[test]
    fn test_decimal_scale_does_not_matter() {
        let a = Ordinal::from_value(BigDecimal::new(5, 1));
        let b = Ordinal::from_value(BigDecimal::new(50, 2));
        assert_eq!(a, b);
    }

    #[test]
    fn test_min_max() {
        let a = Ordinal::from_value(1i32);
        let b = Ordinal::from_value(4i32);
        assert_eq!(a.max_of(&b), &b);
        assert_eq!(b.min_of(&a), &a);
        assert_eq!(a.max_of(&Ordinal::PositiveInfinity), &Ordinal::PositiveInfinity);
    }

    #[test]
    fn test_proximity_reverse() {
        for p in [
            Proximity::FarBelow,
            Proximity::Below,
            Proximity::Equal,
            Proximity::Above,
            Proximity::FarAbove,
        ] {
            assert_eq!(p.reverse().code(), -p.code());
            assert_eq!(p.reverse().reverse(), p);
        }
    }
}
