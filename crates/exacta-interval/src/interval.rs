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

//! The interval sum type and its set algebra.
//!
//! [`Interval`] is either a single (possibly empty) [`Range`] or a
//! [`MultiRange`]. Every operation returns a freshly normalized interval, so
//! a union that collapses to one range is always represented as a `Range`.

use crate::{
    multi_range::{normalize, MultiRange},
    ordinal::{Ordinal, OrdinalValue},
    range::Range,
};
use std::{
    cmp::Ordering,
    ops::{BitAnd, BitOr, BitXor, Not, Sub},
};

/// A subset of the domain `T` made of finitely many disjoint ranges.
///
/// # Examples
///
/// ```rust
/// # use exacta_interval::{Interval, Range};
/// let merged = Interval::from(Range::closed(1, 5)) | Interval::from(Range::closed(3, 8));
/// assert_eq!(merged, Interval::from(Range::closed(1, 8)));
///
/// let split = Interval::from(Range::closed(1, 3)) | Interval::from(Range::closed(6, 8));
/// assert_eq!(split.ranges().len(), 2);
///
/// assert!((&split & &!&split).is_empty());
/// ```
#[derive(Debug, Clone)]
pub enum Interval<T> {
    Range(Range<T>),
    Multi(MultiRange<T>),
}

impl<T> Interval<T>
where
    T: OrdinalValue,
{
    /// Normalizes any collection of ranges into an interval.
    ///
    /// Empty ranges are dropped, the rest sorted and fused where they
    /// overlap or touch. Zero survivors give the empty set and one survivor
    /// gives a plain range.
    pub fn from_ranges<I>(ranges: I) -> Self
    where
        I: IntoIterator<Item = Range<T>>,
    {
        let mut fused = normalize(ranges);
        tracing::trace!(ranges = fused.len(), "normalized interval");
        match fused.len() {
            0 => Interval::Range(Range::empty()),
            1 => Interval::Range(fused.swap_remove(0)),
            _ => Interval::Multi(MultiRange::from_normalized(fused)),
        }
    }

    /// `∅`.
    #[inline]
    pub fn empty() -> Self {
        Interval::Range(Range::empty())
    }

    /// The whole domain, `(-∞, +∞)`.
    #[inline]
    pub fn reals() -> Self {
        Interval::Range(Range::all())
    }

    /// `[0, +∞)`.
    #[inline]
    pub fn positive_reals() -> Self {
        Interval::Range(Range::at_least(T::origin()))
    }

    /// `(-∞, 0]`.
    #[inline]
    pub fn negative_reals() -> Self {
        Interval::Range(Range::at_most(T::origin()))
    }

    /// `(0, +∞)`.
    #[inline]
    pub fn positive_reals_no_zero() -> Self {
        Interval::Range(Range::greater_than(T::origin()))
    }

    /// `(-∞, 0)`.
    #[inline]
    pub fn negative_reals_no_zero() -> Self {
        Interval::Range(Range::less_than(T::origin()))
    }

    /// `(-∞, 0) ∪ (0, +∞)`.
    #[inline]
    pub fn reals_no_zero() -> Self {
        Self::from_ranges([Range::less_than(T::origin()), Range::greater_than(T::origin())])
    }

    /// The member ranges in ascending order; empty for `∅`.
    pub fn ranges(&self) -> &[Range<T>] {
        match self {
            Interval::Range(range) if range.is_empty() => &[],
            Interval::Range(range) => std::slice::from_ref(range),
            Interval::Multi(multi) => multi.ranges(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Interval::Range(range) if range.is_empty())
    }

    #[inline]
    pub fn is_reals(&self) -> bool {
        matches!(self, Interval::Range(range) if range.is_all())
    }

    #[inline]
    pub fn is_positive_reals(&self) -> bool {
        self.is_single_range(&Range::at_least(T::origin()))
    }

    #[inline]
    pub fn is_negative_reals(&self) -> bool {
        self.is_single_range(&Range::at_most(T::origin()))
    }

    #[inline]
    pub fn is_positive_reals_no_zero(&self) -> bool {
        self.is_single_range(&Range::greater_than(T::origin()))
    }

    #[inline]
    pub fn is_negative_reals_no_zero(&self) -> bool {
        self.is_single_range(&Range::less_than(T::origin()))
    }

    pub fn is_reals_no_zero(&self) -> bool {
        match self.ranges() {
            [lower, upper] => {
                *lower == Range::less_than(T::origin()) && *upper == Range::greater_than(T::origin())
            }
            _ => false,
        }
    }

    fn is_single_range(&self, expected: &Range<T>) -> bool {
        matches!(self, Interval::Range(range) if range == expected)
    }

    /// Tests whether a real value belongs to the interval.
    pub fn contains(&self, value: &T) -> bool {
        self.ranges().iter().any(|range| range.contains(value))
    }

    /// Set union.
    pub fn union(&self, other: &Self) -> Self {
        Self::from_ranges(self.ranges().iter().chain(other.ranges()).cloned())
    }

    /// Set intersection: every member of `self` against every member of
    /// `other`.
    pub fn intersection(&self, other: &Self) -> Self {
        let (left, right) = (self.ranges(), other.ranges());
        Self::from_ranges(
            left.iter()
                .flat_map(|a| right.iter().map(move |b| a.intersect(b))),
        )
    }

    /// Everything in the domain outside the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_interval::{Interval, Range};
    /// let zero = Interval::from(Range::single(0.0));
    /// assert!(zero.complement().is_reals_no_zero());
    /// assert!(Interval::<i32>::empty().complement().is_reals());
    /// ```
    pub fn complement(&self) -> Self {
        match self {
            Interval::Range(range) => Self::from_ranges(range.complement()),
            Interval::Multi(multi) => multi.iter().fold(Self::reals(), |acc, range| {
                acc.intersection(&Self::from_ranges(range.complement()))
            }),
        }
    }

    /// `self & !other`.
    #[inline]
    pub fn difference(&self, other: &Self) -> Self {
        self.intersection(&other.complement())
    }

    /// `(self - other) | (other - self)`.
    #[inline]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.difference(other).union(&other.difference(self))
    }

    /// `true` if every point of `other` is in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        other
            .ranges()
            .iter()
            .all(|inner| self.ranges().iter().any(|outer| outer.is_superset(inner)))
    }

    #[inline]
    pub fn is_subset(&self, other: &Self) -> bool {
        other.is_superset(self)
    }

    /// Lowest bound of the interval; `NaN` for `∅`.
    pub fn start(&self) -> Ordinal<T> {
        self.ranges()
            .first()
            .map_or(Ordinal::NaN, |range| range.start().clone())
    }

    /// Highest bound of the interval; `NaN` for `∅`.
    pub fn end(&self) -> Ordinal<T> {
        self.ranges()
            .last()
            .map_or(Ordinal::NaN, |range| range.end().clone())
    }
}

impl<T> From<Range<T>> for Interval<T>
where
    T: OrdinalValue,
{
    #[inline]
    fn from(range: Range<T>) -> Self {
        Interval::Range(range)
    }
}

impl<T> FromIterator<Range<T>> for Interval<T>
where
    T: OrdinalValue,
{
    #[inline]
    fn from_iter<I: IntoIterator<Item = Range<T>>>(iter: I) -> Self {
        Self::from_ranges(iter)
    }
}

impl<T> Default for Interval<T>
where
    T: OrdinalValue,
{
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

/// Set equality: two intervals are equal when their symmetric difference
/// is empty.
impl<T> PartialEq for Interval<T>
where
    T: OrdinalValue,
{
    fn eq(&self, other: &Self) -> bool {
        self.symmetric_difference(other).is_empty()
    }
}

/// Partial order by containment: `a > b` when `a` strictly contains `b`.
/// Intervals where neither contains the other are unordered.
impl<T> PartialOrd for Interval<T>
where
    T: OrdinalValue,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.is_superset(other), other.is_superset(self)) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Greater),
            (false, true) => Some(Ordering::Less),
            (false, false) => None,
        }
    }
}

macro_rules! impl_set_op {
    ($imp:ident, $method:ident, $func:ident) => {
        impl<T: OrdinalValue> $imp<&Interval<T>> for &Interval<T> {
            type Output = Interval<T>;

            #[inline]
            fn $method(self, rhs: &Interval<T>) -> Interval<T> {
                self.$func(rhs)
            }
        }

        impl<T: OrdinalValue> $imp<Interval<T>> for Interval<T> {
            type Output = Interval<T>;

            #[inline]
            fn $method(self, rhs: Interval<T>) -> Interval<T> {
                self.$func(&rhs)
            }
        }

        impl<T: OrdinalValue> $imp<&Interval<T>> for Interval<T> {
            type Output = Interval<T>;

            #[inline]
            fn $method(self, rhs: &Interval<T>) -> Interval<T> {
                self.$func(rhs)
            }
        }

        impl<T: OrdinalValue> $imp<Interval<T>> for &Interval<T> {
            type Output = Interval<T>;

            #[inline]
            fn $method(self, rhs: Interval<T>) -> Interval<T> {
                self.$func(&rhs)
            }
        }
    };
}

impl_set_op!(BitOr, bitor, union);
impl_set_op!(BitAnd, bitand, intersection);
impl_set_op!(Sub, sub, difference);
impl_set_op!(BitXor, bitxor, symmetric_difference);

impl<T: OrdinalValue> Not for &Interval<T> {
    type Output = Interval<T>;

    #[inline]
    fn not(self) -> Interval<T> {
        self.complement()
    }
}

impl<T: OrdinalValue> Not for Interval<T> {
    type Output = Interval<T>;

    #[inline]
    fn not(self) -> Interval<T> {
        self.complement()
    }
}
