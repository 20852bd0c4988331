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

use crate::ordinal::{Ordinal, OrdinalValue, Proximity};
use smallvec::SmallVec;

/// A single contiguous interval between two ordinals.
///
/// Openness is encoded in the stored bounds: an open start is the start
/// value advanced by one adjacency step, an open end is the end value moved
/// back by one. Over the integers `]1;5[` is therefore stored as `⟦2;4⟧`.
///
/// # Invariants
///
/// Either both bounds are `NaN` (the canonical empty range) or `start <= end`
/// in ordinal order. Constructing a range whose start lies above its end does
/// not fail: it yields the empty range.
///
/// # Examples
///
/// ```rust
/// # use exacta_interval::Range;
/// let r = Range::closed(1, 5);
/// assert!(r.contains(&5));
/// assert!(!Range::open(1, 5).contains(&5));
///
/// assert!(Range::closed(5, 1).is_empty());
/// assert!(Range::closed(3, 3).is_single());
/// ```
#[derive(Debug, Clone)]
pub struct Range<T> {
    start: Ordinal<T>,
    end: Ordinal<T>,
}

impl<T> Range<T>
where
    T: OrdinalValue,
{
    /// Builds a range from raw bounds, normalizing to empty when the bounds
    /// are inverted, `NaN`, or both on the same infinite side.
    pub fn new(start: Ordinal<T>, end: Ordinal<T>) -> Self {
        let inverted = matches!(
            start.proximity(&end),
            Proximity::Above | Proximity::FarAbove | Proximity::Incomparable
        );
        let unreachable = matches!(start, Ordinal::PositiveInfinity)
            || matches!(end, Ordinal::NegativeInfinity);
        if inverted || unreachable {
            return Self::empty();
        }
        Self { start, end }
    }

    /// The canonical empty range.
    #[inline]
    pub fn empty() -> Self {
        Self {
            start: Ordinal::NaN,
            end: Ordinal::NaN,
        }
    }

    /// `(-∞, +∞)`.
    #[inline]
    pub fn all() -> Self {
        Self {
            start: Ordinal::NegativeInfinity,
            end: Ordinal::PositiveInfinity,
        }
    }

    /// `[start, end]`.
    #[inline]
    pub fn closed(start: T, end: T) -> Self {
        Self::new(Ordinal::from_value(start), Ordinal::from_value(end))
    }

    /// `(start, end)`.
    #[inline]
    pub fn open(start: T, end: T) -> Self {
        Self::new(
            Ordinal::from_value(start).next(),
            Ordinal::from_value(end).antecedent(),
        )
    }

    /// `[start, end)`.
    #[inline]
    pub fn closed_open(start: T, end: T) -> Self {
        Self::new(
            Ordinal::from_value(start),
            Ordinal::from_value(end).antecedent(),
        )
    }

    /// `(start, end]`.
    #[inline]
    pub fn open_closed(start: T, end: T) -> Self {
        Self::new(Ordinal::from_value(start).next(), Ordinal::from_value(end))
    }

    /// `[value, value]`.
    #[inline]
    pub fn single(value: T) -> Self {
        Self::closed(value.clone(), value)
    }

    /// `[start, +∞)`.
    #[inline]
    pub fn at_least(start: T) -> Self {
        Self::new(Ordinal::from_value(start), Ordinal::PositiveInfinity)
    }

    /// `(start, +∞)`.
    #[inline]
    pub fn greater_than(start: T) -> Self {
        Self::new(Ordinal::from_value(start).next(), Ordinal::PositiveInfinity)
    }

    /// `(-∞, end]`.
    #[inline]
    pub fn at_most(end: T) -> Self {
        Self::new(Ordinal::NegativeInfinity, Ordinal::from_value(end))
    }

    /// `(-∞, end)`.
    #[inline]
    pub fn less_than(end: T) -> Self {
        Self::new(
            Ordinal::NegativeInfinity,
            Ordinal::from_value(end).antecedent(),
        )
    }

    #[inline]
    pub fn start(&self) -> &Ordinal<T> {
        &self.start
    }

    #[inline]
    pub fn end(&self) -> &Ordinal<T> {
        &self.end
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start.is_nan()
    }

    /// `true` when the range holds exactly one point.
    #[inline]
    pub fn is_single(&self) -> bool {
        !self.is_empty() && self.start.proximity(&self.end) == Proximity::Equal
    }

    /// `true` for `(-∞, +∞)`.
    #[inline]
    pub fn is_all(&self) -> bool {
        matches!(
            (&self.start, &self.end),
            (Ordinal::NegativeInfinity, Ordinal::PositiveInfinity)
        )
    }

    /// Tests whether a real value lies inside the range. Sentinel values
    /// are never contained.
    pub fn contains(&self, value: &T) -> bool {
        let point = Ordinal::from_value(value.clone());
        point.is_real() && self.start.is_at_most(&point) && point.is_at_most(&self.end)
    }

    /// Tests whether every point of `other` lies inside `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        if other.is_empty() {
            return true;
        }
        !self.is_empty() && self.start.is_at_most(&other.start) && other.end.is_at_most(&self.end)
    }

    /// The overlap of two ranges, possibly empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_interval::Range;
    /// let r = Range::closed(1.0, 5.0).intersect(&Range::open(3.0, 9.0));
    /// assert!(!r.contains(&3.0));
    /// assert!(r.contains(&5.0));
    /// assert!(Range::closed(1, 2).intersect(&Range::closed(3, 4)).is_empty());
    /// ```
    pub fn intersect(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::empty();
        }
        Self::new(
            self.start.max_of(&other.start).clone(),
            self.end.min_of(&other.end).clone(),
        )
    }

    /// Returns `true` if the two ranges overlap or touch, so that their union
    /// is a single range.
    pub fn is_mergeable_with(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let (lower, upper) = if self.start.cmp_bound(&other.start).is_le() {
            (self, other)
        } else {
            (other, self)
        };
        lower.end.proximity(&upper.start) != Proximity::FarBelow
    }

    /// The parts of the domain outside the range: up to two unbounded tails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_interval::Range;
    /// let tails = Range::closed(0, 10).complement();
    /// assert_eq!(tails.len(), 2);
    /// assert!(tails[0].contains(&-1) && !tails[0].contains(&0));
    /// assert!(tails[1].contains(&11) && !tails[1].contains(&10));
    /// ```
    pub fn complement(&self) -> SmallVec<[Self; 2]> {
        let mut tails = SmallVec::new();
        if self.is_empty() {
            tails.push(Self::all());
            return tails;
        }
        if !matches!(self.start, Ordinal::NegativeInfinity) {
            let lower = Self::new(Ordinal::NegativeInfinity, self.start.antecedent());
            if !lower.is_empty() {
                tails.push(lower);
            }
        }
        if !matches!(self.end, Ordinal::PositiveInfinity) {
            let upper = Self::new(self.end.next(), Ordinal::PositiveInfinity);
            if !upper.is_empty() {
                tails.push(upper);
            }
        }
        tails
    }
}

/// Structural equality on the normalized bounds; all empty ranges are equal.
impl<T> PartialEq for Range<T>
where
    T: OrdinalValue,
{
    fn eq(&self, other: &Self) -> bool {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => true,
            (false, false) => self.start == other.start && self.end == other.end,
            _ => false,
        }
    }
}

impl<T> Default for Range<T>
where
    T: OrdinalValue,
{
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}
