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

use crate::{
    ordinal::{OrdinalValue, Proximity},
    range::Range,
};

/// A union of at least two disjoint ranges.
///
/// # Invariants
///
/// Members are non-empty, sorted by start, and pairwise separated by a real
/// gap: no two members overlap or touch. A `MultiRange` is only produced by
/// [`Interval::from_ranges`](crate::Interval::from_ranges), which demotes
/// unions of zero or one range to a plain [`Range`].
#[derive(Debug, Clone)]
pub struct MultiRange<T> {
    ranges: Vec<Range<T>>,
}

impl<T> MultiRange<T>
where
    T: OrdinalValue,
{
    /// Wraps ranges that already satisfy the type invariants.
    #[inline]
    pub(crate) fn from_normalized(ranges: Vec<Range<T>>) -> Self {
        debug_assert!(ranges.len() >= 2);
        debug_assert!(is_normalized(&ranges));
        Self { ranges }
    }

    #[inline]
    pub fn ranges(&self) -> &[Range<T>] {
        &self.ranges
    }

    /// Number of member ranges; always at least two.
    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Range<T>> {
        self.ranges.iter()
    }

    pub fn contains(&self, value: &T) -> bool {
        self.ranges.iter().any(|range| range.contains(value))
    }

    #[inline]
    pub fn into_ranges(self) -> Vec<Range<T>> {
        self.ranges
    }
}

impl<'a, T> IntoIterator for &'a MultiRange<T>
where
    T: OrdinalValue,
{
    type Item = &'a Range<T>;
    type IntoIter = std::slice::Iter<'a, Range<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> PartialEq for MultiRange<T>
where
    T: OrdinalValue,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ranges == other.ranges
    }
}

/// Drops empty ranges, sorts the rest by start, and fuses every pair that
/// overlaps or touches.
pub(crate) fn normalize<T, I>(ranges: I) -> Vec<Range<T>>
where
    T: OrdinalValue,
    I: IntoIterator<Item = Range<T>>,
{
    let mut ranges: Vec<Range<T>> = ranges.into_iter().filter(|r| !r.is_empty()).collect();
    ranges.sort_by(|a, b| a.start().cmp_bound(b.start()));

    let mut fused: Vec<Range<T>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match fused.last_mut() {
            Some(last) if last.is_mergeable_with(&range) => {
                let end = last.end().max_of(range.end()).clone();
                *last = Range::new(last.start().clone(), end);
            }
            _ => fused.push(range),
        }
    }
    fused
}

/// Checks the member invariants of a `MultiRange`.
pub(crate) fn is_normalized<T>(ranges: &[Range<T>]) -> bool
where
    T: OrdinalValue,
{
    ranges.iter().all(|r| !r.is_empty())
        && ranges
            .windows(2)
            .all(|pair| pair[0].end().proximity(pair[1].start()) == Proximity::FarBelow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_sorts_and_fuses() {
        let ranges = normalize(vec![
            Range::closed(10, 12),
            Range::closed(1, 3),
            Range::closed(4, 5),
            Range::empty(),
            Range::closed(2, 2),
        ]);
        assert_eq!(ranges, vec![Range::closed(1, 5), Range::closed(10, 12)]);
        assert!(is_normalized(&ranges));
    }

    #[test]
    fn test_normalize_keeps_gaps() {
        let ranges = normalize(vec![Range::closed(6, 8), Range::closed(1, 3)]);
        assert_eq!(ranges, vec![Range::closed(1, 3), Range::closed(6, 8)]);
    }

    #[test]
    fn test_normalize_continuous_touching() {
        let ranges = normalize(vec![
            Range::closed_open(0.0, 1.0),
            Range::closed(1.0, 2.0),
            Range::open(2.0, 3.0),
            Range::open_closed(3.0, 4.0),
        ]);
        assert_eq!(
            ranges,
            vec![Range::closed_open(0.0, 3.0), Range::open_closed(3.0, 4.0)]
        );
    }

    #[test]
    fn test_normalize_contained_range() {
        let ranges = normalize(vec![Range::closed(0, 100), Range::closed(5, 6)]);
        assert_eq!(ranges, vec![Range::closed(0, 100)]);
    }

    #[test]
    fn test_normalize_unbounded() {
        let ranges = normalize(vec![Range::at_least(3), Range::at_most(2)]);
        assert_eq!(ranges, vec![Range::all()]);
    }

    #[test]
    fn test_normalized_members_are_not_mergeable() {
        let ranges = normalize(vec![
            Range::closed_open(0.0, 1.0),
            Range::open_closed(1.0, 2.0),
            Range::closed(2.0, 2.5),
            Range::open(3.0, 4.0),
        ]);
        assert_eq!(ranges.len(), 3);
        assert!(ranges
            .windows(2)
            .all(|pair| !pair[0].is_mergeable_with(&pair[1])));
    }

    #[test]
    fn test_multi_range_accessors() {
        let multi = MultiRange::from_normalized(normalize(vec![
            Range::closed(1, 3),
            Range::closed(6, 8),
        ]));
        assert_eq!(multi.len(), 2);
        assert!(multi.contains(&7));
        assert!(!multi.contains(&4));
        assert_eq!(multi.iter().count(), 2);
        assert_eq!((&multi).into_iter().next(), Some(&Range::closed(1, 3)));
    }
}
