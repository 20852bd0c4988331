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

//! Enumeration of the elements of an interval.

use crate::{
    interval::Interval,
    ordinal::{Discrete, Ordinal, OrdinalValue},
    range::Range,
};
use exacta_core::{Error, Result};
use std::{cmp::Ordering, iter::FusedIterator, ops::Add};

/// Ascending iterator over every element of a discrete interval.
///
/// Produced by [`Interval::numbers`]. The iterator owns its clipped ranges,
/// so it can be cloned to restart from the current position.
#[derive(Debug, Clone)]
pub struct Numbers<T> {
    ranges: Vec<Range<T>>,
    index: usize,
    cursor: Option<T>,
}

/// First representable value at or above `start`.
fn first_value<T: Discrete>(start: &Ordinal<T>) -> Option<T> {
    match start {
        // A negative level only survives folding below the minimum, so the
        // minimum itself comes first.
        Ordinal::Real { value, level } if *level <= 0 => Some(value.clone()),
        _ => None,
    }
}

impl<T> Iterator for Numbers<T>
where
    T: Discrete,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            let range = self.ranges.get(self.index)?;
            let candidate = match self.cursor.take() {
                Some(value) => Some(value),
                None => first_value(range.start()),
            };
            if let Some(value) = candidate {
                if Ordinal::from_value(value.clone()).is_at_most(range.end()) {
                    self.cursor = value.checked_step(1);
                    if self.cursor.is_none() {
                        self.index += 1;
                    }
                    return Some(value);
                }
            }
            self.index += 1;
        }
    }
}

impl<T> FusedIterator for Numbers<T> where T: Discrete {}

/// Ascending iterator over the points of a fixed grid that fall inside an
/// interval.
///
/// Produced by [`Interval::numbers_by`].
#[derive(Debug, Clone)]
pub struct SteppedNumbers<T> {
    interval: Interval<T>,
    cursor: Option<T>,
    end: T,
    step: T,
}

impl<T> Iterator for SteppedNumbers<T>
where
    T: OrdinalValue,
    for<'a> &'a T: Add<&'a T, Output = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        while let Some(value) = self.cursor.take() {
            if value.cmp_ordinal(&self.end) == Ordering::Greater {
                return None;
            }
            let advanced = &value + &self.step;
            if advanced.cmp_ordinal(&value) == Ordering::Greater {
                self.cursor = Some(advanced);
            }
            if self.interval.contains(&value) {
                return Some(value);
            }
        }
        None
    }
}

impl<T> FusedIterator for SteppedNumbers<T>
where
    T: OrdinalValue,
    for<'a> &'a T: Add<&'a T, Output = T>,
{
}

impl<T> Interval<T>
where
    T: OrdinalValue,
{
    /// Lazily enumerates every element of the interval within
    /// `[start, end]`, in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_interval::{Interval, Range};
    /// let set = Interval::from(Range::closed(1, 3)) | Interval::from(Range::open(6, 9));
    /// let all: Vec<i32> = set.numbers(0, 100).collect();
    /// assert_eq!(all, vec![1, 2, 3, 7, 8]);
    ///
    /// let naturals: Vec<i64> = Interval::positive_reals().numbers(-5, 4).collect();
    /// assert_eq!(naturals, vec![0, 1, 2, 3, 4]);
    /// ```
    pub fn numbers(&self, start: T, end: T) -> Numbers<T>
    where
        T: Discrete,
    {
        let clipped = self.intersection(&Range::closed(start, end).into());
        Numbers {
            ranges: clipped.ranges().to_vec(),
            index: 0,
            cursor: None,
        }
    }

    /// Enumerates the grid `start, start + step, start + 2·step, ...` up to
    /// `end`, keeping the points that lie in the interval. Meant for
    /// continuous domains, where elements cannot be listed one by one.
    ///
    /// Enumeration also stops once adding `step` no longer increases the
    /// value, as happens with floats of large magnitude.
    ///
    /// # Errors
    ///
    /// [`Error::Domain`] if `step` is not strictly positive or if `start` or
    /// `end` is not a real value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_interval::{Interval, Range};
    /// let set = Interval::from(Range::open(0.0, 1.0));
    /// let points: Vec<f64> = set.numbers_by(0.0, 2.0, 0.25).unwrap().collect();
    /// assert_eq!(points, vec![0.25, 0.5, 0.75]);
    /// ```
    pub fn numbers_by(&self, start: T, end: T, step: T) -> Result<SteppedNumbers<T>>
    where
        for<'a> &'a T: Add<&'a T, Output = T>,
    {
        let is_real = |value: &T| Ordinal::from_value(value.clone()).is_real();
        if !is_real(&start) || !is_real(&end) {
            return Err(Error::Domain("enumeration bounds must be real"));
        }
        if !is_real(&step) || step.cmp_ordinal(&T::origin()) != Ordering::Greater {
            return Err(Error::Domain("enumeration step must be positive"));
        }
        Ok(SteppedNumbers {
            interval: self.clone(),
            cursor: Some(start),
            end,
            step,
        })
    }
}
