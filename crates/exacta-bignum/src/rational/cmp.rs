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

use super::{BigRational, RationalKind};
use std::cmp::Ordering;

impl BigRational {
    /// Orders two values by cross-multiplying denominators.
    ///
    /// Returns `None` when exactly one side is NaN. NaN is equal to NaN, in
    /// keeping with the structural equality of the sentinel encoding.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_bignum::BigRational;
    /// # use std::cmp::Ordering;
    /// let a = BigRational::new(2, 3);
    /// let b = BigRational::new(3, 4);
    /// assert_eq!(a.compare(&b), Some(Ordering::Less));
    /// assert_eq!(BigRational::infinity().compare(&b), Some(Ordering::Greater));
    /// assert_eq!(BigRational::nan().compare(&b), None);
    /// ```
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        use RationalKind::*;
        match (self.kind(), other.kind()) {
            (NaN, NaN) => Some(Ordering::Equal),
            (NaN, _) | (_, NaN) => None,
            (Finite, Finite) => Some((&self.numer * &other.denom).cmp(&(&other.numer * &self.denom))),
            (a, b) => Some(rank(a).cmp(&rank(b))),
        }
    }
}

// Position of the non-NaN states on the extended line; only consulted when at
// least one side is infinite.
fn rank(kind: RationalKind) -> i8 {
    match kind {
        RationalKind::NegativeInfinity => -1,
        RationalKind::PositiveInfinity => 1,
        RationalKind::Finite | RationalKind::NaN => 0,
    }
}

impl PartialOrd for BigRational {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64, d: i64) -> BigRational {
        BigRational::new(n, d)
    }

    #[test]
    fn test_finite_ordering() {
        assert!(r(1, 3) < r(1, 2));
        assert!(r(-1, 2) < r(-1, 3));
        assert!(r(7, 2) > r(3, 1));
        assert_eq!(r(2, 4).partial_cmp(&r(1, 2)), Some(Ordering::Equal));
    }

    #[test]
    fn test_infinities_bracket_finite_values() {
        let inf = BigRational::infinity();
        let ninf = BigRational::neg_infinity();
        assert!(ninf < r(-1_000_000, 1));
        assert!(inf > r(1_000_000, 1));
        assert!(ninf < inf);
        assert_eq!(inf.partial_cmp(&inf), Some(Ordering::Equal));
        assert_eq!(ninf.partial_cmp(&ninf), Some(Ordering::Equal));
    }

    #[test]
    fn test_nan_is_unordered() {
        let nan = BigRational::nan();
        assert_eq!(nan.partial_cmp(&r(0, 1)), None);
        assert_eq!(BigRational::infinity().partial_cmp(&nan), None);
        assert!(!(nan < r(1, 1)));
        assert!(!(nan > r(1, 1)));
        assert_eq!(nan.partial_cmp(&BigRational::nan()), Some(Ordering::Equal));
    }
}
