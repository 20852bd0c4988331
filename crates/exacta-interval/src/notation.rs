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

//! Textual interval notation.
//!
//! A range is written `[a;b]`, with a bracket turned outwards for an open
//! bound: `]a;b]` excludes `a`, `[a;b[` excludes `b`. Discrete domains use
//! the white brackets `⟦` and `⟧` the same way. Infinite bounds are written
//! `-∞`/`+∞` and always carry the open bracket. Unions are joined with `∪`;
//! the empty set is `∅` and the canonical sets use the domain glyph:
//!
//! | Set | Notation over `f64` |
//! |---|---|
//! | all values | `ℝ` |
//! | `[0, +∞)` | `ℝ+` |
//! | `(-∞, 0]` | `ℝ-` |
//! | `(0, +∞)` | `ℝ+*` |
//! | `(-∞, 0)` | `ℝ-*` |
//! | all but zero | `ℝ*` |
//!
//! Parsing accepts both bracket styles for every domain.

use crate::{
    interval::Interval,
    multi_range::MultiRange,
    ordinal::{Ordinal, OrdinalValue},
    range::Range,
};
use exacta_core::Error;
use std::{
    fmt::{self, Display, Write},
    str::FromStr,
};

const EMPTY_GLYPH: &str = "∅";
const UNION_GLYPH: char = '∪';
const SEPARATOR: char = ';';

struct Brackets {
    closed_start: char,
    open_start: char,
    closed_end: char,
    open_end: char,
}

const CONTINUOUS: Brackets = Brackets {
    closed_start: '[',
    open_start: ']',
    closed_end: ']',
    open_end: '[',
};

const DISCRETE: Brackets = Brackets {
    closed_start: '⟦',
    open_start: '⟧',
    closed_end: '⟧',
    open_end: '⟦',
};

#[inline]
fn brackets<T: OrdinalValue>() -> &'static Brackets {
    if T::DISCRETE {
        &DISCRETE
    } else {
        &CONTINUOUS
    }
}

fn write_start<T>(f: &mut fmt::Formatter<'_>, start: &Ordinal<T>) -> fmt::Result
where
    T: OrdinalValue + Display,
{
    let glyphs = brackets::<T>();
    match start {
        Ordinal::Real { value, level } => {
            let bracket = if *level > 0 {
                glyphs.open_start
            } else {
                glyphs.closed_start
            };
            write!(f, "{bracket}{value}")
        }
        Ordinal::NegativeInfinity => write!(f, "{}-∞", glyphs.open_start),
        Ordinal::PositiveInfinity => write!(f, "{}+∞", glyphs.open_start),
        Ordinal::NaN => f.write_str("NaN"),
    }
}

fn write_end<T>(f: &mut fmt::Formatter<'_>, end: &Ordinal<T>) -> fmt::Result
where
    T: OrdinalValue + Display,
{
    let glyphs = brackets::<T>();
    match end {
        Ordinal::Real { value, level } => {
            let bracket = if *level < 0 {
                glyphs.open_end
            } else {
                glyphs.closed_end
            };
            write!(f, "{value}{bracket}")
        }
        Ordinal::PositiveInfinity => write!(f, "+∞{}", glyphs.open_end),
        Ordinal::NegativeInfinity => write!(f, "-∞{}", glyphs.open_end),
        Ordinal::NaN => f.write_str("NaN"),
    }
}

impl<T> Display for Range<T>
where
    T: OrdinalValue + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str(EMPTY_GLYPH);
        }
        write_start(f, self.start())?;
        f.write_char(SEPARATOR)?;
        write_end(f, self.end())
    }
}

fn write_union<T>(f: &mut fmt::Formatter<'_>, ranges: &[Range<T>]) -> fmt::Result
where
    T: OrdinalValue + Display,
{
    for (i, range) in ranges.iter().enumerate() {
        if i > 0 {
            write!(f, " {UNION_GLYPH} ")?;
        }
        write!(f, "{range}")?;
    }
    Ok(())
}

impl<T> Display for MultiRange<T>
where
    T: OrdinalValue + Display,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_union(f, self.ranges())
    }
}

/// Renders the interval, using the canonical glyphs where they apply.
///
/// # Examples
///
/// ```rust
/// # use exacta_interval::{Interval, Range};
/// let set = Interval::from(Range::closed(1, 3)) | Interval::from(Range::at_least(6));
/// assert_eq!(set.to_string(), "⟦1;3⟧ ∪ ⟦6;+∞⟦");
///
/// let set = Interval::from(Range::closed_open(0.5, 2.0));
/// assert_eq!(set.to_string(), "[0.5;2[");
///
/// assert_eq!(Interval::<f64>::positive_reals_no_zero().to_string(), "ℝ+*");
/// ```
impl<T> Display for Interval<T>
where
    T: OrdinalValue + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = if self.is_empty() {
            return f.write_str(EMPTY_GLYPH);
        } else if self.is_reals() {
            ""
        } else if self.is_positive_reals() {
            "+"
        } else if self.is_negative_reals() {
            "-"
        } else if self.is_positive_reals_no_zero() {
            "+*"
        } else if self.is_negative_reals_no_zero() {
            "-*"
        } else if self.is_reals_no_zero() {
            "*"
        } else {
            return write_union(f, self.ranges());
        };
        write!(f, "{}{suffix}", T::SET_GLYPH)
    }
}

fn parse_bound<T>(text: &str) -> Result<Ordinal<T>, &'static str>
where
    T: OrdinalValue + FromStr,
{
    match text {
        "" => Err("missing bound"),
        "-∞" => Ok(Ordinal::NegativeInfinity),
        "+∞" | "∞" => Ok(Ordinal::PositiveInfinity),
        _ => text
            .parse::<T>()
            .map(Ordinal::from_value)
            .map_err(|_| "invalid bound value"),
    }
}

fn parse_range<T>(text: &str) -> Result<Range<T>, &'static str>
where
    T: OrdinalValue + FromStr,
{
    if text == EMPTY_GLYPH {
        return Ok(Range::empty());
    }
    let mut chars = text.chars();
    let start_open = match chars.next() {
        Some('[' | '⟦') => false,
        Some(']' | '⟧') => true,
        Some(_) => return Err("expected an opening bracket"),
        None => return Err("missing range"),
    };
    let end_open = match chars.next_back() {
        Some(']' | '⟧') => false,
        Some('[' | '⟦') => true,
        _ => return Err("expected a closing bracket"),
    };
    let (start, end) = chars
        .as_str()
        .split_once(SEPARATOR)
        .ok_or("expected `;` between bounds")?;

    let start = parse_bound::<T>(start.trim())?;
    let end = parse_bound::<T>(end.trim())?;
    let start = if start_open { start.next() } else { start };
    let end = if end_open { end.antecedent() } else { end };
    Ok(Range::new(start, end))
}

fn parse_interval<T>(text: &str) -> Result<Interval<T>, &'static str>
where
    T: OrdinalValue + FromStr,
{
    if text.is_empty() {
        return Err("empty input");
    }
    if let Some(suffix) = text.strip_prefix(T::SET_GLYPH) {
        return match suffix.trim() {
            "" => Ok(Interval::reals()),
            "+" => Ok(Interval::positive_reals()),
            "-" => Ok(Interval::negative_reals()),
            "+*" => Ok(Interval::positive_reals_no_zero()),
            "-*" => Ok(Interval::negative_reals_no_zero()),
            "*" => Ok(Interval::reals_no_zero()),
            _ => Err("unknown set suffix"),
        };
    }
    text.split(UNION_GLYPH)
        .map(|part| parse_range(part.trim()))
        .collect::<Result<Vec<_>, _>>()
        .map(Interval::from_ranges)
}

/// Parses the notation produced by [`Display`].
///
/// # Errors
///
/// [`Error::Format`] with kind `"interval"` on malformed input.
///
/// # Examples
///
/// ```rust
/// # use exacta_interval::Interval;
/// let set: Interval<i32> = "⟦1;3⟧ ∪ ]5;8[".parse().unwrap();
/// assert!(set.contains(&3) && !set.contains(&5) && set.contains(&7));
///
/// let set: Interval<f64> = "ℝ*".parse().unwrap();
/// assert!(!set.contains(&0.0));
///
/// assert!("[1;2".parse::<Interval<f64>>().is_err());
/// ```
impl<T> FromStr for Interval<T>
where
    T: OrdinalValue + FromStr,
{
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_interval(input.trim()).map_err(|reason| {
            tracing::debug!(input, reason, "failed to parse interval");
            Error::format("interval", input, reason)
        })
    }
}

/// Parses a single range literal or `∅`.
impl<T> FromStr for Range<T>
where
    T: OrdinalValue + FromStr,
{
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_range(input.trim()).map_err(|reason| {
            tracing::debug!(input, reason, "failed to parse range");
            Error::format("range", input, reason)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exacta_bignum::{BigDecimal, BigRational};

    fn roundtrip<T>(interval: &Interval<T>)
    where
        T: OrdinalValue + Display + FromStr,
    {
        let text = interval.to_string();
        let parsed: Interval<T> = text.parse().unwrap();
        assert_eq!(&parsed, interval, "round trip of {text}");
    }

    #[test]
    fn test_integer_glyphs() {
        let set: Interval<i32> = Range::closed(1, 8).into();
        assert_eq!(set.to_string(), "⟦1;8⟧");
        let set: Interval<i32> = Range::less_than(0).into();
        assert_eq!(set.to_string(), "ℤ-*");
        let set: Interval<i32> = Range::at_most(5).into();
        assert_eq!(set.to_string(), "⟧-∞;5⟧");
    }

    #[test]
    fn test_continuous_glyphs() {
        let set: Interval<f64> = Range::open(1.0, 2.5).into();
        assert_eq!(set.to_string(), "]1;2.5[");
        let set: Interval<f64> = Range::open_closed(-1.5, 0.0).into();
        assert_eq!(set.to_string(), "]-1.5;0]");
        let set: Interval<f64> = Range::greater_than(3.0).into();
        assert_eq!(set.to_string(), "]3;+∞[");
    }

    #[test]
    fn test_canonical_glyphs() {
        assert_eq!(Interval::<f64>::empty().to_string(), "∅");
        assert_eq!(Interval::<f64>::reals().to_string(), "ℝ");
        assert_eq!(Interval::<i64>::positive_reals().to_string(), "ℤ+");
        assert_eq!(Interval::<f32>::negative_reals().to_string(), "ℝ-");
        assert_eq!(Interval::<BigRational>::reals_no_zero().to_string(), "ℚ*");
        assert_eq!(Interval::<BigDecimal>::positive_reals_no_zero().to_string(), "𝔻+*");
    }

    #[test]
    fn test_range_display() {
        assert_eq!(Range::closed(2u8, 4).to_string(), "⟦2;4⟧");
        assert_eq!(Range::<i32>::empty().to_string(), "∅");
        assert_eq!(
            Range::closed(BigRational::new(1, 3), BigRational::new(1, 2)).to_string(),
            "[1/3;1/2]"
        );
    }

    #[test]
    fn test_parse_both_bracket_styles() {
        let a: Interval<i32> = "[1;3]".parse().unwrap();
        let b: Interval<i32> = "⟦1;3⟧".parse().unwrap();
        assert_eq!(a, b);
        let c: Interval<i32> = "]0;4[".parse().unwrap();
        assert_eq!(c, a);
    }

    #[test]
    fn test_parse_union_fuses() {
        let set: Interval<i32> = "⟦1;5⟧ ∪ ⟦3;8⟧".parse().unwrap();
        assert_eq!(set.ranges(), &[Range::closed(1, 8)]);
    }

    #[test]
    fn test_parse_inverted_is_empty() {
        let set: Interval<f64> = "[5;1]".parse().unwrap();
        assert!(set.is_empty());
        let set: Interval<f64> = "∅".parse().unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_parse_errors() {
        let err = "1;2]".parse::<Interval<f64>>().unwrap_err();
        assert_eq!(
            err,
            Error::format("interval", "1;2]", "expected an opening bracket")
        );
        assert_eq!(
            "[1,2]".parse::<Interval<f64>>(),
            Err(Error::format("interval", "[1,2]", "expected `;` between bounds"))
        );
        assert!("[a;2]".parse::<Interval<i32>>().is_err());
        assert!("[1;]".parse::<Interval<i32>>().is_err());
        assert!("".parse::<Interval<i32>>().is_err());
        assert!("ℤ?".parse::<Interval<i32>>().is_err());
        assert!("[1;2] ∪".parse::<Interval<i32>>().is_err());
    }

    #[test]
    fn test_parse_range() {
        let r: Range<f64> = "]-∞;0[".parse().unwrap();
        assert_eq!(r, Range::less_than(0.0));
        assert!("ℝ".parse::<Range<f64>>().is_err());
    }

    #[test]
    fn test_round_trips() {
        roundtrip(&(Interval::from(Range::closed(1, 3)) | Interval::from(Range::open(6, 9))));
        roundtrip(&Interval::<i32>::reals_no_zero());
        roundtrip(&(Interval::from(Range::closed_open(0.0, 1.0)) | Interval::from(Range::at_least(2.5))));
        roundtrip(&Interval::from(Range::single(BigRational::new(-7, 3))));
        roundtrip(&Interval::from(Range::open(BigDecimal::new(15, 1), BigDecimal::new(2, 0))));
        roundtrip(&Interval::<f64>::empty());
    }
}
