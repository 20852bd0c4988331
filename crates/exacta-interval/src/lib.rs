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

//! # Exacta Interval
//!
//! Intervals over ordered domains with exact open and closed bounds.
//!
//! ## Modules
//!
//! - `ordinal`: `Ordinal<T>`, a value plus an adjacency level with `NaN` and
//!   `±∞` sentinels, and `OrdinalValue`, the per-domain trait implemented for
//!   primitive integers, `BigInt`, floats, `BigRational` and `BigDecimal`.
//! - `range`: `Range<T>`, one contiguous interval with its open/closed
//!   constructors (`closed`, `open`, `closed_open`, `open_closed`, ...).
//! - `multi_range`: `MultiRange<T>`, a normalized union of disjoint ranges.
//! - `interval`: `Interval<T>`, the sum of the two, with union (`|`),
//!   intersection (`&`), difference (`-`), symmetric difference (`^`),
//!   complement (`!`), set equality and the containment partial order.
//! - `numbers`: lazy enumeration of the elements of an interval.
//! - `notation`: `Display`/`FromStr` for the bracket notation, e.g.
//!   `⟦1;3⟧ ∪ ⟦6;+∞⟦` or `]0;1]`.
//!
//! Inverted bounds never fail: they produce the empty range.

pub mod interval;
pub mod multi_range;
mod notation;
pub mod numbers;
pub mod ordinal;
pub mod range;

pub use interval::Interval;
pub use multi_range::MultiRange;
pub use numbers::{Numbers, SteppedNumbers};
pub use ordinal::{Discrete, Ordinal, OrdinalState, OrdinalValue, Proximity};
pub use range::Range;
