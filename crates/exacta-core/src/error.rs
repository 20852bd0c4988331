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

//! Error taxonomy for exacta.
//!
//! All operations in the workspace are synchronous and pure: they either return
//! a value or fail atomically with one of the variants below. Inverted interval
//! bounds are deliberately *not* an error; they normalize to the empty set.

use thiserror::Error;

/// The error type shared by the exacta crates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A numeric or interval literal could not be parsed.
    #[error("invalid {kind} literal `{input}`: {reason}")]
    Format {
        /// What was being parsed, e.g. `"decimal"` or `"interval"`.
        kind: &'static str,
        /// The offending input.
        input: String,
        /// A short description of what went wrong.
        reason: &'static str,
    },
    /// A value does not fit into the requested target.
    #[error("value out of range for {target}")]
    Overflow {
        /// The name of the target type or limit, e.g. `"i32"`.
        target: &'static str,
    },
    /// The operation is mathematically undefined for its operands.
    #[error("undefined operation: {0}")]
    Domain(&'static str),
}

impl Error {
    /// Shorthand for building an [`Error::Format`].
    pub fn format(kind: &'static str, input: impl Into<String>, reason: &'static str) -> Self {
        Self::Format {
            kind,
            input: input.into(),
            reason,
        }
    }

    /// Shorthand for building an [`Error::Overflow`].
    #[inline]
    pub const fn overflow(target: &'static str) -> Self {
        Self::Overflow { target }
    }
}

/// Result alias used throughout exacta.
pub type Result<T> = std::result::Result<T, Error>;
