// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Broad category shared by every error of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed constructor input
    Argument,

    /// Well-formed input describing an instant that cannot exist
    Creation,

    /// Text that does not follow the point or span grammar
    StringParse,

    /// Two values that cannot be ordered
    NotComparable,

    /// Bounds that collapse into a single instant
    NotSpan,

    /// A pattern and bounding period that cannot produce occurrences
    Occurrence,
}

impl ErrorKind {
    /// Name of the category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ErrorKind::Argument => "argument",
            ErrorKind::Creation => "creation",
            ErrorKind::StringParse => "string parse",
            ErrorKind::NotComparable => "not comparable",
            ErrorKind::NotSpan => "not span",
            ErrorKind::Occurrence => "occurrence",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}
