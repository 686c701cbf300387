// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Partial time points and the spans between them.
//!
//! A [`Point`] is a contiguous run of calendar elements on either the
//! Gregorian sequence (year, month, day) or the ISO week sequence (year,
//! week, weekday), followed by hour, minute and second. Points without a
//! year recur every year; comparing them may therefore depend on the year,
//! which is reported through [`Outcome`].
//!
//! ```
//! use tempora_core::{Point, Span, SpanContain, Outcome};
//!
//! let span: Span = "@2022-03-01_2022-03-31@".parse().unwrap();
//! let start: Point = "2022-01-01".parse().unwrap();
//! let end: Point = "2022-12-31".parse().unwrap();
//! assert_eq!(
//!     span.classify(&start, &end).unwrap(),
//!     Outcome::Definite(SpanContain::Inside)
//! );
//! ```

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::missing_panics_doc)]

mod compare;
mod config;
mod containment;
mod element;
mod error;
mod occurrence;
mod outcome;
mod point;
pub mod sequence;
mod span;

pub use tempora_units::Unit;

pub use crate::compare::{compare, compare_with};
pub use crate::config::{Config, ConfigError};
pub use crate::containment::{RangePosition, SpanContain};
pub use crate::element::{Element, ElementError};
pub use crate::error::ErrorKind;
pub use crate::occurrence::{OccurrenceError, Occurrences};
pub use crate::outcome::{Comparison, Outcome, intersect_years};
pub use crate::point::{Point, PointError};
pub use crate::sequence::{
    OverUnder, Sequence, SequenceCombination, SequenceError, Sorted, over_under,
    sequence_of, sort_by_sequence, validate_ordered,
};
pub use crate::span::{Edge, Span, SpanError, SpanKind};
