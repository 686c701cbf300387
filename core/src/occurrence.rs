// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Concrete occurrences of a partial point inside a bounding period.
//!
//! The units above the pattern that both bounds carry are enumerated like
//! an odometer, from the lower bound's values to the upper bound's. Each
//! step is joined with the pattern's start-filled values into a full-depth
//! point. Steps that do not exist in the calendar, such as a 31st in a
//! 30-day month, are skipped, as are leaves outside the filled bounds.

use std::cmp::Ordering;
use std::iter::FusedIterator;

use tempora_units::calendar::{Context, max_value, min_value};
use tempora_units::{Unit, join_units};

use crate::sequence::Sequence;
use crate::{Comparison, ErrorKind, Point, PointError, Span, SpanError, SpanKind, compare};

/// Errors raised while enumerating occurrences
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OccurrenceError {
    /// The pattern already starts at the year
    #[error("Pattern {pattern} has no units above it to enumerate")]
    NoOverUnits {
        /// The pattern
        pattern: String,
    },

    /// The bounds do not carry the units just above the pattern
    #[error(
        "Period bounds must share units {}, they share {}",
        join_units(.required),
        join_units(.shared)
    )]
    MissingUnits {
        /// Units the bounds must carry
        required: Vec<Unit>,
        /// Units above the pattern both bounds carry
        shared: Vec<Unit>,
    },

    /// The lower bound is not before the upper bound
    #[error("Start values must be less than end values: {start} and {end}")]
    NonIncreasingPeriod {
        /// Lower bound
        start: String,
        /// Upper bound
        end: String,
    },

    /// A bound could not be prepared
    #[error(transparent)]
    Point(#[from] PointError),
}

impl OccurrenceError {
    /// Category of the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            OccurrenceError::NoOverUnits { .. }
            | OccurrenceError::MissingUnits { .. }
            | OccurrenceError::NonIncreasingPeriod { .. } => ErrorKind::Occurrence,
            OccurrenceError::Point(err) => err.kind(),
        }
    }
}

/// Lazy iterator over the occurrences of a pattern, in ascending order.
#[derive(Debug, Clone)]
pub struct Occurrences {
    sequence: Sequence,
    first: usize,
    dims: Vec<Unit>,
    tail: Vec<u16>,
    current: Option<Vec<u16>>,
    upper: Vec<u16>,
    lower_bound: Point,
    upper_bound: Point,
}

impl Occurrences {
    /// Prepare the occurrences of `pattern` between `start` and `end`.
    ///
    /// ## Errors
    /// Fails with an [`ErrorKind::Occurrence`] error when the pattern starts
    /// at the year, when the bounds do not both carry the two units just
    /// above the pattern, or when the lower bound is not before the upper
    /// bound.
    pub fn new(pattern: &Point, start: &Point, end: &Point) -> Result<Self, OccurrenceError> {
        let over = pattern.over_units();
        if over.is_empty() {
            return Err(OccurrenceError::NoOverUnits {
                pattern: pattern.to_string(),
            });
        }

        let shared = over
            .iter()
            .filter(|unit| start.value(**unit).is_some() && end.value(**unit).is_some())
            .copied()
            .collect::<Vec<_>>();
        let required = over.get(over.len().saturating_sub(2)..).unwrap_or_default();
        if !required.iter().all(|unit| shared.contains(unit)) {
            return Err(OccurrenceError::MissingUnits {
                required: required.to_vec(),
                shared,
            });
        }

        // Bounds are contiguous, so the shared units run up to the pattern
        let dims = shared;
        let lower = dims.iter().filter_map(|u| start.value(*u)).collect::<Vec<_>>();
        let upper = dims.iter().filter_map(|u| end.value(*u)).collect::<Vec<_>>();
        if lower >= upper {
            return Err(OccurrenceError::NonIncreasingPeriod {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        let sequence = pattern.sequence();
        let first = pattern.first_index() - dims.len();
        let lower_bound = truncate(start, first)?.start_point();
        let upper_bound = truncate(end, first)?.end_point();

        tracing::debug!(
            pattern = %pattern,
            dims = %join_units(&dims),
            lower = %lower_bound,
            upper = %upper_bound,
            "enumerating occurrences"
        );

        Ok(Self {
            sequence,
            first,
            dims,
            tail: pattern.start_point().values(),
            current: Some(lower),
            upper,
            lower_bound,
            upper_bound,
        })
    }

    fn advance(&self, values: &[u16]) -> Option<Vec<u16>> {
        let pos = (0..values.len()).rev().find(|&i| {
            let ctx = context_of(&self.dims, values, i);
            match (self.dims.get(i), values.get(i)) {
                (Some(unit), Some(value)) => *value < max_value(*unit, ctx),
                _ => false,
            }
        })?;

        let mut next = values.to_vec();
        if let Some(value) = next.get_mut(pos) {
            *value += 1;
        }
        for (value, unit) in next.iter_mut().zip(&self.dims).skip(pos + 1) {
            *value = min_value(*unit);
        }
        (next <= self.upper).then_some(next)
    }

    fn within_bounds(&self, leaf: &Point) -> bool {
        let before = matches!(
            compare(leaf.elements(), self.lower_bound.elements()),
            Comparison::Definite(Ordering::Less)
        );
        let after = matches!(
            compare(leaf.elements(), self.upper_bound.elements()),
            Comparison::Definite(Ordering::Greater)
        );
        !before && !after
    }
}

impl Iterator for Occurrences {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let values = self.current.take()?;
            self.current = self.advance(&values);

            let run = [values.as_slice(), self.tail.as_slice()].concat();
            match Point::from_run(self.sequence, self.first, &run) {
                Ok(leaf) if self.within_bounds(&leaf) => return Some(leaf),
                Ok(leaf) => tracing::trace!(leaf = %leaf, "skipped occurrence outside bounds"),
                Err(err) => tracing::trace!(?run, %err, "skipped invalid occurrence"),
            }
        }
    }
}

impl FusedIterator for Occurrences {}

/// The bound from sequence index `first` downwards.
fn truncate(point: &Point, first: usize) -> Result<Point, PointError> {
    let elements = point
        .elements()
        .iter()
        .filter(|el| {
            point
                .sequence()
                .index_of(el.unit())
                .is_some_and(|i| i >= first)
        })
        .copied()
        .collect();
    Point::new(elements)
}

/// What the values before position `i` say about the calendar.
fn context_of(dims: &[Unit], values: &[u16], i: usize) -> Context {
    let mut ctx = Context::default();
    for (unit, value) in dims.iter().zip(values).take(i) {
        match unit {
            Unit::Year => ctx.year = i16::try_from(*value).ok(),
            Unit::Month => ctx.month = Some(*value),
            _ => {}
        }
    }
    ctx
}

impl Point {
    /// Every concrete point matching this pattern between `start` and `end`.
    ///
    /// ```
    /// use tempora_core::Point;
    ///
    /// let pattern: Point = "20T22".parse().unwrap();
    /// let start: Point = "2020-08-01".parse().unwrap();
    /// let end: Point = "2022-04-28".parse().unwrap();
    /// let found = pattern.occurrences_in_period(&start, &end).unwrap();
    /// assert_eq!(found.len(), 21);
    /// assert_eq!(found[0].to_string(), "2020-08-20T22:00:00.");
    /// ```
    ///
    /// ## Errors
    /// Fails as [`Occurrences::new`].
    #[tracing::instrument(skip_all, fields(pattern = %self))]
    pub fn occurrences_in_period(
        &self,
        start: &Point,
        end: &Point,
    ) -> Result<Vec<Point>, OccurrenceError> {
        let found = Occurrences::new(self, start, end)?.collect::<Vec<_>>();
        tracing::debug!(count = found.len(), "found occurrences");
        Ok(found)
    }
}

impl Span {
    /// Every concrete span matching this one between `start` and `end`.
    ///
    /// The occurrences of both bounds are paired in order; an end that does
    /// not follow the first start is dropped.
    ///
    /// ## Errors
    /// Fails when the span is not a between span, when the occurrences of a
    /// bound fail, or when a pair does not form a span.
    #[tracing::instrument(skip_all, fields(span = %self))]
    pub fn occurrences_in_period(
        &self,
        start: &Point,
        end: &Point,
    ) -> Result<Vec<Span>, SpanError> {
        if self.kind() != SpanKind::Between {
            return Err(SpanError::NotBetween { kind: self.kind() });
        }

        let starts = self.start().occurrences_in_period(start, end)?;
        let mut ends = self.end().occurrences_in_period(start, end)?;
        if let Some(first) = starts.first() {
            let follows = |e: &Point| {
                e.compare(first)
                    .is_ok_and(|o| o.any(|o| o == Ordering::Greater))
            };
            let leading = ends.iter().take_while(|e| !follows(e)).count();
            ends.drain(..leading);
        }

        let spans = starts
            .into_iter()
            .zip(ends)
            .map(|(s, e)| {
                Span::new(
                    s,
                    self.start_edge(),
                    Some(e),
                    Some(self.end_edge()),
                    SpanKind::Between,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(count = spans.len(), "found span occurrences");
        Ok(spans)
    }

    /// Occurrences of this span within another span.
    ///
    /// ## Errors
    /// Fails as [`Span::occurrences_in_period`].
    pub fn occurrences_in_span(&self, container: &Span) -> Result<Vec<Span>, SpanError> {
        self.occurrences_in_period(container.start(), container.end())
    }
}
