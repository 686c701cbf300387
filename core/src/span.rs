// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod grammar;

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use tempora_units::Unit;

use crate::outcome::intersect_years;
use crate::sequence::SequenceCombination;
use crate::{ErrorKind, OccurrenceError, Outcome, Point, PointError};

/// Which end of a partial point a span boundary resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Missing finer units take their minimum
    Start,

    /// Missing finer units take their maximum
    End,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Start => "start".fmt(f),
            Edge::End => "end".fmt(f),
        }
    }
}

/// Shape of a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Bounded on both sides
    Between,

    /// From the start of the scope up to a point
    Before,

    /// From a point up to the end of the scope
    After,
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanKind::Between => "between".fmt(f),
            SpanKind::Before => "before".fmt(f),
            SpanKind::After => "after".fmt(f),
        }
    }
}

/// Errors raised while building, parsing or relating spans
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    /// Two points were given for a one-sided span
    #[error("A span with two points must be of kind between, got {kind}")]
    TwoPointKind {
        /// The kind given
        kind: SpanKind,
    },

    /// A one-point between span was anchored at its end
    #[error("Start edge cannot be 'end' when the span kind is between")]
    BetweenEndEdge,

    /// The bounds have different scopes
    #[error("Start and end must have the same scope, got {start:?} and {end:?}")]
    ScopeMismatch {
        /// Scope of the start
        start: Option<Unit>,
        /// Scope of the end
        end: Option<Unit>,
    },

    /// The bounds are the same instant
    #[error("Start {start} and end {end} are equal; there is no span")]
    NoSpan {
        /// Start bound
        start: String,
        /// End bound
        end: String,
    },

    /// The start is after the end
    #[error("Start {start} is greater than end {end}")]
    Reversed {
        /// Start bound
        start: String,
        /// End bound
        end: String,
    },

    /// The bounds cannot be ordered
    #[error("Start {start} and end {end} are not comparable")]
    NotComparable {
        /// Start bound
        start: String,
        /// End bound
        end: String,
    },

    /// The end is after the start in no representative year
    #[error("No span exists between {start} and {end} in any year")]
    NoCommonYear {
        /// Start bound
        start: String,
        /// End bound
        end: String,
    },

    /// Span text is empty
    #[error("Span text cannot be empty or whitespace")]
    EmptyText,

    /// A single point span is not wrapped in `@`
    #[error("Span text '{text}' must start and end with '@'")]
    MissingSurroundingMarkers {
        /// The text given
        text: String,
    },

    /// Span text is only a separator
    #[error("Span text '{text}' has no components")]
    NoComponents {
        /// The text given
        text: String,
    },

    /// A span component carries no edge marker
    #[error("Missing '@' in the {component} component")]
    MissingMarker {
        /// `start` or `end`
        component: &'static str,
    },

    /// A span component is not a valid point
    #[error("Invalid point '{text}' in span")]
    InvalidPoint {
        /// Text of the component
        text: String,
        /// Why the point was rejected
        #[source]
        source: PointError,
    },

    /// Occurrences are only defined for between spans
    #[error("Occurrences need a between span, got {kind}")]
    NotBetween {
        /// The kind of the span
        kind: SpanKind,
    },

    /// Occurrences of a bound failed
    #[error(transparent)]
    Occurrence(#[from] OccurrenceError),

    /// A point operation failed
    #[error(transparent)]
    Point(#[from] PointError),
}

impl SpanError {
    /// Category of the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            SpanError::TwoPointKind { .. }
            | SpanError::BetweenEndEdge
            | SpanError::ScopeMismatch { .. }
            | SpanError::Reversed { .. } => ErrorKind::Argument,
            SpanError::NoSpan { .. } | SpanError::NoCommonYear { .. } => ErrorKind::NotSpan,
            SpanError::NotComparable { .. } => ErrorKind::NotComparable,
            SpanError::EmptyText
            | SpanError::MissingSurroundingMarkers { .. }
            | SpanError::NoComponents { .. }
            | SpanError::MissingMarker { .. }
            | SpanError::InvalidPoint { .. } => ErrorKind::StringParse,
            SpanError::NotBetween { .. } => ErrorKind::Occurrence,
            SpanError::Occurrence(err) => err.kind(),
            SpanError::Point(err) => err.kind(),
        }
    }
}

/// An interval between two filled points.
///
/// A span keeps the points it was built from. Its bounds are those points
/// filled towards their edges:
///
/// ```
/// use tempora_core::Span;
///
/// let span: Span = "@2022-01-01_2022-12-31@".parse().unwrap();
/// assert_eq!(span.start().to_string(), "2022-01-01T00:00:00.");
/// assert_eq!(span.end().to_string(), "2022-12-31T23:59:59.");
/// ```
#[derive(Debug, Clone)]
pub struct Span {
    start: Point,
    start_edge: Edge,
    end: Point,
    end_edge: Edge,
    kind: SpanKind,
    init_start: Point,
    init_end: Option<Point>,
    available_years: Option<BTreeSet<i16>>,
    combination: SequenceCombination,
}

impl Span {
    /// Build a span.
    ///
    /// With one point, `kind` selects the shape: a between span covers the
    /// point itself, an after span runs from the point to the end of its
    /// scope, and a before span from the start of its scope to the point.
    /// With two points the span must be a between span and `end_edge`
    /// defaults to [`Edge::End`].
    ///
    /// ## Errors
    /// Fails when the bounds are not strictly ordered, have different
    /// scopes, or the edges do not fit the kind.
    pub fn new(
        start: Point,
        start_edge: Edge,
        end: Option<Point>,
        end_edge: Option<Edge>,
        kind: SpanKind,
    ) -> Result<Self, SpanError> {
        match end {
            Some(end) => {
                Self::two_point(start, start_edge, end, end_edge.unwrap_or(Edge::End), kind)
            }
            None => Self::one_point(start, start_edge, kind),
        }
    }

    /// The span covered by a partial point, e.g. the whole of March for
    /// `-03-`.
    ///
    /// ## Errors
    /// Fails when the point has full depth and so covers no span.
    pub fn within(point: Point) -> Result<Self, SpanError> {
        Self::one_point(point, Edge::Start, SpanKind::Between)
    }

    /// From the start of the point's scope up to the point.
    ///
    /// ## Errors
    /// Fails when the bounds coincide.
    pub fn before(point: Point, edge: Edge) -> Result<Self, SpanError> {
        Self::one_point(point, edge, SpanKind::Before)
    }

    /// From the point up to the end of its scope.
    ///
    /// ## Errors
    /// Fails when the bounds coincide.
    pub fn after(point: Point, edge: Edge) -> Result<Self, SpanError> {
        Self::one_point(point, edge, SpanKind::After)
    }

    /// From the start of `start` to the end of `end`.
    ///
    /// ## Errors
    /// Fails as [`Span::new`] with two points.
    pub fn between(start: Point, end: Point) -> Result<Self, SpanError> {
        Self::two_point(start, Edge::Start, end, Edge::End, SpanKind::Between)
    }

    fn one_point(point: Point, edge: Edge, kind: SpanKind) -> Result<Self, SpanError> {
        let (start, start_edge, end, end_edge) = match kind {
            SpanKind::Between => {
                if edge == Edge::End {
                    return Err(SpanError::BetweenEndEdge);
                }
                (point.start_point(), Edge::Start, point.end_point(), Edge::End)
            }
            SpanKind::After => (
                point.filled(edge),
                edge,
                point.end_point_in_scope(),
                Edge::End,
            ),
            SpanKind::Before => (
                point.start_point_in_scope(),
                Edge::Start,
                point.filled(edge),
                edge,
            ),
        };
        // Scope bounds start above the point, so order against them at its depth
        match kind {
            SpanKind::Between => ensure_ordered(&start, &end)?,
            SpanKind::After => ensure_ordered(&start, &point.scope_bound_at_depth(Edge::End))?,
            SpanKind::Before => ensure_ordered(&point.scope_bound_at_depth(Edge::Start), &end)?,
        };

        let span = Self {
            available_years: point.available_years().cloned(),
            combination: SequenceCombination::of(point.sequence(), point.sequence()),
            start,
            start_edge,
            end,
            end_edge,
            kind,
            init_start: point,
            init_end: None,
        };
        tracing::debug!(span = %span, "built one-point span");
        Ok(span)
    }

    fn two_point(
        start: Point,
        start_edge: Edge,
        end: Point,
        end_edge: Edge,
        kind: SpanKind,
    ) -> Result<Self, SpanError> {
        if kind != SpanKind::Between {
            return Err(SpanError::TwoPointKind { kind });
        }
        if start.scope() != end.scope() {
            return Err(SpanError::ScopeMismatch {
                start: start.scope(),
                end: end.scope(),
            });
        }

        let greater = ensure_ordered(&start, &end)?;
        let available_years = intersect_years(
            intersect_years(greater, start.available_years()),
            end.available_years(),
        );

        let span = Self {
            start: start.filled(start_edge),
            start_edge,
            end: end.filled(end_edge),
            end_edge,
            kind,
            combination: SequenceCombination::of(start.sequence(), end.sequence()),
            init_start: start,
            init_end: Some(end),
            available_years,
        };
        tracing::debug!(span = %span, "built two-point span");
        Ok(span)
    }

    /// Lower bound, filled towards the start edge.
    #[must_use]
    pub fn start(&self) -> &Point {
        &self.start
    }

    /// Upper bound, filled towards the end edge.
    #[must_use]
    pub fn end(&self) -> &Point {
        &self.end
    }

    /// Edge of the lower bound.
    #[must_use]
    pub const fn start_edge(&self) -> Edge {
        self.start_edge
    }

    /// Edge of the upper bound.
    #[must_use]
    pub const fn end_edge(&self) -> Edge {
        self.end_edge
    }

    /// Shape of the span.
    #[must_use]
    pub const fn kind(&self) -> SpanKind {
        self.kind
    }

    /// The point the span was built from.
    #[must_use]
    pub fn init_start(&self) -> &Point {
        &self.init_start
    }

    /// The second point the span was built from, if any.
    #[must_use]
    pub fn init_end(&self) -> Option<&Point> {
        self.init_end.as_ref()
    }

    /// Scope shared by the points the span was built from.
    #[must_use]
    pub fn scope(&self) -> Option<Unit> {
        self.init_start.scope()
    }

    /// Whether a bound lies in a leap year or is a leap day.
    #[must_use]
    pub fn is_leap(&self) -> bool {
        self.init_start.is_leap() || self.init_end.as_ref().is_some_and(Point::is_leap)
    }

    /// Years the span exists in, `None` for every year.
    #[must_use]
    pub fn available_years(&self) -> Option<&BTreeSet<i16>> {
        self.available_years.as_ref()
    }

    /// Sequences of the two points the span was built from.
    #[must_use]
    pub const fn sequence_combination(&self) -> SequenceCombination {
        self.combination
    }

    /// Render in the alternative point grammar.
    #[must_use]
    pub fn to_alternative_string(&self) -> String {
        self.render(
            &self.start.to_alternative_string(),
            &self.end.to_alternative_string(),
        )
    }

    fn render(&self, start: &str, end: &str) -> String {
        match self.kind {
            SpanKind::Between => format!(
                "{}_{}",
                mark(start, self.start_edge),
                mark(end, self.end_edge)
            ),
            SpanKind::Before => format!("{}_", mark(end, self.end_edge)),
            SpanKind::After => format!("_{}", mark(start, self.start_edge)),
        }
    }
}

fn mark(point: &str, edge: Edge) -> String {
    match edge {
        Edge::Start => format!("@{point}"),
        Edge::End => format!("{point}@"),
    }
}

/// Check that `end` is after `start`, returning the years where it is when
/// that depends on the year.
fn ensure_ordered(start: &Point, end: &Point) -> Result<Option<BTreeSet<i16>>, SpanError> {
    let outcome = end.compare(start).map_err(|_| SpanError::NotComparable {
        start: start.to_string(),
        end: end.to_string(),
    })?;
    match outcome {
        Outcome::Definite(Ordering::Greater) => Ok(None),
        Outcome::Definite(Ordering::Equal) => Err(SpanError::NoSpan {
            start: start.to_string(),
            end: end.to_string(),
        }),
        Outcome::Definite(Ordering::Less) => Err(SpanError::Reversed {
            start: start.to_string(),
            end: end.to_string(),
        }),
        per_year @ Outcome::PerYear(_) => match per_year.years_where(|o| o == Ordering::Greater) {
            Some(years) if years.is_empty() => Err(SpanError::NoCommonYear {
                start: start.to_string(),
                end: end.to_string(),
            }),
            years => Ok(years),
        },
    }
}

impl PartialEq for Span {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.end == other.end
            && self.start_edge == other.start_edge
            && self.end_edge == other.end_edge
            && self.kind == other.kind
    }
}

impl Eq for Span {}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&self.start.to_string(), &self.end.to_string()))
    }
}
