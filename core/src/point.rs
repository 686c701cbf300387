// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::{fmt, str::FromStr};

use tempora_units::calendar::{
    Context, is_leap_year, leap_years, max_value, min_value, weeks_in_year,
    years_with_53_weeks,
};
use tempora_units::{END_YEAR, START_YEAR, Tokenized, Unit, tokenize};

use crate::sequence::{Sequence, sort_by_sequence, validate_ordered};
use crate::{Edge, Element, ElementError, ErrorKind, Outcome, SequenceError, compare};

/// Errors raised while building or relating points
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PointError {
    /// The elements do not form a valid point
    #[error(transparent)]
    Invalid(#[from] SequenceError),

    /// An element could not be built
    #[error(transparent)]
    Element(#[from] ElementError),

    /// Parts of the text are not unit tokens
    #[error("Unmatched substrings {substrings:?} in '{text}'")]
    Unmatched {
        /// The text that was given
        text: String,
        /// Runs of characters no unit accepted
        substrings: Vec<String>,
    },

    /// The points cannot be ordered
    #[error("Points {left} and {right} are not comparable")]
    NotComparable {
        /// Left-hand point
        left: String,
        /// Right-hand point
        right: String,
    },

    /// The bounds of a range are the same instant
    #[error("Bounds {start} and {end} are equal; there is no span")]
    NotSpan {
        /// Lower bound
        start: String,
        /// Upper bound
        end: String,
    },

    /// The lower bound of a range is after the upper bound
    #[error("Lower bound {start} is greater than upper bound {end}")]
    ReversedBounds {
        /// Lower bound
        start: String,
        /// Upper bound
        end: String,
    },
}

impl PointError {
    /// Category of the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            PointError::Invalid(err) => err.kind(),
            PointError::Element(err) => err.kind(),
            PointError::Unmatched { .. } => ErrorKind::StringParse,
            PointError::NotComparable { .. } => ErrorKind::NotComparable,
            PointError::NotSpan { .. } => ErrorKind::NotSpan,
            PointError::ReversedBounds { .. } => ErrorKind::Argument,
        }
    }
}

/// A partial time point: a contiguous run of one calendar sequence.
///
/// `Point` values are always valid. The units are ordered, free of gaps and
/// duplicates, and the values satisfy the calendar constraints between them
/// (the day exists in the month, week 53 exists in the year).
///
/// ```
/// use tempora_core::{Point, Unit};
///
/// let point: Point = "-08-20T22".parse().unwrap();
/// assert_eq!(point.scope(), Some(Unit::Year));
/// assert_eq!(point.to_alternative_string(), "AugD20H22");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    elements: Vec<Element>,
    sequence: Sequence,
    first: usize,
}

impl Point {
    /// Build a point from elements in any order.
    ///
    /// ## Errors
    /// Fails with an [`ErrorKind::Argument`] error when the elements are
    /// empty or leave gaps, and with an [`ErrorKind::Creation`] error when
    /// they belong to no sequence, repeat a unit or break a calendar
    /// constraint.
    pub fn new(elements: Vec<Element>) -> Result<Self, PointError> {
        let sorted = sort_by_sequence(&elements)?;
        let ordered = sorted.elements();
        validate_ordered(&ordered)?;
        Ok(Self::assemble(sorted.sequence, sorted.first, ordered))
    }

    /// Parse a point from its text form, e.g. `2023-08-29T12` or
    /// `Y2023AugD29H12`.
    ///
    /// ## Errors
    /// Fails with [`PointError::Unmatched`] when parts of the text are not
    /// unit tokens, and otherwise as [`Point::new`].
    pub fn parse(text: &str) -> Result<Self, PointError> {
        let Tokenized { tokens, unmatched } = tokenize(text);
        if !unmatched.is_empty() {
            return Err(PointError::Unmatched {
                text: text.to_string(),
                substrings: unmatched,
            });
        }
        let elements = tokens
            .iter()
            .map(|t| Element::new(t.unit, t.value))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(elements)
    }

    /// Build a point from the values of a run of `sequence` starting at
    /// index `first`.
    pub(crate) fn from_run(
        sequence: Sequence,
        first: usize,
        values: &[u16],
    ) -> Result<Self, PointError> {
        let elements = sequence
            .units()
            .iter()
            .skip(first)
            .zip(values)
            .map(|(unit, value)| Element::new(*unit, *value))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(elements)
    }

    fn assemble(sequence: Sequence, first: usize, elements: Vec<Element>) -> Self {
        Self {
            elements,
            sequence,
            first,
        }
    }

    /// Elements in sequence order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Calendar sequence of the point.
    #[must_use]
    pub const fn sequence(&self) -> Sequence {
        self.sequence
    }

    /// All units of the sequence, most significant first.
    #[must_use]
    pub const fn sequence_units(&self) -> &'static [Unit; 6] {
        self.sequence.units()
    }

    /// Whether the point uses the ISO week sequence.
    #[must_use]
    pub fn is_iso(&self) -> bool {
        self.sequence == Sequence::Iso
    }

    /// Sequence index of the most significant unit.
    pub(crate) const fn first_index(&self) -> usize {
        self.first
    }

    /// Sequence index of the least significant unit.
    pub(crate) fn last_index(&self) -> usize {
        self.first + self.elements.len() - 1
    }

    /// The unit just above the most significant unit, `None` for points that
    /// start at the year.
    #[must_use]
    pub fn scope(&self) -> Option<Unit> {
        self.first
            .checked_sub(1)
            .and_then(|i| self.sequence_units().get(i).copied())
    }

    /// Units above the most significant unit.
    #[must_use]
    pub fn over_units(&self) -> &'static [Unit] {
        let units: &'static [Unit] = self.sequence.units();
        units.get(..self.first).unwrap_or_default()
    }

    /// Units below the least significant unit.
    #[must_use]
    pub fn under_units(&self) -> &'static [Unit] {
        let units: &'static [Unit] = self.sequence.units();
        units.get(self.last_index() + 1..).unwrap_or_default()
    }

    /// Units of the point.
    #[must_use]
    pub fn units(&self) -> Vec<Unit> {
        self.elements.iter().map(Element::unit).collect()
    }

    /// Values of the point.
    #[must_use]
    pub fn values(&self) -> Vec<u16> {
        self.elements.iter().map(Element::value).collect()
    }

    /// Value of a unit, if present.
    #[must_use]
    pub fn value(&self, unit: Unit) -> Option<u16> {
        self.elements
            .iter()
            .find(|el| el.unit() == unit)
            .map(Element::value)
    }

    /// Year, if present.
    #[must_use]
    pub fn year(&self) -> Option<i16> {
        self.value(Unit::Year).and_then(|y| i16::try_from(y).ok())
    }

    /// Month, if present.
    #[must_use]
    pub fn month(&self) -> Option<u16> {
        self.value(Unit::Month)
    }

    /// ISO week, if present.
    #[must_use]
    pub fn week(&self) -> Option<u16> {
        self.value(Unit::Week)
    }

    /// Day of month, if present.
    #[must_use]
    pub fn day(&self) -> Option<u16> {
        self.value(Unit::Day)
    }

    /// ISO weekday, if present.
    #[must_use]
    pub fn weekday(&self) -> Option<u16> {
        self.value(Unit::Weekday)
    }

    /// Hour, if present.
    #[must_use]
    pub fn hour(&self) -> Option<u16> {
        self.value(Unit::Hour)
    }

    /// Minute, if present.
    #[must_use]
    pub fn minute(&self) -> Option<u16> {
        self.value(Unit::Minute)
    }

    /// Second, if present.
    #[must_use]
    pub fn second(&self) -> Option<u16> {
        self.value(Unit::Second)
    }

    /// Whether the point lies in a leap year or is a leap day without year.
    #[must_use]
    pub fn is_leap(&self) -> bool {
        match self.year() {
            Some(year) => is_leap_year(year),
            None => self.month() == Some(2) && self.day() == Some(29),
        }
    }

    /// Years the point can be realised in, `None` for every year.
    #[must_use]
    pub fn available_years(&self) -> Option<&'static BTreeSet<i16>> {
        if self.is_iso() && self.week() == Some(53) {
            Some(years_with_53_weeks())
        } else if self.year().is_none() && self.is_leap() {
            Some(leap_years())
        } else {
            None
        }
    }

    /// A copy with one unit set to a new value, or added.
    ///
    /// ## Errors
    /// Fails when the value is out of range or the result is not a valid
    /// point.
    pub fn with_value(&self, unit: Unit, value: u16) -> Result<Self, PointError> {
        let element = Element::new(unit, value)?;
        let mut elements = self
            .elements
            .iter()
            .filter(|el| el.unit() != unit)
            .copied()
            .collect::<Vec<_>>();
        elements.push(element);
        Self::new(elements)
    }

    /// Render in the default grammar, e.g. `2023-08-29T12`.
    #[must_use]
    pub fn to_default_string(&self) -> String {
        self.elements.iter().map(Element::to_default_string).collect()
    }

    /// Render in the alternative grammar, e.g. `Y2023AugD29H12`.
    #[must_use]
    pub fn to_alternative_string(&self) -> String {
        self.elements
            .iter()
            .map(Element::to_alternative_string)
            .collect()
    }

    /// The point with every unit below it set to its minimum.
    #[must_use]
    pub fn start_point(&self) -> Self {
        self.filled(Edge::Start)
    }

    /// The point with every unit below it set to its maximum, e.g. the last
    /// day of the month and `23:59:59`.
    #[must_use]
    pub fn end_point(&self) -> Self {
        self.filled(Edge::End)
    }

    /// The point filled towards the given edge.
    #[must_use]
    pub fn filled(&self, edge: Edge) -> Self {
        let mut elements = self.elements.clone();
        for unit in self.under_units() {
            let value = match edge {
                Edge::Start => min_value(*unit),
                Edge::End => max_value(*unit, context_of(&elements)),
            };
            elements.push(Element::from_parts(*unit, value));
        }
        Self::assemble(self.sequence, self.first, elements)
    }

    /// The earliest point of the scope around this point, starting at the
    /// scope unit, e.g. `-01-01T00:00:00.` for `20T22`. Points scoped at the
    /// year, or without a scope, get a bound in [`START_YEAR`].
    #[must_use]
    pub fn start_point_in_scope(&self) -> Self {
        self.scope_bound(Edge::Start, self.first.saturating_sub(1))
    }

    /// The latest point of the scope around this point, starting at the
    /// scope unit, e.g. `-12-31T23:59:59.` for `20T22`. Points scoped at the
    /// year, or without a scope, get a bound in the last week or day of
    /// [`END_YEAR`].
    #[must_use]
    pub fn end_point_in_scope(&self) -> Self {
        self.scope_bound(Edge::End, self.first.saturating_sub(1))
    }

    /// The scope bound cut down to this point's own units, e.g.
    /// `31T23:59:59.` for `20T22`. Without a year an ISO bound ends in week
    /// 53.
    pub(crate) fn scope_bound_at_depth(&self, edge: Edge) -> Self {
        self.scope_bound(edge, self.first)
    }

    fn scope_bound(&self, edge: Edge, from: usize) -> Self {
        let template = match (edge, self.sequence) {
            (Edge::Start, _) => [START_YEAR.unsigned_abs(), 1, 1, 0, 0, 0],
            (Edge::End, Sequence::Gregorian) => [END_YEAR.unsigned_abs(), 12, 31, 23, 59, 59],
            (Edge::End, Sequence::Iso) => {
                let weeks = if from == 0 {
                    weeks_in_year(END_YEAR)
                } else {
                    53
                };
                [END_YEAR.unsigned_abs(), weeks, 7, 23, 59, 59]
            }
        };
        let elements = self
            .sequence
            .units()
            .iter()
            .zip(template)
            .skip(from)
            .map(|(unit, value)| Element::from_parts(*unit, value))
            .collect();
        Self::assemble(self.sequence, from, elements)
    }

    /// Compare with another point.
    ///
    /// ## Errors
    /// Returns [`PointError::NotComparable`] when the points have different
    /// scopes or depths.
    pub fn compare(&self, other: &Self) -> Result<Outcome<Ordering>, PointError> {
        compare(&self.elements, &other.elements)
            .into_outcome()
            .ok_or_else(|| PointError::NotComparable {
                left: self.to_string(),
                right: other.to_string(),
            })
    }
}

fn context_of(elements: &[Element]) -> Context {
    let find = |unit| elements.iter().find(|el| el.unit() == unit).map(Element::value);
    Context {
        year: find(Unit::Year).and_then(|y| i16::try_from(y).ok()),
        month: find(Unit::Month),
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_default_string())
    }
}

impl FromStr for Point {
    type Err = PointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
