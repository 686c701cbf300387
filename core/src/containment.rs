// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::{Outcome, Point, PointError, Span, SpanError};

/// The position of a point relative to a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangePosition {
    /// The point is before the lower bound.
    Before,

    /// The point is within the range, bounds included.
    InRange,

    /// The point is after the upper bound.
    After,
}

impl RangePosition {
    fn of(to_lower: Ordering, to_upper: Ordering) -> Self {
        match (to_lower, to_upper) {
            (Ordering::Less, _) => RangePosition::Before,
            (_, Ordering::Greater) => RangePosition::After,
            _ => RangePosition::InRange,
        }
    }
}

/// How a span lies relative to a period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanContain {
    /// Entirely after the period
    Ahead,

    /// Entirely within the period
    Inside,

    /// Entirely before the period
    Behind,

    /// Starts before the period and ends inside it
    StartOverlapped,

    /// Starts inside the period and ends after it
    EndOverlapped,

    /// Any other arrangement, such as a span covering the whole period
    Error,
}

impl SpanContain {
    const fn of(start: RangePosition, end: RangePosition) -> Self {
        match (start, end) {
            (RangePosition::After, RangePosition::After) => SpanContain::Ahead,
            (RangePosition::InRange, RangePosition::InRange) => SpanContain::Inside,
            (RangePosition::Before, RangePosition::Before) => SpanContain::Behind,
            (RangePosition::InRange, RangePosition::After) => SpanContain::EndOverlapped,
            (RangePosition::Before, RangePosition::InRange) => SpanContain::StartOverlapped,
            _ => SpanContain::Error,
        }
    }
}

impl Point {
    /// Where this point lies relative to the range from the start of `lower`
    /// to the end of `upper`.
    ///
    /// ## Errors
    /// Fails with [`PointError::NotComparable`] when the three points do not
    /// share a scope and depth, [`PointError::NotSpan`] when the bounds are
    /// the same instant, and [`PointError::ReversedBounds`] when they are
    /// reversed.
    pub fn is_between(
        &self,
        lower: &Point,
        upper: &Point,
    ) -> Result<Outcome<RangePosition>, PointError> {
        if lower.scope() != upper.scope() || self.scope() != lower.scope() {
            return Err(PointError::NotComparable {
                left: lower.to_string(),
                right: upper.to_string(),
            });
        }

        let lo = lower.start_point();
        let hi = upper.end_point();
        let point = self.start_point();

        let width = hi.compare(&lo)?;
        match width {
            Outcome::Definite(Ordering::Equal) => {
                return Err(PointError::NotSpan {
                    start: lo.to_string(),
                    end: hi.to_string(),
                });
            }
            Outcome::Definite(Ordering::Less) => {
                return Err(PointError::ReversedBounds {
                    start: lo.to_string(),
                    end: hi.to_string(),
                });
            }
            _ => {}
        }

        let positions = point
            .compare(&lo)?
            .combine(&point.compare(&hi)?, RangePosition::of);
        match width.combine(&positions, |w, p| (w == Ordering::Greater).then_some(p)) {
            Outcome::Definite(Some(p)) => Ok(Outcome::Definite(p)),
            Outcome::PerYear(map) => {
                let map = map
                    .into_iter()
                    .filter_map(|(year, p)| p.map(|p| (year, p)))
                    .collect::<BTreeMap<_, _>>();
                if map.is_empty() {
                    Err(PointError::NotSpan {
                        start: lo.to_string(),
                        end: hi.to_string(),
                    })
                } else {
                    Ok(Outcome::PerYear(map))
                }
            }
            Outcome::Definite(None) => Err(PointError::NotSpan {
                start: lo.to_string(),
                end: hi.to_string(),
            }),
        }
    }
}

impl Span {
    /// Classify the span against the period from the start of
    /// `period_start` to the end of `period_end`.
    ///
    /// ## Errors
    /// Fails when the span bounds cannot be placed relative to the period.
    #[tracing::instrument(skip_all, fields(span = %self))]
    pub fn classify(
        &self,
        period_start: &Point,
        period_end: &Point,
    ) -> Result<Outcome<SpanContain>, SpanError> {
        let lower = period_start.start_point();
        let upper = period_end.end_point();
        let start = self.start().is_between(&lower, &upper)?;
        let end = self.end().is_between(&lower, &upper)?;
        let contain = start.combine(&end, SpanContain::of);
        tracing::debug!(?contain, "classified span");
        Ok(contain)
    }

    /// Classify the span against another span.
    ///
    /// ## Errors
    /// Fails as [`Span::classify`].
    pub fn classify_in_span(&self, container: &Span) -> Result<Outcome<SpanContain>, SpanError> {
        self.classify(container.start(), container.end())
    }
}
