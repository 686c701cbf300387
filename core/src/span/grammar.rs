// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Text form of spans.
//!
//! - `@P@`: the span covered by `P`
//! - `S_E`: from `S` to `E`
//! - `P_`: from the start of the scope up to `P`
//! - `_P`: from `P` up to the end of the scope
//!
//! Every component carries an `@` marker. A leading `@` anchors the
//! component at its start edge, a trailing `@` at its end edge.

use std::str::FromStr;

use crate::{Edge, Point, Span, SpanError, SpanKind};

const MARKER: char = '@';
const SEPARATOR: char = '_';

fn parse_point(text: &str) -> Result<Point, SpanError> {
    Point::parse(text).map_err(|source| SpanError::InvalidPoint {
        text: text.to_string(),
        source,
    })
}

fn split_marker<'a>(
    text: &'a str,
    component: &'static str,
) -> Result<(&'a str, Edge), SpanError> {
    if let Some(rest) = text.strip_prefix(MARKER) {
        Ok((rest, Edge::Start))
    } else if let Some(rest) = text.strip_suffix(MARKER) {
        Ok((rest, Edge::End))
    } else {
        Err(SpanError::MissingMarker { component })
    }
}

impl FromStr for Span {
    type Err = SpanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(SpanError::EmptyText);
        }

        let Some((start, end)) = s.split_once(SEPARATOR) else {
            let inner = s
                .strip_prefix(MARKER)
                .and_then(|rest| rest.strip_suffix(MARKER))
                .ok_or_else(|| SpanError::MissingSurroundingMarkers {
                    text: s.to_string(),
                })?;
            return Span::within(parse_point(inner)?);
        };

        match (start.trim(), end.trim()) {
            ("", "") => Err(SpanError::NoComponents {
                text: s.to_string(),
            }),
            (start, "") => {
                let (text, edge) = split_marker(start, "start")?;
                Span::before(parse_point(text)?, edge)
            }
            ("", end) => {
                let (text, edge) = split_marker(end, "end")?;
                Span::after(parse_point(text)?, edge)
            }
            (start, end) => {
                let (start, start_edge) = split_marker(start, "start")?;
                let (end, end_edge) = split_marker(end, "end")?;
                Span::new(
                    parse_point(start)?,
                    start_edge,
                    Some(parse_point(end)?),
                    Some(end_edge),
                    SpanKind::Between,
                )
            }
        }
    }
}
