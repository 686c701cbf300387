// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Factories for points, spans and element runs.

use tempora_core::{Element, Point, Span, Unit};

/// Parses a point from its text form.
///
/// # Panics
///
/// Panics if the text is not a valid point.
pub fn point(text: &str) -> Point {
    text.parse()
        .unwrap_or_else(|e| panic!("Failed to parse '{text}': {e}"))
}

/// Parses a span from its text form.
///
/// # Panics
///
/// Panics if the text is not a valid span.
pub fn span(text: &str) -> Span {
    text.parse()
        .unwrap_or_else(|e| panic!("Failed to parse '{text}': {e}"))
}

/// Builds elements from unit and value pairs.
///
/// # Panics
///
/// Panics if a value is outside the domain of its unit.
pub fn elements(pairs: &[(Unit, u16)]) -> Vec<Element> {
    pairs
        .iter()
        .map(|&(unit, value)| {
            Element::new(unit, value)
                .unwrap_or_else(|e| panic!("Failed to create {unit}={value}: {e}"))
        })
        .collect()
}

/// Prepends a year to a run of elements.
///
/// # Arguments
///
/// * `year` - The year to substitute
/// * `elements` - Elements without a year
#[allow(dead_code)]
pub fn with_year(year: i16, elements: &[Element]) -> Vec<Element> {
    let year = u16::try_from(year).expect("supported years are positive");
    let mut out = elements.to_vec();
    out.insert(
        0,
        Element::new(Unit::Year, year).expect("supported year is a valid element"),
    );
    out
}
