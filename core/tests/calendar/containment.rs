// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use tempora_core::{ErrorKind, Outcome, RangePosition, SpanContain};

use crate::common::{assert_definite, point, span};

#[test]
fn span_inside_its_year() {
    let contained = span("@2022-03-01_2022-03-31@");
    let outcome = contained
        .classify(&point("2022-01-01"), &point("2022-12-31"))
        .unwrap();
    assert_definite(&outcome, SpanContain::Inside, "March within 2022");
}

#[test]
fn span_ahead_or_behind_depending_on_direction() {
    let march_2022 = span("@2022-03-01_2022-03-31@");
    let outcome = march_2022
        .classify(&point("2023-01-01"), &point("2023-12-31"))
        .unwrap();
    assert_definite(&outcome, SpanContain::Behind, "March 2022 against 2023");

    let march_2023 = span("@2023-03-01_2023-03-31@");
    let outcome = march_2023
        .classify(&point("2022-01-01"), &point("2022-12-31"))
        .unwrap();
    assert_definite(&outcome, SpanContain::Ahead, "March 2023 against 2022");
}

#[test]
fn classify_against_a_container_span() {
    let container = span("@2022-01-01_2022-12-31@");
    for (text, expected) in [
        ("@2022-03-01_2022-03-31@", SpanContain::Inside),
        ("@2021-12-01_2022-01-15@", SpanContain::StartOverlapped),
        ("@2022-12-15_2023-01-15@", SpanContain::EndOverlapped),
        ("@2021-01-01_2023-12-31@", SpanContain::Error),
    ] {
        let outcome = span(text).classify_in_span(&container).unwrap();
        assert_definite(&outcome, expected, text);
    }
}

#[test]
fn point_between_bounds() {
    let lo = point("-03-01");
    let hi = point("-03-31");
    for (text, expected) in [
        ("-02-28", RangePosition::Before),
        ("-03-01", RangePosition::InRange),
        ("-03-31", RangePosition::InRange),
        ("-04-01", RangePosition::After),
    ] {
        let outcome = point(text).is_between(&lo, &hi).unwrap();
        assert_definite(&outcome, expected, text);
    }

    let err = point("T10").is_between(&lo, &hi).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotComparable);
}

#[test]
fn week_53_membership_is_per_year() {
    let outcome = span("@-W53@")
        .classify(&point("-W50-1"), &point("-W53-7"))
        .unwrap();
    let Outcome::PerYear(map) = outcome else {
        panic!("Expected a per-year classification");
    };
    assert!(map.contains_key(&2020));
    assert!(!map.contains_key(&2021));
    assert!(map.values().all(|c| *c == SpanContain::Inside));
}
