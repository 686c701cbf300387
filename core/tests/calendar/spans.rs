// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use tempora_core::{Edge, ErrorKind, SequenceCombination, Span, SpanError, SpanKind};

use crate::common::{point, span};

#[test]
fn span_text_round_trip() {
    let parsed = span("@2022-01-01_2022-12-31@");
    assert_eq!(parsed.start().to_string(), "2022-01-01T00:00:00.");
    assert_eq!(parsed.end().to_string(), "2022-12-31T23:59:59.");
    assert_eq!(parsed.kind(), SpanKind::Between);

    let rendered = parsed.to_string();
    assert_eq!(rendered, "@2022-01-01T00:00:00._2022-12-31T23:59:59.@");
    assert_eq!(span(&rendered), parsed);
}

#[test]
fn reversed_bounds_are_rejected() {
    let err = Span::between(point("2022-12-31"), point("2022-01-01")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Argument);
    assert!(
        err.to_string().contains("is greater than"),
        "Unexpected message: {err}"
    );
}

#[test]
fn equal_bounds_are_no_span() {
    let err = Span::between(point("2022-06-01"), point("2022-06-01")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotSpan);
    assert!(
        err.to_string().contains("no span"),
        "Unexpected message: {err}"
    );

    let full = point("2022-06-01T08:00:00.");
    let err = Span::within(full).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotSpan);
}

#[test]
fn kind_and_edge_rules() {
    let err = Span::new(
        point("2022-01-01"),
        Edge::Start,
        Some(point("2022-02-01")),
        None,
        SpanKind::After,
    )
    .unwrap_err();
    assert_eq!(err, SpanError::TwoPointKind { kind: SpanKind::After });

    let err = Span::new(point("-03-"), Edge::End, None, None, SpanKind::Between).unwrap_err();
    assert_eq!(err, SpanError::BetweenEndEdge);

    let err = Span::between(point("-03-"), point("2022-04-")).unwrap_err();
    assert!(matches!(err, SpanError::ScopeMismatch { .. }));
}

#[test]
fn one_point_spans_reach_the_end_of_scope() {
    let before = Span::before(point("-06-15"), Edge::Start).unwrap();
    assert_eq!(before.start().to_string(), "1800-01-01T00:00:00.");
    assert_eq!(before.end().to_string(), "-06-15T00:00:00.");

    let after = Span::after(point("-06-15"), Edge::End).unwrap();
    assert_eq!(after.start().to_string(), "-06-15T23:59:59.");
    assert_eq!(after.end().to_string(), "2199-12-31T23:59:59.");
    assert_eq!(after.scope(), point("-06-15").scope());

    let err = Span::after(point("-12-31"), Edge::End).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotSpan);
}

#[test]
fn after_week_53_keeps_its_years() {
    for after in [
        Span::after(point("-W53-1"), Edge::Start).unwrap(),
        span("_@-W53-1"),
    ] {
        assert_eq!(after.kind(), SpanKind::After);
        assert_eq!(after.start().to_string(), "-W53-1T00:00:00.");
        let years = after.available_years().expect("week 53 limits the years");
        assert!(years.contains(&2020));
        assert!(!years.contains(&2021));
    }
}

#[test]
fn leap_and_week_53_spans_record_their_years() {
    let leap = span("@-02-29@");
    assert!(leap.is_leap());
    let years = leap.available_years().expect("leap day limits the years");
    assert!(years.contains(&2024));
    assert!(!years.contains(&2023));

    let week = span("@-W53@");
    let years = week.available_years().expect("week 53 limits the years");
    assert!(years.contains(&2020));
    assert!(!years.contains(&2021));
}

#[test]
fn mixed_span_keeps_only_years_where_end_follows_start() {
    let mixed = Span::between(point("-W01-1"), point("-01-02")).unwrap();
    assert_eq!(mixed.sequence_combination(), SequenceCombination::Mixed);
    let years = mixed
        .available_years()
        .expect("the order of the bounds depends on the year");
    // 2020-W01-1 is 2019-12-30, 2021-W01-1 is 2021-01-04
    assert!(years.contains(&2020));
    assert!(!years.contains(&2021));
}

#[test]
fn grammar_errors() {
    for (text, kind) in [
        ("", ErrorKind::StringParse),
        ("2022-01-01", ErrorKind::StringParse),
        ("_", ErrorKind::StringParse),
        ("2022-01-01_2022-12-31", ErrorKind::StringParse),
        ("@2022-01-0x_2022-12-31@", ErrorKind::StringParse),
        ("@2022-12-31_2022-01-01@", ErrorKind::Argument),
    ] {
        let err = text.parse::<Span>().unwrap_err();
        assert_eq!(err.kind(), kind, "Failed to reject '{text}' correctly: {err}");
    }
}
