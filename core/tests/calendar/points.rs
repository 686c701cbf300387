// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use tempora_core::{ErrorKind, Point, PointError, Sequence, Unit};

use crate::common::{elements, point};

const SAMPLES: &[&str] = &[
    "2023-08-29T12:30:00.",
    "2023",
    "2023-08-",
    "-08-20T22",
    "-02-29",
    "2024-02-29T06",
    "20T22:15",
    "T10",
    ":30",
    "2023-W34-5",
    "-W53-7T23:59",
    "-W01",
    "-3T08",
    "Y2023AugD29",
    "W10MOH08",
];

#[test]
fn default_and_alternative_renderings_round_trip() {
    for text in SAMPLES {
        let p = point(text);
        for rendered in [p.to_default_string(), p.to_alternative_string()] {
            let reparsed = Point::parse(&rendered)
                .unwrap_or_else(|e| panic!("Failed to parse '{rendered}' from '{text}': {e}"));
            assert_eq!(reparsed, p, "Round trip of '{text}' via '{rendered}'");
        }
    }
}

#[test]
fn leap_day_validity() {
    let no_year = Point::new(elements(&[(Unit::Month, 2), (Unit::Day, 29)]));
    assert!(no_year.is_ok(), "Leap day without a year is valid");
    assert!(no_year.unwrap().is_leap());

    let common = Point::new(elements(&[(Unit::Year, 2023), (Unit::Month, 2), (Unit::Day, 29)]))
        .unwrap_err();
    assert_eq!(common.kind(), ErrorKind::Creation);

    let leap = Point::new(elements(&[(Unit::Year, 2020), (Unit::Month, 2), (Unit::Day, 29)]));
    assert!(leap.is_ok(), "2020-02-29 is valid");
}

#[test]
fn week_53_availability() {
    let years = point("-W53-1")
        .available_years()
        .expect("week 53 is limited to some years");
    let early = years.range(2000..=2020).copied().collect::<Vec<_>>();
    assert_eq!(early, vec![2004, 2009, 2015, 2020]);

    for weekday in 1..=7 {
        let err = Point::new(elements(&[
            (Unit::Year, 2021),
            (Unit::Week, 53),
            (Unit::Weekday, weekday),
        ]))
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Creation, "2021-W53-{weekday}");
    }
    assert!(point("2020-W53-1").is_iso());
}

#[test]
fn construction_errors_carry_their_kind() {
    for (pairs, kind) in [
        (&[(Unit::Year, 2023), (Unit::Day, 3)][..], ErrorKind::Argument),
        (&[(Unit::Month, 3), (Unit::Week, 10)][..], ErrorKind::Creation),
        (&[(Unit::Month, 4), (Unit::Day, 31)][..], ErrorKind::Creation),
        (&[(Unit::Hour, 1), (Unit::Hour, 2)][..], ErrorKind::Creation),
        (&[][..], ErrorKind::Argument),
    ] {
        let err = Point::new(elements(pairs)).unwrap_err();
        assert_eq!(err.kind(), kind, "Kind of error for {pairs:?}: {err}");
    }
}

#[test]
fn unmatched_text_is_reported() {
    let err = Point::parse("2023-08-29Z").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StringParse);
    assert!(
        matches!(err, PointError::Unmatched { ref substrings, .. } if substrings == &["Z"]),
        "Unexpected error {err:?}"
    );
}

#[test]
fn elements_are_ordered_by_sequence() {
    let p = Point::new(elements(&[
        (Unit::Hour, 8),
        (Unit::Weekday, 3),
        (Unit::Week, 10),
    ]))
    .unwrap();
    assert_eq!(p.sequence(), Sequence::Iso);
    assert_eq!(p.units(), vec![Unit::Week, Unit::Weekday, Unit::Hour]);
    assert_eq!(p.to_string(), "-W10-3T08");
    assert_eq!(p.scope(), Some(Unit::Year));
}

#[test]
fn filled_bounds() {
    let p = point("-02-");
    assert_eq!(p.start_point().to_string(), "-02-01T00:00:00.");
    assert_eq!(p.end_point().to_string(), "-02-29T23:59:59.");

    let p = point("2023-02-");
    assert_eq!(p.end_point().to_string(), "2023-02-28T23:59:59.");

    let p = point("20T22");
    assert_eq!(p.start_point_in_scope().to_string(), "-01-01T00:00:00.");
    assert_eq!(p.end_point_in_scope().to_string(), "-12-31T23:59:59.");

    let p = point("-W10-3");
    assert_eq!(p.start_point_in_scope().to_string(), "1800-W01-1T00:00:00.");
    assert_eq!(p.end_point_in_scope().to_string(), "2199-W52-7T23:59:59.");
}

#[test]
fn with_value_revalidates() {
    let p = point("2024-02-29");
    assert_eq!(p.with_value(Unit::Year, 2028).unwrap().to_string(), "2028-02-29");
    let err = p.with_value(Unit::Year, 2023).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Creation);
}
