// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cmp::Ordering;

use tempora_core::{ErrorKind, Occurrences, Outcome, Point};

use crate::common::{point, span};

#[test]
fn monthly_occurrences_over_a_period() {
    let found = point("20T22")
        .occurrences_in_period(&point("2020-08-01"), &point("2022-04-28"))
        .unwrap();
    assert_eq!(found.len(), 21);
    assert_eq!(
        found.first().map(Point::to_string),
        Some("2020-08-20T22:00:00.".to_string())
    );
    assert_eq!(
        found.last().map(Point::to_string),
        Some("2022-04-20T22:00:00.".to_string())
    );
    for pair in found.windows(2) {
        if let [a, b] = pair {
            assert_eq!(a.compare(b).unwrap(), Outcome::Definite(Ordering::Less));
        }
    }
}

#[test]
fn iterator_is_lazy_and_finite() {
    let pattern = point("T09");
    let mut occurrences =
        Occurrences::new(&pattern, &point("2023-01-01"), &point("2023-12-31")).unwrap();
    let first = occurrences.next().map(|p| p.to_string());
    assert_eq!(first, Some("2023-01-01T09:00:00.".to_string()));
    assert_eq!(occurrences.count(), 364);
}

#[test]
fn occurrences_skip_missing_days() {
    let found = point("29")
        .occurrences_in_period(&point("2023-01-01"), &point("2024-03-31"))
        .unwrap();
    let months = found
        .iter()
        .filter_map(|p| Some((p.year()?, p.month()?)))
        .collect::<Vec<_>>();
    assert!(!months.contains(&(2023, 2)));
    assert!(months.contains(&(2024, 2)));
    assert_eq!(found.len(), 14);
}

#[test]
fn occurrence_errors() {
    let err = point("2023-08-20")
        .occurrences_in_period(&point("2023-01-01"), &point("2023-12-31"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Occurrence);

    let err = point("20T22")
        .occurrences_in_period(&point("2023-03-01"), &point("2023-01-01"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Occurrence);
}

#[test]
fn span_occurrences_within_a_year() {
    let pattern = span("@01T09_01T17@");
    let found = pattern
        .occurrences_in_span(&span("@2023-01-01_2023-12-31@"))
        .unwrap();
    assert_eq!(found.len(), 12);
    for occurrence in &found {
        assert_eq!(occurrence.start().day(), Some(1));
        assert_eq!(occurrence.start().hour(), Some(9));
        assert_eq!(occurrence.end().hour(), Some(17));
    }
}
