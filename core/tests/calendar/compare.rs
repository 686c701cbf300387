// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cmp::Ordering;

use tempora_core::{Comparison, Config, ErrorKind, Outcome, Unit, compare_with};

use crate::common::{assert_definite, assert_per_year_consistent, elements, point};

#[test]
fn comparisons_are_antisymmetric() {
    for (a, b) in [
        ("2023-08-29", "2023-08-31"),
        ("2023-W34-5", "2023-08-26"),
        ("-02-28", "-02-29"),
        ("-01-10", "-W20-1"),
        ("20T22", "21T01"),
        ("T10:05", "T10:06"),
        ("2022-12-31T23:59:59.", "2023-W01-1T00:00:00."),
    ] {
        let (a, b) = (point(a), point(b));
        let forward = a.compare(&b).unwrap();
        let backward = b.compare(&a).unwrap();
        assert_definite(&forward, Ordering::Less, &format!("{a} against {b}"));
        assert_definite(&backward, Ordering::Greater, &format!("{b} against {a}"));
        assert_definite(&a.compare(&a).unwrap(), Ordering::Equal, &format!("{a} against itself"));
    }
}

#[test]
fn per_year_results_match_direct_comparisons() {
    for (lhs, rhs) in [
        (
            &[(Unit::Week, 1), (Unit::Weekday, 1)][..],
            &[(Unit::Month, 1), (Unit::Day, 2)][..],
        ),
        (
            &[(Unit::Week, 9), (Unit::Weekday, 4)][..],
            &[(Unit::Month, 2), (Unit::Day, 29)][..],
        ),
        (
            &[(Unit::Week, 53), (Unit::Weekday, 1)][..],
            &[(Unit::Month, 12), (Unit::Day, 31)][..],
        ),
        (
            &[(Unit::Week, 53), (Unit::Weekday, 7)][..],
            &[(Unit::Week, 1), (Unit::Weekday, 1)][..],
        ),
    ] {
        assert_per_year_consistent(&elements(lhs), &elements(rhs));
    }
}

#[test]
fn week_53_is_compared_in_years_that_have_it() {
    let outcome = point("-W53-1").compare(&point("-W52-1")).unwrap();
    let Outcome::PerYear(map) = outcome else {
        panic!("Expected a per-year comparison");
    };
    assert!(map.contains_key(&2020));
    assert!(!map.contains_key(&2021));
    assert!(map.values().all(|o| *o == Ordering::Greater));
}

#[test]
fn shapes_that_cannot_be_ordered() {
    for (a, b) in [
        ("2023-08-29", "-08-29"),
        ("2023-08-29", "2023-08-"),
        ("20T22", "-3T22"),
    ] {
        let err = point(a).compare(&point(b)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotComparable, "{a} against {b}");
    }
}

#[test]
fn threshold_controls_mixed_resolution() {
    // Monday of week 1 falls between December 29 and January 4
    let iso = elements(&[(Unit::Week, 1), (Unit::Weekday, 1)]);
    let gre = elements(&[(Unit::Month, 1), (Unit::Day, 3)]);

    let Comparison::PerYear(map) = compare_with(&Config::default(), &iso, &gre) else {
        panic!("Expected a per-year comparison with the default threshold");
    };
    assert_eq!(map.get(&2021), Some(&Ordering::Greater));
    assert_eq!(map.get(&2023), Some(&Ordering::Less));

    let tight = Config {
        iso_gregorian_threshold_days: 0,
        ..Config::default()
    };
    assert_eq!(
        compare_with(&tight, &iso, &gre),
        Comparison::Definite(Ordering::Less)
    );
}
