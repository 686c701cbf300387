// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Assertion helpers for comparisons and year dependent outcomes.

use std::cmp::Ordering;
use std::fmt::Debug;

use tempora_core::{Comparison, Config, Element, Outcome, compare_with};

use super::fixtures::with_year;

/// Asserts that an outcome holds in every year with the expected value.
///
/// # Panics
///
/// Panics if the outcome is per year or holds a different value.
pub fn assert_definite<T: Debug + PartialEq>(outcome: &Outcome<T>, expected: T, context: &str) {
    match outcome {
        Outcome::Definite(v) => assert_eq!(*v, expected, "{context}"),
        Outcome::PerYear(map) => panic!("{context}: expected {expected:?}, got per year {map:?}"),
    }
}

/// Asserts that every year of a per-year comparison agrees with comparing
/// the same elements with that year filled in.
///
/// # Arguments
///
/// * `lhs` - Elements without a year
/// * `rhs` - Elements without a year
///
/// # Panics
///
/// Panics if the comparison is not per year or a year disagrees.
#[allow(dead_code)]
pub fn assert_per_year_consistent(lhs: &[Element], rhs: &[Element]) {
    let config = Config::default();
    let Comparison::PerYear(map) = compare_with(&config, lhs, rhs) else {
        panic!("Expected a per-year comparison of {lhs:?} and {rhs:?}");
    };
    assert!(!map.is_empty(), "Per-year comparison without years");
    for (year, ordering) in map {
        let direct = compare_with(&config, &with_year(year, lhs), &with_year(year, rhs));
        assert_eq!(
            direct,
            Comparison::Definite(ordering),
            "Comparison in {year} disagrees"
        );
        let reversed = compare_with(&config, &with_year(year, rhs), &with_year(year, lhs));
        assert_eq!(reversed, Comparison::Definite(Ordering::reverse(ordering)));
    }
}
