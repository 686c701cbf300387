// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Results that may depend on which year is substituted for a missing year.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// A value that is either the same in every year, or known per year
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Holds in every supported year
    Definite(T),

    /// Holds only in the listed years, with a value for each
    PerYear(BTreeMap<i16, T>),
}

impl<T: Copy> Outcome<T> {
    /// The value, if it does not depend on the year.
    #[must_use]
    pub fn definite(&self) -> Option<T> {
        match self {
            Outcome::Definite(v) => Some(*v),
            Outcome::PerYear(_) => None,
        }
    }

    /// The value in a given year, if known.
    #[must_use]
    pub fn at(&self, year: i16) -> Option<T> {
        match self {
            Outcome::Definite(v) => Some(*v),
            Outcome::PerYear(map) => map.get(&year).copied(),
        }
    }

    /// Years with a value, `None` when the value holds in every year.
    #[must_use]
    pub fn years(&self) -> Option<BTreeSet<i16>> {
        match self {
            Outcome::Definite(_) => None,
            Outcome::PerYear(map) => Some(map.keys().copied().collect()),
        }
    }

    /// Years whose value satisfies `pred`, `None` when every year does.
    #[must_use]
    pub fn years_where(&self, pred: impl Fn(T) -> bool) -> Option<BTreeSet<i16>> {
        match self {
            Outcome::Definite(v) if pred(*v) => None,
            Outcome::Definite(_) => Some(BTreeSet::new()),
            Outcome::PerYear(map) => Some(
                map.iter()
                    .filter(|(_, v)| pred(**v))
                    .map(|(y, _)| *y)
                    .collect(),
            ),
        }
    }

    /// Whether any year has a value satisfying `pred`.
    #[must_use]
    pub fn any(&self, pred: impl Fn(T) -> bool) -> bool {
        match self {
            Outcome::Definite(v) => pred(*v),
            Outcome::PerYear(map) => map.values().any(|v| pred(*v)),
        }
    }

    /// Transform every value.
    #[must_use]
    pub fn map<U>(self, f: impl Fn(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Definite(v) => Outcome::Definite(f(v)),
            Outcome::PerYear(map) => {
                Outcome::PerYear(map.into_iter().map(|(y, v)| (y, f(v))).collect())
            }
        }
    }

    /// Combine with another outcome.
    ///
    /// A definite side applies to every year of the other side; two per-year
    /// sides combine over the years they share, other years are dropped.
    #[must_use]
    pub fn combine<U: Copy, V>(&self, other: &Outcome<U>, f: impl Fn(T, U) -> V) -> Outcome<V> {
        match (self, other) {
            (Outcome::Definite(a), Outcome::Definite(b)) => Outcome::Definite(f(*a, *b)),
            (Outcome::Definite(a), Outcome::PerYear(map)) => {
                Outcome::PerYear(map.iter().map(|(y, b)| (*y, f(*a, *b))).collect())
            }
            (Outcome::PerYear(map), Outcome::Definite(b)) => {
                Outcome::PerYear(map.iter().map(|(y, a)| (*y, f(*a, *b))).collect())
            }
            (Outcome::PerYear(left), Outcome::PerYear(right)) => Outcome::PerYear(
                left.iter()
                    .filter_map(|(y, a)| right.get(y).map(|b| (*y, f(*a, *b))))
                    .collect(),
            ),
        }
    }
}

/// Result of comparing two runs of elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    /// The same ordering in every year
    Definite(Ordering),

    /// The ordering in each representative year
    PerYear(BTreeMap<i16, Ordering>),

    /// The runs cannot be ordered
    Incomparable,
}

impl Comparison {
    /// Convert into an [`Outcome`], `None` when incomparable.
    #[must_use]
    pub fn into_outcome(self) -> Option<Outcome<Ordering>> {
        match self {
            Comparison::Definite(o) => Some(Outcome::Definite(o)),
            Comparison::PerYear(map) => Some(Outcome::PerYear(map)),
            Comparison::Incomparable => None,
        }
    }

    /// Swap the two sides of the comparison.
    #[must_use]
    pub fn reverse(self) -> Self {
        match self {
            Comparison::Definite(o) => Comparison::Definite(o.reverse()),
            Comparison::PerYear(map) => {
                Comparison::PerYear(map.into_iter().map(|(y, o)| (y, o.reverse())).collect())
            }
            Comparison::Incomparable => Comparison::Incomparable,
        }
    }
}

/// Intersect optional year sets, `None` meaning every year.
#[must_use]
pub fn intersect_years(
    a: Option<BTreeSet<i16>>,
    b: Option<&BTreeSet<i16>>,
) -> Option<BTreeSet<i16>> {
    match (a, b) {
        (None, None) => None,
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b.clone()),
        (Some(a), Some(b)) => Some(a.intersection(b).copied().collect()),
    }
}
