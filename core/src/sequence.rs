// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Resolve which calendar sequence a set of elements belongs to, and check
//! that the elements form a contiguous, valid run of that sequence.

use std::collections::HashSet;
use std::fmt;

use tempora_units::calendar::{days_in_month, is_leap_year, weeks_in_year};
use tempora_units::{Unit, join_units};

use crate::{Element, ErrorKind};

/// Errors raised while resolving or validating a run of elements
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// No elements were given
    #[error("No valid elements")]
    Empty,

    /// The units do not all belong to one sequence
    #[error("Units {} do not belong to a single sequence", join_units(.units))]
    NoSequence {
        /// Units that were given
        units: Vec<Unit>,
    },

    /// A unit occurs more than once
    #[error("Duplicate unit {unit}")]
    DuplicateUnit {
        /// The repeated unit
        unit: Unit,
    },

    /// Units between the first and the last are missing
    #[error("Missing units {}", join_units(.units))]
    MissingUnits {
        /// Units absent from the run
        units: Vec<Unit>,
    },

    /// The elements are not in sequence order
    #[error("Elements are not sorted: {}", join_units(.units))]
    Unsorted {
        /// Units in the order they were given
        units: Vec<Unit>,
    },

    /// The day does not exist in the month
    #[error("Day {day} does not exist in month {month} ({max} days)")]
    DayOutOfMonth {
        /// The day given
        day: u16,
        /// The month given
        month: u16,
        /// Number of days of that month
        max: u16,
    },

    /// Week 53 requested in a year with 52 ISO weeks
    #[error("Year {year} has no ISO week 53")]
    NoWeek53 {
        /// The year given
        year: u16,
    },
}

impl SequenceError {
    /// Category of the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            SequenceError::Empty | SequenceError::MissingUnits { .. } => ErrorKind::Argument,
            _ => ErrorKind::Creation,
        }
    }
}

/// Ordered unit sequence of a calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sequence {
    /// Year, month, day, hour, minute, second
    Gregorian,

    /// Year, ISO week, ISO weekday, hour, minute, second
    Iso,
}

const GREGORIAN_UNITS: [Unit; 6] = [
    Unit::Year,
    Unit::Month,
    Unit::Day,
    Unit::Hour,
    Unit::Minute,
    Unit::Second,
];

const ISO_UNITS: [Unit; 6] = [
    Unit::Year,
    Unit::Week,
    Unit::Weekday,
    Unit::Hour,
    Unit::Minute,
    Unit::Second,
];

impl Sequence {
    /// Sequences in resolution order; units shared by both resolve to
    /// the Gregorian sequence.
    pub const ALL: [Sequence; 2] = [Sequence::Gregorian, Sequence::Iso];

    /// Units of the sequence, most significant first.
    #[must_use]
    pub const fn units(self) -> &'static [Unit; 6] {
        match self {
            Sequence::Gregorian => &GREGORIAN_UNITS,
            Sequence::Iso => &ISO_UNITS,
        }
    }

    /// Name of the sequence.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Sequence::Gregorian => "gregorian",
            Sequence::Iso => "iso",
        }
    }

    /// Position of a unit in the sequence.
    #[must_use]
    pub fn index_of(self, unit: Unit) -> Option<usize> {
        self.units().iter().position(|u| *u == unit)
    }

    /// Whether the sequence contains the unit.
    #[must_use]
    pub fn contains(self, unit: Unit) -> bool {
        self.index_of(unit).is_some()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

/// Which sequences the two bounds of a span use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceCombination {
    /// Both Gregorian
    Gregorian,

    /// Both ISO
    Iso,

    /// One of each
    Mixed,
}

impl SequenceCombination {
    /// Combine the sequences of two points.
    #[must_use]
    pub const fn of(a: Sequence, b: Sequence) -> Self {
        match (a, b) {
            (Sequence::Gregorian, Sequence::Gregorian) => SequenceCombination::Gregorian,
            (Sequence::Iso, Sequence::Iso) => SequenceCombination::Iso,
            _ => SequenceCombination::Mixed,
        }
    }
}

/// Elements arranged in sequence order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sorted {
    /// Sequence of the elements
    pub sequence: Sequence,
    /// Sequence index of the most significant element
    pub first: usize,
    /// One slot per unit from the first to the last element, `None` where
    /// a unit is missing
    pub slots: Vec<Option<Element>>,
    /// Units missing between the first and the last element
    pub missing: Vec<Unit>,
}

impl Sorted {
    /// Present elements, in sequence order.
    #[must_use]
    pub fn elements(&self) -> Vec<Element> {
        self.slots.iter().flatten().copied().collect()
    }
}

/// Units more and less significant than a run of elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverUnder {
    /// Units above the first element
    pub over: &'static [Unit],
    /// Units below the last element
    pub under: &'static [Unit],
}

/// The sequence containing every unit of the elements, regardless of order.
#[must_use]
pub fn sequence_of(elements: &[Element]) -> Option<Sequence> {
    if elements.is_empty() {
        return None;
    }
    Sequence::ALL
        .into_iter()
        .find(|seq| elements.iter().all(|el| seq.contains(el.unit())))
}

fn units_of(elements: &[Element]) -> Vec<Unit> {
    elements.iter().map(Element::unit).collect()
}

fn resolve(elements: &[Element]) -> Result<Sequence, SequenceError> {
    if elements.is_empty() {
        return Err(SequenceError::Empty);
    }
    let sequence = sequence_of(elements).ok_or_else(|| SequenceError::NoSequence {
        units: units_of(elements),
    })?;

    let mut seen = HashSet::new();
    if let Some(el) = elements.iter().find(|el| !seen.insert(el.unit())) {
        return Err(SequenceError::DuplicateUnit { unit: el.unit() });
    }
    Ok(sequence)
}

/// Arrange elements in sequence order, recording gaps.
///
/// ## Errors
/// Fails when the elements are empty, belong to no sequence or repeat a unit.
pub fn sort_by_sequence(elements: &[Element]) -> Result<Sorted, SequenceError> {
    let sequence = resolve(elements)?;
    let indices = elements
        .iter()
        .filter_map(|el| sequence.index_of(el.unit()))
        .collect::<Vec<_>>();
    let first = indices.iter().copied().min().unwrap_or_default();
    let last = indices.iter().copied().max().unwrap_or_default();

    let mut slots = Vec::with_capacity(last - first + 1);
    let mut missing = Vec::new();
    for unit in sequence.units().iter().take(last + 1).skip(first) {
        let el = elements.iter().find(|el| el.unit() == *unit).copied();
        if el.is_none() {
            missing.push(*unit);
        }
        slots.push(el);
    }

    Ok(Sorted {
        sequence,
        first,
        slots,
        missing,
    })
}

/// Units of the sequence above and below the elements.
///
/// ## Errors
/// Fails under the same conditions as [`sort_by_sequence`].
pub fn over_under(elements: &[Element]) -> Result<OverUnder, SequenceError> {
    let sorted = sort_by_sequence(elements)?;
    let units: &'static [Unit] = sorted.sequence.units();
    let last = sorted.first + sorted.slots.len();
    Ok(OverUnder {
        over: units.get(..sorted.first).unwrap_or_default(),
        under: units.get(last..).unwrap_or_default(),
    })
}

fn value_of(elements: &[Element], unit: Unit) -> Option<u16> {
    elements
        .iter()
        .find(|el| el.unit() == unit)
        .map(Element::value)
}

/// Check the calendar constraints between element values: the day must
/// exist in the month, and week 53 must exist in the year.
fn check_values(elements: &[Element]) -> Result<(), SequenceError> {
    let year = value_of(elements, Unit::Year).and_then(|y| i16::try_from(y).ok());

    if let (Some(month), Some(day)) = (
        value_of(elements, Unit::Month),
        value_of(elements, Unit::Day),
    ) {
        // Without a year, February 29 is allowed
        let max = days_in_month(month, year.is_none_or(is_leap_year));
        if day > max {
            return Err(SequenceError::DayOutOfMonth { day, month, max });
        }
    }

    if let (Some(year), Some(week)) = (year, value_of(elements, Unit::Week))
        && week > weeks_in_year(year)
    {
        return Err(SequenceError::NoWeek53 {
            year: year.unsigned_abs(),
        });
    }

    Ok(())
}

/// Validate elements that are expected to already form an ordered run.
///
/// The checks run in order: a single sequence, no duplicate units, no gaps,
/// calendar value constraints, and sequence order. The first failing check
/// is reported.
///
/// ## Errors
/// Returns the first violated constraint.
pub fn validate_ordered(elements: &[Element]) -> Result<Sequence, SequenceError> {
    let sorted = sort_by_sequence(elements)?;
    if !sorted.missing.is_empty() {
        return Err(SequenceError::MissingUnits {
            units: sorted.missing,
        });
    }

    check_values(elements)?;

    let sorted_order = elements
        .windows(2)
        .all(|pair| matches!(pair, [a, b] if a.unit().joins_under(b.unit())));
    if !sorted_order {
        return Err(SequenceError::Unsorted {
            units: units_of(elements),
        });
    }

    Ok(sorted.sequence)
}
