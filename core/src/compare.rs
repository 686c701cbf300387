// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Ordering of partial runs of elements.
//!
//! Two runs are comparable when both are valid, start at the same scope and
//! end at the same sequence depth. If both carry a year they are compared as
//! instants. If both leave the year out the outcome may differ between
//! years: a leap day only exists in leap years, ISO week 53 only in some
//! years, and the Gregorian position of an ISO week drifts by a few days
//! from year to year. Such comparisons are evaluated in one or more
//! representative years and reported per year when more than one is needed.

use std::collections::BTreeMap;

use jiff::civil::{DateTime, Time};
use tempora_units::Unit;
use tempora_units::calendar::{
    gregorian_date, is_leap_year, iso_week_date, supported_years, years_with_53_weeks,
};

use crate::sequence::{Sequence, SequenceCombination, sort_by_sequence, validate_ordered};
use crate::{Comparison, Config, Element};

/// A validated run of elements laid out over its sequence
#[derive(Debug, Clone, Copy)]
struct Side {
    sequence: Sequence,
    first: usize,
    last: usize,
    values: [Option<u16>; 6],
}

impl Side {
    fn new(elements: &[Element]) -> Option<Self> {
        let sequence = validate_ordered(elements).ok()?;
        let sorted = sort_by_sequence(elements).ok()?;
        let mut values = [None; 6];
        for el in elements {
            let slot = sequence.index_of(el.unit()).and_then(|i| values.get_mut(i))?;
            *slot = Some(el.value());
        }
        Some(Self {
            sequence,
            first: sorted.first,
            last: sorted.first + sorted.slots.len() - 1,
            values,
        })
    }

    fn scope(&self) -> Option<Unit> {
        self.first
            .checked_sub(1)
            .and_then(|i| self.sequence.units().get(i).copied())
    }

    fn value(&self, unit: Unit) -> Option<u16> {
        self.sequence
            .index_of(unit)
            .and_then(|i| self.values.get(i).copied().flatten())
    }

    fn is_leap(&self) -> bool {
        match self.value(Unit::Year) {
            Some(year) => i16::try_from(year).is_ok_and(is_leap_year),
            None => self.value(Unit::Month) == Some(2) && self.value(Unit::Day) == Some(29),
        }
    }

    fn has_week_53(&self) -> bool {
        self.sequence == Sequence::Iso && self.value(Unit::Week) == Some(53)
    }

    fn present(&self) -> impl Iterator<Item = u16> + '_ {
        self.values.iter().flatten().copied()
    }

    /// The instant of the run in `year`, filling finer units with their
    /// minimum. `None` when the date does not exist in that year.
    fn instant(&self, year: Option<i16>) -> Option<DateTime> {
        let [y, b, c, h, mi, s] = self.values;
        let year = match (y, year) {
            (Some(y), _) => i16::try_from(y).ok()?,
            (None, Some(year)) => year,
            (None, None) => return None,
        };
        let (b, c) = (b.unwrap_or(1), c.unwrap_or(1));
        let date = match self.sequence {
            Sequence::Gregorian => gregorian_date(year, b, c)?,
            Sequence::Iso => iso_week_date(year, b, c)?,
        };
        let time = Time::new(
            i8::try_from(h.unwrap_or(0)).ok()?,
            i8::try_from(mi.unwrap_or(0)).ok()?,
            i8::try_from(s.unwrap_or(0)).ok()?,
            0,
        )
        .ok()?;
        Some(date.to_datetime(time))
    }
}

/// Compare two runs of elements with the installed [`Config`].
#[must_use]
pub fn compare(lhs: &[Element], rhs: &[Element]) -> Comparison {
    compare_with(Config::current(), lhs, rhs)
}

/// Compare two runs of elements with an explicit [`Config`].
#[must_use]
pub fn compare_with(config: &Config, lhs: &[Element], rhs: &[Element]) -> Comparison {
    let (Some(a), Some(b)) = (Side::new(lhs), Side::new(rhs)) else {
        return Comparison::Incomparable;
    };
    if a.first != b.first || a.last != b.last || a.scope() != b.scope() {
        return Comparison::Incomparable;
    }

    match a.first {
        0 => match (a.instant(None), b.instant(None)) {
            (Some(x), Some(y)) => Comparison::Definite(x.cmp(&y)),
            _ => Comparison::Incomparable,
        },
        1 => compare_in_years(config, &a, &b),
        // Same scope below the year means the same units on both sides
        _ => Comparison::Definite(a.present().cmp(b.present())),
    }
}

fn compare_in_years(config: &Config, a: &Side, b: &Side) -> Comparison {
    let combination = SequenceCombination::of(a.sequence, b.sequence);
    let leap = a.is_leap() || b.is_leap();
    let week_53 = a.has_week_53() || b.has_week_53();
    let representative = if leap {
        config.reference_leap_year
    } else {
        config.reference_year
    };

    let candidates: Vec<i16> = match combination {
        SequenceCombination::Gregorian => vec![representative],
        SequenceCombination::Iso if week_53 => years_with_53_weeks().iter().copied().collect(),
        SequenceCombination::Iso => vec![config.reference_year],
        SequenceCombination::Mixed => {
            let mut years: Vec<i16> = if week_53 {
                years_with_53_weeks().iter().copied().collect()
            } else if is_stable(config, a, b) {
                vec![representative]
            } else {
                supported_years().collect()
            };
            if leap {
                years.retain(|y| is_leap_year(*y));
            }
            years
        }
    };

    tracing::debug!(
        ?combination,
        leap,
        week_53,
        candidates = candidates.len(),
        "comparing in representative years"
    );

    let outcomes = candidates
        .iter()
        .filter_map(|&year| {
            let x = a.instant(Some(year))?;
            let y = b.instant(Some(year))?;
            Some((year, x.cmp(&y)))
        })
        .collect::<BTreeMap<_, _>>();

    let mut values = outcomes.values().copied();
    let Some(head) = values.next() else {
        return Comparison::Incomparable;
    };
    let everywhere = outcomes.len() == supported_years().len();
    if outcomes.len() == 1 || (everywhere && values.all(|o| o == head)) {
        Comparison::Definite(head)
    } else {
        Comparison::PerYear(outcomes)
    }
}

/// Whether a mixed ISO/Gregorian comparison is settled in the reference
/// year alone.
///
/// The ISO side is measured in days from the Sunday before week one and the
/// Gregorian side in days from January 1. That Sunday falls between four
/// days before and two days after December 31, so the drift window is
/// asymmetric and the threshold is a heuristic: a pair just beyond it can
/// still change order in some years.
fn is_stable(config: &Config, a: &Side, b: &Side) -> bool {
    let (iso, gregorian) = if a.sequence == Sequence::Iso {
        (a, b)
    } else {
        (b, a)
    };

    let week = i32::from(iso.value(Unit::Week).unwrap_or(1));
    let weekday = i32::from(iso.value(Unit::Weekday).unwrap_or(1));
    let iso_days = 7 * (week - 1) + weekday;

    let month = gregorian.value(Unit::Month).unwrap_or(1);
    let day = gregorian.value(Unit::Day).unwrap_or(1);
    let Some(date) = gregorian_date(config.reference_year, month, day)
        .or_else(|| gregorian_date(config.reference_leap_year, month, day))
    else {
        return false;
    };
    let gregorian_days = i32::from(date.day_of_year()) - 1;

    (iso_days - gregorian_days).abs() > config.iso_gregorian_threshold_days
}
