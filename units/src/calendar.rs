// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar arithmetic over the supported year range.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

use jiff::civil::{Date, ISOWeekDate, Weekday};

use crate::Unit;

/// First supported year.
pub const START_YEAR: i16 = 1800;

/// Last supported year.
pub const END_YEAR: i16 = 2199;

const SECONDS_PER_DAY: u64 = 86_400;

// Representative years when a month length is needed without a year
const COMMON_YEAR: i16 = 2023;
const LEAP_YEAR: i16 = 2024;

static YEARS_WITH_53_WEEKS: LazyLock<BTreeSet<i16>> = LazyLock::new(|| {
    let years = supported_years()
        .filter(|&year| weeks_in_year(year) == 53)
        .collect::<BTreeSet<_>>();
    tracing::debug!(count = years.len(), "computed years with 53 ISO weeks");
    years
});

static LEAP_YEARS: LazyLock<BTreeSet<i16>> =
    LazyLock::new(|| supported_years().filter(|&year| is_leap_year(year)).collect());

/// The supported years, inclusive.
#[must_use]
pub fn supported_years() -> RangeInclusive<i16> {
    START_YEAR..=END_YEAR
}

/// Years in the supported range whose ISO calendar has 53 weeks.
#[must_use]
pub fn years_with_53_weeks() -> &'static BTreeSet<i16> {
    &YEARS_WITH_53_WEEKS
}

/// Leap years in the supported range.
#[must_use]
pub fn leap_years() -> &'static BTreeSet<i16> {
    &LEAP_YEARS
}

/// Whether the Gregorian year is a leap year.
#[must_use]
pub fn is_leap_year(year: i16) -> bool {
    Date::new(year, 1, 1).is_ok_and(|d| d.in_leap_year())
}

/// Number of ISO weeks in the year, 52 or 53.
#[must_use]
pub fn weeks_in_year(year: i16) -> u16 {
    // December 28 always falls in the last ISO week of its year
    Date::new(year, 12, 28)
        .ok()
        .and_then(|d| u16::try_from(d.iso_week_date().week()).ok())
        .unwrap_or(52)
}

/// Number of days in a month; out of range months report 31.
#[must_use]
pub fn days_in_month(month: u16, leap: bool) -> u16 {
    let year = if leap { LEAP_YEAR } else { COMMON_YEAR };
    i8::try_from(month)
        .ok()
        .and_then(|m| Date::new(year, m, 1).ok())
        .and_then(|d| u16::try_from(d.days_in_month()).ok())
        .unwrap_or(31)
}

/// Gregorian date, if it exists.
#[must_use]
pub fn gregorian_date(year: i16, month: u16, day: u16) -> Option<Date> {
    let month = i8::try_from(month).ok()?;
    let day = i8::try_from(day).ok()?;
    Date::new(year, month, day).ok()
}

/// Convert an ISO week date to its Gregorian date, if it exists.
///
/// Week one is the week containing January 4; a week 53 only exists in
/// [`years_with_53_weeks`].
#[must_use]
pub fn iso_week_date(year: i16, week: u16, weekday: u16) -> Option<Date> {
    let week = i8::try_from(week).ok()?;
    let weekday = Weekday::from_monday_one_offset(i8::try_from(weekday).ok()?).ok()?;
    ISOWeekDate::new(year, week, weekday).ok().map(ISOWeekDate::date)
}

/// What is known about the enclosing scope when measuring a unit.
///
/// An unknown year is treated as a leap year, the widest case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Context {
    /// Year, if known
    pub year: Option<i16>,
    /// Month, if known
    pub month: Option<u16>,
}

impl Context {
    /// Context with a known year.
    #[must_use]
    pub const fn year(year: i16) -> Self {
        Self {
            year: Some(year),
            month: None,
        }
    }

    /// Add a known month.
    #[must_use]
    pub const fn with_month(mut self, month: u16) -> Self {
        self.month = Some(month);
        self
    }

    /// Whether February has 29 days in this context.
    #[must_use]
    pub fn is_leap(&self) -> bool {
        self.year.is_none_or(is_leap_year)
    }
}

/// Smallest value of a unit.
#[must_use]
pub fn min_value(unit: Unit) -> u16 {
    unit.domain().min()
}

/// Largest value a unit can take in the given context.
#[must_use]
pub fn max_value(unit: Unit, ctx: Context) -> u16 {
    match unit {
        Unit::Day => ctx
            .month
            .map_or(31, |month| days_in_month(month, ctx.is_leap())),
        Unit::Week => ctx.year.map_or(53, weeks_in_year),
        _ => unit.domain().max(),
    }
}

/// Values from `start` up to the end of the enclosing scope, e.g. the
/// remaining days of a month.
#[must_use]
pub fn values_to_end_of_scope(unit: Unit, start: u16, ctx: Context) -> RangeInclusive<u16> {
    start.max(min_value(unit))..=max_value(unit, ctx)
}

/// Length of one unit in seconds.
#[must_use]
pub fn unit_as_seconds(unit: Unit, ctx: Context) -> u64 {
    match unit {
        Unit::Second => 1,
        Unit::Minute => 60,
        Unit::Hour => 3_600,
        Unit::Day | Unit::Weekday => SECONDS_PER_DAY,
        Unit::Week => 7 * SECONDS_PER_DAY,
        Unit::Month => {
            let days = ctx
                .month
                .map_or(31, |month| days_in_month(month, ctx.is_leap()));
            u64::from(days) * SECONDS_PER_DAY
        }
        Unit::Year => {
            let days = if ctx.is_leap() { 366 } else { 365 };
            days * SECONDS_PER_DAY
        }
    }
}
