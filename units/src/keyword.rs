// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Unit codes and the names used by the alternative text grammar.

pub const KW_YEAR: &str = "YR";
pub const KW_MONTH: &str = "MH";
pub const KW_WEEK: &str = "WK";
pub const KW_DAY: &str = "DY";
pub const KW_WEEKDAY: &str = "WY";
pub const KW_HOUR: &str = "HR";
pub const KW_MINUTE: &str = "ME";
pub const KW_SECOND: &str = "SD";

/// Month names, January first.
pub const MONTH_NAMES: &[&str] = &[
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// ISO weekday names, Monday first.
pub const WEEKDAY_NAMES: &[&str] = &["MO", "TU", "WE", "TH", "FR", "SA", "SU"];
