// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use crate::UnitError;
use crate::keyword::{
    KW_DAY, KW_HOUR, KW_MINUTE, KW_MONTH, KW_SECOND, KW_WEEK, KW_WEEKDAY, KW_YEAR,
};

macro_rules! impl_unit_code_mapping {
    (
        $(#[$attr:meta])*
        enum $ty:ident {
            $(
                $(#[$vattr:meta])*
                $variant:ident => $kw:ident
            ),+ $(,)?
        }
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $(#[$attr])*
        pub enum $ty {
            $(
                $(#[$vattr])*
                $variant,
            )+
        }

        impl $ty {
            /// Two-letter code of the unit
            #[must_use]
            pub const fn code(self) -> &'static str {
                match self {
                    $(
                        Self::$variant => $kw,
                    )+
                }
            }
        }

        impl FromStr for $ty {
            type Err = UnitError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(
                        $kw => Ok(Self::$variant),
                    )+
                    _ => Err(UnitError::UnknownUnit { code: s.to_string() }),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.code().fmt(f)
            }
        }
    };
}

impl_unit_code_mapping! {
    /// Calendar units a time element can carry
    enum Unit {
        /// Year
        Year => KW_YEAR,
        /// Month of year
        Month => KW_MONTH,
        /// ISO week of year
        Week => KW_WEEK,
        /// Day of month
        Day => KW_DAY,
        /// ISO weekday, Monday is 1
        Weekday => KW_WEEKDAY,
        /// Hour of day
        Hour => KW_HOUR,
        /// Minute of hour
        Minute => KW_MINUTE,
        /// Second of minute
        Second => KW_SECOND,
    }
}

impl Unit {
    /// All units in the order the text grammar tries them, finest first.
    pub const PARSE_ORDER: [Unit; 8] = [
        Unit::Second,
        Unit::Minute,
        Unit::Hour,
        Unit::Weekday,
        Unit::Week,
        Unit::Day,
        Unit::Month,
        Unit::Year,
    ];
}

/// Render a list of units as `YR, MH, DY`.
#[must_use]
pub fn join_units(units: &[Unit]) -> String {
    units
        .iter()
        .map(|u| u.code())
        .collect::<Vec<_>>()
        .join(", ")
}
