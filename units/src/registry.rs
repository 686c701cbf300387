// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Static description of every unit: value domain, text patterns, formats and
//! which units may sit directly above or below it in a sequence.

use crate::calendar::{END_YEAR, START_YEAR};
use crate::keyword::{MONTH_NAMES, WEEKDAY_NAMES};
use crate::{Unit, UnitError};

/// Values a unit may take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Inclusive numeric range
    Range {
        /// Smallest value
        min: u16,
        /// Largest value
        max: u16,
    },

    /// Enumerated names, the first name has value 1
    Named {
        /// Names in value order
        names: &'static [&'static str],
    },
}

impl Domain {
    /// Smallest value of the domain.
    #[must_use]
    pub const fn min(&self) -> u16 {
        match self {
            Domain::Range { min, .. } => *min,
            Domain::Named { .. } => 1,
        }
    }

    /// Largest value of the domain.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn max(&self) -> u16 {
        match self {
            Domain::Range { max, .. } => *max,
            Domain::Named { names } => names.len() as u16,
        }
    }

    /// Whether a value lies in the domain.
    #[must_use]
    pub const fn contains(&self, value: u16) -> bool {
        value >= self.min() && value <= self.max()
    }
}

/// Regular expression for one form of a unit token.
///
/// Group 1 captures the value text. A pattern with `digit_boundary` only
/// matches when the next character is not a digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    /// Unanchored pattern source
    pub regex: &'static str,
    /// Reject a match followed by a digit
    pub digit_boundary: bool,
}

/// Numeric rendering of a unit value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Format {
    /// Text before the value
    pub prefix: &'static str,
    /// Zero padded width, 0 for none
    pub width: usize,
    /// Text after the value
    pub suffix: &'static str,
}

impl Format {
    fn render(self, value: u16) -> String {
        format!(
            "{}{:0width$}{}",
            self.prefix,
            value,
            self.suffix,
            width = self.width
        )
    }
}

/// Registry entry for a single unit
#[derive(Debug, Clone)]
pub struct UnitSpec {
    /// The unit described
    pub unit: Unit,
    /// Allowed values
    pub domain: Domain,
    /// Pattern of the default grammar
    pub default_pattern: Pattern,
    /// Pattern of the alternative grammar
    pub alternative_pattern: Pattern,
    /// Rendering in the default grammar
    pub default_format: Format,
    /// Rendering in the alternative grammar, names are used when absent
    pub alternative_format: Option<Format>,
    /// Units that may appear immediately above this one
    pub over_join: &'static [Unit],
    /// Units that may appear immediately below this one
    pub under_join: &'static [Unit],
}

impl UnitSpec {
    /// Validate a value against the domain.
    ///
    /// ## Errors
    /// Returns [`UnitError::OutOfDomain`] when the value is not allowed.
    pub fn check(&self, value: u16) -> Result<u16, UnitError> {
        if self.domain.contains(value) {
            Ok(value)
        } else {
            Err(UnitError::OutOfDomain {
                unit: self.unit,
                value,
                min: self.domain.min(),
                max: self.domain.max(),
            })
        }
    }

    /// Resolve the text captured by a pattern: digits, or a name from the
    /// enumerated domain.
    #[must_use]
    pub fn value_of(&self, text: &str) -> Option<u16> {
        if let Domain::Named { names } = self.domain
            && let Some(i) = names.iter().position(|name| *name == text)
        {
            return u16::try_from(i + 1).ok();
        }
        text.parse().ok()
    }

    /// Render a value in the default grammar.
    #[must_use]
    pub fn format_default(&self, value: u16) -> String {
        self.default_format.render(value)
    }

    /// Render a value in the alternative grammar.
    #[must_use]
    pub fn format_alternative(&self, value: u16) -> String {
        match (self.alternative_format, self.domain) {
            (Some(format), _) => format.render(value),
            (None, Domain::Named { names }) => usize::from(value)
                .checked_sub(1)
                .and_then(|i| names.get(i))
                .map_or_else(|| value.to_string(), |name| (*name).to_string()),
            (None, Domain::Range { .. }) => value.to_string(),
        }
    }
}

const fn fmt(prefix: &'static str, width: usize, suffix: &'static str) -> Format {
    Format {
        prefix,
        width,
        suffix,
    }
}

const fn pat(regex: &'static str, digit_boundary: bool) -> Pattern {
    Pattern {
        regex,
        digit_boundary,
    }
}

static SECOND: UnitSpec = UnitSpec {
    unit: Unit::Second,
    domain: Domain::Range { min: 0, max: 59 },
    default_pattern: pat(r":([0-5]\d)\.", false),
    alternative_pattern: pat(r"S([0-5]\d)", false),
    default_format: fmt(":", 2, "."),
    alternative_format: Some(fmt("S", 2, "")),
    over_join: &[Unit::Minute],
    under_join: &[],
};

static MINUTE: UnitSpec = UnitSpec {
    unit: Unit::Minute,
    domain: Domain::Range { min: 0, max: 59 },
    default_pattern: pat(r":([0-5]\d)", false),
    alternative_pattern: pat(r"M([0-5]\d)", false),
    default_format: fmt(":", 2, ""),
    alternative_format: Some(fmt("M", 2, "")),
    over_join: &[Unit::Hour],
    under_join: &[Unit::Second],
};

static HOUR: UnitSpec = UnitSpec {
    unit: Unit::Hour,
    domain: Domain::Range { min: 0, max: 23 },
    default_pattern: pat(r"T([01]\d|2[0-3])", false),
    alternative_pattern: pat(r"H([01]\d|2[0-3])", false),
    default_format: fmt("T", 2, ""),
    alternative_format: Some(fmt("H", 2, "")),
    over_join: &[Unit::Day, Unit::Weekday],
    under_join: &[Unit::Minute],
};

static WEEKDAY: UnitSpec = UnitSpec {
    unit: Unit::Weekday,
    domain: Domain::Named {
        names: WEEKDAY_NAMES,
    },
    default_pattern: pat(r"-([1-7])", true),
    alternative_pattern: pat(r"(MO|TU|WE|TH|FR|SA|SU)", false),
    default_format: fmt("-", 0, ""),
    alternative_format: None,
    over_join: &[Unit::Week],
    under_join: &[Unit::Hour],
};

static WEEK: UnitSpec = UnitSpec {
    unit: Unit::Week,
    domain: Domain::Range { min: 1, max: 53 },
    default_pattern: pat(r"-W(0[1-9]|[1-4]\d|5[0-3])", false),
    alternative_pattern: pat(r"W(0[1-9]|[1-4]\d|5[0-3])", false),
    default_format: fmt("-W", 2, ""),
    alternative_format: Some(fmt("W", 2, "")),
    over_join: &[Unit::Year],
    under_join: &[Unit::Weekday],
};

static DAY: UnitSpec = UnitSpec {
    unit: Unit::Day,
    domain: Domain::Range { min: 1, max: 31 },
    default_pattern: pat(r"(0[1-9]|[12]\d|3[01])", true),
    alternative_pattern: pat(r"D(0[1-9]|[12]\d|3[01])", false),
    default_format: fmt("", 2, ""),
    alternative_format: Some(fmt("D", 2, "")),
    over_join: &[Unit::Month],
    under_join: &[Unit::Hour],
};

static MONTH: UnitSpec = UnitSpec {
    unit: Unit::Month,
    domain: Domain::Named { names: MONTH_NAMES },
    default_pattern: pat(r"-(0[1-9]|1[0-2])-", false),
    alternative_pattern: pat(r"(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)", false),
    default_format: fmt("-", 2, "-"),
    alternative_format: None,
    over_join: &[Unit::Year],
    under_join: &[Unit::Day],
};

static YEAR: UnitSpec = UnitSpec {
    unit: Unit::Year,
    domain: Domain::Range {
        min: START_YEAR.unsigned_abs(),
        max: END_YEAR.unsigned_abs(),
    },
    default_pattern: pat(r"(\d{4})", true),
    alternative_pattern: pat(r"Y(\d{4})", true),
    default_format: fmt("", 4, ""),
    alternative_format: Some(fmt("Y", 4, "")),
    over_join: &[],
    under_join: &[Unit::Week, Unit::Month],
};

/// Every registry entry, in the order the text grammar tries them.
pub static UNIT_SPECS: [&UnitSpec; 8] = [
    &SECOND, &MINUTE, &HOUR, &WEEKDAY, &WEEK, &DAY, &MONTH, &YEAR,
];

impl Unit {
    /// Registry entry of the unit.
    #[must_use]
    pub fn spec(self) -> &'static UnitSpec {
        match self {
            Unit::Year => &YEAR,
            Unit::Month => &MONTH,
            Unit::Week => &WEEK,
            Unit::Day => &DAY,
            Unit::Weekday => &WEEKDAY,
            Unit::Hour => &HOUR,
            Unit::Minute => &MINUTE,
            Unit::Second => &SECOND,
        }
    }

    /// Domain of the unit.
    #[must_use]
    pub fn domain(self) -> Domain {
        self.spec().domain
    }

    /// Whether `other` may directly follow this unit in a sequence.
    #[must_use]
    pub fn joins_under(self, other: Unit) -> bool {
        self.spec().under_join.contains(&other)
    }
}
