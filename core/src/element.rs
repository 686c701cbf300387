// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! A single `(unit, value)` pair.

use std::{cmp::Ordering, fmt, str::FromStr};

use tempora_units::{Unit, UnitError, match_token};

use crate::ErrorKind;

/// Errors raised while building or comparing elements
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ElementError {
    /// The unit code is unknown
    #[error("Invalid unit '{code}'")]
    InvalidUnit {
        /// The code that was given
        code: String,
    },

    /// The value is outside the domain of the unit
    #[error("Value {value} is out of range for unit {unit} ({min}..={max})")]
    InvalidValue {
        /// Unit of the element
        unit: Unit,
        /// The rejected value
        value: u16,
        /// Smallest allowed value
        min: u16,
        /// Largest allowed value
        max: u16,
    },

    /// No unit pattern matches the whole token
    #[error("No unit pattern matches '{token}'")]
    NoMatch {
        /// The token that was given
        token: String,
    },

    /// Elements of different units have no order
    #[error("Cannot order elements of different units: {left} and {right}")]
    CrossUnit {
        /// Unit of the left-hand element
        left: Unit,
        /// Unit of the right-hand element
        right: Unit,
    },
}

impl ElementError {
    /// Category of the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            ElementError::InvalidUnit { .. } | ElementError::InvalidValue { .. } => {
                ErrorKind::Argument
            }
            ElementError::NoMatch { .. } => ErrorKind::StringParse,
            ElementError::CrossUnit { .. } => ErrorKind::NotComparable,
        }
    }
}

impl From<UnitError> for ElementError {
    fn from(err: UnitError) -> Self {
        match err {
            UnitError::OutOfDomain {
                unit,
                value,
                min,
                max,
            } => ElementError::InvalidValue {
                unit,
                value,
                min,
                max,
            },
            UnitError::UnknownUnit { code } => ElementError::InvalidUnit { code },
            other => ElementError::InvalidUnit {
                code: other.to_string(),
            },
        }
    }
}

/// A validated time element, such as `YR=2023` or `MH=8`.
///
/// Elements of the same unit are ordered by value; elements of different
/// units are unordered and [`Element::try_cmp`] reports it as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element {
    unit: Unit,
    value: u16,
}

impl Element {
    /// Create an element, checking the value against the unit domain.
    ///
    /// ## Errors
    /// Returns [`ElementError::InvalidValue`] when the value is out of range.
    pub fn new(unit: Unit, value: u16) -> Result<Self, ElementError> {
        let value = unit.spec().check(value)?;
        Ok(Self { unit, value })
    }

    /// Create an element from a unit code such as `"DY"`.
    ///
    /// ## Errors
    /// Returns [`ElementError::InvalidUnit`] for unknown codes and
    /// [`ElementError::InvalidValue`] for out of range values.
    pub fn from_code(code: &str, value: u16) -> Result<Self, ElementError> {
        let unit = code.parse::<Unit>()?;
        Self::new(unit, value)
    }

    /// Element whose value is known to lie in the unit domain.
    pub(crate) const fn from_parts(unit: Unit, value: u16) -> Self {
        Self { unit, value }
    }

    /// Parse a single token in either grammar, e.g. `-08-` or `Aug`.
    ///
    /// ## Errors
    /// Returns [`ElementError::NoMatch`] when the whole token is not one unit
    /// token, or a validation error when the value is out of range.
    pub fn parse(token: &str) -> Result<Self, ElementError> {
        match match_token(token) {
            Some(t) if t.len == token.len() => Self::new(t.unit, t.value),
            _ => Err(ElementError::NoMatch {
                token: token.to_string(),
            }),
        }
    }

    /// Unit of the element.
    #[must_use]
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// Value of the element.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.value
    }

    /// Render in the default grammar.
    #[must_use]
    pub fn to_default_string(&self) -> String {
        self.unit.spec().format_default(self.value)
    }

    /// Render in the alternative grammar.
    #[must_use]
    pub fn to_alternative_string(&self) -> String {
        self.unit.spec().format_alternative(self.value)
    }

    /// Order two elements of the same unit.
    ///
    /// ## Errors
    /// Returns [`ElementError::CrossUnit`] when the units differ.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, ElementError> {
        self.partial_cmp(other).ok_or(ElementError::CrossUnit {
            left: self.unit,
            right: other.unit,
        })
    }
}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.unit == other.unit).then(|| self.value.cmp(&other.value))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_default_string())
    }
}

impl FromStr for Element {
    type Err = ElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_domain() {
        assert!(Element::new(Unit::Month, 12).is_ok());
        assert_eq!(
            Element::new(Unit::Month, 13),
            Err(ElementError::InvalidValue {
                unit: Unit::Month,
                value: 13,
                min: 1,
                max: 12,
            })
        );
        assert!(Element::new(Unit::Hour, 0).is_ok());
        assert!(Element::new(Unit::Week, 0).is_err());
        assert!(Element::new(Unit::Year, 1799).is_err());
    }

    #[test]
    fn test_from_code() {
        let el = Element::from_code("DY", 20).unwrap();
        assert_eq!((el.unit(), el.value()), (Unit::Day, 20));

        let err = Element::from_code("XX", 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
        assert!(matches!(err, ElementError::InvalidUnit { code } if code == "XX"));
    }

    #[test]
    fn test_parse_tokens() {
        for (token, unit, value) in [
            ("2023", Unit::Year, 2023),
            ("Y2023", Unit::Year, 2023),
            ("-08-", Unit::Month, 8),
            ("Aug", Unit::Month, 8),
            ("29", Unit::Day, 29),
            ("D29", Unit::Day, 29),
            ("-W34", Unit::Week, 34),
            ("-5", Unit::Weekday, 5),
            ("FR", Unit::Weekday, 5),
            ("T23", Unit::Hour, 23),
            (":53", Unit::Minute, 53),
            (":30.", Unit::Second, 30),
            ("S30", Unit::Second, 30),
        ] {
            let el = Element::parse(token)
                .unwrap_or_else(|e| panic!("Failed to parse '{token}': {e}"));
            assert_eq!((el.unit(), el.value()), (unit, value), "Parsed '{token}'");
        }
    }

    #[test]
    fn test_parse_rejects_partial_tokens() {
        for token in ["2023-08-", "", "hello", "-13-"] {
            let err = token.parse::<Element>().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::StringParse, "Token '{token}'");
        }
    }

    #[test]
    fn test_parse_out_of_domain_year() {
        let err = Element::parse("1700").unwrap_err();
        assert!(matches!(err, ElementError::InvalidValue { unit: Unit::Year, .. }));
    }

    #[test]
    fn test_renderings() {
        let el = Element::new(Unit::Month, 9).unwrap();
        assert_eq!(el.to_string(), "-09-");
        assert_eq!(el.to_alternative_string(), "Sep");
    }

    #[test]
    fn test_ordering_within_unit_only() {
        let a = Element::new(Unit::Day, 1).unwrap();
        let b = Element::new(Unit::Day, 2).unwrap();
        let c = Element::new(Unit::Hour, 2).unwrap();

        assert!(a < b);
        assert_eq!(a.try_cmp(&b), Ok(Ordering::Less));
        assert_eq!(a.partial_cmp(&c), None);
        assert_eq!(
            b.try_cmp(&c),
            Err(ElementError::CrossUnit {
                left: Unit::Day,
                right: Unit::Hour,
            })
        );
    }
}
