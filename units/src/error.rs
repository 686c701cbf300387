// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::Unit;

/// Errors raised by the unit registry
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnitError {
    /// Unknown unit code
    #[error("Unknown unit code '{code}'")]
    UnknownUnit {
        /// The code that was given
        code: String,
    },

    /// Value outside the domain of a unit
    #[error("Value {value} is out of range for unit {unit} ({min}..={max})")]
    OutOfDomain {
        /// The unit being checked
        unit: Unit,
        /// The rejected value
        value: u16,
        /// Smallest allowed value
        min: u16,
        /// Largest allowed value
        max: u16,
    },
}
