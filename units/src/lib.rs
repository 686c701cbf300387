// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Unit registry for partial time points: the closed set of calendar units,
//! their value domains and text grammar, and the calendar arithmetic shared
//! by the Gregorian and ISO week sequences.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::missing_panics_doc)]

pub mod calendar;
mod error;
pub mod grammar;
mod keyword;
pub mod registry;
mod unit;

pub use crate::calendar::{Context, END_YEAR, START_YEAR};
pub use crate::error::UnitError;
pub use crate::grammar::{Form, Token, Tokenized, match_token, tokenize};
pub use crate::registry::{Domain, Format, Pattern, UNIT_SPECS, UnitSpec};
pub use crate::unit::{Unit, join_units};
