// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Point and span factories (fixtures)
//! - Assertions over year dependent outcomes

mod assertions;
mod fixtures;

#[allow(unused_imports)]
pub use assertions::{assert_definite, assert_per_year_consistent};
#[allow(unused_imports)]
pub use fixtures::{elements, point, span, with_year};
