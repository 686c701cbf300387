// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar behaviour tests for the tempora-core crate.

mod compare;
mod containment;
mod occurrences;
mod points;
mod spans;
