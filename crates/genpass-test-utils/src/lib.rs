// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for genpass crates.
//!
//! Goodness-of-fit helpers used by the uniformity tests of the sampler and
//! the generators.
//!
//! ## License
//!
//! GPL-3.0-only

#[cfg(test)]
mod tests;

mod uniformity;

pub use uniformity::{Z_999, assert_uniform, chi_squared, chi_squared_critical, histogram};
