// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io;

use thiserror::Error;

/// Errors that can occur when reading random data.
///
/// None of them is recoverable by retrying inside this crate: a random stream
/// that failed once must not be silently replaced by a weaker one.
#[derive(Debug, Error)]
pub enum EntropyError {
    /// System entropy source is unavailable or failed to generate random data.
    #[error("EntropyNotAvailable")]
    EntropyNotAvailable,

    /// The entropy device reached end of file.
    #[error("entropy device closed")]
    DeviceClosed,

    /// Reading from or opening the entropy device failed.
    #[error("entropy device unreadable: {0}")]
    Device(#[from] io::Error),
}

/// Errors raised when a sampler is asked for an impossible progression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// The progression `lower, lower + step, ..` never reaches a value before `upper`.
    #[error("empty range: no value of {lower}..{upper} with step {step}")]
    EmptyRange {
        /// Inclusive first value.
        lower: i64,
        /// Exclusive bound.
        upper: i64,
        /// Distance between consecutive values.
        step: i64,
    },

    /// A step of zero describes no progression at all.
    #[error("step must not be zero")]
    ZeroStep,
}
