// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for mocking entropy and bit sources.
//!
//! Provides mock implementations with configurable behavior and deterministic
//! scripted streams, plus a wrapper that counts consumed bits.

mod counting_bit_source;
mod mock_entropy_source;
mod scripted_bit_source;
mod scripted_entropy_source;

pub use counting_bit_source::CountingBitSource;
pub use mock_entropy_source::{MockEntropySource, MockEntropySourceBehaviour};
pub use scripted_bit_source::ScriptedBitSource;
pub use scripted_entropy_source::ScriptedEntropySource;
