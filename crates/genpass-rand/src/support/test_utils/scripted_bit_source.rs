// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::VecDeque;

use crate::error::EntropyError;
use crate::traits::BitSource;

/// Bit source replaying a fixed sequence of bits.
///
/// Fails with [`EntropyError::DeviceClosed`] once the script is exhausted.
#[derive(Debug, Default)]
pub struct ScriptedBitSource {
    bits: VecDeque<bool>,
    consumed: usize,
}

impl ScriptedBitSource {
    /// Creates a source that yields `bits` in order.
    pub fn new(bits: impl IntoIterator<Item = bool>) -> Self {
        Self {
            bits: bits.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Creates a source yielding the low `width` bits of each value, least
    /// significant first: exactly the bits a sampler of that width reads to
    /// form `value`.
    pub fn from_values(values: impl IntoIterator<Item = u64>, width: u32) -> Self {
        Self::new(
            values
                .into_iter()
                .flat_map(|value| (0..width).map(move |i| (value >> i) & 1 == 1)),
        )
    }

    /// Bits handed out so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Bits left in the script.
    pub fn remaining(&self) -> usize {
        self.bits.len()
    }
}

impl BitSource for ScriptedBitSource {
    fn next_bit(&mut self) -> Result<bool, EntropyError> {
        let bit = self.bits.pop_front().ok_or(EntropyError::DeviceClosed)?;
        self.consumed += 1;

        Ok(bit)
    }
}
