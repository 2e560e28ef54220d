// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::traits::{BitSource, EntropySource};

/// Bit stream over an [`EntropySource`].
///
/// Fetches one byte at a time and hands out its 8 bits least significant
/// first before fetching the next byte. Nothing is buffered beyond the
/// current byte, so a process that dies mid-stream never replays bits.
///
/// # Example
///
/// ```rust
/// use genpass_rand::{BitSource, EntropyBitSource, SystemEntropySource};
///
/// let mut bits = EntropyBitSource::new(SystemEntropySource {});
/// let coin = bits.next_bit().expect("entropy available");
/// # let _ = coin;
/// ```
#[derive(Debug)]
pub struct EntropyBitSource<E: EntropySource> {
    entropy: E,
    byte: u8,
    remaining: u8,
}

impl<E: EntropySource> EntropyBitSource<E> {
    /// Creates a bit source. No byte is fetched until the first bit is requested.
    pub fn new(entropy: E) -> Self {
        Self {
            entropy,
            byte: 0,
            remaining: 0,
        }
    }

    /// Number of bits of the current byte not yet handed out.
    pub fn buffered_bits(&self) -> u8 {
        self.remaining
    }

    /// Returns the wrapped entropy source, discarding any undrained bits.
    pub fn into_inner(self) -> E {
        self.entropy
    }
}

impl<E: EntropySource> BitSource for EntropyBitSource<E> {
    fn next_bit(&mut self) -> Result<bool, EntropyError> {
        if self.remaining == 0 {
            let mut buf = [0u8; 1];
            self.entropy.fill_bytes(&mut buf)?;

            self.byte = buf[0];
            self.remaining = 8;
        }

        let bit = self.byte & 1 == 1;
        self.byte >>= 1;
        self.remaining -= 1;

        Ok(bit)
    }
}
