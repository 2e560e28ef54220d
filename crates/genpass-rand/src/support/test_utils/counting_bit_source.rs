// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::traits::BitSource;

/// Wraps a [`BitSource`] and counts the bits pulled through it.
#[derive(Debug)]
pub struct CountingBitSource<B: BitSource> {
    inner: B,
    count: usize,
}

impl<B: BitSource> CountingBitSource<B> {
    /// Wraps `inner` with a zeroed counter.
    pub fn new(inner: B) -> Self {
        Self { inner, count: 0 }
    }

    /// Bits successfully read so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Resets the counter.
    pub fn reset_count(&mut self) {
        self.count = 0;
    }

    /// Returns the wrapped source.
    pub fn into_inner(self) -> B {
        self.inner
    }
}

impl<B: BitSource> BitSource for CountingBitSource<B> {
    fn next_bit(&mut self) -> Result<bool, EntropyError> {
        let bit = self.inner.next_bit()?;
        self.count += 1;

        Ok(bit)
    }
}
