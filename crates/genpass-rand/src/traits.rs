// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;

/// Blocking source of uniformly random bytes.
///
/// Implementations must provide randomness suitable for secrets. They may
/// block for an unbounded time waiting for entropy, but must never return
/// non-random data in place of an error.
pub trait EntropySource {
    /// Fills the destination buffer with random bytes.
    ///
    /// # Errors
    ///
    /// Returns an [`EntropyError`] if the underlying source is unavailable,
    /// closed, or fails to deliver the requested bytes.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

impl<E: EntropySource + ?Sized> EntropySource for &E {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }
}

/// Stream of independent, uniformly distributed single bits.
///
/// Every call consumes one bit of entropy for good; bits are never replayed.
pub trait BitSource {
    /// Returns the next bit.
    ///
    /// # Errors
    ///
    /// Propagates the [`EntropyError`] of the underlying source. A failure is
    /// never reported as a zero bit.
    fn next_bit(&mut self) -> Result<bool, EntropyError>;
}

impl<B: BitSource + ?Sized> BitSource for &mut B {
    fn next_bit(&mut self) -> Result<bool, EntropyError> {
        (**self).next_bit()
    }
}
