// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Entropy source replaying a fixed byte sequence.
///
/// Once the script is exhausted every read fails with
/// [`EntropyError::DeviceClosed`], like a device reaching end of file.
#[derive(Debug)]
pub struct ScriptedEntropySource {
    bytes: Vec<u8>,
    position: Cell<usize>,
}

impl ScriptedEntropySource {
    /// Creates a source that yields `bytes` in order.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            position: Cell::new(0),
        }
    }

    /// Bytes handed out so far.
    pub fn bytes_read(&self) -> usize {
        self.position.get()
    }
}

impl EntropySource for ScriptedEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let start = self.position.get();
        let end = start + dest.len();

        if end > self.bytes.len() {
            return Err(EntropyError::DeviceClosed);
        }

        dest.copy_from_slice(&self.bytes[start..end]);
        self.position.set(end);

        Ok(())
    }
}
