// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Entropy read sequentially from an OS device file.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Blocking entropy device used when no path is given.
pub const DEFAULT_ENTROPY_DEVICE: &str = "/dev/random";

/// Entropy source reading raw bytes from a device such as `/dev/random`.
///
/// The device handle is acquired by [`open`](Self::open) and released when
/// the source is dropped, on every exit path. Reads block until the device
/// delivers the requested bytes.
///
/// The handle is read through `&File`, so a single source must not be shared
/// between threads: interleaved reads would hand the same stream to several
/// consumers.
#[derive(Debug)]
pub struct DeviceEntropySource {
    path: PathBuf,
    file: File,
}

impl DeviceEntropySource {
    /// Opens the entropy device at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::Device`] if the device cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, EntropyError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)?;

        tracing::debug!(device = %path.display(), "opened entropy device");

        Ok(Self { path, file })
    }

    /// Opens [`DEFAULT_ENTROPY_DEVICE`].
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::Device`] if the device cannot be opened.
    pub fn open_default() -> Result<Self, EntropyError> {
        Self::open(DEFAULT_ENTROPY_DEVICE)
    }

    /// Path of the underlying device.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EntropySource for DeviceEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (&self.file).read_exact(dest).map_err(|err| match err.kind() {
            ErrorKind::UnexpectedEof => EntropyError::DeviceClosed,
            _ => EntropyError::Device(err),
        })
    }
}
