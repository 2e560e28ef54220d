// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::support::test_utils::ScriptedEntropySource;
use crate::traits::EntropySource;

#[test]
fn test_scripted_entropy_source_replays_bytes() {
    let source = ScriptedEntropySource::new([9, 8, 7]);
    let mut buf = [0u8; 2];

    source.fill_bytes(&mut buf).expect("Failed to fill_bytes(..)");

    assert_eq!(buf, [9, 8]);
    assert_eq!(source.bytes_read(), 2);
}

#[test]
fn test_scripted_entropy_source_closes_when_exhausted() {
    let source = ScriptedEntropySource::new([9, 8, 7]);
    let mut buf = [0u8; 2];

    source.fill_bytes(&mut buf).expect("Failed to fill_bytes(..)");
    let result = source.fill_bytes(&mut buf);

    assert!(matches!(result, Err(EntropyError::DeviceClosed)));
    // A failed read consumes nothing
    assert_eq!(source.bytes_read(), 2);
}
