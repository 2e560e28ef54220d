// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::support::test_utils::ScriptedBitSource;
use crate::traits::BitSource;

#[test]
fn test_scripted_bit_source_from_values_is_lsb_first() {
    let mut bits = ScriptedBitSource::from_values([0b110, 0b001], 3);

    let drained: Vec<bool> = (0..6)
        .map(|_| bits.next_bit().expect("Failed to next_bit()"))
        .collect();

    assert_eq!(drained, [false, true, true, true, false, false]);
    assert_eq!(bits.consumed(), 6);
    assert_eq!(bits.remaining(), 0);
}

#[test]
fn test_scripted_bit_source_closes_when_exhausted() {
    let mut bits = ScriptedBitSource::new([true]);

    assert!(bits.next_bit().expect("Failed to next_bit()"));
    assert!(matches!(bits.next_bit(), Err(EntropyError::DeviceClosed)));
    assert_eq!(bits.consumed(), 1);
}
