// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::support::test_utils::{CountingBitSource, ScriptedBitSource};
use crate::traits::BitSource;

#[test]
fn test_counting_bit_source_counts_successful_reads() {
    let mut bits = CountingBitSource::new(ScriptedBitSource::new([true, false]));

    assert!(bits.next_bit().is_ok());
    assert!(bits.next_bit().is_ok());
    assert!(bits.next_bit().is_err());

    assert_eq!(bits.count(), 2);
}

#[test]
fn test_counting_bit_source_reset_count() {
    let mut bits = CountingBitSource::new(ScriptedBitSource::new([true, true, true]));

    bits.next_bit().expect("Failed to next_bit()");
    bits.reset_count();
    bits.next_bit().expect("Failed to next_bit()");

    assert_eq!(bits.count(), 1);
    assert_eq!(bits.into_inner().remaining(), 1);
}
