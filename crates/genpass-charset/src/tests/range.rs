// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::range::CodepointRange;

// =============================================================================
// new(), single()
// =============================================================================

#[test]
fn test_new_accepts_valid_ranges() {
    let range = CodepointRange::new(0x61, 0x7B).expect("Failed to create range");

    assert_eq!(range.start(), 0x61);
    assert_eq!(range.stop(), 0x7B);
    assert_eq!(range.len(), 26);
}

#[test]
fn test_new_rejects_invalid_ranges() {
    assert_eq!(CodepointRange::new(5, 5), None);
    assert_eq!(CodepointRange::new(6, 5), None);
    assert_eq!(CodepointRange::new(0x10_FFFF, 0x11_0001), None);
    assert_eq!(CodepointRange::new(0xD7FF, 0xD801), None);
    assert_eq!(CodepointRange::new(0xDFFF, 0xE001), None);

    assert!(CodepointRange::new(0xD000, 0xD800).is_some());
    assert!(CodepointRange::new(0xE000, 0x11_0000).is_some());
}

#[test]
fn test_single() {
    let range = CodepointRange::single('é');

    assert_eq!(range.len(), 1);
    assert!(range.contains('é' as u32));
    assert_eq!(range.get(0), Some('é'));
}

// =============================================================================
// inclusive()
// =============================================================================

#[test]
fn test_inclusive_plain() {
    let ranges: Vec<CodepointRange> = CodepointRange::inclusive('a', 'z').collect();

    assert_eq!(ranges, [CodepointRange::new(0x61, 0x7B).expect("Failed to create range")]);
}

#[test]
fn test_inclusive_splits_around_surrogates() {
    let ranges: Vec<CodepointRange> =
        CodepointRange::inclusive('\u{D000}', '\u{E0FF}').collect();

    assert_eq!(ranges.len(), 2);
    assert_eq!((ranges[0].start(), ranges[0].stop()), (0xD000, 0xD800));
    assert_eq!((ranges[1].start(), ranges[1].stop()), (0xE000, 0xE100));
}

#[test]
fn test_inclusive_inverted_is_empty() {
    assert_eq!(CodepointRange::inclusive('z', 'a').count(), 0);
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn test_intersects() {
    let am = CodepointRange::new(0x61, 0x6E).expect("Failed to create a-m");
    let az = CodepointRange::new(0x61, 0x7B).expect("Failed to create a-z");
    let nz = CodepointRange::new(0x6E, 0x7B).expect("Failed to create n-z");
    let b = CodepointRange::single('b');

    assert!(am.intersects(&az));
    assert!(az.intersects(&b));
    assert!(b.intersects(&az));
    assert!(!am.intersects(&nz));
    assert!(!nz.intersects(&am));
}

#[test]
fn test_get_and_chars() {
    let range = CodepointRange::new(0x30, 0x3A).expect("Failed to create 0-9");

    assert_eq!(range.get(0), Some('0'));
    assert_eq!(range.get(9), Some('9'));
    assert_eq!(range.get(10), None);
    assert_eq!(range.chars().collect::<String>(), "0123456789");
}

#[test]
fn test_display() {
    let single = CodepointRange::single('A');
    let span = CodepointRange::new(0x1F600, 0x1F650).expect("Failed to create range");

    assert_eq!(single.to_string(), "U+0041");
    assert_eq!(span.to_string(), "U+1F600..=U+1F64F");
}
