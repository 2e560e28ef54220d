// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::support::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
use crate::traits::EntropySource;

#[test]
fn test_mock_entropy_source_behaviour_none() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut buf = [0u8; 32];

    let result = mock.fill_bytes(&mut buf);

    assert!(result.is_ok());
    assert_eq!(mock.call_count(), 1);
}

#[test]
fn test_mock_entropy_source_behaviour_fail_always() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
    let mut buf = [0u8; 32];

    for _ in 0..3 {
        let result = mock.fill_bytes(&mut buf);
        assert!(matches!(result, Err(EntropyError::EntropyNotAvailable)));
    }

    assert_eq!(mock.call_count(), 3);
}

#[test]
fn test_mock_entropy_source_fail_at_nth_fill_bytes() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAtNthFillBytes(2));
    let mut buf = [0u8; 8];

    assert!(mock.fill_bytes(&mut buf).is_ok());
    assert!(matches!(mock.fill_bytes(&mut buf), Err(EntropyError::EntropyNotAvailable)));
    assert!(mock.fill_bytes(&mut buf).is_ok());
}

#[test]
fn test_mock_entropy_source_close_at_nth_fill_bytes() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::CloseAtNthFillBytes(1));
    let mut buf = [0u8; 8];

    assert!(matches!(mock.fill_bytes(&mut buf), Err(EntropyError::DeviceClosed)));
    assert!(mock.fill_bytes(&mut buf).is_ok());
}

#[test]
fn test_mock_entropy_source_change_behaviour() {
    let mut mock = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut bytes = [0u8; 32];

    // First works
    assert!(mock.fill_bytes(&mut bytes).is_ok());

    // Change behaviour
    mock.change_behaviour(MockEntropySourceBehaviour::FailAlways);

    // Now fails
    assert!(mock.fill_bytes(&mut bytes).is_err());

    // Change back
    mock.change_behaviour(MockEntropySourceBehaviour::None);

    // Works again
    assert!(mock.fill_bytes(&mut bytes).is_ok());
}

#[test]
fn test_mock_entropy_source_reset_count() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut buf = [0u8; 4];

    mock.fill_bytes(&mut buf).expect("Failed to fill_bytes(..)");
    assert_eq!(mock.call_count(), 1);

    mock.reset_count();
    assert_eq!(mock.call_count(), 0);
}
