// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use genpass_test_utils::{assert_uniform, histogram};
use proptest::prelude::*;

use crate::bits::EntropyBitSource;
use crate::error::{EntropyError, SampleError};
use crate::sampler::{UniformSampler, bits_for, progression_len};
use crate::support::test_utils::{
    CountingBitSource, MockEntropySource, MockEntropySourceBehaviour, ScriptedBitSource,
    ScriptedEntropySource,
};
use crate::system::SystemEntropySource;

fn system_bits() -> EntropyBitSource<SystemEntropySource> {
    EntropyBitSource::new(SystemEntropySource {})
}

// =============================================================================
// progression_len(), bits_for()
// =============================================================================

#[test]
fn test_progression_len() {
    assert_eq!(progression_len(0, 10, 1), 10);
    assert_eq!(progression_len(0, 10, 3), 4); // 0, 3, 6, 9
    assert_eq!(progression_len(0, 9, 3), 3); // 0, 3, 6
    assert_eq!(progression_len(10, 0, -3), 4); // 10, 7, 4, 1
    assert_eq!(progression_len(-5, 5, 2), 5);
    assert_eq!(progression_len(5, 5, 1), 0);
    assert_eq!(progression_len(6, 5, 1), 0);
    assert_eq!(progression_len(0, 5, -1), 0);
    assert_eq!(progression_len(i64::MIN, i64::MAX, 1), u64::MAX);
}

#[test]
fn test_bits_for() {
    assert_eq!(bits_for(1), 0);
    assert_eq!(bits_for(2), 1);
    assert_eq!(bits_for(3), 2);
    assert_eq!(bits_for(4), 2);
    assert_eq!(bits_for(5), 3);
    assert_eq!(bits_for(36), 6);
    assert_eq!(bits_for(62), 6);
    assert_eq!(bits_for(64), 6);
    assert_eq!(bits_for(65), 7);
    assert_eq!(bits_for(u64::MAX), 64);
}

// =============================================================================
// new(), below()
// =============================================================================

#[test]
fn test_new_rejects_zero_step() {
    let result = UniformSampler::new(ScriptedBitSource::default(), 0, 10, 0);

    assert!(matches!(result, Err(SampleError::ZeroStep)));
}

#[test]
fn test_new_rejects_empty_and_inverted_ranges() {
    for (lower, upper, step) in [(0, 0, 1), (5, 1, 1), (1, 5, -1), (i64::MAX, i64::MIN, 7)] {
        let result = UniformSampler::new(ScriptedBitSource::default(), lower, upper, step);

        assert_eq!(
            result.err(),
            Some(SampleError::EmptyRange { lower, upper, step })
        );
    }
}

#[test]
fn test_below_rejects_non_positive_upper() {
    assert!(UniformSampler::below(ScriptedBitSource::default(), 0).is_err());
    assert!(UniformSampler::below(ScriptedBitSource::default(), -3).is_err());
}

#[test]
fn test_construction_reads_no_bits() {
    let mut bits = CountingBitSource::new(system_bits());

    let sampler = UniformSampler::below(&mut bits, 1000).expect("Failed to create sampler");
    assert_eq!(sampler.cardinality(), 1000);
    assert_eq!(sampler.bits_per_attempt(), 10);
    drop(sampler);

    assert_eq!(bits.count(), 0);
}

// =============================================================================
// draw()
// =============================================================================

#[test]
fn test_single_value_range_consumes_no_bits() {
    // An empty script fails on the first read.
    let bits = CountingBitSource::new(ScriptedBitSource::default());
    let mut sampler = UniformSampler::below(bits, 1).expect("Failed to create sampler");

    for _ in 0..100 {
        assert_eq!(sampler.draw().expect("Failed to draw()"), 0);
    }

    assert_eq!(sampler.into_inner().count(), 0);
}

#[test]
fn test_single_value_progression_yields_lower() {
    let mut sampler = UniformSampler::new(ScriptedBitSource::default(), 42, 43, 1)
        .expect("Failed to create sampler");

    assert_eq!(sampler.draw().expect("Failed to draw()"), 42);
}

#[test]
fn test_bits_are_weighted_lsb_first() {
    // true, false, false, true -> 1 + 8 = 9
    let bits = ScriptedBitSource::new([true, false, false, true]);
    let mut sampler = UniformSampler::below(bits, 16).expect("Failed to create sampler");

    assert_eq!(sampler.draw().expect("Failed to draw()"), 9);
}

#[test]
fn test_out_of_range_candidates_are_rejected() {
    // cardinality 5 -> 3 bits; 7, 6 and 5 are rejected, 4 accepted
    let bits = CountingBitSource::new(ScriptedBitSource::from_values([7, 6, 5, 4], 3));
    let mut sampler = UniformSampler::below(bits, 5).expect("Failed to create sampler");

    assert_eq!(sampler.draw().expect("Failed to draw()"), 4);

    // Each attempt costs exactly 3 bits, rejected ones included
    assert_eq!(sampler.into_inner().count(), 12);
}

#[test]
fn test_accepted_value_is_scaled_and_shifted() {
    // 10, 13, 16, 19, 22 -> index 3 is 19
    let bits = ScriptedBitSource::from_values([3], 3);
    let mut sampler = UniformSampler::new(bits, 10, 23, 3).expect("Failed to create sampler");

    assert_eq!(sampler.draw().expect("Failed to draw()"), 19);
}

#[test]
fn test_negative_step_walks_downwards() {
    // 10, 7, 4, 1 -> 2 bits
    let bits = ScriptedBitSource::from_values([0, 1, 2, 3], 2);
    let sampler = UniformSampler::new(bits, 10, 0, -3).expect("Failed to create sampler");

    let values: Vec<i64> = sampler
        .take(4)
        .collect::<Result<_, _>>()
        .expect("Failed to collect draws");

    assert_eq!(values, [10, 7, 4, 1]);
}

#[test]
fn test_full_i64_span() {
    // cardinality 2^64 - 1: all-ones is the single rejected pattern
    let bits = ScriptedBitSource::from_values([u64::MAX, 0, u64::MAX - 1], 64);
    let mut sampler =
        UniformSampler::new(bits, i64::MIN, i64::MAX, 1).expect("Failed to create sampler");

    assert_eq!(sampler.bits_per_attempt(), 64);
    assert_eq!(sampler.draw().expect("Failed to draw() (#0)"), i64::MIN);
    assert_eq!(sampler.draw().expect("Failed to draw() (#1)"), i64::MAX - 1);
}

#[test]
fn test_draw_propagates_entropy_error() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
    let mut sampler =
        UniformSampler::below(EntropyBitSource::new(&mock), 10).expect("Failed to create sampler");

    let result = sampler.draw();

    assert!(matches!(result, Err(EntropyError::EntropyNotAvailable)));
}

#[test]
fn test_iterator_stops_at_device_closed() {
    // One byte: 0b1110_0100 -> 2-bit candidates 0, 1, 2, 3
    let bits = EntropyBitSource::new(ScriptedEntropySource::new([0b1110_0100]));
    let sampler = UniformSampler::below(bits, 3).expect("Failed to create sampler");

    let result: Result<Vec<i64>, EntropyError> = sampler.collect();

    assert!(matches!(result, Err(EntropyError::DeviceClosed)));
}

#[test]
fn test_iterator_takes_exactly_n() {
    let bits = ScriptedBitSource::from_values([0, 1, 2, 3, 0, 1, 2, 3], 2);
    let mut sampler = UniformSampler::below(bits, 3).expect("Failed to create sampler");

    let values: Vec<i64> = sampler
        .by_ref()
        .take(4)
        .collect::<Result<_, _>>()
        .expect("Failed to collect draws");

    // 3 was rejected, so four values consumed five candidates
    assert_eq!(values, [0, 1, 2, 0]);
    assert_eq!(sampler.into_inner().remaining(), 6);
}

// =============================================================================
// Statistics
// =============================================================================

#[test]
fn test_uniformity_non_power_of_two() {
    const CARDINALITY: i64 = 37;
    const DRAWS: usize = 37 * 400;

    let sampler =
        UniformSampler::below(system_bits(), CARDINALITY).expect("Failed to create sampler");
    let samples = sampler
        .take(DRAWS)
        .map(|value| value.expect("Failed to draw()") as usize);

    assert_uniform(&histogram(samples, CARDINALITY as usize));
}

#[test]
fn test_uniformity_with_step() {
    let sampler =
        UniformSampler::new(system_bits(), -20, 20, 4).expect("Failed to create sampler");
    let samples = sampler
        .take(10 * 1000)
        .map(|value| ((value.expect("Failed to draw()") + 20) / 4) as usize);

    assert_uniform(&histogram(samples, 10));
}

#[test]
fn test_average_cost_stays_near_two_attempts() {
    // 33 is the worst case for 6 bits: 64/33 attempts per draw on average
    let mut bits = CountingBitSource::new(system_bits());
    let draws = 4000;

    {
        let sampler = UniformSampler::below(&mut bits, 33).expect("Failed to create sampler");
        for value in sampler.take(draws) {
            value.expect("Failed to draw()");
        }
    }

    let attempts = bits.count() / 6;
    assert_eq!(bits.count() % 6, 0);
    assert!(attempts < draws * 11 / 5, "{} attempts for {} draws", attempts, draws);
}

proptest! {
    #[test]
    fn prop_draws_stay_in_progression(
        lower in -1000i64..1000,
        len in 2i64..500,
        step in prop_oneof![-7i64..=-1, 1i64..=7],
        bytes in proptest::collection::vec(any::<u8>(), 32),
    ) {
        let upper = lower + len * step;
        let bits = EntropyBitSource::new(ScriptedEntropySource::new(bytes));
        let sampler = UniformSampler::new(bits, lower, upper, step)
            .expect("Failed to create sampler");

        for value in sampler {
            let Ok(value) = value else { break };

            prop_assert_eq!((value - lower) % step, 0);
            let index = (value - lower) / step;
            prop_assert!((0..len).contains(&index));
        }
    }

    #[test]
    fn prop_each_attempt_costs_exactly_num_bits(
        cardinality in 1u64..100_000,
        candidates in proptest::collection::vec(any::<u64>(), 1..20),
    ) {
        let width = bits_for(cardinality);
        let mask = if width == 64 { u64::MAX } else { (1u64 << width) - 1 };
        let candidates: Vec<u64> = candidates.into_iter().map(|c| c & mask).collect();

        let bits = CountingBitSource::new(ScriptedBitSource::from_values(
            candidates.clone(),
            width,
        ));
        let mut sampler = UniformSampler::below(bits, cardinality as i64)
            .expect("Failed to create sampler");

        match candidates.iter().position(|c| *c < cardinality) {
            Some(accepted_at) => {
                let value = sampler.draw().expect("Failed to draw()");
                prop_assert_eq!(value as u64, candidates[accepted_at]);

                let consumed = sampler.into_inner().count();
                prop_assert_eq!(consumed, (accepted_at + 1) * width as usize);
            }
            None => {
                prop_assert!(matches!(sampler.draw(), Err(EntropyError::DeviceClosed)));
            }
        }
    }
}
