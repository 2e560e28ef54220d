// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Uniform integers by power-of-two rejection sampling.
//!
//! # Algorithm
//!
//! 1. Count the `C` values of the progression `lower, lower + step, ..`
//!    strictly before `upper`.
//! 2. Pick the smallest `k` with `2^k >= C` (`k = 0` when `C == 1`).
//! 3. Read `k` bits, bit `i` weighted `2^i`, giving `n` in `[0, 2^k)`.
//! 4. Accept when `n < C` and yield `lower + n * step`; otherwise retry.
//!
//! Every accepted value corresponds to exactly one bit pattern, so the output
//! is uniform. Since `C > 2^(k-1)`, more than half of the attempts succeed and
//! the expected cost stays below `2k` bits per value.

use crate::error::{EntropyError, SampleError};
use crate::traits::BitSource;

/// Lazy, infinite sequence of integers uniform over an arithmetic progression.
///
/// Each item is drawn independently from the wrapped [`BitSource`]. Stop
/// iterating (e.g. with [`Iterator::take`]) to draw a fixed number of values;
/// nothing is drawn ahead of time.
///
/// An item is `Err` when the bit source failed during that draw. The bits read
/// before the failure are lost.
///
/// # Example
///
/// ```rust
/// use genpass_rand::test_utils::ScriptedBitSource;
/// use genpass_rand::UniformSampler;
///
/// // 0b101 = 5 is rejected for 5 values, 0b010 = 2 is accepted.
/// let bits = ScriptedBitSource::new([true, false, true, false, true, false]);
/// let mut sampler = UniformSampler::below(bits, 5).expect("non-empty range");
///
/// assert_eq!(sampler.next().unwrap().unwrap(), 2);
/// ```
#[derive(Debug)]
pub struct UniformSampler<B: BitSource> {
    bits: B,
    lower: i64,
    step: i64,
    cardinality: u64,
    num_bits: u32,
}

impl<B: BitSource> UniformSampler<B> {
    /// Creates a sampler over `lower, lower + step, ..` up to `upper` (exclusive).
    ///
    /// A negative `step` walks downwards, with `upper` still exclusive.
    ///
    /// # Errors
    ///
    /// - [`SampleError::ZeroStep`] if `step == 0`
    /// - [`SampleError::EmptyRange`] if the progression has no element
    pub fn new(bits: B, lower: i64, upper: i64, step: i64) -> Result<Self, SampleError> {
        if step == 0 {
            return Err(SampleError::ZeroStep);
        }

        let cardinality = progression_len(lower, upper, step);
        if cardinality == 0 {
            return Err(SampleError::EmptyRange { lower, upper, step });
        }

        Ok(Self {
            bits,
            lower,
            step,
            cardinality,
            num_bits: bits_for(cardinality),
        })
    }

    /// Creates a sampler over `0..upper`.
    ///
    /// # Errors
    ///
    /// [`SampleError::EmptyRange`] if `upper <= 0`.
    pub fn below(bits: B, upper: i64) -> Result<Self, SampleError> {
        Self::new(bits, 0, upper, 1)
    }

    /// Number of distinct values the sampler can produce.
    pub fn cardinality(&self) -> u64 {
        self.cardinality
    }

    /// Bits read per attempt: `ceil(log2(cardinality))`.
    pub fn bits_per_attempt(&self) -> u32 {
        self.num_bits
    }

    /// Draws one value, retrying until a candidate is accepted.
    ///
    /// # Errors
    ///
    /// Propagates the first [`EntropyError`] of the bit source.
    pub fn draw(&mut self) -> Result<i64, EntropyError> {
        loop {
            let mut n = 0u64;
            for exponent in 0..self.num_bits {
                if self.bits.next_bit()? {
                    n |= 1u64 << exponent;
                }
            }

            if n < self.cardinality {
                let value = i128::from(self.lower) + i128::from(n) * i128::from(self.step);
                // Every accepted value lies between lower and upper.
                return Ok(value as i64);
            }
        }
    }

    /// Returns the bit source.
    pub fn into_inner(self) -> B {
        self.bits
    }
}

impl<B: BitSource> Iterator for UniformSampler<B> {
    type Item = Result<i64, EntropyError>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.draw())
    }
}

/// Exact element count of the progression, without overflow for any `i64` span.
pub(crate) fn progression_len(lower: i64, upper: i64, step: i64) -> u64 {
    let (lower, upper, step) = (i128::from(lower), i128::from(upper), i128::from(step));

    let span = if step > 0 { upper - lower } else { lower - upper };
    if span <= 0 {
        return 0;
    }

    let step = step.abs();
    let len = (span + step - 1) / step;

    // span < 2^64, so len fits.
    len as u64
}

/// Smallest `k` with `2^k >= cardinality`.
pub(crate) fn bits_for(cardinality: u64) -> u32 {
    if cardinality <= 1 {
        0
    } else {
        u64::BITS - (cardinality - 1).leading_zeros()
    }
}
