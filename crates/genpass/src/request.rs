// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::GenerateError;

/// How many symbols to draw, given directly or as a minimum entropy.
///
/// Exactly one of the two fields must be set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GenerateRequest {
    /// Number of symbols.
    pub length: Option<usize>,
    /// Minimum entropy in bits; the length is derived from it.
    pub min_entropy: Option<f64>,
}

impl GenerateRequest {
    /// Requests exactly `length` symbols.
    pub fn length(length: usize) -> Self {
        Self {
            length: Some(length),
            min_entropy: None,
        }
    }

    /// Requests the fewest symbols giving at least `bits` of entropy.
    pub fn min_entropy(bits: f64) -> Self {
        Self {
            length: None,
            min_entropy: Some(bits),
        }
    }

    /// Number of symbols to draw from a source of `cardinality` symbols.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::CallerContract`] unless exactly one field is set
    /// - the errors of [`entropy_to_length`]
    pub fn resolve_length(&self, cardinality: usize) -> Result<usize, GenerateError> {
        match (self.length, self.min_entropy) {
            (Some(length), None) => Ok(length),
            (None, Some(bits)) => entropy_to_length(cardinality, bits),
            _ => Err(GenerateError::CallerContract),
        }
    }
}

/// Fewest independent uniform draws over `cardinality` symbols whose combined
/// entropy is at least `bits`: `ceil(bits / log2(cardinality))`.
///
/// # Errors
///
/// - [`GenerateError::InvalidEntropy`] if `bits` is negative or not finite
/// - [`GenerateError::EntropyUnreachable`] if `bits > 0` and `cardinality < 2`
pub fn entropy_to_length(cardinality: usize, bits: f64) -> Result<usize, GenerateError> {
    if !bits.is_finite() || bits < 0.0 {
        return Err(GenerateError::InvalidEntropy { bits });
    }
    if bits == 0.0 {
        return Ok(0);
    }
    if cardinality < 2 {
        return Err(GenerateError::EntropyUnreachable { cardinality, bits });
    }

    let per_symbol = (cardinality as f64).log2();
    let length = (bits / per_symbol).ceil() as usize;

    tracing::debug!(cardinality, bits, length, "resolved length from entropy");

    Ok(length)
}
