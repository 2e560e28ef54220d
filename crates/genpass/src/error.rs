// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io;
use std::path::PathBuf;

use genpass_rand::{EntropyError, SampleError};
use thiserror::Error;

/// Errors that can occur while generating a password or passphrase.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The request sets both a length and a minimum entropy, or neither.
    #[error("exactly one of length or minimum entropy must be given")]
    CallerContract,

    /// The minimum entropy is negative, infinite or NaN.
    #[error("minimum entropy must be a finite, non-negative number of bits, got {bits}")]
    InvalidEntropy {
        /// The rejected value.
        bits: f64,
    },

    /// A source with fewer than two symbols carries no entropy per symbol.
    #[error("{bits} bits of entropy are unreachable with {cardinality} possible symbols")]
    EntropyUnreachable {
        /// Number of symbols of the source.
        cardinality: usize,
        /// The requested minimum entropy.
        bits: f64,
    },

    /// The source has more symbols than the sampler can index.
    #[error("symbol source too large: {cardinality} symbols")]
    CardinalityTooLarge {
        /// Number of symbols of the source.
        cardinality: usize,
    },

    /// The source returned no symbol for an index below its cardinality.
    #[error("symbol source has no symbol {index} despite reporting {cardinality}")]
    SymbolOutOfRange {
        /// The drawn index.
        index: usize,
        /// The cardinality the source reported.
        cardinality: usize,
    },

    /// The source has no symbol to draw from.
    #[error(transparent)]
    Range(#[from] SampleError),

    /// Reading random bits failed.
    #[error(transparent)]
    Entropy(#[from] EntropyError),

    /// Writing the generated symbols failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Errors that can occur while loading a word list.
#[derive(Debug, Error)]
pub enum WordListError {
    /// The word list file could not be opened or read.
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        /// Path of the word list.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Reading from an in-memory or streamed word list failed.
    #[error("failed to read word list: {0}")]
    Read(#[from] io::Error),

    /// No line of the input is an acceptable word.
    #[error("word list contains no usable word (3 to 9 ASCII letters)")]
    Empty,
}
