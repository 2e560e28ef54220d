// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use crate::range::CodepointRange;

/// Errors produced while parsing or indexing a [`CharacterSet`](crate::CharacterSet).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CharsetError {
    /// The specification does not match the grammar.
    #[error("invalid character set at {offending:?}: {reason}")]
    Grammar {
        /// The part of the specification that could not be parsed.
        offending: String,
        /// What is wrong with it.
        reason: GrammarReason,
    },

    /// Two components of the specification share codepoints.
    #[error("overlapping character ranges: {range} intersects {existing}")]
    Overlap {
        /// The range being inserted.
        range: CodepointRange,
        /// The previously inserted range it intersects.
        existing: CodepointRange,
    },

    /// An index at or beyond the cardinality of the set.
    #[error("index {index} out of range for a set of {len} characters")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The cardinality of the set.
        len: usize,
    },
}

/// Reason attached to [`CharsetError::Grammar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GrammarReason {
    /// An unescaped `-` where a character was expected.
    #[error("unescaped '-' outside a range (write \\- for a literal hyphen)")]
    StrayHyphen,

    /// A range whose last character precedes its first.
    #[error("range end precedes range start")]
    InvertedRange,

    /// A numeric escape naming a surrogate or a value above U+10FFFF.
    #[error("escape does not name a Unicode scalar value")]
    InvalidCodepoint,

    /// A `\N{...}` escape with an unknown character name.
    #[error("unknown Unicode character name")]
    UnknownName,
}

impl CharsetError {
    pub(crate) fn grammar(offending: impl Into<String>, reason: GrammarReason) -> Self {
        Self::Grammar {
            offending: offending.into(),
            reason,
        }
    }
}
