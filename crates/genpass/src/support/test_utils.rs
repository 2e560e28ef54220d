// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities re-exported from genpass-rand, plus an in-memory symbol source.

pub use genpass_rand::test_utils::*;

use crate::source::SymbolSource;

/// Symbol source over a fixed list of strings, in the given order.
///
/// Unlike [`WordList`](crate::WordList) it neither filters nor sorts, so
/// tests control exactly which index maps to which symbol.
#[derive(Debug, Clone, Default)]
pub struct FixedSymbols {
    symbols: Vec<String>,
}

impl FixedSymbols {
    /// Creates a source yielding `symbols[i]` for index `i`.
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }
}

impl SymbolSource for FixedSymbols {
    type Symbol<'a> = &'a str;

    const SEPARATOR: &'static str = "-";

    fn cardinality(&self) -> usize {
        self.symbols.len()
    }

    fn symbol(&self, index: usize) -> Option<Self::Symbol<'_>> {
        self.symbols.get(index).map(String::as_str)
    }
}
