// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use genpass_charset::CharacterSet;

/// Finite, indexable alphabet that passwords are drawn from.
///
/// Implementors must return `Some` for every index below
/// [`cardinality`](Self::cardinality) and must not change between calls.
pub trait SymbolSource {
    /// A single drawn symbol.
    type Symbol<'a>: fmt::Display
    where
        Self: 'a;

    /// Written between two consecutive symbols.
    const SEPARATOR: &'static str;

    /// Number of distinct symbols.
    fn cardinality(&self) -> usize;

    /// The `index`-th symbol, or `None` when `index >= cardinality()`.
    fn symbol(&self, index: usize) -> Option<Self::Symbol<'_>>;
}

impl SymbolSource for CharacterSet {
    type Symbol<'a> = char;

    const SEPARATOR: &'static str = "";

    fn cardinality(&self) -> usize {
        self.len()
    }

    fn symbol(&self, index: usize) -> Option<char> {
        self.get(index)
    }
}
