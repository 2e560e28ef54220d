// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

const SURROGATE_START: u32 = 0xD800;
const SURROGATE_STOP: u32 = 0xE000;
const CODEPOINT_STOP: u32 = 0x11_0000;

/// Half-open interval `[start, stop)` of Unicode scalar values.
///
/// Never empty, never beyond U+10FFFF, and never touches the surrogate block
/// `U+D800..=U+DFFF`, so every value in it is a valid `char`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodepointRange {
    start: u32,
    stop: u32,
}

impl CodepointRange {
    /// Creates `[start, stop)`.
    ///
    /// Returns `None` if the range is empty, ends past U+10FFFF, or
    /// intersects the surrogate block.
    pub fn new(start: u32, stop: u32) -> Option<Self> {
        let valid = start < stop
            && stop <= CODEPOINT_STOP
            && (stop <= SURROGATE_START || start >= SURROGATE_STOP);

        valid.then_some(Self { start, stop })
    }

    /// The range holding only `c`.
    pub fn single(c: char) -> Self {
        let start = c as u32;
        Self {
            start,
            stop: start + 1,
        }
    }

    /// Ranges covering every scalar value from `first` to `last` inclusive.
    ///
    /// Yields two ranges when the span crosses the surrogate block, none when
    /// `last < first`.
    pub(crate) fn inclusive(first: char, last: char) -> impl Iterator<Item = Self> {
        let (start, stop) = (first as u32, last as u32 + 1);

        let below = Self::new(start, stop.min(SURROGATE_START));
        let above = Self::new(start.max(SURROGATE_STOP), stop);

        below.into_iter().chain(above)
    }

    /// First codepoint of the range.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// One past the last codepoint of the range.
    pub fn stop(&self) -> u32 {
        self.stop
    }

    /// Number of codepoints; always at least 1.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        (self.stop - self.start) as usize
    }

    /// Whether `codepoint` lies in the range.
    pub fn contains(&self, codepoint: u32) -> bool {
        self.start <= codepoint && codepoint < self.stop
    }

    /// Whether the two ranges share at least one codepoint.
    pub fn intersects(&self, other: &Self) -> bool {
        self.start < other.stop && other.start < self.stop
    }

    /// The `index`-th character of the range.
    pub fn get(&self, index: usize) -> Option<char> {
        if index >= self.len() {
            return None;
        }

        char::from_u32(self.start + index as u32)
    }

    /// Characters of the range in ascending order.
    pub fn chars(&self) -> impl Iterator<Item = char> + use<> {
        (self.start..self.stop).filter_map(char::from_u32)
    }
}

impl fmt::Display for CodepointRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.len() == 1 {
            write!(f, "U+{:04X}", self.start)
        } else {
            write!(f, "U+{:04X}..=U+{:04X}", self.start, self.stop - 1)
        }
    }
}
