// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::ops::Range;
use core::slice;
use core::str::FromStr;

use unicode_normalization::UnicodeNormalization;

use crate::error::CharsetError;
use crate::grammar::{self, Token};
use crate::range::CodepointRange;
use crate::unescape::{escape_whitespace, unescape};

/// Ordered, indexable set of Unicode scalar values.
///
/// Stored as ranges sorted by start and pairwise disjoint. Built once by
/// [`parse`](Self::parse) and read-only afterwards.
///
/// Members are ordered by ascending codepoint, so `index(0)` is the smallest
/// character regardless of the order the specification lists them in.
#[derive(Debug, Clone)]
pub struct CharacterSet {
    source: String,
    ranges: Vec<CodepointRange>,
    len: usize,
}

impl CharacterSet {
    /// Parses a specification such as `a-zA-Z0-9` or `Α-Ω`.
    ///
    /// # Errors
    ///
    /// - [`CharsetError::Grammar`] if the specification does not parse
    /// - [`CharsetError::Overlap`] if two components share a codepoint
    ///
    /// No partially built set is ever returned.
    pub fn parse(spec: &str) -> Result<Self, CharsetError> {
        let normalized: String = spec.nfc().collect();
        let source = unescape(&normalized)?;

        let mut ranges: Vec<CodepointRange> = Vec::new();
        for token in grammar::tokenize(&source)? {
            let pieces: Vec<CodepointRange> = match token {
                Token::Single(c) => vec![CodepointRange::single(c)],
                Token::Range(first, last) => CodepointRange::inclusive(first, last).collect(),
            };

            for range in pieces {
                insert_disjoint(&mut ranges, range)?;
            }
        }

        let len = ranges.iter().map(CodepointRange::len).sum();

        tracing::debug!(ranges = ranges.len(), cardinality = len, "parsed character set");

        Ok(Self {
            source,
            ranges,
            len,
        })
    }

    /// Number of characters in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the set has no character at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `c` is a member.
    pub fn contains(&self, c: char) -> bool {
        let codepoint = c as u32;
        self.ranges.iter().any(|r| r.contains(codepoint))
    }

    /// The `index`-th member in ascending order, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<char> {
        let mut index = index;

        for range in &self.ranges {
            if index < range.len() {
                return range.get(index);
            }
            index -= range.len();
        }

        None
    }

    /// The `index`-th member in ascending order.
    ///
    /// # Errors
    ///
    /// [`CharsetError::IndexOutOfRange`] if `index >= self.len()`.
    pub fn index(&self, index: usize) -> Result<char, CharsetError> {
        self.get(index).ok_or(CharsetError::IndexOutOfRange {
            index,
            len: self.len,
        })
    }

    /// Members in ascending order.
    pub fn iter(&self) -> Chars<'_> {
        Chars {
            ranges: self.ranges.iter(),
            current: 0..0,
        }
    }

    /// The sorted, disjoint ranges making up the set.
    pub fn ranges(&self) -> &[CodepointRange] {
        &self.ranges
    }

    /// The specification after normalization and escape decoding.
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Compares the sorted range lists, not the source text: `\x41-\x5a` equals
/// `A-Z`, but `abc` and `a-c` differ.
impl PartialEq for CharacterSet {
    fn eq(&self, other: &Self) -> bool {
        self.ranges == other.ranges
    }
}

impl Eq for CharacterSet {}

impl FromStr for CharacterSet {
    type Err = CharsetError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        Self::parse(spec)
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Charset(\"{}\")", escape_whitespace(&self.source))
    }
}

impl<'a> IntoIterator for &'a CharacterSet {
    type Item = char;
    type IntoIter = Chars<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Inserts `range` into the sorted, disjoint `ranges`, keeping both properties.
///
/// Only the neighbours at the insertion point can intersect `range`: the one
/// before it has the greatest stop of all ranges starting earlier, the one
/// after it the smallest start of all others.
fn insert_disjoint(
    ranges: &mut Vec<CodepointRange>,
    range: CodepointRange,
) -> Result<(), CharsetError> {
    let at = ranges.partition_point(|r| r.start() < range.start());

    let before = at.checked_sub(1).and_then(|i| ranges.get(i));
    let after = ranges.get(at);
    if let Some(existing) = before.into_iter().chain(after).find(|r| r.intersects(&range)) {
        return Err(CharsetError::Overlap {
            range,
            existing: *existing,
        });
    }

    ranges.insert(at, range);
    Ok(())
}

/// Iterator over the members of a [`CharacterSet`], in ascending order.
#[derive(Debug, Clone)]
pub struct Chars<'a> {
    ranges: slice::Iter<'a, CodepointRange>,
    current: Range<u32>,
}

impl Iterator for Chars<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            if let Some(codepoint) = self.current.next() {
                // Ranges never hold surrogates.
                if let Some(c) = char::from_u32(codepoint) {
                    return Some(c);
                }
                continue;
            }

            let range = self.ranges.next()?;
            self.current = range.start()..range.stop();
        }
    }
}
