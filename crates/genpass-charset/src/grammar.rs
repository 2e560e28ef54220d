// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tokenizer for unescaped character-set specifications.
//!
//! An atom is either the escaped hyphen `\-` or any character other than an
//! unescaped `-`. At each position a range `atom-atom` is tried first, then a
//! single atom.

use crate::error::{CharsetError, GrammarReason};

/// Characters of context quoted in a grammar error.
const SNIPPET_LEN: usize = 8;

/// One component of a specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    Single(char),
    /// First and last character, both included.
    Range(char, char),
}

pub(crate) fn tokenize(spec: &str) -> Result<Vec<Token>, CharsetError> {
    let chars: Vec<char> = spec.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        let Some((first, width)) = atom(&chars, pos) else {
            return Err(CharsetError::grammar(
                snippet(&chars, pos, SNIPPET_LEN),
                GrammarReason::StrayHyphen,
            ));
        };
        let after = pos + width;

        if chars.get(after) == Some(&'-') {
            if let Some((last, last_width)) = atom(&chars, after + 1) {
                let end = after + 1 + last_width;
                if last < first {
                    return Err(CharsetError::grammar(
                        snippet(&chars, pos, end - pos),
                        GrammarReason::InvertedRange,
                    ));
                }

                tokens.push(Token::Range(first, last));
                pos = end;
                continue;
            }
        }

        tokens.push(Token::Single(first));
        pos = after;
    }

    Ok(tokens)
}

fn atom(chars: &[char], pos: usize) -> Option<(char, usize)> {
    match chars.get(pos)? {
        '\\' if chars.get(pos + 1) == Some(&'-') => Some(('-', 2)),
        '-' => None,
        &c => Some((c, 1)),
    }
}

fn snippet(chars: &[char], pos: usize, len: usize) -> String {
    chars[pos..].iter().take(len).collect()
}
