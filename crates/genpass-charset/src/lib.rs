// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # genpass_charset
//!
//! Character sets described by a compact, `tr`-like grammar and stored as
//! sorted, non-overlapping ranges of Unicode scalar values.
//!
//! ## Grammar
//!
//! - `X-Y`: every character from `X` to `Y`, both included
//! - `X`: the single character `X`
//! - `\-`: a literal hyphen, usable on either side of a range
//! - escapes: `\xHH`, `\uHHHH`, `\UHHHHHHHH`, octal `\NNN`, `\N{NAME}`,
//!   `\\`, `\"`, `\'`, `\a`, `\b`, `\f`, `\n`, `\r`, `\t`, `\v`
//!
//! The input is NFC-normalized first, so a base letter followed by a
//! combining mark counts as the single precomposed character. Escapes are
//! decoded before tokenizing: `\x2d` therefore acts as a range separator,
//! while `\-` never does.
//!
//! Components must not overlap; `a-ma-z` is rejected.
//!
//! ## Example
//!
//! ```rust
//! use genpass_charset::CharacterSet;
//!
//! let charset = CharacterSet::parse("a-z0-9").expect("valid spec");
//!
//! assert_eq!(charset.len(), 36);
//! assert_eq!(charset.index(0), Ok('0'));
//! assert_eq!(charset.index(10), Ok('a'));
//! assert!(charset.contains('q'));
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod charset;
mod error;
mod grammar;
mod range;
mod unescape;

pub use charset::{CharacterSet, Chars};
pub use error::{CharsetError, GrammarReason};
pub use range::CodepointRange;
