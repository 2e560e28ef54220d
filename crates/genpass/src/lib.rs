// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # genpass
//!
//! Passwords and passphrases drawn without bias from a custom character set
//! or a word list, reading entropy straight from the operating system.
//!
//! A password is a sequence of independent uniform draws from a
//! [`SymbolSource`]: a [`CharacterSet`](charset::CharacterSet) for character
//! passwords, a [`WordList`] for xkcd-style passphrases. Its length is either
//! given directly or derived from a minimum entropy in bits.
//!
//! ## Example
//!
//! ```rust
//! use genpass::charset::CharacterSet;
//! use genpass::rand::{EntropyBitSource, SystemEntropySource};
//! use genpass::{GenerateRequest, Generator};
//!
//! let charset = CharacterSet::parse("a-zA-Z0-9").expect("valid spec");
//! let mut generator = Generator::new(EntropyBitSource::new(SystemEntropySource {}));
//!
//! // 62 symbols carry ~5.95 bits each: 7 symbols for 40 bits
//! let password = generator
//!     .generate(&charset, &GenerateRequest::min_entropy(40.0))
//!     .expect("password generated");
//!
//! assert_eq!(password.chars().count(), 7);
//! assert!(password.chars().all(|c| charset.contains(c)));
//! ```
//!
//! ## Passphrases
//!
//! ```rust
//! use std::io::Cursor;
//!
//! use genpass::rand::{EntropyBitSource, SystemEntropySource};
//! use genpass::{GenerateRequest, Generator, WordList};
//!
//! let words = WordList::from_reader(Cursor::new("correct\nhorse\nbattery\nstaple\n"))
//!     .expect("usable words");
//! let mut generator = Generator::new(EntropyBitSource::new(SystemEntropySource {}));
//!
//! let mut out = Vec::new();
//! generator
//!     .write(&words, &GenerateRequest::length(4), &mut out)
//!     .expect("passphrase written");
//!
//! let line = String::from_utf8(out).expect("utf-8 output");
//! assert_eq!(line.split(' ').count(), 4);
//! assert!(line.ends_with('\n'));
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod generator;
mod request;
mod source;
mod support;
mod wordlist;

pub use genpass_charset as charset;
pub use genpass_rand as rand;

pub use error::{GenerateError, WordListError};
pub use generator::Generator;
pub use request::{GenerateRequest, entropy_to_length};
pub use source::SymbolSource;
pub use wordlist::{DEFAULT_WORD_LIST, WordList, WordListCache};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
