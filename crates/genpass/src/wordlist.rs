// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Word lists for passphrases.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::WordListError;
use crate::source::SymbolSource;

/// Word list shipped by most Unix systems.
pub const DEFAULT_WORD_LIST: &str = "/usr/share/dict/words";

const MIN_WORD_LEN: usize = 3;
const MAX_WORD_LEN: usize = 9;

/// Sorted, de-duplicated list of lower-case words of 3 to 9 ASCII letters.
///
/// Capitalized lines are kept in lower case. Possessives, accented words and
/// lines of other lengths are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Builds a list from one candidate word per line.
    ///
    /// # Errors
    ///
    /// - [`WordListError::Read`] if reading fails
    /// - [`WordListError::Empty`] if no line is an acceptable word
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, WordListError> {
        let mut words = BTreeSet::new();

        for line in reader.lines() {
            let line = line?;
            if is_word(&line) {
                words.insert(line.to_ascii_lowercase());
            }
        }

        if words.is_empty() {
            return Err(WordListError::Empty);
        }

        Ok(Self {
            words: words.into_iter().collect(),
        })
    }

    /// Loads the list from a file.
    ///
    /// # Errors
    ///
    /// - [`WordListError::Io`] if the file cannot be opened or read
    /// - [`WordListError::Empty`] if no line is an acceptable word
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let io_error = |source| WordListError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_error)?;
        let list = match Self::from_reader(BufReader::new(file)) {
            Err(WordListError::Read(source)) => return Err(io_error(source)),
            other => other?,
        };

        tracing::debug!(path = %path.display(), words = list.len(), "loaded word list");

        Ok(list)
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`: an empty list is rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The `index`-th word in alphabetical order.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Words in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl SymbolSource for WordList {
    type Symbol<'a> = &'a str;

    const SEPARATOR: &'static str = " ";

    fn cardinality(&self) -> usize {
        self.len()
    }

    fn symbol(&self, index: usize) -> Option<&str> {
        self.get(index)
    }
}

fn is_word(line: &str) -> bool {
    (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&line.len())
        && line.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Word list loaded on first use and kept for later requests.
///
/// Owned by the caller; nothing is cached process-wide.
#[derive(Debug)]
pub struct WordListCache {
    path: PathBuf,
    list: Option<WordList>,
}

impl WordListCache {
    /// Creates an empty cache for the list at `path`. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            list: None,
        }
    }

    /// Path the list is loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the list has been loaded already.
    pub fn is_loaded(&self) -> bool {
        self.list.is_some()
    }

    /// The list, loading it on the first call.
    ///
    /// # Errors
    ///
    /// The errors of [`WordList::load`]. A failed load is retried on the
    /// next call.
    pub fn get(&mut self) -> Result<&WordList, WordListError> {
        let list = match self.list.take() {
            Some(list) => list,
            None => WordList::load(&self.path)?,
        };

        Ok(self.list.insert(list))
    }
}

impl Default for WordListCache {
    fn default() -> Self {
        Self::new(DEFAULT_WORD_LIST)
    }
}
