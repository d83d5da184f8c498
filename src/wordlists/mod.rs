//! Dictionaries of playable words
//!
//! A [`Dictionary`] owns the sorted, deduplicated word set for one game
//! configuration, together with a stable content fingerprint used to key the
//! persisted first-move cache.

pub mod loader;

use crate::core::{Alphabet, WORD_LEN, Word};
use rustc_hash::FxHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::io;
use std::path::{Path, PathBuf};

/// Error type for unusable dictionaries
///
/// Fatal at startup: an agent cannot play without a word list.
#[derive(Debug)]
pub enum DictionaryError {
    /// The dictionary file could not be read
    Io { path: PathBuf, source: io::Error },
    /// No valid words survived loading
    Empty { alphabet: Alphabet },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read dictionary {}: {source}", path.display())
            }
            Self::Empty { alphabet } => {
                write!(
                    f,
                    "Dictionary contains no valid {alphabet} words of length {WORD_LEN}"
                )
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty { .. } => None,
        }
    }
}

/// An immutable, deduplicated word list
///
/// Words are sorted lexicographically so iteration order, tie-breaking, and
/// the content fingerprint are all deterministic for a given word set.
#[derive(Debug, Clone)]
pub struct Dictionary {
    alphabet: Alphabet,
    words: Vec<Word>,
    fingerprint: u64,
}

impl Dictionary {
    /// Build a dictionary from parsed words
    ///
    /// Sorts and deduplicates the input. Duplicates arise naturally from
    /// case-insensitive loading ("CRANE" and "crane" are the same word).
    ///
    /// # Errors
    /// Returns [`DictionaryError::Empty`] if no words remain.
    pub fn new(mut words: Vec<Word>, alphabet: Alphabet) -> Result<Self, DictionaryError> {
        words.sort();
        words.dedup();

        if words.is_empty() {
            return Err(DictionaryError::Empty { alphabet });
        }

        let fingerprint = fingerprint_words(&words);

        Ok(Self {
            alphabet,
            words,
            fingerprint,
        })
    }

    /// Load a dictionary from a newline-delimited file
    ///
    /// Lines that fail to parse as words of the given alphabet are skipped;
    /// rejecting a malformed entry is recoverable, an empty result is not.
    ///
    /// # Errors
    /// Returns [`DictionaryError::Io`] if the file cannot be read, or
    /// [`DictionaryError::Empty`] if no line yields a valid word.
    pub fn load<P: AsRef<Path>>(path: P, alphabet: Alphabet) -> Result<Self, DictionaryError> {
        let words = loader::load_from_file(path, alphabet)?;
        Self::new(words, alphabet)
    }

    /// All words, sorted lexicographically
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// The alphabet this dictionary was validated against
    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the dictionary holds no words (never true for a constructed one)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check membership
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }

    /// Look up a word by its text
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        let word = Word::parse(text, self.alphabet).ok()?;
        self.words
            .binary_search(&word)
            .ok()
            .map(|idx| &self.words[idx])
    }

    /// Stable 64-bit fingerprint of the word set
    ///
    /// Two dictionaries have equal fingerprints exactly when they contain the
    /// same words (modulo hash collisions). Used to address the persisted
    /// first-move artifact, so it must not vary across runs.
    #[inline]
    #[must_use]
    pub const fn fingerprint(&self) -> u64 {
        self.fingerprint
    }
}

fn fingerprint_words(words: &[Word]) -> u64 {
    // FxHasher is unseeded, so the value is stable across processes
    let mut hasher = FxHasher::default();
    for word in words {
        word.text().hash(&mut hasher);
    }
    hasher.finish()
}
