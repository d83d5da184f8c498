//! Word list loading utilities
//!
//! Reads newline-delimited word files, skipping entries that do not parse as
//! words of the active alphabet.

use super::DictionaryError;
use crate::core::{Alphabet, Word};
use std::fs;
use std::path::Path;

/// Load words from a newline-delimited file
///
/// Returns every line that parses as a valid word of the given alphabet,
/// in file order. Blank and malformed lines are skipped.
///
/// # Errors
///
/// Returns [`DictionaryError::Io`] if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_agent::core::Alphabet;
/// use wordle_agent::wordlists::loader::load_from_file;
///
/// let words = load_from_file("dict.txt", Alphabet::Letters).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    alphabet: Alphabet,
) -> Result<Vec<Word>, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(words_from_lines(&content, alphabet))
}

/// Parse newline-delimited text into words, skipping invalid lines
#[must_use]
pub fn words_from_lines(content: &str, alphabet: Alphabet) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::parse(trimmed, alphabet).ok()
            }
        })
        .collect()
}

/// Convert a string slice to a word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_agent::core::Alphabet;
/// use wordle_agent::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "slate"], Alphabet::Letters);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], alphabet: Alphabet) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::parse(s, alphabet).ok())
        .collect()
}
