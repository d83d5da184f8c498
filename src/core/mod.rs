//! Core domain types
//!
//! The fundamental game types: fixed-length words over a configurable
//! alphabet, and the 3-symbol feedback pattern between a guess and a target.
//! All types here are pure and have clear mathematical properties.

mod pattern;
mod word;

pub use pattern::{Mark, Pattern, PatternParseError};
pub use word::{Alphabet, WORD_LEN, Word, WordError};
