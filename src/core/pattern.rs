//! Feedback pattern calculation and representation
//!
//! A pattern encodes the feedback for a guess using base-3 encoding:
//! - 0 = Miss (`-`, symbol not in the word)
//! - 1 = Present (`*`, symbol in the word, wrong position)
//! - 2 = Hit (`+`, symbol in the correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::word::{WORD_LEN, Word};
use std::fmt;

/// Feedback mark for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Symbol does not occur, or all its occurrences are already accounted for
    Miss,
    /// Symbol occurs elsewhere, within its remaining occurrence budget
    Present,
    /// Symbol matches the target at this position
    Hit,
}

impl Mark {
    const fn digit(self) -> u8 {
        match self {
            Self::Miss => 0,
            Self::Present => 1,
            Self::Hit => 2,
        }
    }

    const fn symbol(self) -> char {
        match self {
            Self::Miss => '-',
            Self::Present => '*',
            Self::Hit => '+',
        }
    }
}

/// Feedback pattern for one guess
///
/// Represents the per-position feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

/// Error type for malformed feedback strings
///
/// Feedback must be exactly [`WORD_LEN`] characters from `{+, *, -}`;
/// anything else is rejected, never coerced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternParseError {
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for PatternParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Feedback must be exactly {WORD_LEN} characters, got {len}")
            }
            Self::InvalidSymbol(ch) => {
                write!(f, "Feedback character '{ch}' is not one of '+', '*', '-'")
            }
        }
    }
}

impl std::error::Error for PatternParseError {}

impl Pattern {
    /// All hits (guess equals target)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all hits)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == 242
    }

    /// Calculate the pattern when `guess` is guessed and `target` is the answer
    ///
    /// Implements the exact feedback rules, including proper handling of
    /// duplicate symbols: a symbol appearing k times in the target and m > k
    /// times in the guess receives exactly k Hit/Present marks among those m
    /// occurrences, with pass 2 awarding Presents in position order.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches (hits), consuming the target's
    ///    per-symbol occurrence pool
    /// 2. Second pass, left to right: mark Present where the pool still has
    ///    budget, otherwise Miss
    /// 3. Encode as base-3 number
    ///
    /// # Examples
    /// ```
    /// use wordle_agent::core::{Alphabet, Pattern, Word};
    ///
    /// let guess = Word::parse("crane", Alphabet::Letters).unwrap();
    /// let target = Word::parse("slate", Alphabet::Letters).unwrap();
    /// let pattern = Pattern::calculate(&guess, &target);
    ///
    /// // C(miss) R(miss) A(hit) N(miss) E(hit)
    /// assert_eq!(pattern.to_string(), "--+-+");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut result = [0u8; WORD_LEN];
        let mut target_available = target.char_counts();

        // First pass: mark hits (exact position matches)
        // Allow: index needed to access guess[i], target[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess.chars()[i] == target.chars()[i] {
                result[i] = 2; // Hit

                // Remove from available pool
                let symbol = guess.chars()[i];
                if let Some(count) = target_available.get_mut(&symbol) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: mark presents (wrong position, but budget remains)
        // Allow: index needed to access guess[i] and check/set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if result[i] == 0 {
                // Not already a hit
                let symbol = guess.chars()[i];
                if let Some(count) = target_available.get_mut(&symbol)
                    && *count > 0
                {
                    result[i] = 1; // Present
                    *count -= 1;
                }
            }
        }

        // Encode as base-3 number
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for &digit in &result {
            pattern += digit * multiplier;
            multiplier *= 3;
        }

        Self(pattern)
    }

    /// Decode the pattern into per-position marks
    #[must_use]
    pub fn marks(self) -> [Mark; WORD_LEN] {
        let mut marks = [Mark::Miss; WORD_LEN];
        let mut val = self.0;

        for mark in &mut marks {
            *mark = match val % 3 {
                2 => Mark::Hit,
                1 => Mark::Present,
                _ => Mark::Miss,
            };
            val /= 3;
        }

        marks
    }

    /// Build a pattern from per-position marks
    #[must_use]
    pub fn from_marks(marks: [Mark; WORD_LEN]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for mark in marks {
            pattern += mark.digit() * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternParseError;

    /// Parse a feedback string like `"--+-*"`
    ///
    /// Exactly [`WORD_LEN`] characters, each one of `+` (hit), `*` (present),
    /// `-` (miss).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != WORD_LEN {
            return Err(PatternParseError::InvalidLength(len));
        }

        let mut marks = [Mark::Miss; WORD_LEN];
        for (i, ch) in s.chars().enumerate() {
            marks[i] = match ch {
                '+' => Mark::Hit,
                '*' => Mark::Present,
                '-' => Mark::Miss,
                other => return Err(PatternParseError::InvalidSymbol(other)),
            };
        }

        Ok(Self::from_marks(marks))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks() {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}
