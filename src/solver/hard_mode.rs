//! Hard-mode legality constraints
//!
//! In hard mode every guess must honor the feedback already revealed. The
//! constraints are derived from the session history and applied to the guess
//! pool only; the candidate set is filtered by exact pattern reproduction,
//! which is strictly stronger, so it never needs them.

use crate::core::{Mark, Pattern, WORD_LEN, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// Legality constraints accumulated from revealed feedback
///
/// Three kinds of knowledge, per the game's hard-mode rules:
/// - a Hit locks its position to that symbol,
/// - Hits and Presents of a symbol in one guess set a minimum occurrence
///   count (the maximum such count across history is binding),
/// - a Miss with no Hit/Present of the same symbol elsewhere in the same
///   guess forbids the symbol outright.
#[derive(Debug, Clone, Default)]
pub struct HardConstraints {
    locked: [Option<u8>; WORD_LEN],
    required: FxHashMap<u8, u8>,
    forbidden: FxHashSet<u8>,
}

impl HardConstraints {
    /// Derive constraints from the full session history
    #[must_use]
    pub fn from_history(history: &[(Word, Pattern)]) -> Self {
        let mut constraints = Self::default();
        for (guess, pattern) in history {
            constraints.absorb(guess, *pattern);
        }
        constraints
    }

    /// Fold one observation into the constraint set
    fn absorb(&mut self, guess: &Word, pattern: Pattern) {
        let marks = pattern.marks();

        // Hits and Presents both prove occurrences of their symbol
        let mut proven: FxHashMap<u8, u8> = FxHashMap::default();
        for (i, mark) in marks.iter().enumerate() {
            let symbol = guess.char_at(i);
            match mark {
                Mark::Hit => {
                    self.locked[i] = Some(symbol);
                    *proven.entry(symbol).or_insert(0) += 1;
                }
                Mark::Present => {
                    *proven.entry(symbol).or_insert(0) += 1;
                }
                Mark::Miss => {}
            }
        }

        for (&symbol, &count) in &proven {
            let entry = self.required.entry(symbol).or_insert(0);
            *entry = (*entry).max(count);
        }

        // A Miss with no proven occurrence of the same symbol in this guess
        // means the target contains none of it
        for (i, mark) in marks.iter().enumerate() {
            let symbol = guess.char_at(i);
            if *mark == Mark::Miss && !proven.contains_key(&symbol) {
                self.forbidden.insert(symbol);
            }
        }
    }

    /// Check whether a guess honors every constraint
    #[must_use]
    pub fn permits(&self, word: &Word) -> bool {
        for (i, lock) in self.locked.iter().enumerate() {
            if let Some(symbol) = lock
                && word.char_at(i) != *symbol
            {
                return false;
            }
        }

        for (&symbol, &min_count) in &self.required {
            if word.count_of(symbol) < min_count {
                return false;
            }
        }

        self.forbidden.iter().all(|&symbol| !word.contains(symbol))
    }

    /// Restrict a guess pool to legal words
    #[must_use]
    pub fn filter(&self, pool: &[Word]) -> Vec<Word> {
        pool.iter()
            .filter(|word| self.permits(word))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;

    fn w(text: &str) -> Word {
        Word::parse(text, Alphabet::Letters).unwrap()
    }

    fn observe(guess: &str, feedback: &str) -> (Word, Pattern) {
        (w(guess), feedback.parse().unwrap())
    }

    #[test]
    fn hit_locks_its_position() {
        let constraints = HardConstraints::from_history(&[observe("crane", "+----")]);

        assert!(constraints.permits(&w("colon")));
        assert!(!constraints.permits(&w("bacon")));
    }

    #[test]
    fn present_requires_occurrence_anywhere() {
        let constraints = HardConstraints::from_history(&[observe("crane", "*----")]);

        // Any word containing a C (and none of the dead R/A/N/E) qualifies
        assert!(constraints.permits(&w("scout")));
        assert!(!constraints.permits(&w("build")));
    }

    #[test]
    fn duplicate_marks_raise_the_minimum_count() {
        // Both E's of SPEED proven present: the target holds at least two
        let constraints = HardConstraints::from_history(&[observe("speed", "--**-")]);

        assert!(constraints.permits(&w("elite")));
        assert!(!constraints.permits(&w("early"))); // only one E
    }

    #[test]
    fn miss_forbids_the_symbol_globally() {
        let constraints = HardConstraints::from_history(&[observe("crane", "----+")]);

        // C, R, A, N all missed with no compensation elsewhere
        assert!(!constraints.permits(&w("eagle"))); // contains A
        assert!(!constraints.permits(&w("wince"))); // contains C and N
        assert!(constraints.permits(&w("guide")));
    }

    #[test]
    fn miss_with_compensating_mark_is_not_forbidden() {
        // SPEED against a one-E target: first E present, second E missed.
        // E stays legal (at least one required); S, P, D are dead.
        let constraints = HardConstraints::from_history(&[observe("speed", "--*--")]);

        assert!(constraints.permits(&w("niece"))); // E present, no S/P/D
        assert!(!constraints.permits(&w("whirl"))); // lacks the required E
        assert!(!constraints.permits(&w("pixel"))); // contains the dead P
    }

    #[test]
    fn constraints_accumulate_across_guesses() {
        let constraints = HardConstraints::from_history(&[
            observe("crane", "+----"),
            observe("colds", "+---*"),
        ]);

        // C locked at position 1, S required somewhere, R/A/N/E/O/L/D dead
        assert!(constraints.permits(&w("cysts")));
        assert!(!constraints.permits(&w("crust"))); // contains R
        assert!(!constraints.permits(&w("gusts"))); // C not at position 1
    }

    #[test]
    fn filter_drops_every_illegal_fixture() {
        // Known Hit at position 1 and a Miss elsewhere in history
        let constraints = HardConstraints::from_history(&[observe("knoll", "+--*-")]);

        let pool = vec![
            w("kills"), // K locked, L present, no N/O: legal
            w("balmy"), // violates the lock at position 1
            w("knelt"), // contains the dead N
            w("kitty"), // lacks the required L
        ];

        let filtered = constraints.filter(&pool);
        let texts: Vec<&str> = filtered.iter().map(Word::text).collect();
        assert_eq!(texts, ["kills"]);
    }

    #[test]
    fn empty_history_permits_everything() {
        let constraints = HardConstraints::from_history(&[]);
        for text in ["crane", "zzzzz", "aaaaa"] {
            assert!(constraints.permits(&w(text)));
        }
    }
}
