//! Best-guess selection over a guess pool
//!
//! Scores every pool word against the candidate set and picks the maximum.
//! The pool scan is the dominant cost of a turn, so it runs in parallel;
//! workers share only the read-only candidate slice and the merge is a
//! single reduction.

use super::entropy::calculate_entropy;
use crate::core::Word;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// Select the best guess from the pool by maximizing entropy
///
/// Equally-scored guesses are broken deterministically: a guess that is
/// itself a candidate wins (it can end the game outright), then the
/// lexicographically smaller word wins.
///
/// A single remaining candidate is returned directly without scoring.
/// Returns `None` if the pool or the candidate set is empty.
///
/// # Examples
/// ```
/// use wordle_agent::core::{Alphabet, Word};
/// use wordle_agent::solver::select_best_guess;
///
/// let parse = |t: &str| Word::parse(t, Alphabet::Letters).unwrap();
/// let pool = vec![parse("aaaaa"), parse("aeros")];
/// let candidates = vec![parse("slate"), parse("irate")];
///
/// let (best, entropy) = select_best_guess(&pool, &candidates).unwrap();
/// assert_eq!(best.text(), "aeros"); // AEROS splits the candidates, AAAAA does not
/// assert!(entropy > 0.0);
/// ```
#[must_use]
pub fn select_best_guess<'a>(pool: &'a [Word], candidates: &[Word]) -> Option<(&'a Word, f64)> {
    if pool.is_empty() || candidates.is_empty() {
        return None;
    }

    // Sole survivor: guess it, no partitioning needed
    if let [only] = candidates
        && let Some(found) = pool.iter().find(|w| *w == only)
    {
        return Some((found, 0.0));
    }

    let candidate_texts: FxHashSet<&str> = candidates.iter().map(Word::text).collect();

    pool.par_iter()
        .map(|guess| {
            let entropy = calculate_entropy(guess, candidates);
            (guess, entropy, candidate_texts.contains(guess.text()))
        })
        .max_by(|a, b| guess_order(a, b))
        .map(|(guess, entropy, _)| (guess, entropy))
}

/// Rank the whole pool by descending score
///
/// Same scoring and tie-break rules as [`select_best_guess`], but returns
/// every pool word ordered best-to-worst. Used to build the first-move
/// artifact, where the top slice of the ranking is persisted.
#[must_use]
pub fn rank_guesses<'a>(pool: &'a [Word], candidates: &[Word]) -> Vec<(&'a Word, f64)> {
    let candidate_texts: FxHashSet<&str> = candidates.iter().map(Word::text).collect();

    let mut scored: Vec<(&Word, f64, bool)> = pool
        .par_iter()
        .map(|guess| {
            let entropy = calculate_entropy(guess, candidates);
            (guess, entropy, candidate_texts.contains(guess.text()))
        })
        .collect();

    scored.sort_by(|a, b| guess_order(b, a));
    scored
        .into_iter()
        .map(|(guess, entropy, _)| (guess, entropy))
        .collect()
}

/// Ascending order: higher entropy, then candidate membership, then
/// lexicographically smaller text (reversed so the smaller word is "greater")
fn guess_order(a: &(&Word, f64, bool), b: &(&Word, f64, bool)) -> Ordering {
    a.1.total_cmp(&b.1)
        .then(a.2.cmp(&b.2))
        .then_with(|| b.0.text().cmp(a.0.text()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;

    fn w(text: &str) -> Word {
        Word::parse(text, Alphabet::Letters).unwrap()
    }

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| w(t)).collect()
    }

    #[test]
    fn selects_highest_entropy() {
        let pool = words(&["aaaaa", "aeros"]);
        let candidates = words(&["slate", "irate", "crate", "grate"]);

        let (best, entropy) = select_best_guess(&pool, &candidates).unwrap();

        // AEROS should split the candidates better than AAAAA
        assert_eq!(best.text(), "aeros");
        assert!(entropy > 0.5);
    }

    #[test]
    fn singleton_candidate_returned_without_scoring() {
        let pool = words(&["crane", "slate", "irate"]);
        let candidates = words(&["irate"]);

        let (best, entropy) = select_best_guess(&pool, &candidates).unwrap();
        assert_eq!(best.text(), "irate");
        assert!((entropy - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn tie_break_prefers_candidate_guess() {
        // Both pool words split {crate, grate} into two singleton buckets
        // (1 bit each), but CRATE can win the game outright.
        let pool = words(&["caddy", "crate"]);
        let candidates = words(&["crate", "grate"]);

        let (best, entropy) = select_best_guess(&pool, &candidates).unwrap();
        assert!((entropy - 1.0).abs() < 0.001);
        assert_eq!(best.text(), "crate");
    }

    #[test]
    fn tie_break_falls_back_to_lexicographic() {
        // Neither pool word touches the candidates: all scores are zero,
        // neither is a candidate, so the lexicographically smaller wins.
        let pool = words(&["zzzzz", "mmmmm"]);
        let candidates = words(&["aaaaa", "bbbbb"]);

        let (best, entropy) = select_best_guess(&pool, &candidates).unwrap();
        assert_eq!(best.text(), "mmmmm");
        assert!(entropy.abs() < f64::EPSILON);
    }

    #[test]
    fn selection_is_deterministic() {
        let pool = words(&["aaaaa", "bbbbb", "ccccc", "daddy"]);
        let candidates = words(&["ccccc", "daddy"]);

        let first = select_best_guess(&pool, &candidates).unwrap().0.clone();
        for _ in 0..10 {
            let (best, _) = select_best_guess(&pool, &candidates).unwrap();
            assert_eq!(*best, first);
        }
    }

    #[test]
    fn returns_none_on_empty_pool_or_candidates() {
        let pool = words(&["crane"]);
        assert!(select_best_guess(&[], &pool).is_none());
        assert!(select_best_guess(&pool, &[]).is_none());
    }

    #[test]
    fn rank_guesses_is_descending_and_complete() {
        let pool = words(&["aaaaa", "aeros", "zzzzz", "slate"]);
        let candidates = words(&["slate", "irate", "crate", "grate"]);

        let ranked = rank_guesses(&pool, &candidates);

        assert_eq!(ranked.len(), pool.len());
        for pair in ranked.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn rank_guesses_head_matches_selection() {
        let pool = words(&["aaaaa", "aeros", "zzzzz", "slate"]);
        let candidates = words(&["slate", "irate", "crate", "grate"]);

        let ranked = rank_guesses(&pool, &candidates);
        let (best, _) = select_best_guess(&pool, &candidates).unwrap();

        assert_eq!(ranked[0].0, best);
    }
}
