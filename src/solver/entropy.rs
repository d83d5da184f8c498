//! Shannon entropy calculation for feedback patterns
//!
//! Given a guess and a set of candidates, computes the expected information
//! gain: the candidates are partitioned by the pattern each would produce
//! against the guess, and the entropy of that partition is the score.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing pattern x.
///
/// # Examples
/// ```
/// use wordle_agent::core::{Alphabet, Word};
/// use wordle_agent::solver::calculate_entropy;
///
/// let guess = Word::parse("crane", Alphabet::Letters).unwrap();
/// let candidates = vec![
///     Word::parse("slate", Alphabet::Letters).unwrap(),
///     Word::parse("irate", Alphabet::Letters).unwrap(),
/// ];
///
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let pattern_counts = group_by_pattern(guess, candidates);
    shannon_entropy(&pattern_counts)
}

/// Group candidates by the pattern they produce with the guess
fn group_by_pattern(guess: &Word, candidates: &[Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let pattern = Pattern::calculate(guess, candidate);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from a pattern distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for a certain outcome (one pattern with p=1)
/// - Maximized for a uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &std::collections::HashMap<Pattern, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    pattern_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size.
/// The extra figures feed the interactive display and the analyze command.
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let pattern_counts = group_by_pattern(guess, candidates);
    let total = candidates.len() as f64;

    let entropy = shannon_entropy(&pattern_counts);

    // A pattern observed with probability p leaves its own bucket behind
    let expected_remaining: f64 = pattern_counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            p * count as f64
        })
        .sum();

    let max_partition = pattern_counts.values().copied().max().unwrap_or(0);

    GuessMetrics {
        entropy,
        expected_remaining,
        max_partition,
    }
}
