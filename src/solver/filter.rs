//! Candidate filtering from observed feedback
//!
//! Narrows a candidate set to the words that exactly reproduce an observed
//! pattern. This is the only operation that ever shrinks the candidate set,
//! and it never grows it.

use crate::core::{Pattern, Word};

/// Keep the candidates consistent with one (guess, pattern) observation
///
/// A candidate survives iff feeding it to the feedback evaluator as the
/// target reproduces the observed pattern. An empty result signals that the
/// observed feedback contradicts every remaining candidate; callers treat
/// that as fatal rather than retrying (see `game::GameError::NoCandidates`).
///
/// # Examples
/// ```
/// use wordle_agent::core::{Alphabet, Pattern, Word};
/// use wordle_agent::solver::filter_candidates;
///
/// let parse = |t: &str| Word::parse(t, Alphabet::Letters).unwrap();
/// let candidates = vec![parse("knoll"), parse("stela"), parse("doily"), parse("hullo")];
///
/// let guess = parse("stela");
/// let observed: Pattern = "---+-".parse().unwrap();
/// let remaining = filter_candidates(&candidates, &guess, observed);
///
/// // Every word with an L in position 4 and none of S, T, E, A survives
/// let texts: Vec<&str> = remaining.iter().map(Word::text).collect();
/// assert_eq!(texts, ["knoll", "doily", "hullo"]);
/// ```
#[must_use]
pub fn filter_candidates(candidates: &[Word], guess: &Word, observed: Pattern) -> Vec<Word> {
    candidates
        .iter()
        .filter(|candidate| Pattern::calculate(guess, candidate) == observed)
        .cloned()
        .collect()
}
