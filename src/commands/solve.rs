//! Target-mode solving command
//!
//! Plays one game against a known target, recording per-turn detail for
//! display. The feedback evaluator replaces the interactive channel.

use crate::core::{Pattern, Word};
use crate::game::{GameSession, GameStatus, SessionConfig};
use crate::solver::calculate_entropy;
use crate::wordlists::Dictionary;
use anyhow::{Result, anyhow};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Entropy of the guess against the pre-filter candidates; omitted once
    /// only one candidate remained
    pub entropy: Option<f64>,
}

/// Result of solving a target word
pub struct SolveResult {
    pub target: String,
    pub status: GameStatus,
    pub steps: Vec<GuessStep>,
}

impl SolveResult {
    /// True if the game ended on all-hit feedback
    #[must_use]
    pub fn solved(&self) -> bool {
        self.status == GameStatus::Solved
    }
}

/// Solve a specific target word
///
/// Turn 1 uses the forced first guess, a random pick from the cached
/// openings, or a full scoring pass, in that priority order.
///
/// # Errors
/// Fails if the target is not a dictionary word, or on a session-fatal
/// game error (which cannot arise from honest internal feedback).
pub fn solve_word<R: Rng>(
    target_text: &str,
    dictionary: &Dictionary,
    config: &SessionConfig,
    openings: Option<&[Word]>,
    forced_first: Option<&Word>,
    rng: &mut R,
) -> Result<SolveResult> {
    let target = dictionary
        .find(target_text)
        .ok_or_else(|| anyhow!("Target word '{target_text}' is not in the dictionary"))?
        .clone();

    let mut session = GameSession::new(dictionary, config.clone());
    let mut steps = Vec::new();

    while session.status() == GameStatus::InProgress {
        let candidates_before = session.candidates().len();

        let guess = if session.history().is_empty() {
            match (forced_first, openings) {
                (Some(forced), _) => forced.clone(),
                (None, Some(list)) if !list.is_empty() => list
                    .choose(rng)
                    .expect("opening list checked non-empty")
                    .clone(),
                _ => session.choose_guess()?,
            }
        } else {
            session.choose_guess()?
        };

        let entropy =
            (candidates_before > 1).then(|| calculate_entropy(&guess, session.candidates()));

        let pattern = Pattern::calculate(&guess, &target);
        session.observe(guess.clone(), pattern)?;

        steps.push(GuessStep {
            word: guess.text().to_string(),
            pattern,
            candidates_before,
            candidates_after: session.candidates().len(),
            entropy,
        });
    }

    Ok(SolveResult {
        target: target.text().to_string(),
        status: session.status(),
        steps,
    })
}
