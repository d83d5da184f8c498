//! Turn-by-turn game session
//!
//! A [`GameSession`] owns the shrinking candidate set and the observation
//! history for one game, advancing through an explicit state machine:
//! `InProgress` until the session is `Solved` (all-hit feedback),
//! `Exhausted` (turn cap reached), or `Aborted` (feedback contradicted
//! every candidate). Terminal states are final.

use crate::core::{Pattern, Word};
use crate::solver::{HardConstraints, filter_candidates, select_best_guess};
use crate::wordlists::Dictionary;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;
use std::io;

/// Default number of guesses before a game is lost
pub const DEFAULT_MAX_TURNS: usize = 6;

/// Lifecycle of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Accepting observations
    InProgress,
    /// Last feedback was all hits
    Solved,
    /// Turn cap reached without solving
    Exhausted,
    /// Feedback contradicted every remaining candidate
    Aborted,
}

impl GameStatus {
    /// True once the session can no longer advance
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Which words are scored as potential guesses
///
/// Scoring the full dictionary every turn gives marginally stronger guesses;
/// restricting the pool to the live candidate set trades that edge for an
/// O(candidates²) turn, which matters for large dictionaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PoolPolicy {
    /// Score every dictionary word each turn
    #[default]
    Full,
    /// Score only the remaining candidates
    Candidates,
}

impl PoolPolicy {
    /// Create a policy from a name string
    ///
    /// Supported names: "full", "candidates". Returns `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "full" => Some(Self::Full),
            "candidates" => Some(Self::Candidates),
            _ => None,
        }
    }
}

/// Per-session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub max_turns: usize,
    pub hard_mode: bool,
    pub pool: PoolPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
            hard_mode: false,
            pool: PoolPolicy::default(),
        }
    }
}

/// Error type for session-fatal conditions
#[derive(Debug)]
pub enum GameError {
    /// Observed feedback is inconsistent with every remaining candidate;
    /// carries the full history for diagnosis
    NoCandidates {
        turn: usize,
        guess: Word,
        pattern: Pattern,
        history: Vec<(Word, Pattern)>,
    },
    /// The guess pool is empty (hard-mode constraints excluded every word)
    NoLegalGuess { turn: usize },
    /// First-move cache could not be read or written
    Cache(io::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidates {
                turn,
                guess,
                pattern,
                history,
            } => {
                write!(
                    f,
                    "Turn {turn}: feedback {pattern} for guess '{guess}' \
                     contradicts every remaining candidate. History:"
                )?;
                for (i, (past_guess, past_pattern)) in history.iter().enumerate() {
                    write!(f, " {}:{past_guess}/{past_pattern}", i + 1)?;
                }
                Ok(())
            }
            Self::NoLegalGuess { turn } => {
                write!(f, "Turn {turn}: no legal guess remains in the pool")
            }
            Self::Cache(err) => write!(f, "First-move cache I/O failed: {err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Cache(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for GameError {
    fn from(err: io::Error) -> Self {
        Self::Cache(err)
    }
}

/// State of one game in progress
pub struct GameSession<'a> {
    dictionary: &'a Dictionary,
    config: SessionConfig,
    candidates: Vec<Word>,
    history: Vec<(Word, Pattern)>,
    status: GameStatus,
}

impl<'a> GameSession<'a> {
    /// Start a session with the full dictionary as the candidate set
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, config: SessionConfig) -> Self {
        Self {
            dictionary,
            config,
            candidates: dictionary.words().to_vec(),
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Current turn number, starting at 1
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len() + 1
    }

    /// Session status
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Observations so far, in turn order
    #[must_use]
    pub fn history(&self) -> &[(Word, Pattern)] {
        &self.history
    }

    /// Words still consistent with every observation
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Pick the best next guess for the current state
    ///
    /// The pool follows the configured [`PoolPolicy`], restricted by
    /// hard-mode constraints when enabled. A sole surviving candidate is
    /// returned directly.
    ///
    /// # Errors
    /// Returns [`GameError::NoLegalGuess`] if the pool is empty.
    pub fn choose_guess(&self) -> Result<Word, GameError> {
        debug_assert!(
            !self.status.is_terminal(),
            "guess requested on a finished session"
        );

        let pool: &[Word] = match self.config.pool {
            PoolPolicy::Full => self.dictionary.words(),
            PoolPolicy::Candidates => &self.candidates,
        };

        let selected = if self.config.hard_mode {
            let constraints = HardConstraints::from_history(&self.history);
            let legal = constraints.filter(pool);
            select_best_guess(&legal, &self.candidates).map(|(word, _)| word.clone())
        } else {
            select_best_guess(pool, &self.candidates).map(|(word, _)| word.clone())
        };

        selected.ok_or(GameError::NoLegalGuess { turn: self.turn() })
    }

    /// Apply one observation and classify the resulting state
    ///
    /// # Errors
    /// Returns [`GameError::NoCandidates`] when the feedback contradicts
    /// every remaining candidate; the session is left `Aborted` and the
    /// error carries the full history.
    pub fn observe(&mut self, guess: Word, pattern: Pattern) -> Result<GameStatus, GameError> {
        debug_assert!(
            !self.status.is_terminal(),
            "observation on a finished session"
        );

        let remaining = filter_candidates(&self.candidates, &guess, pattern);
        self.history.push((guess.clone(), pattern));

        if remaining.is_empty() {
            self.status = GameStatus::Aborted;
            return Err(GameError::NoCandidates {
                turn: self.history.len(),
                guess,
                pattern,
                history: self.history.clone(),
            });
        }

        self.candidates = remaining;
        self.status = if pattern.is_perfect() {
            GameStatus::Solved
        } else if self.history.len() >= self.config.max_turns {
            GameStatus::Exhausted
        } else {
            GameStatus::InProgress
        };

        Ok(self.status)
    }
}

/// Outcome of one completed game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub target: Word,
    pub history: Vec<(Word, Pattern)>,
    pub status: GameStatus,
}

impl GameRecord {
    /// Number of guesses submitted
    #[must_use]
    pub fn turns(&self) -> usize {
        self.history.len()
    }

    /// True if the game ended on all-hit feedback
    #[must_use]
    pub fn solved(&self) -> bool {
        self.status == GameStatus::Solved
    }
}

/// Play one full game against a known target
///
/// The feedback evaluator stands in for the external feedback channel.
/// Turn 1 uses, in priority order: the forced first guess, a uniformly
/// random pick from `openings` (the cached top first moves), or a full
/// scoring pass.
///
/// # Errors
/// Propagates [`GameError`]; `NoCandidates` cannot occur here because the
/// oracle is honest by construction.
pub fn play_automated<R: Rng>(
    dictionary: &Dictionary,
    config: &SessionConfig,
    target: &Word,
    openings: Option<&[Word]>,
    forced_first: Option<&Word>,
    rng: &mut R,
) -> Result<GameRecord, GameError> {
    let mut session = GameSession::new(dictionary, config.clone());

    while session.status() == GameStatus::InProgress {
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

        let pattern = Pattern::calculate(&guess, target);
        session.observe(guess, pattern)?;
    }

    Ok(GameRecord {
        target: target.clone(),
        history: session.history().to_vec(),
        status: session.status(),
    })
}
