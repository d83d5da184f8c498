//! Wordle-playing agent
//!
//! Plays word-guessing games by keeping the set of answers consistent with
//! all feedback seen so far and choosing, each turn, the guess with the
//! highest expected information gain.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_agent::core::{Alphabet, Pattern, Word};
//!
//! let guess = Word::parse("crane", Alphabet::Letters).unwrap();
//! let target = Word::parse("slate", Alphabet::Letters).unwrap();
//!
//! let pattern = Pattern::calculate(&guess, &target);
//! assert_eq!(pattern.to_string(), "--+-+");
//! ```

// Core domain types
pub mod core;

// Guess-selection engine
pub mod solver;

// Persisted first-move cache
pub mod cache;

// Game session and simulation harness
pub mod game;

// Dictionaries and loading
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
