//! Interactive play command
//!
//! The agent proposes guesses; the operator answers with the feedback the
//! real game displayed, as five characters of `+` (hit), `*` (present),
//! `-` (miss). Malformed feedback is rejected and re-prompted, never
//! coerced. Inconsistent feedback is fatal and reported with the full
//! turn history.

use crate::core::{Pattern, Word};
use crate::game::{GameError, GameSession, GameStatus, SessionConfig};
use crate::solver::calculate_metrics;
use crate::wordlists::Dictionary;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::io::{self, Write};

/// Run one interactive game to completion
///
/// # Errors
/// Fails on I/O problems with the terminal, or with the full session
/// history when the supplied feedback contradicts every candidate.
pub fn run_play<R: Rng>(
    dictionary: &Dictionary,
    config: &SessionConfig,
    openings: Option<&[Word]>,
    rng: &mut R,
) -> Result<()> {
    println!(
        "\nPlaying with {} words. Answer each guess with feedback like {}:",
        dictionary.len(),
        "-*+--".bright_yellow()
    );
    println!("  {} hit (right symbol, right position)", "+".green().bold());
    println!("  {} present (right symbol, wrong position)", "*".yellow().bold());
    println!("  {} miss (symbol not in the word)", "-".bright_black().bold());
    println!("Type 'quit' to stop.\n");

    let mut session = GameSession::new(dictionary, config.clone());

    while session.status() == GameStatus::InProgress {
        let guess = if session.history().is_empty() {
            match openings {
                Some(list) if !list.is_empty() => list
                    .choose(rng)
                    .expect("opening list checked non-empty")
                    .clone(),
                _ => session.choose_guess()?,
            }
        } else {
            session.choose_guess()?
        };

        let metrics = calculate_metrics(&guess, session.candidates());
        println!(
            "Turn {}: {} ({} candidates, {:.2} bits expected)",
            session.turn(),
            guess.text().to_uppercase().bright_white().bold(),
            session.candidates().len(),
            metrics.entropy
        );

        if session.candidates().len() <= 8 {
            let listing: Vec<String> = session
                .candidates()
                .iter()
                .map(|w| w.text().to_uppercase())
                .collect();
            println!("  remaining: {}", listing.join(", ").bright_black());
        }

        let Some(pattern) = prompt_feedback()? else {
            println!("\nStopped.\n");
            return Ok(());
        };

        match session.observe(guess.clone(), pattern) {
            Ok(GameStatus::Solved) => {
                println!(
                    "\n{}",
                    format!(
                        "Solved in {} {}! The word is {}.",
                        session.turn() - 1,
                        if session.turn() == 2 { "turn" } else { "turns" },
                        guess.text().to_uppercase()
                    )
                    .green()
                    .bold()
                );
            }
            Ok(GameStatus::Exhausted) => {
                println!(
                    "\n{}",
                    format!("No solution within {} turns.", config.max_turns)
                        .red()
                        .bold()
                );
            }
            Ok(_) => {}
            Err(err @ GameError::NoCandidates { .. }) => {
                println!(
                    "\n{}",
                    "The feedback so far is inconsistent: no dictionary word fits."
                        .red()
                        .bold()
                );
                return Err(err.into());
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

/// Prompt until the operator supplies valid feedback; `None` means quit
fn prompt_feedback() -> Result<Option<Pattern>> {
    loop {
        print!("Enter feedback: ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();

        if matches!(input, "quit" | "q" | "exit") {
            return Ok(None);
        }

        match input.parse::<Pattern>() {
            Ok(pattern) => return Ok(Some(pattern)),
            Err(err) => println!("{}", format!("{err}. Try again.").red()),
        }
    }
}
