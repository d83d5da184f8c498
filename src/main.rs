//! Wordle agent - CLI
//!
//! Interactive play, target-mode solving, entropy analysis, and a
//! statistical simulation harness over a configurable dictionary.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::path::PathBuf;
use wordle_agent::{
    cache::FirstMoveCache,
    commands::{analyze_word, run_play, run_simulate, solve_word},
    core::{Alphabet, Word},
    game::{DEFAULT_MAX_TURNS, PoolPolicy, SessionConfig, SimulationConfig},
    output::{print_analysis_result, print_simulation_report, print_solve_result},
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_agent",
    about = "Wordle-playing agent using information-theoretic guess selection",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line
    #[arg(short, long, global = true, default_value = "dict.txt")]
    dict: PathBuf,

    /// Alphabet the words are drawn from: letters or digits
    #[arg(short, long, global = true, default_value = "letters")]
    alphabet: String,

    /// Directory holding the first-moves cache artifact
    #[arg(long, global = true, default_value = ".")]
    cache_dir: PathBuf,

    /// Hard mode: every guess must honor all revealed feedback
    #[arg(long, global = true)]
    hard: bool,

    /// Guesses allowed per game
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: usize,

    /// Guess pool per turn: full or candidates
    #[arg(long, global = true, default_value = "full")]
    pool: String,

    /// Seed for target draws and opening picks (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): the agent guesses, you answer with +*- feedback
    Play,

    /// Solve a known target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show per-turn candidate counts and entropy
        #[arg(short, long)]
        verbose: bool,

        /// Override the first guess
        #[arg(short, long)]
        first: Option<String>,
    },

    /// Run many automated games and print statistics
    Simulate {
        /// Number of games with randomly drawn targets
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,

        /// Override the first guess for every game
        #[arg(short, long)]
        first: Option<String>,

        /// Explicit target words (one game each) instead of random draws
        #[arg(long, num_args = 1..)]
        targets: Vec<String>,
    },

    /// Report a word's information content as an opening guess
    Analyze {
        /// Word to analyze
        word: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let alphabet = Alphabet::from_name(&cli.alphabet).ok_or_else(|| {
        anyhow!(
            "Unknown alphabet '{}'; expected 'letters' or 'digits'",
            cli.alphabet
        )
    })?;
    let pool = PoolPolicy::from_name(&cli.pool).ok_or_else(|| {
        anyhow!(
            "Unknown pool policy '{}'; expected 'full' or 'candidates'",
            cli.pool
        )
    })?;

    let dictionary = Dictionary::load(&cli.dict, alphabet)?;
    let session = SessionConfig {
        max_turns: cli.max_turns,
        hard_mode: cli.hard,
        pool,
    };
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    let cache = FirstMoveCache::for_dictionary(&cli.cache_dir, &dictionary);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let openings = load_openings(&cache, &dictionary)?;
            let mut rng = StdRng::seed_from_u64(seed);
            run_play(&dictionary, &session, Some(&openings), &mut rng)
        }
        Commands::Solve {
            word,
            verbose,
            first,
        } => {
            let openings = load_openings(&cache, &dictionary)?;
            let forced = resolve_word(first.as_deref(), &dictionary)?;
            let mut rng = StdRng::seed_from_u64(seed);

            let result = solve_word(
                &word,
                &dictionary,
                &session,
                Some(&openings),
                forced.as_ref(),
                &mut rng,
            )?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Simulate {
            games,
            first,
            targets,
        } => {
            let openings = load_openings(&cache, &dictionary)?;
            let forced = resolve_word(first.as_deref(), &dictionary)?;
            let targets = resolve_targets(&targets, &dictionary)?;
            let config = SimulationConfig {
                games,
                seed,
                session,
            };

            let report = run_simulate(
                &dictionary,
                &config,
                Some(&openings),
                targets.as_deref(),
                forced.as_ref(),
            )?;
            print_simulation_report(&report);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &dictionary)?;
            print_analysis_result(&result);
            Ok(())
        }
    }
}

/// Load the cached opening list, announcing the one-time build
fn load_openings(cache: &FirstMoveCache, dictionary: &Dictionary) -> Result<Vec<Word>> {
    if !cache.path().exists() {
        println!(
            "Computing first-move rankings for {} words (one-time per dictionary)...",
            dictionary.len()
        );
    }
    Ok(cache.top_openings(dictionary)?)
}

/// Resolve an optional word argument against the dictionary
fn resolve_word(text: Option<&str>, dictionary: &Dictionary) -> Result<Option<Word>> {
    text.map(|t| {
        dictionary
            .find(t)
            .cloned()
            .ok_or_else(|| anyhow!("Word '{t}' is not in the dictionary"))
    })
    .transpose()
}

/// Resolve explicit simulation targets; empty input means random draws
fn resolve_targets(targets: &[String], dictionary: &Dictionary) -> Result<Option<Vec<Word>>> {
    if targets.is_empty() {
        return Ok(None);
    }

    let words = targets
        .iter()
        .map(|t| {
            dictionary
                .find(t)
                .cloned()
                .ok_or_else(|| anyhow!("Target '{t}' is not in the dictionary"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Some(words))
}
