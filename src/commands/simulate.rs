//! Simulation harness command
//!
//! Drives the simulator with a progress bar and returns the aggregated
//! report for display.

use crate::core::Word;
use crate::game::{SimulationConfig, SimulationReport, run_simulation};
use crate::wordlists::Dictionary;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

/// Run the statistical test harness
///
/// # Errors
/// Propagates game errors from the simulator (realistically only cache I/O).
///
/// # Panics
/// Will not panic - the progress-bar template is a checked constant.
pub fn run_simulate(
    dictionary: &Dictionary,
    config: &SimulationConfig,
    openings: Option<&[Word]>,
    targets: Option<&[Word]>,
    forced_first: Option<&Word>,
) -> Result<SimulationReport> {
    let total = match targets {
        Some(list) if !list.is_empty() => list.len(),
        _ => config.games,
    };

    println!(
        "Simulating {total} games over {} words (seed {})...",
        dictionary.len(),
        config.seed
    );

    let bar = ProgressBar::new(total as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let report = run_simulation(
        dictionary,
        config,
        openings,
        targets,
        forced_first,
        Some(&bar),
    )?;

    bar.finish_and_clear();
    Ok(report)
}
