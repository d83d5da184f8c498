//! Display functions for command results

use super::formatters::{entropy_bar, pattern_to_emoji};
use crate::commands::{AnalysisResult, SolveResult};
use crate::game::SimulationReport;
use colored::Colorize;

/// Print the result of solving a target word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word.to_uppercase(),
            pattern_to_emoji(step.pattern)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");

                if step.candidates_after > 0 {
                    let actual_reduction =
                        (step.candidates_before as f64 / step.candidates_after as f64).log2();
                    println!(
                        "  Info gained: {:.3} bits ({:.1}x reduction)",
                        actual_reduction,
                        step.candidates_before as f64 / step.candidates_after as f64
                    );
                }
            }
        }
    }

    println!();
    if result.solved() {
        println!(
            "{}",
            format!(
                "Solved {} in {} guesses",
                result.target.to_uppercase(),
                result.steps.len()
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "Failed to solve in {} guesses; the answer was {}",
                result.steps.len(),
                result.target.to_uppercase()
            )
            .red()
            .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let metrics = &result.metrics;
    let bar = entropy_bar(metrics.entropy, 30);

    println!("\nAgainst {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", metrics.entropy).bright_yellow()
    );
    println!("   Info gain:   {:.1}x reduction", metrics.entropy.exp2());
    println!(
        "   Expected:    {:.1} candidates remain",
        metrics.expected_remaining
    );
    println!("   Worst case:  {} candidates", metrics.max_partition);
}

/// Print the aggregated simulation report
pub fn print_simulation_report(report: &SimulationReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Overall:".bright_cyan().bold());
    println!("   Games played:     {}", report.games);
    println!(
        "   Solved:           {} {}",
        report.solved,
        format!("({:.1}%)", report.win_rate * 100.0).green()
    );
    if report.unsolved > 0 {
        println!(
            "   Unsolved:         {} {}",
            report.unsolved,
            format!(
                "({:.1}%)",
                report.unsolved as f64 / report.games as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "   Average turns:    {}",
        format!("{:.3}", report.average_turns).bright_yellow().bold()
    );
    println!("   Seed:             {}", report.seed);

    println!("\n{}", "Turn distribution:".bright_cyan().bold());
    let max_count = report.histogram.iter().copied().max().unwrap_or(1).max(1);
    for (i, &count) in report.histogram.iter().enumerate() {
        let turns = i + 1;
        let percentage = if report.solved > 0 {
            count as f64 / report.solved as f64 * 100.0
        } else {
            0.0
        };
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("   {turns} turns: {bar} {count:4} ({percentage:5.1}%)");
    }
}
