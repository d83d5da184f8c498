//! Command implementations

pub mod analyze;
pub mod play;
pub mod simulate;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use play::run_play;
pub use simulate::run_simulate;
pub use solve::{GuessStep, SolveResult, solve_word};
