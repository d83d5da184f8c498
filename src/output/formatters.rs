//! Formatting utilities for terminal output

use crate::core::{Mark, Pattern};

/// Format a pattern as an emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: Pattern) -> String {
    pattern
        .marks()
        .iter()
        .map(|mark| match mark {
            Mark::Hit => '🟩',
            Mark::Present => '🟨',
            Mark::Miss => '⬜',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to a rough practical maximum
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    let max_entropy = 6.0; // Roughly log2(64)
    create_progress_bar(entropy, max_entropy, width)
}
