//! Word analysis command
//!
//! Reports the information content of a word as an opening guess against
//! the full dictionary.

use crate::solver::{GuessMetrics, calculate_metrics};
use crate::wordlists::Dictionary;
use anyhow::{Result, anyhow};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub metrics: GuessMetrics,
    pub total_candidates: usize,
}

/// Analyze the entropy of a word against the whole dictionary
///
/// # Errors
/// Fails if the word is not in the dictionary.
pub fn analyze_word(word_text: &str, dictionary: &Dictionary) -> Result<AnalysisResult> {
    let word = dictionary
        .find(word_text)
        .ok_or_else(|| anyhow!("Word '{word_text}' is not in the dictionary"))?;

    let metrics = calculate_metrics(word, dictionary.words());

    Ok(AnalysisResult {
        word: word.text().to_string(),
        metrics,
        total_candidates: dictionary.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;
    use crate::wordlists::loader::words_from_slice;

    fn dict(words: &[&str]) -> Dictionary {
        let words = words_from_slice(words, Alphabet::Letters);
        Dictionary::new(words, Alphabet::Letters).unwrap()
    }

    #[test]
    fn analyze_known_word() {
        let d = dict(&["knoll", "stela", "doily", "hullo"]);
        let result = analyze_word("stela", &d).unwrap();

        assert_eq!(result.word, "stela");
        assert_eq!(result.total_candidates, 4);
        assert!(result.metrics.entropy >= 0.0);
        assert!(result.metrics.entropy <= (d.len() as f64).log2());
        assert!(result.metrics.max_partition <= d.len());
    }

    #[test]
    fn analyze_unknown_word_errors() {
        let d = dict(&["knoll", "stela", "doily", "hullo"]);
        assert!(analyze_word("crane", &d).is_err());
        assert!(analyze_word("nonsense", &d).is_err());
    }
}
