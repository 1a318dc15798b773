//! Lexicon-based polarity scoring.
//!
//! Uses the VADER rule/lexicon model's compound score, a single scalar in
//! [-1.0, 1.0]: positive values read favorable, negative unfavorable, 0.0
//! neutral. Empty input is scored 0.0 without consulting the model.

use tracing::debug;
use vader_sentiment::SentimentIntensityAnalyzer;

/// Polarity of `text` in [-1.0, 1.0]; 0.0 for empty or whitespace-only
/// input.
pub fn polarity(text: &str) -> f64 {
    if text.trim().is_empty() {
        return 0.0;
    }

    let analyzer = SentimentIntensityAnalyzer::new();
    let scores = analyzer.polarity_scores(text);
    let compound = scores.get("compound").copied().unwrap_or(0.0);
    debug!(compound, "Scored text polarity");

    // Compound is already normalized, the clamp just pins the contract.
    compound.clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_neutral() {
        assert_eq!(polarity(""), 0.0);
        assert_eq!(polarity("   \n\t"), 0.0);
    }

    #[test]
    fn test_positive_text_scores_above_zero() {
        let score = polarity("This is a wonderful, excellent result and everyone is happy.");
        assert!(score > 0.0, "expected positive score, got {score}");
    }

    #[test]
    fn test_negative_text_scores_below_zero() {
        let score = polarity("This is a terrible, horrible disaster and everyone is sad.");
        assert!(score < 0.0, "expected negative score, got {score}");
    }

    #[test]
    fn test_score_stays_within_bounds() {
        let texts = [
            "amazing amazing amazing amazing amazing!!!",
            "awful awful awful awful awful!!!",
            "The committee met on Tuesday to review the schedule.",
        ];
        for text in texts {
            let score = polarity(text);
            assert!((-1.0..=1.0).contains(&score), "out of range: {score}");
        }
    }
}
