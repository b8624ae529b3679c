// Lexicon sentiment scoring.
//
// Counts positive and negative vocabulary words present in the text
// (substring containment) and turns the difference into a coarse label with
// a confidence between 0.6 and 0.95.

use std::fmt;

use serde::Serialize;

use super::count_contained;

const NEGATIVE_WORDS: [&str; 14] = [
    "hate",
    "bad",
    "terrible",
    "awful",
    "disgusting",
    "horrible",
    "worst",
    "sucks",
    "stupid",
    "annoying",
    "frustrating",
    "disappointed",
    "angry",
    "upset",
];

const POSITIVE_WORDS: [&str; 14] = [
    "love",
    "great",
    "amazing",
    "awesome",
    "fantastic",
    "wonderful",
    "excellent",
    "perfect",
    "good",
    "nice",
    "happy",
    "glad",
    "impressed",
    "satisfied",
];

/// Confidence reported for empty input.
const EMPTY_SCORE: f64 = 0.6;
/// Confidence reported when positive and negative hits cancel out.
const TIE_SCORE: f64 = 0.7;
const BASE_SCORE: f64 = 0.6;
const STEP: f64 = 0.1;
const MAX_SCORE: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Negative => "NEGATIVE",
            SentimentLabel::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sentiment label with its heuristic confidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    pub score: f64,
}

/// Score the sentiment of `text`.
pub fn score(text: &str) -> SentimentResult {
    if text.is_empty() {
        return SentimentResult {
            label: SentimentLabel::Neutral,
            score: EMPTY_SCORE,
        };
    }

    let lower = text.to_lowercase();
    let negative = count_contained(&lower, &NEGATIVE_WORDS);
    let positive = count_contained(&lower, &POSITIVE_WORDS);

    let label = match negative.cmp(&positive) {
        std::cmp::Ordering::Greater => SentimentLabel::Negative,
        std::cmp::Ordering::Less => SentimentLabel::Positive,
        std::cmp::Ordering::Equal => {
            return SentimentResult {
                label: SentimentLabel::Neutral,
                score: TIE_SCORE,
            }
        }
    };

    let margin = negative.abs_diff(positive) as f64;
    SentimentResult {
        label,
        score: (BASE_SCORE + margin * STEP).min(MAX_SCORE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_neutral() {
        let r = score("");
        assert_eq!(r.label, SentimentLabel::Neutral);
        assert!((r.score - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_no_vocabulary_is_neutral_tie() {
        let r = score("the meeting is on tuesday");
        assert_eq!(r.label, SentimentLabel::Neutral);
        assert!((r.score - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_positive() {
        let r = score("I love this, it's great");
        assert_eq!(r.label, SentimentLabel::Positive);
        assert!((r.score - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_negative() {
        let r = score("this is the worst, I hate it");
        assert_eq!(r.label, SentimentLabel::Negative);
        assert!(r.score >= 0.7);
    }

    #[test]
    fn test_confidence_is_capped() {
        let r = score("love great amazing awesome fantastic wonderful excellent perfect");
        assert_eq!(r.label, SentimentLabel::Positive);
        assert!((r.score - 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_label_serializes_uppercase() {
        let json = serde_json::to_value(score("good")).unwrap();
        assert_eq!(json["label"], "POSITIVE");
    }
}
