// Keyword toxicity scoring.
//
// Tokenizes on whitespace, lower-cases, strips surrounding punctuation and
// intersects the distinct tokens with a small flagged vocabulary. Each
// distinct hit adds 0.2, capped at 1.0.

use std::collections::HashSet;

/// Flagged vocabulary. Matching is exact per token (after punctuation strip).
pub const TOXIC_WORDS: [&str; 8] = [
    "hate", "stupid", "idiot", "damn", "shit", "bastard", "ugly", "dirty",
];

/// Characters trimmed from both ends of every token before matching.
const STRIP_CHARS: &[char] = &['.', ',', '!', '?', ';', ':', '"', '\'', '(', ')'];

/// Weight added per distinct flagged word.
const HIT_WEIGHT: f64 = 0.2;

/// Score `text` for flagged vocabulary. Returns a value in [0.0, 1.0].
pub fn score(text: &str) -> f64 {
    let hits = distinct_hits(text);
    if hits == 0 {
        return 0.0;
    }
    (HIT_WEIGHT * hits as f64).min(1.0)
}

/// Number of distinct flagged words present in `text` as whole tokens.
pub fn distinct_hits(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    let lower = text.to_lowercase();
    let tokens: HashSet<&str> = lower
        .split_whitespace()
        .map(|t| t.trim_matches(STRIP_CHARS))
        .collect();

    TOXIC_WORDS.iter().filter(|w| tokens.contains(*w)).count()
}
