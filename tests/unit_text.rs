// Unit tests for the text scorers.
//
// Tests the public contracts of toxicity, sentiment, topics and summary:
// bounds, empty-input behavior, and the substring-vs-token distinction
// between scorers.

use multimodal_analyzer::text::sentiment::{self, SentimentLabel};
use multimodal_analyzer::text::summary::{self, NO_TEXT_SUMMARY};
use multimodal_analyzer::text::topics::{self, MAX_CATEGORIES};
use multimodal_analyzer::text::toxicity;

// ============================================================
// Toxicity
// ============================================================

#[test]
fn toxicity_empty_is_zero() {
    assert_eq!(toxicity::score(""), 0.0);
}

#[test]
fn toxicity_known_examples() {
    assert!((toxicity::score("I hate this") - 0.2).abs() < 1e-9);
    assert!((toxicity::score("you are a stupid idiot") - 0.4).abs() < 1e-9);
}

#[test]
fn toxicity_always_in_unit_interval() {
    let samples = [
        "",
        "   ",
        "hate stupid idiot damn shit bastard ugly dirty hate",
        "Damn! DIRTY, ugly... (bastard)",
        "perfectly pleasant sentence",
        "🙂 emoji 😡 hate",
    ];
    for s in samples {
        let score = toxicity::score(s);
        assert!((0.0..=1.0).contains(&score), "{s:?} scored {score}");
    }
}

#[test]
fn toxicity_monotonic_in_distinct_hits() {
    let a = toxicity::score("ugly");
    let b = toxicity::score("ugly dirty");
    let c = toxicity::score("ugly dirty damn");
    assert!(a < b && b < c);
}

// ============================================================
// Sentiment
// ============================================================

#[test]
fn sentiment_empty() {
    let r = sentiment::score("");
    assert_eq!(r.label, SentimentLabel::Neutral);
    assert!((r.score - 0.6).abs() < 1e-9);
}

#[test]
fn sentiment_examples() {
    let pos = sentiment::score("I love this, it's great");
    assert_eq!(pos.label, SentimentLabel::Positive);
    assert!(pos.score >= 0.7);

    let neg = sentiment::score("this is the worst, I hate it");
    assert_eq!(neg.label, SentimentLabel::Negative);
    assert!(neg.score >= 0.7);
}

#[test]
fn sentiment_uses_substring_containment() {
    // "hatefully" contains "hate"; token matching would miss it.
    let r = sentiment::score("hatefully");
    assert_eq!(r.label, SentimentLabel::Negative);
}

#[test]
fn sentiment_balanced_is_neutral() {
    let r = sentiment::score("good food, bad service");
    assert_eq!(r.label, SentimentLabel::Neutral);
    assert!((r.score - 0.7).abs() < 1e-9);
}

#[test]
fn sentiment_score_bounds() {
    for s in ["", "love", "hate hate", "awful terrible horrible worst sucks", "meh"] {
        let r = sentiment::score(s);
        assert!((0.6..=0.95).contains(&r.score), "{s:?} -> {}", r.score);
    }
}

// ============================================================
// Topics
// ============================================================

#[test]
fn topics_empty_is_general() {
    let r = topics::classify("");
    assert_eq!(r.primary, "General");
    assert!(r.categories.is_empty());
}

#[test]
fn topics_sorted_and_bounded() {
    let samples = [
        "The app has a great user interface and the restaurant menu is online",
        "Our company product review: quality service, tasty food, clean ui",
        "software data platform business customer recipe feedback layout",
        "I love this app, amazing experience!",
    ];
    for s in samples {
        let r = topics::classify(s);
        assert!(!r.categories.is_empty(), "{s:?} should match something");
        assert!(r.categories.len() <= MAX_CATEGORIES);
        assert!(r
            .categories
            .windows(2)
            .all(|w| w[0].percentage >= w[1].percentage));
        assert!(r.categories.iter().all(|c| c.percentage <= 95));
        assert_eq!(r.primary, r.categories[0].name);
    }
}

#[test]
fn topics_serialize_as_structured_object() {
    let json = serde_json::to_value(topics::classify("restaurant")).unwrap();
    assert_eq!(json["primary"], "Food & Dining");
    assert_eq!(json["categories"][0]["name"], "Food & Dining");
    assert_eq!(json["categories"][0]["percentage"], 88);
}

// ============================================================
// Summary
// ============================================================

#[test]
fn summary_examples() {
    assert_eq!(summary::summarize(""), NO_TEXT_SUMMARY);
    assert_eq!(summary::summarize("hi"), "Brief analysis: hi");
}

#[test]
fn summary_long_text_shape() {
    let samples = [
        "x".repeat(101),
        format!("{}. Then more.", "first sentence ".repeat(10)),
        format!("...{}", "dots first ".repeat(12)),
    ];
    for s in &samples {
        let out = summary::summarize(s);
        assert!(out.starts_with("Brief analysis: "), "{out:?}");
        assert!(out.ends_with('.'), "{out:?}");
    }
}
