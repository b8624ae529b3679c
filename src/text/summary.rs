// Extractive one-line summary.

pub const NO_TEXT_SUMMARY: &str = "No text provided for analysis.";

const PREFIX: &str = "Brief analysis: ";

/// Texts up to this many characters are echoed whole.
const SHORT_TEXT_CHARS: usize = 100;

/// Fallback length when the first sentence is blank (e.g. text starts with '.').
const FALLBACK_CHARS: usize = 50;

/// Summarize `text` as its first sentence, prefixed with "Brief analysis: ".
pub fn summarize(text: &str) -> String {
    if text.is_empty() {
        return NO_TEXT_SUMMARY.to_string();
    }

    if text.chars().count() <= SHORT_TEXT_CHARS {
        return format!("{PREFIX}{text}");
    }

    let first = text.split('.').next().unwrap_or_default().trim();
    let mut sentence = if first.is_empty() {
        text.chars().take(FALLBACK_CHARS).collect::<String>()
    } else {
        first.to_string()
    };

    if !sentence.ends_with('.') {
        sentence.push('.');
    }
    format!("{PREFIX}{sentence}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(summarize(""), NO_TEXT_SUMMARY);
    }

    #[test]
    fn test_short_text_is_echoed() {
        assert_eq!(summarize("hi"), "Brief analysis: hi");
    }

    #[test]
    fn test_long_text_takes_first_sentence() {
        let text = format!("The first sentence is here. {}", "filler ".repeat(20));
        assert_eq!(summarize(&text), "Brief analysis: The first sentence is here.");
    }

    #[test]
    fn test_long_text_without_period_gets_one() {
        let text = "word ".repeat(30);
        let summary = summarize(&text);
        assert!(summary.starts_with("Brief analysis: word"));
        assert!(summary.ends_with("word."));
    }

    #[test]
    fn test_leading_period_falls_back_to_prefix_chars() {
        let text = format!(".{}", "a".repeat(120));
        let expected = format!("Brief analysis: .{}.", "a".repeat(49));
        assert_eq!(summarize(&text), expected);
    }

    #[test]
    fn test_length_is_measured_in_chars() {
        // 100 multi-byte chars is still "short".
        let text = "é".repeat(100);
        assert_eq!(summarize(&text), format!("Brief analysis: {text}"));
    }
}
