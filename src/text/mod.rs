// Text analysis — keyword-driven scorers over free text.
//
// Every scorer here is a pure, total function over `&str`. The vocabularies
// are process-wide constants; nothing is cached or shared between requests.

pub mod sentiment;
pub mod summary;
pub mod topics;
pub mod toxicity;

/// Count how many words from `vocabulary` occur anywhere in `haystack`.
///
/// This is substring containment, not token matching: "hatefully" counts as
/// a hit for "hate". Each vocabulary word counts at most once. `haystack`
/// is expected to be lower-cased already.
pub(crate) fn count_contained(haystack: &str, vocabulary: &[&str]) -> usize {
    vocabulary
        .iter()
        .filter(|word| haystack.contains(*word))
        .count()
}
