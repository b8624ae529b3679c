// Keyword topic classification.
//
// Five fixed category vocabularies. A category's percentage is its hit
// density (hits per whitespace token) scaled by a per-category multiplier
// and capped; it is a relevance weight, not a probability.

use serde::Serialize;

use super::count_contained;

/// Topic reported when nothing matches.
pub const GENERAL_TOPIC: &str = "General";

/// At most this many categories are returned.
pub const MAX_CATEGORIES: usize = 3;

/// A category vocabulary and its scaling parameters.
struct CategorySpec {
    name: &'static str,
    keywords: &'static [&'static str],
    multiplier: u32,
    cap: u32,
}

/// Evaluated in this order; ties in percentage keep this order.
const CATEGORIES: [CategorySpec; 5] = [
    CategorySpec {
        name: "Technology",
        keywords: &[
            "technology",
            "software",
            "app",
            "website",
            "computer",
            "digital",
            "ai",
            "algorithm",
            "data",
            "programming",
            "tech",
            "system",
            "interface",
            "platform",
        ],
        multiplier: 10,
        cap: 95,
    },
    CategorySpec {
        name: "Product Review",
        keywords: &[
            "review",
            "rating",
            "experience",
            "recommend",
            "quality",
            "satisfied",
            "disappointed",
            "feedback",
            "opinion",
        ],
        multiplier: 15,
        cap: 90,
    },
    CategorySpec {
        name: "Business",
        keywords: &[
            "business",
            "company",
            "service",
            "customer",
            "product",
            "sales",
            "marketing",
            "revenue",
            "profit",
            "strategy",
            "management",
        ],
        multiplier: 12,
        cap: 85,
    },
    CategorySpec {
        name: "Food & Dining",
        keywords: &[
            "restaurant",
            "food",
            "meal",
            "eat",
            "dining",
            "kitchen",
            "chef",
            "menu",
            "taste",
            "flavor",
            "recipe",
            "cooking",
        ],
        multiplier: 12,
        cap: 88,
    },
    CategorySpec {
        name: "User Experience",
        keywords: &[
            "user",
            "experience",
            "interface",
            "design",
            "usability",
            "navigation",
            "layout",
            "ui",
            "ux",
        ],
        multiplier: 8,
        cap: 78,
    },
];

/// One matched category with its heuristic relevance percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicCategory {
    pub name: String,
    pub percentage: u32,
}

/// The primary topic plus up to three ranked categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicResult {
    pub primary: String,
    pub categories: Vec<TopicCategory>,
}

impl TopicResult {
    fn general() -> Self {
        Self {
            primary: GENERAL_TOPIC.to_string(),
            categories: Vec::new(),
        }
    }
}

/// Classify `text` into topic categories, sorted by descending percentage.
pub fn classify(text: &str) -> TopicResult {
    if text.is_empty() {
        return TopicResult::general();
    }

    let lower = text.to_lowercase();
    let total_words = lower.split_whitespace().count().max(1);

    let mut categories: Vec<TopicCategory> = CATEGORIES
        .iter()
        .filter_map(|spec| {
            let hits = count_contained(&lower, spec.keywords);
            (hits > 0).then(|| TopicCategory {
                name: spec.name.to_string(),
                percentage: percentage(hits, total_words, spec),
            })
        })
        .collect();

    // sort_by is stable, so equal percentages keep evaluation order.
    categories.sort_by(|a, b| b.percentage.cmp(&a.percentage));
    categories.truncate(MAX_CATEGORIES);

    match categories.first() {
        Some(top) => TopicResult {
            primary: top.name.clone(),
            categories,
        },
        None => TopicResult::general(),
    }
}

fn percentage(hits: usize, total_words: usize, spec: &CategorySpec) -> u32 {
    let density = hits as f64 / total_words as f64;
    let scaled = (density * 100.0 * spec.multiplier as f64) as u32;
    scaled.min(spec.cap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_general() {
        let r = classify("");
        assert_eq!(r.primary, "General");
        assert!(r.categories.is_empty());
    }

    #[test]
    fn test_no_keywords_is_general() {
        let r = classify("hello there friend");
        assert_eq!(r.primary, "General");
        assert!(r.categories.is_empty());
    }

    #[test]
    fn test_keywords_match_inside_longer_words() {
        // "weather" contains "eat", so it counts toward Food & Dining.
        let r = classify("the weather was fine yesterday");
        assert_eq!(r.primary, "Food & Dining");
    }

    #[test]
    fn test_percentage_is_density_times_multiplier() {
        // 20 words, one Business hit ("company"): 1/20 * 100 * 12 = 60
        let text = "our company will ship the next batch of goods to the shop on monday \
                    and we hope it goes well";
        assert_eq!(text.split_whitespace().count(), 20);
        let r = classify(text);
        assert_eq!(r.primary, "Business");
        assert_eq!(r.categories.len(), 1);
        assert_eq!(r.categories[0].percentage, 60);
    }

    #[test]
    fn test_percentage_is_capped_per_category() {
        let r = classify("restaurant");
        assert_eq!(
            r.categories,
            vec![TopicCategory {
                name: "Food & Dining".to_string(),
                percentage: 88,
            }]
        );
    }

    #[test]
    fn test_at_most_three_sorted_descending() {
        let r = classify(
            "the app interface design was reviewed by the company restaurant chef",
        );
        assert!(r.categories.len() <= MAX_CATEGORIES);
        assert!(r
            .categories
            .windows(2)
            .all(|w| w[0].percentage >= w[1].percentage));
        assert_eq!(r.primary, r.categories[0].name);
    }

    #[test]
    fn test_capped_categories_rank_by_cap() {
        let r = classify("app review company food user");
        let names: Vec<&str> = r.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Technology", "Product Review", "Food & Dining"]);
    }

    #[test]
    fn test_ties_keep_evaluation_order() {
        // Business and Food & Dining both land on 60; Business is evaluated first.
        let r = classify(
            "our company will ship the next batch of food to the shop on monday \
             and we hope it goes well",
        );
        let names: Vec<&str> = r.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Business", "Food & Dining"]);
        assert_eq!(r.categories[0].percentage, r.categories[1].percentage);
    }
}
