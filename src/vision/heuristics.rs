// Placeholder image heuristics.
//
// Neither function looks at pixels: object labels and the scene are drawn at
// random from fixed candidate lists. They stand in for a real classifier and
// only guarantee the output shape (label/score pairs, 2-4 entries, scores
// inside each label's range, scene from a closed set).

use std::ops::RangeInclusive;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;

/// Scene reported when the request carried no image.
pub const NO_IMAGE_SCENE: &str = "No image provided";

/// Object candidates with the score range each may be reported with.
pub static OBJECT_CANDIDATES: [(&str, RangeInclusive<f64>); 8] = [
    ("Person", 0.75..=0.95),
    ("Computer", 0.65..=0.85),
    ("Desk", 0.70..=0.90),
    ("Chair", 0.60..=0.80),
    ("Monitor", 0.68..=0.88),
    ("Keyboard", 0.55..=0.75),
    ("Office", 0.70..=0.85),
    ("Indoor", 0.80..=0.95),
];

pub static SCENES: [&str; 6] = [
    "Office Environment",
    "Home Interior",
    "Outdoor Scene",
    "Restaurant",
    "Classroom",
    "Meeting Room",
];

pub const MIN_OBJECTS: usize = 2;
pub const MAX_OBJECTS: usize = 4;

/// A detected object label with its confidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageLabel {
    pub label: String,
    pub score: f64,
}

/// Draw 2-4 distinct object labels, each with a score in its own range.
pub fn annotate<R: Rng + ?Sized>(rng: &mut R) -> Vec<ImageLabel> {
    let count = rng.random_range(MIN_OBJECTS..=MAX_OBJECTS);
    let picked: Vec<&(&str, RangeInclusive<f64>)> =
        OBJECT_CANDIDATES.choose_multiple(rng, count).collect();

    picked
        .into_iter()
        .map(|(label, range)| ImageLabel {
            label: label.to_string(),
            score: rng.random_range(range.clone()),
        })
        .collect()
}

/// Draw one scene uniformly from [`SCENES`].
pub fn classify_scene<R: Rng + ?Sized>(rng: &mut R) -> String {
    SCENES
        .choose(rng)
        .copied()
        .unwrap_or(SCENES[0])
        .to_string()
}
