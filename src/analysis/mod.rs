// Analysis pipeline — runs every scorer over one request and assembles the
// response payload.
//
// Nothing here is shared across requests. The only awaits are image
// decoding and OCR; all text scoring is synchronous and total.

pub mod fusion;

use image::DynamicImage;
use serde::Serialize;
use tracing::{debug, warn};

use crate::text::sentiment::{self, SentimentResult};
use crate::text::topics::{self, TopicResult};
use crate::text::{summary, toxicity};
use crate::vision::heuristics::{self, ImageLabel, NO_IMAGE_SCENE};
use crate::vision::ocr::OcrEngine;

/// The JSON body returned by `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResponse {
    /// Always exactly one entry.
    pub text_sentiment: Vec<SentimentResult>,
    pub text_summary: String,
    pub topic_classification: TopicResult,
    pub image_classification: Vec<ImageLabel>,
    pub scene_classification: String,
    pub ocr_text: String,
    pub image_toxicity_score: f64,
    pub text_toxicity_score: f64,
    pub automated_response: String,
}

impl AnalysisResponse {
    pub fn sentiment(&self) -> Option<&SentimentResult> {
        self.text_sentiment.first()
    }
}

/// Everything derived from the uploaded image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFindings {
    pub labels: Vec<ImageLabel>,
    pub scene: String,
    pub ocr_text: String,
}

impl Default for ImageFindings {
    /// What a request without an image reports.
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            scene: NO_IMAGE_SCENE.to_string(),
            ocr_text: String::new(),
        }
    }
}

/// Placeholder written to `ocr_text` when the engine fails.
pub fn ocr_failure_text(err: &anyhow::Error) -> String {
    format!("(OCR failed: {err:#})")
}

/// Run the image heuristics and OCR. OCR errors are absorbed into
/// `ocr_text` rather than returned.
pub async fn analyze_image(image: &DynamicImage, ocr: &dyn OcrEngine) -> ImageFindings {
    // ThreadRng is !Send; keep it out of scope across the await below.
    let (labels, scene) = {
        let mut rng = rand::rng();
        (
            heuristics::annotate(&mut rng),
            heuristics::classify_scene(&mut rng),
        )
    };

    let ocr_text = match ocr.extract_text(image).await {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "OCR failed, continuing without extracted text");
            ocr_failure_text(&e)
        }
    };

    ImageFindings {
        labels,
        scene,
        ocr_text,
    }
}

/// Score `text` (and the OCR output, if any) and fuse everything into the
/// response payload.
pub fn assemble(text: &str, image: ImageFindings) -> AnalysisResponse {
    let sentiment = sentiment::score(text);
    let summary = summary::summarize(text);
    let topics = topics::classify(text);

    let text_toxicity = toxicity::score(text);
    let image_toxicity = toxicity::score(&image.ocr_text);

    let kind = fusion::decide(
        sentiment.label,
        text_toxicity,
        image_toxicity,
        text,
        &image.ocr_text,
    );
    debug!(
        sentiment = %sentiment.label,
        text_toxicity,
        image_toxicity,
        response = ?kind,
        "analysis fused"
    );

    AnalysisResponse {
        text_sentiment: vec![sentiment],
        text_summary: summary,
        topic_classification: topics,
        image_classification: image.labels,
        scene_classification: image.scene,
        ocr_text: image.ocr_text,
        image_toxicity_score: image_toxicity,
        text_toxicity_score: text_toxicity,
        automated_response: kind.message().to_string(),
    }
}

/// Full pipeline for one request.
pub async fn analyze(
    text: &str,
    image: Option<&DynamicImage>,
    ocr: &dyn OcrEngine,
) -> AnalysisResponse {
    let findings = match image {
        Some(img) => analyze_image(img, ocr).await,
        None => ImageFindings::default(),
    };
    assemble(text, findings)
}
