// POST /analyze — run the full text + image analysis for one submission.
//
// Multipart fields:
//   text  (required) — may be empty
//   file  (optional) — any common raster format; an empty part counts as absent
//
// An undecodable image is a 400. OCR failure is not an error: the response
// carries "(OCR failed: ...)" in `ocr_text` and scoring proceeds.

use axum::extract::{Multipart, State};
use axum::Json;
use tracing::{debug, info};

use crate::analysis::{self, AnalysisResponse};
use crate::vision::decode_image_blocking;
use crate::web::error::AnalyzeError;
use crate::web::AppState;

/// Fields pulled out of the multipart body.
#[derive(Debug, Default)]
struct AnalyzeForm {
    text: Option<String>,
    file: Option<Vec<u8>>,
}

/// POST /analyze — analyze text and an optional image.
pub async fn analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AnalyzeError> {
    let form = read_form(multipart).await?;
    let text = form.text.ok_or(AnalyzeError::MissingText)?;

    let image = match form.file {
        Some(bytes) if !bytes.is_empty() => {
            let size = bytes.len();
            let decoded = decode_image_blocking(bytes).await.map_err(|e| {
                debug!(error = %e, size, "Rejecting undecodable upload");
                AnalyzeError::InvalidImage(format!("{e:#}"))
            })?;
            Some(decoded)
        }
        _ => None,
    };

    let response = analysis::analyze(&text, image.as_ref(), state.ocr.as_ref()).await;

    info!(
        text_chars = text.chars().count(),
        has_image = image.is_some(),
        sentiment = ?response.sentiment().map(|s| s.label),
        text_toxicity = response.text_toxicity_score,
        image_toxicity = response.image_toxicity_score,
        "Analyzed submission"
    );

    Ok(Json(response))
}

async fn read_form(mut multipart: Multipart) -> Result<AnalyzeForm, AnalyzeError> {
    let mut form = AnalyzeForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("text") => form.text = Some(field.text().await?),
            Some("file") => form.file = Some(field.bytes().await?.to_vec()),
            other => debug!(field = ?other, "Ignoring unknown multipart field"),
        }
    }

    Ok(form)
}
