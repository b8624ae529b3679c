// Request-level errors for POST /analyze.
//
// OCR failures are deliberately absent: they degrade into the response's
// `ocr_text` field instead of failing the request.

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::web::api_error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("Missing required form field `text`")]
    MissingText,

    #[error("Malformed multipart body: {}", .0.body_text())]
    Multipart(#[from] MultipartError),

    #[error("Uploaded file could not be decoded as an image: {0}")]
    InvalidImage(String),
}

impl AnalyzeError {
    pub fn status(&self) -> StatusCode {
        match self {
            AnalyzeError::MissingText => StatusCode::UNPROCESSABLE_ENTITY,
            AnalyzeError::Multipart(e) => e.status(),
            AnalyzeError::InvalidImage(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        api_error(self.status(), &self.to_string())
    }
}
