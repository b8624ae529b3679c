// Image handling — decoding uploads, placeholder heuristics, and OCR.

pub mod heuristics;
pub mod ocr;

use anyhow::{Context, Result};
use image::DynamicImage;

/// Decode raw upload bytes into an image. The format is sniffed from the
/// content, so PNG, JPEG, GIF, WebP, BMP, etc. are all accepted.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes).context("Failed to decode image")
}

/// Decode on the blocking pool so large images don't stall the runtime.
pub async fn decode_image_blocking(bytes: Vec<u8>) -> Result<DynamicImage> {
    tokio::task::spawn_blocking(move || decode_image(&bytes))
        .await
        .context("Image decode task panicked")?
}
