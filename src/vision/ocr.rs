// OCR engine — trait-based so the tesseract binary can be swapped out.
//
// TesseractOcr pipes a PNG re-encoding of the decoded image through the
// `tesseract` executable. Callers treat any error as a soft failure: the
// analysis pipeline turns it into a placeholder string instead of failing
// the request.

use std::io::Cursor;
use std::process::Stdio;

use anyhow::{Context, Result};
use async_trait::async_trait;
use image::{DynamicImage, ImageFormat};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

/// Extracts text from an already-decoded image.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn extract_text(&self, image: &DynamicImage) -> Result<String>;
}

/// OCR via the tesseract command-line tool.
pub struct TesseractOcr {
    command: String,
    language: String,
}

impl TesseractOcr {
    pub fn new(command: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            language: language.into(),
        }
    }
}

#[async_trait]
impl OcrEngine for TesseractOcr {
    async fn extract_text(&self, image: &DynamicImage) -> Result<String> {
        let image = image.clone();
        let png = tokio::task::spawn_blocking(move || encode_png(&image))
            .await
            .context("PNG encode task panicked")??;

        let mut child = Command::new(&self.command)
            .args(["stdin", "stdout", "-l", self.language.as_str()])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("Failed to run `{}`", self.command))?;

        let mut stdin = child
            .stdin
            .take()
            .context("tesseract stdin was not captured")?;

        // Feed stdin concurrently so a large image can't deadlock against a
        // full stdout pipe.
        let writer = tokio::spawn(async move {
            stdin.write_all(&png).await?;
            stdin.shutdown().await
        });

        let output = child
            .wait_with_output()
            .await
            .context("Failed to wait for tesseract")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("tesseract exited with {}: {}", output.status, stderr.trim());
        }
        writer
            .await
            .context("tesseract stdin task panicked")?
            .context("Failed to write image to tesseract")?;

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!(chars = text.chars().count(), "tesseract extracted text");
        Ok(text)
    }
}

/// Engine used when OCR is switched off in configuration. Always fails, so
/// responses carry the usual "(OCR failed: ...)" placeholder.
pub struct DisabledOcr;

#[async_trait]
impl OcrEngine for DisabledOcr {
    async fn extract_text(&self, _image: &DynamicImage) -> Result<String> {
        anyhow::bail!("OCR is disabled")
    }
}

fn encode_png(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, ImageFormat::Png)
        .context("Failed to encode image as PNG")?;
    Ok(buf.into_inner())
}
