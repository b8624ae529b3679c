use std::env;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::vision::ocr::{DisabledOcr, OcrEngine, TesseractOcr};

/// Default listen port (the variable name `PORT` matches common PaaS hosts).
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_BIND: &str = "0.0.0.0";
/// 10 MiB — comfortably above typical phone photos.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Which OCR backend to use.
#[derive(Debug, Clone, PartialEq)]
pub enum OcrBackend {
    /// Shell out to the tesseract binary (default)
    Tesseract,
    /// Never run OCR; responses carry the failure placeholder
    Off,
}

/// Which browser origins may call the API.
#[derive(Debug, Clone, PartialEq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

impl CorsOrigins {
    /// Parse a comma-separated list. `*` anywhere in the list means any origin.
    pub fn parse(raw: &str) -> Self {
        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            CorsOrigins::Any
        } else {
            CorsOrigins::List(origins)
        }
    }
}

/// Central configuration loaded from environment variables.
///
/// A .env file is loaded automatically at startup via dotenvy. Every value
/// has a default, so the server starts with no configuration at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind: String,
    pub port: u16,
    pub cors_origins: CorsOrigins,
    /// Request body limit for multipart uploads
    pub max_upload_bytes: usize,
    pub ocr_backend: OcrBackend,
    /// Path or name of the tesseract executable
    pub tesseract_cmd: String,
    /// Tesseract language code(s), e.g. "eng" or "eng+deu"
    pub ocr_language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
            cors_origins: CorsOrigins::Any,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            ocr_backend: OcrBackend::Tesseract,
            tesseract_cmd: "tesseract".to_string(),
            ocr_language: "eng".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup. `load` passes
    /// the process environment; tests pass a map.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => defaults.port,
        };

        let max_upload_bytes = match var("ANALYZER_MAX_UPLOAD_BYTES") {
            Some(raw) => raw.trim().parse::<usize>().with_context(|| {
                format!("ANALYZER_MAX_UPLOAD_BYTES must be a byte count, got {raw:?}")
            })?,
            None => defaults.max_upload_bytes,
        };

        let ocr_backend = match var("ANALYZER_OCR").as_deref() {
            Some("off") | Some("none") => OcrBackend::Off,
            Some("tesseract") | None => OcrBackend::Tesseract,
            Some(other) => {
                anyhow::bail!("ANALYZER_OCR must be \"tesseract\" or \"off\", got {other:?}")
            }
        };

        Ok(Self {
            bind: var("ANALYZER_BIND").unwrap_or(defaults.bind),
            port,
            cors_origins: var("ANALYZER_CORS_ORIGINS")
                .map(|raw| CorsOrigins::parse(&raw))
                .unwrap_or(defaults.cors_origins),
            max_upload_bytes,
            ocr_backend,
            tesseract_cmd: var("ANALYZER_TESSERACT_CMD").unwrap_or(defaults.tesseract_cmd),
            ocr_language: var("ANALYZER_OCR_LANG").unwrap_or(defaults.ocr_language),
        })
    }

    /// Build the OCR engine this configuration asks for.
    pub fn ocr_engine(&self) -> Arc<dyn OcrEngine> {
        match self.ocr_backend {
            OcrBackend::Tesseract => Arc::new(TesseractOcr::new(
                self.tesseract_cmd.clone(),
                self.ocr_language.clone(),
            )),
            OcrBackend::Off => Arc::new(DisabledOcr),
        }
    }
}
