// Multimodal analyzer: heuristic text and image analysis behind one endpoint.
//
// This is the library root. Each module corresponds to a stage of the
// analysis pipeline; `web` wraps the pipeline in an HTTP service.

pub mod analysis;
pub mod config;
pub mod output;
pub mod text;
pub mod vision;

#[cfg(feature = "web")]
pub mod web;
