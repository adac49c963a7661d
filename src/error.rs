//! The unified error type for high-level pipeline operations.

use parchment_render_core::RenderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    /// The request was rejected before layout began (e.g. blank student
    /// name on submission). Preview calls never produce this.
    #[error("validation error: {0}")]
    Validation(String),
    /// The external renderer could not produce PDF bytes. Propagated
    /// unchanged from the renderer, never retried here.
    #[error("rendering error: {0}")]
    Render(#[from] RenderError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}
