use std::time::Duration;
use thiserror::Error;

/// Failure of the external render mechanism. The engine never retries or
/// suppresses these; they surface to the caller unchanged.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("renderer unavailable: {0}")]
    Unavailable(String),
    #[error("PDF conversion failed: {0}")]
    Conversion(String),
    #[error("render timed out after {0:?}")]
    Timeout(Duration),
}

impl From<&str> for RenderError {
    fn from(s: &str) -> Self {
        RenderError::Conversion(s.to_string())
    }
}
