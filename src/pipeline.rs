//! The generation pipeline: request validation, template resolution,
//! document assembly, and the timeout-bounded call to the renderer.
//!
//! Each call owns its inputs and produces a fresh document tree, so
//! concurrent requests are independent: they share only the `Renderer`
//! behind an `Arc`, and one request's timeout or failure never affects
//! another.

use crate::error::PipelineError;
use chrono::{NaiveDate, Utc};
use parchment_document::LayoutDocument;
use parchment_layout::{assemble, registry};
use parchment_render_core::{RenderError, Renderer};
use parchment_types::{CourseRecord, StudentProfile};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// The request shape posted by a transcript front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub student_name: String,
    #[serde(default)]
    pub courses: Vec<CourseRecord>,
    /// One of the keys in [`parchment_layout::TEMPLATES`]. Unknown keys
    /// fall back to the default template.
    #[serde(default = "default_template_key")]
    pub template_key: String,
}

fn default_template_key() -> String {
    registry::DEFAULT_TEMPLATE_KEY.to_string()
}

impl GenerateRequest {
    pub fn new(
        student_name: impl Into<String>,
        courses: Vec<CourseRecord>,
        template_key: impl Into<String>,
    ) -> Self {
        Self {
            student_name: student_name.into(),
            courses,
            template_key: template_key.into(),
        }
    }
}

/// Knobs for a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Upper bound on one renderer call. The renderer is the only blocking
    /// boundary in the pipeline; everything before it is synchronous and
    /// pure.
    pub render_timeout: Duration,
    /// Overrides the transcript issue date. `None` uses today (UTC).
    /// Fixing this makes output byte-reproducible under test.
    pub issued_on: Option<NaiveDate>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            render_timeout: Duration::from_secs(30),
            issued_on: None,
        }
    }
}

/// The finished artifact: PDF bytes plus the download filename.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfOutput {
    pub bytes: Vec<u8>,
    pub filename: String,
}

/// The download filename for a student's transcript.
pub fn suggested_filename(student_name: &str) -> String {
    format!("{student_name}-transcript.pdf")
}

/// Lays out a document without validating or rendering. Blank names are
/// allowed here; the assembler substitutes a placeholder.
pub fn preview_document(request: &GenerateRequest, issued_on: NaiveDate) -> LayoutDocument {
    let spec = registry::resolve_template(&request.template_key);
    let profile = StudentProfile::new(request.student_name.clone(), issued_on);
    assemble(&profile, &request.courses, spec)
}

/// Runs the full pipeline: validate, assemble, render, name the file.
///
/// The renderer call runs on the blocking pool under
/// `options.render_timeout`; on expiry the request fails with
/// [`RenderError::Timeout`] while the offending render is left to finish in
/// the background.
pub async fn generate(
    request: GenerateRequest,
    renderer: Arc<dyn Renderer>,
    options: &GenerateOptions,
) -> Result<PdfOutput, PipelineError> {
    let name = request.student_name.trim().to_string();
    if name.is_empty() {
        return Err(PipelineError::Validation(
            "student name is required".to_string(),
        ));
    }

    let spec = registry::resolve_template(&request.template_key);
    let issued_on = options.issued_on.unwrap_or_else(|| Utc::now().date_naive());
    let profile = StudentProfile::new(name.clone(), issued_on);
    let document = assemble(&profile, &request.courses, spec);
    let geometry = document.geometry;

    log::info!(
        "rendering transcript for {name:?}: template {:?}, {} rows",
        request.template_key,
        document.row_count(),
    );

    let timeout = options.render_timeout;
    let task = tokio::task::spawn_blocking(move || renderer.render(&document, geometry));
    let bytes = match tokio::time::timeout(timeout, task).await {
        Ok(Ok(rendered)) => rendered?,
        Ok(Err(join_error)) => {
            return Err(RenderError::Unavailable(join_error.to_string()).into());
        }
        Err(_) => return Err(RenderError::Timeout(timeout).into()),
    };

    Ok(PdfOutput {
        bytes,
        filename: suggested_filename(&name),
    })
}
