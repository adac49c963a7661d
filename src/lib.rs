//! # parchment
//!
//! Academic transcript generation: a pure layout engine that turns a
//! student's course history and a chosen template into a styled document
//! tree, plus an async pipeline that hands the tree to a pluggable PDF
//! renderer.
//!
//! ## Layers
//!
//! - **types / style / document**: value types, presentation primitives,
//!   and the [`LayoutDocument`] tree
//! - **layout**: grouping partitioner, density selector, document
//!   assembler, template registry — all pure and deterministic
//! - **render**: the [`Renderer`] contract; no concrete PDF encoder lives
//!   in this workspace
//! - **pipeline** (this crate): validation, template-key fallback, and the
//!   timeout-bounded renderer call — the only async boundary
//!
//! ## Design Principle
//!
//! Library crates carry no runtime, no clock reads, and no shared state;
//! the issue date is injected so identical inputs always produce
//! structurally identical documents.

// Re-export foundation crates
pub use parchment_document as document;
pub use parchment_layout as layout;
pub use parchment_render_core as render;
pub use parchment_style as style;
pub use parchment_types as types;

pub mod error;
pub mod pipeline;

// Re-export commonly used types
pub use document::{DocBlock, LayoutDocument, SectionBlock};
pub use error::PipelineError;
pub use layout::{DEFAULT_TEMPLATE_KEY, TEMPLATES, TemplateInfo, resolve_template};
pub use pipeline::{
    GenerateOptions, GenerateRequest, PdfOutput, generate, preview_document, suggested_filename,
};
pub use render::{RenderError, Renderer};
pub use types::{CourseRecord, Grouping, Orientation, PageGeometry, StudentProfile, TemplateSpec};
