//! The transcript layout engine.
//!
//! Pure functions mapping (student profile, ordered course list, template
//! spec) to a fully laid-out [`parchment_document::LayoutDocument`]:
//!
//! - **`partition`**: splits the course list into sections by term or subject
//! - **`density`**: picks presentation sizing from the course count
//! - **`assemble`**: builds the document tree in fixed block order
//! - **`registry`**: the closed table of template keys
//!
//! Every function here is total over well-typed input and deterministic:
//! no clocks, no I/O, no shared state between invocations. The caller
//! injects the issue date through the profile.

pub mod assemble;
pub mod density;
pub mod partition;
pub mod registry;

pub use assemble::assemble;
pub use density::{params_for, select_params, tier_for_count};
pub use partition::{Section, partition, subject_key};
pub use registry::{DEFAULT_TEMPLATE_KEY, TEMPLATES, TemplateInfo, lookup, resolve_template};
