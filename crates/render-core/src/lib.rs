//! The renderer seam: the one contract the engine has with whatever turns a
//! laid-out document into PDF bytes.
//!
//! Headless browsers, canvas rasterizers, and native PDF builders are all
//! interchangeable behind [`Renderer`]; the engine supplies the document and
//! the page geometry and is otherwise unaware of the mechanism.

pub mod error;
pub mod traits;

pub use error::RenderError;
pub use traits::Renderer;
