use crate::error::RenderError;
use parchment_document::LayoutDocument;
use parchment_types::PageGeometry;

/// A backend that converts a laid-out document into a PDF byte stream.
///
/// Implementations may block for a long time (subprocess launch, network
/// round-trip); callers are responsible for imposing a timeout and must not
/// hold resources other than the immutable document across the call.
/// Implementations must be safe to share across concurrent requests.
pub trait Renderer: Send + Sync {
    fn render(
        &self,
        document: &LayoutDocument,
        geometry: PageGeometry,
    ) -> Result<Vec<u8>, RenderError>;
}
