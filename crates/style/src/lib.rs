pub mod density;
pub mod dimension;
pub mod font;
pub mod text;

pub use density::{DensityParams, DensityTier, TableStyle};
pub use dimension::Margins;
pub use font::FontWeight;
pub use text::TextAlign;

use serde::{Deserialize, Serialize};

/// Concrete presentation values for a block of text.
///
/// Unlike a cascading stylesheet, every field is resolved by the time a
/// document tree is built; renderers apply these values directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockStyle {
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub text_align: TextAlign,
}

impl BlockStyle {
    pub fn new(font_size: f32, font_weight: FontWeight, text_align: TextAlign) -> Self {
        Self {
            font_size,
            font_weight,
            text_align,
        }
    }
}

impl Default for BlockStyle {
    fn default() -> Self {
        Self {
            font_size: 11.0,
            font_weight: FontWeight::Regular,
            text_align: TextAlign::Left,
        }
    }
}
