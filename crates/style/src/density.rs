//! Density vocabulary: the discrete presentation-size tiers used to keep a
//! transcript on one page, and the concrete parameters a tier resolves to.
//!
//! The step function that picks a tier from a course count lives in the
//! layout crate; this module only defines the value types so renderers can
//! consume them without depending on the engine.

use serde::{Deserialize, Serialize};

/// A discrete presentation-size setting. More courses never yields a larger
/// tier's font size (tiers are ordered Low > Mid > High in point size).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum DensityTier {
    #[default]
    Low,
    Mid,
    High,
}

/// Resolved sizing for one document: table typography plus inter-section
/// spacing. All values are points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DensityParams {
    pub table_font_size: f32,
    pub row_padding: f32,
    pub section_gap: f32,
}

impl DensityParams {
    /// The table-facing slice of these parameters.
    pub fn table_style(&self) -> TableStyle {
        TableStyle {
            font_size: self.table_font_size,
            row_padding: self.row_padding,
        }
    }
}

/// Typography applied uniformly to a course table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableStyle {
    pub font_size: f32,
    pub row_padding: f32,
}
