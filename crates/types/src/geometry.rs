use serde::{Deserialize, Serialize};

/// The page box handed to the renderer, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width_mm: f32,
    pub height_mm: f32,
}

impl PageGeometry {
    pub const A4_PORTRAIT: Self = Self {
        width_mm: 210.0,
        height_mm: 297.0,
    };

    pub const A4_LANDSCAPE: Self = Self {
        width_mm: 297.0,
        height_mm: 210.0,
    };

    pub fn new(width_mm: f32, height_mm: f32) -> Self {
        Self {
            width_mm,
            height_mm,
        }
    }
}

/// Page orientation. Drives both the page geometry and the density
/// thresholds of the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Returns the A4 page box for this orientation.
    pub fn page_geometry(self) -> PageGeometry {
        match self {
            Orientation::Portrait => PageGeometry::A4_PORTRAIT,
            Orientation::Landscape => PageGeometry::A4_LANDSCAPE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_geometry_per_orientation() {
        let portrait = Orientation::Portrait.page_geometry();
        assert_eq!(portrait.width_mm, 210.0);
        assert_eq!(portrait.height_mm, 297.0);

        let landscape = Orientation::Landscape.page_geometry();
        assert_eq!(landscape.width_mm, 297.0);
        assert_eq!(landscape.height_mm, 210.0);
    }
}
