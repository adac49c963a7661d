use crate::geometry::{Orientation, PageGeometry};
use serde::{Deserialize, Serialize};

/// How course records are partitioned into sections before tabulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Grouping {
    /// Single implicit section, no heading, original order.
    #[default]
    None,
    /// Partitioned by the verbatim `term` field.
    ByTerm,
    /// Partitioned by the subject prefix of the course code.
    BySubject,
}

/// A template is a named combination of orientation and grouping; the
/// closed set of combinations lives in the layout crate's registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSpec {
    pub orientation: Orientation,
    pub grouping: Grouping,
}

impl TemplateSpec {
    pub const fn new(orientation: Orientation, grouping: Grouping) -> Self {
        Self {
            orientation,
            grouping,
        }
    }

    pub fn page_geometry(self) -> PageGeometry {
        self.orientation.page_geometry()
    }
}
