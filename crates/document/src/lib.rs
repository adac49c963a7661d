//! The in-memory representation of a laid-out transcript, after assembly but
//! before rendering.
//!
//! A [`LayoutDocument`] is an owned tree of styled blocks in fixed order:
//! header, student info, zero or more course sections, footer. The assembler
//! builds a fresh tree on every call and keeps no reference to it, so two
//! runs over identical input compare equal with `==`.

use parchment_style::{BlockStyle, DensityParams, FontWeight, Margins, TableStyle, TextAlign};
use parchment_types::PageGeometry;

/// A fully laid-out transcript ready to hand to a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutDocument {
    /// Page box derived from the template orientation.
    pub geometry: PageGeometry,
    /// Page margins in millimeters.
    pub margins: Margins,
    /// Sizing chosen by the density selector for this course count.
    pub density: DensityParams,
    /// Heading printed above the course sections, e.g. "Course History by
    /// Year". Absent when the document has no sections.
    pub course_history_title: Option<String>,
    /// Blocks in render order.
    pub blocks: Vec<DocBlock>,
}

impl LayoutDocument {
    /// Iterates over the section blocks in partition order.
    pub fn sections(&self) -> impl Iterator<Item = &SectionBlock> {
        self.blocks.iter().filter_map(|block| match block {
            DocBlock::Section(section) => Some(section),
            _ => None,
        })
    }

    pub fn section_count(&self) -> usize {
        self.sections().count()
    }

    /// Total number of course rows across all sections.
    pub fn row_count(&self) -> usize {
        self.sections().map(|s| s.table.rows.len()).sum()
    }
}

/// A block-level element of the transcript.
#[derive(Debug, Clone, PartialEq)]
pub enum DocBlock {
    Header(HeaderBlock),
    StudentInfo(InfoBlock),
    Section(SectionBlock),
    Footer(FooterBlock),
}

impl DocBlock {
    /// Returns a string identifier for the block type.
    pub fn kind(&self) -> &'static str {
        match self {
            DocBlock::Header(_) => "header",
            DocBlock::StudentInfo(_) => "student-info",
            DocBlock::Section(_) => "section",
            DocBlock::Footer(_) => "footer",
        }
    }
}

/// Title line plus institution line, centered at the top of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderBlock {
    pub title: String,
    pub title_style: BlockStyle,
    pub institution: String,
    pub institution_style: BlockStyle,
}

/// How the student-info fields are arranged on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoLayout {
    /// Two-column grid (portrait pages).
    TwoColumnGrid,
    /// One horizontal row (landscape pages).
    SingleRow,
}

/// The student identity block: labeled name/id/date/GPA fields.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoBlock {
    pub layout: InfoLayout,
    pub fields: Vec<InfoField>,
}

impl InfoBlock {
    /// Looks up a field value by its label.
    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfoField {
    pub label: String,
    pub value: String,
}

impl InfoField {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// One partition of the course history: an optional heading (the term or
/// subject key) followed by a table of course rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBlock {
    pub heading: Option<String>,
    pub table: TableNode,
}

/// A course table with a fixed column set and uniform typography.
#[derive(Debug, Clone, PartialEq)]
pub struct TableNode {
    pub columns: Vec<ColumnDef>,
    pub style: TableStyle,
    pub rows: Vec<TableRow>,
}

/// A table column: header label, alignment, relative width, and the weight
/// applied to body cells in this column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub label: String,
    pub align: TextAlign,
    pub width_pct: f32,
    pub cell_weight: FontWeight,
}

impl ColumnDef {
    pub fn new(label: impl Into<String>, align: TextAlign, width_pct: f32) -> Self {
        Self {
            label: label.into(),
            align,
            width_pct,
            cell_weight: FontWeight::Regular,
        }
    }

    pub fn with_cell_weight(mut self, weight: FontWeight) -> Self {
        self.cell_weight = weight;
        self
    }
}

/// One row of display strings, one per column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableRow {
    pub cells: Vec<String>,
}

impl TableRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }
}

/// The fixed disclaimer lines at the bottom of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct FooterBlock {
    pub lines: Vec<String>,
    pub style: BlockStyle,
}
