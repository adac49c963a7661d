//! Document Assembler: combines the student profile, the partitioned
//! sections, and the density parameters into a [`LayoutDocument`].
//!
//! Assembly never fails for well-typed input. With zero courses it still
//! emits the header, student-info, and footer blocks, just no sections.
//! All date-derived text comes from `profile.issue_date`, so output is
//! reproducible under a fixed clock.

use chrono::Datelike;
use parchment_document::{
    ColumnDef, DocBlock, FooterBlock, HeaderBlock, InfoBlock, InfoField, InfoLayout,
    LayoutDocument, SectionBlock, TableNode, TableRow,
};
use parchment_style::{BlockStyle, DensityParams, FontWeight, Margins, TextAlign};
use parchment_types::{CourseRecord, Grouping, Orientation, StudentProfile, TemplateSpec};

use crate::density::select_params;
use crate::partition::{Section, partition};

const DOCUMENT_TITLE: &str = "Official Academic Transcript";
const INSTITUTION: &str = "State University";

const FOOTER_CERTIFIED: &str =
    "This document is an official academic record certified by State University.";

/// Uniform page margin applied by renderers, in millimeters.
const PAGE_MARGIN_MM: f32 = 10.0;

/// Builds the complete document tree for one transcript.
pub fn assemble(
    profile: &StudentProfile,
    courses: &[CourseRecord],
    template: TemplateSpec,
) -> LayoutDocument {
    let sections = partition(courses, template.grouping);
    let density = select_params(courses.len(), template.orientation);

    log::debug!(
        "assembling transcript: {} courses, {} sections, {:?}/{:?}",
        courses.len(),
        sections.len(),
        template.orientation,
        template.grouping,
    );

    let mut blocks = Vec::with_capacity(sections.len() + 3);
    blocks.push(DocBlock::Header(header_block()));
    blocks.push(DocBlock::StudentInfo(info_block(
        profile,
        template.orientation,
    )));

    let columns = columns_for(template.grouping);
    for section in &sections {
        blocks.push(DocBlock::Section(section_block(
            section, &columns, &density,
        )));
    }

    blocks.push(DocBlock::Footer(footer_block(profile.issue_date.year())));

    LayoutDocument {
        geometry: template.page_geometry(),
        margins: Margins::all(PAGE_MARGIN_MM),
        density,
        course_history_title: history_title(template.grouping, !sections.is_empty()),
        blocks,
    }
}

fn header_block() -> HeaderBlock {
    HeaderBlock {
        title: DOCUMENT_TITLE.to_string(),
        title_style: BlockStyle::new(20.0, FontWeight::Bold, TextAlign::Center),
        institution: INSTITUTION.to_string(),
        institution_style: BlockStyle::new(12.0, FontWeight::Medium, TextAlign::Center),
    }
}

fn info_block(profile: &StudentProfile, orientation: Orientation) -> InfoBlock {
    let layout = match orientation {
        Orientation::Portrait => InfoLayout::TwoColumnGrid,
        Orientation::Landscape => InfoLayout::SingleRow,
    };
    let issued = profile.issue_date.format("%b %-d, %Y").to_string();
    InfoBlock {
        layout,
        fields: vec![
            InfoField::new("Name", profile.display_name()),
            InfoField::new("ID", profile.id.clone()),
            InfoField::new("Issued", issued),
            InfoField::new("GPA", format!("{:.2}", profile.gpa)),
        ],
    }
}

/// Heading printed above the sections, absent on an empty transcript.
fn history_title(grouping: Grouping, has_sections: bool) -> Option<String> {
    if !has_sections {
        return None;
    }
    let title = match grouping {
        Grouping::None => "Course History",
        Grouping::ByTerm => "Course History by Year",
        Grouping::BySubject => "Course History by Subject",
    };
    Some(title.to_string())
}

/// The fixed column set per grouping. The term column is dropped when
/// grouping by term, where it would repeat the section heading.
fn columns_for(grouping: Grouping) -> Vec<ColumnDef> {
    let mut columns = Vec::with_capacity(5);
    columns.push(ColumnDef::new("Code", TextAlign::Left, 12.0).with_cell_weight(FontWeight::Medium));
    columns.push(ColumnDef::new("Course Title", TextAlign::Left, 48.0));
    if grouping != Grouping::ByTerm {
        columns.push(ColumnDef::new("Term", TextAlign::Center, 16.0));
    }
    columns.push(
        ColumnDef::new("Grade", TextAlign::Center, 12.0).with_cell_weight(FontWeight::SemiBold),
    );
    columns.push(ColumnDef::new("Credits", TextAlign::Center, 12.0));

    // Redistribute the term column's width when it is absent.
    if grouping == Grouping::ByTerm {
        for column in &mut columns {
            if column.label == "Course Title" {
                column.width_pct = 58.0;
            } else {
                column.width_pct = 14.0;
            }
        }
    }
    columns
}

fn section_block(section: &Section, columns: &[ColumnDef], density: &DensityParams) -> SectionBlock {
    let include_term = columns.iter().any(|c| c.label == "Term");
    let rows = section
        .records
        .iter()
        .map(|record| course_row(record, include_term))
        .collect();

    SectionBlock {
        heading: section.key.clone(),
        table: TableNode {
            columns: columns.to_vec(),
            style: density.table_style(),
            rows,
        },
    }
}

fn course_row(record: &CourseRecord, include_term: bool) -> TableRow {
    let mut cells = Vec::with_capacity(5);
    cells.push(record.code.clone());
    cells.push(record.title.clone());
    if include_term {
        cells.push(record.term.clone());
    }
    cells.push(record.grade.clone());
    cells.push(format!("{}", record.credits));
    TableRow::new(cells)
}

fn footer_block(year: i32) -> FooterBlock {
    FooterBlock {
        lines: vec![
            FOOTER_CERTIFIED.to_string(),
            format!(
                "Unauthorized reproduction or distribution is prohibited. {year} © {INSTITUTION}"
            ),
        ],
        style: BlockStyle::new(9.0, FontWeight::Regular, TextAlign::Center),
    }
}
