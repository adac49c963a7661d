#![allow(dead_code)]

use chrono::NaiveDate;
use parchment::render::{RenderError, Renderer};
use parchment::types::{CourseRecord, PageGeometry};
use parchment::LayoutDocument;
use std::thread;
use std::time::Duration;

/// Four-course sample history spanning two terms and four subjects.
pub fn sample_courses() -> Vec<CourseRecord> {
    vec![
        CourseRecord::new("MATH101", "Calculus I", "Fall 2022", "A", 4.0),
        CourseRecord::new("ENG101", "English Composition", "Fall 2022", "A-", 3.0),
        CourseRecord::new("PHYS101", "Physics I", "Spring 2023", "B+", 4.0),
        CourseRecord::new("HIST101", "World History", "Spring 2023", "A", 3.0),
    ]
}

pub fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 8, 5).unwrap()
}

/// Produces a fake PDF payload that encodes what it was asked to render,
/// so tests can assert the renderer saw the right document.
pub struct MockRenderer;

impl Renderer for MockRenderer {
    fn render(
        &self,
        document: &LayoutDocument,
        geometry: PageGeometry,
    ) -> Result<Vec<u8>, RenderError> {
        let summary = format!(
            "%PDF-mock {}x{} sections={} rows={}",
            geometry.width_mm,
            geometry.height_mm,
            document.section_count(),
            document.row_count(),
        );
        Ok(summary.into_bytes())
    }
}

/// Always fails, as when the headless browser backend is missing.
pub struct FailingRenderer;

impl Renderer for FailingRenderer {
    fn render(
        &self,
        _document: &LayoutDocument,
        _geometry: PageGeometry,
    ) -> Result<Vec<u8>, RenderError> {
        Err(RenderError::Unavailable(
            "headless browser not installed".to_string(),
        ))
    }
}

/// Blocks for a fixed delay before answering, to exercise the timeout path.
pub struct SlowRenderer {
    pub delay: Duration,
}

impl Renderer for SlowRenderer {
    fn render(
        &self,
        document: &LayoutDocument,
        geometry: PageGeometry,
    ) -> Result<Vec<u8>, RenderError> {
        thread::sleep(self.delay);
        MockRenderer.render(document, geometry)
    }
}
