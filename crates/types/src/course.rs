use serde::{Deserialize, Serialize};

/// A single row of a student's course history.
///
/// The engine treats every field as opaque display data: `term` is a verbatim
/// grouping key (no chronological parsing) and `grade` is never checked
/// against a grade scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    /// Short alphanumeric identifier, e.g. "MATH101".
    pub code: String,
    /// Free-text course name. Accepts the legacy `name` key on input.
    #[serde(alias = "name")]
    pub title: String,
    /// Free-text semester/year label, e.g. "Fall 2022". Accepts `semester`.
    #[serde(alias = "semester")]
    pub term: String,
    /// Letter-grade string, opaque to the engine.
    pub grade: String,
    /// Credit weight for the course.
    pub credits: f32,
}

impl CourseRecord {
    pub fn new(
        code: impl Into<String>,
        title: impl Into<String>,
        term: impl Into<String>,
        grade: impl Into<String>,
        credits: f32,
    ) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            term: term.into(),
            grade: grade.into(),
            credits,
        }
    }

    /// Checks the per-record invariant: non-empty code and non-negative
    /// credits. Cross-record validation (duplicate codes, conflicting terms)
    /// is deliberately not performed anywhere in the engine.
    pub fn is_well_formed(&self) -> bool {
        !self.code.is_empty() && self.credits >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_field_names_deserialize() {
        let json = r#"{ "code": "MATH101", "name": "Calculus I", "semester": "Fall 2022", "grade": "A", "credits": 4 }"#;
        let record: CourseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.title, "Calculus I");
        assert_eq!(record.term, "Fall 2022");
    }

    #[test]
    fn test_well_formed() {
        assert!(CourseRecord::new("MATH101", "Calculus I", "Fall 2022", "A", 4.0).is_well_formed());
        assert!(!CourseRecord::new("", "Calculus I", "Fall 2022", "A", 4.0).is_well_formed());
        assert!(!CourseRecord::new("MATH101", "Calculus I", "Fall 2022", "A", -1.0).is_well_formed());
    }
}
