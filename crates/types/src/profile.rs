use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The student identity printed in the info block.
///
/// `id` and `gpa` are institutional placeholders today, kept as profile
/// attributes so a caller with a real records system can supply them.
/// `issue_date` is injected by the caller so document assembly stays
/// deterministic under test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    /// Display name. May be empty for preview documents; the assembler
    /// substitutes [`StudentProfile::PLACEHOLDER_NAME`].
    pub name: String,
    pub id: String,
    pub issue_date: NaiveDate,
    pub gpa: f32,
}

impl StudentProfile {
    /// Shown in place of an empty name when assembling a preview document.
    pub const PLACEHOLDER_NAME: &'static str = "Student Name";

    pub const PLACEHOLDER_ID: &'static str = "123456789";
    pub const PLACEHOLDER_GPA: f32 = 3.85;

    /// Builds a profile with the placeholder id and GPA.
    pub fn new(name: impl Into<String>, issue_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            id: Self::PLACEHOLDER_ID.to_string(),
            issue_date,
            gpa: Self::PLACEHOLDER_GPA,
        }
    }

    /// The name to print: the profile name, or the placeholder when blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            Self::PLACEHOLDER_NAME
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_uses_placeholder() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let profile = StudentProfile::new("  ", date);
        assert_eq!(profile.display_name(), StudentProfile::PLACEHOLDER_NAME);

        let profile = StudentProfile::new("Jane Doe", date);
        assert_eq!(profile.display_name(), "Jane Doe");
    }
}
