//! Grouping Partitioner: splits an ordered course list into named sections.
//!
//! Section order is first-occurrence order of each distinct key in the input
//! (never alphabetical or chronological), and records keep their original
//! relative order within a section. Partitioning never drops or duplicates a
//! record, so the concatenation of all sections is a permutation of the input.

use parchment_types::{CourseRecord, Grouping};
use std::collections::HashMap;

/// The subject key used when a course code contains no letters.
pub const FALLBACK_SUBJECT: &str = "Other";

/// A contiguous group of course rows sharing a partition key.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// The partition key (term or subject). `None` for the single implicit
    /// section produced by [`Grouping::None`].
    pub key: Option<String>,
    pub records: Vec<CourseRecord>,
}

/// Partitions `records` into sections according to `grouping`.
///
/// An empty input produces no sections for every grouping value, including
/// `Grouping::None` (the assembler then emits a document with no section
/// blocks).
pub fn partition(records: &[CourseRecord], grouping: Grouping) -> Vec<Section> {
    if records.is_empty() {
        return Vec::new();
    }
    match grouping {
        Grouping::None => vec![Section {
            key: None,
            records: records.to_vec(),
        }],
        Grouping::ByTerm => partition_by_key(records, |r| r.term.clone()),
        Grouping::BySubject => partition_by_key(records, |r| subject_key(&r.code)),
    }
}

/// Extracts the subject prefix from a course code: decimal digits removed,
/// upper-cased. "MATH101" becomes "MATH"; an all-digit code like "101" maps
/// to [`FALLBACK_SUBJECT`].
pub fn subject_key(code: &str) -> String {
    let prefix: String = code
        .chars()
        .filter(|c| !c.is_ascii_digit())
        .collect::<String>()
        .to_uppercase();
    if prefix.is_empty() {
        FALLBACK_SUBJECT.to_string()
    } else {
        prefix
    }
}

fn partition_by_key<F>(records: &[CourseRecord], key_of: F) -> Vec<Section>
where
    F: Fn(&CourseRecord) -> String,
{
    let mut sections: Vec<Section> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let key = key_of(record);
        let slot = match index.get(&key) {
            Some(&i) => i,
            None => {
                let i = sections.len();
                index.insert(key.clone(), i);
                sections.push(Section {
                    key: Some(key),
                    records: Vec::new(),
                });
                i
            }
        };
        sections[slot].records.push(record.clone());
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(code: &str, term: &str) -> CourseRecord {
        CourseRecord::new(code, format!("{code} title"), term, "A", 3.0)
    }

    #[test]
    fn test_none_grouping_single_unnamed_section() {
        let records = vec![course("MATH101", "Fall 2022"), course("ENG101", "Fall 2022")];
        let sections = partition(&records, Grouping::None);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].key, None);
        assert_eq!(sections[0].records, records);
    }

    #[test]
    fn test_by_term_first_occurrence_order() {
        let records = vec![
            course("MATH101", "Fall22"),
            course("PHYS101", "Spring23"),
            course("ENG101", "Fall22"),
        ];
        let sections = partition(&records, Grouping::ByTerm);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].key.as_deref(), Some("Fall22"));
        assert_eq!(sections[1].key.as_deref(), Some("Spring23"));
        // Both Fall22 records, original relative order.
        assert_eq!(sections[0].records[0].code, "MATH101");
        assert_eq!(sections[0].records[1].code, "ENG101");
    }

    #[test]
    fn test_terms_compared_verbatim() {
        // Case and whitespace differences produce distinct sections.
        let records = vec![course("A1", "Fall 2022"), course("B1", "fall 2022")];
        let sections = partition(&records, Grouping::ByTerm);
        assert_eq!(sections.len(), 2);
    }

    #[test]
    fn test_by_subject_keys() {
        let records = vec![
            course("MATH101", "Fall22"),
            course("math201", "Spring23"),
            course("101", "Fall22"),
        ];
        let sections = partition(&records, Grouping::BySubject);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].key.as_deref(), Some("MATH"));
        assert_eq!(sections[0].records.len(), 2);
        assert_eq!(sections[1].key.as_deref(), Some(FALLBACK_SUBJECT));
    }

    #[test]
    fn test_subject_key_extraction() {
        assert_eq!(subject_key("MATH101"), "MATH");
        assert_eq!(subject_key("eng101"), "ENG");
        assert_eq!(subject_key("101"), "Other");
        assert_eq!(subject_key("CS50x"), "CSX");
    }

    #[test]
    fn test_partition_completeness() {
        let records: Vec<CourseRecord> = (0..10)
            .map(|i| course(&format!("C{i}"), if i % 3 == 0 { "T1" } else { "T2" }))
            .collect();

        for grouping in [Grouping::None, Grouping::ByTerm, Grouping::BySubject] {
            let sections = partition(&records, grouping);
            let total: usize = sections.iter().map(|s| s.records.len()).sum();
            assert_eq!(total, records.len(), "grouping {grouping:?} lost rows");
        }
    }

    #[test]
    fn test_empty_input_has_no_sections() {
        for grouping in [Grouping::None, Grouping::ByTerm, Grouping::BySubject] {
            assert!(partition(&[], grouping).is_empty());
        }
    }
}
