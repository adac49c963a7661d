//! The closed template registry: five named combinations of orientation and
//! grouping, with the display metadata a front end needs to list them.
//!
//! Unknown keys resolve to the default template instead of failing. Callers
//! sometimes persist template keys, and an old or misspelled key should
//! degrade to a usable transcript rather than an error.

use parchment_types::{Grouping, Orientation, TemplateSpec};

/// The key that unknown template keys fall back to.
pub const DEFAULT_TEMPLATE_KEY: &str = "default";

/// A registry entry: the wire key, human-readable metadata, and the engine
/// behavior it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub spec: TemplateSpec,
}

/// All registered templates, in presentation order.
pub static TEMPLATES: [TemplateInfo; 5] = [
    TemplateInfo {
        key: DEFAULT_TEMPLATE_KEY,
        name: "Default",
        description: "Professional portrait layout",
        spec: TemplateSpec::new(Orientation::Portrait, Grouping::None),
    },
    TemplateInfo {
        key: "byTerm",
        name: "Portrait by Term",
        description: "Courses grouped by academic term",
        spec: TemplateSpec::new(Orientation::Portrait, Grouping::ByTerm),
    },
    TemplateInfo {
        key: "bySubject",
        name: "Portrait by Subject",
        description: "Courses grouped by subject",
        spec: TemplateSpec::new(Orientation::Portrait, Grouping::BySubject),
    },
    TemplateInfo {
        key: "landscapeByTerm",
        name: "Landscape by Term",
        description: "Landscape layout grouped by term",
        spec: TemplateSpec::new(Orientation::Landscape, Grouping::ByTerm),
    },
    TemplateInfo {
        key: "landscapeBySubject",
        name: "Landscape by Subject",
        description: "Landscape layout grouped by subject",
        spec: TemplateSpec::new(Orientation::Landscape, Grouping::BySubject),
    },
];

/// Looks up a registry entry by its exact key.
pub fn lookup(key: &str) -> Option<&'static TemplateInfo> {
    TEMPLATES.iter().find(|info| info.key == key)
}

/// Resolves a template key to its spec, falling back to the default
/// template for unknown keys.
pub fn resolve_template(key: &str) -> TemplateSpec {
    match lookup(key) {
        Some(info) => info.spec,
        None => {
            log::warn!("unknown template key {key:?}, falling back to {DEFAULT_TEMPLATE_KEY:?}");
            TemplateSpec::new(Orientation::Portrait, Grouping::None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_keys_resolve_to_their_spec() {
        for info in &TEMPLATES {
            assert_eq!(resolve_template(info.key), info.spec);
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_default() {
        let fallback = resolve_template("stained-glass");
        assert_eq!(fallback, lookup(DEFAULT_TEMPLATE_KEY).unwrap().spec);
    }

    #[test]
    fn test_keys_are_unique() {
        for (i, a) in TEMPLATES.iter().enumerate() {
            for b in &TEMPLATES[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }
}
