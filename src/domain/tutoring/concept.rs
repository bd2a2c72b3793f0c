//! A teachable concept from the external content catalog.

use serde::{Deserialize, Serialize};

/// One entry of the tutor content catalog.
///
/// The catalog is externally maintained and read-only to the engine; the
/// backing file is re-parsed on every access so edits take effect on the
/// next lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub sample_question: String,
}

impl Concept {
    /// True when `key` names this concept by id or title, case-insensitively.
    pub fn matches(&self, key: &str) -> bool {
        let key = key.trim();
        self.id.eq_ignore_ascii_case(key) || self.title.eq_ignore_ascii_case(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concept() -> Concept {
        Concept {
            id: "loops".to_string(),
            title: "Loops".to_string(),
            summary: "Loops repeat a block of code.".to_string(),
            sample_question: "What does a for loop do?".to_string(),
        }
    }

    #[test]
    fn matches_by_id_or_title_case_insensitively() {
        let c = concept();
        assert!(c.matches("loops"));
        assert!(c.matches("LOOPS"));
        assert!(c.matches(" Loops "));
        assert!(!c.matches("functions"));
    }

    #[test]
    fn sample_question_uses_camel_case_on_the_wire() {
        let json = serde_json::to_value(concept()).unwrap();
        assert!(json.get("sampleQuestion").is_some());
    }
}
