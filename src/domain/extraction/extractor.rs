//! The extraction pass over a free-text utterance.

use crate::domain::foundation::ValidationError;
use crate::domain::record::SessionRecord;

use super::vocabulary::{Category, Vocabulary};

/// Runs a vocabulary over raw text and updates the record in place.
///
/// Returns the names of the fields that were updated, in vocabulary order,
/// so callers can log or branch on which categories changed. Empty or
/// whitespace-only text yields no updates and is not an error. Repeating
/// the same text is idempotent for list fields: an extra already present is
/// not appended again.
///
/// # Errors
///
/// Returns `ValidationError` only when the vocabulary names a field the
/// record's schema does not carry, which indicates a wiring mistake rather
/// than bad user input.
pub fn apply_vocabulary(
    text: &str,
    vocabulary: &Vocabulary,
    record: &mut SessionRecord,
) -> Result<Vec<&'static str>, ValidationError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let lowered = text.to_lowercase();
    let mut updated: Vec<&'static str> = Vec::new();

    for category in vocabulary.categories {
        match category {
            Category::Choice(choice) => {
                for &(needle, canonical) in choice.entries {
                    if lowered.contains(needle) {
                        record.set_text(choice.field, canonical)?;
                        updated.push(choice.field);
                        break;
                    }
                }
            }
            Category::Priority(priority) => {
                for group in priority.groups {
                    if group.aliases.iter().any(|alias| lowered.contains(alias)) {
                        record.set_text(priority.field, group.canonical)?;
                        updated.push(priority.field);
                        break;
                    }
                }
            }
            Category::Keywords(keywords) => {
                let mut touched = false;
                for &(needle, canonical) in keywords.entries {
                    if lowered.contains(needle) && record.append_list(keywords.field, canonical)? {
                        touched = true;
                    }
                }
                if touched {
                    updated.push(keywords.field);
                }
            }
        }
    }

    Ok(updated)
}
