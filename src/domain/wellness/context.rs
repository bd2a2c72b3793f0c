//! History-aware context generation for wellness sessions.

use crate::domain::record::SessionRecord;

use super::CheckinEntry;

/// Briefing text for a user with no prior history.
pub const FIRST_CHECKIN_BRIEFING: &str =
    "This is the user's first check-in. Welcome them warmly.";

/// Maximum prior objectives echoed into the briefing. Truncation is silent.
const BRIEFING_OBJECTIVE_LIMIT: usize = 3;

/// Derives a natural-language briefing of prior check-ins.
///
/// Consumed by the language-generation collaborator to prime a new session;
/// this is advisory text, not structured data, and is deterministic for a
/// given history.
pub fn briefing_from_history(history: &[CheckinEntry]) -> String {
    let last = match history.last() {
        Some(last) => last,
        None => return FIRST_CHECKIN_BRIEFING.to_string(),
    };

    let mut parts = vec![
        format!(
            "The user has completed {} previous check-in(s).",
            history.len()
        ),
        format!("Last check-in was on {}.", last_date(last)),
    ];

    if let Some(mood) = &last.mood {
        parts.push(format!("Last mood: {}", mood));
    }
    if let Some(energy) = &last.energy_level {
        parts.push(format!("Last energy level: {}", energy));
    }
    if !last.objectives.is_empty() {
        let shown: Vec<&str> = last
            .objectives
            .iter()
            .take(BRIEFING_OBJECTIVE_LIMIT)
            .map(String::as_str)
            .collect();
        parts.push(format!("Last objectives: {}", shown.join(", ")));
    }

    let mut briefing = parts.join(" ");
    briefing.push_str(
        "\n\nReference the previous check-in naturally in your conversation to show \
         continuity and care.",
    );
    briefing
}

fn last_date(entry: &CheckinEntry) -> &str {
    if entry.date.is_empty() {
        "unknown date"
    } else {
        &entry.date
    }
}

/// Human-readable one-line summary of a check-in record.
pub fn format_checkin_summary(record: &SessionRecord) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(mood) = record.text("mood") {
        parts.push(format!("Mood: {}", mood));
    }
    if let Some(energy) = record.text("energy_level") {
        parts.push(format!("Energy: {}", energy));
    }
    if let Some(stress) = record.text("stress_factors") {
        parts.push(format!("Stress: {}", stress));
    }
    let objectives = record.list("objectives");
    if !objectives.is_empty() {
        parts.push(format!("Objectives: {}", objectives.join(", ")));
    }
    if let Some(self_care) = record.text("self_care_intentions") {
        parts.push(format!("Self-care: {}", self_care));
    }

    parts.join(" | ")
}
