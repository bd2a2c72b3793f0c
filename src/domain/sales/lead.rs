//! Lead presentation.

use crate::domain::record::SessionRecord;

/// Human-readable one-line summary of a qualified lead.
///
/// Degrades gracefully as fields go missing; a fully empty record reads as
/// just "prospect".
pub fn format_lead_summary(record: &SessionRecord) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(name) = record.text("name") {
        parts.push(name.to_owned());
    }
    match (record.text("role"), record.text("company")) {
        (Some(role), Some(company)) => parts.push(format!("{} at {}", role, company)),
        (None, Some(company)) => parts.push(format!("from {}", company)),
        _ => {}
    }
    if let Some(use_case) = record.text("use_case") {
        parts.push(format!("interested in {}", use_case));
    }
    if let Some(team_size) = record.text("team_size") {
        parts.push(format!("with a team of {}", team_size));
    }
    if let Some(timeline) = record.text("timeline") {
        parts.push(format!("looking to start {}", timeline));
    }

    if parts.is_empty() {
        "prospect".to_string()
    } else {
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::RecordSchema;

    #[test]
    fn full_lead_reads_naturally() {
        let mut record = SessionRecord::new(RecordSchema::lead());
        record.set_text("name", "Priya Shah").unwrap();
        record.set_text("company", "Acme Corp").unwrap();
        record.set_text("role", "CTO").unwrap();
        record.set_text("use_case", "cloud migration").unwrap();
        record.set_text("team_size", "40").unwrap();
        record.set_text("timeline", "next quarter").unwrap();

        assert_eq!(
            format_lead_summary(&record),
            "Priya Shah, CTO at Acme Corp, interested in cloud migration, \
             with a team of 40, looking to start next quarter"
        );
    }

    #[test]
    fn company_without_role_uses_from() {
        let mut record = SessionRecord::new(RecordSchema::lead());
        record.set_text("company", "Acme Corp").unwrap();
        assert_eq!(format_lead_summary(&record), "from Acme Corp");
    }

    #[test]
    fn empty_record_is_just_a_prospect() {
        let record = SessionRecord::new(RecordSchema::lead());
        assert_eq!(format_lead_summary(&record), "prospect");
    }
}
