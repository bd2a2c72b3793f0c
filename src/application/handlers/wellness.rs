//! Wellness handlers - complete a check-in, brief a new session

use std::sync::Arc;

use chrono::Utc;

use crate::domain::foundation::ValidationError;
use crate::domain::record::{split_listing, SessionRecord};
use crate::domain::wellness::{briefing_from_history, format_checkin_summary, CheckinEntry};
use crate::ports::{CheckinLog, CheckinLogError};

/// Command carrying a gathered check-in.
///
/// `objectives` is the boundary's comma-separated encoding.
#[derive(Debug, Clone)]
pub struct CompleteCheckinCommand {
    pub mood: String,
    pub energy_level: String,
    pub objectives: String,
    pub stress_factors: Option<String>,
    pub self_care_intentions: Option<String>,
}

/// Result of a saved check-in.
#[derive(Debug, Clone)]
pub struct CheckinReceipt {
    pub summary: String,
}

/// Error type for wellness operations
#[derive(Debug, thiserror::Error)]
pub enum WellnessError {
    #[error("The check-in is missing: {}", .missing.join(", "))]
    Incomplete { missing: Vec<String> },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Could not save the check-in: {0}")]
    Storage(#[from] CheckinLogError),
}

/// Handler appending completed check-ins to the history log.
pub struct CompleteCheckinHandler {
    log: Arc<dyn CheckinLog>,
}

impl CompleteCheckinHandler {
    pub fn new(log: Arc<dyn CheckinLog>) -> Self {
        Self { log }
    }

    /// Applies the command to the active check-in record and appends the
    /// completed entry to the history.
    ///
    /// The appended entry carries a short agent summary derived from the
    /// command, used by later sessions' briefings.
    ///
    /// # Errors
    ///
    /// `Incomplete` until mood, energy, and at least one objective are
    /// present; `Storage` leaves the record intact for a retry.
    pub async fn handle(
        &self,
        record: &mut SessionRecord,
        cmd: CompleteCheckinCommand,
    ) -> Result<CheckinReceipt, WellnessError> {
        record.set_text("mood", &cmd.mood)?;
        record.set_text("energy_level", &cmd.energy_level)?;
        let objectives = split_listing(&cmd.objectives);
        if !objectives.is_empty() {
            record.set_list("objectives", objectives)?;
        }
        if let Some(stress) = non_blank(cmd.stress_factors.as_deref()) {
            record.set_text("stress_factors", stress)?;
        }
        if let Some(self_care) = non_blank(cmd.self_care_intentions.as_deref()) {
            record.set_text("self_care_intentions", self_care)?;
        }

        if !record.is_complete() {
            return Err(WellnessError::Incomplete {
                missing: record
                    .missing_fields()
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            });
        }

        let mut agent_summary = format!(
            "User feeling {} with {} energy.",
            cmd.mood, cmd.energy_level
        );
        if let Some(stress) = record.text("stress_factors") {
            agent_summary.push_str(&format!(" Stressed about: {}.", stress));
        }

        let entry = CheckinEntry::new(
            record.text("mood").map(ToOwned::to_owned),
            record.text("energy_level").map(ToOwned::to_owned),
            record.text("stress_factors").map(ToOwned::to_owned),
            record.list("objectives").to_vec(),
            record.text("self_care_intentions").map(ToOwned::to_owned),
            Some(agent_summary),
            Utc::now(),
        );
        self.log.append(entry).await?;

        Ok(CheckinReceipt {
            summary: format_checkin_summary(record),
        })
    }
}

/// Handler deriving the prior-history briefing for a new session.
pub struct BriefingHandler {
    log: Arc<dyn CheckinLog>,
}

impl BriefingHandler {
    pub fn new(log: Arc<dyn CheckinLog>) -> Self {
        Self { log }
    }

    /// The natural-language digest of prior check-ins.
    ///
    /// # Errors
    ///
    /// `Storage` only on an unreadable log; a missing or corrupt history
    /// reads as empty and yields the first-time briefing.
    pub async fn handle(&self) -> Result<String, WellnessError> {
        let history = self.log.history().await?;
        Ok(briefing_from_history(&history))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
