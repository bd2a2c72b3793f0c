//! SDR handlers - save a qualified lead, answer from the FAQ

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::Value;

use crate::domain::foundation::ValidationError;
use crate::domain::record::SessionRecord;
use crate::domain::sales::format_lead_summary;
use crate::ports::{FaqSource, SnapshotStore, SnapshotStoreError};

/// Fixed `source` tag stamped into every lead snapshot.
const LEAD_SOURCE: &str = "Voice SDR Agent";

/// Placeholder stored when an optional qualifier was never collected.
const NOT_SPECIFIED: &str = "Not specified";

/// Command carrying the qualified lead.
#[derive(Debug, Clone)]
pub struct SaveLeadCommand {
    pub name: String,
    pub company: String,
    pub email: String,
    pub role: String,
    pub use_case: String,
    pub team_size: Option<String>,
    pub timeline: Option<String>,
}

/// Result of a saved lead.
#[derive(Debug, Clone)]
pub struct LeadReceipt {
    pub summary: String,
    pub saved_to: PathBuf,
}

/// Error type for SDR operations
#[derive(Debug, thiserror::Error)]
pub enum SdrError {
    #[error("The lead is missing: {}", .missing.join(", "))]
    Incomplete { missing: Vec<String> },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Could not save the lead: {0}")]
    Storage(#[from] SnapshotStoreError),
}

/// Handler persisting qualified leads.
pub struct SaveLeadHandler {
    snapshots: Arc<dyn SnapshotStore>,
}

impl SaveLeadHandler {
    pub fn new(snapshots: Arc<dyn SnapshotStore>) -> Self {
        Self { snapshots }
    }

    /// Applies the command to the active lead record and writes the lead
    /// snapshot with its fixed source tag.
    ///
    /// Blank optional qualifiers persist as "Not specified" so downstream
    /// consumers see an explicit value rather than a gap.
    pub async fn handle(
        &self,
        record: &mut SessionRecord,
        cmd: SaveLeadCommand,
    ) -> Result<LeadReceipt, SdrError> {
        record.set_text("name", cmd.name)?;
        record.set_text("company", cmd.company)?;
        record.set_text("email", cmd.email)?;
        record.set_text("role", cmd.role)?;
        record.set_text("use_case", cmd.use_case)?;
        record.set_text("team_size", or_not_specified(cmd.team_size))?;
        record.set_text("timeline", or_not_specified(cmd.timeline))?;

        if !record.is_complete() {
            return Err(SdrError::Incomplete {
                missing: record
                    .missing_fields()
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            });
        }

        let mut payload = record.payload();
        payload.insert("source".to_string(), Value::String(LEAD_SOURCE.to_string()));
        let saved_to = self.snapshots.save("lead", payload).await?;

        Ok(LeadReceipt {
            summary: format_lead_summary(record),
            saved_to,
        })
    }
}

/// Handler answering visitor questions from the FAQ knowledge base.
pub struct AnswerQuestionHandler {
    faq: Arc<dyn FaqSource>,
}

impl AnswerQuestionHandler {
    pub fn new(faq: Arc<dyn FaqSource>) -> Self {
        Self { faq }
    }

    /// The best FAQ answer for `query`, or `None` when nothing matches and
    /// the agent should offer a follow-up instead.
    pub async fn handle(&self, query: &str) -> Option<String> {
        let data = self.faq.load().await;
        data.search(query).map(ToOwned::to_owned)
    }

    /// The formatted knowledge base for priming the collaborator.
    pub async fn knowledge_base(&self) -> String {
        self.faq.load().await.knowledge_base()
    }
}

fn or_not_specified(value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_SPECIFIED.to_string(),
    }
}
