//! One persisted wellness check-in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A completed check-in as it appears in the append-only history log.
///
/// Entries are never mutated after they are appended. `date` is the
/// `YYYY-MM-DD` rendering of `timestamp`, kept separately because the
/// briefing generator reads it back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinEntry {
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub energy_level: Option<String>,
    #[serde(default)]
    pub stress_factors: Option<String>,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub self_care_intentions: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_summary: Option<String>,
}

impl CheckinEntry {
    /// Builds an entry stamped with `at`, deriving the `date` string.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        mood: Option<String>,
        energy_level: Option<String>,
        stress_factors: Option<String>,
        objectives: Vec<String>,
        self_care_intentions: Option<String>,
        agent_summary: Option<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            mood,
            energy_level,
            stress_factors,
            objectives,
            self_care_intentions,
            timestamp: at,
            date: at.format("%Y-%m-%d").to_string(),
            agent_summary,
        }
    }
}
