//! File-based Check-in Log Adapter
//!
//! Keeps the whole wellness history as a single JSON array file and
//! rewrites it on every append.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::config::StorageConfig;
use crate::domain::wellness::CheckinEntry;
use crate::ports::{CheckinLog, CheckinLogError};

/// Append-log over one JSON array file.
///
/// Each append is read-modify-write over the whole file with no locking;
/// two concurrent appends can lose one entry, which is inherited behavior
/// (see the port docs). With `atomic` set, the rewrite goes through a
/// temporary file and rename so a crash mid-write cannot truncate the
/// history; it still does not serialize concurrent writers.
#[derive(Debug, Clone)]
pub struct JsonCheckinLog {
    path: PathBuf,
    atomic: bool,
}

impl JsonCheckinLog {
    /// Creates a log at `path` using plain rewrites.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            atomic: false,
        }
    }

    /// Switches rewrites to write-temp-then-rename.
    pub fn with_atomic_writes(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    /// Creates the log at the configured path honoring the configured
    /// write behavior.
    pub fn from_config(storage: &StorageConfig) -> Self {
        Self::new(storage.wellness_log()).with_atomic_writes(storage.atomic_writes)
    }

    async fn read_history(&self) -> Result<Vec<CheckinEntry>, CheckinLogError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(CheckinLogError::IoError(e.to_string())),
        };

        match serde_json::from_str(&raw) {
            Ok(history) => Ok(history),
            Err(e) => {
                // Malformed storage: recover with an empty history rather
                // than failing the interaction.
                tracing::warn!(
                    "Could not parse check-in history at {}: {}",
                    self.path.display(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    async fn write_history(&self, history: &[CheckinEntry]) -> Result<(), CheckinLogError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| CheckinLogError::IoError(e.to_string()))?;
            }
        }

        let json = serde_json::to_string_pretty(history)
            .map_err(|e| CheckinLogError::SerializationFailed(e.to_string()))?;

        if self.atomic {
            let tmp = self.path.with_extension("json.tmp");
            fs::write(&tmp, &json)
                .await
                .map_err(|e| CheckinLogError::IoError(e.to_string()))?;
            fs::rename(&tmp, &self.path)
                .await
                .map_err(|e| CheckinLogError::IoError(e.to_string()))?;
        } else {
            fs::write(&self.path, &json)
                .await
                .map_err(|e| CheckinLogError::IoError(e.to_string()))?;
        }
        Ok(())
    }
}

#[async_trait]
impl CheckinLog for JsonCheckinLog {
    async fn append(&self, entry: CheckinEntry) -> Result<(), CheckinLogError> {
        let mut history = self.read_history().await?;
        history.push(entry);
        self.write_history(&history).await?;
        tracing::info!(
            "Check-in saved to {} ({} total)",
            self.path.display(),
            history.len()
        );
        Ok(())
    }

    async fn history(&self) -> Result<Vec<CheckinEntry>, CheckinLogError> {
        self.read_history().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    fn entry(mood: &str) -> CheckinEntry {
        CheckinEntry::new(
            Some(mood.to_string()),
            Some("medium".to_string()),
            None,
            vec!["stretch".to_string()],
            None,
            Some(format!("User feeling {} with medium energy.", mood)),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty_history() {
        let temp_dir = TempDir::new().unwrap();
        let log = JsonCheckinLog::new(temp_dir.path().join("wellness_log.json"));

        assert!(log.history().await.unwrap().is_empty());
        assert!(log.last().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn sequential_appends_round_trip_in_insertion_order() {
        let temp_dir = TempDir::new().unwrap();
        let log = JsonCheckinLog::new(temp_dir.path().join("wellness_log.json"));

        log.append(entry("anxious")).await.unwrap();
        log.append(entry("good")).await.unwrap();
        log.append(entry("great")).await.unwrap();

        let history = log.history().await.unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].mood.as_deref(), Some("anxious"));
        assert_eq!(history[2].mood.as_deref(), Some("great"));

        let last = log.last().await.unwrap().unwrap();
        assert_eq!(last.mood.as_deref(), Some("great"));
    }

    #[tokio::test]
    async fn corrupt_file_degrades_to_empty_then_appends() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wellness_log.json");
        std::fs::write(&path, "{not json").unwrap();

        let log = JsonCheckinLog::new(&path);
        assert!(log.history().await.unwrap().is_empty());

        // The next append starts a fresh history over the corrupt file.
        log.append(entry("ok")).await.unwrap();
        assert_eq!(log.history().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn atomic_mode_produces_the_same_observable_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wellness_log.json");
        let log = JsonCheckinLog::new(&path).with_atomic_writes(true);

        log.append(entry("calm")).await.unwrap();
        log.append(entry("tired")).await.unwrap();

        let history = log.history().await.unwrap();
        assert_eq!(history.len(), 2);
        // No temporary file is left behind.
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn file_is_a_plain_json_array_with_camel_case_entries() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wellness_log.json");
        let log = JsonCheckinLog::new(&path);

        log.append(entry("good")).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["energyLevel"], "medium");
        assert!(value[0]["timestamp"].is_string());
        assert!(value[0]["date"].is_string());
        assert!(value[0]["agentSummary"].is_string());
    }
}
