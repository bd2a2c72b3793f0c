//! In-memory storage adapters for tests and embedding hosts that manage
//! their own durability.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::PathBuf;
use tokio::sync::RwLock;

use crate::domain::wellness::CheckinEntry;
use crate::ports::{CheckinLog, CheckinLogError, SnapshotStore, SnapshotStoreError};

/// Snapshot store that keeps saved payloads in memory.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    saves: RwLock<Vec<(String, Map<String, Value>)>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every save so far as `(prefix, payload)` pairs.
    pub async fn saves(&self) -> Vec<(String, Map<String, Value>)> {
        self.saves.read().await.clone()
    }

    /// Number of saves so far.
    pub async fn count(&self) -> usize {
        self.saves.read().await.len()
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn save(
        &self,
        prefix: &str,
        mut payload: Map<String, Value>,
    ) -> Result<PathBuf, SnapshotStoreError> {
        payload.insert(
            "timestamp".to_string(),
            Value::String(chrono::Utc::now().to_rfc3339()),
        );
        let mut saves = self.saves.write().await;
        saves.push((prefix.to_string(), payload));
        Ok(PathBuf::from(format!("memory://{}/{}", prefix, saves.len())))
    }
}

/// Check-in log that keeps the history in memory.
#[derive(Debug, Default)]
pub struct InMemoryCheckinLog {
    entries: RwLock<Vec<CheckinEntry>>,
}

impl InMemoryCheckinLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the history wholesale, for seeding tests.
    pub async fn seed(&self, entries: Vec<CheckinEntry>) {
        *self.entries.write().await = entries;
    }
}

#[async_trait]
impl CheckinLog for InMemoryCheckinLog {
    async fn append(&self, entry: CheckinEntry) -> Result<(), CheckinLogError> {
        self.entries.write().await.push(entry);
        Ok(())
    }

    async fn history(&self) -> Result<Vec<CheckinEntry>, CheckinLogError> {
        Ok(self.entries.read().await.clone())
    }
}
