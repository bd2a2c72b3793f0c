//! Snapshot Store Port - one file per completed record.

use async_trait::async_trait;
use std::path::PathBuf;

/// Errors that can occur while writing a snapshot
#[derive(Debug, thiserror::Error)]
pub enum SnapshotStoreError {
    #[error("Failed to serialize snapshot: {0}")]
    SerializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for snapshot-mode persistence.
///
/// One artifact per completed record; the filename embeds a
/// second-resolution timestamp plus the domain prefix. Two saves of the
/// same prefix within the same second collide and the last write wins —
/// a documented limitation of the format, not something implementations
/// work around.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Persists one payload under `<prefix>_<YYYYMMDD_HHMMSS>.json`.
    ///
    /// The implementation injects a `timestamp` field (ISO-8601) into the
    /// payload and creates the target directory on first use.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotStoreError` if serialization or the write fails;
    /// the caller keeps its in-memory record so the save can be retried.
    async fn save(
        &self,
        prefix: &str,
        payload: serde_json::Map<String, serde_json::Value>,
    ) -> Result<PathBuf, SnapshotStoreError>;
}
