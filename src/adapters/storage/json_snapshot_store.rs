//! File-based Snapshot Store Adapter
//!
//! Writes one pretty-printed JSON file per completed record into a flat
//! directory, e.g. `orders/order_20250309_221500.json`.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{SnapshotStore, SnapshotStoreError};

/// Snapshot store writing `<dir>/<prefix>_<YYYYMMDD_HHMMSS>.json`.
///
/// Filenames have second resolution: two records of the same prefix
/// completed within the same second land on the same path and the last
/// write wins. That collision is part of the format's contract and is left
/// unresolved here.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    dir: PathBuf,
}

impl JsonSnapshotStore {
    /// Creates a store rooted at `dir`. The directory is created lazily on
    /// the first save.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// The directory this store writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl SnapshotStore for JsonSnapshotStore {
    async fn save(
        &self,
        prefix: &str,
        mut payload: Map<String, Value>,
    ) -> Result<PathBuf, SnapshotStoreError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| SnapshotStoreError::IoError(e.to_string()))?;

        let now = Utc::now();
        payload.insert("timestamp".to_string(), Value::String(now.to_rfc3339()));

        let filename = format!("{}_{}.json", prefix, now.format("%Y%m%d_%H%M%S"));
        let path = self.dir.join(filename);

        let json = serde_json::to_string_pretty(&Value::Object(payload))
            .map_err(|e| SnapshotStoreError::SerializationFailed(e.to_string()))?;

        fs::write(&path, json)
            .await
            .map_err(|e| SnapshotStoreError::IoError(e.to_string()))?;

        tracing::info!("Snapshot saved to {}", path.display());
        Ok(path)
    }
}
