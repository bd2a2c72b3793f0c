//! File-based Concept Catalog Adapter

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::tutoring::Concept;
use crate::ports::ConceptCatalog;

/// Concept catalog over one JSON array file.
///
/// The file is re-parsed on every access, so an external edit takes effect
/// on the next lookup. A missing or malformed file degrades to an empty
/// catalog after the condition is logged.
#[derive(Debug, Clone)]
pub struct JsonConceptCatalog {
    path: PathBuf,
}

impl JsonConceptCatalog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ConceptCatalog for JsonConceptCatalog {
    async fn all(&self) -> Vec<Concept> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(
                    "Could not read tutor content at {}: {}",
                    self.path.display(),
                    e
                );
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(concepts) => concepts,
            Err(e) => {
                tracing::warn!(
                    "Could not parse tutor content at {}: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }
}
