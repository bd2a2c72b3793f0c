//! File-based FAQ Source Adapter

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::sales::FaqData;
use crate::ports::FaqSource;

/// FAQ source over one JSON file, re-read on every lookup.
///
/// Missing or malformed data degrades to an empty set after logging; the
/// agent then simply has no knowledge base to draw on.
#[derive(Debug, Clone)]
pub struct JsonFaqSource {
    path: PathBuf,
}

impl JsonFaqSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl FaqSource for JsonFaqSource {
    async fn load(&self) -> FaqData {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Could not read FAQ data at {}: {}", self.path.display(), e);
                return FaqData::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("Could not parse FAQ data at {}: {}", self.path.display(), e);
                FaqData::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn loads_and_searches_the_faq_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("faq.json");
        std::fs::write(
            &path,
            serde_json::json!({
                "company": {
                    "name": "Acme Services",
                    "overview": "Global consulting.",
                    "tagline": "We build it."
                },
                "faqs": [
                    {"question": "Do you offer cloud migration?", "answer": "Yes."}
                ]
            })
            .to_string(),
        )
        .unwrap();

        let source = JsonFaqSource::new(&path);
        let data = source.load().await;
        assert_eq!(data.search("cloud options"), Some("Yes."));
        assert!(data.knowledge_base().contains("COMPANY: Acme Services"));
    }

    #[tokio::test]
    async fn missing_file_degrades_to_an_empty_set() {
        let temp_dir = TempDir::new().unwrap();
        let source = JsonFaqSource::new(temp_dir.path().join("absent.json"));
        assert_eq!(source.load().await, FaqData::default());
    }
}
