//! File-based Grocery Catalog Adapter

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::grocery::CatalogItem;
use crate::ports::GroceryCatalog;

/// Grocery catalog over one JSON array file, re-read on every access.
#[derive(Debug, Clone)]
pub struct JsonGroceryCatalog {
    path: PathBuf,
}

impl JsonGroceryCatalog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl GroceryCatalog for JsonGroceryCatalog {
    async fn items(&self) -> Vec<CatalogItem> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(
                    "Could not read grocery catalog at {}: {}",
                    self.path.display(),
                    e
                );
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(
                    "Could not parse grocery catalog at {}: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn resolves_items_by_exact_then_substring_match() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("grocery_catalog.json");
        std::fs::write(
            &path,
            serde_json::json!([
                {"name": "Organic Milk", "price": 4.99, "category": "Dairy"},
                {"name": "Whole Wheat Bread", "price": 3.49, "category": "Bakery"}
            ])
            .to_string(),
        )
        .unwrap();

        let catalog = JsonGroceryCatalog::new(&path);
        assert_eq!(catalog.items().await.len(), 2);
        assert_eq!(
            catalog.resolve("organic milk").await.unwrap().name,
            "Organic Milk"
        );
        assert_eq!(
            catalog.resolve("bread").await.unwrap().name,
            "Whole Wheat Bread"
        );
        assert!(catalog.resolve("durian").await.is_none());
    }

    #[tokio::test]
    async fn missing_file_degrades_to_an_empty_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = JsonGroceryCatalog::new(temp_dir.path().join("absent.json"));
        assert!(catalog.items().await.is_empty());
    }
}
