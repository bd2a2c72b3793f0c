//! Content Ports - read-only external catalogs.
//!
//! All three catalogs share a contract: the backing source is re-read on
//! every access (an external edit takes effect on the next lookup), and a
//! missing or malformed source degrades to an empty catalog after the
//! condition is logged. That is why these methods return plain collections
//! rather than results.

use async_trait::async_trait;

use crate::domain::grocery::{find_item, CatalogItem};
use crate::domain::sales::FaqData;
use crate::domain::tutoring::Concept;

/// Port for the tutor content catalog.
#[async_trait]
pub trait ConceptCatalog: Send + Sync {
    /// Every concept, in catalog order.
    async fn all(&self) -> Vec<Concept>;

    /// Looks up a concept by id or title, case-insensitively.
    async fn find(&self, key: &str) -> Option<Concept> {
        self.all().await.into_iter().find(|c| c.matches(key))
    }

    /// The titles offered to a user choosing a concept.
    async fn titles(&self) -> Vec<String> {
        self.all().await.into_iter().map(|c| c.title).collect()
    }
}

/// Port for the FAQ knowledge base.
#[async_trait]
pub trait FaqSource: Send + Sync {
    /// The current FAQ data set.
    async fn load(&self) -> FaqData;
}

/// Port for the grocery store catalog.
#[async_trait]
pub trait GroceryCatalog: Send + Sync {
    /// Every purchasable item.
    async fn items(&self) -> Vec<CatalogItem>;

    /// Resolves a spoken item name (exact first, then substring).
    async fn resolve(&self, query: &str) -> Option<CatalogItem> {
        let items = self.items().await;
        find_item(&items, query).cloned()
    }
}
