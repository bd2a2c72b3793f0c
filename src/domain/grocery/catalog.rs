//! The grocery store catalog.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One purchasable item from the external catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Resolves a spoken item name against the catalog.
///
/// Exact case-insensitive name matches win; otherwise the first item whose
/// name contains the query as a substring is taken. Returns `None` when
/// nothing matches — a user-facing miss, never an error.
pub fn find_item<'a>(items: &'a [CatalogItem], query: &str) -> Option<&'a CatalogItem> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }
    items
        .iter()
        .find(|item| item.name.to_lowercase() == query)
        .or_else(|| {
            items
                .iter()
                .find(|item| item.name.to_lowercase().contains(&query))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<CatalogItem> {
        ["Organic Milk", "Oat Milk", "Whole Wheat Bread"]
            .into_iter()
            .map(|name| CatalogItem {
                name: name.to_string(),
                price: 3.49,
                category: None,
                extra: Map::new(),
            })
            .collect()
    }

    #[test]
    fn exact_match_beats_substring_match() {
        let items = catalog();
        assert_eq!(find_item(&items, "oat milk").unwrap().name, "Oat Milk");
    }

    #[test]
    fn substring_match_resolves_partial_names() {
        let items = catalog();
        assert_eq!(find_item(&items, "bread").unwrap().name, "Whole Wheat Bread");
        // "milk" is not an exact name; the first substring hit wins.
        assert_eq!(find_item(&items, "milk").unwrap().name, "Organic Milk");
    }

    #[test]
    fn unknown_and_blank_queries_miss() {
        let items = catalog();
        assert!(find_item(&items, "durian").is_none());
        assert!(find_item(&items, "  ").is_none());
    }
}
