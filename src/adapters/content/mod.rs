//! Read-only content adapters: catalogs re-read from JSON files on every
//! access.

mod json_concept_catalog;
mod json_faq_source;
mod json_grocery_catalog;

pub use json_concept_catalog::JsonConceptCatalog;
pub use json_faq_source::JsonFaqSource;
pub use json_grocery_catalog::JsonGroceryCatalog;
