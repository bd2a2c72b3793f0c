//! Adapters: file-backed and in-memory implementations of the ports.

mod content;
mod storage;

pub use content::{JsonConceptCatalog, JsonFaqSource, JsonGroceryCatalog};
pub use storage::{
    InMemoryCheckinLog, InMemorySnapshotStore, JsonCaseStore, JsonCheckinLog, JsonSnapshotStore,
};
