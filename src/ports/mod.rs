//! Ports: the interfaces the engine's application layer depends on.
//!
//! Every boundary that touches storage is a trait here, with file-backed
//! and in-memory implementations under `adapters`.

mod case_store;
mod checkin_log;
mod content;
mod snapshot_store;

pub use case_store::{CaseStore, CaseStoreError};
pub use checkin_log::{CheckinLog, CheckinLogError};
pub use content::{ConceptCatalog, FaqSource, GroceryCatalog};
pub use snapshot_store::{SnapshotStore, SnapshotStoreError};
