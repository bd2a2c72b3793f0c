//! Storage adapters for the three persistence modes.

mod in_memory;
mod json_case_store;
mod json_checkin_log;
mod json_snapshot_store;

pub use in_memory::{InMemoryCheckinLog, InMemorySnapshotStore};
pub use json_case_store::JsonCaseStore;
pub use json_checkin_log::JsonCheckinLog;
pub use json_snapshot_store::JsonSnapshotStore;
