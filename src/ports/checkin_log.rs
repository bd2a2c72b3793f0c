//! Check-in Log Port - the append-only wellness history.

use async_trait::async_trait;

use crate::domain::wellness::CheckinEntry;

/// Errors that can occur during check-in log operations
#[derive(Debug, thiserror::Error)]
pub enum CheckinLogError {
    #[error("Failed to serialize check-in history: {0}")]
    SerializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for append-log-mode persistence.
///
/// The history is an ordered, append-only sequence; entries are never
/// mutated in place. A missing backing file reads as an empty history and
/// a corrupt one degrades to empty after the parse failure is logged.
///
/// The default file implementation's append is a whole-file
/// read-modify-write without locking: concurrent appends from two
/// interactions can lose one entry. That race is inherited behavior,
/// asserted sequentially in tests, with an opt-in atomic-rename mode for
/// crash safety.
#[async_trait]
pub trait CheckinLog: Send + Sync {
    /// Appends one completed check-in to the history.
    ///
    /// # Errors
    ///
    /// Returns `CheckinLogError` if the rewrite fails; the entry is not
    /// partially applied and the caller may retry.
    async fn append(&self, entry: CheckinEntry) -> Result<(), CheckinLogError>;

    /// The full history in insertion order.
    async fn history(&self) -> Result<Vec<CheckinEntry>, CheckinLogError>;

    /// The most recent check-in, or `None` for a fresh history.
    async fn last(&self) -> Result<Option<CheckinEntry>, CheckinLogError> {
        Ok(self.history().await?.pop())
    }
}
