//! Case Store Port - the mutable fraud case collection.

use async_trait::async_trait;

use crate::domain::fraud::{CaseFileUser, CaseResolution, FraudCase};

/// Errors that can occur during case store operations
#[derive(Debug, thiserror::Error)]
pub enum CaseStoreError {
    #[error("Could not find fraud case for user {username}")]
    UserNotFound { username: String },

    #[error("No pending fraud case found for {username}")]
    NoPendingCase { username: String },

    #[error("Case {case_id} was already resolved")]
    AlreadyResolved { case_id: String },

    #[error("Failed to serialize case file: {0}")]
    SerializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for the durable fraud case collection.
///
/// Implementations load the whole case file, patch one case in place, and
/// rewrite the file wholesale. A malformed backing file degrades to an
/// empty user set after logging, so lookups against it report the user as
/// missing rather than failing hard.
#[async_trait]
pub trait CaseStore: Send + Sync {
    /// Finds a user and their cases by name, case-insensitively.
    async fn find_user(&self, username: &str) -> Result<Option<CaseFileUser>, CaseStoreError>;

    /// Applies a resolution to the user's first pending case and persists
    /// the updated file, returning the updated case.
    ///
    /// # Errors
    ///
    /// `UserNotFound` / `NoPendingCase` when the target cannot be located;
    /// `IoError` when the rewrite fails, in which case the on-disk state is
    /// unchanged from the caller's perspective and a retry is possible.
    async fn resolve_pending_case(
        &self,
        username: &str,
        resolution: &CaseResolution,
    ) -> Result<FraudCase, CaseStoreError>;
}
