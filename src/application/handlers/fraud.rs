//! CompleteInvestigationHandler - resolve a pending fraud case

use std::sync::Arc;

use crate::domain::foundation::ValidationError;
use crate::domain::fraud::{CaseResolution, CaseStatus};
use crate::domain::record::SessionRecord;
use crate::ports::{CaseStore, CaseStoreError};

/// Command carrying the investigation's answers.
///
/// `transaction_legitimate` is tri-state: confirmed, denied, or never
/// answered (when verification failed before the question was reached).
#[derive(Debug, Clone)]
pub struct CompleteInvestigationCommand {
    pub username: String,
    pub verification_passed: bool,
    pub transaction_legitimate: Option<bool>,
}

/// Result of a resolved investigation.
#[derive(Debug, Clone)]
pub struct InvestigationReport {
    pub case_id: String,
    pub status: CaseStatus,
    /// Customer-facing confirmation of the action taken.
    pub message: String,
}

/// Error type for completing an investigation
///
/// Every variant's `Display` is safe to read back to the customer; none of
/// these abort the interaction.
#[derive(Debug, thiserror::Error)]
pub enum FraudError {
    #[error("Could not find a fraud case for user {username}. Please contact support.")]
    CaseNotFound { username: String },

    #[error("No pending fraud case found for {username}.")]
    NoPendingCase { username: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("There was an error updating the case: {0}")]
    Storage(String),
}

impl From<CaseStoreError> for FraudError {
    fn from(err: CaseStoreError) -> Self {
        match err {
            CaseStoreError::UserNotFound { username } => FraudError::CaseNotFound { username },
            CaseStoreError::NoPendingCase { username } => FraudError::NoPendingCase { username },
            other => FraudError::Storage(other.to_string()),
        }
    }
}

/// Handler resolving fraud investigations against the case store.
pub struct CompleteInvestigationHandler {
    cases: Arc<dyn CaseStore>,
}

impl CompleteInvestigationHandler {
    pub fn new(cases: Arc<dyn CaseStore>) -> Self {
        Self { cases }
    }

    /// Records the answers on the active record, derives the resolution,
    /// and patches the user's first pending case in the store.
    ///
    /// # Errors
    ///
    /// `CaseNotFound` / `NoPendingCase` when the store has no matching
    /// target; `Storage` when the rewrite fails, in which case the record
    /// still holds the answers for a retry.
    pub async fn handle(
        &self,
        record: &mut SessionRecord,
        cmd: CompleteInvestigationCommand,
    ) -> Result<InvestigationReport, FraudError> {
        record.set_text("username", &cmd.username)?;
        record.set_flag("verification_passed", cmd.verification_passed)?;
        if let Some(legitimate) = cmd.transaction_legitimate {
            record.set_flag("transaction_legitimate", legitimate)?;
        }

        let user = self
            .cases
            .find_user(&cmd.username)
            .await?
            .ok_or_else(|| FraudError::CaseNotFound {
                username: cmd.username.clone(),
            })?;
        let pending = user
            .first_pending()
            .ok_or_else(|| FraudError::NoPendingCase {
                username: cmd.username.clone(),
            })?;

        let resolution = CaseResolution::from_verification(
            cmd.verification_passed,
            cmd.transaction_legitimate,
            pending.card_ending.as_deref(),
        );

        let updated = self
            .cases
            .resolve_pending_case(&cmd.username, &resolution)
            .await?;

        tracing::info!(
            "Fraud case {} resolved as {} for {}",
            updated.case_id,
            updated.status.as_str(),
            cmd.username
        );
        Ok(InvestigationReport {
            case_id: updated.case_id,
            status: updated.status,
            message: format!("Investigation complete. {}", resolution.action_message),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::JsonCaseStore;
    use crate::domain::record::RecordSchema;
    use tempfile::TempDir;

    fn seed_store(dir: &TempDir) -> Arc<JsonCaseStore> {
        let path = dir.path().join("fraud_cases.json");
        std::fs::write(
            &path,
            serde_json::json!({
                "users": [{
                    "userName": "JDoe",
                    "cases": [{
                        "caseId": "CASE-001",
                        "status": "pending_review",
                        "cardEnding": "4421"
                    }]
                }]
            })
            .to_string(),
        )
        .unwrap();
        Arc::new(JsonCaseStore::new(path))
    }

    fn record() -> SessionRecord {
        SessionRecord::new(RecordSchema::fraud_case())
    }

    #[tokio::test]
    async fn failed_verification_marks_the_case_failed() {
        let temp_dir = TempDir::new().unwrap();
        let store = seed_store(&temp_dir);
        let handler = CompleteInvestigationHandler::new(store.clone());
        let mut record = record();

        let report = handler
            .handle(
                &mut record,
                CompleteInvestigationCommand {
                    username: "jdoe".to_string(),
                    verification_passed: false,
                    transaction_legitimate: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(report.status, CaseStatus::VerificationFailed);
        assert!(report.message.contains("escalated to our security team"));

        // The update is visible on a fresh lookup of the same user.
        let user = store.find_user("JDOE").await.unwrap().unwrap();
        assert_eq!(user.cases[0].status, CaseStatus::VerificationFailed);

        // The record is complete even though the flag is false.
        assert!(record.is_complete());
        assert_eq!(record.flag("verification_passed"), Some(false));
    }

    #[tokio::test]
    async fn denied_transaction_confirms_fraud_and_cites_the_card() {
        let temp_dir = TempDir::new().unwrap();
        let store = seed_store(&temp_dir);
        let handler = CompleteInvestigationHandler::new(store);
        let mut record = record();

        let report = handler
            .handle(
                &mut record,
                CompleteInvestigationCommand {
                    username: "jdoe".to_string(),
                    verification_passed: true,
                    transaction_legitimate: Some(false),
                },
            )
            .await
            .unwrap();

        assert_eq!(report.status, CaseStatus::ConfirmedFraud);
        assert!(report.message.contains("card ending in 4421"));
        assert_eq!(record.flag("transaction_legitimate"), Some(false));
    }

    #[tokio::test]
    async fn confirmed_transaction_is_marked_safe() {
        let temp_dir = TempDir::new().unwrap();
        let store = seed_store(&temp_dir);
        let handler = CompleteInvestigationHandler::new(store);

        let report = handler
            .handle(
                &mut record(),
                CompleteInvestigationCommand {
                    username: "jdoe".to_string(),
                    verification_passed: true,
                    transaction_legitimate: Some(true),
                },
            )
            .await
            .unwrap();

        assert_eq!(report.status, CaseStatus::ConfirmedSafe);
    }

    #[tokio::test]
    async fn unknown_user_is_a_spoken_failure_not_a_crash() {
        let temp_dir = TempDir::new().unwrap();
        let store = seed_store(&temp_dir);
        let handler = CompleteInvestigationHandler::new(store);
        let mut record = record();

        let err = handler
            .handle(
                &mut record,
                CompleteInvestigationCommand {
                    username: "nobody".to_string(),
                    verification_passed: true,
                    transaction_legitimate: Some(true),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, FraudError::CaseNotFound { .. }));
        assert!(err.to_string().contains("Please contact support"));
        // The answers stay on the record for a corrected retry.
        assert_eq!(record.flag("verification_passed"), Some(true));
    }

    #[tokio::test]
    async fn second_resolution_finds_no_pending_case() {
        let temp_dir = TempDir::new().unwrap();
        let store = seed_store(&temp_dir);
        let handler = CompleteInvestigationHandler::new(store);

        let cmd = CompleteInvestigationCommand {
            username: "jdoe".to_string(),
            verification_passed: true,
            transaction_legitimate: Some(true),
        };
        handler.handle(&mut record(), cmd.clone()).await.unwrap();

        let err = handler.handle(&mut record(), cmd).await.unwrap_err();
        assert!(matches!(err, FraudError::NoPendingCase { .. }));
    }
}
