//! File-based Case Store Adapter
//!
//! Loads the whole fraud case file, patches one case in place, and
//! rewrites the file wholesale.

use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::config::StorageConfig;
use crate::domain::fraud::{CaseFile, CaseFileUser, CaseResolution, FraudCase};
use crate::ports::{CaseStore, CaseStoreError};

/// Case store over one JSON file of shape `{"users": [...]}`.
///
/// Reads degrade: a missing file is an empty user set, and a malformed
/// file is an empty user set after the parse failure is logged — lookups
/// then report users as missing rather than failing the interaction.
/// Updates share the check-in log's unlocked read-modify-write semantics
/// and honor the same opt-in atomic rename.
#[derive(Debug, Clone)]
pub struct JsonCaseStore {
    path: PathBuf,
    atomic: bool,
}

impl JsonCaseStore {
    /// Creates a store over the case file at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            atomic: false,
        }
    }

    /// Switches rewrites to write-temp-then-rename.
    pub fn with_atomic_writes(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    /// Creates the store at the configured path honoring the configured
    /// write behavior.
    pub fn from_config(storage: &StorageConfig) -> Self {
        Self::new(storage.fraud_cases()).with_atomic_writes(storage.atomic_writes)
    }

    async fn load(&self) -> Result<CaseFile, CaseStoreError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("Fraud case file not found: {}", self.path.display());
                return Ok(CaseFile::default());
            }
            Err(e) => return Err(CaseStoreError::IoError(e.to_string())),
        };

        match serde_json::from_str(&raw) {
            Ok(file) => Ok(file),
            Err(e) => {
                tracing::warn!(
                    "Could not parse fraud case file at {}: {}",
                    self.path.display(),
                    e
                );
                Ok(CaseFile::default())
            }
        }
    }

    async fn store(&self, file: &CaseFile) -> Result<(), CaseStoreError> {
        let json = serde_json::to_string_pretty(file)
            .map_err(|e| CaseStoreError::SerializationFailed(e.to_string()))?;

        if self.atomic {
            let tmp = self.path.with_extension("json.tmp");
            fs::write(&tmp, &json)
                .await
                .map_err(|e| CaseStoreError::IoError(e.to_string()))?;
            fs::rename(&tmp, &self.path)
                .await
                .map_err(|e| CaseStoreError::IoError(e.to_string()))?;
        } else {
            fs::write(&self.path, &json)
                .await
                .map_err(|e| CaseStoreError::IoError(e.to_string()))?;
        }
        Ok(())
    }
}

#[async_trait]
impl CaseStore for JsonCaseStore {
    async fn find_user(&self, username: &str) -> Result<Option<CaseFileUser>, CaseStoreError> {
        let file = self.load().await?;
        Ok(file.find_user(username).cloned())
    }

    async fn resolve_pending_case(
        &self,
        username: &str,
        resolution: &CaseResolution,
    ) -> Result<FraudCase, CaseStoreError> {
        let mut file = self.load().await?;

        let user = file
            .find_user_mut(username)
            .ok_or_else(|| CaseStoreError::UserNotFound {
                username: username.to_string(),
            })?;

        let case = user
            .cases
            .iter_mut()
            .find(|c| !c.status.is_terminal())
            .ok_or_else(|| CaseStoreError::NoPendingCase {
                username: username.to_string(),
            })?;

        case.resolve(resolution.status, resolution.outcome.clone(), Utc::now())
            .map_err(|e| CaseStoreError::AlreadyResolved {
                case_id: e.case_id,
            })?;
        let updated = case.clone();

        self.store(&file).await?;
        tracing::info!(
            "Updated fraud case {} for {}: {}",
            updated.case_id,
            username,
            updated.status.as_str()
        );
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fraud::CaseStatus;
    use tempfile::TempDir;

    fn seed_file(path: &Path) {
        let raw = serde_json::json!({
            "users": [
                {
                    "userName": "JDoe",
                    "securityQuestion": "First pet's name?",
                    "cases": [
                        {
                            "caseId": "CASE-001",
                            "status": "pending_review",
                            "cardEnding": "4421",
                            "merchant": "TechGear Online"
                        }
                    ]
                },
                {
                    "userName": "asmith",
                    "cases": []
                }
            ]
        });
        std::fs::write(path, serde_json::to_string_pretty(&raw).unwrap()).unwrap();
    }

    fn fraud_resolution() -> CaseResolution {
        CaseResolution::from_verification(false, None, None)
    }

    #[tokio::test]
    async fn find_user_is_case_insensitive() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fraud_cases.json");
        seed_file(&path);

        let store = JsonCaseStore::new(&path);
        let user = store.find_user("jdoe").await.unwrap().unwrap();
        assert_eq!(user.user_name, "JDoe");
        assert!(store.find_user("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn resolving_updates_the_file_for_subsequent_lookups() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fraud_cases.json");
        seed_file(&path);

        let store = JsonCaseStore::new(&path);
        let updated = store
            .resolve_pending_case("jdoe", &fraud_resolution())
            .await
            .unwrap();
        assert_eq!(updated.status, CaseStatus::VerificationFailed);
        assert!(updated.updated_at.is_some());

        // A fresh lookup sees the resolved status and no pending case.
        let user = store.find_user("JDOE").await.unwrap().unwrap();
        assert_eq!(user.cases[0].status, CaseStatus::VerificationFailed);
        assert!(user.first_pending().is_none());
    }

    #[tokio::test]
    async fn rewrite_preserves_unmodeled_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fraud_cases.json");
        seed_file(&path);

        let store = JsonCaseStore::new(&path);
        store
            .resolve_pending_case("jdoe", &fraud_resolution())
            .await
            .unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["users"][0]["securityQuestion"], "First pet's name?");
        assert_eq!(value["users"][0]["cases"][0]["merchant"], "TechGear Online");
        assert_eq!(value["users"][0]["cases"][0]["outcome"], "Customer failed security verification.");
    }

    #[tokio::test]
    async fn missing_user_is_a_typed_failure() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fraud_cases.json");
        seed_file(&path);

        let store = JsonCaseStore::new(&path);
        let err = store
            .resolve_pending_case("nobody", &fraud_resolution())
            .await
            .unwrap_err();
        assert!(matches!(err, CaseStoreError::UserNotFound { .. }));
        assert!(err.to_string().contains("nobody"));
    }

    #[tokio::test]
    async fn user_without_pending_cases_is_a_typed_failure() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fraud_cases.json");
        seed_file(&path);

        let store = JsonCaseStore::new(&path);
        let err = store
            .resolve_pending_case("asmith", &fraud_resolution())
            .await
            .unwrap_err();
        assert!(matches!(err, CaseStoreError::NoPendingCase { .. }));
    }

    #[tokio::test]
    async fn missing_file_reads_as_an_empty_user_set() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonCaseStore::new(temp_dir.path().join("fraud_cases.json"));

        assert!(store.find_user("jdoe").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupt_file_degrades_to_an_empty_user_set() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fraud_cases.json");
        std::fs::write(&path, "][").unwrap();

        let store = JsonCaseStore::new(&path);
        assert!(store.find_user("jdoe").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn atomic_mode_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fraud_cases.json");
        seed_file(&path);

        let store = JsonCaseStore::new(&path).with_atomic_writes(true);
        store
            .resolve_pending_case("jdoe", &fraud_resolution())
            .await
            .unwrap();

        assert!(!path.with_extension("json.tmp").exists());
        let user = store.find_user("jdoe").await.unwrap().unwrap();
        assert_eq!(user.cases[0].status, CaseStatus::VerificationFailed);
    }
}
