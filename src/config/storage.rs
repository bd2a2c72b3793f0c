//! Storage configuration: where the engine's files live and how rewrites
//! behave.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

/// File layout and write behavior.
///
/// All artifacts live under one data directory with fixed names, matching
/// the persisted-format contract: snapshot directories per domain, one
/// wellness log, one fraud case file, and the read-only content catalogs.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Root directory for all persisted artifacts.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Rewrite shared files via write-temp-then-rename instead of in
    /// place. Off by default: the unlocked read-modify-write is the
    /// reference behavior, and this flag only hardens crash recovery.
    #[serde(default)]
    pub atomic_writes: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            atomic_writes: false,
        }
    }
}

impl StorageConfig {
    /// Snapshot directory for completed coffee orders.
    pub fn orders_dir(&self) -> PathBuf {
        self.data_dir.join("orders")
    }

    /// Snapshot directory for saved leads.
    pub fn leads_dir(&self) -> PathBuf {
        self.data_dir.join("leads")
    }

    /// Snapshot directory for tutor attempts.
    pub fn tutor_sessions_dir(&self) -> PathBuf {
        self.data_dir.join("tutor_sessions")
    }

    /// Snapshot directory for grocery orders.
    pub fn grocery_orders_dir(&self) -> PathBuf {
        self.data_dir.join("grocery_orders")
    }

    /// The wellness append-log file.
    pub fn wellness_log(&self) -> PathBuf {
        self.data_dir.join("wellness_log.json")
    }

    /// The fraud case file.
    pub fn fraud_cases(&self) -> PathBuf {
        self.data_dir.join("fraud_cases.json")
    }

    /// The read-only tutor content catalog.
    pub fn tutor_content(&self) -> PathBuf {
        self.data_dir.join("tutor_content.json")
    }

    /// The read-only FAQ knowledge base.
    pub fn faq_data(&self) -> PathBuf {
        self.data_dir.join("faq.json")
    }

    /// The read-only grocery catalog.
    pub fn grocery_catalog(&self) -> PathBuf {
        self.data_dir.join("grocery_catalog.json")
    }

    /// Validates the storage section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::new("storage.data_dir", "must not be empty"));
        }
        Ok(())
    }

    /// Rebases the layout under a different root, for tests and embedded
    /// hosts.
    pub fn rooted_at<P: AsRef<Path>>(mut self, root: P) -> Self {
        self.data_dir = root.as_ref().to_path_buf();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_hangs_off_the_data_dir() {
        let storage = StorageConfig::default();
        assert_eq!(storage.orders_dir(), PathBuf::from("./data/orders"));
        assert_eq!(storage.wellness_log(), PathBuf::from("./data/wellness_log.json"));
        assert_eq!(storage.fraud_cases(), PathBuf::from("./data/fraud_cases.json"));
        assert!(!storage.atomic_writes);
    }

    #[test]
    fn empty_data_dir_fails_validation() {
        let storage = StorageConfig {
            data_dir: PathBuf::new(),
            atomic_writes: false,
        };
        assert!(storage.validate().is_err());
    }

    #[test]
    fn rooted_at_rebases_every_path() {
        let storage = StorageConfig::default().rooted_at("/tmp/engine");
        assert_eq!(storage.leads_dir(), PathBuf::from("/tmp/engine/leads"));
        assert_eq!(
            storage.tutor_content(),
            PathBuf::from("/tmp/engine/tutor_content.json")
        );
    }
}
