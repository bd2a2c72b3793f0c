//! The fraud case file: users, their cases, and case status transitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Lifecycle status of a fraud case.
///
/// A case starts in `PendingReview` and is resolved exactly once into one
/// of the three terminal statuses; terminal cases never transition again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    PendingReview,
    VerificationFailed,
    ConfirmedSafe,
    ConfirmedFraud,
}

impl CaseStatus {
    /// Wire identifier, as stored in the case file.
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::PendingReview => "pending_review",
            CaseStatus::VerificationFailed => "verification_failed",
            CaseStatus::ConfirmedSafe => "confirmed_safe",
            CaseStatus::ConfirmedFraud => "confirmed_fraud",
        }
    }

    /// True when no further transitions are allowed.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, CaseStatus::PendingReview)
    }

    /// True if a case in this status may move to `target`.
    pub fn can_transition_to(&self, target: CaseStatus) -> bool {
        matches!(self, CaseStatus::PendingReview) && target.is_terminal()
    }
}

/// Attempted transition out of a terminal status, or into `PendingReview`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Case {case_id} cannot move from {from:?} to {to:?}")]
pub struct CaseTransitionError {
    pub case_id: String,
    pub from: CaseStatus,
    pub to: CaseStatus,
}

/// One fraud case attached to a user in the case file.
///
/// Unmodeled keys (transaction details, card metadata, timestamps the
/// engine never touches) are preserved verbatim across the whole-file
/// rewrite via the flattened `extra` map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudCase {
    pub case_id: String,
    pub status: CaseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_ending: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FraudCase {
    /// Applies a resolved status and outcome, stamping `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `CaseTransitionError` when the case is not pending review;
    /// resolution happens exactly once per case.
    pub fn resolve(
        &mut self,
        status: CaseStatus,
        outcome: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Result<(), CaseTransitionError> {
        if !self.status.can_transition_to(status) {
            return Err(CaseTransitionError {
                case_id: self.case_id.clone(),
                from: self.status,
                to: status,
            });
        }
        self.status = status;
        self.outcome = Some(outcome.into());
        self.updated_at = Some(at);
        Ok(())
    }
}

/// A customer in the case file, owning zero or more cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseFileUser {
    pub user_name: String,
    #[serde(default)]
    pub cases: Vec<FraudCase>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CaseFileUser {
    /// The first case still pending review, if any.
    pub fn first_pending(&self) -> Option<&FraudCase> {
        self.cases
            .iter()
            .find(|c| c.status == CaseStatus::PendingReview)
    }
}

/// The whole durable fraud case collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseFile {
    #[serde(default)]
    pub users: Vec<CaseFileUser>,
}

impl CaseFile {
    /// Looks up a user by name, case-insensitively.
    pub fn find_user(&self, username: &str) -> Option<&CaseFileUser> {
        self.users
            .iter()
            .find(|u| u.user_name.eq_ignore_ascii_case(username.trim()))
    }

    /// Mutable variant of [`CaseFile::find_user`].
    pub fn find_user_mut(&mut self, username: &str) -> Option<&mut CaseFileUser> {
        self.users
            .iter_mut()
            .find(|u| u.user_name.eq_ignore_ascii_case(username.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending_case(id: &str) -> FraudCase {
        FraudCase {
            case_id: id.to_string(),
            status: CaseStatus::PendingReview,
            outcome: None,
            card_ending: Some("4421".to_string()),
            updated_at: None,
            extra: Map::new(),
        }
    }

    fn case_file() -> CaseFile {
        CaseFile {
            users: vec![CaseFileUser {
                user_name: "JDoe".to_string(),
                cases: vec![pending_case("CASE-001")],
                extra: Map::new(),
            }],
        }
    }

    #[test]
    fn pending_resolves_exactly_once() {
        let mut case = pending_case("CASE-001");
        case.resolve(
            CaseStatus::ConfirmedFraud,
            "Customer denied the transaction. Fraud confirmed.",
            Utc::now(),
        )
        .unwrap();
        assert_eq!(case.status, CaseStatus::ConfirmedFraud);
        assert!(case.updated_at.is_some());

        let err = case
            .resolve(CaseStatus::ConfirmedSafe, "changed our mind", Utc::now())
            .unwrap_err();
        assert_eq!(err.from, CaseStatus::ConfirmedFraud);
        assert_eq!(case.status, CaseStatus::ConfirmedFraud);
    }

    #[test]
    fn no_transition_back_to_pending() {
        assert!(!CaseStatus::ConfirmedSafe.can_transition_to(CaseStatus::PendingReview));
        assert!(!CaseStatus::PendingReview.can_transition_to(CaseStatus::PendingReview));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let file = case_file();
        assert!(file.find_user("jdoe").is_some());
        assert!(file.find_user(" JDOE ").is_some());
        assert!(file.find_user("nobody").is_none());
    }

    #[test]
    fn first_pending_skips_resolved_cases() {
        let mut file = case_file();
        let user = file.find_user_mut("jdoe").unwrap();
        user.cases[0]
            .resolve(CaseStatus::ConfirmedSafe, "ok", Utc::now())
            .unwrap();
        assert!(user.first_pending().is_none());

        user.cases.push(pending_case("CASE-002"));
        assert_eq!(user.first_pending().unwrap().case_id, "CASE-002");
    }

    #[test]
    fn unknown_keys_survive_a_round_trip() {
        let raw = serde_json::json!({
            "users": [{
                "userName": "jdoe",
                "securityQuestion": "First pet's name?",
                "cases": [{
                    "caseId": "CASE-001",
                    "status": "pending_review",
                    "cardEnding": "4421",
                    "amount": "$129.99",
                    "merchant": "TechGear Online"
                }]
            }]
        });
        let file: CaseFile = serde_json::from_value(raw.clone()).unwrap();
        let back = serde_json::to_value(&file).unwrap();
        assert_eq!(back["users"][0]["securityQuestion"], "First pet's name?");
        assert_eq!(back["users"][0]["cases"][0]["merchant"], "TechGear Online");
        assert_eq!(raw["users"][0]["cases"][0]["amount"], back["users"][0]["cases"][0]["amount"]);
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(CaseStatus::VerificationFailed).unwrap(),
            "verification_failed"
        );
    }
}
