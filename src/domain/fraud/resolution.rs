//! Mapping an investigation's answers onto a case resolution.

use super::CaseStatus;

/// The resolved outcome of a fraud investigation.
///
/// `status` and `outcome` are written to the case file; `action_message` is
/// the customer-facing explanation of what happens next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseResolution {
    pub status: CaseStatus,
    pub outcome: String,
    pub action_message: String,
}

impl CaseResolution {
    /// Derives the resolution from the investigation's two answers.
    ///
    /// Failed verification always wins; with verification passed, the
    /// customer's confirmation or denial decides, and no answer at all
    /// leaves the investigation incomplete (treated as a verification
    /// failure for escalation).
    pub fn from_verification(
        verification_passed: bool,
        transaction_legitimate: Option<bool>,
        card_ending: Option<&str>,
    ) -> Self {
        if !verification_passed {
            return Self {
                status: CaseStatus::VerificationFailed,
                outcome: "Customer failed security verification.".to_string(),
                action_message: "Since we couldn't verify your identity, this case will be \
                                 escalated to our security team."
                    .to_string(),
            };
        }
        match transaction_legitimate {
            Some(true) => Self {
                status: CaseStatus::ConfirmedSafe,
                outcome: "Customer confirmed the transaction was legitimate.".to_string(),
                action_message: "Perfect! We've marked this transaction as safe. No action is \
                                 needed."
                    .to_string(),
            },
            Some(false) => Self {
                status: CaseStatus::ConfirmedFraud,
                outcome: "Customer denied the transaction. Fraud confirmed.".to_string(),
                action_message: format!(
                    "We've immediately blocked your card ending in {}. A new card will be \
                     mailed to you within 3-5 business days.",
                    card_ending.unwrap_or("****")
                ),
            },
            None => Self {
                status: CaseStatus::VerificationFailed,
                outcome: "Investigation incomplete.".to_string(),
                action_message: "This case will require additional review.".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_verification_escalates() {
        let resolution = CaseResolution::from_verification(false, Some(true), None);
        assert_eq!(resolution.status, CaseStatus::VerificationFailed);
        assert_eq!(resolution.outcome, "Customer failed security verification.");
    }

    #[test]
    fn confirmed_transaction_is_safe() {
        let resolution = CaseResolution::from_verification(true, Some(true), None);
        assert_eq!(resolution.status, CaseStatus::ConfirmedSafe);
        assert!(resolution.action_message.contains("No action is needed"));
    }

    #[test]
    fn denied_transaction_is_fraud_and_cites_the_card() {
        let resolution = CaseResolution::from_verification(true, Some(false), Some("4421"));
        assert_eq!(resolution.status, CaseStatus::ConfirmedFraud);
        assert!(resolution.action_message.contains("card ending in 4421"));
    }

    #[test]
    fn denied_transaction_without_card_masks_the_ending() {
        let resolution = CaseResolution::from_verification(true, Some(false), None);
        assert!(resolution.action_message.contains("card ending in ****"));
    }

    #[test]
    fn no_answer_leaves_investigation_incomplete() {
        let resolution = CaseResolution::from_verification(true, None, None);
        assert_eq!(resolution.status, CaseStatus::VerificationFailed);
        assert_eq!(resolution.outcome, "Investigation incomplete.");
    }
}
