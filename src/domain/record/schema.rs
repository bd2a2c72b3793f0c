//! Per-service record schemas.

use crate::domain::foundation::ServiceKind;

use super::field::{FieldKind, FieldSpec};

/// Ordered field layout for one service's session record.
///
/// Field order is meaningful: `missing_fields` reports labels in schema
/// order, and persisted payloads serialize fields in schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    name: &'static str,
    fields: &'static [FieldSpec],
}

const ORDER_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("drink_type", "drinkType", "drink type", FieldKind::Text),
    FieldSpec::required("size", "size", "size", FieldKind::Text),
    FieldSpec::required("milk", "milk", "milk preference", FieldKind::Text),
    FieldSpec::optional("extras", "extras", "extras", FieldKind::List),
    FieldSpec::required("name", "name", "name", FieldKind::Text),
];

const WELLNESS_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("mood", "mood", "mood", FieldKind::Text),
    FieldSpec::required("energy_level", "energyLevel", "energy level", FieldKind::Text),
    FieldSpec::optional("stress_factors", "stressFactors", "stress factors", FieldKind::Text),
    FieldSpec::required("objectives", "objectives", "daily objectives", FieldKind::List),
    FieldSpec::optional(
        "self_care_intentions",
        "selfCareIntentions",
        "self-care intentions",
        FieldKind::Text,
    ),
];

const LEAD_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", "name", "name", FieldKind::Text),
    FieldSpec::required("company", "company", "company", FieldKind::Text),
    FieldSpec::required("email", "email", "email", FieldKind::Text),
    FieldSpec::required("role", "role", "role", FieldKind::Text),
    FieldSpec::required("use_case", "useCase", "use case", FieldKind::Text),
    FieldSpec::optional("team_size", "teamSize", "team size", FieldKind::Text),
    FieldSpec::optional("timeline", "timeline", "timeline", FieldKind::Text),
];

const FRAUD_CASE_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("username", "username", "username", FieldKind::Text),
    FieldSpec::required(
        "verification_passed",
        "verificationPassed",
        "verification result",
        FieldKind::Flag,
    ),
    // Unset means the customer never confirmed or denied the transaction.
    FieldSpec::optional(
        "transaction_legitimate",
        "transactionLegitimate",
        "transaction confirmation",
        FieldKind::Flag,
    ),
];

const TUTOR_ATTEMPT_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("mode", "mode", "learning mode", FieldKind::Text),
    FieldSpec::required("concept_id", "conceptId", "concept", FieldKind::Text),
    FieldSpec::optional("score", "score", "score", FieldKind::Number),
    FieldSpec::optional("feedback", "feedback", "feedback", FieldKind::Text),
];

impl RecordSchema {
    /// Coffee order: drink type, size, milk, and a name, plus extras.
    pub fn order() -> Self {
        Self {
            name: "order",
            fields: ORDER_FIELDS,
        }
    }

    /// Wellness check-in: mood, energy, and at least one objective.
    pub fn wellness() -> Self {
        Self {
            name: "wellness",
            fields: WELLNESS_FIELDS,
        }
    }

    /// Sales lead: contact details and a use case.
    pub fn lead() -> Self {
        Self {
            name: "lead",
            fields: LEAD_FIELDS,
        }
    }

    /// Fraud investigation outcome for one customer.
    pub fn fraud_case() -> Self {
        Self {
            name: "fraud_case",
            fields: FRAUD_CASE_FIELDS,
        }
    }

    /// One tutoring attempt in a given mode against a concept.
    pub fn tutor_attempt() -> Self {
        Self {
            name: "tutor_attempt",
            fields: TUTOR_ATTEMPT_FIELDS,
        }
    }

    /// The schema backing a service's session record, if the service
    /// collects one (general chat does not).
    pub fn for_service(service: ServiceKind) -> Option<Self> {
        match service {
            ServiceKind::Chat => None,
            ServiceKind::Barista => Some(Self::order()),
            ServiceKind::Wellness => Some(Self::wellness()),
            ServiceKind::Sdr => Some(Self::lead()),
            ServiceKind::Fraud => Some(Self::fraud_case()),
            ServiceKind::Tutor => Some(Self::tutor_attempt()),
        }
    }

    /// Schema name, used as the default snapshot filename prefix.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Looks up a field spec by internal name.
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_schema_requires_four_fields() {
        let schema = RecordSchema::order();
        let required: Vec<_> = schema
            .fields()
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();
        assert_eq!(required, vec!["drink_type", "size", "milk", "name"]);
    }

    #[test]
    fn wellness_objectives_are_a_required_list() {
        let schema = RecordSchema::wellness();
        let spec = schema.field("objectives").unwrap();
        assert!(spec.required);
        assert_eq!(spec.kind, FieldKind::List);
    }

    #[test]
    fn fraud_transaction_confirmation_is_optional() {
        let schema = RecordSchema::fraud_case();
        assert!(!schema.field("transaction_legitimate").unwrap().required);
        assert!(schema.field("verification_passed").unwrap().required);
    }

    #[test]
    fn chat_has_no_record_schema() {
        assert!(RecordSchema::for_service(ServiceKind::Chat).is_none());
        assert!(RecordSchema::for_service(ServiceKind::Barista).is_some());
    }

    #[test]
    fn wire_names_are_camel_case() {
        let schema = RecordSchema::lead();
        assert_eq!(schema.field("use_case").unwrap().wire, "useCase");
        assert_eq!(schema.field("team_size").unwrap().wire, "teamSize");
    }
}
