//! Fraud investigation: the case file model, case status transitions, and
//! resolution of an investigation into a status change.

mod case;
mod resolution;

pub use case::{CaseFile, CaseFileUser, CaseStatus, CaseTransitionError, FraudCase};
pub use resolution::CaseResolution;
