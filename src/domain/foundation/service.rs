//! The fixed enumeration of conversation services a deployment can route to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// One of the supported interaction types.
///
/// `Sdr` and `Fraud` may be disabled per deployment; the routing
/// configuration decides which members of this set are reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Chat,
    Barista,
    Wellness,
    Tutor,
    Sdr,
    Fraud,
}

impl ServiceKind {
    /// Every service the engine knows about, in presentation order.
    pub const ALL: [ServiceKind; 6] = [
        ServiceKind::Chat,
        ServiceKind::Barista,
        ServiceKind::Wellness,
        ServiceKind::Tutor,
        ServiceKind::Sdr,
        ServiceKind::Fraud,
    ];

    /// Parses a spoken or configured service identifier.
    ///
    /// Matching is case-insensitive and trims surrounding whitespace;
    /// "coffee" is accepted as an alias for the barista service. Returns
    /// `None` for anything outside the known set.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "chat" => Some(ServiceKind::Chat),
            "coffee" | "barista" => Some(ServiceKind::Barista),
            "wellness" => Some(ServiceKind::Wellness),
            "tutor" => Some(ServiceKind::Tutor),
            "sdr" => Some(ServiceKind::Sdr),
            "fraud" => Some(ServiceKind::Fraud),
            _ => None,
        }
    }

    /// Canonical lowercase identifier, used in config and snapshot prefixes.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Chat => "chat",
            ServiceKind::Barista => "barista",
            ServiceKind::Wellness => "wellness",
            ServiceKind::Tutor => "tutor",
            ServiceKind::Sdr => "sdr",
            ServiceKind::Fraud => "fraud",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ServiceKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceKind::parse(s)
            .ok_or_else(|| ValidationError::invalid_format("service", format!("'{}' is not a known service", s)))
    }
}
