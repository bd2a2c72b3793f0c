//! Routing configuration: which services this deployment exposes.

use serde::Deserialize;

use crate::application::RoutingPolicy;
use crate::domain::foundation::ServiceKind;

use super::error::ValidationError;

fn default_fallback() -> ServiceKind {
    ServiceKind::Chat
}

fn default_enabled() -> Vec<ServiceKind> {
    ServiceKind::ALL.to_vec()
}

/// Which services are reachable and where unrecognized selections land.
///
/// `sdr` and `fraud` are the usual candidates for trimming per
/// deployment; the fallback must itself be enabled.
#[derive(Debug, Clone, Deserialize)]
pub struct RoutingConfig {
    #[serde(default = "default_fallback")]
    pub fallback: ServiceKind,

    #[serde(default = "default_enabled")]
    pub enabled: Vec<ServiceKind>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            fallback: default_fallback(),
            enabled: default_enabled(),
        }
    }
}

impl RoutingConfig {
    /// Validates the routing section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.enabled.is_empty() {
            return Err(ValidationError::new("routing.enabled", "must not be empty"));
        }
        if !self.enabled.contains(&self.fallback) {
            return Err(ValidationError::new(
                "routing.fallback",
                format!("fallback service '{}' is not enabled", self.fallback),
            ));
        }
        Ok(())
    }

    /// The policy handed to each new interaction's router.
    pub fn policy(&self) -> RoutingPolicy {
        RoutingPolicy {
            fallback: self.fallback,
            enabled: self.enabled.clone(),
        }
    }
}
