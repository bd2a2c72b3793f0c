//! The per-interaction router state machine.
//!
//! One `Router` exists per interaction and moves
//! `Unrouted -> Active(service) -> Terminal`. While active, exactly one
//! service owns the session record; structured updates and extractions all
//! target that record. Switching services (or tutor modes) discards the
//! in-progress record without persisting it.

use thiserror::Error;

use crate::domain::foundation::{InteractionId, ServiceKind, ValidationError};
use crate::domain::record::{RecordSchema, SessionRecord};
use crate::domain::tutoring::TutorMode;

/// Which services this deployment exposes and where unrecognized
/// selections fall back to.
#[derive(Debug, Clone)]
pub struct RoutingPolicy {
    pub fallback: ServiceKind,
    pub enabled: Vec<ServiceKind>,
}

impl Default for RoutingPolicy {
    fn default() -> Self {
        Self {
            fallback: ServiceKind::Chat,
            enabled: ServiceKind::ALL.to_vec(),
        }
    }
}

impl RoutingPolicy {
    /// True when the deployment exposes `service`.
    pub fn is_enabled(&self, service: ServiceKind) -> bool {
        self.enabled.contains(&service)
    }
}

/// Tutor sub-state nested inside the tutor-active state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorFlow {
    pub mode: TutorMode,
    pub concept_id: String,
}

/// The active domain session: the service plus its in-progress record.
#[derive(Debug)]
pub struct ActiveSession {
    pub service: ServiceKind,
    record: Option<SessionRecord>,
    tutor: Option<TutorFlow>,
}

impl ActiveSession {
    fn new(service: ServiceKind) -> Self {
        Self {
            service,
            record: RecordSchema::for_service(service).map(SessionRecord::new),
            tutor: None,
        }
    }
}

/// Router lifecycle states.
#[derive(Debug)]
enum RouterState {
    Unrouted,
    Active(ActiveSession),
    Terminal { persisted: bool },
}

/// Errors surfaced by routing operations. Every message is corrective and
/// user-presentable; the router's state is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("I'm sorry, that's not a valid service. Please choose one of: {available}.")]
    UnknownService { input: String, available: String },

    #[error("This interaction has already been routed")]
    AlreadyRouted,

    #[error("No service is active for this interaction")]
    NotActive,

    #[error("This interaction has ended")]
    Finished,

    #[error("The {expected} service is not active")]
    WrongService { expected: ServiceKind },

    #[error("{0}")]
    Validation(ValidationError),
}

impl From<ValidationError> for RouterError {
    fn from(err: ValidationError) -> Self {
        RouterError::Validation(err)
    }
}

/// The single-active-mode routing state machine.
pub struct Router {
    interaction_id: InteractionId,
    policy: RoutingPolicy,
    state: RouterState,
}

impl Router {
    /// Creates an unrouted router for a new interaction.
    pub fn new(policy: RoutingPolicy) -> Self {
        Self {
            interaction_id: InteractionId::new(),
            policy,
            state: RouterState::Unrouted,
        }
    }

    pub fn interaction_id(&self) -> InteractionId {
        self.interaction_id
    }

    /// Routes from the one-shot connect-time metadata blob.
    ///
    /// The metadata is expected to be a flat JSON object carrying a
    /// `service` key. Absent, unparseable, unknown, or disabled services
    /// all fall back to the policy's fallback service; this path never
    /// rejects, matching its out-of-band nature.
    ///
    /// # Errors
    ///
    /// `AlreadyRouted` / `Finished` when called outside `Unrouted`.
    pub fn route_from_metadata(
        &mut self,
        metadata: Option<&str>,
    ) -> Result<ServiceKind, RouterError> {
        self.ensure_unrouted()?;
        let service = metadata
            .and_then(parse_metadata_service)
            .filter(|s| self.policy.is_enabled(*s))
            .unwrap_or(self.policy.fallback);

        tracing::info!("Routing interaction {} to {}", self.interaction_id, service);
        self.state = RouterState::Active(ActiveSession::new(service));
        Ok(service)
    }

    /// Routes from an explicit in-conversation selection.
    ///
    /// # Errors
    ///
    /// `UnknownService` (state unchanged) when the selection is not a
    /// known, enabled service; `AlreadyRouted` / `Finished` outside
    /// `Unrouted`.
    pub fn select_service(&mut self, input: &str) -> Result<ServiceKind, RouterError> {
        self.ensure_unrouted()?;
        let service = ServiceKind::parse(input)
            .filter(|s| self.policy.is_enabled(*s))
            .ok_or_else(|| RouterError::UnknownService {
                input: input.to_string(),
                available: self.available_services(),
            })?;

        tracing::info!("Routing interaction {} to {}", self.interaction_id, service);
        self.state = RouterState::Active(ActiveSession::new(service));
        Ok(service)
    }

    /// Mid-interaction handoff to a different service.
    ///
    /// The previous service's in-progress record is discarded without
    /// being persisted.
    ///
    /// # Errors
    ///
    /// `UnknownService` for a disabled target; `NotActive` / `Finished`
    /// outside `Active`.
    pub fn switch_service(&mut self, service: ServiceKind) -> Result<(), RouterError> {
        let current = self.active()?;
        if !self.policy.is_enabled(service) {
            return Err(RouterError::UnknownService {
                input: service.to_string(),
                available: self.available_services(),
            });
        }
        tracing::info!(
            "Switching interaction {} from {} to {}, discarding in-progress record",
            self.interaction_id,
            current.service,
            service
        );
        self.state = RouterState::Active(ActiveSession::new(service));
        Ok(())
    }

    /// The active service, if routing has happened.
    pub fn active_service(&self) -> Option<ServiceKind> {
        match &self.state {
            RouterState::Active(session) => Some(session.service),
            _ => None,
        }
    }

    /// The active session record. Chat sessions carry none.
    pub fn record(&self) -> Option<&SessionRecord> {
        match &self.state {
            RouterState::Active(session) => session.record.as_ref(),
            _ => None,
        }
    }

    /// Mutable access to the active session record; this is the only way
    /// updates reach a record, so cross-service writes cannot happen.
    pub fn record_mut(&mut self) -> Option<&mut SessionRecord> {
        match &mut self.state {
            RouterState::Active(session) => session.record.as_mut(),
            _ => None,
        }
    }

    /// The tutor sub-state, when the tutor service is active and a mode
    /// has been chosen.
    pub fn tutor_flow(&self) -> Option<&TutorFlow> {
        match &self.state {
            RouterState::Active(session) => session.tutor.as_ref(),
            _ => None,
        }
    }

    /// Enters or switches the tutor mode sub-state without leaving the
    /// tutor-active state.
    ///
    /// A `None` concept carries the current flow's concept forward. Each
    /// (re)entry starts a fresh attempt record; the previous attempt, if
    /// unsaved, is discarded.
    ///
    /// # Errors
    ///
    /// `WrongService` unless the tutor service is active; `Validation`
    /// when carrying the concept forward without any current flow.
    pub fn enter_tutor_flow(
        &mut self,
        mode: TutorMode,
        concept_id: Option<&str>,
    ) -> Result<TutorFlow, RouterError> {
        let session = match &mut self.state {
            RouterState::Active(session) if session.service == ServiceKind::Tutor => session,
            RouterState::Active(_) | RouterState::Unrouted => {
                return Err(RouterError::WrongService {
                    expected: ServiceKind::Tutor,
                })
            }
            RouterState::Terminal { .. } => return Err(RouterError::Finished),
        };

        let concept_id = match (concept_id, &session.tutor) {
            (Some(concept), _) => concept.to_string(),
            (None, Some(flow)) => flow.concept_id.clone(),
            (None, None) => {
                return Err(ValidationError::empty_field("concept").into());
            }
        };

        let mut record = SessionRecord::new(RecordSchema::tutor_attempt());
        record.set_text("mode", mode.as_str())?;
        record.set_text("concept_id", &concept_id)?;
        session.record = Some(record);

        let flow = TutorFlow { mode, concept_id };
        session.tutor = Some(flow.clone());
        tracing::info!("Tutor flow switched to {} mode", mode);
        Ok(flow)
    }

    /// Ends the interaction.
    ///
    /// `persisted` records whether the session record made it to storage;
    /// an incomplete record is simply dropped, never partially saved.
    ///
    /// # Errors
    ///
    /// `NotActive` when routing never happened, `Finished` when already
    /// terminal.
    pub fn finish(&mut self, persisted: bool) -> Result<(), RouterError> {
        self.active()?;
        tracing::info!(
            "Interaction {} ended (persisted: {})",
            self.interaction_id,
            persisted
        );
        self.state = RouterState::Terminal { persisted };
        Ok(())
    }

    /// True once the interaction has ended.
    pub fn is_terminal(&self) -> bool {
        matches!(self.state, RouterState::Terminal { .. })
    }

    /// Whether the ended interaction persisted its record; `None` while
    /// the interaction is still live.
    pub fn persisted_outcome(&self) -> Option<bool> {
        match self.state {
            RouterState::Terminal { persisted } => Some(persisted),
            _ => None,
        }
    }

    fn ensure_unrouted(&self) -> Result<(), RouterError> {
        match self.state {
            RouterState::Unrouted => Ok(()),
            RouterState::Active(_) => Err(RouterError::AlreadyRouted),
            RouterState::Terminal { .. } => Err(RouterError::Finished),
        }
    }

    fn active(&self) -> Result<&ActiveSession, RouterError> {
        match &self.state {
            RouterState::Active(session) => Ok(session),
            RouterState::Unrouted => Err(RouterError::NotActive),
            RouterState::Terminal { .. } => Err(RouterError::Finished),
        }
    }

    fn available_services(&self) -> String {
        self.policy
            .enabled
            .iter()
            .map(ServiceKind::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn parse_metadata_service(metadata: &str) -> Option<ServiceKind> {
    let value: serde_json::Value = match serde_json::from_str(metadata) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Could not parse interaction metadata: {}", e);
            return None;
        }
    };
    value
        .get("service")
        .and_then(serde_json::Value::as_str)
        .and_then(ServiceKind::parse)
}
