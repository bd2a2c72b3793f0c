//! Tutor handlers - start or switch a learning flow, record attempts,
//! score teach-back explanations

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::Value;

use crate::application::router::{Router, RouterError, TutorFlow};
use crate::domain::foundation::ValidationError;
use crate::domain::tutoring::{
    evaluate_explanation, format_attempt_summary, mode_briefing, Concept, TutorMode,
};
use crate::ports::{ConceptCatalog, SnapshotStore, SnapshotStoreError};

/// Command selecting a learning mode and concept.
///
/// `concept` names the concept by id or title; `None` carries the current
/// flow's concept forward on a mode switch.
#[derive(Debug, Clone)]
pub struct StartFlowCommand {
    pub mode: String,
    pub concept: Option<String>,
}

/// Result of entering a learning flow.
#[derive(Debug, Clone)]
pub struct FlowStarted {
    pub mode: TutorMode,
    pub concept: Concept,
    /// Mode instructions for the language-generation collaborator.
    pub briefing: String,
    /// Spoken acknowledgement of the switch.
    pub reply: String,
}

/// Error type for tutor operations
#[derive(Debug, thiserror::Error)]
pub enum TutorError {
    #[error("I'm sorry, that's not a valid mode. Please choose 'learn', 'quiz', or 'teach_back'.")]
    InvalidMode { input: String },

    #[error("I couldn't find that concept. Available concepts are: {}", .available.join(", "))]
    UnknownConcept { available: Vec<String> },

    #[error("No learning flow is active; choose a mode and concept first")]
    NoActiveFlow,

    #[error(transparent)]
    Routing(RouterError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Could not save the session: {0}")]
    Storage(#[from] SnapshotStoreError),
}

impl From<RouterError> for TutorError {
    fn from(err: RouterError) -> Self {
        TutorError::Routing(err)
    }
}

/// Handler entering or switching the tutor's nested mode flow.
pub struct StartFlowHandler {
    catalog: Arc<dyn ConceptCatalog>,
}

impl StartFlowHandler {
    pub fn new(catalog: Arc<dyn ConceptCatalog>) -> Self {
        Self { catalog }
    }

    /// Validates the mode and concept, then drives the router's tutor
    /// sub-state. The router state is untouched on any rejection.
    ///
    /// # Errors
    ///
    /// `InvalidMode` for an out-of-enumeration mode; `UnknownConcept`
    /// (listing what is available) when the concept cannot be resolved.
    pub async fn handle(
        &self,
        router: &mut Router,
        cmd: StartFlowCommand,
    ) -> Result<FlowStarted, TutorError> {
        let mode = TutorMode::parse(&cmd.mode).map_err(|_| TutorError::InvalidMode {
            input: cmd.mode.clone(),
        })?;

        let concept_key = match &cmd.concept {
            Some(key) if !key.trim().is_empty() => key.clone(),
            _ => match router.tutor_flow() {
                Some(flow) => flow.concept_id.clone(),
                None => {
                    return Err(TutorError::UnknownConcept {
                        available: self.catalog.titles().await,
                    })
                }
            },
        };

        let concept = match self.catalog.find(&concept_key).await {
            Some(concept) => concept,
            None => {
                return Err(TutorError::UnknownConcept {
                    available: self.catalog.titles().await,
                })
            }
        };

        router.enter_tutor_flow(mode, Some(&concept.id))?;

        let reply = match mode {
            TutorMode::Learn => format!(
                "Great! Let me teach you about {}. Switching to Learn Mode...",
                concept.title
            ),
            TutorMode::Quiz => format!(
                "Perfect! Let's test your knowledge of {}. Switching to Quiz Mode...",
                concept.title
            ),
            TutorMode::TeachBack => format!(
                "Excellent! I'm ready to learn about {} from you. Switching to Teach-Back Mode...",
                concept.title
            ),
        };

        Ok(FlowStarted {
            mode,
            concept: concept.clone(),
            briefing: mode_briefing(mode, &concept),
            reply,
        })
    }
}

/// Command completing a learn or quiz attempt.
#[derive(Debug, Clone)]
pub struct RecordAttemptCommand {
    /// What the user said or answered during the attempt.
    pub user_response: String,
    /// The collaborator's summary of how the attempt went.
    pub feedback: String,
}

/// Result of a persisted attempt.
#[derive(Debug, Clone)]
pub struct AttemptReceipt {
    pub summary: String,
    pub saved_to: PathBuf,
}

/// Handler persisting completed learn/quiz attempts.
pub struct RecordAttemptHandler {
    catalog: Arc<dyn ConceptCatalog>,
    snapshots: Arc<dyn SnapshotStore>,
}

impl RecordAttemptHandler {
    pub fn new(catalog: Arc<dyn ConceptCatalog>, snapshots: Arc<dyn SnapshotStore>) -> Self {
        Self { catalog, snapshots }
    }

    /// Writes the attempt snapshot for the router's active flow.
    ///
    /// # Errors
    ///
    /// `NoActiveFlow` when no mode has been entered; `Storage` leaves the
    /// record intact for a retry.
    pub async fn handle(
        &self,
        router: &mut Router,
        cmd: RecordAttemptCommand,
    ) -> Result<AttemptReceipt, TutorError> {
        let flow = router.tutor_flow().cloned().ok_or(TutorError::NoActiveFlow)?;
        let concept_title = self
            .catalog
            .find(&flow.concept_id)
            .await
            .map(|c| c.title)
            .unwrap_or_else(|| flow.concept_id.clone());

        let record = router.record_mut().ok_or(TutorError::NoActiveFlow)?;
        if !cmd.feedback.trim().is_empty() {
            record.set_text("feedback", &cmd.feedback)?;
        }

        let mut payload = record.payload();
        payload.insert(
            "conceptTitle".to_string(),
            Value::String(concept_title.clone()),
        );
        payload.insert(
            "userResponse".to_string(),
            Value::String(cmd.user_response),
        );

        let prefix = attempt_prefix(&flow);
        let saved_to = self.snapshots.save(&prefix, payload).await?;

        Ok(AttemptReceipt {
            summary: format_attempt_summary(
                flow.mode,
                &concept_title,
                None,
                record.text("feedback"),
            ),
            saved_to,
        })
    }
}

/// Command scoring a teach-back explanation.
#[derive(Debug, Clone)]
pub struct EvaluateExplanationCommand {
    pub explanation: String,
}

/// Result of a scored teach-back attempt.
#[derive(Debug, Clone)]
pub struct EvaluationReport {
    pub score: i64,
    pub feedback: String,
    /// Spoken response combining score, feedback, and encouragement.
    pub reply: String,
    pub saved_to: PathBuf,
}

/// Handler scoring teach-back explanations and persisting the attempt.
pub struct EvaluateExplanationHandler {
    catalog: Arc<dyn ConceptCatalog>,
    snapshots: Arc<dyn SnapshotStore>,
}

impl EvaluateExplanationHandler {
    pub fn new(catalog: Arc<dyn ConceptCatalog>, snapshots: Arc<dyn SnapshotStore>) -> Self {
        Self { catalog, snapshots }
    }

    /// Scores the explanation against the flow's concept summary, stores
    /// score and feedback on the record, and writes the attempt snapshot.
    ///
    /// # Errors
    ///
    /// `NoActiveFlow` outside a teach-back flow; `UnknownConcept` when the
    /// flow's concept has vanished from the catalog (it is re-read on
    /// every access); `Storage` leaves the scored record intact.
    pub async fn handle(
        &self,
        router: &mut Router,
        cmd: EvaluateExplanationCommand,
    ) -> Result<EvaluationReport, TutorError> {
        let flow = router.tutor_flow().cloned().ok_or(TutorError::NoActiveFlow)?;
        let concept = match self.catalog.find(&flow.concept_id).await {
            Some(concept) => concept,
            None => {
                return Err(TutorError::UnknownConcept {
                    available: self.catalog.titles().await,
                })
            }
        };

        let evaluation = evaluate_explanation(&concept.summary, &cmd.explanation);

        let record = router.record_mut().ok_or(TutorError::NoActiveFlow)?;
        record.set_number("score", evaluation.score)?;
        record.set_text("feedback", evaluation.feedback)?;

        let mut payload = record.payload();
        payload.insert(
            "conceptTitle".to_string(),
            Value::String(concept.title.clone()),
        );
        payload.insert(
            "userResponse".to_string(),
            Value::String(cmd.explanation),
        );

        let prefix = attempt_prefix(&flow);
        let saved_to = self.snapshots.save(&prefix, payload).await?;

        let mut reply = format!(
            "Thank you for teaching me about {}! I'd give your explanation a score of {} \
             out of 100. {}",
            concept.title, evaluation.score, evaluation.feedback
        );
        reply.push(' ');
        reply.push_str(if evaluation.score >= 80 {
            "You clearly understand this concept well!"
        } else if evaluation.score >= 60 {
            "You're getting there - maybe review the material once more."
        } else {
            "I think reviewing this concept in Learn mode might help solidify your understanding."
        });

        Ok(EvaluationReport {
            score: evaluation.score,
            feedback: evaluation.feedback.to_string(),
            reply,
            saved_to,
        })
    }
}

fn attempt_prefix(flow: &TutorFlow) -> String {
    format!("tutor_{}_{}", flow.mode.as_str(), flow.concept_id)
}
