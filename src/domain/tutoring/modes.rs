//! Learning modes and the briefing text each mode hands to the
//! language-generation collaborator.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

use super::Concept;

/// The three tutoring modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TutorMode {
    /// The tutor explains the concept to the user.
    Learn,
    /// The tutor questions the user about the concept.
    Quiz,
    /// The user explains the concept back and gets scored.
    TeachBack,
}

impl TutorMode {
    /// Parses a spoken or typed mode selection.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input.trim().to_lowercase().as_str() {
            "learn" => Ok(TutorMode::Learn),
            "quiz" => Ok(TutorMode::Quiz),
            "teach_back" | "teach back" | "teachback" => Ok(TutorMode::TeachBack),
            other => Err(ValidationError::invalid_format(
                "mode",
                format!("'{}' is not one of learn, quiz, teach_back", other),
            )),
        }
    }

    /// Canonical identifier, used in snapshot filenames and payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            TutorMode::Learn => "learn",
            TutorMode::Quiz => "quiz",
            TutorMode::TeachBack => "teach_back",
        }
    }

    /// Title-case display name.
    pub fn title(&self) -> &'static str {
        match self {
            TutorMode::Learn => "Learn",
            TutorMode::Quiz => "Quiz",
            TutorMode::TeachBack => "Teach-Back",
        }
    }
}

impl fmt::Display for TutorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Builds the instruction briefing for a mode over a concept.
///
/// The briefing is advisory text consumed by the language-generation
/// collaborator; it is deterministic for a given mode and concept.
pub fn mode_briefing(mode: TutorMode, concept: &Concept) -> String {
    match mode {
        TutorMode::Learn => format!(
            "You are teaching the concept of '{}'.\n\n\
             Here's what you need to explain:\n{}\n\n\
             Explain this concept clearly and engagingly. Use examples and analogies \
             to make it easy to understand. Keep your explanation conversational and \
             check if the user has any questions before moving on.",
            concept.title, concept.summary
        ),
        TutorMode::Quiz => format!(
            "You are quizzing the user on '{}'.\n\n\
             Concept summary:\n{}\n\n\
             Sample question: {}\n\n\
             Ask the user questions about this concept. You can use the sample question \
             or create your own based on the summary. Listen to their answer, provide \
             feedback on whether it's correct, and explain any misconceptions. \
             Be encouraging and educational.",
            concept.title, concept.summary, concept.sample_question
        ),
        TutorMode::TeachBack => format!(
            "You are asking the user to teach YOU about '{}'.\n\n\
             Here's what they should explain:\n{}\n\n\
             Ask them to explain the concept back to you as if they're teaching it. \
             Listen carefully to their explanation. When they're done, score their \
             explanation and provide constructive feedback. Be supportive and \
             encouraging. If they miss key points, gently guide them to think about \
             those aspects.",
            concept.title, concept.summary
        ),
    }
}

/// One-line summary of a saved tutoring attempt.
pub fn format_attempt_summary(
    mode: TutorMode,
    concept_title: &str,
    score: Option<i64>,
    feedback: Option<&str>,
) -> String {
    let mut summary = format!("Mode: {}, Concept: {}", mode.title(), concept_title);
    if let Some(score) = score {
        summary.push_str(&format!(", Score: {}/100", score));
    }
    if let Some(feedback) = feedback {
        summary.push_str(&format!(". Feedback: {}", feedback));
    }
    summary
}
