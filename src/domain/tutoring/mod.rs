//! Tutoring: concepts, learning modes, and teach-back evaluation.

mod concept;
mod evaluator;
mod modes;

pub use concept::Concept;
pub use evaluator::{evaluate_explanation, Evaluation};
pub use modes::{format_attempt_summary, mode_briefing, TutorMode};
