//! Teach-back scoring.
//!
//! A deliberately simple word-overlap heuristic, not semantic
//! understanding: it is deterministic and produces bit-identical scores for
//! identical inputs, which the tests rely on.

use std::collections::HashSet;

/// Result of scoring a user's explanation against reference material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Coverage score in `0..=100`.
    pub score: i64,
    /// Fixed feedback tier for the score.
    pub feedback: &'static str,
}

/// Minimum word count below which an explanation is penalized as too short.
const SHORT_EXPLANATION_WORDS: usize = 20;

/// Points deducted for an explanation under the word-count floor.
const SHORT_EXPLANATION_PENALTY: i64 = 20;

/// Scores `candidate` against `reference` by lowercase word-set coverage.
///
/// Both texts are split on whitespace into lowercase word sets (duplicates
/// collapse); the score is the rounded percentage of reference words that
/// appear in the candidate, minus a flat penalty when the candidate runs
/// under twenty words (pre-deduplication), floored at zero. An empty
/// reference scores zero.
pub fn evaluate_explanation(reference: &str, candidate: &str) -> Evaluation {
    let reference_words: HashSet<String> = word_set(reference);
    let candidate_words: HashSet<String> = word_set(candidate);

    let coverage = if reference_words.is_empty() {
        0.0
    } else {
        let common = reference_words.intersection(&candidate_words).count();
        common as f64 / reference_words.len() as f64
    };

    let mut score = (coverage * 100.0).round() as i64;

    if candidate.split_whitespace().count() < SHORT_EXPLANATION_WORDS {
        score = (score - SHORT_EXPLANATION_PENALTY).max(0);
    }

    Evaluation {
        score,
        feedback: feedback_for(score),
    }
}

// Exact boundary values belong to the tier below them going down: an 80
// is excellent, a 60 is good.
fn feedback_for(score: i64) -> &'static str {
    if score >= 80 {
        "Excellent explanation! You covered the key concepts very well."
    } else if score >= 60 {
        "Good effort! You got the main ideas, but could add more detail on some aspects."
    } else if score >= 40 {
        "You're on the right track, but your explanation is missing some important points."
    } else {
        "Your explanation needs more detail. Try to cover the core concepts more thoroughly."
    }
}

fn word_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(ToOwned::to_owned)
        .collect()
}
