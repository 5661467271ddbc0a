//! Output data model shared by the local engine and the LLM scorer.
//!
//! The JSON field names here are the one bit-exact contract of the service:
//! both scorer backends produce this shape and the frontend parses it.

use serde::{Deserialize, Serialize};

/// The three component scores behind the aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubScores {
    pub keywords: u32,
    pub impact: u32,
    pub readability: u32,
}

/// Full analysis report returned to callers. Built fresh per request,
/// immutable once returned, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Aggregate 0–100 compatibility score.
    pub ats_score: u32,
    pub sub_scores: SubScores,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    /// First-seen order, deduplicated, at most 10 entries.
    pub missing_keywords: Vec<String>,
}
