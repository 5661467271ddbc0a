//! Scorer — pluggable, trait-based scoring backends behind one contract.
//!
//! `LlmScorer` is the first-choice backend when an API key is configured;
//! `LocalScorer` is total and never fails. `FallbackScorer` composes the two:
//! any remote failure silently degrades to the local engine, never to the user.
//!
//! `AppState` holds an `Arc<dyn Scorer>`, selected once at startup.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::prompts::{ANALYZE_PROMPT_TEMPLATE, ANALYZE_SYSTEM};
use crate::llm_client::LlmClient;
use crate::scoring::engine::score_resume;
use crate::scoring::report::ScoreReport;

/// A scoring backend. Both backends honor the same `ScoreReport` JSON shape,
/// so callers never know which one produced a response.
#[async_trait]
pub trait Scorer: Send + Sync {
    async fn score(&self, resume_text: &str, jd_text: &str) -> Result<ScoreReport, AppError>;
}

/// The deterministic local engine. Total: this impl never returns `Err`.
pub struct LocalScorer;

#[async_trait]
impl Scorer for LocalScorer {
    async fn score(&self, resume_text: &str, jd_text: &str) -> Result<ScoreReport, AppError> {
        Ok(score_resume(resume_text, jd_text))
    }
}

/// Remote scorer via the Gemini API. Fails on any network, API, or
/// malformed-JSON problem; always composed with a fallback.
pub struct LlmScorer {
    llm: LlmClient,
}

impl LlmScorer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Scorer for LlmScorer {
    async fn score(&self, resume_text: &str, jd_text: &str) -> Result<ScoreReport, AppError> {
        let prompt = ANALYZE_PROMPT_TEMPLATE
            .replace("{resume_text}", resume_text)
            .replace("{jd_text}", jd_text);

        self.llm
            .call_json::<ScoreReport>(&prompt, ANALYZE_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Remote analysis failed: {e}")))
    }
}

/// Try `primary`; on any error, log and return `fallback`'s result.
/// No retry here (the LLM client retries internally) and no blending of
/// partial results.
pub struct FallbackScorer {
    primary: Arc<dyn Scorer>,
    fallback: Arc<dyn Scorer>,
}

impl FallbackScorer {
    pub fn new(primary: Arc<dyn Scorer>, fallback: Arc<dyn Scorer>) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl Scorer for FallbackScorer {
    async fn score(&self, resume_text: &str, jd_text: &str) -> Result<ScoreReport, AppError> {
        match self.primary.score(resume_text, jd_text).await {
            Ok(report) => Ok(report),
            Err(e) => {
                warn!("Primary scorer failed, falling back to local engine: {e}");
                self.fallback.score(resume_text, jd_text).await
            }
        }
    }
}
