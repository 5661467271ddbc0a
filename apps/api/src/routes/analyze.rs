//! Axum handler for the analysis endpoint.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;

use crate::errors::AppError;
use crate::extract::extract_pdf_text;
use crate::scoring::report::ScoreReport;
use crate::state::AppState;

/// POST /api/v1/analyze
///
/// Multipart form: `resume` (PDF file) + `jobDesc` (plain text, may be empty).
/// Extracts resume text, then scores via the configured scorer. Remote-scorer
/// failures never surface here — the fallback scorer absorbs them — so the
/// only user-visible errors are a missing/unreadable resume.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScoreReport>, AppError> {
    let mut resume_bytes: Option<Bytes> = None;
    let mut job_desc = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("resume") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read resume upload: {e}")))?;
                resume_bytes = Some(bytes);
            }
            Some("jobDesc") => {
                job_desc = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read jobDesc field: {e}")))?;
            }
            _ => {} // unknown fields are ignored
        }
    }

    let resume_bytes =
        resume_bytes.ok_or_else(|| AppError::Validation("Resume file missing".to_string()))?;

    // pdf-extract is CPU-bound; keep it off the async worker threads.
    let resume_text = tokio::task::spawn_blocking(move || extract_pdf_text(&resume_bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Extraction task panicked: {e}")))?
        .map_err(|e| AppError::Extraction(e.to_string()))?;

    let report = state.scorer.score(&resume_text, &job_desc).await?;

    Ok(Json(report))
}
