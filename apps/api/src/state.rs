use std::sync::Arc;

use crate::config::Config;
use crate::scoring::scorer::Scorer;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// No interior mutability anywhere: the scorer is read-only after startup, so
/// concurrent requests share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable scorer. Remote-first with local fallback when a Gemini key
    /// is configured, plain local engine otherwise.
    pub scorer: Arc<dyn Scorer>,
    /// Resolved once at startup; kept on state for handlers that need it later.
    #[allow(dead_code)]
    pub config: Config,
}
