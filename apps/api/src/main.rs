mod config;
mod errors;
mod extract;
mod llm_client;
mod routes;
mod scoring;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::scoring::scorer::{FallbackScorer, LlmScorer, LocalScorer, Scorer};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Sift API v{}", env!("CARGO_PKG_VERSION"));

    // Resolve the scorer capability once at startup: remote-first with local
    // fallback when a Gemini key is configured, local engine only otherwise.
    let scorer: Arc<dyn Scorer> = match &config.gemini_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone());
            info!(
                "LLM client initialized (model: {}); remote-first scoring with local fallback",
                llm_client::MODEL
            );
            Arc::new(FallbackScorer::new(
                Arc::new(LlmScorer::new(llm)),
                Arc::new(LocalScorer),
            ))
        }
        None => {
            info!("GEMINI_API_KEY not set; using the local scoring engine only");
            Arc::new(LocalScorer)
        }
    };

    // Build app state
    let state = AppState {
        scorer,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
