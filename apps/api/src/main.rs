mod config;
mod errors;
mod jobs;
mod llm_client;
mod models;
mod resume;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, MAX_UPLOAD_BYTES};
use crate::jobs::aggregator::JobAggregator;
use crate::jobs::provider::JSearchClient;
use crate::llm_client::LlmClient;
use crate::resume::analyzer::ResumeAnalyzer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobScout API v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(&config.llm)?;
    info!(
        "LLM client initialized (model: {}, timeout: {:?})",
        llm.model(),
        config.llm.timeout
    );

    let job_search = JSearchClient::new(&config.job_search)?;
    info!(
        "Job search client initialized (timeout: {:?})",
        config.job_search.timeout
    );

    let state = AppState {
        analyzer: Arc::new(ResumeAnalyzer::new(Arc::new(llm))),
        aggregator: Arc::new(JobAggregator::new(Arc::new(job_search))),
        max_upload_bytes: MAX_UPLOAD_BYTES,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
