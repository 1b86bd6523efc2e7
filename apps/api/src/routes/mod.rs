pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::jobs;
use crate::resume;
use crate::state::AppState;

/// Headroom over the file cap for multipart boundaries and part headers.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/test", get(health::test_handler))
        .route(
            "/api/analyze-resume",
            post(resume::handlers::handle_analyze_resume)
                .layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/search-jobs", get(jobs::handlers::handle_search_jobs))
        .with_state(state)
}
