use std::sync::Arc;

use crate::jobs::aggregator::JobAggregator;
use crate::resume::analyzer::ResumeAnalyzer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only for the life of the process.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<ResumeAnalyzer>,
    pub aggregator: Arc<JobAggregator>,
    /// Largest accepted résumé upload, in bytes.
    pub max_upload_bytes: usize,
}
