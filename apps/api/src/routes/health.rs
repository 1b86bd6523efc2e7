use axum::Json;
use serde_json::{json, Value};

/// GET /api/test
/// Liveness check used by the browser client.
pub async fn test_handler() -> Json<Value> {
    Json(json!({ "message": "Backend server is running!" }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "jobscout-api"
    }))
}
