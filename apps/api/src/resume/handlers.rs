//! Axum route handler for résumé upload and analysis.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    Json,
};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::profile::CandidateProfile;
use crate::state::AppState;

/// Multipart field carrying the uploaded document.
const RESUME_FIELD: &str = "resume";

/// POST /api/analyze-resume
///
/// Accepts a multipart body with a single `resume` file field and returns the
/// derived candidate profile.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<CandidateProfile>, AppError> {
    let mut multipart = multipart.map_err(|rejection| {
        warn!("Rejected non-multipart upload: {rejection}");
        AppError::Validation("No file uploaded".to_string())
    })?;

    let mut document = None;
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let bytes = field.bytes().await.map_err(multipart_error)?;
        info!(
            "Received resume upload {:?} ({} bytes)",
            file_name.as_deref().unwrap_or("<unnamed>"),
            bytes.len()
        );
        document = Some(bytes);
        break;
    }

    let document = document
        .filter(|bytes| !bytes.is_empty())
        .ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;

    if document.len() > state.max_upload_bytes {
        return Err(AppError::PayloadTooLarge);
    }

    let profile = state.analyzer.analyze(document).await?;
    Ok(Json(profile))
}

fn multipart_error(err: axum::extract::multipart::MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        warn!("Malformed multipart upload: {}", err.body_text());
        AppError::Validation("Invalid upload".to_string())
    }
}
