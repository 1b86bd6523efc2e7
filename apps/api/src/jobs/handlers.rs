//! Axum route handler for the job search API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::job::{ExperienceLevel, JobListing, SearchRequest};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchJobsParams {
    pub job_titles: Option<String>,
    pub job_type: Option<String>,
    pub location: Option<String>,
    pub radius: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchJobsResponse {
    pub jobs: Vec<JobListing>,
    pub search_titles: Vec<String>,
}

/// GET /api/search-jobs
///
/// Runs one provider search per comma-separated title and returns the merged,
/// deduplicated listings.
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    Query(params): Query<SearchJobsParams>,
) -> Result<Json<SearchJobsResponse>, AppError> {
    let request = validate(params)?;
    info!(
        "Searching jobs with titles {:?}, level {:?}, location {:?}, radius {:?}",
        request.job_titles, request.experience_level, request.location, request.radius
    );

    let outcome = state.aggregator.search(&request).await;
    for failure in &outcome.diagnostics {
        warn!("Title '{}' contributed no listings: {}", failure.title, failure.reason);
    }

    Ok(Json(SearchJobsResponse {
        jobs: outcome.listings,
        search_titles: request.job_titles,
    }))
}

fn validate(params: SearchJobsParams) -> Result<SearchRequest, AppError> {
    let job_titles = params
        .job_titles
        .as_deref()
        .map(split_titles)
        .unwrap_or_default();
    if job_titles.is_empty() {
        return Err(AppError::Validation("Job titles are required".to_string()));
    }

    let job_type = params
        .job_type
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Job type is required".to_string()))?;

    let location = params
        .location
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty());

    let radius = params
        .radius
        .as_deref()
        .and_then(parse_radius)
        .filter(|r| *r > 0);

    Ok(SearchRequest {
        job_titles,
        experience_level: ExperienceLevel::from_job_type(&job_type),
        location,
        radius,
    })
}

/// Reads the leading digits of the radius (`"25mi"` → 25); input with no
/// leading digits is ignored rather than rejected.
fn parse_radius(raw: &str) -> Option<u32> {
    let raw = raw.trim_start();
    let end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    raw[..end].parse::<u32>().ok()
}

/// Splits the comma-separated title list, dropping blanks and repeats while
/// keeping first-seen order.
fn split_titles(raw: &str) -> Vec<String> {
    let mut titles: Vec<String> = Vec::new();
    for title in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !titles.iter().any(|seen| seen == title) {
            titles.push(title.to_string());
        }
    }
    titles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(titles: Option<&str>, job_type: Option<&str>) -> SearchJobsParams {
        SearchJobsParams {
            job_titles: titles.map(str::to_string),
            job_type: job_type.map(str::to_string),
            ..Default::default()
        }
    }

    fn message(err: AppError) -> String {
        match err {
            AppError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_titles_rejected() {
        let err = validate(params(None, Some("entry-level"))).unwrap_err();
        assert_eq!(message(err), "Job titles are required");

        let err = validate(params(Some(" , ,"), Some("entry-level"))).unwrap_err();
        assert_eq!(message(err), "Job titles are required");
    }

    #[test]
    fn test_missing_job_type_rejected() {
        let err = validate(params(Some("Engineer"), None)).unwrap_err();
        assert_eq!(message(err), "Job type is required");
    }

    #[test]
    fn test_titles_are_trimmed_and_deduplicated() {
        assert_eq!(
            split_titles("Backend Engineer, Data Engineer,,Backend Engineer "),
            vec!["Backend Engineer", "Data Engineer"]
        );
    }

    #[test]
    fn test_radius_and_location_filters() {
        let mut p = params(Some("Engineer"), Some("advanced"));
        p.location = Some("Austin, TX".to_string());
        p.radius = Some("25".to_string());
        let request = validate(p).unwrap();
        assert_eq!(request.location.as_deref(), Some("Austin, TX"));
        assert_eq!(request.radius, Some(25));
        assert_eq!(request.experience_level, ExperienceLevel::Advanced);

        let mut p = params(Some("Engineer"), Some("entry-level"));
        p.location = Some("  ".to_string());
        p.radius = Some("far".to_string());
        let request = validate(p).unwrap();
        assert!(request.location.is_none());
        assert!(request.radius.is_none());
    }

    #[test]
    fn test_radius_reads_leading_digits() {
        assert_eq!(parse_radius("25"), Some(25));
        assert_eq!(parse_radius("25mi"), Some(25));
        assert_eq!(parse_radius(" 25 miles"), Some(25));
        assert_eq!(parse_radius("mi25"), None);
        assert_eq!(parse_radius(""), None);

        let mut p = params(Some("Engineer"), Some("entry-level"));
        p.location = Some("Denver".to_string());
        p.radius = Some("10mi".to_string());
        assert_eq!(validate(p).unwrap().radius, Some(10));
    }
}
