//! Job Aggregator: one provider query per title, merged and deduplicated.
//!
//! Titles are searched strictly in order. A failed title contributes nothing
//! and is recorded as a diagnostic; it never aborts the batch.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, warn};

use crate::jobs::normalize::to_listing;
use crate::jobs::provider::{ExperienceBucket, JobQuery, JobSearchProvider};
use crate::models::job::{JobListing, SearchRequest};

/// One title whose sub-query failed.
#[derive(Debug, Clone)]
pub struct TitleSearchFailure {
    pub title: String,
    pub reason: String,
}

/// Result of a full search: the merged listings plus per-title failures.
#[derive(Debug, Default)]
pub struct SearchOutcome {
    pub listings: Vec<JobListing>,
    pub diagnostics: Vec<TitleSearchFailure>,
}

pub struct JobAggregator {
    provider: Arc<dyn JobSearchProvider>,
}

impl JobAggregator {
    pub fn new(provider: Arc<dyn JobSearchProvider>) -> Self {
        Self { provider }
    }

    pub async fn search(&self, request: &SearchRequest) -> SearchOutcome {
        let experience = ExperienceBucket::from(request.experience_level);
        let mut seen: HashSet<String> = HashSet::new();
        let mut outcome = SearchOutcome::default();

        for title in &request.job_titles {
            let query = JobQuery {
                text: build_query_text(title, request.location.as_deref(), request.radius),
                experience,
            };
            info!(
                "Searching jobs: query='{}' experience_level={}",
                query.text,
                experience.as_param()
            );

            match self.provider.search(&query).await {
                Ok(postings) => {
                    let before = outcome.listings.len();
                    for listing in postings.into_iter().filter_map(to_listing) {
                        if seen.insert(listing.id.clone()) {
                            outcome.listings.push(listing);
                        }
                    }
                    info!(
                        "Title '{}' added {} new listings",
                        title,
                        outcome.listings.len() - before
                    );
                }
                Err(e) => {
                    warn!("Job search failed for '{title}': {e}");
                    outcome.diagnostics.push(TitleSearchFailure {
                        title: title.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            "Total unique jobs found: {} ({} titles failed)",
            outcome.listings.len(),
            outcome.diagnostics.len()
        );
        outcome
    }
}

/// `"<title> in <location>[ within <radius> miles]"`; the bare title when no
/// location is given. A zero radius is treated as absent.
pub fn build_query_text(title: &str, location: Option<&str>, radius: Option<u32>) -> String {
    let location = location.map(str::trim).filter(|l| !l.is_empty());
    match (location, radius.filter(|r| *r > 0)) {
        (Some(location), Some(radius)) => format!("{title} in {location} within {radius} miles"),
        (Some(location), None) => format!("{title} in {location}"),
        (None, _) => title.to_string(),
    }
}
