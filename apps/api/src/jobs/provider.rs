//! Job-search provider boundary.
//!
//! `JobSearchProvider` is the capability the aggregator depends on;
//! `JSearchClient` is the RapidAPI JSearch implementation used in production.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::config::JobSearchSettings;
use crate::models::job::ExperienceLevel;

const JSEARCH_API_URL: &str = "https://jsearch.p.rapidapi.com/search";
const JSEARCH_HOST: &str = "jsearch.p.rapidapi.com";

const NUM_PAGES: &str = "3";
const DATE_POSTED: &str = "month";
const SORT_BY: &str = "date";
const JOB_SOURCES: &str = "indeed,linkedin,ziprecruiter,google_jobs";
const COUNTRY: &str = "us";
const LANGUAGE: &str = "en";

#[derive(Debug, Error)]
pub enum JobSearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("could not decode provider response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Experience filter in the provider's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceBucket {
    UnderThreeYears,
    MoreThanThreeYears,
}

impl ExperienceBucket {
    pub fn as_param(self) -> &'static str {
        match self {
            ExperienceBucket::UnderThreeYears => "under_3_years_experience",
            ExperienceBucket::MoreThanThreeYears => "more_than_3_years_experience",
        }
    }
}

impl From<ExperienceLevel> for ExperienceBucket {
    fn from(level: ExperienceLevel) -> Self {
        match level {
            ExperienceLevel::EntryLevel => ExperienceBucket::UnderThreeYears,
            ExperienceLevel::Advanced => ExperienceBucket::MoreThanThreeYears,
        }
    }
}

/// One per-title sub-query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobQuery {
    /// Free-text query, e.g. `"Rust Engineer in Austin, TX within 25 miles"`.
    pub text: String,
    pub experience: ExperienceBucket,
}

impl JobQuery {
    /// Full provider parameter list for this query.
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("query", self.text.as_str()),
            ("num_pages", NUM_PAGES),
            ("date_posted", DATE_POSTED),
            ("sort_by", SORT_BY),
            ("job_sources", JOB_SOURCES),
            ("experience_level", self.experience.as_param()),
            ("country", COUNTRY),
            ("language", LANGUAGE),
        ]
    }
}

/// A posting as the provider returns it. Every field is optional upstream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawJobPosting {
    pub job_id: Option<String>,
    pub job_title: Option<String>,
    pub employer_name: Option<String>,
    pub job_city: Option<String>,
    pub job_state: Option<String>,
    pub job_country: Option<String>,
    pub job_description: Option<String>,
    /// Usually a display string, occasionally a bare number.
    pub job_salary: Option<Value>,
    pub job_source: Option<String>,
    pub job_apply_link: Option<String>,
    pub job_url: Option<String>,
    pub job_posted_at_datetime_utc: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    data: Option<Vec<RawJobPosting>>,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    message: String,
}

/// Capability interface for a job-listings search backend.
#[async_trait]
pub trait JobSearchProvider: Send + Sync {
    /// Runs one query and returns the postings in provider order.
    async fn search(&self, query: &JobQuery) -> Result<Vec<RawJobPosting>, JobSearchError>;
}

/// JSearch (RapidAPI) client. One GET per query, no retries.
#[derive(Clone)]
pub struct JSearchClient {
    client: Client,
    api_key: String,
}

impl JSearchClient {
    pub fn new(settings: &JobSearchSettings) -> Result<Self, JobSearchError> {
        Ok(Self {
            client: Client::builder().timeout(settings.timeout).build()?,
            api_key: settings.api_key.clone(),
        })
    }
}

#[async_trait]
impl JobSearchProvider for JSearchClient {
    async fn search(&self, query: &JobQuery) -> Result<Vec<RawJobPosting>, JobSearchError> {
        let response = self
            .client
            .get(JSEARCH_API_URL)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", JSEARCH_HOST)
            .query(&query.params())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ProviderError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(JobSearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: SearchResponse = serde_json::from_str(&body)?;
        match parsed.data {
            Some(postings) => {
                debug!("JSearch returned {} postings for '{}'", postings.len(), query.text);
                Ok(postings)
            }
            None => {
                debug!("JSearch response for '{}' carried no data array", query.text);
                Ok(Vec::new())
            }
        }
    }
}
