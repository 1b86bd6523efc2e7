use serde::{Deserialize, Serialize};

/// One normalized job posting. Built per search, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    /// Provider-assigned id; unique within one search response.
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub salary: Option<String>,
    pub source: String,
    pub url: String,
    pub posted_at: Option<String>,
}

/// Experience filter as chosen by the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExperienceLevel {
    #[default]
    EntryLevel,
    Advanced,
}

impl ExperienceLevel {
    /// Parses the client's `jobType` value, matched exactly. Anything
    /// unrecognized is treated as entry level.
    pub fn from_job_type(job_type: &str) -> Self {
        match job_type {
            "entry-level" => ExperienceLevel::EntryLevel,
            "advanced" => ExperienceLevel::Advanced,
            other => {
                tracing::debug!("Unrecognized job type '{other}', defaulting to entry-level");
                ExperienceLevel::EntryLevel
            }
        }
    }
}

/// A validated job search: titles in query order plus optional filters.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub job_titles: Vec<String>,
    pub experience_level: ExperienceLevel,
    pub location: Option<String>,
    /// Search radius in miles; only meaningful together with `location`.
    pub radius: Option<u32>,
}
