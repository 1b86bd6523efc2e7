//! Résumé Analyzer: document bytes in, `CandidateProfile` out.
//!
//! One synchronous round trip per upload: extract text, ask the model for a
//! JSON profile, coerce the reply into the profile shape. No caching, no
//! retries.

use std::sync::Arc;

use bytes::Bytes;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::llm_client::{strip_json_fences, LlmError, TextCompletionProvider};
use crate::models::profile::CandidateProfile;
use crate::resume::extract::{extract_text, ExtractError};
use crate::resume::prompts::{analysis_system, RESUME_ANALYSIS_PROMPT, TOP_TITLE_COUNT};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("text extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("completion call failed: {0}")]
    Completion(#[from] LlmError),

    #[error("model returned malformed JSON: {0}")]
    MalformedOutput(#[from] serde_json::Error),
}

pub struct ResumeAnalyzer {
    llm: Arc<dyn TextCompletionProvider>,
}

impl ResumeAnalyzer {
    pub fn new(llm: Arc<dyn TextCompletionProvider>) -> Self {
        Self { llm }
    }

    /// Full pipeline over an uploaded document.
    pub async fn analyze(&self, document: Bytes) -> Result<CandidateProfile, AnalysisError> {
        let size = document.len();
        let text = extract_text(document).await?;
        info!("Analyzing resume: {} bytes uploaded, {} chars extracted", size, text.len());
        self.analyze_text(&text).await
    }

    /// Sends already-extracted résumé text to the model and shapes the reply.
    pub async fn analyze_text(&self, resume_text: &str) -> Result<CandidateProfile, AnalysisError> {
        let prompt = RESUME_ANALYSIS_PROMPT.replace("{resume_text}", resume_text);
        let reply = self.llm.complete(&analysis_system(), &prompt).await?;

        let parsed: Value = serde_json::from_str(strip_json_fences(&reply))?;
        let profile = profile_from_value(&parsed);

        info!(
            "Resume analysis produced {} titles, {} skills, {} experience entries",
            profile.job_titles.len(),
            profile.skills.len(),
            profile.experience.len()
        );
        Ok(profile)
    }
}

/// Coerces the model's JSON into a profile. Missing or mistyped keys become
/// empty sequences; they never fail the call.
fn profile_from_value(value: &Value) -> CandidateProfile {
    let mut job_titles = string_list(value, "jobTitles");
    job_titles.truncate(TOP_TITLE_COUNT);

    CandidateProfile {
        job_titles,
        skills: string_list(value, "skills"),
        experience: string_list(value, "experience"),
    }
}

fn string_list(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(|v| v.as_array())
        .map(|arr| arr.iter().filter_map(entry_text).collect())
        .unwrap_or_default()
}

/// Strings are kept as-is; objects (e.g. `{"title": .., "company": ..}`) are
/// flattened to their string fields.
fn entry_text(entry: &Value) -> Option<String> {
    let text = match entry {
        Value::String(s) => s.trim().to_string(),
        Value::Object(map) => map
            .values()
            .filter_map(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}
