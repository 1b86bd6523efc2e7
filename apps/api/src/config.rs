use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 60;
const DEFAULT_JOB_SEARCH_TIMEOUT_SECS: u64 = 30;

/// Upload cap for a single résumé file.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Settings handed to the language-model client at construction.
#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

/// Settings handed to the job-search client at construction.
#[derive(Debug, Clone)]
pub struct JobSearchSettings {
    pub api_key: String,
    pub timeout: Duration,
}

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmSettings,
    pub job_search: JobSearchSettings,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &str| {
            optional(key)
                .with_context(|| format!("Required environment variable '{key}' is not set"))
        };

        let llm_timeout = match optional("LLM_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_LLM_TIMEOUT_SECS,
        };
        let search_timeout = match optional("JOB_SEARCH_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("JOB_SEARCH_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_JOB_SEARCH_TIMEOUT_SECS,
        };

        Ok(Config {
            llm: LlmSettings {
                api_key: require("OPENAI_API_KEY")?,
                model: optional("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                timeout: Duration::from_secs(llm_timeout),
            },
            job_search: JobSearchSettings {
                api_key: require("RAPIDAPI_KEY")?,
                timeout: Duration::from_secs(search_timeout),
            },
            port: match optional("PORT") {
                Some(raw) => raw
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => DEFAULT_PORT,
            },
            rust_log: optional("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
