// Résumé analyzer prompt templates.

/// Number of job titles the model is asked for.
pub const TOP_TITLE_COUNT: usize = 10;

pub const RESUME_ANALYSIS_SYSTEM: &str = "\
You are a career advisor and resume analyzer. \
Read the resume and name the top {title_count} job titles this candidate should apply for \
given their background, ordered from best fit to weakest. \
Also extract the candidate's skills and a short list of experience summaries. \
You MUST respond with a single JSON object only, no markdown fences, no explanations. \
Use exactly these keys: \
\"jobTitles\" (array of strings), \"skills\" (array of strings), \"experience\" (array of strings).";

pub const RESUME_ANALYSIS_PROMPT: &str = r#"RESUME TEXT:
{resume_text}"#;

/// Renders the system instruction with the configured title count.
pub fn analysis_system() -> String {
    RESUME_ANALYSIS_SYSTEM.replace("{title_count}", &TOP_TITLE_COUNT.to_string())
}
