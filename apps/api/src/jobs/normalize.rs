//! Translation of provider postings into `JobListing`.

use serde_json::Value;

use crate::jobs::provider::RawJobPosting;
use crate::models::job::JobListing;

const UNKNOWN_SOURCE: &str = "Unknown";

/// Builds a listing from a provider record. Returns `None` when the record has
/// no id, since the id is the dedup key.
pub fn to_listing(raw: RawJobPosting) -> Option<JobListing> {
    let id = non_blank(raw.job_id)?;
    let location = join_location(
        raw.job_city.as_deref(),
        raw.job_state.as_deref(),
        raw.job_country.as_deref(),
    );
    let salary = raw.job_salary.as_ref().and_then(salary_text).and_then(|s| clean_salary(&s));

    Some(JobListing {
        id,
        title: raw.job_title.unwrap_or_default(),
        company: raw.employer_name.unwrap_or_default(),
        location,
        description: raw.job_description.unwrap_or_default(),
        salary,
        source: non_blank(raw.job_source).unwrap_or_else(|| UNKNOWN_SOURCE.to_string()),
        url: non_blank(raw.job_apply_link)
            .or_else(|| non_blank(raw.job_url))
            .unwrap_or_default(),
        posted_at: non_blank(raw.job_posted_at_datetime_utc),
    })
}

/// `"City, State"` when a city is known, otherwise the country.
pub fn join_location(city: Option<&str>, state: Option<&str>, country: Option<&str>) -> String {
    let city = city.map(str::trim).filter(|s| !s.is_empty());
    let state = state.map(str::trim).filter(|s| !s.is_empty());

    match (city, state) {
        (Some(city), Some(state)) => format!("{city}, {state}"),
        (Some(city), None) => city.to_string(),
        _ => country.map(str::trim).unwrap_or_default().to_string(),
    }
}

/// Reduces a display salary to its amounts, e.g.
/// `"$50,000 - $70,000/yr (Estimated)"` → `"$50,000 - $70,000"`.
///
/// Parenthesised notes and every `/period` token (`/yr`, `/hr`, ...) are
/// dropped first, then only digits, whitespace and `-$.,KkMm` survive.
pub fn clean_salary(raw: &str) -> Option<String> {
    let mut without_notes = String::with_capacity(raw.len());
    let mut depth = 0usize;
    let mut in_period = false;
    for c in raw.chars() {
        if in_period {
            if c.is_alphabetic() {
                continue;
            }
            in_period = false;
        }
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '/' if depth == 0 => in_period = true,
            _ if depth == 0 => without_notes.push(c),
            _ => {}
        }
    }

    let amounts = without_notes
        .chars()
        .filter(|c| c.is_ascii_digit() || c.is_whitespace() || "-$.,KkMm".contains(*c))
        .collect::<String>();

    let trimmed = amounts.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn salary_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(id: &str) -> RawJobPosting {
        RawJobPosting {
            job_id: Some(id.to_string()),
            job_title: Some("Rust Engineer".to_string()),
            employer_name: Some("Acme".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_salary_example_strips_period_and_note() {
        assert_eq!(
            clean_salary("$50,000 - $70,000/yr (Estimated)").as_deref(),
            Some("$50,000 - $70,000")
        );
    }

    #[test]
    fn test_salary_range_keeps_both_bounds_when_each_has_a_period() {
        assert_eq!(clean_salary("$25/hr - $30/hr").as_deref(), Some("$25 - $30"));
        assert_eq!(
            clean_salary("$50,000/yr - $70,000/yr").as_deref(),
            Some("$50,000 - $70,000")
        );
        assert_eq!(clean_salary("$40K/year-$55K/year").as_deref(), Some("$40K-$55K"));
    }

    #[test]
    fn test_salary_keeps_magnitude_suffixes() {
        assert_eq!(clean_salary("$120K-$150K a year").as_deref(), Some("$120K-$150K"));
        assert_eq!(clean_salary("€1.2M").as_deref(), Some("1.2M"));
    }

    #[test]
    fn test_salary_with_no_amounts_is_absent() {
        assert!(clean_salary("Competitive").is_none());
        assert!(clean_salary("(Estimated)").is_none());
    }

    #[test]
    fn test_location_prefers_city_and_state() {
        assert_eq!(join_location(Some("Austin"), Some("TX"), Some("US")), "Austin, TX");
        assert_eq!(join_location(Some("Austin"), None, Some("US")), "Austin");
        assert_eq!(join_location(None, Some("TX"), Some("US")), "US");
        assert_eq!(join_location(Some(""), None, None), "");
    }

    #[test]
    fn test_listing_defaults() {
        let listing = to_listing(raw("a1")).unwrap();
        assert_eq!(listing.id, "a1");
        assert_eq!(listing.source, "Unknown");
        assert_eq!(listing.url, "");
        assert!(listing.salary.is_none());
        assert!(listing.posted_at.is_none());
    }

    #[test]
    fn test_url_falls_back_to_generic_link() {
        let mut posting = raw("a1");
        posting.job_url = Some("https://example.com/job".to_string());
        assert_eq!(to_listing(posting.clone()).unwrap().url, "https://example.com/job");

        posting.job_apply_link = Some("https://example.com/apply".to_string());
        assert_eq!(to_listing(posting).unwrap().url, "https://example.com/apply");
    }

    #[test]
    fn test_numeric_salary_is_rendered() {
        let mut posting = raw("a1");
        posting.job_salary = Some(json!(85000));
        assert_eq!(to_listing(posting).unwrap().salary.as_deref(), Some("85000"));
    }

    #[test]
    fn test_record_without_id_is_skipped() {
        let mut posting = raw("a1");
        posting.job_id = None;
        assert!(to_listing(posting).is_none());
    }
}
