use serde::{Deserialize, Serialize};

/// Structured extraction of a résumé: the titles worth searching for, plus
/// skills and experience summaries. Built once per upload, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub job_titles: Vec<String>,
    pub skills: Vec<String>,
    pub experience: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_serializes_with_camel_case_keys() {
        let profile = CandidateProfile {
            job_titles: vec!["Backend Engineer".to_string()],
            skills: vec!["Rust".to_string()],
            experience: vec![],
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["jobTitles"][0], "Backend Engineer");
        assert_eq!(json["skills"][0], "Rust");
        assert!(json["experience"].as_array().unwrap().is_empty());
    }
}
