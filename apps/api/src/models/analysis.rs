use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillMatch {
    pub name: String,
    pub match_score: f64, // 0 – 100
}

/// Numeric detail behind the experience narrative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExperienceAssessment {
    pub score: f64,
    pub years: u32,
    pub relevance: f64,
}

/// The results object rendered by the results panel and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResults {
    pub match_score: f64,
    pub skills_match: Vec<SkillMatch>,
    pub experience_analysis: String,
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<ExperienceAssessment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyzed_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_deserialize_from_minimal_payload() {
        let json = r#"{
            "match_score": 75,
            "skills_match": [{"name": "Python", "match_score": 90}],
            "experience_analysis": "Strong backend experience",
            "recommendations": ["Add more quantified achievements"]
        }"#;
        let results: AnalysisResults = serde_json::from_str(json).unwrap();
        assert_eq!(results.match_score, 75.0);
        assert_eq!(results.skills_match[0].name, "Python");
        assert!(results.experience.is_none());
        assert!(results.analyzed_at.is_none());
    }

    #[test]
    fn test_optional_fields_omitted_when_absent() {
        let results = AnalysisResults {
            match_score: 50.0,
            skills_match: vec![],
            experience_analysis: String::new(),
            recommendations: vec![],
            experience: None,
            job_id: None,
            analyzed_at: None,
        };
        let value = serde_json::to_value(&results).unwrap();
        assert!(value.get("experience").is_none());
        assert!(value.get("job_id").is_none());
        assert!(value.get("skills_match").is_some());
    }
}
