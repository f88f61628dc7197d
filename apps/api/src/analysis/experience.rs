use std::sync::LazyLock;

use regex::Regex;

use crate::models::analysis::ExperienceAssessment;
use crate::models::job::RequiredExperience;

// "5 years", "5+ years", "3 yrs", "2 y.e."
static RE_YEARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\+?\s*(?:years?|yrs?|y\.?e\.?)").unwrap());

const EXCELLENT_THRESHOLD: f64 = 85.0;
const GOOD_THRESHOLD: f64 = 70.0;

/// Largest "N years" figure stated in the experience section, or 0.
pub fn extract_years(experience: &str) -> u32 {
    let lower = experience.to_lowercase();
    RE_YEARS
        .captures_iter(&lower)
        .filter_map(|c| c.get(1)?.as_str().parse::<u32>().ok())
        .max()
        .unwrap_or(0)
}

/// Scores stated years against the requirement, blended evenly with
/// `relevance` (0.0 – 1.0).
pub fn assess_experience(
    experience: &str,
    relevance: f64,
    required: &RequiredExperience,
) -> ExperienceAssessment {
    let years = extract_years(experience);
    let relevance = relevance.clamp(0.0, 1.0);

    let years_score = if required.years == 0 {
        100.0
    } else if years > 0 {
        (years as f64 / required.years as f64 * 100.0).min(100.0)
    } else {
        0.0
    };

    ExperienceAssessment {
        score: round2((years_score + relevance * 100.0) / 2.0),
        years,
        relevance: round2(relevance * 100.0),
    }
}

/// Human-readable summary shown under "Experience Analysis".
pub fn describe_experience(
    assessment: &ExperienceAssessment,
    required: &RequiredExperience,
) -> String {
    let mut analysis = if assessment.score >= EXCELLENT_THRESHOLD {
        "Excellent experience match! ".to_string()
    } else if assessment.score >= GOOD_THRESHOLD {
        "Good experience match. ".to_string()
    } else {
        "Experience could be better aligned. ".to_string()
    };

    let comparison = if assessment.years >= required.years {
        "meets"
    } else {
        "below"
    };
    analysis.push_str(&format!(
        "Has {} years of experience ({comparison} requirement of {} years).",
        assessment.years, required.years
    ));
    analysis
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
