use crate::models::analysis::{ExperienceAssessment, SkillMatch};

const WEAK_SKILL_THRESHOLD: f64 = 70.0;
const WEAK_EXPERIENCE_THRESHOLD: f64 = 70.0;

const EXPERIENCE_ADVICE: &str = "Focus on gaining more relevant experience in key areas";
const STRONG_PROFILE_ADVICE: &str =
    "Strong profile! Consider highlighting leadership experience and quantitative achievements";

/// Builds the recommendation list from weak skills and a weak experience score.
/// Always returns at least one entry.
pub fn generate_recommendations(
    skills_match: &[SkillMatch],
    experience: &ExperienceAssessment,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    let weak_skills: Vec<&str> = skills_match
        .iter()
        .filter(|s| s.match_score < WEAK_SKILL_THRESHOLD)
        .map(|s| s.name.as_str())
        .collect();
    if !weak_skills.is_empty() {
        recommendations.push(format!(
            "Consider strengthening skills in: {}",
            weak_skills.join(", ")
        ));
    }

    if experience.score < WEAK_EXPERIENCE_THRESHOLD {
        recommendations.push(EXPERIENCE_ADVICE.to_string());
    }

    if recommendations.is_empty() {
        recommendations.push(STRONG_PROFILE_ADVICE.to_string());
    }

    recommendations
}
