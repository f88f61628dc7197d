//! Analysis pipeline: extracted resume text + job profile → `AnalysisResults`.

use chrono::Utc;
use tracing::debug;

use crate::analysis::experience::{assess_experience, describe_experience, round2};
use crate::analysis::recommendations::generate_recommendations;
use crate::analysis::scoring::SkillScorer;
use crate::analysis::text::ResumeText;
use crate::errors::AppError;
use crate::models::analysis::AnalysisResults;
use crate::models::job::JobConfig;

pub async fn analyze_resume(
    resume_text: &str,
    job_id: &str,
    job: &JobConfig,
    scorer: &dyn SkillScorer,
) -> Result<AnalysisResults, AppError> {
    let resume = ResumeText::new(resume_text);
    if resume.is_blank() {
        return Err(AppError::UnprocessableEntity(
            "No text could be extracted from the resume".to_string(),
        ));
    }

    let mut skills_match = scorer.score_skills(&resume, &job.required_skills).await?;
    for skill in &mut skills_match {
        skill.match_score = round2(skill.match_score.clamp(0.0, 100.0));
    }
    // Stable: equal scores keep job order.
    skills_match.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));

    let relevance = scorer
        .experience_relevance(&resume, &job.required_skills)
        .await?;
    let experience = assess_experience(
        &resume.sections.experience,
        relevance,
        &job.required_experience,
    );
    let experience_analysis = describe_experience(&experience, &job.required_experience);

    let recommendations = generate_recommendations(&skills_match, &experience);

    let match_score = if skills_match.is_empty() {
        experience.score
    } else {
        let skills_score = skills_match.iter().map(|s| s.match_score).sum::<f64>()
            / skills_match.len() as f64;
        round2((skills_score + experience.score) / 2.0)
    };

    debug!(
        job_id,
        scorer = scorer.backend(),
        match_score,
        years = experience.years,
        resume_chars = resume.raw.len(),
        "resume analyzed"
    );

    Ok(AnalysisResults {
        match_score,
        skills_match,
        experience_analysis,
        recommendations,
        experience: Some(experience),
        job_id: Some(job_id.to_string()),
        analyzed_at: Some(Utc::now()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::scoring::KeywordSkillScorer;
    use crate::models::job::RequiredExperience;

    const RESUME: &str = "Alex Kim\n\
        Experience\n\
        Platform Engineer for 6 years shipping Rust and Kafka services\n\
        Skills\n\
        Rust, Docker\n";

    fn job(skills: &[&str], years: u32) -> JobConfig {
        JobConfig {
            title: "Platform Engineer".to_string(),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            required_experience: RequiredExperience { years },
        }
    }

    #[tokio::test]
    async fn test_full_analysis() {
        let results = analyze_resume(
            RESUME,
            "platform",
            &job(&["Kafka", "Rust", "Haskell"], 5),
            &KeywordSkillScorer,
        )
        .await
        .unwrap();

        let names: Vec<&str> = results.skills_match.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Rust", "Kafka", "Haskell"]);
        assert_eq!(results.skills_match[0].match_score, 100.0);
        assert_eq!(results.skills_match[1].match_score, 60.0);
        assert_eq!(results.skills_match[2].match_score, 0.0);

        // relevance: Kafka + Rust of 3 → 66.67; years 6 ≥ 5 → 100
        let experience = results.experience.as_ref().unwrap();
        assert_eq!(experience.years, 6);
        assert_eq!(experience.score, 83.33);

        // skills mean 53.33…, (53.33… + 83.33) / 2
        assert_eq!(results.match_score, 68.33);
        assert_eq!(
            results.experience_analysis,
            "Good experience match. Has 6 years of experience (meets requirement of 5 years)."
        );
        assert_eq!(
            results.recommendations,
            vec!["Consider strengthening skills in: Kafka, Haskell"]
        );
        assert_eq!(results.job_id.as_deref(), Some("platform"));
        assert!(results.analyzed_at.is_some());
    }

    #[tokio::test]
    async fn test_equal_scores_keep_job_order() {
        let results = analyze_resume(
            RESUME,
            "platform",
            &job(&["Haskell", "Docker", "Elixir", "Rust"], 5),
            &KeywordSkillScorer,
        )
        .await
        .unwrap();

        let names: Vec<&str> = results.skills_match.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Docker", "Rust", "Haskell", "Elixir"]);
        assert_eq!(results.skills_match[0].match_score, 100.0);
        assert_eq!(results.skills_match[1].match_score, 100.0);
    }

    #[tokio::test]
    async fn test_no_required_skills_uses_experience_score() {
        let results = analyze_resume(RESUME, "any", &job(&[], 2), &KeywordSkillScorer)
            .await
            .unwrap();
        assert!(results.skills_match.is_empty());
        // years met → 100, relevance 0 → 50
        assert_eq!(results.match_score, 50.0);
    }

    #[tokio::test]
    async fn test_blank_text_is_unprocessable() {
        let err = analyze_resume("  \n  ", "any", &job(&["Rust"], 1), &KeywordSkillScorer)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}
