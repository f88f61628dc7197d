//! Skill scoring: pluggable, trait-based scorer that measures a resume against
//! the skills a job profile requires.
//!
//! Default: `KeywordSkillScorer` (pure-Rust, deterministic, fully testable).
//! `AppState` holds an `Arc<dyn SkillScorer>`, so a model-backed scorer can be
//! swapped in without touching the handlers or the pipeline.

use async_trait::async_trait;

use crate::analysis::text::{count_mentions, ResumeText, Section};
use crate::errors::AppError;
use crate::models::analysis::SkillMatch;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait SkillScorer: Send + Sync {
    /// One `SkillMatch` per required skill, scores 0 – 100, in job order.
    async fn score_skills(
        &self,
        resume: &ResumeText,
        required_skills: &[String],
    ) -> Result<Vec<SkillMatch>, AppError>;

    /// How relevant the experience section is to the role, 0.0 – 1.0.
    async fn experience_relevance(
        &self,
        resume: &ResumeText,
        required_skills: &[String],
    ) -> Result<f64, AppError>;

    /// Short label for logs ("keyword", …).
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordSkillScorer
// ────────────────────────────────────────────────────────────────────────────

const LISTED_SKILL_SCORE: f64 = 100.0;
const MENTION_BASE_SCORE: f64 = 60.0;
const MENTION_STEP: f64 = 10.0;
const MENTION_CAP: f64 = 90.0;

/// Keyword scorer.
///
/// Per skill:
/// - listed in the skills section → 100
/// - mentioned elsewhere → 60, +10 per extra mention, capped at 90
/// - not mentioned → 0
///
/// Experience relevance is the fraction of required skills the experience
/// section mentions.
pub struct KeywordSkillScorer;

#[async_trait]
impl SkillScorer for KeywordSkillScorer {
    async fn score_skills(
        &self,
        resume: &ResumeText,
        required_skills: &[String],
    ) -> Result<Vec<SkillMatch>, AppError> {
        Ok(required_skills
            .iter()
            .map(|skill| SkillMatch {
                name: skill.clone(),
                match_score: keyword_skill_score(resume, skill),
            })
            .collect())
    }

    async fn experience_relevance(
        &self,
        resume: &ResumeText,
        required_skills: &[String],
    ) -> Result<f64, AppError> {
        Ok(keyword_relevance(
            resume.sections.get(Section::Experience),
            required_skills,
        ))
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

fn keyword_skill_score(resume: &ResumeText, skill: &str) -> f64 {
    if count_mentions(resume.sections.get(Section::Skills), skill) > 0 {
        return LISTED_SKILL_SCORE;
    }
    match count_mentions(&resume.cleaned, skill) {
        0 => 0.0,
        n => (MENTION_BASE_SCORE + MENTION_STEP * (n - 1) as f64).min(MENTION_CAP),
    }
}

fn keyword_relevance(experience: &str, required_skills: &[String]) -> f64 {
    if required_skills.is_empty() {
        return 0.0;
    }
    let covered = required_skills
        .iter()
        .filter(|skill| count_mentions(experience, skill) > 0)
        .count();
    covered as f64 / required_skills.len() as f64
}
