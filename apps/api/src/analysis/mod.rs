// Resume analysis: text extraction, section splitting, skill and experience
// scoring against a job profile, and recommendations.
// Scoring goes through the `SkillScorer` seam held in `AppState`.

pub mod experience;
pub mod extract;
pub mod handlers;
pub mod jobs;
pub mod pipeline;
pub mod recommendations;
pub mod scoring;
pub mod text;
