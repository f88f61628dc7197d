use std::sync::Arc;

use crate::analysis::extract::{PdfTextExtractor, TextExtractor};
use crate::analysis::scoring::{KeywordSkillScorer, SkillScorer};
use crate::config::Config;
use crate::upload::picker::AcceptPolicy;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Derived from `config`; decides which uploads reach the analyzer.
    pub accept_policy: AcceptPolicy,
    /// Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
    /// Pluggable skill scorer. Default: KeywordSkillScorer.
    pub skill_scorer: Arc<dyn SkillScorer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            accept_policy: AcceptPolicy::from_config(&config),
            config,
            extractor: Arc::new(PdfTextExtractor),
            skill_scorer: Arc::new(KeywordSkillScorer),
        }
    }
}
