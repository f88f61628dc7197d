use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequiredExperience {
    pub years: u32,
}

/// A target role the resume is analyzed against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobConfig {
    #[serde(default)]
    pub title: String,
    pub required_skills: Vec<String>,
    pub required_experience: RequiredExperience,
}

/// Job profiles keyed by job id, ordered by id.
pub type JobConfigs = BTreeMap<String, JobConfig>;
