use std::path::Path;

use tracing::error;

use crate::errors::AppError;
use crate::models::job::{JobConfig, JobConfigs};

/// Reads job profiles from disk. Called per request so edits apply live.
pub async fn load_job_configs(path: &Path) -> Result<JobConfigs, AppError> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            error!(path = %path.display(), "job configurations file not found");
            return Err(AppError::JobConfig("Job configurations not found".to_string()));
        }
        Err(e) => return Err(AppError::Io(e)),
    };

    serde_json::from_str(&raw).map_err(|e| {
        error!(path = %path.display(), "failed to parse job configurations: {e}");
        AppError::JobConfig("Error parsing job configurations".to_string())
    })
}

pub fn find_job<'a>(jobs: &'a JobConfigs, job_id: &str) -> Result<&'a JobConfig, AppError> {
    jobs.get(job_id)
        .ok_or_else(|| AppError::NotFound(format!("Job profile '{job_id}' not found")))
}
