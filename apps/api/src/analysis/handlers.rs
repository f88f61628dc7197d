//! Axum route handlers for the analysis API.

use anyhow::anyhow;
use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::info;

use crate::analysis::jobs::{find_job, load_job_configs};
use crate::analysis::pipeline::analyze_resume;
use crate::config::Config;
use crate::errors::AppError;
use crate::models::analysis::AnalysisResults;
use crate::models::job::JobConfigs;
use crate::state::AppState;
use crate::upload::form::{read_upload_form, UploadForm};

/// Runs a submitted form through validation, text extraction and analysis.
/// Shared by the JSON API and the HTML form.
pub async fn run_analysis(
    state: &AppState,
    form: UploadForm,
) -> Result<AnalysisResults, AppError> {
    let job_id = form
        .job_id
        .ok_or_else(|| AppError::Validation("job_id is required".to_string()))?;
    let file = state.accept_policy.select(form.files, |file| file)?;

    let jobs = load_job_configs(&state.config.job_configs_path).await?;
    let job = find_job(&jobs, &job_id)?;

    let extractor = state.extractor.clone();
    let bytes = file.bytes.clone();
    let text = tokio::task::spawn_blocking(move || extractor.extract(&bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow!("text extraction task failed: {e}")))??;

    let results = analyze_resume(&text, &job_id, job, state.skill_scorer.as_ref()).await?;
    info!(
        filename = %file.name,
        job_id = %job_id,
        match_score = results.match_score,
        "Resume analyzed"
    );
    Ok(results)
}

/// POST /api/analyze
///
/// Multipart `file` (one PDF) + `job_id`. Returns the analysis results.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisResults>, AppError> {
    let form = read_upload_form(multipart).await?;
    let results = run_analysis(&state, form).await?;
    Ok(Json(results))
}

/// GET /api/jobs
pub async fn handle_get_jobs(
    State(state): State<AppState>,
) -> Result<Json<JobConfigs>, AppError> {
    let jobs = load_job_configs(&state.config.job_configs_path).await?;
    Ok(Json(jobs))
}

/// GET /api/config
pub async fn handle_get_config(State(state): State<AppState>) -> Json<Config> {
    Json(state.config.clone())
}
