//! Axum route handlers for the HTML pages.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Html,
};
use tracing::warn;

use crate::analysis::handlers::run_analysis;
use crate::analysis::jobs::load_job_configs;
use crate::models::analysis::AnalysisResults;
use crate::state::AppState;
use crate::ui::pages::{render_about, render_home, AnalyzerView, JobOption};
use crate::upload::form::read_upload_form;

/// Builds the analyzer view, loading job profiles for the selector.
/// A job-profile failure becomes the page error unless `error` is already set.
async fn analyzer_view(
    state: &AppState,
    selected_job: Option<String>,
    results: Option<AnalysisResults>,
    error: Option<String>,
) -> AnalyzerView {
    let (jobs, jobs_error) = match load_job_configs(&state.config.job_configs_path).await {
        Ok(jobs) => (JobOption::from_configs(&jobs), None),
        Err(e) => (Vec::new(), Some(e.public_message())),
    };

    AnalyzerView {
        jobs,
        selected_job,
        accept: state.accept_policy.accept_attribute(),
        max_file_size_mb: state.config.max_file_size_mb(),
        results,
        error: error.or(jobs_error),
    }
}

/// GET /
pub async fn home_page(State(state): State<AppState>) -> Html<String> {
    let view = analyzer_view(&state, None, None, None).await;
    Html(render_home(view))
}

/// POST /analyze
///
/// Same form contract as `/api/analyze`; renders the page with results, or with
/// the error banner when the upload or analysis fails.
pub async fn analyze_page(
    State(state): State<AppState>,
    multipart: Multipart,
) -> (StatusCode, Html<String>) {
    let (selected_job, outcome) = match read_upload_form(multipart).await {
        Ok(form) => {
            let selected = form.job_id.clone();
            (selected, run_analysis(&state, form).await)
        }
        Err(e) => (None, Err(e)),
    };

    let (status, results, error) = match outcome {
        Ok(results) => (StatusCode::OK, Some(results), None),
        Err(e) => {
            warn!("analysis failed: {e}");
            (e.status(), None, Some(e.public_message()))
        }
    };

    let view = analyzer_view(&state, selected_job, results, error).await;
    (status, Html(render_home(view)))
}

/// GET /about
pub async fn about_page(State(state): State<AppState>) -> Html<String> {
    Html(render_about(state.config.max_file_size_mb()))
}
