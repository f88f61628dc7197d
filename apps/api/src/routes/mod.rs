pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::state::AppState;
use crate::ui::handlers as pages;
use crate::upload::handlers as upload;

/// Room for multipart framing and the `job_id` field on top of the file itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    // Oversize files must reach validation to get a readable 400,
    // so the transport limit sits above the configured file limit.
    let body_limit = state
        .config
        .max_file_size
        .saturating_mul(2)
        .saturating_add(MULTIPART_OVERHEAD);

    Router::new()
        // HTML pages
        .route("/", get(pages::home_page))
        .route("/about", get(pages::about_page))
        .route("/analyze", post(pages::analyze_page))
        // JSON API
        .route("/health", get(health::health_handler))
        .route("/api/config", get(analysis::handle_get_config))
        .route("/api/jobs", get(analysis::handle_get_jobs))
        .route("/api/analyze", post(analysis::handle_analyze))
        .route("/api/upload", post(upload::handle_upload))
        .route("/api/upload/:filename", delete(upload::handle_delete_upload))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
