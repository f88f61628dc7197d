use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;
use crate::upload::form::read_upload_form;
use crate::upload::storage::{delete_upload, save_upload, DeleteReceipt, UploadReceipt};

/// POST /api/upload
///
/// Validates the single PDF in the `file` field and stores it in the upload directory.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadReceipt>, AppError> {
    let form = read_upload_form(multipart).await?;
    let file = state.accept_policy.select(form.files, |file| file)?;

    let receipt = save_upload(&state.config.upload_dir, &file).await?;
    info!(filename = %receipt.filename, size = receipt.size, "Successfully uploaded file");

    Ok(Json(receipt))
}

/// DELETE /api/upload/:filename
pub async fn handle_delete_upload(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Json<DeleteReceipt>, AppError> {
    let receipt = delete_upload(&state.config.upload_dir, &filename).await?;
    info!(filename = %filename, "Successfully deleted file");
    Ok(Json(receipt))
}
