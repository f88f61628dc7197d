use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::errors::AppError;
use crate::upload::picker::SelectedFile;

#[derive(Debug, Serialize)]
pub struct UploadReceipt {
    pub filename: String,
    pub size: usize,
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteReceipt {
    pub status: String,
    pub message: String,
}

/// Rejects anything that is not a single plain path component.
pub fn validate_filename(filename: &str) -> Result<&str, AppError> {
    let invalid = filename.trim().is_empty()
        || filename == "."
        || filename == ".."
        || filename.contains(['/', '\\', '\0']);
    if invalid {
        return Err(AppError::Validation(format!(
            "Invalid filename '{filename}'"
        )));
    }
    Ok(filename)
}

fn upload_path(dir: &Path, filename: &str) -> Result<PathBuf, AppError> {
    Ok(dir.join(validate_filename(filename)?))
}

/// Writes the file under `dir`, replacing any previous upload with the same name.
pub async fn save_upload(dir: &Path, file: &SelectedFile) -> Result<UploadReceipt, AppError> {
    let path = upload_path(dir, &file.name)?;
    tokio::fs::write(&path, &file.bytes).await?;

    Ok(UploadReceipt {
        filename: file.name.clone(),
        size: file.size(),
        status: "uploaded".to_string(),
        message: "File successfully uploaded and pending processing".to_string(),
    })
}

pub async fn delete_upload(dir: &Path, filename: &str) -> Result<DeleteReceipt, AppError> {
    let path = upload_path(dir, filename)?;
    if !tokio::fs::try_exists(&path).await? {
        return Err(AppError::NotFound("File not found".to_string()));
    }
    tokio::fs::remove_file(&path).await?;

    Ok(DeleteReceipt {
        status: "success".to_string(),
        message: format!("File {filename} successfully deleted"),
    })
}
