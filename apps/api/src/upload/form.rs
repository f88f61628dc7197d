use axum::extract::Multipart;
use tracing::debug;

use crate::errors::AppError;
use crate::upload::picker::SelectedFile;

/// Fields of an upload / analyze form.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub files: Vec<SelectedFile>,
    pub job_id: Option<String>,
}

/// Collects every `file` part and the optional `job_id` field.
/// Unknown fields are skipped.
pub async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => {
                // An empty file input still posts a part with no filename.
                let Some(filename) = field.file_name().map(String::from).filter(|n| !n.is_empty())
                else {
                    continue;
                };
                let content_type = field.content_type().map(String::from);
                let bytes = field.bytes().await?;
                debug!(filename = %filename, size = bytes.len(), "received file part");
                form.files.push(SelectedFile {
                    name: filename,
                    content_type,
                    bytes,
                });
            }
            Some("job_id") => {
                let value = field.text().await?;
                let value = value.trim();
                if !value.is_empty() {
                    form.job_id = Some(value.to_string());
                }
            }
            _ => {}
        }
    }

    Ok(form)
}
