//! File picker: decides which selected files are handed to the caller.
//!
//! Mirrors the upload widget's contract: a single PDF, within the size limit,
//! is forwarded to the `on_file_select` callback exactly once. Anything else is
//! rejected and the callback never runs.

use std::path::Path;

use bytes::Bytes;
use tracing::warn;

use crate::config::Config;
use crate::errors::AppError;

pub const PDF_MIME: &str = "application/pdf";

/// Content types browsers and CLI clients send when they don't know the type.
const UNDECLARED_TYPES: &[&str] = &["", "application/octet-stream"];

/// A file as picked by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl SelectedFile {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Lowercased extension with its leading dot, e.g. ".pdf".
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e.to_lowercase()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AcceptPolicy {
    pub mime_types: Vec<String>,
    pub extensions: Vec<String>,
    pub max_size: usize,
    pub multiple: bool,
}

impl AcceptPolicy {
    /// Single PDF up to the configured size.
    pub fn from_config(config: &Config) -> Self {
        Self {
            mime_types: vec![PDF_MIME.to_string()],
            extensions: config.allowed_extensions.clone(),
            max_size: config.max_file_size,
            multiple: false,
        }
    }

    /// Value for the HTML `accept` attribute, e.g. "application/pdf,.pdf".
    pub fn accept_attribute(&self) -> String {
        self.mime_types
            .iter()
            .chain(self.extensions.iter())
            .cloned()
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Checks a single file against type, extension and size rules.
    pub fn check(&self, file: &SelectedFile) -> Result<(), AppError> {
        let extension = file.extension().unwrap_or_default();
        if !self.extensions.contains(&extension) {
            warn!(filename = %file.name, extension = %extension, "invalid file extension");
            return Err(AppError::Validation(format!(
                "Invalid file extension. Allowed extensions: {}",
                self.extensions.join(", ")
            )));
        }

        if let Some(content_type) = file.content_type.as_deref() {
            let essence = content_type
                .split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .to_lowercase();
            if !UNDECLARED_TYPES.contains(&essence.as_str()) && !self.mime_types.contains(&essence)
            {
                warn!(filename = %file.name, content_type, "invalid file type");
                return Err(AppError::Validation(format!(
                    "Invalid file type '{essence}'. Only PDF files are accepted"
                )));
            }
        }

        if file.size() == 0 {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }

        if file.size() > self.max_size {
            warn!(
                filename = %file.name,
                size = file.size(),
                max = self.max_size,
                "file exceeds maximum allowed size"
            );
            return Err(AppError::Validation(format!(
                "File size exceeds maximum allowed size of {}MB",
                self.max_size / (1024 * 1024)
            )));
        }

        Ok(())
    }

    /// Forwards the one acceptable file to `on_file_select` and returns its result.
    /// Empty, multi-file and invalid selections are rejected without calling it.
    pub fn select<R>(
        &self,
        mut files: Vec<SelectedFile>,
        on_file_select: impl FnOnce(SelectedFile) -> R,
    ) -> Result<R, AppError> {
        if files.is_empty() {
            return Err(AppError::Validation("No file selected".to_string()));
        }
        if files.len() > 1 && !self.multiple {
            warn!(count = files.len(), "multiple files selected");
            return Err(AppError::Validation(
                "Only one file can be uploaded at a time".to_string(),
            ));
        }

        let file = files.swap_remove(0);
        self.check(&file)?;
        Ok(on_file_select(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> AcceptPolicy {
        AcceptPolicy::from_config(&Config::default())
    }

    fn file(name: &str, content_type: Option<&str>, size: usize) -> SelectedFile {
        SelectedFile {
            name: name.to_string(),
            content_type: content_type.map(String::from),
            bytes: Bytes::from(vec![b'%'; size]),
        }
    }

    #[test]
    fn test_single_pdf_invokes_callback_once_with_that_file() {
        let picked = file("resume.pdf", Some(PDF_MIME), 1024);
        let mut calls = Vec::new();
        policy()
            .select(vec![picked.clone()], |f| calls.push(f))
            .unwrap();
        assert_eq!(calls, vec![picked]);
    }

    #[test]
    fn test_non_pdf_does_not_invoke_callback() {
        let mut called = false;
        let result = policy().select(vec![file("notes.txt", Some("text/plain"), 10)], |_| {
            called = true;
        });
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(!called);
    }

    #[test]
    fn test_pdf_name_with_wrong_type_is_rejected() {
        let mut called = false;
        let result = policy().select(vec![file("resume.pdf", Some("image/png"), 10)], |_| {
            called = true;
        });
        assert!(result.is_err());
        assert!(!called);
    }

    #[test]
    fn test_multiple_files_do_not_invoke_callback() {
        let mut called = false;
        let files = vec![
            file("a.pdf", Some(PDF_MIME), 10),
            file("b.pdf", Some(PDF_MIME), 10),
        ];
        let result = policy().select(files, |_| called = true);
        assert!(result.is_err());
        assert!(!called);
    }

    #[test]
    fn test_oversize_file_rejected() {
        let mut called = false;
        let big = file("big.pdf", Some(PDF_MIME), 5 * 1024 * 1024 + 1);
        let err = policy().select(vec![big], |_| called = true).unwrap_err();
        assert_eq!(
            err.public_message(),
            "File size exceeds maximum allowed size of 5MB"
        );
        assert!(!called);
    }

    #[test]
    fn test_file_at_limit_accepted() {
        let exact = file("exact.pdf", Some(PDF_MIME), 5 * 1024 * 1024);
        assert!(policy().select(vec![exact], |_| ()).is_ok());
    }

    #[test]
    fn test_empty_selection_and_empty_file_rejected() {
        assert!(policy().select(Vec::new(), |_| ()).is_err());
        assert!(policy()
            .select(vec![file("empty.pdf", Some(PDF_MIME), 0)], |_| ())
            .is_err());
    }

    #[test]
    fn test_undeclared_type_falls_back_to_extension() {
        assert!(policy().check(&file("Resume.PDF", None, 10)).is_ok());
        assert!(policy()
            .check(&file("resume.pdf", Some("application/octet-stream"), 10))
            .is_ok());
        assert!(policy().check(&file("resume.doc", None, 10)).is_err());
    }

    #[test]
    fn test_content_type_parameters_ignored() {
        assert!(policy()
            .check(&file("resume.pdf", Some("Application/PDF; charset=binary"), 10))
            .is_ok());
    }

    #[test]
    fn test_accept_attribute() {
        assert_eq!(policy().accept_attribute(), "application/pdf,.pdf");
    }
}
