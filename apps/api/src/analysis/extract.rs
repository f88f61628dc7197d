use bytes::Bytes;

use crate::errors::AppError;

/// Turns uploaded document bytes into plain text.
/// Called from a blocking task: implementations may be CPU-heavy.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &Bytes) -> Result<String, AppError>;
}

pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &Bytes) -> Result<String, AppError> {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            AppError::UnprocessableEntity(format!("Error extracting text from PDF: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_unprocessable() {
        let err = PdfTextExtractor
            .extract(&Bytes::from_static(b"definitely not a pdf"))
            .unwrap_err();
        match err {
            AppError::UnprocessableEntity(msg) => {
                assert!(msg.starts_with("Error extracting text from PDF"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
