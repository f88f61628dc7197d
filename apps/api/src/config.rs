use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

const DEFAULT_MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub port: u16,
    #[serde(skip)]
    pub rust_log: String,
    pub upload_dir: PathBuf,
    pub max_file_size: usize,
    /// Lowercase, each with a leading dot (".pdf").
    pub allowed_extensions: Vec<String>,
    pub job_configs_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            upload_dir: std::env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| "uploads".to_string())
                .into(),
            max_file_size: match std::env::var("MAX_FILE_SIZE") {
                Ok(v) => v
                    .trim()
                    .parse::<usize>()
                    .context("MAX_FILE_SIZE must be a size in bytes")?,
                Err(_) => DEFAULT_MAX_FILE_SIZE,
            },
            allowed_extensions: parse_extensions(
                &std::env::var("ALLOWED_EXTENSIONS").unwrap_or_else(|_| ".pdf".to_string()),
            ),
            job_configs_path: std::env::var("JOB_CONFIGS_PATH")
                .unwrap_or_else(|_| "job_configs.json".to_string())
                .into(),
        })
    }

    /// Maximum upload size in whole megabytes, as shown to users.
    pub fn max_file_size_mb(&self) -> usize {
        self.max_file_size / (1024 * 1024)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8000,
            rust_log: "info".to_string(),
            upload_dir: PathBuf::from("uploads"),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            allowed_extensions: vec![".pdf".to_string()],
            job_configs_path: PathBuf::from("job_configs.json"),
        }
    }
}

/// Splits a comma-separated extension list into normalised ".ext" entries.
fn parse_extensions(raw: &str) -> Vec<String> {
    let mut extensions: Vec<String> = Vec::new();
    for ext in raw
        .split(',')
        .map(|e| e.trim().trim_start_matches('.').to_lowercase())
        .filter(|e| !e.is_empty())
    {
        let ext = format!(".{ext}");
        if !extensions.contains(&ext) {
            extensions.push(ext);
        }
    }
    extensions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extensions_normalises() {
        assert_eq!(
            parse_extensions(".PDF, docx ,,.pdf"),
            vec![".pdf".to_string(), ".docx".to_string()]
        );
    }

    #[test]
    fn test_parse_extensions_empty() {
        assert!(parse_extensions("").is_empty());
    }

    #[test]
    fn test_default_limit_is_five_megabytes() {
        let config = Config::default();
        assert_eq!(config.max_file_size, 5_242_880);
        assert_eq!(config.max_file_size_mb(), 5);
    }
}
