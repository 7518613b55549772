use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::analysis::courses::DEFAULT_COURSE_COUNT;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Unset means the in-memory sink.
    pub database_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    /// Accepted uploads are copied here for the admin's reference.
    pub upload_dir: PathBuf,
    pub default_course_count: u8,
    pub max_upload_bytes: usize,
    /// When set, admin endpoints require a matching `x-admin-token` header.
    pub admin_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            upload_dir: std::env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| "./uploaded_resumes".to_string())
                .into(),
            default_course_count: optional_env("DEFAULT_COURSE_COUNT")
                .map(|v| v.parse::<u8>())
                .transpose()
                .context("DEFAULT_COURSE_COUNT must be a number between 1 and 10")?
                .unwrap_or(DEFAULT_COURSE_COUNT),
            max_upload_bytes: optional_env("MAX_UPLOAD_BYTES")
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("MAX_UPLOAD_BYTES must be a byte count")?
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            admin_token: optional_env("ADMIN_TOKEN"),
        })
    }
}

/// Unset and empty are treated the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
impl Config {
    pub fn for_tests(upload_dir: PathBuf) -> Self {
        Config {
            database_url: None,
            port: 0,
            rust_log: "debug".to_string(),
            upload_dir,
            default_course_count: DEFAULT_COURSE_COUNT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            admin_token: None,
        }
    }
}
