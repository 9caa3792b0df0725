use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("cache file not found: {path}")]
    CacheMissing { path: PathBuf },

    #[error("cache file corrupt: {path}: {reason}")]
    CacheCorrupt { path: PathBuf, reason: String },

    #[error("webhook rejected payload with status {status}: {body}")]
    ClientRejected { status: u16, body: String },

    #[error("webhook submission failed: {reason}")]
    SubmissionFailed { reason: String },

    #[error("configuration error: {message}")]
    ConfigError { message: String },

    #[error("invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),
}

impl AppError {
    /// Configuration problems map to exit code 2, everything else to 1.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            AppError::ConfigError { .. } | AppError::InvalidConfigValueError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
