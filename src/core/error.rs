// src/core/error.rs

use thiserror::Error;

pub type TrackerResult<T> = Result<T, TrackerError>;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("expense not found: {0}")]
    NotFound(u64),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("invalid field: {0} (expected --d or --a)")]
    InvalidField(String),

    #[error("invalid id: {0}")]
    InvalidId(String),

    #[error("no ids left after {0}")]
    IdOverflow(u64),

    #[error("invalid month: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Usage: {0}")]
    Usage(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl TrackerError {
    pub fn usage(text: &str) -> Self {
        TrackerError::Usage(text.to_string())
    }
}
