//! Error types
//!
//! Only contract violations surface as errors. Missing data never does.

use thiserror::Error;

/// Analytics error types
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("Malformed input: {0}")]
    Malformed(String),

    #[error("Unknown day name: {0:?}")]
    InvalidDay(String),

    #[error("Unknown meal slot: {0:?} (expected breakfast, lunch or dinner)")]
    InvalidSlot(String),

    #[error("Invalid timestamp {value:?}: {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for analytics operations
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl AnalyticsError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        AnalyticsError::Malformed(msg.into())
    }
}
