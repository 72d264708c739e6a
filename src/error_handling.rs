use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Input validation errors, raised before any network activity starts.
///
/// A validation failure blocks the whole run; no partial state is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No usable entries remained after normalization.
    #[error("empty: enter at least one domain or IP address")]
    Empty,

    /// More unique entries than the configured maximum.
    #[error("too_many: at most {max} domains or IPs per run, got {count}")]
    TooMany {
        /// Number of unique entries found in the input.
        count: usize,
        /// Configured maximum.
        max: usize,
    },
}

impl ValidationError {
    /// Short machine-readable code for this error (`empty` / `too_many`).
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::Empty => "empty",
            ValidationError::TooMany { .. } => "too_many",
        }
    }
}
