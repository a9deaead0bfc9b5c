//! Error types for studyfocus.

use thiserror::Error;

/// Errors that can occur in studyfocus.
#[derive(Debug, Error)]
pub enum StudyFocusError {
    /// The aggregate store could not be reached or rejected a write.
    #[error("Persistence unavailable: {0}")]
    PersistenceUnavailable(String),

    /// A focus length outside the allowed presets was requested.
    #[error("Invalid duration selection: {0} minutes (allowed: 25, 50, 90)")]
    InvalidDurationSelection(u32),

    /// Local database failure.
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration could not be loaded or saved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A requested record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// User-supplied input failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Terminal setup, drawing, or event polling failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),
}
