//! Error types for GymLog core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these to
//! user-friendly messages. Only conditions a caller can meaningfully react
//! to are surfaced here; anything else is absorbed where it occurs.

use thiserror::Error;

/// Result type alias for GymLog operations.
pub type Result<T> = std::result::Result<T, GymError>;

/// Core error type for GymLog operations.
#[derive(Debug, Error)]
pub enum GymError {
    /// Uniqueness constraint violation (e.g., duplicate exercise name)
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for GymError {
    fn from(err: std::io::Error) -> Self {
        GymError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for GymError {
    fn from(err: serde_json::Error) -> Self {
        GymError::Validation(err.to_string())
    }
}

impl From<rusqlite::Error> for GymError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(code, ref message)
                if code.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                GymError::Constraint(
                    message
                        .clone()
                        .unwrap_or_else(|| "uniqueness constraint violated".to_string()),
                )
            }
            other => GymError::Storage(format!("SQLite error: {}", other)),
        }
    }
}
