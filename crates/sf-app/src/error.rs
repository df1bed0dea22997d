//! Error types for the sf-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and gives frontends one error interface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Design error: {0}")]
    Design(String),

    #[error("Failed to read design file: {path}")]
    DesignFileRead {
        path: PathBuf,
        source: sf_project::ProjectError,
    },

    #[error("Failed to write design file: {path}")]
    DesignFileWrite {
        path: PathBuf,
        source: sf_project::ProjectError,
    },

    #[error("Design validation failed: {0}")]
    Validation(#[from] sf_project::ValidationError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sf-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<sf_project::ProjectError> for AppError {
    fn from(err: sf_project::ProjectError) -> Self {
        match err {
            sf_project::ProjectError::Validation(e) => AppError::Validation(e),
            sf_project::ProjectError::Io(e) => AppError::Io(e),
            other => AppError::Design(other.to_string()),
        }
    }
}
