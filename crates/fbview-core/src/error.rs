//! Error types for fbview

use thiserror::Error;

/// Main error type for fbview
#[derive(Debug, Error)]
pub enum FbviewError {
    /// Response not found in the collection
    #[error("Response not found: {0}")]
    ResponseNotFound(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for fbview
pub type Result<T> = std::result::Result<T, FbviewError>;
