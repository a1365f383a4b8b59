//! Unified error types for Mesmer

use thiserror::Error;

/// Unified error type for all Mesmer operations
#[derive(Error, Debug)]
pub enum MesmerError {
    // Remote generation service errors
    #[error("Generation service error: {0}")]
    Service(String),

    #[error("Auth error: {0}")]
    Auth(String),

    // Acceptance errors
    #[error("Artwork validation failed: {0}")]
    Validation(String),

    // Marketplace companion errors
    #[error("Marketplace error: {0}")]
    Market(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Generic
    #[error("{0}")]
    Other(String),
}

/// Result type alias using MesmerError
pub type Result<T> = std::result::Result<T, MesmerError>;
