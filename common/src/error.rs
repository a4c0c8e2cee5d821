//! Error type definitions

use thiserror::Error;

/// Shared error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Encode error: {0}")]
    Encode(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
