//! Error handling for ParkPredict
//!
//! The core logic itself is infallible by design: corrupt or missing cached
//! records fall back to defaults rather than erroring. Errors surface only at
//! the persistence boundary and when decoding wire values from the frontend.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum ParkError {
    // Storage boundary errors
    #[error("storage backend unavailable")]
    StorageUnavailable,

    #[error("storage write failed: {0}")]
    StorageWrite(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Wire decoding errors
    #[error("unknown mode: {0}")]
    UnknownMode(String),

    #[error("unknown location id: {0}")]
    UnknownLocation(String),
}

/// Convenience result type
pub type ParkResult<T> = Result<T, ParkError>;
