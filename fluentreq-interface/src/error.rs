//! Error types for request executors.

use thiserror::Error;

/// Errors a backend may report while executing a request.
#[derive(Debug, Error)]
pub enum Error {
    /// The provided URL is invalid.
    #[error("Invalid URL")]
    InvalidUrl,
    /// An underlying I/O error occurred.
    #[error("IO Error")]
    Io(#[from] std::io::Error),
    /// The request timed out before completion.
    #[error("Request is not finished within timeout")]
    RequestTimeout,
    /// An option, header or cookie could not be applied to the request.
    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

/// Result type for executor operations.
pub type Result<T> = std::result::Result<T, Error>;
