//! # API Errors
//!
//! Error types for API operations.

use thiserror::Error;

/// Errors that can occur during API operations.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Network or HTTP error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Server returned an error response.
    #[error("server error: {status} - {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Error message from the server.
        message: String,
    },

    /// Response body could not be interpreted.
    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
