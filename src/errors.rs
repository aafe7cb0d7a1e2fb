/*!
 * Error types for the semtag application.
 *
 * This module contains custom error types for different parts of the
 * application, using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when calling an external capability
#[derive(Error, Debug)]
pub enum CapabilityError {
    /// Error when making a lookup request fails
    #[error("Lookup request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing a lookup response fails
    #[error("Failed to parse lookup response: {0}")]
    ParseError(String),

    /// Error when a lookup does not complete within its bounded timeout
    #[error("Lookup timed out after {0} seconds")]
    Timeout(u64),

    /// Error returned by the remote service itself
    #[error("Lookup responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the service
        message: String,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from an external capability
    #[error("Capability error: {0}")]
    Capability(#[from] CapabilityError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
