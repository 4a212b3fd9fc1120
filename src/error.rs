//! Error types for the Float API client
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for the Float API client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Client-Side Request Errors
    // ============================================================================
    #[error("Missing required field '{field}' for {resource}")]
    MissingRequiredField { field: String, resource: String },

    #[error("The Float API does not support {verb} for {resource}")]
    UnsupportedOperation { resource: String, verb: String },

    // ============================================================================
    // Remote Outcome Errors
    // ============================================================================
    #[error("Expected HTTP {expected}, got {actual}: {body}")]
    UnexpectedStatus {
        expected: u16,
        actual: u16,
        body: String,
    },

    #[error("Server rejected submitted data (422): {details}")]
    ValidationRejected { details: String },

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Pagination total count is {expected}, but {actual} records were aggregated")]
    PaginationCountMismatch { expected: u64, actual: u64 },

    #[error("Response is missing pagination header '{header}'")]
    MissingPaginationHeader { header: String },

    // ============================================================================
    // Transport and Decoding Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing required field error
    pub fn missing_field(field: impl Into<String>, resource: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            field: field.into(),
            resource: resource.into(),
        }
    }

    /// Create an unsupported operation error
    pub fn unsupported(resource: impl Into<String>, verb: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            resource: resource.into(),
            verb: verb.into(),
        }
    }

    /// Create an unexpected status error
    pub fn unexpected_status(expected: u16, actual: u16, body: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            expected,
            actual,
            body: body.into(),
        }
    }

    /// Create a validation rejected error
    pub fn validation_rejected(details: impl Into<String>) -> Self {
        Self::ValidationRejected {
            details: details.into(),
        }
    }

    /// Create a missing pagination header error
    pub fn missing_header(header: impl Into<String>) -> Self {
        Self::MissingPaginationHeader {
            header: header.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Check if this error was raised before any network call was made
    pub fn is_client_side(&self) -> bool {
        matches!(
            self,
            Error::Config { .. }
                | Error::InvalidUrl(_)
                | Error::MissingRequiredField { .. }
                | Error::UnsupportedOperation { .. }
        )
    }
}

/// Result type alias for the Float API client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
