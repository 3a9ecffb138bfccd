//! Error types for the Clash Royale client
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! HTTP failures are mapped to a variant per API status class, mirroring
//! the upstream API's documented error responses.

use thiserror::Error;

/// The main error type for the Clash Royale client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("API key is required. Create one at https://developer.clashroyale.com")]
    InvalidApiKey,

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Index {index} is out of range ({len} items available)")]
    OutOfRange { index: usize, len: usize },

    #[error("Unsupported index: {message}")]
    UnsupportedIndex { message: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Bad request: {body}")]
    BadRequest { body: String },

    #[error("Unauthorized; check the API key and its allowed IP addresses: {body}")]
    Unauthorized { body: String },

    #[error("Not found: {body}")]
    NotFound { body: String },

    #[error("Rate limited by the API: {body}")]
    RateLimited { body: String },

    #[error("Server error (HTTP {status}): {body}")]
    Server { status: u16, body: String },

    #[error("Unexpected HTTP status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    // ============================================================================
    // Data Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create an invalid configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Create an unsupported index error
    pub fn unsupported_index(message: impl Into<String>) -> Self {
        Self::UnsupportedIndex {
            message: message.into(),
        }
    }

    /// Create an out-of-range error
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }

    /// Create a generic error from a message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    /// Map a non-success HTTP status to the matching error variant
    pub(crate) fn from_status(status: u16, body: String) -> Self {
        match status {
            400 => Self::BadRequest { body },
            401 | 403 => Self::Unauthorized { body },
            404 => Self::NotFound { body },
            429 => Self::RateLimited { body },
            500..=599 => Self::Server { status, body },
            _ => Self::UnexpectedStatus { status, body },
        }
    }

    /// Check if this error is worth retrying at the transport layer
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::RateLimited { .. } | Error::Server { .. }
        )
    }
}

/// Result type alias for the Clash Royale client
pub type Result<T> = std::result::Result<T, Error>;
