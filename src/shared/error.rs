//! Shared Error Types
//!
//! This module defines the error types produced by the client library.
//!
//! # Error Categories
//!
//! - `ApiError` - failures talking to the routes API
//! - `StorageError` - failures persisting the session
//! - `StartupError` - failures building the application state
//!
//! Controllers decide how each failure is surfaced: display-only lists fall
//! back to empty results, credential flows raise an "invalid credentials"
//! flag, and favourite marking ignores failures.
//!
//! # Usage
//!
//! ```rust
//! use rutafy::shared::error::ApiError;
//!
//! let error = ApiError::status(401, "Incorrect username or password");
//! assert!(error.is_auth_rejected());
//! ```
use thiserror::Error;

/// Errors returned by the API client
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    /// Connection refused, DNS failure, or any other transport failure
    #[error("Network error: {message}")]
    Network {
        /// Human-readable error message
        message: String,
    },

    /// The server answered with a non-success status
    #[error("Request failed: {status} - {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, or the canonical reason when the body was unreadable
        message: String,
    },

    /// A protected endpoint was called without a session token
    #[error("Not authenticated")]
    Unauthorized,

    /// The response body was not the expected JSON document
    #[error("Failed to parse response: {message}")]
    Decode {
        /// Human-readable error message
        message: String,
    },

    /// A request body could not be encoded
    #[error("Failed to encode request: {message}")]
    Encode {
        /// Human-readable error message
        message: String,
    },

    /// The configured base URL and path do not form a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Create a new network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new status error
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Create a new decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a new encode error
    pub fn encode(message: impl Into<String>) -> Self {
        Self::Encode {
            message: message.into(),
        }
    }

    /// The server refused the request (any non-2xx answer).
    pub fn is_auth_rejected(&self) -> bool {
        matches!(self, Self::Status { .. })
    }

    /// The request could not be made with valid credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized | Self::Status { status: 401, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::status(status.as_u16(), err.to_string())
        } else {
            Self::network(err.to_string())
        }
    }
}

/// Errors raised while persisting session data
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while starting the application
#[derive(Debug, Error)]
pub enum StartupError {
    /// The API client could not be built from the configuration
    #[error("Cannot create API client: {0}")]
    Api(#[from] ApiError),

    /// The async runtime could not be started
    #[error("Cannot start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}
