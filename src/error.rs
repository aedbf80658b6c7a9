//! Custom error types for graph-backup
//!
//! This module defines the error hierarchy for backup runs using thiserror
//! for ergonomic error definitions.

use std::path::Path;

use thiserror::Error;

/// The main error type for backup operations
#[derive(Error, Debug)]
pub enum BackupError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Directory or file I/O errors
    #[error("I/O error at {path}: {message}")]
    Io { path: String, message: String },

    /// A record could not be encoded in the requested format
    #[error("Serialization error for {path}: {message}")]
    Serialization { path: String, message: String },

    /// A backup file could not be decoded
    #[error("Parse error in {path}: {message}")]
    Parse { path: String, message: String },

    /// The request capability failed (network, auth, HTTP status)
    #[error("Request to {endpoint} failed: {message}")]
    Fetch { endpoint: String, message: String },

    /// The response did not carry a `value` array of objects
    #[error("Invalid response from {endpoint}: {message}")]
    InvalidResponse { endpoint: String, message: String },

    /// A record has no usable name field
    #[error("{category}: record {record} has no usable '{field}' field")]
    MissingField {
        category: String,
        field: String,
        record: String,
    },
}

impl BackupError {
    /// Create an I/O error for a path
    pub fn io(path: impl AsRef<Path>, message: impl ToString) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a serialization error for a path
    pub fn serialization(path: impl AsRef<Path>, message: impl ToString) -> Self {
        Self::Serialization {
            path: path.as_ref().display().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a parse error for a path
    pub fn parse(path: impl AsRef<Path>, message: impl ToString) -> Self {
        Self::Parse {
            path: path.as_ref().display().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a fetch error for an endpoint
    pub fn fetch(endpoint: impl Into<String>, message: impl ToString) -> Self {
        Self::Fetch {
            endpoint: endpoint.into(),
            message: message.to_string(),
        }
    }

    /// Create an invalid response error for an endpoint
    pub fn invalid_response(endpoint: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidResponse {
            endpoint: endpoint.into(),
            message: message.to_string(),
        }
    }

    /// Check if this is a fetch error
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }

    /// Check if this is an I/O error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

/// Result type alias for backup operations
pub type BackupResultT<T> = Result<T, BackupError>;
