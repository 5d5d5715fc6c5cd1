//! # Storefront Errors
//!
//! Two error types live here:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  AppError  - startup / session failures. Fatal, reported on stderr.    │
//! │              Config errors, unreadable or invalid catalog, stdio.      │
//! │                                                                         │
//! │  ApiError  - one command failed. Serialized into the JSON reply and    │
//! │              the session carries on.                                   │
//! │                                                                         │
//! │  {"ok":false,"error":{"code":"NOT_FOUND","message":"..."}}             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use luxsite_core::CoreError;
use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;

// =============================================================================
// App Error
// =============================================================================

/// Errors that stop the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The catalog file could not be read.
    #[error("Cannot read catalog {}: {}", .path.display(), .source)]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog was read but is not a valid catalog.
    #[error("Catalog rejected: {0}")]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot encode reply: {0}")]
    Encode(#[from] serde_json::Error),
}

// =============================================================================
// API Error
// =============================================================================

/// Error returned for a single failed command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown product id
    NotFound,

    /// Argument rejected (e.g. unknown view name)
    ValidationError,

    /// Line could not be parsed as a command
    InvalidCommand,

    /// Should not happen during a session
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_command(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidCommand, message)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(_) => ApiError::new(ErrorCode::NotFound, err.to_string()),
            CoreError::Validation(e) => ApiError::new(ErrorCode::ValidationError, e.to_string()),
            CoreError::InvalidCatalog { .. } => {
                tracing::error!("catalog error during session: {}", err);
                ApiError::new(ErrorCode::Internal, "Catalog unavailable")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
