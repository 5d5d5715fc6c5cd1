//! # Errors
//!
//! What can go wrong inside luxsite-core, and where it surfaces.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog load (startup)                                                 │
//! │    bad JSON / unknown field ───► CoreError::InvalidCatalog   (fatal)   │
//! │    bad field / repeated id ────► CoreError::Validation(..)   (fatal)   │
//! │                                                                         │
//! │  Session (after startup)                                                │
//! │    add/open unknown id ────────► CoreError::ProductNotFound            │
//! │    set_view("bogus-view") ─────► CoreError::Validation(NotAllowed)     │
//! │                                  view left unchanged                    │
//! │                                                                         │
//! │  The storefront app turns these into AppError (startup) or ApiError    │
//! │  (one failed command).                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Most store operations cannot fail at all. Removing an unknown id from the
//! cart or closing an already closed modal are no-ops, not errors.

use thiserror::Error;

/// Result alias used across the crate.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors returned by catalog construction and store operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No listing with this id exists in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The catalog source could not be parsed: malformed JSON, or a record
    /// with a missing or unknown field. The storefront refuses to run with a
    /// partially loaded catalog.
    #[error("Invalid catalog: {reason}")]
    InvalidCatalog { reason: String },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// A single field that failed a check.
///
/// `field` names the offending field (`id`, `title`, `view`, ...).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: String },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// e.g. an id with spaces, a thumbnail that is not an http(s) URL.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// `value` is not one of `allowed`. Raised for unknown view names.
    #[error("{field} '{value}' must be one of: {allowed:?}")]
    NotAllowed {
        field: String,
        value: String,
        allowed: Vec<String>,
    },

    /// Two catalog records share an id.
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}
