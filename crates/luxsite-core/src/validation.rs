//! # Validation Module
//!
//! Field checks run once, when a [`Catalog`](crate::Catalog) is built.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Loading                                    │
//! │                                                                         │
//! │  JSON text ──► serde (shape, unknown fields) ──► validate_product()    │
//! │                                                    │                    │
//! │                                                    ├── id format        │
//! │                                                    ├── title, industry  │
//! │                                                    ├── price >= 0       │
//! │                                                    └── thumbnail URL    │
//! │                                                                         │
//! │  Any failure aborts the whole load. A catalog is either fully valid    │
//! │  or it does not exist.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Store operations after startup never validate: the cart accepts duplicate
//! entries and unknown ids are no-ops.

use crate::error::ValidationError;
use crate::types::Product;
use crate::{MAX_PRICE_CENTS, MAX_PRODUCT_ID_LEN, MAX_TITLE_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product id.
///
/// ## Rules
/// - Must not be empty
/// - At most 64 characters
/// - Only alphanumeric characters, hyphens, underscores
///
/// ## Example
/// ```rust
/// use luxsite_core::validation::validate_product_id;
///
/// assert!(validate_product_id("site-001").is_ok());
/// assert!(validate_product_id("").is_err());
/// assert!(validate_product_id("site 001").is_err());
/// ```
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > MAX_PRODUCT_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_PRODUCT_ID_LEN,
        });
    }

    if !id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a product title: required, at most 200 characters.
pub fn validate_title(title: &str) -> ValidationResult<()> {
    let title = title.trim();

    if title.is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::TooLong {
            field: "title".to_string(),
            max: MAX_TITLE_LEN,
        });
    }

    Ok(())
}

/// Validates an industry label. Required; the filter searches it.
pub fn validate_industry(industry: &str) -> ValidationResult<()> {
    if industry.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "industry".to_string(),
        });
    }

    Ok(())
}

/// Validates a thumbnail reference: an `http://` or `https://` URL.
pub fn validate_thumbnail(url: &str) -> ValidationResult<()> {
    let url = url.trim();

    if url.is_empty() {
        return Err(ValidationError::Required {
            field: "thumbnail".to_string(),
        });
    }

    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(ValidationError::InvalidFormat {
            field: "thumbnail".to_string(),
            reason: "must be an http(s) URL".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free listings)
/// - At most [`MAX_PRICE_CENTS`]
///
/// ## Example
/// ```rust
/// use luxsite_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(2_500_000).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// assert!(validate_price_cents(i64::MAX).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

// =============================================================================
// Record Validator
// =============================================================================

/// Runs every field check on a catalog record, stopping at the first failure.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_id(&product.id)?;
    validate_title(&product.title)?;
    validate_price_cents(product.price_cents)?;
    validate_industry(&product.industry)?;
    validate_thumbnail(&product.thumbnail)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
