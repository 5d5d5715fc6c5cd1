//! # Catalog Filter
//!
//! Pure search over catalog listings for the products view.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  filter_products(items, query, premium_only)                            │
//! │                                                                         │
//! │  for each product, in catalog order:                                   │
//! │       │                                                                 │
//! │       ├── premium_only && !premium ──────────────► drop                │
//! │       │                                                                 │
//! │       ├── query blank (empty / whitespace) ──────► keep                │
//! │       │                                                                 │
//! │       └── "title industry features..".lowercase()                      │
//! │               contains query.trim().lowercase() ? keep : drop          │
//! │                                                                         │
//! │  No ranking: output is an order-preserving subsequence of the input.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Whitespace around the query is not significant: `"integration "` and
//! `"integration"` select the same listings. Inner spaces are kept, so
//! `"seo basics"` must appear as a phrase.
//!
//! The catalog is small, so the listing is recomputed on every call.

use std::sync::Arc;

use crate::types::Product;

/// Filters `items` by the premium flag and a case-insensitive substring query.
///
/// ## Example
/// ```rust
/// use luxsite_core::{filter_products, Catalog};
///
/// let catalog = Catalog::sample();
///
/// let premium = filter_products(catalog.all(), "", true);
/// assert_eq!(premium.len(), 2);
///
/// // site-003 mentions "retail" but is not premium
/// assert!(filter_products(catalog.all(), "retail", true).is_empty());
/// ```
pub fn filter_products(
    items: &[Arc<Product>],
    query: &str,
    premium_only: bool,
) -> Vec<Arc<Product>> {
    let needle = query.trim().to_lowercase();

    items
        .iter()
        .filter(|p| !premium_only || p.premium)
        .filter(|p| needle.is_empty() || p.search_text().contains(&needle))
        .cloned()
        .collect()
}
