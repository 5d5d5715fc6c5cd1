//! # luxsite-core: Session State for the LuxSite Storefront
//!
//! This crate is the **heart** of the storefront. It owns the catalog, the
//! cart, the current view and the product modal, and computes the derived
//! values (filtered listings, subtotal) the presentation layer renders.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      LuxSite Storefront Architecture                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Presentation (web / CLI session)               │   │
//! │  │   Header ──► Products ──► Product Modal ──► Cart ──► Checkout  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ reads state, calls operations          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ luxsite-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │                        ┌───────────┐                            │   │
//! │  │                        │   Store   │                            │   │
//! │  │                        └─────┬─────┘                            │   │
//! │  │        ┌──────────────┬──────┴───────┬──────────────┐           │   │
//! │  │   ┌────▼────┐   ┌─────▼─────┐  ┌─────▼─────┐  ┌─────▼─────┐     │   │
//! │  │   │ Catalog │   │CartLedger │  │  filter   │  │ViewRouter │     │   │
//! │  │   └─────────┘   └───────────┘  └───────────┘  └───────────┘     │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PAYMENTS • NO PERSISTENCE • SYNCHRONOUS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, View, Modal, FilterState)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Field checks applied when a catalog is loaded
//! - [`catalog`] - The immutable product catalog
//! - [`cart`] - The cart ledger
//! - [`filter`] - Search / premium filtering over the catalog
//! - [`router`] - Current view and modal
//! - [`store`] - The application state store composing everything above
//!
//! ## Example Usage
//!
//! ```rust
//! use luxsite_core::{Catalog, Store, View};
//!
//! let mut store = Store::new(Catalog::sample());
//!
//! store.add_to_cart_by_id("site-003").unwrap();
//! store.set_view("cart").unwrap();
//!
//! assert_eq!(store.current_view(), View::Cart);
//! assert_eq!(store.cart_subtotal().cents(), 350_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod money;
pub mod router;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::CartLedger;
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use filter::filter_products;
pub use money::Money;
pub use router::ViewRouter;
pub use store::{CheckoutSummary, OrderReceipt, Store};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product id.
pub const MAX_PRODUCT_ID_LEN: usize = 64;

/// Maximum length of a product title.
pub const MAX_TITLE_LEN: usize = 200;

/// Highest listing price accepted in a catalog: $1,000,000,000.00.
///
/// A cart would need over nine million entries at this price before its
/// subtotal left the `i64` range.
pub const MAX_PRICE_CENTS: i64 = 100_000_000_000;
