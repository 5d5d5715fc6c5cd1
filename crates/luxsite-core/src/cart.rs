//! # Cart Ledger
//!
//! Ordered record of the listings a shopper intends to buy this session.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Ledger Operations                               │
//! │                                                                         │
//! │  Presentation Action       Store Operation          Ledger Change       │
//! │  ───────────────────       ───────────────          ─────────────       │
//! │                                                                         │
//! │  "Buy Now" ──────────────► add_to_cart() ─────────► entries.push(p)    │
//! │                                                                         │
//! │  "Remove" ───────────────► remove_from_cart() ────► first match out    │
//! │                                                                         │
//! │  Simulate / confirm ─────► clear_cart() ──────────► entries.clear()    │
//! │                                                                         │
//! │  Cart badge ─────────────► cart_count() ──────────► (read only)        │
//! │  Subtotal row ───────────► cart_subtotal() ───────► (read only)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - The ledger is a multiset by insertion: adding a listing twice yields two
//!   entries, there is no quantity field.
//! - Entries share the catalog's `Arc<Product>`; the ledger never copies or
//!   edits a product.
//! - The subtotal is summed on every call and never cached.

use std::sync::Arc;

use crate::money::Money;
use crate::types::Product;

/// The shopping cart.
#[derive(Debug, Clone, Default)]
pub struct CartLedger {
    entries: Vec<Arc<Product>>,
}

impl CartLedger {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        CartLedger {
            entries: Vec::new(),
        }
    }

    /// Appends `product` to the end of the cart. Always succeeds.
    pub fn add(&mut self, product: Arc<Product>) {
        self.entries.push(product);
    }

    /// Removes the first entry whose product id is `id` and returns it.
    ///
    /// Removing an id that is not in the cart is a no-op and returns `None`.
    /// With duplicates, each call takes out exactly one entry, so a shopper
    /// who bought the same listing twice can back out one at a time.
    pub fn remove(&mut self, id: &str) -> Option<Arc<Product>> {
        let index = self.entries.iter().position(|p| p.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Removes every entry whose product id is `id`; returns how many went.
    pub fn remove_all(&mut self, id: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|p| p.id != id);
        before - self.entries.len()
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[Arc<Product>] {
        &self.entries
    }

    /// Sum of `price` over current entries; zero for an empty cart.
    pub fn subtotal(&self) -> Money {
        self.entries.iter().map(|p| p.price()).sum()
    }

    /// Number of entries (cart badge).
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
