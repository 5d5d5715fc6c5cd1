//! # Application State Store
//!
//! The single owner of all session state and the only surface presentation
//! code calls into.
//!
//! ## Composition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                              Store                                      │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────────────────┐  │
//! │  │   Catalog    │  │  CartLedger  │  │         ViewRouter           │  │
//! │  │  (frozen)    │  │  Vec<Arc<    │  │  view: View                  │  │
//! │  │              │  │    Product>> │  │  modal: Modal                │  │
//! │  └──────┬───────┘  └──────────────┘  └──────────────────────────────┘  │
//! │         │                                                               │
//! │         └──► filter_products(query, premium_only)   (computed on read) │
//! │                                                                         │
//! │  Reads:  current_view, current_modal, cart_entries, cart_subtotal,     │
//! │          cart_count, filtered_products, checkout_summary               │
//! │  Writes: set_view, navigate, open_product, close_modal, add_to_cart,   │
//! │          remove_from_cart, clear_cart, confirm_order, fail_order       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store is an ordinary value: build one per session and pass it by
//! reference. Every operation is synchronous and runs to completion, and no
//! derived value is memoized.
//!
//! ## Order Hooks
//! Payment happens outside this crate. Whoever talks to the payment provider
//! reports the outcome back:
//! - [`Store::confirm_order`]: success; the cart is cleared and a receipt
//!   returned. The demo "Simulate Order" button calls this directly.
//! - [`Store::fail_order`]: failure; the cart is left untouched so the
//!   shopper can retry.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::CartLedger;
use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::filter::filter_products;
use crate::money::Money;
use crate::router::ViewRouter;
use crate::types::{FilterState, Modal, Product, View};

// =============================================================================
// Derived Value Types
// =============================================================================

/// Totals shown on the checkout page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub item_count: usize,
    pub subtotal: Money,
    /// Equal to the subtotal; the storefront charges no tax or fees.
    pub total: Money,
}

/// Returned by [`Store::confirm_order`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    /// UUID v4.
    pub order_id: String,
    pub item_count: usize,
    pub total: Money,
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
}

// =============================================================================
// Store
// =============================================================================

/// Session state for one shopper.
#[derive(Debug, Clone)]
pub struct Store {
    catalog: Catalog,
    cart: CartLedger,
    router: ViewRouter,
}

impl Store {
    /// Creates a store on the home view with an empty cart and no modal.
    pub fn new(catalog: Catalog) -> Self {
        Store {
            catalog,
            cart: CartLedger::new(),
            router: ViewRouter::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_view(&self) -> View {
        self.router.view()
    }

    pub fn current_modal(&self) -> &Modal {
        self.router.modal()
    }

    pub fn cart_entries(&self) -> &[Arc<Product>] {
        self.cart.entries()
    }

    pub fn cart_subtotal(&self) -> Money {
        self.cart.subtotal()
    }

    pub fn cart_count(&self) -> usize {
        self.cart.count()
    }

    /// The catalog narrowed by `query` and the premium flag, in catalog order.
    pub fn filtered_products(&self, query: &str, premium_only: bool) -> Vec<Arc<Product>> {
        filter_products(self.catalog.all(), query, premium_only)
    }

    /// Same as [`Store::filtered_products`], reading both inputs from `filter`.
    pub fn filtered(&self, filter: &FilterState) -> Vec<Arc<Product>> {
        filter.apply(self.catalog.all())
    }

    /// Listings for the home page grid: the whole catalog.
    pub fn featured_products(&self) -> &[Arc<Product>] {
        self.catalog.all()
    }

    pub fn checkout_summary(&self) -> CheckoutSummary {
        let subtotal = self.cart.subtotal();
        CheckoutSummary {
            item_count: self.cart.count(),
            subtotal,
            total: subtotal,
        }
    }

    // -------------------------------------------------------------------------
    // View & Modal
    // -------------------------------------------------------------------------

    /// Switches to the view called `name`; unknown names leave the view as is.
    pub fn set_view(&mut self, name: &str) -> CoreResult<View> {
        Ok(self.router.set_view(name)?)
    }

    pub fn navigate(&mut self, view: View) {
        self.router.navigate(view);
    }

    pub fn open_product(&mut self, product: Arc<Product>) {
        self.router.open_product(product);
    }

    /// Opens the modal for the catalog product with this id.
    pub fn open_product_by_id(&mut self, id: &str) -> CoreResult<Arc<Product>> {
        let product = self.lookup(id)?;
        self.router.open_product(product.clone());
        Ok(product)
    }

    pub fn close_modal(&mut self) {
        self.router.close_modal();
    }

    /// The modal's "Buy Now": adds the shown product to the cart and closes
    /// the modal. Returns `None` (and changes nothing) when no modal is open.
    pub fn buy_from_modal(&mut self) -> Option<Arc<Product>> {
        let product = self.router.take_modal_product()?;
        self.add_to_cart(product.clone());
        Some(product)
    }

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------

    pub fn add_to_cart(&mut self, product: Arc<Product>) {
        debug!(product_id = %product.id, price = %product.price(), "add_to_cart");
        self.cart.add(product);
    }

    /// Adds the catalog product with this id to the cart.
    pub fn add_to_cart_by_id(&mut self, id: &str) -> CoreResult<Arc<Product>> {
        let product = self.lookup(id)?;
        self.add_to_cart(product.clone());
        Ok(product)
    }

    /// Removes the first cart entry with this id. Unknown ids are a no-op.
    pub fn remove_from_cart(&mut self, id: &str) -> Option<Arc<Product>> {
        let removed = self.cart.remove(id);
        debug!(product_id = id, removed = removed.is_some(), "remove_from_cart");
        removed
    }

    /// Removes every cart entry with this id.
    pub fn remove_all_from_cart(&mut self, id: &str) -> usize {
        let removed = self.cart.remove_all(id);
        debug!(product_id = id, removed, "remove_all_from_cart");
        removed
    }

    pub fn clear_cart(&mut self) {
        debug!(count = self.cart.count(), "clear_cart");
        self.cart.clear();
    }

    // -------------------------------------------------------------------------
    // Order Hooks
    // -------------------------------------------------------------------------

    /// Records a successful order: clears the cart and returns a receipt for
    /// what was in it.
    pub fn confirm_order(&mut self) -> OrderReceipt {
        let summary = self.checkout_summary();
        let receipt = OrderReceipt {
            order_id: Uuid::new_v4().to_string(),
            item_count: summary.item_count,
            total: summary.total,
            placed_at: Utc::now(),
        };

        info!(
            order_id = %receipt.order_id,
            items = receipt.item_count,
            total = %receipt.total,
            "order confirmed"
        );
        self.cart.clear();
        receipt
    }

    /// Records a failed order. The cart is left exactly as it was.
    pub fn fail_order(&self, reason: &str) {
        warn!(reason, items = self.cart.count(), "order failed, cart kept");
    }

    fn lookup(&self, id: &str) -> CoreResult<Arc<Product>> {
        self.catalog
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn product(id: &str, price_cents: i64, premium: bool) -> Product {
        Product {
            id: id.to_string(),
            title: format!("Site {}", id),
            price_cents,
            industry: if premium { "SaaS" } else { "Retail" }.to_string(),
            features: vec!["CMS".to_string()],
            thumbnail: "https://images.example.com/s.jpg".to_string(),
            premium,
        }
    }

    fn scenario_store() -> Store {
        let catalog = Catalog::new(vec![
            product("site-001", 25_000, true),
            product("site-003", 3_500, false),
        ])
        .unwrap();
        Store::new(catalog)
    }

    #[test]
    fn test_initial_state() {
        let store = Store::new(Catalog::sample());
        assert_eq!(store.current_view(), View::Home);
        assert_eq!(store.current_modal(), &Modal::Closed);
        assert!(store.cart_entries().is_empty());
        assert!(store.cart_subtotal().is_zero());
        assert_eq!(store.featured_products().len(), 3);
    }

    #[test]
    fn test_subtotal_scenario() {
        let mut store = scenario_store();

        store.add_to_cart_by_id("site-001").unwrap();
        store.add_to_cart_by_id("site-003").unwrap();
        assert_eq!(store.cart_subtotal().cents(), 28_500);

        store.remove_from_cart("site-001");
        assert_eq!(store.cart_subtotal().cents(), 3_500);
    }

    #[test]
    fn test_cart_ops_leave_catalog_untouched() {
        let mut store = Store::new(Catalog::sample());
        let before: Vec<Product> = store.catalog().all().iter().map(|p| (**p).clone()).collect();

        store.add_to_cart_by_id("site-002").unwrap();
        store.add_to_cart_by_id("site-002").unwrap();
        store.remove_from_cart("site-002");
        store.clear_cart();

        let after: Vec<Product> = store.catalog().all().iter().map(|p| (**p).clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_cart_entries_share_catalog_records() {
        let mut store = Store::new(Catalog::sample());
        store.add_to_cart_by_id("site-001").unwrap();
        assert!(Arc::ptr_eq(
            &store.cart_entries()[0],
            &store.catalog().all()[0]
        ));
    }

    #[test]
    fn test_add_unknown_id_is_not_found() {
        let mut store = Store::new(Catalog::sample());
        let err = store.add_to_cart_by_id("site-404").unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(ref id) if id == "site-404"));
        assert_eq!(store.cart_count(), 0);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut store = Store::new(Catalog::sample());
        store.add_to_cart_by_id("site-003").unwrap();
        assert!(store.remove_from_cart("site-404").is_none());
        assert_eq!(store.cart_count(), 1);
    }

    #[test]
    fn test_remove_first_vs_remove_all() {
        let mut store = Store::new(Catalog::sample());
        for _ in 0..3 {
            store.add_to_cart_by_id("site-003").unwrap();
        }
        store.add_to_cart_by_id("site-001").unwrap();

        store.remove_from_cart("site-003");
        assert_eq!(store.cart_count(), 3);

        assert_eq!(store.remove_all_from_cart("site-003"), 2);
        assert_eq!(store.cart_count(), 1);
        assert_eq!(store.cart_subtotal().cents(), 2_500_000);
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut store = Store::new(Catalog::sample());
        store.add_to_cart_by_id("site-001").unwrap();
        store.add_to_cart_by_id("site-002").unwrap();

        store.clear_cart();
        assert!(store.cart_entries().is_empty());
    }

    #[test]
    fn test_invalid_view_is_rejected() {
        let mut store = Store::new(Catalog::sample());

        assert_eq!(store.set_view("cart").unwrap(), View::Cart);
        let err = store.set_view("bogus-view").unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::NotAllowed { .. })
        ));
        assert_eq!(store.current_view(), View::Cart);
    }

    #[test]
    fn test_modal_flow() {
        let mut store = Store::new(Catalog::sample());

        store.open_product_by_id("site-002").unwrap();
        assert_eq!(
            store.current_modal().product().map(|p| p.id.as_str()),
            Some("site-002")
        );

        store.open_product_by_id("site-001").unwrap();
        assert_eq!(
            store.current_modal().product().map(|p| p.id.as_str()),
            Some("site-001")
        );

        assert!(store.open_product_by_id("nope").is_err());
        assert!(store.current_modal().is_open());

        store.close_modal();
        store.close_modal();
        assert_eq!(store.current_modal(), &Modal::Closed);
    }

    #[test]
    fn test_buy_from_modal() {
        let mut store = Store::new(Catalog::sample());
        assert!(store.buy_from_modal().is_none());
        assert_eq!(store.cart_count(), 0);

        let shown = store.catalog().all()[1].clone();
        store.open_product(shown);
        let bought = store.buy_from_modal().unwrap();

        assert_eq!(bought.id, "site-002");
        assert_eq!(store.cart_count(), 1);
        assert!(!store.current_modal().is_open());
    }

    #[test]
    fn test_filtered_products() {
        let store = Store::new(Catalog::sample());
        assert_eq!(store.filtered_products("", false).len(), 3);
        assert!(store.filtered_products("retail", true).is_empty());

        let mut filter = FilterState::default();
        filter.set_query("SAAS");
        assert_eq!(store.filtered(&filter), store.filtered_products("saas", false));
    }

    #[test]
    fn test_checkout_summary() {
        let mut store = scenario_store();
        store.add_to_cart_by_id("site-001").unwrap();
        store.add_to_cart_by_id("site-003").unwrap();

        let summary = store.checkout_summary();
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.subtotal.cents(), 28_500);
        assert_eq!(summary.total, summary.subtotal);
    }

    #[test]
    fn test_confirm_order_clears_cart() {
        let mut store = scenario_store();
        store.add_to_cart_by_id("site-001").unwrap();
        store.add_to_cart_by_id("site-003").unwrap();

        let receipt = store.confirm_order();
        assert_eq!(receipt.item_count, 2);
        assert_eq!(receipt.total.cents(), 28_500);
        assert!(Uuid::parse_str(&receipt.order_id).is_ok());
        assert!(store.cart_entries().is_empty());
    }

    #[test]
    fn test_fail_order_keeps_cart() {
        let mut store = scenario_store();
        store.add_to_cart_by_id("site-003").unwrap();

        store.fail_order("card declined");
        assert_eq!(store.cart_count(), 1);
        assert_eq!(store.cart_subtotal().cents(), 3_500);
    }

    #[test]
    fn test_subtotal_of_top_priced_listings_is_exact() {
        let catalog = Catalog::new(vec![product("big", crate::MAX_PRICE_CENTS, true)]).unwrap();
        let mut store = Store::new(catalog);

        store.add_to_cart_by_id("big").unwrap();
        store.add_to_cart_by_id("big").unwrap();

        assert_eq!(store.cart_subtotal().cents(), 2 * crate::MAX_PRICE_CENTS);
        assert_eq!(store.checkout_summary().total.cents(), 2 * crate::MAX_PRICE_CENTS);
    }

    #[test]
    fn test_receipt_serializes_camel_case() {
        let mut store = scenario_store();
        store.add_to_cart_by_id("site-003").unwrap();
        let receipt = store.confirm_order();

        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["itemCount"], 1);
        assert_eq!(json["total"], 3_500);
        assert!(json["orderId"].is_string());
        assert!(json["placedAt"].is_string());
    }
}
