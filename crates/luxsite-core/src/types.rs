//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      View       │   │     Modal       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  Home (initial) │   │  Closed         │       │
//! │  │  title          │   │  Products       │   │  Showing(Arc<   │       │
//! │  │  price_cents    │   │  About, Contact │   │      Product>)  │       │
//! │  │  industry       │   │  Cart, Checkout │   └─────────────────┘       │
//! │  │  features       │   │  Dashboard      │                             │
//! │  │  thumbnail      │   │  Account        │   ┌─────────────────┐       │
//! │  │  premium        │   └─────────────────┘   │  FilterState    │       │
//! │  └─────────────────┘                         │  query          │       │
//! │                                              │  premium_only   │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are immutable once loaded. The catalog hands them out as
//! `Arc<Product>`, so cart entries and the modal point at the catalog's
//! record rather than holding a copy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::filter::filter_products;
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A website listing available for purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct Product {
    /// Unique identifier, e.g. `site-001`.
    pub id: String,

    /// Display name shown on cards and in the modal.
    pub title: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Category label, e.g. `SaaS`, `Retail`.
    pub industry: String,

    /// Short feature labels, in display order.
    pub features: Vec<String>,

    /// Image URL.
    pub thumbnail: String,

    /// Premium listings can be isolated with the "Premium Only" filter.
    pub premium: bool,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Lowercased `title industry feature...` text the catalog filter
    /// matches queries against.
    pub fn search_text(&self) -> String {
        let mut text = String::with_capacity(
            self.title.len() + self.industry.len() + self.features.len() * 16,
        );
        text.push_str(&self.title);
        text.push(' ');
        text.push_str(&self.industry);
        for feature in &self.features {
            text.push(' ');
            text.push_str(feature);
        }
        text.to_lowercase()
    }

    /// The first `n` features, used for the one-line card summary.
    pub fn feature_summary(&self, n: usize) -> &[String] {
        &self.features[..self.features.len().min(n)]
    }
}

// =============================================================================
// View
// =============================================================================

/// A full-page presentation mode. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Landing page with the featured grid.
    #[default]
    Home,
    /// Searchable catalog.
    Products,
    About,
    Contact,
    Cart,
    Checkout,
    /// Seller dashboard.
    Dashboard,
    /// Customer account page.
    Account,
}

impl View {
    /// Every view, in navigation order.
    pub const ALL: [View; 8] = [
        View::Home,
        View::Products,
        View::About,
        View::Contact,
        View::Cart,
        View::Checkout,
        View::Dashboard,
        View::Account,
    ];

    /// The lowercase name used by the presentation layer.
    pub const fn as_str(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Products => "products",
            View::About => "about",
            View::Contact => "contact",
            View::Cart => "cart",
            View::Checkout => "checkout",
            View::Dashboard => "dashboard",
            View::Account => "account",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = ValidationError;

    /// Parses an exact lowercase view name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|view| view.as_str() == s)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "view".to_string(),
                value: s.to_string(),
                allowed: View::ALL.iter().map(|v| v.as_str().to_string()).collect(),
            })
    }
}

// =============================================================================
// Modal
// =============================================================================

/// The product detail overlay. Independent of the current view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    Showing(Arc<Product>),
}

impl Modal {
    /// The product being shown, if any.
    pub fn product(&self) -> Option<&Arc<Product>> {
        match self {
            Modal::Closed => None,
            Modal::Showing(product) => Some(product),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Modal::Showing(_))
    }
}

// =============================================================================
// Filter State
// =============================================================================

/// Search controls for the products view.
///
/// Owned by whichever layer renders the search box, not by the
/// [`Store`](crate::Store); it is passed in when a filtered listing is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Free-text query. Empty or whitespace-only matches everything.
    pub query: String,

    /// Restrict results to premium listings.
    pub premium_only: bool,
}

impl FilterState {
    pub fn new(query: impl Into<String>, premium_only: bool) -> Self {
        FilterState {
            query: query.into(),
            premium_only,
        }
    }

    /// Replaces the query text (search box `onChange`).
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Sets the "Premium Only" checkbox.
    pub fn set_premium_only(&mut self, premium_only: bool) {
        self.premium_only = premium_only;
    }

    /// True when neither the query nor the premium flag narrows the listing.
    pub fn is_unfiltered(&self) -> bool {
        !self.premium_only && self.query.trim().is_empty()
    }

    /// Applies this filter to `items`, preserving order.
    pub fn apply(&self, items: &[Arc<Product>]) -> Vec<Arc<Product>> {
        if self.is_unfiltered() {
            return items.to_vec();
        }
        filter_products(items, &self.query, self.premium_only)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: "site-001".to_string(),
            title: "Enterprise SaaS Website".to_string(),
            price_cents: 2_500_000,
            industry: "SaaS".to_string(),
            features: vec![
                "Multi-page".to_string(),
                "CMS".to_string(),
                "Billing Integration".to_string(),
            ],
            thumbnail: "https://images.example.com/saas.jpg".to_string(),
            premium: true,
        }
    }

    #[test]
    fn test_product_price() {
        assert_eq!(product().price(), Money::from_cents(2_500_000));
    }

    #[test]
    fn test_search_text_joins_fields_with_spaces() {
        assert_eq!(
            product().search_text(),
            "enterprise saas website saas multi-page cms billing integration"
        );
    }

    #[test]
    fn test_feature_summary() {
        let p = product();
        assert_eq!(p.feature_summary(2), &p.features[..2]);
        assert_eq!(p.feature_summary(10).len(), 3);
        assert!(p.feature_summary(0).is_empty());
    }

    #[test]
    fn test_view_default_is_home() {
        assert_eq!(View::default(), View::Home);
    }

    #[test]
    fn test_view_parse_round_trips_names() {
        for view in View::ALL {
            assert_eq!(view.as_str().parse::<View>(), Ok(view));
        }
    }

    #[test]
    fn test_view_parse_rejects_unknown() {
        let err = "bogus-view".parse::<View>().unwrap_err();
        assert!(matches!(err, ValidationError::NotAllowed { ref value, .. } if value == "bogus-view"));

        // names are exact, not case-folded
        assert!("Cart".parse::<View>().is_err());
    }

    #[test]
    fn test_view_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&View::Checkout).unwrap(), "\"checkout\"");
    }

    #[test]
    fn test_modal_accessors() {
        let closed = Modal::default();
        assert!(!closed.is_open());
        assert!(closed.product().is_none());

        let shown = Modal::Showing(Arc::new(product()));
        assert!(shown.is_open());
        assert_eq!(shown.product().map(|p| p.id.as_str()), Some("site-001"));
    }

    #[test]
    fn test_filter_state_setters() {
        let mut filter = FilterState::default();
        assert!(filter.is_unfiltered());

        filter.set_query("   ");
        assert!(filter.is_unfiltered());

        filter.set_premium_only(true);
        assert!(!filter.is_unfiltered());

        filter.set_premium_only(false);
        filter.set_query("saas");
        assert!(!filter.is_unfiltered());
        assert_eq!(filter, FilterState::new("saas", false));
    }

    #[test]
    fn test_filter_state_apply() {
        let items = vec![Arc::new(product())];

        let unfiltered = FilterState::new(" ", false).apply(&items);
        assert_eq!(unfiltered.len(), 1);
        assert!(Arc::ptr_eq(&unfiltered[0], &items[0]));

        assert_eq!(FilterState::new("billing", true).apply(&items).len(), 1);
        assert!(FilterState::new("retail", false).apply(&items).is_empty());
    }
}
