//! # Catalog
//!
//! The fixed collection of purchasable listings, built once at startup.
//!
//! ## Loading
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog::from_json(text)                                               │
//! │       │                                                                 │
//! │       ├── malformed JSON / unknown field ──► CoreError::InvalidCatalog  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Catalog::new(records)                                                  │
//! │       │                                                                 │
//! │       ├── bad field ─────────────────────► CoreError::Validation       │
//! │       ├── repeated id ───────────────────► ValidationError::Duplicate  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Catalog { products: Vec<Arc<Product>> }   (declaration order, frozen) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There are no mutation methods. Every `Arc<Product>` handed out by the
//! catalog stays valid for the whole session.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::Product;
use crate::validation::validate_product;

/// Immutable, validated product catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
}

impl Catalog {
    /// Builds a catalog from records in declaration order.
    ///
    /// Fails on the first invalid record or repeated id; nothing is dropped
    /// silently.
    pub fn new(records: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());

        for record in &records {
            validate_product(record)?;
            if !seen.insert(record.id.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "id".to_string(),
                    value: record.id.clone(),
                }
                .into());
            }
        }

        debug!(count = records.len(), "catalog built");
        Ok(Catalog {
            products: records.into_iter().map(Arc::new).collect(),
        })
    }

    /// Parses a JSON array of product records and builds a catalog from it.
    ///
    /// ## Example
    /// ```rust
    /// use luxsite_core::Catalog;
    ///
    /// let json = r#"[{
    ///     "id": "site-009",
    ///     "title": "Agency Landing Page",
    ///     "price_cents": 99900,
    ///     "industry": "Marketing",
    ///     "features": ["Hero", "Forms"],
    ///     "thumbnail": "https://images.example.com/agency.jpg",
    ///     "premium": false
    /// }]"#;
    ///
    /// let catalog = Catalog::from_json(json).unwrap();
    /// assert_eq!(catalog.len(), 1);
    /// assert!(Catalog::from_json("[{").is_err());
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let records: Vec<Product> =
            serde_json::from_str(json).map_err(|e| CoreError::InvalidCatalog {
                reason: e.to_string(),
            })?;
        Catalog::new(records)
    }

    /// The built-in LuxSiteMarket demo listings.
    pub fn sample() -> Self {
        let records = vec![
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
                thumbnail: "https://images.unsplash.com/photo-1526378724952-0b6d3f1d1b8f"
                    .to_string(),
                premium: true,
            },
            Product {
                id: "site-002".to_string(),
                title: "Luxury Brand Portfolio".to_string(),
                price_cents: 1_200_000,
                industry: "Fashion".to_string(),
                features: vec![
                    "Animations".to_string(),
                    "Filters".to_string(),
                    "Gallery".to_string(),
                ],
                thumbnail: "https://images.unsplash.com/photo-1506765515384-028b60a970df"
                    .to_string(),
                premium: true,
            },
            Product {
                id: "site-003".to_string(),
                title: "Small Business Starter".to_string(),
                price_cents: 350_000,
                industry: "Retail".to_string(),
                features: vec![
                    "1-5 pages".to_string(),
                    "Contact Form".to_string(),
                    "SEO Basics".to_string(),
                ],
                thumbnail: "https://images.unsplash.com/photo-1522071820081-009f0129c71c"
                    .to_string(),
                premium: false,
            },
        ];

        Catalog {
            products: records.into_iter().map(Arc::new).collect(),
        }
    }

    /// All products in declaration order.
    pub fn all(&self) -> &[Arc<Product>] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn get(&self, id: &str) -> Option<&Arc<Product>> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> Product {
        Product {
            id: id.to_string(),
            title: format!("Listing {}", id),
            price_cents: 10_000,
            industry: "Services".to_string(),
            features: vec!["Blog".to_string()],
            thumbnail: "https://images.example.com/x.jpg".to_string(),
            premium: false,
        }
    }

    #[test]
    fn test_new_preserves_declaration_order() {
        let catalog = Catalog::new(vec![record("c"), record("a"), record("b")]).unwrap();
        let ids: Vec<&str> = catalog.all().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let err = Catalog::new(vec![record("a"), record("b"), record("a")]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Duplicate { ref value, .. }) if value == "a"
        ));
    }

    #[test]
    fn test_new_rejects_invalid_record() {
        let mut bad = record("b");
        bad.price_cents = -1;
        let err = Catalog::new(vec![record("a"), bad]).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(matches!(
            Catalog::from_json("not json"),
            Err(CoreError::InvalidCatalog { .. })
        ));

        // missing "premium"
        let missing = r#"[{"id":"a","title":"A","price_cents":1,"industry":"X",
            "features":[],"thumbnail":"https://x.test/a.jpg"}]"#;
        assert!(matches!(
            Catalog::from_json(missing),
            Err(CoreError::InvalidCatalog { .. })
        ));

        let unknown = r#"[{"id":"a","title":"A","price_cents":1,"industry":"X",
            "features":[],"thumbnail":"https://x.test/a.jpg","premium":false,"stock":3}]"#;
        assert!(matches!(
            Catalog::from_json(unknown),
            Err(CoreError::InvalidCatalog { .. })
        ));
    }

    #[test]
    fn test_from_json_rejects_price_above_ceiling() {
        let json = format!(
            r#"[{{"id":"big","title":"Big","price_cents":{},"industry":"X",
                "features":[],"thumbnail":"https://x.test/b.jpg","premium":true}}]"#,
            i64::MAX
        );
        let err = Catalog::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { max, .. }) if max == crate::MAX_PRICE_CENTS
        ));
    }

    #[test]
    fn test_from_json_empty_array_is_empty_catalog() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_sample_is_valid() {
        let sample = Catalog::sample();
        let records: Vec<Product> = sample.all().iter().map(|p| (**p).clone()).collect();
        let rebuilt = Catalog::new(records).unwrap();
        assert_eq!(rebuilt.len(), 3);
    }

    #[test]
    fn test_sample_round_trips_through_json() {
        let sample = Catalog::sample();
        let records: Vec<&Product> = sample.all().iter().map(|p| p.as_ref()).collect();
        let json = serde_json::to_string(&records).unwrap();

        let parsed = Catalog::from_json(&json).unwrap();
        assert_eq!(parsed.all(), sample.all());
    }

    #[test]
    fn test_get() {
        let catalog = Catalog::sample();
        assert_eq!(
            catalog.get("site-002").map(|p| p.title.as_str()),
            Some("Luxury Brand Portfolio")
        );
        assert!(catalog.get("site-404").is_none());
    }
}
