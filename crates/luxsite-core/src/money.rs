//! # Money
//!
//! Prices and cart totals, held as whole cents.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Listing price        2_500_000 cents   ──► "$25,000.00"                │
//! │  Listing price          350_000 cents   ──► "$3,500.00"                 │
//! │                       ─────────────                                     │
//! │  Cart subtotal        2_850_000 cents   ──► "$28,500.00"                │
//! │                                                                         │
//! │  Totals are integer sums: adding and removing listings in any order    │
//! │  lands on the exact same figure.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use luxsite_core::money::Money;
//!
//! let saas = Money::from_cents(2_500_000);
//! let starter = Money::from_cents(350_000);
//!
//! let subtotal: Money = [saas, starter].into_iter().sum();
//! assert_eq!(subtotal.to_string(), "$28,500.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// An amount in cents.
///
/// Serializes as a bare integer, so `Money::from_cents(350_000)` is `350000`
/// on the wire.
///
/// ```text
/// Product.price_cents ──► Product::price() ──► CartLedger::subtotal()
///                                                    │
///                                                    ▼
///                              CheckoutSummary.total / OrderReceipt.total
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Wraps a cent amount.
    ///
    /// ## Example
    /// ```rust
    /// use luxsite_core::money::Money;
    ///
    /// let starter = Money::from_cents(350_000);
    /// assert_eq!(starter.cents(), 350_000);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// The subtotal of an empty cart.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

/// Groups the digits of `value` in threes with commas: `2500000` → `2,500,000`.
///
/// ## Example
/// ```rust
/// use luxsite_core::money::group_thousands;
///
/// assert_eq!(group_thousands(25_000), "25,000");
/// assert_eq!(group_thousands(999), "999");
/// ```
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

// =============================================================================
// Formatting & Arithmetic
// =============================================================================

/// Prints the storefront price format: `$25,000.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, group_thousands(abs / 100), abs % 100)
    }
}

/// Saturates at the `i64` bounds instead of overflowing.
impl Add for Money {
    type Output = Money;

    #[inline]
    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, rhs: Money) {
        *self = *self + rhs;
    }
}

/// An empty iterator sums to zero.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_prices_display() {
        assert_eq!(Money::from_cents(2_500_000).to_string(), "$25,000.00");
        assert_eq!(Money::from_cents(1_200_000).to_string(), "$12,000.00");
        assert_eq!(Money::from_cents(350_000).to_string(), "$3,500.00");
    }

    #[test]
    fn test_display_edges() {
        assert_eq!(Money::zero().to_string(), "$0.00");
        assert_eq!(Money::from_cents(7).to_string(), "$0.07");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::from_cents(123_456_789).to_string(), "$1,234,567.89");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(100), "100");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(100_000), "100,000");
        assert_eq!(group_thousands(1_000_000), "1,000,000");
    }

    #[test]
    fn test_add_and_add_assign() {
        let mut running = Money::default();
        running += Money::from_cents(2_500_000);
        assert_eq!(running + Money::from_cents(350_000), Money::from_cents(2_850_000));
        assert!(!running.is_zero());
    }

    #[test]
    fn test_add_saturates_instead_of_overflowing() {
        let top = Money::from_cents(i64::MAX);
        assert_eq!(top + Money::from_cents(1), top);
        assert_eq!([top, top].into_iter().sum::<Money>(), top);

        let bottom = Money::from_cents(i64::MIN);
        assert_eq!(bottom + Money::from_cents(-1), bottom);
    }

    #[test]
    fn test_sum() {
        let empty: Vec<Money> = Vec::new();
        assert!(empty.iter().sum::<Money>().is_zero());

        let prices = [Money::from_cents(25_000), Money::from_cents(3_500)];
        assert_eq!(prices.iter().sum::<Money>().cents(), 28_500);
        assert_eq!(prices.into_iter().sum::<Money>().cents(), 28_500);
    }

    #[test]
    fn test_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Money::from_cents(350_000)).unwrap(), "350000");
    }
}
