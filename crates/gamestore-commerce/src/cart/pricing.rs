//! Cart display pricing.

use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// One cart entry resolved against the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    /// Position of the entry in the cart.
    pub position: usize,
    /// Product ID.
    pub product_id: ProductId,
    /// Product title (denormalized for display).
    pub title: String,
    /// Amount charged.
    pub price: u64,
    /// Crossed-out price, if the product is marked down.
    pub original_price: Option<u64>,
    pub is_free: bool,
}

impl CartLine {
    pub(crate) fn from_product(position: usize, product: &Product) -> Self {
        Self {
            position,
            product_id: product.id,
            title: product.title.clone(),
            price: product.price(),
            original_price: product.price_tag.original_price(),
            is_free: product.is_free(),
        }
    }

    /// How much the shopper saves against the original price.
    pub fn savings(&self) -> u64 {
        self.original_price
            .map(|original| original.saturating_sub(self.price))
            .unwrap_or(0)
    }
}

/// Pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartSummary {
    /// Resolved entries in insertion order.
    pub lines: Vec<CartLine>,
    /// Sum of line prices.
    pub subtotal: u64,
    /// Number of resolved entries.
    pub item_count: usize,
    /// Entries whose product is missing from the catalog.
    pub unresolved: usize,
}

impl CartSummary {
    pub fn new(lines: Vec<CartLine>, unresolved: usize) -> Self {
        let subtotal = lines
            .iter()
            .fold(0u64, |acc, line| acc.saturating_add(line.price));
        let item_count = lines.len();
        Self {
            lines,
            subtotal,
            item_count,
            unresolved,
        }
    }

    /// Total savings against original prices.
    pub fn savings(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |acc, line| acc.saturating_add(line.savings()))
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PriceTag;

    #[test]
    fn test_summary_totals() {
        let sale = Product::new(1, "Dragon Legends", 2499, &["RPG"], &["PC"], 4.9).with_price_tag(
            PriceTag::Sale {
                price: 2499,
                original_price: 3499,
                discount_percent: Some(28),
            },
        );
        let regular = Product::new(2, "Racing Fury", 999, &["Racing"], &["PC"], 4.4);
        let lines = vec![
            CartLine::from_product(0, &sale),
            CartLine::from_product(1, &regular),
        ];
        let summary = CartSummary::new(lines, 0);

        assert_eq!(summary.subtotal, 3498);
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.savings(), 1000);
    }

    #[test]
    fn test_empty_summary() {
        let summary = CartSummary::new(Vec::new(), 2);
        assert!(summary.is_empty());
        assert_eq!(summary.subtotal, 0);
        assert_eq!(summary.unresolved, 2);
    }
}
