//! The cart ledger.

use crate::cart::{CartLine, CartSummary};
use crate::catalog::Catalog;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// An ordered multiset of product ids. The same product may be added any
/// number of times. Ids are not checked against the catalog when added; ids
/// with no matching product are skipped when the cart is priced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    /// Product ids in insertion order.
    entries: Vec<ProductId>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a product id.
    pub fn add(&mut self, product_id: ProductId) {
        self.entries.push(product_id);
    }

    /// Number of entries, duplicates included.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How many times a product was added.
    pub fn quantity_of(&self, product_id: ProductId) -> usize {
        self.entries.iter().filter(|&&id| id == product_id).count()
    }

    /// Sum of the prices of every entry found in the catalog.
    ///
    /// Free products contribute 0 and unknown ids are ignored. Saturates
    /// rather than overflowing.
    pub fn total(&self, catalog: &Catalog) -> u64 {
        self.entries
            .iter()
            .filter_map(|&id| catalog.get(id))
            .fold(0u64, |acc, product| acc.saturating_add(product.price()))
    }

    /// Entries resolved against the catalog, in insertion order.
    pub fn lines(&self, catalog: &Catalog) -> Vec<CartLine> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(position, &id)| {
                catalog
                    .get(id)
                    .map(|product| CartLine::from_product(position, product))
            })
            .collect()
    }

    /// Display pricing for the whole cart.
    pub fn summary(&self, catalog: &Catalog) -> CartSummary {
        let lines = self.lines(catalog);
        let unresolved = self.entries.len() - lines.len();
        if unresolved > 0 {
            tracing::debug!(unresolved, "cart references products missing from catalog");
        }
        CartSummary::new(lines, unresolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PriceTag, Product};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new(1, "Cyber Warriors 2077", 1000, &["Action"], &["PC"], 4.8),
            Product::new(2, "Racing Fury", 999, &["Racing"], &["PC"], 4.4),
            Product::new(3, "Arena Clash", 0, &["Action"], &["PC"], 4.1)
                .with_price_tag(PriceTag::Free { original_price: None }),
        ])
        .unwrap()
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.total(&catalog()), 0);
    }

    #[test]
    fn test_duplicates_double_the_total() {
        let catalog = Catalog::new(vec![Product::new(1, "Solo", 1000, &["RPG"], &["PC"], 4.0)]).unwrap();
        let mut cart = Cart::new();
        cart.add(ProductId::new(1));
        cart.add(ProductId::new(1));
        assert_eq!(cart.count(), 2);
        assert_eq!(cart.quantity_of(ProductId::new(1)), 2);
        assert_eq!(cart.total(&catalog), 2000);
    }

    #[test]
    fn test_unknown_ids_are_tolerated() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(ProductId::new(2));
        cart.add(ProductId::new(99));
        assert_eq!(cart.count(), 2);
        assert_eq!(cart.total(&catalog), 999);
        assert_eq!(cart.lines(&catalog).len(), 1);
        assert_eq!(cart.summary(&catalog).unresolved, 1);
    }

    #[test]
    fn test_free_products_cost_nothing() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(ProductId::new(3));
        cart.add(ProductId::new(1));
        assert_eq!(cart.total(&catalog), 1000);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let catalog = catalog();
        let mut cart = Cart::new();
        for id in [2, 1, 2] {
            cart.add(ProductId::new(id));
        }
        let titles: Vec<_> = cart.lines(&catalog).into_iter().map(|l| l.title).collect();
        assert_eq!(titles, vec!["Racing Fury", "Cyber Warriors 2077", "Racing Fury"]);
    }

    #[test]
    fn test_total_saturates() {
        let catalog = Catalog::new(vec![Product::new(1, "Whale", u64::MAX, &["RPG"], &["PC"], 4.0)]).unwrap();
        let mut cart = Cart::new();
        cart.add(ProductId::new(1));
        cart.add(ProductId::new(1));
        assert_eq!(cart.total(&catalog), u64::MAX);
    }
}
