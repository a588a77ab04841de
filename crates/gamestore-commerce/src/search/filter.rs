//! Filter criteria and per-product matching.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Upper bound of the storefront's price slider.
pub const DEFAULT_MAX_PRICE: u64 = 3500;

/// Restrict results to free or paid games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Free,
    Paid,
}

impl TypeFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Free => "free",
            TypeFilter::Paid => "paid",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all" => Some(TypeFilter::All),
            "free" => Some(TypeFilter::Free),
            "paid" => Some(TypeFilter::Paid),
            _ => None,
        }
    }

    /// Whether a product passes this filter.
    ///
    /// Only products explicitly marked free count as free; a paid product
    /// that happens to cost 0 is still paid.
    pub fn accepts(&self, product: &Product) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Free => product.is_free(),
            TypeFilter::Paid => !product.is_free(),
        }
    }
}

/// Inclusive price bounds in the smallest currency unit.
///
/// A range with `min > max` is accepted and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: u64) -> bool {
        price >= self.min && price <= self.max
    }

    /// Whether any price can fall inside the range.
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(0, DEFAULT_MAX_PRICE)
    }
}

/// What the shopper is looking for.
///
/// Facet selections use OR semantics within a facet and AND across facets.
/// Empty selections place no restriction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterCriteria {
    /// Case-insensitive title substring.
    pub search_text: String,
    /// Selected genres.
    pub genres: BTreeSet<String>,
    /// Selected platforms.
    pub platforms: BTreeSet<String>,
    /// Inclusive price bounds.
    pub price_range: PriceRange,
    /// Free/paid restriction.
    pub type_filter: TypeFilter,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Select a genre.
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genres.insert(genre.into());
        self
    }

    /// Select a platform.
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platforms.insert(platform.into());
        self
    }

    /// Set the price range.
    pub fn with_price_range(mut self, min: u64, max: u64) -> Self {
        self.price_range = PriceRange::new(min, max);
        self
    }

    /// Set the free/paid restriction.
    pub fn with_type_filter(mut self, type_filter: TypeFilter) -> Self {
        self.type_filter = type_filter;
        self
    }

    /// Select the genre if unselected, otherwise unselect it.
    ///
    /// Returns whether the genre is selected afterwards.
    pub fn toggle_genre(&mut self, genre: &str) -> bool {
        toggle(&mut self.genres, genre)
    }

    /// Select the platform if unselected, otherwise unselect it.
    ///
    /// Returns whether the platform is selected afterwards.
    pub fn toggle_platform(&mut self, platform: &str) -> bool {
        toggle(&mut self.platforms, platform)
    }

    /// Clear facet selections and the type filter and restore `price_range`.
    ///
    /// The search text is left alone.
    pub fn reset(&mut self, price_range: PriceRange) {
        self.genres.clear();
        self.platforms.clear();
        self.price_range = price_range;
        self.type_filter = TypeFilter::All;
    }

    pub fn matches_search(&self, product: &Product) -> bool {
        self.search_text.is_empty()
            || product
                .title
                .to_lowercase()
                .contains(&self.search_text.to_lowercase())
    }

    pub fn matches_genres(&self, product: &Product) -> bool {
        self.genres.is_empty() || product.genres.iter().any(|g| self.genres.contains(g))
    }

    pub fn matches_platforms(&self, product: &Product) -> bool {
        self.platforms.is_empty() || product.platforms.iter().any(|p| self.platforms.contains(p))
    }

    pub fn matches_price(&self, product: &Product) -> bool {
        self.price_range.contains(product.price())
    }

    pub fn matches_type(&self, product: &Product) -> bool {
        self.type_filter.accepts(product)
    }

    /// Whether the product satisfies every predicate.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product)
            && self.matches_genres(product)
            && self.matches_platforms(product)
            && self.matches_price(product)
            && self.matches_type(product)
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) -> bool {
    if set.remove(value) {
        false
    } else {
        set.insert(value.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PriceTag;

    fn dragon() -> Product {
        Product::new(3, "Dragon Legends", 2499, &["RPG", "Fantasy"], &["PC", "Xbox", "Switch"], 4.9)
    }

    #[test]
    fn test_empty_criteria_match() {
        assert!(FilterCriteria::new().matches(&dragon()));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let product = dragon();
        assert!(FilterCriteria::new().with_search("dragon").matches(&product));
        assert!(FilterCriteria::new().with_search("LEGEND").matches(&product));
        assert!(!FilterCriteria::new().with_search("racing").matches(&product));
    }

    #[test]
    fn test_search_non_ascii() {
        let product = Product::new(1, "Тёмный Лес", 500, &["Хоррор"], &["PC"], 4.0);
        assert!(FilterCriteria::new().with_search("тёмный").matches(&product));
    }

    #[test]
    fn test_genres_or_semantics() {
        let product = dragon();
        let criteria = FilterCriteria::new().with_genre("Racing").with_genre("RPG");
        assert!(criteria.matches(&product));
        let criteria = FilterCriteria::new().with_genre("Racing");
        assert!(!criteria.matches(&product));
    }

    #[test]
    fn test_facets_and_semantics() {
        let product = dragon();
        let criteria = FilterCriteria::new().with_genre("RPG").with_platform("PS5");
        assert!(!criteria.matches(&product));
        let criteria = FilterCriteria::new().with_genre("RPG").with_platform("Switch");
        assert!(criteria.matches(&product));
    }

    #[test]
    fn test_price_range_inclusive() {
        let product = dragon();
        assert!(FilterCriteria::new().with_price_range(2499, 2499).matches(&product));
        assert!(!FilterCriteria::new().with_price_range(0, 2498).matches(&product));
        assert!(!FilterCriteria::new().with_price_range(2500, 5000).matches(&product));
    }

    #[test]
    fn test_inverted_price_range_matches_nothing() {
        let range = PriceRange::new(3000, 1000);
        assert!(!range.is_valid());
        for price in [0, 999, 1000, 2000, 3000, 5000] {
            assert!(!range.contains(price));
        }
    }

    #[test]
    fn test_type_filter() {
        let paid = dragon();
        let free = Product::new(7, "Arena Clash", 0, &["Action"], &["PC"], 4.1)
            .with_price_tag(PriceTag::Free { original_price: None });
        let zero_paid = Product::new(8, "Demo Disc", 0, &["Action"], &["PC"], 3.0);

        let only_free = FilterCriteria::new().with_type_filter(TypeFilter::Free);
        assert!(only_free.matches(&free));
        assert!(!only_free.matches(&paid));
        assert!(!only_free.matches(&zero_paid));

        let only_paid = FilterCriteria::new().with_type_filter(TypeFilter::Paid);
        assert!(only_paid.matches(&paid));
        assert!(only_paid.matches(&zero_paid));
        assert!(!only_paid.matches(&free));
    }

    #[test]
    fn test_toggle_and_reset() {
        let mut criteria = FilterCriteria::new()
            .with_search("dragon")
            .with_price_range(100, 200)
            .with_type_filter(TypeFilter::Paid);
        assert!(criteria.toggle_genre("RPG"));
        assert!(criteria.toggle_platform("PC"));
        assert!(!criteria.toggle_genre("RPG"));
        assert!(criteria.genres.is_empty());
        criteria.toggle_genre("Horror");

        criteria.reset(PriceRange::default());
        assert!(criteria.genres.is_empty());
        assert!(criteria.platforms.is_empty());
        assert_eq!(criteria.price_range, PriceRange::new(0, DEFAULT_MAX_PRICE));
        assert_eq!(criteria.type_filter, TypeFilter::All);
        assert_eq!(criteria.search_text, "dragon");
    }

    #[test]
    fn test_type_filter_from_str() {
        assert_eq!(TypeFilter::from_str("FREE"), Some(TypeFilter::Free));
        assert_eq!(TypeFilter::from_str("paid"), Some(TypeFilter::Paid));
        assert_eq!(TypeFilter::from_str("cheap"), None);
    }

    #[test]
    fn test_criteria_deserialize_with_defaults() {
        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"search_text": "zombie", "type_filter": "paid"}"#).unwrap();
        assert_eq!(criteria.search_text, "zombie");
        assert_eq!(criteria.type_filter, TypeFilter::Paid);
        assert_eq!(criteria.price_range, PriceRange::default());
    }
}
