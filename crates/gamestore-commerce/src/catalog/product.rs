//! Product types.

use crate::error::StoreError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Highest rating a product can carry.
pub const MAX_RATING: f32 = 5.0;

/// How a product is priced.
///
/// Amounts are in the smallest currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceTag {
    /// Free to play. Optionally shows what it used to cost.
    Free { original_price: Option<u64> },
    /// Sold at a single list price.
    Regular { price: u64 },
    /// Marked down from an original price.
    ///
    /// `discount_percent` is a display label taken from the source data and
    /// is never reconciled with the two prices.
    Sale {
        price: u64,
        original_price: u64,
        discount_percent: Option<u8>,
    },
}

impl PriceTag {
    /// The amount charged for one copy.
    pub fn price(&self) -> u64 {
        match self {
            PriceTag::Free { .. } => 0,
            PriceTag::Regular { price } | PriceTag::Sale { price, .. } => *price,
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, PriceTag::Free { .. })
    }

    /// The crossed-out price, if any.
    pub fn original_price(&self) -> Option<u64> {
        match self {
            PriceTag::Free { original_price } => *original_price,
            PriceTag::Regular { .. } => None,
            PriceTag::Sale { original_price, .. } => Some(*original_price),
        }
    }

    pub fn discount_percent(&self) -> Option<u8> {
        match self {
            PriceTag::Sale {
                discount_percent, ..
            } => *discount_percent,
            _ => None,
        }
    }
}

/// A game in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Pricing.
    pub price_tag: PriceTag,
    /// Genres, deduplicated, in source order.
    pub genres: Vec<String>,
    /// Platforms, deduplicated, in source order.
    pub platforms: Vec<String>,
    /// Average rating in `[0, 5]`.
    pub rating: f32,
    /// Cover image path.
    pub image: Option<String>,
}

impl Product {
    /// Create a regularly priced product.
    pub fn new(
        id: u32,
        title: impl Into<String>,
        price: u64,
        genres: &[&str],
        platforms: &[&str],
        rating: f32,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            title: title.into(),
            price_tag: PriceTag::Regular { price },
            genres: dedup(genres.iter().map(|g| g.to_string())),
            platforms: dedup(platforms.iter().map(|p| p.to_string())),
            rating,
            image: None,
        }
    }

    /// Replace the price tag.
    pub fn with_price_tag(mut self, price_tag: PriceTag) -> Self {
        self.price_tag = price_tag;
        self
    }

    /// Set the cover image.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// The amount charged for one copy (0 for free games).
    pub fn price(&self) -> u64 {
        self.price_tag.price()
    }

    pub fn is_free(&self) -> bool {
        self.price_tag.is_free()
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    pub fn has_platform(&self, platform: &str) -> bool {
        self.platforms.iter().any(|p| p == platform)
    }

    /// Check the record-level invariants.
    pub fn validate(&self) -> Result<(), StoreError> {
        let id = self.id.get();
        if id == 0 {
            return Err(StoreError::invalid_product(id, "id must be positive"));
        }
        if self.title.trim().is_empty() {
            return Err(StoreError::invalid_product(id, "title is empty"));
        }
        if self.genres.is_empty() || self.genres.iter().any(|g| g.trim().is_empty()) {
            return Err(StoreError::invalid_product(id, "genres must be non-empty"));
        }
        if self.platforms.is_empty() || self.platforms.iter().any(|p| p.trim().is_empty()) {
            return Err(StoreError::invalid_product(
                id,
                "platforms must be non-empty",
            ));
        }
        if !self.rating.is_finite() || !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(StoreError::invalid_product(
                id,
                format!("rating {} outside [0, {}]", self.rating, MAX_RATING),
            ));
        }
        match self.price_tag {
            PriceTag::Free { original_price: Some(0) } => Err(StoreError::invalid_product(
                id,
                "original price must exceed price",
            )),
            PriceTag::Sale {
                price,
                original_price,
                discount_percent,
            } => {
                if original_price <= price {
                    return Err(StoreError::invalid_product(
                        id,
                        format!("original price {} must exceed price {}", original_price, price),
                    ));
                }
                match discount_percent {
                    Some(d) if d == 0 || d >= 100 => Err(StoreError::invalid_product(
                        id,
                        format!("discount {}% outside (0, 100)", d),
                    )),
                    _ => Ok(()),
                }
            }
            _ => Ok(()),
        }
    }
}

/// A product as it appears in the source data.
///
/// Field names follow the storefront's JSON (`originalPrice`, `isFree`, and
/// the singular `genre`/`platform`/`discount` keys are accepted as aliases).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: u32,
    pub title: String,
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u64>,
    #[serde(alias = "genre")]
    pub genres: Vec<String>,
    #[serde(alias = "platform")]
    pub platforms: Vec<String>,
    pub rating: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_free: Option<bool>,
    #[serde(default, alias = "discount", skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl TryFrom<ProductRecord> for Product {
    type Error = StoreError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let id = record.id;
        let price_tag = if record.is_free == Some(true) {
            if record.price != 0 {
                return Err(StoreError::invalid_product(
                    id,
                    format!("free product has price {}", record.price),
                ));
            }
            if record.discount_percent.is_some() {
                return Err(StoreError::invalid_product(
                    id,
                    "free product cannot carry a discount",
                ));
            }
            PriceTag::Free {
                original_price: record.original_price,
            }
        } else {
            match (record.original_price, record.discount_percent) {
                (Some(original_price), discount_percent) => PriceTag::Sale {
                    price: record.price,
                    original_price,
                    discount_percent,
                },
                (None, Some(_)) => {
                    return Err(StoreError::invalid_product(
                        id,
                        "discount requires an original price",
                    ))
                }
                (None, None) => PriceTag::Regular {
                    price: record.price,
                },
            }
        };

        let product = Product {
            id: ProductId::new(id),
            title: record.title,
            price_tag,
            genres: dedup(record.genres),
            platforms: dedup(record.platforms),
            rating: record.rating,
            image: record.image,
        };
        product.validate()?;
        Ok(product)
    }
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        let tag = product.price_tag;
        Self {
            id: product.id.get(),
            title: product.title.clone(),
            price: tag.price(),
            original_price: tag.original_price(),
            genres: product.genres.clone(),
            platforms: product.platforms.clone(),
            rating: product.rating,
            is_free: tag.is_free().then_some(true),
            discount_percent: tag.discount_percent(),
            image: product.image.clone(),
        }
    }
}

/// Drop repeated values, keeping the first occurrence.
fn dedup(values: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(v.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, price: u64) -> ProductRecord {
        ProductRecord {
            id,
            title: "Space Odyssey".to_string(),
            price,
            original_price: None,
            genres: vec!["Adventure".to_string(), "Sci-Fi".to_string()],
            platforms: vec!["PC".to_string(), "PS5".to_string()],
            rating: 4.6,
            is_free: None,
            discount_percent: None,
            image: None,
        }
    }

    #[test]
    fn test_regular_product_from_record() {
        let product = Product::try_from(record(2, 1499)).unwrap();
        assert_eq!(product.price(), 1499);
        assert!(!product.is_free());
        assert_eq!(product.price_tag, PriceTag::Regular { price: 1499 });
    }

    #[test]
    fn test_sale_product_from_record() {
        let mut r = record(1, 1999);
        r.original_price = Some(2999);
        r.discount_percent = Some(33);
        let product = Product::try_from(r).unwrap();
        assert_eq!(product.price(), 1999);
        assert_eq!(product.price_tag.original_price(), Some(2999));
        assert_eq!(product.price_tag.discount_percent(), Some(33));
    }

    #[test]
    fn test_discount_label_is_not_recomputed() {
        // 50% of 3000 is not 2500; the label is kept as given.
        let mut r = record(1, 2500);
        r.original_price = Some(3000);
        r.discount_percent = Some(50);
        let product = Product::try_from(r).unwrap();
        assert_eq!(product.price(), 2500);
        assert_eq!(product.price_tag.discount_percent(), Some(50));
    }

    #[test]
    fn test_free_product_from_record() {
        let mut r = record(9, 0);
        r.is_free = Some(true);
        let product = Product::try_from(r).unwrap();
        assert!(product.is_free());
        assert_eq!(product.price(), 0);
    }

    #[test]
    fn test_zero_price_without_flag_is_paid() {
        let product = Product::try_from(record(9, 0)).unwrap();
        assert!(!product.is_free());
    }

    #[test]
    fn test_free_product_with_price_rejected() {
        let mut r = record(9, 100);
        r.is_free = Some(true);
        assert!(matches!(
            Product::try_from(r),
            Err(StoreError::InvalidProduct { id: 9, .. })
        ));
    }

    #[test]
    fn test_discount_without_original_price_rejected() {
        let mut r = record(3, 2499);
        r.discount_percent = Some(28);
        assert!(Product::try_from(r).is_err());
    }

    #[test]
    fn test_original_price_must_exceed_price() {
        let mut r = record(3, 2499);
        r.original_price = Some(2499);
        assert!(Product::try_from(r).is_err());
    }

    #[test]
    fn test_discount_bounds() {
        for bad in [0u8, 100, 120] {
            let mut r = record(3, 2499);
            r.original_price = Some(3499);
            r.discount_percent = Some(bad);
            assert!(Product::try_from(r).is_err(), "discount {} accepted", bad);
        }
    }

    #[test]
    fn test_malformed_records_rejected() {
        let mut r = record(0, 100);
        assert!(Product::try_from(r.clone()).is_err());

        r.id = 1;
        r.title = "   ".to_string();
        assert!(Product::try_from(r.clone()).is_err());

        r.title = "Ok".to_string();
        r.genres.clear();
        assert!(Product::try_from(r.clone()).is_err());

        r.genres = vec!["RPG".to_string()];
        r.platforms.clear();
        assert!(Product::try_from(r.clone()).is_err());

        r.platforms = vec!["PC".to_string()];
        r.rating = 5.5;
        assert!(Product::try_from(r).is_err());
    }

    #[test]
    fn test_record_from_json_aliases() {
        let json = r#"{
            "id": 3,
            "title": "Dragon Legends",
            "price": 2499,
            "originalPrice": 3499,
            "image": "/placeholder.svg",
            "genre": ["RPG", "Fantasy", "RPG"],
            "platform": ["PC", "Xbox", "Switch"],
            "rating": 4.9,
            "discount": 28
        }"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();
        let product = Product::try_from(record).unwrap();
        assert_eq!(product.genres, vec!["RPG", "Fantasy"]);
        assert_eq!(product.price_tag.discount_percent(), Some(28));
        assert_eq!(product.image.as_deref(), Some("/placeholder.svg"));
    }

    #[test]
    fn test_missing_required_field_is_serde_error() {
        let json = r#"{ "id": 1, "price": 100, "genre": ["RPG"], "platform": ["PC"], "rating": 4.0 }"#;
        assert!(serde_json::from_str::<ProductRecord>(json).is_err());
    }

    #[test]
    fn test_record_round_trip_through_product() {
        let mut r = record(1, 1999);
        r.original_price = Some(2999);
        r.discount_percent = Some(33);
        let product = Product::try_from(r.clone()).unwrap();
        assert_eq!(ProductRecord::from(&product), r);
    }
}
