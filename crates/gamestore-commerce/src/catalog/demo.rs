//! Built-in demo catalog.
//!
//! Six listed games plus one free title. Genre names are English labels.

use crate::catalog::{Catalog, PriceTag, Product};

/// Genres offered by the storefront sidebar, in display order.
pub const DEMO_GENRES: &[&str] = &[
    "Action",
    "RPG",
    "Adventure",
    "Sci-Fi",
    "Fantasy",
    "Racing",
    "Sports",
    "Horror",
    "Quest",
];

/// Platforms offered by the storefront sidebar, in display order.
pub const DEMO_PLATFORMS: &[&str] = &["PC", "PS5", "Xbox", "Switch"];

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Products shipped with the storefront when no catalog file is configured.
pub fn demo_products() -> Vec<Product> {
    vec![
        Product::new(1, "Cyber Warriors 2077", 1999, &["Action", "RPG"], &["PC", "PS5", "Xbox"], 4.8)
            .with_price_tag(sale(1999, 2999, 33))
            .with_image(PLACEHOLDER_IMAGE),
        Product::new(2, "Space Odyssey", 1499, &["Adventure", "Sci-Fi"], &["PC", "PS5"], 4.6)
            .with_image(PLACEHOLDER_IMAGE),
        Product::new(3, "Dragon Legends", 2499, &["RPG", "Fantasy"], &["PC", "Xbox", "Switch"], 4.9)
            .with_price_tag(sale(2499, 3499, 28))
            .with_image(PLACEHOLDER_IMAGE),
        Product::new(4, "Racing Fury", 999, &["Racing", "Sports"], &["PC", "PS5", "Xbox"], 4.4)
            .with_image(PLACEHOLDER_IMAGE),
        Product::new(5, "Zombie Survival", 1799, &["Horror", "Action"], &["PC", "PS5"], 4.7)
            .with_price_tag(sale(1799, 2299, 22))
            .with_image(PLACEHOLDER_IMAGE),
        Product::new(6, "Mystery Manor", 899, &["Quest", "Adventure"], &["PC", "Switch"], 4.5)
            .with_image(PLACEHOLDER_IMAGE),
        Product::new(7, "Arena Clash", 0, &["Action", "Sports"], &["PC", "Xbox"], 4.1)
            .with_price_tag(PriceTag::Free { original_price: None })
            .with_image(PLACEHOLDER_IMAGE),
    ]
}

fn sale(price: u64, original_price: u64, discount_percent: u8) -> PriceTag {
    PriceTag::Sale {
        price,
        original_price,
        discount_percent: Some(discount_percent),
    }
}

impl Catalog {
    /// The built-in demo catalog.
    pub fn demo() -> Result<Self, crate::StoreError> {
        Self::new(demo_products())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    #[test]
    fn test_demo_catalog_is_valid() {
        let catalog = Catalog::demo().unwrap();
        assert_eq!(catalog.len(), 7);
        assert!(catalog.get(ProductId::new(7)).unwrap().is_free());
    }

    #[test]
    fn test_demo_listing_prices() {
        let catalog = Catalog::demo().unwrap();
        let listed: Vec<(u32, &str, u64, Option<u64>)> = catalog
            .iter()
            .map(|p| (p.id.get(), p.title.as_str(), p.price(), p.price_tag.original_price()))
            .collect();
        assert_eq!(
            listed,
            vec![
                (1, "Cyber Warriors 2077", 1999, Some(2999)),
                (2, "Space Odyssey", 1499, None),
                (3, "Dragon Legends", 2499, Some(3499)),
                (4, "Racing Fury", 999, None),
                (5, "Zombie Survival", 1799, Some(2299)),
                (6, "Mystery Manor", 899, None),
                (7, "Arena Clash", 0, None),
            ]
        );
    }

    #[test]
    fn test_demo_genres_use_english_labels() {
        assert_eq!(DEMO_GENRES.len(), 9);
        assert!(DEMO_GENRES.iter().all(|g| g.is_ascii()));
        let catalog = Catalog::demo().unwrap();
        assert_eq!(catalog.genres().len(), DEMO_GENRES.len());
    }

    #[test]
    fn test_demo_facets_are_known() {
        let catalog = Catalog::demo().unwrap();
        for genre in catalog.genres() {
            assert!(DEMO_GENRES.contains(&genre), "unknown genre {}", genre);
        }
        for platform in catalog.platforms() {
            assert!(DEMO_PLATFORMS.contains(&platform), "unknown platform {}", platform);
        }
    }
}
