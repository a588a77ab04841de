//! Running filter criteria over the catalog.

use crate::catalog::{Catalog, Product};
use crate::search::{Facet, FilterCriteria, FilterResults};
use std::collections::BTreeSet;

/// Products matching every predicate, in catalog order.
///
/// Never fails; an empty result is a normal outcome.
pub fn filter<'a>(catalog: &'a Catalog, criteria: &FilterCriteria) -> Vec<&'a Product> {
    catalog.iter().filter(|p| criteria.matches(p)).collect()
}

/// Filter the catalog and summarize genre and platform facets.
///
/// Facet values are every value in the catalog (first-seen order), counted
/// over the matching products, so a shopper can see which selections would
/// still return something. Selected values missing from the catalog follow,
/// with a count of 0.
pub fn search<'a>(catalog: &'a Catalog, criteria: &FilterCriteria) -> FilterResults<'a> {
    let items = filter(catalog, criteria);
    let genres = facet(
        "Genre",
        catalog.genres(),
        &criteria.genres,
        &items,
        Product::has_genre,
    );
    let platforms = facet(
        "Platform",
        catalog.platforms(),
        &criteria.platforms,
        &items,
        Product::has_platform,
    );
    tracing::trace!(matched = items.len(), total = catalog.len(), "catalog filtered");

    FilterResults {
        items,
        genres,
        platforms,
    }
}

fn facet(
    name: &str,
    values: Vec<&str>,
    selected: &BTreeSet<String>,
    items: &[&Product],
    has: fn(&Product, &str) -> bool,
) -> Facet {
    let mut facet = Facet::new(name);
    for value in values {
        let count = items.iter().filter(|p| has(p, value)).count();
        facet.add_value(value, count, selected.contains(value));
    }
    // Selections the catalog has never seen still show up, with no matches.
    for value in selected {
        if facet.get(value).is_none() {
            facet.add_value(value.as_str(), 0, true);
        }
    }
    facet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PriceTag;
    use crate::search::TypeFilter;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new(1, "Dragon Legends", 2499, &["RPG", "Fantasy"], &["PC", "Xbox"], 4.9),
            Product::new(2, "Racing Fury", 999, &["Racing", "Sports"], &["PC", "PS5"], 4.4),
            Product::new(3, "Dragon Racer", 1299, &["Racing"], &["Switch"], 4.0),
            Product::new(4, "Arena Clash", 0, &["Action"], &["PC"], 4.1)
                .with_price_tag(PriceTag::Free { original_price: None }),
        ])
        .unwrap()
    }

    fn titles(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn test_default_criteria_return_everything_in_order() {
        let catalog = catalog();
        let result = filter(&catalog, &FilterCriteria::default());
        assert_eq!(
            titles(&result),
            vec!["Dragon Legends", "Racing Fury", "Dragon Racer", "Arena Clash"]
        );
    }

    #[test]
    fn test_dragon_search() {
        let catalog = Catalog::new(vec![
            Product::new(3, "Dragon Legends", 2499, &["RPG"], &["PC"], 4.9),
            Product::new(4, "Racing Fury", 999, &["Racing"], &["PC"], 4.4),
        ])
        .unwrap();
        let criteria = FilterCriteria::new()
            .with_search("dragon")
            .with_price_range(0, 5000)
            .with_type_filter(TypeFilter::All);
        assert_eq!(titles(&filter(&catalog, &criteria)), vec!["Dragon Legends"]);
    }

    #[test]
    fn test_combined_criteria_preserve_order() {
        let catalog = catalog();
        let criteria = FilterCriteria::new()
            .with_genre("Racing")
            .with_genre("RPG")
            .with_price_range(1000, 3000);
        assert_eq!(
            titles(&filter(&catalog, &criteria)),
            vec!["Dragon Legends", "Dragon Racer"]
        );
    }

    #[test]
    fn test_no_results_is_not_an_error() {
        let catalog = catalog();
        let criteria = FilterCriteria::new().with_search("nonexistent");
        let results = search(&catalog, &criteria);
        assert!(results.is_empty());
        assert!(results.genres.values.iter().all(|v| v.count == 0));
    }

    #[test]
    fn test_inverted_range_returns_nothing() {
        let catalog = catalog();
        let criteria = FilterCriteria::new().with_price_range(3000, 100);
        assert!(filter(&catalog, &criteria).is_empty());
    }

    #[test]
    fn test_search_facets() {
        let catalog = catalog();
        let criteria = FilterCriteria::new().with_platform("PC");
        let results = search(&catalog, &criteria);

        assert_eq!(results.len(), 3);
        assert_eq!(results.genres.get("Racing").unwrap().count, 1);
        assert_eq!(results.genres.get("Action").unwrap().count, 1);
        let pc = results.platforms.get("PC").unwrap();
        assert!(pc.selected);
        assert_eq!(pc.count, 3);
        assert_eq!(results.platforms.get("Switch").unwrap().count, 0);
    }

    #[test]
    fn test_unknown_selection_is_reported_in_facet() {
        let catalog = catalog();
        let criteria = FilterCriteria::new()
            .with_genre("Strategy")
            .with_genre("RPG");
        let results = search(&catalog, &criteria);

        assert_eq!(titles(&results.items), vec!["Dragon Legends"]);
        let strategy = results.genres.get("Strategy").unwrap();
        assert!(strategy.selected);
        assert_eq!(strategy.count, 0);
        let selected: Vec<&str> = results
            .genres
            .selected()
            .map(|v| v.value.as_str())
            .collect();
        assert_eq!(selected, vec!["RPG", "Strategy"]);
        // Catalog values keep their place ahead of unknown selections.
        assert_eq!(results.genres.values.last().unwrap().value, "Strategy");
    }
}
