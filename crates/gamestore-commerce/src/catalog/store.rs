//! The immutable catalog store.

use crate::catalog::{Product, ProductRecord};
use crate::error::StoreError;
use crate::ids::ProductId;
use std::collections::HashMap;

/// The full, immutable set of purchasable products.
///
/// Products keep the order they were loaded in; filtering and facet listings
/// rely on it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog from validated products.
    ///
    /// Every product is re-validated and ids must be unique.
    pub fn new(products: Vec<Product>) -> Result<Self, StoreError> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            product.validate()?;
            if index.insert(product.id, position).is_some() {
                return Err(StoreError::DuplicateProduct(product.id.get()));
            }
        }
        tracing::debug!(products = products.len(), "catalog loaded");
        Ok(Self { products, index })
    }

    /// Build a catalog from source records.
    pub fn from_records(records: Vec<ProductRecord>) -> Result<Self, StoreError> {
        let products = records
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(products)
    }

    /// Parse a JSON array of product records.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let records: Vec<ProductRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Serialize the catalog back to source records.
    pub fn to_records(&self) -> Vec<ProductRecord> {
        self.products.iter().map(ProductRecord::from).collect()
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).map(|&position| &self.products[position])
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.index.contains_key(&id)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct genres in first-seen order.
    pub fn genres(&self) -> Vec<&str> {
        distinct(self.products.iter().flat_map(|p| p.genres.iter()))
    }

    /// Distinct platforms in first-seen order.
    pub fn platforms(&self) -> Vec<&str> {
        distinct(self.products.iter().flat_map(|p| p.platforms.iter()))
    }

    /// Lowest and highest price, or `None` for an empty catalog.
    pub fn price_bounds(&self) -> Option<(u64, u64)> {
        let prices = self.products.iter().map(Product::price);
        let min = prices.clone().min()?;
        let max = prices.max()?;
        Some((min, max))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::new();
    for value in values {
        if !out.contains(&value.as_str()) {
            out.push(value);
        }
    }
    out
}
