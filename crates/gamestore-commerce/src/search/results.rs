//! Filter results and facet summaries.

use crate::catalog::Product;
use serde::Serialize;

/// The outcome of running criteria over a catalog.
#[derive(Debug, Clone, Serialize)]
pub struct FilterResults<'a> {
    /// Matching products in catalog order.
    pub items: Vec<&'a Product>,
    /// Genre facet over the matching products.
    pub genres: Facet,
    /// Platform facet over the matching products.
    pub platforms: Facet,
}

impl<'a> FilterResults<'a> {
    /// Number of matching products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A facet for filtering.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Facet {
    /// Facet name (e.g., "Genre").
    pub name: String,
    /// Facet values in catalog order.
    pub values: Vec<FacetValue>,
}

impl Facet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Add a value to the facet.
    pub fn add_value(&mut self, value: impl Into<String>, count: usize, selected: bool) {
        self.values.push(FacetValue {
            value: value.into(),
            count,
            selected,
        });
    }

    /// Look up a value.
    pub fn get(&self, value: &str) -> Option<&FacetValue> {
        self.values.iter().find(|v| v.value == value)
    }

    /// Values currently selected.
    pub fn selected(&self) -> impl Iterator<Item = &FacetValue> {
        self.values.iter().filter(|v| v.selected)
    }
}

/// A single facet value.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FacetValue {
    /// The value.
    pub value: String,
    /// Number of matching products carrying this value.
    pub count: usize,
    /// Whether currently selected.
    pub selected: bool,
}
