//! Search module.
//!
//! Contains filter criteria, the filter engine and facet summaries.

mod filter;
mod query;
mod results;

pub use filter::{FilterCriteria, PriceRange, TypeFilter, DEFAULT_MAX_PRICE};
pub use query::{filter, search};
pub use results::{Facet, FacetValue, FilterResults};
