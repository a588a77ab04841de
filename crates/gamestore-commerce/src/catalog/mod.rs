//! Product catalog module.
//!
//! Contains the product model, the immutable catalog store and the demo data.

mod demo;
mod product;
mod store;

pub use demo::{demo_products, DEMO_GENRES, DEMO_PLATFORMS};
pub use product::{PriceTag, Product, ProductRecord, MAX_RATING};
pub use store::Catalog;
