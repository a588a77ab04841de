//! Shopping cart module.
//!
//! Contains the cart ledger and its display pricing.

mod cart;
mod pricing;

pub use cart::Cart;
pub use pricing::{CartLine, CartSummary};
