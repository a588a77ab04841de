//! Checkout module.
//!
//! Combines the cart total with the bonus balance.

mod calculator;
mod summary;

pub use calculator::{compute_total, CheckoutTotals};
pub use summary::CheckoutSummary;
