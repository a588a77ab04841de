//! Storefront logic for GameStore.
//!
//! This crate holds the parts of the storefront with actual decisions in
//! them:
//!
//! - **Catalog**: immutable product list, loaded and validated once
//! - **Search**: text, facet, price and free/paid filtering
//! - **Cart**: ordered multiset of product ids and its totals
//! - **Rewards**: the bonus wheel, its timer and the bonus balance
//! - **Checkout**: applying the bonus balance to the cart total
//!
//! # Example
//!
//! ```rust,no_run
//! use gamestore_commerce::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), StoreError> {
//! let store = Storefront::from_config(StoreConfig::default(), None)?;
//! let session = store.open_shared_session();
//!
//! // Browse and fill the cart
//! {
//!     let mut s = session.lock();
//!     s.criteria_mut().search_text = "dragon".to_string();
//!     let first = s.browse().items.first().map(|p| p.id);
//!     if let Some(id) = first {
//!         s.add_to_cart(id);
//!     }
//! }
//!
//! // Spin the wheel and wait for it to settle
//! if let Some(pending) = session.spin() {
//!     let state = pending.wait().await;
//!     println!("won: {:?}", state.reward());
//! }
//!
//! let summary = session.lock().checkout();
//! println!("to pay: {}", store.money(summary.totals.net_total));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod rewards;
pub mod search;
pub mod session;
pub mod storefront;

pub use error::StoreError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, PriceTag, Product, ProductRecord};

    // Search
    pub use crate::search::{
        filter, search, Facet, FacetValue, FilterCriteria, FilterResults, PriceRange, TypeFilter,
    };

    // Cart
    pub use crate::cart::{Cart, CartLine, CartSummary};

    // Rewards
    pub use crate::rewards::{
        select_reward, BonusBalance, BonusWheel, RewardEntry, RewardKind, RewardTable,
        SpinOutcome, WheelState,
    };

    // Checkout
    pub use crate::checkout::{compute_total, CheckoutSummary, CheckoutTotals};

    // Sessions
    pub use crate::config::StoreConfig;
    pub use crate::session::{PendingSpin, Session, SharedSession};
    pub use crate::storefront::Storefront;
}
