//! Store error types.

use thiserror::Error;

/// Errors raised while loading the catalog, reward table or configuration.
///
/// Runtime operations (filtering, cart totals, checkout, spinning) never
/// fail; everything here is reported before any interaction is allowed.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A product record is malformed.
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct { id: u32, reason: String },

    /// Two products share the same id.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(u32),

    /// The reward table has no entries.
    #[error("Reward table is empty")]
    EmptyRewardTable,

    /// A reward entry is malformed.
    #[error("Invalid reward {id}: {reason}")]
    InvalidReward { id: u32, reason: String },

    /// Two rewards share the same id.
    #[error("Duplicate reward id: {0}")]
    DuplicateReward(u32),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl StoreError {
    pub(crate) fn invalid_product(id: u32, reason: impl Into<String>) -> Self {
        StoreError::InvalidProduct {
            id,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_reward(id: u32, reason: impl Into<String>) -> Self {
        StoreError::InvalidReward {
            id,
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::SerializationError(e.to_string())
    }
}
