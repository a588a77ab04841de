//! The storefront: catalog, rewards and settings shared by all sessions.

use crate::catalog::Catalog;
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::money::Money;
use crate::rewards::RewardTable;
use crate::session::{Session, SharedSession};
use std::sync::Arc;

/// Loaded, validated storefront data.
///
/// Built once at startup; any configuration error surfaces here, before a
/// session exists.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Arc<Catalog>,
    rewards: Arc<RewardTable>,
    config: StoreConfig,
}

impl Storefront {
    pub fn new(catalog: Catalog, rewards: RewardTable, config: StoreConfig) -> Self {
        tracing::info!(
            products = catalog.len(),
            rewards = rewards.len(),
            currency = config.currency.code(),
            "storefront ready"
        );
        Self {
            catalog: Arc::new(catalog),
            rewards: Arc::new(rewards),
            config,
        }
    }

    /// Build from configuration, using the demo catalog when none is given.
    pub fn from_config(config: StoreConfig, catalog: Option<Catalog>) -> Result<Self, StoreError> {
        let rewards = config.reward_table()?;
        let catalog = match catalog {
            Some(catalog) => catalog,
            None => Catalog::demo()?,
        };
        Ok(Self::new(catalog, rewards, config))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rewards(&self) -> &RewardTable {
        &self.rewards
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Pair an amount with the storefront currency for display.
    pub fn money(&self, amount: u64) -> Money {
        Money::new(amount, self.config.currency)
    }

    /// Start a fresh session with the configured settings.
    pub fn open_session(&self) -> Session {
        let session = Session::new(self.catalog.clone(), self.rewards.clone())
            .with_spin_delay(self.config.spin_delay())
            .with_price_range(self.config.price_range);
        let session = match self.config.rng_seed {
            Some(seed) => session.with_seed(seed),
            None => session,
        };
        tracing::debug!(session = %session.id(), "session opened");
        session
    }

    /// Start a fresh session that can run the spin timer.
    pub fn open_shared_session(&self) -> SharedSession {
        SharedSession::new(self.open_session())
    }
}
