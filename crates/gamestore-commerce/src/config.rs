//! Storefront configuration.

use crate::error::StoreError;
use crate::money::Currency;
use crate::rewards::{RewardEntry, RewardTable, DEFAULT_SPIN_DELAY};
use crate::search::PriceRange;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Settings shared by every session of a storefront.
///
/// Every field has a default, so an empty file is a valid configuration.
/// Table-valued fields come last so the struct serializes to valid TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Currency prices are shown in.
    pub currency: Currency,

    /// How long a wheel spin lasts, in milliseconds.
    pub spin_delay_ms: u64,

    /// Seed for the wheel RNG. Random when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rng_seed: Option<u64>,

    /// JSON catalog file. The demo catalog is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,

    /// Price range restored when filters are reset.
    pub price_range: PriceRange,

    /// Wheel rewards. The default table is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewards: Option<Vec<RewardEntry>>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            spin_delay_ms: DEFAULT_SPIN_DELAY.as_millis() as u64,
            rng_seed: None,
            catalog_path: None,
            price_range: PriceRange::default(),
            rewards: None,
        }
    }
}

impl StoreConfig {
    pub fn spin_delay(&self) -> Duration {
        Duration::from_millis(self.spin_delay_ms)
    }

    /// The configured reward table, or the default one.
    ///
    /// An explicitly empty list is an error, not a request for the default.
    pub fn reward_table(&self) -> Result<RewardTable, StoreError> {
        match &self.rewards {
            Some(entries) => RewardTable::new(entries.clone()),
            None => Ok(RewardTable::default()),
        }
    }
}

/// Generate a commented default `gamestore.toml`.
pub fn generate_default_config() -> String {
    let defaults = StoreConfig::default();
    format!(
        r#"# GameStore configuration

# Currency prices are shown in (RUB, USD, EUR).
currency = "{currency}"

# How long the bonus wheel spins, in milliseconds.
spin_delay_ms = {delay}

# Fix the wheel RNG for reproducible spins.
# rng_seed = 42

# JSON array of products. The built-in demo catalog is used when unset.
# catalog_path = "catalog.json"

[price_range]
min = {min}
max = {max}

# Replace the default wheel. Each entry needs an id, label, kind
# (percent_discount or currency_credit) and a positive value.
# [[rewards]]
# id = 1
# label = "10% off"
# kind = "percent_discount"
# value = 10
"#,
        currency = defaults.currency.code(),
        delay = defaults.spin_delay_ms,
        min = defaults.price_range.min,
        max = defaults.price_range.max,
    )
}
