//! Bonus balance.

use serde::{Deserialize, Serialize};

/// Credit accumulated from wheel rewards, in the smallest currency unit.
///
/// Only grows. Checkout reads it but never debits it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BonusBalance(u64);

impl BonusBalance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> u64 {
        self.0
    }

    /// Add credit, saturating at `u64::MAX`.
    pub fn credit(&mut self, amount: u64) {
        self.0 = self.0.saturating_add(amount);
    }
}
