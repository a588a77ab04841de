//! What the shopper sees at checkout.

use crate::cart::CartSummary;
use crate::checkout::CheckoutTotals;
use crate::rewards::RewardEntry;
use serde::Serialize;

/// Cart contents, totals and any discount the wheel has granted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CheckoutSummary {
    pub cart: CartSummary,
    pub totals: CheckoutTotals,
    /// Bonus balance at the time of checkout.
    pub bonus_balance: u64,
    /// Most recent percent-discount reward. Shown, never applied.
    pub available_discount: Option<RewardEntry>,
}

impl CheckoutSummary {
    /// Balance the shopper would keep if this order were redeemed.
    pub fn remaining_bonus(&self) -> u64 {
        self.totals.remaining_bonus(self.bonus_balance)
    }
}
