//! Checkout total calculation.

use serde::{Deserialize, Serialize};

/// Amounts owed at checkout, in the smallest currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct CheckoutTotals {
    /// Cart total before the bonus.
    pub gross_total: u64,
    /// Bonus balance put towards the purchase.
    pub bonus_applied: u64,
    /// What the shopper pays.
    pub net_total: u64,
}

impl CheckoutTotals {
    /// Whether the bonus covers the whole cart.
    pub fn is_fully_covered(&self) -> bool {
        self.net_total == 0
    }

    /// Balance left over after this checkout, if it were redeemed.
    pub fn remaining_bonus(&self, bonus_balance: u64) -> u64 {
        bonus_balance.saturating_sub(self.bonus_applied)
    }
}

/// Apply as much bonus balance as the cart total allows.
///
/// The bonus can neither exceed what is owed nor push the total below 0.
/// Pure: the balance itself is not touched.
pub fn compute_total(cart_total: u64, bonus_balance: u64) -> CheckoutTotals {
    let bonus_applied = bonus_balance.min(cart_total);
    CheckoutTotals {
        gross_total: cart_total,
        bonus_applied,
        net_total: cart_total.saturating_sub(bonus_applied),
    }
}
