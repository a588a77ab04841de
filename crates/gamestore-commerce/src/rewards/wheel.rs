//! Bonus wheel state machine.
//!
//! ```text
//! Idle ──spin()──▶ Spinning ──resolve()──▶ Resolved(entry)
//!                     ▲                          │
//!                     └─────────spin()───────────┘
//! ```
//!
//! `spin()` while spinning is a no-op. Selection is uniform over the reward
//! table and lives in [`select_reward`], separate from any timing, so it can
//! be driven by a seeded RNG.

use crate::rewards::{RewardEntry, RewardTable};
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;

/// Pick one reward, each entry with probability `1 / table.len()`.
///
/// Reward values play no part in the draw.
pub fn select_reward<'a, R: Rng + ?Sized>(table: &'a RewardTable, rng: &mut R) -> &'a RewardEntry {
    let entries = table.entries();
    &entries[rng.gen_range(0..entries.len())]
}

/// Current state of the wheel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "state", content = "reward", rename_all = "snake_case")]
pub enum WheelState {
    #[default]
    Idle,
    Spinning,
    Resolved(RewardEntry),
}

impl WheelState {
    pub fn is_spinning(&self) -> bool {
        matches!(self, WheelState::Spinning)
    }

    /// The reward from the last completed spin.
    pub fn reward(&self) -> Option<&RewardEntry> {
        match self {
            WheelState::Resolved(entry) => Some(entry),
            _ => None,
        }
    }
}

/// Identifies one spin, so a stale timer cannot touch a later spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SpinTicket(u64);

/// Result of asking the wheel to spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinOutcome {
    /// A new spin is in flight.
    Started(SpinTicket),
    /// A spin was already in flight; nothing changed.
    AlreadySpinning,
}

impl SpinOutcome {
    pub fn ticket(&self) -> Option<SpinTicket> {
        match self {
            SpinOutcome::Started(ticket) => Some(*ticket),
            SpinOutcome::AlreadySpinning => None,
        }
    }
}

/// The bonus wheel.
#[derive(Debug, Clone)]
pub struct BonusWheel {
    rewards: Arc<RewardTable>,
    state: WheelState,
    spins: u64,
}

impl BonusWheel {
    pub fn new(rewards: Arc<RewardTable>) -> Self {
        Self {
            rewards,
            state: WheelState::Idle,
            spins: 0,
        }
    }

    pub fn state(&self) -> &WheelState {
        &self.state
    }

    pub fn rewards(&self) -> &RewardTable {
        &self.rewards
    }

    /// Number of spins started so far.
    pub fn spins(&self) -> u64 {
        self.spins
    }

    /// Start a spin unless one is already in flight.
    ///
    /// A previous result is cleared immediately.
    pub fn spin(&mut self) -> SpinOutcome {
        if self.state.is_spinning() {
            tracing::debug!("spin rejected, wheel already spinning");
            return SpinOutcome::AlreadySpinning;
        }
        self.spins += 1;
        self.state = WheelState::Spinning;
        tracing::debug!(spin = self.spins, "wheel spinning");
        SpinOutcome::Started(self.current_ticket())
    }

    /// Finish the spin in flight, if any, and return the reward.
    pub fn resolve<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<RewardEntry> {
        if !self.state.is_spinning() {
            return None;
        }
        let entry = select_reward(&self.rewards, rng).clone();
        tracing::info!(
            reward = %entry.label,
            kind = entry.kind.as_str(),
            value = entry.value,
            "wheel resolved"
        );
        self.state = WheelState::Resolved(entry.clone());
        Some(entry)
    }

    /// Finish the spin identified by `ticket`.
    ///
    /// Does nothing if that spin is no longer the one in flight.
    pub fn resolve_ticket<R: Rng + ?Sized>(
        &mut self,
        ticket: SpinTicket,
        rng: &mut R,
    ) -> Option<RewardEntry> {
        if ticket != self.current_ticket() {
            return None;
        }
        self.resolve(rng)
    }

    /// Abandon the spin identified by `ticket`, returning the wheel to idle.
    ///
    /// Returns whether anything changed.
    pub fn cancel(&mut self, ticket: SpinTicket) -> bool {
        if ticket != self.current_ticket() || !self.state.is_spinning() {
            return false;
        }
        self.state = WheelState::Idle;
        tracing::debug!(spin = self.spins, "spin cancelled");
        true
    }

    fn current_ticket(&self) -> SpinTicket {
        SpinTicket(self.spins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewards::RewardKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn wheel() -> BonusWheel {
        BonusWheel::new(Arc::new(RewardTable::default()))
    }

    #[test]
    fn test_wheel_starts_idle() {
        let wheel = wheel();
        assert_eq!(wheel.state(), &WheelState::Idle);
        assert_eq!(wheel.spins(), 0);
    }

    #[test]
    fn test_spin_then_resolve() {
        let mut wheel = wheel();
        let mut rng = StdRng::seed_from_u64(7);

        assert!(matches!(wheel.spin(), SpinOutcome::Started(_)));
        assert!(wheel.state().is_spinning());

        let entry = wheel.resolve(&mut rng).unwrap();
        assert_eq!(wheel.state(), &WheelState::Resolved(entry.clone()));
        assert!(wheel.rewards().entries().contains(&entry));
    }

    #[test]
    fn test_spin_while_spinning_is_noop() {
        let mut wheel = wheel();
        let first = wheel.spin();
        assert_eq!(wheel.spin(), SpinOutcome::AlreadySpinning);
        assert_eq!(wheel.spins(), 1);
        assert!(wheel.state().is_spinning());
        // The original spin is still the one that resolves.
        let mut rng = StdRng::seed_from_u64(1);
        assert!(wheel.resolve_ticket(first.ticket().unwrap(), &mut rng).is_some());
    }

    #[test]
    fn test_resolve_when_idle_does_nothing() {
        let mut wheel = wheel();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(wheel.resolve(&mut rng).is_none());
        assert_eq!(wheel.state(), &WheelState::Idle);
    }

    #[test]
    fn test_respin_clears_previous_result() {
        let mut wheel = wheel();
        let mut rng = StdRng::seed_from_u64(3);
        wheel.spin();
        wheel.resolve(&mut rng);
        assert!(wheel.state().reward().is_some());

        wheel.spin();
        assert_eq!(wheel.state(), &WheelState::Spinning);
        assert!(wheel.state().reward().is_none());
    }

    #[test]
    fn test_stale_ticket_ignored() {
        let mut wheel = wheel();
        let mut rng = StdRng::seed_from_u64(3);
        let old = wheel.spin().ticket().unwrap();
        assert!(wheel.cancel(old));
        let new = wheel.spin().ticket().unwrap();

        assert!(wheel.resolve_ticket(old, &mut rng).is_none());
        assert!(!wheel.cancel(old));
        assert!(wheel.state().is_spinning());
        assert!(wheel.resolve_ticket(new, &mut rng).is_some());
    }

    #[test]
    fn test_seeded_selection_is_deterministic() {
        let table = RewardTable::default();
        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..20)
                .map(|_| select_reward(&table, &mut rng).id)
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(42), draw(42));
    }

    #[test]
    fn test_single_entry_table_always_wins() {
        let table = RewardTable::new(vec![RewardEntry::credit(9, 10)]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..10 {
            assert_eq!(select_reward(&table, &mut rng).kind, RewardKind::CurrencyCredit);
        }
    }
}
