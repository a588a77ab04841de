//! Shopper sessions.
//!
//! A [`Session`] owns everything one shopper mutates: the cart, the bonus
//! balance, the wheel and the current filter criteria. Nothing is global, so
//! sessions are independent of each other.
//!
//! The wheel settles on a timer, which needs to reach back into the session.
//! [`SharedSession`] wraps a session for that; the synchronous [`Session`]
//! API stays usable for callers that drive the wheel themselves.

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::checkout::{compute_total, CheckoutSummary, CheckoutTotals};
use crate::ids::{ProductId, SessionId};
use crate::rewards::{
    BonusBalance, BonusWheel, RewardEntry, RewardKind, RewardTable, ScheduledResolution,
    SpinOutcome, SpinTicket, WheelState,
};
use crate::search::{search, FilterCriteria, FilterResults, PriceRange};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// One shopper's state.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    catalog: Arc<Catalog>,
    cart: Cart,
    bonus_balance: BonusBalance,
    wheel: BonusWheel,
    last_discount: Option<RewardEntry>,
    criteria: FilterCriteria,
    default_price_range: PriceRange,
    spin_delay: Duration,
    rng: StdRng,
}

impl Session {
    /// Create a session with a random RNG seed and default settings.
    pub fn new(catalog: Arc<Catalog>, rewards: Arc<RewardTable>) -> Self {
        Self {
            id: SessionId::generate(),
            catalog,
            cart: Cart::new(),
            bonus_balance: BonusBalance::new(),
            wheel: BonusWheel::new(rewards),
            last_discount: None,
            criteria: FilterCriteria::default(),
            default_price_range: PriceRange::default(),
            spin_delay: crate::rewards::DEFAULT_SPIN_DELAY,
            rng: StdRng::from_entropy(),
        }
    }

    /// Seed the wheel RNG.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Set how long a spin lasts.
    pub fn with_spin_delay(mut self, delay: Duration) -> Self {
        self.spin_delay = delay;
        self
    }

    /// Set the price range used initially and restored on reset.
    pub fn with_price_range(mut self, price_range: PriceRange) -> Self {
        self.default_price_range = price_range;
        self.criteria.price_range = price_range;
        self
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn spin_delay(&self) -> Duration {
        self.spin_delay
    }

    // Browsing

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn criteria_mut(&mut self) -> &mut FilterCriteria {
        &mut self.criteria
    }

    /// Clear facets and restore the default price range.
    pub fn reset_filters(&mut self) {
        self.criteria.reset(self.default_price_range);
    }

    /// Run the current criteria over the catalog.
    pub fn browse(&self) -> FilterResults<'_> {
        search(&self.catalog, &self.criteria)
    }

    // Cart

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add a product to the cart. Unknown ids are accepted.
    pub fn add_to_cart(&mut self, product_id: ProductId) {
        if !self.catalog.contains(product_id) {
            tracing::debug!(%product_id, "adding product missing from catalog");
        }
        self.cart.add(product_id);
    }

    pub fn cart_total(&self) -> u64 {
        self.cart.total(&self.catalog)
    }

    pub fn cart_count(&self) -> usize {
        self.cart.count()
    }

    // Wheel

    pub fn bonus_balance(&self) -> u64 {
        self.bonus_balance.get()
    }

    pub fn wheel(&self) -> &BonusWheel {
        &self.wheel
    }

    pub fn wheel_state(&self) -> &WheelState {
        self.wheel.state()
    }

    /// Most recent percent-discount reward.
    pub fn last_discount(&self) -> Option<&RewardEntry> {
        self.last_discount.as_ref()
    }

    /// Start a spin without scheduling its resolution.
    pub fn start_spin(&mut self) -> SpinOutcome {
        self.wheel.spin()
    }

    /// Settle the spin in flight, if any, applying its reward.
    pub fn resolve_spin(&mut self) -> Option<RewardEntry> {
        let entry = self.wheel.resolve(&mut self.rng)?;
        self.apply_reward(&entry);
        Some(entry)
    }

    /// Settle the spin identified by `ticket`, if it is still in flight.
    pub fn resolve_spin_ticket(&mut self, ticket: SpinTicket) -> Option<RewardEntry> {
        let entry = self.wheel.resolve_ticket(ticket, &mut self.rng)?;
        self.apply_reward(&entry);
        Some(entry)
    }

    /// Abandon the spin identified by `ticket`.
    pub fn cancel_spin(&mut self, ticket: SpinTicket) -> bool {
        self.wheel.cancel(ticket)
    }

    fn apply_reward(&mut self, entry: &RewardEntry) {
        let credit = entry.credit_amount();
        if credit > 0 {
            self.bonus_balance.credit(credit);
            tracing::info!(
                session = %self.id,
                credit,
                balance = self.bonus_balance.get(),
                "bonus balance credited"
            );
        }
        if let RewardKind::PercentDiscount = entry.kind {
            self.last_discount = Some(entry.clone());
        }
    }

    // Checkout

    /// Totals for the current cart and balance. The balance is not debited.
    pub fn totals(&self) -> CheckoutTotals {
        compute_total(self.cart_total(), self.bonus_balance())
    }

    /// Everything the checkout screen shows.
    pub fn checkout(&self) -> CheckoutSummary {
        let cart = self.cart.summary(&self.catalog);
        let totals = compute_total(cart.subtotal, self.bonus_balance());
        CheckoutSummary {
            cart,
            totals,
            bonus_balance: self.bonus_balance(),
            available_discount: self.last_discount.clone(),
        }
    }
}

/// A session reachable from the spin timer.
#[derive(Debug, Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<Session>>,
}

impl SharedSession {
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Lock the session.
    ///
    /// A panic while holding the lock leaves plain data behind, so a
    /// poisoned lock is recovered rather than propagated.
    pub fn lock(&self) -> MutexGuard<'_, Session> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Spin the wheel and schedule its resolution after the session's delay.
    ///
    /// Returns `None` when a spin is already in flight; that spin and its
    /// timer are left untouched.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime.
    pub fn spin(&self) -> Option<PendingSpin> {
        let (ticket, delay) = {
            let mut session = self.lock();
            let ticket = session.start_spin().ticket()?;
            (ticket, session.spin_delay())
        };

        let session = self.clone();
        let resolution = ScheduledResolution::schedule(delay, move || {
            session.lock().resolve_spin_ticket(ticket);
        });

        Some(PendingSpin {
            session: self.clone(),
            ticket,
            resolution,
        })
    }
}

/// A spin waiting for its timer.
#[derive(Debug)]
pub struct PendingSpin {
    session: SharedSession,
    ticket: SpinTicket,
    resolution: ScheduledResolution,
}

impl PendingSpin {
    pub fn ticket(&self) -> SpinTicket {
        self.ticket
    }

    pub fn is_finished(&self) -> bool {
        self.resolution.is_finished()
    }

    /// Stop the timer and return the wheel to idle.
    ///
    /// Returns whether the spin was still in flight.
    pub fn cancel(self) -> bool {
        self.resolution.cancel();
        self.session.lock().cancel_spin(self.ticket)
    }

    /// Wait for the wheel to settle and return the resulting state.
    pub async fn wait(self) -> WheelState {
        self.resolution.finished().await;
        self.session.lock().wheel_state().clone()
    }
}
