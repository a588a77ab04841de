//! Bonus wheel module.
//!
//! Contains reward entries, the wheel state machine, the bonus balance and
//! the timer that settles a spin.

mod balance;
mod reward;
mod timer;
mod wheel;

pub use balance::BonusBalance;
pub use reward::{RewardEntry, RewardKind, RewardTable};
pub use timer::{ScheduledResolution, DEFAULT_SPIN_DELAY};
pub use wheel::{select_reward, BonusWheel, SpinOutcome, SpinTicket, WheelState};
