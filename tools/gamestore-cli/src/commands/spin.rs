//! Spin the bonus wheel.

use anyhow::Result;
use gamestore_commerce::rewards::{RewardEntry, WheelState};
use gamestore_commerce::session::SharedSession;
use serde::Serialize;

use super::SpinArgs;
use crate::context::Context;
use crate::output::reward_label;

#[derive(Serialize)]
struct SpinReport {
    rewards: Vec<RewardEntry>,
    bonus_balance: u64,
}

/// Run the spin command.
pub async fn run(args: SpinArgs, ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    let session = store.open_shared_session();
    let mut won = Vec::new();

    ctx.output.header("Bonus wheel");

    for round in 1..=args.times {
        let reward = if args.instant {
            let mut s = session.lock();
            s.start_spin();
            s.resolve_spin()
        } else {
            spin_and_wait(&session, ctx, round, args.times)
                .await
                .reward()
                .cloned()
        };

        if let Some(entry) = reward {
            ctx.output
                .success(&reward_label(&entry, |amount| store.money(amount)));
            won.push(entry);
        }
    }

    let bonus_balance = session.lock().bonus_balance();

    if ctx.output.is_json() {
        ctx.output.json(&SpinReport {
            rewards: won,
            bonus_balance,
        });
        return Ok(());
    }

    ctx.output.info("");
    ctx.output.kv("Bonus balance", &store.money(bonus_balance).to_string());
    if let Some(discount) = session.lock().last_discount() {
        ctx.output.kv("Discount", &discount.label);
    }

    Ok(())
}

/// Start one timed spin and show a spinner until it settles.
pub async fn spin_and_wait(
    session: &SharedSession,
    ctx: &Context,
    round: u32,
    total: u32,
) -> WheelState {
    let Some(pending) = session.spin() else {
        ctx.output.warn("The wheel is already spinning");
        return session.lock().wheel_state().clone();
    };

    let spinner = if total > 1 {
        ctx.output.spinner(&format!("Spinning ({}/{})...", round, total))
    } else {
        ctx.output.spinner("Spinning...")
    };
    let state = pending.wait().await;
    spinner.finish_and_clear();
    state
}
