//! Price a cart and apply a bonus balance.

use anyhow::{bail, Result};
use gamestore_commerce::checkout::{compute_total, CheckoutSummary};
use gamestore_commerce::storefront::Storefront;
use gamestore_commerce::ProductId;

use super::CheckoutArgs;
use crate::context::Context;
use crate::output::reward_label;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    if args.products.is_empty() {
        bail!("Nothing to check out. Pass product ids, e.g. `gamestore checkout 1 3 3`.");
    }

    let store = ctx.storefront()?;
    let mut session = store.open_session();
    for id in &args.products {
        session.add_to_cart(ProductId::new(*id));
    }

    let mut summary = session.checkout();
    if let Some(bonus) = args.bonus {
        summary.totals = compute_total(summary.cart.subtotal, bonus);
        summary.bonus_balance = bonus;
    }

    if summary.cart.unresolved > 0 {
        ctx.output.warn(&format!(
            "{} unknown product id(s) skipped",
            summary.cart.unresolved
        ));
    }

    if ctx.output.is_json() {
        ctx.output.json(&summary);
        return Ok(());
    }

    print_summary(&summary, &store, ctx);
    Ok(())
}

/// Print a checkout summary as a receipt.
pub fn print_summary(summary: &CheckoutSummary, store: &Storefront, ctx: &Context) {
    ctx.output.header("Checkout");

    if summary.cart.is_empty() {
        ctx.output.info("Your cart is empty.");
    }

    for line in &summary.cart.lines {
        let price = if line.is_free {
            "Free".to_string()
        } else {
            store.money(line.price).to_string()
        };
        ctx.output.table_row(&[&line.title, &price], &[24, 0]);
    }

    ctx.output.info("");
    ctx.output.kv("Items", &summary.cart.item_count.to_string());
    ctx.output.kv("Subtotal", &store.money(summary.totals.gross_total).to_string());
    if summary.cart.savings() > 0 {
        ctx.output.kv("You save", &store.money(summary.cart.savings()).to_string());
    }
    ctx.output.kv(
        "Bonus applied",
        &format!(
            "-{} (balance {})",
            store.money(summary.totals.bonus_applied),
            store.money(summary.bonus_balance)
        ),
    );
    if let Some(discount) = &summary.available_discount {
        ctx.output.kv(
            "Wheel discount",
            &format!("{}, not applied", reward_label(discount, |a| store.money(a))),
        );
    }
    ctx.output.success(&format!(
        "To pay: {}",
        store.money(summary.totals.net_total)
    ));
}
