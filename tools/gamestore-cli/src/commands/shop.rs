//! Interactive shopping session.

use std::collections::BTreeSet;

use anyhow::{bail, Result};
use dialoguer::{Input, MultiSelect, Select};
use gamestore_commerce::rewards::WheelState;
use gamestore_commerce::search::{PriceRange, TypeFilter};
use gamestore_commerce::session::{PendingSpin, SharedSession};
use gamestore_commerce::storefront::Storefront;
use gamestore_commerce::ProductId;

use super::browse::print_products;
use super::checkout::print_summary;
use super::ShopArgs;
use crate::context::Context;
use crate::output::{price_label, reward_label};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Browse,
    Search,
    Genres,
    Platforms,
    Price,
    Type,
    Reset,
    AddToCart,
    Spin,
    Checkout,
    Quit,
}

impl Action {
    const ALL: [Action; 11] = [
        Action::Browse,
        Action::Search,
        Action::Genres,
        Action::Platforms,
        Action::Price,
        Action::Type,
        Action::Reset,
        Action::AddToCart,
        Action::Spin,
        Action::Checkout,
        Action::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            Action::Browse => "Show games",
            Action::Search => "Search by title",
            Action::Genres => "Choose genres",
            Action::Platforms => "Choose platforms",
            Action::Price => "Set price range",
            Action::Type => "Free or paid",
            Action::Reset => "Reset filters",
            Action::AddToCart => "Add a game to the cart",
            Action::Spin => "Spin the bonus wheel",
            Action::Checkout => "Cart and checkout",
            Action::Quit => "Quit",
        }
    }
}

/// Run the shop command.
pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("The shop command is interactive and has no JSON output");
    }

    let store = ctx.storefront()?;
    let session = store.open_shared_session();
    let mut pending: Option<PendingSpin> = None;

    ctx.output.header("GameStore");
    ctx.output.debug(&format!("Session {}", session.lock().id()));

    let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();

    loop {
        // Report a spin that settled while the shopper was browsing.
        if pending.as_ref().map_or(false, PendingSpin::is_finished) {
            if let Some(spin) = pending.take() {
                let state = spin.wait().await;
                report_spin(&state, &store, ctx);
            }
        }

        print_status(&session, &store, ctx);

        let choice = Select::new()
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        match Action::ALL[choice] {
            Action::Browse => show_games(&session, &store, ctx),
            Action::Search => {
                let current = session.lock().criteria().search_text.clone();
                let text: String = Input::new()
                    .with_prompt("Title contains")
                    .with_initial_text(current)
                    .allow_empty(true)
                    .interact_text()?;
                session.lock().criteria_mut().search_text = text.trim().to_string();
                show_games(&session, &store, ctx);
            }
            Action::Genres => {
                let options: Vec<String> =
                    store.catalog().genres().into_iter().map(String::from).collect();
                let selected = session.lock().criteria().genres.clone();
                let chosen = choose_many("Genres", &options, &selected)?;
                let mut s = session.lock();
                for genre in &options {
                    if chosen.contains(genre) != selected.contains(genre) {
                        s.criteria_mut().toggle_genre(genre);
                    }
                }
            }
            Action::Platforms => {
                let options: Vec<String> = store
                    .catalog()
                    .platforms()
                    .into_iter()
                    .map(String::from)
                    .collect();
                let selected = session.lock().criteria().platforms.clone();
                let chosen = choose_many("Platforms", &options, &selected)?;
                let mut s = session.lock();
                for platform in &options {
                    if chosen.contains(platform) != selected.contains(platform) {
                        s.criteria_mut().toggle_platform(platform);
                    }
                }
            }
            Action::Price => {
                let current = session.lock().criteria().price_range;
                let min: u64 = Input::new()
                    .with_prompt("Minimum price")
                    .default(current.min)
                    .interact_text()?;
                let max: u64 = Input::new()
                    .with_prompt("Maximum price")
                    .default(current.max)
                    .interact_text()?;
                let range = PriceRange::new(min, max);
                if !range.is_valid() {
                    ctx.output.warn("Minimum is above maximum; nothing will match");
                }
                session.lock().criteria_mut().price_range = range;
            }
            Action::Type => {
                let types = [TypeFilter::All, TypeFilter::Free, TypeFilter::Paid];
                let names: Vec<&str> = types.iter().map(TypeFilter::as_str).collect();
                let current = session.lock().criteria().type_filter;
                let index = Select::new()
                    .with_prompt("Show")
                    .items(&names)
                    .default(types.iter().position(|t| *t == current).unwrap_or(0))
                    .interact()?;
                session.lock().criteria_mut().type_filter = types[index];
            }
            Action::Reset => {
                session.lock().reset_filters();
                ctx.output.success("Filters reset");
            }
            Action::AddToCart => add_to_cart(&session, &store, ctx)?,
            Action::Spin => {
                if args.instant {
                    let mut s = session.lock();
                    s.start_spin();
                    s.resolve_spin();
                    report_spin(s.wheel_state(), &store, ctx);
                } else {
                    match request_spin(&session, &mut pending) {
                        SpinRequest::Started => {
                            ctx.output.info("The wheel is spinning. Keep shopping!")
                        }
                        SpinRequest::AlreadySpinning => {
                            ctx.output.warn("The wheel is already spinning")
                        }
                    }
                }
            }
            Action::Checkout => {
                let summary = session.lock().checkout();
                print_summary(&summary, &store, ctx);
            }
            Action::Quit => {
                if let Some(spin) = pending.take() {
                    spin.cancel();
                }
                ctx.output.info("Bye!");
                return Ok(());
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum SpinRequest {
    Started,
    AlreadySpinning,
}

/// Start a timed spin unless one is pending. Never waits for the wheel.
fn request_spin(session: &SharedSession, pending: &mut Option<PendingSpin>) -> SpinRequest {
    if pending.is_some() {
        return SpinRequest::AlreadySpinning;
    }
    match session.spin() {
        Some(spin) => {
            *pending = Some(spin);
            SpinRequest::Started
        }
        None => SpinRequest::AlreadySpinning,
    }
}

fn print_status(session: &SharedSession, store: &Storefront, ctx: &Context) {
    let s = session.lock();
    let wheel = match s.wheel_state() {
        WheelState::Idle => "ready".to_string(),
        WheelState::Spinning => "spinning".to_string(),
        WheelState::Resolved(entry) => format!("won {}", entry.label),
    };
    ctx.output.info("");
    ctx.output.kv(
        "Cart",
        &format!(
            "{} item(s), {}",
            s.cart_count(),
            store.money(s.cart_total())
        ),
    );
    ctx.output.kv("Bonus", &store.money(s.bonus_balance()).to_string());
    ctx.output.kv("Wheel", &wheel);
}

fn show_games(session: &SharedSession, store: &Storefront, ctx: &Context) {
    let s = session.lock();
    let results = s.browse();
    ctx.output.header(&format!("Found: {}", results.len()));
    if results.is_empty() {
        ctx.output.info("No games match these filters.");
        return;
    }
    print_products(&results.items, store, ctx);
}

fn add_to_cart(session: &SharedSession, store: &Storefront, ctx: &Context) -> Result<()> {
    // Collect choices first; the session stays unlocked while prompting.
    let choices: Vec<(ProductId, String)> = {
        let s = session.lock();
        s.browse()
            .items
            .iter()
            .map(|p| {
                let label = format!(
                    "{}  {}",
                    p.title,
                    price_label(p, |amount| store.money(amount))
                );
                (p.id, label)
            })
            .collect()
    };

    if choices.is_empty() {
        ctx.output.info("No games match these filters.");
        return Ok(());
    }

    let labels: Vec<&str> = choices.iter().map(|(_, label)| label.as_str()).collect();
    let index = Select::new()
        .with_prompt("Add which game?")
        .items(&labels)
        .default(0)
        .interact()?;

    let (id, _) = &choices[index];
    let mut s = session.lock();
    s.add_to_cart(*id);
    if let Some(product) = s.catalog().get(*id) {
        ctx.output.success(&format!("Added {}", product.title));
    }
    Ok(())
}

fn choose_many(
    prompt: &str,
    options: &[String],
    selected: &BTreeSet<String>,
) -> Result<BTreeSet<String>> {
    let defaults: Vec<bool> = options.iter().map(|o| selected.contains(o)).collect();
    let picked = MultiSelect::new()
        .with_prompt(prompt)
        .items(options)
        .defaults(&defaults)
        .interact()?;
    Ok(picked.into_iter().map(|i| options[i].clone()).collect())
}

fn report_spin(state: &WheelState, store: &Storefront, ctx: &Context) {
    match state.reward() {
        Some(entry) => ctx.output.success(&format!(
            "The wheel stopped on {}",
            reward_label(entry, |amount| store.money(amount))
        )),
        None => ctx.output.warn("The wheel stopped without a prize"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamestore_commerce::config::StoreConfig;
    use std::time::Duration;

    fn session() -> SharedSession {
        let config = StoreConfig {
            spin_delay_ms: 3000,
            rng_seed: Some(1),
            ..Default::default()
        };
        Storefront::from_config(config, None)
            .unwrap()
            .open_shared_session()
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_spin_request_returns_immediately() {
        let session = session();
        let mut pending = None;

        assert_eq!(request_spin(&session, &mut pending), SpinRequest::Started);
        let started = tokio::time::Instant::now();
        assert_eq!(
            request_spin(&session, &mut pending),
            SpinRequest::AlreadySpinning
        );
        assert_eq!(started.elapsed(), Duration::ZERO);

        // The first spin is still tracked and still settles on its own.
        assert!(session.lock().wheel_state().is_spinning());
        let state = pending.take().unwrap().wait().await;
        assert!(state.reward().is_some());
        assert_eq!(session.lock().wheel().spins(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_untracked_spin_is_reported_as_spinning() {
        let session = session();
        let _other = session.spin().unwrap();
        let mut pending = None;

        assert_eq!(
            request_spin(&session, &mut pending),
            SpinRequest::AlreadySpinning
        );
        assert!(pending.is_none());
    }
}
