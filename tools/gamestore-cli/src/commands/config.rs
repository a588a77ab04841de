//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};
use gamestore_commerce::config::generate_default_config;

use super::{ConfigArgs, ConfigCommand};
use crate::config::CONFIG_NAMES;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }
    ctx.output.kv("currency", ctx.config.currency.code());
    ctx.output.kv("spin_delay_ms", &ctx.config.spin_delay_ms.to_string());
    ctx.output.kv(
        "price_range",
        &format!("{} - {}", ctx.config.price_range.min, ctx.config.price_range.max),
    );
    ctx.output.kv(
        "rng_seed",
        &ctx.config
            .rng_seed
            .map(|seed| seed.to_string())
            .unwrap_or_else(|| "random".to_string()),
    );
    ctx.output.kv(
        "catalog_path",
        &ctx.config
            .catalog_path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "(demo catalog)".to_string()),
    );

    match &ctx.config.rewards {
        Some(rewards) => {
            ctx.output.info("");
            ctx.output.info("[[rewards]]");
            for entry in rewards {
                ctx.output.list_item(&format!(
                    "#{} {} ({} {})",
                    entry.id,
                    entry.label,
                    entry.kind.as_str(),
                    entry.value
                ));
            }
        }
        None => ctx.output.kv("rewards", "(default wheel)"),
    }

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut warnings: Vec<String> = Vec::new();

    let store = ctx.storefront()?;

    if !ctx.config.price_range.is_valid() {
        warnings.push(format!(
            "price_range min {} is above max {}; no game will match",
            ctx.config.price_range.min, ctx.config.price_range.max
        ));
    }

    if let Some((_, max)) = store.catalog().price_bounds() {
        if max > ctx.config.price_range.max {
            warnings.push(format!(
                "price_range max {} hides games priced up to {}",
                ctx.config.price_range.max, max
            ));
        }
    }

    if ctx.config.spin_delay_ms == 0 {
        warnings.push("spin_delay_ms is 0; the wheel settles instantly".to_string());
    }

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "valid": true,
            "products": store.catalog().len(),
            "rewards": store.rewards().len(),
            "warnings": warnings,
        }));
        return Ok(());
    }

    ctx.output.kv("products", &store.catalog().len().to_string());
    ctx.output.kv("rewards", &store.rewards().len().to_string());

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if warnings.is_empty() {
        ctx.output.success("Configuration is valid");
    } else {
        ctx.output.success("Configuration is valid (with warnings)");
    }

    Ok(())
}
