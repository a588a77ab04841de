//! Output formatting for the CLI.

use console::style;
use gamestore_commerce::catalog::{PriceTag, Product};
use gamestore_commerce::rewards::{RewardEntry, RewardKind};
use gamestore_commerce::Money;
use indicatif::{ProgressBar, ProgressStyle};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Price cell for a product: "Free", a plain price, or a sale price with
/// the original crossed out.
pub fn price_label(product: &Product, money: impl Fn(u64) -> Money) -> String {
    match &product.price_tag {
        PriceTag::Free { .. } => style("Free").green().bold().to_string(),
        PriceTag::Regular { price } => money(*price).to_string(),
        PriceTag::Sale {
            price,
            original_price,
            discount_percent,
        } => {
            let mut label = format!(
                "{} {}",
                style(money(*price)).green(),
                style(money(*original_price)).dim().strikethrough()
            );
            if let Some(percent) = discount_percent {
                label.push_str(&format!(" {}", style(format!("-{}%", percent)).red()));
            }
            label
        }
    }
}

/// Star rating with one decimal, e.g. "★ 4.8".
pub fn rating_label(rating: f32) -> String {
    format!("{} {:.1}", style("★").yellow(), rating)
}

/// Human description of what a reward grants.
pub fn reward_label(entry: &RewardEntry, money: impl Fn(u64) -> Money) -> String {
    match entry.kind {
        RewardKind::PercentDiscount => {
            format!("{} ({}% off a future purchase)", entry.label, entry.value)
        }
        RewardKind::CurrencyCredit => {
            format!("{} ({} added to bonus balance)", entry.label, money(entry.value))
        }
    }
}
