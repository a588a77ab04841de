//! CLI command implementations.

pub mod browse;
pub mod checkout;
pub mod config;
pub mod facets;
pub mod shop;
pub mod spin;

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use gamestore_commerce::search::{FilterCriteria, PriceRange, TypeFilter};

/// Filters shared by `browse` and `facets`.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Case-insensitive title search.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Genre to include; repeat for several.
    #[arg(short, long = "genre")]
    pub genres: Vec<String>,

    /// Platform to include; repeat for several.
    #[arg(short, long = "platform")]
    pub platforms: Vec<String>,

    /// Lowest price shown.
    #[arg(long)]
    pub min_price: Option<u64>,

    /// Highest price shown.
    #[arg(long)]
    pub max_price: Option<u64>,

    /// Game type: all, free or paid.
    #[arg(short = 't', long = "type", default_value = "all")]
    pub type_filter: String,
}

impl FilterArgs {
    /// Build criteria, falling back to `defaults` for unset price bounds.
    pub fn criteria(&self, defaults: PriceRange) -> Result<FilterCriteria> {
        let Some(type_filter) = TypeFilter::from_str(&self.type_filter) else {
            bail!(
                "Unknown type: {}. Available: all, free, paid",
                self.type_filter
            );
        };

        let mut criteria = FilterCriteria::new()
            .with_price_range(
                self.min_price.unwrap_or(defaults.min),
                self.max_price.unwrap_or(defaults.max),
            )
            .with_type_filter(type_filter);
        if let Some(text) = &self.search {
            criteria = criteria.with_search(text.as_str());
        }
        for genre in &self.genres {
            criteria = criteria.with_genre(genre.as_str());
        }
        for platform in &self.platforms {
            criteria = criteria.with_platform(platform.as_str());
        }
        Ok(criteria)
    }
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Arguments for the facets command.
#[derive(Args)]
pub struct FacetsArgs {
    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Product ids to put in the cart; repeat an id to buy it twice.
    pub products: Vec<u32>,

    /// Bonus balance to apply instead of spinning for one.
    #[arg(short, long)]
    pub bonus: Option<u64>,
}

/// Arguments for the spin command.
#[derive(Args)]
pub struct SpinArgs {
    /// Number of spins.
    #[arg(short = 'n', long, default_value = "1")]
    pub times: u32,

    /// Settle each spin immediately instead of waiting for the wheel.
    #[arg(long)]
    pub instant: bool,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Settle spins immediately instead of waiting for the wheel.
    #[arg(long)]
    pub instant: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Load the catalog and rewards and report problems.
    Validate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters_use_configured_range() {
        let criteria = FilterArgs {
            type_filter: "all".to_string(),
            ..Default::default()
        }
        .criteria(PriceRange::new(0, 3500))
        .unwrap();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn test_filters_map_to_criteria() {
        let args = FilterArgs {
            search: Some("dragon".to_string()),
            genres: vec!["RPG".to_string(), "Fantasy".to_string()],
            platforms: vec!["PC".to_string()],
            min_price: Some(500),
            max_price: None,
            type_filter: "PAID".to_string(),
        };
        let criteria = args.criteria(PriceRange::new(0, 3500)).unwrap();
        assert_eq!(criteria.search_text, "dragon");
        assert_eq!(criteria.genres.len(), 2);
        assert!(criteria.platforms.contains("PC"));
        assert_eq!(criteria.price_range, PriceRange::new(500, 3500));
        assert_eq!(criteria.type_filter, TypeFilter::Paid);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let args = FilterArgs {
            type_filter: "cheap".to_string(),
            ..Default::default()
        };
        assert!(args.criteria(PriceRange::default()).is_err());
    }
}
