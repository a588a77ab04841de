//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use gamestore_commerce::catalog::Catalog;
use gamestore_commerce::config::StoreConfig;
use gamestore_commerce::storefront::Storefront;

use crate::config;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Storefront configuration.
    pub config: StoreConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file or the nearest one found.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve(&cwd, Path::new(path));
                (config::load(&path)?, Some(path))
            }
            None => match config::find(&cwd)? {
                Some((path, config)) => (config, Some(path)),
                None => (StoreConfig::default(), None),
            },
        };

        match &config_path {
            Some(path) => tracing::debug!(path = %path.display(), "config loaded"),
            None => tracing::debug!("no config file found, using defaults"),
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Load the catalog and reward table and build the storefront.
    pub fn storefront(&self) -> Result<Storefront> {
        let catalog = match &self.config.catalog_path {
            Some(path) => Some(self.load_catalog(path)?),
            None => None,
        };
        Storefront::from_config(self.config.clone(), catalog)
            .context("Invalid storefront configuration")
    }

    fn load_catalog(&self, path: &Path) -> Result<Catalog> {
        let path = resolve(self.config_dir(), path);
        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        let catalog = Catalog::from_json(&json)
            .with_context(|| format!("Failed to load catalog: {}", path.display()))?;
        self.output.debug(&format!(
            "Loaded {} products from {}",
            catalog.len(),
            path.display()
        ));
        Ok(catalog)
    }

    /// Directory relative paths in the config are resolved against.
    fn config_dir(&self) -> &Path {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(self.cwd.as_path())
    }
}

/// Resolve a path relative to `base`.
fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
