//! Config file loading and discovery.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gamestore_commerce::config::StoreConfig;

/// File names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["gamestore.toml", ".gamestore.toml", "gamestore.json"];

/// Load config from a file, picking the format by extension.
pub fn load(path: &Path) -> Result<StoreConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse(path, &content)
}

fn parse(path: &Path, content: &str) -> Result<StoreConfig> {
    if is_json(path) {
        serde_json::from_str(content)
            .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
    } else {
        toml::from_str(content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
    }
}

/// Serialize config in the format matching `path`.
pub fn render(config: &StoreConfig, path: &Path) -> Result<String> {
    let content = if is_json(path) {
        serde_json::to_string_pretty(config)?
    } else {
        toml::to_string_pretty(config)?
    };
    Ok(content)
}

/// Find the nearest config file in `start` or its parents.
///
/// A file that exists but does not parse is an error, not a miss.
pub fn find(start: &Path) -> Result<Option<(PathBuf, StoreConfig)>> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_NAMES {
            let path = current.join(name);
            if path.is_file() {
                let config = load(&path)?;
                return Ok(Some((path, config)));
            }
        }

        if !current.pop() {
            break;
        }
    }

    Ok(None)
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "json")
}
