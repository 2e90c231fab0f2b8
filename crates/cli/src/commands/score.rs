use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};

use stockrisk_inventory::InventoryItem;
use stockrisk_scoring::EngineConfig;

use crate::report::Report;

pub fn run(input: &Path, config: Option<&Path>, as_of: DateTime<Utc>) -> anyhow::Result<Report> {
    let config = load_config(config)?;
    let items = load_items(input)?;
    tracing::info!(path = %input.display(), count = items.len(), "loaded inventory");
    super::score_items(config, &items, as_of)
}

/// A JSON file when given, otherwise defaults with `STOCKRISK_*` overrides.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::from_env()?);
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("could not read config file `{}`", path.display()))?;
    let config: EngineConfig = serde_json::from_str(&raw)
        .with_context(|| format!("could not parse config file `{}`", path.display()))?;
    config.validate()?;
    Ok(config)
}

pub fn load_items(path: &Path) -> anyhow::Result<Vec<InventoryItem>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("could not read inventory file `{}`", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("could not parse inventory file `{}`", path.display()))
}
