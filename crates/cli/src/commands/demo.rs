use chrono::{DateTime, Utc};

use stockrisk_scoring::{EngineConfig, demo};

use crate::report::Report;

pub fn run(count: usize, seed: u64, as_of: DateTime<Utc>) -> anyhow::Result<Report> {
    let config = EngineConfig::from_env()?;
    let items = demo::generate(count, seed, as_of.date_naive())?;
    tracing::info!(count, seed, "generated demo inventory");
    super::score_items(config, &items, as_of)
}
