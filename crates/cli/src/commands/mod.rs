pub mod demo;
pub mod score;

use chrono::{DateTime, Utc};

use stockrisk_inventory::InventoryItem;
use stockrisk_review::ScoringSettings;
use stockrisk_scoring::EngineConfig;

use crate::report::Report;

/// Run one pass with a validated configuration.
pub(crate) fn score_items(
    config: EngineConfig,
    items: &[InventoryItem],
    as_of: DateTime<Utc>,
) -> anyhow::Result<Report> {
    let settings = ScoringSettings::new(config)?;
    let pass = settings.engine()?.run(items, as_of)?;
    Ok(Report::from_pass(pass))
}
