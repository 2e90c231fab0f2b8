use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;

use stockrisk_core::RunId;
use stockrisk_inventory::ClassifiedItem;
use stockrisk_scoring::{
    ActionSummary, Alert, AlertSummary, OperatorWeights, PortfolioSummary, Recommendation,
    ScoringPass,
};

/// Fast movers listed in the portfolio section.
pub const TOP_FAST_MOVERS: usize = 5;

/// The JSON document printed by every subcommand.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub run_id: RunId,
    pub as_of: DateTime<Utc>,
    pub operator: OperatorWeights,
    pub portfolio: PortfolioSummary,
    pub alert_summary: AlertSummary,
    pub action_summary: ActionSummary,
    pub items: Vec<ClassifiedItem>,
    pub alerts: Vec<Alert>,
    pub recommendations: Vec<Recommendation>,
}

impl Report {
    pub fn from_pass(pass: ScoringPass) -> Self {
        let portfolio = pass.portfolio(TOP_FAST_MOVERS);
        let alert_summary = pass.alert_summary();
        let action_summary = pass.action_summary();
        Self {
            run_id: pass.run_id,
            as_of: pass.as_of,
            operator: pass.operator,
            portfolio,
            alert_summary,
            action_summary,
            items: pass.items,
            alerts: pass.alerts,
            recommendations: pass.recommendations,
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("serialize report")
    }
}
