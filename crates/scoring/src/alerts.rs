//! Data-quality and concentration alerts.
//!
//! Rules are evaluated per item with no cross-item state. A single item may
//! raise several alerts.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockrisk_core::SkuId;
use stockrisk_inventory::{ClassifiedItem, InventoryItem};

use crate::config::EngineConfig;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertSeverity {
    High,
    Medium,
    Low,
}

/// The fixed alert taxonomy.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertRule {
    /// Unit cost is zero, negative or not finite.
    CostDiscrepancy,
    /// Quantity on hand is negative.
    NegativeStock,
    /// Raw total value exceeds the high-value threshold.
    HighValueConcentration,
}

impl AlertRule {
    pub const ALL: [AlertRule; 3] = [
        AlertRule::CostDiscrepancy,
        AlertRule::NegativeStock,
        AlertRule::HighValueConcentration,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            AlertRule::CostDiscrepancy => "cost-discrepancy",
            AlertRule::NegativeStock => "negative-stock",
            AlertRule::HighValueConcentration => "high-value",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            AlertRule::CostDiscrepancy => "Critical Cost Discrepancy",
            AlertRule::NegativeStock => "Negative Inventory Lock",
            AlertRule::HighValueConcentration => "High Value Concentration",
        }
    }

    pub fn severity(self) -> AlertSeverity {
        match self {
            AlertRule::CostDiscrepancy | AlertRule::NegativeStock => AlertSeverity::High,
            AlertRule::HighValueConcentration => AlertSeverity::Medium,
        }
    }

    /// Whether the rule fires for `item`. Reads raw (unclamped) fields.
    pub fn matches(self, item: &InventoryItem, config: &EngineConfig) -> bool {
        match self {
            AlertRule::CostDiscrepancy => !(item.unit_cost.is_finite() && item.unit_cost > 0.0),
            AlertRule::NegativeStock => item.qty_on_hand < 0,
            AlertRule::HighValueConcentration => item.total_value > config.high_value_threshold,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// `<rule tag>-<sku id>`, unique within a pass.
    pub id: String,
    pub sku_id: SkuId,
    pub rule: AlertRule,
    pub message: String,
    pub severity: AlertSeverity,
    /// Scoring time of the pass that raised the alert.
    pub timestamp: DateTime<Utc>,
}

impl Alert {
    pub fn new(rule: AlertRule, sku_id: SkuId, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: format!("{}-{}", rule.tag(), sku_id),
            sku_id,
            rule,
            message: rule.message().to_string(),
            severity: rule.severity(),
            timestamp,
        }
    }
}

/// Evaluate every rule against every item, in item order then rule order.
pub fn generate_alerts(
    items: &[ClassifiedItem],
    config: &EngineConfig,
    timestamp: DateTime<Utc>,
) -> Vec<Alert> {
    items
        .iter()
        .flat_map(|classified| {
            let item = &classified.item;
            AlertRule::ALL
                .into_iter()
                .filter(move |rule| rule.matches(item, config))
                .map(move |rule| Alert::new(rule, item.id.clone(), timestamp))
        })
        .collect()
}

/// Counts per severity plus value at risk.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AlertSummary {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    /// Σ `max(0, total_value)` over distinct SKUs with at least one alert.
    pub value_at_risk: f64,
}

impl AlertSummary {
    pub fn from_alerts(alerts: &[Alert], items: &[ClassifiedItem]) -> Self {
        let count = |severity: AlertSeverity| alerts.iter().filter(|a| a.severity == severity).count();

        let flagged: HashSet<&SkuId> = alerts.iter().map(|a| &a.sku_id).collect();
        let value_at_risk = items
            .iter()
            .filter(|c| flagged.contains(&c.item.id))
            .map(|c| c.item.ranking_value())
            .sum();

        Self {
            total: alerts.len(),
            high: count(AlertSeverity::High),
            medium: count(AlertSeverity::Medium),
            low: count(AlertSeverity::Low),
            value_at_risk,
        }
    }
}
