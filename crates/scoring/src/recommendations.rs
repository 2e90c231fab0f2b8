//! Per-SKU action recommendations.
//!
//! Rules are evaluated in priority order and the first match wins; items that
//! match none are left out of the recommendation set. Identity is the SKU id,
//! so a recommendation keeps its id across passes and review decisions can be
//! re-attached to it (see `stockrisk-review`).

use serde::{Deserialize, Serialize};

use stockrisk_core::SkuId;
use stockrisk_inventory::{AbcClass, ClassifiedItem, FsnClass};

use crate::config::EngineConfig;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendationAction {
    Pending,
    Hold,
    Transfer,
    Scrap,
    Dispose,
    Review,
}

impl RecommendationAction {
    /// Display order used by summaries.
    pub const ALL: [RecommendationAction; 6] = [
        RecommendationAction::Pending,
        RecommendationAction::Hold,
        RecommendationAction::Transfer,
        RecommendationAction::Scrap,
        RecommendationAction::Dispose,
        RecommendationAction::Review,
    ];
}

impl core::fmt::Display for RecommendationAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(self, f)
    }
}

/// Review state. Owned by the review workflow, not by the engine.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// `rec-<sku id>`.
    pub id: String,
    pub sku_id: SkuId,
    pub sku_description: String,
    pub action: RecommendationAction,
    pub impact: f64,
    pub status: RecommendationStatus,
}

impl Recommendation {
    pub fn id_for(sku_id: &SkuId) -> String {
        format!("rec-{sku_id}")
    }
}

/// First matching action for the item at `position` in value order, if any.
pub fn select_action(
    classified: &ClassifiedItem,
    position: usize,
    config: &EngineConfig,
) -> Option<RecommendationAction> {
    let item = &classified.item;
    let fsn = classified.fsn();

    if fsn == FsnClass::N && classified.abc() == AbcClass::A {
        Some(RecommendationAction::Scrap)
    } else if item.qty_on_hand < i64::from(item.min_level) && fsn == FsnClass::F {
        Some(RecommendationAction::Hold)
    } else if item.is_discontinued() && item.qty_on_hand > 0 {
        Some(RecommendationAction::Dispose)
    } else if item.total_value > config.high_value_threshold {
        Some(RecommendationAction::Transfer)
    } else if position.checked_rem(config.pending_review_stride) == Some(0) {
        Some(RecommendationAction::Pending)
    } else {
        None
    }
}

/// Build recommendations for `items` (in value order), all starting PENDING.
pub fn generate_recommendations(
    items: &[ClassifiedItem],
    config: &EngineConfig,
) -> Vec<Recommendation> {
    items
        .iter()
        .enumerate()
        .filter_map(|(position, classified)| {
            let action = select_action(classified, position, config)?;
            let item = &classified.item;
            let value = item.ranking_value();
            Some(Recommendation {
                id: Recommendation::id_for(&item.id),
                sku_id: item.id.clone(),
                sku_description: item.description.clone(),
                action,
                impact: if value > 0.0 { value } else { config.impact_fallback },
                status: RecommendationStatus::Pending,
            })
        })
        .collect()
}

/// Count and summed impact for one action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionTotals {
    pub action: RecommendationAction,
    pub count: usize,
    pub impact: f64,
}

/// Per-action totals, one entry per action in [`RecommendationAction::ALL`] order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionSummary {
    pub actions: Vec<ActionTotals>,
    pub pending_review: usize,
}

impl ActionSummary {
    pub fn from_recommendations(recommendations: &[Recommendation]) -> Self {
        let actions = RecommendationAction::ALL
            .into_iter()
            .map(|action| {
                let matching = recommendations.iter().filter(|r| r.action == action);
                ActionTotals {
                    action,
                    count: matching.clone().count(),
                    impact: matching.map(|r| r.impact).sum(),
                }
            })
            .collect();

        Self {
            actions,
            pending_review: pending_count(recommendations),
        }
    }

    pub fn get(&self, action: RecommendationAction) -> Option<&ActionTotals> {
        self.actions.iter().find(|t| t.action == action)
    }
}

/// Recommendations still awaiting a decision.
pub fn pending_count(recommendations: &[Recommendation]) -> usize {
    recommendations
        .iter()
        .filter(|r| r.status == RecommendationStatus::Pending)
        .count()
}

/// Case-insensitive search over SKU id and description, optionally limited to one action.
pub fn filter_recommendations<'a>(
    recommendations: &'a [Recommendation],
    action: Option<RecommendationAction>,
    query: &str,
) -> Vec<&'a Recommendation> {
    let needle = query.trim().to_lowercase();
    recommendations
        .iter()
        .filter(|r| action.is_none_or(|a| r.action == a))
        .filter(|r| {
            needle.is_empty()
                || r.sku_id.as_str().to_lowercase().contains(&needle)
                || r.sku_description.to_lowercase().contains(&needle)
        })
        .collect()
}
