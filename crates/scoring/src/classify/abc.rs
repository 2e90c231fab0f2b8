use stockrisk_inventory::{AbcClass, InventoryItem};

use crate::config::EngineConfig;

/// Assign ABC classes by cumulative value share.
///
/// `ordered` must already be sorted by ranking value descending (see
/// [`crate::normalize::value_order`]); the returned classes follow the same
/// order. When the inventory has no positive value every ratio is defined as
/// zero and all items fall into C.
pub fn classify_abc(ordered: &[&InventoryItem], config: &EngineConfig) -> Vec<AbcClass> {
    let total: f64 = ordered.iter().map(|i| i.ranking_value()).sum();

    if total <= 0.0 {
        return vec![AbcClass::C; ordered.len()];
    }

    let mut cumulative = 0.0;
    ordered
        .iter()
        .map(|item| {
            cumulative += item.ranking_value();
            let ratio = cumulative / total;
            if ratio <= config.abc_a_cutoff {
                AbcClass::A
            } else if ratio <= config.abc_b_cutoff {
                AbcClass::B
            } else {
                AbcClass::C
            }
        })
        .collect()
}
