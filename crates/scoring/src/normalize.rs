//! Batch validation and value normalization.
//!
//! Records are never rewritten: downstream stages read
//! [`InventoryItem::ranking_value`] for ranking and aggregation and keep the
//! raw signed fields for defect detection.

use std::collections::HashSet;

use chrono::NaiveDate;

use stockrisk_inventory::InventoryItem;

use crate::error::ScoringError;

/// Reject batches the classifiers cannot score meaningfully.
///
/// - SKU ids must be unique (recommendations are keyed by SKU).
/// - No sale may be dated after `as_of`.
///
/// Non-finite monetary fields are accepted (they rank as zero) but logged.
pub fn validate_batch(items: &[InventoryItem], as_of: NaiveDate) -> Result<(), ScoringError> {
    let mut seen = HashSet::with_capacity(items.len());

    for item in items {
        if !seen.insert(&item.id) {
            return Err(ScoringError::invalid_input(format!(
                "duplicate SKU id {}",
                item.id
            )));
        }

        if item.last_sale_date > as_of {
            return Err(ScoringError::invalid_input(format!(
                "SKU {} has last_sale_date {} after scoring date {as_of}",
                item.id, item.last_sale_date
            )));
        }

        if !item.has_finite_values() {
            tracing::warn!(
                sku = %item.id,
                unit_cost = item.unit_cost,
                total_value = item.total_value,
                "non-finite monetary value; ranking it as zero"
            );
        }
    }

    Ok(())
}

/// Indices of `items` ordered by ranking value descending, ties by SKU id ascending.
pub fn value_order(items: &[InventoryItem]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| {
        let (a, b) = (&items[a], &items[b]);
        b.ranking_value()
            .total_cmp(&a.ranking_value())
            .then_with(|| a.id.cmp(&b.id))
    });
    order
}
