use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockrisk_core::SkuId;

/// Lifecycle status of a SKU in the source ERP.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ItemStatus {
    #[default]
    Active,
    Discontinued,
}

/// A SKU record as handed over by the ingestion layer.
///
/// Monetary and quantity fields are signed on purpose: a zero/negative cost or
/// a negative quantity is a data-quality defect the alert rules must still
/// see. Ranking and aggregation go through [`InventoryItem::ranking_value`]
/// instead of reading `total_value` directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: SkuId,
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub unit_cost: f64,
    pub qty_on_hand: i64,
    /// `qty_on_hand × unit_cost` as exported (signed).
    pub total_value: f64,
    pub last_sale_date: NaiveDate,
    /// Reorder threshold.
    #[serde(default)]
    pub min_level: u32,
    #[serde(default)]
    pub status: ItemStatus,
}

impl InventoryItem {
    /// Build an active, uncategorized record; `total_value` is derived.
    pub fn new(
        id: SkuId,
        description: impl Into<String>,
        unit_cost: f64,
        qty_on_hand: i64,
        last_sale_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            category: String::new(),
            unit_cost,
            qty_on_hand,
            total_value: qty_on_hand as f64 * unit_cost,
            last_sale_date,
            min_level: 0,
            status: ItemStatus::Active,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_min_level(mut self, min_level: u32) -> Self {
        self.min_level = min_level;
        self
    }

    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    /// Override the exported total (e.g. when the ERP total disagrees with qty × cost).
    pub fn with_total_value(mut self, total_value: f64) -> Self {
        self.total_value = total_value;
        self
    }

    /// Value used for ranking, cutoffs, value-at-risk and impact.
    ///
    /// `max(0, total_value)`, with NaN/infinite treated as zero.
    pub fn ranking_value(&self) -> f64 {
        if self.total_value.is_finite() && self.total_value > 0.0 {
            self.total_value
        } else {
            0.0
        }
    }

    /// Whether both monetary fields are finite numbers.
    pub fn has_finite_values(&self) -> bool {
        self.unit_cost.is_finite() && self.total_value.is_finite()
    }

    /// Whole calendar days between the last sale and `as_of` (truncated).
    ///
    /// Negative when the sale date lies after `as_of`.
    pub fn days_since_last_sale(&self, as_of: NaiveDate) -> i64 {
        (as_of - self.last_sale_date).num_days()
    }

    pub fn is_discontinued(&self) -> bool {
        self.status == ItemStatus::Discontinued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sku(code: &str) -> SkuId {
        code.parse().unwrap()
    }

    #[test]
    fn total_value_is_derived_from_qty_and_cost() {
        let item = InventoryItem::new(sku("SKU-1"), "Bearing", 12.5, 8, date(2026, 1, 1));
        assert_eq!(item.total_value, 100.0);
        assert_eq!(item.status, ItemStatus::Active);
        assert_eq!(item.min_level, 0);
    }

    #[test]
    fn ranking_value_clamps_defects_to_zero() {
        let negative_qty = InventoryItem::new(sku("SKU-1"), "x", 10.0, -5, date(2026, 1, 1));
        assert_eq!(negative_qty.total_value, -50.0);
        assert_eq!(negative_qty.ranking_value(), 0.0);

        let nan = negative_qty.clone().with_total_value(f64::NAN);
        assert_eq!(nan.ranking_value(), 0.0);
        assert!(!nan.has_finite_values());

        let inf = negative_qty.with_total_value(f64::INFINITY);
        assert_eq!(inf.ranking_value(), 0.0);
    }

    #[test]
    fn days_since_last_sale_counts_calendar_days() {
        let item = InventoryItem::new(sku("SKU-1"), "x", 1.0, 1, date(2026, 3, 1));
        assert_eq!(item.days_since_last_sale(date(2026, 3, 31)), 30);
        assert_eq!(item.days_since_last_sale(date(2026, 3, 1)), 0);
        assert_eq!(item.days_since_last_sale(date(2026, 2, 28)), -1);
    }

    #[test]
    fn deserializes_with_optional_fields_defaulted() {
        let json = r#"{
            "id": "SKU-1000",
            "description": "Gear",
            "unit_cost": 100.0,
            "qty_on_hand": 3,
            "total_value": 300.0,
            "last_sale_date": "2026-09-01"
        }"#;
        let item: InventoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.category, "");
        assert_eq!(item.status, ItemStatus::Active);
        assert_eq!(item.last_sale_date, date(2026, 9, 1));
    }

    #[test]
    fn malformed_sale_date_is_rejected_at_the_boundary() {
        let json = r#"{
            "id": "SKU-1000",
            "description": "Gear",
            "unit_cost": 100.0,
            "qty_on_hand": 3,
            "total_value": 300.0,
            "last_sale_date": "2026-02-30"
        }"#;
        assert!(serde_json::from_str::<InventoryItem>(json).is_err());
    }
}
