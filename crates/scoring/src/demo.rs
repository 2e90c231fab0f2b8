//! Seeded demo inventory, shaped like a typical ERP export.
//!
//! The distribution is skewed so a pass over it exercises every class and
//! every alert rule: a small high-value head, a medium band and a long cheap
//! tail, with a sprinkling of zero costs, negative quantities, blank
//! categories and discontinued lines.

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use stockrisk_core::SkuId;
use stockrisk_inventory::{InventoryItem, ItemStatus};

use crate::error::ScoringError;

pub const CATEGORIES: [&str; 10] = [
    "Semiconductors",
    "Heavy Machinery",
    "Precision Tools",
    "Chemical Reagents",
    "Circuit Boards",
    "Fasteners",
    "Lubricants",
    "Safety Gear",
    "Packaging Materials",
    "Hydraulic Components",
];

/// Generate `count` SKUs (`SKU-1000`, `SKU-1001`, …) deterministically from `seed`.
///
/// Sale dates are placed relative to `today` and never after it.
pub fn generate(count: usize, seed: u64, today: NaiveDate) -> Result<Vec<InventoryItem>, ScoringError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let high_value_end = count / 10;
    let medium_value_end = count * 4 / 10;

    (0..count)
        .map(|i| {
            let high_value = i < high_value_end;
            let medium_value = !high_value && i < medium_value_end;

            let mut unit_cost = if high_value {
                rng.gen_range(5_000.0..20_000.0)
            } else if medium_value {
                rng.gen_range(500.0..5_000.0)
            } else {
                rng.gen_range(10.0..500.0)
            };
            unit_cost = round_cents(unit_cost);
            if rng.gen_bool(0.05) {
                unit_cost = 0.0;
            }

            let mut qty: i64 = if high_value {
                rng.gen_range(5..55)
            } else {
                rng.gen_range(-10..990)
            };
            if rng.gen_bool(0.05) {
                qty = -rng.gen_range(0..20);
            }

            let category = if rng.gen_bool(0.05) {
                ""
            } else {
                CATEGORIES[rng.gen_range(0..CATEGORIES.len())]
            };

            let velocity: f64 = rng.gen_range(0.0..1.0);
            let days_ago: u64 = if velocity < 0.3 {
                rng.gen_range(0..30)
            } else if velocity < 0.7 {
                rng.gen_range(31..91)
            } else {
                rng.gen_range(91..401)
            };
            let last_sale_date = today
                .checked_sub_days(Days::new(days_ago))
                .ok_or_else(|| ScoringError::invalid_input("demo sale date out of range"))?;

            let status = if rng.gen_bool(0.1) {
                ItemStatus::Discontinued
            } else {
                ItemStatus::Active
            };
            let min_level = if high_value { 5 } else { rng.gen_range(50..150) };

            let prefix: String = category.chars().take(4).collect();
            let letter = char::from(b'A' + (i % 26) as u8);
            let id = SkuId::new(format!("SKU-{}", 1000 + i))?;

            Ok(InventoryItem::new(
                id,
                format!("{prefix}-{letter}{i} Strategic Component"),
                unit_cost,
                qty,
                last_sale_date,
            )
            .with_category(category)
            .with_min_level(min_level)
            .with_status(status))
        })
        .collect()
}

fn round_cents(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
