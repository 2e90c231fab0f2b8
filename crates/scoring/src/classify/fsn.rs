use chrono::NaiveDate;

use stockrisk_inventory::{FsnClass, InventoryItem};

use crate::config::EngineConfig;

/// Velocity class from whole days since the last sale.
pub fn classify_fsn(item: &InventoryItem, as_of: NaiveDate, config: &EngineConfig) -> FsnClass {
    let days = item.days_since_last_sale(as_of);
    if days <= config.fast_moving_days {
        FsnClass::F
    } else if days <= config.slow_moving_days {
        FsnClass::S
    } else {
        FsnClass::N
    }
}
