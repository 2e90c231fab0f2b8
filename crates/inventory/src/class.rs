//! Closed classification vocabularies and the classified record.

use serde::{Deserialize, Serialize};

use crate::item::InventoryItem;

macro_rules! three_tier_class {
    ($(#[$meta:meta])* $t:ident { $hi:ident => $hi_name:literal, $mid:ident => $mid_name:literal, $lo:ident => $lo_name:literal }) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $t {
            $hi,
            $mid,
            $lo,
        }

        impl $t {
            /// Every class, best tier first.
            pub const ALL: [$t; 3] = [$t::$hi, $t::$mid, $t::$lo];

            /// Point value used by the composite score (3 / 2 / 1).
            pub fn points(self) -> u8 {
                match self {
                    $t::$hi => 3,
                    $t::$mid => 2,
                    $t::$lo => 1,
                }
            }

            /// Human-readable tier name.
            pub fn label(self) -> &'static str {
                match self {
                    $t::$hi => $hi_name,
                    $t::$mid => $mid_name,
                    $t::$lo => $lo_name,
                }
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Debug::fmt(self, f)
            }
        }
    };
}

three_tier_class!(
    /// Cumulative value share tier (Pareto).
    AbcClass { A => "High value", B => "Medium value", C => "Low value" }
);

three_tier_class!(
    /// Sales velocity tier by recency of last sale.
    FsnClass { F => "Fast moving", S => "Slow moving", N => "Non-moving" }
);

three_tier_class!(
    /// Criticality tier.
    VedClass { V => "Vital", E => "Essential", D => "Desirable" }
);

three_tier_class!(
    /// Demand variability tier.
    XyzClass { X => "Stable demand", Y => "Variable demand", Z => "Erratic demand" }
);

/// All four class assignments of one SKU.
///
/// Constructed only as a whole, so a record is either fully classified or not
/// classified at all.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification {
    pub abc: AbcClass,
    pub fsn: FsnClass,
    pub ved: VedClass,
    pub xyz: XyzClass,
}

/// An inventory record augmented with its classification and composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedItem {
    #[serde(flatten)]
    pub item: InventoryItem,
    #[serde(flatten)]
    pub classification: Classification,
    /// Weighted priority in \[1.00, 3.00\], rounded to 2 decimals.
    pub composite_score: f64,
}

impl ClassifiedItem {
    pub fn new(item: InventoryItem, classification: Classification, composite_score: f64) -> Self {
        Self {
            item,
            classification,
            composite_score,
        }
    }

    pub fn abc(&self) -> AbcClass {
        self.classification.abc
    }

    pub fn fsn(&self) -> FsnClass {
        self.classification.fsn
    }

    pub fn ved(&self) -> VedClass {
        self.classification.ved
    }

    pub fn xyz(&self) -> XyzClass {
        self.classification.xyz
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn points_follow_tier_order() {
        assert_eq!(AbcClass::ALL.map(AbcClass::points), [3, 2, 1]);
        assert_eq!(FsnClass::ALL.map(FsnClass::points), [3, 2, 1]);
        assert_eq!(VedClass::ALL.map(VedClass::points), [3, 2, 1]);
        assert_eq!(XyzClass::ALL.map(XyzClass::points), [3, 2, 1]);
    }

    #[test]
    fn abc_orders_best_tier_first() {
        assert!(AbcClass::A < AbcClass::B);
        assert!(AbcClass::B < AbcClass::C);
        assert_eq!(AbcClass::C.to_string(), "C");
        assert_eq!(FsnClass::N.label(), "Non-moving");
    }

    #[test]
    fn classified_item_serializes_flat() {
        let item = InventoryItem::new(
            "SKU-1".parse().unwrap(),
            "Valve",
            10.0,
            2,
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        );
        let classified = ClassifiedItem::new(
            item,
            Classification {
                abc: AbcClass::A,
                fsn: FsnClass::S,
                ved: VedClass::V,
                xyz: XyzClass::Z,
            },
            2.55,
        );

        let json = serde_json::to_value(&classified).unwrap();
        assert_eq!(json["id"], "SKU-1");
        assert_eq!(json["abc"], "A");
        assert_eq!(json["fsn"], "S");
        assert_eq!(json["composite_score"], 2.55);
    }
}
