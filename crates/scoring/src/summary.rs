//! Portfolio-level aggregates over a classified inventory.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockrisk_core::SkuId;
use stockrisk_inventory::{AbcClass, ClassifiedItem, FsnClass, VedClass, XyzClass};

/// Category name used for SKUs exported without one.
pub const UNCATEGORIZED: &str = "Other";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassCount<C> {
    pub class: C,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuedSku {
    pub sku_id: SkuId,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryExposure {
    pub category: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub sku_count: usize,
    pub total_value: f64,
    /// Value held in non-moving (FSN class N) stock.
    pub dead_stock_value: f64,
    pub non_moving_count: usize,
    pub highest_composite_score: f64,
    pub abc_distribution: Vec<ClassCount<AbcClass>>,
    pub fsn_distribution: Vec<ClassCount<FsnClass>>,
    pub ved_distribution: Vec<ClassCount<VedClass>>,
    pub xyz_distribution: Vec<ClassCount<XyzClass>>,
    /// Highest-value fast movers, best first.
    pub top_fast_movers: Vec<ValuedSku>,
    /// Value per category, largest exposure first.
    pub category_exposure: Vec<CategoryExposure>,
}

impl PortfolioSummary {
    pub fn from_items(items: &[ClassifiedItem], top_n: usize) -> Self {
        let total_value = items.iter().map(|c| c.item.ranking_value()).sum();
        let non_moving = items.iter().filter(|c| c.fsn() == FsnClass::N);

        let mut fast: Vec<ValuedSku> = items
            .iter()
            .filter(|c| c.fsn() == FsnClass::F)
            .map(|c| ValuedSku {
                sku_id: c.item.id.clone(),
                value: c.item.ranking_value(),
            })
            .collect();
        fast.sort_by(|a, b| b.value.total_cmp(&a.value).then_with(|| a.sku_id.cmp(&b.sku_id)));
        fast.truncate(top_n);

        Self {
            sku_count: items.len(),
            total_value,
            dead_stock_value: non_moving.clone().map(|c| c.item.ranking_value()).sum(),
            non_moving_count: non_moving.count(),
            highest_composite_score: items
                .iter()
                .map(|c| c.composite_score)
                .fold(0.0, f64::max),
            abc_distribution: distribution(items, AbcClass::ALL, ClassifiedItem::abc),
            fsn_distribution: distribution(items, FsnClass::ALL, ClassifiedItem::fsn),
            ved_distribution: distribution(items, VedClass::ALL, ClassifiedItem::ved),
            xyz_distribution: distribution(items, XyzClass::ALL, ClassifiedItem::xyz),
            top_fast_movers: fast,
            category_exposure: category_exposure(items),
        }
    }
}

fn distribution<C, F>(items: &[ClassifiedItem], classes: [C; 3], class_of: F) -> Vec<ClassCount<C>>
where
    C: Copy + PartialEq,
    F: Fn(&ClassifiedItem) -> C,
{
    classes
        .into_iter()
        .map(|class| ClassCount {
            class,
            count: items.iter().filter(|c| class_of(*c) == class).count(),
        })
        .collect()
}

fn category_exposure(items: &[ClassifiedItem]) -> Vec<CategoryExposure> {
    let mut by_category: BTreeMap<&str, f64> = BTreeMap::new();
    for c in items {
        let name = c.item.category.trim();
        let name = if name.is_empty() { UNCATEGORIZED } else { name };
        *by_category.entry(name).or_default() += c.item.ranking_value();
    }

    let mut exposure: Vec<CategoryExposure> = by_category
        .into_iter()
        .map(|(category, value)| CategoryExposure {
            category: category.to_string(),
            value,
        })
        .collect();
    // BTreeMap already yields names in order; a stable sort keeps that for ties.
    exposure.sort_by(|a, b| b.value.total_cmp(&a.value));
    exposure
}
