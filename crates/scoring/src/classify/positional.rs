//! Criticality (VED) and demand-variability (XYZ) classification.
//!
//! Source records carry neither a criticality flag nor demand history, so the
//! default strategies assign classes cyclically by position in value order.
//! Swap in a [`PositionalClassifier`] backed by real signals when the
//! ingestion layer provides them.

use stockrisk_inventory::{InventoryItem, VedClass, XyzClass};

/// Classifies one item given its zero-based position in value-sorted order.
pub trait PositionalClassifier<C>: Send + Sync {
    fn classify(&self, item: &InventoryItem, position: usize) -> C;
}

/// `position % 3` → V, E, D.
#[derive(Debug, Default, Clone, Copy)]
pub struct CyclicVed;

impl PositionalClassifier<VedClass> for CyclicVed {
    fn classify(&self, _item: &InventoryItem, position: usize) -> VedClass {
        VedClass::ALL[position % 3]
    }
}

/// `position % 4` → X, Y, Z, Z.
#[derive(Debug, Default, Clone, Copy)]
pub struct CyclicXyz;

impl PositionalClassifier<XyzClass> for CyclicXyz {
    fn classify(&self, _item: &InventoryItem, position: usize) -> XyzClass {
        match position % 4 {
            0 => XyzClass::X,
            1 => XyzClass::Y,
            _ => XyzClass::Z,
        }
    }
}
