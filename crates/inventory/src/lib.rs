//! Inventory records consumed and produced by a scoring pass.
//!
//! This crate only describes data: raw SKU records as they arrive from the
//! ingestion layer and the fully classified records a pass returns. No IO, no
//! scoring rules.

pub mod class;
pub mod item;

pub use class::{AbcClass, Classification, ClassifiedItem, FsnClass, VedClass, XyzClass};
pub use item::{InventoryItem, ItemStatus};
