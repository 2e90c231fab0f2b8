//! `stockrisk-core`: shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{RunId, SkuId};
