//! ABC / FSN / VED / XYZ classifiers.
//!
//! The four classifiers are independent of each other. ABC and the positional
//! classifiers share the value-sorted order produced by
//! [`crate::normalize::value_order`].

pub mod abc;
pub mod fsn;
pub mod positional;

pub use abc::classify_abc;
pub use fsn::classify_fsn;
pub use positional::{CyclicVed, CyclicXyz, PositionalClassifier};
