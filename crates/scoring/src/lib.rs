//! `stockrisk-scoring`
//!
//! **Responsibility:** SKU classification and composite scoring.
//!
//! One pass is a pure function of the inventory records, the scoring time and
//! the engine configuration:
//! - Normalize and validate the batch.
//! - Classify every SKU (ABC, FSN, VED, XYZ) and compute its composite score.
//! - Derive data-quality alerts and recommended actions.
//!
//! The engine never stores results and never owns review decisions; see
//! `stockrisk-review` for the workflow side.

pub mod alerts;
pub mod classify;
pub mod composite;
pub mod config;
pub mod demo;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod recommendations;
pub mod summary;

pub use alerts::{Alert, AlertRule, AlertSeverity, AlertSummary};
pub use classify::{CyclicVed, CyclicXyz, PositionalClassifier};
pub use composite::CompositeScorer;
pub use config::{CompositeWeights, EngineConfig, OperatorWeights};
pub use engine::{ScoringEngine, ScoringPass};
pub use error::ScoringError;
pub use recommendations::{
    ActionSummary, ActionTotals, Recommendation, RecommendationAction, RecommendationStatus,
    filter_recommendations, pending_count,
};
pub use summary::PortfolioSummary;
