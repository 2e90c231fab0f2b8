//! `stockrisk-review`: the human side of recommendations.
//!
//! The scoring engine regenerates recommendations from scratch on every pass;
//! this crate owns the decisions reviewers make on them and re-attaches those
//! decisions to each new pass. It also gates who may review and who may change
//! scoring settings. No IO, no identity management.

pub mod authorize;
pub mod ledger;
pub mod permissions;
pub mod roles;
pub mod settings;

pub use authorize::{AuthzError, authorize};
pub use ledger::{ReviewEntry, ReviewError, ReviewLedger};
pub use permissions::Permission;
pub use roles::Role;
pub use settings::ScoringSettings;
