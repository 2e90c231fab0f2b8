//! Review decisions that survive recomputation.
//!
//! Each scoring pass hands back fresh recommendations, all PENDING. The ledger
//! keeps one entry per SKU and restores the recorded decision onto the new
//! recommendation, as long as the engine still recommends the same action.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockrisk_core::{DomainError, SkuId};
use stockrisk_scoring::{Recommendation, RecommendationAction, RecommendationStatus};

use crate::authorize::{AuthzError, authorize};
use crate::{Permission, Role};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReviewError {
    #[error(transparent)]
    Authz(#[from] AuthzError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// The recorded state of one SKU's outstanding recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewEntry {
    pub sku_id: SkuId,
    /// Action the decision was made on.
    pub action: RecommendationAction,
    pub status: RecommendationStatus,
    pub decided_by: Option<Role>,
    pub decided_at: Option<DateTime<Utc>>,
}

impl ReviewEntry {
    fn pending(sku_id: SkuId, action: RecommendationAction) -> Self {
        Self {
            sku_id,
            action,
            status: RecommendationStatus::Pending,
            decided_by: None,
            decided_at: None,
        }
    }
}

/// Thread-safe store of review decisions, keyed by SKU.
#[derive(Debug, Default)]
pub struct ReviewLedger {
    entries: RwLock<HashMap<SkuId, ReviewEntry>>,
}

impl ReviewLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a freshly generated recommendation set with recorded decisions.
    ///
    /// - Same SKU, same action: the recorded status is restored.
    /// - Same SKU, different action: the old decision is discarded, status PENDING.
    /// - SKU no longer recommended: its entry is dropped.
    pub fn reconcile(&self, recommendations: Vec<Recommendation>) -> Vec<Recommendation> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = HashMap::with_capacity(recommendations.len());
        let mut superseded = 0usize;

        let merged: Vec<Recommendation> = recommendations
            .into_iter()
            .map(|mut rec| {
                let entry = match entries.remove(&rec.sku_id) {
                    Some(entry) if entry.action == rec.action => entry,
                    Some(_) => {
                        superseded += 1;
                        ReviewEntry::pending(rec.sku_id.clone(), rec.action)
                    }
                    None => ReviewEntry::pending(rec.sku_id.clone(), rec.action),
                };
                rec.status = entry.status;
                next.insert(rec.sku_id.clone(), entry);
                rec
            })
            .collect();

        let dropped = entries.len();
        *entries = next;

        tracing::debug!(
            outstanding = entries.len(),
            superseded,
            dropped,
            "reconciled review ledger"
        );
        merged
    }

    /// Record a reviewer's decision on the SKU's outstanding recommendation.
    pub fn decide(
        &self,
        role: Role,
        sku_id: &SkuId,
        status: RecommendationStatus,
        at: DateTime<Utc>,
    ) -> Result<ReviewEntry, ReviewError> {
        authorize(role, Permission::ReviewRecommendations)?;

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let entry = entries.get_mut(sku_id).ok_or_else(|| {
            DomainError::not_found(format!("no outstanding recommendation for {sku_id}"))
        })?;

        entry.status = status;
        entry.decided_by = Some(role);
        entry.decided_at = Some(at);

        tracing::info!(sku = %sku_id, %role, ?status, "recommendation reviewed");
        Ok(entry.clone())
    }

    pub fn status(&self, sku_id: &SkuId) -> Option<RecommendationStatus> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(sku_id).map(|e| e.status)
    }

    /// Snapshot of all outstanding entries, ordered by SKU id.
    pub fn entries(&self) -> Vec<ReviewEntry> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let mut out: Vec<ReviewEntry> = entries.values().cloned().collect();
        out.sort_by(|a, b| a.sku_id.cmp(&b.sku_id));
        out
    }
}
