//! Scoring pass orchestration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockrisk_core::RunId;
use stockrisk_inventory::{Classification, ClassifiedItem, InventoryItem, VedClass, XyzClass};

use crate::alerts::{Alert, AlertSummary, generate_alerts};
use crate::classify::{CyclicVed, CyclicXyz, PositionalClassifier, classify_abc, classify_fsn};
use crate::composite::CompositeScorer;
use crate::config::{EngineConfig, OperatorWeights};
use crate::error::ScoringError;
use crate::normalize::{validate_batch, value_order};
use crate::recommendations::{ActionSummary, Recommendation, generate_recommendations};
use crate::summary::PortfolioSummary;

/// Result of one scoring pass.
///
/// A pass is recomputed from scratch whenever inputs change; the host keeps
/// whichever snapshots it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringPass {
    pub run_id: RunId,
    pub as_of: DateTime<Utc>,
    /// Operator weights in effect (informational).
    pub operator: OperatorWeights,
    /// Classified items in value order (highest value first).
    pub items: Vec<ClassifiedItem>,
    pub alerts: Vec<Alert>,
    pub recommendations: Vec<Recommendation>,
}

impl ScoringPass {
    pub fn alert_summary(&self) -> AlertSummary {
        AlertSummary::from_alerts(&self.alerts, &self.items)
    }

    pub fn action_summary(&self) -> ActionSummary {
        ActionSummary::from_recommendations(&self.recommendations)
    }

    pub fn portfolio(&self, top_n: usize) -> PortfolioSummary {
        PortfolioSummary::from_items(&self.items, top_n)
    }
}

/// Pure function from `(items, as_of, config)` to a [`ScoringPass`].
///
/// Holds no state between runs, so one engine can be shared across threads.
pub struct ScoringEngine {
    config: EngineConfig,
    scorer: CompositeScorer,
    ved: Box<dyn PositionalClassifier<VedClass>>,
    xyz: Box<dyn PositionalClassifier<XyzClass>>,
}

impl core::fmt::Debug for ScoringEngine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScoringEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ScoringEngine {
    pub fn new(config: EngineConfig) -> Result<Self, ScoringError> {
        config.validate()?;
        Ok(Self {
            scorer: CompositeScorer::new(config.weights),
            config,
            ved: Box::new(CyclicVed),
            xyz: Box::new(CyclicXyz),
        })
    }

    pub fn with_ved_strategy(mut self, strategy: impl PositionalClassifier<VedClass> + 'static) -> Self {
        self.ved = Box::new(strategy);
        self
    }

    pub fn with_xyz_strategy(mut self, strategy: impl PositionalClassifier<XyzClass> + 'static) -> Self {
        self.xyz = Box::new(strategy);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn run(&self, items: &[InventoryItem], as_of: DateTime<Utc>) -> Result<ScoringPass, ScoringError> {
        let run_id = RunId::new();
        let today = as_of.date_naive();

        validate_batch(items, today)?;

        let ordered: Vec<&InventoryItem> = value_order(items).into_iter().map(|i| &items[i]).collect();
        let abc = classify_abc(&ordered, &self.config);

        let classified: Vec<ClassifiedItem> = ordered
            .iter()
            .zip(abc)
            .enumerate()
            .map(|(position, (&item, abc))| {
                let classification = Classification {
                    abc,
                    fsn: classify_fsn(item, today, &self.config),
                    ved: self.ved.classify(item, position),
                    xyz: self.xyz.classify(item, position),
                };
                let score = self.scorer.score(&classification);
                ClassifiedItem::new(item.clone(), classification, score)
            })
            .collect();
        tracing::debug!(%run_id, items = classified.len(), "classified inventory");

        let alerts = generate_alerts(&classified, &self.config, as_of);
        tracing::debug!(%run_id, alerts = alerts.len(), "alerts generated");

        let recommendations = generate_recommendations(&classified, &self.config);
        tracing::debug!(%run_id, recommendations = recommendations.len(), "recommendations generated");

        tracing::info!(
            %run_id,
            items = classified.len(),
            alerts = alerts.len(),
            recommendations = recommendations.len(),
            "scoring pass complete"
        );

        Ok(ScoringPass {
            run_id,
            as_of,
            operator: self.config.operator,
            items: classified,
            alerts,
            recommendations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate, TimeZone};
    use stockrisk_inventory::{AbcClass, FsnClass};

    fn as_of() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap()
    }

    fn item(code: &str, cost: f64, qty: i64, days_ago: u64) -> InventoryItem {
        let sold = as_of().date_naive().checked_sub_days(Days::new(days_ago)).unwrap();
        InventoryItem::new(code.parse().unwrap(), code, cost, qty, sold)
    }

    #[test]
    fn rejects_invalid_config() {
        let config = EngineConfig {
            pending_review_stride: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(ScoringEngine::new(config), Err(ScoringError::InvalidConfig(_))));
    }

    #[test]
    fn empty_input_yields_empty_pass() {
        let engine = ScoringEngine::new(EngineConfig::default()).unwrap();
        let pass = engine.run(&[], as_of()).unwrap();
        assert!(pass.items.is_empty());
        assert!(pass.alerts.is_empty());
        assert!(pass.recommendations.is_empty());
        assert_eq!(pass.operator, OperatorWeights::default());
    }

    #[test]
    fn items_come_back_in_value_order_fully_classified() {
        let engine = ScoringEngine::new(EngineConfig::default()).unwrap();
        let items = vec![
            item("SKU-1", 10.0, 10, 5),   // 100
            item("SKU-2", 100.0, 10, 45), // 1000
            item("SKU-3", 40.0, 10, 200), // 400
        ];
        let pass = engine.run(&items, as_of()).unwrap();

        let ids: Vec<&str> = pass.items.iter().map(|c| c.item.id.as_str()).collect();
        assert_eq!(ids, ["SKU-2", "SKU-3", "SKU-1"]);

        // 1000/1500 = 0.667 A, 1400/1500 = 0.933 C, 1.0 C
        let abc: Vec<AbcClass> = pass.items.iter().map(|c| c.abc()).collect();
        assert_eq!(abc, vec![AbcClass::A, AbcClass::C, AbcClass::C]);

        let fsn: Vec<FsnClass> = pass.items.iter().map(|c| c.fsn()).collect();
        assert_eq!(fsn, vec![FsnClass::S, FsnClass::N, FsnClass::F]);

        // SKU-2: A,V,X,S -> 0.9 + 1.2 + 0.45 + 0.3
        assert_eq!(pass.items[0].composite_score, 2.85);
    }

    #[test]
    fn future_sale_date_fails_the_pass() {
        let engine = ScoringEngine::new(EngineConfig::default()).unwrap();
        let tomorrow = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let items = vec![InventoryItem::new("SKU-1".parse().unwrap(), "x", 1.0, 1, tomorrow)];
        assert!(matches!(engine.run(&items, as_of()), Err(ScoringError::InvalidInput(_))));
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn each_stage_emits_a_debug_event() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(logs.clone())
            .with_ansi(false)
            .finish();

        let engine = ScoringEngine::new(EngineConfig::default()).unwrap();
        tracing::subscriber::with_default(subscriber, || {
            engine.run(&[item("SKU-1", 0.0, 1, 1)], as_of()).unwrap();
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        for stage in [
            "classified inventory",
            "alerts generated",
            "recommendations generated",
            "scoring pass complete",
        ] {
            assert!(output.contains(stage), "missing `{stage}` in:\n{output}");
        }
    }

    #[test]
    fn custom_ved_strategy_is_used() {
        struct AllDesirable;
        impl PositionalClassifier<VedClass> for AllDesirable {
            fn classify(&self, _item: &InventoryItem, _position: usize) -> VedClass {
                VedClass::D
            }
        }

        let engine = ScoringEngine::new(EngineConfig::default())
            .unwrap()
            .with_ved_strategy(AllDesirable);
        let pass = engine
            .run(&[item("SKU-1", 1.0, 1, 1), item("SKU-2", 2.0, 1, 1)], as_of())
            .unwrap();
        assert!(pass.items.iter().all(|c| c.ved() == VedClass::D));
    }
}
