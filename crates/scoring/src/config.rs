//! Engine configuration.
//!
//! Every constant the scoring rules use lives here, defaulting to the values
//! the dashboard has always shipped with. Configuration is validated once when
//! an engine is built; a pass never sees an invalid config.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScoringError;

/// Point weights of the composite score.
///
/// Must be non-negative and sum to 1.0 so scores stay within \[1.00, 3.00\].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeWeights {
    pub abc: f64,
    pub ved: f64,
    pub xyz: f64,
    pub fsn: f64,
}

impl Default for CompositeWeights {
    fn default() -> Self {
        Self {
            abc: 0.30,
            ved: 0.40,
            xyz: 0.15,
            fsn: 0.15,
        }
    }
}

impl CompositeWeights {
    const SUM_TOLERANCE: f64 = 1e-9;

    pub fn validate(&self) -> Result<(), ScoringError> {
        let parts = [self.abc, self.ved, self.xyz, self.fsn];
        if parts.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ScoringError::invalid_config(
                "composite weights must be finite and non-negative",
            ));
        }
        let sum: f64 = parts.iter().sum();
        if (sum - 1.0).abs() > Self::SUM_TOLERANCE {
            return Err(ScoringError::invalid_config(format!(
                "composite weights must sum to 1.0 (got {sum})"
            )));
        }
        Ok(())
    }
}

/// Operator-facing value/velocity emphasis, each in \[0, 100\].
///
/// Informational: shown next to the scores and carried through each pass, but
/// not an input of the composite formula (see [`CompositeWeights`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatorWeights {
    pub value_weight: f64,
    pub velocity_weight: f64,
}

impl Default for OperatorWeights {
    fn default() -> Self {
        Self {
            value_weight: 60.0,
            velocity_weight: 40.0,
        }
    }
}

impl OperatorWeights {
    pub fn validate(&self) -> Result<(), ScoringError> {
        for (name, w) in [
            ("value_weight", self.value_weight),
            ("velocity_weight", self.velocity_weight),
        ] {
            if !(0.0..=100.0).contains(&w) {
                return Err(ScoringError::invalid_config(format!(
                    "{name} must be within [0, 100] (got {w})"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cumulative value share up to which an item is class A.
    pub abc_a_cutoff: f64,
    /// Cumulative value share up to which an item is class B.
    pub abc_b_cutoff: f64,
    pub fast_moving_days: i64,
    pub slow_moving_days: i64,
    /// Raw total value above which a SKU counts as a concentration risk.
    pub high_value_threshold: f64,
    /// Impact reported for recommendations on zero-value SKUs.
    pub impact_fallback: f64,
    /// Every n-th SKU in value order without another action is queued for review.
    pub pending_review_stride: usize,
    pub weights: CompositeWeights,
    pub operator: OperatorWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            abc_a_cutoff: 0.70,
            abc_b_cutoff: 0.90,
            fast_moving_days: 30,
            slow_moving_days: 90,
            high_value_threshold: 50_000.0,
            impact_fallback: 15_000.0,
            pending_review_stride: 5,
            weights: CompositeWeights::default(),
            operator: OperatorWeights::default(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ScoringError> {
        let cutoff_ok = |c: f64| c.is_finite() && c > 0.0 && c <= 1.0;
        if !cutoff_ok(self.abc_a_cutoff) || !cutoff_ok(self.abc_b_cutoff) {
            return Err(ScoringError::invalid_config("ABC cutoffs must be within (0, 1]"));
        }
        if self.abc_a_cutoff > self.abc_b_cutoff {
            return Err(ScoringError::invalid_config(
                "abc_a_cutoff cannot exceed abc_b_cutoff",
            ));
        }
        if self.fast_moving_days < 0 || self.slow_moving_days < self.fast_moving_days {
            return Err(ScoringError::invalid_config(
                "velocity windows must satisfy 0 <= fast_moving_days <= slow_moving_days",
            ));
        }
        if !(self.high_value_threshold.is_finite() && self.high_value_threshold >= 0.0) {
            return Err(ScoringError::invalid_config(
                "high_value_threshold must be a finite non-negative number",
            ));
        }
        if !(self.impact_fallback.is_finite() && self.impact_fallback >= 0.0) {
            return Err(ScoringError::invalid_config(
                "impact_fallback must be a finite non-negative number",
            ));
        }
        if self.pending_review_stride == 0 {
            return Err(ScoringError::invalid_config("pending_review_stride must be >= 1"));
        }
        self.weights.validate()?;
        self.operator.validate()
    }

    /// Defaults overridden by `STOCKRISK_*` environment variables.
    pub fn from_env() -> Result<Self, ScoringError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `STOCKRISK_*` key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ScoringError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        override_from(&lookup, "STOCKRISK_ABC_A_CUTOFF", &mut config.abc_a_cutoff)?;
        override_from(&lookup, "STOCKRISK_ABC_B_CUTOFF", &mut config.abc_b_cutoff)?;
        override_from(&lookup, "STOCKRISK_FAST_MOVING_DAYS", &mut config.fast_moving_days)?;
        override_from(&lookup, "STOCKRISK_SLOW_MOVING_DAYS", &mut config.slow_moving_days)?;
        override_from(
            &lookup,
            "STOCKRISK_HIGH_VALUE_THRESHOLD",
            &mut config.high_value_threshold,
        )?;
        override_from(&lookup, "STOCKRISK_IMPACT_FALLBACK", &mut config.impact_fallback)?;
        override_from(
            &lookup,
            "STOCKRISK_PENDING_REVIEW_STRIDE",
            &mut config.pending_review_stride,
        )?;
        override_from(&lookup, "STOCKRISK_VALUE_WEIGHT", &mut config.operator.value_weight)?;
        override_from(
            &lookup,
            "STOCKRISK_VELOCITY_WEIGHT",
            &mut config.operator.velocity_weight,
        )?;

        config.validate()?;
        Ok(config)
    }
}

fn override_from<F, T>(lookup: &F, key: &str, slot: &mut T) -> Result<(), ScoringError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: core::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return Ok(());
    };
    *slot = raw
        .trim()
        .parse()
        .map_err(|e| ScoringError::invalid_config(format!("{key}={raw:?}: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        let config = EngineConfig::default();
        config.validate().unwrap();
        assert_eq!(config.abc_a_cutoff, 0.70);
        assert_eq!(config.impact_fallback, 15_000.0);
        assert_eq!(config.operator.value_weight + config.operator.velocity_weight, 100.0);
    }

    #[test]
    fn env_overrides_apply() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("STOCKRISK_HIGH_VALUE_THRESHOLD", "75000"),
            ("STOCKRISK_PENDING_REVIEW_STRIDE", " 3 "),
            ("STOCKRISK_VALUE_WEIGHT", "70"),
        ]))
        .unwrap();

        assert_eq!(config.high_value_threshold, 75_000.0);
        assert_eq!(config.pending_review_stride, 3);
        assert_eq!(config.operator.value_weight, 70.0);
        assert_eq!(config.slow_moving_days, 90);
    }

    #[test]
    fn unparsable_override_is_an_error() {
        let err = EngineConfig::from_lookup(lookup_from(&[("STOCKRISK_FAST_MOVING_DAYS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, ScoringError::InvalidConfig(msg) if msg.contains("STOCKRISK_FAST_MOVING_DAYS")));
    }

    #[test]
    fn rejects_inverted_cutoffs_and_windows() {
        let mut config = EngineConfig::default();
        config.abc_a_cutoff = 0.95;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.slow_moving_days = 10;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.pending_review_stride = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn composite_weights_must_sum_to_one() {
        let weights = CompositeWeights {
            abc: 0.5,
            ved: 0.5,
            xyz: 0.5,
            fsn: 0.0,
        };
        assert!(weights.validate().is_err());

        let negative = CompositeWeights {
            abc: 1.2,
            ved: -0.2,
            xyz: 0.0,
            fsn: 0.0,
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn operator_weights_are_bounded() {
        let weights = OperatorWeights {
            value_weight: 120.0,
            velocity_weight: 0.0,
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn partial_json_config_falls_back_to_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{ "impact_fallback": 500.0 }"#).unwrap();
        assert_eq!(config.impact_fallback, 500.0);
        assert_eq!(config.abc_b_cutoff, 0.90);
        config.validate().unwrap();
    }
}
