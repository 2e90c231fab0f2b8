use stockrisk_inventory::Classification;

use crate::config::CompositeWeights;

/// Weighted sum of class points.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompositeScorer {
    weights: CompositeWeights,
}

impl CompositeScorer {
    pub fn new(weights: CompositeWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> CompositeWeights {
        self.weights
    }

    /// Score in \[1.00, 3.00\], rounded half away from zero to 2 decimals.
    pub fn score(&self, classification: &Classification) -> f64 {
        let w = &self.weights;
        let raw = w.abc * f64::from(classification.abc.points())
            + w.ved * f64::from(classification.ved.points())
            + w.xyz * f64::from(classification.xyz.points())
            + w.fsn * f64::from(classification.fsn.points());
        round_to_cents(raw)
    }
}

fn round_to_cents(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use stockrisk_inventory::{AbcClass, FsnClass, VedClass, XyzClass};

    fn classes(abc: AbcClass, ved: VedClass, xyz: XyzClass, fsn: FsnClass) -> Classification {
        Classification { abc, fsn, ved, xyz }
    }

    #[test]
    fn best_and_worst_tiers_hit_the_range_ends() {
        let scorer = CompositeScorer::default();
        assert_eq!(
            scorer.score(&classes(AbcClass::A, VedClass::V, XyzClass::X, FsnClass::F)),
            3.00
        );
        assert_eq!(
            scorer.score(&classes(AbcClass::C, VedClass::D, XyzClass::Z, FsnClass::N)),
            1.00
        );
    }

    #[test]
    fn mixed_tiers_round_to_two_decimals() {
        let scorer = CompositeScorer::default();
        // 0.3*2 + 0.4*3 + 0.15*1 + 0.15*2 = 2.25
        assert_eq!(
            scorer.score(&classes(AbcClass::B, VedClass::V, XyzClass::Z, FsnClass::S)),
            2.25
        );
        // 0.3*1 + 0.4*2 + 0.15*3 + 0.15*1 = 1.70
        assert_eq!(
            scorer.score(&classes(AbcClass::C, VedClass::E, XyzClass::X, FsnClass::N)),
            1.70
        );
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to_cents(1.125), 1.13);
        assert_eq!(round_to_cents(2.004), 2.0);
    }

    #[test]
    fn custom_weights_change_the_score() {
        let scorer = CompositeScorer::new(CompositeWeights {
            abc: 1.0,
            ved: 0.0,
            xyz: 0.0,
            fsn: 0.0,
        });
        assert_eq!(
            scorer.score(&classes(AbcClass::B, VedClass::D, XyzClass::Z, FsnClass::N)),
            2.0
        );
    }

    fn any_classification() -> impl Strategy<Value = Classification> {
        (0usize..3, 0usize..3, 0usize..3, 0usize..3).prop_map(|(a, f, v, x)| Classification {
            abc: AbcClass::ALL[a],
            fsn: FsnClass::ALL[f],
            ved: VedClass::ALL[v],
            xyz: XyzClass::ALL[x],
        })
    }

    proptest! {
        #[test]
        fn score_stays_within_range(c in any_classification()) {
            let score = CompositeScorer::default().score(&c);
            prop_assert!((1.0..=3.0).contains(&score));
            prop_assert_eq!(score, round_to_cents(score));
        }
    }
}
