//! Corrected versus uncorrected runs from the same seed

use rand::Rng;

use tickdrift_clock::DeviationBound;
use tickdrift_core::{AdjustmentKind, SimConfig};
use tickdrift_sim::{SimulationEngine, SkewSummary};

use crate::HarnessResult;

/// Outcome of running one configuration under both strategies
#[derive(Clone, Debug)]
pub struct StrategyComparison {
    pub seed: u64,
    pub bound: DeviationBound,
    pub corrected: SkewSummary,
    pub uncorrected: SkewSummary,
}

impl StrategyComparison {
    /// Uncorrected final spread divided by corrected final spread
    pub fn spread_ratio(&self) -> f64 {
        if self.corrected.final_spread == 0.0 {
            f64::INFINITY
        } else {
            self.uncorrected.final_spread / self.corrected.final_spread
        }
    }
}

/// Run `config` with daisy-chain correction and without, sharing one seed
///
/// Both runs draw identical node frequencies and jitter, so the difference
/// between them is the effect of correction alone.
pub fn compare_strategies(config: &SimConfig) -> HarnessResult<StrategyComparison> {
    let seed = config
        .random_seed
        .unwrap_or_else(|| rand::thread_rng().gen());
    let base = config.clone().with_seed(seed);

    let corrected = SimulationEngine::new(base.clone().with_adjustment(AdjustmentKind::DaisyChain))?.run();
    let uncorrected = SimulationEngine::new(base.clone().with_adjustment(AdjustmentKind::None))?.run();

    let comparison = StrategyComparison {
        seed,
        bound: DeviationBound::from_config(&base),
        corrected: SkewSummary::from_state(&corrected),
        uncorrected: SkewSummary::from_state(&uncorrected),
    };

    tracing::info!(
        seed,
        corrected_max = comparison.corrected.max_abs_skew,
        uncorrected_max = comparison.uncorrected.max_abs_skew,
        "strategy comparison"
    );
    Ok(comparison)
}
