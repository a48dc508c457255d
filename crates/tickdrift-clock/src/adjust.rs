//! Correction strategies
//!
//! A strategy sees only the two counter values of a comparison and the
//! correction divisor; it never learns which nodes it is comparing.

use tickdrift_core::AdjustmentKind;

/// Pairwise correction rule
pub trait AdjustmentStrategy: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Delta to add to the comparison node's counter
    fn apply(&self, reporting_value: f64, comparison_value: f64, r: f64) -> f64;
}

/// Closes `1/r` of the gap to the reporting node each round
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DaisyChainAdjustment;

impl AdjustmentStrategy for DaisyChainAdjustment {
    fn name(&self) -> &'static str {
        "daisy-chain"
    }

    #[inline]
    fn apply(&self, reporting_value: f64, comparison_value: f64, r: f64) -> f64 {
        (reporting_value - comparison_value) / r
    }
}

/// Uncorrected baseline
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoAdjustment;

impl AdjustmentStrategy for NoAdjustment {
    fn name(&self) -> &'static str {
        "none"
    }

    #[inline]
    fn apply(&self, _reporting_value: f64, _comparison_value: f64, _r: f64) -> f64 {
        0.0
    }
}

/// Strategy selected by a configuration
pub fn strategy_for(kind: AdjustmentKind) -> Box<dyn AdjustmentStrategy> {
    match kind {
        AdjustmentKind::DaisyChain => Box::new(DaisyChainAdjustment),
        AdjustmentKind::None => Box::new(NoAdjustment),
    }
}
