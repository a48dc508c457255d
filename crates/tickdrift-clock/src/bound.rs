//! Closed-form worst-case skew bound
//!
//! The bound depends only on the tolerance parameters, never on a run:
//!
//! ```text
//! fmin, fmax   = f (1 -/+ freqTol/100)
//! tsmin, tsmax = T (1 -/+ jitterTol/100)
//! rho          = (tsmax fmax - tsmin fmin) / (T f)
//! maxDev (us)  = rho T 1e6 [r]
//! ticks        = maxDev f / 1e6
//! ```

use std::fmt;

use tickdrift_core::{BoundFormula, SimConfig};

/// Inputs of the bound calculation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundParams {
    pub nominal_frequency_hz: f64,
    pub timeslot_period_s: f64,
    pub freq_tolerance_percent: f64,
    pub jitter_tolerance_percent: f64,
    pub r: f64,
    pub formula: BoundFormula,
}

impl From<&SimConfig> for BoundParams {
    fn from(config: &SimConfig) -> Self {
        BoundParams {
            nominal_frequency_hz: config.nominal_frequency_hz,
            timeslot_period_s: config.timeslot_period_s,
            freq_tolerance_percent: config.freq_tolerance_percent,
            jitter_tolerance_percent: config.jitter_tolerance_percent,
            r: config.r,
            formula: config.bound_formula,
        }
    }
}

/// Theoretical maximum skew between any two nodes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviationBound {
    /// Maximum relative drift rate between two nodes
    pub rho: f64,
    /// Bound in microseconds
    pub max_deviation_usec: f64,
    /// Bound in ticks at the nominal frequency
    pub nominal_tick_count: f64,
}

impl DeviationBound {
    pub fn compute(params: &BoundParams) -> Self {
        let freq = params.nominal_frequency_hz;
        let period = params.timeslot_period_s;

        let fmin = freq * (1.0 - params.freq_tolerance_percent / 100.0);
        let fmax = freq * (1.0 + params.freq_tolerance_percent / 100.0);
        let tsmin = period * (1.0 - params.jitter_tolerance_percent / 100.0);
        let tsmax = period * (1.0 + params.jitter_tolerance_percent / 100.0);

        // Macrotick length extremes combining both error sources
        let min_ticks = tsmin * fmin;
        let max_ticks = tsmax * fmax;

        let mod_fmin = min_ticks / period;
        let mod_fmax = max_ticks / period;
        let rho = (mod_fmax - mod_fmin) / freq;

        let unscaled_usec = rho * period * 1e6;
        let max_deviation_usec = match params.formula {
            BoundFormula::ScaledByDivisor => unscaled_usec * params.r,
            BoundFormula::Unscaled => unscaled_usec,
        };
        let nominal_tick_count = max_deviation_usec * freq / 1e6;

        DeviationBound {
            rho,
            max_deviation_usec,
            nominal_tick_count,
        }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::compute(&BoundParams::from(config))
    }

    /// Tick bound rounded up to whole ticks
    pub fn whole_ticks(&self) -> u64 {
        self.nominal_tick_count.ceil().max(0.0) as u64
    }
}

impl fmt::Display for DeviationBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Maximum Deviation: +/- {:.2} usec ({} ticks at nominal frequency)",
            self.max_deviation_usec,
            self.whole_ticks()
        )
    }
}
