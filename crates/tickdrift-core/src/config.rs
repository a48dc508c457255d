//! Run configuration
//!
//! A [`SimConfig`] fully describes one simulation run. It is validated
//! before the engine creates any node state, so a rejected configuration
//! never produces a partial run.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, Result};

/// Which correction rule the engine applies to comparison nodes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdjustmentKind {
    /// Pull each comparison node `1/r` of the way toward the reporting node
    #[default]
    DaisyChain,
    /// Never correct; uncorrected baseline
    None,
}

impl AdjustmentKind {
    pub fn name(self) -> &'static str {
        match self {
            AdjustmentKind::DaisyChain => "daisy-chain",
            AdjustmentKind::None => "none",
        }
    }
}

/// Variant of the closed-form deviation bound
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoundFormula {
    /// `rho * period * r`
    #[default]
    ScaledByDivisor,
    /// `rho * period`, ignoring the correction divisor
    Unscaled,
}

/// Simulation run configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SimConfig {
    /// Nominal tick rate shared by all nodes before drift (Hz)
    pub nominal_frequency_hz: f64,
    /// Nominal duration of one round (seconds)
    pub timeslot_period_s: f64,
    /// Bound on the fixed per-node frequency offset (percent)
    pub freq_tolerance_percent: f64,
    /// Bound on the per-round timing jitter (percent)
    pub jitter_tolerance_percent: f64,
    /// Number of simulated clocks
    pub node_count: usize,
    /// Number of rounds to simulate
    pub sim_length: u64,
    /// Correction divisor
    pub r: f64,
    /// Correction rule
    pub adjustment: AdjustmentKind,
    /// Seed for the run's random source; drawn from entropy when absent
    pub random_seed: Option<u64>,
    /// Deviation bound variant
    pub bound_formula: BoundFormula,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            nominal_frequency_hz: 40e6,
            timeslot_period_s: 1e-3,
            freq_tolerance_percent: 0.5,
            jitter_tolerance_percent: 0.0,
            node_count: 4,
            sim_length: 40,
            r: 2.0,
            adjustment: AdjustmentKind::DaisyChain,
            random_seed: None,
            bound_formula: BoundFormula::ScaledByDivisor,
        }
    }
}

impl SimConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nominal_frequency(mut self, hz: f64) -> Self {
        self.nominal_frequency_hz = hz;
        self
    }

    pub fn with_timeslot_period(mut self, secs: f64) -> Self {
        self.timeslot_period_s = secs;
        self
    }

    pub fn with_freq_tolerance(mut self, percent: f64) -> Self {
        self.freq_tolerance_percent = percent;
        self
    }

    pub fn with_jitter_tolerance(mut self, percent: f64) -> Self {
        self.jitter_tolerance_percent = percent;
        self
    }

    pub fn with_node_count(mut self, count: usize) -> Self {
        self.node_count = count;
        self
    }

    pub fn with_sim_length(mut self, slots: u64) -> Self {
        self.sim_length = slots;
        self
    }

    pub fn with_divisor(mut self, r: f64) -> Self {
        self.r = r;
        self
    }

    pub fn with_adjustment(mut self, kind: AdjustmentKind) -> Self {
        self.adjustment = kind;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    pub fn with_bound_formula(mut self, formula: BoundFormula) -> Self {
        self.bound_formula = formula;
        self
    }

    /// Ticks per slot for a node running exactly at the nominal frequency
    #[inline]
    pub fn nominal_macrotick_length(&self) -> f64 {
        self.nominal_frequency_hz * self.timeslot_period_s
    }

    /// Check every option; fails on the first violation
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.node_count < 2 {
            return Err(ConfigError::TooFewNodes(self.node_count));
        }
        if self.sim_length < 1 {
            return Err(ConfigError::EmptyRun);
        }
        if !self.r.is_finite() || self.r <= 0.0 {
            return Err(ConfigError::InvalidDivisor(self.r));
        }
        check_positive("nominal_frequency_hz", self.nominal_frequency_hz)?;
        check_positive("timeslot_period_s", self.timeslot_period_s)?;
        check_tolerance("freq_tolerance_percent", self.freq_tolerance_percent)?;
        check_tolerance("jitter_tolerance_percent", self.jitter_tolerance_percent)?;
        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

fn check_positive(name: &'static str, value: f64) -> std::result::Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

// The raw increment is period * freq * (1 + U(-tol, tol)); it stays
// strictly positive only while both tolerances are below 100%.
fn check_tolerance(name: &'static str, value: f64) -> std::result::Result<(), ConfigError> {
    if value.is_nan() || value < 0.0 {
        return Err(ConfigError::NegativeTolerance { name, value });
    }
    if value >= 100.0 {
        return Err(ConfigError::ToleranceTooLarge { name, value });
    }
    Ok(())
}
