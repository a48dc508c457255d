//! Drifting node clocks
//!
//! A node's clock has two error sources:
//! - a fixed frequency offset, drawn once per run (hardware imperfection)
//! - per-round jitter on the effective slot duration
//!
//! All randomness comes from the caller's generator so runs are
//! reproducible from a seed.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use tickdrift_core::{NodeId, SimConfig};

/// Draw a node's fixed frequency from `[f(1 - tol/100), f(1 + tol/100)]`
///
/// # Panics
///
/// Panics if `freq_tolerance_percent` is negative or NaN, or if the band
/// is not finite. [`SimConfig::validate`] rules out all of these.
pub fn draw_frequency<R: Rng + ?Sized>(
    nominal_frequency: f64,
    freq_tolerance_percent: f64,
    rng: &mut R,
) -> f64 {
    let fmin = nominal_frequency * (1.0 - freq_tolerance_percent / 100.0);
    let fmax = nominal_frequency * (1.0 + freq_tolerance_percent / 100.0);
    Uniform::new_inclusive(fmin, fmax).sample(rng)
}

/// Raw tick increment for one round:
/// `period * freq * (1 + U(-jitter/100, +jitter/100))`
///
/// # Panics
///
/// Same precondition on `jitter_tolerance_percent` as [`ClockModel::new`].
pub fn increment<R: Rng + ?Sized>(
    node_frequency: f64,
    timeslot_period: f64,
    jitter_tolerance_percent: f64,
    rng: &mut R,
) -> f64 {
    ClockModel::new(timeslot_period, jitter_tolerance_percent).increment(node_frequency, rng)
}

/// Per-round increment generator shared by all nodes of a run
#[derive(Clone, Debug)]
pub struct ClockModel {
    /// Nominal slot duration (seconds)
    timeslot_period: f64,
    /// Jitter bound (percent)
    jitter_tolerance_percent: f64,
    /// Relative jitter distribution
    jitter: Uniform<f64>,
}

impl ClockModel {
    /// Model for slots of `timeslot_period` seconds with relative jitter
    /// drawn uniformly from `±jitter_tolerance_percent / 100`
    ///
    /// # Panics
    ///
    /// Panics if `jitter_tolerance_percent` is negative, NaN or infinite.
    pub fn new(timeslot_period: f64, jitter_tolerance_percent: f64) -> Self {
        let bound = jitter_tolerance_percent / 100.0;
        ClockModel {
            timeslot_period,
            jitter_tolerance_percent,
            jitter: Uniform::new_inclusive(-bound, bound),
        }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.timeslot_period_s, config.jitter_tolerance_percent)
    }

    pub fn timeslot_period(&self) -> f64 {
        self.timeslot_period
    }

    pub fn jitter_tolerance_percent(&self) -> f64 {
        self.jitter_tolerance_percent
    }

    /// Consumes exactly one draw from `rng`
    #[inline]
    pub fn increment<R: Rng + ?Sized>(&self, node_frequency: f64, rng: &mut R) -> f64 {
        self.timeslot_period * node_frequency * (1.0 + self.jitter.sample(rng))
    }
}

/// A simulated node: fixed frequency plus a running counter
#[derive(Clone, Debug, PartialEq)]
pub struct NodeClock {
    id: NodeId,
    /// Fixed for the whole run
    frequency: f64,
    counter: f64,
}

impl NodeClock {
    /// New clock at counter 0
    pub fn new(id: NodeId, frequency: f64) -> Self {
        NodeClock {
            id,
            frequency,
            counter: 0.0,
        }
    }

    /// Clock with a frequency drawn from the configured tolerance band
    pub fn with_drawn_frequency<R: Rng + ?Sized>(id: NodeId, config: &SimConfig, rng: &mut R) -> Self {
        let frequency = draw_frequency(
            config.nominal_frequency_hz,
            config.freq_tolerance_percent,
            rng,
        );
        tracing::debug!(node = %id, frequency, "drew node frequency");
        Self::new(id, frequency)
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn counter(&self) -> f64 {
        self.counter
    }

    /// Advance by one round; returns the raw increment
    pub fn advance<R: Rng + ?Sized>(&mut self, model: &ClockModel, rng: &mut R) -> f64 {
        let step = model.increment(self.frequency, rng);
        self.counter += step;
        step
    }

    /// Apply a correction delta
    pub fn correct(&mut self, delta: f64) {
        self.counter += delta;
    }
}
