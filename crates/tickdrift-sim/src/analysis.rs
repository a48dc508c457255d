//! Skew analysis over a finished run

use tickdrift_core::{NodeId, SimulationState, SlotRecord};

/// Skew `counter[a] - counter[b]` of one node pair across all slots
#[derive(Clone, Debug, PartialEq)]
pub struct SkewSeries {
    pub a: NodeId,
    pub b: NodeId,
    pub skews: Vec<f64>,
}

impl SkewSeries {
    pub fn max_abs(&self) -> f64 {
        self.skews.iter().fold(0.0, |acc, s| acc.max(s.abs()))
    }
}

/// Skew of `a` relative to `b` in one slot; `None` if either node is missing
fn skew(record: &SlotRecord, a: NodeId, b: NodeId) -> Option<f64> {
    Some(record.counter(a)? - record.counter(b)?)
}

fn node_pairs(n: usize) -> impl Iterator<Item = (NodeId, NodeId)> {
    (0..n).flat_map(move |a| {
        ((a + 1)..n).map(move |b| (NodeId::from_index(a), NodeId::from_index(b)))
    })
}

/// Skew series for every unordered pair `a < b`
///
/// Slots lacking a counter for either node are skipped.
pub fn pairwise_skews(state: &SimulationState) -> Vec<SkewSeries> {
    node_pairs(state.node_count())
        .map(|(a, b)| SkewSeries {
            a,
            b,
            skews: state
                .records()
                .iter()
                .filter_map(|r| skew(r, a, b))
                .collect(),
        })
        .collect()
}

/// Counter spread (max - min) per slot
pub fn spread_series(state: &SimulationState) -> Vec<f64> {
    state.records().iter().map(|r| r.spread()).collect()
}

/// Aggregate skew statistics of a run, in ticks
#[derive(Clone, Debug, PartialEq)]
pub struct SkewSummary {
    /// Largest absolute pairwise skew observed
    pub max_abs_skew: f64,
    /// Slot where it occurred
    pub max_skew_slot: u64,
    /// Pair where it occurred
    pub max_skew_pair: (NodeId, NodeId),
    /// Mean absolute skew over all pairs and slots
    pub mean_abs_skew: f64,
    /// Spread at the last slot
    pub final_spread: f64,
}

impl SkewSummary {
    pub fn from_state(state: &SimulationState) -> Self {
        let mut summary = SkewSummary {
            max_abs_skew: 0.0,
            max_skew_slot: 0,
            max_skew_pair: (NodeId::new(0), NodeId::new(1)),
            mean_abs_skew: 0.0,
            final_spread: state.last().map(|r| r.spread()).unwrap_or(0.0),
        };

        let mut sum = 0.0;
        let mut samples = 0usize;
        for (a, b) in node_pairs(state.node_count()) {
            for record in state.records() {
                let Some(abs) = skew(record, a, b).map(f64::abs) else {
                    continue;
                };
                sum += abs;
                samples += 1;
                if abs > summary.max_abs_skew {
                    summary.max_abs_skew = abs;
                    summary.max_skew_slot = record.slot;
                    summary.max_skew_pair = (a, b);
                }
            }
        }
        if samples > 0 {
            summary.mean_abs_skew = sum / samples as f64;
        }
        summary
    }

    /// Whether the observed maximum stays within `bound_ticks`
    pub fn within(&self, bound_ticks: f64) -> bool {
        self.max_abs_skew <= bound_ticks
    }
}
