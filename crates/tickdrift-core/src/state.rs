//! Per-slot records and the append-only simulation state
//!
//! Every slot produces one immutable [`SlotRecord`]. The engine appends
//! records in slot order; consumers only ever see a finished
//! [`SimulationState`] through shared references.

use serde::{Deserialize, Serialize};

use crate::{NodeId, Result, StateError};

/// One correction applied to a comparison node
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    pub node: NodeId,
    pub delta: f64,
}

/// Snapshot of a single timeslot
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlotRecord {
    /// Slot index
    pub slot: u64,
    /// Deterministic counter of an ideal clock: `slot * nominal_macrotick_length`
    pub nominal_counter: f64,
    /// Node whose value the others are compared against this slot
    pub reporting_node: NodeId,
    /// Counter of every node after correction, indexed by node id
    pub counters: Vec<f64>,
    /// Raw increment of every node before correction (0 at slot 0)
    pub increments: Vec<f64>,
    /// Corrections applied this slot, ascending by node id
    pub corrections: Vec<Correction>,
}

impl SlotRecord {
    /// Counter of a node, if it exists
    #[inline]
    pub fn counter(&self, node: NodeId) -> Option<f64> {
        self.counters.get(node.index()).copied()
    }

    /// `(node, counter)` pairs in node order
    pub fn iter_counters(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.counters
            .iter()
            .enumerate()
            .map(|(i, &value)| (NodeId::from_index(i), value))
    }

    /// Largest minus smallest counter in this slot
    pub fn spread(&self) -> f64 {
        let (min, max) = self
            .counters
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if self.counters.is_empty() {
            0.0
        } else {
            max - min
        }
    }
}

/// Ordered, append-only table of slot snapshots for one run
///
/// Deserializing checks that records are in slot order and that every
/// record has one counter and one increment per node.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StateTable")]
pub struct SimulationState {
    /// Fixed per-node frequencies drawn at run start (Hz)
    frequencies: Vec<f64>,
    /// One record per slot, in slot order
    records: Vec<SlotRecord>,
}

impl SimulationState {
    /// Start an empty table for nodes with the given fixed frequencies
    pub fn new(frequencies: Vec<f64>) -> Self {
        SimulationState {
            frequencies,
            records: Vec::new(),
        }
    }

    /// Start an empty table with room for `slots` records
    pub fn with_capacity(frequencies: Vec<f64>, slots: usize) -> Self {
        SimulationState {
            frequencies,
            records: Vec::with_capacity(slots),
        }
    }

    /// Append the next slot's record
    pub fn push(&mut self, record: SlotRecord) {
        debug_assert_eq!(record.slot, self.records.len() as u64, "slots must be appended in order");
        debug_assert_eq!(record.counters.len(), self.frequencies.len());
        self.records.push(record);
    }

    pub fn node_count(&self) -> usize {
        self.frequencies.len()
    }

    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn records(&self) -> &[SlotRecord] {
        &self.records
    }

    pub fn get(&self, slot: u64) -> Option<&SlotRecord> {
        usize::try_from(slot).ok().and_then(|i| self.records.get(i))
    }

    pub fn last(&self) -> Option<&SlotRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Counter series of one node across all slots
    pub fn series(&self, node: NodeId) -> Vec<f64> {
        self.records
            .iter()
            .filter_map(|record| record.counter(node))
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read back a table written by [`to_json`](Self::to_json)
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

// Unchecked wire form of `SimulationState`
#[derive(Deserialize)]
struct StateTable {
    frequencies: Vec<f64>,
    records: Vec<SlotRecord>,
}

impl TryFrom<StateTable> for SimulationState {
    type Error = StateError;

    fn try_from(table: StateTable) -> std::result::Result<Self, StateError> {
        let expected = table.frequencies.len();
        for (position, record) in table.records.iter().enumerate() {
            if record.slot != position as u64 {
                return Err(StateError::OutOfOrder {
                    position,
                    slot: record.slot,
                });
            }
            for (field, found) in [
                ("counters", record.counters.len()),
                ("increments", record.increments.len()),
            ] {
                if found != expected {
                    return Err(StateError::NodeCountMismatch {
                        slot: record.slot,
                        field,
                        found,
                        expected,
                    });
                }
            }
        }
        Ok(SimulationState {
            frequencies: table.frequencies,
            records: table.records,
        })
    }
}
