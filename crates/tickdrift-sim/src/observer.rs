//! Per-slot observers
//!
//! Observers see each finished slot record and the completed run. They
//! cannot influence the simulation.

use tickdrift_core::{SimulationState, SlotRecord};

/// Callback invoked by the engine after every slot
pub trait SlotObserver {
    fn on_slot(&mut self, _record: &SlotRecord, _total_slots: u64) {}

    fn on_complete(&mut self, _state: &SimulationState) {}
}

/// Observer that ignores everything
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl SlotObserver for NoopObserver {}

/// Logs run progress at every quarter of the run
#[derive(Clone, Debug, Default)]
pub struct ProgressObserver {
    reported: Vec<u64>,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentages logged so far
    pub fn reported(&self) -> &[u64] {
        &self.reported
    }
}

impl SlotObserver for ProgressObserver {
    fn on_slot(&mut self, record: &SlotRecord, total_slots: u64) {
        let step = (total_slots / 4).max(1);
        if record.slot % step == 0 && record.slot + 4 < total_slots {
            let percent = (record.slot * 100).div_ceil(total_slots);
            tracing::info!(slot = record.slot, "simulation {}% complete", percent);
            self.reported.push(percent);
        }
    }

    fn on_complete(&mut self, state: &SimulationState) {
        tracing::info!(slots = state.len(), "simulation 100% complete");
        self.reported.push(100);
    }
}

/// Adapts a closure into an observer
pub struct FnObserver<F>(pub F);

impl<F> SlotObserver for FnObserver<F>
where
    F: FnMut(&SlotRecord),
{
    fn on_slot(&mut self, record: &SlotRecord, _total_slots: u64) {
        (self.0)(record)
    }
}

/// Keeps a copy of every record it sees
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    pub records: Vec<SlotRecord>,
    pub completed: bool,
}

impl SlotObserver for RecordingObserver {
    fn on_slot(&mut self, record: &SlotRecord, _total_slots: u64) {
        self.records.push(record.clone());
    }

    fn on_complete(&mut self, _state: &SimulationState) {
        self.completed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickdrift_core::NodeId;

    fn record(slot: u64) -> SlotRecord {
        SlotRecord {
            slot,
            nominal_counter: 0.0,
            reporting_node: NodeId::ZERO,
            counters: vec![0.0, 0.0],
            increments: vec![0.0, 0.0],
            corrections: Vec::new(),
        }
    }

    #[test]
    fn test_progress_quarters() {
        let mut observer = ProgressObserver::new();
        for slot in 0..40 {
            observer.on_slot(&record(slot), 40);
        }
        observer.on_complete(&SimulationState::default());
        assert_eq!(observer.reported(), &[0, 25, 50, 75, 100]);
    }

    #[test]
    fn test_progress_short_run() {
        let mut observer = ProgressObserver::new();
        for slot in 0..3 {
            observer.on_slot(&record(slot), 3);
        }
        observer.on_complete(&SimulationState::default());
        assert_eq!(observer.reported(), &[100]);
    }

    #[test]
    fn test_fn_observer() {
        let mut seen = Vec::new();
        {
            let mut observer = FnObserver(|r: &SlotRecord| seen.push(r.slot));
            observer.on_slot(&record(4), 10);
            observer.on_slot(&record(5), 10);
        }
        assert_eq!(seen, vec![4, 5]);
    }
}
