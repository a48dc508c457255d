//! Simulation engine - drives the timeslot loop

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tickdrift_clock::{
    strategy_for, AdjustmentStrategy, ClockModel, DeviationBound, NodeClock, RoundRobin,
};
use tickdrift_core::{Correction, NodeId, Result, SimConfig, SimulationState, SlotRecord};

use crate::{NoopObserver, SlotObserver};

// Upper bound on the up-front record allocation; longer runs grow normally.
const MAX_PREALLOCATED_SLOTS: usize = 1 << 20;

/// One-shot simulation of a validated configuration
pub struct SimulationEngine {
    config: SimConfig,
    strategy: Box<dyn AdjustmentStrategy>,
    seed: u64,
    rng: StdRng,
}

impl SimulationEngine {
    /// Validate `config` and build an engine using its configured strategy
    pub fn new(config: SimConfig) -> Result<Self> {
        let strategy = strategy_for(config.adjustment);
        Self::with_strategy(config, strategy)
    }

    /// Validate `config` and build an engine with a caller-supplied strategy
    pub fn with_strategy(
        config: SimConfig,
        strategy: Box<dyn AdjustmentStrategy>,
    ) -> Result<Self> {
        config.validate()?;

        let seed = config
            .random_seed
            .unwrap_or_else(|| rand::thread_rng().gen());

        Ok(SimulationEngine {
            config,
            strategy,
            seed,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Seed of this run's random source; replaying it reproduces the run
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Run to completion
    pub fn run(self) -> SimulationState {
        self.run_with(&mut NoopObserver)
    }

    /// Run to completion, notifying `observer` after every slot
    pub fn run_with<O: SlotObserver + ?Sized>(mut self, observer: &mut O) -> SimulationState {
        let config = &self.config;
        let node_count = config.node_count;
        let total = config.sim_length;
        let macrotick = config.nominal_macrotick_length();
        let model = ClockModel::from_config(config);
        let schedule = RoundRobin::new(node_count);

        tracing::info!(
            nodes = node_count,
            slots = total,
            strategy = self.strategy.name(),
            r = config.r,
            seed = self.seed,
            "starting simulation"
        );
        if config.r < 1.0 {
            tracing::warn!(r = config.r, "correction divisor below 1 overshoots the reporting node");
        }

        let mut nodes: Vec<NodeClock> = (0..node_count)
            .map(|i| NodeClock::with_drawn_frequency(NodeId::from_index(i), config, &mut self.rng))
            .collect();

        let frequencies = nodes.iter().map(NodeClock::frequency).collect();
        let capacity = usize::try_from(total)
            .unwrap_or(MAX_PREALLOCATED_SLOTS)
            .min(MAX_PREALLOCATED_SLOTS);
        let mut state = SimulationState::with_capacity(frequencies, capacity);

        for slot in 0..total {
            // Stage 1: raw increments for every node
            let increments: Vec<f64> = if slot == 0 {
                vec![0.0; node_count]
            } else {
                nodes
                    .iter_mut()
                    .map(|node| node.advance(&model, &mut self.rng))
                    .collect()
            };

            // Stage 2: reporting node
            let reporting_node = schedule.reporting_node(slot);
            let reporting_value = nodes[reporting_node.index()].counter();

            // Stage 3: correct comparison nodes against current-slot values
            let corrections: Vec<Correction> = schedule
                .comparison_nodes(slot)
                .map(|id| {
                    let node = &mut nodes[id.index()];
                    let delta = self.strategy.apply(reporting_value, node.counter(), config.r);
                    node.correct(delta);
                    tracing::trace!(slot, node = %id, reporter = %reporting_node, delta, "applied correction");
                    Correction { node: id, delta }
                })
                .collect();

            // Stage 4: snapshot
            let record = SlotRecord {
                slot,
                nominal_counter: slot as f64 * macrotick,
                reporting_node,
                counters: nodes.iter().map(NodeClock::counter).collect(),
                increments,
                corrections,
            };
            observer.on_slot(&record, total);
            state.push(record);
        }

        tracing::info!(
            slots = state.len(),
            final_spread = state.last().map(SlotRecord::spread).unwrap_or(0.0),
            "simulation finished"
        );
        observer.on_complete(&state);
        state
    }
}

/// Finished run: the slot table plus the theoretical bound for its configuration
#[derive(Clone, Debug)]
pub struct SimulationReport {
    pub seed: u64,
    pub state: SimulationState,
    pub bound: DeviationBound,
}

/// Validate, run and compute the bound in one call
pub fn simulate(config: &SimConfig) -> Result<SimulationReport> {
    simulate_with(config, &mut NoopObserver)
}

/// As [`simulate`], with an observer
pub fn simulate_with<O: SlotObserver + ?Sized>(
    config: &SimConfig,
    observer: &mut O,
) -> Result<SimulationReport> {
    let engine = SimulationEngine::new(config.clone())?;
    let seed = engine.seed();
    let bound = DeviationBound::from_config(config);
    let state = engine.run_with(observer);
    Ok(SimulationReport { seed, state, bound })
}
