//! Predefined run configurations

use tickdrift_core::{AdjustmentKind, SimConfig};

/// Four perfect clocks at 40 MHz with 1 ms slots, five slots long
pub fn ideal_quad() -> SimConfig {
    SimConfig::new()
        .with_nominal_frequency(4e7)
        .with_timeslot_period(1e-3)
        .with_freq_tolerance(0.0)
        .with_jitter_tolerance(0.0)
        .with_node_count(4)
        .with_sim_length(5)
        .with_seed(0)
}

/// Two drifting clocks; one correction per slot
pub fn pair() -> SimConfig {
    SimConfig::new().with_node_count(2).with_seed(2)
}

/// Four clocks with 0.5% frequency tolerance under daisy-chain correction
pub fn drifting_quad() -> SimConfig {
    SimConfig::new().with_seed(40)
}

/// As [`drifting_quad`] without correction
pub fn uncorrected_quad() -> SimConfig {
    drifting_quad().with_adjustment(AdjustmentKind::None)
}

/// `count` clocks with both frequency drift and per-round jitter
pub fn noisy_swarm(count: usize) -> SimConfig {
    SimConfig::new()
        .with_node_count(count)
        .with_freq_tolerance(1.0)
        .with_jitter_tolerance(0.5)
        .with_sim_length(200)
        .with_seed(count as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenarios_are_valid() {
        for config in [
            ideal_quad(),
            pair(),
            drifting_quad(),
            uncorrected_quad(),
            noisy_swarm(8),
        ] {
            assert!(config.validate().is_ok(), "{:?}", config);
            assert!(config.random_seed.is_some());
        }
    }

    #[test]
    fn test_ideal_quad_macrotick() {
        assert_eq!(ideal_quad().nominal_macrotick_length(), 40_000.0);
    }
}
