//! Harness errors

use thiserror::Error;

use tickdrift_core::TickdriftError;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error(transparent)]
    Tickdrift(#[from] TickdriftError),

    #[error("Usage: {0}")]
    Usage(String),
}

pub type HarnessResult<T> = Result<T, HarnessError>;

#[cfg(test)]
mod tests {
    use super::*;
    use tickdrift_core::{ConfigError, SimConfig};
    use tickdrift_sim::SimulationEngine;

    #[test]
    fn test_config_error_reads_the_same_from_file_and_engine() {
        let loaded: HarnessError = SimConfig::from_json_str(r#"{"node_count": 1}"#)
            .unwrap_err()
            .into();
        let engine: HarnessError = match SimulationEngine::new(SimConfig::new().with_node_count(1)) {
            Ok(_) => panic!("single-node configuration accepted"),
            Err(e) => e.into(),
        };

        assert_eq!(loaded.to_string(), engine.to_string());
        assert_eq!(
            loaded.to_string(),
            TickdriftError::from(ConfigError::TooFewNodes(1)).to_string()
        );
    }
}
