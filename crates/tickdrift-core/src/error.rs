//! Error types for tickdrift

use thiserror::Error;

/// Configuration rejected before a run starts
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("node_count must be at least 2, got {0}")]
    TooFewNodes(usize),

    #[error("sim_length must be at least 1")]
    EmptyRun,

    #[error("correction divisor r must be finite and greater than 0, got {0}")]
    InvalidDivisor(f64),

    #[error("{name} must not be negative, got {value}")]
    NegativeTolerance { name: &'static str, value: f64 },

    #[error("{name} must be below 100 percent, got {value}")]
    ToleranceTooLarge { name: &'static str, value: f64 },

    #[error("{name} must be finite and greater than 0, got {value}")]
    NonPositive { name: &'static str, value: f64 },
}

/// Slot table that does not describe a consistent run
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    #[error("record at position {position} is slot {slot}")]
    OutOfOrder { position: usize, slot: u64 },

    #[error("slot {slot} has {found} {field}, expected {expected}")]
    NodeCountMismatch {
        slot: u64,
        field: &'static str,
        found: usize,
        expected: usize,
    },
}

/// Core tickdrift errors
#[derive(Error, Debug)]
pub enum TickdriftError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid slot table: {0}")]
    State(#[from] StateError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for tickdrift operations
pub type Result<T> = std::result::Result<T, TickdriftError>;
