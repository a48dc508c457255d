//! tickdrift Clock - the per-node building blocks of a simulation run
//!
//! This crate implements:
//! - Drifting node clocks (fixed frequency offset plus per-round jitter)
//! - The round-robin reporting schedule
//! - Pluggable correction strategies
//! - The closed-form deviation bound

pub mod adjust;
pub mod bound;
pub mod clock;
pub mod schedule;

pub use adjust::*;
pub use bound::*;
pub use clock::*;
pub use schedule::*;
