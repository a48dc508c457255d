//! tickdrift Sim - the timeslot loop
//!
//! Each slot runs four stages:
//! 1. Advance every node's clock by its raw increment
//! 2. Pick the reporting node (round-robin)
//! 3. Correct every other node against the reporting node
//! 4. Append the slot snapshot and notify the observer
//!
//! Stage 1 completes for all nodes before stage 3 starts, so corrections
//! always compare values of the current slot.

pub mod analysis;
pub mod engine;
pub mod observer;

pub use analysis::*;
pub use engine::*;
pub use observer::*;
