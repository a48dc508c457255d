//! tickdrift Test Harness - scenarios and strategy comparison
//!
//! This crate provides:
//! - Named configurations for common drift scenarios
//! - Side-by-side runs of corrected and uncorrected clocks
//! - The `tickdrift` command-line runner

pub mod compare;
pub mod error;
pub mod scenarios;

pub use compare::*;
pub use error::*;
