//! tickdrift Core - Fundamental types and primitives
//!
//! This crate defines the types shared by every tickdrift crate:
//! - Identifiers (NodeId)
//! - Run configuration and its validation
//! - Per-slot records and the append-only simulation state
//! - Error types

pub mod config;
pub mod error;
pub mod id;
pub mod state;

pub use config::*;
pub use error::*;
pub use id::*;
pub use state::*;
