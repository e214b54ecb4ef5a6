//! Bowling simulator (workspace facade crate).
//!
//! Exposes `bowling_sim::{core, term, types}` while the implementation lives
//! in dedicated crates under `crates/`, plus the binary's environment config.

pub mod config;

pub use bowling_sim_core as core;
pub use bowling_sim_term as term;
pub use bowling_sim_types as types;
