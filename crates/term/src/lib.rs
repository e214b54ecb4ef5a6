//! Terminal presentation module.
//!
//! Turns a finished [`Game`](crate::core::Game) into text for a terminal:
//! the per-frame pin diagrams, the tab-aligned scorecard table and the final
//! score line. Output can optionally be coloured, or emitted as JSON.
//!
//! Everything here is formatting; the core crate owns all game rules.

pub mod report;
pub mod scorecard;
pub mod style;

pub use bowling_sim_core as core;
pub use bowling_sim_types as types;

pub use report::{FrameReport, GameReport};
pub use scorecard::{format_report, format_scorecard};
pub use style::{encode_report_into, write_report};
