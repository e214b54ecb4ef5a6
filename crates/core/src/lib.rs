//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the pin-fall model and the scoring state machine.
//! It has **zero dependencies** on terminals, files, or global state:
//!
//! - **Deterministic**: every random draw comes from an injected [`UniformSource`],
//!   so the same seed replays the same game
//! - **Testable**: a [`ConstantSource`] forces every knock to succeed or fail
//! - **Validated**: the pin dependency graph is checked for cycles and bad
//!   indices when it is built
//!
//! # Module Structure
//!
//! - [`pin_graph`]: which pins support which, plus the evaluation order
//! - [`pins`]: a rack of ten pins, knockdown probabilities, the pin diagram
//! - [`frame`]: up to two rolls on one rack, classified open/spare/strike
//! - [`game`]: ten frames, fill balls, scorecard, display log, total
//! - [`scoring`]: frame lookback bonuses and scorecard entry strings
//! - [`rng`]: the injectable random sources
//!
//! # Pin Model
//!
//! Every unsupported pin falls with probability 0.8 per roll. Each supporter
//! that is still standing divides that probability by 3. Supporters are
//! evaluated before the pins behind them, so a pin knocked earlier in the
//! same roll already counts as down.
//!
//! # Example
//!
//! ```
//! use bowling_sim_core::{ConstantSource, Game, SimpleRng};
//!
//! // Every knock succeeds: a perfect game.
//! let mut game = Game::new();
//! assert_eq!(game.run(&mut ConstantSource(0.0)).unwrap(), 300);
//! assert_eq!(game.scorecard()[10], "X X");
//!
//! // Seeded play is reproducible.
//! let mut a = Game::new();
//! let mut b = Game::new();
//! a.run(&mut SimpleRng::new(9)).unwrap();
//! b.run(&mut SimpleRng::new(9)).unwrap();
//! assert_eq!(a.total_score(), b.total_score());
//! ```

pub mod frame;
pub mod game;
pub mod pin_graph;
pub mod pins;
pub mod rng;
pub mod scoring;

pub use bowling_sim_types as types;

// Re-export commonly used types for convenience
pub use frame::Frame;
pub use game::{FillBalls, FrameRecord, Game, GameError};
pub use pin_graph::PinGraph;
pub use pins::{render_pins, Pin, PinSet};
pub use rng::{ConstantSource, SimpleRng, ThreadSource, UniformSource};
pub use scoring::{FramePoints, Lookback};
