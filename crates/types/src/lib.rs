//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the simulator.
//! Everything here is plain data, usable from the pin model, the scoring
//! state machine and the presentation layer alike.
//!
//! # Pin Layout
//!
//! Pins are numbered from the head pin outwards, row by row:
//!
//! ```text
//! 6 8 9 7
//!  3 5 4
//!   1 2
//!    0
//! ```
//!
//! # Model Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PIN_COUNT` | 10 | Pins in a rack |
//! | `FRAME_COUNT` | 10 | Frames in a game |
//! | `SKILL` | 0.8 | Knockdown probability of an unsupported pin |
//! | `SUPPORT_PENALTY` | 3.0 | Divisor applied per standing supporter |
//! | `MAX_SUPPORTS` | 4 | Most supporters any pin may have |
//!
//! # Examples
//!
//! ```
//! use bowling_sim_types::{downed_count, FrameState, PinStates, PIN_COUNT};
//!
//! let mut states: PinStates = [false; PIN_COUNT];
//! states[0] = true;
//! states[2] = true;
//! assert_eq!(downed_count(&states), 2);
//!
//! assert_eq!(FrameState::from_str("spare"), Some(FrameState::Spare));
//! assert_eq!(FrameState::Strike.as_str(), "strike");
//! ```

use thiserror::Error;

/// Number of pins in a rack
pub const PIN_COUNT: usize = 10;

/// Number of frames in a game (bonus rolls excluded)
pub const FRAME_COUNT: usize = 10;

/// Probability that a pin with no standing supporters goes down
pub const SKILL: f64 = 0.8;

/// Each standing supporter divides the knockdown probability by this
pub const SUPPORT_PENALTY: f64 = 3.0;

/// Upper bound on supporters per pin
pub const MAX_SUPPORTS: usize = 4;

/// Perfect game score
pub const MAX_SCORE: u32 = 300;

/// Knocked-down state of every pin after a roll, indexed by pin number.
///
/// `true` means the pin is down.
pub type PinStates = [bool; PIN_COUNT];

/// Count the pins that are down.
pub fn downed_count(states: &PinStates) -> u8 {
    states.iter().filter(|&&down| down).count() as u8
}

/// How a frame ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FrameState {
    /// Fewer than ten pins after two rolls
    #[default]
    Open,
    /// All ten pins across two rolls
    Spare,
    /// All ten pins on the first roll
    Strike,
}

impl FrameState {
    /// Parse frame state from string (case-insensitive)
    ///
    /// ```
    /// use bowling_sim_types::FrameState;
    ///
    /// assert_eq!(FrameState::from_str("OPEN"), Some(FrameState::Open));
    /// assert_eq!(FrameState::from_str("x"), Some(FrameState::Strike));
    /// assert_eq!(FrameState::from_str("gutter"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "open" => Some(FrameState::Open),
            "spare" | "/" => Some(FrameState::Spare),
            "strike" | "x" => Some(FrameState::Strike),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FrameState::Open => "open",
            FrameState::Spare => "spare",
            FrameState::Strike => "strike",
        }
    }

    /// Strike or spare: the frame cleared the rack.
    pub fn is_mark(&self) -> bool {
        !matches!(self, FrameState::Open)
    }
}

/// Errors raised while building a pin dependency graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("pin {pin} lists supporter {supporter}, but pins are numbered 0..10")]
    OutOfRange { pin: usize, supporter: usize },
    #[error("pin {pin} cannot support itself")]
    SelfSupport { pin: usize },
    #[error("pin {pin} has {count} supporters (at most 4 allowed)")]
    TooManySupports { pin: usize, count: usize },
    #[error("pin {pin} lists supporter {supporter} more than once")]
    DuplicateSupport { pin: usize, supporter: usize },
    #[error("support cycle involving pin {pin}")]
    Cycle { pin: usize },
}
