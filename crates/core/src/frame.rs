//! Frame module - up to two rolls on one fresh rack

use crate::pin_graph::PinGraph;
use crate::pins::PinSet;
use crate::rng::UniformSource;
use crate::scoring::frame_entry;
use crate::types::{downed_count, FrameState, PinStates, PIN_COUNT};

/// A simulated frame.
///
/// `second_roll` is cumulative: it reports every pin down after the second
/// ball, including those from the first. On a strike there is no second
/// ball and it equals `first_roll`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    state: FrameState,
    first_roll: PinStates,
    second_roll: PinStates,
}

impl Frame {
    /// Bowl one frame on a fresh rack.
    pub fn simulate<R>(graph: &PinGraph, rng: &mut R) -> Self
    where
        R: UniformSource + ?Sized,
    {
        let mut pins = PinSet::new(graph);

        let first_roll = pins.roll(rng);
        if downed_count(&first_roll) as usize == PIN_COUNT {
            return Self {
                state: FrameState::Strike,
                first_roll,
                second_roll: first_roll,
            };
        }

        let second_roll = pins.roll(rng);
        let state = if downed_count(&second_roll) as usize == PIN_COUNT {
            FrameState::Spare
        } else {
            FrameState::Open
        };

        Self {
            state,
            first_roll,
            second_roll,
        }
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    pub fn first_roll(&self) -> &PinStates {
        &self.first_roll
    }

    pub fn second_roll(&self) -> &PinStates {
        &self.second_roll
    }

    pub fn first_count(&self) -> u8 {
        downed_count(&self.first_roll)
    }

    /// Pins down after the whole frame.
    pub fn second_count(&self) -> u8 {
        downed_count(&self.second_roll)
    }

    pub fn scorecard_entry(&self) -> String {
        frame_entry(self.state, self.first_count(), self.second_count())
    }
}
