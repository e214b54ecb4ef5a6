//! Machine-readable game report.

use serde::Serialize;

use crate::core::{FrameRecord, Game};
use crate::types::{downed_count, PinStates};

/// One regular frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameReport {
    pub number: usize,
    pub state: &'static str,
    pub first_count: u8,
    pub pins: u8,
    pub points: u32,
    pub running_total: u32,
    pub first_roll: PinStates,
    pub second_roll: PinStates,
}

impl From<&FrameRecord> for FrameReport {
    fn from(value: &FrameRecord) -> Self {
        Self {
            number: value.number,
            state: value.state.as_str(),
            first_count: downed_count(&value.first_roll),
            pins: downed_count(&value.second_roll),
            points: value.points,
            running_total: value.running_total,
            first_roll: value.first_roll,
            second_roll: value.second_roll,
        }
    }
}

/// Everything a finished game produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameReport {
    pub total_score: u32,
    pub scorecard: Vec<String>,
    pub frames: Vec<FrameReport>,
    pub fill_balls: Vec<PinStates>,
    pub fill_points: u32,
}

impl GameReport {
    pub fn from_game(game: &Game<'_>) -> Self {
        let fill = game.fill_balls();
        Self {
            total_score: game.total_score(),
            scorecard: game.scorecard().to_vec(),
            frames: game.frames().iter().map(FrameReport::from).collect(),
            fill_balls: fill.map(|f| f.rolls().to_vec()).unwrap_or_default(),
            fill_points: fill.map(|f| f.points()).unwrap_or(0),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
