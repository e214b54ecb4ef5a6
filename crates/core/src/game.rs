//! Game module - ten frames, fill balls, scorecard and display log
//!
//! A [`Game`] is played exactly once. [`Game::run`] bowls the ten frames,
//! then the tenth-frame fill balls, and leaves the scorecard, the display
//! log and the total score readable and final.

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::frame::Frame;
use crate::pin_graph::PinGraph;
use crate::pins::{render_pins, PinSet};
use crate::rng::UniformSource;
use crate::scoring::{double_fill_entry, fill_ball_entry, Lookback};
use crate::types::{downed_count, FrameState, PinStates, FRAME_COUNT};

/// Ten frames plus at most one fill-ball entry.
pub const MAX_SCORECARD_ENTRIES: usize = FRAME_COUNT + 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("game has already been played")]
    AlreadyPlayed,
}

/// Outcome of one of the ten regular frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRecord {
    /// 1-based frame number.
    pub number: usize,
    pub state: FrameState,
    pub first_roll: PinStates,
    /// Cumulative; equals `first_roll` on a strike.
    pub second_roll: PinStates,
    /// Points credited when this frame finished.
    pub points: u32,
    /// Game total after this frame.
    pub running_total: u32,
}

/// Extra balls after a marked tenth frame.
///
/// A spare earns one ball ("Roll 3"). A strike earns a whole extra frame
/// ("Roll 2" and "Roll 3"); if that frame opens with another strike, the
/// third ball is bowled at a fresh rack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillBalls {
    rolls: ArrayVec<PinStates, 2>,
    points: u32,
}

impl FillBalls {
    pub fn rolls(&self) -> &[PinStates] {
        &self.rolls
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    /// Display label number of the first fill ball.
    pub fn first_roll_number(&self) -> usize {
        4 - self.rolls.len()
    }
}

/// A single-player game.
#[derive(Debug, Clone)]
pub struct Game<'g> {
    graph: &'g PinGraph,
    frames: ArrayVec<FrameRecord, FRAME_COUNT>,
    fill: Option<FillBalls>,
    scorecard: ArrayVec<String, MAX_SCORECARD_ENTRIES>,
    display: String,
    total_score: u32,
    finished: bool,
}

impl Game<'static> {
    /// A game on the standard triangle.
    pub fn new() -> Self {
        Game::with_graph(PinGraph::standard())
    }
}

impl Default for Game<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'g> Game<'g> {
    pub fn with_graph(graph: &'g PinGraph) -> Self {
        Self {
            graph,
            frames: ArrayVec::new(),
            fill: None,
            scorecard: ArrayVec::new(),
            display: String::new(),
            total_score: 0,
            finished: false,
        }
    }

    /// Play the whole game and return the final score.
    ///
    /// Fails if this game has already been played; the finished game is
    /// left untouched.
    pub fn run<R>(&mut self, rng: &mut R) -> Result<u32, GameError>
    where
        R: UniformSource + ?Sized,
    {
        if self.finished {
            return Err(GameError::AlreadyPlayed);
        }

        let mut lookback = Lookback::new();

        for number in 1..=FRAME_COUNT {
            let frame = Frame::simulate(self.graph, rng);
            let points = lookback.frame_points(frame.second_count() as u32);
            self.total_score += points.total;

            self.scorecard.push(frame.scorecard_entry());
            self.push_frame_display(number, &frame);

            tracing::debug!(
                frame = number,
                state = frame.state().as_str(),
                first = frame.first_count(),
                pins = frame.second_count(),
                bonus = points.bonus,
                total = self.total_score,
                "frame finished"
            );

            self.frames.push(FrameRecord {
                number,
                state: frame.state(),
                first_roll: *frame.first_roll(),
                second_roll: *frame.second_roll(),
                points: points.total,
                running_total: self.total_score,
            });
            lookback.advance(frame.state());
        }

        if let Some(fill) = self.bowl_fill_balls(lookback.prev(), rng) {
            self.total_score += fill.points;
            self.push_fill_display(&fill);
            tracing::debug!(
                balls = fill.rolls.len(),
                points = fill.points,
                total = self.total_score,
                "fill balls bowled"
            );
            self.fill = Some(fill);
        }

        self.finished = true;
        tracing::info!(total = self.total_score, "game finished");
        Ok(self.total_score)
    }

    fn bowl_fill_balls<R>(&mut self, tenth: FrameState, rng: &mut R) -> Option<FillBalls>
    where
        R: UniformSource + ?Sized,
    {
        let mut rolls = ArrayVec::new();

        let points = match tenth {
            FrameState::Open => return None,
            FrameState::Spare => {
                let third = PinSet::new(self.graph).roll(rng);
                let count = downed_count(&third);
                self.scorecard.push(fill_ball_entry(count));
                rolls.push(third);
                count as u32
            }
            FrameState::Strike => {
                let extra = Frame::simulate(self.graph, rng);
                rolls.push(*extra.first_roll());
                if extra.state() == FrameState::Strike {
                    let third = PinSet::new(self.graph).roll(rng);
                    let count = downed_count(&third);
                    self.scorecard.push(double_fill_entry(count));
                    rolls.push(third);
                    extra.first_count() as u32 + count as u32
                } else {
                    self.scorecard.push(extra.scorecard_entry());
                    rolls.push(*extra.second_roll());
                    extra.second_count() as u32
                }
            }
        };

        Some(FillBalls { rolls, points })
    }

    fn push_frame_display(&mut self, number: usize, frame: &Frame) {
        self.display.push('\n');
        self.display.push_str(&format!("Frame {}\n", number));
        self.display.push_str("Roll 1:\n");
        self.display.push_str(&render_pins(frame.first_roll()));
        if frame.state() != FrameState::Strike {
            self.display.push_str("Roll 2:\n");
            self.display.push_str(&render_pins(frame.second_roll()));
        }
    }

    fn push_fill_display(&mut self, fill: &FillBalls) {
        for (i, roll) in fill.rolls.iter().enumerate() {
            self.display
                .push_str(&format!("Roll {}:\n", fill.first_roll_number() + i));
            self.display.push_str(&render_pins(roll));
        }
        self.display.push('\n');
    }

    pub fn graph(&self) -> &'g PinGraph {
        self.graph
    }

    /// One entry per frame, plus one for the fill balls if any.
    pub fn scorecard(&self) -> &[String] {
        &self.scorecard
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn frames(&self) -> &[FrameRecord] {
        &self.frames
    }

    pub fn fill_balls(&self) -> Option<&FillBalls> {
        self.fill.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
