//! Scorecard table and plain-text report.
//!
//! This module is pure (no I/O).

use crate::core::Game;
use crate::types::FRAME_COUNT;

/// Format scorecard entries as the two-row, tab-separated table.
///
/// The tenth-frame entry and the fill-ball entry share a column, joined by a
/// space. Runs of three spaces and then runs of two spaces are squeezed to
/// one, so padded entries such as `"X  "` line up under the tabs.
pub fn format_scorecard(entries: &[String]) -> String {
    let mut card = String::from("Scorecard:\nFrame:\t");
    for frame in 1..=FRAME_COUNT {
        card.push_str(&format!("{}\t", frame));
    }

    card.push_str("\nScore:\t");
    for entry in entries.iter().take(FRAME_COUNT - 1) {
        card.push_str(entry);
        card.push('\t');
    }
    if let Some(tenth) = entries.get(FRAME_COUNT - 1) {
        card.push_str(tenth);
        card.push(' ');
    }
    if let Some(fill) = entries.get(FRAME_COUNT) {
        card.push_str(fill);
    }
    card.push('\n');

    card.replace("   ", " ").replace("  ", " ")
}

/// Full plain-text report: display log, scorecard table, final score.
pub fn format_report(game: &Game<'_>) -> String {
    let mut out = String::with_capacity(game.display().len() + 256);
    out.push_str(game.display());
    out.push('\n');
    out.push_str(&format_scorecard(game.scorecard()));
    out.push('\n');
    out.push_str(&format!("Final score: {}\n", game.total_score()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConstantSource;

    fn entries(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn header_row_lists_ten_frames() {
        let card = format_scorecard(&[]);
        assert!(card.starts_with("Scorecard:\nFrame:\t1\t2\t3\t4\t5\t6\t7\t8\t9\t10\t\nScore:\t"));
    }

    #[test]
    fn open_game_card() {
        let card = format_scorecard(&entries(&["0 0"; 10]));
        assert!(card.ends_with("Score:\t0 0\t0 0\t0 0\t0 0\t0 0\t0 0\t0 0\t0 0\t0 0\t0 0 \n"));
    }

    #[test]
    fn perfect_game_card_squeezes_padding() {
        let mut items = vec!["X  "; 10];
        items.push("X X");
        let card = format_scorecard(&entries(&items));
        assert!(card.ends_with("Score:\tX \tX \tX \tX \tX \tX \tX \tX \tX \tX X X\n"));
    }

    #[test]
    fn spare_fill_card() {
        let mut items = vec!["7 2"; 9];
        items.push("6 /");
        items.push("4  ");
        let card = format_scorecard(&entries(&items));
        assert!(card.ends_with("\t7 2\t6 / 4 \n"));
    }

    #[test]
    fn report_sections() {
        let mut game = Game::new();
        game.run(&mut ConstantSource(0.99)).unwrap();
        let report = format_report(&game);

        assert!(report.starts_with("\nFrame 1\nRoll 1:\n"));
        assert!(report.contains("\nScorecard:\nFrame:\t1\t"));
        assert!(report.ends_with("\nFinal score: 0\n"));
    }
}
