//! Styled report output.
//!
//! Colour is applied with crossterm commands queued into a byte buffer,
//! then flushed to the writer in one go.

use std::io::Write;

use anyhow::Result;
use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::core::Game;
use crate::scorecard::format_report;

const DOWN_COLOR: Color = Color::Red;
const STANDING_COLOR: Color = Color::White;

/// Write the text report, coloured if `color` is set.
pub fn write_report<W: Write>(out: &mut W, game: &Game<'_>, color: bool) -> Result<()> {
    let text = format_report(game);
    if !color {
        out.write_all(text.as_bytes())?;
        out.flush()?;
        return Ok(());
    }

    let mut buf = Vec::with_capacity(text.len() * 4);
    encode_report_into(&text, &mut buf)?;
    out.write_all(&buf)?;
    out.flush()?;
    Ok(())
}

/// Queue styled output for a plain-text report into `out`.
///
/// Pin diagram rows get per-pin colours; frame and score headings are bold.
pub fn encode_report_into(text: &str, out: &mut Vec<u8>) -> Result<()> {
    for line in text.split_inclusive('\n') {
        let body = line.trim_end_matches('\n');
        if is_pin_row(body) {
            for ch in body.chars() {
                match ch {
                    'x' => {
                        out.queue(SetForegroundColor(DOWN_COLOR))?;
                    }
                    'o' => {
                        out.queue(SetForegroundColor(STANDING_COLOR))?;
                    }
                    _ => {}
                }
                out.queue(Print(ch))?;
            }
            out.queue(ResetColor)?;
            out.queue(Print(&line[body.len()..]))?;
        } else if body.starts_with("Frame ") || body.starts_with("Final score") {
            out.queue(SetAttribute(Attribute::Bold))?;
            out.queue(Print(body))?;
            out.queue(SetAttribute(Attribute::Reset))?;
            out.queue(Print(&line[body.len()..]))?;
        } else {
            out.queue(Print(line))?;
        }
    }
    Ok(())
}

fn is_pin_row(line: &str) -> bool {
    line.chars().any(|c| c == 'x' || c == 'o') && line.chars().all(|c| matches!(c, 'x' | 'o' | ' '))
}
