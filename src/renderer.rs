use log::{debug, warn};

use crate::glyph;
use crate::grid::{Command, CommandSink, Launchpad};

pub struct DigitRenderer;

impl DigitRenderer {
    pub const VELOCITY: u8 = 5;

    /// Lights the pads for `digits`, left to right.
    ///
    /// Only lit pixels are sent, so the grid should be cleared first.
    /// Characters without a glyph draw nothing but still take up a slot.
    pub fn draw(&self, digits: &str, sink: &mut impl CommandSink) {
        let width = digits.chars().count();
        if width > Launchpad::MAX_DIGITS {
            warn!(
                "{:?} is {} characters wide, only {} fit on the grid",
                digits,
                width,
                Launchpad::MAX_DIGITS
            );
        }

        for (digit_index, character) in digits.chars().enumerate() {
            let pattern = match glyph::lookup(character) {
                Some(pattern) => pattern,
                None => {
                    debug!("no glyph for {:?}, skipping", character);
                    continue;
                }
            };

            for (row, col) in glyph::lit_cells(pattern) {
                let note = Launchpad::note_for(row, col, digit_index);
                sink.send(Command::on(note, Self::VELOCITY));
            }
        }
    }
}
