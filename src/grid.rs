//! Note addressing for the Launchpad's 8x8 pad surface.
//!
//! The device numbers pads row by row from the bottom: note `10 * y + x` with
//! `x` and `y` both running 1 to 8, so the bottom-left pad is 11 and the
//! top-right pad is 88.

const NOTE_ON: u8 = 0x90;

/// How a pad should be driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Lit(u8),
    Unlit,
}

impl CellState {
    pub fn velocity(self) -> u8 {
        match self {
            CellState::Lit(velocity) => velocity,
            CellState::Unlit => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub note: u8,
    pub state: CellState,
}

impl Command {
    pub fn on(note: u8, velocity: u8) -> Self {
        Self {
            note,
            state: CellState::Lit(velocity),
        }
    }

    pub fn off(note: u8) -> Self {
        Self {
            note,
            state: CellState::Unlit,
        }
    }

    /// Wire form. "Off" is a note on with velocity 0, which the Launchpad
    /// treats as unlit.
    pub fn to_midi(self) -> [u8; 3] {
        [NOTE_ON, self.note, self.state.velocity()]
    }
}

/// Anything that accepts pad commands: the MIDI connection, or a `Vec` in tests.
pub trait CommandSink {
    fn send(&mut self, command: Command);
}

impl CommandSink for Vec<Command> {
    fn send(&mut self, command: Command) {
        self.push(command);
    }
}

pub struct Launchpad;

impl Launchpad {
    pub const FIRST_NOTE: u8 = 11;
    pub const LAST_NOTE: u8 = 88;

    /// Note of the top-left pixel of the first glyph.
    pub const ORIGIN: u8 = 81;
    pub const ROW_STEP: u8 = 10;
    /// Horizontal advance per digit: three glyph columns and one blank column.
    pub const DIGIT_STRIDE: u8 = 4;
    /// Digits that fit across the surface before columns spill off the right edge.
    pub const MAX_DIGITS: usize = 2;

    /// Note for glyph pixel `(row, col)` of the digit at `digit_index`.
    ///
    /// No bounds checking: indices past `MAX_DIGITS` address notes outside
    /// the pad grid and the device ignores or misplaces them.
    pub fn note_for(row: usize, col: usize, digit_index: usize) -> u8 {
        let note = Self::ORIGIN as usize - row * Self::ROW_STEP as usize
            + col
            + digit_index * Self::DIGIT_STRIDE as usize;
        note as u8
    }

    /// Turns every pad off, lowest note first.
    pub fn clear(sink: &mut impl CommandSink) {
        for note in Self::FIRST_NOTE..=Self::LAST_NOTE {
            sink.send(Command::off(note));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn glyph_corners_land_on_expected_pads() {
        assert_eq!(Launchpad::note_for(0, 0, 0), 81);
        assert_eq!(Launchpad::note_for(0, 2, 0), 83);
        assert_eq!(Launchpad::note_for(4, 0, 0), 41);
        assert_eq!(Launchpad::note_for(4, 2, 1), 47);
        assert_eq!(Launchpad::note_for(0, 0, 1), 85);
    }

    #[test]
    fn in_capacity_notes_stay_on_the_surface() {
        for digit_index in 0..Launchpad::MAX_DIGITS {
            for row in 0..5 {
                for col in 0..3 {
                    let note = Launchpad::note_for(row, col, digit_index);
                    let (x, y) = (note % 10, note / 10);
                    assert!((1..=8).contains(&x) && (1..=8).contains(&y), "note {}", note);
                }
            }
        }
    }

    #[test]
    fn mapper_is_injective_within_capacity() {
        let mut seen = HashSet::new();
        for digit_index in 0..Launchpad::MAX_DIGITS {
            for row in 0..5 {
                for col in 0..3 {
                    assert!(seen.insert(Launchpad::note_for(row, col, digit_index)));
                }
            }
        }
        assert_eq!(seen.len(), 2 * 15);
    }

    #[test]
    fn clear_turns_off_every_note_once_in_order() {
        let mut sent = Vec::new();
        Launchpad::clear(&mut sent);

        assert_eq!(sent.len(), 78);
        assert!(sent.iter().all(|c| c.state == CellState::Unlit));
        let notes: Vec<u8> = sent.iter().map(|c| c.note).collect();
        let expected: Vec<u8> = (11..=88).collect();
        assert_eq!(notes, expected);
    }

    #[test]
    fn off_is_note_on_with_zero_velocity() {
        assert_eq!(Command::off(42).to_midi(), [0x90, 42, 0]);
        assert_eq!(Command::on(42, 5).to_midi(), [0x90, 42, 5]);
    }

    proptest! {
        #[test]
        fn distinct_pixels_get_distinct_notes(
            a in (0usize..5, 0usize..3, 0usize..2),
            b in (0usize..5, 0usize..3, 0usize..2),
        ) {
            prop_assume!(a != b);
            prop_assert_ne!(
                Launchpad::note_for(a.0, a.1, a.2),
                Launchpad::note_for(b.0, b.1, b.2)
            );
        }
    }
}
