//! Formatting utilities for terminal output

use crate::core::{Classification, Feedback, LetterState, Word};
use colored::{ColoredString, Colorize};

/// Keyboard rows as laid out on screen
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Color of an evaluated tile as an RGB triple
#[must_use]
pub const fn classification_rgb(classification: Classification) -> (u8, u8, u8) {
    match classification {
        Classification::Correct => (0x53, 0x8d, 0x4e),
        Classification::Present => (0xb5, 0x9f, 0x3b),
        Classification::Absent => (0x3a, 0x3a, 0x3c),
    }
}

/// Color of a keyboard key as an RGB triple; unknown keys have no fill
#[must_use]
pub const fn letter_state_rgb(state: LetterState) -> Option<(u8, u8, u8)> {
    match state {
        LetterState::Unknown => None,
        LetterState::Absent => Some(classification_rgb(Classification::Absent)),
        LetterState::Present => Some(classification_rgb(Classification::Present)),
        LetterState::Correct => Some(classification_rgb(Classification::Correct)),
    }
}

/// One letter rendered as a coloured tile, e.g. " C "
#[must_use]
pub fn tile(letter: char, classification: Classification) -> ColoredString {
    let (r, g, b) = classification_rgb(classification);
    format!(" {letter} ").white().bold().on_truecolor(r, g, b)
}

/// A scored guess rendered as coloured tiles
#[must_use]
pub fn feedback_row(word: &Word, feedback: &Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback.classifications())
        .map(|(letter, &c)| tile(letter, c).to_string())
        .collect()
}
