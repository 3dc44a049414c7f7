//! Keyboard state: the best classification seen for each letter

use super::classification::{Classification, Feedback};
use super::word::Word;

/// Best-known state of one alphabet letter
///
/// Ordered so that folding with `max` implements the highlight precedence
/// Correct > Present > Absent > Unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterState {
    #[default]
    Unknown,
    Absent,
    Present,
    Correct,
}

impl From<Classification> for LetterState {
    fn from(classification: Classification) -> Self {
        match classification {
            Classification::Absent => Self::Absent,
            Classification::Present => Self::Present,
            Classification::Correct => Self::Correct,
        }
    }
}

/// Per-letter highlight state for A-Z
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: [LetterState; 26],
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a scored guess into the keyboard; letters are never downgraded
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &classification) in guess.chars().iter().zip(feedback.classifications()) {
            if let Some(slot) = Self::index(letter).map(|i| &mut self.letters[i]) {
                *slot = (*slot).max(classification.into());
            }
        }
    }

    /// State of a letter (either case); non-letters are always Unknown
    #[must_use]
    pub fn get(&self, letter: char) -> LetterState {
        u8::try_from(letter)
            .ok()
            .and_then(Self::index)
            .map_or(LetterState::Unknown, |i| self.letters[i])
    }

    fn index(letter: u8) -> Option<usize> {
        letter
            .is_ascii_alphabetic()
            .then(|| usize::from(letter.to_ascii_uppercase() - b'A'))
    }
}
