//! Core domain types for Wordle
//!
//! Words, the guess evaluator, and the keyboard highlight state. Everything here
//! is pure and independent of any front end.

mod classification;
mod keyboard;
mod word;

pub use classification::{Classification, Feedback};
pub use keyboard::{KeyboardState, LetterState};
pub use word::{WORD_LEN, Word, WordError};
