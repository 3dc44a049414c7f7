//! Terminal output formatting
//!
//! Coloured tiles and keyboard rows for the line-based mode, plus the shared palette.

pub mod display;
pub mod formatters;

pub use display::{write_board, write_game_over, write_keyboard};
