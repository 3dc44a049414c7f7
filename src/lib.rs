//! Wordle TUI
//!
//! A terminal Wordle clone: guess the five-letter word in six tries.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_tui::core::{Classification, Feedback, Word};
//!
//! let guess = Word::new("speed").unwrap();
//! let answer = Word::new("erase").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &answer);
//! assert_eq!(feedback.count(Classification::Present), 3);
//! assert_eq!(feedback.to_string(), "Y-YY-");
//! ```

// Core domain types
pub mod core;

// Game state and rules
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
