//! Display functions for the line-based game mode

use super::formatters::{KEYBOARD_ROWS, feedback_row, letter_state_rgb};
use crate::core::{KeyboardState, WORD_LEN};
use crate::game::{Game, GameStatus, MAX_TRIES};
use colored::Colorize;
use std::io::{self, Write};

/// Print every submitted row followed by placeholders for the remaining attempts
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_board<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    writeln!(out)?;
    for record in game.guesses() {
        writeln!(out, "  {}", feedback_row(&record.word, &record.feedback))?;
    }
    for _ in game.row()..MAX_TRIES {
        writeln!(out, "  {}", " _ ".repeat(WORD_LEN).bright_black())?;
    }
    writeln!(out)
}

/// Print the keyboard with each key coloured by its best-known state
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_keyboard<W: Write>(out: &mut W, keyboard: &KeyboardState) -> io::Result<()> {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        write!(out, "{}", " ".repeat(indent * 2 + 2))?;
        for letter in row.chars() {
            let key = format!("{letter} ");
            match letter_state_rgb(keyboard.get(letter)) {
                Some((r, g, b)) => write!(out, "{}", key.white().on_truecolor(r, g, b))?,
                None => write!(out, "{key}")?,
            }
        }
        writeln!(out)?;
    }
    writeln!(out)
}

/// Print the end-of-game banner with a shareable emoji grid
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_game_over<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    let status = game.status();
    let (Some(headline), Some(prompt)) = (status.headline(), status.prompt(game.answer())) else {
        return Ok(());
    };

    writeln!(out, "{}", "═".repeat(40).bright_cyan())?;
    if matches!(status, GameStatus::Won(_)) {
        writeln!(out, "  {}", headline.bright_green().bold())?;
    } else {
        writeln!(out, "  {}", headline.bright_red().bold())?;
    }
    for line in prompt.lines() {
        writeln!(out, "  {line}")?;
    }

    let score = match status {
        GameStatus::Won(attempts) => attempts.to_string(),
        _ => "X".to_string(),
    };
    writeln!(out)?;
    writeln!(out, "  Wordle {score}/{MAX_TRIES}")?;
    for record in game.guesses() {
        writeln!(out, "  {}", record.feedback.to_emoji())?;
    }
    writeln!(out, "{}", "═".repeat(40).bright_cyan())
}
