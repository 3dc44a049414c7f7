//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one guess per line.

use crate::game::Game;
use crate::output::{write_board, write_game_over, write_keyboard};
use crate::wordlists::WordLists;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: Rng + ?Sized>(lists: &WordLists, rng: &mut R) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_session(lists, rng, &mut stdin.lock(), &mut stdout.lock())
}

/// Play games reading guesses from `input` until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_session<R, I, O>(
    lists: &WordLists,
    rng: &mut R,
    input: &mut I,
    out: &mut O,
) -> Result<()>
where
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════╗")?;
    writeln!(out, "║            W O R D L E               ║")?;
    writeln!(out, "╚══════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the word in six tries. Type a guess and press Enter.")?;
    writeln!(out, "Commands: 'new' for a new game, 'quit' to exit\n")?;

    let mut game = Game::start(lists, rng);
    write_board(out, &game)?;

    loop {
        let prompt = format!("Guess ({} left)", game.attempts_left());
        let Some(line) = get_user_input(input, out, &prompt)? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "new" => {
                game = Game::start(lists, rng);
                writeln!(out, "\n🔄 New game started!")?;
                write_board(out, &game)?;
                continue;
            }
            _ => {}
        }

        while game.remove_letter().is_some() {}
        for letter in line.chars() {
            game.enter_letter(letter);
        }

        if let Err(e) = game.submit(lists) {
            writeln!(out, "{}\n", e.to_string().red().bold())?;
            continue;
        }

        write_board(out, &game)?;
        write_keyboard(out, game.keyboard())?;

        if game.status().is_over() {
            write_game_over(out, &game)?;

            let again = get_user_input(input, out, "Play again? (yes/no)")?;
            if matches!(again.as_deref().map(str::to_lowercase).as_deref(), Some("yes" | "y")) {
                game = Game::start(lists, rng);
                writeln!(out, "\n🔄 New game started!")?;
                write_board(out, &game)?;
            } else {
                break;
            }
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input<I: BufRead, O: Write>(
    input: &mut I,
    out: &mut O,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
