//! Wordle TUI - CLI
//!
//! Play Wordle in the terminal, either in the full-screen TUI or a simple prompt mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use wordle_tui::{
    commands::run_simple,
    interactive::{App, Settings, run_tui},
    wordlists::WordLists,
};

#[derive(Parser)]
#[command(
    name = "wordle_tui",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Newline-delimited answer list (default: built-in list)
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Newline-delimited list of allowed guesses (default: built-in list)
    #[arg(long, global = true)]
    allowed: Option<PathBuf>,

    /// Seed for choosing answers, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let lists = WordLists::load(cli.answers.as_deref(), cli.allowed.as_deref())
        .context("could not load word lists")?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let app = App::new(&lists, Settings::new(&lists, cli.seed), rng);
            run_tui(app)
        }
        Commands::Simple => run_simple(&lists, &mut rng),
    }
}
