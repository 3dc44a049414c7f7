//! Interactive TUI interface
//!
//! `App` holds the game between key events; `rendering` draws it.

mod app;
mod rendering;

pub use app::{App, Screen, Settings, TOAST_DURATION, Toast, run_tui};
pub use rendering::{KeyCap, key_at, ui};
