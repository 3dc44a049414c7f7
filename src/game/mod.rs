//! Game state and rules
//!
//! A `Game` is an explicit value owned by whichever front end is running. Front
//! ends feed it key actions and render whatever it reports back.

mod state;
mod status;

pub use state::{Game, GuessError, GuessRecord, Submission};
pub use status::{GameStatus, MAX_TRIES};
