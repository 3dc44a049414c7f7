//! Command implementations

pub mod simple;

pub use simple::{play_session, run_simple};
