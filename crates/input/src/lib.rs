//! Terminal input (engine-facing).
//!
//! Maps `crossterm` key events to session [`Command`]s and exposes the
//! terminal as an [`InputPoll`] source for the session loop.

pub mod map;
pub mod poll;

pub use grid_arcade_types as types;

pub use grid_arcade_engine::{Command, InputPoll};
pub use map::{map_key, should_quit};
pub use poll::TerminalInput;
