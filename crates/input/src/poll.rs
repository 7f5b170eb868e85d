//! Terminal-backed input source.

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use grid_arcade_engine::{Command, InputPoll};

use crate::map::map_key;

/// Reads key presses from the controlling terminal.
///
/// Expects raw mode to be enabled by the renderer. Non-key events such as
/// resizes end the wait early with `Ok(None)`; the session simply polls again.
#[derive(Debug, Default)]
pub struct TerminalInput {
    _private: (),
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputPoll for TerminalInput {
    fn poll(&mut self, timeout: Duration) -> Result<Option<Command>> {
        if !event::poll(timeout).context("failed to poll terminal events")? {
            return Ok(None);
        }
        match event::read().context("failed to read terminal event")? {
            Event::Key(key) => Ok(map_key(key)),
            _ => Ok(None),
        }
    }
}
