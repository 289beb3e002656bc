//! Keyboard input from the terminal

use std::time::Duration;

use crossterm::event::{self, Event};
use tracing::warn;

use super::keymapper::KeyMapper;
use crate::core::{Command, InputSource};
use crate::error::{GameError, Result};

/// Reads crossterm events and maps them to commands
pub struct TerminalInput {
    mapper: KeyMapper,
}

impl TerminalInput {
    pub fn new(mapper: KeyMapper) -> Self {
        Self { mapper }
    }
}

impl InputSource for TerminalInput {
    fn next_command(&mut self, timeout: Duration) -> Result<Option<Command>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key_event) => Ok(self.mapper.map(&key_event)),
            Event::Resize(cols, rows) => {
                warn!("Terminal resized to {}x{} during play", cols, rows);
                Err(GameError::Resized)
            }
            _ => Ok(None),
        }
    }
}
