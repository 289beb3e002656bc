//! Key mapping for player input
//!
//! Converts key events to game commands according to the configured bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tracing::warn;

use crate::config::{parse_key, KeyConfig};
use crate::core::Command;

/// Key mapper for converting key events to commands
#[derive(Debug, Clone)]
pub struct KeyMapper {
    up: Vec<KeyCode>,
    down: Vec<KeyCode>,
    quit: Vec<KeyCode>,
}

impl Default for KeyMapper {
    fn default() -> Self {
        Self::from_config(&KeyConfig::default())
    }
}

impl KeyMapper {
    /// Build a mapper from the configured bindings. Unknown key names are
    /// logged and skipped.
    pub fn from_config(keys: &KeyConfig) -> Self {
        Self {
            up: Self::parse_all("up", &keys.up),
            down: Self::parse_all("down", &keys.down),
            quit: Self::parse_all("quit", &keys.quit),
        }
    }

    fn parse_all(action: &str, names: &[String]) -> Vec<KeyCode> {
        names
            .iter()
            .filter_map(|name| {
                let code = parse_key(name);
                if code.is_none() {
                    warn!("Unknown key {:?} bound to {}", name, action);
                }
                code
            })
            .collect()
    }

    /// Map a crossterm KeyEvent to a command. Key releases are ignored;
    /// auto-repeat keeps the paddle moving while a key is held.
    pub fn map(&self, event: &KeyEvent) -> Option<Command> {
        if event.kind == KeyEventKind::Release {
            return None;
        }

        // Quit wins if a key is bound twice
        if self.quit.contains(&event.code) {
            Some(Command::Quit)
        } else if self.up.contains(&event.code) {
            Some(Command::PaddleUp)
        } else if self.down.contains(&event.code) {
            Some(Command::PaddleDown)
        } else {
            None
        }
    }
}
