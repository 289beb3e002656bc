//! Errors that end a game early

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Terminal must be a minimum of {min_cols}x{min_rows} (found {cols}x{rows}). Please resize and try again.")]
    TerminalTooSmall {
        cols: u16,
        rows: u16,
        min_cols: u16,
        min_rows: u16,
    },

    #[error("Please don't resize once the game has started.")]
    Resized,

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl GameError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            GameError::Resized => 3,
            GameError::TerminalTooSmall { .. } | GameError::Io(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
