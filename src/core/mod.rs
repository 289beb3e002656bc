//! Core game simulation.
//!
//! This module contains everything that runs independent of the terminal:
//!
//! - **court**: the playable rectangle
//! - **clock**: elapsed play time
//! - **paddle**: the player's bounded vertical bat
//! - **ball**: per-axis ball motion and the lives counter
//! - **collision**: wall/paddle checks
//! - **game**: serve / lose / game-over transitions
//! - **session**: event loop multiplexing the timer and keyboard input
//!
//! # Architecture
//!
//! ```text
//! session::run
//! ├── Ticker (fixed-period timer)  ──▶ Game::tick
//! ├── InputSource (keyboard)       ──▶ Game::paddle_up / paddle_down
//! └── Game
//!     ├── Court, Clock, Paddle, Ball
//!     └── collision::evaluate
//! ```

pub mod ball;
pub mod clock;
pub mod collision;
pub mod court;
pub mod game;
pub mod paddle;
pub mod screen;
pub mod session;

pub use court::Court;
pub use game::{Game, GameSettings};
pub use screen::Screen;
pub use session::{Command, InputSource};
