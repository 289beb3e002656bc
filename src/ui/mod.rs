//! User interface rendering and input handling.
//!
//! - **renderer**: crossterm drawing surface for the court, pieces and status line
//! - **keymapper**: key events to game commands
//! - **input**: terminal event source feeding the session loop

pub mod input;
pub mod keymapper;
pub mod renderer;

pub use input::TerminalInput;
pub use keymapper::KeyMapper;
pub use renderer::Renderer;
