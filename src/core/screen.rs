//! Drawing surface used by the game
//!
//! The simulation never reads cells back; it only tells the surface what
//! changed. Calls are fire-and-forget, and a surface that buffers output
//! reports write failures from [`Screen::flush`].

use std::io;

pub trait Screen {
    /// Draw `symbol` at (`row`, `col`)
    fn draw_char(&mut self, row: i32, col: i32, symbol: char);

    /// Blank the cell at (`row`, `col`)
    fn erase_cell(&mut self, row: i32, col: i32);

    /// Show how many serves are left
    fn report_lives(&mut self, lives: u32);

    /// Show elapsed play time
    fn report_time(&mut self, minutes: u32, seconds: u32);

    /// Push pending output to the terminal
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// In-memory screen for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingScreen {
    pub cells: std::collections::HashMap<(i32, i32), char>,
    pub lives: Vec<u32>,
    pub times: Vec<(u32, u32)>,
    pub flushes: usize,
}

#[cfg(test)]
impl RecordingScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Symbol drawn at (`row`, `col`), if any
    pub fn at(&self, row: i32, col: i32) -> Option<char> {
        self.cells.get(&(row, col)).copied()
    }

    /// Number of cells currently showing `symbol`
    pub fn count(&self, symbol: char) -> usize {
        self.cells.values().filter(|&&c| c == symbol).count()
    }
}

#[cfg(test)]
impl Screen for RecordingScreen {
    fn draw_char(&mut self, row: i32, col: i32, symbol: char) {
        self.cells.insert((row, col), symbol);
    }

    fn erase_cell(&mut self, row: i32, col: i32) {
        self.cells.remove(&(row, col));
    }

    fn report_lives(&mut self, lives: u32) {
        self.lives.push(lives);
    }

    fn report_time(&mut self, minutes: u32, seconds: u32) {
        self.times.push((minutes, seconds));
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
