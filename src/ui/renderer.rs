//! Terminal renderer using crossterm
//!
//! Draws the court, the pieces and the status line, and restores the
//! terminal on cleanup or drop.

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{
        self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use unicode_width::UnicodeWidthStr;

use crate::config::ColorScheme;
use crate::core::{Court, Screen};
use crate::error::{GameError, Result};

/// Smallest terminal the game runs in
pub const MIN_COLS: u16 = 40;
pub const MIN_ROWS: u16 = 11;

const ROW_SYMBOL: char = '-';
const COL_SYMBOL: char = '|';

/// Lives line, drawn above the court's left edge
pub fn lives_text(lives: u32) -> String {
    format!("BALLS LEFT: {:2}", lives)
}

/// Clock line, drawn above the court's right edge
pub fn time_text(minutes: u32, seconds: u32) -> String {
    format!("TOTAL TIME: {:02}:{:02}", minutes, seconds)
}

/// Final message
pub fn banner_text(minutes: u32, seconds: u32) -> String {
    format!("You lasted {:02}:{:02}", minutes, seconds)
}

/// Column where `text` must start to end just before `right`
pub fn right_aligned(text: &str, right: i32) -> i32 {
    right - text.width() as i32
}

/// (row, col) that centers `text` on a `cols` x `rows` screen
pub fn centered(text: &str, cols: u16, rows: u16) -> (i32, i32) {
    let row = i32::from(rows) / 2;
    let col = i32::from(cols) / 2 - text.width() as i32 / 2;
    (row, col.max(0))
}

/// Convert a game cell to a crossterm position, skipping off-screen cells
fn position(row: i32, col: i32) -> Option<(u16, u16)> {
    let col = u16::try_from(col).ok()?;
    let row = u16::try_from(row).ok()?;
    Some((col, row))
}

/// Terminal renderer
pub struct Renderer {
    out: BufWriter<Stdout>,
    scheme: ColorScheme,
    /// Court the status line is laid out against
    court: Option<Court>,
    /// Whether the terminal has been initialized
    initialized: bool,
    /// First write error since the last flush
    error: Option<io::Error>,
}

impl Renderer {
    pub fn with_color_scheme(scheme: ColorScheme) -> Self {
        Self {
            out: BufWriter::with_capacity(16384, io::stdout()),
            scheme,
            court: None,
            initialized: false,
            error: None,
        }
    }

    /// Get terminal size
    pub fn size() -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Query the playable rectangle for the current terminal. Returns the
    /// court and the terminal's row count.
    pub fn playable_court() -> Result<(Court, u16)> {
        let (cols, rows) = Self::size()?;
        if cols < MIN_COLS || rows < MIN_ROWS {
            return Err(GameError::TerminalTooSmall {
                cols,
                rows,
                min_cols: MIN_COLS,
                min_rows: MIN_ROWS,
            });
        }
        Ok((Court::for_screen(cols, rows), rows))
    }

    /// Initialize the terminal for rendering
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.initialized = true;

        execute!(
            self.out,
            EnterAlternateScreen,
            DisableLineWrap,
            Hide,
            Clear(ClearType::All),
            MoveTo(0, 0)
        )?;
        Ok(())
    }

    /// Cleanup the terminal
    pub fn cleanup(&mut self) -> io::Result<()> {
        if !self.initialized {
            return Ok(());
        }
        self.initialized = false;

        let _ = self.out.flush();
        let _ = execute!(
            self.out,
            ResetColor,
            SetAttribute(Attribute::Reset),
            Show,
            EnableLineWrap,
            LeaveAlternateScreen
        );

        terminal::disable_raw_mode()
    }

    /// Draw the walls: top and bottom rows, left column. The right side
    /// stays open for the paddle.
    pub fn draw_court(&mut self, court: &Court) -> io::Result<()> {
        self.court = Some(*court);
        let width = (court.right() - court.left() + 1).max(0) as usize;
        let row: String = std::iter::repeat(ROW_SYMBOL).take(width).collect();

        queue!(self.out, SetForegroundColor(self.scheme.border.to_crossterm()))?;
        for edge in [court.top(), court.bottom()] {
            if let Some((col, row_idx)) = position(edge, court.left()) {
                queue!(self.out, MoveTo(col, row_idx), Print(&row))?;
            }
        }
        for row_idx in (court.top() + 1)..court.bottom() {
            if let Some((col, row_idx)) = position(row_idx, court.left()) {
                queue!(self.out, MoveTo(col, row_idx), Print(COL_SYMBOL))?;
            }
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    /// Show the final time in reverse video, centered
    pub fn show_game_over(&mut self, minutes: u32, seconds: u32) -> io::Result<()> {
        let (cols, rows) = Self::size()?;
        let text = banner_text(minutes, seconds);
        let (row, col) = centered(&text, cols, rows);
        if let Some((col, row)) = position(row, col) {
            queue!(
                self.out,
                MoveTo(col, row),
                SetForegroundColor(self.scheme.banner.to_crossterm()),
                SetAttribute(Attribute::Reverse),
                Print(text),
                SetAttribute(Attribute::NoReverse),
                ResetColor
            )?;
        }
        self.out.flush()
    }

    fn print_at(&mut self, row: i32, col: i32, text: &str, color: crate::config::Color) {
        let Some((col, row)) = position(row, col) else {
            return;
        };
        let result = queue!(
            self.out,
            MoveTo(col, row),
            SetForegroundColor(color.to_crossterm()),
            Print(text),
            ResetColor
        );
        if let Err(e) = result {
            self.error.get_or_insert(e);
        }
    }
}

impl Screen for Renderer {
    fn draw_char(&mut self, row: i32, col: i32, symbol: char) {
        let mut buf = [0u8; 4];
        let piece = self.scheme.piece;
        self.print_at(row, col, symbol.encode_utf8(&mut buf), piece);
    }

    fn erase_cell(&mut self, row: i32, col: i32) {
        let piece = self.scheme.piece;
        self.print_at(row, col, " ", piece);
    }

    fn report_lives(&mut self, lives: u32) {
        let Some(court) = self.court else {
            return;
        };
        let status = self.scheme.status;
        self.print_at(court.top() - 1, court.left(), &lives_text(lives), status);
    }

    fn report_time(&mut self, minutes: u32, seconds: u32) {
        let Some(court) = self.court else {
            return;
        };
        let text = time_text(minutes, seconds);
        let status = self.scheme.status;
        self.print_at(court.top() - 1, right_aligned(&text, court.right()), &text, status);
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
