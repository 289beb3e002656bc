//! Court - the playable rectangle

/// Blank cells kept between the terminal edge and the court on every side.
pub const BORDER: i32 = 3;

/// Playable coordinate space, fixed for the lifetime of a game.
///
/// The edges are the wall rows/columns themselves; the ball travels strictly
/// inside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Court {
    top: i32,
    right: i32,
    bottom: i32,
    left: i32,
}

impl Court {
    /// Create a court from its four edges.
    ///
    /// The caller guarantees `top < bottom` and `left < right`.
    pub fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        debug_assert!(top < bottom && left < right, "degenerate court");
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Build the court for a terminal of `cols` x `rows` cells.
    pub fn for_screen(cols: u16, rows: u16) -> Self {
        let cols = i32::from(cols);
        let rows = i32::from(rows);
        Self::new(BORDER, cols - BORDER - 1, rows - BORDER - 1, BORDER)
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn right(&self) -> i32 {
        self.right
    }

    pub fn bottom(&self) -> i32 {
        self.bottom
    }

    pub fn left(&self) -> i32 {
        self.left
    }

    /// Whether `(x, y)` lies in the band the ball may occupy before a
    /// collision check.
    pub fn holds(&self, x: i32, y: i32) -> bool {
        x > self.left && x < self.right && y > self.top && y < self.bottom
    }
}
