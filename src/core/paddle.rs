//! Paddle - the player's vertical bat on the open side of the court

use super::court::Court;

/// A vertical segment of cells in the court's right edge column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paddle {
    top: i32,
    bottom: i32,
    column: i32,
    min_top: i32,
    max_bottom: i32,
}

impl Paddle {
    /// Create a paddle one third of the court's height, centered on the
    /// screen's middle row.
    pub fn new(court: &Court, screen_rows: u16) -> Self {
        let court_height = court.bottom() - court.top() - 1;
        let height = (court_height / 3).max(1);
        let top = i32::from(screen_rows) / 2 - height / 2;

        Self {
            top,
            bottom: top + height - 1,
            column: court.right(),
            min_top: court.top(),
            max_bottom: court.bottom(),
        }
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn bottom(&self) -> i32 {
        self.bottom
    }

    pub fn column(&self) -> i32 {
        self.column
    }

    #[cfg(test)]
    pub(crate) fn height(&self) -> i32 {
        self.bottom - self.top + 1
    }

    /// Rows covered by the paddle, top to bottom
    pub fn rows(&self) -> std::ops::RangeInclusive<i32> {
        self.top..=self.bottom
    }

    /// Shift up one row unless that would touch the top wall.
    /// Returns whether the paddle moved.
    pub fn move_up(&mut self) -> bool {
        if self.top - 1 > self.min_top {
            self.top -= 1;
            self.bottom -= 1;
            true
        } else {
            false
        }
    }

    /// Shift down one row unless that would touch the bottom wall.
    /// Returns whether the paddle moved.
    pub fn move_down(&mut self) -> bool {
        if self.bottom + 1 < self.max_bottom {
            self.top += 1;
            self.bottom += 1;
            true
        } else {
            false
        }
    }

    /// Whether row `y` is covered by the paddle.
    pub fn contact(&self, y: i32) -> bool {
        self.top <= y && y <= self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> Paddle {
        Paddle::new(&Court::new(3, 76, 20, 3), 24)
    }

    #[test]
    fn test_initial_placement() {
        let paddle = standard();
        assert_eq!(paddle.top(), 10);
        assert_eq!(paddle.bottom(), 14);
        assert_eq!(paddle.column(), 76);
        assert_eq!(paddle.height(), 5);
    }

    #[test]
    fn test_minimum_height() {
        // 40x11 terminal: court rows 3..7 leave a 3 row interior
        let paddle = Paddle::new(&Court::for_screen(40, 11), 11);
        assert_eq!(paddle.height(), 1);
        assert_eq!(paddle.top(), 5);
    }

    #[test]
    fn test_move_up_clamps() {
        let mut paddle = standard();
        let height = paddle.height();
        while paddle.move_up() {}
        assert_eq!(paddle.top(), 4);

        // Repeated moves at the boundary change nothing
        let before = paddle.clone();
        assert!(!paddle.move_up());
        assert!(!paddle.move_up());
        assert_eq!(paddle, before);
        assert_eq!(paddle.height(), height);
    }

    #[test]
    fn test_move_down_clamps() {
        let mut paddle = standard();
        while paddle.move_down() {}
        assert_eq!(paddle.bottom(), 19);
        assert!(!paddle.move_down());
        assert_eq!(paddle.bottom(), 19);
        assert_eq!(paddle.height(), 5);
    }

    #[test]
    fn test_bounds_hold_under_any_sequence() {
        let mut paddle = standard();
        let moves = [true, true, false, true, true, true, true, true, false, false];
        for _ in 0..10 {
            for &up in &moves {
                if up {
                    paddle.move_up();
                } else {
                    paddle.move_down();
                }
                assert!(paddle.top() >= 3);
                assert!(paddle.bottom() <= 20);
                assert_eq!(paddle.height(), 5);
            }
        }
        for _ in 0..40 {
            paddle.move_down();
            assert!(paddle.bottom() <= 20);
        }
    }

    #[test]
    fn test_contact_is_closed_interval() {
        let paddle = standard();
        assert!(!paddle.contact(9));
        assert!(paddle.contact(10));
        assert!(paddle.contact(12));
        assert!(paddle.contact(14));
        assert!(!paddle.contact(15));
        assert!(!paddle.contact(-1));
    }
}
