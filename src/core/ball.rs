//! Ball - position, per-axis motion and the lives counter
//!
//! Each axis has its own delay: the number of ticks the ball waits before
//! stepping one cell along that axis. Both axes count down independently on
//! every tick, so a ball with `y_delay = 3` and `x_delay = 1` travels three
//! columns for every row.

use rand::Rng;

use super::court::Court;

/// Upper bound (exclusive) for the vertical delay.
/// The horizontal delay is drawn below half of it so the ball crosses the
/// usually wider-than-tall court at a comparable pace.
pub const MAX_DELAY: i32 = 10;

/// Where the ball was before a step that moved it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub from: (i32, i32),
    pub to: (i32, i32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ball {
    x: i32,
    y: i32,
    x_dir: i32,
    y_dir: i32,
    x_delay: i32,
    y_delay: i32,
    x_count: i32,
    y_count: i32,
    lives: u32,
}

impl Ball {
    /// A ball not yet in play, holding `lives` serves.
    pub fn new(lives: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            x_dir: 1,
            y_dir: 1,
            x_delay: 1,
            y_delay: 1,
            x_count: 1,
            y_count: 1,
            lives,
        }
    }

    /// Put the ball back in play at a random spot with a random heading and
    /// speed. Consumes one life.
    pub fn reinitialize<R: Rng>(&mut self, court: &Court, rng: &mut R) {
        self.y = random_between(rng, court.top() + 1, court.bottom() - 1);
        self.x = random_between(rng, court.left() + 1, court.right() - 1);

        self.y_dir = random_dir(rng);
        self.x_dir = random_dir(rng);

        self.y_delay = random_between(rng, 1, MAX_DELAY);
        self.y_count = self.y_delay;
        self.x_delay = random_between(rng, 1, MAX_DELAY / 2);
        self.x_count = self.x_delay;

        self.lives = self.lives.saturating_sub(1);
    }

    /// Count down both axes by one tick, stepping each axis whose counter runs
    /// out. Returns the step taken, if any.
    pub fn advance(&mut self) -> Option<Step> {
        let from = (self.x, self.y);
        let mut moved = false;

        self.y_count -= 1;
        if self.y_count <= 0 {
            self.y += self.y_dir;
            self.y_count = self.y_delay;
            moved = true;
        }

        self.x_count -= 1;
        if self.x_count <= 0 {
            self.x += self.x_dir;
            self.x_count = self.x_delay;
            moved = true;
        }

        moved.then_some(Step {
            from,
            to: (self.x, self.y),
        })
    }

    /// Pick fresh delays after a paddle return. Running counters keep
    /// counting but never exceed the new delay.
    pub(crate) fn redraw_delays<R: Rng>(&mut self, rng: &mut R) {
        self.x_delay = random_between(rng, 1, MAX_DELAY / 2);
        self.y_delay = random_between(rng, 1, MAX_DELAY);
        self.x_count = self.x_count.min(self.x_delay);
        self.y_count = self.y_count.min(self.y_delay);
    }

    pub(crate) fn set_x_dir(&mut self, dir: i32) {
        self.x_dir = dir;
    }

    pub(crate) fn set_y_dir(&mut self, dir: i32) {
        self.y_dir = dir;
    }

    #[cfg(test)]
    pub(crate) fn x(&self) -> i32 {
        self.x
    }

    #[cfg(test)]
    pub(crate) fn y(&self) -> i32 {
        self.y
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn x_dir(&self) -> i32 {
        self.x_dir
    }

    pub fn y_dir(&self) -> i32 {
        self.y_dir
    }

    pub fn x_delay(&self) -> i32 {
        self.x_delay
    }

    pub fn y_delay(&self) -> i32 {
        self.y_delay
    }

    #[cfg(test)]
    pub(crate) fn x_count(&self) -> i32 {
        self.x_count
    }

    #[cfg(test)]
    pub(crate) fn y_count(&self) -> i32 {
        self.y_count
    }

    pub fn lives_remaining(&self) -> u32 {
        self.lives
    }

    /// Place the ball with an explicit heading. Counters restart at the delays.
    #[cfg(test)]
    pub(crate) fn set_motion(&mut self, pos: (i32, i32), dir: (i32, i32), delay: (i32, i32)) {
        self.x = pos.0;
        self.y = pos.1;
        self.x_dir = dir.0;
        self.y_dir = dir.1;
        self.x_delay = delay.0;
        self.y_delay = delay.1;
        self.x_count = delay.0;
        self.y_count = delay.1;
    }
}

/// Uniform integer in `[min, max)`.
fn random_between<R: Rng>(rng: &mut R, min: i32, max: i32) -> i32 {
    if max <= min {
        return min;
    }
    rng.random_range(min..max)
}

fn random_dir<R: Rng>(rng: &mut R) -> i32 {
    if rng.random_range(0..2) == 0 {
        -1
    } else {
        1
    }
}
