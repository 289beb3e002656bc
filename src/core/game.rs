//! Game - one court, one paddle, one ball and the round state machine
//!
//! ```text
//! Serving ──serve──▶ InPlay ──lose, lives left──▶ Serving
//!                       │
//!                       └──lose, no lives left──▶ GameOver
//! ```
//!
//! `GameOver` is terminal: ticks and paddle moves are ignored from then on.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use tracing::{debug, error, info};

use super::ball::Ball;
use super::clock::Clock;
use super::collision::{self, Contact};
use super::court::Court;
use super::paddle::Paddle;
use super::screen::Screen;

/// Round state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Serving,
    InPlay,
    GameOver,
}

/// Fixed parameters for one game
#[derive(Debug, Clone)]
pub struct GameSettings {
    /// Serves available before the game ends
    pub lives: u32,
    /// Timer rate; the ball's delays are counted in these ticks
    pub ticks_per_second: u32,
    pub ball_symbol: char,
    pub paddle_symbol: char,
    /// Seed for serve positions, headings and speeds
    pub seed: u64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            lives: 3,
            ticks_per_second: 50,
            ball_symbol: 'O',
            paddle_symbol: '#',
            seed: 0,
        }
    }
}

pub struct Game {
    court: Court,
    clock: Clock,
    paddle: Paddle,
    ball: Ball,
    rng: Pcg32,
    phase: Phase,
    ball_symbol: char,
    paddle_symbol: char,
    /// Set once the current ball has been reported outside the court
    stray_reported: bool,
}

impl Game {
    /// Set up a game on `court` for a terminal `screen_rows` tall.
    pub fn new(settings: &GameSettings, court: Court, screen_rows: u16) -> Self {
        Self {
            clock: Clock::new(settings.ticks_per_second),
            paddle: Paddle::new(&court, screen_rows),
            ball: Ball::new(settings.lives),
            rng: Pcg32::seed_from_u64(settings.seed),
            phase: Phase::Serving,
            ball_symbol: settings.ball_symbol,
            paddle_symbol: settings.paddle_symbol,
            stray_reported: false,
            court,
        }
    }

    /// Draw the paddle and the clock, then serve the first ball.
    pub fn start<S: Screen + ?Sized>(&mut self, screen: &mut S) {
        self.clock.reset();
        for row in self.paddle.rows() {
            screen.draw_char(row, self.paddle.column(), self.paddle_symbol);
        }
        screen.report_time(self.clock.minutes(), self.clock.seconds());
        self.serve(screen);
    }

    /// Put a fresh ball in play. Uses up one life.
    pub fn serve<S: Screen + ?Sized>(&mut self, screen: &mut S) {
        self.phase = Phase::Serving;
        self.ball.reinitialize(&self.court, &mut self.rng);
        self.stray_reported = false;

        // A serve on a wall-adjacent cell must already be heading away from
        // that wall. The serve range excludes the paddle column, so this can
        // only bounce.
        collision::evaluate(&mut self.ball, &self.paddle, &self.court, &mut self.rng);

        let (x, y) = self.ball.position();
        screen.draw_char(y, x, self.ball_symbol);
        screen.report_lives(self.ball.lives_remaining());

        info!(
            "Serve at ({}, {}) dir=({}, {}) delay=({}, {}), {} left",
            x,
            y,
            self.ball.x_dir(),
            self.ball.y_dir(),
            self.ball.x_delay(),
            self.ball.y_delay(),
            self.ball.lives_remaining()
        );
        self.phase = Phase::InPlay;
    }

    /// Check for collisions after the ball or the paddle moved, and start the
    /// next round or end the game on a miss.
    pub fn after_move<S: Screen + ?Sized>(&mut self, screen: &mut S) -> Contact {
        if self.phase != Phase::InPlay {
            return Contact::None;
        }

        self.report_stray();
        let contact = collision::evaluate(&mut self.ball, &self.paddle, &self.court, &mut self.rng);
        match contact {
            Contact::Lose => {
                let (x, y) = self.ball.position();
                screen.erase_cell(y, x);

                if self.ball.lives_remaining() > 0 {
                    info!("Ball lost at row {}, serving again", y);
                    self.serve(screen);
                } else {
                    info!(
                        "Last ball lost at row {} after {:02}:{:02} ({} ticks)",
                        y,
                        self.clock.minutes(),
                        self.clock.seconds(),
                        self.clock.total_ticks()
                    );
                    self.phase = Phase::GameOver;
                }
            }
            Contact::Bounce => {
                debug!(
                    "Bounce at {:?} dir=({}, {})",
                    self.ball.position(),
                    self.ball.x_dir(),
                    self.ball.y_dir()
                );
            }
            Contact::None => {}
        }
        contact
    }

    /// Log a ball outside the court once per serve. Returns whether it logged.
    fn report_stray(&mut self) -> bool {
        let (x, y) = self.ball.position();
        if self.stray_reported || self.court.holds(x, y) {
            return false;
        }
        error!(
            "Ball at ({}, {}) is outside court {:?} before collision check",
            x, y, self.court
        );
        self.stray_reported = true;
        true
    }

    /// Advance one timer tick: clock, ball motion, collision check.
    pub fn tick<S: Screen + ?Sized>(&mut self, screen: &mut S) {
        if self.phase == Phase::GameOver {
            return;
        }

        if self.clock.tick() {
            screen.report_time(self.clock.minutes(), self.clock.seconds());
        }

        if let Some(step) = self.ball.advance() {
            screen.erase_cell(step.from.1, step.from.0);
            screen.draw_char(step.to.1, step.to.0, self.ball_symbol);
        }

        self.after_move(screen);
    }

    /// Move the paddle up one row and re-check the ball right away.
    pub fn paddle_up<S: Screen + ?Sized>(&mut self, screen: &mut S) {
        if self.phase == Phase::GameOver {
            return;
        }
        let vacated = self.paddle.bottom();
        if self.paddle.move_up() {
            screen.erase_cell(vacated, self.paddle.column());
            screen.draw_char(self.paddle.top(), self.paddle.column(), self.paddle_symbol);
        }
        self.after_move(screen);
    }

    /// Move the paddle down one row and re-check the ball right away.
    pub fn paddle_down<S: Screen + ?Sized>(&mut self, screen: &mut S) {
        if self.phase == Phase::GameOver {
            return;
        }
        let vacated = self.paddle.top();
        if self.paddle.move_down() {
            screen.erase_cell(vacated, self.paddle.column());
            screen.draw_char(self.paddle.bottom(), self.paddle.column(), self.paddle_symbol);
        }
        self.after_move(screen);
    }

    #[cfg(test)]
    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    #[cfg(test)]
    pub(crate) fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    #[cfg(test)]
    pub(crate) fn ball(&self) -> &Ball {
        &self.ball
    }

    #[cfg(test)]
    pub(crate) fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }
}
