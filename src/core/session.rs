//! Session - the event loop that drives a game
//!
//! One loop owns the game. It waits for keyboard input for at most the time
//! left until the next tick, handles any key immediately, then runs the tick
//! once its deadline has passed. Handlers always run to completion before the
//! next event is looked at, so the ball, paddle and clock are never touched
//! from two places at once.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::game::Game;
use super::screen::Screen;
use crate::error::Result;

/// Player commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PaddleUp,
    PaddleDown,
    Quit,
}

/// Source of player commands
pub trait InputSource {
    /// Wait up to `timeout` for the next command. `Ok(None)` means the
    /// timeout passed (or an unmapped key arrived) and the loop should check
    /// the timer.
    fn next_command(&mut self, timeout: Duration) -> Result<Option<Command>>;
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    GameOver,
    Quit,
}

/// Recurring fixed-period timer.
///
/// Fires are coalesced: if the loop falls behind by more than one period the
/// missed fires collapse into one and the schedule restarts from now.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next: Option<Instant>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            next: None,
        }
    }

    /// Timer for `ticks_per_second` fires a second
    pub fn from_rate(ticks_per_second: u32) -> Self {
        Self::new(Duration::from_millis(1000 / u64::from(ticks_per_second.max(1))))
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Schedule the first fire one period after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next = Some(now + self.period);
    }

    /// Drop any scheduled fire.
    pub fn cancel(&mut self) {
        self.next = None;
    }

    #[cfg(test)]
    pub(crate) fn is_active(&self) -> bool {
        self.next.is_some()
    }

    /// Time left until the next fire; zero when overdue, `None` when cancelled.
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.next.map(|next| next.saturating_duration_since(now))
    }

    /// Consume the pending fire if its deadline has passed.
    pub fn fire(&mut self, now: Instant) -> bool {
        let Some(next) = self.next else {
            return false;
        };
        if now < next {
            return false;
        }

        let following = next + self.period;
        if now >= following {
            let behind = now.duration_since(next);
            debug!("Ticker {:?} behind, coalescing missed ticks", behind);
            self.next = Some(now + self.period);
        } else {
            self.next = Some(following);
        }
        true
    }
}

/// Play `game` until it ends or the player quits.
///
/// The ticker is cancelled before returning, whichever way the session ends.
pub fn run<I, S>(game: &mut Game, input: &mut I, screen: &mut S) -> Result<SessionEnd>
where
    I: InputSource + ?Sized,
    S: Screen + ?Sized,
{
    let mut ticker = Ticker::from_rate(game.clock().ticks_per_second());
    info!("Session starting, tick period {:?}", ticker.period());

    game.start(screen);
    screen.flush()?;
    ticker.start(Instant::now());

    let result = event_loop(game, input, screen, &mut ticker);
    ticker.cancel();

    match &result {
        Ok(end) => info!(
            "Session ended ({:?}) at {:02}:{:02}",
            end,
            game.clock().minutes(),
            game.clock().seconds()
        ),
        Err(e) => info!("Session aborted: {}", e),
    }
    result
}

fn event_loop<I, S>(game: &mut Game, input: &mut I, screen: &mut S, ticker: &mut Ticker) -> Result<SessionEnd>
where
    I: InputSource + ?Sized,
    S: Screen + ?Sized,
{
    loop {
        if game.is_over() {
            return Ok(SessionEnd::GameOver);
        }

        let timeout = ticker.timeout(Instant::now()).unwrap_or(Duration::ZERO);
        match input.next_command(timeout)? {
            Some(Command::Quit) => return Ok(SessionEnd::Quit),
            Some(Command::PaddleUp) => game.paddle_up(screen),
            Some(Command::PaddleDown) => game.paddle_down(screen),
            None => {}
        }

        if ticker.fire(Instant::now()) {
            game.tick(screen);
        }

        screen.flush()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::court::Court;
    use crate::core::game::{GameSettings, Phase};
    use crate::core::screen::RecordingScreen;
    use std::collections::VecDeque;

    /// Replays a fixed script. `None` entries wait out the timeout so the
    /// timer gets to fire; once the script runs out the player quits.
    struct ScriptedInput {
        script: VecDeque<Option<Command>>,
        waits: Vec<Duration>,
    }

    impl ScriptedInput {
        fn new(script: Vec<Option<Command>>) -> Self {
            Self {
                script: script.into(),
                waits: Vec::new(),
            }
        }
    }

    impl InputSource for ScriptedInput {
        fn next_command(&mut self, timeout: Duration) -> Result<Option<Command>> {
            self.waits.push(timeout);
            match self.script.pop_front() {
                Some(Some(cmd)) => Ok(Some(cmd)),
                Some(None) => {
                    std::thread::sleep(timeout);
                    Ok(None)
                }
                None => Ok(Some(Command::Quit)),
            }
        }
    }

    fn game(lives: u32) -> Game {
        let settings = GameSettings {
            lives,
            ticks_per_second: 500,
            seed: 5,
            ..GameSettings::default()
        };
        Game::new(&settings, Court::new(3, 76, 20, 3), 24)
    }

    #[test]
    fn test_ticker_fires_on_schedule() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_millis(20));
        assert!(!ticker.fire(start));

        ticker.start(start);
        assert!(!ticker.fire(start + Duration::from_millis(19)));
        assert!(ticker.fire(start + Duration::from_millis(20)));
        assert!(!ticker.fire(start + Duration::from_millis(25)));
        assert_eq!(
            ticker.timeout(start + Duration::from_millis(25)),
            Some(Duration::from_millis(15))
        );
        assert!(ticker.fire(start + Duration::from_millis(41)));
    }

    #[test]
    fn test_ticker_coalesces_missed_fires() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_millis(10));
        ticker.start(start);

        let late = start + Duration::from_millis(55);
        assert!(ticker.fire(late));
        assert!(!ticker.fire(late));
        assert_eq!(ticker.timeout(late), Some(Duration::from_millis(10)));
    }

    #[test]
    fn test_ticker_cancel() {
        let start = Instant::now();
        let mut ticker = Ticker::from_rate(50);
        assert_eq!(ticker.period(), Duration::from_millis(20));
        ticker.start(start);
        assert!(ticker.is_active());
        ticker.cancel();
        assert!(!ticker.is_active());
        assert_eq!(ticker.timeout(start), None);
        assert!(!ticker.fire(start + Duration::from_secs(1)));
    }

    #[test]
    fn test_input_handled_without_waiting_for_tick() {
        let mut game = game(10);
        let mut input = ScriptedInput::new(vec![Some(Command::PaddleUp), Some(Command::PaddleUp)]);
        let mut screen = RecordingScreen::new();

        let end = run(&mut game, &mut input, &mut screen).unwrap();
        assert_eq!(end, SessionEnd::Quit);
        assert_eq!(game.paddle().top(), 8);
    }

    #[test]
    fn test_timer_advances_clock() {
        let mut game = game(10);
        let mut input = ScriptedInput::new(vec![None; 5]);
        let mut screen = RecordingScreen::new();

        let end = run(&mut game, &mut input, &mut screen).unwrap();
        assert_eq!(end, SessionEnd::Quit);
        assert_eq!(game.clock().total_ticks(), 5);
        assert!(input.waits.iter().all(|w| *w <= Duration::from_millis(2)));
        assert!(screen.flushes >= 6);
    }

    #[test]
    fn test_game_over_ends_session() {
        let mut game = game(1);
        let mut screen = RecordingScreen::new();
        game.start(&mut screen);
        // Ball idle in the paddle column above the paddle; the next check loses it
        game.ball_mut().set_motion((75, 5), (1, 1), (9, 9));

        let mut input = ScriptedInput::new(vec![Some(Command::PaddleDown), None, None]);
        let end = event_loop(&mut game, &mut input, &mut screen, &mut Ticker::from_rate(500)).unwrap();
        assert_eq!(end, SessionEnd::GameOver);
        assert_eq!(game.phase(), Phase::GameOver);
        // Loop stopped before consuming the rest of the script
        assert_eq!(input.script.len(), 2);
    }
}
