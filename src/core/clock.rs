//! Elapsed play time, advanced once per tick

const SECONDS_PER_MINUTE: u32 = 60;

/// Tick counter that rolls over into seconds and minutes.
#[derive(Debug, Clone)]
pub struct Clock {
    ticks_per_second: u32,
    minutes: u32,
    seconds: u32,
    ticks: u32,
}

impl Clock {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            ticks_per_second: ticks_per_second.max(1),
            minutes: 0,
            seconds: 0,
            ticks: 0,
        }
    }

    /// Zero the clock.
    pub fn reset(&mut self) {
        self.minutes = 0;
        self.seconds = 0;
        self.ticks = 0;
    }

    /// Count one tick. Returns true when a whole second has elapsed, i.e. when
    /// the displayed time changed.
    pub fn tick(&mut self) -> bool {
        self.ticks += 1;
        if self.ticks < self.ticks_per_second {
            return false;
        }

        self.ticks = 0;
        self.seconds += 1;
        if self.seconds == SECONDS_PER_MINUTE {
            self.seconds = 0;
            self.minutes += 1;
        }
        true
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn ticks_per_second(&self) -> u32 {
        self.ticks_per_second
    }

    /// Ticks counted since the last reset
    pub fn total_ticks(&self) -> u64 {
        let whole_seconds = u64::from(self.minutes) * u64::from(SECONDS_PER_MINUTE)
            + u64::from(self.seconds);
        whole_seconds * u64::from(self.ticks_per_second) + u64::from(self.ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_rollover() {
        let mut clock = Clock::new(50);
        for _ in 0..49 {
            assert!(!clock.tick());
        }
        assert_eq!(clock.seconds(), 0);
        assert!(clock.tick());
        assert_eq!(clock.seconds(), 1);
        assert_eq!(clock.total_ticks(), 50);
    }

    #[test]
    fn test_minute_rollover() {
        let mut clock = Clock::new(2);
        for _ in 0..(2 * 60 * 2 + 3) {
            clock.tick();
        }
        assert_eq!(clock.minutes(), 2);
        assert_eq!(clock.seconds(), 1);
        assert_eq!(clock.total_ticks(), 2 * 60 * 2 + 3);
    }

    #[test]
    fn test_reset() {
        let mut clock = Clock::new(1);
        for _ in 0..75 {
            clock.tick();
        }
        assert_eq!((clock.minutes(), clock.seconds()), (1, 15));
        clock.reset();
        assert_eq!((clock.minutes(), clock.seconds()), (0, 0));
        assert_eq!(clock.total_ticks(), 0);
    }

    #[test]
    fn test_zero_rate_is_clamped() {
        let mut clock = Clock::new(0);
        assert_eq!(clock.ticks_per_second(), 1);
        assert!(clock.tick());
    }
}
