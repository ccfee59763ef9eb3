use std::time::Duration;

/// One-shot delay advanced by frame ticks.
///
/// Owners keep it in an `Option` and drop it once it fires, so tearing down
/// the owner is all it takes to cancel a pending callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delay {
    remaining: Duration,
}

impl Delay {
    pub fn new(duration: Duration) -> Self {
        Self {
            remaining: duration,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// Advance by `dt`. Returns true once the delay has elapsed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.remaining = self.remaining.saturating_sub(dt);
        self.remaining.is_zero()
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }
}

/// Visible per-question countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    total: Duration,
    remaining: Duration,
    paused: bool,
}

impl Countdown {
    pub fn new(total: Duration) -> Self {
        Self {
            total,
            remaining: total,
            paused: false,
        }
    }

    /// Advance by `dt`. Returns true only on the tick the countdown runs out.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.paused || self.remaining.is_zero() {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(dt);
        self.remaining.is_zero()
    }

    pub fn restart(&mut self) {
        self.remaining = self.total;
        self.paused = false;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Whole seconds left, rounded up so "1" shows until the very end
    pub fn seconds_left(&self) -> u64 {
        let ms = self.remaining.as_millis() as u64;
        ms.div_ceil(1000)
    }

    pub fn fraction_left(&self) -> f64 {
        if self.total.is_zero() {
            return 0.0;
        }
        self.remaining.as_secs_f64() / self.total.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_fires_after_duration() {
        let mut delay = Delay::from_millis(500);
        assert!(!delay.tick(Duration::from_millis(300)));
        assert!(delay.tick(Duration::from_millis(200)));
    }

    #[test]
    fn test_delay_overshoot_still_fires() {
        let mut delay = Delay::from_millis(100);
        assert!(delay.tick(Duration::from_millis(250)));
        assert_eq!(delay.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_countdown_expires_once() {
        let mut countdown = Countdown::new(Duration::from_secs(2));
        assert!(!countdown.tick(Duration::from_millis(1500)));
        assert_eq!(countdown.seconds_left(), 1);
        assert!(countdown.tick(Duration::from_millis(600)));
        assert!(!countdown.tick(Duration::from_millis(600)));
        assert_eq!(countdown.seconds_left(), 0);
        assert_eq!(countdown.fraction_left(), 0.0);
    }

    #[test]
    fn test_paused_countdown_holds() {
        let mut countdown = Countdown::new(Duration::from_secs(30));
        countdown.pause();
        countdown.tick(Duration::from_secs(40));
        assert_eq!(countdown.seconds_left(), 30);
        // Restarting also lifts the pause
        countdown.restart();
        countdown.tick(Duration::from_secs(1));
        assert_eq!(countdown.seconds_left(), 29);
    }

    #[test]
    fn test_restart_refills() {
        let mut countdown = Countdown::new(Duration::from_secs(30));
        countdown.tick(Duration::from_secs(12));
        countdown.restart();
        assert_eq!(countdown.seconds_left(), 30);
        assert!((countdown.fraction_left() - 1.0).abs() < f64::EPSILON);
    }
}
