use std::time::Duration;

use crate::timer::Delay;

/// Who is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cast {
    Teacher,
    Boy,
    Girl,
    Group,
}

/// Animation a character is playing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mood {
    #[default]
    Idle,
    Talking,
    Excited,
    Thinking,
}

/// A character mood that can fall back to idle after a while
#[derive(Debug, Clone, Default)]
pub struct MoodTimer {
    mood: Mood,
    revert: Option<Delay>,
}

impl MoodTimer {
    pub fn new(mood: Mood) -> Self {
        Self { mood, revert: None }
    }

    /// Play `mood` for `duration`, then go idle
    pub fn briefly(mood: Mood, duration: Duration) -> Self {
        let mut timer = Self::default();
        timer.set_for(mood, duration);
        timer
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    /// Hold `mood` until changed again
    pub fn set(&mut self, mood: Mood) {
        self.mood = mood;
        self.revert = None;
    }

    pub fn set_for(&mut self, mood: Mood, duration: Duration) {
        self.mood = mood;
        self.revert = Some(Delay::new(duration));
    }

    pub fn tick(&mut self, dt: Duration) {
        if let Some(delay) = &mut self.revert {
            if delay.tick(dt) {
                self.revert = None;
                self.mood = Mood::Idle;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_briefly_reverts_to_idle() {
        let mut timer = MoodTimer::briefly(Mood::Talking, Duration::from_secs(3));
        timer.tick(Duration::from_secs(2));
        assert_eq!(timer.mood(), Mood::Talking);
        timer.tick(Duration::from_secs(1));
        assert_eq!(timer.mood(), Mood::Idle);
    }

    #[test]
    fn test_set_cancels_pending_revert() {
        let mut timer = MoodTimer::briefly(Mood::Talking, Duration::from_secs(1));
        timer.set(Mood::Excited);
        timer.tick(Duration::from_secs(5));
        assert_eq!(timer.mood(), Mood::Excited);
    }
}
