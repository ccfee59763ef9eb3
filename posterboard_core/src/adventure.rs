use std::time::Duration;

use crate::content::{Question, ADVENTURE_QUESTIONS};
use crate::sound::Cue;
use crate::timer::{Countdown, Delay};

pub const CORRECT_POINTS: u32 = 15;

/// Time allowed per question
pub const TIME_LIMIT: Duration = Duration::from_secs(30);

/// Pause after a correct answer before the next question
pub const ADVANCE_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossReason {
    WrongAnswer { selected: usize },
    TimeUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdventurePhase {
    Asking,
    /// Correct answer shown; next question pending
    Answered { selected: usize },
    Won,
    Lost(LossReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdventureOutcome {
    pub correct: bool,
    pub points: u32,
    pub cue: Cue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdventureEvent {
    Advanced,
    /// The countdown ran out; counts as a wrong answer
    TimeUp,
}

impl AdventureEvent {
    pub fn cue(self) -> Option<Cue> {
        match self {
            AdventureEvent::TimeUp => Some(Cue::Wrong),
            AdventureEvent::Advanced => None,
        }
    }
}

/// "Petualangan Persatuan": one mistake ends the run
#[derive(Debug, Clone)]
pub struct AdventureGame {
    questions: &'static [Question],
    index: usize,
    phase: AdventurePhase,
    countdown: Countdown,
    advance: Option<Delay>,
}

impl AdventureGame {
    fn new(questions: &'static [Question]) -> Self {
        debug_assert!(!questions.is_empty(), "an adventure needs at least one question");
        Self {
            questions,
            index: 0,
            phase: AdventurePhase::Asking,
            countdown: Countdown::new(TIME_LIMIT),
            advance: None,
        }
    }

    pub fn standard() -> Self {
        Self::new(&ADVENTURE_QUESTIONS)
    }

    pub fn phase(&self) -> AdventurePhase {
        self.phase
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn position(&self) -> usize {
        self.index + 1
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn question(&self) -> &'static Question {
        &self.questions[self.index]
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn seconds_left(&self) -> u64 {
        self.countdown.seconds_left()
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, AdventurePhase::Won | AdventurePhase::Lost(_))
    }

    /// The option highlighted for the current question, if any
    pub fn selected(&self) -> Option<usize> {
        match self.phase {
            AdventurePhase::Answered { selected }
            | AdventurePhase::Lost(LossReason::WrongAnswer { selected }) => Some(selected),
            _ => None,
        }
    }

    pub fn select_answer(&mut self, index: usize) -> Option<AdventureOutcome> {
        if self.phase != AdventurePhase::Asking || !self.question().has_option(index) {
            return None;
        }

        if !self.question().is_correct(index) {
            self.countdown.pause();
            self.phase = AdventurePhase::Lost(LossReason::WrongAnswer { selected: index });
            return Some(AdventureOutcome {
                correct: false,
                points: 0,
                cue: Cue::Wrong,
            });
        }

        self.countdown.pause();
        let cue = if self.index + 1 < self.questions.len() {
            self.phase = AdventurePhase::Answered { selected: index };
            self.advance = Some(Delay::new(ADVANCE_DELAY));
            Cue::Correct
        } else {
            self.phase = AdventurePhase::Won;
            Cue::Complete
        };

        Some(AdventureOutcome {
            correct: true,
            points: CORRECT_POINTS,
            cue,
        })
    }

    pub fn tick(&mut self, dt: Duration) -> Option<AdventureEvent> {
        match self.phase {
            AdventurePhase::Asking => {
                if self.countdown.tick(dt) {
                    self.phase = AdventurePhase::Lost(LossReason::TimeUp);
                    return Some(AdventureEvent::TimeUp);
                }
                None
            }
            AdventurePhase::Answered { .. } => {
                let delay = self.advance.as_mut()?;
                if !delay.tick(dt) {
                    return None;
                }
                self.advance = None;
                self.index += 1;
                self.phase = AdventurePhase::Asking;
                self.countdown.restart();
                Some(AdventureEvent::Advanced)
            }
            AdventurePhase::Won | AdventurePhase::Lost(_) => None,
        }
    }
}
