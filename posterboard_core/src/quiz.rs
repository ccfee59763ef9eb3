use std::time::Duration;

use crate::content::{Question, QUIZ_QUESTIONS};
use crate::sound::Cue;
use crate::timer::Delay;

pub const CORRECT_POINTS: u32 = 10;

/// Pause between answering and showing the feedback banner
pub const FEEDBACK_DELAY: Duration = Duration::from_millis(500);

/// Pause between the feedback banner and the next question
pub const ADVANCE_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Active,
    Revealed {
        selected: usize,
        correct: bool,
        feedback_visible: bool,
    },
    Complete,
}

/// Result of a successful `select_answer`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub points: u32,
    pub cue: Cue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    FeedbackShown,
    Advanced,
    Completed,
}

impl QuizEvent {
    pub fn cue(self) -> Option<Cue> {
        match self {
            QuizEvent::Completed => Some(Cue::Complete),
            QuizEvent::FeedbackShown | QuizEvent::Advanced => None,
        }
    }
}

/// One pass through the quiz. Created when the quiz screen mounts and dropped
/// with it, which also drops any pending reveal timer.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: &'static [Question],
    index: usize,
    phase: QuizPhase,
    pending: Option<Delay>,
    correct_count: usize,
}

impl QuizSession {
    fn new(questions: &'static [Question]) -> Self {
        debug_assert!(!questions.is_empty(), "a quiz needs at least one question");
        Self {
            questions,
            index: 0,
            phase: QuizPhase::Active,
            pending: None,
            correct_count: 0,
        }
    }

    pub fn standard() -> Self {
        Self::new(&QUIZ_QUESTIONS)
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based question number for display
    pub fn position(&self) -> usize {
        self.index + 1
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn question(&self) -> &'static Question {
        &self.questions[self.index]
    }

    pub fn selected(&self) -> Option<usize> {
        match self.phase {
            QuizPhase::Revealed { selected, .. } => Some(selected),
            _ => None,
        }
    }

    pub fn last_correct(&self) -> Option<bool> {
        match self.phase {
            QuizPhase::Revealed { correct, .. } => Some(correct),
            _ => None,
        }
    }

    pub fn feedback_visible(&self) -> bool {
        matches!(
            self.phase,
            QuizPhase::Revealed {
                feedback_visible: true,
                ..
            }
        )
    }

    pub fn is_complete(&self) -> bool {
        self.phase == QuizPhase::Complete
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn progress_ratio(&self) -> f64 {
        if self.questions.is_empty() {
            return 1.0;
        }
        self.position() as f64 / self.total() as f64
    }

    /// Answer the current question. Ignored unless a question is waiting for
    /// an answer, so a question can only be scored once.
    pub fn select_answer(&mut self, index: usize) -> Option<AnswerOutcome> {
        if self.phase != QuizPhase::Active || !self.question().has_option(index) {
            return None;
        }

        let correct = self.question().is_correct(index);
        if correct {
            self.correct_count += 1;
        }
        self.phase = QuizPhase::Revealed {
            selected: index,
            correct,
            feedback_visible: false,
        };
        self.pending = Some(Delay::new(FEEDBACK_DELAY));

        Some(AnswerOutcome {
            correct,
            points: if correct { CORRECT_POINTS } else { 0 },
            cue: if correct { Cue::Correct } else { Cue::Wrong },
        })
    }

    pub fn tick(&mut self, dt: Duration) -> Option<QuizEvent> {
        let delay = self.pending.as_mut()?;
        if !delay.tick(dt) {
            return None;
        }
        self.pending = None;

        match self.phase {
            QuizPhase::Revealed {
                selected,
                correct,
                feedback_visible: false,
            } => {
                self.phase = QuizPhase::Revealed {
                    selected,
                    correct,
                    feedback_visible: true,
                };
                self.pending = Some(Delay::new(ADVANCE_DELAY));
                Some(QuizEvent::FeedbackShown)
            }
            QuizPhase::Revealed { .. } => {
                if self.index + 1 < self.questions.len() {
                    self.index += 1;
                    self.phase = QuizPhase::Active;
                    Some(QuizEvent::Advanced)
                } else {
                    self.phase = QuizPhase::Complete;
                    Some(QuizEvent::Completed)
                }
            }
            QuizPhase::Active | QuizPhase::Complete => None,
        }
    }

    /// "Main Lagi": start over from the first question. Only valid once the
    /// quiz is complete. The shared score is left alone.
    pub fn reset(&mut self) -> bool {
        if self.phase != QuizPhase::Complete {
            return false;
        }
        self.index = 0;
        self.phase = QuizPhase::Active;
        self.pending = None;
        self.correct_count = 0;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::QUIZ_QUESTIONS;

    fn finish_question(quiz: &mut QuizSession) -> Vec<QuizEvent> {
        let mut events = Vec::new();
        for _ in 0..100 {
            if let Some(ev) = quiz.tick(Duration::from_millis(100)) {
                events.push(ev);
                if ev != QuizEvent::FeedbackShown {
                    break;
                }
            }
        }
        events
    }

    #[test]
    fn test_correct_answer_awards_ten() {
        let mut quiz = QuizSession::standard();
        let outcome = quiz.select_answer(2).unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.points, CORRECT_POINTS);
        assert_eq!(outcome.cue, Cue::Correct);
        assert_eq!(quiz.selected(), Some(2));
    }

    #[test]
    fn test_wrong_answer_awards_nothing() {
        let mut quiz = QuizSession::standard();
        let outcome = quiz.select_answer(0).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.points, 0);
        assert_eq!(outcome.cue, Cue::Wrong);
    }

    #[test]
    fn test_second_selection_is_noop() {
        let mut quiz = QuizSession::standard();
        quiz.select_answer(2);
        let phase = quiz.phase();
        assert_eq!(quiz.select_answer(1), None);
        assert_eq!(quiz.phase(), phase);
        assert_eq!(quiz.correct_count(), 1);
    }

    #[test]
    fn test_out_of_range_option_is_noop() {
        let mut quiz = QuizSession::standard();
        assert_eq!(quiz.select_answer(9), None);
        assert_eq!(quiz.phase(), QuizPhase::Active);
    }

    #[test]
    fn test_feedback_then_advance_timing() {
        let mut quiz = QuizSession::standard();
        quiz.select_answer(0);
        assert!(!quiz.feedback_visible());

        assert_eq!(quiz.tick(Duration::from_millis(499)), None);
        assert_eq!(quiz.tick(Duration::from_millis(1)), Some(QuizEvent::FeedbackShown));
        assert!(quiz.feedback_visible());

        assert_eq!(quiz.tick(Duration::from_millis(1999)), None);
        assert_eq!(quiz.tick(Duration::from_millis(1)), Some(QuizEvent::Advanced));
        assert_eq!(quiz.index(), 1);
        assert_eq!(quiz.phase(), QuizPhase::Active);
        assert_eq!(quiz.selected(), None);
    }

    #[test]
    fn test_score_is_ten_per_correct_answer() {
        // Answer k questions correctly, the rest wrong, in a mixed order
        for mask in 0u32..32 {
            let mut quiz = QuizSession::standard();
            let mut points = 0;
            for (i, q) in QUIZ_QUESTIONS.iter().enumerate() {
                let choice = if mask & (1 << i) != 0 {
                    q.correct
                } else {
                    (q.correct + 1) % q.options.len()
                };
                points += quiz.select_answer(choice).unwrap().points;
                finish_question(&mut quiz);
            }
            assert!(quiz.is_complete());
            assert_eq!(points, 10 * mask.count_ones());
            assert_eq!(quiz.correct_count(), mask.count_ones() as usize);
        }
    }

    #[test]
    fn test_last_question_completes() {
        let mut quiz = QuizSession::standard();
        for q in QUIZ_QUESTIONS.iter() {
            quiz.select_answer(q.correct);
            let events = finish_question(&mut quiz);
            assert_eq!(events[0], QuizEvent::FeedbackShown);
        }
        assert!(quiz.is_complete());
        assert_eq!(quiz.select_answer(0), None);
        assert_eq!(QuizEvent::Completed.cue(), Some(Cue::Complete));
    }

    #[test]
    fn test_reset_only_from_complete() {
        let mut quiz = QuizSession::standard();
        assert!(!quiz.reset());

        for q in QUIZ_QUESTIONS.iter() {
            quiz.select_answer(q.correct);
            finish_question(&mut quiz);
        }
        assert!(quiz.reset());
        assert_eq!(quiz.index(), 0);
        assert_eq!(quiz.phase(), QuizPhase::Active);
        assert_eq!(quiz.correct_count(), 0);
    }

    #[test]
    fn test_progress_ratio() {
        let quiz = QuizSession::standard();
        assert_eq!(quiz.position(), 1);
        assert!((quiz.progress_ratio() - 0.2).abs() < 1e-9);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_empty_question_set_is_rejected() {
        QuizSession::new(&[]);
    }
}
