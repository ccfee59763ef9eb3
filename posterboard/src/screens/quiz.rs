use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use posterboard_core::quiz::QuizEvent;
use posterboard_core::{Cast, Cue, Mood, MoodTimer, QuizPhase, QuizSession, ScreenId};
use posterboard_widgets::character::{CharacterWidget, CHARACTER_HEIGHT, CHARACTER_WIDTH};
use posterboard_widgets::header::HeaderWidget;
use posterboard_widgets::options::OptionListWidget;
use posterboard_widgets::popup::PopupWidget;
use posterboard_widgets::progress::ProgressWidget;
use posterboard_widgets::theme::Theme;

use crate::app::ScreenAction;
use crate::screens::{contains, digit_index, hits_back, is_back, left_click, Screen, ScreenContext};

const REACTION: Duration = Duration::from_secs(2);

pub struct QuizScreen {
    pub session: QuizSession,
    pub cursor: usize,
    teacher: MoodTimer,
    header: Rect,
    options: Rect,
}

impl QuizScreen {
    pub fn new() -> Self {
        Self {
            session: QuizSession::standard(),
            cursor: 0,
            teacher: MoodTimer::new(Mood::Thinking),
            header: Rect::default(),
            options: Rect::default(),
        }
    }

    fn answer(&mut self, index: usize) -> Vec<ScreenAction> {
        let Some(outcome) = self.session.select_answer(index) else {
            return Vec::new();
        };
        self.cursor = index;
        let mood = if outcome.correct {
            Mood::Excited
        } else {
            Mood::Talking
        };
        self.teacher.set_for(mood, REACTION);

        let mut actions = vec![ScreenAction::Play(outcome.cue)];
        if outcome.points > 0 {
            actions.push(ScreenAction::Award(outcome.points));
        }
        actions
    }

    fn play_again(&mut self) -> Vec<ScreenAction> {
        if self.session.reset() {
            self.cursor = 0;
            self.teacher.set(Mood::Thinking);
            vec![ScreenAction::Play(Cue::Click)]
        } else {
            Vec::new()
        }
    }

    fn feedback_line(&self) -> Option<Line<'static>> {
        if !self.session.feedback_visible() {
            return None;
        }
        let line = match self.session.last_correct() {
            Some(true) => Line::from(Span::styled(
                "Benar! +10 poin",
                Style::default()
                    .fg(Theme::CORRECT)
                    .add_modifier(Modifier::BOLD),
            )),
            _ => Line::from(vec![
                Span::styled(
                    "Kurang tepat. ",
                    Style::default()
                        .fg(Theme::WRONG)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("Jawaban yang benar: {}", self.session.question().correct_option()),
                    Style::default().fg(Theme::CHALK),
                ),
            ]),
        };
        Some(line)
    }
}

impl Screen for QuizScreen {
    fn render(&mut self, area: Rect, buf: &mut Buffer, ctx: &ScreenContext) {
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(CHARACTER_HEIGHT),
            Constraint::Min(12),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

        self.header = chunks[0];
        HeaderWidget::new("Quiz Persatuan")
            .score(ctx.score)
            .render(chunks[0], buf);

        let question = self.session.question();
        let inner_x = area.x + 2;
        let inner_width = area.width.saturating_sub(4);
        ProgressWidget::new(self.session.position(), self.session.total()).render(
            Rect::new(inner_x, chunks[2].y, inner_width, chunks[2].height),
            buf,
        );

        let prompt_row = chunks[3];
        CharacterWidget::new(Cast::Teacher)
            .mood(self.teacher.mood())
            .tick(ctx.tick)
            .render(
                Rect::new(inner_x, prompt_row.y, CHARACTER_WIDTH, prompt_row.height)
                    .intersection(area),
                buf,
            );
        let prompt_x = inner_x + CHARACTER_WIDTH + 2;
        Paragraph::new(Span::styled(
            question.prompt,
            Style::default()
                .fg(Theme::CHALK)
                .add_modifier(Modifier::BOLD),
        ))
        .wrap(Wrap { trim: true })
        .render(
            Rect::new(
                prompt_x,
                prompt_row.y + 1,
                area.right().saturating_sub(prompt_x + 2),
                prompt_row.height.saturating_sub(1),
            )
            .intersection(area),
            buf,
        );

        let list = OptionListWidget::new(question.options).cursor(self.cursor);
        let list = match self.session.phase() {
            QuizPhase::Revealed {
                selected,
                correct,
                feedback_visible,
            } => {
                let shown = feedback_visible.then_some(correct);
                let reveal = (feedback_visible && !correct).then_some(question.correct);
                list.answered(Some(selected), shown).reveal(reveal)
            }
            _ => list,
        };
        self.options = Rect::new(
            inner_x,
            chunks[4].y,
            inner_width,
            list.height().min(chunks[4].height),
        );
        list.render(self.options, buf);

        if let Some(line) = self.feedback_line() {
            Paragraph::new(line)
                .alignment(Alignment::Center)
                .render(chunks[5], buf);
        }

        Paragraph::new(Span::styled(
            "[1-4] Jawab  [↑↓] Pilih  [Enter] Kunci jawaban  [Esc] Menu",
            Style::default().fg(Theme::CHALK_DUST),
        ))
        .alignment(Alignment::Center)
        .render(chunks[6], buf);

        if self.session.is_complete() {
            PopupWidget::new("Quiz Selesai!")
                .accent(Theme::YELLOW)
                .size(60, 50)
                .line(
                    format!("Skor kamu: {}", ctx.score),
                    Style::default()
                        .fg(Theme::INK)
                        .add_modifier(Modifier::BOLD),
                )
                .line(
                    format!(
                        "Benar {} dari {} pertanyaan",
                        self.session.correct_count(),
                        self.session.total()
                    ),
                    Style::default().fg(Theme::INK_MUTED),
                )
                .line("", Style::default())
                .line(
                    "[r] Main Lagi   [Esc] Kembali ke Menu",
                    Style::default().fg(Theme::INK),
                )
                .render(area, buf);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<ScreenAction> {
        if is_back(&key) {
            return vec![ScreenAction::Navigate(ScreenId::Menu)];
        }
        if self.session.is_complete() {
            return match key.code {
                KeyCode::Char('r') | KeyCode::Enter => self.play_again(),
                _ => Vec::new(),
            };
        }
        if let Some(index) = digit_index(&key) {
            return self.answer(index);
        }
        let count = self.session.question().options.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                Vec::new()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = (self.cursor + 1).min(count.saturating_sub(1));
                Vec::new()
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.answer(self.cursor),
            _ => Vec::new(),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Vec<ScreenAction> {
        let Some((column, row)) = left_click(&mouse) else {
            return Vec::new();
        };
        if hits_back(self.header, column, row) {
            return vec![ScreenAction::Navigate(ScreenId::Menu)];
        }
        if self.session.is_complete() {
            return self.play_again();
        }
        let list = OptionListWidget::new(self.session.question().options);
        let hit = (0..list.options.len()).find(|&i| {
            list.option_rect(self.options, i)
                .is_some_and(|rect| contains(rect, column, row))
        });
        match hit {
            Some(index) => self.answer(index),
            None => Vec::new(),
        }
    }

    fn tick(&mut self, dt: Duration) -> Vec<ScreenAction> {
        self.teacher.tick(dt);
        match self.session.tick(dt) {
            Some(QuizEvent::Advanced) => {
                self.cursor = 0;
                self.teacher.set(Mood::Thinking);
                Vec::new()
            }
            Some(event) => {
                if event == QuizEvent::Completed {
                    self.teacher.set(Mood::Excited);
                }
                event.cue().map(ScreenAction::Play).into_iter().collect()
            }
            None => Vec::new(),
        }
    }
}
