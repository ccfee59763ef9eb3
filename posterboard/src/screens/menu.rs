use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use posterboard_core::content::{MenuTarget, MENU};
use posterboard_core::{Cast, Cue, Mood, MoodTimer, ScreenId};
use posterboard_widgets::cards::{card_at, Card, CardGridWidget, CARD_HEIGHT};
use posterboard_widgets::character::{CharacterWidget, CHARACTER_HEIGHT, CHARACTER_WIDTH};
use posterboard_widgets::header::HeaderWidget;
use posterboard_widgets::theme::Theme;

use crate::app::ScreenAction;
use crate::screens::{
    digit_index, hits_back, is_back, left_click, move_in_grid, Screen, ScreenContext,
};

const COLUMNS: u16 = 3;
const ACCENTS: [Color; 5] = [
    Theme::BLUE,
    Theme::PURPLE,
    Theme::ORANGE,
    Theme::CORRECT,
    Theme::PINK,
];
const GREETING: &str = "Halo, anak-anak! Ayo belajar tentang persatuan di lingkungan sekolah. Pilih menu di bawah ini.";

pub struct MenuScreen {
    pub cursor: usize,
    teacher: MoodTimer,
    header: Rect,
    grid: Rect,
}

impl MenuScreen {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            teacher: MoodTimer::briefly(Mood::Talking, Duration::from_secs(3)),
            header: Rect::default(),
            grid: Rect::default(),
        }
    }

    fn select(&mut self, index: usize) -> Vec<ScreenAction> {
        let Some(entry) = MENU.get(index) else {
            return Vec::new();
        };
        self.cursor = index;
        let follow = match entry.target {
            MenuTarget::Screen(id) => ScreenAction::Navigate(id),
            MenuTarget::QuizLink => ScreenAction::OpenQuizLink,
        };
        vec![ScreenAction::Play(Cue::Click), follow]
    }
}

impl Screen for MenuScreen {
    fn render(&mut self, area: Rect, buf: &mut Buffer, ctx: &ScreenContext) {
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(CHARACTER_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CARD_HEIGHT * 2 + 1),
            Constraint::Min(1),
        ])
        .split(area);

        self.header = chunks[0];
        HeaderWidget::new("Menu Utama").render(chunks[0], buf);

        // Teacher on the left, speech on the right
        let intro = chunks[2];
        let teacher_area = Rect::new(intro.x + 2, intro.y, CHARACTER_WIDTH, intro.height);
        CharacterWidget::new(Cast::Teacher)
            .mood(self.teacher.mood())
            .tick(ctx.tick)
            .render(teacher_area.intersection(area), buf);
        let speech_x = teacher_area.right() + 2;
        let speech = Rect::new(
            speech_x,
            intro.y + 1,
            intro.right().saturating_sub(speech_x + 2),
            intro.height.saturating_sub(2),
        );
        Paragraph::new(Line::from(Span::styled(
            GREETING,
            Style::default().fg(Theme::CHALK),
        )))
        .wrap(Wrap { trim: true })
        .render(speech.intersection(area), buf);

        self.grid = chunks[4];
        let cards = MENU
            .iter()
            .zip(ACCENTS)
            .map(|(entry, accent)| Card::new(entry.title, entry.caption, accent))
            .collect();
        CardGridWidget::new(cards)
            .columns(COLUMNS)
            .cursor(Some(self.cursor))
            .render(self.grid, buf);

        let footer = Paragraph::new(Line::from(vec![
            Span::styled("[", Style::default().fg(Theme::CHALK_DUST)),
            Span::styled("←↑↓→", Style::default().fg(Theme::YELLOW)),
            Span::styled("] Pilih  [", Style::default().fg(Theme::CHALK_DUST)),
            Span::styled("Enter", Style::default().fg(Theme::YELLOW)),
            Span::styled("] Buka  [", Style::default().fg(Theme::CHALK_DUST)),
            Span::styled("1-5", Style::default().fg(Theme::YELLOW)),
            Span::styled("] Langsung  [", Style::default().fg(Theme::CHALK_DUST)),
            Span::styled("q", Style::default().fg(Theme::YELLOW)),
            Span::styled("] Keluar", Style::default().fg(Theme::CHALK_DUST)),
        ]))
        .alignment(Alignment::Center);
        let footer_area = chunks[5];
        if footer_area.height > 0 {
            let y = footer_area.bottom() - 1;
            footer.render(Rect::new(footer_area.x, y, footer_area.width, 1), buf);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<ScreenAction> {
        if is_back(&key) {
            return vec![ScreenAction::Navigate(ScreenId::Start)];
        }
        if let Some(index) = digit_index(&key) {
            return self.select(index);
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor),
            code => {
                self.cursor = move_in_grid(self.cursor, MENU.len(), COLUMNS as usize, code);
                Vec::new()
            }
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Vec<ScreenAction> {
        let Some((column, row)) = left_click(&mouse) else {
            return Vec::new();
        };
        if hits_back(self.header, column, row) {
            return vec![ScreenAction::Navigate(ScreenId::Start)];
        }
        match card_at(self.grid, MENU.len(), COLUMNS, column, row) {
            Some(index) => self.select(index),
            None => Vec::new(),
        }
    }

    fn tick(&mut self, dt: Duration) -> Vec<ScreenAction> {
        self.teacher.tick(dt);
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_tiles_route_to_screens() {
        let mut menu = MenuScreen::new();
        assert_eq!(
            menu.handle_key(key(KeyCode::Char('1'))),
            vec![
                ScreenAction::Play(Cue::Click),
                ScreenAction::Navigate(ScreenId::Poster)
            ]
        );
        assert_eq!(
            menu.handle_key(key(KeyCode::Char('2')))[1],
            ScreenAction::Navigate(ScreenId::Instructions)
        );
        assert_eq!(
            menu.handle_key(key(KeyCode::Char('5')))[1],
            ScreenAction::OpenQuizLink
        );
        assert!(menu.handle_key(key(KeyCode::Char('6'))).is_empty());
    }

    #[test]
    fn test_arrows_then_enter() {
        let mut menu = MenuScreen::new();
        menu.handle_key(key(KeyCode::Right));
        menu.handle_key(key(KeyCode::Right));
        assert_eq!(menu.cursor, 2);
        assert_eq!(
            menu.handle_key(key(KeyCode::Enter))[1],
            ScreenAction::Navigate(ScreenId::Quiz)
        );
        menu.handle_key(key(KeyCode::Down));
        assert_eq!(menu.cursor, 2);
        menu.handle_key(key(KeyCode::Left));
        menu.handle_key(key(KeyCode::Down));
        assert_eq!(menu.cursor, 4);
    }

    #[test]
    fn test_escape_returns_to_start() {
        let mut menu = MenuScreen::new();
        assert_eq!(
            menu.handle_key(key(KeyCode::Esc)),
            vec![ScreenAction::Navigate(ScreenId::Start)]
        );
    }
}
