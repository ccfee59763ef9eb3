pub mod game;
pub mod instructions;
pub mod menu;
pub mod poster;
pub mod quiz;
pub mod start;

use std::path::Path;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use posterboard_core::ScreenId;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::app::ScreenAction;

use game::GameScreen;
use instructions::InstructionsScreen;
use menu::MenuScreen;
use poster::PosterScreen;
use quiz::QuizScreen;
use start::StartScreen;

/// What every screen may read while drawing
#[derive(Debug, Clone, Copy)]
pub struct ScreenContext {
    pub score: u32,
    pub tick: u64,
}

/// Trait for lesson screens
pub trait Screen {
    fn render(&mut self, area: Rect, buf: &mut Buffer, ctx: &ScreenContext);
    fn handle_key(&mut self, key: KeyEvent) -> Vec<ScreenAction>;

    fn handle_mouse(&mut self, _mouse: MouseEvent) -> Vec<ScreenAction> {
        Vec::new()
    }

    fn tick(&mut self, _dt: Duration) -> Vec<ScreenAction> {
        Vec::new()
    }
}

/// The screen behind each identifier, built fresh on every visit
pub enum ActiveScreen {
    Start(StartScreen),
    Menu(MenuScreen),
    Poster(PosterScreen),
    Quiz(QuizScreen),
    Game(GameScreen),
    Instructions(InstructionsScreen),
}

impl ActiveScreen {
    pub fn build(id: ScreenId, assets_dir: &Path) -> Self {
        match id {
            ScreenId::Start => ActiveScreen::Start(StartScreen::new()),
            ScreenId::Menu => ActiveScreen::Menu(MenuScreen::new()),
            ScreenId::Poster => ActiveScreen::Poster(PosterScreen::new(assets_dir)),
            ScreenId::Quiz => ActiveScreen::Quiz(QuizScreen::new()),
            ScreenId::Game => ActiveScreen::Game(GameScreen::new()),
            ScreenId::Instructions => {
                ActiveScreen::Instructions(InstructionsScreen::new(assets_dir))
            }
        }
    }

    fn screen(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::Start(screen) => screen,
            ActiveScreen::Menu(screen) => screen,
            ActiveScreen::Poster(screen) => screen,
            ActiveScreen::Quiz(screen) => screen,
            ActiveScreen::Game(screen) => screen,
            ActiveScreen::Instructions(screen) => screen,
        }
    }
}

impl Screen for ActiveScreen {
    fn render(&mut self, area: Rect, buf: &mut Buffer, ctx: &ScreenContext) {
        self.screen().render(area, buf, ctx);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<ScreenAction> {
        self.screen().handle_key(key)
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Vec<ScreenAction> {
        self.screen().handle_mouse(mouse)
    }

    fn tick(&mut self, dt: Duration) -> Vec<ScreenAction> {
        self.screen().tick(dt)
    }
}

pub fn is_back(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Backspace)
}

/// Digit keys 1-9 as a zero-based index
pub fn digit_index(key: &KeyEvent) -> Option<usize> {
    match key.code {
        KeyCode::Char(c @ '1'..='9') => Some(c as usize - '1' as usize),
        _ => None,
    }
}

/// Cell under a left click
pub fn left_click(mouse: &MouseEvent) -> Option<(u16, u16)> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some((mouse.column, mouse.row)),
        _ => None,
    }
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Width of the header's back button
const BACK_WIDTH: u16 = 7;

/// Whether a click landed on the back button drawn by `HeaderWidget`
pub fn hits_back(header: Rect, column: u16, row: u16) -> bool {
    contains(Rect::new(header.x, header.y, BACK_WIDTH, 1), column, row)
}

/// Move a cursor through a grid of `count` cells, `columns` wide
pub fn move_in_grid(cursor: usize, count: usize, columns: usize, code: KeyCode) -> usize {
    if count == 0 {
        return 0;
    }
    match code {
        KeyCode::Left | KeyCode::Char('h') => cursor.saturating_sub(1),
        KeyCode::Right | KeyCode::Char('l') => (cursor + 1).min(count - 1),
        KeyCode::Up | KeyCode::Char('k') => cursor.checked_sub(columns).unwrap_or(cursor),
        KeyCode::Down | KeyCode::Char('j') if cursor + columns < count => cursor + columns,
        _ => cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_movement_stops_at_edges() {
        assert_eq!(move_in_grid(0, 5, 3, KeyCode::Left), 0);
        assert_eq!(move_in_grid(4, 5, 3, KeyCode::Right), 4);
        assert_eq!(move_in_grid(1, 5, 3, KeyCode::Down), 4);
        assert_eq!(move_in_grid(2, 5, 3, KeyCode::Down), 2);
        assert_eq!(move_in_grid(4, 5, 3, KeyCode::Char('k')), 1);
        assert_eq!(move_in_grid(1, 5, 3, KeyCode::Up), 1);
    }

    #[test]
    fn test_digit_index() {
        assert_eq!(digit_index(&KeyEvent::from(KeyCode::Char('1'))), Some(0));
        assert_eq!(digit_index(&KeyEvent::from(KeyCode::Char('5'))), Some(4));
        assert_eq!(digit_index(&KeyEvent::from(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_back_button_hit_box() {
        let header = Rect::new(2, 1, 80, 1);
        assert!(hits_back(header, 2, 1));
        assert!(hits_back(header, 8, 1));
        assert!(!hits_back(header, 9, 1));
        assert!(!hits_back(header, 3, 2));
    }
}
