use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};
use tracing::debug;

use posterboard_core::content::{INSTRUCTIONS_NOTES, INSTRUCTIONS_POSTER, INSTRUCTIONS_TITLE};
use posterboard_core::{MediaStatus, ScreenId};
use posterboard_widgets::header::HeaderWidget;
use posterboard_widgets::image::ImageFrameWidget;
use posterboard_widgets::theme::Theme;

use crate::app::ScreenAction;
use crate::screens::{hits_back, is_back, left_click, Screen, ScreenContext};

/// The class poster with its notes beside it
pub struct InstructionsScreen {
    poster: MediaStatus,
    pub scroll: u16,
    header: Rect,
}

impl InstructionsScreen {
    pub fn new(assets_dir: &Path) -> Self {
        let poster = INSTRUCTIONS_POSTER.resolve(assets_dir);
        if !poster.is_available() {
            debug!(path = INSTRUCTIONS_POSTER.path, "instructions poster missing");
        }
        Self {
            poster,
            scroll: 0,
            header: Rect::default(),
        }
    }

    fn notes() -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (heading, points) in INSTRUCTIONS_NOTES {
            lines.push(Line::from(Span::styled(
                heading,
                Style::default()
                    .fg(Theme::YELLOW)
                    .add_modifier(Modifier::BOLD),
            )));
            for point in points {
                lines.push(Line::from(vec![
                    Span::styled("• ", Style::default().fg(Theme::CHALK_DIM)),
                    Span::styled(*point, Style::default().fg(Theme::CHALK)),
                ]));
            }
            lines.push(Line::from(""));
        }
        lines
    }

    fn scroll_by(&mut self, delta: i32) {
        let max = Self::notes().len() as i32;
        self.scroll = (self.scroll as i32 + delta).clamp(0, max) as u16;
    }
}

impl Screen for InstructionsScreen {
    fn render(&mut self, area: Rect, buf: &mut Buffer, _ctx: &ScreenContext) {
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(area);

        self.header = chunks[0];
        HeaderWidget::new(INSTRUCTIONS_TITLE).render(chunks[0], buf);

        let columns = Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(chunks[2]);
        ImageFrameWidget::new(&INSTRUCTIONS_POSTER, &self.poster).render(columns[0], buf);

        let notes = columns[1];
        Paragraph::new(Self::notes())
            .wrap(Wrap { trim: true })
            .scroll((self.scroll, 0))
            .render(
                Rect::new(notes.x + 2, notes.y, notes.width.saturating_sub(2), notes.height),
                buf,
            );

        Paragraph::new(Span::styled(
            "[↑↓] Gulir  [Esc] Menu",
            Style::default().fg(Theme::CHALK_DUST),
        ))
        .alignment(Alignment::Center)
        .render(chunks[3], buf);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<ScreenAction> {
        if is_back(&key) {
            return vec![ScreenAction::Navigate(ScreenId::Menu)];
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-5),
            KeyCode::PageDown => self.scroll_by(5),
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Vec<ScreenAction> {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll_by(-1),
            MouseEventKind::ScrollDown => self.scroll_by(1),
            _ => {}
        }
        match left_click(&mouse) {
            Some((column, row)) if hits_back(self.header, column, row) => {
                vec![ScreenAction::Navigate(ScreenId::Menu)]
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_scroll_is_clamped() {
        let mut screen = InstructionsScreen::new(Path::new("/nonexistent"));
        screen.handle_key(KeyEvent::from(KeyCode::Up));
        assert_eq!(screen.scroll, 0);
        screen.handle_key(KeyEvent::from(KeyCode::Down));
        assert_eq!(screen.scroll, 1);
        for _ in 0..100 {
            screen.handle_key(KeyEvent::from(KeyCode::PageDown));
        }
        assert_eq!(screen.scroll as usize, InstructionsScreen::notes().len());
    }

    #[test]
    fn test_escape_returns_to_menu() {
        let mut screen = InstructionsScreen::new(Path::new("/nonexistent"));
        assert_eq!(
            screen.handle_key(KeyEvent::from(KeyCode::Esc)),
            vec![ScreenAction::Navigate(ScreenId::Menu)]
        );
    }

    #[test]
    fn test_poster_found_in_assets_dir() {
        let dir = tempfile::tempdir().unwrap();
        let images = dir.path().join("images");
        fs::create_dir_all(&images).unwrap();
        fs::write(images.join("poster-persatuan.jpeg"), b"jpeg").unwrap();

        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);
        let mut screen = InstructionsScreen::new(dir.path());
        assert!(screen.poster.is_available());
        screen.render(area, &mut buf, &ScreenContext { score: 0, tick: 0 });

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect();
        assert!(text.contains("▣"));
        assert!(text.contains("Pengertian Persatuan"));
    }
}
