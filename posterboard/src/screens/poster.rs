use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use posterboard_core::content::TOPICS;
use posterboard_core::{Cue, MediaStatus, ScreenId};
use posterboard_widgets::cards::{card_at, Card, CardGridWidget, CARD_HEIGHT};
use posterboard_widgets::header::HeaderWidget;
use posterboard_widgets::image::ImageFrameWidget;
use posterboard_widgets::theme::Theme;
use tracing::debug;

use crate::app::ScreenAction;
use crate::screens::{
    digit_index, hits_back, is_back, left_click, move_in_grid, Screen, ScreenContext,
};

const COLUMNS: u16 = 3;

/// Poster topics: pick one from the grid, then read it next to its picture
pub struct PosterScreen {
    pub cursor: usize,
    pub open: Option<usize>,
    images: Vec<MediaStatus>,
    header: Rect,
    grid: Rect,
}

impl PosterScreen {
    pub fn new(assets_dir: &Path) -> Self {
        let images = TOPICS
            .iter()
            .map(|topic| {
                let status = topic.image.resolve(assets_dir);
                if !status.is_available() {
                    debug!(path = topic.image.path, "poster image missing");
                }
                status
            })
            .collect();
        Self {
            cursor: 0,
            open: None,
            images,
            header: Rect::default(),
            grid: Rect::default(),
        }
    }

    fn open_topic(&mut self, index: usize) -> Vec<ScreenAction> {
        if index >= TOPICS.len() {
            return Vec::new();
        }
        self.cursor = index;
        self.open = Some(index);
        vec![ScreenAction::Play(Cue::Click)]
    }

    /// Close the open topic, or leave when the grid is showing
    fn back(&mut self) -> Vec<ScreenAction> {
        if self.open.take().is_some() {
            vec![ScreenAction::Play(Cue::Click)]
        } else {
            vec![ScreenAction::Navigate(ScreenId::Menu)]
        }
    }

    fn render_topic(&self, index: usize, area: Rect, buf: &mut Buffer) {
        let topic = &TOPICS[index];
        let columns = Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        if let Some(status) = self.images.get(index) {
            ImageFrameWidget::new(&topic.image, status).render(columns[0], buf);
        }

        let text = vec![
            Line::from(Span::styled(
                topic.title,
                Style::default()
                    .fg(Theme::YELLOW)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(topic.body, Style::default().fg(Theme::CHALK))),
        ];
        let body = columns[1];
        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .render(
                Rect::new(body.x + 2, body.y, body.width.saturating_sub(2), body.height),
                buf,
            );
    }
}

impl Screen for PosterScreen {
    fn render(&mut self, area: Rect, buf: &mut Buffer, _ctx: &ScreenContext) {
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(1),
        ])
        .split(area);

        self.header = chunks[0];
        HeaderWidget::new("Materi Persatuan").render(chunks[0], buf);

        let hint = match self.open {
            Some(index) => {
                self.render_topic(index, chunks[2], buf);
                "[Esc] Kembali ke daftar poster"
            }
            None => {
                self.grid = Rect::new(
                    chunks[2].x,
                    chunks[2].y + 1,
                    chunks[2].width,
                    CARD_HEIGHT.min(chunks[2].height),
                );
                let cards = TOPICS
                    .iter()
                    .map(|topic| Card::new(topic.title, "Tekan Enter untuk membaca", Theme::BLUE))
                    .collect();
                CardGridWidget::new(cards)
                    .columns(COLUMNS)
                    .cursor(Some(self.cursor))
                    .render(self.grid, buf);
                "[←→] Pilih  [Enter] Baca  [Esc] Menu"
            }
        };

        Paragraph::new(Span::styled(hint, Style::default().fg(Theme::CHALK_DUST)))
            .alignment(Alignment::Center)
            .render(chunks[3], buf);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<ScreenAction> {
        if is_back(&key) {
            return self.back();
        }
        if self.open.is_some() {
            return Vec::new();
        }
        if let Some(index) = digit_index(&key) {
            return self.open_topic(index);
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.open_topic(self.cursor),
            code => {
                self.cursor = move_in_grid(self.cursor, TOPICS.len(), COLUMNS as usize, code);
                Vec::new()
            }
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Vec<ScreenAction> {
        let Some((column, row)) = left_click(&mouse) else {
            return Vec::new();
        };
        if hits_back(self.header, column, row) {
            return self.back();
        }
        if self.open.is_some() {
            return Vec::new();
        }
        match card_at(self.grid, TOPICS.len(), COLUMNS, column, row) {
            Some(index) => self.open_topic(index),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> PosterScreen {
        PosterScreen::new(Path::new("/nonexistent/assets"))
    }

    #[test]
    fn test_missing_images_resolve_to_placeholders() {
        let poster = screen();
        assert_eq!(poster.images.len(), 3);
        assert!(poster.images.iter().all(|s| *s == MediaStatus::Missing));
    }

    #[test]
    fn test_back_closes_topic_before_leaving() {
        let mut poster = screen();
        poster.handle_key(KeyEvent::from(KeyCode::Char('2')));
        assert_eq!(poster.open, Some(1));

        assert_eq!(
            poster.handle_key(KeyEvent::from(KeyCode::Esc)),
            vec![ScreenAction::Play(Cue::Click)]
        );
        assert_eq!(poster.open, None);
        assert_eq!(
            poster.handle_key(KeyEvent::from(KeyCode::Esc)),
            vec![ScreenAction::Navigate(ScreenId::Menu)]
        );
    }

    #[test]
    fn test_open_topic_renders_alt_text() {
        let area = Rect::new(0, 0, 90, 24);
        let mut buf = Buffer::empty(area);
        let mut poster = screen();
        poster.handle_key(KeyEvent::from(KeyCode::Enter));
        poster.render(area, &mut buf, &ScreenContext { score: 0, tick: 0 });

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect();
        assert!(text.contains("⊠"));
        assert!(text.contains("Keindahan Sekolahku"));
    }
}
