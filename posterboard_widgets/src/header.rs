use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// Screen title bar: back hint on the left, title centered, score badge right
pub struct HeaderWidget<'a> {
    pub title: &'a str,
    pub score: Option<u32>,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            score: None,
        }
    }

    pub fn score(mut self, score: u32) -> Self {
        self.score = Some(score);
        self
    }
}

impl Widget for HeaderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }
        let y = area.y;

        let back = Line::from(vec![
            Span::styled(
                " ← ",
                Style::default()
                    .fg(Theme::CHALK)
                    .bg(Theme::WRONG)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Esc", Style::default().fg(Theme::CHALK_DIM)),
        ]);
        buf.set_line(area.x, y, &back, area.width);

        let title_width = self.title.chars().count() as u16;
        let title_x = area.x + area.width.saturating_sub(title_width) / 2;
        buf.set_string(
            title_x,
            y,
            self.title,
            Style::default()
                .fg(Theme::CHALK)
                .add_modifier(Modifier::BOLD),
        );

        if let Some(score) = self.score {
            let badge = format!(" Skor: {} ", score);
            let badge_width = badge.chars().count() as u16;
            let badge_x = area.right().saturating_sub(badge_width);
            buf.set_string(
                badge_x,
                y,
                &badge,
                Style::default()
                    .fg(Theme::CHALK)
                    .bg(Theme::SCORE)
                    .add_modifier(Modifier::BOLD),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, width: u16) -> String {
        (0..width).map(|x| buf[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn test_header_shows_title_and_score() {
        let area = Rect::new(0, 0, 50, 1);
        let mut buf = Buffer::empty(area);
        HeaderWidget::new("Quiz Seru").score(30).render(area, &mut buf);
        let text = row(&buf, 50);
        assert!(text.contains("Quiz Seru"));
        assert!(text.ends_with(" Skor: 30 "));
        assert!(text.contains("Esc"));
    }

    #[test]
    fn test_header_without_score() {
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        HeaderWidget::new("Menu Utama").render(area, &mut buf);
        let text = row(&buf, 30);
        assert!(text.starts_with(" ← "));
        assert!(!text.contains("Skor"));
    }
}
