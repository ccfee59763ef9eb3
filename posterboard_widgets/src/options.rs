use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Widget};

use crate::theme::Theme;

const OPTION_HEIGHT: u16 = 3;

/// Answer buttons for a multiple-choice question
pub struct OptionListWidget<'a> {
    pub options: &'a [&'a str],
    pub cursor: usize,
    pub selected: Option<usize>,
    pub correct: Option<bool>,
    pub reveal: Option<usize>,
}

impl<'a> OptionListWidget<'a> {
    pub fn new(options: &'a [&'a str]) -> Self {
        Self {
            options,
            cursor: 0,
            selected: None,
            correct: None,
            reveal: None,
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    /// Lock the list on an answer and colour it by correctness
    pub fn answered(mut self, selected: Option<usize>, correct: Option<bool>) -> Self {
        self.selected = selected;
        self.correct = correct;
        self
    }

    /// Outline the right answer after a miss
    pub fn reveal(mut self, index: Option<usize>) -> Self {
        self.reveal = index;
        self
    }

    /// Where option `index` is drawn, for mouse hit-testing
    pub fn option_rect(&self, area: Rect, index: usize) -> Option<Rect> {
        if index >= self.options.len() {
            return None;
        }
        let y = area.y + index as u16 * OPTION_HEIGHT;
        if y + OPTION_HEIGHT > area.bottom() {
            return None;
        }
        Some(Rect::new(area.x, y, area.width, OPTION_HEIGHT))
    }

    pub fn height(&self) -> u16 {
        self.options.len() as u16 * OPTION_HEIGHT
    }
}

impl Widget for OptionListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }
        let locked = self.selected.is_some();

        for (i, option) in self.options.iter().enumerate() {
            let Some(rect) = self.option_rect(area, i) else {
                break;
            };

            let (border, fill) = match (self.selected, self.correct) {
                (Some(sel), Some(true)) if sel == i => (Theme::CORRECT, Some(Theme::CORRECT)),
                (Some(sel), Some(false)) if sel == i => (Theme::WRONG, Some(Theme::WRONG)),
                (Some(sel), None) if sel == i => (Theme::SELECTED, None),
                _ if self.reveal == Some(i) => (Theme::CORRECT, None),
                _ if !locked && i == self.cursor => (Theme::SELECTED, None),
                _ => (Theme::CHALK_DIM, None),
            };

            let border_type = if !locked && i == self.cursor {
                BorderType::Double
            } else {
                BorderType::Rounded
            };

            let mut block = Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(Style::default().fg(border));
            if let Some(fill) = fill {
                block = block.style(Style::default().bg(fill));
            }
            let inner = block.inner(rect);
            block.render(rect, buf);
            if inner.is_empty() {
                continue;
            }

            let text_style = if locked && self.selected != Some(i) {
                Style::default().fg(Theme::CHALK_DIM)
            } else {
                Style::default()
                    .fg(Theme::CHALK)
                    .add_modifier(Modifier::BOLD)
            };
            let line = Line::from(vec![
                Span::styled(format!("{}. ", i + 1), Style::default().fg(Theme::YELLOW)),
                Span::styled(*option, text_style),
            ]);
            buf.set_line(inner.x + 1, inner.y, &line, inner.width.saturating_sub(1));
        }
    }
}
