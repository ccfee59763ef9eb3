use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Widget};

use crate::text::word_wrap;
use crate::theme::Theme;

/// A centered paper card laid over the board
pub struct PopupWidget {
    pub title: String,
    pub lines: Vec<(String, Style)>,
    pub accent: ratatui::style::Color,
    pub width_percent: u16,
    pub height_percent: u16,
}

impl PopupWidget {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            accent: Theme::YELLOW,
            width_percent: 60,
            height_percent: 40,
        }
    }

    pub fn line(mut self, text: impl Into<String>, style: Style) -> Self {
        self.lines.push((text.into(), style));
        self
    }

    pub fn accent(mut self, color: ratatui::style::Color) -> Self {
        self.accent = color;
        self
    }

    pub fn size(mut self, width_percent: u16, height_percent: u16) -> Self {
        self.width_percent = width_percent;
        self.height_percent = height_percent;
        self
    }
}

impl Widget for PopupWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }
        let popup_area = centered_rect(self.width_percent, self.height_percent, area);

        Clear.render(popup_area, buf);

        let title_line = Line::from(Span::styled(
            format!(" {} ", self.title),
            Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD),
        ));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.accent))
            .style(Style::default().bg(Theme::PAPER).fg(Theme::INK))
            .title(title_line)
            .title_alignment(Alignment::Center)
            .padding(Padding::uniform(1));

        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        // Long lines wrap; every row is centered
        let mut y = inner.y;
        for (text, style) in &self.lines {
            let wrapped = if text.is_empty() {
                vec![String::new()]
            } else {
                word_wrap(text, inner.width as usize)
            };
            for row in wrapped {
                if y >= inner.bottom() {
                    return;
                }
                let x = inner.x + inner.width.saturating_sub(row.chars().count() as u16) / 2;
                buf.set_string(x, y, &row, *style);
                y += 1;
            }
        }
    }
}

/// `percent_x` by `percent_y` of `area`, centered in it. Percentages above 100 clamp.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let scale =
        |len: u16, percent: u16| (u32::from(len) * u32::from(percent.min(100)) / 100) as u16;
    let width = scale(area.width, percent_x);
    let height = scale(area.height, percent_y);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
