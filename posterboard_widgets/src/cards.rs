use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Widget};

use crate::text::{center_text, word_wrap};
use crate::theme::Theme;

/// Height of one tile in terminal cells
pub const CARD_HEIGHT: u16 = 6;
const GAP: u16 = 1;

/// One tile in a grid
#[derive(Debug, Clone)]
pub struct Card<'a> {
    pub title: &'a str,
    pub caption: &'a str,
    pub accent: Color,
    /// Done tiles are drawn filled and ignore the cursor
    pub done: bool,
}

impl<'a> Card<'a> {
    pub fn new(title: &'a str, caption: &'a str, accent: Color) -> Self {
        Self {
            title,
            caption,
            accent,
            done: false,
        }
    }

    pub fn done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }
}

/// Tiles laid out left to right, wrapping after `columns`
pub struct CardGridWidget<'a> {
    pub cards: Vec<Card<'a>>,
    pub columns: u16,
    pub cursor: Option<usize>,
}

impl<'a> CardGridWidget<'a> {
    pub fn new(cards: Vec<Card<'a>>) -> Self {
        Self {
            cards,
            columns: 3,
            cursor: None,
        }
    }

    pub fn columns(mut self, columns: u16) -> Self {
        self.columns = columns.max(1);
        self
    }

    pub fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }
}

/// Rect of tile `index` in a grid of `count` tiles, or None if it falls outside
/// `area`. Short last rows are centered.
pub fn card_rect(area: Rect, index: usize, count: usize, columns: u16) -> Option<Rect> {
    if index >= count || columns == 0 {
        return None;
    }
    let columns = columns as usize;
    let width = area.width.saturating_sub(GAP * (columns as u16 - 1)) / columns as u16;
    if width == 0 {
        return None;
    }

    let row = index / columns;
    let col = index % columns;
    let in_row = (count - row * columns).min(columns) as u16;
    let row_width = in_row * width + in_row.saturating_sub(1) * GAP;
    let row_x = area.x + area.width.saturating_sub(row_width) / 2;

    let x = row_x + col as u16 * (width + GAP);
    let y = area.y + row as u16 * (CARD_HEIGHT + GAP);
    if y + CARD_HEIGHT > area.bottom() {
        return None;
    }
    Some(Rect::new(x, y, width, CARD_HEIGHT))
}

/// Index of the tile under a terminal cell
pub fn card_at(area: Rect, count: usize, columns: u16, column: u16, row: u16) -> Option<usize> {
    (0..count).find(|&i| {
        card_rect(area, i, count, columns).is_some_and(|r| {
            column >= r.x && column < r.right() && row >= r.y && row < r.bottom()
        })
    })
}

impl Widget for CardGridWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }
        let count = self.cards.len();
        for (i, card) in self.cards.iter().enumerate() {
            let Some(rect) = card_rect(area, i, count, self.columns) else {
                continue;
            };
            let focused = self.cursor == Some(i) && !card.done;

            let (border_color, bg) = if card.done {
                (card.accent, card.accent)
            } else if focused {
                (Theme::SELECTED, Theme::BOARD_DARK)
            } else {
                (card.accent, Theme::BOARD_DARK)
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(if focused {
                    BorderType::Double
                } else {
                    BorderType::Rounded
                })
                .border_style(Style::default().fg(border_color))
                .style(Style::default().bg(bg));
            let inner = block.inner(rect);
            block.render(rect, buf);

            if inner.height == 0 || inner.width == 0 {
                continue;
            }

            // Numbers match the digit shortcuts
            let title = format!("{}. {}", i + 1, card.title);
            let title_fg = if card.done { Theme::INK } else { Theme::CHALK };
            buf.set_string(
                inner.x,
                inner.y,
                center_text(&title, inner.width as usize),
                Style::default().fg(title_fg).add_modifier(Modifier::BOLD),
            );

            let caption_fg = if card.done { Theme::INK } else { Theme::CHALK_DIM };
            for (row, text) in word_wrap(card.caption, inner.width as usize)
                .iter()
                .take(inner.height.saturating_sub(1) as usize)
                .enumerate()
            {
                buf.set_string(
                    inner.x,
                    inner.y + 1 + row as u16,
                    center_text(text, inner.width as usize),
                    Style::default().fg(caption_fg),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_wraps_and_centers_short_row() {
        let area = Rect::new(0, 0, 32, 14);
        let first = card_rect(area, 0, 5, 3).unwrap();
        let third = card_rect(area, 2, 5, 3).unwrap();
        let fourth = card_rect(area, 3, 5, 3).unwrap();
        assert_eq!(first, Rect::new(0, 0, 10, CARD_HEIGHT));
        assert_eq!(third.x, 22);
        assert_eq!(fourth.y, CARD_HEIGHT + GAP);
        // Two tiles of width 10 plus one gap, centered in 32 columns
        assert_eq!(fourth.x, 5);
    }

    #[test]
    fn test_rows_past_bottom_are_hidden() {
        let area = Rect::new(0, 0, 32, 8);
        assert!(card_rect(area, 2, 5, 3).is_some());
        assert_eq!(card_rect(area, 3, 5, 3), None);
        assert_eq!(card_rect(area, 5, 5, 3), None);
    }

    #[test]
    fn test_card_at_hit_tests() {
        let area = Rect::new(0, 0, 32, 14);
        assert_eq!(card_at(area, 5, 3, 1, 1), Some(0));
        assert_eq!(card_at(area, 5, 3, 12, 2), Some(1));
        // The gap between tiles belongs to no one
        assert_eq!(card_at(area, 5, 3, 10, 2), None);
        assert_eq!(card_at(area, 5, 3, 6, 8), Some(3));
    }

    #[test]
    fn test_done_card_is_filled() {
        let area = Rect::new(0, 0, 20, 6);
        let mut buf = Buffer::empty(area);
        CardGridWidget::new(vec![Card::new("Meja", "", Theme::BLUE).done(true)])
            .columns(1)
            .render(area, &mut buf);
        assert_eq!(buf[(5, 2)].bg, Theme::BLUE);
    }
}
