use posterboard_core::{MediaRef, MediaStatus};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Widget};

use crate::text::{center_text, word_wrap};
use crate::theme::Theme;

/// Framed stand-in for a static picture.
///
/// A terminal cannot show the bitmap itself, so a found file is drawn as a
/// labelled frame and a missing one as a broken-image placeholder with its alt
/// text.
pub struct ImageFrameWidget<'a> {
    pub media: &'a MediaRef,
    pub status: &'a MediaStatus,
}

impl<'a> ImageFrameWidget<'a> {
    pub fn new(media: &'a MediaRef, status: &'a MediaStatus) -> Self {
        Self { media, status }
    }
}

impl Widget for ImageFrameWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }
        let (border, icon, caption) = match self.status {
            MediaStatus::Available(_) => (Theme::WOOD_LIGHT, "▣", self.media.file_name()),
            MediaStatus::Missing => (Theme::CHALK_DUST, "⊠", self.media.alt),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let width = inner.width as usize;
        let mut rows = vec![(
            icon.to_string(),
            Style::default().fg(border).add_modifier(Modifier::BOLD),
        )];
        for line in word_wrap(caption, width) {
            rows.push((line, Style::default().fg(Theme::CHALK_DIM)));
        }

        let top = inner.y + inner.height.saturating_sub(rows.len() as u16) / 2;
        for (i, (text, style)) in rows.iter().enumerate() {
            let y = top + i as u16;
            if y >= inner.bottom() {
                break;
            }
            buf.set_string(inner.x, y, center_text(text, width), *style);
        }
    }
}
