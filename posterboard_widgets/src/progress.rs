use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// Seconds at or below which the countdown turns red
pub const URGENT_SECONDS: u64 = 10;

/// "Pertanyaan x dari n" with a thin bar underneath
pub struct ProgressWidget {
    pub position: usize,
    pub total: usize,
}

impl ProgressWidget {
    pub fn new(position: usize, total: usize) -> Self {
        Self { position, total }
    }

    pub fn label(&self) -> String {
        format!("Pertanyaan {} dari {}", self.position, self.total)
    }
}

impl Widget for ProgressWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }
        let label = self.label();
        buf.set_string(
            area.x,
            area.y,
            &label,
            Style::default().fg(Theme::CHALK_DIM),
        );

        if area.height < 2 || self.total == 0 {
            return;
        }
        let filled = (area.width as usize * self.position.min(self.total)) / self.total;
        for x in 0..area.width {
            let (symbol, color) = if (x as usize) < filled {
                ("━", Theme::YELLOW)
            } else {
                ("─", Theme::CHALK_DUST)
            };
            if let Some(cell) = buf.cell_mut((area.x + x, area.y + 1)) {
                cell.set_symbol(symbol);
                cell.set_fg(color);
            }
        }
    }
}

/// Seconds left on the adventure clock
pub struct CountdownWidget {
    pub seconds_left: u64,
    pub fraction_left: f64,
}

impl CountdownWidget {
    pub fn new(seconds_left: u64, fraction_left: f64) -> Self {
        Self {
            seconds_left,
            fraction_left: fraction_left.clamp(0.0, 1.0),
        }
    }

    pub fn is_urgent(&self) -> bool {
        self.seconds_left <= URGENT_SECONDS
    }
}

impl Widget for CountdownWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }
        let color = if self.is_urgent() {
            Theme::WRONG
        } else {
            Theme::CORRECT
        };

        let label = format!("◷ {}s ", self.seconds_left);
        buf.set_string(
            area.x,
            area.y,
            &label,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        );

        let bar_x = area.x + label.chars().count() as u16;
        let bar_width = area.right().saturating_sub(bar_x);
        let filled = (bar_width as f64 * self.fraction_left).round() as u16;
        for x in 0..bar_width {
            let (symbol, fg) = if x < filled {
                ("█", color)
            } else {
                ("░", Theme::CHALK_DUST)
            };
            if let Some(cell) = buf.cell_mut((bar_x + x, area.y)) {
                cell.set_symbol(symbol);
                cell.set_fg(fg);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_label_and_bar() {
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        ProgressWidget::new(2, 5).render(area, &mut buf);
        assert_eq!(ProgressWidget::new(2, 5).label(), "Pertanyaan 2 dari 5");
        assert_eq!(buf[(3, 1)].symbol(), "━");
        assert_eq!(buf[(4, 1)].symbol(), "─");
    }

    #[test]
    fn test_countdown_turns_red_when_urgent() {
        let area = Rect::new(0, 0, 20, 1);
        let mut calm = Buffer::empty(area);
        CountdownWidget::new(11, 0.4).render(area, &mut calm);
        assert_eq!(calm[(0, 0)].fg, Theme::CORRECT);

        let mut urgent = Buffer::empty(area);
        CountdownWidget::new(10, 0.33).render(area, &mut urgent);
        assert_eq!(urgent[(0, 0)].fg, Theme::WRONG);
    }

    #[test]
    fn test_empty_countdown_has_no_fill() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        CountdownWidget::new(0, 0.0).render(area, &mut buf);
        assert_eq!(buf[(19, 0)].symbol(), "░");
        assert!((0..20).all(|x| buf[(x, 0)].symbol() != "█"));
    }
}
