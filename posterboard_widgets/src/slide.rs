use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

/// Copy a screen drawn off-screen into `dst`, shifted `dx` columns.
///
/// Blank cells are transparent so the board shows through, and cells without
/// their own background keep the one already underneath. Columns pushed past
/// either edge of `area` are clipped.
pub fn blit_offset(src: &Buffer, dst: &mut Buffer, area: Rect, dx: i32) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let Some(cell) = src.cell((x, y)) else {
                continue;
            };
            if cell.symbol() == " " && cell.bg == Color::Reset {
                continue;
            }

            let target_x = x as i32 + dx;
            if target_x < area.left() as i32 || target_x >= area.right() as i32 {
                continue;
            }

            if let Some(target) = dst.cell_mut((target_x as u16, y)) {
                let underneath = target.bg;
                *target = cell.clone();
                if cell.bg == Color::Reset {
                    target.set_bg(underneath);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    #[test]
    fn test_shift_right_clips_overflow() {
        let area = Rect::new(0, 0, 6, 1);
        let mut src = Buffer::empty(area);
        src.set_string(0, 0, "abcdef", Style::default());
        let mut dst = Buffer::empty(area);

        blit_offset(&src, &mut dst, area, 2);
        let row: String = (0..6).map(|x| dst[(x, 0)].symbol().to_string()).collect();
        assert_eq!(row, "  abcd");
    }

    #[test]
    fn test_shift_left() {
        let area = Rect::new(0, 0, 6, 1);
        let mut src = Buffer::empty(area);
        src.set_string(0, 0, "abcdef", Style::default());
        let mut dst = Buffer::empty(area);

        blit_offset(&src, &mut dst, area, -3);
        let row: String = (0..6).map(|x| dst[(x, 0)].symbol().to_string()).collect();
        assert_eq!(row, "def   ");
    }

    #[test]
    fn test_blank_cells_are_transparent() {
        let area = Rect::new(0, 0, 3, 1);
        let src = Buffer::empty(area);
        let mut dst = Buffer::empty(area);
        dst.set_string(0, 0, "xyz", Style::default().bg(Color::Green));

        blit_offset(&src, &mut dst, area, 0);
        assert_eq!(dst[(1, 0)].symbol(), "y");
    }

    #[test]
    fn test_text_keeps_background_underneath() {
        let area = Rect::new(0, 0, 3, 1);
        let mut src = Buffer::empty(area);
        src.set_string(0, 0, "a", Style::default().fg(Color::White));
        let mut dst = Buffer::empty(area);
        dst.set_style(area, Style::default().bg(Color::Green));

        blit_offset(&src, &mut dst, area, 0);
        assert_eq!(dst[(0, 0)].symbol(), "a");
        assert_eq!(dst[(0, 0)].bg, Color::Green);
        assert_eq!(dst[(0, 0)].fg, Color::White);
    }
}
