use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

use crate::theme::Theme;

const DUST_SYMBOLS: [&str; 4] = ["·", "˙", "∙", "'"];

/// Animated chalkboard: a slow green wave with scattered chalk dust
pub struct ChalkboardWidget {
    pub tick: u64,
    pub dust_seed: u64,
}

impl ChalkboardWidget {
    pub fn new(tick: u64) -> Self {
        Self { tick, dust_seed: 0 }
    }

    pub fn dust_seed(mut self, seed: u64) -> Self {
        self.dust_seed = seed;
        self
    }
}

impl Widget for ChalkboardWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cycle = (self.tick % 720) as f64;
        let (base_r, base_g, base_b) = match Theme::BOARD {
            Color::Rgb(r, g, b) => (r as i16, g as i16, b as i16),
            _ => (28, 58, 44),
        };

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let wave = ((x as f64 * 0.15 + y as f64 * 0.35 + cycle * 0.015).sin() * 3.0) as i16;

                let r = (base_r + wave / 2).clamp(0, 255) as u8;
                let g = (base_g + wave).clamp(0, 255) as u8;
                let b = (base_b + wave / 2).clamp(0, 255) as u8;

                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(" ");
                    cell.set_bg(Color::Rgb(r, g, b));
                }
            }
        }

        // Dust stays put between frames: same seed, same specks
        let size = ((area.width as u64) << 16) | area.height as u64;
        let mut rng = StdRng::seed_from_u64(self.dust_seed ^ size);
        let specks = (area.width as usize * area.height as usize) / 40;
        for _ in 0..specks {
            if area.width == 0 || area.height == 0 {
                break;
            }
            let x = area.x + rng.gen_range(0..area.width);
            let y = area.y + rng.gen_range(0..area.height);
            let symbol = DUST_SYMBOLS[rng.gen_range(0..DUST_SYMBOLS.len())];
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(symbol);
                cell.set_fg(Theme::CHALK_DUST);
            }
        }
    }
}

/// Wooden frame around the board, with a chalk ledge along the bottom
pub struct FrameWidget {
    pub tick: u64,
    /// The board picture could not be found; a broken-image mark sits on the frame
    pub backdrop_missing: bool,
}

impl FrameWidget {
    pub fn new(tick: u64) -> Self {
        Self {
            tick,
            backdrop_missing: false,
        }
    }

    pub fn backdrop_missing(mut self, missing: bool) -> Self {
        self.backdrop_missing = missing;
        self
    }
}

impl Widget for FrameWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 4 {
            return;
        }

        let cycle = (self.tick % 600) as f64;

        for x in area.left()..area.right() {
            let t = (x as f64 / area.width as f64 * 6.0 + cycle * 0.004).sin().abs();
            let color = interpolate_color(Theme::WOOD, Theme::WOOD_LIGHT, (t * 0.5) as f32);
            set_cell(buf, x, area.top(), "▀", Style::default().fg(color));
            set_cell(buf, x, area.bottom().saturating_sub(1), "▄", Style::default().fg(color));
        }

        for y in area.top()..area.bottom() {
            set_cell(buf, area.left(), y, "█", Style::default().fg(Theme::WOOD));
            set_cell(buf, area.right().saturating_sub(1), y, "█", Style::default().fg(Theme::WOOD));
        }

        // A stick of chalk resting on the ledge
        let ledge_y = area.bottom().saturating_sub(1);
        let chalk_x = area.right().saturating_sub(8);
        for (i, symbol) in ["▬", "▬"].iter().enumerate() {
            set_cell(buf, chalk_x + i as u16, ledge_y, symbol, Style::default().fg(Theme::CHALK));
        }

        if self.backdrop_missing {
            set_cell(buf, area.left() + 2, area.top(), "⊠", Style::default().fg(Theme::CHALK_DUST));
        }
    }
}

fn set_cell(buf: &mut Buffer, x: u16, y: u16, symbol: &str, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol(symbol);
        if let Some(fg) = style.fg {
            cell.set_fg(fg);
        }
    }
}

pub(crate) fn interpolate_color(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let r = (r1 as f32 + (r2 as f32 - r1 as f32) * t) as u8;
            let g = (g1 as f32 + (g2 as f32 - g1 as f32) * t) as u8;
            let b = (b1 as f32 + (b2 as f32 - b1 as f32) * t) as u8;
            Color::Rgb(r, g, b)
        }
        _ => to,
    }
}
