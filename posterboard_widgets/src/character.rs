use posterboard_core::{Cast, Mood};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

use crate::theme::Theme;

pub const CHARACTER_WIDTH: u16 = 9;
pub const CHARACTER_HEIGHT: u16 = 6;

/// A small chalk figure that moves with its mood
pub struct CharacterWidget {
    pub cast: Cast,
    pub mood: Mood,
    pub tick: u64,
}

impl CharacterWidget {
    pub fn new(cast: Cast) -> Self {
        Self {
            cast,
            mood: Mood::Idle,
            tick: 0,
        }
    }

    pub fn mood(mut self, mood: Mood) -> Self {
        self.mood = mood;
        self
    }

    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    fn color(&self) -> Color {
        match self.cast {
            Cast::Teacher => Theme::YELLOW,
            Cast::Boy => Theme::BLUE,
            Cast::Girl => Theme::PINK,
            Cast::Group => Theme::ORANGE,
        }
    }

    fn hair(&self) -> &'static str {
        match self.cast {
            Cast::Teacher => "  ,___,  ",
            Cast::Boy => "  ^^^^^  ",
            Cast::Girl => " ~~~~~~~ ",
            Cast::Group => " ^^ ~~ ^^",
        }
    }

    fn face(&self) -> String {
        let eyes = match self.mood {
            Mood::Thinking => "- o",
            Mood::Excited => "^ ^",
            _ if self.blinking() => "- -",
            _ => "o o",
        };
        let mouth = match self.mood {
            // Mouth opens and closes about three times a second
            Mood::Talking if (self.tick / 5) % 2 == 0 => "O",
            Mood::Talking => "-",
            Mood::Excited => "D",
            Mood::Thinking => "~",
            Mood::Idle => "‿",
        };
        if self.cast == Cast::Group {
            format!("({}{}) ({})", &eyes[..1], mouth, &eyes[2..])
        } else {
            format!(" ( {}{}{} ) ", &eyes[..1], mouth, &eyes[2..])
        }
    }

    fn arms(&self) -> &'static str {
        match self.mood {
            Mood::Excited if (self.tick / 4) % 2 == 0 => " \\ | / ",
            Mood::Excited => " _\\|/_ ",
            Mood::Thinking => "  /|?  ",
            Mood::Talking => "  /|\\_ ",
            Mood::Idle => "  /|\\  ",
        }
    }

    fn blinking(&self) -> bool {
        self.tick % 90 < 3
    }

    /// Rows of the figure, top to bottom
    pub fn frame(&self) -> Vec<String> {
        let legs = if self.cast == Cast::Girl {
            "  /_\\  "
        } else {
            "  / \\  "
        };
        vec![
            self.hair().to_string(),
            self.face(),
            format!(" {} ", self.arms()),
            format!(" {} ", legs),
        ]
    }

    /// Rows the figure is lifted by this frame
    fn bounce(&self) -> u16 {
        match self.mood {
            Mood::Excited if (self.tick / 4) % 2 == 0 => 1,
            _ => 0,
        }
    }
}

impl Widget for CharacterWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let frame = self.frame();
        let height = frame.len() as u16;
        if area.height < height {
            return;
        }

        let lift = self.bounce().min(area.height - height);
        let top = area.bottom() - height - lift;
        let style = Style::default().fg(self.color());
        for (i, row) in frame.iter().enumerate() {
            let width = row.chars().count() as u16;
            let x = area.x + area.width.saturating_sub(width) / 2;
            for (j, ch) in row.chars().enumerate() {
                if ch == ' ' {
                    continue;
                }
                if let Some(cell) = buf.cell_mut((x + j as u16, top + i as u16)) {
                    cell.set_char(ch);
                    cell.set_style(style);
                }
            }
        }
    }
}
