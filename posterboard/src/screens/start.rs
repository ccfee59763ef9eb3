use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use posterboard_core::content::INSTRUCTIONS_TITLE;
use posterboard_core::{Cast, Cue, Mood, MoodTimer, ScreenId};
use posterboard_widgets::character::{CharacterWidget, CHARACTER_HEIGHT, CHARACTER_WIDTH};
use posterboard_widgets::theme::Theme;

use crate::app::ScreenAction;
use crate::screens::{contains, left_click, Screen, ScreenContext};

const TITLE: [&str; 3] = [
    "╔═╗╔═╗╦═╗╔═╗╔═╗╔╦╗╦ ╦╔═╗╔╗╔",
    "╠═╝║╣ ╠╦╝╚═╗╠═╣ ║ ║ ║╠═╣║║║",
    "╩  ╚═╝╩╚═╚═╝╩ ╩ ╩ ╚═╝╩ ╩╝╚╝",
];

const BUTTON: &str = "[  Mulai  ]";

pub struct StartScreen {
    teacher: MoodTimer,
    button: Rect,
}

impl StartScreen {
    pub fn new() -> Self {
        Self {
            teacher: MoodTimer::briefly(Mood::Talking, Duration::from_secs(3)),
            button: Rect::default(),
        }
    }

    fn start() -> Vec<ScreenAction> {
        vec![
            ScreenAction::Play(Cue::Start),
            ScreenAction::Navigate(ScreenId::Menu),
        ]
    }
}

impl Screen for StartScreen {
    fn render(&mut self, area: Rect, buf: &mut Buffer, ctx: &ScreenContext) {
        let chunks = Layout::vertical([
            Constraint::Percentage(20),
            Constraint::Length(7),
            Constraint::Length(CHARACTER_HEIGHT),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(area);

        let title_style = Style::default()
            .fg(Theme::CHALK)
            .add_modifier(Modifier::BOLD);
        let mut title_lines: Vec<Line> = TITLE
            .iter()
            .map(|row| Line::from(Span::styled(*row, title_style)))
            .collect();
        title_lines.push(Line::from(""));
        title_lines.push(Line::from(Span::styled(
            "Poster Board",
            Style::default().fg(Theme::YELLOW),
        )));
        title_lines.push(Line::from(Span::styled(
            INSTRUCTIONS_TITLE,
            Style::default().fg(Theme::CHALK_DIM),
        )));
        Paragraph::new(title_lines)
            .alignment(Alignment::Center)
            .render(chunks[1], buf);

        // Teacher and classmates stand side by side
        let cast_row = chunks[2];
        let pair_width = CHARACTER_WIDTH * 2 + 4;
        let left = cast_row.x + cast_row.width.saturating_sub(pair_width) / 2;
        let teacher_area = Rect::new(left, cast_row.y, CHARACTER_WIDTH, cast_row.height);
        let group_area = Rect::new(
            left + CHARACTER_WIDTH + 4,
            cast_row.y,
            CHARACTER_WIDTH,
            cast_row.height,
        );
        CharacterWidget::new(Cast::Teacher)
            .mood(self.teacher.mood())
            .tick(ctx.tick)
            .render(teacher_area.intersection(area), buf);
        CharacterWidget::new(Cast::Group)
            .mood(Mood::Excited)
            .tick(ctx.tick)
            .render(group_area.intersection(area), buf);

        let button_row = chunks[3];
        let width = BUTTON.chars().count() as u16;
        self.button = Rect::new(
            button_row.x + button_row.width.saturating_sub(width) / 2,
            button_row.y + 1,
            width,
            1,
        )
        .intersection(area);
        let button_bg = if (ctx.tick / 15) % 2 == 0 {
            Theme::YELLOW
        } else {
            Theme::ORANGE
        };
        // The clipped rect may be empty on a tiny terminal
        Paragraph::new(Span::styled(
            BUTTON,
            Style::default()
                .fg(Theme::INK)
                .bg(button_bg)
                .add_modifier(Modifier::BOLD),
        ))
        .render(self.button, buf);

        let footer = Paragraph::new(Line::from(vec![
            Span::styled("[", Style::default().fg(Theme::CHALK_DUST)),
            Span::styled("Enter", Style::default().fg(Theme::YELLOW)),
            Span::styled("] Mulai  [", Style::default().fg(Theme::CHALK_DUST)),
            Span::styled("q", Style::default().fg(Theme::YELLOW)),
            Span::styled("] Keluar", Style::default().fg(Theme::CHALK_DUST)),
        ]))
        .alignment(Alignment::Center);
        let footer_area = chunks[4];
        if footer_area.height > 0 {
            let y = footer_area.bottom() - 1;
            footer.render(Rect::new(footer_area.x, y, footer_area.width, 1), buf);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<ScreenAction> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Self::start(),
            _ => Vec::new(),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Vec<ScreenAction> {
        match left_click(&mouse) {
            Some((column, row)) if contains(self.button, column, row) => Self::start(),
            _ => Vec::new(),
        }
    }

    fn tick(&mut self, dt: Duration) -> Vec<ScreenAction> {
        self.teacher.tick(dt);
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEventKind};

    #[test]
    fn test_enter_starts_the_lesson() {
        let mut screen = StartScreen::new();
        let actions = screen.handle_key(KeyEvent::from(KeyCode::Enter));
        assert_eq!(
            actions,
            vec![
                ScreenAction::Play(Cue::Start),
                ScreenAction::Navigate(ScreenId::Menu)
            ]
        );
        assert!(screen.handle_key(KeyEvent::from(KeyCode::Char('x'))).is_empty());
    }

    #[test]
    fn test_clicking_the_button() {
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        let mut screen = StartScreen::new();
        screen.render(area, &mut buf, &ScreenContext { score: 0, tick: 0 });

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: screen.button.x + 2,
            row: screen.button.y,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(screen.handle_mouse(click).len(), 2);

        let miss = MouseEvent { row: 0, ..click };
        assert!(screen.handle_mouse(miss).is_empty());
    }

    #[test]
    fn test_renders_into_a_single_cell() {
        let area = Rect::new(2, 1, 1, 1);
        let mut buf = Buffer::empty(area);
        let mut screen = StartScreen::new();
        screen.render(area, &mut buf, &ScreenContext { score: 0, tick: 0 });
        assert!(screen.button.is_empty());
    }
}
