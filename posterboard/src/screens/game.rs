use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap};

use posterboard_core::adventure::{AdventureEvent, LossReason};
use posterboard_core::content::{
    ADVENTURE_INTRO, ADVENTURE_LOST, ADVENTURE_WON, PUZZLE_DONE, PUZZLE_INTRO,
};
use posterboard_core::game::{ActiveGame, GameOutcome, HubPhase, Player, Setup};
use posterboard_core::{
    AdventureGame, AdventurePhase, Cast, Cue, GameHub, GameKind, Gender, Mood, MoodTimer,
    PuzzleGame, ScreenId,
};
use posterboard_widgets::cards::{card_at, Card, CardGridWidget, CARD_HEIGHT};
use posterboard_widgets::character::{CharacterWidget, CHARACTER_HEIGHT, CHARACTER_WIDTH};
use posterboard_widgets::header::HeaderWidget;
use posterboard_widgets::options::OptionListWidget;
use posterboard_widgets::popup::PopupWidget;
use posterboard_widgets::progress::{CountdownWidget, ProgressWidget};
use posterboard_widgets::theme::Theme;

use crate::app::ScreenAction;
use crate::screens::{
    contains, digit_index, hits_back, is_back, left_click, move_in_grid, Screen, ScreenContext,
};

const GAME_COLUMNS: u16 = 2;
const PUZZLE_COLUMNS: u16 = 3;
const REACTION: Duration = Duration::from_secs(2);
const GAME_OVER_HINT: &str = "[Enter] Pilih game lain   [Esc] Kembali";

fn cast_of(gender: Gender) -> Cast {
    match gender {
        Gender::Boy => Cast::Boy,
        Gender::Girl => Cast::Girl,
    }
}

/// Where the last frame put the clickable parts
#[derive(Debug, Default)]
struct HitAreas {
    header: Rect,
    cards: Rect,
    boy: Rect,
    girl: Rect,
    start: Rect,
    options: Rect,
}

/// Game hub: choose a mini-game, set up a player, then play it
pub struct GameScreen {
    pub hub: GameHub,
    pub cursor: usize,
    /// Setup was submitted without a name or a character
    pub missing_details: bool,
    player_mood: MoodTimer,
    hits: HitAreas,
}

impl GameScreen {
    pub fn new() -> Self {
        Self::with_hub(GameHub::new())
    }

    pub fn with_hub(hub: GameHub) -> Self {
        Self {
            hub,
            cursor: 0,
            missing_details: false,
            player_mood: MoodTimer::default(),
            hits: HitAreas::default(),
        }
    }

    fn back(&mut self) -> Vec<ScreenAction> {
        if self.hub.back() {
            self.cursor = 0;
            self.missing_details = false;
            vec![ScreenAction::Play(Cue::Click)]
        } else {
            vec![ScreenAction::Navigate(ScreenId::Menu)]
        }
    }

    fn choose(&mut self, index: usize) -> Vec<ScreenAction> {
        let Some(&kind) = GameKind::ALL.get(index) else {
            return Vec::new();
        };
        self.cursor = index;
        self.hub.choose(kind).map(ScreenAction::Play).into_iter().collect()
    }

    fn set_gender(&mut self, gender: Gender) -> Vec<ScreenAction> {
        self.hub.set_gender(gender).map(ScreenAction::Play).into_iter().collect()
    }

    fn toggle_gender(&mut self) -> Vec<ScreenAction> {
        let next = match self.hub.phase() {
            HubPhase::Setup(setup) => setup.gender.map_or(Gender::Boy, Gender::other),
            _ => return Vec::new(),
        };
        self.set_gender(next)
    }

    fn start(&mut self) -> Vec<ScreenAction> {
        match self.hub.start() {
            Some(cue) => {
                self.cursor = 0;
                self.missing_details = false;
                self.player_mood.set_for(Mood::Talking, Duration::from_secs(3));
                vec![ScreenAction::Play(cue)]
            }
            None => {
                self.missing_details = true;
                Vec::new()
            }
        }
    }

    fn apply(&mut self, outcome: Option<GameOutcome>) -> Vec<ScreenAction> {
        let Some(outcome) = outcome else {
            return Vec::new();
        };
        let mood = match outcome.cue {
            Some(Cue::Wrong) => Mood::Thinking,
            _ => Mood::Excited,
        };
        self.player_mood.set_for(mood, REACTION);

        let mut actions: Vec<ScreenAction> =
            outcome.cue.map(ScreenAction::Play).into_iter().collect();
        if outcome.points > 0 {
            actions.push(ScreenAction::Award(outcome.points));
        }
        actions
    }

    /// Place the puzzle item shown at `slot`
    fn fix_slot(&mut self, slot: usize) -> Vec<ScreenAction> {
        let id = match self.hub.phase() {
            HubPhase::Playing {
                game: ActiveGame::Puzzle(puzzle),
                ..
            } => match puzzle.items().get(slot) {
                Some(item) => item.id,
                None => return Vec::new(),
            },
            _ => return Vec::new(),
        };
        self.cursor = slot;
        let outcome = self.hub.fix_item(id);
        self.apply(outcome)
    }

    fn answer(&mut self, index: usize) -> Vec<ScreenAction> {
        let outcome = self.hub.select_answer(index);
        if outcome.is_some() {
            self.cursor = index;
        }
        self.apply(outcome)
    }

    fn game_over(&self) -> bool {
        match self.hub.phase() {
            HubPhase::Playing { game, .. } => match game {
                ActiveGame::Puzzle(puzzle) => puzzle.is_complete(),
                ActiveGame::Adventure(adventure) => adventure.is_over(),
            },
            _ => false,
        }
    }

    // ─── Rendering ────────────────────────────────────────────────────

    fn render_choosing(&mut self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(CARD_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

        Paragraph::new(Span::styled(
            "Pilih permainan yang ingin kamu mainkan:",
            Style::default().fg(Theme::CHALK),
        ))
        .alignment(Alignment::Center)
        .render(chunks[0], buf);

        self.hits.cards = chunks[1];
        let cards = GameKind::ALL
            .iter()
            .zip([Theme::ORANGE, Theme::PURPLE])
            .map(|(kind, accent)| Card::new(kind.title(), kind.description(), accent))
            .collect();
        CardGridWidget::new(cards)
            .columns(GAME_COLUMNS)
            .cursor(Some(self.cursor))
            .render(self.hits.cards, buf);
    }

    fn render_setup(&mut self, setup: &Setup, area: Rect, buf: &mut Buffer, tick: u64) {
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(CHARACTER_HEIGHT + 2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

        Paragraph::new(Span::styled(
            setup.kind.title(),
            Style::default()
                .fg(Theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .render(chunks[0], buf);

        // Name input
        let input_width = 30.min(area.width);
        let input = Rect::new(
            area.x + area.width.saturating_sub(input_width) / 2,
            chunks[2].y,
            input_width,
            chunks[2].height,
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Theme::CHALK))
            .title(Span::styled(" Siapa namamu? ", Style::default().fg(Theme::CHALK)));
        let inner = block.inner(input);
        block.render(input, buf);
        let caret = if (tick / 15) % 2 == 0 { "▏" } else { " " };
        Paragraph::new(Span::styled(
            format!("{}{}", setup.name, caret),
            Style::default().fg(Theme::CHALK),
        ))
        .render(
            Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(1), inner.height),
            buf,
        );

        Paragraph::new(Span::styled(
            "Pilih karaktermu [Tab]:",
            Style::default().fg(Theme::CHALK_DIM),
        ))
        .alignment(Alignment::Center)
        .render(chunks[3], buf);

        // Two portraits side by side
        let row = chunks[4];
        let slot_width = CHARACTER_WIDTH + 6;
        let left = row.x + row.width.saturating_sub(slot_width * 2 + 4) / 2;
        self.hits.boy = Rect::new(left, row.y, slot_width, row.height).intersection(area);
        self.hits.girl =
            Rect::new(left + slot_width + 4, row.y, slot_width, row.height).intersection(area);
        for (gender, slot) in [(Gender::Boy, self.hits.boy), (Gender::Girl, self.hits.girl)] {
            let chosen = setup.gender == Some(gender);
            let color = if chosen { Theme::SELECTED } else { Theme::CHALK_DUST };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(if chosen { BorderType::Double } else { BorderType::Rounded })
                .border_style(Style::default().fg(color))
                .title_bottom(Line::from(format!(" {} ", gender.label())).centered());
            let inner = block.inner(slot);
            block.render(slot, buf);
            CharacterWidget::new(cast_of(gender))
                .mood(if chosen { Mood::Excited } else { Mood::Idle })
                .tick(tick)
                .render(inner, buf);
        }

        let label = "[ Mulai Bermain ]";
        let width = label.chars().count() as u16;
        self.hits.start = Rect::new(
            area.x + area.width.saturating_sub(width) / 2,
            chunks[5].y,
            width,
            1,
        )
        .intersection(area);
        let ready = setup.can_start();
        Paragraph::new(Span::styled(
            label,
            Style::default()
                .fg(Theme::INK)
                .bg(if ready { Theme::CORRECT } else { Theme::CHALK_DUST })
                .add_modifier(Modifier::BOLD),
        ))
        .render(self.hits.start, buf);

        if self.missing_details {
            Paragraph::new(Span::styled(
                "Tulis namamu dan pilih karakter dulu, ya!",
                Style::default().fg(Theme::WRONG),
            ))
            .alignment(Alignment::Center)
            .render(chunks[6], buf);
        }
    }

    fn render_puzzle(
        &mut self,
        player: &Player,
        puzzle: &PuzzleGame,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(CARD_HEIGHT * 2 + 1),
            Constraint::Min(0),
        ])
        .split(area);

        Paragraph::new(Span::styled(
            format!("Halo, {}! {}", player.name, PUZZLE_INTRO),
            Style::default().fg(Theme::CHALK),
        ))
        .wrap(Wrap { trim: true })
        .render(chunks[0], buf);

        Paragraph::new(Span::styled(
            format!("Barang tertata: {} dari {}", puzzle.placed_count(), puzzle.items().len()),
            Style::default().fg(Theme::YELLOW),
        ))
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

        self.hits.cards = chunks[2];
        let cards = puzzle
            .items()
            .iter()
            .map(|item| {
                let caption = if item.placed { "Sudah rapi ✓" } else { "Berantakan" };
                Card::new(item.label, caption, Theme::BLUE).done(item.placed)
            })
            .collect();
        CardGridWidget::new(cards)
            .columns(PUZZLE_COLUMNS)
            .cursor(Some(self.cursor))
            .render(self.hits.cards, buf);

        if puzzle.is_complete() {
            PopupWidget::new("Kelas Sudah Rapi!")
                .accent(Theme::CORRECT)
                .size(70, 55)
                .line(
                    format!("Hebat, {}!", player.name),
                    Style::default()
                        .fg(Theme::INK)
                        .add_modifier(Modifier::BOLD),
                )
                .line(PUZZLE_DONE, Style::default().fg(Theme::INK))
                .line("", Style::default())
                .line(GAME_OVER_HINT, Style::default().fg(Theme::INK_MUTED))
                .render(area, buf);
        }
    }

    fn render_adventure(
        &mut self,
        player: &Player,
        adventure: &AdventureGame,
        area: Rect,
        buf: &mut Buffer,
        tick: u64,
    ) {
        let chunks = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(CHARACTER_HEIGHT),
            Constraint::Min(12),
        ])
        .split(area);

        Paragraph::new(Span::styled(
            format!("{}, {}", player.name, ADVENTURE_INTRO),
            Style::default().fg(Theme::CHALK_DIM),
        ))
        .wrap(Wrap { trim: true })
        .render(chunks[0], buf);

        let countdown = adventure.countdown();
        CountdownWidget::new(countdown.seconds_left(), countdown.fraction_left())
            .render(chunks[1], buf);
        ProgressWidget::new(adventure.position(), adventure.total()).render(chunks[2], buf);

        let question = adventure.question();
        let row = chunks[3];
        CharacterWidget::new(cast_of(player.gender))
            .mood(self.player_mood.mood())
            .tick(tick)
            .render(Rect::new(row.x, row.y, CHARACTER_WIDTH, row.height).intersection(area), buf);
        let prompt_x = row.x + CHARACTER_WIDTH + 2;
        Paragraph::new(Span::styled(
            question.prompt,
            Style::default()
                .fg(Theme::CHALK)
                .add_modifier(Modifier::BOLD),
        ))
        .wrap(Wrap { trim: true })
        .render(
            Rect::new(
                prompt_x,
                row.y + 1,
                row.right().saturating_sub(prompt_x),
                row.height.saturating_sub(1),
            )
            .intersection(area),
            buf,
        );

        let phase = adventure.phase();
        let correct = match phase {
            AdventurePhase::Answered { .. } | AdventurePhase::Won => Some(true),
            AdventurePhase::Lost(LossReason::WrongAnswer { .. }) => Some(false),
            _ => None,
        };
        let selected = match phase {
            AdventurePhase::Won => Some(question.correct),
            _ => adventure.selected(),
        };
        let lost = matches!(phase, AdventurePhase::Lost(_));
        let list = OptionListWidget::new(question.options)
            .cursor(self.cursor)
            .answered(selected, correct)
            .reveal(lost.then_some(question.correct));
        let options = chunks[4];
        self.hits.options = Rect::new(
            options.x,
            options.y,
            options.width,
            list.height().min(options.height),
        );
        list.render(self.hits.options, buf);

        let popup: Option<(&str, Color, &str, &str)> = match phase {
            AdventurePhase::Won => Some(("Kamu Berhasil!", Theme::CORRECT, "Hebat", ADVENTURE_WON)),
            AdventurePhase::Lost(LossReason::TimeUp) => {
                Some(("Waktu Habis!", Theme::WRONG, "Ayo coba lagi", ADVENTURE_LOST))
            }
            AdventurePhase::Lost(_) => {
                Some(("Oh Tidak!", Theme::WRONG, "Ayo coba lagi", ADVENTURE_LOST))
            }
            _ => None,
        };
        if let Some((title, accent, greeting, body)) = popup {
            PopupWidget::new(title)
                .accent(accent)
                .size(70, 55)
                .line(
                    format!("{}, {}!", greeting, player.name),
                    Style::default()
                        .fg(Theme::INK)
                        .add_modifier(Modifier::BOLD),
                )
                .line(body, Style::default().fg(Theme::INK))
                .line("", Style::default())
                .line(GAME_OVER_HINT, Style::default().fg(Theme::INK_MUTED))
                .render(area, buf);
        }
    }

    // ─── Input ───────────────────────────────────────────────────────

    fn setup_key(&mut self, key: KeyEvent) -> Vec<ScreenAction> {
        match key.code {
            KeyCode::Esc => self.back(),
            KeyCode::Enter => self.start(),
            KeyCode::Tab => self.toggle_gender(),
            KeyCode::Backspace => {
                self.hub.pop_char();
                Vec::new()
            }
            KeyCode::Char(c) => {
                self.hub.push_char(c);
                self.missing_details = false;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn playing_key(&mut self, key: KeyEvent, slots: usize, puzzle: bool) -> Vec<ScreenAction> {
        if is_back(&key) {
            return self.back();
        }
        if self.game_over() {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.back(),
                _ => Vec::new(),
            };
        }
        if let Some(index) = digit_index(&key) {
            return if puzzle { self.fix_slot(index) } else { self.answer(index) };
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                if puzzle {
                    self.fix_slot(self.cursor)
                } else {
                    self.answer(self.cursor)
                }
            }
            code if puzzle => {
                self.cursor = move_in_grid(self.cursor, slots, PUZZLE_COLUMNS as usize, code);
                Vec::new()
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                Vec::new()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = (self.cursor + 1).min(slots.saturating_sub(1));
                Vec::new()
            }
            _ => Vec::new(),
        }
    }
}

impl Screen for GameScreen {
    fn render(&mut self, area: Rect, buf: &mut Buffer, ctx: &ScreenContext) {
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

        self.hits.header = chunks[0];
        HeaderWidget::new("Game Persatuan")
            .score(ctx.score)
            .render(chunks[0], buf);

        let body = Rect::new(
            chunks[2].x + 2,
            chunks[2].y,
            chunks[2].width.saturating_sub(4),
            chunks[2].height,
        );
        // The hub is cloned out so the draw helpers can record hit areas on self
        let hint = match self.hub.phase().clone() {
            HubPhase::Choosing => {
                self.render_choosing(body, buf);
                "[←→] Pilih  [Enter] Main  [Esc] Menu"
            }
            HubPhase::Setup(setup) => {
                self.render_setup(&setup, body, buf, ctx.tick);
                "Ketik nama  [Tab] Karakter  [Enter] Mulai  [Esc] Kembali"
            }
            HubPhase::Playing {
                player,
                game: ActiveGame::Puzzle(puzzle),
            } => {
                self.render_puzzle(&player, &puzzle, body, buf);
                "[1-5] Rapikan  [←↑↓→] Pilih  [Enter] Rapikan  [Esc] Kembali"
            }
            HubPhase::Playing {
                player,
                game: ActiveGame::Adventure(adventure),
            } => {
                self.render_adventure(&player, &adventure, body, buf, ctx.tick);
                "[1-4] Jawab  [↑↓] Pilih  [Enter] Kunci jawaban  [Esc] Kembali"
            }
        };

        Paragraph::new(Span::styled(hint, Style::default().fg(Theme::CHALK_DUST)))
            .alignment(Alignment::Center)
            .render(chunks[3], buf);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<ScreenAction> {
        match self.hub.phase() {
            HubPhase::Choosing => {
                if is_back(&key) {
                    return self.back();
                }
                if let Some(index) = digit_index(&key) {
                    return self.choose(index);
                }
                match key.code {
                    KeyCode::Enter | KeyCode::Char(' ') => self.choose(self.cursor),
                    code => {
                        let count = GameKind::ALL.len();
                        self.cursor =
                            move_in_grid(self.cursor, count, GAME_COLUMNS as usize, code);
                        Vec::new()
                    }
                }
            }
            HubPhase::Setup(_) => self.setup_key(key),
            HubPhase::Playing {
                game: ActiveGame::Puzzle(puzzle),
                ..
            } => {
                let slots = puzzle.items().len();
                self.playing_key(key, slots, true)
            }
            HubPhase::Playing {
                game: ActiveGame::Adventure(adventure),
                ..
            } => {
                let slots = adventure.question().options.len();
                self.playing_key(key, slots, false)
            }
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Vec<ScreenAction> {
        let Some((column, row)) = left_click(&mouse) else {
            return Vec::new();
        };
        if hits_back(self.hits.header, column, row) {
            return self.back();
        }

        match self.hub.phase() {
            HubPhase::Choosing => {
                let count = GameKind::ALL.len();
                match card_at(self.hits.cards, count, GAME_COLUMNS, column, row) {
                    Some(index) => self.choose(index),
                    None => Vec::new(),
                }
            }
            HubPhase::Setup(_) => {
                if contains(self.hits.boy, column, row) {
                    self.set_gender(Gender::Boy)
                } else if contains(self.hits.girl, column, row) {
                    self.set_gender(Gender::Girl)
                } else if contains(self.hits.start, column, row) {
                    self.start()
                } else {
                    Vec::new()
                }
            }
            HubPhase::Playing { .. } if self.game_over() => self.back(),
            HubPhase::Playing {
                game: ActiveGame::Puzzle(puzzle),
                ..
            } => {
                let count = puzzle.items().len();
                match card_at(self.hits.cards, count, PUZZLE_COLUMNS, column, row) {
                    Some(slot) => self.fix_slot(slot),
                    None => Vec::new(),
                }
            }
            HubPhase::Playing {
                game: ActiveGame::Adventure(adventure),
                ..
            } => {
                let list = OptionListWidget::new(adventure.question().options);
                let hit = (0..list.options.len()).find(|&i| {
                    list.option_rect(self.hits.options, i)
                        .is_some_and(|rect| contains(rect, column, row))
                });
                match hit {
                    Some(index) => self.answer(index),
                    None => Vec::new(),
                }
            }
        }
    }

    fn tick(&mut self, dt: Duration) -> Vec<ScreenAction> {
        self.player_mood.tick(dt);
        match self.hub.tick(dt) {
            Some(AdventureEvent::Advanced) => {
                self.cursor = 0;
                self.player_mood.set(Mood::Thinking);
                Vec::new()
            }
            Some(event) => {
                self.player_mood.set(Mood::Thinking);
                event.cue().map(ScreenAction::Play).into_iter().collect()
            }
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use posterboard_core::adventure::{ADVANCE_DELAY, TIME_LIMIT};
    use posterboard_core::content::ADVENTURE_QUESTIONS;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn typed(screen: &mut GameScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn playing(kind: usize) -> GameScreen {
        let mut screen = GameScreen::with_hub(GameHub::with_seed(3));
        screen.handle_key(key(KeyCode::Char(char::from(b'1' + kind as u8))));
        typed(&mut screen, "Sari");
        screen.handle_key(key(KeyCode::Tab));
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            vec![ScreenAction::Play(Cue::Start)]
        );
        screen
    }

    #[test]
    fn test_setup_requires_name_and_character() {
        let mut screen = GameScreen::with_hub(GameHub::with_seed(1));
        screen.handle_key(key(KeyCode::Enter));
        assert!(matches!(screen.hub.phase(), HubPhase::Setup(_)));

        assert!(screen.handle_key(key(KeyCode::Enter)).is_empty());
        assert!(screen.missing_details);

        typed(&mut screen, "Budi");
        assert!(screen.handle_key(key(KeyCode::Enter)).is_empty());
        screen.handle_key(key(KeyCode::Tab));
        screen.handle_key(key(KeyCode::Tab));
        match screen.hub.phase() {
            HubPhase::Setup(setup) => {
                assert_eq!(setup.name, "Budi");
                assert_eq!(setup.gender, Some(Gender::Girl));
            }
            other => panic!("unexpected phase {:?}", other),
        }
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), vec![ScreenAction::Play(Cue::Start)]);
    }

    #[test]
    fn test_puzzle_pays_bonus_once() {
        let mut screen = playing(0);
        let mut awarded = 0;
        for slot in 0..5 {
            for action in screen.handle_key(key(KeyCode::Char(char::from(b'1' + slot as u8)))) {
                if let ScreenAction::Award(points) = action {
                    awarded += points;
                }
            }
        }
        assert_eq!(awarded, 50);
        assert!(screen.game_over());
        // Replaying a slot after the end does nothing
        assert!(screen.handle_key(key(KeyCode::Char('1'))).is_empty());
    }

    #[test]
    fn test_adventure_wrong_answer_ends_run() {
        let mut screen = playing(1);
        let wrong = (ADVENTURE_QUESTIONS[0].correct + 1) % ADVENTURE_QUESTIONS[0].options.len();
        assert_eq!(
            screen.handle_key(key(KeyCode::Char(char::from(b'1' + wrong as u8)))),
            vec![ScreenAction::Play(Cue::Wrong)]
        );
        assert!(screen.game_over());
        // Enter after the end goes back to the game list
        screen.handle_key(key(KeyCode::Enter));
        assert!(matches!(screen.hub.phase(), HubPhase::Choosing));
    }

    #[test]
    fn test_adventure_correct_answers_and_timeout() {
        let mut screen = playing(1);
        let first = ADVENTURE_QUESTIONS[0].correct;
        assert_eq!(
            screen.handle_key(key(KeyCode::Char(char::from(b'1' + first as u8)))),
            vec![ScreenAction::Play(Cue::Correct), ScreenAction::Award(15)]
        );
        assert!(screen.tick(ADVANCE_DELAY).is_empty());
        assert_eq!(screen.tick(TIME_LIMIT), vec![ScreenAction::Play(Cue::Wrong)]);
        assert!(screen.game_over());
    }

    #[test]
    fn test_back_walks_out_of_the_hub() {
        let mut screen = playing(0);
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), vec![ScreenAction::Play(Cue::Click)]);
        assert_eq!(
            screen.handle_key(key(KeyCode::Esc)),
            vec![ScreenAction::Navigate(ScreenId::Menu)]
        );
    }

    #[test]
    fn test_every_phase_renders() {
        let area = Rect::new(0, 0, 100, 40);
        let ctx = ScreenContext { score: 15, tick: 0 };
        let mut screen = GameScreen::with_hub(GameHub::with_seed(5));
        screen.render(area, &mut Buffer::empty(area), &ctx);
        screen.handle_key(key(KeyCode::Char('2')));
        screen.render(area, &mut Buffer::empty(area), &ctx);
        typed(&mut screen, "Ayu");
        screen.handle_key(key(KeyCode::Tab));
        screen.handle_key(key(KeyCode::Enter));

        let mut buf = Buffer::empty(area);
        screen.render(area, &mut buf, &ctx);
        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect();
        assert!(text.contains("30s"));
        assert!(text.contains("Pertanyaan 1 dari 3"));
    }
}
