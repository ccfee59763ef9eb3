use std::io;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Paragraph, Widget};
use ratatui::Frame;
use tracing::{debug, info, warn};

use posterboard_core::content::BACKGROUND;
use posterboard_core::timer::Delay;
use posterboard_core::transition::StageEvent;
use posterboard_core::{
    Cue, MediaStatus, Navigator, Presence, Score, ScreenId, Settings, SoundSink, Stage,
};
use posterboard_widgets::background::{ChalkboardWidget, FrameWidget};
use posterboard_widgets::slide::blit_offset;
use posterboard_widgets::Theme;

use crate::effects::{self, FxManager};
use crate::screens::{ActiveScreen, Screen, ScreenContext};

const STATUS_DURATION: Duration = Duration::from_secs(3);

/// What a screen asks the coordinator to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
    Navigate(ScreenId),
    Play(Cue),
    /// Add points to the shared score
    Award(u32),
    OpenQuizLink,
    Quit,
}

pub type LinkOpener = Box<dyn Fn(&str) -> io::Result<()>>;

/// Root coordinator: owns navigation, the score and every side effect
pub struct App {
    pub navigator: Navigator,
    pub stage: Stage<ActiveScreen>,
    pub score: Score,
    pub tick: u64,
    pub fx: FxManager,
    pub status: Option<(String, Delay)>,
    pub background: MediaStatus,
    settings: Settings,
    sound: Box<dyn SoundSink>,
    open_link: LinkOpener,
    board: Rect,
    dust_seed: u64,
    last_frame: Duration,
}

impl App {
    pub fn new(settings: Settings, sound: Box<dyn SoundSink>) -> Self {
        Self::with_link_opener(settings, sound, Box::new(crate::link::open))
            .dust_seed(rand::random())
    }

    pub fn with_link_opener(
        settings: Settings,
        sound: Box<dyn SoundSink>,
        open_link: LinkOpener,
    ) -> Self {
        let navigator = Navigator::new();
        let start = navigator.current();
        let stage = Stage::new(start, ActiveScreen::build(start, &settings.assets_dir));
        let background = BACKGROUND.resolve(&settings.assets_dir);
        if !background.is_available() {
            debug!(path = BACKGROUND.path, "board background missing");
        }

        Self {
            navigator,
            stage,
            score: Score::new(),
            tick: 0,
            fx: FxManager::default(),
            status: None,
            background,
            last_frame: settings.frame_interval(),
            settings,
            sound,
            open_link,
            board: Rect::default(),
            dust_seed: 0,
        }
    }

    pub fn dust_seed(mut self, seed: u64) -> Self {
        self.dust_seed = seed;
        self
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        frame.render_widget(ChalkboardWidget::new(self.tick).dust_seed(self.dust_seed), area);
        frame.render_widget(
            FrameWidget::new(self.tick).backdrop_missing(!self.background.is_available()),
            area,
        );

        // Inside the wooden frame
        self.board = Rect::new(
            area.x + 2,
            area.y + 1,
            area.width.saturating_sub(4),
            area.height.saturating_sub(2),
        );
        let board = self.board;
        let ctx = ScreenContext {
            score: self.score.value(),
            tick: self.tick,
        };

        if let Some(layer) = self.stage.visible_mut() {
            let mut scratch = Buffer::empty(board);
            layer.content.render(board, &mut scratch, &ctx);
            let dx = layer.transition.offset_columns(board.width);
            blit_offset(&scratch, frame.buffer_mut(), board, dx);
        }

        if let Some((message, _)) = &self.status {
            if board.height > 0 {
                let row = Rect::new(board.x, board.bottom() - 1, board.width, 1);
                Paragraph::new(Span::styled(
                    format!(" {} ", message),
                    Style::default()
                        .fg(Theme::INK)
                        .bg(Theme::YELLOW)
                        .add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center)
                .render(row, frame.buffer_mut());
            }
        }

        // Apply all tachyonfx effects on top of rendered content
        let elapsed = tachyonfx::Duration::from_millis(self.last_frame.as_millis() as u32);
        self.fx.process_effects(elapsed, frame.buffer_mut(), area);
    }

    /// Handle key event. Returns true if should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }
        // Elsewhere 'q' may be part of a typed name
        if key.code == KeyCode::Char('q')
            && matches!(self.navigator.current(), ScreenId::Start | ScreenId::Menu)
        {
            return true;
        }

        let actions = match self.stage.interactive_mut() {
            Some(screen) => screen.handle_key(key),
            None => {
                debug!(code = ?key.code, "key ignored during transition");
                return false;
            }
        };
        self.process_actions(actions)
    }

    /// Clicks only reach a screen that has fully arrived
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        if self.stage.leaving().is_some()
            || self.stage.current().transition.presence() != Presence::Shown
        {
            return false;
        }
        let actions = self.stage.current_mut().content.handle_mouse(mouse);
        self.process_actions(actions)
    }

    /// Advance animations and timers. Returns true if should quit.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.tick = self.tick.wrapping_add(1);
        self.last_frame = dt;

        for event in self.stage.tick(dt) {
            match event {
                StageEvent::Mounted(id, direction) => {
                    debug!(screen = %id, ?direction, "screen mounted");
                    self.fx.add_unique_effect(
                        effects::SCREEN_TRANSITION,
                        effects::screen_enter(self.board),
                    );
                    if id == ScreenId::Start {
                        let title = Rect::new(
                            self.board.x,
                            self.board.y,
                            self.board.width,
                            self.board.height / 2,
                        );
                        self.fx.add_unique_effect(
                            effects::TITLE_SHIMMER,
                            effects::title_shimmer(title),
                        );
                    }
                }
                StageEvent::Unmounted(id) => {
                    debug!(screen = %id, "screen unmounted");
                    if id == ScreenId::Start {
                        self.fx.cancel_unique_effect(effects::TITLE_SHIMMER);
                    }
                }
            }
        }

        if let Some((_, delay)) = &mut self.status {
            if delay.tick(dt) {
                self.status = None;
            }
        }

        // The leaving overlay is frozen; only a mounted screen runs its timers
        if !self.stage.current().transition.is_mounted() {
            return false;
        }
        let actions = self.stage.current_mut().content.tick(dt);
        self.process_actions(actions)
    }

    fn process_actions(&mut self, actions: Vec<ScreenAction>) -> bool {
        let mut quit = false;
        for action in actions {
            quit |= self.process_action(action);
        }
        quit
    }

    /// Process a screen action. Returns true if should quit.
    fn process_action(&mut self, action: ScreenAction) -> bool {
        match action {
            ScreenAction::Quit => return true,
            ScreenAction::Navigate(target) => self.navigate(target),
            ScreenAction::Play(cue) => {
                self.sound.play(cue);
                match cue {
                    Cue::Complete => self.fx.add_unique_effect(
                        effects::CELEBRATION,
                        effects::celebration(self.board),
                    ),
                    Cue::Wrong => self.fx.add_unique_effect(
                        effects::WRONG_GLITCH,
                        effects::wrong_glitch(self.board),
                    ),
                    _ => {}
                }
            }
            ScreenAction::Award(points) => {
                self.score.add(points);
                debug!(points, total = self.score.value(), "points awarded");
                if self.navigator.current().is_scored() {
                    let header = Rect::new(self.board.x, self.board.y, self.board.width, 1);
                    self.fx.add_unique_effect(
                        effects::SCORE_HIGHLIGHT,
                        effects::score_highlight(header),
                    );
                }
            }
            ScreenAction::OpenQuizLink => self.open_quiz_link(),
        }
        false
    }

    fn navigate(&mut self, target: ScreenId) {
        let step = self.navigator.navigate(target);
        let assets_dir = &self.settings.assets_dir;
        if !self
            .stage
            .show(step.to, step.direction, || ActiveScreen::build(step.to, assets_dir))
        {
            debug!(screen = %step.to, "already on screen");
            return;
        }

        // A fresh quiz pass starts from zero
        if step.to == ScreenId::Quiz && !step.is_reentry() {
            self.score.reset();
        }
        self.fx
            .add_unique_effect(effects::SCREEN_TRANSITION, effects::screen_exit(self.board));
        info!(from = %step.from, to = %step.to, direction = ?step.direction, "navigate");
    }

    fn open_quiz_link(&mut self) {
        let url = self.settings.quiz_url.clone();
        let message = match (self.open_link)(&url) {
            Ok(()) => {
                info!(%url, "opened online quiz");
                "Membuka Quiz Online di browser...".to_string()
            }
            Err(err) => {
                warn!(%url, %err, "could not open online quiz");
                format!("Tidak bisa membuka {}", url)
            }
        };
        self.status = Some((message, Delay::new(STATUS_DURATION)));
    }
}
