use posterboard_core::transition::TRANSITION_DURATION;
use posterboard_widgets::Theme;
use ratatui::layout::Rect;
use tachyonfx::fx;
use tachyonfx::{Effect, EffectManager, Interpolation, IntoEffect};

/// Keyed effect manager; a new effect under an existing key replaces it
pub type FxManager = EffectManager<&'static str>;

pub const SCREEN_TRANSITION: &str = "screen_transition";
pub const TITLE_SHIMMER: &str = "title_shimmer";
pub const CELEBRATION: &str = "celebration";
pub const SCORE_HIGHLIGHT: &str = "score_highlight";
pub const WRONG_GLITCH: &str = "wrong_glitch";

fn transition_ms() -> u32 {
    TRANSITION_DURATION.as_millis() as u32
}

/// Incoming screen fades up out of the board colour
pub fn screen_enter(area: Rect) -> Effect {
    fx::fade_from_fg(Theme::BOARD, (transition_ms(), Interpolation::CubicOut)).with_area(area)
}

/// Outgoing screen fades back into the board
pub fn screen_exit(area: Rect) -> Effect {
    fx::fade_to_fg(Theme::BOARD, (transition_ms(), Interpolation::CubicIn)).with_area(area)
}

/// Chalk title gently shifting hue on the start screen
pub fn title_shimmer(area: Rect) -> Effect {
    let shift = fx::hsl_shift_fg([15.0, 0.1, 0.1], (1200, Interpolation::SineInOut));
    fx::repeating(fx::ping_pong(shift)).with_area(area)
}

/// Warm pulse when a quiz or game is finished
pub fn celebration(area: Rect) -> Effect {
    let glow = fx::hsl_shift_fg([45.0, 0.15, 0.2], (700, Interpolation::SineInOut));
    fx::ping_pong(glow).with_area(area)
}

/// Score badge flashes yellow when points land
pub fn score_highlight(area: Rect) -> Effect {
    let shift = fx::fade_to_fg(Theme::YELLOW, (200, Interpolation::QuadOut));
    let shift_back = fx::fade_from_fg(Theme::YELLOW, (600, Interpolation::QuadIn));
    fx::sequence(&[shift, shift_back]).with_area(area)
}

/// Short chalk-scratch glitch on a wrong answer
pub fn wrong_glitch(area: Rect) -> Effect {
    let glitch = fx::Glitch::builder()
        .cell_glitch_ratio(0.02)
        .action_start_delay_ms(0..120)
        .action_ms(40..120)
        .build()
        .into_effect();
    fx::with_duration(tachyonfx::Duration::from_millis(400), glitch).with_area(area)
}
