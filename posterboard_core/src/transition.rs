use std::time::Duration;

use crate::screen::{Direction, ScreenId};

/// Length of both the enter and the exit animation
pub const TRANSITION_DURATION: Duration = Duration::from_millis(500);

/// Start/end offset as a fraction of the viewport width
pub const OFFSET: f32 = 0.3;

/// Mount state of one screen inside its transition wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Hidden,
    Entering { elapsed: Duration },
    Shown,
    Exiting { elapsed: Duration },
}

/// Emitted by `ScreenTransition::tick` when an animation finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEvent {
    Entered,
    Exited,
}

/// Enter/exit animation state for a single screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTransition {
    presence: Presence,
    direction: Direction,
}

impl ScreenTransition {
    pub fn hidden() -> Self {
        Self {
            presence: Presence::Hidden,
            direction: Direction::Right,
        }
    }

    pub fn presence(&self) -> Presence {
        self.presence
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// React to a visibility edge. Repeating the current visibility is a no-op.
    /// Returns whether an animation was started.
    pub fn set_visible(&mut self, visible: bool, direction: Direction) -> bool {
        let showing = matches!(self.presence, Presence::Entering { .. } | Presence::Shown);
        if visible == showing {
            return false;
        }
        if !visible && self.presence == Presence::Hidden {
            return false;
        }

        self.direction = direction;
        self.presence = if visible {
            Presence::Entering {
                elapsed: Duration::ZERO,
            }
        } else {
            Presence::Exiting {
                elapsed: Duration::ZERO,
            }
        };
        true
    }

    pub fn tick(&mut self, dt: Duration) -> Option<TransitionEvent> {
        match self.presence {
            Presence::Entering { elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed >= TRANSITION_DURATION {
                    self.presence = Presence::Shown;
                    Some(TransitionEvent::Entered)
                } else {
                    self.presence = Presence::Entering { elapsed };
                    None
                }
            }
            Presence::Exiting { elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed >= TRANSITION_DURATION {
                    self.presence = Presence::Hidden;
                    Some(TransitionEvent::Exited)
                } else {
                    self.presence = Presence::Exiting { elapsed };
                    None
                }
            }
            Presence::Hidden | Presence::Shown => None,
        }
    }

    /// Signed horizontal offset as a fraction of the viewport width.
    ///
    /// Entering eases out from `sign * OFFSET` to rest; exiting eases in from
    /// rest to the opposite side.
    pub fn offset(&self) -> f32 {
        let sign = self.direction.sign();
        match self.presence {
            Presence::Entering { elapsed } => {
                let t = progress(elapsed);
                sign * OFFSET * (1.0 - ease_out_cubic(t))
            }
            Presence::Exiting { elapsed } => {
                let t = progress(elapsed);
                -sign * OFFSET * ease_in_cubic(t)
            }
            Presence::Hidden | Presence::Shown => 0.0,
        }
    }

    pub fn offset_columns(&self, width: u16) -> i32 {
        (self.offset() * width as f32).round() as i32
    }

    /// Rendered at all (unmounted content is neither drawn nor hit-tested)
    pub fn is_mounted(&self) -> bool {
        self.presence != Presence::Hidden
    }

    /// Accepts input
    pub fn is_interactive(&self) -> bool {
        matches!(self.presence, Presence::Entering { .. } | Presence::Shown)
    }
}

fn progress(elapsed: Duration) -> f32 {
    (elapsed.as_secs_f32() / TRANSITION_DURATION.as_secs_f32()).clamp(0.0, 1.0)
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

fn ease_in_cubic(t: f32) -> f32 {
    t * t * t
}

/// A screen payload with its transition state
#[derive(Debug)]
pub struct Layer<T> {
    pub id: ScreenId,
    pub content: T,
    pub transition: ScreenTransition,
}

/// Emitted by `Stage::tick`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageEvent {
    /// The incoming screen started its enter animation
    Mounted(ScreenId, Direction),
    /// The outgoing overlay finished exiting and was dropped
    Unmounted(ScreenId),
}

/// One active screen plus a short-lived overlay for the outgoing one.
///
/// Exit runs before enter: the incoming screen stays hidden until the
/// outgoing overlay has finished animating out.
#[derive(Debug)]
pub struct Stage<T> {
    current: Layer<T>,
    leaving: Option<Layer<T>>,
    events: Vec<StageEvent>,
}

impl<T> Stage<T> {
    /// Mount the first screen; it animates in from the right.
    pub fn new(id: ScreenId, content: T) -> Self {
        let mut transition = ScreenTransition::hidden();
        transition.set_visible(true, Direction::Right);
        Self {
            current: Layer {
                id,
                content,
                transition,
            },
            leaving: None,
            events: vec![StageEvent::Mounted(id, Direction::Right)],
        }
    }

    pub fn current(&self) -> &Layer<T> {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut Layer<T> {
        &mut self.current
    }

    pub fn leaving(&self) -> Option<&Layer<T>> {
        self.leaving.as_ref()
    }

    /// Switch to `id`. Re-entering the current screen keeps it as is.
    /// Returns false when nothing changed.
    pub fn show(&mut self, id: ScreenId, direction: Direction, build: impl FnOnce() -> T) -> bool {
        if id == self.current.id {
            return false;
        }

        let incoming = Layer {
            id,
            content: build(),
            transition: ScreenTransition::hidden(),
        };

        if !self.current.transition.is_mounted() {
            // Never got on screen: swap it out while the overlay keeps exiting
            self.current = incoming;
            self.current.transition.direction = direction;
            return true;
        }

        let mut outgoing = std::mem::replace(&mut self.current, incoming);
        outgoing.transition.set_visible(false, direction);
        self.current.transition.direction = direction;
        // A still-running overlay is dropped in favour of the newer one
        self.leaving = Some(outgoing);
        true
    }

    /// Advance animations and collect mount/unmount events
    pub fn tick(&mut self, dt: Duration) -> Vec<StageEvent> {
        let mut events = std::mem::take(&mut self.events);

        if let Some(leaving) = &mut self.leaving {
            if leaving.transition.tick(dt) == Some(TransitionEvent::Exited) {
                events.push(StageEvent::Unmounted(leaving.id));
                self.leaving = None;
            }
        }

        if self.leaving.is_none() && !self.current.transition.is_mounted() {
            let direction = self.current.transition.direction;
            self.current.transition.set_visible(true, direction);
            events.push(StageEvent::Mounted(self.current.id, direction));
        } else {
            self.current.transition.tick(dt);
        }

        events
    }

    /// The current content when it may receive input
    pub fn interactive_mut(&mut self) -> Option<&mut T> {
        if self.leaving.is_none() && self.current.transition.is_interactive() {
            Some(&mut self.current.content)
        } else {
            None
        }
    }

    /// The layer that should be drawn this frame
    pub fn visible_mut(&mut self) -> Option<&mut Layer<T>> {
        if let Some(leaving) = self.leaving.as_mut() {
            return Some(leaving);
        }
        if self.current.transition.is_mounted() {
            Some(&mut self.current)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(50);

    fn run(transition: &mut ScreenTransition, total: Duration) -> Vec<TransitionEvent> {
        let mut events = Vec::new();
        let mut spent = Duration::ZERO;
        while spent < total {
            if let Some(ev) = transition.tick(FRAME) {
                events.push(ev);
            }
            spent += FRAME;
        }
        events
    }

    #[test]
    fn test_enter_from_right_settles_at_rest() {
        let mut t = ScreenTransition::hidden();
        assert!(t.set_visible(true, Direction::Right));
        assert!((t.offset() - OFFSET).abs() < 1e-6);

        t.tick(Duration::from_millis(250));
        let mid = t.offset();
        assert!(mid > 0.0 && mid < OFFSET);

        let events = run(&mut t, TRANSITION_DURATION);
        assert_eq!(events, vec![TransitionEvent::Entered]);
        assert_eq!(t.presence(), Presence::Shown);
        assert_eq!(t.offset(), 0.0);
    }

    #[test]
    fn test_enter_from_left_is_negative() {
        let mut t = ScreenTransition::hidden();
        t.set_visible(true, Direction::Left);
        assert!(t.offset() < 0.0);
    }

    #[test]
    fn test_exit_moves_to_opposite_side_then_unmounts() {
        let mut t = ScreenTransition::hidden();
        t.set_visible(true, Direction::Right);
        run(&mut t, TRANSITION_DURATION);

        assert!(t.set_visible(false, Direction::Right));
        t.tick(Duration::from_millis(400));
        assert!(t.offset() < 0.0);
        assert!(t.is_mounted());
        assert!(!t.is_interactive());

        t.tick(Duration::from_millis(100));
        assert_eq!(t.presence(), Presence::Hidden);
        assert!(!t.is_mounted());
    }

    #[test]
    fn test_repeated_visibility_is_noop() {
        let mut t = ScreenTransition::hidden();
        assert!(!t.set_visible(false, Direction::Right));
        assert!(t.set_visible(true, Direction::Right));
        assert!(!t.set_visible(true, Direction::Left));
        assert_eq!(t.direction(), Direction::Right);
    }

    #[test]
    fn test_offset_columns_scale_with_width() {
        let mut t = ScreenTransition::hidden();
        t.set_visible(true, Direction::Left);
        assert_eq!(t.offset_columns(100), -30);
    }

    #[test]
    fn test_stage_waits_for_exit_before_enter() {
        let mut stage = Stage::new(ScreenId::Start, "start");
        let events = stage.tick(TRANSITION_DURATION);
        assert_eq!(events, vec![StageEvent::Mounted(ScreenId::Start, Direction::Right)]);

        assert!(stage.show(ScreenId::Menu, Direction::Right, || "menu"));
        assert_eq!(stage.current().id, ScreenId::Menu);
        assert!(stage.leaving().is_some());
        assert!(stage.interactive_mut().is_none());
        assert_eq!(stage.visible_mut().map(|l| l.id), Some(ScreenId::Start));

        let events = stage.tick(Duration::from_millis(200));
        assert!(events.is_empty());

        let events = stage.tick(Duration::from_millis(300));
        assert_eq!(
            events,
            vec![
                StageEvent::Unmounted(ScreenId::Start),
                StageEvent::Mounted(ScreenId::Menu, Direction::Right)
            ]
        );
        assert_eq!(stage.interactive_mut().copied(), Some("menu"));
    }

    #[test]
    fn test_stage_reentry_keeps_content() {
        let mut stage = Stage::new(ScreenId::Quiz, 1);
        stage.tick(TRANSITION_DURATION);
        assert!(!stage.show(ScreenId::Quiz, Direction::Right, || 2));
        assert_eq!(stage.current().content, 1);
        assert!(stage.leaving().is_none());
    }

    #[test]
    fn test_stage_replaces_unmounted_incoming() {
        let mut stage = Stage::new(ScreenId::Menu, "menu");
        stage.tick(TRANSITION_DURATION);
        stage.show(ScreenId::Poster, Direction::Right, || "poster");
        stage.tick(Duration::from_millis(100));
        stage.show(ScreenId::Game, Direction::Right, || "game");

        assert_eq!(stage.leaving().map(|l| l.id), Some(ScreenId::Menu));
        assert_eq!(stage.current().id, ScreenId::Game);

        let events = stage.tick(Duration::from_millis(400));
        assert_eq!(
            events,
            vec![
                StageEvent::Unmounted(ScreenId::Menu),
                StageEvent::Mounted(ScreenId::Game, Direction::Right)
            ]
        );
    }

    #[test]
    fn test_stage_navigation_mid_enter_drops_old_overlay() {
        let mut stage = Stage::new(ScreenId::Menu, "menu");
        stage.tick(TRANSITION_DURATION);
        stage.show(ScreenId::Poster, Direction::Right, || "poster");
        stage.tick(TRANSITION_DURATION);
        // Poster is now entering
        stage.show(ScreenId::Menu, Direction::Left, || "menu again");
        assert_eq!(stage.leaving().map(|l| l.id), Some(ScreenId::Poster));
        assert_eq!(
            stage.leaving().map(|l| l.transition.direction()),
            Some(Direction::Left)
        );
    }
}
