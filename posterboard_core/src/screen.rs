use std::fmt;

/// Every full-viewport view of the poster board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Start,
    Menu,
    Poster,
    Quiz,
    Game,
    Instructions,
}

impl ScreenId {
    pub const ALL: [ScreenId; 6] = [
        ScreenId::Start,
        ScreenId::Menu,
        ScreenId::Poster,
        ScreenId::Quiz,
        ScreenId::Game,
        ScreenId::Instructions,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ScreenId::Start => "Poster Board",
            ScreenId::Menu => "Menu Utama",
            ScreenId::Poster => "Poster Materi",
            ScreenId::Quiz => "Quiz Seru",
            ScreenId::Game => "Game Edukasi",
            ScreenId::Instructions => "Poster Persatuan",
        }
    }

    /// Screens that read and award the shared score
    pub fn is_scored(self) -> bool {
        matches!(self, ScreenId::Quiz | ScreenId::Game)
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Horizontal axis of a screen transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Back navigation: content enters from the left
    Left,
    /// Forward navigation: content enters from the right
    Right,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Result of a single `navigate` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub from: ScreenId,
    pub to: ScreenId,
    pub direction: Direction,
}

impl Navigation {
    pub fn is_reentry(&self) -> bool {
        self.from == self.to
    }
}

/// Owns current/previous screen identity and the derived transition direction
#[derive(Debug, Clone)]
pub struct Navigator {
    current: ScreenId,
    previous: Option<ScreenId>,
    direction: Direction,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            current: ScreenId::Start,
            previous: None,
            direction: Direction::Right,
        }
    }

    pub fn current(&self) -> ScreenId {
        self.current
    }

    pub fn previous(&self) -> Option<ScreenId> {
        self.previous
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Move to `target`. Returning to the menu from anywhere but the start
    /// screen counts as going back.
    pub fn navigate(&mut self, target: ScreenId) -> Navigation {
        let from = self.current;
        self.direction = if target == ScreenId::Menu && from != ScreenId::Start {
            Direction::Left
        } else {
            Direction::Right
        };
        self.previous = Some(from);
        self.current = target;

        Navigation {
            from,
            to: target,
            direction: self.direction,
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
