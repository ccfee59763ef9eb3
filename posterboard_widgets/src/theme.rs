use ratatui::style::Color;

/// Chalkboard classroom palette
pub struct Theme;

impl Theme {
    // Board
    pub const BOARD: Color = Color::Rgb(28, 58, 44);
    pub const BOARD_DARK: Color = Color::Rgb(18, 40, 30);
    pub const WOOD: Color = Color::Rgb(139, 94, 52);
    pub const WOOD_LIGHT: Color = Color::Rgb(181, 131, 80);

    // Chalk
    pub const CHALK: Color = Color::Rgb(240, 240, 232);
    pub const CHALK_DIM: Color = Color::Rgb(150, 170, 160);
    pub const CHALK_DUST: Color = Color::Rgb(70, 100, 86);

    // Paper panels
    pub const PAPER: Color = Color::Rgb(250, 248, 240);
    pub const INK: Color = Color::Rgb(40, 40, 48);
    pub const INK_MUTED: Color = Color::Rgb(110, 110, 120);

    // Accents
    pub const YELLOW: Color = Color::Rgb(250, 204, 21);
    pub const ORANGE: Color = Color::Rgb(249, 115, 22);
    pub const PURPLE: Color = Color::Rgb(168, 85, 247);
    pub const BLUE: Color = Color::Rgb(59, 130, 246);
    pub const PINK: Color = Color::Rgb(236, 72, 153);

    // Answer feedback
    pub const CORRECT: Color = Color::Rgb(34, 197, 94);
    pub const WRONG: Color = Color::Rgb(239, 68, 68);
    pub const SELECTED: Color = Color::Rgb(250, 204, 21);

    // Score badge
    pub const SCORE: Color = Color::Rgb(234, 179, 8);
}
