pub mod background;
pub mod cards;
pub mod character;
pub mod header;
pub mod image;
pub mod options;
pub mod popup;
pub mod progress;
pub mod slide;
pub mod text;
pub mod theme;

pub use theme::Theme;
