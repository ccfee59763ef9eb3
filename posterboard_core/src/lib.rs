pub mod adventure;
pub mod character;
pub mod content;
pub mod game;
pub mod media;
pub mod puzzle;
pub mod quiz;
pub mod score;
pub mod screen;
pub mod settings;
pub mod sound;
pub mod timer;
pub mod transition;

pub use adventure::{AdventureGame, AdventurePhase};
pub use character::{Cast, Mood, MoodTimer};
pub use content::Question;
pub use game::{GameHub, GameKind, Gender};
pub use media::{MediaRef, MediaStatus};
pub use puzzle::PuzzleGame;
pub use quiz::{QuizPhase, QuizSession};
pub use score::Score;
pub use screen::{Direction, Navigation, Navigator, ScreenId};
pub use settings::{Settings, SettingsError};
pub use sound::{Cue, SoundSink};
pub use transition::{Presence, ScreenTransition, Stage};
