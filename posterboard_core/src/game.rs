use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::adventure::{AdventureEvent, AdventureGame, AdventureOutcome};
use crate::puzzle::{PuzzleGame, PuzzleOutcome};
use crate::sound::Cue;

pub const MAX_NAME_LEN: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    Puzzle,
    Adventure,
}

impl GameKind {
    pub const ALL: [GameKind; 2] = [GameKind::Puzzle, GameKind::Adventure];

    pub fn title(self) -> &'static str {
        match self {
            GameKind::Puzzle => "Puzzle Kelas Bersih",
            GameKind::Adventure => "Petualangan Persatuan",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            GameKind::Puzzle => "Bantu merapikan kelas yang berantakan dengan menyusun puzzle!",
            GameKind::Adventure => "Selamatkan teman yang kesulitan dengan menjawab pertanyaan!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Boy,
    Girl,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Boy => "Laki-laki",
            Gender::Girl => "Perempuan",
        }
    }

    pub fn other(self) -> Gender {
        match self {
            Gender::Boy => Gender::Girl,
            Gender::Girl => Gender::Boy,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub gender: Gender,
}

/// Character selection before a game starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setup {
    pub kind: GameKind,
    pub name: String,
    pub gender: Option<Gender>,
}

impl Setup {
    pub fn can_start(&self) -> bool {
        !self.name.trim().is_empty() && self.gender.is_some()
    }
}

#[derive(Debug, Clone)]
pub enum ActiveGame {
    Puzzle(PuzzleGame),
    Adventure(AdventureGame),
}

#[derive(Debug, Clone)]
pub enum HubPhase {
    Choosing,
    Setup(Setup),
    Playing { player: Player, game: ActiveGame },
}

/// What a game action produced, for the coordinator to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub points: u32,
    pub cue: Option<Cue>,
}

impl From<PuzzleOutcome> for GameOutcome {
    fn from(outcome: PuzzleOutcome) -> Self {
        Self {
            points: outcome.points,
            cue: Some(outcome.cue),
        }
    }
}

impl From<AdventureOutcome> for GameOutcome {
    fn from(outcome: AdventureOutcome) -> Self {
        Self {
            points: outcome.points,
            cue: Some(outcome.cue),
        }
    }
}

/// The game screen's session: pick a game, set up a player, play
#[derive(Debug, Clone)]
pub struct GameHub {
    phase: HubPhase,
    rng: StdRng,
}

impl GameHub {
    pub fn new() -> Self {
        Self::with_seed(rand::thread_rng().gen())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            phase: HubPhase::Choosing,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn phase(&self) -> &HubPhase {
        &self.phase
    }

    pub fn choose(&mut self, kind: GameKind) -> Option<Cue> {
        if !matches!(self.phase, HubPhase::Choosing) {
            return None;
        }
        self.phase = HubPhase::Setup(Setup {
            kind,
            name: String::new(),
            gender: None,
        });
        Some(Cue::Click)
    }

    pub fn push_char(&mut self, c: char) {
        if let HubPhase::Setup(setup) = &mut self.phase {
            if !c.is_control() && setup.name.chars().count() < MAX_NAME_LEN {
                setup.name.push(c);
            }
        }
    }

    pub fn pop_char(&mut self) {
        if let HubPhase::Setup(setup) = &mut self.phase {
            setup.name.pop();
        }
    }

    pub fn set_gender(&mut self, gender: Gender) -> Option<Cue> {
        match &mut self.phase {
            HubPhase::Setup(setup) => {
                setup.gender = Some(gender);
                Some(Cue::Click)
            }
            _ => None,
        }
    }

    /// Start the chosen game. Needs a name and a character.
    pub fn start(&mut self) -> Option<Cue> {
        let HubPhase::Setup(setup) = &self.phase else {
            return None;
        };
        if !setup.can_start() {
            return None;
        }
        let gender = setup.gender?;
        let player = Player {
            name: setup.name.trim().to_string(),
            gender,
        };
        let game = match setup.kind {
            GameKind::Puzzle => ActiveGame::Puzzle(PuzzleGame::scattered(&mut self.rng)),
            GameKind::Adventure => ActiveGame::Adventure(AdventureGame::standard()),
        };
        self.phase = HubPhase::Playing { player, game };
        Some(Cue::Start)
    }

    /// Step back inside the hub. Returns false when already at the game list,
    /// meaning the caller should leave the screen.
    pub fn back(&mut self) -> bool {
        if matches!(self.phase, HubPhase::Choosing) {
            return false;
        }
        self.phase = HubPhase::Choosing;
        true
    }

    pub fn fix_item(&mut self, id: u8) -> Option<GameOutcome> {
        match &mut self.phase {
            HubPhase::Playing {
                game: ActiveGame::Puzzle(puzzle),
                ..
            } => puzzle.fix_item(id).map(GameOutcome::from),
            _ => None,
        }
    }

    pub fn select_answer(&mut self, index: usize) -> Option<GameOutcome> {
        match &mut self.phase {
            HubPhase::Playing {
                game: ActiveGame::Adventure(adventure),
                ..
            } => adventure.select_answer(index).map(GameOutcome::from),
            _ => None,
        }
    }

    pub fn tick(&mut self, dt: Duration) -> Option<AdventureEvent> {
        match &mut self.phase {
            HubPhase::Playing {
                game: ActiveGame::Adventure(adventure),
                ..
            } => adventure.tick(dt),
            _ => None,
        }
    }
}

impl Default for GameHub {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adventure::AdventurePhase;

    fn setup_player(hub: &mut GameHub, kind: GameKind) {
        hub.choose(kind);
        for c in "Budi".chars() {
            hub.push_char(c);
        }
        hub.set_gender(Gender::Boy);
    }

    #[test]
    fn test_start_requires_name_and_gender() {
        let mut hub = GameHub::with_seed(1);
        hub.choose(GameKind::Puzzle);
        assert_eq!(hub.start(), None);

        hub.push_char(' ');
        hub.set_gender(Gender::Girl);
        assert_eq!(hub.start(), None);

        hub.push_char('S');
        assert_eq!(hub.start(), Some(Cue::Start));
        match hub.phase() {
            HubPhase::Playing { player, .. } => {
                assert_eq!(player.name, "S");
                assert_eq!(player.gender, Gender::Girl);
            }
            other => panic!("expected playing, got {other:?}"),
        }
    }

    #[test]
    fn test_name_length_is_capped() {
        let mut hub = GameHub::with_seed(1);
        hub.choose(GameKind::Adventure);
        for _ in 0..40 {
            hub.push_char('a');
        }
        hub.pop_char();
        match hub.phase() {
            HubPhase::Setup(setup) => assert_eq!(setup.name.len(), MAX_NAME_LEN - 1),
            other => panic!("expected setup, got {other:?}"),
        }
    }

    #[test]
    fn test_puzzle_through_hub_awards_bonus_once() {
        let mut hub = GameHub::with_seed(3);
        setup_player(&mut hub, GameKind::Puzzle);
        hub.start();

        let total: u32 = (1..=5)
            .filter_map(|id| hub.fix_item(id))
            .map(|outcome| outcome.points)
            .sum();
        assert_eq!(total, 50);
        assert_eq!(hub.fix_item(1), None);
        assert_eq!(hub.select_answer(0), None);
    }

    #[test]
    fn test_adventure_through_hub() {
        let mut hub = GameHub::with_seed(3);
        setup_player(&mut hub, GameKind::Adventure);
        hub.start();

        let outcome = hub.select_answer(2).unwrap();
        assert_eq!(outcome.points, 15);
        assert_eq!(hub.tick(Duration::from_millis(1500)), Some(AdventureEvent::Advanced));

        hub.select_answer(0);
        match hub.phase() {
            HubPhase::Playing {
                game: ActiveGame::Adventure(adventure),
                ..
            } => assert!(matches!(adventure.phase(), AdventurePhase::Lost(_))),
            other => panic!("expected adventure, got {other:?}"),
        }
    }

    #[test]
    fn test_back_unwinds_to_choosing_then_leaves() {
        let mut hub = GameHub::with_seed(5);
        setup_player(&mut hub, GameKind::Puzzle);
        hub.start();
        assert!(hub.back());
        assert!(matches!(hub.phase(), HubPhase::Choosing));
        assert!(!hub.back());
    }
}
