use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::content::PUZZLE_ITEMS;
use crate::sound::Cue;

pub const COMPLETION_BONUS: u32 = 50;

/// A classroom item waiting to be tidied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleItem {
    pub id: u8,
    pub label: &'static str,
    pub placed: bool,
}

/// Result of placing an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleOutcome {
    pub completed: bool,
    pub points: u32,
    pub cue: Cue,
}

/// "Puzzle Kelas Bersih": tidy every item to finish
#[derive(Debug, Clone)]
pub struct PuzzleGame {
    items: Vec<PuzzleItem>,
    completed: bool,
    bonus_awarded: bool,
}

impl PuzzleGame {
    /// Items in their canonical order
    pub fn new() -> Self {
        let items = PUZZLE_ITEMS
            .iter()
            .map(|&(id, label)| PuzzleItem {
                id,
                label,
                placed: false,
            })
            .collect();
        Self {
            items,
            completed: false,
            bonus_awarded: false,
        }
    }

    /// Items scattered in a random order
    pub fn scattered<R: Rng>(rng: &mut R) -> Self {
        let mut game = Self::new();
        game.items.shuffle(rng);
        game
    }

    pub fn with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::scattered(&mut rng)
    }

    pub fn items(&self) -> &[PuzzleItem] {
        &self.items
    }

    pub fn placed_count(&self) -> usize {
        self.items.iter().filter(|item| item.placed).count()
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Place the item with `id`. Unknown or already placed items are ignored.
    pub fn fix_item(&mut self, id: u8) -> Option<PuzzleOutcome> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id && !item.placed)?;
        item.placed = true;

        let bonus = self.evaluate();
        if self.completed {
            Some(PuzzleOutcome {
                completed: true,
                points: bonus,
                cue: Cue::Complete,
            })
        } else {
            Some(PuzzleOutcome {
                completed: false,
                points: 0,
                cue: Cue::Click,
            })
        }
    }

    /// Re-check the completion condition. The bonus is only ever paid once.
    pub fn evaluate(&mut self) -> u32 {
        if self.items.iter().all(|item| item.placed) {
            self.completed = true;
            if !self.bonus_awarded {
                self.bonus_awarded = true;
                return COMPLETION_BONUS;
            }
        }
        0
    }
}

impl Default for PuzzleGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unplaced() {
        let game = PuzzleGame::new();
        assert_eq!(game.items().len(), 5);
        assert_eq!(game.placed_count(), 0);
        assert!(!game.is_complete());
    }

    #[test]
    fn test_completes_on_last_item_any_order() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut order: Vec<u8> = (1..=5).collect();
            order.shuffle(&mut rng);

            let mut game = PuzzleGame::new();
            let mut total = 0;
            for (n, id) in order.iter().enumerate() {
                let outcome = game.fix_item(*id).unwrap();
                total += outcome.points;
                assert_eq!(outcome.completed, n == 4);
                assert_eq!(game.is_complete(), n == 4);
            }
            assert_eq!(total, COMPLETION_BONUS);
        }
    }

    #[test]
    fn test_bonus_paid_once() {
        let mut game = PuzzleGame::new();
        for id in 1..=5 {
            game.fix_item(id);
        }
        assert_eq!(game.evaluate(), 0);
        assert_eq!(game.evaluate(), 0);
        assert!(game.is_complete());
    }

    #[test]
    fn test_refixing_is_noop() {
        let mut game = PuzzleGame::new();
        assert!(game.fix_item(3).is_some());
        assert_eq!(game.fix_item(3), None);
        assert_eq!(game.fix_item(42), None);
        assert_eq!(game.placed_count(), 1);
    }

    #[test]
    fn test_seeded_layout_is_stable() {
        let a: Vec<u8> = PuzzleGame::with_seed(9).items().iter().map(|i| i.id).collect();
        let b: Vec<u8> = PuzzleGame::with_seed(9).items().iter().map(|i| i.id).collect();
        assert_eq!(a, b);
        let mut sorted = a.clone();
        sorted.sort();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_outcome_cues() {
        let mut game = PuzzleGame::new();
        assert_eq!(game.fix_item(1).map(|o| o.cue), Some(Cue::Click));
        for id in 2..=4 {
            game.fix_item(id);
        }
        assert_eq!(game.fix_item(5).map(|o| o.cue), Some(Cue::Complete));
    }
}
