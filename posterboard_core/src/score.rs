/// Points shared by the quiz and the mini-games.
///
/// Only the root coordinator holds one; sessions report awarded points and the
/// coordinator applies them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score(u32);

impl Score {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn add(&mut self, points: u32) {
        self.0 = self.0.saturating_add(points);
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_reset() {
        let mut score = Score::new();
        score.add(10);
        score.add(15);
        assert_eq!(score.value(), 25);
        score.reset();
        assert_eq!(score.value(), 0);
    }

    #[test]
    fn test_add_saturates() {
        let mut score = Score(u32::MAX - 1);
        score.add(50);
        assert_eq!(score.value(), u32::MAX);
    }
}
