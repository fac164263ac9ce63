//! Score and lives for the current run

use serde::{Deserialize, Serialize};

/// Score/lives store. Only the two mutators write to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameProgress {
    score: u32,
    lives: u32,
}

impl GameProgress {
    pub fn new(lives: u32) -> Self {
        Self { score: 0, lives }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Lives stop at zero; they never go negative.
    pub fn add_lives(&mut self, delta: i32) {
        self.lives = self.lives.saturating_add_signed(delta);
    }

    pub fn is_out_of_lives(&self) -> bool {
        self.lives == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_score() {
        let mut progress = GameProgress::new(3);
        progress.add_score(25);
        progress.add_score(10);
        assert_eq!(progress.score(), 35);
    }

    #[test]
    fn test_lives_saturate_at_zero() {
        let mut progress = GameProgress::new(1);
        progress.add_lives(-1);
        assert_eq!(progress.lives(), 0);
        assert!(progress.is_out_of_lives());
        progress.add_lives(-1);
        assert_eq!(progress.lives(), 0);
        progress.add_lives(2);
        assert_eq!(progress.lives(), 2);
    }
}
