//! Level table and scene sequencing
//!
//! Scenes are indexed by id: scene 0 is the title, every other scene is a
//! level. Sequencing loops back to the first scene after the last one.

use serde::{Deserialize, Serialize};

/// Destructible brick count per scene id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelTable {
    bricks: Vec<u32>,
}

impl Default for LevelTable {
    fn default() -> Self {
        Self {
            bricks: vec![0, 32, 32],
        }
    }
}

impl LevelTable {
    pub fn new(bricks: Vec<u32>) -> Self {
        Self { bricks }
    }

    /// Total scene count (title included)
    pub fn scene_count(&self) -> usize {
        self.bricks.len()
    }

    /// Bricks that must be destroyed to clear a level
    pub fn bricks_for(&self, level: usize) -> Option<u32> {
        self.bricks.get(level).copied()
    }

    /// The level is complete when exactly its table entry has been destroyed
    pub fn is_complete(&self, level: usize, brick_count: u32) -> bool {
        self.bricks_for(level) == Some(brick_count)
    }

    /// Scene to load after `level`
    pub fn next(&self, level: usize) -> usize {
        next_scene(level, self.scene_count())
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.bricks.iter().copied()
    }
}

/// `(level + 1) mod total`; a table without scenes always yields 0
#[inline]
pub fn next_scene(level: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    (level + 1) % total
}
