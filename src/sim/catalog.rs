//! Brick kinds, contact categories and the point catalog

use serde::{Deserialize, Serialize};

/// Brick types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrickKind {
    Red,
    Amber,
    Green,
    Yellow,
    /// Destroyed by overlap instead of solid contact
    PassThrough,
    /// Indestructible obstacle, doesn't count for level clear
    Rock,
}

impl BrickKind {
    pub const ALL: [BrickKind; 6] = [
        BrickKind::Red,
        BrickKind::Amber,
        BrickKind::Green,
        BrickKind::Yellow,
        BrickKind::PassThrough,
        BrickKind::Rock,
    ];

    /// Returns true if destroying this brick counts toward level clear
    pub fn is_destructible(&self) -> bool {
        *self != BrickKind::Rock
    }

    /// Pass-through bricks are triggers; everything else is solid
    pub fn is_trigger(&self) -> bool {
        *self == BrickKind::PassThrough
    }

    /// Layout cell code for this kind
    pub fn code(&self) -> char {
        match self {
            BrickKind::Red => 'r',
            BrickKind::Amber => 'a',
            BrickKind::Green => 'g',
            BrickKind::Yellow => 'y',
            BrickKind::PassThrough => 'p',
            BrickKind::Rock => 'x',
        }
    }

    pub fn from_code(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == c)
    }
}

/// What the ball touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Brick(BrickKind),
    Paddle,
    TopWall,
    SideWall,
    /// Out-of-bounds zone below the paddle
    BottomWall,
    /// Anything without a known category; every handler ignores it
    Untagged,
}

/// Points awarded per destroyed brick kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickCatalog {
    pub red: u32,
    pub amber: u32,
    pub green: u32,
    pub yellow: u32,
    pub pass_through: u32,
}

impl Default for BrickCatalog {
    fn default() -> Self {
        Self {
            red: 25,
            amber: 20,
            green: 15,
            yellow: 10,
            pass_through: 5,
        }
    }
}

impl BrickCatalog {
    pub fn points(&self, kind: BrickKind) -> u32 {
        match kind {
            BrickKind::Red => self.red,
            BrickKind::Amber => self.amber,
            BrickKind::Green => self.green,
            BrickKind::Yellow => self.yellow,
            BrickKind::PassThrough => self.pass_through,
            BrickKind::Rock => 0,
        }
    }
}
