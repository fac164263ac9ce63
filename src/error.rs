//! Configuration errors
//!
//! Gameplay itself never fails; only loading and validating settings can.

use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    PaddleBounds { min_x: f32, max_x: f32 },
    NonPositive { field: &'static str, value: f32 },
    EmptyLevelTable,
    LayoutCountMismatch { layouts: usize, scenes: usize },
    UnknownCell { scene: usize, row: usize, cell: char },
    BrickCountMismatch { scene: usize, table: u32, layout: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read settings: {err}"),
            Self::Parse(err) => write!(f, "failed to parse settings: {err}"),
            Self::PaddleBounds { min_x, max_x } => {
                write!(f, "paddle bounds are inverted: min_x {min_x} >= max_x {max_x}")
            }
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            Self::EmptyLevelTable => write!(f, "level table has no scenes"),
            Self::LayoutCountMismatch { layouts, scenes } => {
                write!(f, "{layouts} layouts for {scenes} scenes")
            }
            Self::UnknownCell { scene, row, cell } => {
                write!(f, "scene {scene} row {row}: unknown brick cell {cell:?}")
            }
            Self::BrickCountMismatch {
                scene,
                table,
                layout,
            } => write!(
                f,
                "scene {scene}: level table expects {table} bricks, layout has {layout}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}
