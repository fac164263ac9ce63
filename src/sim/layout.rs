//! Brick layouts
//!
//! A layout is a list of rows, top row first. Each character is one grid
//! cell: `r a g y p x` pick the brick kind (see `BrickKind::code`), `.` or a
//! space leaves the cell empty.

use glam::Vec2;

use super::catalog::BrickKind;
use super::state::Brick;
use crate::consts::*;
use crate::error::ConfigError;

/// Default layouts, indexed by scene id (scene 0 is the title)
pub fn default_layouts() -> Vec<Vec<String>> {
    let rows = |rows: &[&str]| rows.iter().map(|r| r.to_string()).collect::<Vec<_>>();
    vec![
        Vec::new(),
        rows(&["rrrrrrrr", "aaaaaaaa", "gggggggg", "yyyyyyyy"]),
        rows(&["rrrrrrrr", "appaappa", "gggggggg", "x.x..x.x", "yyyyyyyy"]),
    ]
}

/// Parse a single layout cell
pub fn parse_cell(scene: usize, row: usize, cell: char) -> Result<Option<BrickKind>, ConfigError> {
    match cell {
        '.' | ' ' => Ok(None),
        c => BrickKind::from_code(c)
            .map(Some)
            .ok_or(ConfigError::UnknownCell { scene, row, cell }),
    }
}

/// Number of bricks in a layout that count toward level clear
pub fn destructible_count(scene: usize, rows: &[String]) -> Result<u32, ConfigError> {
    let mut count = 0;
    for (row_idx, row) in rows.iter().enumerate() {
        for cell in row.chars() {
            if let Some(kind) = parse_cell(scene, row_idx, cell)? {
                if kind.is_destructible() {
                    count += 1;
                }
            }
        }
    }
    Ok(count)
}

/// Build the bricks for a scene. Rows are centered horizontally and stacked
/// down from one unit below the top wall. Ids start at 1.
pub fn build_bricks(scene: usize, rows: &[String]) -> Result<Vec<Brick>, ConfigError> {
    let size = Vec2::new(BRICK_WIDTH, BRICK_HEIGHT);
    let pitch = size + Vec2::splat(BRICK_GAP);
    let top_y = ARENA_TOP - 1.0;

    let mut bricks = Vec::new();
    let mut next_id = 1;
    for (row_idx, row) in rows.iter().enumerate() {
        let columns = row.chars().count();
        let row_width = columns as f32 * pitch.x - BRICK_GAP;
        let left_x = -row_width / 2.0 + size.x / 2.0;
        let y = top_y - row_idx as f32 * pitch.y;

        for (col_idx, cell) in row.chars().enumerate() {
            let Some(kind) = parse_cell(scene, row_idx, cell)? else {
                continue;
            };
            bricks.push(Brick {
                id: next_id,
                kind,
                center: Vec2::new(left_x + col_idx as f32 * pitch.x, y),
                size,
            });
            next_id += 1;
        }
    }
    Ok(bricks)
}
