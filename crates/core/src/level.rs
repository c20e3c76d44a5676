//! Level builder: brick grid layout and ball speed per level.
//!
//! Difficulty grows linearly: every level adds one brick row and one unit of
//! ball speed on each axis. The layout is deterministic.

use crate::brick::Brick;
use crate::types::{
    BASE_BALL_SPEED, BASE_BRICK_ROWS, BRICK_COLUMNS, BRICK_GAP, BRICK_HEIGHT, BRICK_ORIGIN,
    BRICK_WIDTH,
};

/// Everything a level needs to start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelLayout {
    /// Row-major: row 0 first, each row left to right.
    pub bricks: Vec<Brick>,
    pub ball_velocity: (i32, i32),
}

/// Number of brick rows for a level
pub fn row_count(level: u32) -> u32 {
    BASE_BRICK_ROWS + level
}

/// Number of bricks a freshly built level contains
pub fn brick_count(level: u32) -> usize {
    (row_count(level) * BRICK_COLUMNS) as usize
}

/// Ball velocity for a level; both axes point up-left at launch
pub fn ball_velocity(level: u32) -> (i32, i32) {
    let level = level as i32;
    (-(BASE_BALL_SPEED.0 + level), -(BASE_BALL_SPEED.1 + level))
}

pub fn build_level(level: u32) -> LevelLayout {
    let mut bricks = Vec::with_capacity(brick_count(level));
    build_bricks_into(level, &mut bricks);
    LevelLayout {
        bricks,
        ball_velocity: ball_velocity(level),
    }
}

/// Replace the contents of `out` with the level's brick grid, reusing its allocation.
pub fn build_bricks_into(level: u32, out: &mut Vec<Brick>) {
    out.clear();
    let pitch_x = BRICK_WIDTH + BRICK_GAP;
    let pitch_y = BRICK_HEIGHT + BRICK_GAP;
    for row in 0..row_count(level) as i32 {
        for col in 0..BRICK_COLUMNS as i32 {
            out.push(Brick::new(
                BRICK_ORIGIN.0 + col * pitch_x,
                BRICK_ORIGIN.1 + row * pitch_y,
            ));
        }
    }
}
