//! A single destructible brick.

use crate::types::{Rect, BRICK_HEIGHT, BRICK_WIDTH};

/// Bricks never move; a destroyed brick is removed from the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Brick {
    x: i32,
    y: i32,
}

impl Brick {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, BRICK_WIDTH, BRICK_HEIGHT)
    }
}
