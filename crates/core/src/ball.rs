//! The ball: constant-velocity motion with wall reflection.
//!
//! Left, right and top edges reflect. The bottom edge is open:
//! a ball that falls past it is lost, which the session handles.

use crate::types::{Rect, BALL_DIAMETER, FIELD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ball {
    x: i32,
    y: i32,
    speed_x: i32,
    speed_y: i32,
}

impl Ball {
    pub fn new(x: i32, y: i32, speed_x: i32, speed_y: i32) -> Self {
        Self {
            x,
            y,
            speed_x,
            speed_y,
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn velocity(&self) -> (i32, i32) {
        (self.speed_x, self.speed_y)
    }

    /// Advance one tick, reflecting off the side and top walls.
    ///
    /// Side reflections clamp the ball back onto the wall. The top wall only
    /// flips the vertical velocity, so `y` may sit above 0 for one tick.
    pub fn update(&mut self) {
        self.x += self.speed_x;
        self.y += self.speed_y;

        let max_x = FIELD_WIDTH - BALL_DIAMETER;
        if self.x < 0 || self.x > max_x {
            self.speed_x = -self.speed_x;
            self.x = self.x.clamp(0, max_x);
        }
        if self.y < 0 {
            self.speed_y = -self.speed_y;
        }
    }

    pub fn reverse_y(&mut self) {
        self.speed_y = -self.speed_y;
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn set_speed(&mut self, speed_x: i32, speed_y: i32) {
        self.speed_x = speed_x;
        self.speed_y = speed_y;
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, BALL_DIAMETER, BALL_DIAMETER)
    }
}
