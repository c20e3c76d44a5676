//! Player paddle.

use crate::types::{Direction, Rect, FIELD_WIDTH, PADDLE_HEIGHT, PADDLE_SPEED, PADDLE_WIDTH};

/// Horizontally steered paddle at the bottom of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Paddle {
    x: i32,
    y: i32,
    direction: Direction,
    speed: i32,
}

impl Paddle {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            direction: Direction::None,
            speed: PADDLE_SPEED,
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    /// Record steering intent; takes effect on the next `update`.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Advance one tick and clamp into the field.
    pub fn update(&mut self) {
        self.x += self.direction.sign() * self.speed;
        self.x = self.x.clamp(0, FIELD_WIDTH - PADDLE_WIDTH);
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, PADDLE_WIDTH, PADDLE_HEIGHT)
    }

    /// Reposition without touching direction or speed.
    pub fn reset(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_direction_has_no_immediate_effect() {
        let mut p = Paddle::new(250, 450);
        p.set_direction(Direction::Right);
        assert_eq!(p.x(), 250);
        p.update();
        assert_eq!(p.x(), 255);
    }

    #[test]
    fn update_moves_by_speed() {
        let mut p = Paddle::new(250, 450);
        p.set_direction(Direction::Left);
        p.update();
        p.update();
        assert_eq!(p.x(), 240);
        assert_eq!(p.y(), 450);
    }

    #[test]
    fn update_clamps_left_edge() {
        let mut p = Paddle::new(2, 450);
        p.set_direction(Direction::Left);
        p.update();
        assert_eq!(p.x(), 0);
        p.update();
        assert_eq!(p.x(), 0);
    }

    #[test]
    fn update_clamps_right_edge() {
        let mut p = Paddle::new(FIELD_WIDTH - PADDLE_WIDTH - 3, 450);
        p.set_direction(Direction::Right);
        p.update();
        assert_eq!(p.x(), FIELD_WIDTH - PADDLE_WIDTH);
    }

    #[test]
    fn reset_keeps_direction_and_speed() {
        let mut p = Paddle::new(0, 0);
        p.set_direction(Direction::Right);
        p.reset(250, 450);
        assert_eq!((p.x(), p.y()), (250, 450));
        assert_eq!(p.direction(), Direction::Right);
        assert_eq!(p.speed(), PADDLE_SPEED);
    }

    #[test]
    fn bounds_match_geometry() {
        let p = Paddle::new(10, 20);
        assert_eq!(p.bounds(), Rect::new(10, 20, PADDLE_WIDTH, PADDLE_HEIGHT));
    }
}
