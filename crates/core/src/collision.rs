//! Collision detection between the ball and everything it can touch.
//!
//! Detection is separate from response: [`detect`] only reports contacts, the
//! session applies reversals, brick removal and scoring in a fixed order.
//! Responses never move the ball, so contacts can be computed up front.

use crate::ball::Ball;
use crate::brick::Brick;
use crate::paddle::Paddle;
use crate::types::FIELD_HEIGHT;

/// Contacts found for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Contacts {
    /// Ball overlaps the paddle.
    pub paddle: bool,
    /// Index of the first overlapping brick in collection order.
    pub brick: Option<usize>,
    /// Ball fell below the field.
    pub ball_lost: bool,
}

impl Contacts {
    /// Number of vertical reversals these contacts cause.
    pub fn reversals(&self) -> u32 {
        self.paddle as u32 + self.brick.is_some() as u32
    }
}

pub fn detect(ball: &Ball, paddle: &Paddle, bricks: &[Brick]) -> Contacts {
    let ball_rect = ball.bounds();
    Contacts {
        paddle: ball_rect.intersects(&paddle.bounds()),
        brick: first_brick_hit(ball, bricks),
        ball_lost: ball.y() > FIELD_HEIGHT,
    }
}

/// First brick the ball overlaps; later overlaps are ignored this tick.
pub fn first_brick_hit(ball: &Ball, bricks: &[Brick]) -> Option<usize> {
    let ball_rect = ball.bounds();
    bricks
        .iter()
        .position(|brick| ball_rect.intersects(&brick.bounds()))
}
