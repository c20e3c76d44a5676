//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, tests).
//!
//! # Play Field
//!
//! The field is a fixed logical grid, independent of the terminal size:
//!
//! - **Width**: 600 units (x grows to the right)
//! - **Height**: 500 units (y grows downward)
//! - **Origin**: top-left corner
//!
//! # Entity Geometry
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PADDLE_WIDTH` x `PADDLE_HEIGHT` | 100 x 15 | Paddle size |
//! | `PADDLE_SPEED` | 5 | Units per tick while steering |
//! | `PADDLE_START` | (250, 450) | Paddle position on reset |
//! | `BALL_DIAMETER` | 20 | Ball bounding square |
//! | `BALL_START` | (290, 430) | Ball position on reset |
//! | `BRICK_WIDTH` x `BRICK_HEIGHT` | 50 x 20 | Brick size |
//! | `BRICK_GAP` | 5 | Spacing between bricks |
//!
//! # Level Scaling
//!
//! Each level adds one brick row and one unit of ball speed per axis:
//!
//! | Level | Rows | Bricks | Ball velocity |
//! |-------|------|--------|---------------|
//! | 1 | 7 | 56 | (-3, -4) |
//! | 2 | 8 | 64 | (-4, -5) |
//! | 3 | 9 | 72 | (-5, -6) |
//!
//! # Examples
//!
//! ```
//! use brick_buster_types::{Direction, DirectionEvent, Rect, FIELD_WIDTH};
//!
//! let a = Rect::new(0, 0, 10, 10);
//! let b = Rect::new(5, 5, 10, 10);
//! assert!(a.intersects(&b));
//!
//! // Touching edges do not count as an intersection.
//! let c = Rect::new(10, 0, 10, 10);
//! assert!(!a.intersects(&c));
//!
//! assert_eq!(DirectionEvent::LeftPressed.direction(), Direction::Left);
//! assert_eq!(FIELD_WIDTH, 600);
//! ```

/// Play field width in logical units
pub const FIELD_WIDTH: i32 = 600;

/// Play field height in logical units
pub const FIELD_HEIGHT: i32 = 500;

/// Paddle width
pub const PADDLE_WIDTH: i32 = 100;

/// Paddle height
pub const PADDLE_HEIGHT: i32 = 15;

/// Paddle horizontal speed (units per tick)
pub const PADDLE_SPEED: i32 = 5;

/// Paddle position after a reset
pub const PADDLE_START: (i32, i32) = (250, 450);

/// Ball diameter (the ball collides as a square)
pub const BALL_DIAMETER: i32 = 20;

/// Ball position after a reset
pub const BALL_START: (i32, i32) = (290, 430);

/// Velocity the ball is constructed with, before the first level is loaded.
pub const BALL_INITIAL_VELOCITY: (i32, i32) = (-2, -3);

/// Brick width
pub const BRICK_WIDTH: i32 = 50;

/// Brick height
pub const BRICK_HEIGHT: i32 = 20;

/// Gap between neighbouring bricks (both axes)
pub const BRICK_GAP: i32 = 5;

/// Top-left corner of the brick grid
pub const BRICK_ORIGIN: (i32, i32) = (30, 30);

/// Columns per brick row (fixed for every level)
pub const BRICK_COLUMNS: u32 = 8;

/// Row count at level 0; level `n` has `BASE_BRICK_ROWS + n` rows
pub const BASE_BRICK_ROWS: u32 = 6;

/// Ball speed magnitude at level 0 on each axis; grows by one per level
pub const BASE_BALL_SPEED: (i32, i32) = (2, 3);

/// Points awarded per destroyed brick
pub const POINTS_PER_BRICK: u32 = 10;

/// Lives at the start of a session
pub const STARTING_LIVES: u32 = 3;

/// First level of a session
pub const STARTING_LEVEL: u32 = 1;

/// Fixed tick interval in milliseconds (velocities are per tick)
pub const TICK_MS: u32 = 10;

/// Minimum interval between repaints of a static frame (paused or ended)
pub const STATIC_REPAINT_MS: u64 = 250;

/// Auto-release timeout for terminals that never report key releases
pub const KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Axis-aligned rectangle used for collision tests
///
/// Rectangles are half-open: a rectangle covers `[x, x + width)` by
/// `[y, y + height)`, so two rectangles that only share an edge do not
/// intersect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// True when the interiors of both rectangles overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Horizontal steering intent of the paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Left,
    #[default]
    None,
    Right,
}

impl Direction {
    /// Signed unit step: -1, 0 or 1
    pub fn sign(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::None => 0,
            Direction::Right => 1,
        }
    }

    /// Map any signed value onto a direction by its sign
    pub fn from_sign(v: i32) -> Self {
        match v.signum() {
            -1 => Direction::Left,
            1 => Direction::Right,
            _ => Direction::None,
        }
    }
}

/// Discrete steering events delivered by an input adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectionEvent {
    LeftPressed,
    RightPressed,
    /// Any steering key went up; the paddle stops.
    Released,
}

impl DirectionEvent {
    pub fn direction(self) -> Direction {
        match self {
            DirectionEvent::LeftPressed => Direction::Left,
            DirectionEvent::RightPressed => Direction::Right,
            DirectionEvent::Released => Direction::None,
        }
    }
}

/// Actions the loop controller accepts from a platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Change paddle steering
    Steer(DirectionEvent),
    /// Toggle pause state
    Pause,
    /// Throw the current session away and start a new one
    Restart,
    /// Leave the game loop
    Quit,
}

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionStatus {
    #[default]
    Running,
    /// Terminal: all lives were lost.
    Ended,
}
