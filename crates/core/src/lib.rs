//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, terminals, or I/O, making it:
//!
//! - **Deterministic**: Same inputs produce identical sessions (no randomness at all)
//! - **Testable**: Unit tests for every rule below
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`paddle`]: Player paddle, steered left/right and clamped to the field
//! - [`ball`]: Constant-velocity ball reflecting off side and top walls
//! - [`brick`]: Static destructible bricks
//! - [`level`]: Brick grid layout and ball speed per level
//! - [`collision`]: Ball contact detection against paddle, bricks and floor
//! - [`session`]: Score, lives, level and the per-tick update
//! - [`snapshot`]: Read-only drawable state for presentation
//!
//! # Game Rules
//!
//! - **Scoring**: 10 points per brick, at most one brick per tick
//! - **Lives**: 3; the ball falling below the field costs one
//! - **Levels**: clearing every brick adds a row and one unit of ball speed per axis
//! - **Game over**: when the last life is lost the session stops ticking
//!
//! # Example
//!
//! ```
//! use brick_buster_core::Session;
//! use brick_buster_types::DirectionEvent;
//!
//! let mut session = Session::new();
//! assert_eq!(session.bricks().len(), 56);
//!
//! session.steer(DirectionEvent::RightPressed);
//! session.tick();
//! assert_eq!(session.paddle().x(), 255);
//! ```

pub mod ball;
pub mod brick;
pub mod collision;
pub mod level;
pub mod paddle;
pub mod session;
pub mod snapshot;

pub use brick_buster_types as types;

// Re-export commonly used types for convenience
pub use ball::Ball;
pub use brick::Brick;
pub use collision::{detect, Contacts};
pub use level::{build_level, LevelLayout};
pub use paddle::Paddle;
pub use session::{Session, TickOutcome};
pub use snapshot::SessionSnapshot;
