//! Game loop controller.
//!
//! Drives a [`brick_buster_core::Session`] at a fixed tick cadence against any
//! [`Platform`] (something that can wait for input and present a frame). The
//! loop is single-threaded and cooperative: input is collected inside the wait
//! between ticks, and the paddle direction is read from a lock-free
//! [`brick_buster_input::DirectionCell`] once per tick.
//!
//! # Example
//!
//! ```
//! use brick_buster_engine::{GameLoop, LoopConfig};
//! use brick_buster_types::{DirectionEvent, GameAction};
//!
//! let mut game = GameLoop::new(LoopConfig::default());
//! let _ = game.apply(GameAction::Steer(DirectionEvent::RightPressed));
//! game.step();
//! assert_eq!(game.session().paddle().x(), 255);
//! ```

pub mod config;
pub mod game_loop;
pub mod platform;

pub use brick_buster_core as core;
pub use brick_buster_types as types;

pub use config::LoopConfig;
pub use game_loop::{GameLoop, LoopStatus};
pub use platform::Platform;
