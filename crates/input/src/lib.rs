//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond
//! `crossterm` key events. It maps keys into [`crate::types::GameAction`],
//! turns press/release pairs into paddle steering (including terminals without
//! key-release events), and provides the lock-free latest-direction cell the
//! loop reads once per tick.

pub mod cell;
pub mod handler;
pub mod map;

pub use brick_buster_types as types;

pub use cell::DirectionCell;
pub use handler::{InputBatch, InputHandler, INPUT_BATCH_CAPACITY};
pub use map::{map_key, should_quit, Key};
