//! Brick Buster (workspace facade crate).
//!
//! The game logic lives in dedicated crates under `crates/`; this package
//! re-exports them as `brick_buster::{core,engine,input,term,types}` and adds
//! the terminal platform and logging setup used by the binary.

pub mod logging;
pub mod terminal;

pub use brick_buster_core as core;
pub use brick_buster_engine as engine;
pub use brick_buster_input as input;
pub use brick_buster_term as term;
pub use brick_buster_types as types;
