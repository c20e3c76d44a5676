//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that can be flushed to a terminal backend.
//!
//! - [`game_view`]: pure snapshot → framebuffer mapping (field scaling, HUD, overlays)
//! - [`renderer`]: crossterm output with diffing between frames
//! - [`render_throttle`]: skips repaints of frames that are not changing

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use brick_buster_core as core;
pub use brick_buster_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, FieldArea, GameView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
