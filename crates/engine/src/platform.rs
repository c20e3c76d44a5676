//! Capability interface between the loop and the outside world.

use std::io;
use std::time::Duration;

use brick_buster_input::InputBatch;

use crate::core::SessionSnapshot;
use crate::game_loop::LoopStatus;

/// Input source plus frame sink.
///
/// Keeping the loop behind this trait means the core never depends on a
/// particular terminal or windowing toolkit.
pub trait Platform {
    /// Wait up to `timeout` for input and return whatever arrived.
    ///
    /// This wait is the loop's pacing. An error here is not fatal: the loop
    /// logs it and carries on with the next tick.
    fn poll_input(&mut self, timeout: Duration) -> io::Result<InputBatch>;

    /// Draw the current frame.
    fn present(&mut self, snapshot: &SessionSnapshot, status: &LoopStatus) -> anyhow::Result<()>;
}
