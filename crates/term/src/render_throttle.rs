//! Repaint throttling for frames that are not changing.
//!
//! While the game is running every tick changes the frame, so every tick is
//! presented. Paused and ended sessions produce the same frame over and over;
//! those are repainted only when their content changes or when the static
//! interval elapses (which also recovers from terminal resizes).

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval: Duration,
    last: Option<(Instant, u64)>,
}

impl RenderThrottle {
    pub fn new(min_static_interval: Duration) -> Self {
        Self {
            min_static_interval,
            last: None,
        }
    }

    /// Forget the previous frame so the next call always renders.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Decide whether to present a frame with this fingerprint at `now`.
    pub fn should_render(&mut self, now: Instant, fingerprint: u64, is_static: bool) -> bool {
        let render = match self.last {
            None => true,
            Some(_) if !is_static => true,
            Some((_, prev)) if prev != fingerprint => true,
            Some((at, _)) => now.saturating_duration_since(at) >= self.min_static_interval,
        };
        if render {
            self.last = Some((now, fingerprint));
        }
        render
    }
}
