//! Loop configuration.
//!
//! - `BRICK_BUSTER_TICK_MS`: tick interval in milliseconds (default 10)

use std::time::Duration;

use crate::types::TICK_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopConfig {
    /// Fixed delay between ticks. Velocities are per tick, so this sets game speed.
    pub tick: Duration,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(TICK_MS as u64),
        }
    }
}

impl LoopConfig {
    pub fn from_env() -> Self {
        Self::from_tick_var(std::env::var("BRICK_BUSTER_TICK_MS").ok().as_deref())
    }

    fn from_tick_var(value: Option<&str>) -> Self {
        let tick_ms = value
            .map(str::trim)
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(TICK_MS as u64);

        Self {
            tick: Duration::from_millis(tick_ms),
        }
    }
}
