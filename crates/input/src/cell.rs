//! Lock-free latest-direction cell.
//!
//! The input path overwrites the cell whenever steering changes; the loop reads
//! it once per tick. Only the latest value matters, so no queue is needed.

use std::sync::atomic::{AtomicI8, Ordering};
use std::sync::Arc;

use crate::types::{Direction, DirectionEvent};

/// Shared handle to the current paddle direction. Clones share the same cell.
#[derive(Debug, Clone, Default)]
pub struct DirectionCell {
    inner: Arc<AtomicI8>,
}

impl DirectionCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, direction: Direction) {
        self.inner.store(direction.sign() as i8, Ordering::Relaxed);
    }

    pub fn apply(&self, event: DirectionEvent) {
        self.store(event.direction());
    }

    pub fn load(&self) -> Direction {
        Direction::from_sign(self.inner.load(Ordering::Relaxed) as i32)
    }
}
