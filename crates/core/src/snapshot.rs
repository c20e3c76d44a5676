//! Read-only copy of everything the presentation layer draws.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::types::{Rect, SessionStatus};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SessionSnapshot {
    pub paddle: Rect,
    pub ball: Rect,
    pub ball_velocity: (i32, i32),
    /// Bricks still in play, in collection order.
    pub bricks: Vec<Rect>,
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    pub status: SessionStatus,
    /// Set once the session has ended.
    pub end_message: Option<String>,
}

impl SessionSnapshot {
    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    /// Hash of the whole snapshot; equal snapshots give equal fingerprints.
    pub fn fingerprint(&self) -> u64 {
        let mut h = DefaultHasher::new();
        self.hash(&mut h);
        h.finish()
    }

    /// Fingerprint of the frame drawn for this snapshot, which also depends on
    /// whether the loop is paused.
    pub fn frame_fingerprint(&self, paused: bool) -> u64 {
        let mut h = DefaultHasher::new();
        (self, paused).hash(&mut h);
        h.finish()
    }
}
