//! Fixed-cadence loop: tick, collect input, present.

use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use brick_buster_input::{DirectionCell, InputBatch};
use tracing::{debug, info, warn};

use crate::config::LoopConfig;
use crate::core::{Session, SessionSnapshot, TickOutcome};
use crate::platform::Platform;
use crate::types::{Direction, GameAction};

/// Loop-level state handed to the platform with every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoopStatus {
    pub paused: bool,
    /// State changed since the previous frame.
    pub dirty: bool,
    /// Ticks applied to the current session.
    pub ticks: u64,
}

pub struct GameLoop {
    config: LoopConfig,
    session: Session,
    direction: DirectionCell,
    snapshot: SessionSnapshot,
    paused: bool,
    dirty: bool,
    ticks: u64,
}

impl GameLoop {
    pub fn new(config: LoopConfig) -> Self {
        Self {
            config,
            session: Session::new(),
            direction: DirectionCell::new(),
            snapshot: SessionSnapshot::default(),
            paused: false,
            dirty: true,
            ticks: 0,
        }
    }

    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn status(&self) -> LoopStatus {
        LoopStatus {
            paused: self.paused,
            dirty: self.dirty,
            ticks: self.ticks,
        }
    }

    /// Handle for steering from outside the loop (another thread included).
    pub fn direction_handle(&self) -> DirectionCell {
        self.direction.clone()
    }

    /// Apply one platform action. `Break` means the player asked to quit.
    pub fn apply(&mut self, action: GameAction) -> ControlFlow<()> {
        match action {
            GameAction::Steer(event) => self.direction.apply(event),
            GameAction::Pause => {
                // An ended session stays on its final frame.
                if self.session.is_running() {
                    self.paused = !self.paused;
                    self.dirty = true;
                    debug!(paused = self.paused, "pause toggled");
                }
            }
            GameAction::Restart => {
                info!(
                    score = self.session.score(),
                    level = self.session.level(),
                    "restarting session"
                );
                self.session = Session::new();
                self.direction.store(Direction::None);
                self.paused = false;
                self.dirty = true;
                self.ticks = 0;
            }
            GameAction::Quit => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    /// Run a single tick. Returns `None` while paused.
    pub fn step(&mut self) -> Option<TickOutcome> {
        if self.paused {
            return None;
        }

        self.session.set_paddle_direction(self.direction.load());
        let outcome = self.session.tick();
        if outcome.halted {
            return Some(outcome);
        }

        self.ticks += 1;
        self.dirty = true;

        if let Some(index) = outcome.contacts.brick {
            debug!(index, score = self.session.score(), "brick destroyed");
        }
        if outcome.life_lost {
            debug!(lives = self.session.lives(), "ball lost");
        }
        if outcome.ended {
            info!(
                score = self.session.score(),
                level = self.session.level(),
                "game over"
            );
        }
        if let Some(level) = outcome.level_advanced {
            info!(level, score = self.session.score(), "level cleared");
        }

        Some(outcome)
    }

    /// Drive the session until the platform delivers `Quit`.
    pub fn run<P: Platform>(&mut self, platform: &mut P) -> anyhow::Result<()> {
        info!(tick_ms = self.config.tick.as_millis() as u64, "game loop started");

        let tick = self.config.tick;
        let mut last_tick = Instant::now();
        self.present(platform)?;

        loop {
            let timeout = tick
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            let batch = match platform.poll_input(timeout) {
                Ok(batch) => batch,
                Err(err) => {
                    warn!(error = %err, "input wait failed, continuing");
                    std::thread::sleep(tick.saturating_sub(last_tick.elapsed()));
                    InputBatch::new()
                }
            };

            for action in batch {
                if self.apply(action).is_break() {
                    info!(score = self.session.score(), "quit requested");
                    return Ok(());
                }
            }

            if last_tick.elapsed() >= tick {
                last_tick = Instant::now();
                self.step();
                self.present(platform)?;
            }
        }
    }

    fn present<P: Platform>(&mut self, platform: &mut P) -> anyhow::Result<()> {
        self.session.snapshot_into(&mut self.snapshot);
        let status = self.status();
        platform.present(&self.snapshot, &status)?;
        self.dirty = false;
        Ok(())
    }
}
