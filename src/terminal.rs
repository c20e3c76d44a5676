//! Terminal platform: crossterm input plus framebuffer presentation.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use crate::core::SessionSnapshot;
use crate::engine::{LoopStatus, Platform};
use crate::input::{InputBatch, InputHandler};
use crate::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use crate::types::{GameAction, STATIC_REPAINT_MS};

pub struct TerminalPlatform {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
    input: InputHandler,
    throttle: RenderThrottle,
}

impl TerminalPlatform {
    pub fn new() -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view: GameView::default(),
            fb: FrameBuffer::new(0, 0),
            input: InputHandler::new(),
            throttle: RenderThrottle::new(Duration::from_millis(STATIC_REPAINT_MS)),
        }
    }

    /// Switch the terminal into game mode (raw, alternate screen).
    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    /// Restore the terminal.
    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    pub fn keyboard_enhanced(&self) -> bool {
        self.renderer.keyboard_enhanced()
    }

    fn on_event(&mut self, event: &Event, batch: &mut InputBatch) -> bool {
        if let Event::Resize(..) = event {
            self.renderer.invalidate();
            self.throttle.invalidate();
        }
        match self.input.handle_event(event) {
            Some(action) => batch.try_push(action).is_ok() && action != GameAction::Quit,
            None => true,
        }
    }
}

impl Default for TerminalPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for TerminalPlatform {
    fn poll_input(&mut self, timeout: Duration) -> io::Result<InputBatch> {
        let deadline = Instant::now() + timeout;
        let mut batch = InputBatch::new();

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                break;
            }
            let ev = event::read()?;
            if !self.on_event(&ev, &mut batch) {
                break;
            }
        }

        if let Some(action) = self.input.update() {
            let _ = batch.try_push(action);
        }
        Ok(batch)
    }

    fn present(&mut self, snapshot: &SessionSnapshot, status: &LoopStatus) -> Result<()> {
        let fingerprint = snapshot.frame_fingerprint(status.paused);
        if !self
            .throttle
            .should_render(Instant::now(), fingerprint, !status.dirty)
        {
            return Ok(());
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.view
            .render_into(snapshot, status.paused, Viewport::new(w, h), &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}
