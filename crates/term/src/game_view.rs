//! GameView: maps a `SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The 600x500 logical field is scaled into the largest bordered area that
//! fits the viewport. Terminal cells are roughly twice as tall as they are wide,
//! so by default the field keeps a 12:5 column-to-row ratio.

use crate::core::SessionSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{
    Rect, SessionStatus, BRICK_GAP, BRICK_HEIGHT, BRICK_ORIGIN, FIELD_HEIGHT, FIELD_WIDTH,
};

/// Columns taken by the side panel, including the gap to the field border.
const PANEL_WIDTH: u16 = 18;

/// Narrowest field frame for which the side panel is still shown.
const MIN_FRAME_WIDTH_WITH_PANEL: u16 = 32;

const BG: Rgb = Rgb::new(20, 20, 28);
const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Brick colors by row, top to bottom.
const ROW_COLORS: [Rgb; 8] = [
    Rgb::new(230, 70, 70),
    Rgb::new(240, 150, 60),
    Rgb::new(235, 215, 80),
    Rgb::new(100, 210, 110),
    Rgb::new(80, 150, 230),
    Rgb::new(120, 90, 200),
    Rgb::new(190, 100, 210),
    Rgb::new(240, 110, 170),
];

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Placement of the logical field inside the framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldArea {
    /// Top-left inner cell (inside the border).
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl FieldArea {
    /// Cells covered by a logical rectangle, clipped to the field.
    ///
    /// Any rectangle that starts inside the field covers at least one cell.
    pub fn cells_for(&self, rect: Rect) -> Option<(u16, u16, u16, u16)> {
        let (c0, c1) = scale_span(rect.x, rect.right(), FIELD_WIDTH, self.width)?;
        let (r0, r1) = scale_span(rect.y, rect.bottom(), FIELD_HEIGHT, self.height)?;
        Some((self.x + c0, self.y + r0, c1 - c0, r1 - r0))
    }
}

fn scale_span(start: i32, end: i32, extent: i32, cells: u16) -> Option<(u16, u16)> {
    let scale = |v: i32| (v.clamp(0, extent) as i64 * cells as i64 / extent as i64) as u16;
    if end <= 0 || start >= extent {
        return None;
    }
    let a = scale(start);
    if a >= cells {
        return None;
    }
    let b = scale(end).max(a + 1).min(cells);
    Some((a, b))
}

/// A lightweight terminal renderer for the brick field.
pub struct GameView {
    keep_aspect: bool,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            keep_aspect: true,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    /// Stretch the field over the whole viewport instead of keeping its shape.
    pub fn stretched() -> Self {
        Self {
            keep_aspect: false,
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Where the field lands for a viewport; `None` when it is too small to draw.
    pub fn layout(&self, viewport: Viewport) -> Option<FieldArea> {
        let with_panel = viewport.width >= MIN_FRAME_WIDTH_WITH_PANEL + PANEL_WIDTH;
        let avail_w = if with_panel {
            viewport.width - PANEL_WIDTH
        } else {
            viewport.width
        };
        let avail_h = viewport.height;
        if avail_w < 3 || avail_h < 3 {
            return None;
        }

        let max_w = avail_w - 2;
        let max_h = avail_h - 2;
        let (width, height) = if self.keep_aspect {
            let h = (max_w as u32 * 5 / 12).clamp(1, max_h as u32) as u16;
            let w = (h as u32 * 12 / 5).clamp(1, max_w as u32) as u16;
            (w, h)
        } else {
            (max_w, max_h)
        };

        let frame_w = width + 2;
        let frame_h = height + 2;
        let start_x = (avail_w - frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => (avail_h - frame_h) / 2,
            AnchorY::Top => 0,
        };

        Some(FieldArea {
            x: start_x + 1,
            y: start_y + 1,
            width,
            height,
        })
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        snap: &SessionSnapshot,
        paused: bool,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let Some(area) = self.layout(viewport) else {
            fb.put_str(0, 0, "terminal too small", CellStyle::default());
            return;
        };

        let bg = CellStyle::fg(Rgb::new(60, 60, 70), BG);
        fb.fill_rect(area.x, area.y, area.width, area.height, ' ', bg);
        draw_border(
            fb,
            area.x - 1,
            area.y - 1,
            area.width + 2,
            area.height + 2,
            CellStyle::fg(Rgb::new(200, 200, 200), BLACK),
        );

        for brick in &snap.bricks {
            let style = CellStyle::fg(brick_color(brick), BG);
            fill_logical(fb, &area, *brick, '█', style);
        }
        fill_logical(
            fb,
            &area,
            snap.paddle,
            '▀',
            CellStyle::fg(Rgb::new(90, 140, 255), BG).bold(),
        );
        fill_logical(
            fb,
            &area,
            snap.ball,
            '●',
            CellStyle::fg(Rgb::new(255, 80, 80), BG).bold(),
        );

        let panel_x = area.x + area.width + 3;
        if panel_x < viewport.width && viewport.width - panel_x >= PANEL_WIDTH - 2 {
            draw_side_panel(fb, snap, paused, panel_x, area.y - 1, viewport);
        } else {
            draw_compact_hud(fb, snap, area.x + 1, area.y - 1);
        }

        if let Some(message) = snap.end_message.as_deref() {
            draw_overlay_text(fb, &area, message);
        } else if paused {
            draw_overlay_text(fb, &area, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, paused: bool, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, paused, viewport, &mut fb);
        fb
    }
}

fn brick_color(brick: &Rect) -> Rgb {
    let row = (brick.y - BRICK_ORIGIN.1).max(0) / (BRICK_HEIGHT + BRICK_GAP);
    ROW_COLORS[row as usize % ROW_COLORS.len()]
}

fn fill_logical(fb: &mut FrameBuffer, area: &FieldArea, rect: Rect, ch: char, style: CellStyle) {
    if let Some((x, y, w, h)) = area.cells_for(rect) {
        fb.fill_rect(x, y, w, h, ch, style);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let (right, bottom) = (x + w - 1, y + h - 1);

    for cx in x + 1..right {
        fb.put_char(cx, y, '─', style);
        fb.put_char(cx, bottom, '─', style);
    }
    for cy in y + 1..bottom {
        fb.put_char(x, cy, '│', style);
        fb.put_char(right, cy, '│', style);
    }
    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
}

fn draw_side_panel(
    fb: &mut FrameBuffer,
    snap: &SessionSnapshot,
    paused: bool,
    x: u16,
    top: u16,
    viewport: Viewport,
) {
    let label = CellStyle::fg(Rgb::new(220, 220, 220), BLACK).bold();
    let value = CellStyle::fg(Rgb::new(200, 200, 200), BLACK);
    let hint = value.dim();

    let mut y = top;
    for (name, v) in [
        ("SCORE", snap.score),
        ("LIVES", snap.lives),
        ("LEVEL", snap.level),
    ] {
        fb.put_str(x, y, name, label);
        fb.put_u32(x, y + 1, v, value);
        y += 3;
    }

    let state = match (snap.status, paused) {
        (SessionStatus::Ended, _) => "GAME OVER",
        (SessionStatus::Running, true) => "PAUSED",
        (SessionStatus::Running, false) => "PLAYING",
    };
    fb.put_str(x, y, state, label);
    y += 2;

    for line in ["←/→ move", "p   pause", "r   restart", "q   quit"] {
        if y >= viewport.height {
            break;
        }
        fb.put_str(x, y, line, hint);
        y += 1;
    }
}

/// Score, lives and level squeezed into the top border.
fn draw_compact_hud(fb: &mut FrameBuffer, snap: &SessionSnapshot, x: u16, y: u16) {
    let style = CellStyle::fg(Rgb::new(220, 220, 220), BLACK).bold();
    let mut cx = fb.put_str(x, y, "S:", style);
    cx = fb.put_u32(cx, y, snap.score, style);
    cx = fb.put_str(cx, y, " L:", style);
    cx = fb.put_u32(cx, y, snap.lives, style);
    cx = fb.put_str(cx, y, " LV:", style);
    fb.put_u32(cx, y, snap.level, style);
}

fn draw_overlay_text(fb: &mut FrameBuffer, area: &FieldArea, text: &str) {
    let text_w = text.chars().count() as u16;
    let x = area.x + area.width.saturating_sub(text_w) / 2;
    let y = area.y + area.height / 2;
    let style = CellStyle::fg(Rgb::new(255, 255, 255), BLACK).bold();
    fb.put_str(x, y, text, style);
}
