//! GameView: maps a scene snapshot and the shell view model into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Body, SceneSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::shell::{Overlay, ShellView};

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

const BG: Rgb = Rgb::new(0, 0, 0);
const FIELD_BG: Rgb = Rgb::new(20, 28, 40);

const PLATE_GLYPH: char = '█';
const APPLE_GLYPH: char = '●';

pub const CONTROLS_HINT: &str = "←/→ move  r restart  q quit";

/// Where the playfield landed on screen, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FieldRect {
    /// Top-left corner of the border.
    x: u16,
    y: u16,
    /// Inner size (without border).
    cols: u16,
    rows: u16,
}

impl FieldRect {
    fn inner_x(&self) -> u16 {
        self.x + 1
    }

    fn inner_y(&self) -> u16 {
        self.y + 1
    }
}

/// Renders the playfield scaled to the terminal.
pub struct GameView {
    max_cols: u16,
    max_rows: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 800x600 with cells twice as tall as wide is roughly 80x30.
        Self {
            max_cols: 80,
            max_rows: 30,
        }
    }
}

impl GameView {
    pub fn new(max_cols: u16, max_rows: u16) -> Self {
        Self {
            max_cols: max_cols.max(1),
            max_rows: max_rows.max(1),
        }
    }

    /// Render into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        scene: &SceneSnapshot,
        view: &ShellView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::fg_on(BG, BG).cell(' '));

        let Some(field) = self.layout(viewport) else {
            fb.put_str(0, 0, "terminal too small", CellStyle::default());
            return;
        };

        fb.fill_rect(
            field.inner_x(),
            field.inner_y(),
            field.cols,
            field.rows,
            ' ',
            CellStyle::fg_on(FIELD_BG, FIELD_BG),
        );
        self.draw_border(fb, field);

        if view.show_hud() {
            self.draw_hud(fb, field, view);
        }

        for body in scene.bodies() {
            self.draw_body(fb, field, scene, body);
        }

        if view.catch_flash && view.overlay == Overlay::None {
            self.draw_catch_flash(fb, field, scene);
        }

        match view.overlay {
            Overlay::Start => self.draw_start_overlay(fb, field),
            Overlay::None => {}
            Overlay::GameOver => self.draw_game_over(fb, field, view.score),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, scene: &SceneSnapshot, view: &ShellView, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scene, view, viewport, &mut fb);
        fb
    }

    /// One row above the field is reserved for the HUD.
    fn layout(&self, viewport: Viewport) -> Option<FieldRect> {
        let cols = viewport.width.checked_sub(2)?.min(self.max_cols);
        let rows = viewport.height.checked_sub(3)?.min(self.max_rows);
        if cols < 10 || rows < 5 {
            return None;
        }
        Some(FieldRect {
            x: (viewport.width - cols - 2) / 2,
            y: 1,
            cols,
            rows,
        })
    }

    fn col_of(field: FieldRect, scene: &SceneSnapshot, x: f32) -> u16 {
        let c = (x / scene.width * field.cols as f32).floor();
        c.clamp(0.0, (field.cols - 1) as f32) as u16
    }

    /// `None` when `y` is outside the visible playfield.
    fn row_of(field: FieldRect, scene: &SceneSnapshot, y: f32) -> Option<u16> {
        if !(0.0..scene.height).contains(&y) {
            return None;
        }
        let r = (y / scene.height * field.rows as f32).floor() as u16;
        Some(r.min(field.rows - 1))
    }

    fn draw_body(&self, fb: &mut FrameBuffer, field: FieldRect, scene: &SceneSnapshot, body: Body) {
        match body {
            Body::Plate(plate) => {
                let Some(row) = Self::row_of(field, scene, plate.y) else {
                    return;
                };
                let b = plate.bounds();
                let c0 = Self::col_of(field, scene, b.min_x);
                let c1 = Self::col_of(field, scene, b.max_x);
                let style = CellStyle::fg_on(Rgb::new(170, 120, 70), FIELD_BG);
                fb.fill_rect(
                    field.inner_x() + c0,
                    field.inner_y() + row,
                    c1 - c0 + 1,
                    1,
                    PLATE_GLYPH,
                    style,
                );
            }
            Body::Apple(apple) => {
                let Some(row) = Self::row_of(field, scene, apple.y) else {
                    return;
                };
                let col = Self::col_of(field, scene, apple.x);
                let style = CellStyle::fg_on(Rgb::new(230, 50, 50), FIELD_BG).bold();
                fb.put_char(field.inner_x() + col, field.inner_y() + row, APPLE_GLYPH, style);
            }
        }
    }

    fn draw_catch_flash(&self, fb: &mut FrameBuffer, field: FieldRect, scene: &SceneSnapshot) {
        let Some(row) = Self::row_of(field, scene, scene.plate.y) else {
            return;
        };
        let Some(row) = row.checked_sub(1) else {
            return;
        };
        // "+1" is two cells wide and must stay inside the border.
        let col = Self::col_of(field, scene, scene.plate.x).min(field.cols.saturating_sub(2));
        let style = CellStyle::fg_on(Rgb::new(250, 220, 80), FIELD_BG).bold();
        fb.put_str(field.inner_x() + col, field.inner_y() + row, "+1", style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, field: FieldRect) {
        let style = CellStyle::fg_on(Rgb::new(200, 200, 200), BG);
        let (x, y) = (field.x, field.y);
        let (w, h) = (field.cols + 2, field.rows + 2);

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, field: FieldRect, view: &ShellView) {
        let label = CellStyle::default().bold();
        fb.put_str(field.x, 0, "SCORE ", label);
        fb.put_u32(field.x + 6, 0, view.score, CellStyle::default());

        let hint_len = CONTROLS_HINT.chars().count() as u16;
        let right = field.x + field.cols + 2;
        // Only when it fits without touching the score.
        if right >= hint_len + field.x + 18 {
            let dim = CellStyle::fg_on(Rgb::new(140, 140, 140), BG);
            fb.put_str(right - hint_len, 0, CONTROLS_HINT, dim);
        }
    }

    fn draw_start_overlay(&self, fb: &mut FrameBuffer, field: FieldRect) {
        let title = CellStyle::fg_on(Rgb::new(230, 50, 50), FIELD_BG).bold();
        let text = CellStyle::fg_on(Rgb::new(220, 220, 220), FIELD_BG);
        let mid = field.inner_y() + field.rows / 2;
        let (left, span) = (field.inner_x(), field.cols);

        fb.put_str_centered(left, span, mid.saturating_sub(2), "APPLE CATCHER", title);
        fb.put_str_centered(left, span, mid, "←/→ move the plate", text);
        fb.put_str_centered(left, span, mid + 1, "Enter to start, q to quit", text);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, field: FieldRect, score: u32) {
        let panel = CellStyle::fg_on(Rgb::new(255, 255, 255), Rgb::new(60, 20, 20));
        let mid = field.inner_y() + field.rows / 2;
        let w = 24.min(field.cols);
        let x = field.inner_x() + (field.cols - w) / 2;

        fb.fill_rect(x, mid.saturating_sub(2), w, 5, ' ', panel);
        fb.put_str_centered(x, w, mid.saturating_sub(1), "GAME OVER", panel.bold());

        let digits = digit_count(score);
        let line_w = 6 + digits;
        let sx = x + w.saturating_sub(line_w) / 2;
        fb.put_str(sx, mid, "SCORE ", panel);
        fb.put_u32(sx + 6, mid, score, panel);

        fb.put_str_centered(x, w, mid + 1, "r to restart", panel);
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}
