//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{BrickGrid, GameState, Phase, Rect};
use crate::term::canvas::PixelCanvas;
use crate::term::fb::{CellStyle, FrameBuffer};
use crate::types::{
    Rgb, BALL_RADIUS, FIELD_HEIGHT, FIELD_WIDTH, PADDLE_HEIGHT, PADDLE_WIDTH, PADDLE_Y,
};

const FIELD_BG: Rgb = Rgb::new(0, 0, 96);
const FRAME: Rgb = Rgb::new(255, 255, 255);
const BALL: Rgb = Rgb::new(0, 149, 221);
const PADDLE_BODY: Rgb = Rgb::new(150, 150, 150);
const PADDLE_CAP: Rgb = Rgb::new(220, 50, 50);
const HUD_RED: Rgb = Rgb::new(255, 80, 80);
const HUD_WHITE: Rgb = Rgb::new(240, 240, 240);

/// Inset of the decorative frame, in field units.
const FRAME_INSET: f32 = 5.0;
/// Width of each red paddle end cap, in field units.
const PADDLE_CAP_WIDTH: f32 = 10.0;

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

/// Renders the playfield onto a half-block pixel canvas and centers it in
/// the viewport, with HUD text drawn on top as regular cells.
pub struct GameView {
    /// Field units per pixel.
    scale: f32,
}

impl Default for GameView {
    fn default() -> Self {
        Self { scale: 6.0 }
    }
}

impl GameView {
    pub fn new(scale: f32) -> Self {
        Self { scale }
    }

    /// Render the current game state into a framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let (canvas_w, canvas_h) = self.canvas_size();
        let mut canvas = PixelCanvas::new(canvas_w, canvas_h, FIELD_BG);

        // Decorative frame, slightly inset like the field border.
        let inset = self.px(FRAME_INSET).max(1);
        canvas.outline_rect(
            inset,
            inset,
            canvas_w as i32 - inset * 2,
            canvas_h as i32 - inset * 2,
            FRAME,
        );

        // Live bricks, positions recomputed from grid indices.
        for (row, col, brick) in state.grid.iter() {
            if brick.alive {
                self.fill_field_rect(&mut canvas, BrickGrid::rect(row, col), brick.color);
            }
        }

        self.draw_paddle(&mut canvas, state.paddle_x);

        canvas.fill_circle(
            state.ball.x / self.scale,
            state.ball.y / self.scale,
            BALL_RADIUS / self.scale,
            BALL,
        );

        // Center the field in the viewport.
        let cell_h = (canvas_h / 2) as u16;
        let start_x = viewport.width.saturating_sub(canvas_w as u16) / 2;
        let start_y = viewport.height.saturating_sub(cell_h) / 2;
        canvas.blit(&mut fb, start_x, start_y);

        self.draw_hud(&mut fb, state, start_x, start_y, canvas_w as u16, cell_h);

        fb
    }

    fn canvas_size(&self) -> (usize, usize) {
        let w = (FIELD_WIDTH / self.scale).round() as usize;
        let mut h = (FIELD_HEIGHT / self.scale).ceil() as usize;
        if h % 2 == 1 {
            h += 1;
        }
        (w, h)
    }

    fn px(&self, v: f32) -> i32 {
        (v / self.scale).round() as i32
    }

    fn fill_field_rect(&self, canvas: &mut PixelCanvas, rect: Rect, color: Rgb) {
        let x0 = self.px(rect.x);
        let y0 = self.px(rect.y);
        let w = (self.px(rect.x + rect.w) - x0).max(1);
        let h = (self.px(rect.y + rect.h) - y0).max(1);
        canvas.fill_rect(x0, y0, w, h, color);
    }

    fn draw_paddle(&self, canvas: &mut PixelCanvas, paddle_x: f32) {
        self.fill_field_rect(
            canvas,
            Rect {
                x: paddle_x,
                y: PADDLE_Y,
                w: PADDLE_WIDTH,
                h: PADDLE_HEIGHT,
            },
            PADDLE_BODY,
        );
        for cap_x in [paddle_x, paddle_x + PADDLE_WIDTH - PADDLE_CAP_WIDTH] {
            self.fill_field_rect(
                canvas,
                Rect {
                    x: cap_x,
                    y: PADDLE_Y,
                    w: PADDLE_CAP_WIDTH,
                    h: PADDLE_HEIGHT,
                },
                PADDLE_CAP,
            );
        }
    }

    fn draw_hud(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        start_x: u16,
        start_y: u16,
        cell_w: u16,
        cell_h: u16,
    ) {
        let high = CellStyle {
            fg: HUD_RED,
            bg: FIELD_BG,
            bold: true,
        };
        let plain = CellStyle {
            fg: HUD_WHITE,
            bg: FIELD_BG,
            bold: false,
        };

        fb.put_str(
            start_x + 2,
            start_y + 1,
            &format!("HIGH SCORE: {}", state.high_score),
            high,
        );

        let score_text = format!("SCORE: {}", state.score);
        let score_x = start_x + cell_w.saturating_sub(score_text.chars().count() as u16 + 2);
        fb.put_str(score_x, start_y + 1, &score_text, plain);

        if matches!(state.phase, Phase::NotReleased) {
            let prompt = "Press Space to Start";
            let x = start_x + cell_w.saturating_sub(prompt.chars().count() as u16) / 2;
            let y = start_y + cell_h / 2;
            fb.put_str(
                x,
                y,
                prompt,
                CellStyle {
                    fg: HUD_WHITE,
                    bg: FIELD_BG,
                    bold: true,
                },
            );
        }
    }
}
