//! Pixel canvas rendered with half-block glyphs.
//!
//! Terminal cells are roughly twice as tall as wide, so the field is drawn on
//! a square pixel grid and collapsed two rows per cell: the upper half-block
//! `▀` takes the top pixel as foreground and the bottom pixel as background.

use crate::term::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::Rgb;

/// Opaque RGB pixel grid. Height must be even so rows pair up cleanly.
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl PixelCanvas {
    pub fn new(width: usize, height: usize, fill: Rgb) -> Self {
        debug_assert!(height % 2 == 0);
        Self {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Out-of-bounds pixels are dropped.
    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        self.pixels[y as usize * self.width + x as usize] = color;
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        for py in y..y + h {
            for px in x..x + w {
                self.set(px, py, color);
            }
        }
    }

    /// Single-pixel rectangle outline.
    pub fn outline_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        if w < 1 || h < 1 {
            return;
        }
        for px in x..x + w {
            self.set(px, y, color);
            self.set(px, y + h - 1, color);
        }
        for py in y..y + h {
            self.set(x, py, color);
            self.set(x + w - 1, py, color);
        }
    }

    pub fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Rgb) {
        let x0 = (cx - r).floor() as i32;
        let x1 = (cx + r).ceil() as i32;
        let y0 = (cy - r).floor() as i32;
        let y1 = (cy + r).ceil() as i32;
        for py in y0..=y1 {
            for px in x0..=x1 {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r * r {
                    self.set(px, py, color);
                }
            }
        }
    }

    /// Collapse pixel-row pairs into half-block cells at the given origin.
    pub fn blit(&self, fb: &mut FrameBuffer, origin_x: u16, origin_y: u16) {
        for cell_y in 0..self.height / 2 {
            for cell_x in 0..self.width {
                let top = self.pixels[(cell_y * 2) * self.width + cell_x];
                let bottom = self.pixels[(cell_y * 2 + 1) * self.width + cell_x];
                fb.set(
                    origin_x.saturating_add(cell_x as u16),
                    origin_y.saturating_add(cell_y as u16),
                    Cell {
                        ch: '▀',
                        style: CellStyle {
                            fg: top,
                            bg: bottom,
                            bold: false,
                        },
                    },
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgb = Rgb::new(0, 0, 40);
    const FG: Rgb = Rgb::new(200, 200, 200);

    #[test]
    fn test_blit_pairs_rows_into_half_blocks() {
        let mut canvas = PixelCanvas::new(2, 2, BG);
        canvas.set(0, 0, FG);

        let mut fb = FrameBuffer::new(4, 4);
        canvas.blit(&mut fb, 1, 1);

        let cell = fb.get(1, 1).unwrap();
        assert_eq!(cell.ch, '▀');
        assert_eq!(cell.style.fg, FG);
        assert_eq!(cell.style.bg, BG);

        let untouched = fb.get(0, 0).unwrap();
        assert_eq!(untouched.ch, ' ');
    }

    #[test]
    fn test_fill_rect_clips_negative_coords() {
        let mut canvas = PixelCanvas::new(4, 4, BG);
        canvas.fill_rect(-2, -2, 3, 3, FG);
        assert_eq!(canvas.get(0, 0), Some(FG));
        assert_eq!(canvas.get(1, 1), Some(BG));
    }

    #[test]
    fn test_fill_circle_covers_center_not_corners() {
        let mut canvas = PixelCanvas::new(6, 6, BG);
        canvas.fill_circle(3.0, 3.0, 2.0, FG);
        assert_eq!(canvas.get(3, 3), Some(FG));
        assert_eq!(canvas.get(0, 0), Some(BG));
        assert_eq!(canvas.get(5, 5), Some(BG));
    }
}
