//! Brick grid - generation, hit tests, and the clear check
//!
//! Rows and columns are randomized at generation time, so the grid is ragged:
//! each row carries its own column count. Brick positions are a pure function
//! of the grid indices; only liveness and color are stored per cell.

use crate::core::rng::SimpleRng;
use crate::types::{
    Rgb, BRICK_ALIVE_PERCENT, BRICK_HEIGHT, BRICK_OFFSET_LEFT, BRICK_OFFSET_TOP, BRICK_PADDING,
    BRICK_WIDTH, MAX_COLS, MAX_ROWS, MIN_COLS, MIN_ROWS,
};

/// Axis-aligned rectangle in field units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Strict interior test: points on the boundary do not count.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px > self.x && px < self.x + self.w && py > self.y && py < self.y + self.h
    }
}

/// A single destructible brick.
///
/// Once dead, a brick never comes back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brick {
    pub alive: bool,
    pub color: Rgb,
}

/// Ragged grid of bricks, indexed as (row, col).
#[derive(Debug, Clone, PartialEq)]
pub struct BrickGrid {
    rows: Vec<Vec<Brick>>,
}

impl BrickGrid {
    /// Generate a fresh layout from the RNG: 3..=7 rows, 4..=9 columns per
    /// row, each cell live with 80% probability.
    pub fn generate(rng: &mut SimpleRng) -> Self {
        let row_count = rng.next_between(MIN_ROWS as u32, MAX_ROWS as u32) as usize;
        let mut rows = Vec::with_capacity(row_count);
        for _ in 0..row_count {
            let col_count = rng.next_between(MIN_COLS as u32, MAX_COLS as u32) as usize;
            let mut row = Vec::with_capacity(col_count);
            for _ in 0..col_count {
                row.push(Brick {
                    alive: rng.roll_percent(BRICK_ALIVE_PERCENT),
                    color: rng.next_color(),
                });
            }
            rows.push(row);
        }
        Self { rows }
    }

    /// Build a grid from an explicit liveness layout.
    ///
    /// Colors come from a fixed seed; callers that care about layout only.
    pub fn from_layout(layout: &[&[bool]]) -> Self {
        let mut rng = SimpleRng::new(1);
        let rows = layout
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&alive| Brick {
                        alive,
                        color: rng.next_color(),
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    pub fn brick(&self, row: usize, col: usize) -> Option<&Brick> {
        self.rows.get(row)?.get(col)
    }

    /// Position of the (row, col) cell, recomputed from indices.
    pub fn rect(row: usize, col: usize) -> Rect {
        Rect {
            x: BRICK_OFFSET_LEFT + col as f32 * (BRICK_WIDTH + BRICK_PADDING),
            y: BRICK_OFFSET_TOP + row as f32 * (BRICK_HEIGHT + BRICK_PADDING),
            w: BRICK_WIDTH,
            h: BRICK_HEIGHT,
        }
    }

    /// Iterate all cells with their indices.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Brick)> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, b)| (r, c, b)))
    }

    pub fn alive_count(&self) -> usize {
        self.iter().filter(|(_, _, b)| b.alive).count()
    }

    pub fn all_cleared(&self) -> bool {
        self.iter().all(|(_, _, b)| !b.alive)
    }

    /// Kill every live brick whose rect contains the point.
    ///
    /// Returns how many bricks died. Dead bricks never match again, so the
    /// operation is idempotent per brick.
    pub fn destroy_hits(&mut self, px: f32, py: f32) -> usize {
        let mut hits = 0;
        for (r, row) in self.rows.iter_mut().enumerate() {
            for (c, brick) in row.iter_mut().enumerate() {
                if brick.alive && Self::rect(r, c).contains(px, py) {
                    brick.alive = false;
                    hits += 1;
                }
            }
        }
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_is_strict() {
        let rect = BrickGrid::rect(0, 0);
        assert!(rect.contains(rect.x + 1.0, rect.y + 1.0));
        assert!(!rect.contains(rect.x, rect.y + 1.0));
        assert!(!rect.contains(rect.x + rect.w, rect.y + 1.0));
        assert!(!rect.contains(rect.x + 1.0, rect.y + rect.h));
    }

    #[test]
    fn test_layout_rows_do_not_overlap() {
        let a = BrickGrid::rect(0, 0);
        let b = BrickGrid::rect(1, 0);
        assert!(a.y + a.h < b.y);
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let mut grid = BrickGrid::from_layout(&[&[true]]);
        let rect = BrickGrid::rect(0, 0);
        let (cx, cy) = (rect.x + rect.w / 2.0, rect.y + rect.h / 2.0);

        assert_eq!(grid.destroy_hits(cx, cy), 1);
        assert_eq!(grid.destroy_hits(cx, cy), 0);
        assert!(grid.all_cleared());
    }
}
