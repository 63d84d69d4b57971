//! Ability and garbage effects on the board
//!
//! These operations rewrite settled cells directly. None of them touch the active piece,
//! and none of them count toward the lines total.

use crate::board::Board;
use crate::grid::{self, Grid};
use crate::pieces::{recolor_shape, shape_bounds, shape_cell_count};
use crate::source::PieceSource;
use crate::types::{CELL_EMPTY, CELL_GARBAGE};

/// Points for each removed bottom row that held at least one block
pub const BOTTOM_ROW_POINTS: u32 = 100;

/// Points per block removed by a color clear
pub const COLOR_BLOCK_POINTS: u32 = 50;

/// Placement attempts per garbage piece before it is skipped (plus one per 10 levels)
pub const GARBAGE_PLACEMENT_ATTEMPTS: u32 = 4;

/// Color arguments must name a real block color
fn is_block_color(color: u8) -> bool {
    color != CELL_EMPTY && color <= CELL_GARBAGE
}

impl<S: PieceSource> Board<S> {
    /// True if the active piece overlaps a block of `grid`
    fn overlaps_active(&self, grid: &Grid) -> bool {
        grid::intersects(grid, &self.active_shape(), self.offset().x, self.offset().y)
    }

    /// Remove the bottom `n` rows and shift the stack down.
    ///
    /// Each removed row with at least one block scores 100. Returns whether any removed
    /// row had content. Refused (false, nothing changes) if the shifted stack would land
    /// inside the active piece.
    pub fn clear_bottom_rows(&mut self, n: usize) -> bool {
        let rows = self.grid().rows();
        let n = n.min(rows);
        let filled = (rows - n..rows)
            .filter(|&y| self.grid().row_has_blocks(y))
            .count() as u32;

        let mut next = grid::deep_copy(self.grid());
        next.remove_bottom_rows(n);
        if self.overlaps_active(&next) {
            return false;
        }

        *self.grid_mut() = next;
        self.add_score(filled * BOTTOM_ROW_POINTS);
        filled > 0
    }

    /// Remove every block of `color`, then let each column settle.
    ///
    /// Scores 50 per removed block. Returns the number removed; 0 for an invalid color,
    /// or when settling would push blocks into the active piece (nothing changes then).
    pub fn clear_color_blocks(&mut self, color: u8) -> u32 {
        if !is_block_color(color) {
            return 0;
        }

        let mut next = grid::deep_copy(self.grid());
        let mut removed = 0;
        for cell in next.cells_mut() {
            if *cell == color {
                *cell = CELL_EMPTY;
                removed += 1;
            }
        }
        if removed == 0 {
            return 0;
        }

        next.settle_columns();
        if self.overlaps_active(&next) {
            return 0;
        }

        *self.grid_mut() = next;
        self.add_score(removed * COLOR_BLOCK_POINTS);
        removed
    }

    /// Repaint every block in `color`. No points.
    ///
    /// Returns the number of cells that changed; 0 for an invalid color.
    pub fn convert_all_blocks_to_color(&mut self, color: u8) -> u32 {
        if !is_block_color(color) {
            return 0;
        }

        let mut changed = 0;
        for cell in self.grid_mut().cells_mut() {
            if *cell != CELL_EMPTY && *cell != color {
                *cell = color;
                changed += 1;
            }
        }
        changed
    }

    /// Drop up to `count` garbage-colored pieces onto the stack.
    ///
    /// Refused (returns 0, nothing changes) while the stack reaches above the safety row.
    /// Each piece is drawn from the piece source, recolored to garbage, given a random
    /// column, and dropped from just below the reserved top rows until it rests on the
    /// settled stack. A placement that starts blocked or comes to rest inside the active
    /// piece is retried at another column and finally skipped. Returns the number of cells
    /// placed.
    pub fn spawn_garbage_blocks(&mut self, count: u32, level: u32) -> u32 {
        let rows = self.grid().rows();
        let cols = self.grid().cols() as i32;
        let top = self.grid().topmost_occupied_row().unwrap_or(rows);
        if top < self.config().garbage_safety_row {
            return 0;
        }

        let reserved = self.config().reserved_top_rows as i32;
        let attempts = GARBAGE_PLACEMENT_ATTEMPTS + level / 10;
        let mut placed = 0;

        for _ in 0..count {
            let piece = self.source_mut().next();
            let shape = recolor_shape(&piece.shape(0), CELL_GARBAGE);
            let Some((min_c, min_r, max_c, _)) = shape_bounds(&shape) else {
                continue;
            };
            let width = (max_c - min_c + 1) as i32;
            if width > cols {
                continue;
            }

            for _ in 0..attempts {
                let occupied = grid::merge(
                    self.grid(),
                    &self.active_shape(),
                    self.offset().x,
                    self.offset().y,
                );

                let x = self.rng.next_range((cols - width + 1) as u32) as i32 - min_c as i32;
                let mut y = reserved - min_r as i32;
                if grid::intersects(&occupied, &shape, x, y) {
                    continue;
                }
                // Rest on settled blocks only; resting on the active piece would float.
                while !grid::intersects(self.grid(), &shape, x, y + 1) {
                    y += 1;
                }
                if grid::intersects(&occupied, &shape, x, y) {
                    continue;
                }

                let merged = grid::merge(self.grid(), &shape, x, y);
                *self.grid_mut() = merged;
                placed += shape_cell_count(&shape) as u32;
                break;
            }
        }

        placed
    }
}
