//! Grid module - the settled board matrix and the pure functions over it
//!
//! The grid is `rows × cols` cell values stored row-major in one flat buffer.
//! Coordinates: `(x, y)` where x is the column (left to right) and y is the row
//! (top to bottom). Shape cell `shape[r][c]` maps to grid cell `(x + c, y + r)`;
//! [`intersects`] and [`merge`] share this mapping.

use serde::{Deserialize, Serialize};

use crate::types::{is_cell_value, Shape, CELL_EMPTY, SHAPE_SIZE};

/// Points per removed row, multiplied by the number of rows removed
pub const LINE_CLEAR_BONUS_BASE: u32 = 50;

/// Settled board contents
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<u8>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![CELL_EMPTY; rows * cols],
        }
    }

    /// Build a grid from row slices.
    ///
    /// Returns None for ragged input or values outside the cell domain.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Option<Self> {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols || !row.iter().all(|&v| is_cell_value(v)) {
                return None;
            }
            cells.extend_from_slice(row);
        }
        Some(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.cols || y as usize >= self.rows {
            return None;
        }
        Some(y as usize * self.cols + x as usize)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at column `x`, row `y`; None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set a cell.
    ///
    /// Returns false if out of bounds or `value` is not a cell value.
    pub fn set(&mut self, x: i32, y: i32, value: u8) -> bool {
        if !is_cell_value(value) {
            return false;
        }
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(v) if v != CELL_EMPTY)
    }

    /// Row `y` as a slice; None if out of bounds
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= self.rows {
            return None;
        }
        let start = y * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.cols;
        &mut self.cells[start..start + self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.cols.max(1)).take(self.rows)
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    /// Every cell non-zero
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|&c| c != CELL_EMPTY))
    }

    /// At least one non-zero cell
    pub fn row_has_blocks(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().any(|&c| c != CELL_EMPTY))
    }

    /// Index of the highest row holding a block
    pub fn topmost_occupied_row(&self) -> Option<usize> {
        (0..self.rows).find(|&y| self.row_has_blocks(y))
    }

    /// Number of cells equal to `value`
    pub fn count(&self, value: u8) -> usize {
        self.cells.iter().filter(|&&c| c == value).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == CELL_EMPTY)
    }

    /// Zero every cell
    pub fn clear(&mut self) {
        self.cells.fill(CELL_EMPTY);
    }

    /// Drop the bottom `n` rows, shift everything above down by `n`, zero-fill the top.
    pub(crate) fn remove_bottom_rows(&mut self, n: usize) {
        let n = n.min(self.rows);
        if n == 0 {
            return;
        }
        let keep = (self.rows - n) * self.cols;
        self.cells.copy_within(0..keep, n * self.cols);
        self.cells[..n * self.cols].fill(CELL_EMPTY);
    }

    /// Column-wise gravity: each column's blocks slide to the bottom in order.
    pub(crate) fn settle_columns(&mut self) {
        for x in 0..self.cols {
            let mut write_y = self.rows;
            for read_y in (0..self.rows).rev() {
                let cell = self.cells[read_y * self.cols + x];
                if cell != CELL_EMPTY {
                    write_y -= 1;
                    if write_y != read_y {
                        self.cells[write_y * self.cols + x] = cell;
                        self.cells[read_y * self.cols + x] = CELL_EMPTY;
                    }
                }
            }
        }
    }

    /// Convert to nested rows for display and tests
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.iter_rows().map(|r| r.to_vec()).collect()
    }
}

/// Result of one line-clear pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearRow {
    pub lines_removed: u32,
    /// Grid after compaction
    pub grid: Grid,
    pub bonus: u32,
}

/// True if any occupied shape cell at `(x, y)` leaves the grid or overlaps a block.
pub fn intersects(grid: &Grid, shape: &Shape, x: i32, y: i32) -> bool {
    for r in 0..SHAPE_SIZE {
        for c in 0..SHAPE_SIZE {
            if shape[r][c] == CELL_EMPTY {
                continue;
            }
            match grid.get(x + c as i32, y + r as i32) {
                Some(CELL_EMPTY) => {}
                _ => return true,
            }
        }
    }
    false
}

/// Copy of `grid` with the occupied shape cells written at `(x, y)`.
///
/// Cells falling outside the grid are dropped; the input is never modified.
pub fn merge(grid: &Grid, shape: &Shape, x: i32, y: i32) -> Grid {
    let mut out = deep_copy(grid);
    for r in 0..SHAPE_SIZE {
        for c in 0..SHAPE_SIZE {
            let value = shape[r][c];
            if value != CELL_EMPTY {
                out.set(x + c as i32, y + r as i32, value);
            }
        }
    }
    out
}

/// Remove every full row, compacting the rest toward the bottom.
///
/// Uses a two-pointer scan from the bottom; surviving rows keep their order and the
/// vacated top rows are zero-filled. `bonus = 50 * lines²`.
pub fn detect_and_clear_full_rows(grid: &Grid) -> ClearRow {
    let mut out = deep_copy(grid);
    let cols = out.cols;
    let mut lines_removed: u32 = 0;
    let mut write_y = out.rows;

    for read_y in (0..out.rows).rev() {
        if grid.is_row_full(read_y) {
            lines_removed += 1;
            continue;
        }
        write_y -= 1;
        if write_y != read_y {
            let src = read_y * cols;
            out.cells.copy_within(src..src + cols, write_y * cols);
        }
    }

    for y in 0..write_y {
        out.row_mut(y).fill(CELL_EMPTY);
    }

    ClearRow {
        lines_removed,
        grid: out,
        bonus: LINE_CLEAR_BONUS_BASE * lines_removed * lines_removed,
    }
}

/// Value-independent copy
pub fn deep_copy(grid: &Grid) -> Grid {
    grid.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAR: Shape = [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]];
    const DOT: Shape = [[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 5]];

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(25, 10);
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(9, 0), Some(9));
        assert_eq!(grid.index(0, 1), Some(10));
        assert_eq!(grid.index(9, 24), Some(249));
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(10, 0), None);
        assert_eq!(grid.index(0, 25), None);
    }

    #[test]
    fn test_set_rejects_out_of_domain_values() {
        let mut grid = Grid::new(4, 4);
        assert!(grid.set(1, 1, 8));
        assert!(!grid.set(1, 1, 9));
        assert_eq!(grid.get(1, 1), Some(8));
        assert!(!grid.set(4, 0, 1));
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        assert!(Grid::from_rows(&[vec![0, 0], vec![0]]).is_none());
        assert!(Grid::from_rows(&[[0u8, 12]]).is_none());
        let grid = Grid::from_rows(&[[0u8, 1], [2, 0]]).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.get(0, 1), Some(2));
    }

    #[test]
    fn test_shape_rows_map_to_grid_rows() {
        // The bar occupies shape row 1, so at y = 3 it lands on grid row 4.
        let grid = Grid::new(6, 4);
        let merged = merge(&grid, &BAR, 0, 3);
        assert_eq!(merged.row(4), Some(&[1u8, 1, 1, 1][..]));
        assert!(!merged.row_has_blocks(3));
    }

    #[test]
    fn test_intersects_bounds() {
        let grid = Grid::new(6, 4);
        assert!(!intersects(&grid, &BAR, 0, 0));
        assert!(intersects(&grid, &BAR, 1, 0));
        assert!(intersects(&grid, &BAR, -1, 0));
        // Shape row 1 at y = 4 is grid row 5, the last row.
        assert!(!intersects(&grid, &BAR, 0, 4));
        assert!(intersects(&grid, &BAR, 0, 5));
        // Empty shape cells may hang outside the grid.
        assert!(!intersects(&grid, &BAR, 0, -1));
        assert!(!intersects(&grid, &DOT, -3, -3));
    }

    #[test]
    fn test_intersects_occupancy() {
        let mut grid = Grid::new(6, 4);
        grid.set(2, 3, 7);
        assert!(intersects(&grid, &BAR, 0, 2));
        assert!(!intersects(&grid, &BAR, 0, 1));
    }

    #[test]
    fn test_merge_leaves_source_untouched() {
        let grid = Grid::new(6, 4);
        let merged = merge(&grid, &DOT, 0, 0);
        assert!(grid.is_empty());
        assert_eq!(merged.get(3, 3), Some(5));
        assert_eq!(merged.count(5), 1);
    }

    #[test]
    fn test_remove_bottom_rows() {
        let mut grid = Grid::from_rows(&[[1u8, 0], [0, 2], [3, 3]]).unwrap();
        grid.remove_bottom_rows(1);
        assert_eq!(grid.to_rows(), vec![vec![0, 0], vec![1, 0], vec![0, 2]]);
        grid.remove_bottom_rows(10);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_settle_columns_preserves_order() {
        let mut grid = Grid::from_rows(&[[1u8, 0], [0, 2], [3, 0], [0, 0]]).unwrap();
        grid.settle_columns();
        assert_eq!(
            grid.to_rows(),
            vec![vec![0, 0], vec![0, 0], vec![1, 0], vec![3, 2]]
        );
    }

    #[test]
    fn test_topmost_occupied_row() {
        let mut grid = Grid::new(5, 3);
        assert_eq!(grid.topmost_occupied_row(), None);
        grid.set(1, 3, 2);
        grid.set(0, 4, 2);
        assert_eq!(grid.topmost_occupied_row(), Some(3));
    }

    #[test]
    fn test_row_out_of_bounds() {
        let grid = Grid::new(5, 3);
        assert_eq!(grid.row(4), Some(&[0u8, 0, 0][..]));
        assert_eq!(grid.row(5), None);
        assert!(!grid.is_row_full(5));
        assert!(!grid.row_has_blocks(usize::MAX));
    }
}
