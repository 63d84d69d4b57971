//! Grid engine tests - intersects, merge, line clears and copies

use blockfall::core::pieces::standard_shapes;
use blockfall::core::{deep_copy, detect_and_clear_full_rows, intersects, merge, Grid};
use blockfall::types::{PieceKind, DEFAULT_COLS, DEFAULT_ROWS};

#[test]
fn test_deep_copy_is_independent() {
    let mut original = Grid::new(DEFAULT_ROWS, DEFAULT_COLS);
    original.set(2, 5, 3);

    let mut copy = deep_copy(&original);
    assert_eq!(copy, original);

    copy.set(2, 5, 0);
    copy.set(0, 0, 7);
    assert_eq!(original.get(2, 5), Some(3));
    assert_eq!(original.get(0, 0), Some(0));
}

#[test]
fn test_intersects_grid_bounds() {
    let grid = Grid::new(DEFAULT_ROWS, DEFAULT_COLS);
    // Horizontal I: shape row 1, columns 0..=3
    let bar = standard_shapes(PieceKind::I)[0];

    assert!(!intersects(&grid, &bar, 0, 0));
    assert!(!intersects(&grid, &bar, 6, 0));
    assert!(intersects(&grid, &bar, 7, 0), "right wall");
    assert!(intersects(&grid, &bar, -1, 0), "left wall");

    // Empty shape rows may hang outside the grid.
    assert!(!intersects(&grid, &bar, 0, -1));
    assert!(intersects(&grid, &bar, 0, -2), "above the top");
    assert!(!intersects(&grid, &bar, 0, 23));
    assert!(intersects(&grid, &bar, 0, 24), "below the floor");
}

#[test]
fn test_intersects_occupied_cell() {
    let mut grid = Grid::new(DEFAULT_ROWS, DEFAULT_COLS);
    let bar = standard_shapes(PieceKind::I)[0];
    grid.set(5, 11, 8);

    assert!(intersects(&grid, &bar, 3, 10));
    assert!(!intersects(&grid, &bar, 3, 9));
    assert!(!intersects(&grid, &bar, 6, 10));
}

#[test]
fn test_merge_writes_shape_into_copy() {
    let grid = Grid::new(DEFAULT_ROWS, DEFAULT_COLS);
    let tee = standard_shapes(PieceKind::T)[0];

    let merged = merge(&grid, &tee, 3, 20);
    assert!(grid.is_empty());
    assert_eq!(merged.count(6), 4);
    assert_eq!(merged.row(21).unwrap()[3..6], [6, 6, 6]);
    assert_eq!(merged.get(4, 22), Some(6));
}

#[test]
fn test_line_clear_keeps_partial_rows_in_order() {
    let grid = Grid::from_rows(&[[1, 0, 0, 0], [1, 1, 1, 1], [0, 2, 0, 0], [3, 3, 3, 3]]).unwrap();

    let result = detect_and_clear_full_rows(&grid);
    assert_eq!(result.lines_removed, 2);
    assert_eq!(result.bonus, 200);
    assert_eq!(
        result.grid.to_rows(),
        vec![
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![1, 0, 0, 0],
            vec![0, 2, 0, 0],
        ]
    );
    // Input untouched
    assert_eq!(grid.count(3), 4);
}

#[test]
fn test_line_clear_bonus_is_quadratic() {
    let full = [8u8; 4];
    let grid = Grid::from_rows(&[full, full, full, full]).unwrap();
    let result = detect_and_clear_full_rows(&grid);
    assert_eq!(result.lines_removed, 4);
    assert_eq!(result.bonus, 800);
    assert!(result.grid.is_empty());

    let none = detect_and_clear_full_rows(&Grid::new(4, 4));
    assert_eq!(none.lines_removed, 0);
    assert_eq!(none.bonus, 0);
}
