//! Pieces module - piece definitions and the standard shape catalogue
//!
//! A piece definition is an ordered, cyclic list of 4x4 rotation shapes sharing one color.
//! Rotation index `i` selects `shapes[i]`; advancing wraps modulo the number of shapes.

use std::sync::Arc;

use crate::types::{is_cell_value, PieceKind, Shape, CELL_EMPTY, SHAPE_SIZE};

const I_SHAPES: [Shape; 2] = [
    [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]],
];

const J_SHAPES: [Shape; 4] = [
    [[0, 0, 0, 0], [2, 2, 2, 0], [0, 0, 2, 0], [0, 0, 0, 0]],
    [[0, 0, 0, 0], [0, 2, 2, 0], [0, 2, 0, 0], [0, 2, 0, 0]],
    [[0, 0, 0, 0], [0, 2, 0, 0], [0, 2, 2, 2], [0, 0, 0, 0]],
    [[0, 0, 2, 0], [0, 0, 2, 0], [0, 2, 2, 0], [0, 0, 0, 0]],
];

const L_SHAPES: [Shape; 4] = [
    [[0, 0, 0, 0], [0, 3, 3, 3], [0, 3, 0, 0], [0, 0, 0, 0]],
    [[0, 0, 0, 0], [0, 3, 3, 0], [0, 0, 3, 0], [0, 0, 3, 0]],
    [[0, 0, 0, 0], [0, 0, 3, 0], [3, 3, 3, 0], [0, 0, 0, 0]],
    [[0, 3, 0, 0], [0, 3, 0, 0], [0, 3, 3, 0], [0, 0, 0, 0]],
];

const O_SHAPES: [Shape; 1] = [[[0, 0, 0, 0], [0, 4, 4, 0], [0, 4, 4, 0], [0, 0, 0, 0]]];

const S_SHAPES: [Shape; 2] = [
    [[0, 0, 0, 0], [0, 5, 5, 0], [5, 5, 0, 0], [0, 0, 0, 0]],
    [[5, 0, 0, 0], [5, 5, 0, 0], [0, 5, 0, 0], [0, 0, 0, 0]],
];

const T_SHAPES: [Shape; 4] = [
    [[0, 0, 0, 0], [6, 6, 6, 0], [0, 6, 0, 0], [0, 0, 0, 0]],
    [[0, 6, 0, 0], [6, 6, 0, 0], [0, 6, 0, 0], [0, 0, 0, 0]],
    [[0, 6, 0, 0], [6, 6, 6, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 6, 0, 0], [0, 6, 6, 0], [0, 6, 0, 0], [0, 0, 0, 0]],
];

const Z_SHAPES: [Shape; 2] = [
    [[0, 0, 0, 0], [7, 7, 0, 0], [0, 7, 7, 0], [0, 0, 0, 0]],
    [[0, 7, 0, 0], [7, 7, 0, 0], [7, 0, 0, 0], [0, 0, 0, 0]],
];

/// Rotation shapes of a standard piece
pub fn standard_shapes(kind: PieceKind) -> &'static [Shape] {
    match kind {
        PieceKind::I => &I_SHAPES,
        PieceKind::J => &J_SHAPES,
        PieceKind::L => &L_SHAPES,
        PieceKind::O => &O_SHAPES,
        PieceKind::S => &S_SHAPES,
        PieceKind::T => &T_SHAPES,
        PieceKind::Z => &Z_SHAPES,
    }
}

/// Copy of `shape` with every occupied cell set to `color`
pub fn recolor_shape(shape: &Shape, color: u8) -> Shape {
    let mut out = *shape;
    for cell in out.iter_mut().flatten() {
        if *cell != CELL_EMPTY {
            *cell = color;
        }
    }
    out
}

/// Number of occupied cells in a shape
pub fn shape_cell_count(shape: &Shape) -> usize {
    shape.iter().flatten().filter(|&&c| c != CELL_EMPTY).count()
}

/// Bounding box of the occupied cells as `(min_col, min_row, max_col, max_row)`
pub fn shape_bounds(shape: &Shape) -> Option<(usize, usize, usize, usize)> {
    let mut bounds: Option<(usize, usize, usize, usize)> = None;
    for r in 0..SHAPE_SIZE {
        for c in 0..SHAPE_SIZE {
            if shape[r][c] == CELL_EMPTY {
                continue;
            }
            bounds = Some(match bounds {
                None => (c, r, c, r),
                Some((c0, r0, c1, r1)) => (c0.min(c), r0.min(r), c1.max(c), r1.max(r)),
            });
        }
    }
    bounds
}

/// A piece: its rotation shapes and color
///
/// Shapes are shared, so cloning a definition is cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceDefinition {
    shapes: Arc<[Shape]>,
    color: u8,
}

impl PieceDefinition {
    /// One of the seven standard pieces
    pub fn standard(kind: PieceKind) -> Self {
        Self {
            shapes: Arc::from(standard_shapes(kind)),
            color: kind.color(),
        }
    }

    /// A piece from arbitrary shapes.
    ///
    /// Returns None if `shapes` is empty, a shape is blank, or the shapes do not all use
    /// one valid non-zero color.
    pub fn custom(shapes: Vec<Shape>) -> Option<Self> {
        let color = shapes
            .first()?
            .iter()
            .flatten()
            .copied()
            .find(|&c| c != CELL_EMPTY)?;
        if !is_cell_value(color) {
            return None;
        }
        let consistent = shapes.iter().all(|shape| {
            shape_cell_count(shape) > 0
                && shape
                    .iter()
                    .flatten()
                    .all(|&c| c == CELL_EMPTY || c == color)
        });
        if !consistent {
            return None;
        }
        Some(Self {
            shapes: Arc::from(shapes),
            color,
        })
    }

    pub fn color(&self) -> u8 {
        self.color
    }

    /// Standard kind, if the color belongs to one
    pub fn kind(&self) -> Option<PieceKind> {
        PieceKind::from_color(self.color)
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Shape for rotation `index` (wraps)
    pub fn shape(&self, index: usize) -> Shape {
        self.shapes[index % self.shapes.len()]
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Same geometry in another color
    pub fn recolored(&self, color: u8) -> Self {
        let shapes: Vec<Shape> = self.shapes.iter().map(|s| recolor_shape(s, color)).collect();
        Self {
            shapes: Arc::from(shapes),
            color,
        }
    }
}
