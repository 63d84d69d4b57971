//! Rotation tracker - the active piece definition and its rotation index

use crate::pieces::PieceDefinition;
use crate::types::Shape;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationTracker {
    piece: PieceDefinition,
    index: usize,
}

impl RotationTracker {
    pub fn new(piece: PieceDefinition) -> Self {
        Self { piece, index: 0 }
    }

    pub fn piece(&self) -> &PieceDefinition {
        &self.piece
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Shape at the current rotation
    pub fn shape(&self) -> Shape {
        self.piece.shape(self.index)
    }

    /// Next rotation candidate; does not change the tracker
    pub fn peek_next(&self) -> (Shape, usize) {
        let next = (self.index + 1) % self.piece.shape_count();
        (self.piece.shape(next), next)
    }

    pub fn commit(&mut self, index: usize) {
        self.index = index % self.piece.shape_count();
    }

    /// Replace the piece and reset to rotation 0
    pub fn set_piece(&mut self, piece: PieceDefinition) {
        self.piece = piece;
        self.index = 0;
    }
}
