//! Board module - the stateful core of a game
//!
//! The board owns the settled grid, the active piece (definition, rotation index, offset),
//! the held piece, the score and the total-lines counter. Geometry checks go through the
//! pure functions in [`crate::grid`]; new pieces come from a [`PieceSource`].
//!
//! Every rejected operation returns `false` and leaves the board untouched. The only
//! terminal condition is a blocked spawn, reported by [`Board::spawn`] returning `true`.

use arrayvec::ArrayVec;

use crate::grid::{self, ClearRow, Grid};
use crate::pieces::PieceDefinition;
use crate::rng::SimpleRng;
use crate::rotation::RotationTracker;
use crate::score::Score;
use crate::source::{PieceSource, RandomSource};
use crate::types::{
    ConfigError, GameConfig, Offset, Shape, HARD_DROP_POINTS_PER_ROW, PREVIEW_LEN, WALL_KICKS,
};
use crate::view::ViewData;

/// Salt separating the garbage RNG stream from the piece stream
const GARBAGE_SEED_SALT: u32 = 0x9E37_79B9;

#[derive(Debug, Clone)]
pub struct Board<S: PieceSource = RandomSource> {
    config: GameConfig,
    grid: Grid,
    tracker: RotationTracker,
    offset: Offset,
    held: Option<PieceDefinition>,
    can_hold: bool,
    score: Score,
    total_lines: u32,
    source: S,
    pub(crate) rng: SimpleRng,
}

impl Board<RandomSource> {
    /// Board with the randomizer named by the configuration
    pub fn from_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let source = RandomSource::from_config(&config);
        Ok(Self::new(config, source))
    }
}

impl<S: PieceSource> Board<S> {
    /// Create a board and activate the first piece from `source`.
    pub fn new(config: GameConfig, mut source: S) -> Self {
        let first = source.next();
        Self {
            grid: Grid::new(config.rows, config.cols),
            tracker: RotationTracker::new(first),
            offset: config.spawn_anchor(),
            held: None,
            can_hold: true,
            score: Score::new(),
            total_lines: 0,
            source,
            rng: SimpleRng::new(config.seed ^ GARBAGE_SEED_SALT),
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Replace the settled grid, e.g. to load a puzzle position.
    ///
    /// Rejected if the dimensions differ from the configured board.
    pub fn set_grid(&mut self, grid: Grid) -> bool {
        if grid.rows() != self.config.rows || grid.cols() != self.config.cols {
            return false;
        }
        self.grid = grid;
        true
    }

    /// Deep copy of the grid for rendering
    pub fn grid_snapshot(&self) -> Grid {
        grid::deep_copy(&self.grid)
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn active_piece(&self) -> &PieceDefinition {
        self.tracker.piece()
    }

    pub fn active_shape(&self) -> Shape {
        self.tracker.shape()
    }

    pub fn rotation_index(&self) -> usize {
        self.tracker.index()
    }

    pub fn held_piece(&self) -> Option<&PieceDefinition> {
        self.held.as_ref()
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn score(&self) -> u32 {
        self.score.value()
    }

    pub fn add_score(&mut self, delta: u32) {
        self.score.add(delta);
    }

    /// New score if it changed since the last poll
    pub fn take_score_change(&mut self) -> Option<u32> {
        self.score.take_change()
    }

    pub fn total_lines(&self) -> u32 {
        self.total_lines
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub(crate) fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// True if the active piece would collide at `offset` with `shape`
    fn collides(&self, shape: &Shape, offset: Offset) -> bool {
        grid::intersects(&self.grid, shape, offset.x, offset.y)
    }

    /// Move the active piece by `(dx, dy)` if nothing is in the way.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        let target = self.offset.shifted(dx, dy);
        if self.collides(&self.tracker.shape(), target) {
            return false;
        }
        self.offset = target;
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    pub fn move_down(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// Drop the active piece as far as it goes; scores 2 points per row.
    ///
    /// Returns the number of rows travelled. The piece is not merged.
    pub fn hard_drop(&mut self) -> u32 {
        let mut distance = 0;
        while self.try_move(0, 1) {
            distance += 1;
        }
        self.score.add(distance * HARD_DROP_POINTS_PER_ROW);
        distance
    }

    /// Advance to the next rotation, trying the wall kicks in order when blocked.
    pub fn rotate(&mut self) -> bool {
        let (shape, index) = self.tracker.peek_next();

        let candidates =
            std::iter::once((0, 0)).chain(WALL_KICKS.iter().copied());
        for (dx, dy) in candidates {
            let target = self.offset.shifted(dx, dy);
            if !self.collides(&shape, target) {
                self.tracker.commit(index);
                self.offset = target;
                return true;
            }
        }

        false
    }

    /// Activate the next piece at the spawn anchor.
    ///
    /// Returns true if the anchor is already blocked (game over).
    pub fn spawn(&mut self) -> bool {
        let piece = self.source.next();
        self.tracker.set_piece(piece);
        self.offset = self.config.spawn_anchor();
        self.can_hold = true;
        self.collides(&self.tracker.shape(), self.offset)
    }

    /// Stash the active piece, or swap it with the held one; once per spawn.
    pub fn hold(&mut self) -> bool {
        if !self.can_hold {
            return false;
        }

        let current = self.tracker.piece().clone();
        let incoming = match self.held.take() {
            Some(held) => held,
            None => self.source.next(),
        };
        self.held = Some(current);
        self.tracker.set_piece(incoming);
        self.offset = self.config.spawn_anchor();
        self.can_hold = false;
        true
    }

    /// Write the active piece into the grid; rows are not cleared here.
    pub fn merge_active_into_grid(&mut self) {
        self.grid = grid::merge(
            &self.grid,
            &self.tracker.shape(),
            self.offset.x,
            self.offset.y,
        );
    }

    /// Remove full rows and count them toward the lines total.
    ///
    /// The bonus is reported, not added; the caller decides how it is scored.
    pub fn clear_rows(&mut self) -> ClearRow {
        let result = grid::detect_and_clear_full_rows(&self.grid);
        self.total_lines += result.lines_removed;
        self.grid = grid::deep_copy(&result.grid);
        result
    }

    /// Where the active piece would land if dropped now.
    ///
    /// Works on a copy of the offset; nothing on the board changes.
    pub fn ghost_position(&self) -> Offset {
        let shape = self.tracker.shape();
        let mut ghost = self.offset;
        while !self.collides(&shape, ghost.shifted(0, 1)) {
            ghost = ghost.shifted(0, 1);
        }
        ghost
    }

    /// Upcoming pieces, nearest first
    pub fn preview(&self) -> ArrayVec<PieceDefinition, PREVIEW_LEN> {
        (0..PREVIEW_LEN)
            .map_while(|k| self.source.peek(k))
            .collect()
    }

    pub fn view_data(&self) -> ViewData {
        let ghost = self.ghost_position();
        ViewData {
            shape: self.tracker.shape(),
            offset: self.offset,
            preview: self.preview().iter().map(|p| p.shape(0)).collect(),
            ghost: (ghost != self.offset).then_some(ghost),
            held: self.held.as_ref().map(|p| p.shape(0)),
        }
    }

    /// Reset grid, score, lines and hold, then spawn the first piece.
    ///
    /// Returns the spawn collision flag.
    pub fn new_game(&mut self) -> bool {
        self.grid.clear();
        self.score.reset();
        self.total_lines = 0;
        self.held = None;
        self.can_hold = true;
        self.spawn()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::FixedPieceSource;
    use crate::types::PieceKind;

    fn board_with(kinds: &[PieceKind]) -> Board<FixedPieceSource> {
        Board::new(
            GameConfig::default(),
            FixedPieceSource::from_kinds(kinds).unwrap(),
        )
    }

    #[test]
    fn test_new_board_spawns_at_anchor() {
        let board = board_with(&[PieceKind::T]);
        assert_eq!(board.offset(), Offset::new(3, 0));
        assert_eq!(board.rotation_index(), 0);
        assert!(board.can_hold());
        assert!(board.grid().is_empty());
        assert_eq!(board.grid().rows(), 25);
        assert_eq!(board.grid().cols(), 10);
    }

    #[test]
    fn test_move_blocked_by_wall_leaves_offset() {
        let mut board = board_with(&[PieceKind::O]);
        // O occupies shape columns 1..=2, so x = -1 is the leftmost legal offset.
        while board.move_left() {}
        assert_eq!(board.offset().x, -1);
        assert!(!board.move_left());
        assert_eq!(board.offset().x, -1);
    }

    #[test]
    fn test_hard_drop_scores_two_per_row() {
        let mut board = board_with(&[PieceKind::O]);
        // O occupies shape rows 1..=2, so it rests with y = rows - 3.
        let distance = board.hard_drop();
        assert_eq!(distance, 22);
        assert_eq!(board.offset().y, 22);
        assert_eq!(board.score(), 44);
        assert_eq!(board.hard_drop(), 0);
        assert_eq!(board.score(), 44);
    }

    #[test]
    fn test_clear_rows_counts_lines() {
        let mut board = board_with(&[PieceKind::I]);
        for x in 0..10 {
            board.grid_mut().set(x, 24, 8);
        }
        let result = board.clear_rows();
        assert_eq!(result.lines_removed, 1);
        assert_eq!(result.bonus, 50);
        assert_eq!(board.total_lines(), 1);
        assert!(board.grid().is_empty());
        // Bonus is reported, not scored.
        assert_eq!(board.score(), 0);
    }

    #[test]
    fn test_view_data_hides_coincident_ghost() {
        let mut board = board_with(&[PieceKind::O, PieceKind::I]);
        let view = board.view_data();
        assert_eq!(view.ghost, Some(Offset::new(3, 22)));
        assert_eq!(view.preview.len(), PREVIEW_LEN);
        assert!(view.held.is_none());

        board.hard_drop();
        assert_eq!(board.view_data().ghost, None);
    }
}
