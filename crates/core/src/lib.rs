//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains every rule of the falling-block engine. It has **no dependencies**
//! on rendering, audio, input devices or I/O, and it never reads global state: hosts pass
//! a [`GameConfig`](types::GameConfig) in and read plain values back out.
//!
//! - **Deterministic**: the same seed and command stream produce the same game
//! - **Single-threaded**: every operation is synchronous and completes immediately
//! - **Non-throwing**: rejected moves return `false` and leave state untouched
//!
//! # Module Structure
//!
//! - [`grid`]: the settled matrix and the pure grid engine (`intersects`, `merge`, line clears)
//! - [`pieces`]: piece definitions and the standard shape catalogue
//! - [`rotation`]: rotation tracker for the active piece
//! - [`source`]: the injectable [`PieceSource`] and its randomizers
//! - [`board`]: movement, wall kicks, hold, ghost projection, spawn and reset
//! - [`effects`]: ability and garbage effects on the board
//! - [`progression`]: lines cleared to level and back
//! - [`speed`]: level to drop interval
//! - [`ledger`]: ability slots and charges
//! - [`game`]: the progression-mode controller hosts drive with ticks and commands
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Board, FixedPieceSource};
//! use blockfall_types::{GameConfig, PieceKind};
//!
//! let source = FixedPieceSource::from_kinds(&[PieceKind::T, PieceKind::I]).unwrap();
//! let mut board = Board::new(GameConfig::default(), source);
//!
//! assert!(board.move_left());
//! assert!(board.rotate());
//! let ghost = board.ghost_position();
//! let distance = board.hard_drop();
//! assert_eq!(board.offset(), ghost);
//! assert_eq!(board.score(), distance * 2);
//!
//! board.merge_active_into_grid();
//! assert_eq!(board.clear_rows().lines_removed, 0);
//! assert!(!board.spawn());
//! ```

pub mod board;
pub mod effects;
pub mod game;
pub mod grid;
pub mod ledger;
pub mod pieces;
pub mod progression;
pub mod rng;
pub mod rotation;
pub mod score;
pub mod source;
pub mod speed;
pub mod view;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game::Game;
pub use grid::{deep_copy, detect_and_clear_full_rows, intersects, merge, ClearRow, Grid};
pub use ledger::AbilityLedger;
pub use pieces::PieceDefinition;
pub use progression::{level_for_lines, lines_for_level};
pub use rng::SimpleRng;
pub use rotation::RotationTracker;
pub use score::Score;
pub use source::{BagPieceSource, FixedPieceSource, PieceSource, RandomSource, UniformPieceSource};
pub use speed::interval_for_level;
pub use view::{CommandOutcome, DropResult, ViewData};
