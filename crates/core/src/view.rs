use serde::{Deserialize, Serialize};

use crate::grid::ClearRow;
use crate::types::{Offset, Shape};

/// Everything a renderer needs about the moving parts of the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewData {
    pub shape: Shape,
    pub offset: Offset,
    /// Spawn shapes of the upcoming pieces, nearest first
    pub preview: Vec<Shape>,
    /// Landing offset; absent when it coincides with `offset`
    pub ghost: Option<Offset>,
    pub held: Option<Shape>,
}

/// Outcome of a gravity step (scheduler tick or soft drop)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropResult {
    /// The piece moved down one row
    pub moved: bool,
    /// The piece landed and was merged into the grid
    pub locked: bool,
    /// Present when the landing cleared at least one row
    pub clear_row: Option<ClearRow>,
    pub view: ViewData,
    pub level: u32,
    /// Drop interval the host should tick at from now on
    pub interval_ms: u32,
    /// The level changed during this step
    pub level_changed: bool,
    pub game_over: bool,
}

impl DropResult {
    pub fn lines_cleared(&self) -> u32 {
        self.clear_row.as_ref().map_or(0, |c| c.lines_removed)
    }
}

/// Outcome of a host command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutcome {
    /// The command changed the game
    pub accepted: bool,
    /// Set by commands that move the piece down (soft and hard drop)
    pub drop: Option<DropResult>,
}

impl CommandOutcome {
    pub(crate) fn rejected() -> Self {
        Self {
            accepted: false,
            drop: None,
        }
    }

    pub(crate) fn from_bool(accepted: bool) -> Self {
        Self {
            accepted,
            drop: None,
        }
    }
}
