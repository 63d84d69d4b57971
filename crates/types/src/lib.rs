//! Shared types - cell values, pieces, commands and ability kinds
//!
//! Everything here is plain data. The rules that operate on it live in `blockfall-core`;
//! hosts (schedulers, input dispatchers, renderers) only need this crate to talk to the core.
//!
//! # Cell values
//!
//! | Value | Meaning |
//! |-------|---------|
//! | `0` | Empty |
//! | `1..=7` | Piece colors (I, J, L, O, S, T, Z) |
//! | `8` | Garbage injected by abilities or the progression mode |
//!
//! # Coordinates
//!
//! Grids are stored as `rows × cols`. An offset `(x, y)` names a column and a row; shape
//! cell `shape[r][c]` lands on grid cell `(row = y + r, col = x + c)`.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{AbilityKind, Command, PieceKind, CELL_GARBAGE};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(PieceKind::T.color(), 6);
//! assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDrop));
//! assert_eq!(AbilityKind::ColorClear.name(), "Color Clear");
//! assert_eq!(CELL_GARBAGE, 8);
//! ```

pub mod config;

pub use config::{ConfigError, GameConfig, RandomizerKind};

use serde::{Deserialize, Serialize};

/// Empty cell
pub const CELL_EMPTY: u8 = 0;

/// Highest piece color id
pub const MAX_PIECE_COLOR: u8 = 7;

/// Garbage cell (not tied to a piece color)
pub const CELL_GARBAGE: u8 = 8;

/// Default playfield height in rows
pub const DEFAULT_ROWS: usize = 25;

/// Default playfield width in columns
pub const DEFAULT_COLS: usize = 10;

/// Side length of every shape matrix
pub const SHAPE_SIZE: usize = 4;

/// Number of upcoming pieces exposed to hosts
pub const PREVIEW_LEN: usize = 4;

/// Number of ability slots in the ledger
pub const ABILITY_SLOTS: usize = 4;

/// Points per cell for a hard drop
pub const HARD_DROP_POINTS_PER_ROW: u32 = 2;

/// Points for a successful soft drop step
pub const SOFT_DROP_POINTS: u32 = 1;

/// Wall kicks tried, in order, when a rotation collides at the current offset.
pub const WALL_KICKS: [(i32, i32); 7] = [
    (-1, 0),
    (1, 0),
    (-2, 0),
    (2, 0),
    (0, -1),
    (-1, -1),
    (1, -1),
];

/// A single rotation state: a 4x4 matrix of cell values
pub type Shape = [[u8; SHAPE_SIZE]; SHAPE_SIZE];

/// Returns true if `value` is a legal cell value.
pub fn is_cell_value(value: u8) -> bool {
    value <= CELL_GARBAGE
}

/// Integer anchor of a shape on the grid (`x` = column, `y` = row)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset translated by `(dx, dy)`
    pub const fn shifted(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The seven standard pieces
///
/// The discriminant order fixes the colors: I=1, J=2, L=3, O=4, S=5, T=6, Z=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Cell value used for every block of this piece
    pub fn color(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::color`]
    pub fn from_color(color: u8) -> Option<Self> {
        match color {
            1..=7 => Some(Self::ALL[(color - 1) as usize]),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// Ability kinds used by the progression mode
///
/// One closed type serves ledger storage, effect dispatch and display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityKind {
    #[default]
    None,
    /// Remove the bottom rows of the stack
    ClearRows,
    /// Remove every block of one color, then let columns settle
    ColorClear,
    /// Repaint the whole stack in one color
    ColorConvert,
}

impl AbilityKind {
    /// Every real ability (excludes `None`)
    pub const ALL: [AbilityKind; 3] = [
        AbilityKind::ClearRows,
        AbilityKind::ColorClear,
        AbilityKind::ColorConvert,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            AbilityKind::None => "None",
            AbilityKind::ClearRows => "Clear Rows",
            AbilityKind::ColorClear => "Color Clear",
            AbilityKind::ColorConvert => "Color Convert",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, AbilityKind::None)
    }

    /// Dense index for per-kind tables (`None` has no index)
    pub fn index(&self) -> Option<usize> {
        match self {
            AbilityKind::None => None,
            AbilityKind::ClearRows => Some(0),
            AbilityKind::ColorClear => Some(1),
            AbilityKind::ColorConvert => Some(2),
        }
    }
}

/// Discrete host commands
///
/// Commands carry no payload; each maps 1:1 to a board or ledger operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    MoveLeft,
    MoveRight,
    MoveDown,
    Rotate,
    HardDrop,
    Hold,
    /// Activate the ability in slot 1
    Ability1,
    /// Activate the ability in slot 2
    Ability2,
    /// Activate the ability in slot 3
    Ability3,
}

impl Command {
    pub const ALL: [Command; 9] = [
        Command::MoveLeft,
        Command::MoveRight,
        Command::MoveDown,
        Command::Rotate,
        Command::HardDrop,
        Command::Hold,
        Command::Ability1,
        Command::Ability2,
        Command::Ability3,
    ];

    /// Parse a command from its camelCase name (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("ABILITY2"), Some(Command::Ability2));
    /// assert_eq!(Command::from_str("pause"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "movedown" => Some(Command::MoveDown),
            "rotate" => Some(Command::Rotate),
            "harddrop" => Some(Command::HardDrop),
            "hold" => Some(Command::Hold),
            "ability1" => Some(Command::Ability1),
            "ability2" => Some(Command::Ability2),
            "ability3" => Some(Command::Ability3),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::MoveDown => "moveDown",
            Command::Rotate => "rotate",
            Command::HardDrop => "hardDrop",
            Command::Hold => "hold",
            Command::Ability1 => "ability1",
            Command::Ability2 => "ability2",
            Command::Ability3 => "ability3",
        }
    }

    /// 1-based ledger slot for the ability commands
    pub fn ability_slot(&self) -> Option<usize> {
        match self {
            Command::Ability1 => Some(1),
            Command::Ability2 => Some(2),
            Command::Ability3 => Some(3),
            _ => None,
        }
    }
}
