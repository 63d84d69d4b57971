//! Game configuration
//!
//! A [`GameConfig`] is an explicit value handed to the core by the host. Nothing in the core
//! reads process-global settings.
//!
//! # Environment Variables
//!
//! [`GameConfig::from_env`] starts from [`GameConfig::default`] and overrides:
//!
//! - `BLOCKFALL_ROWS`: playfield height (default: 25)
//! - `BLOCKFALL_COLS`: playfield width (default: 10)
//! - `BLOCKFALL_SEED`: randomizer seed (default: 1)
//! - `BLOCKFALL_PREVIEW`: lookahead depth of the piece source (default: 4)
//! - `BLOCKFALL_GARBAGE_SAFETY_ROW`: garbage is refused while the stack reaches above this row (default: 10)
//! - `BLOCKFALL_RESERVED_ROWS`: top rows garbage may never occupy (default: 4)
//! - `BLOCKFALL_RANDOMIZER`: `bag` or `uniform` (default: bag)

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_COLS, DEFAULT_ROWS, PREVIEW_LEN, SHAPE_SIZE};

/// Piece randomization policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RandomizerKind {
    /// 7-bag: every piece once per bag of seven
    #[default]
    Bag,
    /// Independent uniform draws
    Uniform,
}

impl RandomizerKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "bag" | "7bag" | "7-bag" => Some(RandomizerKind::Bag),
            "uniform" | "random" => Some(RandomizerKind::Uniform),
            _ => None,
        }
    }
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub seed: u32,
    pub preview_len: usize,
    pub garbage_safety_row: usize,
    pub reserved_top_rows: usize,
    pub randomizer: RandomizerKind,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            seed: 1,
            preview_len: PREVIEW_LEN,
            garbage_safety_row: 10,
            reserved_top_rows: 4,
            randomizer: RandomizerKind::Bag,
        }
    }
}

/// Configuration rejected by [`GameConfig::validate`] or an environment override
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable could not be parsed
    InvalidValue { key: &'static str, value: String },
    /// The grid cannot hold a 4x4 piece
    BoardTooSmall { rows: usize, cols: usize },
    /// Fewer than `PREVIEW_LEN` upcoming pieces would be visible
    PreviewTooShort(usize),
    /// A row threshold lies outside the grid
    RowOutOfRange { key: &'static str, row: usize, rows: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value } => {
                write!(f, "invalid value {:?} for {}", value, key)
            }
            ConfigError::BoardTooSmall { rows, cols } => write!(
                f,
                "board {}x{} is smaller than a {}x{} piece",
                rows, cols, SHAPE_SIZE, SHAPE_SIZE
            ),
            ConfigError::PreviewTooShort(len) => write!(
                f,
                "preview length {} is below the minimum of {}",
                len, PREVIEW_LEN
            ),
            ConfigError::RowOutOfRange { key, row, rows } => {
                write!(f, "{} = {} is outside a grid of {} rows", key, row, rows)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Build a configuration from `BLOCKFALL_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Missing or blank keys keep their default; unparsable values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let get = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(v) = get("BLOCKFALL_ROWS") {
            config.rows = parse_num("BLOCKFALL_ROWS", &v)?;
        }
        if let Some(v) = get("BLOCKFALL_COLS") {
            config.cols = parse_num("BLOCKFALL_COLS", &v)?;
        }
        if let Some(v) = get("BLOCKFALL_SEED") {
            config.seed = parse_num("BLOCKFALL_SEED", &v)?;
        }
        if let Some(v) = get("BLOCKFALL_PREVIEW") {
            config.preview_len = parse_num("BLOCKFALL_PREVIEW", &v)?;
        }
        if let Some(v) = get("BLOCKFALL_GARBAGE_SAFETY_ROW") {
            config.garbage_safety_row = parse_num("BLOCKFALL_GARBAGE_SAFETY_ROW", &v)?;
        }
        if let Some(v) = get("BLOCKFALL_RESERVED_ROWS") {
            config.reserved_top_rows = parse_num("BLOCKFALL_RESERVED_ROWS", &v)?;
        }
        if let Some(v) = get("BLOCKFALL_RANDOMIZER") {
            config.randomizer =
                RandomizerKind::from_str(&v).ok_or(ConfigError::InvalidValue {
                    key: "BLOCKFALL_RANDOMIZER",
                    value: v,
                })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration describes a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < SHAPE_SIZE || self.cols < SHAPE_SIZE {
            return Err(ConfigError::BoardTooSmall {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.preview_len < PREVIEW_LEN {
            return Err(ConfigError::PreviewTooShort(self.preview_len));
        }
        if self.garbage_safety_row >= self.rows {
            return Err(ConfigError::RowOutOfRange {
                key: "garbage_safety_row",
                row: self.garbage_safety_row,
                rows: self.rows,
            });
        }
        if self.reserved_top_rows >= self.rows {
            return Err(ConfigError::RowOutOfRange {
                key: "reserved_top_rows",
                row: self.reserved_top_rows,
                rows: self.rows,
            });
        }
        Ok(())
    }

    /// Spawn anchor: top row, piece box centered horizontally
    pub fn spawn_anchor(&self) -> crate::Offset {
        crate::Offset::new(self.cols.saturating_sub(SHAPE_SIZE) as i32 / 2, 0)
    }
}

fn parse_num<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}
