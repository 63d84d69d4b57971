//! Game controller - the progression mode on top of a board
//!
//! The host owns the clock and the input device; everything else lives here:
//!
//! - [`Game::tick`] is the gravity step the scheduler calls every [`Game::interval_ms`].
//! - [`Game::apply`] dispatches one payload-free [`Command`].
//! - Landing a piece merges it, clears rows, scores the clear bonus, recomputes the
//!   level and drop interval, and spawns the next piece.
//! - Level-ups unlock abilities, grant charges, and from level 5 on push garbage.
//!
//! Once a spawn collides the game is over; ticks and commands are ignored until
//! [`Game::new_game`].
//!
//! # Example
//!
//! ```
//! use blockfall_core::Game;
//! use blockfall_types::{Command, GameConfig};
//!
//! let mut game = Game::from_config(GameConfig::default()).unwrap();
//! assert_eq!(game.level(), 1);
//! assert_eq!(game.interval_ms(), 400);
//!
//! game.apply(Command::MoveLeft);
//! let outcome = game.apply(Command::HardDrop);
//! assert!(outcome.drop.unwrap().locked);
//! assert!(game.score() > 0);
//! ```

use crate::board::Board;
use crate::ledger::AbilityLedger;
use crate::progression::level_for_lines;
use crate::source::{PieceSource, RandomSource};
use crate::speed::interval_for_level;
use crate::types::{AbilityKind, Command, ConfigError, GameConfig, SOFT_DROP_POINTS};
use crate::view::{CommandOutcome, DropResult, ViewData};

/// Bottom rows removed by the ClearRows ability
pub const CLEAR_ROWS_ABILITY_ROWS: usize = 2;

/// First level at which level-ups inject garbage
pub const GARBAGE_START_LEVEL: u32 = 5;

/// Ability unlocked when a level is reached
pub fn ability_unlocked_at(level: u32) -> Option<AbilityKind> {
    match level {
        2 => Some(AbilityKind::ClearRows),
        4 => Some(AbilityKind::ColorClear),
        6 => Some(AbilityKind::ColorConvert),
        _ => None,
    }
}

/// Garbage pieces pushed when `level` is reached
pub fn garbage_for_level(level: u32) -> u32 {
    if level < GARBAGE_START_LEVEL {
        0
    } else {
        level / GARBAGE_START_LEVEL
    }
}

#[derive(Debug, Clone)]
pub struct Game<S: PieceSource = RandomSource> {
    board: Board<S>,
    ledger: AbilityLedger,
    level: u32,
    interval_ms: u32,
    game_over: bool,
}

impl Game<RandomSource> {
    pub fn from_config(config: GameConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_board(Board::from_config(config)?))
    }
}

impl<S: PieceSource> Game<S> {
    pub fn new(config: GameConfig, source: S) -> Self {
        Self::with_board(Board::new(config, source))
    }

    fn with_board(board: Board<S>) -> Self {
        Self {
            board,
            ledger: AbilityLedger::new(),
            level: 1,
            interval_ms: interval_for_level(1),
            game_over: false,
        }
    }

    pub fn board(&self) -> &Board<S> {
        &self.board
    }

    /// Direct board access; moves made here skip scoring and level bookkeeping.
    pub fn board_mut(&mut self) -> &mut Board<S> {
        &mut self.board
    }

    pub fn ledger(&self) -> &AbilityLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut AbilityLedger {
        &mut self.ledger
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.board.score()
    }

    pub fn take_score_change(&mut self) -> Option<u32> {
        self.board.take_score_change()
    }

    pub fn lines(&self) -> u32 {
        self.board.total_lines()
    }

    pub fn view_data(&self) -> ViewData {
        self.board.view_data()
    }

    /// Display text for every ability slot
    pub fn ability_texts(&self) -> Vec<String> {
        self.ledger.slot_texts()
    }

    /// Gravity step: move down one row, or land the piece.
    pub fn tick(&mut self) -> DropResult {
        if self.game_over {
            return self.idle_result();
        }
        if self.board.move_down() {
            return self.drop_result(true, false, None, false);
        }
        self.land()
    }

    /// Apply one host command.
    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        if self.game_over {
            return CommandOutcome::rejected();
        }

        match command {
            Command::MoveLeft => CommandOutcome::from_bool(self.board.move_left()),
            Command::MoveRight => CommandOutcome::from_bool(self.board.move_right()),
            Command::Rotate => CommandOutcome::from_bool(self.board.rotate()),
            Command::Hold => CommandOutcome::from_bool(self.board.hold()),
            Command::MoveDown => {
                let result = if self.board.move_down() {
                    self.board.add_score(SOFT_DROP_POINTS);
                    self.drop_result(true, false, None, false)
                } else {
                    self.land()
                };
                CommandOutcome {
                    accepted: true,
                    drop: Some(result),
                }
            }
            Command::HardDrop => {
                let distance = self.board.hard_drop();
                let mut result = self.land();
                result.moved = distance > 0;
                CommandOutcome {
                    accepted: true,
                    drop: Some(result),
                }
            }
            Command::Ability1 | Command::Ability2 | Command::Ability3 => {
                let accepted = command
                    .ability_slot()
                    .is_some_and(|slot| self.use_ability(slot));
                CommandOutcome::from_bool(accepted)
            }
        }
    }

    /// Activate the ability in 1-based `slot` if it has a charge.
    ///
    /// The charge is spent only when the effect changed the board.
    pub fn use_ability(&mut self, slot: usize) -> bool {
        if self.game_over {
            return false;
        }
        let Some(kind) = self.ledger.slot(slot) else {
            return false;
        };
        if kind.is_none() || !self.ledger.has_charge(kind) {
            return false;
        }

        let color = self.board.active_piece().color();
        let applied = match kind {
            AbilityKind::None => false,
            AbilityKind::ClearRows => self.board.clear_bottom_rows(CLEAR_ROWS_ABILITY_ROWS),
            AbilityKind::ColorClear => self.board.clear_color_blocks(color) > 0,
            AbilityKind::ColorConvert => self.board.convert_all_blocks_to_color(color) > 0,
        };

        if applied {
            self.ledger.decrement(kind);
        }
        applied
    }

    /// Start over: fresh board, empty ledger, level 1.
    pub fn new_game(&mut self) -> bool {
        self.ledger.reset();
        self.level = 1;
        self.interval_ms = interval_for_level(1);
        self.game_over = self.board.new_game();
        !self.game_over
    }

    /// Merge, clear, score, level up, spawn.
    fn land(&mut self) -> DropResult {
        self.board.merge_active_into_grid();
        let clear = self.board.clear_rows();
        let clear_row = if clear.lines_removed > 0 {
            self.board.add_score(clear.bonus);
            Some(clear)
        } else {
            None
        };

        let level_changed = self.update_level();
        self.game_over = self.board.spawn();
        self.drop_result(false, true, clear_row, level_changed)
    }

    /// Recompute level and interval from the lines total; runs level-up hooks.
    fn update_level(&mut self) -> bool {
        let new_level = level_for_lines(self.board.total_lines());
        if new_level <= self.level {
            return false;
        }
        for level in self.level + 1..=new_level {
            self.on_level_up(level);
        }
        self.level = new_level;
        self.interval_ms = interval_for_level(new_level);
        true
    }

    fn on_level_up(&mut self, level: u32) {
        if let Some(kind) = ability_unlocked_at(level) {
            self.ledger.assign(kind);
        }
        for kind in AbilityKind::ALL {
            if self.ledger.contains(kind) {
                self.ledger.increment(kind);
            }
        }
        let garbage = garbage_for_level(level);
        if garbage > 0 {
            self.board.spawn_garbage_blocks(garbage, level);
        }
    }

    fn drop_result(
        &self,
        moved: bool,
        locked: bool,
        clear_row: Option<crate::grid::ClearRow>,
        level_changed: bool,
    ) -> DropResult {
        DropResult {
            moved,
            locked,
            clear_row,
            view: self.board.view_data(),
            level: self.level,
            interval_ms: self.interval_ms,
            level_changed,
            game_over: self.game_over,
        }
    }

    fn idle_result(&self) -> DropResult {
        self.drop_result(false, false, None, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::FixedPieceSource;
    use crate::types::PieceKind;

    fn game_with(kinds: &[PieceKind]) -> Game<FixedPieceSource> {
        Game::new(
            GameConfig::default(),
            FixedPieceSource::from_kinds(kinds).unwrap(),
        )
    }

    #[test]
    fn test_unlock_table() {
        assert_eq!(ability_unlocked_at(1), None);
        assert_eq!(ability_unlocked_at(2), Some(AbilityKind::ClearRows));
        assert_eq!(ability_unlocked_at(4), Some(AbilityKind::ColorClear));
        assert_eq!(ability_unlocked_at(6), Some(AbilityKind::ColorConvert));
    }

    #[test]
    fn test_garbage_table() {
        assert_eq!(garbage_for_level(4), 0);
        assert_eq!(garbage_for_level(5), 1);
        assert_eq!(garbage_for_level(12), 2);
    }

    #[test]
    fn test_tick_moves_then_locks() {
        let mut game = game_with(&[PieceKind::O]);
        for _ in 0..22 {
            let result = game.tick();
            assert!(result.moved);
            assert!(!result.locked);
        }
        let result = game.tick();
        assert!(result.locked);
        assert!(!result.game_over);
        assert_eq!(game.board().grid().count(4), 4);
        assert_eq!(game.board().offset(), game.board().config().spawn_anchor());
    }

    #[test]
    fn test_soft_drop_scores_one() {
        let mut game = game_with(&[PieceKind::T]);
        let outcome = game.apply(Command::MoveDown);
        assert!(outcome.accepted);
        assert!(outcome.drop.unwrap().moved);
        assert_eq!(game.score(), 1);
        assert_eq!(game.take_score_change(), Some(1));
    }

    #[test]
    fn test_ability_without_charge_is_rejected() {
        let mut game = game_with(&[PieceKind::T]);
        game.ledger_mut().assign(AbilityKind::ClearRows);
        assert!(!game.apply(Command::Ability1).accepted);
        assert!(!game.apply(Command::Ability3).accepted);
    }

    #[test]
    fn test_ability_spends_charge_only_when_effective() {
        let mut game = game_with(&[PieceKind::O]);
        game.ledger_mut().assign(AbilityKind::ClearRows);
        game.ledger_mut().increment(AbilityKind::ClearRows);

        // Empty board: nothing to clear, charge kept.
        assert!(!game.use_ability(1));
        assert_eq!(game.ledger().charges(AbilityKind::ClearRows), 1);

        game.apply(Command::HardDrop);
        assert!(game.use_ability(1));
        assert_eq!(game.ledger().charges(AbilityKind::ClearRows), 0);
        assert!(game.board().grid().is_empty());
    }

    #[test]
    fn test_game_over_freezes_until_new_game() {
        let mut game = game_with(&[PieceKind::O]);
        let mut over = false;
        for _ in 0..40 {
            let outcome = game.apply(Command::HardDrop);
            if outcome.drop.unwrap().game_over {
                over = true;
                break;
            }
        }
        assert!(over);
        assert!(game.game_over());

        let score = game.score();
        assert!(!game.apply(Command::MoveLeft).accepted);
        assert!(!game.tick().moved);
        assert_eq!(game.score(), score);

        assert!(game.new_game());
        assert!(!game.game_over());
        assert_eq!(game.score(), 0);
        assert_eq!(game.level(), 1);
        assert!(game.board().grid().is_empty());
    }
}
