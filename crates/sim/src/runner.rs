//! Scheduler loop

use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

use blockfall_core::{DropResult, Game, PieceSource};

use crate::bot::Bot;
use crate::config::SimConfig;

/// Something worth reporting during a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimEvent {
    LineClear {
        tick: u64,
        lines: u32,
        bonus: u32,
        score: u32,
        total_lines: u32,
        level: u32,
    },
    LevelUp {
        tick: u64,
        level: u32,
        interval_ms: u32,
    },
    GameOver {
        tick: u64,
        score: u32,
    },
}

/// Final state of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimSummary {
    pub ticks: u64,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub interval_ms: u32,
    pub game_over: bool,
}

fn ticker(period_ms: u64) -> Interval {
    let period = Duration::from_millis(period_ms);
    // A fresh interval fires immediately; start one period out instead.
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

/// Run `game` until it ends or `config.max_ticks` scheduler ticks have passed.
///
/// Each tick the bot may issue one command, then gravity is applied. `sink` sees every
/// event in order; an error from it aborts the run.
pub async fn run<S, F>(game: &mut Game<S>, config: &SimConfig, mut sink: F) -> Result<SimSummary>
where
    S: PieceSource,
    F: FnMut(&SimEvent) -> Result<()>,
{
    let mut bot = Bot::new(config.bot_seed);
    let mut interval_ms = game.interval_ms();
    let mut timer = ticker(config.scaled_interval_ms(interval_ms));
    let mut ticks = 0u64;

    while ticks < config.max_ticks && !game.game_over() {
        timer.tick().await;
        ticks += 1;

        if let Some(command) = bot.next_command() {
            if let Some(drop) = game.apply(command).drop {
                report(ticks, game, &drop, &mut sink)?;
            }
        }
        if !game.game_over() {
            let drop = game.tick();
            report(ticks, game, &drop, &mut sink)?;
        }

        if game.interval_ms() != interval_ms {
            interval_ms = game.interval_ms();
            timer = ticker(config.scaled_interval_ms(interval_ms));
        }
    }

    Ok(SimSummary {
        ticks,
        score: game.score(),
        lines: game.lines(),
        level: game.level(),
        interval_ms: game.interval_ms(),
        game_over: game.game_over(),
    })
}

fn report<S, F>(tick: u64, game: &Game<S>, drop: &DropResult, sink: &mut F) -> Result<()>
where
    S: PieceSource,
    F: FnMut(&SimEvent) -> Result<()>,
{
    if let Some(clear) = &drop.clear_row {
        sink(&SimEvent::LineClear {
            tick,
            lines: clear.lines_removed,
            bonus: clear.bonus,
            score: game.score(),
            total_lines: game.lines(),
            level: drop.level,
        })?;
    }
    if drop.level_changed {
        sink(&SimEvent::LevelUp {
            tick,
            level: drop.level,
            interval_ms: drop.interval_ms,
        })?;
    }
    if drop.game_over {
        sink(&SimEvent::GameOver {
            tick,
            score: game.score(),
        })?;
    }
    Ok(())
}
