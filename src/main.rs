//! Headless simulation runner (default binary).
//!
//! Plays one seeded game against the built-in bot and prints one JSON object per line:
//! every line clear, level-up and game over as it happens, then a summary. Board and
//! randomizer come from `BLOCKFALL_*` variables; diagnostics go to stderr.

use std::io::{self, Write};

use anyhow::{Context, Result};

use blockfall::core::Game;
use blockfall::sim::{self, SimConfig};
use blockfall::types::GameConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = GameConfig::from_env().context("invalid BLOCKFALL_* game configuration")?;
    let sim_config = SimConfig::from_env();

    eprintln!(
        "[Sim] {}x{} board, seed {}, {:?} randomizer, time scale {}, max {} ticks",
        config.cols,
        config.rows,
        config.seed,
        config.randomizer,
        sim_config.time_scale,
        sim_config.max_ticks
    );

    let mut game = Game::from_config(config).context("failed to build game")?;

    let summary = sim::run(&mut game, &sim_config, |event| {
        let line = serde_json::to_string(event).context("failed to encode event")?;
        writeln!(io::stdout().lock(), "{}", line).context("failed to write event")?;
        Ok(())
    })
    .await?;

    let line = serde_json::to_string(&summary).context("failed to encode summary")?;
    writeln!(io::stdout().lock(), "{}", line).context("failed to write summary")?;

    if summary.game_over {
        eprintln!("[Sim] game over after {} ticks", summary.ticks);
    } else {
        eprintln!("[Sim] stopped at tick limit ({})", summary.ticks);
    }
    Ok(())
}
