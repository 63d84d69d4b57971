//! Simulation host tests

use blockfall::core::Game;
use blockfall::sim::{self, SimConfig, SimEvent};
use blockfall::types::GameConfig;

fn fast(max_ticks: u64) -> SimConfig {
    SimConfig {
        time_scale: 1000,
        max_ticks,
        bot_seed: 5,
    }
}

#[tokio::test]
async fn test_summary_matches_game() {
    let mut game = Game::from_config(GameConfig::default()).unwrap();
    let mut clears = 0u32;
    let summary = sim::run(&mut game, &fast(400), |event| {
        if let SimEvent::LineClear { lines, .. } = event {
            clears += *lines;
        }
        Ok(())
    })
    .await
    .unwrap();

    assert_eq!(summary.score, game.score());
    assert_eq!(summary.lines, game.lines());
    assert_eq!(summary.level, game.level());
    assert_eq!(summary.game_over, game.game_over());
    assert_eq!(clears, summary.lines);
}

#[tokio::test]
async fn test_summary_json() {
    let mut game = Game::from_config(GameConfig::default()).unwrap();
    let summary = sim::run(&mut game, &fast(20), |_| Ok(())).await.unwrap();

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["ticks"], summary.ticks);
    assert_eq!(json["level"], 1);
    assert_eq!(json["interval_ms"], 400);
}
