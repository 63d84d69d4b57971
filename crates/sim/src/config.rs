//! Simulation settings

use serde::{Deserialize, Serialize};

/// Host-side knobs that are not part of the game rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Drop intervals are divided by this (1 = real time)
    pub time_scale: u32,
    pub max_ticks: u64,
    pub bot_seed: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            time_scale: 1,
            max_ticks: 10_000,
            bot_seed: 7,
        }
    }
}

impl SimConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unparseable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let time_scale = lookup("BLOCKFALL_TIME_SCALE")
            .and_then(|s| s.trim().parse().ok())
            .filter(|scale: &u32| *scale > 0)
            .unwrap_or(defaults.time_scale);

        let max_ticks = lookup("BLOCKFALL_MAX_TICKS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.max_ticks);

        let bot_seed = lookup("BLOCKFALL_BOT_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.bot_seed);

        Self {
            time_scale,
            max_ticks,
            bot_seed,
        }
    }

    /// Wall-clock period for a game drop interval, never below 1ms
    pub fn scaled_interval_ms(&self, interval_ms: u32) -> u64 {
        (interval_ms / self.time_scale.max(1)).max(1) as u64
    }
}
