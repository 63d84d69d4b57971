//! Headless simulation host
//!
//! Drives a [`Game`](blockfall_core::Game) the way an interactive host would: a tokio
//! interval plays the scheduler, a seeded [`Bot`] plays the input dispatcher. The drop
//! interval is re-read after every step and the timer rebuilt when the level changes it.
//!
//! Events are handed to a caller-supplied sink as they happen; the bundled binary writes
//! them as JSON lines.
//!
//! # Environment
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `BLOCKFALL_TIME_SCALE` | 1 | Divides every drop interval |
//! | `BLOCKFALL_MAX_TICKS` | 10000 | Stop after this many scheduler ticks |
//! | `BLOCKFALL_BOT_SEED` | 7 | Seed for the bot's command stream |

pub mod bot;
pub mod config;
pub mod runner;

pub use bot::Bot;
pub use config::SimConfig;
pub use runner::{run, SimEvent, SimSummary};
