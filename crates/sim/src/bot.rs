//! Seeded command stream standing in for a player

use blockfall_core::SimpleRng;
use blockfall_types::Command;

/// Per-mille weights; the remainder of 1000 is "do nothing this tick"
const WEIGHTS: [(Command, u32); 9] = [
    (Command::MoveLeft, 220),
    (Command::MoveRight, 220),
    (Command::Rotate, 120),
    (Command::MoveDown, 100),
    (Command::HardDrop, 80),
    (Command::Hold, 30),
    (Command::Ability1, 20),
    (Command::Ability2, 20),
    (Command::Ability3, 20),
];

#[derive(Debug, Clone)]
pub struct Bot {
    rng: SimpleRng,
}

impl Bot {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Command for this tick, if any
    pub fn next_command(&mut self) -> Option<Command> {
        let mut roll = self.rng.next_range(1000);
        for (command, weight) in WEIGHTS {
            if roll < weight {
                return Some(command);
            }
            roll -= weight;
        }
        None
    }
}
