//! Piece sources - where new pieces come from
//!
//! The board only sees the [`PieceSource`] trait, so the randomization policy is
//! injectable. Three policies ship with the crate:
//!
//! - [`BagPieceSource`]: 7-bag, every piece once per shuffled bag of seven
//! - [`UniformPieceSource`]: independent uniform draws
//! - [`FixedPieceSource`]: a fixed cyclic sequence, for tests and replays
//!
//! Random sources keep a lookahead buffer so that `peek(k)` never consumes anything and
//! always agrees with the following `next()` calls.

use std::collections::VecDeque;

use crate::pieces::PieceDefinition;
use crate::rng::SimpleRng;
use crate::types::{GameConfig, PieceKind, RandomizerKind, PREVIEW_LEN};

/// Supplier of piece definitions with a bounded lookahead
pub trait PieceSource {
    /// Consume and return the next piece.
    fn next(&mut self) -> PieceDefinition;

    /// Upcoming piece `k` places ahead (0 = the one `next()` returns), without consuming.
    fn peek(&self, k: usize) -> Option<PieceDefinition>;
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next(&mut self) -> PieceDefinition {
        (**self).next()
    }

    fn peek(&self, k: usize) -> Option<PieceDefinition> {
        (**self).peek(k)
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct BagPieceSource {
    /// Current bag of pieces
    bag: [PieceKind; 7],
    /// Index into current bag
    bag_index: usize,
    /// Drawn but not yet consumed
    lookahead: VecDeque<PieceKind>,
    depth: usize,
    rng: SimpleRng,
}

impl BagPieceSource {
    /// Create a bag source peeking `depth` pieces ahead (at least `PREVIEW_LEN`)
    pub fn new(seed: u32, depth: usize) -> Self {
        let mut source = Self {
            bag: PieceKind::ALL,
            bag_index: PieceKind::ALL.len(),
            lookahead: VecDeque::with_capacity(depth.max(PREVIEW_LEN)),
            depth: depth.max(PREVIEW_LEN),
            rng: SimpleRng::new(seed),
        };
        source.fill();
        source
    }

    /// Generate a new shuffled bag
    fn refill_bag(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    fn draw_from_bag(&mut self) -> PieceKind {
        if self.bag_index >= self.bag.len() {
            self.refill_bag();
        }
        let kind = self.bag[self.bag_index];
        self.bag_index += 1;
        kind
    }

    fn fill(&mut self) {
        while self.lookahead.len() < self.depth {
            let kind = self.draw_from_bag();
            self.lookahead.push_back(kind);
        }
    }

    /// Kinds currently visible in the lookahead
    pub fn upcoming(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.lookahead.iter().copied()
    }
}

impl PieceSource for BagPieceSource {
    fn next(&mut self) -> PieceDefinition {
        let kind = match self.lookahead.pop_front() {
            Some(kind) => kind,
            None => self.draw_from_bag(),
        };
        self.fill();
        PieceDefinition::standard(kind)
    }

    fn peek(&self, k: usize) -> Option<PieceDefinition> {
        self.lookahead.get(k).map(|&kind| PieceDefinition::standard(kind))
    }
}

/// Uniform random piece generator
#[derive(Debug, Clone)]
pub struct UniformPieceSource {
    lookahead: VecDeque<PieceKind>,
    depth: usize,
    rng: SimpleRng,
}

impl UniformPieceSource {
    pub fn new(seed: u32, depth: usize) -> Self {
        let mut source = Self {
            lookahead: VecDeque::with_capacity(depth.max(PREVIEW_LEN)),
            depth: depth.max(PREVIEW_LEN),
            rng: SimpleRng::new(seed),
        };
        source.fill();
        source
    }

    fn draw(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize]
    }

    fn fill(&mut self) {
        while self.lookahead.len() < self.depth {
            let kind = self.draw();
            self.lookahead.push_back(kind);
        }
    }
}

impl PieceSource for UniformPieceSource {
    fn next(&mut self) -> PieceDefinition {
        let kind = match self.lookahead.pop_front() {
            Some(kind) => kind,
            None => self.draw(),
        };
        self.fill();
        PieceDefinition::standard(kind)
    }

    fn peek(&self, k: usize) -> Option<PieceDefinition> {
        self.lookahead.get(k).map(|&kind| PieceDefinition::standard(kind))
    }
}

/// Cycles through a fixed sequence forever
#[derive(Debug, Clone)]
pub struct FixedPieceSource {
    sequence: Vec<PieceDefinition>,
    cursor: usize,
}

impl FixedPieceSource {
    /// None if `sequence` is empty
    pub fn new(sequence: Vec<PieceDefinition>) -> Option<Self> {
        if sequence.is_empty() {
            return None;
        }
        Some(Self {
            sequence,
            cursor: 0,
        })
    }

    pub fn from_kinds(kinds: &[PieceKind]) -> Option<Self> {
        Self::new(kinds.iter().map(|&k| PieceDefinition::standard(k)).collect())
    }

    /// Number of pieces handed out so far
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl PieceSource for FixedPieceSource {
    fn next(&mut self) -> PieceDefinition {
        let piece = self.sequence[self.cursor % self.sequence.len()].clone();
        self.cursor += 1;
        piece
    }

    fn peek(&self, k: usize) -> Option<PieceDefinition> {
        Some(self.sequence[(self.cursor + k) % self.sequence.len()].clone())
    }
}

/// Randomized source selected by [`GameConfig::randomizer`]
#[derive(Debug, Clone)]
pub enum RandomSource {
    Bag(BagPieceSource),
    Uniform(UniformPieceSource),
}

impl RandomSource {
    pub fn from_config(config: &GameConfig) -> Self {
        match config.randomizer {
            RandomizerKind::Bag => {
                RandomSource::Bag(BagPieceSource::new(config.seed, config.preview_len))
            }
            RandomizerKind::Uniform => {
                RandomSource::Uniform(UniformPieceSource::new(config.seed, config.preview_len))
            }
        }
    }
}

impl PieceSource for RandomSource {
    fn next(&mut self) -> PieceDefinition {
        match self {
            RandomSource::Bag(s) => s.next(),
            RandomSource::Uniform(s) => s.next(),
        }
    }

    fn peek(&self, k: usize) -> Option<PieceDefinition> {
        match self {
            RandomSource::Bag(s) => s.peek(k),
            RandomSource::Uniform(s) => s.peek(k),
        }
    }
}
