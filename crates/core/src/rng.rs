//! RNG module - random piece selection
//!
//! Each spawn picks one of the seven shapes uniformly at random. There is no
//! bag or history, so the same shape can repeat any number of times.
//!
//! A seeded randomizer produces the same sequence every time, which is what
//! the tests and reproducible runs rely on.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::types::ShapeKind;

/// Uniform shape randomizer
#[derive(Debug, Clone)]
pub struct PieceRandomizer {
    rng: StdRng,
}

impl PieceRandomizer {
    /// Create a deterministic randomizer from a seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a randomizer seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Draw the next shape
    pub fn next_kind(&mut self) -> ShapeKind {
        // ALL is non-empty, so choose always yields a shape
        *ShapeKind::ALL
            .choose(&mut self.rng)
            .unwrap_or(&ShapeKind::T)
    }
}

impl Default for PieceRandomizer {
    fn default() -> Self {
        Self::from_entropy()
    }
}
