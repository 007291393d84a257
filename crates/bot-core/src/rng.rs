//! Deterministic per-bot and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each bot gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (bot_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive bot IDs uniformly across the seed space, so
//! adding bots at the end of a crowd never disturbs the existing ones.
//!
//! # Sampling conventions
//!
//! The behavior loop is written in terms of three primitives:
//!
//! - [`BotRng::chance`]: `U[0,1) < p`.  A probability of exactly `0.0` never
//!   fires, `1.0` always fires.
//! - [`BotRng::uniform`]: `U[0,1) * (max - min) + min`, i.e. half-open
//!   `[min, max)` and exactly `min` when the bounds coincide.
//! - [`BotRng::int_inclusive`]: integer in `[min, max]`.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::BotId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── BotRng ────────────────────────────────────────────────────────────────────

/// Per-bot deterministic RNG.
#[derive(Debug, Clone)]
pub struct BotRng(SmallRng);

impl BotRng {
    /// Seed deterministically from the run's global seed and a bot ID.
    pub fn new(global_seed: u64, bot: BotId) -> Self {
        let seed = global_seed ^ (bot.0 as u64).wrapping_mul(MIXING_CONSTANT);
        BotRng(SmallRng::seed_from_u64(seed))
    }

    /// A uniformly distributed value in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    /// `true` when a fresh `[0, 1)` draw falls below `p`.
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.unit() < p
    }

    /// A value in `[min, max)` built as `unit * (max - min) + min`.
    #[inline]
    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        self.unit() * (max - min) + min
    }

    /// An integer uniformly distributed in `[min, max]`.
    #[inline]
    pub fn int_inclusive(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.0.gen_range(min..=max)
    }

    /// An index uniformly distributed in `[0, len)`, or `None` for `len == 0`.
    #[inline]
    pub fn index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.0.gen_range(0..len))
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for global operations.
///
/// Used only in single-threaded contexts.  Per-bot randomness always goes
/// through [`BotRng`].
#[derive(Debug, Clone)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a fresh global seed, e.g. when the caller asked for a random run.
    pub fn next_seed(&mut self) -> u64 {
        self.0.r#gen::<u64>()
    }
}
