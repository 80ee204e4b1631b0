//! Source of the per-cut blank count.
//!
//! Cutting a log yields a variable number of blanks. The count comes from a
//! [`FanoutSource`] injected into the engine, so the binary draws uniformly at
//! random while tests supply a scripted sequence.
use std::collections::VecDeque;

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Fewest blanks a single log can be cut into.
pub const MIN_BLANKS_PER_CUT: u32 = 2;
/// Most blanks a single log can be cut into.
pub const MAX_BLANKS_PER_CUT: u32 = 5;

pub trait FanoutSource: Send {
    /// Draw the next integer in `low..=high`.
    fn next_in_range(&mut self, low: u32, high: u32) -> u32;
}

/// Uniform draws from an owned RNG.
pub struct Uniform {
    rng: StdRng,
}

impl Uniform {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible draws, for demos and debugging.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl FanoutSource for Uniform {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..=high)
    }
}

/// Replays a fixed sequence of counts, clamped to the requested range.
///
/// An exhausted sequence keeps yielding the range minimum.
pub struct Scripted {
    counts: VecDeque<u32>,
}

impl Scripted {
    pub fn new(counts: impl IntoIterator<Item = u32>) -> Self {
        Self {
            counts: counts.into_iter().collect(),
        }
    }
}

impl FanoutSource for Scripted {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.counts.pop_front().map_or(low, |n| n.clamp(low, high))
    }
}
