//! Random helpers for spawning and respawning flakes.
//!
//! Every random draw the field makes goes through a [`SpawnContext`], so a
//! field built with a fixed seed replays exactly.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

pub struct SpawnContext {
    rng: SmallRng,
}

impl SpawnContext {
    /// Reproducible context for tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Context seeded from the clock, different each program execution.
    pub fn from_time() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42);
        Self::from_seed(seed)
    }

    /// Random f32 between 0.0 and 1.0.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in `min..max`. Returns `min` for an empty range.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        if max > min {
            self.rng.gen_range(min..max)
        } else {
            min
        }
    }

    /// Random angle in `0..TAU`.
    #[inline]
    pub fn random_angle(&mut self) -> f32 {
        self.rng.gen_range(0.0..TAU)
    }

    /// Uniform point inside a `width` x `height` rectangle at the origin.
    pub fn random_point_in(&mut self, width: f32, height: f32) -> Vec2 {
        Vec2::new(
            self.random_range(0.0, width),
            self.random_range(0.0, height),
        )
    }
}
