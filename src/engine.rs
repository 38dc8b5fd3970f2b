//! Seedable hash & permutation table (L0).
//!
//! `Engine` owns a 512-entry doubled permutation table built by a seeded
//! Fisher-Yates shuffle. It is the stateless-given-the-seed foundation every
//! other layer hashes integer lattice coordinates through.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Owns the permutation table for one seed.
///
/// Cloning an `Engine` is cheap-ish (a 512-entry array copy) and gives each
/// clone an independent, immutable table; there is no interior mutability
/// here. Code that needs a single shared, reseedable instance should use the
/// [`crate::global`] façade instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    seed: u32,
    perm: [u16; 512],
}

impl Engine {
    /// Builds a new engine from a seed.
    ///
    /// The same seed always produces the same permutation table, and hence
    /// identical results from every L2-L4 primitive built on top of it.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        let mut engine = Self {
            seed,
            perm: [0; 512],
        };
        engine.rebuild();
        engine
    }

    /// Replaces this engine's permutation table with one derived from `seed`.
    pub fn reseed(&mut self, seed: u32) {
        self.seed = seed;
        self.rebuild();
        tracing::debug!(seed, "reseeded noise engine");
    }

    /// The seed this engine's table was built from.
    #[inline]
    #[must_use]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    fn rebuild(&mut self) {
        let mut table = [0u16; 256];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = i as u16;
        }
        let mut rng = ChaCha8Rng::seed_from_u64(u64::from(self.seed));
        table.shuffle(&mut rng);
        for i in 0..256 {
            self.perm[i] = table[i];
            self.perm[i + 256] = table[i];
        }
    }

    /// `P[i & 255]`, widened so chained additions stay in range before the
    /// next lookup masks them again.
    #[inline]
    fn p(&self, i: i32) -> i32 {
        i32::from(self.perm[(i & 255) as usize])
    }

    /// Deterministic hash of an integer 2D lattice coordinate.
    #[inline]
    #[must_use]
    pub fn hash2d(&self, ix: i32, iy: i32) -> i32 {
        self.p(self.p(ix) + iy)
    }

    /// Deterministic hash of an integer 3D lattice coordinate.
    #[inline]
    #[must_use]
    pub fn hash3d(&self, ix: i32, iy: i32, iz: i32) -> i32 {
        self.p(self.p(self.p(ix) + iy) + iz)
    }

    /// Deterministic hash of an integer 4D lattice coordinate.
    #[inline]
    #[must_use]
    pub fn hash4d(&self, ix: i32, iy: i32, iz: i32, iw: i32) -> i32 {
        self.p(self.p(self.p(self.p(ix) + iy) + iz) + iw)
    }
}

impl Default for Engine {
    /// Builds an engine with the default seed (0).
    fn default() -> Self {
        Self::new(0)
    }
}

/// Maps a hash produced by [`Engine::hash2d`]/[`hash3d`](Engine::hash3d)/
/// [`hash4d`](Engine::hash4d) to a uniform-ish real in `[0, 1)`.
#[inline]
#[must_use]
pub fn hash_to_float(h: i32) -> f64 {
    (h & 255) as f64 / 256.0
}
