//! Domain warping (L4): self-referential displacement of input coordinates
//! before sampling the underlying noise field.

use crate::engine::Engine;

// Large fixed offsets decorrelate the warp vectors from the sampled field
// and from each other; the exact values are not semantically meaningful,
// only that they're far enough apart to avoid correlated lattice cells.
const A2: (f64, f64) = (5.2, 1.3);
const B2: (f64, f64) = (9.2, 7.1);
const A3: (f64, f64, f64) = (5.2, 1.3, 2.8);
const B3: (f64, f64, f64) = (9.2, 7.1, 3.4);
const C3: (f64, f64, f64) = (2.7, 8.6, 6.1);

impl Engine {
    /// Warps `(x, y)` by a secondary noise field before sampling
    /// [`Engine::noise2`], `v ∈ [-1, 1]`.
    #[must_use]
    pub fn domain_warp2(&self, x: f64, y: f64, strength: f64) -> f64 {
        let wx = self.noise2(x + A2.0, y + A2.1);
        let wy = self.noise2(x + B2.0, y + B2.1);
        self.noise2(x + strength * wx, y + strength * wy)
    }

    /// Warps `(x, y, z)` by a secondary noise field before sampling
    /// [`Engine::noise3`], `v ∈ [-1, 1]`.
    #[must_use]
    pub fn domain_warp3(&self, x: f64, y: f64, z: f64, strength: f64) -> f64 {
        let wx = self.noise3(x + A3.0, y + A3.1, z + A3.2);
        let wy = self.noise3(x + B3.0, y + B3.1, z + B3.2);
        let wz = self.noise3(x + C3.0, y + C3.1, z + C3.2);
        self.noise3(
            x + strength * wx,
            y + strength * wy,
            z + strength * wz,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_and_determinism() {
        let engine = Engine::new(3);
        for i in 0..100 {
            let t = f64::from(i) * 0.08;
            let v2 = engine.domain_warp2(t, -t, 1.0);
            let v3 = engine.domain_warp3(t, -t, t * 0.5, 1.0);
            assert!((-1.0..=1.0).contains(&v2));
            assert!((-1.0..=1.0).contains(&v3));
            assert_eq!(v2, engine.domain_warp2(t, -t, 1.0));
        }
    }

    #[test]
    fn zero_strength_matches_plain_noise() {
        let engine = Engine::new(3);
        let (x, y) = (1.7, -2.3);
        assert_eq!(engine.domain_warp2(x, y, 0.0), engine.noise2(x, y));
    }
}
