//! Value noise: `value2`/`value3` (L2).
//!
//! Each integer lattice vertex carries a pseudo-random scalar derived from
//! the hash; the field is the quintic-smoothstep interpolation of those
//! scalars, so the output stays naturally inside `[0, 1]` (the source
//! vertex values are).

use crate::engine::{hash_to_float, Engine};

#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

impl Engine {
    /// 2D value noise, `v ∈ [0, 1]`.
    #[must_use]
    pub fn value2(&self, x: f64, y: f64) -> f64 {
        let x0 = x.floor();
        let y0 = y.floor();
        let ix = x0 as i32;
        let iy = y0 as i32;

        let u = fade(x - x0);
        let v = fade(y - y0);

        let v00 = hash_to_float(self.hash2d(ix, iy));
        let v10 = hash_to_float(self.hash2d(ix + 1, iy));
        let v01 = hash_to_float(self.hash2d(ix, iy + 1));
        let v11 = hash_to_float(self.hash2d(ix + 1, iy + 1));

        let top = lerp(v00, v10, u);
        let bottom = lerp(v01, v11, u);
        lerp(top, bottom, v).clamp(0.0, 1.0)
    }

    /// 3D value noise, `v ∈ [0, 1]`.
    #[must_use]
    pub fn value3(&self, x: f64, y: f64, z: f64) -> f64 {
        let x0 = x.floor();
        let y0 = y.floor();
        let z0 = z.floor();
        let ix = x0 as i32;
        let iy = y0 as i32;
        let iz = z0 as i32;

        let u = fade(x - x0);
        let v = fade(y - y0);
        let w = fade(z - z0);

        let sample = |dx: i32, dy: i32, dz: i32| {
            hash_to_float(self.hash3d(ix + dx, iy + dy, iz + dz))
        };

        let x00 = lerp(sample(0, 0, 0), sample(1, 0, 0), u);
        let x10 = lerp(sample(0, 1, 0), sample(1, 1, 0), u);
        let x01 = lerp(sample(0, 0, 1), sample(1, 0, 1), u);
        let x11 = lerp(sample(0, 1, 1), sample(1, 1, 1), u);

        let y0_val = lerp(x00, x10, v);
        let y1_val = lerp(x01, x11, v);

        lerp(y0_val, y1_val, w).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn determinism() {
        let engine = Engine::new(5);
        assert_eq!(engine.value2(1.2, 3.4), engine.value2(1.2, 3.4));
        assert_eq!(engine.value3(1.2, 3.4, -0.6), engine.value3(1.2, 3.4, -0.6));
    }

    #[test]
    fn range() {
        let engine = Engine::new(5);
        for i in 0..300 {
            let t = f64::from(i) * 0.051;
            let v2 = engine.value2(t, -t);
            let v3 = engine.value3(t, -t, t * 0.5);
            assert!((0.0..=1.0).contains(&v2), "value2 out of range: {v2}");
            assert!((0.0..=1.0).contains(&v3), "value3 out of range: {v3}");
        }
    }

    #[test]
    fn lattice_vertices_match_hash() {
        let engine = Engine::new(5);
        let expected = hash_to_float(engine.hash2d(2, 3));
        assert_eq!(engine.value2(2.0, 3.0), expected);
    }

    #[test]
    fn seed_sensitivity() {
        let a = Engine::new(1);
        let b = Engine::new(2);
        assert_ne!(a.value2(0.33, 0.77), b.value2(0.33, 0.77));
    }
}
