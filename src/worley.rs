//! Cellular (Worley/Voronoi) noise: `worley2`/`worley3` (L2).

use crate::engine::{hash_to_float, Engine};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Distance metric used to rank Worley feature points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Metric {
    /// Straight-line (L²) distance.
    #[default]
    Euclidean,
    /// Taxicab (L¹) distance.
    Manhattan,
    /// Max-of-axes (L∞) distance.
    Chebyshev,
}

impl From<&str> for Metric {
    /// An unrecognized string falls back to [`Metric::Euclidean`], per the
    /// engine's "never raise" error policy.
    fn from(s: &str) -> Self {
        match s {
            "manhattan" => Metric::Manhattan,
            "chebyshev" => Metric::Chebyshev,
            _ => Metric::Euclidean,
        }
    }
}

impl Metric {
    fn distance(self, delta: &[f64]) -> f64 {
        match self {
            Metric::Euclidean => delta.iter().map(|d| d * d).sum::<f64>().sqrt(),
            Metric::Manhattan => delta.iter().map(|d| d.abs()).sum(),
            Metric::Chebyshev => delta.iter().fold(0.0_f64, |acc, d| acc.max(d.abs())),
        }
    }
}

/// Result of sampling a Worley field at a point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorleyResult {
    /// Distance to the nearest feature point. `d1 <= d2`, `d1 >= 0`.
    pub d1: f64,
    /// Distance to the second-nearest feature point.
    pub d2: f64,
    /// Stable identifier of the winning (nearest) cell.
    pub cell_id: i64,
}

/// Jittered feature-point offset within a cell, `J ∈ [0, 1]^N` blended
/// towards the cell center at `jitter = 0` (a perfectly regular grid), per
/// the engine's jitter=0 contract.
#[inline]
fn jittered_offset(raw: f64, jitter: f64) -> f64 {
    0.5 + jitter * (raw - 0.5)
}

#[inline]
fn cell_id_2d(engine: &Engine, cx: i32, cy: i32) -> i64 {
    i64::from(cx).wrapping_mul(0x9E37_79B9_7F4A_7C15_u64 as i64)
        ^ i64::from(cy).wrapping_mul(0xC2B2_AE3D_27D4_EB4F_u64 as i64)
        ^ i64::from(engine.hash2d(cx, cy))
}

#[inline]
fn cell_id_3d(engine: &Engine, cx: i32, cy: i32, cz: i32) -> i64 {
    i64::from(cx).wrapping_mul(0x9E37_79B9_7F4A_7C15_u64 as i64)
        ^ i64::from(cy).wrapping_mul(0xC2B2_AE3D_27D4_EB4F_u64 as i64)
        ^ i64::from(cz).wrapping_mul(0xFF51_AFD7_ED55_8CCD_u64 as i64)
        ^ i64::from(engine.hash3d(cx, cy, cz))
}

impl Engine {
    /// 2D cellular noise.
    ///
    /// Scans the surrounding 3x3 neighborhood of integer cells, computing
    /// each neighbor's jittered feature point and ranking distances under
    /// `metric`. Ties in `d1` are broken by the lower `cell_id`.
    #[must_use]
    pub fn worley2(&self, x: f64, y: f64, jitter: f64, metric: Metric) -> WorleyResult {
        let cx = x.floor() as i32;
        let cy = y.floor() as i32;

        let mut best = (f64::MAX, 0_i64);
        let mut second = f64::MAX;

        for dy in -1..=1 {
            for dx in -1..=1 {
                let ncx = cx + dx;
                let ncy = cy + dy;
                let jx = hash_to_float(self.hash3d(ncx, ncy, 0));
                let jy = hash_to_float(self.hash3d(ncx, ncy, 1));
                let fx = f64::from(ncx) + jittered_offset(jx, jitter);
                let fy = f64::from(ncy) + jittered_offset(jy, jitter);

                let d = metric.distance(&[x - fx, y - fy]);
                let id = cell_id_2d(self, ncx, ncy);

                if d < best.0 || (d == best.0 && id < best.1) {
                    second = best.0;
                    best = (d, id);
                } else if d < second {
                    second = d;
                }
            }
        }

        WorleyResult {
            d1: best.0,
            d2: second,
            cell_id: best.1,
        }
    }

    /// 3D cellular noise. See [`Engine::worley2`] for the algorithm; this
    /// scans the 3x3x3 neighborhood instead.
    #[must_use]
    pub fn worley3(&self, x: f64, y: f64, z: f64, jitter: f64, metric: Metric) -> WorleyResult {
        let cx = x.floor() as i32;
        let cy = y.floor() as i32;
        let cz = z.floor() as i32;

        let mut best = (f64::MAX, 0_i64);
        let mut second = f64::MAX;

        for dz in -1..=1 {
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let ncx = cx + dx;
                    let ncy = cy + dy;
                    let ncz = cz + dz;
                    let jx = hash_to_float(self.hash4d(ncx, ncy, ncz, 0));
                    let jy = hash_to_float(self.hash4d(ncx, ncy, ncz, 1));
                    let jz = hash_to_float(self.hash4d(ncx, ncy, ncz, 2));
                    let fx = f64::from(ncx) + jittered_offset(jx, jitter);
                    let fy = f64::from(ncy) + jittered_offset(jy, jitter);
                    let fz = f64::from(ncz) + jittered_offset(jz, jitter);

                    let d = metric.distance(&[x - fx, y - fy, z - fz]);
                    let id = cell_id_3d(self, ncx, ncy, ncz);

                    if d < best.0 || (d == best.0 && id < best.1) {
                        second = best.0;
                        best = (d, id);
                    } else if d < second {
                        second = d;
                    }
                }
            }
        }

        WorleyResult {
            d1: best.0,
            d2: second,
            cell_id: best.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_and_nonnegativity() {
        let engine = Engine::new(11111);
        for i in 0..200 {
            let t = f64::from(i) * 0.083;
            let r = engine.worley2(t, -t * 0.5, 1.0, Metric::Euclidean);
            assert!(r.d1 >= 0.0);
            assert!(r.d1 <= r.d2);
        }
    }

    #[test]
    fn determinism() {
        let engine = Engine::new(11111);
        let a = engine.worley2(1.5, 2.5, 1.0, Metric::Euclidean);
        let b = engine.worley2(1.5, 2.5, 1.0, Metric::Euclidean);
        assert_eq!(a, b);
    }

    #[test]
    fn jitter_zero_is_regular_grid() {
        let engine = Engine::new(7);
        // On a regular grid, sampling the cell center gives d1 == 0.
        let r = engine.worley2(3.5, -2.5, 0.0, Metric::Euclidean);
        assert!(r.d1 < 1.0e-9, "expected exact hit on regular grid: {r:?}");
    }

    #[test]
    fn scenario_s2() {
        let engine = Engine::new(11111);
        let r = engine.worley2(1.5, 2.5, 1.0, Metric::Euclidean);
        assert!(r.d1 >= 0.0 && r.d1 <= r.d2 && r.d2 < 2.0);

        let manhattan = engine.worley2(1.5, 2.5, 1.0, Metric::Manhattan);
        assert!(manhattan.d1 >= 0.0);

        let far = engine.worley2(10.5, 10.5, 1.0, Metric::Euclidean);
        assert_ne!(far.cell_id, r.cell_id);
    }

    #[test]
    fn metric_fallback_from_str() {
        assert_eq!(Metric::from("euclidean"), Metric::Euclidean);
        assert_eq!(Metric::from("manhattan"), Metric::Manhattan);
        assert_eq!(Metric::from("chebyshev"), Metric::Chebyshev);
        assert_eq!(Metric::from("bogus"), Metric::Euclidean);
    }

    #[test]
    fn worley3_ordering() {
        let engine = Engine::new(5);
        let r = engine.worley3(0.25, 10.75, -3.1, 0.8, Metric::Chebyshev);
        assert!(r.d1 >= 0.0 && r.d1 <= r.d2);
    }
}
