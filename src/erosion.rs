//! Heightmap erosion (L6): `hydraulic_erosion_step`, `thermal_erosion_step`,
//! `apply_erosion_mask`, `sediment_deposition`.
//!
//! These operate on 2D arrays of scalars and never call into L2. Unlike
//! every other layer, erosion has no dependency on [`crate::engine::Engine`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const NEIGHBOR_OFFSETS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A row-major 2D array of real scalars.
///
/// Every L6 operation takes a `&Heightmap` and returns a new, independent
/// one of identical dimensions; there is no in-place mutation observable
/// to callers. Out-of-bounds neighbor access (used internally by the
/// erosion steps) replicates the nearest border cell.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Heightmap {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl Heightmap {
    /// Builds a `width x height` heightmap filled with `value`.
    ///
    /// Non-positive dimensions (`width == 0 || height == 0`) produce an
    /// empty heightmap rather than erroring.
    #[must_use]
    pub fn filled(width: usize, height: usize, value: f64) -> Self {
        if width == 0 || height == 0 {
            return Self {
                width: 0,
                height: 0,
                data: Vec::new(),
            };
        }
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Builds a heightmap by evaluating `f(x, y)` at every cell.
    #[must_use]
    pub fn from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> f64) -> Self {
        let mut map = Self::filled(width, height, 0.0);
        for y in 0..map.height {
            for x in 0..map.width {
                map.data[y * map.width + x] = f(x, y);
            }
        }
        map
    }

    /// Builds a heightmap from explicit dimensions and row-major data.
    ///
    /// If `data.len()` doesn't match `width * height`, the stated dimensions
    /// win: the buffer is truncated or zero-padded to fit.
    #[must_use]
    pub fn from_vec(width: usize, height: usize, mut data: Vec<f64>) -> Self {
        if width == 0 || height == 0 {
            return Self {
                width: 0,
                height: 0,
                data: Vec::new(),
            };
        }
        data.resize(width * height, 0.0);
        Self {
            width,
            height,
            data,
        }
    }

    /// Width in cells.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major backing slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Reads a cell, clamping out-of-bounds coordinates to the nearest
    /// border cell (the replicate-edge boundary policy).
    #[must_use]
    pub fn get(&self, x: i64, y: i64) -> f64 {
        if self.width == 0 || self.height == 0 {
            return 0.0;
        }
        let cx = x.clamp(0, self.width as i64 - 1) as usize;
        let cy = y.clamp(0, self.height as i64 - 1) as usize;
        self.data[cy * self.width + cx]
    }

    fn set(&mut self, x: usize, y: usize, value: f64) {
        self.data[y * self.width + x] = value;
    }

    /// Minimum cell value, or `0.0` for an empty heightmap.
    #[must_use]
    pub fn min(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().cloned().fold(f64::INFINITY, f64::min)
    }

    /// Maximum cell value, or `0.0` for an empty heightmap.
    #[must_use]
    pub fn max(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Arithmetic mean of all cells, or `0.0` for an empty heightmap.
    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().sum::<f64>() / self.data.len() as f64
    }
}

fn neighbors(m: &Heightmap, x: usize, y: usize) -> [f64; 4] {
    let mut out = [0.0; 4];
    for (i, (dx, dy)) in NEIGHBOR_OFFSETS.iter().enumerate() {
        out[i] = m.get(x as i64 + dx, y as i64 + dy);
    }
    out
}

/// One iteration of a coarse hydraulic-erosion model.
///
/// Each cell transfers `rate * slope` of material to its lowest 4-neighbor,
/// where `slope` is the height difference; the transfer is capped so a cell
/// never drops below that neighbor's height. Flat terrain is a fixed point;
/// a peak strictly surrounded by lower neighbors strictly loses height.
#[must_use]
pub fn hydraulic_erosion_step(m: &Heightmap, rate: f64) -> Heightmap {
    if m.width == 0 || m.height == 0 {
        return Heightmap::filled(0, 0, 0.0);
    }
    let mut out = m.clone();
    for y in 0..m.height {
        for x in 0..m.width {
            let center = m.get(x as i64, y as i64);
            let lowest = neighbors(m, x, y)
                .into_iter()
                .fold(f64::INFINITY, f64::min);
            if lowest < center {
                let slope = center - lowest;
                let transfer = (rate * slope).clamp(0.0, slope);
                out.set(x, y, center - transfer);
            }
        }
    }
    out
}

/// One iteration of Musgrave-style thermal erosion.
///
/// Wherever a cell's slope to a neighbor exceeds `talus_angle`, a quarter of
/// the excess above the threshold moves to that neighbor. Never raises a
/// strict local maximum; smooths spikes monotonically.
#[must_use]
pub fn thermal_erosion_step(m: &Heightmap, talus_angle: f64) -> Heightmap {
    if m.width == 0 || m.height == 0 {
        return Heightmap::filled(0, 0, 0.0);
    }
    let mut delta = vec![0.0; m.data.len()];
    for y in 0..m.height {
        for x in 0..m.width {
            let center = m.get(x as i64, y as i64);
            for &(dx, dy) in &NEIGHBOR_OFFSETS {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                let neighbor_value = m.get(nx, ny);
                let slope = center - neighbor_value;
                if slope > talus_angle {
                    let transfer = (slope - talus_angle) * 0.25;
                    delta[y * m.width + x] -= transfer;
                    if nx >= 0 && ny >= 0 && (nx as usize) < m.width && (ny as usize) < m.height {
                        delta[ny as usize * m.width + nx as usize] += transfer;
                    }
                }
            }
        }
    }
    let mut out = m.clone();
    for (cell, d) in out.data.iter_mut().zip(delta) {
        *cell += d;
    }
    out
}

/// Slope-proportional attenuation: subtracts `intensity * local_slope(x, y)`
/// from every cell, where `local_slope` is the average absolute height
/// difference to the 4-neighborhood.
#[must_use]
pub fn apply_erosion_mask(m: &Heightmap, intensity: f64) -> Heightmap {
    if m.width == 0 || m.height == 0 {
        return Heightmap::filled(0, 0, 0.0);
    }
    let mut out = m.clone();
    for y in 0..m.height {
        for x in 0..m.width {
            let center = m.get(x as i64, y as i64);
            let slope: f64 = neighbors(m, x, y)
                .into_iter()
                .map(|n| (center - n).abs())
                .sum::<f64>()
                / 4.0;
            out.set(x, y, center - intensity * slope);
        }
    }
    out
}

/// Fills valleys (local minima) by moving a cell partway towards the
/// average of its strictly-higher neighbors. Local maxima (no higher
/// neighbor) are left untouched.
#[must_use]
pub fn sediment_deposition(m: &Heightmap, amount: f64) -> Heightmap {
    if m.width == 0 || m.height == 0 {
        return Heightmap::filled(0, 0, 0.0);
    }
    let mut out = m.clone();
    for y in 0..m.height {
        for x in 0..m.width {
            let center = m.get(x as i64, y as i64);
            let higher: Vec<f64> = neighbors(m, x, y)
                .into_iter()
                .filter(|&n| n > center)
                .collect();
            if higher.is_empty() {
                continue;
            }
            let avg_higher = higher.iter().sum::<f64>() / higher.len() as f64;
            out.set(x, y, center + amount * (avg_higher - center));
        }
    }
    out
}
