//! Fractal combinators over a 2D/3D gradient-noise primitive (L3):
//! `fbm`, `turbulence`, `ridged`, `billowy`, `swiss`, `jordan`.

use crate::engine::Engine;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const DEFAULT_PERSISTENCE: f64 = 0.5;
const DEFAULT_LACUNARITY: f64 = 2.0;

/// Octave/persistence/lacunarity bundle shared by every fractal combinator.
///
/// Out-of-range fields are never rejected. Per the engine's "never raise"
/// error policy, each combinator sanitizes its own copy at call time
/// ([`FractalParams::sanitized`]), so constructing one directly (bypassing
/// [`FractalParamsBuilder`]) is always safe.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FractalParams {
    /// Number of octaves summed. Non-positive is treated as 1.
    pub octaves: u32,
    /// Amplitude decay per octave. Non-positive falls back to 0.5.
    pub persistence: f64,
    /// Frequency growth per octave. Non-positive falls back to 2.0.
    pub lacunarity: f64,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            octaves: 1,
            persistence: DEFAULT_PERSISTENCE,
            lacunarity: DEFAULT_LACUNARITY,
        }
    }
}

impl FractalParams {
    /// Returns `(octaves, persistence, lacunarity)` with degenerate values
    /// replaced by their documented defaults.
    fn sanitized(&self) -> (u32, f64, f64) {
        let octaves = self.octaves.max(1);
        let persistence = if self.persistence > 0.0 {
            self.persistence
        } else {
            DEFAULT_PERSISTENCE
        };
        let lacunarity = if self.lacunarity > 0.0 {
            self.lacunarity
        } else {
            DEFAULT_LACUNARITY
        };
        (octaves, persistence, lacunarity)
    }
}

/// Chained-setter builder for [`FractalParams`], with no fallible setters:
/// out-of-range values are clamped to defaults rather than rejected (see
/// [`FractalParams`]).
#[derive(Debug, Clone, Default)]
pub struct FractalParamsBuilder {
    params: FractalParams,
}

impl FractalParamsBuilder {
    /// Starts a new builder from [`FractalParams::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the octave count.
    #[must_use]
    pub fn octaves(mut self, octaves: u32) -> Self {
        self.params.octaves = octaves;
        self
    }

    /// Sets the per-octave amplitude decay.
    #[must_use]
    pub fn persistence(mut self, persistence: f64) -> Self {
        self.params.persistence = persistence;
        self
    }

    /// Sets the per-octave frequency growth.
    #[must_use]
    pub fn lacunarity(mut self, lacunarity: f64) -> Self {
        self.params.lacunarity = lacunarity;
        self
    }

    /// Builds the parameter bundle.
    #[must_use]
    pub fn build(self) -> FractalParams {
        self.params
    }
}

impl Engine {
    /// Fractional Brownian motion over [`Engine::noise2`], `v ∈ [0, 1]`.
    #[must_use]
    pub fn fbm2(&self, x: f64, y: f64, params: FractalParams) -> f64 {
        let (octaves, persistence, lacunarity) = params.sanitized();
        let mut sum = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_amplitude = 0.0;
        for _ in 0..octaves {
            sum += self.noise2(x * frequency, y * frequency) * amplitude;
            max_amplitude += amplitude;
            amplitude *= persistence;
            frequency *= lacunarity;
        }
        (((sum / max_amplitude) + 1.0) / 2.0).clamp(0.0, 1.0)
    }

    /// Fractional Brownian motion over [`Engine::noise3`], `v ∈ [0, 1]`.
    #[must_use]
    pub fn fbm3(&self, x: f64, y: f64, z: f64, params: FractalParams) -> f64 {
        let (octaves, persistence, lacunarity) = params.sanitized();
        let mut sum = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_amplitude = 0.0;
        for _ in 0..octaves {
            sum += self.noise3(x * frequency, y * frequency, z * frequency) * amplitude;
            max_amplitude += amplitude;
            amplitude *= persistence;
            frequency *= lacunarity;
        }
        (((sum / max_amplitude) + 1.0) / 2.0).clamp(0.0, 1.0)
    }

    /// Sum of `|noise2|` at increasing frequency, `v >= 0` (not normalized
    /// to `[0, 1]`; typically `[0, ~1.5]`).
    #[must_use]
    pub fn turbulence2(&self, x: f64, y: f64, params: FractalParams) -> f64 {
        let (octaves, persistence, lacunarity) = params.sanitized();
        let mut sum = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        for _ in 0..octaves {
            sum += self.noise2(x * frequency, y * frequency).abs() * amplitude;
            amplitude *= persistence;
            frequency *= lacunarity;
        }
        sum.max(0.0)
    }

    /// Sum of `|noise3|` at increasing frequency, `v >= 0`.
    #[must_use]
    pub fn turbulence3(&self, x: f64, y: f64, z: f64, params: FractalParams) -> f64 {
        let (octaves, persistence, lacunarity) = params.sanitized();
        let mut sum = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        for _ in 0..octaves {
            sum += self
                .noise3(x * frequency, y * frequency, z * frequency)
                .abs()
                * amplitude;
            amplitude *= persistence;
            frequency *= lacunarity;
        }
        sum.max(0.0)
    }

    /// Ridged multifractal over [`Engine::noise2`], `v ∈ [0, 1]`.
    #[must_use]
    pub fn ridged2(&self, x: f64, y: f64, params: FractalParams) -> f64 {
        let (octaves, persistence, lacunarity) = params.sanitized();
        let mut sum = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_amplitude = 0.0;
        for _ in 0..octaves {
            let ridge = 1.0 - self.noise2(x * frequency, y * frequency).abs();
            sum += ridge * ridge * amplitude;
            max_amplitude += amplitude;
            amplitude *= persistence;
            frequency *= lacunarity;
        }
        (sum / max_amplitude).clamp(0.0, 1.0)
    }

    /// Ridged multifractal over [`Engine::noise3`], `v ∈ [0, 1]`.
    #[must_use]
    pub fn ridged3(&self, x: f64, y: f64, z: f64, params: FractalParams) -> f64 {
        let (octaves, persistence, lacunarity) = params.sanitized();
        let mut sum = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_amplitude = 0.0;
        for _ in 0..octaves {
            let ridge = 1.0 - self.noise3(x * frequency, y * frequency, z * frequency).abs();
            sum += ridge * ridge * amplitude;
            max_amplitude += amplitude;
            amplitude *= persistence;
            frequency *= lacunarity;
        }
        (sum / max_amplitude).clamp(0.0, 1.0)
    }

    /// Billowy (remapped absolute-value) fractal over [`Engine::noise2`],
    /// `v ∈ [0, 1]`.
    #[must_use]
    pub fn billowy2(&self, x: f64, y: f64, params: FractalParams) -> f64 {
        let (octaves, persistence, lacunarity) = params.sanitized();
        let mut sum = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_amplitude = 0.0;
        for _ in 0..octaves {
            sum += self.noise2(x * frequency, y * frequency).abs() * amplitude;
            max_amplitude += amplitude;
            amplitude *= persistence;
            frequency *= lacunarity;
        }
        (sum / max_amplitude).clamp(0.0, 1.0)
    }

    /// Billowy fractal over [`Engine::noise3`], `v ∈ [0, 1]`.
    #[must_use]
    pub fn billowy3(&self, x: f64, y: f64, z: f64, params: FractalParams) -> f64 {
        let (octaves, persistence, lacunarity) = params.sanitized();
        let mut sum = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_amplitude = 0.0;
        for _ in 0..octaves {
            sum += self
                .noise3(x * frequency, y * frequency, z * frequency)
                .abs()
                * amplitude;
            max_amplitude += amplitude;
            amplitude *= persistence;
            frequency *= lacunarity;
        }
        (sum / max_amplitude).clamp(0.0, 1.0)
    }

    /// Turbulence-of-turbulence over a self-warped input, `v ∈ [0, ~2]`.
    ///
    /// Each octave's sample point is displaced by the running sum of prior
    /// octaves (scaled by amplitude), so higher octaves sample a distorted
    /// version of the domain rather than a plain frequency multiple.
    #[must_use]
    pub fn swiss2(&self, x: f64, y: f64, params: FractalParams) -> f64 {
        let (octaves, persistence, lacunarity) = params.sanitized();
        let mut sum = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut warp_x = 0.0;
        let mut warp_y = 0.0;
        for _ in 0..octaves {
            let n = self.noise2(x * frequency + warp_x, y * frequency + warp_y);
            sum += n.abs() * amplitude;
            warp_x += n * amplitude;
            warp_y += n * amplitude;
            amplitude *= persistence;
            frequency *= lacunarity;
        }
        sum.max(0.0)
    }

    /// Ridged multifractal with gradient-weighted feedback between octaves,
    /// `v` roughly within `[-10, 10]`.
    ///
    /// Each octave's ridge signal scales the weight carried into the next
    /// octave, so strong ridges reinforce detail at higher frequencies
    /// (the "Jordan" feedback variant of ridged multifractal noise).
    #[must_use]
    pub fn jordan2(&self, x: f64, y: f64, params: FractalParams) -> f64 {
        let (octaves, persistence, lacunarity) = params.sanitized();
        let mut sum = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_amplitude = 0.0;
        let mut weight = 1.0;
        for _ in 0..octaves {
            let n = self.noise2(x * frequency, y * frequency);
            let signal = (1.0 - n.abs()).powi(2);
            sum += signal * weight * amplitude;
            max_amplitude += amplitude;
            weight = (signal * 2.0).clamp(0.0, 1.0);
            amplitude *= persistence;
            frequency *= lacunarity;
        }
        let normalized = sum / max_amplitude; // in [0, 1]
        ((normalized * 2.0 - 1.0) * 10.0).clamp(-10.0, 10.0)
    }
}
