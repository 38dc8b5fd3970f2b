//! Deterministic, seedable coherent noise.
//!
//! Every sampling function is a pure, total function of its inputs: the same
//! seed and coordinates always produce the same value, on any platform,
//! forever. Nothing here allocates on the sampling path, nothing panics on
//! any finite input, and nothing returns a `Result`. Degenerate parameters
//! (a zero lacunarity, a negative octave count) are sanitized to sane
//! defaults rather than rejected. See each module's docs for the exact
//! contract.
//!
//! # Quick Start
//!
//! ```rust
//! use coherent_noise::Engine;
//! use coherent_noise::fractal::FractalParamsBuilder;
//!
//! let engine = Engine::new(11111);
//! let n = engine.noise2(1.5, 2.5);
//! assert!((-1.0..=1.0).contains(&n));
//!
//! let params = FractalParamsBuilder::new().octaves(4).build();
//! let height = engine.fbm2(0.2, 0.3, params);
//! assert!((0.0..=1.0).contains(&height));
//! ```
//!
//! Prefer an explicit [`Engine`] wherever you can hold one. The [`global`]
//! module is sugar for call sites that can't thread one through.
//!
//! # Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` on the plain-data types
//!   ([`fractal::FractalParams`], [`worley::Metric`], [`worley::WorleyResult`],
//!   [`erosion::Heightmap`]).

pub mod blend;
pub mod engine;
pub mod erosion;
pub mod fractal;
pub mod global;
pub mod gradients;
pub mod noise;
pub mod value;
pub mod warp;
pub mod worley;

pub use engine::Engine;
pub use erosion::Heightmap;
pub use fractal::{FractalParams, FractalParamsBuilder};
pub use worley::{Metric, WorleyResult};
