//! Process-wide engine singleton.
//!
//! [`crate::engine::Engine`] is the preferred, explicit API: construct one,
//! pass it around, reseed it when you want. This module is sugar on top for
//! callers who want a single shared field reachable without threading an
//! `Engine` through their own code (a texture-streaming job or a plugin
//! hook, say). It holds the current engine behind an [`arc_swap::ArcSwap`]
//! so readers never block a writer mid-[`seed`] and writers never block
//! concurrent readers: a call to `seed` builds the new engine off to the
//! side and atomically swaps the pointer in.
use std::sync::OnceLock;

use arc_swap::ArcSwap;

use crate::engine::Engine;
use crate::fractal::FractalParams;
use crate::worley::{Metric, WorleyResult};

fn global_engine() -> &'static ArcSwap<Engine> {
    static ENGINE: OnceLock<ArcSwap<Engine>> = OnceLock::new();
    ENGINE.get_or_init(|| ArcSwap::from_pointee(Engine::default()))
}

/// Replaces the process-wide engine with a freshly built one for `seed`.
///
/// Any in-flight reads against the previous engine keep observing it (the
/// old `Arc` lives until its last reader drops it); every read that starts
/// after this call observes `seed`.
pub fn seed(seed: u32) {
    global_engine().store(std::sync::Arc::new(Engine::new(seed)));
    tracing::debug!(seed, "reseeded global noise engine");
}

/// The seed the process-wide engine currently holds.
#[must_use]
pub fn current_seed() -> u32 {
    global_engine().load().seed()
}

/// Hash of an integer 2D lattice coordinate against the process-wide
/// engine. See [`Engine::hash2d`].
#[must_use]
pub fn hash2d(ix: i32, iy: i32) -> i32 {
    global_engine().load().hash2d(ix, iy)
}

/// Hash of an integer 3D lattice coordinate against the process-wide
/// engine. See [`Engine::hash3d`].
#[must_use]
pub fn hash3d(ix: i32, iy: i32, iz: i32) -> i32 {
    global_engine().load().hash3d(ix, iy, iz)
}

/// Hash of an integer 4D lattice coordinate against the process-wide
/// engine. See [`Engine::hash4d`].
#[must_use]
pub fn hash4d(ix: i32, iy: i32, iz: i32, iw: i32) -> i32 {
    global_engine().load().hash4d(ix, iy, iz, iw)
}

/// 2D gradient noise against the process-wide engine. See
/// [`Engine::noise2`].
#[must_use]
pub fn noise2(x: f64, y: f64) -> f64 {
    global_engine().load().noise2(x, y)
}

/// 3D gradient noise against the process-wide engine. See
/// [`Engine::noise3`].
#[must_use]
pub fn noise3(x: f64, y: f64, z: f64) -> f64 {
    global_engine().load().noise3(x, y, z)
}

/// 4D gradient noise against the process-wide engine. See
/// [`Engine::noise4`].
#[must_use]
pub fn noise4(x: f64, y: f64, z: f64, w: f64) -> f64 {
    global_engine().load().noise4(x, y, z, w)
}

/// 2D value noise against the process-wide engine. See [`Engine::value2`].
#[must_use]
pub fn value2(x: f64, y: f64) -> f64 {
    global_engine().load().value2(x, y)
}

/// 3D value noise against the process-wide engine. See [`Engine::value3`].
#[must_use]
pub fn value3(x: f64, y: f64, z: f64) -> f64 {
    global_engine().load().value3(x, y, z)
}

/// 2D cellular noise against the process-wide engine. See
/// [`Engine::worley2`].
#[must_use]
pub fn worley2(x: f64, y: f64, jitter: f64, metric: Metric) -> WorleyResult {
    global_engine().load().worley2(x, y, jitter, metric)
}

/// 3D cellular noise against the process-wide engine. See
/// [`Engine::worley3`].
#[must_use]
pub fn worley3(x: f64, y: f64, z: f64, jitter: f64, metric: Metric) -> WorleyResult {
    global_engine().load().worley3(x, y, z, jitter, metric)
}

/// `fbm2` against the process-wide engine. See [`Engine::fbm2`].
#[must_use]
pub fn fbm2(x: f64, y: f64, params: FractalParams) -> f64 {
    global_engine().load().fbm2(x, y, params)
}

/// `fbm3` against the process-wide engine. See [`Engine::fbm3`].
#[must_use]
pub fn fbm3(x: f64, y: f64, z: f64, params: FractalParams) -> f64 {
    global_engine().load().fbm3(x, y, z, params)
}

/// `turbulence2` against the process-wide engine. See
/// [`Engine::turbulence2`].
#[must_use]
pub fn turbulence2(x: f64, y: f64, params: FractalParams) -> f64 {
    global_engine().load().turbulence2(x, y, params)
}

/// `turbulence3` against the process-wide engine. See
/// [`Engine::turbulence3`].
#[must_use]
pub fn turbulence3(x: f64, y: f64, z: f64, params: FractalParams) -> f64 {
    global_engine().load().turbulence3(x, y, z, params)
}

/// `ridged2` against the process-wide engine. See [`Engine::ridged2`].
#[must_use]
pub fn ridged2(x: f64, y: f64, params: FractalParams) -> f64 {
    global_engine().load().ridged2(x, y, params)
}

/// `ridged3` against the process-wide engine. See [`Engine::ridged3`].
#[must_use]
pub fn ridged3(x: f64, y: f64, z: f64, params: FractalParams) -> f64 {
    global_engine().load().ridged3(x, y, z, params)
}

/// `billowy2` against the process-wide engine. See [`Engine::billowy2`].
#[must_use]
pub fn billowy2(x: f64, y: f64, params: FractalParams) -> f64 {
    global_engine().load().billowy2(x, y, params)
}

/// `billowy3` against the process-wide engine. See [`Engine::billowy3`].
#[must_use]
pub fn billowy3(x: f64, y: f64, z: f64, params: FractalParams) -> f64 {
    global_engine().load().billowy3(x, y, z, params)
}

/// `swiss2` against the process-wide engine. See [`Engine::swiss2`].
#[must_use]
pub fn swiss2(x: f64, y: f64, params: FractalParams) -> f64 {
    global_engine().load().swiss2(x, y, params)
}

/// `jordan2` against the process-wide engine. See [`Engine::jordan2`].
#[must_use]
pub fn jordan2(x: f64, y: f64, params: FractalParams) -> f64 {
    global_engine().load().jordan2(x, y, params)
}

/// `domain_warp2` against the process-wide engine. See
/// [`Engine::domain_warp2`].
#[must_use]
pub fn domain_warp2(x: f64, y: f64, strength: f64) -> f64 {
    global_engine().load().domain_warp2(x, y, strength)
}

/// `domain_warp3` against the process-wide engine. See
/// [`Engine::domain_warp3`].
#[must_use]
pub fn domain_warp3(x: f64, y: f64, z: f64, strength: f64) -> f64 {
    global_engine().load().domain_warp3(x, y, z, strength)
}
