//! Round-trips the crate's plain-data types through `serde_json`, guarded by
//! the optional `serde` feature.

#![cfg(feature = "serde")]

use coherent_noise::fractal::FractalParams;
use coherent_noise::worley::{Metric, WorleyResult};
use coherent_noise::{Engine, Heightmap};

#[test]
fn fractal_params_round_trip() {
    let params = FractalParams {
        octaves: 5,
        persistence: 0.45,
        lacunarity: 2.1,
    };
    let json = serde_json::to_string(&params).unwrap();
    let back: FractalParams = serde_json::from_str(&json).unwrap();
    assert_eq!(params, back);
}

#[test]
fn metric_round_trip() {
    for metric in [Metric::Euclidean, Metric::Manhattan, Metric::Chebyshev] {
        let json = serde_json::to_string(&metric).unwrap();
        let back: Metric = serde_json::from_str(&json).unwrap();
        assert_eq!(metric, back);
    }
}

#[test]
fn worley_result_round_trip() {
    let engine = Engine::new(11111);
    let sample = engine.worley2(1.5, 2.5, 1.0, Metric::Euclidean);
    let json = serde_json::to_string(&sample).unwrap();
    let back: WorleyResult = serde_json::from_str(&json).unwrap();
    assert_eq!(sample, back);
}

#[test]
fn heightmap_round_trip() {
    let map = Heightmap::from_fn(4, 3, |x, y| (x + y) as f64);
    let json = serde_json::to_string(&map).unwrap();
    let back: Heightmap = serde_json::from_str(&json).unwrap();
    assert_eq!(map, back);
}
