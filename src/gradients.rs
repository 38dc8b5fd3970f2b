//! Fixed gradient vector sets for 2D/3D/4D noise (L1).
//!
//! Selection is always `TABLE[hash.rem_euclid(TABLE.len()) as usize]`, using
//! `rem_euclid` rather than `&` because these tables are not power-of-two
//! sized in every dimension.

/// 12 gradient directions for 2D simplex noise (Perlin's 12-vector set
/// projected to 2D: the 12 edge-midpoint directions of a cube, dropping the
/// component that would make one axis always zero).
pub const GRAD2: [[f64; 2]; 12] = [
    [1.0, 1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [-1.0, -1.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
    [0.0, 1.0],
    [0.0, -1.0],
];

/// The 12 edge-midpoints of a cube, used as 3D simplex gradient directions.
pub const GRAD3: [[f64; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

/// The 32 permutations of `(±1, ±1, ±1, 0)`, used as 4D simplex gradient
/// directions.
pub const GRAD4: [[f64; 4]; 32] = [
    [0.0, 1.0, 1.0, 1.0],
    [0.0, 1.0, 1.0, -1.0],
    [0.0, 1.0, -1.0, 1.0],
    [0.0, 1.0, -1.0, -1.0],
    [0.0, -1.0, 1.0, 1.0],
    [0.0, -1.0, 1.0, -1.0],
    [0.0, -1.0, -1.0, 1.0],
    [0.0, -1.0, -1.0, -1.0],
    [1.0, 0.0, 1.0, 1.0],
    [1.0, 0.0, 1.0, -1.0],
    [1.0, 0.0, -1.0, 1.0],
    [1.0, 0.0, -1.0, -1.0],
    [-1.0, 0.0, 1.0, 1.0],
    [-1.0, 0.0, 1.0, -1.0],
    [-1.0, 0.0, -1.0, 1.0],
    [-1.0, 0.0, -1.0, -1.0],
    [1.0, 1.0, 0.0, 1.0],
    [1.0, 1.0, 0.0, -1.0],
    [1.0, -1.0, 0.0, 1.0],
    [1.0, -1.0, 0.0, -1.0],
    [-1.0, 1.0, 0.0, 1.0],
    [-1.0, 1.0, 0.0, -1.0],
    [-1.0, -1.0, 0.0, 1.0],
    [-1.0, -1.0, 0.0, -1.0],
    [1.0, 1.0, 1.0, 0.0],
    [1.0, 1.0, -1.0, 0.0],
    [1.0, -1.0, 1.0, 0.0],
    [1.0, -1.0, -1.0, 0.0],
    [-1.0, 1.0, 1.0, 0.0],
    [-1.0, 1.0, -1.0, 0.0],
    [-1.0, -1.0, 1.0, 0.0],
    [-1.0, -1.0, -1.0, 0.0],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradients_have_comparable_magnitude() {
        for g in GRAD2 {
            let len2 = g[0] * g[0] + g[1] * g[1];
            assert!((0.9..=2.1).contains(&len2), "GRAD2 outlier: {g:?}");
        }
        for g in GRAD3 {
            let len2 = g[0] * g[0] + g[1] * g[1] + g[2] * g[2];
            assert!((1.9..=2.1).contains(&len2), "GRAD3 outlier: {g:?}");
        }
        for g in GRAD4 {
            let len2: f64 = g.iter().map(|c| c * c).sum();
            assert!((2.9..=3.1).contains(&len2), "GRAD4 outlier: {g:?}");
        }
    }

    #[test]
    fn grad4_is_signed_permutations_of_unit_triple() {
        for g in GRAD4 {
            let zeros = g.iter().filter(|&&c| c == 0.0).count();
            assert_eq!(zeros, 1, "expected exactly one zero component: {g:?}");
        }
    }
}
