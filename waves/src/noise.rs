//! Seeded 3-D simplex noise.
//!
//! The wave layers sample this field along (x, layer, time) to get smooth,
//! organic vertical offsets. Output is deterministic per seed and stays in
//! `[-1, 1]`, so callers can scale it directly into pixel amplitudes.

#[cfg(test)]
#[path = "noise_test.rs"]
mod noise_test;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Skew factor for 3 dimensions.
const F3: f64 = 1.0 / 3.0;
/// Unskew factor for 3 dimensions.
const G3: f64 = 1.0 / 6.0;

/// Gradient set: midpoints of the unit-cube edges.
const GRAD3: [[f64; 3]; 12] = [
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

/// Seeded 3-D simplex noise generator.
pub struct Noise3 {
    /// Doubled permutation table so corner hashing never wraps mid-lookup.
    perm: [u8; 512],
}

impl Default for Noise3 {
    fn default() -> Self {
        Self::new(42)
    }
}

impl Noise3 {
    /// Build a generator whose permutation table is shuffled from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut base: [u8; 256] = std::array::from_fn(|i| i as u8);
        base.shuffle(&mut rng);
        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = base[i & 255];
        }
        Self { perm }
    }

    fn grad_index(&self, i: i64, j: i64, k: i64) -> usize {
        let wrap = |v: i64| (v & 255) as usize;
        let p = &self.perm;
        usize::from(p[wrap(i) + usize::from(p[wrap(j) + usize::from(p[wrap(k)])])]) % GRAD3.len()
    }

    /// Sample the noise field at a 3-D coordinate. Output is in `[-1, 1]`.
    #[must_use]
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        // Skew into the simplex grid to find the containing cell.
        let s = (x + y + z) * F3;
        let fi = (x + s).floor();
        let fj = (y + s).floor();
        let fk = (z + s).floor();
        let t = (fi + fj + fk) * G3;
        let x0 = x - (fi - t);
        let y0 = y - (fj - t);
        let z0 = z - (fk - t);

        // Order the coordinate offsets to pick the simplex corner traversal.
        let (i1, j1, k1, i2, j2, k2): (u8, u8, u8, u8, u8, u8) = if x0 >= y0 {
            if y0 >= z0 {
                (1, 0, 0, 1, 1, 0)
            } else if x0 >= z0 {
                (1, 0, 0, 1, 0, 1)
            } else {
                (0, 0, 1, 1, 0, 1)
            }
        } else if y0 < z0 {
            (0, 0, 1, 0, 1, 1)
        } else if x0 < z0 {
            (0, 1, 0, 0, 1, 1)
        } else {
            (0, 1, 0, 1, 1, 0)
        };

        let x1 = x0 - f64::from(i1) + G3;
        let y1 = y0 - f64::from(j1) + G3;
        let z1 = z0 - f64::from(k1) + G3;
        let x2 = x0 - f64::from(i2) + 2.0 * G3;
        let y2 = y0 - f64::from(j2) + 2.0 * G3;
        let z2 = z0 - f64::from(k2) + 2.0 * G3;
        let x3 = x0 - 1.0 + 3.0 * G3;
        let y3 = y0 - 1.0 + 3.0 * G3;
        let z3 = z0 - 1.0 + 3.0 * G3;

        let i = fi as i64;
        let j = fj as i64;
        let k = fk as i64;

        let corners = [
            (x0, y0, z0, self.grad_index(i, j, k)),
            (
                x1,
                y1,
                z1,
                self.grad_index(i + i64::from(i1), j + i64::from(j1), k + i64::from(k1)),
            ),
            (
                x2,
                y2,
                z2,
                self.grad_index(i + i64::from(i2), j + i64::from(j2), k + i64::from(k2)),
            ),
            (x3, y3, z3, self.grad_index(i + 1, j + 1, k + 1)),
        ];

        let mut total = 0.0;
        for (cx, cy, cz, gi) in corners {
            let falloff = 0.6 - cx * cx - cy * cy - cz * cz;
            if falloff > 0.0 {
                let g = GRAD3[gi];
                total += falloff.powi(4) * (g[0] * cx + g[1] * cy + g[2] * cz);
            }
        }

        // Empirical scale bringing the contribution sum into [-1, 1].
        32.0 * total
    }
}
