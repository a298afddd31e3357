use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// (sqrt(3) - 1) / 2
const F2: f64 = 0.366_025_403_784_438_6;
/// (3 - sqrt(3)) / 6
const G2: f64 = 0.211_324_865_405_187_1;

/// Brings the sum of the three corner contributions to roughly [-1, 1].
const SCALE: f64 = 70.0;

const GRAD2: [(f64, f64); 8] = [
    (1.0, 1.0),
    (-1.0, 1.0),
    (1.0, -1.0),
    (-1.0, -1.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
];

/// Ken Perlin's reference permutation.
const REFERENCE_PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180,
];

/// 2D simplex noise over an immutable permutation table.
///
/// The table is built once and only read afterwards, so a single `Simplex`
/// can be shared by reference across every sampling call (and thread).
#[derive(Clone)]
pub struct Simplex {
    // doubled so that `perm[i + perm[j]]` never needs a second wrap
    perm: [u8; 512],
}

impl Default for Simplex {
    fn default() -> Self {
        Self::from_permutation(&REFERENCE_PERMUTATION)
    }
}

impl std::fmt::Debug for Simplex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simplex")
            .field("perm", &&self.perm[..8])
            .finish_non_exhaustive()
    }
}

impl Simplex {
    /// Build a table shuffled from `seed`.
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut source = [0u8; 256];
        for (i, value) in source.iter_mut().enumerate() {
            *value = i as u8;
        }
        source.shuffle(&mut rng);
        Self::from_permutation(&source)
    }

    fn from_permutation(source: &[u8; 256]) -> Self {
        let mut perm = [0u8; 512];
        perm[..256].copy_from_slice(source);
        perm[256..].copy_from_slice(source);
        Self { perm }
    }

    #[inline]
    fn gradient_index(&self, i: usize, j: usize) -> usize {
        self.perm[i + self.perm[j] as usize] as usize % GRAD2.len()
    }

    /// Sample the noise at `(x, y)`.
    ///
    /// The result is continuous in both coordinates and stays within about
    /// [-1, 1]; it is not clamped.
    pub fn noise2(&self, x: f64, y: f64) -> f64 {
        // skew into simplex space to find the containing cell
        let s = (x + y) * F2;
        let i = (x + s).floor();
        let j = (y + s).floor();

        let t = (i + j) * G2;
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        // lower or upper triangle of the skewed cell
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + G2;
        let y1 = y0 - j1 as f64 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = (i as i64 & 255) as usize;
        let jj = (j as i64 & 255) as usize;

        let g0 = self.gradient_index(ii, jj);
        let g1 = self.gradient_index(ii + i1, jj + j1);
        let g2 = self.gradient_index(ii + 1, jj + 1);

        SCALE * (corner(g0, x0, y0) + corner(g1, x1, y1) + corner(g2, x2, y2))
    }
}

#[inline]
fn corner(gradient: usize, x: f64, y: f64) -> f64 {
    let t = 0.5 - x * x - y * y;
    if t < 0.0 {
        return 0.0;
    }
    let (gx, gy) = GRAD2[gradient];
    let t2 = t * t;
    t2 * t2 * (gx * x + gy * y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_permutation_is_complete() {
        let mut seen = [false; 256];
        for &value in REFERENCE_PERMUTATION.iter() {
            seen[value as usize] = true;
        }
        assert!(seen.iter().all(|&x| x));
    }

    #[test]
    fn test_deterministic() {
        let a = Simplex::default();
        let b = Simplex::default();
        for i in 0..200 {
            let x = i as f64 * 0.37 - 20.0;
            let y = i as f64 * 0.23 + 5.0;
            assert_eq!(a.noise2(x, y), a.noise2(x, y));
            assert_eq!(a.noise2(x, y), b.noise2(x, y));
        }

        let c = Simplex::new(7);
        let d = Simplex::new(7);
        for i in 0..200 {
            let x = i as f64 * 0.37;
            let y = i as f64 * 0.91;
            assert_eq!(c.noise2(x, y), d.noise2(x, y));
        }
    }

    #[test]
    fn test_seeds_differ() {
        let a = Simplex::new(1);
        let b = Simplex::new(2);
        let differing = (0..100)
            .filter(|&i| {
                let (x, y) = (i as f64 * 0.53 + 0.1, i as f64 * 0.29 + 0.2);
                a.noise2(x, y) != b.noise2(x, y)
            })
            .count();
        assert!(differing > 50, "only {} of 100 samples differ", differing);
    }

    #[test]
    fn test_range() {
        let noise = Simplex::default();
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for iy in 0..300 {
            for ix in 0..300 {
                let v = noise.noise2(ix as f64 * 0.0731 - 7.0, iy as f64 * 0.0677 - 9.0);
                min = min.min(v);
                max = max.max(v);
            }
        }
        assert!(min >= -1.05, "min {} out of range", min);
        assert!(max <= 1.05, "max {} out of range", max);
        assert!(max - min > 1.0, "range {}..{} is suspiciously flat", min, max);
    }

    #[test]
    fn test_continuity() {
        let noise = Simplex::default();
        let delta = 1e-3;
        for iy in 0..100 {
            for ix in 0..100 {
                let (x, y) = (ix as f64 * 0.173 - 3.0, iy as f64 * 0.131 - 4.0);
                let v = noise.noise2(x, y);
                let dx = (noise.noise2(x + delta, y) - v).abs();
                let dy = (noise.noise2(x, y + delta) - v).abs();
                assert!(dx < 0.02, "jump {} at ({}, {}) along x", dx, x, y);
                assert!(dy < 0.02, "jump {} at ({}, {}) along y", dy, x, y);
            }
        }
    }

    #[test]
    fn test_lattice_origin_is_zero() {
        assert_eq!(Simplex::default().noise2(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_negative_coordinates() {
        let noise = Simplex::default();
        let v = noise.noise2(-1234.56, -789.01);
        assert!(v.is_finite());
        assert!(v.abs() <= 1.05);
    }
}
