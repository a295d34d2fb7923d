// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Deterministic gradient noise.
//!
//! Three families are provided:
//!
//! - [`simplex_noise3`]: Perlin's simplex noise in the bit-shuffle form
//!   designed for hardware ("Noise Hardware", SIGGRAPH 2001 course notes).
//!   It needs no permutation table.
//! - [`improved_noise3`]: Perlin's 2002 "Improving Noise" with the
//!   reference permutation, quintic fade and 12 edge gradients.
//! - [`noise1`], [`noise2`], [`noise3`]: classic single-precision gradient
//!   noise with the cubic `3t² − 2t³` fade, hashed through the same
//!   permutation.
//!
//! All functions are pure: equal inputs produce bit-identical outputs. The
//! lattice-based families are zero at integer coordinates.

/// Ken Perlin's reference permutation of `0..=255`.
const PERMUTATION: [u8; 256] = [
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

/// Bit patterns combined by the simplex hash.
const SIMPLEX_T: [i32; 8] = [0x15, 0x38, 0x32, 0x2c, 0x0d, 0x13, 0x07, 0x2a];

/// Permutation lookup wrapping any integer into the table.
#[inline]
fn perm(i: i32) -> i32 {
    i32::from(PERMUTATION[(i & 255) as usize])
}

/// Integer cell and fractional offset of a coordinate.
#[inline]
fn cell_f64(x: f64) -> (i32, f64) {
    let fl = x.floor();
    (fl as i32, x - fl)
}

#[inline]
fn cell_f32(x: f32) -> (i32, f32) {
    let fl = x.floor();
    (fl as i32, x - fl)
}

#[inline]
fn lerp_f64(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

#[inline]
fn lerp_f32(t: f32, a: f32, b: f32) -> f32 {
    a + t * (b - a)
}

// ── simplex ─────────────────────────────────────────────────────────

/// Walk over the four corners of the simplex containing the sample point.
struct SimplexWalk {
    cell: [i32; 3],
    offset: [f64; 3],
    steps: [i32; 3],
}

impl SimplexWalk {
    fn bit(n: i32, b: i32) -> i32 {
        (n >> b) & 1
    }

    fn shuffle_bit(i: i32, j: i32, k: i32, b: i32) -> i32 {
        let idx = (Self::bit(i, b) << 2) | (Self::bit(j, b) << 1) | Self::bit(k, b);
        SIMPLEX_T[idx as usize]
    }

    fn shuffle(i: i32, j: i32, k: i32) -> i32 {
        Self::shuffle_bit(i, j, k, 0)
            + Self::shuffle_bit(j, k, i, 1)
            + Self::shuffle_bit(k, i, j, 2)
            + Self::shuffle_bit(i, j, k, 3)
            + Self::shuffle_bit(j, k, i, 4)
            + Self::shuffle_bit(k, i, j, 5)
            + Self::shuffle_bit(i, j, k, 6)
            + Self::shuffle_bit(j, k, i, 7)
    }

    /// Contribution of the current corner, then steps along `axis`.
    fn corner(&mut self, axis: usize) -> f64 {
        let [a0, a1, a2] = self.steps;
        let s = f64::from(a0 + a1 + a2) / 6.0;
        let x = self.offset[0] - f64::from(a0) + s;
        let y = self.offset[1] - f64::from(a1) + s;
        let z = self.offset[2] - f64::from(a2) + s;
        let mut t = 0.6 - x * x - y * y - z * z;
        let h = Self::shuffle(self.cell[0] + a0, self.cell[1] + a1, self.cell[2] + a2);
        self.steps[axis] += 1;
        if t < 0.0 {
            return 0.0;
        }
        let (b5, b4, b3, b2) = ((h >> 5) & 1, (h >> 4) & 1, (h >> 3) & 1, (h >> 2) & 1);
        let b = h & 3;
        let (mut p, mut q, mut r) = match b {
            1 => (x, y, z),
            2 => (y, z, x),
            _ => (z, x, y),
        };
        if b5 == b3 {
            p = -p;
        }
        if b5 == b4 {
            q = -q;
        }
        if b5 != (b4 ^ b3) {
            r = -r;
        }
        t *= t;
        let tail = if b == 0 {
            q + r
        } else if b2 == 0 {
            q
        } else {
            r
        };
        8.0 * t * t * (p + tail)
    }
}

/// Perlin's hardware simplex noise at `(x, y, z)`.
///
/// The output lies roughly in `[-1, 1]`.
pub fn simplex_noise3(x: f64, y: f64, z: f64) -> f64 {
    let skew = (x + y + z) / 3.0;
    let i = (x + skew).floor() as i32;
    let j = (y + skew).floor() as i32;
    let k = (z + skew).floor() as i32;
    let unskew = f64::from(i + j + k) / 6.0;
    let u = x - f64::from(i) + unskew;
    let v = y - f64::from(j) + unskew;
    let w = z - f64::from(k) + unskew;

    let hi = if u >= w {
        if u >= v {
            0
        } else {
            1
        }
    } else if v >= w {
        1
    } else {
        2
    };
    let lo = if u < w {
        if u < v {
            0
        } else {
            1
        }
    } else if v < w {
        1
    } else {
        2
    };

    let mut walk = SimplexWalk {
        cell: [i, j, k],
        offset: [u, v, w],
        steps: [0; 3],
    };
    let mut sum = walk.corner(hi);
    sum += walk.corner(3 - hi - lo);
    sum += walk.corner(lo);
    sum += walk.corner(0);
    sum
}

// ── improved ────────────────────────────────────────────────────────

fn fade_quintic(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn grad_improved(hash: i32, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}

/// Perlin's improved noise (2002) at `(x, y, z)`.
pub fn improved_noise3(x: f64, y: f64, z: f64) -> f64 {
    let (xi, x) = cell_f64(x);
    let (yi, y) = cell_f64(y);
    let (zi, z) = cell_f64(z);
    let (u, v, w) = (fade_quintic(x), fade_quintic(y), fade_quintic(z));

    let a = perm(xi) + yi;
    let aa = perm(a) + zi;
    let ab = perm(a + 1) + zi;
    let b = perm(xi + 1) + yi;
    let ba = perm(b) + zi;
    let bb = perm(b + 1) + zi;

    lerp_f64(
        w,
        lerp_f64(
            v,
            lerp_f64(u, grad_improved(perm(aa), x, y, z), grad_improved(perm(ba), x - 1.0, y, z)),
            lerp_f64(
                u,
                grad_improved(perm(ab), x, y - 1.0, z),
                grad_improved(perm(bb), x - 1.0, y - 1.0, z),
            ),
        ),
        lerp_f64(
            v,
            lerp_f64(
                u,
                grad_improved(perm(aa + 1), x, y, z - 1.0),
                grad_improved(perm(ba + 1), x - 1.0, y, z - 1.0),
            ),
            lerp_f64(
                u,
                grad_improved(perm(ab + 1), x, y - 1.0, z - 1.0),
                grad_improved(perm(bb + 1), x - 1.0, y - 1.0, z - 1.0),
            ),
        ),
    )
}

// ── classic ─────────────────────────────────────────────────────────

fn s_curve(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

fn grad1(hash: i32, x: f32) -> f32 {
    let magnitude = ((hash & 7) + 1) as f32 / 8.0;
    if hash & 8 == 0 {
        magnitude * x
    } else {
        -magnitude * x
    }
}

fn grad2(hash: i32, x: f32, y: f32) -> f32 {
    match hash & 7 {
        0 => x + y,
        1 => -x + y,
        2 => x - y,
        3 => -x - y,
        4 => x,
        5 => -x,
        6 => y,
        _ => -y,
    }
}

fn grad3(hash: i32, x: f32, y: f32, z: f32) -> f32 {
    match hash % 12 {
        0 => x + y,
        1 => -x + y,
        2 => x - y,
        3 => -x - y,
        4 => x + z,
        5 => -x + z,
        6 => x - z,
        7 => -x - z,
        8 => y + z,
        9 => -y + z,
        10 => y - z,
        _ => -y - z,
    }
}

/// Classic one-dimensional gradient noise.
pub fn noise1(x: f32) -> f32 {
    let (xi, x) = cell_f32(x);
    let s = s_curve(x);
    lerp_f32(s, grad1(perm(xi), x), grad1(perm(xi + 1), x - 1.0))
}

/// Classic two-dimensional gradient noise.
pub fn noise2(x: f32, y: f32) -> f32 {
    let (xi, x) = cell_f32(x);
    let (yi, y) = cell_f32(y);
    let (sx, sy) = (s_curve(x), s_curve(y));
    let h = |dx: i32, dy: i32| perm(perm(xi + dx) + yi + dy);
    lerp_f32(
        sy,
        lerp_f32(sx, grad2(h(0, 0), x, y), grad2(h(1, 0), x - 1.0, y)),
        lerp_f32(
            sx,
            grad2(h(0, 1), x, y - 1.0),
            grad2(h(1, 1), x - 1.0, y - 1.0),
        ),
    )
}

/// Classic three-dimensional gradient noise.
pub fn noise3(x: f32, y: f32, z: f32) -> f32 {
    let (xi, x) = cell_f32(x);
    let (yi, y) = cell_f32(y);
    let (zi, z) = cell_f32(z);
    let (sx, sy, sz) = (s_curve(x), s_curve(y), s_curve(z));
    let h = |dx: i32, dy: i32, dz: i32| perm(perm(perm(xi + dx) + yi + dy) + zi + dz);
    let g = |dx: i32, dy: i32, dz: i32| {
        grad3(
            h(dx, dy, dz),
            x - dx as f32,
            y - dy as f32,
            z - dz as f32,
        )
    };
    lerp_f32(
        sz,
        lerp_f32(
            sy,
            lerp_f32(sx, g(0, 0, 0), g(1, 0, 0)),
            lerp_f32(sx, g(0, 1, 0), g(1, 1, 0)),
        ),
        lerp_f32(
            sy,
            lerp_f32(sx, g(0, 0, 1), g(1, 0, 1)),
            lerp_f32(sx, g(0, 1, 1), g(1, 1, 1)),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutation_is_a_bijection() {
        let mut seen = [false; 256];
        for &p in &PERMUTATION {
            assert!(!seen[p as usize], "duplicate entry {p}");
            seen[p as usize] = true;
        }
    }

    #[test]
    fn lattice_points_are_zero() {
        for (x, y, z) in [(0, 0, 0), (3, -7, 12), (-1, 255, 256)] {
            let (fx, fy, fz) = (f64::from(x), f64::from(y), f64::from(z));
            assert_eq!(improved_noise3(fx, fy, fz), 0.0);
            assert_eq!(noise3(fx as f32, fy as f32, fz as f32), 0.0);
            assert_eq!(noise2(fx as f32, fy as f32), 0.0);
            assert_eq!(noise1(fx as f32), 0.0);
        }
    }

    #[test]
    fn simplex_origin_is_zero() {
        assert_eq!(simplex_noise3(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn outputs_are_bounded_and_vary() {
        let mut distinct = 0;
        let mut last = f64::NAN;
        for i in 0..200 {
            let t = f64::from(i) * 0.173 - 11.0;
            let s = simplex_noise3(t, t * 0.7 + 1.3, -t * 0.4);
            let n = improved_noise3(t * 0.9, -t, t * 0.3 + 0.5);
            assert!(s.abs() <= 1.5, "simplex out of range at {t}: {s}");
            assert!(n.abs() <= 1.5, "improved out of range at {t}: {n}");
            if s != last {
                distinct += 1;
            }
            last = s;
        }
        assert!(distinct > 100);
    }

    #[test]
    fn classic_noise_is_continuous_across_cells() {
        let eps = 1e-3_f32;
        for x in [0.999_f32, 4.999, -2.001] {
            let a = noise3(x, 0.5, 0.25);
            let b = noise3(x + eps, 0.5, 0.25);
            assert!((a - b).abs() < 0.05, "jump at {x}: {a} vs {b}");
            let c = noise1(x);
            let d = noise1(x + eps);
            assert!((c - d).abs() < 0.05, "jump at {x}: {c} vs {d}");
        }
    }
}
