// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Closed-form real root solvers for quadratic and cubic polynomials.

use crate::Scalar;

/// Real roots of `a x² + b x + c = 0`.
///
/// Uses Blinn's formulation ("How to Solve a Quadratic Equation", IEEE
/// CG&A 25(6), 2005), which never subtracts nearly equal quantities. Root
/// order follows the branch taken:
///
/// - `b > 0`: `(-c / q, -q / a)` with `q = b/2 + sqrt(d)`
/// - `b < 0`: `(q / a, c / q)` with `q = -b/2 + sqrt(d)`
/// - `b = 0`: `(sqrt(d) / a, -sqrt(d) / a)`
///
/// where `d = (b/2)² - ac`. When `a = 0` the linear root is returned twice.
/// Returns `None` when `d < 0` or when `a = b = 0`.
///
/// # Examples
/// ```
/// use cgm_core::solve_quadratic;
/// assert_eq!(solve_quadratic(5.0, 5.0, -30.0), Some((2.0, -3.0)));
/// assert_eq!(solve_quadratic(1.0, 1.0, 1.0), None);
/// ```
pub fn solve_quadratic<T: Scalar>(a: T, b: T, c: T) -> Option<(T, T)> {
    if a != T::ZERO {
        let half_b = b * T::HALF;
        let d = half_b * half_b - a * c;
        if d < T::ZERO {
            return None;
        }
        let sqrt_d = d.sqrt();
        if half_b > T::ZERO {
            let q = half_b + sqrt_d;
            Some((-c / q, -q / a))
        } else if half_b < T::ZERO {
            let q = -half_b + sqrt_d;
            Some((q / a, c / q))
        } else {
            let x = sqrt_d / a;
            Some((x, -x))
        }
    } else if b != T::ZERO {
        let x = -c / b;
        Some((x, x))
    } else {
        None
    }
}

/// Distinct real roots of a cubic, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicRoots<T = f64> {
    roots: [T; 3],
    count: usize,
}

impl<T: Scalar> CubicRoots<T> {
    fn from_unsorted(values: &[T]) -> Self {
        let mut roots = [T::ZERO; 3];
        let mut count = 0;
        for &v in values {
            if roots[..count].iter().any(|&r| r == v) {
                continue;
            }
            roots[count] = v;
            count += 1;
        }
        roots[..count].sort_by(|a, b| a.partial_cmp(b).unwrap_or(core::cmp::Ordering::Equal));
        Self { roots, count }
    }

    /// The roots as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.roots[..self.count]
    }

    /// Number of distinct real roots (0 to 3).
    pub fn len(&self) -> usize {
        self.count
    }

    /// `true` when there is no real root.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterates the roots in ascending order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

/// Real roots of `a x³ + b x² + c x + d = 0`.
///
/// Falls back to [`solve_quadratic`] when `a = 0`. Otherwise the cubic is
/// reduced to `t³ + p t + q = 0`; three real roots use the trigonometric
/// method, a single real root uses Cardano's formula. Simple roots are then
/// polished with Newton steps that are kept only while they shrink the
/// residual. A discriminant within rounding distance of zero is treated as
/// zero, so a repeated root is reported once even when the coefficients are
/// not exactly representable.
///
/// # Examples
/// ```
/// use cgm_core::solve_cubic;
/// let r = solve_cubic(1.0_f64, -6.0, 11.0, -6.0);
/// assert_eq!(r.len(), 3);
/// assert!((r.as_slice()[1] - 2.0).abs() < 1e-12);
/// ```
pub fn solve_cubic<T: Scalar>(a: T, b: T, c: T, d: T) -> CubicRoots<T> {
    if a == T::ZERO {
        return match solve_quadratic(b, c, d) {
            Some((x1, x2)) => CubicRoots::from_unsorted(&[x1, x2]),
            None => CubicRoots::from_unsorted(&[]),
        };
    }

    let three = T::from_f64(3.0);
    let (ca, cb, cc) = (b / a, c / a, d / a);
    let shift = ca / three;
    let p = cb - ca * ca / three;
    let q = T::TWO * ca * ca * ca / T::from_f64(27.0) - ca * cb / three + cc;
    let half_q = q * T::HALF;
    let third_p = p / three;
    let disc = half_q * half_q + third_p * third_p * third_p;

    // `p` and `q` are differences of terms this large, so their rounding
    // error scales with these magnitudes rather than with `p` and `q`.
    let round = T::from_f64(16.0) * T::MACHINE_EPSILON;
    let p_mag = cb.abs() + ca * ca / three;
    let q_mag = T::TWO * (ca * ca * ca).abs() / T::from_f64(27.0)
        + (ca * cb).abs() / three
        + cc.abs();
    let disc_tol = round * (half_q.abs() * q_mag + third_p * third_p * p_mag);

    let mut xs = [T::ZERO; 3];
    let n = if disc < -disc_tol {
        let m = T::TWO * (-third_p).sqrt();
        let arg = crate::clamp(three * q / (p * m), -T::ONE, T::ONE);
        let theta = arg.acos() / three;
        let step = T::TWO * T::PI / three;
        for (k, x) in xs.iter_mut().enumerate() {
            let t = m * (theta - step * T::from_f64(k as f64)).cos();
            *x = polish(t - shift, ca, cb, cc);
        }
        3
    } else if disc > disc_tol {
        let s = disc.sqrt();
        let t = (-half_q + s).cbrt() + (-half_q - s).cbrt();
        xs[0] = polish(t - shift, ca, cb, cc);
        1
    } else if p.abs() <= round * p_mag {
        // Triple root.
        xs[0] = -shift;
        1
    } else {
        // Newton is ill-conditioned at the double root; only the simple
        // root is polished.
        xs[0] = polish(three * q / p - shift, ca, cb, cc);
        xs[1] = -three * q / (T::TWO * p) - shift;
        2
    };
    CubicRoots::from_unsorted(&xs[..n])
}

/// Newton iterations on the monic cubic `x³ + a x² + b x + c`.
fn polish<T: Scalar>(mut x: T, a: T, b: T, c: T) -> T {
    let f = |x: T| ((x + a) * x + b) * x + c;
    let df = |x: T| (T::from_f64(3.0) * x + T::TWO * a) * x + b;
    let mut fx = f(x);
    for _ in 0..4 {
        let slope = df(x);
        if slope == T::ZERO || fx == T::ZERO {
            break;
        }
        let next = x - fx / slope;
        let f_next = f(next);
        if f_next.abs() >= fx.abs() {
            break;
        }
        x = next;
        fx = f_next;
    }
    x
}

impl<'a, T: Scalar> IntoIterator for &'a CubicRoots<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(roots: &CubicRoots<f64>, expected: &[f64]) -> bool {
        roots.len() == expected.len()
            && roots
                .iter()
                .zip(expected)
                .all(|(r, e)| (r - e).abs() < 1e-9)
    }

    #[test]
    fn quadratic_branch_orderings() {
        assert_eq!(solve_quadratic(5.0, 5.0, -30.0), Some((2.0, -3.0)));
        assert_eq!(solve_quadratic(5.0, -5.0, -30.0), Some((3.0, -2.0)));
        assert_eq!(solve_quadratic(5.0, 0.0, -5.0), Some((1.0, -1.0)));
    }

    #[test]
    fn quadratic_linear_and_degenerate() {
        assert_eq!(solve_quadratic(0.0, 2.0, -4.0), Some((2.0, 2.0)));
        assert_eq!(solve_quadratic(0.0, 0.0, 1.0), None);
        assert_eq!(solve_quadratic(1.0_f32, 1.0, 1.0), None);
    }

    #[test]
    fn cubic_three_distinct_roots() {
        assert!(close(&solve_cubic(1.0, -6.0, 11.0, -6.0), &[1.0, 2.0, 3.0]));
        assert!(close(&solve_cubic(2.0, 0.0, -2.0, 0.0), &[-1.0, 0.0, 1.0]));
    }

    #[test]
    fn cubic_single_real_root() {
        assert!(close(&solve_cubic(1.0, 0.0, 0.0, -8.0), &[2.0]));
        assert!(close(&solve_cubic(1.0, 0.0, 1.0, 0.0), &[0.0]));
    }

    #[test]
    fn cubic_repeated_roots_reported_once() {
        assert_eq!(solve_cubic(1.0, -3.0, 3.0, -1.0).as_slice(), &[1.0]);
        assert_eq!(solve_cubic(1.0, 0.0, -3.0, 2.0).as_slice(), &[-2.0, 1.0]);
    }

    /// Expanded coefficients of `(x - r)² (x - s)`, rounded as a caller
    /// would compute them.
    fn double_then_simple(r: f64, s: f64) -> CubicRoots<f64> {
        solve_cubic(1.0, -(r + r + s), r * r + 2.0 * r * s, -(r * r * s))
    }

    #[test]
    fn cubic_inexact_double_roots_are_neither_lost_nor_split() {
        assert!(close(&double_then_simple(0.7, 1.3), &[0.7, 1.3]));
        assert!(close(&double_then_simple(2.0 / 3.0, 5.0), &[2.0 / 3.0, 5.0]));
        assert!(close(&double_then_simple(0.1, 0.3), &[0.1, 0.3]));
        assert!(close(&double_then_simple(1.3, -0.4), &[-0.4, 1.3]));
        assert!(close(&solve_cubic(1.0, -0.3, 0.03, -0.001), &[0.1]));
    }

    #[test]
    fn cubic_close_but_distinct_roots_stay_distinct() {
        let r = solve_cubic(1.0, -(1.0 + 1.001 + 3.0), 1.001 + 3.0 + 3.003, -3.003);
        assert!(close(&r, &[1.0, 1.001, 3.0]), "{r:?}");
    }

    #[test]
    fn cubic_degrades_to_quadratic() {
        assert_eq!(solve_cubic(0.0, 1.0, -3.0, 2.0).as_slice(), &[1.0, 2.0]);
        assert_eq!(solve_cubic(0.0, 0.0, 2.0, -4.0).as_slice(), &[2.0]);
        assert!(solve_cubic(0.0, 1.0, 0.0, 1.0).is_empty());
    }
}
