// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::{Scalar, Vec2};

/// Off-diagonal magnitude at or below which the matrix is treated as diagonal.
pub const EIGEN_DIAGONAL_THRESHOLD: f64 = 1e-7;

/// Eigen-decomposition of a symmetric 2×2 matrix.
///
/// Invariants: `lambda1 <= lambda2`, and `e1`/`e2` are unit length and
/// belong to `lambda1`/`lambda2` respectively.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymmetricEigen2<T = f64> {
    /// Smaller eigenvalue.
    pub lambda1: T,
    /// Unit eigenvector of `lambda1`.
    pub e1: Vec2<T>,
    /// Larger eigenvalue.
    pub lambda2: T,
    /// Unit eigenvector of `lambda2`.
    pub e2: Vec2<T>,
}

/// Eigenvalues and eigenvectors of the symmetric matrix `[[e, f], [f, g]]`.
///
/// When `|f| <= EIGEN_DIAGONAL_THRESHOLD` the axes are returned directly,
/// ordered so that `lambda1 <= lambda2` (ties put `g` first). Otherwise
///
/// ```text
/// lambda1,2 = (e + g)/2 ∓ sqrt(((e + g)/2)² − (e g − f²))
/// ```
///
/// and the eigenvector formula is chosen by the sign of `(e − g)/2` so the
/// vector components never come from cancelling terms.
///
/// # Examples
/// ```
/// use cgm_core::solve_eigen_symm_2x2;
/// let r = solve_eigen_symm_2x2(2.0_f64, 1.0, 2.0);
/// assert!((r.lambda1 - 1.0).abs() < 1e-12);
/// assert!((r.lambda2 - 3.0).abs() < 1e-12);
/// ```
pub fn solve_eigen_symm_2x2<T: Scalar>(e: T, f: T, g: T) -> SymmetricEigen2<T> {
    if f.abs() <= T::from_f64(EIGEN_DIAGONAL_THRESHOLD) {
        return if e < g {
            SymmetricEigen2 {
                lambda1: e,
                e1: Vec2::UNIT_X,
                lambda2: g,
                e2: Vec2::UNIT_Y,
            }
        } else {
            SymmetricEigen2 {
                lambda1: g,
                e1: Vec2::UNIT_Y,
                lambda2: e,
                e2: Vec2::UNIT_X,
            }
        };
    }

    let tr2 = (e + g) * T::HALF;
    let det = e * g - f * f;
    let s = (tr2 * tr2 - det).max(T::ZERO).sqrt();
    let eg2 = (e - g) * T::HALF;
    let (e1, e2) = if eg2 < T::ZERO {
        (Vec2::new(eg2 - s, f), Vec2::new(f, -eg2 + s))
    } else {
        (Vec2::new(f, -eg2 - s), Vec2::new(eg2 + s, f))
    };
    SymmetricEigen2 {
        lambda1: tr2 - s,
        e1: e1.scale(T::ONE / e1.length()),
        lambda2: tr2 + s,
        e2: e2.scale(T::ONE / e2.length()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_input_returns_axes_in_order() {
        let r = solve_eigen_symm_2x2(5.0_f64, 0.0, -1.0);
        assert_eq!((r.lambda1, r.lambda2), (-1.0, 5.0));
        assert_eq!(r.e1, Vec2::UNIT_Y);
        assert_eq!(r.e2, Vec2::UNIT_X);
    }

    #[test]
    fn eigenpairs_satisfy_definition() {
        let (e, f, g) = (1.5_f64, -0.7, 4.0);
        let r = solve_eigen_symm_2x2(e, f, g);
        for (lambda, v) in [(r.lambda1, r.e1), (r.lambda2, r.e2)] {
            let mv = Vec2::new(e * v.x() + f * v.y(), f * v.x() + g * v.y());
            assert!(mv.approx_eq(&v.scale(lambda), 1e-12));
            assert!((v.length() - 1.0).abs() < 1e-12);
        }
        assert!(r.e1.dot(&r.e2).abs() < 1e-12);
    }
}
