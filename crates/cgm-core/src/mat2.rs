// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::{solve_eigen_symm_2x2, MathError, Scalar, SymmetricEigen2};

/// Column-major 2×2 matrix for planar linear maps and structure tensors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Mat2<T = f64> {
    data: [T; 4],
}

/// Single-precision 2×2 matrix.
pub type Mat2f = Mat2<f32>;
/// Double-precision 2×2 matrix.
pub type Mat2d = Mat2<f64>;

impl_matrix!(Mat2, 2, 4, Vec2);

impl<T: Scalar> Mat2<T> {
    /// Diagonal matrix `diag(sx, sy)`.
    pub fn from_scale(sx: T, sy: T) -> Self {
        Self::new([sx, T::ZERO, T::ZERO, sy])
    }

    /// Counter-clockwise rotation by `angle` radians.
    pub fn rotation(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([c, s, -s, c])
    }

    /// Returns `self * diag(sx, sy)`: column 0 scaled by `sx`, column 1 by `sy`.
    pub fn scaled(&self, sx: T, sy: T) -> Self {
        let d = self.data;
        Self::new([d[0] * sx, d[1] * sx, d[2] * sy, d[3] * sy])
    }

    /// Determinant.
    pub fn det(&self) -> T {
        self.at(0, 0) * self.at(1, 1) - self.at(0, 1) * self.at(1, 0)
    }

    /// Inverse, or [`MathError::Singular`] when the determinant is zero.
    pub fn inverse(&self) -> Result<Self, MathError> {
        let det = self.det();
        if det == T::ZERO {
            return Err(MathError::Singular);
        }
        let inv = T::ONE / det;
        Ok(Self::from_rows([
            [self.at(1, 1) * inv, -self.at(0, 1) * inv],
            [-self.at(1, 0) * inv, self.at(0, 0) * inv],
        ]))
    }

    /// Eigen-decomposition treating the matrix as symmetric.
    ///
    /// Only `m00`, `m01` and `m11` are read; `m10` is assumed equal to `m01`.
    pub fn eigen_symmetric(&self) -> SymmetricEigen2<T> {
        solve_eigen_symm_2x2(self.at(0, 0), self.at(0, 1), self.at(1, 1))
    }
}
