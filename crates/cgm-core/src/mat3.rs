// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::{MathError, Mat4, Quat, Scalar, Vec3};

/// Column-major 3×3 matrix for rotations, scales and linear 3D maps.
///
/// - Rotation helpers agree with [`Quat`] conversions: `Mat3::from_quat(q)`
///   and `q.rotate(v)` move vectors identically.
/// - [`Mat3::inverse`] rejects numerically singular inputs instead of
///   returning a matrix full of infinities.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Mat3<T = f64> {
    data: [T; 9],
}

/// Single-precision 3×3 matrix.
pub type Mat3f = Mat3<f32>;
/// Double-precision 3×3 matrix.
pub type Mat3d = Mat3<f64>;

impl_matrix!(Mat3, 3, 9, Vec3);

fn det2<T: Scalar>(a: T, b: T, c: T, d: T) -> T {
    a * d - b * c
}

impl<T: Scalar> Mat3<T> {
    /// Diagonal matrix `diag(sx, sy, sz)`.
    pub fn from_scale(sx: T, sy: T, sz: T) -> Self {
        Self::from_rows([
            [sx, T::ZERO, T::ZERO],
            [T::ZERO, sy, T::ZERO],
            [T::ZERO, T::ZERO, sz],
        ])
    }

    /// Rotation about `axis` by `angle` radians.
    ///
    /// The axis is normalized internally; a zero-length axis yields the
    /// identity.
    pub fn from_axis_angle(axis: Vec3<T>, angle: T) -> Self {
        let Ok(u) = axis.try_normalize() else {
            return Self::identity();
        };
        let (s, c) = angle.sin_cos();
        let t = T::ONE - c;
        let (x, y, z) = (u.x(), u.y(), u.z());
        Self::from_rows([
            [c + t * x * x, t * x * y - s * z, t * x * z + s * y],
            [t * y * x + s * z, c + t * y * y, t * y * z - s * x],
            [t * z * x - s * y, t * z * y + s * x, c + t * z * z],
        ])
    }

    /// Rotation matrix of a quaternion.
    ///
    /// The quaternion need not be unit length: it is scaled by `2 / |q|²`.
    /// A zero quaternion yields the identity.
    pub fn from_quat(q: &Quat<T>) -> Self {
        let l = q.length_squared();
        if l <= T::ZERO {
            return Self::identity();
        }
        let s = T::TWO / l;
        let (qx, qy, qz, qw) = (q.x(), q.y(), q.z(), q.w());
        let (xs, ys, zs) = (qx * s, qy * s, qz * s);
        let (wx, wy, wz) = (qw * xs, qw * ys, qw * zs);
        let (xx, xy, xz) = (qx * xs, qx * ys, qx * zs);
        let (yy, yz, zz) = (qy * ys, qy * zs, qz * zs);
        Self::from_rows([
            [T::ONE - (yy + zz), xy - wz, xz + wy],
            [xy + wz, T::ONE - (xx + zz), yz - wx],
            [xz - wy, yz + wx, T::ONE - (xx + yy)],
        ])
    }

    /// Upper-left 3×3 block of a 4×4 matrix.
    pub fn from_mat4(m: &Mat4<T>) -> Self {
        let mut out = Self::ZERO;
        for row in 0..3 {
            for col in 0..3 {
                out.set(row, col, m.at(row, col));
            }
        }
        out
    }

    /// Rotation about +X by `angle` radians.
    pub fn rotation_x(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Self::new([
            l, o, o, // col 0
            o, c, s, // col 1
            o, -s, c, // col 2
        ])
    }

    /// Rotation about +Y by `angle` radians.
    pub fn rotation_y(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Self::new([
            c, o, -s, // col 0
            o, l, o, // col 1
            s, o, c, // col 2
        ])
    }

    /// Rotation about +Z by `angle` radians.
    pub fn rotation_z(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Self::new([
            c, s, o, // col 0
            -s, c, o, // col 1
            o, o, l, // col 2
        ])
    }

    /// Dyadic (outer) product `u vᵀ`.
    pub fn outer(u: &Vec3<T>, v: &Vec3<T>) -> Self {
        let mut out = Self::ZERO;
        for row in 0..3 {
            for col in 0..3 {
                out.set(row, col, u[row] * v[col]);
            }
        }
        out
    }

    /// Returns `self * diag(sx, sy, sz)`.
    pub fn scaled(&self, sx: T, sy: T, sz: T) -> Self {
        let mut out = *self;
        out.set_col(0, self.col(0) * sx);
        out.set_col(1, self.col(1) * sy);
        out.set_col(2, self.col(2) * sz);
        out
    }

    /// Returns `self * R` where `R` rotates about `axis` by `angle` radians.
    pub fn rotated(&self, axis: Vec3<T>, angle: T) -> Self {
        self.multiply(&Self::from_axis_angle(axis, angle))
    }

    /// Returns `self * R(q)`.
    pub fn rotated_by_quat(&self, q: &Quat<T>) -> Self {
        self.multiply(&Self::from_quat(q))
    }

    /// Determinant.
    pub fn det(&self) -> T {
        let m = |r, c| self.at(r, c);
        m(0, 0) * det2(m(1, 1), m(1, 2), m(2, 1), m(2, 2))
            - m(0, 1) * det2(m(1, 0), m(1, 2), m(2, 0), m(2, 2))
            + m(0, 2) * det2(m(1, 0), m(1, 1), m(2, 0), m(2, 1))
    }

    /// Classical adjugate: the transposed matrix of cofactors.
    ///
    /// `self * self.adjoint() == det * I`.
    pub fn adjoint(&self) -> Self {
        let m = |r, c| self.at(r, c);
        let cofactors = Self::from_rows([
            [
                det2(m(1, 1), m(1, 2), m(2, 1), m(2, 2)),
                -det2(m(1, 0), m(1, 2), m(2, 0), m(2, 2)),
                det2(m(1, 0), m(1, 1), m(2, 0), m(2, 1)),
            ],
            [
                -det2(m(0, 1), m(0, 2), m(2, 1), m(2, 2)),
                det2(m(0, 0), m(0, 2), m(2, 0), m(2, 2)),
                -det2(m(0, 0), m(0, 1), m(2, 0), m(2, 1)),
            ],
            [
                det2(m(0, 1), m(0, 2), m(1, 1), m(1, 2)),
                -det2(m(0, 0), m(0, 2), m(1, 0), m(1, 2)),
                det2(m(0, 0), m(0, 1), m(1, 0), m(1, 1)),
            ],
        ]);
        cofactors.transpose()
    }

    /// Inverse, or [`MathError::Singular`].
    ///
    /// The determinant's six terms are accumulated into positive and
    /// negative sums; the matrix is singular when the determinant is zero
    /// or `|det / (pos - neg)| < 1e-15`.
    pub fn inverse(&self) -> Result<Self, MathError> {
        let m = |r: usize, c: usize| self.at(r, c);
        let mut pos = T::ZERO;
        let mut neg = T::ZERO;
        for i in 0..3 {
            for term in [
                m(i, 0) * m((i + 1) % 3, 1) * m((i + 2) % 3, 2),
                -m(i, 0) * m((i + 2) % 3, 1) * m((i + 1) % 3, 2),
            ] {
                if term >= T::ZERO {
                    pos += term;
                } else {
                    neg += term;
                }
            }
        }
        let det = pos + neg;
        if det == T::ZERO || (det / (pos - neg)).abs() < T::from_f64(1e-15) {
            return Err(MathError::Singular);
        }
        Ok(self.adjoint() * (T::ONE / det))
    }

    /// Quaternion of a rotation matrix.
    ///
    /// Uses the trace when positive, otherwise the largest diagonal element,
    /// keeping the square root argument away from zero.
    pub fn to_quat(&self) -> Quat<T> {
        let m = |r: usize, c: usize| self.at(r, c);
        let quarter = T::from_f64(0.25);
        let tr = m(0, 0) + m(1, 1) + m(2, 2);
        if tr > T::ZERO {
            let w = T::HALF * (tr + T::ONE).sqrt();
            let s = quarter / w;
            return Quat::new(
                (m(2, 1) - m(1, 2)) * s,
                (m(0, 2) - m(2, 0)) * s,
                (m(1, 0) - m(0, 1)) * s,
                w,
            );
        }
        let mut i = 0;
        if m(1, 1) > m(0, 0) {
            i = 1;
        }
        if m(2, 2) > m(i, i) {
            i = 2;
        }
        let j = (i + 1) % 3;
        let k = (j + 1) % 3;
        let mut q = [T::ZERO; 4];
        q[i] = T::HALF * (m(i, i) - m(j, j) - m(k, k) + T::ONE).sqrt();
        let s = quarter / q[i];
        q[3] = (m(k, j) - m(j, k)) * s;
        q[j] = (m(j, i) + m(i, j)) * s;
        q[k] = (m(k, i) + m(i, k)) * s;
        Quat::from(q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::FRAC_PI_2;

    #[test]
    fn axis_angle_matches_axis_rotations() {
        let a = Mat3d::from_axis_angle(Vec3::UNIT_Z, FRAC_PI_2);
        assert!(a.approx_eq(&Mat3d::rotation_z(FRAC_PI_2), 1e-12));
        let b = Mat3d::from_axis_angle(Vec3::new(3.0, 0.0, 0.0), 0.7);
        assert!(b.approx_eq(&Mat3d::rotation_x(0.7), 1e-12));
        assert_eq!(Mat3d::from_axis_angle(Vec3::ZERO, 1.0), Mat3d::identity());
    }

    #[test]
    fn axis_rotations_store_rotated_basis_as_columns() {
        let (s, c) = 0.5_f64.sin_cos();
        assert_eq!(Mat3d::rotation_x(0.5).col(1), Vec3::new(0.0, c, s));
        assert_eq!(Mat3d::rotation_y(0.5).col(0), Vec3::new(c, 0.0, -s));
        assert_eq!(Mat3d::rotation_z(0.5).col(0), Vec3::new(c, s, 0.0));
        assert_eq!(Mat3d::rotation_z(0.5).row(0), Vec3::new(c, -s, 0.0));
    }

    #[test]
    fn adjoint_times_matrix_is_det_identity() {
        let m = Mat3d::from_rows([[2.0, -1.0, 0.0], [1.0, 3.0, 4.0], [0.5, 0.0, 1.0]]);
        let prod = m.multiply(&m.adjoint());
        assert!(prod.approx_eq(&Mat3d::diagonal(m.det()), 1e-12));
    }

    #[test]
    fn inverse_rejects_singular() {
        let s = Mat3d::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 1.0]]);
        assert_eq!(s.inverse(), Err(MathError::Singular));
        let r = Mat3d::rotation_y(0.3);
        let inv = r.inverse().unwrap_or_default();
        assert!(inv.approx_eq(&r.transpose(), 1e-12));
    }

    #[test]
    fn outer_product_entries() {
        let m = Mat3d::outer(&Vec3::new(1.0, 2.0, 3.0), &Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(m.row(1), Vec3::new(8.0, 10.0, 12.0));
        assert_eq!(m.det(), 0.0);
    }

    #[test]
    fn scaled_scales_columns() {
        let m = Mat3d::identity().scaled(2.0, 3.0, 4.0);
        assert_eq!(m, Mat3d::from_scale(2.0, 3.0, 4.0));
    }

    #[test]
    fn quat_round_trip_through_every_branch() {
        for (axis, angle) in [
            (Vec3::new(1.0, 2.0, 3.0), 0.4),
            (Vec3::UNIT_X, 3.0),
            (Vec3::UNIT_Y, 3.0),
            (Vec3::UNIT_Z, 3.0),
        ] {
            let m = Mat3d::from_axis_angle(axis, angle);
            let back = Mat3d::from_quat(&m.to_quat());
            assert!(back.approx_eq(&m, 1e-12), "axis {axis} angle {angle}");
        }
    }
}
