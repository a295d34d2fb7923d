// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::{Mat3, MathError, Quat, Scalar, Vec3};

/// Column‑major 4×4 matrix for affine and projective 3D transforms.
///
/// - Stored in column‑major order to align with GPU uploads.
/// - Helper methods treat points homogeneously (`w = 1`) and directions
///   with `w = 0`; [`Mat4::transform`] applies the full matrix to a `Vec4`.
///
/// # Examples
/// ```
/// use cgm_core::{Mat4, Vec3};
/// let t = Mat4::translation(5.0, -3.0, 2.0);
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Mat4<T = f64> {
    data: [T; 16],
}

/// Single-precision 4×4 matrix.
pub type Mat4f = Mat4<f32>;
/// Double-precision 4×4 matrix.
pub type Mat4d = Mat4<f64>;

impl_matrix!(Mat4, 4, 16, Vec4);

impl<T: Scalar> Mat4<T> {
    /// Builds a translation matrix.
    ///
    /// Column-major layout: translation occupies the last column.
    pub const fn translation(tx: T, ty: T, tz: T) -> Self {
        let (o, l) = (T::ZERO, T::ONE);
        Self {
            data: [
                l, o, o, o, // col 0
                o, l, o, o, // col 1
                o, o, l, o, // col 2
                tx, ty, tz, l, // col 3 (translation)
            ],
        }
    }

    /// Builds a non-uniform scale matrix.
    pub const fn scale(sx: T, sy: T, sz: T) -> Self {
        let (o, l) = (T::ZERO, T::ONE);
        Self {
            data: [
                sx, o, o, o, // col 0
                o, sy, o, o, // col 1
                o, o, sz, o, // col 2
                o, o, o, l, // col 3
            ],
        }
    }

    /// Builds a rotation matrix from an axis and angle in radians.
    ///
    /// A zero-length axis yields the identity rotation.
    pub fn rotation_axis_angle(axis: Vec3<T>, angle: T) -> Self {
        Self::from_quat(&Quat::from_axis_angle(axis, angle))
    }

    /// Builds a rotation matrix around the X axis by `angle` radians.
    pub fn rotation_x(angle: T) -> Self {
        Self::from_mat3(&Mat3::rotation_x(angle))
    }

    /// Builds a rotation matrix around the Y axis by `angle` radians.
    pub fn rotation_y(angle: T) -> Self {
        Self::from_mat3(&Mat3::rotation_y(angle))
    }

    /// Builds a rotation matrix around the Z axis by `angle` radians.
    pub fn rotation_z(angle: T) -> Self {
        Self::from_mat3(&Mat3::rotation_z(angle))
    }

    /// Constructs a rotation matrix from a quaternion.
    ///
    /// This simply forwards to [`Quat::to_mat4`].
    pub fn from_quat(q: &Quat<T>) -> Self {
        q.to_mat4()
    }

    /// Builds a rotation matrix from Euler angles in radians.
    ///
    /// Ordering: `R = R_y(yaw) * R_x(pitch) * R_z(roll)` using column‑major,
    /// left‑multiplication semantics.
    ///
    /// # Examples
    /// ```
    /// use core::f64::consts::FRAC_PI_2;
    /// use cgm_core::{Mat4, Vec3};
    /// // Yaw=90°: +Z maps to +X
    /// let r = Mat4::rotation_from_euler(FRAC_PI_2, 0.0, 0.0);
    /// let v = r.transform_direction(&Vec3::UNIT_Z);
    /// assert!((v.x() - 1.0).abs() < 1e-12);
    /// ```
    pub fn rotation_from_euler(yaw: T, pitch: T, roll: T) -> Self {
        Self::rotation_y(yaw)
            .multiply(&Self::rotation_x(pitch))
            .multiply(&Self::rotation_z(roll))
    }

    /// Embeds a 3×3 matrix in the upper-left block of the identity.
    pub fn from_mat3(m: &Mat3<T>) -> Self {
        let mut out = Self::identity();
        for row in 0..3 {
            for col in 0..3 {
                out.set(row, col, m.at(row, col));
            }
        }
        out
    }

    /// Upper-left 3×3 block.
    pub fn to_mat3(&self) -> Mat3<T> {
        Mat3::from_mat4(self)
    }

    /// Transforms a point (assumes `w = 1`, no perspective divide).
    pub fn transform_point(&self, point: &Vec3<T>) -> Vec3<T> {
        let (x, y, z) = (point.x(), point.y(), point.z());
        let row = |r| self.at(r, 0) * x + self.at(r, 1) * y + self.at(r, 2) * z + self.at(r, 3);
        Vec3::new(row(0), row(1), row(2))
    }

    /// Transforms a direction vector (ignores translation, `w = 0`).
    pub fn transform_direction(&self, direction: &Vec3<T>) -> Vec3<T> {
        let (x, y, z) = (direction.x(), direction.y(), direction.z());
        let row = |r| self.at(r, 0) * x + self.at(r, 1) * y + self.at(r, 2) * z;
        Vec3::new(row(0), row(1), row(2))
    }

    /// Determinant of the 3×3 submatrix left after deleting `row` and `col`.
    fn minor(&self, row: usize, col: usize) -> T {
        let mut sub = [[T::ZERO; 3]; 3];
        for (si, r) in (0..4).filter(|&r| r != row).enumerate() {
            for (sj, c) in (0..4).filter(|&c| c != col).enumerate() {
                sub[si][sj] = self.at(r, c);
            }
        }
        Mat3::from_rows(sub).det()
    }

    fn cofactor(&self, row: usize, col: usize) -> T {
        let m = self.minor(row, col);
        if (row + col) % 2 == 0 {
            m
        } else {
            -m
        }
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn det(&self) -> T {
        let mut sum = T::ZERO;
        for col in 0..4 {
            sum += self.at(0, col) * self.cofactor(0, col);
        }
        sum
    }

    /// Classical adjugate: the transposed matrix of cofactors.
    pub fn adjoint(&self) -> Self {
        let mut out = Self::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                out.set(row, col, self.cofactor(col, row));
            }
        }
        out
    }

    /// General inverse by Gauss-Jordan elimination with partial pivoting.
    ///
    /// Fails with [`MathError::Singular`] when a pivot column is entirely zero.
    pub fn inverse(&self) -> Result<Self, MathError> {
        let mut m = self.to_rows();
        let mut inv = Self::identity().to_rows();
        for j in 0..4 {
            let mut pivot = None;
            let mut best = T::ZERO;
            for (i, row) in m.iter().enumerate().skip(j) {
                let v = row[j].abs();
                if best < v {
                    best = v;
                    pivot = Some(i);
                }
            }
            let p = pivot.ok_or(MathError::Singular)?;
            if p != j {
                m.swap(j, p);
                inv.swap(j, p);
            }
            let scale = T::ONE / m[j][j];
            for k in 0..4 {
                m[j][k] *= scale;
                inv[j][k] *= scale;
            }
            for i in 0..4 {
                if i == j {
                    continue;
                }
                let factor = m[i][j];
                for k in 0..4 {
                    let (mjk, ijk) = (m[j][k], inv[j][k]);
                    m[i][k] -= mjk * factor;
                    inv[i][k] -= ijk * factor;
                }
            }
        }
        Ok(Self::from_rows(inv))
    }

    /// Inverse as `adjoint / det`; fails when the determinant is zero.
    pub fn inverse_direct(&self) -> Result<Self, MathError> {
        let det = self.det();
        if det == T::ZERO {
            return Err(MathError::Singular);
        }
        Ok(self.adjoint() * (T::ONE / det))
    }

    /// Inverse of an affine matrix (last row `0 0 0 1`).
    ///
    /// Inverts the upper 3×3 block `A` (see [`Mat3::inverse`]) and sets the
    /// translation to `-A⁻¹ t` (Wu, Graphics Gems II). The last row of the
    /// input is not read.
    pub fn inverse_affine(&self) -> Result<Self, MathError> {
        let a_inv = self.to_mat3().inverse()?;
        let t = Vec3::new(self.at(0, 3), self.at(1, 3), self.at(2, 3));
        let t_inv = -a_inv.transform(&t);
        let mut out = Self::from_mat3(&a_inv);
        out.set(0, 3, t_inv.x());
        out.set(1, 3, t_inv.y());
        out.set(2, 3, t_inv.z());
        Ok(out)
    }

    /// Orthographic projection mapping the box to the `[-1, 1]` clip cube.
    pub fn ortho(left: T, right: T, bottom: T, top: T, z_near: T, z_far: T) -> Self {
        let mut m = Self::identity();
        m.set(0, 0, T::TWO / (right - left));
        m.set(0, 3, -(right + left) / (right - left));
        m.set(1, 1, T::TWO / (top - bottom));
        m.set(1, 3, -(top + bottom) / (top - bottom));
        m.set(2, 2, -T::TWO / (z_far - z_near));
        m.set(2, 3, -(z_far + z_near) / (z_far - z_near));
        m
    }

    /// Perspective projection of the given view frustum.
    pub fn frustum(left: T, right: T, bottom: T, top: T, z_near: T, z_far: T) -> Self {
        let mut m = Self::ZERO;
        m.set(0, 0, T::TWO * z_near / (right - left));
        m.set(0, 2, (right + left) / (right - left));
        m.set(1, 1, T::TWO * z_near / (top - bottom));
        m.set(1, 2, (top + bottom) / (top - bottom));
        m.set(2, 2, -(z_far + z_near) / (z_far - z_near));
        m.set(2, 3, -T::TWO * z_far * z_near / (z_far - z_near));
        m.set(3, 2, -T::ONE);
        m
    }

    /// Symmetric perspective projection.
    ///
    /// `fovy` is the vertical field of view in radians and `aspect` is
    /// `width / height`.
    pub fn perspective(fovy: T, aspect: T, z_near: T, z_far: T) -> Self {
        let f = T::ONE / (fovy * T::HALF).tan();
        let mut m = Self::ZERO;
        m.set(0, 0, f / aspect);
        m.set(1, 1, f);
        m.set(2, 2, -(z_far + z_near) / (z_far - z_near));
        m.set(2, 3, -T::TWO * z_far * z_near / (z_far - z_near));
        m.set(3, 2, -T::ONE);
        m
    }

    /// View matrix placing the camera at `eye` looking toward `target`.
    ///
    /// The camera looks down its local -Z with `up` roughly +Y. Fails with
    /// [`MathError::Degenerate`] when `eye == target` or `up` is parallel to
    /// the view direction.
    pub fn look_at(eye: &Vec3<T>, target: &Vec3<T>, up: &Vec3<T>) -> Result<Self, MathError> {
        let f = target.sub(eye).try_normalize()?;
        let s = f.cross(up).try_normalize()?;
        let u = s.cross(&f);
        let mut m = Self::identity();
        for (col, (sc, (uc, fc))) in s
            .to_array()
            .into_iter()
            .zip(u.to_array().into_iter().zip(f.to_array()))
            .enumerate()
        {
            m.set(0, col, sc);
            m.set(1, col, uc);
            m.set(2, col, -fc);
        }
        m.set(0, 3, -s.dot(eye));
        m.set(1, 3, -u.dot(eye));
        m.set(2, 3, f.dot(eye));
        Ok(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec4;

    fn sample() -> Mat4d {
        Mat4d::from_rows([
            [2.0, 0.0, 1.0, 3.0],
            [1.0, 3.0, 0.0, -1.0],
            [0.0, 1.0, 4.0, 2.0],
            [1.0, 0.0, 0.0, 1.0],
        ])
    }

    #[test]
    fn all_inverses_agree() {
        let m = sample();
        let a = m.inverse().unwrap_or_default();
        let b = m.inverse_direct().unwrap_or_default();
        assert!(a.approx_eq(&b, 1e-12));
        assert!(m.multiply(&a).is_identity(1e-12));
    }

    #[test]
    fn affine_inverse_matches_general() {
        let m = Mat4d::translation(1.0, -2.0, 3.0)
            * Mat4d::rotation_axis_angle(Vec3::new(1.0, 1.0, 0.0), 0.6)
            * Mat4d::scale(2.0, 3.0, 0.5);
        let general = m.inverse().unwrap_or_default();
        let affine = m.inverse_affine().unwrap_or_default();
        assert!(general.approx_eq(&affine, 1e-12));
    }

    #[test]
    fn singular_matrix_is_rejected() {
        let m = Mat4d::scale(1.0, 0.0, 1.0);
        assert_eq!(m.inverse(), Err(MathError::Singular));
        assert_eq!(m.inverse_direct(), Err(MathError::Singular));
        assert_eq!(m.inverse_affine(), Err(MathError::Singular));
    }

    #[test]
    fn det_of_scale_is_product() {
        assert_eq!(Mat4d::scale(2.0, 3.0, 4.0).det(), 24.0);
        assert!((sample().det() - sample().transpose().det()).abs() < 1e-12);
    }

    #[test]
    fn perspective_maps_near_and_far_planes() {
        let p = Mat4d::perspective(core::f64::consts::FRAC_PI_2, 2.0, 1.0, 10.0);
        let near = p.transform(&Vec4::new(0.0, 0.0, -1.0, 1.0));
        let far = p.transform(&Vec4::new(0.0, 0.0, -10.0, 1.0));
        assert!((near.z() / near.w() + 1.0).abs() < 1e-12);
        assert!((far.z() / far.w() - 1.0).abs() < 1e-12);
        assert!((p.at(0, 0) - 0.5).abs() < 1e-12);
        assert!((p.at(1, 1) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn symmetric_frustum_matches_perspective() {
        let fovy = 1.0_f64;
        let top = (fovy * 0.5).tan();
        let a = Mat4d::frustum(-1.5 * top, 1.5 * top, -top, top, 1.0, 100.0);
        let b = Mat4d::perspective(fovy, 1.5, 1.0, 100.0);
        assert!(a.approx_eq(&b, 1e-12));
    }

    #[test]
    fn ortho_maps_box_corners_to_clip_cube() {
        let o = Mat4d::ortho(-2.0, 6.0, 0.0, 4.0, 1.0, 11.0);
        let lo = o.transform_point(&Vec3::new(-2.0, 0.0, -1.0));
        let hi = o.transform_point(&Vec3::new(6.0, 4.0, -11.0));
        assert!(lo.approx_eq(&Vec3::new(-1.0, -1.0, -1.0), 1e-12));
        assert!(hi.approx_eq(&Vec3::new(1.0, 1.0, 1.0), 1e-12));
    }

    #[test]
    fn look_at_moves_target_onto_negative_z() {
        let eye = Vec3::new(3.0, 2.0, 5.0);
        let target = Vec3::new(-1.0, 0.0, 1.0);
        let v = Mat4d::look_at(&eye, &target, &Vec3::UNIT_Y).unwrap_or_default();
        let t = v.transform_point(&target);
        assert!(t.x().abs() < 1e-12 && t.y().abs() < 1e-12);
        assert!((t.z() + eye.distance(&target)).abs() < 1e-12);
        assert!(v.transform_point(&eye).approx_eq(&Vec3::ZERO, 1e-12));
        assert_eq!(
            Mat4d::look_at(&eye, &eye, &Vec3::UNIT_Y),
            Err(MathError::Degenerate)
        );
    }
}
