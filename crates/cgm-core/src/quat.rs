// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::{Mat3, Mat4, MathError, Scalar, Vec3};

/// Quaternion stored as `(x, y, z, w)` with `w` the scalar part.
///
/// * All angles are expressed in radians.
/// * Rotation helpers accept non-unit quaternions where noted; use
///   [`Quat::normalize`] before long composition chains.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Quat<T = f64> {
    data: [T; 4],
}

/// Single-precision quaternion.
pub type Quatf = Quat<f32>;
/// Double-precision quaternion.
pub type Quatd = Quat<f64>;

impl<T: Scalar> Quat<T> {
    /// Creates a quaternion from components.
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE)
    }

    /// Builds a quaternion from a scalar part and a vector part.
    pub fn from_parts(w: T, v: Vec3<T>) -> Self {
        Self::new(v.x(), v.y(), v.z(), w)
    }

    /// Returns the quaternion as an `(x, y, z, w)` array.
    pub fn to_array(self) -> [T; 4] {
        self.data
    }

    /// `x` component of the vector part.
    pub fn x(&self) -> T {
        self.data[0]
    }

    /// `y` component of the vector part.
    pub fn y(&self) -> T {
        self.data[1]
    }

    /// `z` component of the vector part.
    pub fn z(&self) -> T {
        self.data[2]
    }

    /// Scalar component.
    pub fn w(&self) -> T {
        self.data[3]
    }

    /// Scalar part (same as [`Quat::w`]).
    pub fn scalar(&self) -> T {
        self.data[3]
    }

    /// Vector part `(x, y, z)`.
    pub fn vector(&self) -> Vec3<T> {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }

    /// Constructs a quaternion from a rotation axis and angle in radians.
    ///
    /// Returns the identity quaternion when the axis length is ≤ `EPSILON`.
    pub fn from_axis_angle(axis: Vec3<T>, angle: T) -> Self {
        let Ok(norm_axis) = axis.try_normalize() else {
            return Self::identity();
        };
        let (sin_half, cos_half) = (angle * T::HALF).sin_cos();
        Self::from_parts(cos_half, norm_axis.scale(sin_half))
    }

    /// Quaternion of a rotation matrix; see [`Mat3::to_quat`].
    pub fn from_mat3(m: &Mat3<T>) -> Self {
        m.to_quat()
    }

    /// Rotation matrix (3×3); see [`Mat3::from_quat`].
    pub fn to_mat3(&self) -> Mat3<T> {
        Mat3::from_quat(self)
    }

    /// Rotation matrix (column-major 4×4).
    pub fn to_mat4(&self) -> Mat4<T> {
        Mat4::from_mat3(&self.to_mat3())
    }

    /// Hamilton product of two quaternions (`self * other`).
    ///
    /// Applying the product to a vector rotates by `other` first, then by
    /// `self`. Quaternion multiplication is non‑commutative.
    pub fn multiply(&self, other: &Self) -> Self {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = other.data;
        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Four-dimensional dot product.
    pub fn dot(&self, other: &Self) -> T {
        let mut sum = T::ZERO;
        for (a, b) in self.data.iter().zip(other.data) {
            sum += *a * b;
        }
        sum
    }

    /// Squared norm.
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Norm.
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Normalises the quaternion; returns identity when norm is ~0.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= T::EPSILON {
            return Self::identity();
        }
        *self * (T::ONE / len)
    }

    /// Conjugate `(-x, -y, -z, w)`.
    pub fn conjugate(&self) -> Self {
        Self::new(-self.data[0], -self.data[1], -self.data[2], self.data[3])
    }

    /// Multiplicative inverse `conjugate / |q|²`.
    pub fn inverse(&self) -> Result<Self, MathError> {
        let l2 = self.length_squared();
        if l2 <= T::ZERO {
            return Err(MathError::Degenerate);
        }
        Ok(self.conjugate() * (T::ONE / l2))
    }

    /// Logarithm of a unit quaternion: `(axis * angle / 2, 0)`.
    pub fn log(&self) -> Self {
        let v = self.vector();
        let lv = v.length();
        if lv > T::ZERO {
            let s = lv.atan2(self.w()) / lv;
            return Self::from_parts(T::ZERO, v * s);
        }
        Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO)
    }

    /// Exponential of a pure quaternion; inverse of [`Quat::log`].
    pub fn exp(&self) -> Self {
        let v = self.vector();
        let omega = v.length();
        if omega > T::ZERO {
            let (sin, cos) = omega.sin_cos();
            return Self::from_parts(cos, v * (sin / omega));
        }
        Self::identity()
    }

    /// Rotation angle in radians, `2 atan2(|v|, w)`.
    pub fn angle(&self) -> T {
        T::TWO * self.vector().length().atan2(self.w())
    }

    /// Normalized rotation axis; zero for the identity rotation.
    pub fn axis(&self) -> Vec3<T> {
        self.vector().normalize()
    }

    /// Rotates `v` by this quaternion (`q v q⁻¹`, assuming `q` is unit).
    pub fn rotate(&self, v: &Vec3<T>) -> Vec3<T> {
        let p = Self::from_parts(T::ZERO, *v);
        self.multiply(&p).multiply(&self.conjugate()).vector()
    }

    /// Spherical linear interpolation along the shorter arc.
    ///
    /// Falls back to normalized linear interpolation when the inputs are
    /// nearly parallel.
    pub fn slerp(&self, other: &Self, t: T) -> Self {
        let mut cos_theta = self.dot(other);
        let mut end = *other;
        if cos_theta < T::ZERO {
            cos_theta = -cos_theta;
            end = -end;
        }
        if cos_theta > T::ONE - T::EPSILON {
            return (*self * (T::ONE - t) + end * t).normalize();
        }
        let theta = (cos_theta.min(T::ONE)).acos();
        let sin_theta = theta.sin();
        let a = ((T::ONE - t) * theta).sin() / sin_theta;
        let b = (t * theta).sin() / sin_theta;
        *self * a + end * b
    }

    /// `true` when every component differs from `other` by at most `epsilon`.
    pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
        self.data
            .iter()
            .zip(other.data)
            .all(|(a, b)| crate::almost_equal(*a, b, epsilon))
    }
}

impl<T: Scalar> Default for Quat<T> {
    fn default() -> Self {
        Self::identity()
    }
}

/// Components are taken verbatim as `(x, y, z, w)`; normalization is not
/// enforced by this conversion.
impl<T: Scalar> From<[T; 4]> for Quat<T> {
    fn from(value: [T; 4]) -> Self {
        Self { data: value }
    }
}

impl<T: Scalar> core::ops::Mul for Quat<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: Scalar> core::ops::Mul<T> for Quat<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::from(self.data.map(|c| c * rhs))
    }
}

impl<T: Scalar> core::ops::Div<T> for Quat<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        Self::from(self.data.map(|c| c / rhs))
    }
}

impl<T: Scalar> core::ops::Add for Quat<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let mut out = self.data;
        for (a, b) in out.iter_mut().zip(rhs.data) {
            *a += b;
        }
        Self::from(out)
    }
}

impl<T: Scalar> core::ops::Sub for Quat<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<T: Scalar> core::ops::Neg for Quat<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::from(self.data.map(|c| -c))
    }
}

impl<T: Scalar> core::fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        crate::write_spaced(f, &self.data)
    }
}

impl<T: Scalar> core::str::FromStr for Quat<T> {
    type Err = crate::ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::error::parse_components::<T, 4>(s).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn degenerate_axis_yields_identity() {
        let q = Quatd::from_axis_angle(Vec3::splat(1e-9), 1.0);
        assert_eq!(q, Quatd::identity());
        assert_eq!(Quatd::new(0.0, 0.0, 0.0, 0.0).normalize(), Quatd::identity());
    }

    #[test]
    fn rotate_agrees_with_matrix() {
        let q = Quatd::from_axis_angle(Vec3::new(1.0, -2.0, 0.5), 1.1);
        let v = Vec3::new(0.3, 4.0, -2.0);
        let by_quat = q.rotate(&v);
        let by_mat = q.to_mat3().transform(&v);
        assert!(by_quat.approx_eq(&by_mat, 1e-12));
        assert!((by_quat.length() - v.length()).abs() < 1e-12);
    }

    #[test]
    fn angle_and_axis_recover_construction() {
        let q = Quatd::from_axis_angle(Vec3::new(0.0, 0.0, 2.0), 0.75);
        assert!((q.angle() - 0.75).abs() < 1e-12);
        assert!(q.axis().approx_eq(&Vec3::UNIT_Z, 1e-12));
        assert_eq!(q.scalar(), q.w());
    }

    #[test]
    fn inverse_composes_to_identity() {
        let q = Quatd::new(1.0, 2.0, 3.0, 4.0);
        let inv = q.inverse().unwrap_or_default();
        assert!((q * inv).approx_eq(&Quatd::identity(), 1e-12));
        assert_eq!(
            Quatd::new(0.0, 0.0, 0.0, 0.0).inverse(),
            Err(MathError::Degenerate)
        );
    }

    #[test]
    fn log_and_exp_invert_each_other() {
        let q = Quatd::from_axis_angle(Vec3::new(1.0, 1.0, 1.0), 2.0);
        let l = q.log();
        assert_eq!(l.w(), 0.0);
        assert!((l.vector().length() - 1.0).abs() < 1e-12);
        assert!(l.exp().approx_eq(&q, 1e-12));
        assert_eq!(Quatd::identity().log().exp(), Quatd::identity());
    }

    #[test]
    fn slerp_halfway_halves_the_angle() {
        let a = Quatd::identity();
        let b = Quatd::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_2);
        let mid = a.slerp(&b, 0.5);
        let expected = Quatd::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_2 * 0.5);
        assert!(mid.approx_eq(&expected, 1e-12));
        assert!(a.slerp(&b, 0.0).approx_eq(&a, 1e-12));
        assert!(a.slerp(&b, 1.0).approx_eq(&b, 1e-12));
    }

    #[test]
    fn slerp_takes_shorter_arc() {
        let a = Quatd::identity();
        let b = -Quatd::from_axis_angle(Vec3::UNIT_X, PI / 3.0);
        let mid = a.slerp(&b, 0.5);
        assert!((mid.angle() - PI / 6.0).abs() < 1e-12);
    }

    #[test]
    fn multiply_is_non_commutative() {
        let yaw = Quatd::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_2);
        let pitch = Quatd::from_axis_angle(Vec3::UNIT_X, FRAC_PI_2);
        assert_ne!(yaw.multiply(&pitch), pitch.multiply(&yaw));
    }
}
