// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::Scalar;

/// 3D vector used for points, directions and normals.
///
/// * Components may represent either points or directions depending on the
///   calling context.
/// * Use [`crate::Mat4::transform_point`] for points (homogeneous `w = 1`)
///   and [`crate::Mat4::transform_direction`] for directions (homogeneous
///   `w = 0`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Vec3<T = f64> {
    data: [T; 3],
}

/// Single-precision 3D vector.
pub type Vec3f = Vec3<f32>;
/// Double-precision 3D vector.
pub type Vec3d = Vec3<f64>;

impl_vector!(Vec3, 3, x => 0, y => 1, z => 2);

impl<T: Scalar> Vec3<T> {
    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO, T::ZERO);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE);

    /// Cross product with another vector.
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_follows_right_hand_rule() {
        assert_eq!(Vec3d::UNIT_X.cross(&Vec3d::UNIT_Y), Vec3d::UNIT_Z);
        assert_eq!(Vec3d::UNIT_Y.cross(&Vec3d::UNIT_X), -Vec3d::UNIT_Z);
        let a = Vec3d::new(1.0, 2.0, 3.0);
        assert_eq!(a.cross(&a), Vec3d::ZERO);
    }

    #[test]
    fn metric_helpers_agree() {
        let a = Vec3d::new(1.0, 2.0, 2.0);
        assert_eq!(a.length(), 3.0);
        assert_eq!(a.length_squared(), 9.0);
        assert_eq!(a.distance(&Vec3d::ZERO), 3.0);
        assert_eq!(a.distance_squared(&Vec3d::ZERO), 9.0);
    }

    #[test]
    fn lerp_hits_endpoints_and_midpoint() {
        let a = Vec3d::new(0.0, 0.0, 0.0);
        let b = Vec3d::new(2.0, 4.0, -6.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_eq!(a.lerp(&b, 0.5), Vec3d::new(1.0, 2.0, -3.0));
    }

    #[test]
    fn cast_changes_precision() {
        let v = Vec3d::new(0.5, -1.25, 8.0);
        let f: Vec3f = v.cast();
        assert_eq!(f.to_array(), [0.5_f32, -1.25, 8.0]);
        assert_eq!(f.cast::<f64>(), v);
    }

    #[test]
    fn clamp_and_index() {
        let mut v = Vec3d::new(-2.0, 0.5, 9.0).clamp(0.0, 1.0);
        assert_eq!(v, Vec3d::new(0.0, 0.5, 1.0));
        v[1] = 7.0;
        assert_eq!(v[1], 7.0);
        assert!(v.is_valid());
        v[2] = f64::NAN;
        assert!(!v.is_valid());
    }
}
