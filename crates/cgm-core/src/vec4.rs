// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::{Scalar, Vec3};

/// Homogeneous 4D vector (`x, y, z, w`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Vec4<T = f64> {
    data: [T; 4],
}

/// Single-precision 4D vector.
pub type Vec4f = Vec4<f32>;
/// Double-precision 4D vector.
pub type Vec4d = Vec4<f64>;

impl_vector!(Vec4, 4, x => 0, y => 1, z => 2, w => 3);

impl<T: Scalar> Vec4<T> {
    /// Unit vector along +X.
    pub const UNIT_X: Self = Self {
        data: [T::ONE, T::ZERO, T::ZERO, T::ZERO],
    };
    /// Unit vector along +Y.
    pub const UNIT_Y: Self = Self {
        data: [T::ZERO, T::ONE, T::ZERO, T::ZERO],
    };
    /// Unit vector along +Z.
    pub const UNIT_Z: Self = Self {
        data: [T::ZERO, T::ZERO, T::ONE, T::ZERO],
    };
    /// Unit vector along +W.
    pub const UNIT_W: Self = Self {
        data: [T::ZERO, T::ZERO, T::ZERO, T::ONE],
    };

    /// Extends a 3D vector with the given `w`.
    pub fn from_vec3(v: Vec3<T>, w: T) -> Self {
        Self::new(v.x(), v.y(), v.z(), w)
    }

    /// Drops the `w` component.
    pub fn xyz(&self) -> Vec3<T> {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xyz_drops_w() {
        let v = Vec4d::from_vec3(Vec3::new(1.0, 2.0, 3.0), 9.0);
        assert_eq!(v.w(), 9.0);
        assert_eq!(v.xyz(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn operators_are_component_wise() {
        let a = Vec4d::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4d::splat(2.0);
        assert_eq!(a * b, Vec4d::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(2.0 * a, a + a);
        assert_eq!(-a + a, Vec4d::ZERO);
        assert_eq!(a.dot(&Vec4d::UNIT_W), 4.0);
    }
}
