// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::Scalar;

/// 2D vector used for planar points, tangents and curve control points.
///
/// * Components are stored as a private `[x, y]` array; use the accessors.
/// * `Display` writes `"x y"` and `FromStr` reads the same form back.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Vec2<T = f64> {
    data: [T; 2],
}

/// Single-precision 2D vector.
pub type Vec2f = Vec2<f32>;
/// Double-precision 2D vector.
pub type Vec2d = Vec2<f64>;

impl_vector!(Vec2, 2, x => 0, y => 1);

impl<T: Scalar> Vec2<T> {
    /// Unit vector along +X.
    pub const UNIT_X: Self = Self {
        data: [T::ONE, T::ZERO],
    };
    /// Unit vector along +Y.
    pub const UNIT_Y: Self = Self {
        data: [T::ZERO, T::ONE],
    };

    /// Perpendicular vector `(y, -x)`: the input rotated a quarter turn clockwise.
    pub fn perp(&self) -> Self {
        Self::new(self.data[1], -self.data[0])
    }
}
