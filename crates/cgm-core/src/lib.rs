// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! cgm-core: small-vector math for graphics and geometry code.
//!
//! Provides 2D/3D/4D vectors, 2x2/3x3/4x4 column-major matrices and
//! quaternions, all generic over a [`Scalar`] (`f32` or `f64`), together
//! with closed-form root solvers, a 2x2 symmetric eigensolver, gradient
//! noise and a wall-clock timer.
//!
//! Angles are radians throughout. Degenerate inputs follow one policy:
//! `normalize` returns the zero vector (or identity quaternion) when the
//! length is at or below [`Scalar::EPSILON`], and the fallible `try_*` /
//! `inverse` variants report a [`MathError`] instead.
#![forbid(unsafe_code)]
#![allow(clippy::suspicious_operation_groupings)]

#[macro_use]
mod vector;
#[macro_use]
mod matrix;

mod eigen;
mod error;
mod mat2;
mod mat3;
mod mat4;
pub mod noise;
mod quat;
mod scalar;
mod solve;
mod timer;
mod vec2;
mod vec3;
mod vec4;

pub use eigen::{solve_eigen_symm_2x2, SymmetricEigen2, EIGEN_DIAGONAL_THRESHOLD};
pub use error::{MathError, ParseError};
pub use mat2::{Mat2, Mat2d, Mat2f};
pub use mat3::{Mat3, Mat3d, Mat3f};
pub use mat4::{Mat4, Mat4d, Mat4f};
pub use quat::{Quat, Quatd, Quatf};
pub use scalar::Scalar;
pub use solve::{solve_cubic, solve_quadratic, CubicRoots};
pub use timer::Timer;
pub use vec2::{Vec2, Vec2d, Vec2f};
pub use vec3::{Vec3, Vec3d, Vec3f};
pub use vec4::{Vec4, Vec4d, Vec4f};

/// Converts degrees to radians.
pub fn radians<T: Scalar>(degrees: T) -> T {
    degrees * (T::PI / T::from_f64(180.0))
}

/// Converts radians to degrees.
pub fn degrees<T: Scalar>(radians: T) -> T {
    radians * (T::from_f64(180.0) / T::PI)
}

/// Clamps `value` to the inclusive `[min, max]` range.
///
/// # Panics
/// Panics when `min > max`.
pub fn clamp<T: Scalar>(value: T, min: T, max: T) -> T {
    assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Returns `-1` for negative values and `+1` otherwise (including zero).
pub fn sign<T: Scalar>(value: T) -> T {
    if value < T::ZERO {
        -T::ONE
    } else {
        T::ONE
    }
}

/// `true` when `|a - b| <= epsilon`.
pub fn almost_equal<T: Scalar>(a: T, b: T, epsilon: T) -> bool {
    (a - b).abs() <= epsilon
}

/// Hermite smoothstep of `x` between the edges `a` and `b`.
///
/// Returns `0` for `x <= a`, `1` for `x >= b` and `t²(3 − 2t)` in between.
pub fn smoothstep<T: Scalar>(a: T, b: T, x: T) -> T {
    if x <= a {
        return T::ZERO;
    }
    if x >= b {
        return T::ONE;
    }
    let t = (x - a) / (b - a);
    t * t * (T::from_f64(3.0) - T::TWO * t)
}

/// `true` when `value` is neither infinite nor NaN.
pub fn is_valid<T: Scalar>(value: T) -> bool {
    value.is_finite()
}

/// Writes `values` separated by single spaces.
pub(crate) fn write_spaced<T: core::fmt::Display>(
    f: &mut core::fmt::Formatter<'_>,
    values: &[T],
) -> core::fmt::Result {
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{v}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_conversions_invert_each_other() {
        assert!(almost_equal(radians(180.0_f64), core::f64::consts::PI, 1e-12));
        assert!(almost_equal(degrees(core::f64::consts::FRAC_PI_2), 90.0, 1e-12));
        assert!(almost_equal(degrees(radians(37.5_f32)), 37.5, 1e-4));
    }

    #[test]
    fn sign_treats_zero_as_positive() {
        assert_eq!(sign(-3.0_f64), -1.0);
        assert_eq!(sign(0.0_f64), 1.0);
        assert_eq!(sign(2.0_f32), 1.0);
    }

    #[test]
    fn smoothstep_is_clamped_and_symmetric() {
        assert_eq!(smoothstep(0.0_f64, 1.0, -1.0), 0.0);
        assert_eq!(smoothstep(0.0_f64, 1.0, 2.0), 1.0);
        assert_eq!(smoothstep(0.0_f64, 1.0, 0.5), 0.5);
        let a = smoothstep(0.0_f64, 1.0, 0.25);
        let b = smoothstep(0.0_f64, 1.0, 0.75);
        assert!(almost_equal(a + b, 1.0, 1e-12));
    }

    #[test]
    #[should_panic(expected = "invalid clamp range")]
    fn clamp_rejects_inverted_bounds() {
        let _ = clamp(0.5_f64, 1.0, 0.0);
    }

    #[test]
    fn validity_rejects_nan_and_infinity() {
        assert!(is_valid(1.0_f64));
        assert!(!is_valid(f64::NAN));
        assert!(!is_valid(f32::INFINITY));
    }
}
