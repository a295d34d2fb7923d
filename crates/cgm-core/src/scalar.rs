// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar arithmetic abstraction for cgm math.
//!
//! Every value type in this crate is generic over a [`Scalar`] so the same
//! code serves `f32` (GPU uploads, large meshes) and `f64` (solvers, curve
//! measurement). The trait exposes exactly the operations the math types
//! need: core arithmetic via the operator traits, a handful of
//! transcendentals, and constants used as degeneracy thresholds.
//!
//! Conversion contract:
//! - `from_f64` rounds to the nearest representable value of `Self`.
//! - `to_f64` is exact for both supported backends.
//! - Trigonometric functions interpret arguments as radians.

use core::fmt::{Debug, Display};
use core::num::ParseFloatError;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

/// Floating-point scalar used by every vector, matrix and curve type.
///
/// Arithmetic operators are required via the standard operator traits for
/// ergonomic use of `+`, `-`, `*`, `/`, unary `-` and their assigning forms
/// in generic code. Parsing is required so the text forms of vectors and
/// matrices can be read back with `FromStr`.
pub trait Scalar:
    Copy
    + Debug
    + Display
    + Default
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + FromStr<Err = ParseFloatError>
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// The value `2`.
    const TWO: Self;
    /// The value `0.5`.
    const HALF: Self;
    /// Archimedes' constant.
    const PI: Self;
    /// Default tolerance for approximate comparisons and degeneracy checks.
    const EPSILON: Self;
    /// Largest finite value; used as the empty-range sentinel.
    const MAX: Self;
    /// Most negative finite value (`-MAX`).
    const MIN: Self;
    /// Distance from `1` to the next representable value; bounds rounding
    /// error in floating-point cancellation tests.
    const MACHINE_EPSILON: Self;

    /// Converts from `f64`, rounding to the nearest representable value.
    fn from_f64(value: f64) -> Self;

    /// Converts to `f64`.
    fn to_f64(self) -> f64;

    /// Square root.
    fn sqrt(self) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Sine of `self` (radians).
    fn sin(self) -> Self;

    /// Cosine of `self` (radians).
    fn cos(self) -> Self;

    /// Returns both sine and cosine of `self` (radians).
    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }

    /// Tangent of `self` (radians).
    fn tan(self) -> Self;

    /// Four-quadrant arctangent of `self / other`.
    fn atan2(self, other: Self) -> Self;

    /// Arccosine, in radians.
    fn acos(self) -> Self;

    /// Largest integer value not greater than `self`.
    fn floor(self) -> Self;

    /// Cube root (real branch, defined for negative inputs).
    fn cbrt(self) -> Self;

    /// Smaller of two values.
    fn min(self, other: Self) -> Self;

    /// Larger of two values.
    fn max(self, other: Self) -> Self;

    /// `true` when the value is neither infinite nor NaN.
    fn is_finite(self) -> bool;
}

macro_rules! impl_scalar {
    ($t:ident, $eps:expr) => {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const HALF: Self = 0.5;
            const PI: Self = core::$t::consts::PI;
            const EPSILON: Self = $eps;
            const MAX: Self = $t::MAX;
            const MIN: Self = $t::MIN;
            const MACHINE_EPSILON: Self = $t::EPSILON;

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                f64::from(self)
            }

            #[inline]
            fn sqrt(self) -> Self {
                $t::sqrt(self)
            }

            #[inline]
            fn abs(self) -> Self {
                $t::abs(self)
            }

            #[inline]
            fn sin(self) -> Self {
                $t::sin(self)
            }

            #[inline]
            fn cos(self) -> Self {
                $t::cos(self)
            }

            #[inline]
            fn sin_cos(self) -> (Self, Self) {
                $t::sin_cos(self)
            }

            #[inline]
            fn tan(self) -> Self {
                $t::tan(self)
            }

            #[inline]
            fn atan2(self, other: Self) -> Self {
                $t::atan2(self, other)
            }

            #[inline]
            fn acos(self) -> Self {
                $t::acos(self)
            }

            #[inline]
            fn floor(self) -> Self {
                $t::floor(self)
            }

            #[inline]
            fn cbrt(self) -> Self {
                $t::cbrt(self)
            }

            #[inline]
            fn min(self, other: Self) -> Self {
                $t::min(self, other)
            }

            #[inline]
            fn max(self, other: Self) -> Self {
                $t::max(self, other)
            }

            #[inline]
            fn is_finite(self) -> bool {
                $t::is_finite(self)
            }
        }
    };
}

impl_scalar!(f32, 1e-5);
impl_scalar!(f64, 1e-5);
