// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Shared implementation of the fixed-size vector types.
//!
//! `Vec2`, `Vec3` and `Vec4` differ only in arity and a few type-specific
//! products (`perp`, `cross`), so the component-wise arithmetic, metric
//! helpers, operator impls and text form are generated here once.

macro_rules! impl_vector {
    ($name:ident, $n:literal, $($comp:ident => $idx:literal),+) => {
        impl<T: $crate::Scalar> $name<T> {
            /// The zero vector.
            pub const ZERO: Self = Self { data: [T::ZERO; $n] };

            /// Creates a vector from components.
            pub const fn new($($comp: T),+) -> Self {
                Self { data: [$($comp),+] }
            }

            /// Creates a vector with every component set to `value`.
            pub const fn splat(value: T) -> Self {
                Self { data: [value; $n] }
            }

            $(
                #[doc = concat!("Returns the `", stringify!($comp), "` component.")]
                #[inline]
                pub fn $comp(&self) -> T {
                    self.data[$idx]
                }
            )+

            /// Returns the components as an array.
            pub fn to_array(self) -> [T; $n] {
                self.data
            }

            /// Adds two vectors.
            pub fn add(&self, other: &Self) -> Self {
                let mut out = self.data;
                for (a, b) in out.iter_mut().zip(other.data) {
                    *a += b;
                }
                Self { data: out }
            }

            /// Subtracts another vector.
            pub fn sub(&self, other: &Self) -> Self {
                let mut out = self.data;
                for (a, b) in out.iter_mut().zip(other.data) {
                    *a -= b;
                }
                Self { data: out }
            }

            /// Scales the vector by a scalar.
            pub fn scale(&self, scalar: T) -> Self {
                let mut out = self.data;
                for a in &mut out {
                    *a *= scalar;
                }
                Self { data: out }
            }

            /// Component-wise product.
            pub fn mul_elem(&self, other: &Self) -> Self {
                let mut out = self.data;
                for (a, b) in out.iter_mut().zip(other.data) {
                    *a *= b;
                }
                Self { data: out }
            }

            /// Dot product with another vector.
            pub fn dot(&self, other: &Self) -> T {
                let mut sum = T::ZERO;
                for (a, b) in self.data.iter().zip(other.data) {
                    sum += *a * b;
                }
                sum
            }

            /// Squared magnitude of the vector.
            pub fn length_squared(&self) -> T {
                self.dot(self)
            }

            /// Vector length (magnitude).
            pub fn length(&self) -> T {
                self.length_squared().sqrt()
            }

            /// Euclidean distance to `other`.
            pub fn distance(&self, other: &Self) -> T {
                self.sub(other).length()
            }

            /// Squared Euclidean distance to `other`.
            pub fn distance_squared(&self, other: &Self) -> T {
                self.sub(other).length_squared()
            }

            /// Normalises the vector, returning the zero vector if length ≤ `EPSILON`.
            ///
            /// Vectors at or below the threshold are treated as degenerate so
            /// callers can detect them by comparing against [`Self::ZERO`].
            pub fn normalize(&self) -> Self {
                self.try_normalize().unwrap_or(Self::ZERO)
            }

            /// Normalises the vector, failing with [`MathError::Degenerate`]
            /// when its length is ≤ `EPSILON`.
            ///
            /// [`MathError::Degenerate`]: $crate::MathError::Degenerate
            pub fn try_normalize(&self) -> Result<Self, $crate::MathError> {
                let len = self.length();
                if len <= T::EPSILON {
                    return Err($crate::MathError::Degenerate);
                }
                Ok(self.scale(T::ONE / len))
            }

            /// Linear interpolation: `self` at `t = 0`, `other` at `t = 1`.
            pub fn lerp(&self, other: &Self, t: T) -> Self {
                self.scale(T::ONE - t).add(&other.scale(t))
            }

            /// `true` when every component differs from `other` by at most `epsilon`.
            pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
                self.data
                    .iter()
                    .zip(other.data)
                    .all(|(a, b)| $crate::almost_equal(*a, b, epsilon))
            }

            /// Clamps every component to `[lo, hi]`.
            pub fn clamp(&self, lo: T, hi: T) -> Self {
                let mut out = self.data;
                for a in &mut out {
                    *a = $crate::clamp(*a, lo, hi);
                }
                Self { data: out }
            }

            /// `true` when every component is finite.
            pub fn is_valid(&self) -> bool {
                self.data.iter().all(|c| c.is_finite())
            }

            /// Converts the components to another scalar type.
            pub fn cast<U: $crate::Scalar>(&self) -> $name<U> {
                $name { data: self.data.map(|c| U::from_f64(c.to_f64())) }
            }
        }

        impl<T: $crate::Scalar> Default for $name<T> {
            fn default() -> Self {
                Self::ZERO
            }
        }

        impl<T: $crate::Scalar> From<[T; $n]> for $name<T> {
            fn from(value: [T; $n]) -> Self {
                Self { data: value }
            }
        }

        impl<T: $crate::Scalar> From<$name<T>> for [T; $n] {
            fn from(value: $name<T>) -> Self {
                value.data
            }
        }

        impl<T: $crate::Scalar> core::ops::Index<usize> for $name<T> {
            type Output = T;
            fn index(&self, index: usize) -> &T {
                &self.data[index]
            }
        }

        impl<T: $crate::Scalar> core::ops::IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, index: usize) -> &mut T {
                &mut self.data[index]
            }
        }

        impl<T: $crate::Scalar> core::ops::Add for $name<T> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                $name::add(&self, &rhs)
            }
        }

        impl<T: $crate::Scalar> core::ops::Sub for $name<T> {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                $name::sub(&self, &rhs)
            }
        }

        impl<T: $crate::Scalar> core::ops::Neg for $name<T> {
            type Output = Self;
            fn neg(self) -> Self {
                Self { data: self.data.map(|c| -c) }
            }
        }

        impl<T: $crate::Scalar> core::ops::Mul<T> for $name<T> {
            type Output = Self;
            fn mul(self, rhs: T) -> Self {
                self.scale(rhs)
            }
        }

        impl<T: $crate::Scalar> core::ops::Mul for $name<T> {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                self.mul_elem(&rhs)
            }
        }

        impl<T: $crate::Scalar> core::ops::Div<T> for $name<T> {
            type Output = Self;
            fn div(self, rhs: T) -> Self {
                self.scale(T::ONE / rhs)
            }
        }

        impl<T: $crate::Scalar> core::ops::AddAssign for $name<T> {
            fn add_assign(&mut self, rhs: Self) {
                *self = $name::add(self, &rhs);
            }
        }

        impl<T: $crate::Scalar> core::ops::SubAssign for $name<T> {
            fn sub_assign(&mut self, rhs: Self) {
                *self = $name::sub(self, &rhs);
            }
        }

        impl<T: $crate::Scalar> core::ops::MulAssign<T> for $name<T> {
            fn mul_assign(&mut self, rhs: T) {
                *self = self.scale(rhs);
            }
        }

        impl<T: $crate::Scalar> core::ops::MulAssign for $name<T> {
            fn mul_assign(&mut self, rhs: Self) {
                *self = self.mul_elem(&rhs);
            }
        }

        impl<T: $crate::Scalar> core::ops::DivAssign<T> for $name<T> {
            fn div_assign(&mut self, rhs: T) {
                *self = self.scale(T::ONE / rhs);
            }
        }

        impl core::ops::Mul<$name<f32>> for f32 {
            type Output = $name<f32>;
            fn mul(self, rhs: $name<f32>) -> $name<f32> {
                rhs.scale(self)
            }
        }

        impl core::ops::Mul<$name<f64>> for f64 {
            type Output = $name<f64>;
            fn mul(self, rhs: $name<f64>) -> $name<f64> {
                rhs.scale(self)
            }
        }

        impl<T: $crate::Scalar> core::fmt::Display for $name<T> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                $crate::write_spaced(f, &self.data)
            }
        }

        impl<T: $crate::Scalar> core::str::FromStr for $name<T> {
            type Err = $crate::ParseError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $crate::error::parse_components::<T, $n>(s).map(Self::from)
            }
        }
    };
}
