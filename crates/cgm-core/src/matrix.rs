// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Shared implementation of the square column-major matrix types.
//!
//! Element `(row, col)` lives at `data[col * N + row]`. Construction from
//! rows, element access, the algebra that does not depend on the dimension
//! and the text form are generated here; determinants, inverses and the
//! transform builders live with each type.

macro_rules! impl_matrix {
    ($name:ident, $n:literal, $len:literal, $vec:ident) => {
        impl<T: $crate::Scalar> $name<T> {
            /// The matrix with every element zero.
            pub const ZERO: Self = Self { data: [T::ZERO; $len] };

            /// Creates a matrix from column-major array data.
            pub const fn new(data: [T; $len]) -> Self {
                Self { data }
            }

            /// Returns the zero matrix.
            pub const fn zero() -> Self {
                Self::ZERO
            }

            /// Returns the identity matrix.
            pub fn identity() -> Self {
                Self::diagonal(T::ONE)
            }

            /// Returns `value` on the diagonal and zero elsewhere.
            pub fn diagonal(value: T) -> Self {
                let mut out = Self::ZERO;
                for i in 0..$n {
                    out.data[i * $n + i] = value;
                }
                out
            }

            /// Builds a matrix from row arrays (`rows[r][c]`).
            pub fn from_rows(rows: [[T; $n]; $n]) -> Self {
                let mut out = Self::ZERO;
                for (r, row) in rows.iter().enumerate() {
                    for (c, v) in row.iter().enumerate() {
                        out.data[c * $n + r] = *v;
                    }
                }
                out
            }

            /// Builds a matrix from column vectors.
            pub fn from_cols(cols: [$crate::$vec<T>; $n]) -> Self {
                let mut out = Self::ZERO;
                for (c, col) in cols.iter().enumerate() {
                    out.set_col(c, *col);
                }
                out
            }

            /// Element at `(row, col)`.
            #[inline]
            pub fn at(&self, row: usize, col: usize) -> T {
                self.data[col * $n + row]
            }

            /// Overwrites the element at `(row, col)`.
            #[inline]
            pub fn set(&mut self, row: usize, col: usize, value: T) {
                self.data[col * $n + row] = value;
            }

            /// Returns row `r` as a vector.
            pub fn row(&self, r: usize) -> $crate::$vec<T> {
                let mut out = [T::ZERO; $n];
                for (c, slot) in out.iter_mut().enumerate() {
                    *slot = self.at(r, c);
                }
                $crate::$vec::from(out)
            }

            /// Returns column `c` as a vector.
            pub fn col(&self, c: usize) -> $crate::$vec<T> {
                let mut out = [T::ZERO; $n];
                out.copy_from_slice(&self.data[c * $n..(c + 1) * $n]);
                $crate::$vec::from(out)
            }

            /// Overwrites row `r`.
            pub fn set_row(&mut self, r: usize, row: $crate::$vec<T>) {
                for (c, v) in row.to_array().into_iter().enumerate() {
                    self.set(r, c, v);
                }
            }

            /// Overwrites column `c`.
            pub fn set_col(&mut self, c: usize, col: $crate::$vec<T>) {
                self.data[c * $n..(c + 1) * $n].copy_from_slice(&col.to_array());
            }

            /// Returns the matrix as a column-major array.
            pub fn to_array(self) -> [T; $len] {
                self.data
            }

            /// Returns the matrix as row arrays (`rows[r][c]`).
            pub fn to_rows(&self) -> [[T; $n]; $n] {
                let mut rows = [[T::ZERO; $n]; $n];
                for (r, row) in rows.iter_mut().enumerate() {
                    for (c, v) in row.iter_mut().enumerate() {
                        *v = self.at(r, c);
                    }
                }
                rows
            }

            /// Multiplies the matrix with another matrix (`self * rhs`).
            pub fn multiply(&self, rhs: &Self) -> Self {
                let mut out = [T::ZERO; $len];
                for row in 0..$n {
                    for col in 0..$n {
                        let mut sum = T::ZERO;
                        for k in 0..$n {
                            sum += self.at(row, k) * rhs.at(k, col);
                        }
                        out[col * $n + row] = sum;
                    }
                }
                Self::new(out)
            }

            /// Matrix-vector product (`self * v`).
            pub fn transform(&self, v: &$crate::$vec<T>) -> $crate::$vec<T> {
                let mut out = [T::ZERO; $n];
                for (row, slot) in out.iter_mut().enumerate() {
                    let mut sum = T::ZERO;
                    for col in 0..$n {
                        sum += self.at(row, col) * v[col];
                    }
                    *slot = sum;
                }
                $crate::$vec::from(out)
            }

            /// Returns the transpose.
            pub fn transpose(&self) -> Self {
                let mut out = Self::ZERO;
                for row in 0..$n {
                    for col in 0..$n {
                        out.set(col, row, self.at(row, col));
                    }
                }
                out
            }

            /// Squared Frobenius norm (sum of squared elements).
            pub fn norm2(&self) -> T {
                let mut sum = T::ZERO;
                for v in self.data {
                    sum += v * v;
                }
                sum
            }

            /// Frobenius norm.
            pub fn norm(&self) -> T {
                self.norm2().sqrt()
            }

            /// `true` when every element is finite.
            pub fn is_valid(&self) -> bool {
                self.data.iter().all(|v| v.is_finite())
            }

            /// `true` when every element is within `epsilon` of zero.
            pub fn is_zero(&self, epsilon: T) -> bool {
                self.approx_eq(&Self::ZERO, epsilon)
            }

            /// `true` when the matrix is within `epsilon` of the identity.
            pub fn is_identity(&self, epsilon: T) -> bool {
                self.approx_eq(&Self::identity(), epsilon)
            }

            /// `true` when every element differs from `rhs` by at most `epsilon`.
            pub fn approx_eq(&self, rhs: &Self, epsilon: T) -> bool {
                self.data
                    .iter()
                    .zip(rhs.data)
                    .all(|(a, b)| $crate::almost_equal(*a, b, epsilon))
            }

            fn zip_with(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Self {
                let mut out = self.data;
                for (a, b) in out.iter_mut().zip(rhs.data) {
                    *a = f(*a, b);
                }
                Self::new(out)
            }
        }

        impl<T: $crate::Scalar> Default for $name<T> {
            fn default() -> Self {
                Self::identity()
            }
        }

        impl<T: $crate::Scalar> From<[T; $len]> for $name<T> {
            fn from(value: [T; $len]) -> Self {
                Self { data: value }
            }
        }

        impl<T: $crate::Scalar> core::ops::Mul for $name<T> {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self::Output {
                self.multiply(&rhs)
            }
        }

        impl<T: $crate::Scalar> core::ops::Mul<$crate::$vec<T>> for $name<T> {
            type Output = $crate::$vec<T>;
            fn mul(self, rhs: $crate::$vec<T>) -> Self::Output {
                self.transform(&rhs)
            }
        }

        impl<T: $crate::Scalar> core::ops::Mul<T> for $name<T> {
            type Output = Self;
            fn mul(self, rhs: T) -> Self::Output {
                Self::new(self.data.map(|v| v * rhs))
            }
        }

        impl<T: $crate::Scalar> core::ops::Add for $name<T> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                self.zip_with(&rhs, |a, b| a + b)
            }
        }

        impl<T: $crate::Scalar> core::ops::Sub for $name<T> {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                self.zip_with(&rhs, |a, b| a - b)
            }
        }

        impl<T: $crate::Scalar> core::ops::Neg for $name<T> {
            type Output = Self;
            fn neg(self) -> Self::Output {
                Self::new(self.data.map(|v| -v))
            }
        }

        impl<T: $crate::Scalar> core::fmt::Display for $name<T> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                let rows = self.to_rows();
                let flat: Vec<T> = rows.iter().flatten().copied().collect();
                $crate::write_spaced(f, &flat)
            }
        }

        impl<T: $crate::Scalar> core::str::FromStr for $name<T> {
            type Err = $crate::ParseError;
            /// Reads the row-major form written by `Display`.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let flat = $crate::error::parse_components::<T, $len>(s)?;
                let mut out = Self::ZERO;
                for (i, v) in flat.into_iter().enumerate() {
                    out.set(i / $n, i % $n, v);
                }
                Ok(out)
            }
        }
    };
}
