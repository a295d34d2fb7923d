// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error types shared by the math primitives.

use core::num::ParseFloatError;
use thiserror::Error;

/// Failure of an operation that has no meaningful result for its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// The matrix has no inverse (zero or numerically negligible determinant).
    #[error("matrix is singular")]
    Singular,
    /// The input has (near) zero length and cannot be normalized or inverted.
    #[error("degenerate input: length is at or below epsilon")]
    Degenerate,
}

/// Failure to read a value back from its whitespace-separated text form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text did not contain the expected number of components.
    #[error("expected {expected} components, found {found}")]
    Arity {
        /// Number of components the type is made of.
        expected: usize,
        /// Number of whitespace-separated tokens in the input.
        found: usize,
    },
    /// A component was not a valid floating-point number.
    #[error("invalid number: {0}")]
    Number(#[from] ParseFloatError),
}

/// Parses exactly `N` whitespace-separated scalars.
pub(crate) fn parse_components<T, const N: usize>(s: &str) -> Result<[T; N], ParseError>
where
    T: crate::Scalar,
{
    let tokens: Vec<&str> = s.split_whitespace().collect();
    if tokens.len() != N {
        return Err(ParseError::Arity {
            expected: N,
            found: tokens.len(),
        });
    }
    let mut out = [T::ZERO; N];
    for (slot, token) in out.iter_mut().zip(tokens) {
        *slot = token.parse::<T>()?;
    }
    Ok(out)
}
