// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::str::FromStr;

use cgm_core::{ParseError, Scalar};

/// Closed scalar interval `[min, max]`.
///
/// Invariants:
/// - Either `min <= max`, or the range is the empty sentinel `(MAX, MIN)`.
/// - Constructors sort their endpoints, so a non-empty range can never be
///   built with reversed bounds.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range<T = f64> {
    min: T,
    max: T,
}

impl<T: Scalar> Range<T> {
    /// The empty range. Extending it by `x` yields `[x, x]`.
    pub const EMPTY: Self = Self {
        min: T::MAX,
        max: T::MIN,
    };

    /// Creates the range spanning `a` and `b` in either order.
    pub fn new(a: T, b: T) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Creates the degenerate range `[x, x]`.
    pub const fn point(x: T) -> Self {
        Self { min: x, max: x }
    }

    /// `true` for the empty range.
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// `true` when the range holds exactly one value.
    pub fn is_point(&self) -> bool {
        self.min == self.max
    }

    /// `true` when `x` lies within the closed bounds.
    pub fn contains(&self, x: T) -> bool {
        self.min <= x && x <= self.max
    }

    /// `true` when `other` lies entirely within this range.
    ///
    /// The empty range is contained by every range.
    pub fn contains_range(&self, other: &Self) -> bool {
        other.is_empty() || (self.min <= other.min && other.max <= self.max)
    }

    /// `true` when the ranges share at least one value (inclusive on ends).
    pub fn intersects(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min <= other.max
            && other.min <= self.max
    }

    /// Lower bound.
    pub fn min(&self) -> T {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> T {
        self.max
    }

    /// Midpoint. Meaningless for the empty range.
    pub fn center(&self) -> T {
        (self.min + self.max) * T::HALF
    }

    /// Length `max - min`, or zero for the empty range.
    pub fn size(&self) -> T {
        if self.is_empty() {
            T::ZERO
        } else {
            self.max - self.min
        }
    }

    /// Clamps `x` into the range. Returns `x` unchanged when empty.
    pub fn clamp(&self, x: T) -> T {
        if self.is_empty() {
            x
        } else {
            x.max(self.min).min(self.max)
        }
    }

    /// Resets to the empty range.
    pub fn clear(&mut self) {
        *self = Self::EMPTY;
    }

    /// Replaces the bounds with `a` and `b` in either order.
    pub fn set(&mut self, a: T, b: T) {
        *self = Self::new(a, b);
    }

    /// Replaces the bounds with the single value `x`.
    pub fn set_point(&mut self, x: T) {
        *self = Self::point(x);
    }

    /// Grows the range to include `x`.
    pub fn extend_by(&mut self, x: T) -> &mut Self {
        self.min = self.min.min(x);
        self.max = self.max.max(x);
        self
    }

    /// Grows the range to include all of `other`.
    pub fn extend_by_range(&mut self, other: &Self) -> &mut Self {
        if !other.is_empty() {
            self.min = self.min.min(other.min);
            self.max = self.max.max(other.max);
        }
        self
    }

    /// Moves both bounds outward by `dt`. The empty range stays empty.
    pub fn expand(&mut self, dt: T) -> &mut Self {
        if !self.is_empty() {
            self.min -= dt;
            self.max += dt;
        }
        self
    }

    /// Returns the overlap of two ranges, or the empty range when disjoint.
    ///
    /// Ranges that only touch intersect in a single point.
    pub fn intersect(&self, other: &Self) -> Self {
        let lo = self.min.max(other.min);
        let hi = self.max.min(other.max);
        if lo <= hi {
            Self { min: lo, max: hi }
        } else {
            Self::EMPTY
        }
    }
}

impl<T: Scalar> Default for Range<T> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<T: Scalar> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.min, self.max)
    }
}

impl<T: Scalar> FromStr for Range<T> {
    type Err = ParseError;

    /// Reads `"min max"`. Reversed bounds read as the empty range, so the
    /// text form of [`Range::EMPTY`] reads back as empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let [a, b] = tokens.as_slice() else {
            return Err(ParseError::Arity {
                expected: 2,
                found: tokens.len(),
            });
        };
        let (a, b) = (a.parse::<T>()?, b.parse::<T>()?);
        Ok(if a <= b {
            Self { min: a, max: b }
        } else {
            Self::EMPTY
        })
    }
}
