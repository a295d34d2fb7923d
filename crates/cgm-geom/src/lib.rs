// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![forbid(unsafe_code)]
#![doc = r"Geometry primitives built on `cgm-core`.

This crate provides:
- Closed scalar intervals (`Range`) with an explicit empty sentinel.
- Axis-aligned bounding boxes in 2D and 3D (`Box2`, `Box3`) built from one
  `Range` per axis.
- Cubic Bezier curves in the plane (`BezierCurve2`) with evaluation,
  subdivision, blossoming and adaptive arc-length measurement.

Design notes:
- Containment and overlap are inclusive on faces; touching boxes intersect.
- An empty range or box absorbs nothing: extending it by a point yields that
  point, and `expand` leaves it empty.
- Arc-length measurement is bounded: subdivision depth and bisection
  iterations are capped, with a `tracing` debug event when a cap is hit.
"]

/// Cubic Bezier curves.
pub mod bezier;
/// Ranges and bounding boxes.
pub mod types;

pub use bezier::{BezierCurve2, DEFAULT_LENGTH_TOLERANCE, MAX_SUBDIVISION_DEPTH};
pub use types::box2::Box2;
pub use types::box3::Box3;
pub use types::range::Range;
