// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Interval and bounding-box types.
//!
//! Semantics shared by every type here:
//! - Bounds are closed; a degenerate interval `[x, x]` is a point, not empty.
//! - The empty value is the sentinel `(MAX, -MAX)`, so extending it by any
//!   finite value produces exactly that value.
//! - A box is empty as soon as any one of its axes is empty.

#[doc = "2D axis-aligned bounding boxes."]
pub mod box2;
#[doc = "3D axis-aligned bounding boxes."]
pub mod box3;
#[doc = "Closed scalar intervals."]
pub mod range;
