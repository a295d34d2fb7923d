// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use cgm_core::{Scalar, Vec2};

use super::range::Range;

/// Axis-aligned rectangle, stored as one [`Range`] per axis.
///
/// Shares the semantics of [`Box3`](super::box3::Box3): empty as soon as
/// either axis is empty, inclusive on edges.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Box2<T = f64> {
    x: Range<T>,
    y: Range<T>,
}

impl<T: Scalar> Box2<T> {
    /// The empty box.
    pub const EMPTY: Self = Self {
        x: Range::EMPTY,
        y: Range::EMPTY,
    };

    /// Builds the box spanned by two opposite corners in any order.
    pub fn new(a: Vec2<T>, b: Vec2<T>) -> Self {
        Self {
            x: Range::new(a.x(), b.x()),
            y: Range::new(a.y(), b.y()),
        }
    }

    /// Builds the degenerate box holding only `p`.
    pub fn from_point(p: Vec2<T>) -> Self {
        Self {
            x: Range::point(p.x()),
            y: Range::point(p.y()),
        }
    }

    /// Builds the smallest box containing every point; empty for no points.
    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Vec2<T>>,
    {
        let mut out = Self::EMPTY;
        for p in points {
            out.extend_by_point(*p);
        }
        out
    }

    /// Builds a box centered at `center` with half-extents `hx, hy`.
    pub fn from_center_half_extents(center: Vec2<T>, hx: T, hy: T) -> Self {
        let he = Vec2::new(hx, hy);
        Self::new(center.sub(&he), center.add(&he))
    }

    /// Extent along the x axis.
    pub fn x(&self) -> Range<T> {
        self.x
    }

    /// Extent along the y axis.
    pub fn y(&self) -> Range<T> {
        self.y
    }

    /// `true` when either axis is empty.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty()
    }

    /// `true` when both axes are a single value.
    pub fn is_point(&self) -> bool {
        self.x.is_point() && self.y.is_point()
    }

    /// `true` when `p` lies inside or on the boundary.
    pub fn contains_point(&self, p: &Vec2<T>) -> bool {
        self.x.contains(p.x()) && self.y.contains(p.y())
    }

    /// `true` when `other` lies entirely inside this box.
    pub fn contains_box(&self, other: &Self) -> bool {
        other.is_empty() || (self.x.contains_range(&other.x) && self.y.contains_range(&other.y))
    }

    /// `true` when the boxes overlap (inclusive on edges).
    pub fn intersects(&self, other: &Self) -> bool {
        self.x.intersects(&other.x) && self.y.intersects(&other.y)
    }

    /// Minimum corner.
    pub fn min(&self) -> Vec2<T> {
        Vec2::new(self.x.min(), self.y.min())
    }

    /// Maximum corner.
    pub fn max(&self) -> Vec2<T> {
        Vec2::new(self.x.max(), self.y.max())
    }

    /// Center point.
    pub fn center(&self) -> Vec2<T> {
        Vec2::new(self.x.center(), self.y.center())
    }

    /// Edge lengths (zero along empty axes).
    pub fn size(&self) -> Vec2<T> {
        Vec2::new(self.x.size(), self.y.size())
    }

    /// Width times height; zero for an empty box.
    pub fn area(&self) -> T {
        self.x.size() * self.y.size()
    }

    /// Resets to the empty box.
    pub fn clear(&mut self) {
        *self = Self::EMPTY;
    }

    /// Grows the box to include `p`.
    pub fn extend_by_point(&mut self, p: Vec2<T>) -> &mut Self {
        self.x.extend_by(p.x());
        self.y.extend_by(p.y());
        self
    }

    /// Grows the box to include all of `other`.
    pub fn extend_by_box(&mut self, other: &Self) -> &mut Self {
        if !other.is_empty() {
            self.x.extend_by_range(&other.x);
            self.y.extend_by_range(&other.y);
        }
        self
    }

    /// Returns the smallest box containing both boxes.
    pub fn union(&self, other: &Self) -> Self {
        let mut out = *self;
        out.extend_by_box(other);
        out
    }

    /// Inflates every edge outward by `dt`. An empty box stays empty.
    pub fn expand(&mut self, dt: T) -> &mut Self {
        self.expand_xy(dt, dt)
    }

    /// Inflates the edges by a per-axis margin.
    pub fn expand_xy(&mut self, dx: T, dy: T) -> &mut Self {
        if !self.is_empty() {
            self.x.expand(dx);
            self.y.expand(dy);
        }
        self
    }

    /// Point of the box nearest to `p`; `p` itself when inside or when the
    /// box is empty.
    pub fn closest_point(&self, p: &Vec2<T>) -> Vec2<T> {
        if self.is_empty() {
            return *p;
        }
        Vec2::new(self.x.clamp(p.x()), self.y.clamp(p.y()))
    }

    /// Same as [`Box2::closest_point`].
    pub fn clip(&self, p: &Vec2<T>) -> Vec2<T> {
        self.closest_point(p)
    }

    /// Point on the boundary nearest to `p`.
    ///
    /// Inside points move to the closest edge, preferring x on ties.
    pub fn project_to_boundary(&self, p: &Vec2<T>) -> Vec2<T> {
        if self.is_empty() {
            return *p;
        }
        if !self.contains_point(p) {
            return self.closest_point(p);
        }
        let nearest = |r: Range<T>, v: T| {
            let (lo, hi) = ((v - r.min()).abs(), (r.max() - v).abs());
            if lo <= hi {
                (lo, r.min())
            } else {
                (hi, r.max())
            }
        };
        let (dx, fx) = nearest(self.x, p.x());
        let (dy, fy) = nearest(self.y, p.y());
        if dx <= dy {
            Vec2::new(fx, p.y())
        } else {
            Vec2::new(p.x(), fy)
        }
    }
}

impl<T: Scalar> Default for Box2<T> {
    fn default() -> Self {
        Self::EMPTY
    }
}
