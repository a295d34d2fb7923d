// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use cgm_core::{Mat3, Mat4, Scalar, Vec3};

use super::range::Range;

/// Axis-aligned bounding box in 3D, stored as one [`Range`] per axis.
///
/// Invariants:
/// - The box is empty when any axis is empty; [`Box3::default`] is empty on
///   every axis.
/// - Containment and overlap are inclusive on faces.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Box3<T = f64> {
    x: Range<T>,
    y: Range<T>,
    z: Range<T>,
}

impl<T: Scalar> Box3<T> {
    /// The empty box.
    pub const EMPTY: Self = Self {
        x: Range::EMPTY,
        y: Range::EMPTY,
        z: Range::EMPTY,
    };

    /// Builds the box spanned by two opposite corners in any order.
    pub fn new(a: Vec3<T>, b: Vec3<T>) -> Self {
        Self {
            x: Range::new(a.x(), b.x()),
            y: Range::new(a.y(), b.y()),
            z: Range::new(a.z(), b.z()),
        }
    }

    /// Builds the degenerate box holding only `p`.
    pub fn from_point(p: Vec3<T>) -> Self {
        Self {
            x: Range::point(p.x()),
            y: Range::point(p.y()),
            z: Range::point(p.z()),
        }
    }

    /// Builds the smallest box containing every point; empty for no points.
    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Vec3<T>>,
    {
        let mut out = Self::EMPTY;
        for p in points {
            out.extend_by_point(*p);
        }
        out
    }

    /// Builds a box centered at `center` with half-extents `hx, hy, hz`.
    pub fn from_center_half_extents(center: Vec3<T>, hx: T, hy: T, hz: T) -> Self {
        let he = Vec3::new(hx, hy, hz);
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

    /// Extent along the z axis.
    pub fn z(&self) -> Range<T> {
        self.z
    }

    /// `true` when any axis is empty.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty() || self.z.is_empty()
    }

    /// `true` when every axis is a single value.
    pub fn is_point(&self) -> bool {
        self.x.is_point() && self.y.is_point() && self.z.is_point()
    }

    /// `true` when `p` lies inside or on the boundary.
    pub fn contains_point(&self, p: &Vec3<T>) -> bool {
        self.x.contains(p.x()) && self.y.contains(p.y()) && self.z.contains(p.z())
    }

    /// `true` when `other` lies entirely inside this box.
    pub fn contains_box(&self, other: &Self) -> bool {
        other.is_empty()
            || (self.x.contains_range(&other.x)
                && self.y.contains_range(&other.y)
                && self.z.contains_range(&other.z))
    }

    /// `true` when the boxes overlap (inclusive on faces).
    pub fn intersects(&self, other: &Self) -> bool {
        self.x.intersects(&other.x) && self.y.intersects(&other.y) && self.z.intersects(&other.z)
    }

    /// Minimum corner.
    pub fn min(&self) -> Vec3<T> {
        Vec3::new(self.x.min(), self.y.min(), self.z.min())
    }

    /// Maximum corner.
    pub fn max(&self) -> Vec3<T> {
        Vec3::new(self.x.max(), self.y.max(), self.z.max())
    }

    /// Center point.
    pub fn center(&self) -> Vec3<T> {
        Vec3::new(self.x.center(), self.y.center(), self.z.center())
    }

    /// Edge lengths (zero along empty axes).
    pub fn size(&self) -> Vec3<T> {
        Vec3::new(self.x.size(), self.y.size(), self.z.size())
    }

    /// Product of the edge lengths; zero for an empty box.
    pub fn volume(&self) -> T {
        let s = self.size();
        s.x() * s.y() * s.z()
    }

    /// Resets to the empty box.
    pub fn clear(&mut self) {
        *self = Self::EMPTY;
    }

    /// Grows the box to include `p`.
    pub fn extend_by_point(&mut self, p: Vec3<T>) -> &mut Self {
        self.x.extend_by(p.x());
        self.y.extend_by(p.y());
        self.z.extend_by(p.z());
        self
    }

    /// Grows the box to include all of `other`.
    pub fn extend_by_box(&mut self, other: &Self) -> &mut Self {
        if !other.is_empty() {
            self.x.extend_by_range(&other.x);
            self.y.extend_by_range(&other.y);
            self.z.extend_by_range(&other.z);
        }
        self
    }

    /// Returns the smallest box containing both boxes.
    pub fn union(&self, other: &Self) -> Self {
        let mut out = *self;
        out.extend_by_box(other);
        out
    }

    /// Inflates every face outward by `dt`. An empty box stays empty.
    pub fn expand(&mut self, dt: T) -> &mut Self {
        self.expand_xyz(dt, dt, dt)
    }

    /// Inflates the faces by a per-axis margin.
    pub fn expand_xyz(&mut self, dx: T, dy: T, dz: T) -> &mut Self {
        if !self.is_empty() {
            self.x.expand(dx);
            self.y.expand(dy);
            self.z.expand(dz);
        }
        self
    }

    /// Point of the box nearest to `p`; `p` itself when inside or when the
    /// box is empty.
    pub fn closest_point(&self, p: &Vec3<T>) -> Vec3<T> {
        if self.is_empty() {
            return *p;
        }
        Vec3::new(self.x.clamp(p.x()), self.y.clamp(p.y()), self.z.clamp(p.z()))
    }

    /// Same as [`Box3::closest_point`].
    pub fn clip(&self, p: &Vec3<T>) -> Vec3<T> {
        self.closest_point(p)
    }

    /// Point on the boundary nearest to `p`.
    ///
    /// Outside points are clamped onto the surface; inside points move to the
    /// closest face. Ties favour x, then y, then z, and the lower face.
    pub fn project_to_boundary(&self, p: &Vec3<T>) -> Vec3<T> {
        if self.is_empty() {
            return *p;
        }
        if !self.contains_point(p) {
            return self.closest_point(p);
        }
        let axes = [self.x, self.y, self.z];
        let mut out = p.to_array();
        let mut best: Option<(usize, T, T)> = None;
        for (axis, range) in axes.iter().enumerate() {
            let v = out[axis];
            for face in [range.min(), range.max()] {
                let d = (v - face).abs();
                match best {
                    Some((_, bd, _)) if bd <= d => {}
                    _ => best = Some((axis, d, face)),
                }
            }
        }
        if let Some((axis, _, face)) = best {
            out[axis] = face;
        }
        Vec3::from(out)
    }

    /// Returns the eight corners, x varying slowest.
    pub fn corners(&self) -> [Vec3<T>; 8] {
        let (lo, hi) = (self.min(), self.max());
        let (x0, y0, z0) = (lo.x(), lo.y(), lo.z());
        let (x1, y1, z1) = (hi.x(), hi.y(), hi.z());
        [
            Vec3::new(x0, y0, z0),
            Vec3::new(x0, y0, z1),
            Vec3::new(x0, y1, z0),
            Vec3::new(x0, y1, z1),
            Vec3::new(x1, y0, z0),
            Vec3::new(x1, y0, z1),
            Vec3::new(x1, y1, z0),
            Vec3::new(x1, y1, z1),
        ]
    }

    /// Bounds of this box after the linear map `m`.
    ///
    /// Evaluates the eight corners and wraps them in a new axis-aligned box.
    pub fn transformed_linear(&self, m: &Mat3<T>) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        let mut out = Self::EMPTY;
        for c in &self.corners() {
            out.extend_by_point(m.transform(c));
        }
        out
    }

    /// Bounds of this box after the affine transform `m` (points, `w = 1`).
    pub fn transformed(&self, m: &Mat4<T>) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        let mut out = Self::EMPTY;
        for c in &self.corners() {
            out.extend_by_point(m.transform_point(c));
        }
        out
    }
}

impl<T: Scalar> Default for Box3<T> {
    fn default() -> Self {
        Self::EMPTY
    }
}
