// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Index, IndexMut};

use cgm_core::{Scalar, Vec2};
use tracing::{debug, instrument};

use crate::types::box2::Box2;

/// Tolerance used for arc-length queries when the caller has no preference.
pub const DEFAULT_LENGTH_TOLERANCE: f64 = 0.1;

/// Deepest subdivision level [`BezierCurve2::length`] will recurse to.
///
/// Bounds the work for tolerances below what the scalar type can resolve.
pub const MAX_SUBDIVISION_DEPTH: u32 = 16;

const MAX_BISECTION_STEPS: u32 = 64;

/// Planar cubic Bezier curve defined by four control points.
///
/// The curve starts at `p0` (`t = 0`) and ends at `p3` (`t = 1`); `p1` and
/// `p2` shape the tangents at the ends.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BezierCurve2<T = f64> {
    points: [Vec2<T>; 4],
}

impl<T: Scalar> BezierCurve2<T> {
    /// Creates a curve from its four control points.
    pub const fn new(p0: Vec2<T>, p1: Vec2<T>, p2: Vec2<T>, p3: Vec2<T>) -> Self {
        Self {
            points: [p0, p1, p2, p3],
        }
    }

    /// Straight segment from `p0` to `p3` (control points `p0 p0 p3 p3`).
    pub const fn from_endpoints(p0: Vec2<T>, p3: Vec2<T>) -> Self {
        Self::new(p0, p0, p3, p3)
    }

    /// Control points in order.
    pub fn points(&self) -> &[Vec2<T>; 4] {
        &self.points
    }

    /// Length of the control polygon `|p0p1| + |p1p2| + |p2p3|`.
    ///
    /// Always an upper bound on the arc length.
    pub fn poly_length(&self) -> T {
        let [p0, p1, p2, p3] = &self.points;
        p0.distance(p1) + p1.distance(p2) + p2.distance(p3)
    }

    /// Distance between the end points; a lower bound on the arc length.
    pub fn chord_length(&self) -> T {
        self.points[0].distance(&self.points[3])
    }

    /// Arc length, accurate to roughly `eps`.
    ///
    /// Subdivides at `t = 0.5` until the polygon and chord lengths agree
    /// within the (halved per level) tolerance, then combines them as
    /// `(2·chord + 3·poly) / 5`.
    pub fn length(&self, eps: T) -> T {
        self.length_at_depth(eps, 0)
    }

    fn length_at_depth(&self, eps: T, depth: u32) -> T {
        let lp = self.poly_length();
        let lc = self.chord_length();
        let converged = lp - lc < eps;
        if converged || depth >= MAX_SUBDIVISION_DEPTH {
            if !converged {
                debug!(depth, gap = ?(lp - lc), ?eps, "subdivision depth cap reached");
            }
            return (T::TWO * lc + T::from_f64(3.0) * lp) / T::from_f64(5.0);
        }
        let (l, r) = self.split();
        let half = eps * T::HALF;
        l.length_at_depth(half, depth + 1) + r.length_at_depth(half, depth + 1)
    }

    /// Arc length of the part of the curve between `0` and `t`.
    pub fn arc_length(&self, t: T, eps: T) -> T {
        self.left(t).length(eps)
    }

    /// Parameter `t` at which the arc length from the start equals `len`.
    ///
    /// Returns `0` for `len <= 0` and `1` for lengths at or beyond the full
    /// curve. Otherwise bisects on `t` until the measured arc length is
    /// within `eps` of `len`, giving up after a fixed number of steps.
    #[instrument(level = "debug", skip(self))]
    pub fn parameter_at_length(&self, len: T, eps: T) -> T {
        if len <= T::ZERO {
            return T::ZERO;
        }
        if len >= self.length(eps) {
            return T::ONE;
        }
        let (mut lo, mut hi) = (T::ZERO, T::ONE);
        let mut t = T::HALF;
        for _ in 0..MAX_BISECTION_STEPS {
            let s = self.arc_length(t, eps);
            if (s - len).abs() < eps {
                return t;
            }
            if s < len {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) * T::HALF;
        }
        debug!(?t, "bisection step budget exhausted");
        t
    }

    /// Polar form `f(t1, t2, t3)`; `blossom(t, t, t) == eval(t)`.
    pub fn blossom(&self, t1: T, t2: T, t3: T) -> Vec2<T> {
        let [p0, p1, p2, p3] = self.points;
        let q0 = p0.lerp(&p1, t1);
        let q1 = p1.lerp(&p2, t1);
        let q2 = p2.lerp(&p3, t1);
        let r0 = q0.lerp(&q1, t2);
        let r1 = q1.lerp(&q2, t2);
        r0.lerp(&r1, t3)
    }

    /// Point on the curve at `t`.
    pub fn eval(&self, t: T) -> Vec2<T> {
        let [p0, p1, p2, p3] = self.points;
        let s = T::ONE - t;
        let three = T::from_f64(3.0);
        p0 * (s * s * s) + p1 * (three * t * s * s) + p2 * (three * t * t * s) + p3 * (t * t * t)
    }

    /// Tangent `dB/dt` at `t`.
    pub fn first_derivative(&self, t: T) -> Vec2<T> {
        let [p0, p1, p2, p3] = self.points;
        let s = T::ONE - t;
        let three = T::from_f64(3.0);
        let six = T::from_f64(6.0);
        p0 * (-three * s * s)
            + p1 * (three * s * s - six * s * t)
            + p2 * (six * s * t - three * t * t)
            + p3 * (three * t * t)
    }

    /// Second derivative `d²B/dt²` at `t`.
    pub fn second_derivative(&self, t: T) -> Vec2<T> {
        let [p0, p1, p2, p3] = self.points;
        let s = T::ONE - t;
        let six = T::from_f64(6.0);
        let twelve = T::from_f64(12.0);
        p0 * (six * s) + p1 * (six * t - twelve * s) + p2 * (six * s - twelve * t) + p3 * (six * t)
    }

    /// Unit normal at `t`: the unit tangent rotated clockwise, `(ty, -tx)`.
    ///
    /// Zero where the tangent vanishes.
    pub fn normal(&self, t: T) -> Vec2<T> {
        let tn = self.first_derivative(t).normalize();
        Vec2::new(tn.y(), -tn.x())
    }

    /// Splits the curve at `t = 0.5`.
    pub fn split(&self) -> (Self, Self) {
        self.divide(T::HALF)
    }

    /// The part of the curve over `[0, t]`, reparametrised to `[0, 1]`.
    pub fn left(&self, t: T) -> Self {
        self.divide(t).0
    }

    /// The part of the curve over `[t, 1]`, reparametrised to `[0, 1]`.
    pub fn right(&self, t: T) -> Self {
        self.divide(t).1
    }

    /// De Casteljau subdivision at `t` into `[0, t]` and `[t, 1]`.
    pub fn divide(&self, t: T) -> (Self, Self) {
        let [p0, p1, p2, p3] = self.points;
        let q0 = p0.lerp(&p1, t);
        let q1 = p1.lerp(&p2, t);
        let q2 = p2.lerp(&p3, t);
        let r0 = q0.lerp(&q1, t);
        let r1 = q1.lerp(&q2, t);
        let s0 = r0.lerp(&r1, t);
        (Self::new(p0, q0, r0, s0), Self::new(s0, r1, q2, p3))
    }

    /// The part of the curve over `[t0, t1]`, computed by blossoming.
    pub fn segment(&self, t0: T, t1: T) -> Self {
        Self::new(
            self.eval(t0),
            self.blossom(t0, t0, t1),
            self.blossom(t0, t1, t1),
            self.eval(t1),
        )
    }

    /// Bounds of the control polygon, which contain the whole curve.
    pub fn control_bounds(&self) -> Box2<T> {
        Box2::from_points(&self.points)
    }
}

impl<T: Scalar> Index<usize> for BezierCurve2<T> {
    type Output = Vec2<T>;
    fn index(&self, index: usize) -> &Vec2<T> {
        &self.points[index]
    }
}

impl<T: Scalar> IndexMut<usize> for BezierCurve2<T> {
    fn index_mut(&mut self, index: usize) -> &mut Vec2<T> {
        &mut self.points[index]
    }
}
