// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use cgm_core::{SymmetricEigen2, Vec2};
use cgm_geom::BezierCurve2;
use serde::Serialize;

/// Number of coordinates describing a planar cubic Bezier curve.
pub const CURVE_COORDS: usize = 8;

/// Builds a curve from `x0 y0 x1 y1 x2 y2 x3 y3`.
///
/// Returns `None` unless exactly eight coordinates are given.
pub fn curve_from_coords(coords: &[f64]) -> Option<BezierCurve2<f64>> {
    let [x0, y0, x1, y1, x2, y2, x3, y3] = *coords else {
        return None;
    };
    Some(BezierCurve2::new(
        Vec2::new(x0, y0),
        Vec2::new(x1, y1),
        Vec2::new(x2, y2),
        Vec2::new(x3, y3),
    ))
}

/// Formats `values` with `precision` fractional digits, space separated.
pub fn format_values(values: &[f64], precision: usize) -> String {
    values
        .iter()
        .map(|v| format!("{v:.precision$}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats the eight control coordinates of `curve`.
pub fn format_curve(curve: &BezierCurve2<f64>, precision: usize) -> String {
    let coords: Vec<f64> = curve.points().iter().flat_map(|p| p.to_array()).collect();
    format_values(&coords, precision)
}

/// Real roots of a polynomial; empty when there are none.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RootsReport {
    /// Roots in the order the solver produced them.
    pub roots: Vec<f64>,
}

impl RootsReport {
    /// Plain-text form: the roots, or `no real roots`.
    pub fn to_text(&self, precision: usize) -> String {
        if self.roots.is_empty() {
            "no real roots".to_owned()
        } else {
            format_values(&self.roots, precision)
        }
    }
}

/// Plain-text form of an eigen-decomposition, one `lambda ex ey` line per pair.
pub fn eigen_text(r: &SymmetricEigen2<f64>, precision: usize) -> String {
    format!(
        "{}\n{}",
        format_values(&[r.lambda1, r.e1.x(), r.e1.y()], precision),
        format_values(&[r.lambda2, r.e2.x(), r.e2.y()], precision),
    )
}

/// Arc length of a curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LengthReport {
    /// Measured length.
    pub length: f64,
    /// Tolerance the measurement used.
    pub tolerance: f64,
}

/// Parameter found for a target arc length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamReport {
    /// Requested arc length.
    pub length: f64,
    /// Curve parameter in `[0, 1]`.
    pub t: f64,
}

/// The two halves produced by subdividing a curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitReport {
    /// Parameter the curve was divided at.
    pub at: f64,
    /// Part over `[0, at]`.
    pub left: BezierCurve2<f64>,
    /// Part over `[at, 1]`.
    pub right: BezierCurve2<f64>,
}

impl SplitReport {
    /// Plain-text form: one line of control coordinates per half.
    pub fn to_text(&self, precision: usize) -> String {
        format!(
            "{}\n{}",
            format_curve(&self.left, precision),
            format_curve(&self.right, precision)
        )
    }
}

/// A single noise sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoiseReport {
    /// Generator name.
    pub kind: String,
    /// Sample position.
    pub at: [f64; 3],
    /// Noise value.
    pub value: f64,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn curves_need_exactly_eight_coordinates() {
        assert!(curve_from_coords(&[0.0; 7]).is_none());
        assert!(curve_from_coords(&[0.0; 9]).is_none());
        let c = curve_from_coords(&[0.0, 0.0, 1.0, 0.0, 2.0, 0.0, 3.0, 0.0]).unwrap();
        assert_eq!(c[3], Vec2::new(3.0, 0.0));
        assert_eq!(format_curve(&c, 1), "0.0 0.0 1.0 0.0 2.0 0.0 3.0 0.0");
    }

    #[test]
    fn roots_text() {
        let none = RootsReport { roots: vec![] };
        assert_eq!(none.to_text(3), "no real roots");
        let two = RootsReport {
            roots: vec![2.0, -3.0],
        };
        assert_eq!(two.to_text(2), "2.00 -3.00");
    }

    #[test]
    fn eigen_text_has_one_line_per_pair() {
        let r = cgm_core::solve_eigen_symm_2x2(1.0, 0.0, 2.0);
        assert_eq!(eigen_text(&r, 1), "1.0 1.0 0.0\n2.0 0.0 1.0");
    }

    #[test]
    fn split_serializes_control_points() {
        let c = curve_from_coords(&[0.0, 0.0, 1.0, 0.0, 2.0, 0.0, 3.0, 0.0]).unwrap();
        let (left, right) = c.split();
        let report = SplitReport {
            at: 0.5,
            left,
            right,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["left"]["points"][3], serde_json::json!([1.5, 0.0]));
        assert_eq!(report.to_text(2).lines().count(), 2);
    }
}
