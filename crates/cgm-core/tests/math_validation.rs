// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixture-driven validation of the scalar helpers, root solvers,
//! eigensolver and rotation constructors.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, missing_docs)]

use once_cell::sync::Lazy;
use serde::Deserialize;

use cgm_core::{
    clamp, degrees, radians, smoothstep, solve_cubic, solve_eigen_symm_2x2, solve_quadratic, Mat3,
    Quat, Vec3,
};

static RAW_FIXTURES: &str = include_str!("fixtures/math-fixtures.json");

static FIXTURES: Lazy<MathFixtures> = Lazy::new(|| {
    let fixtures: MathFixtures =
        serde_json::from_str(RAW_FIXTURES).expect("failed to parse math fixtures");
    fixtures.validate();
    fixtures
});

#[derive(Debug, Deserialize)]
struct MathFixtures {
    #[serde(default)]
    tolerance: Tolerance,
    scalars: ScalarFixtures,
    quadratic: Vec<QuadraticFixture>,
    cubic: Vec<CubicFixture>,
    eigen: Vec<EigenFixture>,
    quat: QuatFixtures,
    mat3: Mat3Fixtures,
}

impl MathFixtures {
    fn validate(&self) {
        fn ensure<T>(name: &str, slice: &[T]) {
            assert!(
                !slice.is_empty(),
                "math fixtures set '{name}' must not be empty (len={})",
                slice.len()
            );
        }

        ensure("scalars.radians", &self.scalars.radians);
        ensure("scalars.degrees", &self.scalars.degrees);
        ensure("scalars.clamp", &self.scalars.clamp);
        ensure("scalars.smoothstep", &self.scalars.smoothstep);
        ensure("quadratic", &self.quadratic);
        ensure("cubic", &self.cubic);
        ensure("eigen", &self.eigen);
        ensure("quat.from_axis_angle", &self.quat.from_axis_angle);
        ensure("mat3.inverse", &self.mat3.inverse);
    }
}

#[derive(Debug, Clone, Deserialize)]
struct Tolerance {
    #[serde(default = "Tolerance::default_absolute")]
    absolute: f64,
    #[serde(default = "Tolerance::default_relative")]
    relative: f64,
}

impl Tolerance {
    const fn default_absolute() -> f64 {
        1e-9
    }

    const fn default_relative() -> f64 {
        1e-9
    }

    fn allowed_error(&self, reference: f64) -> f64 {
        self.absolute.max(self.relative * reference.abs())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            absolute: Self::default_absolute(),
            relative: Self::default_relative(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ScalarFixtures {
    radians: Vec<UnaryFixture>,
    degrees: Vec<UnaryFixture>,
    clamp: Vec<ClampFixture>,
    smoothstep: Vec<SmoothstepFixture>,
}

#[derive(Debug, Deserialize)]
struct UnaryFixture {
    value: f64,
    expected: f64,
}

#[derive(Debug, Deserialize)]
struct ClampFixture {
    value: f64,
    min: f64,
    max: f64,
    expected: f64,
}

#[derive(Debug, Deserialize)]
struct SmoothstepFixture {
    a: f64,
    b: f64,
    x: f64,
    expected: f64,
}

#[derive(Debug, Deserialize)]
struct QuadraticFixture {
    a: f64,
    b: f64,
    c: f64,
    expected: Option<[f64; 2]>,
}

#[derive(Debug, Deserialize)]
struct CubicFixture {
    coefficients: [f64; 4],
    expected: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct EigenFixture {
    e: f64,
    f: f64,
    g: f64,
    lambda1: f64,
    e1: [f64; 2],
    lambda2: f64,
    e2: [f64; 2],
}

#[derive(Debug, Deserialize)]
struct QuatFixtures {
    from_axis_angle: Vec<QuatAxisAngleFixture>,
}

#[derive(Debug, Deserialize)]
struct QuatAxisAngleFixture {
    axis: [f64; 3],
    angle: f64,
    expected: [f64; 4],
}

#[derive(Debug, Deserialize)]
struct Mat3Fixtures {
    inverse: Vec<Mat3InverseFixture>,
}

#[derive(Debug, Deserialize)]
struct Mat3InverseFixture {
    rows: [[f64; 3]; 3],
    det: f64,
    expected: [[f64; 3]; 3],
}

fn assert_scalar(actual: f64, expected: f64, tol: &Tolerance, ctx: &str) {
    let diff = (actual - expected).abs();
    let allowed = tol.allowed_error(expected);
    assert!(
        diff <= allowed,
        "{ctx}: expected {expected}, got {actual} (diff {diff} > {allowed})"
    );
}

fn assert_slice(actual: &[f64], expected: &[f64], tol: &Tolerance, ctx: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{ctx}: expected {expected:?}, got {actual:?}"
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert_scalar(*a, *e, tol, &format!("{ctx}[{i}]"));
    }
}

#[test]
fn scalar_fixtures_all_match() {
    let tol = &FIXTURES.tolerance;
    for fix in &FIXTURES.scalars.radians {
        let actual = radians(fix.value);
        assert_scalar(actual, fix.expected, tol, &format!("radians value={}", fix.value));
    }
    for fix in &FIXTURES.scalars.degrees {
        let actual = degrees(fix.value);
        assert_scalar(actual, fix.expected, tol, &format!("degrees value={}", fix.value));
    }
    for fix in &FIXTURES.scalars.clamp {
        let actual = clamp(fix.value, fix.min, fix.max);
        assert_scalar(
            actual,
            fix.expected,
            tol,
            &format!("clamp value={}, range=[{}, {}]", fix.value, fix.min, fix.max),
        );
    }
    for fix in &FIXTURES.scalars.smoothstep {
        let actual = smoothstep(fix.a, fix.b, fix.x);
        assert_scalar(
            actual,
            fix.expected,
            tol,
            &format!("smoothstep edges=[{}, {}] x={}", fix.a, fix.b, fix.x),
        );
    }
}

#[test]
fn quadratic_fixtures_preserve_root_order() {
    let tol = &FIXTURES.tolerance;
    for fix in &FIXTURES.quadratic {
        let ctx = format!("quadratic a={} b={} c={}", fix.a, fix.b, fix.c);
        match (solve_quadratic(fix.a, fix.b, fix.c), fix.expected) {
            (None, None) => {}
            (Some((x1, x2)), Some(expected)) => assert_slice(&[x1, x2], &expected, tol, &ctx),
            (actual, expected) => panic!("{ctx}: expected {expected:?}, got {actual:?}"),
        }
    }
}

#[test]
fn cubic_fixtures_find_all_real_roots() {
    let tol = &FIXTURES.tolerance;
    for fix in &FIXTURES.cubic {
        let [a, b, c, d] = fix.coefficients;
        let roots = solve_cubic(a, b, c, d);
        assert_slice(
            roots.as_slice(),
            &fix.expected,
            tol,
            &format!("cubic coefficients={:?}", fix.coefficients),
        );
    }
}

#[test]
fn eigen_fixtures_match_reference_decomposition() {
    let tol = &FIXTURES.tolerance;
    for fix in &FIXTURES.eigen {
        let ctx = format!("eigen e={} f={} g={}", fix.e, fix.f, fix.g);
        let r = solve_eigen_symm_2x2(fix.e, fix.f, fix.g);
        assert_scalar(r.lambda1, fix.lambda1, tol, &format!("{ctx} lambda1"));
        assert_scalar(r.lambda2, fix.lambda2, tol, &format!("{ctx} lambda2"));
        assert_slice(&r.e1.to_array(), &fix.e1, tol, &format!("{ctx} e1"));
        assert_slice(&r.e2.to_array(), &fix.e2, tol, &format!("{ctx} e2"));
    }
}

#[test]
fn quat_fixtures_from_axis_angle() {
    let tol = &FIXTURES.tolerance;
    for fix in &FIXTURES.quat.from_axis_angle {
        let q = Quat::from_axis_angle(Vec3::from(fix.axis), fix.angle);
        assert_slice(
            &q.to_array(),
            &fix.expected,
            tol,
            &format!("quat.from_axis_angle axis={:?} angle={}", fix.axis, fix.angle),
        );
    }
}

#[test]
fn mat3_fixtures_invert() {
    let tol = &FIXTURES.tolerance;
    for fix in &FIXTURES.mat3.inverse {
        let ctx = format!("mat3.inverse rows={:?}", fix.rows);
        let m = Mat3::from_rows(fix.rows);
        assert_scalar(m.det(), fix.det, tol, &format!("{ctx} det"));
        let inv = m.inverse().expect("fixture matrices are invertible");
        let actual: Vec<f64> = inv.to_rows().iter().flatten().copied().collect();
        let expected: Vec<f64> = fix.expected.iter().flatten().copied().collect();
        assert_slice(&actual, &expected, tol, &ctx);
    }
}
