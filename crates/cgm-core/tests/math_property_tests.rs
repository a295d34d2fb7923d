// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use cgm_core::{solve_cubic, solve_eigen_symm_2x2, solve_quadratic, Mat3, Mat4, Quat, Vec2, Vec3};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f64> {
    -100.0..100.0_f64
}

fn vec3() -> impl Strategy<Value = Vec3> {
    (coord(), coord(), coord()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    #[test]
    fn eigen_decomposition_reconstructs_matrix(e in coord(), f in coord(), g in coord()) {
        let r = solve_eigen_symm_2x2(e, f, g);
        prop_assert!(r.lambda1 <= r.lambda2);
        prop_assert!((r.e1.length() - 1.0).abs() < 1e-9);
        prop_assert!((r.e2.length() - 1.0).abs() < 1e-9);
        let scale = 1.0 + e.abs() + f.abs() + g.abs();
        for (lambda, v) in [(r.lambda1, r.e1), (r.lambda2, r.e2)] {
            let mv = Vec2::new(e * v.x() + f * v.y(), f * v.x() + g * v.y());
            prop_assert!(mv.approx_eq(&v.scale(lambda), 1e-7 * scale));
        }
    }

    #[test]
    fn quadratic_roots_satisfy_equation(
        r1 in -50.0..50.0_f64,
        r2 in -50.0..50.0_f64,
        a in prop_oneof![-10.0..-0.1_f64, 0.1..10.0_f64],
    ) {
        let (b, c) = (-a * (r1 + r2), a * r1 * r2);
        let (x1, x2) = solve_quadratic(a, b, c).unwrap_or((f64::NAN, f64::NAN));
        let mut found = [x1, x2];
        found.sort_by(|p, q| p.total_cmp(q));
        let mut expected = [r1, r2];
        expected.sort_by(|p, q| p.total_cmp(q));
        for (x, e) in found.iter().zip(expected) {
            prop_assert!((x - e).abs() < 1e-6 * (1.0 + e.abs()), "{found:?} vs {expected:?}");
        }
    }

    #[test]
    fn cubic_roots_are_sorted_and_vanish(
        a in prop_oneof![-5.0..-0.5_f64, 0.5..5.0_f64],
        b in coord(), c in coord(), d in coord(),
    ) {
        let roots = solve_cubic(a, b, c, d);
        prop_assert!(!roots.is_empty());
        prop_assert!(roots.as_slice().windows(2).all(|w| w[0] < w[1]));
        for &x in &roots {
            let residual = ((a * x + b) * x + c) * x + d;
            let scale = a.abs() * x.abs().powi(3) + b.abs() * x * x + c.abs() * x.abs() + d.abs();
            prop_assert!(residual.abs() <= 1e-8 * (1.0 + scale), "x={x} residual={residual}");
        }
    }

    #[test]
    fn normalize_yields_unit_or_zero(v in vec3()) {
        let n = v.normalize();
        if v.length() > 1e-5 {
            prop_assert!((n.length() - 1.0).abs() < 1e-12);
        } else {
            prop_assert_eq!(n, Vec3::ZERO);
        }
    }

    #[test]
    fn cross_is_orthogonal(a in vec3(), b in vec3()) {
        let c = a.cross(&b);
        let tol = 1e-9 * (1.0 + a.length_squared() * b.length());
        prop_assert!(c.dot(&a).abs() <= tol);
        prop_assert!(c.dot(&b).abs() <= tol);
    }

    #[test]
    fn rotation_matrices_invert_by_transpose(axis in vec3(), angle in -6.3..6.3_f64) {
        let m = Mat3::from_axis_angle(axis, angle);
        let inv = m.inverse().unwrap_or_default();
        prop_assert!(inv.approx_eq(&m.transpose(), 1e-9));
        prop_assert!((m.det() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn quat_matrix_round_trip(axis in vec3(), angle in -3.1..3.1_f64) {
        prop_assume!(axis.length() > 1e-3);
        let q = Quat::from_axis_angle(axis, angle);
        let back = Quat::from_mat3(&q.to_mat3());
        // q and -q encode the same rotation.
        prop_assert!(back.approx_eq(&q, 1e-9) || back.approx_eq(&-q, 1e-9));
    }

    #[test]
    fn affine_inverse_undoes_transform(t in vec3(), axis in vec3(), angle in -3.0..3.0_f64, p in vec3()) {
        let m = Mat4::translation(t.x(), t.y(), t.z()) * Mat4::rotation_axis_angle(axis, angle);
        let inv = m.inverse_affine().unwrap_or_default();
        let back = inv.transform_point(&m.transform_point(&p));
        prop_assert!(back.approx_eq(&p, 1e-9));
    }
}
