use std::f64::consts::{FRAC_PI_2, PI};

use approx::{assert_abs_diff_eq, assert_relative_eq};
use kestrel::equation::{eval_elliptic, eval_hyperbolic, eval_parabolic};
use kestrel::true_anomaly;

#[test]
fn elliptic_residual_vanishes_at_known_root() {
    // E - 0.567*sin(E) = 1.234 at E = 1.7877127701054864
    let root = 1.787_712_770_105_486_4;
    assert_abs_diff_eq!(eval_elliptic(0.567, 1.234, root), 0.0, epsilon = 1e-14);
}

#[test]
fn elliptic_residual_signs_bracket_the_root() {
    // the root always lies inside [M, M + e]
    let (ecc, ma) = (0.8, 1.5);
    assert!(eval_elliptic(ecc, ma, ma) < 0.0);
    assert!(eval_elliptic(ecc, ma, ma + ecc) > 0.0);
}

#[test]
fn hyperbolic_residual_vanishes_at_constructed_root() {
    // choose H, derive the matching mean anomaly
    let (ecc, h) = (1.5_f64, 0.7_f64);
    let ma = ecc * h.sinh() - h;
    assert_abs_diff_eq!(eval_hyperbolic(ecc, ma, h), 0.0, epsilon = 1e-14);
}

#[test]
fn parabolic_residual_vanishes_at_right_angle() {
    // s = tan(pi/4) = 1, so M = 1 + 1/3
    assert_abs_diff_eq!(eval_parabolic(4.0 / 3.0, FRAC_PI_2), 0.0, epsilon = 1e-14);
}

#[test]
fn true_anomaly_known_elliptic_value() {
    // e = 0.5, E = pi/2 -> v = 2*atan(sqrt(3)) = 2*pi/3
    assert_relative_eq!(
        true_anomaly(0.5, FRAC_PI_2),
        2.0 * PI / 3.0,
        epsilon = 1e-14
    );
}

#[test]
fn true_anomaly_fixed_points() {
    // periapsis maps to periapsis in both regimes
    assert_abs_diff_eq!(true_anomaly(0.3, 0.0), 0.0, epsilon = 1e-15);
    assert_abs_diff_eq!(true_anomaly(2.0, 0.0), 0.0, epsilon = 1e-15);
}

#[test]
fn true_anomaly_leads_eccentric_anomaly() {
    // 0 < E < pi: the true anomaly is always ahead for an ellipse
    for &x in &[0.3, 1.0, 2.0, 3.0] {
        assert!(true_anomaly(0.4, x) > x);
    }
}
