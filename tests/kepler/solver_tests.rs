use approx::assert_relative_eq;
use kestrel::{
    solve_kepler_equation, ErrorCode, IterationParameters, SolverMethod, StarterMethod,
};

/// Residual of the solved equation, the ground truth for every method.
fn residual(ecc: f64, ma: f64, ea: f64) -> f64 {
    (ea - ecc * ea.sin() - ma).abs()
}

fn solve(ecc: f64, ma: f64, solver: SolverMethod) -> (f64, ErrorCode, IterationParameters) {
    let mut p = IterationParameters::new();
    let (ea, status) = solve_kepler_equation(ecc, ma, StarterMethod::S3, solver, &mut p);
    (ea, status, p)
}

#[test]
fn iterative_methods_converge_to_full_precision() {
    let (ecc, ma) = (0.3, 2.0);
    for solver in [
        SolverMethod::Bisection,
        SolverMethod::Danby4,
        SolverMethod::Danby5,
        SolverMethod::Halley,
        SolverMethod::LaguerreConway,
        SolverMethod::NewtonRaphson,
        SolverMethod::Secant,
        SolverMethod::Wegstein,
    ] {
        let (ea, status, p) = solve(ecc, ma, solver);
        assert_eq!(status, ErrorCode::None, "{solver:?}");
        assert!(residual(ecc, ma, ea) < 1e-9, "{solver:?}: E = {ea}");
        assert!(p.iterations() > 0, "{solver:?}");
        assert!(p.iterations() <= p.max_iter(), "{solver:?}");
    }
}

#[test]
fn fixed_point_converges_at_low_eccentricity() {
    let (ecc, ma) = (0.2, 2.0);
    let (ea, status, p) = solve(ecc, ma, SolverMethod::FixedPoint);
    assert_eq!(status, ErrorCode::None);
    assert!(residual(ecc, ma, ea) < 1e-9);
    assert!(p.iterations() > 1);
}

#[test]
fn two_phase_methods_report_one_iteration() {
    let (ecc, ma) = (0.3, 2.0);
    for solver in [
        SolverMethod::Markley,
        SolverMethod::Mikkola,
        SolverMethod::Nijenhuis,
    ] {
        let (ea, status, p) = solve(ecc, ma, solver);
        assert_eq!(status, ErrorCode::None, "{solver:?}");
        assert_eq!(p.iterations(), 1, "{solver:?}");
        assert!(residual(ecc, ma, ea) < 1e-6, "{solver:?}: E = {ea}");
    }
}

#[test]
fn newton_matches_reference_values() {
    for &(ecc, ma, expected) in &[
        (0.567, 1.234, 1.787_712_770_105_486_4),
        (0.3, 2.0, 2.236_031_495_172_436_5),
        (0.9, 0.2, 0.911_235_004_618_190_7),
        (0.8, 3.0, 3.062_893_974_340_374_1),
        (0.95, 0.05, 0.531_420_642_466_566_0),
    ] {
        let (ea, status, _) = solve(ecc, ma, SolverMethod::NewtonRaphson);
        assert_eq!(status, ErrorCode::None);
        assert_relative_eq!(ea, expected, epsilon = 1e-11);
    }
}

#[test]
fn high_eccentricity_near_periapsis() {
    // the hard corner of the elliptic domain
    let (ecc, ma) = (0.99, 0.01);
    for solver in [
        SolverMethod::Bisection,
        SolverMethod::LaguerreConway,
        SolverMethod::Markley,
        SolverMethod::Mikkola,
        SolverMethod::Nijenhuis,
    ] {
        let (ea, status, _) = solve(ecc, ma, solver);
        assert_eq!(status, ErrorCode::None, "{solver:?}");
        assert!(residual(ecc, ma, ea) < 1e-6, "{solver:?}: E = {ea}");
    }
}

#[test]
fn every_solver_recovers_the_anomaly_round_trip() {
    // forward map M = x - e*sin(x), then solve back to x, on a grid over
    // the whole eccentricity range and a full turn of anomalies
    let eccentricities = [0.05, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9];
    let solvers = [
        SolverMethod::Bisection,
        SolverMethod::Danby4,
        SolverMethod::Danby5,
        SolverMethod::FixedPoint,
        SolverMethod::Halley,
        SolverMethod::LaguerreConway,
        SolverMethod::Markley,
        SolverMethod::Mikkola,
        SolverMethod::NewtonRaphson,
        SolverMethod::Nijenhuis,
        SolverMethod::Secant,
        SolverMethod::Wegstein,
    ];

    for &ecc in &eccentricities {
        for k in 0..12 {
            // mid-interval samples: x = 0 is a fixed point of every method
            // and degenerates Wegstein's two seed points into one
            let x = (f64::from(k) + 0.5) * std::f64::consts::TAU / 12.0;
            let ma = x - ecc * x.sin();

            for solver in solvers {
                let (ea, status, _) = solve(ecc, ma, solver);
                assert_eq!(status, ErrorCode::None, "{solver:?} e={ecc} x={x}");

                // compare modulo a full turn (x = 0 may come back as 2*pi)
                let d = (ea - x).abs();
                let d = d.min((d - std::f64::consts::TAU).abs());
                assert!(d < 1e-6, "{solver:?} e={ecc} x={x}: E = {ea}");
            }
        }
    }
}

#[test]
fn newton_residual_is_monotone_in_the_iteration_cap() {
    // truncating the loop earlier can never produce a better residual
    let (ecc, ma) = (0.567, 1.234);
    let mut last = f64::INFINITY;

    for cap in 1..=8 {
        let mut p = IterationParameters::new();
        p.set_max_iter(cap).unwrap();
        let (_, status) = solve_kepler_equation(
            ecc,
            ma,
            StarterMethod::S1,
            SolverMethod::NewtonRaphson,
            &mut p,
        );
        assert_eq!(status, ErrorCode::None);
        assert!(
            p.residual_error() <= last + 1e-15,
            "cap {cap}: {} > {last}",
            p.residual_error()
        );
        last = p.residual_error();
    }
}

#[test]
fn bisection_short_circuits_on_a_wide_step_tolerance() {
    let mut p = IterationParameters::new();
    p.set_tol_x(0.5).unwrap();

    let (ea, status) = solve_kepler_equation(
        0.3,
        2.0,
        StarterMethod::S1,
        SolverMethod::Bisection,
        &mut p,
    );

    // bracket [M, M + e] is already narrower than tol_x: midpoint, one step
    assert_eq!(status, ErrorCode::None);
    assert_eq!(p.iterations(), 1);
    assert_relative_eq!(ea, 2.0 + 0.15, epsilon = 1e-14);
}

#[test]
fn solver_method_none_fails() {
    let mut p = IterationParameters::new();
    let (ea, status) =
        solve_kepler_equation(0.3, 2.0, StarterMethod::S1, SolverMethod::None, &mut p);
    assert_eq!(status, ErrorCode::BadSolverMethod);
    assert_eq!(ea, 0.0);
}

#[test]
fn descriptions_are_stable() {
    assert_eq!(SolverMethod::None.description(), "invalid solver method");
    assert_eq!(
        SolverMethod::Bisection.to_string(),
        "Bisection method (interval halving)"
    );
    assert_eq!(
        SolverMethod::Danby5.description(),
        "Danby-Burkardt method of order 5"
    );
    assert_eq!(
        SolverMethod::Wegstein.description(),
        "Wegstein's secant modification"
    );
}
