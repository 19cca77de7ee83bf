use std::f64::consts::TAU;

use approx::assert_relative_eq;
use kestrel::{
    solve_kepler_equation, ErrorCode, IterationParameters, SolverMethod, StarterMethod,
};

fn solve_with(
    ecc: f64,
    ma: f64,
    starter: StarterMethod,
    solver: SolverMethod,
) -> (f64, ErrorCode, IterationParameters) {
    let mut p = IterationParameters::new();
    let (ea, status) = solve_kepler_equation(ecc, ma, starter, solver, &mut p);
    (ea, status, p)
}

#[test]
fn reference_scenario() {
    let (ea, status, p) = solve_with(
        0.567,
        1.234,
        StarterMethod::S1,
        SolverMethod::NewtonRaphson,
    );

    assert_eq!(status, ErrorCode::None);
    assert_relative_eq!(ea, 1.787_712_770_105_486_4, epsilon = 1e-12);
    assert!(p.iterations() < 10);
}

#[test]
fn circular_orbit_is_exact_and_immediate() {
    let (ea, status, p) = solve_with(0.0, 3.7, StarterMethod::S1, SolverMethod::Halley);

    assert_eq!(status, ErrorCode::None);
    assert_eq!(ea, 3.7);
    assert_eq!(p.result(), 3.7);
    assert_eq!(p.iterations(), 0);
}

#[test]
fn negative_reduced_anomaly_is_reflected() {
    // M = 5.0 reduces to 5.0 - 2*pi < 0; solve |M| and mirror the result
    let (ea, status, _) = solve_with(0.2, 5.0, StarterMethod::S3, SolverMethod::Halley);

    assert_eq!(status, ErrorCode::None);
    assert_relative_eq!(ea, 4.800_780_802_854_125, epsilon = 1e-11);
    // the mirrored result still satisfies the unreduced equation mod 2*pi
    let residual = ea - 0.2 * ea.sin() - (5.0 - TAU);
    assert_relative_eq!(residual, TAU, epsilon = 1e-11);
}

#[test]
fn large_mean_anomaly_agrees_with_its_reduction() {
    let (big, status_big, _) =
        solve_with(0.4, 1.0 + 5.0 * TAU, StarterMethod::S3, SolverMethod::Danby5);
    let (small, status_small, _) = solve_with(0.4, 1.0, StarterMethod::S3, SolverMethod::Danby5);

    assert_eq!(status_big, ErrorCode::None);
    assert_eq!(status_small, ErrorCode::None);
    assert_relative_eq!(big, small, epsilon = 1e-9);
}

#[test]
fn non_finite_inputs_fail_fast() {
    for (ecc, ma) in [
        (f64::NAN, 1.0),
        (0.5, f64::NAN),
        (f64::INFINITY, 1.0),
        (0.5, f64::NEG_INFINITY),
    ] {
        let (ea, status, p) = solve_with(ecc, ma, StarterMethod::S1, SolverMethod::Halley);
        assert_eq!(status, ErrorCode::BadValue);
        assert_eq!(ea, 0.0);
        assert_eq!(p.iterations(), 0);
    }
}

#[test]
fn non_elliptic_eccentricities_are_rejected() {
    for ecc in [-100.0, -1e-6, 1.0, 1.0 + 1e-11, 2.0, 1e4] {
        let (ea, status, _) = solve_with(ecc, 1.0, StarterMethod::S1, SolverMethod::Halley);
        assert_eq!(status, ErrorCode::BadEccentricity, "ecc = {ecc}");
        assert_eq!(ea, 0.0);
    }
}

#[test]
fn void_starter_falls_back_and_still_converges() {
    let (ea, status, p) = solve_with(
        0.567,
        1.234,
        StarterMethod::None,
        SolverMethod::NewtonRaphson,
    );

    // non-fatal: the fallback starter M + e is used and reported
    assert_eq!(status, ErrorCode::BadStarterMethod);
    assert_eq!(p.starter(), 1.234 + 0.567);
    assert_relative_eq!(ea, 1.787_712_770_105_486_4, epsilon = 1e-11);
}

#[test]
fn nijenhuis_overrides_the_requested_starter() {
    // the starter argument is replaced by S7 internally, so even the void
    // starter method succeeds cleanly
    let (ea, status, p) = solve_with(
        0.567,
        1.234,
        StarterMethod::None,
        SolverMethod::Nijenhuis,
    );

    assert_eq!(status, ErrorCode::None);
    assert_eq!(p.iterations(), 1);
    assert_relative_eq!(ea, 1.787_712_770_105_486_4, epsilon = 1e-6);
}

#[test]
fn starter_choice_does_not_change_the_root() {
    let starters = [
        StarterMethod::S0,
        StarterMethod::S2,
        StarterMethod::S5,
        StarterMethod::S7,
        StarterMethod::S11,
        StarterMethod::S13,
        StarterMethod::S14,
    ];

    let (reference, _, _) = solve_with(0.3, 1.0, StarterMethod::S1, SolverMethod::Halley);
    assert_relative_eq!(reference, 1.288_091_313_211_837_7, epsilon = 1e-11);

    for starter in starters {
        let (ea, status, _) = solve_with(0.3, 1.0, starter, SolverMethod::Halley);
        assert_eq!(status, ErrorCode::None, "{starter:?}");
        assert_relative_eq!(ea, reference, epsilon = 1e-10);
    }
}

#[test]
fn evaluation_counters_are_populated() {
    let (_, status, p) = solve_with(0.3, 2.0, StarterMethod::S1, SolverMethod::NewtonRaphson);

    assert_eq!(status, ErrorCode::None);
    // kernel step + residual check per iteration
    assert_eq!(p.sin_evals(), 2 * p.iterations());
    assert_eq!(p.cos_evals(), p.iterations());
    assert_eq!(p.fn_evals(), 2 * p.iterations());
}
