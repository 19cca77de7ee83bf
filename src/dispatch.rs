//! Top-level dispatch: input validation, domain split, mean-anomaly
//! reduction, starter selection, and solver invocation.

use std::f64::consts::TAU;

use log::{debug, trace};

use crate::domain::{check_value, classify, EccentricityDomain};
use crate::errors::ErrorCode;
use crate::params::IterationParameters;
use crate::solver::SolverMethod;
use crate::starter::StarterMethod;
use crate::trig::reduce;

/// Solves Kepler's Equation `M = E - e*sin(E)` for the eccentric anomaly.
///
/// The returned pair is `(result, status)`. The status is
/// [`ErrorCode::None`] on full success; a failed solve (invalid input,
/// non-elliptic eccentricity, unusable solver method) yields `0.0` with
/// the matching code. [`ErrorCode::BadStarterMethod`] is the one
/// non-fatal code: the solve proceeds with the fallback starter `M + e`
/// and still produces a valid result.
///
/// Detailed outputs (starter actually used, error residuals, iteration
/// count, evaluation counters) are written into `params`.
///
/// ┌ validate `ecc`, `ma` to be finite
/// ├ sanitize tolerances and iteration cap in `params`
/// ├ classify the eccentricity domain
/// │  ┌ circular   : `E = M` exactly, zero iterations
/// │  ├ elliptic   : reduce, split by sign, start, iterate, reflect
/// │  └ otherwise  : fail with [`ErrorCode::BadEccentricity`]
/// └ return `(result, status)`
pub fn solve_kepler_equation(
    ecc: f64,
    ma: f64,
    starter: StarterMethod,
    solver: SolverMethod,
    params: &mut IterationParameters,
) -> (f64, ErrorCode) {
    params.reset_outputs();

    if check_value(ecc).is_err() || check_value(ma).is_err() {
        return (0.0, ErrorCode::BadValue);
    }

    params.sanitize();

    match classify(ecc) {
        EccentricityDomain::Circular => {
            // exact solution, no iteration
            params.result = ma;
            (ma, ErrorCode::None)
        }
        EccentricityDomain::Elliptic => solve_elliptic(ecc, ma, starter, solver, params),
        EccentricityDomain::Invalid
        | EccentricityDomain::Parabolic
        | EccentricityDomain::Hyperbolic => (0.0, ErrorCode::BadEccentricity),
    }
}

/// Elliptic-domain solve on the reduced mean anomaly.
///
/// The mean anomaly is reduced to `(-pi, pi]`; a negative reduced value is
/// solved as `|M|` and the result reflected to `2*pi - E` afterwards, so
/// every solver only ever sees `M` in `[0, pi]`.
fn solve_elliptic(
    ecc: f64,
    ma: f64,
    starter: StarterMethod,
    solver: SolverMethod,
    params: &mut IterationParameters,
) -> (f64, ErrorCode) {
    let mut status = ErrorCode::None;

    let mut redma = reduce(ma);
    let negative = redma < 0.0;
    if negative {
        redma = -redma;
    }

    // Nijenhuis' region A/B/C refinement is built around the composite
    // bound S7, so the requested starter is overridden there
    let requested = if solver == SolverMethod::Nijenhuis {
        StarterMethod::S7
    } else {
        starter
    };

    params.starter = match requested.estimate(ecc, redma) {
        Ok(x0) => x0,
        Err(_) => {
            // non-fatal: keep solving with the safe fallback
            status = ErrorCode::BadStarterMethod;
            debug!("unusable starter method, falling back to M + e");
            redma + ecc
        }
    };

    trace!(
        "dispatch: e = {ecc}, M = {ma} -> {redma}, starter = {}",
        params.starter
    );

    match solver.run(ecc, redma, params.starter, params) {
        Ok(count) => params.iterations = count,
        Err(code) => return (0.0, code),
    }

    if negative {
        params.result = TAU - params.result;
    }

    (params.result, status)
}
