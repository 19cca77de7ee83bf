//! Bisection (interval halving) over the bracket `[M, M + e]`.

use log::trace;

use crate::equation::eval_elliptic;
use crate::params::IterationParameters;
use crate::solver::residual_scale;

/// Halves the bracket `[M, M + e]` until one tolerance is met.
///
/// The root of the elliptic equation is always inside `[M, M + e]` for a
/// reduced mean anomaly, so the dispatched starter is ignored. Degenerate
/// brackets and endpoint roots short-circuit with a count of 1.
pub(crate) fn solve(
    ecc: f64,
    ma: f64,
    starter: f64,
    params: &mut IterationParameters,
) -> usize {
    let corr = residual_scale(ecc);
    let mut count = 0;

    trace!("bisection: e = {ecc}, M = {ma}, x0 = {starter} (ignored)");

    let mut xl = ma;
    let mut xr = ma + ecc;
    let mut deltax = (xr - xl).abs();
    let mut deltaf;

    // bracket already narrower than the step tolerance
    if deltax < params.tol_x() {
        params.result = 0.5 * (xl + xr);
        return 1;
    }

    let mut fl = eval_elliptic(ecc, ma, xl);
    params.sin_evals += 1;
    params.fn_evals += 1;
    if fl.abs() < params.tol_f() {
        params.result = xl;
        return 1;
    }

    let fr = eval_elliptic(ecc, ma, xr);
    params.sin_evals += 1;
    params.fn_evals += 1;
    if fr.abs() < params.tol_f() {
        params.result = xr;
        return 1;
    }

    let mut x;
    loop {
        x = 0.5 * (xl + xr);

        let fx = eval_elliptic(ecc, ma, x);
        params.sin_evals += 1;
        params.fn_evals += 1;

        // keep the half that still brackets the sign change
        if fl * fx < 0.0 {
            xr = x;
        } else {
            xl = x;
            fl = fx;
        }

        count += 1;

        deltax = (xr - xl).abs();
        deltaf = fx.abs() * corr;

        if deltax <= params.tol_x() || deltaf <= params.tol_f() || count >= params.max_iter() {
            break;
        }
    }

    params.result = x;
    params.residual_error = deltaf;
    params.step_error = deltax;

    count
}
