//! Two-point secant iteration seeded from the bracket `[M, M + e]`.

use log::trace;

use crate::equation::eval_elliptic;
use crate::params::IterationParameters;
use crate::solver::residual_scale;

/// Secant iteration from the endpoints of `[M, M + e]`.
///
/// Like bisection, the dispatched starter is ignored in favor of the two
/// bracket endpoints; degenerate brackets and endpoint roots
/// short-circuit with a count of 1. After the seed step the method is a
/// free two-point secant, not a regula falsi, so the iterates may leave
/// the initial bracket.
pub(crate) fn solve(
    ecc: f64,
    ma: f64,
    starter: f64,
    params: &mut IterationParameters,
) -> usize {
    let corr = residual_scale(ecc);
    let mut count = 0;

    trace!("secant: e = {ecc}, M = {ma}, x0 = {starter} (ignored)");

    let mut xl = ma;
    let mut xr = ma + ecc;
    let mut deltax = (xr - xl).abs();
    let mut deltaf;

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

    let mut fr = eval_elliptic(ecc, ma, xr);
    params.sin_evals += 1;
    params.fn_evals += 1;
    if fr.abs() < params.tol_f() {
        params.result = xr;
        return 1;
    }

    let mut x;
    loop {
        x = (fr * xl - fl * xr) / (fr - fl);

        let fx = eval_elliptic(ecc, ma, x);
        params.sin_evals += 1;
        params.fn_evals += 1;

        xl = xr;
        fl = fr;
        xr = x;
        fr = fx;

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
