//! Fixed-point iteration `x <- M + e*sin(x)`.

use log::trace;

use crate::equation::eval_elliptic;
use crate::params::IterationParameters;
use crate::solver::residual_scale;

/// Iterates the contraction map `x <- M + e*sin(x)` from the starter.
///
/// Linear convergence with contraction rate `e`; slow for high
/// eccentricity, but unconditionally stable on the reduced range. The
/// step error lags one iteration behind the residual (`deltax(n+1) =
/// deltaf(n)` up to the scale factor), so the loop tests the residual
/// tolerance only.
pub(crate) fn solve(
    ecc: f64,
    ma: f64,
    starter: f64,
    params: &mut IterationParameters,
) -> usize {
    let corr = residual_scale(ecc);
    let mut count = 0;

    trace!("fixed_point: e = {ecc}, M = {ma}, x0 = {starter}");

    let mut x = starter;
    let mut deltax;
    let mut deltaf;

    loop {
        let xsave = x;

        x = ma + ecc * xsave.sin();

        let fx = eval_elliptic(ecc, ma, x);
        params.sin_evals += 1;
        params.fn_evals += 1;

        count += 1;

        deltax = (x - xsave).abs();
        deltaf = fx.abs() * corr;

        if deltaf <= params.tol_f() || count >= params.max_iter() {
            break;
        }
    }

    params.result = x;
    params.residual_error = deltaf;
    params.step_error = deltax;

    count
}
