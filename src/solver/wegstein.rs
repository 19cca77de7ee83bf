//! Wegstein's secant acceleration of the fixed-point map.
//!
//! Wegstein (1958), Comm. ACM 1(6), p.9: accelerate the fixed-point
//! iteration `y = g(x) = M + e*sin(x)` by a secant step through the two
//! most recent points of the map.

use log::trace;

use crate::equation::eval_elliptic;
use crate::params::IterationParameters;
use crate::solver::residual_scale;

/// Secant-accelerated fixed-point iteration.
///
/// Seeds with `(x0, g(x0))` from the starter and `(x1, g(x1))` with
/// `x1 = g(x0)`, then iterates the two-point update. Superlinear where
/// the plain fixed-point map is only linear.
pub(crate) fn solve(
    ecc: f64,
    ma: f64,
    starter: f64,
    params: &mut IterationParameters,
) -> usize {
    let corr = residual_scale(ecc);
    let mut count = 0;

    trace!("wegstein: e = {ecc}, M = {ma}, x0 = {starter}");

    let mut x0 = starter;
    let mut y0 = ma + ecc * x0.sin();
    params.sin_evals += 1;

    let mut x1 = y0;
    let mut y1 = ma + ecc * x1.sin();
    params.sin_evals += 1;

    let mut x2;
    let mut deltax;
    let mut deltaf;

    loop {
        x2 = x1 + (x1 - x0) / ((x0 - y0) / (x1 - y1) - 1.0);
        let y2 = ma + ecc * x2.sin();
        params.sin_evals += 1;

        count += 1;

        deltax = (x1 - x2).abs();
        deltaf = eval_elliptic(ecc, ma, x2).abs() * corr;
        params.sin_evals += 1;
        params.fn_evals += 1;

        x0 = x1;
        x1 = x2;
        y0 = y1;
        y1 = y2;

        if deltax <= params.tol_x() || deltaf <= params.tol_f() || count >= params.max_iter() {
            break;
        }
    }

    params.result = x2;
    params.residual_error = deltaf;
    params.step_error = deltax;

    count
}
